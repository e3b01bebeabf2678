use super::Translation;

pub(super) const EN: Translation = Translation {
    app_title: "LLM Metrics Dashboard",

    tab_overview: "Overview",
    tab_streamed: "Streamed Requests",
    tab_non_streamed: "Non-streamed Requests",

    basic_statistics: "Basic Statistics",
    performance_metrics: "Performance Metrics",
    token_usage: "Token Usage",
    model_usage: "Model Usage",
    request_sources: "Request Sources",

    total_completion_requests: "Total Completion Requests",
    successful_requests: "Successful Requests",
    failed_requests: "Failed Requests",
    success_rate: "Success Rate",
    streaming_percentage: "Streaming Percentage",
    total_tokens_used: "Total Tokens Used",
    avg_tokens_per_request: "Average Tokens per Request",
    avg_response_time: "Average Response Time",
    avg_tokens_per_second: "Average Tokens per Second",
    time_to_first_token: "Time to First Token",
    time_to_last_token: "Time to Last Token",
    streamed_requests_count: "Streamed Requests",
    streamed_requests_percent: "Percent of Total",
    non_streamed_requests_count: "Non-streamed Requests",
    non_streamed_requests_percent: "Percent of Total",
    tokens_per_request: "Tokens per Request",

    requests_chart_title: "Requests",
    requests_chart_y_axis: "Number of Requests",
    response_time_chart_title: "Response Time",
    response_time_chart_y_axis: "Response Time (ms)",

    last_updated: "Last Updated",
    refresh_now: "Refresh Now",
    requests_unit: "requests",
    tokens_per_second_unit: "tokens/s",
    no_metrics_data: "No metrics data available",
};
