use super::Translation;

pub(super) const ZH: Translation = Translation {
    app_title: "LLM 指标仪表板",

    tab_overview: "概览",
    tab_streamed: "流式请求",
    tab_non_streamed: "非流式请求",

    basic_statistics: "完成请求",
    performance_metrics: "性能指标",
    token_usage: "令牌使用量",
    model_usage: "模型使用情况",
    request_sources: "请求来源",

    total_completion_requests: "完成请求总数",
    successful_requests: "成功请求",
    failed_requests: "失败请求",
    success_rate: "成功率",
    streaming_percentage: "流式比例",
    total_tokens_used: "使用令牌总数",
    avg_tokens_per_request: "每个请求的平均令牌数",
    avg_response_time: "平均响应时间",
    avg_tokens_per_second: "平均推理速度",
    time_to_first_token: "到第一个令牌的时间",
    time_to_last_token: "到最后一个令牌的时间",
    streamed_requests_count: "流式请求",
    streamed_requests_percent: "占总数的百分比",
    non_streamed_requests_count: "非流式请求",
    non_streamed_requests_percent: "占总数的百分比",
    tokens_per_request: "每个请求的令牌数",

    requests_chart_title: "请求",
    requests_chart_y_axis: "请求数量",
    response_time_chart_title: "响应时间",
    response_time_chart_y_axis: "响应时间 (ms)",

    last_updated: "最后更新",
    refresh_now: "立即刷新",
    requests_unit: "请求",
    tokens_per_second_unit: "TPS",
    no_metrics_data: "没有可用的指标数据",
};
