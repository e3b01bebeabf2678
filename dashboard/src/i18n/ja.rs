use super::Translation;

pub(super) const JA: Translation = Translation {
    app_title: "LLM メトリクスダッシュボード",

    tab_overview: "概要",
    tab_streamed: "ストリーミングリクエスト",
    tab_non_streamed: "非ストリーミングリクエスト",

    basic_statistics: "基本統計",
    performance_metrics: "パフォーマンスメトリクス",
    token_usage: "トークン使用量",
    model_usage: "モデル使用状況",
    request_sources: "リクエストソース",

    total_completion_requests: "完了リクエスト総数",
    successful_requests: "成功リクエスト",
    failed_requests: "失敗リクエスト",
    success_rate: "成功率",
    streaming_percentage: "ストリーミング割合",
    total_tokens_used: "使用トークン総数",
    avg_tokens_per_request: "リクエストあたりの平均トークン数",
    avg_response_time: "平均応答時間",
    avg_tokens_per_second: "1秒あたりの平均トークン数",
    time_to_first_token: "最初のトークンまでの時間",
    time_to_last_token: "最後のトークンまでの時間",
    streamed_requests_count: "ストリーミングリクエスト",
    streamed_requests_percent: "総数に対する割合",
    non_streamed_requests_count: "非ストリーミングリクエスト",
    non_streamed_requests_percent: "総数に対する割合",
    tokens_per_request: "リクエストあたりのトークン数",

    requests_chart_title: "リクエスト",
    requests_chart_y_axis: "リクエスト数",
    response_time_chart_title: "応答時間",
    response_time_chart_y_axis: "応答時間 (ms)",

    last_updated: "最終更新",
    refresh_now: "今すぐ更新",
    requests_unit: "リクエスト",
    tokens_per_second_unit: "トークン/秒",
    no_metrics_data: "メトリクスデータが利用できません",
};
