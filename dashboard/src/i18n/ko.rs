use super::Translation;

pub(super) const KO: Translation = Translation {
    app_title: "LLM 메트릭 대시보드",

    tab_overview: "개요",
    tab_streamed: "스트리밍 요청",
    tab_non_streamed: "비스트리밍 요청",

    basic_statistics: "기본 통계",
    performance_metrics: "성능 메트릭",
    token_usage: "토큰 사용량",
    model_usage: "모델 사용 현황",
    request_sources: "요청 소스",

    total_completion_requests: "완료 요청 총수",
    successful_requests: "성공한 요청",
    failed_requests: "실패한 요청",
    success_rate: "성공률",
    streaming_percentage: "스트리밍 비율",
    total_tokens_used: "사용된 토큰 총수",
    avg_tokens_per_request: "요청당 평균 토큰 수",
    avg_response_time: "평균 응답 시간",
    avg_tokens_per_second: "초당 평균 토큰 수",
    time_to_first_token: "첫 번째 토큰까지의 시간",
    time_to_last_token: "마지막 토큰까지의 시간",
    streamed_requests_count: "스트리밍 요청",
    streamed_requests_percent: "전체 대비 비율",
    non_streamed_requests_count: "비스트리밍 요청",
    non_streamed_requests_percent: "전체 대비 비율",
    tokens_per_request: "요청당 토큰 수",

    requests_chart_title: "요청",
    requests_chart_y_axis: "요청 수",
    response_time_chart_title: "응답 시간",
    response_time_chart_y_axis: "응답 시간 (ms)",

    last_updated: "마지막 업데이트",
    refresh_now: "지금 새로고침",
    requests_unit: "요청",
    tokens_per_second_unit: "토큰/초",
    no_metrics_data: "사용 가능한 메트릭 데이터가 없습니다",
};
