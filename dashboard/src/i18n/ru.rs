use super::Translation;

pub(super) const RU: Translation = Translation {
    app_title: "Панель метрик LLM",

    tab_overview: "Обзор",
    tab_streamed: "Потоковые запросы",
    tab_non_streamed: "Непотоковые запросы",

    basic_statistics: "Запросы на завершение",
    performance_metrics: "Метрики производительности",
    token_usage: "Использование токенов",
    model_usage: "Использование моделей",
    request_sources: "Источники запросов",

    total_completion_requests: "Общее количество запросов на завершение",
    successful_requests: "Успешные запросы",
    failed_requests: "Неудачные запросы",
    success_rate: "Процент успеха",
    streaming_percentage: "Процент потоков",
    total_tokens_used: "Общее количество использованных токенов",
    avg_tokens_per_request: "Среднее количество токенов на запрос",
    avg_response_time: "Среднее время ответа",
    avg_tokens_per_second: "Средняя скорость вывода",
    time_to_first_token: "Время до первого токена",
    time_to_last_token: "Время до последнего токена",
    streamed_requests_count: "Потоковые запросы",
    streamed_requests_percent: "Процент от общего числа",
    non_streamed_requests_count: "Непотоковые запросы",
    non_streamed_requests_percent: "Процент от общего числа",
    tokens_per_request: "Токены на запрос",

    requests_chart_title: "Запросы",
    requests_chart_y_axis: "Количество запросов",
    response_time_chart_title: "Время ответа",
    response_time_chart_y_axis: "Время ответа (мс)",

    last_updated: "Последнее обновление",
    refresh_now: "Обновить сейчас",
    requests_unit: "запросов",
    tokens_per_second_unit: "TPS",
    no_metrics_data: "Данные метрик недоступны",
};
