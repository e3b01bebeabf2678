use super::Translation;

pub(super) const ES: Translation = Translation {
    app_title: "Panel de Métricas LLM",

    tab_overview: "Resumen",
    tab_streamed: "Solicitudes en Streaming",
    tab_non_streamed: "Solicitudes No-Streaming",

    basic_statistics: "Estadísticas Básicas",
    performance_metrics: "Métricas de Rendimiento",
    token_usage: "Uso de Tokens",
    model_usage: "Uso de Modelos",
    request_sources: "Fuentes de Solicitudes",

    total_completion_requests: "Total de Solicitudes de Completado",
    successful_requests: "Solicitudes Exitosas",
    failed_requests: "Solicitudes Fallidas",
    success_rate: "Tasa de Éxito",
    streaming_percentage: "Porcentaje de Streaming",
    total_tokens_used: "Total de Tokens Utilizados",
    avg_tokens_per_request: "Promedio de Tokens por Solicitud",
    avg_response_time: "Tiempo de Respuesta Promedio",
    avg_tokens_per_second: "Promedio de Tokens por Segundo",
    time_to_first_token: "Tiempo hasta el Primer Token",
    time_to_last_token: "Tiempo hasta el Último Token",
    streamed_requests_count: "Solicitudes en Streaming",
    streamed_requests_percent: "Porcentaje del Total",
    non_streamed_requests_count: "Solicitudes No-Streaming",
    non_streamed_requests_percent: "Porcentaje del Total",
    tokens_per_request: "Tokens por Solicitud",

    requests_chart_title: "Solicitudes",
    requests_chart_y_axis: "Número de Solicitudes",
    response_time_chart_title: "Tiempo de Respuesta",
    response_time_chart_y_axis: "Tiempo de Respuesta (ms)",

    last_updated: "Última Actualización",
    refresh_now: "Actualizar Ahora",
    requests_unit: "solicitudes",
    tokens_per_second_unit: "tokens/s",
    no_metrics_data: "No hay datos de métricas disponibles",
};
