use super::Translation;

pub(super) const DE: Translation = Translation {
    app_title: "LLM Metriken Dashboard",

    tab_overview: "Übersicht",
    tab_streamed: "Streaming Anfragen",
    tab_non_streamed: "Nicht-Streaming Anfragen",

    basic_statistics: "Grundlegende Statistiken",
    performance_metrics: "Leistungsmetriken",
    token_usage: "Token Verbrauch",
    model_usage: "Modell Verwendung",
    request_sources: "Anfragequellen",

    total_completion_requests: "Gesamte Vervollständigungsanfragen",
    successful_requests: "Erfolgreiche Anfragen",
    failed_requests: "Fehlgeschlagene Anfragen",
    success_rate: "Erfolgsrate",
    streaming_percentage: "Streaming Prozentsatz",
    total_tokens_used: "Gesamte verwendete Tokens",
    avg_tokens_per_request: "Durchschnittliche Tokens pro Anfrage",
    avg_response_time: "Durchschnittliche Antwortzeit",
    avg_tokens_per_second: "Durchschnittliche Tokens pro Sekunde",
    time_to_first_token: "Zeit bis zum ersten Token",
    time_to_last_token: "Zeit bis zum letzten Token",
    streamed_requests_count: "Streaming Anfragen",
    streamed_requests_percent: "Prozent der Gesamten",
    non_streamed_requests_count: "Nicht-Streaming Anfragen",
    non_streamed_requests_percent: "Prozent der Gesamten",
    tokens_per_request: "Tokens pro Anfrage",

    requests_chart_title: "Anfragen",
    requests_chart_y_axis: "Anzahl der Anfragen",
    response_time_chart_title: "Antwortzeit",
    response_time_chart_y_axis: "Antwortzeit (ms)",

    last_updated: "Zuletzt aktualisiert",
    refresh_now: "Jetzt aktualisieren",
    requests_unit: "Anfragen",
    tokens_per_second_unit: "Tokens/s",
    no_metrics_data: "Keine Metrikdaten verfügbar",
};
