use super::Translation;

pub(super) const FR: Translation = Translation {
    app_title: "Tableau de Bord des Métriques LLM",

    tab_overview: "Vue d'ensemble",
    tab_streamed: "Requêtes en Streaming",
    tab_non_streamed: "Requêtes Non-Streaming",

    basic_statistics: "Demandes de Complétion",
    performance_metrics: "Métriques de Performance",
    token_usage: "Utilisation des Tokens",
    model_usage: "Utilisation des Modèles",
    request_sources: "Sources des Requêtes",

    total_completion_requests: "Total des Requêtes de Complétion",
    successful_requests: "Requêtes Réussies",
    failed_requests: "Requêtes Échouées",
    success_rate: "Taux de Réussite",
    streaming_percentage: "Pourcentage de Streaming",
    total_tokens_used: "Total des Jetons Utilisés",
    avg_tokens_per_request: "Moyenne des Jetons par Demande",
    avg_response_time: "Temps de Réponse Moyen",
    avg_tokens_per_second: "Vitesse Moyenne d'Inférence",
    time_to_first_token: "Temps jusqu'au Premier Jeton",
    time_to_last_token: "Temps jusqu'au Dernier Jeton",
    streamed_requests_count: "Demandes en Streaming",
    streamed_requests_percent: "Pourcentage du Total",
    non_streamed_requests_count: "Demandes Non-Streaming",
    non_streamed_requests_percent: "Pourcentage du Total",
    tokens_per_request: "Jetons par Demande",

    requests_chart_title: "Requêtes",
    requests_chart_y_axis: "Nombre de Requêtes",
    response_time_chart_title: "Temps de Réponse",
    response_time_chart_y_axis: "Temps de Réponse (ms)",

    last_updated: "Dernière Mise à Jour",
    refresh_now: "Actualiser Maintenant",
    requests_unit: "requêtes",
    tokens_per_second_unit: "TPS",
    no_metrics_data: "Aucune donnée de métriques disponible",
};
