// Router assembly
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    chart_data, dashboard_page, health_check, list_sites, toggle_row,
};
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(dashboard_page))
        .route("/rows/:index/toggle", get(toggle_row))
        .route("/healthz", get(health_check))
        .route("/api/chart", get(chart_data))
        .route("/api/sites", get(list_sites))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dashboard_service::DashboardService;
    use crate::infrastructure::memory_repository::InMemorySiteRepository;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use axum::response::Response;
    use tower::ServiceExt;

    async fn router() -> Router {
        let repository = Arc::new(InMemorySiteRepository::from_configured(Vec::new()));
        let dashboard_service = DashboardService::load(repository, "Navi Dashboard".to_string())
            .await
            .unwrap();
        build_router(Arc::new(AppState { dashboard_service }))
    }

    async fn get(uri: &str) -> Response {
        router()
            .await
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn location(response: &Response) -> Option<&str> {
        response
            .headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
    }

    #[tokio::test]
    async fn test_row_links_follow_through_toggle_route() {
        let response = get("/").await;
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains(r#"<a href="/rows/0/toggle">"#));

        let response = get("/rows/0/toggle").await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), Some("/?expanded=0"));

        let response = get("/?expanded=0").await;
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert_eq!(html.matches(r#"<tr class="details-row">"#).count(), 1);
        assert!(html.contains(r#"<a href="/rows/1/toggle?expanded=0">"#));
    }

    #[tokio::test]
    async fn test_toggle_route_moves_and_closes() {
        let response = get("/rows/1/toggle?expanded=0").await;
        assert_eq!(location(&response), Some("/?expanded=1"));

        let response = get("/rows/0/toggle?expanded=0").await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), Some("/"));
    }

    #[tokio::test]
    async fn test_bad_rows_are_rejected() {
        assert_eq!(get("/?expanded=2").await.status(), StatusCode::BAD_REQUEST);
        assert_eq!(get("/rows/2/toggle").await.status(), StatusCode::BAD_REQUEST);
        assert_eq!(get("/rows/x/toggle").await.status(), StatusCode::BAD_REQUEST);
        assert_eq!(get("/?expanded=x").await.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_api_routes() {
        let response = get("/api/chart").await;
        assert_eq!(response.status(), StatusCode::OK);
        let chart: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(chart["labels"].as_array().map(Vec::len), Some(6));
        assert_eq!(chart["datasets"][1]["label"], "https://another.com");

        let response = get("/api/sites").await;
        assert_eq!(response.status(), StatusCode::OK);
        let sites: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(sites[0]["overall"], 81);

        let response = get("/healthz").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "ok");
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        assert_eq!(get("/rows/0").await.status(), StatusCode::NOT_FOUND);
    }
}
