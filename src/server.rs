// Card Collector - Web Server
// HTML pages plus a small read-only JSON API, built with Axum

use crate::analytics::{AnalyticsSnapshot, MetricsProvider, RandomMetrics};
use crate::config::AppConfig;
use crate::entities::{Category, ConditionGrade};
use crate::form::{log_submission, AddCardForm, CardFormInput};
use crate::views;
use axum::{
    extract::{Path, Query, State},
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Json},
    routing::get,
    Form, Router,
};
use serde::Serialize;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub metrics: Arc<dyn MetricsProvider + Send + Sync>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self::with_metrics(config, RandomMetrics::new())
    }

    pub fn with_metrics<M>(config: AppConfig, metrics: M) -> Self
    where
        M: MetricsProvider + Send + Sync + 'static,
    {
        AppState {
            config: Arc::new(config),
            metrics: Arc::new(metrics),
        }
    }
}

/// API Response wrapper
#[derive(Serialize)]
pub struct ApiResponse<T> {
    success: bool,
    data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<T> ApiResponse<T> {
    fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
            error: None,
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

// ============================================================================
// API Handlers
// ============================================================================

/// GET /api/health-check - Health check
async fn health_check() -> impl IntoResponse {
    Json(HealthResponse { status: "healthy" })
}

/// GET /api/categories - Configured categories
async fn list_categories(State(state): State<AppState>) -> Json<ApiResponse<Vec<Category>>> {
    Json(ApiResponse::ok(state.config.categories.all().to_vec()))
}

/// GET /api/conditions - Configured condition grades
async fn list_conditions(State(state): State<AppState>) -> Json<ApiResponse<Vec<ConditionGrade>>> {
    Json(ApiResponse::ok(state.config.conditions.all().to_vec()))
}

// ============================================================================
// Page Handlers
// ============================================================================

/// GET / - Home
async fn serve_home(State(state): State<AppState>) -> Html<String> {
    Html(views::home::render(&state.config))
}

/// GET /collections - Categories with subcategory counts
async fn serve_collections(State(state): State<AppState>) -> Html<String> {
    Html(views::collections::render(&state.config))
}

/// GET /collections/:category_id - Per-category page (not built yet)
async fn serve_category(
    State(state): State<AppState>,
    Path(category_id): Path<String>,
) -> (StatusCode, Html<String>) {
    match state.config.categories.find_by_id(&category_id) {
        Some(category) => {
            tracing::debug!(category = %category_id, "per-category view requested");
            (
                StatusCode::NOT_IMPLEMENTED,
                Html(views::category_unavailable(&state.config, category)),
            )
        }
        None => (
            StatusCode::NOT_FOUND,
            Html(views::not_found(
                &state.config,
                &format!("/collections/{}", category_id),
            )),
        ),
    }
}

/// GET /cards/add - Empty form, or a partially filled one carried in the
/// query string when the category selection changes
async fn serve_add_card(
    State(state): State<AppState>,
    Query(input): Query<CardFormInput>,
) -> Html<String> {
    let form = AddCardForm::with_input(&state.config, input);
    Html(views::add_card::render(&form, None))
}

/// POST /cards/add - Validate and log
async fn submit_add_card(
    State(state): State<AppState>,
    Form(input): Form<CardFormInput>,
) -> (StatusCode, Html<String>) {
    let mut form = AddCardForm::with_input(&state.config, input);

    match form.submit(log_submission) {
        Ok(submission) => {
            tracing::info!(name = %submission.name, "card form accepted");
            form.reset();
            let notice = format!("\"{}\" was recorded in the log.", submission.name);
            (
                StatusCode::OK,
                Html(views::add_card::render(&form, Some(notice.as_str()))),
            )
        }
        Err(_) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Html(views::add_card::render(&form, None)),
        ),
    }
}

/// GET /analytics - Fresh placeholder numbers on every request
async fn serve_analytics(State(state): State<AppState>) -> Html<String> {
    let snapshot = AnalyticsSnapshot::collect(&state.config, state.metrics.as_ref());
    Html(views::analytics::render(&state.config, &snapshot))
}

async fn fallback(State(state): State<AppState>, uri: Uri) -> (StatusCode, Html<String>) {
    (
        StatusCode::NOT_FOUND,
        Html(views::not_found(&state.config, uri.path())),
    )
}

// ============================================================================
// Router
// ============================================================================

pub fn router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/health-check", get(health_check))
        .route("/categories", get(list_categories))
        .route("/conditions", get(list_conditions));

    Router::new()
        .route("/", get(serve_home))
        .route("/collections", get(serve_collections))
        .route("/collections/:category_id", get(serve_category))
        .route("/cards/add", get(serve_add_card).post(submit_add_card))
        .route("/analytics", get(serve_analytics))
        .nest("/api", api_routes)
        .nest_service("/static", ServeDir::new("web"))
        .fallback(fallback)
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::FixedMetrics;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request};
    use tower::ServiceExt;

    fn test_app() -> Router {
        router(AppState::with_metrics(
            AppConfig::default(),
            FixedMetrics::uniform(30),
        ))
    }

    async fn send(app: Router, req: Request<Body>) -> (StatusCode, String) {
        let resp = app.oneshot(req).await.unwrap();
        let status = resp.status();
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    async fn get_path(path: &str) -> (StatusCode, String) {
        let req = Request::builder().uri(path).body(Body::empty()).unwrap();
        send(test_app(), req).await
    }

    async fn post_form(body: &str) -> (StatusCode, String) {
        let req = Request::builder()
            .method("POST")
            .uri("/cards/add")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap();
        send(test_app(), req).await
    }

    #[tokio::test]
    async fn test_health_check() {
        let (status, body) = get_path("/api/health-check").await;

        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json, serde_json::json!({ "status": "healthy" }));
    }

    #[tokio::test]
    async fn test_api_categories() {
        let (status, body) = get_path("/api/categories").await;

        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["data"].as_array().unwrap().len(), 3);
        assert!(json.get("error").is_none());
    }

    #[tokio::test]
    async fn test_api_conditions() {
        let (_, body) = get_path("/api/conditions").await;

        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["data"][0]["name"], "Mint");
        assert_eq!(json["data"][5]["name"], "Poor");
    }

    #[tokio::test]
    async fn test_pages_render() {
        for (path, marker) in [
            ("/", "<h1>Card Collector</h1>"),
            ("/collections", "<h1>My Collections</h1>"),
            ("/cards/add", "<h1>Add Card</h1>"),
            ("/analytics", "<h1>Collection Analytics</h1>"),
        ] {
            let (status, body) = get_path(path).await;
            assert_eq!(status, StatusCode::OK, "{}", path);
            assert!(body.contains(marker), "{}", path);
        }
    }

    #[tokio::test]
    async fn test_analytics_uses_injected_metrics() {
        let (_, body) = get_path("/analytics").await;

        assert!(body.contains("$16.67"));
        assert!(body.contains("style=\"width: 20.00%\""));
    }

    #[tokio::test]
    async fn test_category_route_is_extension_point() {
        let (status, body) = get_path("/collections/pokemon").await;
        assert_eq!(status, StatusCode::NOT_IMPLEMENTED);
        assert!(body.contains("Pokémon"));

        let (status, _) = get_path("/collections/stamps").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_unknown_route_404() {
        let (status, body) = get_path("/nope").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("<code>/nope</code>"));
    }

    #[tokio::test]
    async fn test_add_card_query_refreshes_subcategories() {
        let (status, body) = get_path("/cards/add?category=sports&subcategory=Jungle&name=Ohtani").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<option value=\"Baseball\">"));
        assert!(!body.contains("<option value=\"Jungle\""));
        assert!(body.contains("value=\"Ohtani\""));
    }

    #[tokio::test]
    async fn test_submit_missing_name() {
        let (status, body) =
            post_form("name=&category=pokemon&subcategory=Jungle&condition=mint").await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body.contains("Card name is required"));
        assert!(!body.contains("class=\"notice\""));
    }

    #[tokio::test]
    async fn test_submit_negative_price() {
        let (status, body) = post_form(
            "name=Pikachu&category=pokemon&subcategory=Jungle&condition=mint&purchase_price=-1",
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body.contains("Purchase price must be at least 0"));
    }

    #[tokio::test]
    async fn test_submit_valid_card() {
        let (status, body) = post_form(
            "name=Pikachu&category=pokemon&subcategory=Jungle&condition=mint&purchase_price=12.5&purchase_date=2024-01-02&notes=",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("&quot;Pikachu&quot; was recorded in the log."));
        assert!(!body.contains("field-error"));
    }
}
