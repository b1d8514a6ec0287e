use crate::core::matcher::Matcher;
use crate::core::parser::parse_grocery_list;
use crate::core::pricing::PricingEngine;
use crate::core::{Catalog, ConfigProvider, RequestResult};
use crate::utils::error::{PricerError, Result};
use crate::utils::monitor::SystemMonitor;
use crate::utils::validation::validate_non_empty_string;
use crate::web::pages;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, Json};
use axum::routing::{get, post};
use axum::{Form, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub engine: Arc<PricingEngine>,
    pub monitor: Arc<SystemMonitor>,
}

impl AppState {
    pub fn new<C: ConfigProvider>(catalog: Catalog, config: &C, monitor: SystemMonitor) -> Self {
        let matcher = Matcher::new(config.max_suggestions(), config.similarity_cutoff());
        Self {
            catalog: Arc::new(catalog),
            engine: Arc::new(PricingEngine::new(matcher)),
            monitor: Arc::new(monitor),
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index).post(calculate))
        .route("/api/quote", post(quote))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(Debug, Deserialize)]
pub struct CalculateForm {
    #[serde(default)]
    pub store: String,
    #[serde(default)]
    pub grocery_list: String,
}

#[derive(Debug, Deserialize)]
pub struct QuoteRequest {
    #[serde(default)]
    pub store: String,
    #[serde(default)]
    pub grocery_list: String,
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

async fn index() -> Html<String> {
    Html(pages::home_page(None, None))
}

async fn calculate(State(state): State<AppState>, Form(form): Form<CalculateForm>) -> Html<String> {
    if let Err(e) = validate_submission(&form.store, &form.grocery_list) {
        return Html(pages::home_page(Some(&e.user_friendly_message()), None));
    }

    let list = parse_grocery_list(&form.grocery_list);
    let result = state.engine.price(&state.catalog, &form.store, &list);

    tracing::debug!(
        "Priced {} lines for store '{}', total {}",
        result.lines.len(),
        result.store,
        result.total
    );
    state.monitor.log_stats("Request served");

    Html(pages::home_page(None, Some(&result)))
}

async fn quote(
    State(state): State<AppState>,
    Json(request): Json<QuoteRequest>,
) -> (StatusCode, Json<ApiResponse<RequestResult>>) {
    if let Err(e) = validate_submission(&request.store, &request.grocery_list) {
        let response = ApiResponse {
            success: false,
            data: None,
            error: Some(e.user_friendly_message()),
        };
        return (StatusCode::UNPROCESSABLE_ENTITY, Json(response));
    }

    let list = parse_grocery_list(&request.grocery_list);
    let result = state.engine.price(&state.catalog, &request.store, &list);
    state.monitor.log_stats("Request served");

    let response = ApiResponse {
        success: true,
        data: Some(result),
        error: None,
    };
    (StatusCode::OK, Json(response))
}

/// Both form fields are required; parsing only proceeds once they hold
/// something beyond whitespace.
fn validate_submission(store: &str, grocery_list: &str) -> Result<()> {
    if validate_non_empty_string("store", store).is_err() {
        return Err(PricerError::ValidationError {
            message: "Please enter a store name.".to_string(),
        });
    }
    if validate_non_empty_string("grocery_list", grocery_list).is_err() {
        return Err(PricerError::ValidationError {
            message: "Please enter a grocery list.".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_submission() {
        assert!(validate_submission("winco", "bacon, 1").is_ok());
        assert!(validate_submission("", "bacon, 1").is_err());
        assert!(validate_submission("winco", "   ").is_err());
    }
}
