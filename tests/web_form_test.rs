use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use grocery_pricer::core::catalog::parse_catalog;
use grocery_pricer::utils::monitor::SystemMonitor;
use grocery_pricer::{create_router, AppConfig, AppState};
use http_body_util::BodyExt;
use tower::ServiceExt;

const CATALOG_CSV: &str = "\
store,item,price_per_unit,unit
winco,bacon,5.99,lb
winco,broccoli,1.49,lb
";

fn test_router() -> axum::Router {
    let catalog = parse_catalog(CATALOG_CSV.as_bytes()).unwrap();
    let config = AppConfig {
        catalog_path: "prices.csv".to_string(),
        bind_addr: "127.0.0.1:0".to_string(),
        max_suggestions: 3,
        similarity_cutoff: 0.6,
        verbose: false,
        monitor: false,
    };
    let state = AppState::new(catalog, &config, SystemMonitor::new(false));
    create_router(state)
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn test_get_shows_empty_form() {
    let response = test_router()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Grocery Price Calculator"));
    assert!(html.contains("<form method=\"POST\">"));
    assert!(!html.contains("Results for"));
}

#[tokio::test]
async fn test_post_returns_results_with_form() {
    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header(
            header::CONTENT_TYPE,
            "application/x-www-form-urlencoded",
        )
        .body(Body::from(
            "store=Winco&grocery_list=bacon%2C+1%0Abakon%2C+2",
        ))
        .unwrap();

    let response = test_router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    // the form stays on the page alongside the results
    assert!(html.contains("<form method=\"POST\">"));
    assert!(html.contains("Results for Winco"));
    assert!(html.contains("Bacon (1 lb): $5.99"));
    assert!(html.contains("Total cost: $5.99"));
    assert!(html.contains("bakon (Did you mean: bacon?)"));
}

#[tokio::test]
async fn test_post_with_missing_store_shows_validation_message() {
    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header(
            header::CONTENT_TYPE,
            "application/x-www-form-urlencoded",
        )
        .body(Body::from("grocery_list=bacon%2C+1"))
        .unwrap();

    let response = test_router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains("Please enter a store name."));
    assert!(!html.contains("Results for"));
}

#[tokio::test]
async fn test_post_with_empty_list_shows_validation_message() {
    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header(
            header::CONTENT_TYPE,
            "application/x-www-form-urlencoded",
        )
        .body(Body::from("store=winco&grocery_list=++"))
        .unwrap();

    let response = test_router().oneshot(request).await.unwrap();
    let html = body_text(response).await;
    assert!(html.contains("Please enter a grocery list."));
}

#[tokio::test]
async fn test_quote_api_returns_structured_result() {
    let payload = serde_json::json!({
        "store": "winco",
        "grocery_list": "bacon, 1\nbroccoli, 2"
    });
    let request = Request::builder()
        .method("POST")
        .uri("/api/quote")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap();

    let response = test_router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["store"], "winco");
    assert_eq!(body["data"]["total"], "8.97");
    assert_eq!(body["data"]["lines"][0]["outcome"], "matched");
    assert_eq!(body["data"]["lines"][0]["cost"], "5.99");
    assert!(body["error"].is_null());
}

#[tokio::test]
async fn test_quote_api_rejects_empty_fields() {
    let payload = serde_json::json!({ "store": "", "grocery_list": "bacon, 1" });
    let request = Request::builder()
        .method("POST")
        .uri("/api/quote")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap();

    let response = test_router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(body["success"], false);
    assert!(body["data"].is_null());
    assert_eq!(body["error"], "Please enter a store name.");
}
