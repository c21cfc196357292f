use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
    response::Response,
};
use serde_json::{Value, json};
use tower::ServiceExt;

use studypod::{
    AppState,
    api::routes::{BANNER, create_router},
    config::Config,
    store::InMemoryStore,
};

fn app() -> Router {
    let config = Config {
        server_addr: "127.0.0.1:0".parse().unwrap(),
        openai_api_key: None,
    };
    create_router(AppState::new(config, InMemoryStore::seeded()))
}

async fn body_text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap_or_else(|err| panic!("failed to read response body: {err}"));
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn body_json(response: Response) -> Value {
    let body = body_text(response).await;
    serde_json::from_str(&body).unwrap_or_else(|err| panic!("not JSON: {err}; body={body}"))
}

async fn send(app: &Router, request: Request<Body>) -> Response {
    app.clone().oneshot(request).await.unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).method("GET").body(Body::empty()).unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).method("DELETE").body(Body::empty()).unwrap()
}

fn post_json(body: Value) -> Request<Body> {
    Request::builder()
        .uri("/podcast-summary")
        .method("POST")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn list(app: &Router) -> Vec<Value> {
    let response = send(app, get("/podcast-summary")).await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await["podcastSummaries"]
        .as_array()
        .cloned()
        .unwrap()
}

fn ids(summaries: &[Value]) -> Vec<i64> {
    summaries.iter().map(|s| s["id"].as_i64().unwrap()).collect()
}

#[tokio::test]
async fn root_serves_banner() {
    let response = send(&app(), get("/")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, BANNER);
}

#[tokio::test]
async fn fresh_service_lists_seed_records_in_order() {
    let summaries = list(&app()).await;
    assert_eq!(ids(&summaries), [1, 2, 3]);
    assert_eq!(summaries[0]["title"], "Introduction to Physics");
    assert_eq!(summaries[1]["title"], "Advanced Mathematics");
    assert_eq!(summaries[2]["title"], "History Overview");
    assert!(summaries[0]["textContent"].as_str().unwrap().contains("Newton"));
}

#[tokio::test]
async fn create_appends_record_and_returns_full_list() {
    let app = app();
    let response = send(&app, post_json(json!({ "title": "T", "textContent": "C" }))).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let summaries = body_json(response).await["podcastSummaries"].as_array().cloned().unwrap();
    assert_eq!(ids(&summaries), [1, 2, 3, 4]);
    assert_eq!(summaries[3], json!({ "id": 4, "title": "T", "textContent": "C" }));

    assert_eq!(list(&app).await.len(), 4);
}

#[tokio::test]
async fn create_without_required_fields_is_rejected() {
    let app = app();
    for body in [
        json!({ "textContent": "C" }),
        json!({ "title": "T" }),
        json!({ "title": "", "textContent": "C" }),
        json!({ "title": "T", "textContent": null }),
    ] {
        let response = send(&app, post_json(body)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "Title and content are required" })
        );
    }
    assert_eq!(list(&app).await.len(), 3);
}

#[tokio::test]
async fn malformed_body_is_a_bad_request() {
    let app = app();
    let request = Request::builder()
        .uri("/podcast-summary")
        .method("POST")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = send(&app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(response).await["error"].is_string());
    assert_eq!(list(&app).await.len(), 3);
}

#[tokio::test]
async fn delete_removes_record_once() {
    let app = app();
    let response = send(&app, delete("/podcast-summary/2")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["message"], "Podcast deleted");
    assert_eq!(ids(body["podcastSummaries"].as_array().unwrap()), [1, 3]);

    let response = send(&app, delete("/podcast-summary/2")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await, json!({ "error": "Podcast not found" }));
}

#[tokio::test]
async fn delete_of_unknown_or_non_numeric_id_is_not_found() {
    let app = app();
    for uri in ["/podcast-summary/99", "/podcast-summary/abc"] {
        let response = send(&app, delete(uri)).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
    assert_eq!(ids(&list(&app).await), [1, 2, 3]);
}

#[tokio::test]
async fn delete_reads_the_leading_integer_of_the_id_segment() {
    let app = app();
    let response = send(&app, delete("/podcast-summary/2abc")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(ids(body_json(response).await["podcastSummaries"].as_array().unwrap()), [1, 3]);
}

#[tokio::test]
async fn ids_stay_unique_after_delete_and_create() {
    let app = app();
    send(&app, delete("/podcast-summary/1")).await;
    let response = send(&app, post_json(json!({ "title": "New", "textContent": "Body" }))).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    assert_eq!(ids(&list(&app).await), [2, 3, 4]);
}

#[tokio::test]
async fn responses_allow_any_origin() {
    let request = Request::builder()
        .uri("/podcast-summary")
        .method("GET")
        .header(header::ORIGIN, "http://localhost:5173")
        .body(Body::empty())
        .unwrap();

    let response = send(&app(), request).await;
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "*"
    );
}
