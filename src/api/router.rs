use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::health;
use super::state::AppState;
use super::v1;

/// Create the full router with application state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .nest("/v1", v1::create_v1_router())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::domain::FixedClock;
    use crate::infrastructure::schema::StorageSchemaStore;
    use crate::infrastructure::services::SchemaManager;
    use crate::infrastructure::storage::InMemoryStorage;

    const NOW: i64 = 1_700_000_000;

    fn app() -> Router {
        let store = StorageSchemaStore::new(
            Arc::new(InMemoryStorage::new()),
            Arc::new(InMemoryStorage::new()),
        );
        let manager = SchemaManager::new(Arc::new(store))
            .with_clock(Arc::new(FixedClock::new(NOW)));
        create_router(AppState::new(Arc::new(manager)))
    }

    fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = app()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_create_then_get_schema() {
        let app = app();

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/v1/schemas",
                json!({
                    "prompt_id": "p1",
                    "prompt_type": "Summarizer",
                    "prompt_text": "hello",
                    "response_schema": {"type": "object"}
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let body = body_json(response).await;
        assert_eq!(body["prompt_id"], "p1");
        assert_eq!(body["main_prompt"], "hello");
        assert_eq!(body["usage_count"], 0);
        assert_eq!(body["is_public"], false);
        assert_eq!(body["created_at"], NOW);

        let response = app
            .oneshot(Request::get("/v1/schemas/p1").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["prompt_title"], "Summarizer");
    }

    #[tokio::test]
    async fn test_get_missing_schema_is_404() {
        let response = app()
            .oneshot(
                Request::get("/v1/schemas/missing")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response).await;
        assert_eq!(body["error"]["type"], "not_found_error");
        assert_eq!(body["error"]["status"], 404);
    }

    #[tokio::test]
    async fn test_create_without_response_schema_is_422() {
        let response = app()
            .oneshot(json_request(
                "POST",
                "/v1/schemas",
                json!({
                    "prompt_id": "p1",
                    "prompt_text": "hello"
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body = body_json(response).await;
        assert_eq!(body["error"]["type"], "validation_error");
    }

    #[tokio::test]
    async fn test_duplicate_create_is_409() {
        let app = app();
        let request = json!({
            "prompt_id": "p1",
            "prompt_text": "hello",
            "response_schema": {"type": "object"}
        });

        let first = app
            .clone()
            .oneshot(json_request("POST", "/v1/schemas", request.clone()))
            .await
            .unwrap();
        assert_eq!(first.status(), StatusCode::CREATED);

        let second = app
            .oneshot(json_request("POST", "/v1/schemas", request))
            .await
            .unwrap();
        assert_eq!(second.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_update_merges_and_stamps_last_updated() {
        let app = app();

        app.clone()
            .oneshot(json_request(
                "POST",
                "/v1/schemas",
                json!({
                    "prompt_id": "p1",
                    "prompt_text": "hello",
                    "response_schema": {"type": "object"}
                }),
            ))
            .await
            .unwrap();

        let response = app
            .oneshot(json_request(
                "PUT",
                "/v1/schemas/p1",
                json!({"response_schema": {"type": "string"}}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["main_prompt"], "hello");
        assert_eq!(body["response_schema"], json!({"type": "string"}));
        assert_eq!(body["last_updated"], NOW);
    }

    #[tokio::test]
    async fn test_delete_twice_both_report_deleted() {
        let app = app();

        app.clone()
            .oneshot(json_request(
                "POST",
                "/v1/schemas",
                json!({
                    "prompt_id": "p1",
                    "prompt_text": "hello",
                    "response_schema": {"type": "object"}
                }),
            ))
            .await
            .unwrap();

        for _ in 0..2 {
            let response = app
                .clone()
                .oneshot(
                    Request::delete("/v1/schemas/p1")
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
            assert_eq!(body_json(response).await["deleted"], true);
        }
    }

    #[tokio::test]
    async fn test_record_and_fetch_response() {
        let app = app();

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/v1/responses",
                json!({
                    "response_id": "r1",
                    "prompt_id": "p1",
                    "raw_response": {"summary": "ok"}
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let response = app
            .oneshot(
                Request::get("/v1/responses/r1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["raw_response"]["summary"], "ok");
        assert_eq!(body["created_at"], NOW);
    }
}
