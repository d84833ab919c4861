use crate::dtos::ResearchRequest;
use crate::services::ProcessError;
use crate::startup::AppState;
use axum::{extract::State, http::header, response::IntoResponse, Json};
use service_core::error::AppError;

impl From<ProcessError> for AppError {
    fn from(err: ProcessError) -> Self {
        match err {
            ProcessError::InvalidOperation(_) => AppError::BadRequest(anyhow::Error::new(err)),
            ProcessError::Transport(_) | ProcessError::ResponseParse(_) => {
                AppError::BadGateway(err.to_string())
            }
        }
    }
}

/// `POST /api/research/process`: run the request through the content
/// processor and return the generated text as plain text.
pub async fn process_content(
    State(state): State<AppState>,
    Json(request): Json<ResearchRequest>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!(
        operation = %request.operation,
        content_len = request.content.len(),
        "Processing research content"
    );

    let text = state.processor.process(&request).await.map_err(|e| {
        match &e {
            ProcessError::InvalidOperation(op) => {
                tracing::warn!(operation = %op, "Rejected unknown operation");
            }
            ProcessError::Transport(_) | ProcessError::ResponseParse(_) => {
                tracing::error!(error = %e, "Generation request failed");
            }
        }
        AppError::from(e)
    })?;

    tracing::info!(response_len = text.len(), "Research content processed");

    Ok(([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], text))
}

#[cfg(test)]
mod tests {
    use crate::services::transport::mock::MockTransport;
    use crate::services::ContentProcessor;
    use crate::startup::{build_router, AppState};
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use secrecy::Secret;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn state(transport: Arc<MockTransport>) -> AppState {
        AppState {
            processor: Arc::new(ContentProcessor::new(
                transport,
                "https://gemini.test/generate?key=",
                Secret::new("test-key".to_string()),
            )),
        }
    }

    fn post(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/research/process")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_text(response: axum::response::Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn returns_generated_text_as_plain_text() {
        let transport = Arc::new(MockTransport::responding_with(
            r#"{"candidates":[{"content":{"parts":[{"text":"A short summary"}]}}]}"#,
        ));
        let response = build_router(state(transport.clone()))
            .oneshot(post(r#"{"operation":"summarize","content":"Long text"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers()["content-type"]
            .to_str()
            .unwrap()
            .starts_with("text/plain"));
        assert_eq!(body_text(response).await, "A short summary");
        assert_eq!(transport.call_count(), 1);
    }

    #[tokio::test]
    async fn unknown_operation_is_a_bad_request() {
        let transport = Arc::new(MockTransport::responding_with("{}"));
        let response = build_router(state(transport.clone()))
            .oneshot(post(r#"{"operations":"translate","content":"Long text"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert!(body["error"].as_str().unwrap().contains("translate"));
        assert_eq!(transport.call_count(), 0);
    }

    #[tokio::test]
    async fn upstream_failure_is_a_bad_gateway() {
        let transport = Arc::new(MockTransport::failing_with("connection reset"));
        let response = build_router(state(transport.clone()))
            .oneshot(post(r#"{"operation":"suggest","content":"Long text"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(transport.call_count(), 1);
    }

    #[tokio::test]
    async fn malformed_upstream_body_is_a_bad_gateway() {
        let transport = Arc::new(MockTransport::responding_with("not json"));
        let response = build_router(state(transport))
            .oneshot(post(r#"{"operation":"suggest","content":"Long text"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn missing_content_is_rejected_before_processing() {
        let transport = Arc::new(MockTransport::responding_with("{}"));
        let response = build_router(state(transport.clone()))
            .oneshot(post(r#"{"operation":"summarize"}"#))
            .await
            .unwrap();

        assert!(response.status().is_client_error());
        assert_eq!(transport.call_count(), 0);
    }
}
