use super::{ContactError, ContactMessage, ContactSubmission, Delivery};
use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::State;
use axum::Json;
use chrono::Utc;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info, warn};

/// Upper bound on how long a request waits for delivery, retries included.
pub const DELIVERY_TIMEOUT: Duration = Duration::from_secs(15);

/// `POST /api/contact`
///
/// The body is parsed as JSON whatever its content type. Once a submission
/// validates the caller gets a success response; delivery failures and
/// deliveries that outlast [`DELIVERY_TIMEOUT`] are only logged.
pub async fn submit_contact(
    State(delivery): State<Arc<dyn Delivery>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<Value>, ContactError> {
    let body = body.map_err(|rejection| {
        if rejection.status().is_client_error() {
            ContactError::InvalidPayload(rejection.body_text())
        } else {
            error!("Failed to read contact request body: {}", rejection.body_text());
            ContactError::Internal(rejection.body_text())
        }
    })?;

    let submission: ContactSubmission = serde_json::from_slice(&body).map_err(|e| {
        warn!("Rejected malformed contact payload: {}", e);
        ContactError::InvalidPayload(e.to_string())
    })?;

    let submission = submission
        .validate()
        .inspect_err(|e| warn!("Rejected contact submission: {}", e))?;

    let message = ContactMessage::new(submission, Utc::now());
    match tokio::time::timeout(DELIVERY_TIMEOUT, delivery.deliver(&message)).await {
        Ok(Ok(())) => info!(
            "Contact submission from {} delivered via {}",
            message.submission.email,
            delivery.name()
        ),
        Ok(Err(e)) => error!(
            "Contact submission from {} could not be delivered via {}: {}",
            message.submission.email,
            delivery.name(),
            e
        ),
        Err(_) => error!(
            "Contact submission from {} timed out after {:?} via {}",
            message.submission.email,
            DELIVERY_TIMEOUT,
            delivery.name()
        ),
    }

    Ok(Json(json!({
        "success": true,
        "message": "Form submitted successfully",
    })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::DeliveryError;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::extract::FromRequest;
    use axum::http::{Request, StatusCode};
    use axum::response::IntoResponse;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingDelivery {
        messages: Mutex<Vec<ContactMessage>>,
    }

    #[async_trait]
    impl Delivery for RecordingDelivery {
        fn name(&self) -> &'static str {
            "recording"
        }

        async fn deliver(&self, message: &ContactMessage) -> Result<(), DeliveryError> {
            self.messages.lock().unwrap().push(message.clone());
            Ok(())
        }
    }

    struct FailingDelivery;

    #[async_trait]
    impl Delivery for FailingDelivery {
        fn name(&self) -> &'static str {
            "failing"
        }

        async fn deliver(&self, _message: &ContactMessage) -> Result<(), DeliveryError> {
            Err(DeliveryError::Status {
                status: 503,
                body: "unavailable".to_string(),
            })
        }
    }

    struct SlowDelivery;

    #[async_trait]
    impl Delivery for SlowDelivery {
        fn name(&self) -> &'static str {
            "slow"
        }

        async fn deliver(&self, _message: &ContactMessage) -> Result<(), DeliveryError> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(())
        }
    }

    async fn respond(
        delivery: Arc<dyn Delivery>,
        body: Result<Bytes, BytesRejection>,
    ) -> (StatusCode, Value) {
        let response = match submit_contact(State(delivery), body).await {
            Ok(json) => json.into_response(),
            Err(e) => e.into_response(),
        };
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    async fn call(delivery: Arc<dyn Delivery>, body: &str) -> (StatusCode, Value) {
        respond(delivery, Ok(Bytes::from(body.to_string()))).await
    }

    const VALID: &str = r#"{"name":"Jane","email":"jane@example.com","inquiryType":"ai","message":"Hello","lang":"en"}"#;

    #[tokio::test]
    async fn test_valid_submission_is_delivered() {
        let recorder = Arc::new(RecordingDelivery::default());
        let (status, body) = call(recorder.clone(), VALID).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);

        let messages = recorder.messages.lock().unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].submission.inquiry_type, "ai");
    }

    #[tokio::test]
    async fn test_delivery_failure_still_succeeds() {
        let (status, body) = call(Arc::new(FailingDelivery), VALID).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
    }

    #[tokio::test]
    async fn test_missing_fields_rejected_before_delivery() {
        let recorder = Arc::new(RecordingDelivery::default());
        let (status, body) = call(
            recorder.clone(),
            r#"{"name":"Jane","inquiryType":"ai","message":"Hi"}"#,
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "missing_fields");
        assert_eq!(body["fields"], json!(["email"]));
        assert!(recorder.messages.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_malformed_json_rejected() {
        let (status, body) = call(Arc::new(RecordingDelivery::default()), "{not json").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "invalid_payload");
    }

    #[tokio::test]
    async fn test_wrong_field_type_rejected() {
        let (status, body) =
            call(Arc::new(RecordingDelivery::default()), r#"{"name":42}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "invalid_payload");
    }

    #[tokio::test]
    async fn test_oversized_body_rejected_as_invalid_payload() {
        let request = Request::new(Body::from(vec![b'a'; 3 * 1024 * 1024]));
        let rejection = Bytes::from_request(request, &()).await.unwrap_err();
        assert_eq!(rejection.status(), StatusCode::PAYLOAD_TOO_LARGE);

        let recorder = Arc::new(RecordingDelivery::default());
        let (status, body) = respond(recorder.clone(), Err(rejection)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "invalid_payload");
        assert!(recorder.messages.lock().unwrap().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_delivery_is_cut_off_after_timeout() {
        let started = tokio::time::Instant::now();
        let (status, body) = call(Arc::new(SlowDelivery), VALID).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert!(started.elapsed() >= DELIVERY_TIMEOUT);
        assert!(started.elapsed() < Duration::from_secs(60));
    }
}
