//! Inbound webhook endpoint.
//!
//! The messaging platform posts every chat message to `POST /webhook`:
//!
//! ```json
//! { "message": ".weather Paris", "sender": "alice" }
//! ```
//!
//! The message is dispatched, the answer is handed to the [`Deliverer`] and only
//! then the request is acknowledged. The acknowledgment is always `200 OK` with an
//! empty body, whatever happened in between.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    routing::post,
};
use log::{debug, warn};
use serde::Deserialize;

use crate::{commands::Commander, delivery::Deliverer};

/// Application state shared across requests.
#[derive(Clone)]
pub struct WebhookState {
    /// Command dispatcher
    pub commander: Arc<Commander>,
    /// Messaging platform boundary
    pub deliverer: Arc<dyn Deliverer>,
}

/// Body of an inbound webhook call.
#[derive(Deserialize, Debug)]
pub struct InboundMessage {
    /// Raw chat message
    pub message: String,
    /// Opaque identifier of the sender, used as the recipient of the answer
    pub sender: String,
}

/// Creates the router serving the webhook.
pub fn router(state: WebhookState) -> Router {
    Router::new()
        .route("/webhook", post(handle_webhook))
        .with_state(state)
}

/// Dispatches an inbound message and delivers the answer to its sender.
///
/// A body that is not an [`InboundMessage`] has no sender to answer to: it is
/// logged and acknowledged without dispatch.
async fn handle_webhook(
    State(state): State<WebhookState>,
    payload: Result<Json<InboundMessage>, JsonRejection>,
) -> StatusCode {
    let inbound = match payload {
        Ok(Json(inbound)) => inbound,
        Err(e) => {
            warn!("ignoring invalid webhook body: {}", e);
            return StatusCode::OK;
        }
    };

    debug!("inbound message {:?}", inbound);

    let response = state.commander.dispatch(&inbound.message).await;

    // Delivery failures don't change the acknowledgment
    if let Err(e) = state.deliverer.deliver(&inbound.sender, &response).await {
        warn!("failed to deliver answer to {}: {}", inbound.sender, e);
    }

    StatusCode::OK
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{body::Body, http::Request};
    use http_body_util::BodyExt;
    use mockall::predicate::eq;
    use tower::ServiceExt;

    use super::*;
    use crate::{
        apis::build_client,
        commands::{CommandTable, NOT_RECOGNIZED, actions::CurrencyHandler},
        delivery::MockDeliverer,
    };

    fn create_test_router(deliverer: MockDeliverer, currency_url: &str) -> Router {
        let mut table = CommandTable::new();
        table.register(
            ".currency",
            Arc::new(CurrencyHandler::new(build_client(5).unwrap(), currency_url)),
        );
        router(WebhookState {
            commander: Arc::new(Commander::new(table)),
            deliverer: Arc::new(deliverer),
        })
    }

    fn webhook_request(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/webhook")
            .header("content-type", "application/json")
            .body(Body::from(body.to_owned()))
            .unwrap()
    }

    async fn assert_empty_ok(response: axum::response::Response) {
        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_webhook_delivers_answer() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/v4/latest/USD")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"rates": {"EUR": 0.5}}"#)
            .create_async()
            .await;

        let mut deliverer = MockDeliverer::new();
        deliverer
            .expect_deliver()
            .with(eq("alice"), eq("10 USD = 5.00 EUR"))
            .times(1)
            .returning(|_, _| Ok(()));

        let app = create_test_router(deliverer, &format!("{}/v4/latest", server.url()));
        let response = app
            .oneshot(webhook_request(
                r#"{"message": ".currency 10 USD EUR", "sender": "alice"}"#,
            ))
            .await
            .unwrap();

        assert_empty_ok(response).await;
    }

    #[tokio::test]
    async fn test_webhook_unknown_command() {
        let mut deliverer = MockDeliverer::new();
        deliverer
            .expect_deliver()
            .with(eq("bob"), eq(NOT_RECOGNIZED))
            .times(1)
            .returning(|_, _| Ok(()));

        let app = create_test_router(deliverer, "http://127.0.0.1:1");
        let response = app
            .oneshot(webhook_request(r#"{"message": "hello", "sender": "bob"}"#))
            .await
            .unwrap();

        assert_empty_ok(response).await;
    }

    #[tokio::test]
    async fn test_webhook_api_failure() {
        let mut deliverer = MockDeliverer::new();
        deliverer
            .expect_deliver()
            .with(
                eq("carol"),
                eq("Couldn't perform currency conversion. Please try again."),
            )
            .times(1)
            .returning(|_, _| Ok(()));

        let app = create_test_router(deliverer, "http://127.0.0.1:1");
        let response = app
            .oneshot(webhook_request(
                r#"{"message": ".currency 10 USD EUR", "sender": "carol"}"#,
            ))
            .await
            .unwrap();

        assert_empty_ok(response).await;
    }

    #[tokio::test]
    async fn test_webhook_delivery_failure_still_acknowledged() {
        let mut deliverer = MockDeliverer::new();
        deliverer
            .expect_deliver()
            .times(1)
            .returning(|_, _| Err(anyhow::anyhow!("platform unavailable")));

        let app = create_test_router(deliverer, "http://127.0.0.1:1");
        let response = app
            .oneshot(webhook_request(r#"{"message": ".help", "sender": "dave"}"#))
            .await
            .unwrap();

        assert_empty_ok(response).await;
    }

    #[tokio::test]
    async fn test_webhook_invalid_body() {
        let mut deliverer = MockDeliverer::new();
        deliverer.expect_deliver().times(0);

        let app = create_test_router(deliverer, "http://127.0.0.1:1");
        let response = app
            .clone()
            .oneshot(webhook_request(r#"{"message": ".help"}"#))
            .await
            .unwrap();
        assert_empty_ok(response).await;

        let response = app.oneshot(webhook_request("not json")).await.unwrap();
        assert_empty_ok(response).await;
    }

    #[tokio::test]
    async fn test_webhook_only_accepts_post() {
        let app = create_test_router(MockDeliverer::new(), "http://127.0.0.1:1");
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/webhook")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
