//! Webhook endpoint: verification handshake (GET) and event delivery (POST).

use crate::Result;
use crate::wire::WebhookRequest;
use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use ratebot_conversation::ConversationController;
use serde::Deserialize;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};

const SUBSCRIBE_MODE: &str = "subscribe";

const WRONG_TOKEN_BODY: &str = "Error, wrong validation token";
const RECEIVED_BODY: &str = "Got your message";
const UNSUPPORTED_BODY: &str = "Message not supported";

/// State shared by the webhook handlers
#[derive(Clone)]
pub struct AppState {
    pub controller: Arc<ConversationController>,
    pub verify_token: Arc<str>,
}

impl AppState {
    pub fn new(controller: ConversationController, verify_token: &str) -> Self {
        Self {
            controller: Arc::new(controller),
            verify_token: Arc::from(verify_token),
        }
    }
}

#[derive(Debug, Deserialize)]
struct VerifyParams {
    #[serde(rename = "hub.mode")]
    mode: Option<String>,
    #[serde(rename = "hub.verify_token")]
    verify_token: Option<String>,
    #[serde(rename = "hub.challenge")]
    challenge: Option<String>,
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(verify).post(receive))
        .with_state(state)
}

/// Bind `0.0.0.0:port` and serve until Ctrl+C.
pub async fn serve(port: u16, state: AppState) -> Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr).await?;
    info!("Webhook listening on {addr}");

    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Shutting down webhook server");
        })
        .await?;

    Ok(())
}

async fn verify(
    State(state): State<AppState>,
    Query(params): Query<VerifyParams>,
) -> impl IntoResponse {
    let subscribed = params.mode.as_deref() == Some(SUBSCRIBE_MODE)
        && params.verify_token.as_deref() == Some(&*state.verify_token);

    if subscribed {
        info!("Webhook verified");
        (StatusCode::OK, params.challenge.unwrap_or_default())
    } else {
        warn!("Webhook verification rejected (mode={:?})", params.mode);
        (StatusCode::NOT_FOUND, WRONG_TOKEN_BODY.to_string())
    }
}

/// Events are handled before answering; the status only reflects whether
/// the envelope was understood.
async fn receive(State(state): State<AppState>, body: Bytes) -> impl IntoResponse {
    let request = match WebhookRequest::parse(&body) {
        Ok(request) => request,
        Err(e) => {
            warn!("Rejecting webhook body: {e}");
            return (StatusCode::NOT_FOUND, UNSUPPORTED_BODY);
        }
    };

    for messaging in request.entry.iter().flat_map(|entry| &entry.messaging) {
        let Some(sender_id) = messaging.sender_id() else {
            warn!("Skipping event without sender");
            continue;
        };
        match messaging.event() {
            Some(event) => state.controller.handle(sender_id, event).await,
            None => info!("[{sender_id}] Ignoring event without message or postback"),
        }
    }

    (StatusCode::OK, RECEIVED_BODY)
}
