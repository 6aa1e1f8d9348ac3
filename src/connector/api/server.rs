use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::Json;
use serde::Deserialize;
use tracing::{info, warn};

use crate::{ChatReply, Intent};

use super::controller::ChatController;
use super::Container;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

/// HTTP chat surface: `POST /api/chat` and `GET /api/intents`.
pub fn app(container: Arc<Container>) -> axum::Router {
    axum::Router::new()
        .route("/api/chat", post(chat))
        .route("/api/intents", get(intents))
        .with_state(container)
}

pub async fn serve(container: Arc<Container>, addr: SocketAddr) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Chat server listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app(container)).await?;
    Ok(())
}

/// A body that is not `{"message": string}` still gets a chat reply (the
/// apology) alongside the rejection status.
async fn chat(
    State(container): State<Arc<Container>>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> (StatusCode, Json<ChatReply>) {
    match payload {
        Ok(Json(request)) => {
            let reply = ChatController::new(&container).reply(request.message).await;
            (StatusCode::OK, Json(reply))
        }
        Err(rejection) => {
            warn!("Rejected chat request: {}", rejection);
            (rejection.status(), Json(ChatReply::apology()))
        }
    }
}

async fn intents(State(container): State<Arc<Container>>) -> Json<Vec<Intent>> {
    let catalog = container.catalog_use_case().execute().await;
    Json(catalog.intents().to_vec())
}
