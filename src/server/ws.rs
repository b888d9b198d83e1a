use crate::state::{AppState, WsMessage};
use axum::extract::ws::{Message, WebSocket};
use axum::extract::{State, WebSocketUpgrade};
use axum::response::Response;
use futures_util::{SinkExt, StreamExt};
use std::sync::Arc;

/// WebSocket upgrade handler
pub async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let (mut sender, mut receiver) = socket.split();
    let mut rx = state.ws_tx.subscribe();
    tracing::debug!(clients = state.ws_tx.receiver_count(), "dashboard client connected");

    // Greet with the current contract list so a fresh client is in sync
    match state.with_contracts(|book| WsMessage::Hello { contracts: book.list() }) {
        Ok(hello) => {
            if let Ok(json) = serde_json::to_string(&hello) {
                if sender.send(Message::Text(json.into())).await.is_err() {
                    return;
                }
            }
        }
        Err(e) => tracing::warn!(error = %e, "ws greeting skipped"),
    }

    // Forward broadcast messages to this client
    let send_task = tokio::spawn(async move {
        loop {
            match rx.recv().await {
                Ok(ws_msg) => {
                    let Ok(json) = serde_json::to_string(&ws_msg) else {
                        continue;
                    };
                    if sender.send(Message::Text(json.into())).await.is_err() {
                        break;
                    }
                }
                Err(tokio::sync::broadcast::error::RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "ws client lagging, dropped events");
                }
                Err(tokio::sync::broadcast::error::RecvError::Closed) => break,
            }
        }
    });

    // Read (and discard) incoming messages; detect disconnect
    let recv_task = tokio::spawn(async move {
        while let Some(msg) = receiver.next().await {
            match msg {
                Ok(Message::Close(_)) | Err(_) => break,
                _ => {} // Ignore client messages
            }
        }
    });

    // Wait for either task to finish (client disconnected)
    tokio::select! {
        _ = send_task => {},
        _ = recv_task => {},
    }
    tracing::debug!("dashboard client disconnected");
}
