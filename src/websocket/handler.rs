//! WebSocket Handler
//!
//! Handles WebSocket upgrade requests and streams view refreshes until the
//! client goes away.

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::Response,
};
use futures_util::{stream::SplitSink, SinkExt, StreamExt};
use std::sync::Arc;
use tokio::sync::broadcast::error::RecvError;

use super::messages::{ClientMessage, ServerMessage};
use crate::api::AppState;
use crate::tally::FeedbackTally;
use crate::view::View;

type WsSender = SplitSink<WebSocket, Message>;

/// WebSocket upgrade handler
pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> Response {
    let tally = Arc::clone(&state.tally);
    ws.on_upgrade(move |socket| handle_socket(socket, tally))
}

/// Handle an established WebSocket connection
async fn handle_socket(socket: WebSocket, tally: Arc<FeedbackTally>) {
    let connection_id = uuid::Uuid::new_v4().to_string();
    let (mut sender, mut receiver) = socket.split();

    // Subscribe before reading the snapshot so no refresh is missed in between
    let mut refreshes = tally.subscribe();
    tracing::info!(connection_id = %connection_id, "WebSocket connected");

    let greeting = [
        ServerMessage::Connected {
            connection_id: connection_id.clone(),
        },
        ServerMessage::View {
            view: View::from_snapshot(tally.snapshot().await),
        },
    ];
    for msg in greeting {
        if send(&mut sender, &msg).await.is_err() {
            tracing::debug!(connection_id = %connection_id, "WebSocket closed during greeting");
            return;
        }
    }

    loop {
        tokio::select! {
            refresh = refreshes.recv() => {
                let snapshot = match refresh {
                    Ok(snapshot) => snapshot,
                    Err(RecvError::Lagged(skipped)) => {
                        tracing::debug!(connection_id = %connection_id, skipped, "Refresh receiver lagged");
                        tally.snapshot().await
                    }
                    Err(RecvError::Closed) => break,
                };
                let msg = ServerMessage::View { view: View::from_snapshot(snapshot) };
                if send(&mut sender, &msg).await.is_err() {
                    break;
                }
            }
            incoming = receiver.next() => {
                match incoming {
                    Some(Ok(message)) => {
                        if !handle_ws_message(&mut sender, &connection_id, message).await {
                            break;
                        }
                    }
                    Some(Err(e)) => {
                        tracing::debug!(connection_id = %connection_id, error = %e, "WebSocket receive error");
                        break;
                    }
                    None => break,
                }
            }
        }
    }

    tracing::info!(connection_id = %connection_id, "WebSocket disconnected");
}

/// Serialize and send one message
async fn send(sender: &mut WsSender, msg: &ServerMessage) -> Result<(), axum::Error> {
    match serde_json::to_string(msg) {
        Ok(text) => sender.send(Message::Text(text)).await,
        Err(e) => {
            tracing::error!(error = %e, "Failed to serialize message");
            Ok(())
        }
    }
}

/// Handle a received WebSocket message
///
/// Returns false if the connection should be closed.
async fn handle_ws_message(sender: &mut WsSender, connection_id: &str, message: Message) -> bool {
    let reply = match message {
        Message::Text(text) => match serde_json::from_str::<ClientMessage>(&text) {
            Ok(ClientMessage::Ping) => ServerMessage::Pong,
            Err(e) => {
                tracing::debug!(
                    connection_id = %connection_id,
                    error = %e,
                    "Invalid client message"
                );
                ServerMessage::Error {
                    message: format!("Invalid message format: {}", e),
                }
            }
        },
        Message::Binary(_) => ServerMessage::Error {
            message: "Binary messages not supported".to_string(),
        },
        // Axum answers pings itself
        Message::Ping(_) | Message::Pong(_) => return true,
        Message::Close(_) => {
            tracing::debug!(connection_id = %connection_id, "Client requested close");
            return false;
        }
    };

    send(sender, &reply).await.is_ok()
}
