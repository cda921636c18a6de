//! WebSocket Message Types
//!
//! Messages exchanged between dashboards and the server.

use serde::{Deserialize, Serialize};

use crate::view::View;

/// Messages sent from client to server
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    /// Ping for keepalive
    Ping,
}

/// Messages sent from server to client
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    /// Connection established
    Connected { connection_id: String },
    /// The tally changed; redraw chart and summary
    View { view: View },
    /// Pong response to ping
    Pong,
    /// Error message
    Error { message: String },
}
