//! WebSocket Refresh Stream
//!
//! Pushes a fresh [`View`](crate::view::View) to every connected dashboard
//! after each answered submission.
//!
//! ## Protocol
//!
//! On connect the server sends `connected` followed by the current `view`.
//! Every later refresh is another `view` message. Clients may send `ping`.
//!
//! ```javascript
//! const ws = new WebSocket('ws://localhost:8090/ws');
//! ws.onmessage = (event) => {
//!   const msg = JSON.parse(event.data);
//!   if (msg.type === 'view') redraw(msg.view);
//! };
//! ```

mod handler;
mod messages;

pub use handler::websocket_handler;
pub use messages::{ClientMessage, ServerMessage};
