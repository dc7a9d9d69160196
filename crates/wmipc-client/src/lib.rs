//! Client connection engine for the i3/sway IPC protocol.
//!
//! This is the "just works" layer. One [`Connection`] owns the socket and
//! demultiplexes the two flows sharing it: synchronous request/reply pairs
//! and the unsolicited event stream. The protocol has no request ids, so
//! replies are correlated to requests by message kind, which is only sound
//! with at most one request in flight per connection. The `&mut self` receivers
//! on every operation enforce exactly that; wrap the connection in your own
//! channel-fed owner thread if multiple tasks need it.
//!
//! ```no_run
//! use wmipc_client::{EventTopic, IpcConnection};
//!
//! # fn main() -> Result<(), wmipc_client::ClientError> {
//! let mut conn = IpcConnection::connect()?;
//! for ws in conn.get_workspaces()? {
//!     println!("{} on {}", ws.name, ws.output);
//! }
//! conn.subscribe(&[EventTopic::Workspace])?;
//! loop {
//!     let event = conn.next_event()?;
//!     println!("{}", event.name());
//! }
//! # }
//! ```

pub mod connection;
pub mod error;
pub mod event;
pub mod request;

pub use connection::{Connection, IpcConnection};
pub use error::{ClientError, Result};
pub use event::EventTopic;

pub use wmipc_proto as proto;
