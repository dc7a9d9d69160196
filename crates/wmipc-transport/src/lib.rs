//! Unix domain socket transport for the window manager IPC protocol.
//!
//! This is the lowest layer of wmipc. It resolves the server's socket path
//! from the environment and opens the stream everything else reads and
//! writes. The protocol itself lives in the layers above; this crate only
//! hands out a connected [`IpcStream`].

pub mod discover;
pub mod error;
pub mod stream;

pub use discover::socket_path;
pub use error::{Result, TransportError};
pub use stream::{connect, IpcStream};
