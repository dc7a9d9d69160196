use wmipc_frame::FrameError;
use wmipc_transport::TransportError;

/// Errors surfaced by connection operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The socket could not be resolved or connected. Only occurs during
    /// connect, never mid-session.
    #[error("no ipc socket: {0}")]
    NoIpcSocket(#[from] TransportError),

    /// Framing or transport failure. The stream is desynchronized and the
    /// connection is dead afterwards.
    #[error(transparent)]
    Frame(#[from] FrameError),

    /// An event frame's subtype has no known decoder. Scoped to that one
    /// frame; the connection stays usable.
    #[error("unknown event type {0}")]
    UnknownType(u32),

    /// A reply or event payload failed validation for the expected shape.
    /// Scoped to that one frame; the connection stays usable.
    #[error("bad {context} reply: {detail}")]
    BadReply {
        context: &'static str,
        detail: String,
    },

    /// The server refused the subscription request.
    #[error("server refused the subscription")]
    SubscribeFailed,

    /// The connection already failed with a protocol error and must not be
    /// reused; reconnect decisions belong to the caller.
    #[error("connection is dead after an earlier protocol error")]
    ConnectionDead,
}

pub type Result<T> = std::result::Result<T, ClientError>;
