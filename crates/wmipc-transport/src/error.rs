use std::path::PathBuf;

/// Errors that can occur while locating or opening the IPC socket.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// No socket path could be resolved from the environment.
    #[error("no ipc socket found (neither I3SOCK nor SWAYSOCK is set)")]
    SocketNotFound,

    /// Failed to connect to the resolved socket path.
    #[error("failed to connect to {path}: {source}")]
    Connect {
        path: PathBuf,
        source: std::io::Error,
    },

    /// An I/O error occurred on the transport stream.
    #[error("transport I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TransportError>;
