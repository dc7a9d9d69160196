use std::path::PathBuf;

use tracing::debug;

use crate::error::{Result, TransportError};

/// Environment variables consulted for the socket path, in order.
const SOCKET_ENV_VARS: [&str; 2] = ["I3SOCK", "SWAYSOCK"];

/// Resolve the window manager's socket path from the environment.
///
/// Checks `I3SOCK` first, then `SWAYSOCK`. Empty values are skipped.
/// Returns [`TransportError::SocketNotFound`] when neither is set; callers
/// that know the path out of band can bypass discovery entirely.
pub fn socket_path() -> Result<PathBuf> {
    for var in SOCKET_ENV_VARS {
        if let Some(value) = std::env::var_os(var) {
            if !value.is_empty() {
                debug!(var, path = ?value, "resolved ipc socket path");
                return Ok(PathBuf::from(value));
            }
        }
    }
    Err(TransportError::SocketNotFound)
}
