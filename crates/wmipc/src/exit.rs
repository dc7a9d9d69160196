use std::fmt;
use std::io;

use wmipc_client::ClientError;
use wmipc_frame::FrameError;

// Exit code constants, sysexits-flavored.
pub const SUCCESS: i32 = 0;
pub const FAILURE: i32 = 1;
pub const TRANSPORT_ERROR: i32 = 3;
pub const DATA_INVALID: i32 = 60;
pub const INTERNAL: i32 = 125;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug)]
pub struct CliError {
    pub code: i32,
    pub message: String,
}

impl CliError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

pub fn io_error(context: &str, err: io::Error) -> CliError {
    let code = match err.kind() {
        io::ErrorKind::PermissionDenied => TRANSPORT_ERROR,
        io::ErrorKind::ConnectionRefused | io::ErrorKind::NotFound => TRANSPORT_ERROR,
        _ => INTERNAL,
    };
    CliError::new(code, format!("{context}: {err}"))
}

pub fn client_error(context: &str, err: ClientError) -> CliError {
    match err {
        ClientError::NoIpcSocket(err) => CliError::new(TRANSPORT_ERROR, format!("{context}: {err}")),
        ClientError::Frame(FrameError::Io(source)) => io_error(context, source),
        ClientError::Frame(err) => CliError::new(FAILURE, format!("{context}: {err}")),
        ClientError::UnknownType(_) | ClientError::BadReply { .. } => {
            CliError::new(DATA_INVALID, format!("{context}: {err}"))
        }
        ClientError::SubscribeFailed => CliError::new(FAILURE, format!("{context}: {err}")),
        ClientError::ConnectionDead => CliError::new(INTERNAL, format!("{context}: {err}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_reply_maps_to_data_invalid() {
        let err = client_error(
            "query failed",
            ClientError::BadReply {
                context: "get_tree",
                detail: "missing field".into(),
            },
        );
        assert_eq!(err.code, DATA_INVALID);
        assert!(err.message.contains("query failed"));
    }

    #[test]
    fn missing_socket_maps_to_transport_error() {
        let err = client_error(
            "connect failed",
            ClientError::NoIpcSocket(wmipc_transport::TransportError::SocketNotFound),
        );
        assert_eq!(err.code, TRANSPORT_ERROR);
    }
}
