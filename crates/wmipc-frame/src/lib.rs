//! Binary framing for the i3/sway IPC wire protocol.
//!
//! Every message on the socket is framed as:
//! - The 6-byte magic string `"i3-ipc"` for stream synchronization
//! - A 4-byte native-endian payload length
//! - A 4-byte native-endian message kind, with the top bit flagging events
//! - The JSON payload
//!
//! No partial reads, no buffer management in user code.

pub mod codec;
pub mod error;
pub mod kind;
pub mod reader;
pub mod writer;

pub use codec::{decode_frame, encode_frame, Frame, HEADER_SIZE, MAGIC};
pub use error::{FrameError, Result};
pub use kind::EVENT_BIT;
pub use reader::FrameReader;
pub use writer::FrameWriter;
