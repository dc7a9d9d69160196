/// Errors that can occur during frame encoding/decoding.
#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    /// The frame header does not start with the `"i3-ipc"` magic.
    ///
    /// The stream is desynchronized at this point; the byte offset of the
    /// next valid frame cannot be recovered, so the connection is dead.
    #[error("bad frame magic {got:?} (expected \"i3-ipc\")")]
    BadMagic { got: [u8; 6] },

    /// The peer closed the stream before a complete frame was received.
    #[error("unexpected end of stream mid-frame")]
    UnexpectedEof,

    /// The payload does not fit the 4-byte length field.
    #[error("payload too large ({size} bytes, max {max})")]
    PayloadTooLarge { size: usize, max: usize },

    /// An I/O error occurred while reading or writing frames.
    #[error("frame I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FrameError>;
