use bytes::{Buf, BufMut, Bytes, BytesMut};

use crate::error::{FrameError, Result};
use crate::kind::EVENT_BIT;

/// Frame header: magic (6) + length (4) + kind (4) = 14 bytes.
pub const HEADER_SIZE: usize = 14;

/// Magic bytes: the ASCII string "i3-ipc".
pub const MAGIC: [u8; 6] = *b"i3-ipc";

/// A framed IPC message.
#[derive(Debug, Clone)]
pub struct Frame {
    /// Raw kind field, event bit included.
    pub kind: u32,
    /// The message payload (JSON on this protocol, but opaque here).
    pub payload: Bytes,
}

impl Frame {
    /// Create a new frame.
    pub fn new(kind: u32, payload: impl Into<Bytes>) -> Self {
        Self {
            kind,
            payload: payload.into(),
        }
    }

    /// Whether the event bit is set on this frame's kind.
    pub fn is_event(&self) -> bool {
        self.kind & EVENT_BIT != 0
    }

    /// The kind with the event bit stripped.
    pub fn subtype(&self) -> u32 {
        self.kind & !EVENT_BIT
    }

    /// The total wire size of this frame (header + payload).
    pub fn wire_size(&self) -> usize {
        HEADER_SIZE + self.payload.len()
    }
}

/// Encode a frame into the wire format.
///
/// Wire format (length and kind in the platform's native byte order, matching
/// the window manager running on the same host):
/// ```text
/// ┌──────────────┬───────────┬───────────┬─────────────────┐
/// │ Magic (6B)   │ Length    │ Kind      │ Payload          │
/// │ "i3-ipc"     │ (4B NE)   │ (4B NE)   │ (Length bytes)   │
/// └──────────────┴───────────┴───────────┴─────────────────┘
/// ```
pub fn encode_frame(kind: u32, payload: &[u8], dst: &mut BytesMut) -> Result<()> {
    if payload.len() > u32::MAX as usize {
        return Err(FrameError::PayloadTooLarge {
            size: payload.len(),
            max: u32::MAX as usize,
        });
    }
    dst.reserve(HEADER_SIZE + payload.len());
    dst.put_slice(&MAGIC);
    dst.put_u32_ne(payload.len() as u32);
    dst.put_u32_ne(kind);
    dst.put_slice(payload);
    Ok(())
}

/// Decode a frame from a buffer.
///
/// Returns `Ok(None)` if the buffer doesn't contain a complete frame yet.
/// On success, consumes the frame bytes from the buffer. A magic mismatch
/// fails without consuming anything; the length field is authoritative for
/// the payload size.
pub fn decode_frame(src: &mut BytesMut) -> Result<Option<Frame>> {
    if src.len() < HEADER_SIZE {
        return Ok(None); // Need more data
    }

    if src[0..6] != MAGIC {
        let mut got = [0u8; 6];
        got.copy_from_slice(&src[0..6]);
        return Err(FrameError::BadMagic { got });
    }

    let payload_len = u32::from_ne_bytes(src[6..10].try_into().expect("slice is 4 bytes")) as usize;
    let kind = u32::from_ne_bytes(src[10..14].try_into().expect("slice is 4 bytes"));

    // On 32-bit targets a corrupt header can carry a length for which
    // header + payload does not fit in usize.
    let total = HEADER_SIZE
        .checked_add(payload_len)
        .ok_or(FrameError::PayloadTooLarge {
            size: payload_len,
            max: usize::MAX - HEADER_SIZE,
        })?;
    if src.len() < total {
        return Ok(None); // Need more data
    }

    src.advance(HEADER_SIZE);
    let payload = src.split_to(payload_len).freeze();

    Ok(Some(Frame { kind, payload }))
}
