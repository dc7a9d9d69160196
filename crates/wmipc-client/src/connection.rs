use std::collections::VecDeque;
use std::io::{Read, Write};
use std::path::Path;

use bytes::Bytes;
use tracing::debug;
use wmipc_frame::{FrameError, FrameReader, FrameWriter};
use wmipc_transport::IpcStream;

use crate::error::{ClientError, Result};

/// A demultiplexed frame: kind (event bit already stripped for events) plus
/// the raw JSON payload.
#[derive(Debug, Clone)]
pub(crate) struct RawMessage {
    pub(crate) kind: u32,
    pub(crate) payload: Bytes,
}

/// One IPC connection to the window manager.
///
/// Exclusively owns the reader/writer halves of the socket and the two
/// pending buffers. Frames pulled off the wire are routed by their event bit:
/// events into one buffer, replies into the other, newest arrival at the
/// front. Nothing outside this type touches the buffers.
///
/// Fatal framing errors (bad magic, truncated stream, I/O failure) poison
/// the connection: every later operation fails with
/// [`ClientError::ConnectionDead`]. There is no internal resync or
/// reconnect; the byte offset of the next valid frame cannot be recovered.
pub struct Connection<R, W> {
    reader: FrameReader<R>,
    writer: FrameWriter<W>,
    replies: VecDeque<RawMessage>,
    events: VecDeque<RawMessage>,
    dead: bool,
}

/// The socket-backed connection used outside of tests.
pub type IpcConnection = Connection<IpcStream, IpcStream>;

impl IpcConnection {
    /// Connect to the window manager, resolving the socket path from the
    /// environment (`I3SOCK`, then `SWAYSOCK`).
    pub fn connect() -> Result<Self> {
        let path = wmipc_transport::socket_path()?;
        Self::connect_to(path)
    }

    /// Connect to an explicit socket path.
    pub fn connect_to(path: impl AsRef<Path>) -> Result<Self> {
        let stream = wmipc_transport::connect(path)?;
        let reader_stream = stream.try_clone()?;
        debug!("ipc connection established");
        Ok(Self::from_parts(
            FrameReader::new(reader_stream),
            FrameWriter::new(stream),
        ))
    }

    /// Close the connection.
    ///
    /// Shuts the socket down in both directions; safe to call after failed
    /// operations. Dropping the connection closes the socket too, this just
    /// makes the release explicit.
    pub fn disconnect(self) {
        self.reader.into_inner().shutdown();
        debug!("ipc connection closed");
    }
}

impl<R: Read, W: Write> Connection<R, W> {
    /// Build a connection from already-open reader and writer halves.
    ///
    /// The halves must refer to the same underlying stream for the
    /// correlation discipline to make sense; tests use scripted streams.
    pub fn from_parts(reader: FrameReader<R>, writer: FrameWriter<W>) -> Self {
        Self {
            reader,
            writer,
            replies: VecDeque::new(),
            events: VecDeque::new(),
            dead: false,
        }
    }

    /// Whether a fatal protocol error has invalidated this connection.
    pub fn is_dead(&self) -> bool {
        self.dead
    }

    /// Consume the connection and return the reader/writer halves.
    ///
    /// Buffered frames are discarded.
    pub fn into_parts(self) -> (FrameReader<R>, FrameWriter<W>) {
        (self.reader, self.writer)
    }

    fn guard(&self) -> Result<()> {
        if self.dead {
            Err(ClientError::ConnectionDead)
        } else {
            Ok(())
        }
    }

    fn fail<T>(&mut self, err: FrameError) -> Result<T> {
        self.dead = true;
        Err(ClientError::Frame(err))
    }

    /// Read exactly one frame and route it into the matching buffer.
    fn pump(&mut self) -> Result<()> {
        let frame = match self.reader.read_frame() {
            Ok(frame) => frame,
            Err(err) => return self.fail(err),
        };

        let is_event = frame.is_event();
        let msg = RawMessage {
            kind: frame.subtype(),
            payload: frame.payload,
        };
        debug!(
            kind = msg.kind,
            is_event,
            payload_len = msg.payload.len(),
            "pumped frame"
        );

        if is_event {
            self.events.push_front(msg);
        } else {
            self.replies.push_front(msg);
        }
        Ok(())
    }

    /// Pop the next pending event, pumping frames until one arrives.
    ///
    /// Returns the front of the event buffer, i.e. the most recently pumped
    /// event when several are already buffered.
    pub(crate) fn raw_event(&mut self) -> Result<RawMessage> {
        self.guard()?;
        loop {
            if let Some(msg) = self.events.pop_front() {
                return Ok(msg);
            }
            self.pump()?;
        }
    }

    /// Take the first pending reply of the given kind, pumping frames until
    /// one arrives. Relative order of the remaining replies is preserved.
    ///
    /// Blocks indefinitely if the server never produces a matching reply;
    /// bounded waits are the caller's business.
    pub(crate) fn next_reply(&mut self, kind: u32) -> Result<Bytes> {
        self.next_reply_where(kind, |_| Ok(true))
    }

    /// Like [`Self::next_reply`], with a payload probe consulted before a
    /// kind match is accepted. The probe returns `Ok(false)` to leave the
    /// frame buffered for another waiter; a probe error consumes the frame
    /// (so one bad reply does not wedge the buffer) and surfaces as-is.
    ///
    /// This exists for the one kind two queries share: bar id lists and bar
    /// configs are told apart by the outer JSON shape of the payload.
    pub(crate) fn next_reply_where<P>(&mut self, kind: u32, probe: P) -> Result<Bytes>
    where
        P: Fn(&[u8]) -> Result<bool>,
    {
        self.guard()?;
        loop {
            let mut idx = 0;
            while idx < self.replies.len() {
                if self.replies[idx].kind == kind {
                    match probe(&self.replies[idx].payload) {
                        Ok(true) => {
                            let msg = self
                                .replies
                                .remove(idx)
                                .expect("index checked against buffer length");
                            return Ok(msg.payload);
                        }
                        Ok(false) => {}
                        Err(err) => {
                            self.replies.remove(idx);
                            return Err(err);
                        }
                    }
                }
                idx += 1;
            }
            self.pump()?;
        }
    }

    /// Write one request frame.
    pub(crate) fn send(&mut self, kind: u32, payload: &[u8]) -> Result<()> {
        self.guard()?;
        match self.writer.send(kind, payload) {
            Ok(()) => Ok(()),
            Err(err) => self.fail(err),
        }
    }

    /// Write a request and wait for the reply of the same kind.
    ///
    /// Events arriving in between are buffered, not dropped.
    pub(crate) fn call(&mut self, kind: u32, payload: &[u8]) -> Result<Bytes> {
        self.send(kind, payload)?;
        self.next_reply(kind)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use bytes::BytesMut;
    use wmipc_frame::kind::{self, EVENT_BIT};
    use wmipc_frame::{encode_frame, FrameError};

    use super::*;

    type TestConnection = Connection<Cursor<Vec<u8>>, Vec<u8>>;

    fn scripted(frames: &[(u32, &[u8])]) -> TestConnection {
        let mut wire = BytesMut::new();
        for (kind, payload) in frames {
            encode_frame(*kind, payload, &mut wire).unwrap();
        }
        Connection::from_parts(
            FrameReader::new(Cursor::new(wire.to_vec())),
            FrameWriter::new(Vec::new()),
        )
    }

    #[test]
    fn routes_by_event_bit() {
        let mut conn = scripted(&[
            (kind::event::MODE | EVENT_BIT, b"{\"change\":\"default\"}"),
            (kind::GET_MARKS, b"[]"),
        ]);

        // The reply is buffered while looking for the event and vice versa.
        let reply = conn.next_reply(kind::GET_MARKS).unwrap();
        assert_eq!(reply.as_ref(), b"[]");

        let event = conn.raw_event().unwrap();
        assert_eq!(event.kind, kind::event::MODE);
    }

    #[test]
    fn event_frames_never_reach_reply_waiters() {
        // An event whose subtype collides with the awaited reply kind must
        // not satisfy the reply wait.
        let mut conn = scripted(&[
            (kind::GET_TREE | EVENT_BIT, b"{\"fake\":1}"),
            (kind::GET_TREE, b"{\"real\":1}"),
        ]);

        let reply = conn.next_reply(kind::GET_TREE).unwrap();
        assert_eq!(reply.as_ref(), b"{\"real\":1}");

        let event = conn.raw_event().unwrap();
        assert_eq!(event.payload.as_ref(), b"{\"fake\":1}");
    }

    #[test]
    fn single_flight_correlation_with_interleaved_events() {
        // Wire order: e1, e2, reply, e3. The reply wait buffers e1 and e2;
        // e3 is only pumped by the third event read. Newest-first buffering
        // pins the delivery order to e2, e1, e3.
        let mut conn = scripted(&[
            (kind::event::WORKSPACE | EVENT_BIT, b"{\"n\":1}"),
            (kind::event::WORKSPACE | EVENT_BIT, b"{\"n\":2}"),
            (kind::GET_WORKSPACES, b"[]"),
            (kind::event::WORKSPACE | EVENT_BIT, b"{\"n\":3}"),
        ]);

        let reply = conn.next_reply(kind::GET_WORKSPACES).unwrap();
        assert_eq!(reply.as_ref(), b"[]");

        let order: Vec<Bytes> = (0..3).map(|_| conn.raw_event().unwrap().payload).collect();
        assert_eq!(order[0].as_ref(), b"{\"n\":2}");
        assert_eq!(order[1].as_ref(), b"{\"n\":1}");
        assert_eq!(order[2].as_ref(), b"{\"n\":3}");
    }

    #[test]
    fn reply_scan_preserves_other_kinds() {
        let mut conn = scripted(&[
            (kind::GET_MARKS, b"[\"m\"]"),
            (kind::GET_VERSION, b"{\"v\":1}"),
        ]);

        let version = conn.next_reply(kind::GET_VERSION).unwrap();
        assert_eq!(version.as_ref(), b"{\"v\":1}");

        let marks = conn.next_reply(kind::GET_MARKS).unwrap();
        assert_eq!(marks.as_ref(), b"[\"m\"]");
    }

    #[test]
    fn probe_skips_and_errors_consume() {
        let mut conn = scripted(&[
            (kind::GET_BAR_CONFIG, b"{\"id\":\"bar-0\"}"),
            (kind::GET_BAR_CONFIG, b"[\"bar-0\"]"),
        ]);

        // Wait for the array-shaped reply; the object-shaped one stays put.
        let ids = conn
            .next_reply_where(kind::GET_BAR_CONFIG, |p| Ok(p.first() == Some(&b'[')))
            .unwrap();
        assert_eq!(ids.as_ref(), b"[\"bar-0\"]");

        // A probe error consumes the offending frame.
        let err = conn
            .next_reply_where(kind::GET_BAR_CONFIG, |_| {
                Err(ClientError::BadReply {
                    context: "test",
                    detail: "nope".into(),
                })
            })
            .unwrap_err();
        assert!(matches!(err, ClientError::BadReply { .. }));
        assert!(conn.replies.is_empty());
    }

    #[test]
    fn truncated_stream_poisons_connection() {
        // A header promising payload bytes that never arrive.
        let mut wire = BytesMut::new();
        encode_frame(kind::GET_TREE, b"full payload", &mut wire).unwrap();
        let cut = wire.len() - 5;
        wire.truncate(cut);

        let mut conn: TestConnection = Connection::from_parts(
            FrameReader::new(Cursor::new(wire.to_vec())),
            FrameWriter::new(Vec::new()),
        );

        let err = conn.next_reply(kind::GET_TREE).unwrap_err();
        assert!(matches!(err, ClientError::Frame(FrameError::UnexpectedEof)));
        assert!(conn.is_dead());

        let err = conn.raw_event().unwrap_err();
        assert!(matches!(err, ClientError::ConnectionDead));
        let err = conn.send(kind::GET_TREE, b"").unwrap_err();
        assert!(matches!(err, ClientError::ConnectionDead));
    }

    #[test]
    fn bad_magic_poisons_connection() {
        let mut conn: TestConnection = Connection::from_parts(
            FrameReader::new(Cursor::new(b"garbage-not-a-frame".to_vec())),
            FrameWriter::new(Vec::new()),
        );

        let err = conn.raw_event().unwrap_err();
        assert!(matches!(err, ClientError::Frame(FrameError::BadMagic { .. })));
        assert!(conn.is_dead());
    }

    #[test]
    fn call_writes_request_then_reads_matching_reply() {
        let mut conn = scripted(&[(kind::GET_VERSION, b"{\"major\":4}")]);

        let reply = conn.call(kind::GET_VERSION, b"").unwrap();
        assert_eq!(reply.as_ref(), b"{\"major\":4}");

        // The request frame landed on the writer.
        let written = conn.writer.get_ref();
        assert!(!written.is_empty());
        let mut wire = BytesMut::from(written.as_slice());
        let frame = wmipc_frame::decode_frame(&mut wire).unwrap().unwrap();
        assert_eq!(frame.kind, kind::GET_VERSION);
        assert!(frame.payload.is_empty());
    }
}
