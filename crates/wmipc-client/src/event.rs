//! Subscription and typed event reading.

use std::io::{Read, Write};

use wmipc_frame::kind;
use wmipc_proto::{Ack, DecodeError, Event};

use crate::connection::Connection;
use crate::error::{ClientError, Result};

/// Topics a client can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventTopic {
    Workspace,
    Output,
    Mode,
    Window,
    BarconfigUpdate,
    Binding,
    Shutdown,
    Tick,
}

impl EventTopic {
    /// The topic name as it appears in the subscribe payload.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventTopic::Workspace => "workspace",
            EventTopic::Output => "output",
            EventTopic::Mode => "mode",
            EventTopic::Window => "window",
            EventTopic::BarconfigUpdate => "barconfig_update",
            EventTopic::Binding => "binding",
            EventTopic::Shutdown => "shutdown",
            EventTopic::Tick => "tick",
        }
    }

    /// All topics, for subscribe-to-everything callers.
    pub fn all() -> [EventTopic; 8] {
        [
            EventTopic::Workspace,
            EventTopic::Output,
            EventTopic::Mode,
            EventTopic::Window,
            EventTopic::BarconfigUpdate,
            EventTopic::Binding,
            EventTopic::Shutdown,
            EventTopic::Tick,
        ]
    }
}

impl std::str::FromStr for EventTopic {
    type Err = String;

    fn from_str(raw: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match raw {
            "workspace" => EventTopic::Workspace,
            "output" => EventTopic::Output,
            "mode" => EventTopic::Mode,
            "window" => EventTopic::Window,
            "barconfig_update" => EventTopic::BarconfigUpdate,
            "binding" => EventTopic::Binding,
            "shutdown" => EventTopic::Shutdown,
            "tick" => EventTopic::Tick,
            other => return Err(format!("unknown event topic `{other}`")),
        })
    }
}

impl<R: Read, W: Write> Connection<R, W> {
    /// Subscribe to a set of event topics.
    ///
    /// The request is a command like any other: the topic names go out as a
    /// JSON array and the server's single acknowledgement says whether the
    /// subscription took effect. Events start flowing afterwards,
    /// interleaved arbitrarily with later replies.
    pub fn subscribe(&mut self, topics: &[EventTopic]) -> Result<()> {
        let names: Vec<&str> = topics.iter().map(EventTopic::as_str).collect();
        let payload = serde_json::to_vec(&names).map_err(|err| ClientError::BadReply {
            context: "subscribe",
            detail: err.to_string(),
        })?;

        let reply = self.call(kind::SUBSCRIBE, &payload)?;
        let ack: Ack = serde_json::from_slice(&reply).map_err(|err| ClientError::BadReply {
            context: "subscribe",
            detail: err.to_string(),
        })?;

        if ack.success {
            Ok(())
        } else {
            Err(ClientError::SubscribeFailed)
        }
    }

    /// Wait for the next event and decode it.
    ///
    /// An unknown subtype or a malformed payload fails just this event; the
    /// offending frame is already off the buffer and the connection stays
    /// usable.
    pub fn next_event(&mut self) -> Result<Event> {
        let msg = self.raw_event()?;
        Event::decode(msg.kind, &msg.payload).map_err(|err| match err {
            DecodeError::UnknownEvent(subtype) => ClientError::UnknownType(subtype),
            DecodeError::Json(err) => ClientError::BadReply {
                context: "event",
                detail: err.to_string(),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use bytes::BytesMut;
    use wmipc_frame::kind::EVENT_BIT;
    use wmipc_frame::{decode_frame, encode_frame, FrameReader, FrameWriter};
    use wmipc_proto::WorkspaceChange;

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

    fn written_frames(conn: TestConnection) -> Vec<(u32, Vec<u8>)> {
        let (_reader, writer) = conn.into_parts();
        let wire = writer.into_inner();
        let mut wire = BytesMut::from(wire.as_slice());
        let mut frames = Vec::new();
        while let Some(frame) = decode_frame(&mut wire).unwrap() {
            frames.push((frame.kind, frame.payload.to_vec()));
        }
        frames
    }

    #[test]
    fn subscribe_sends_topic_array() {
        let mut conn = scripted(&[(kind::SUBSCRIBE, br#"{"success": true}"#)]);

        conn.subscribe(&[EventTopic::Workspace, EventTopic::Shutdown])
            .unwrap();

        let frames = written_frames(conn);
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].0, kind::SUBSCRIBE);
        assert_eq!(frames[0].1, br#"["workspace","shutdown"]"#.to_vec());
    }

    #[test]
    fn subscribe_refusal_surfaces() {
        let mut conn = scripted(&[(kind::SUBSCRIBE, br#"{"success": false}"#)]);

        let err = conn.subscribe(&[EventTopic::Tick]).unwrap_err();
        assert!(matches!(err, ClientError::SubscribeFailed));
    }

    #[test]
    fn next_event_decodes_typed_variant() {
        let mut conn = scripted(&[(
            kind::event::WORKSPACE | EVENT_BIT,
            br#"{"change": "focus", "current": null, "old": null}"#,
        )]);

        match conn.next_event().unwrap() {
            Event::Workspace(e) => assert_eq!(e.change, WorkspaceChange::Focus),
            other => panic!("expected workspace event, got {other:?}"),
        }
    }

    #[test]
    fn unknown_event_kind_is_scoped() {
        let mut conn = scripted(&[
            (42 | EVENT_BIT, b"{}"),
            (
                kind::event::MODE | EVENT_BIT,
                br#"{"change": "default", "pango_markup": false}"#,
            ),
        ]);

        let err = conn.next_event().unwrap_err();
        assert!(matches!(err, ClientError::UnknownType(42)));
        assert!(!conn.is_dead());

        match conn.next_event().unwrap() {
            Event::Mode(e) => assert_eq!(e.change, "default"),
            other => panic!("expected mode event, got {other:?}"),
        }
    }

    #[test]
    fn malformed_event_payload_is_scoped() {
        let mut conn = scripted(&[
            (kind::event::SHUTDOWN | EVENT_BIT, br#"{"change": "maybe"}"#),
            (kind::event::SHUTDOWN | EVENT_BIT, br#"{"change": "exit"}"#),
        ]);

        let err = conn.next_event().unwrap_err();
        assert!(matches!(err, ClientError::BadReply { context: "event", .. }));

        assert!(matches!(conn.next_event().unwrap(), Event::Shutdown(_)));
    }

    #[test]
    fn topic_round_trips_through_from_str() {
        for topic in EventTopic::all() {
            let parsed: EventTopic = topic.as_str().parse().unwrap();
            assert_eq!(parsed, topic);
        }
        assert!("nonsense".parse::<EventTopic>().is_err());
    }
}
