//! Typed request/reply operations.
//!
//! Every public query is one [`Connection::call`] (write the request frame,
//! wait for the reply of the same kind) followed by a payload decode. A
//! decode failure is scoped to that reply; the connection stays usable.

use std::io::{Read, Write};

use serde::de::DeserializeOwned;
use wmipc_frame::kind;
use wmipc_proto::{Ack, BarConfig, CommandOutcome, Node, Output, VersionInfo, Workspace};

use crate::connection::Connection;
use crate::error::{ClientError, Result};

/// Outer JSON shape of a payload, for the one kind two queries share.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PayloadShape {
    Array,
    Object,
}

/// Classify a payload by its first non-whitespace byte.
///
/// Neither an array nor an object is a protocol violation for the bar-config
/// kind and fails rather than matching either waiter.
fn probe_shape(payload: &[u8], want: PayloadShape) -> Result<bool> {
    let first = payload
        .iter()
        .find(|b| !b" \t\r\n".contains(b))
        .copied()
        .unwrap_or(0);
    match first {
        b'[' => Ok(want == PayloadShape::Array),
        b'{' => Ok(want == PayloadShape::Object),
        _ => Err(ClientError::BadReply {
            context: "get_bar_config",
            detail: "payload is neither a JSON array nor an object".to_string(),
        }),
    }
}

fn decode<T: DeserializeOwned>(context: &'static str, payload: &[u8]) -> Result<T> {
    serde_json::from_slice(payload).map_err(|err| ClientError::BadReply {
        context,
        detail: err.to_string(),
    })
}

impl<R: Read, W: Write> Connection<R, W> {
    /// Run one or more semicolon-separated commands; one outcome per command.
    pub fn run_command(&mut self, command: &str) -> Result<Vec<CommandOutcome>> {
        let payload = self.call(kind::RUN_COMMAND, command.as_bytes())?;
        decode("run_command", &payload)
    }

    /// List all workspaces.
    pub fn get_workspaces(&mut self) -> Result<Vec<Workspace>> {
        let payload = self.call(kind::GET_WORKSPACES, b"")?;
        decode("get_workspaces", &payload)
    }

    /// List all outputs.
    pub fn get_outputs(&mut self) -> Result<Vec<Output>> {
        let payload = self.call(kind::GET_OUTPUTS, b"")?;
        decode("get_outputs", &payload)
    }

    /// Fetch the full layout tree.
    pub fn get_tree(&mut self) -> Result<Node> {
        let payload = self.call(kind::GET_TREE, b"")?;
        decode("get_tree", &payload)
    }

    /// List all marks.
    pub fn get_marks(&mut self) -> Result<Vec<String>> {
        let payload = self.call(kind::GET_MARKS, b"")?;
        decode("get_marks", &payload)
    }

    /// List configured bar ids.
    ///
    /// Shares a message kind with [`Self::get_bar_config`]; the reply is
    /// recognized by its array shape, not by kind.
    pub fn get_bar_ids(&mut self) -> Result<Vec<String>> {
        self.send(kind::GET_BAR_CONFIG, b"")?;
        let payload = self.next_reply_where(kind::GET_BAR_CONFIG, |p| {
            probe_shape(p, PayloadShape::Array)
        })?;
        decode("get_bar_ids", &payload)
    }

    /// Fetch the configuration of one bar by id.
    pub fn get_bar_config(&mut self, id: &str) -> Result<BarConfig> {
        self.send(kind::GET_BAR_CONFIG, id.as_bytes())?;
        let payload = self.next_reply_where(kind::GET_BAR_CONFIG, |p| {
            probe_shape(p, PayloadShape::Object)
        })?;
        decode("get_bar_config", &payload)
    }

    /// Fetch server version information.
    pub fn get_version(&mut self) -> Result<VersionInfo> {
        let payload = self.call(kind::GET_VERSION, b"")?;
        decode("get_version", &payload)
    }

    /// List binding mode names.
    pub fn get_binding_modes(&mut self) -> Result<Vec<String>> {
        let payload = self.call(kind::GET_BINDING_MODES, b"")?;
        decode("get_binding_modes", &payload)
    }

    /// Fetch the last loaded config text.
    pub fn get_config(&mut self) -> Result<String> {
        let payload = self.call(kind::GET_CONFIG, b"")?;
        let reply: wmipc_proto::ConfigReply = decode("get_config", &payload)?;
        Ok(reply.config)
    }

    /// Broadcast a tick carrying `payload` to all tick subscribers.
    pub fn send_tick(&mut self, payload: &str) -> Result<Ack> {
        let reply = self.call(kind::SEND_TICK, payload.as_bytes())?;
        decode("send_tick", &reply)
    }
}
