//! Typed payloads for the i3/sway IPC protocol.
//!
//! Every reply and event payload is one JSON document. Decoding is strict
//! about required fields and enum values, and permissive about unknown
//! object fields. Two fields are special-cased for forward compatibility
//! because servers grow new values for them: [`node::LayoutKind`] and
//! [`bar::BarPart`] preserve unrecognized strings in an escape variant
//! instead of failing.

pub mod bar;
pub mod error;
pub mod event;
pub mod node;
pub mod reply;

pub use bar::{BarColors, BarConfig, BarPart};
pub use error::{DecodeError, Result};
pub use event::{
    Binding, BindingChange, BindingEvent, Event, InputType, ModeEvent, OutputEvent, ShutdownEvent,
    ShutdownReason, TickEvent, WindowChange, WindowEvent, WorkspaceChange, WorkspaceEvent,
};
pub use node::{BorderStyle, LayoutKind, Node, NodeKind, Rect};
pub use reply::{Ack, CommandOutcome, ConfigReply, Output, VersionInfo, Workspace};
