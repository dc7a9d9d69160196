use serde::{Deserialize, Serialize};
use wmipc_frame::kind;

use crate::bar::BarConfig;
use crate::error::{DecodeError, Result};
use crate::node::Node;

/// Why a workspace event fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkspaceChange {
    Focus,
    Init,
    Empty,
    Urgent,
    Rename,
    Reload,
    Restored,
    Move,
}

/// A workspace changed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkspaceEvent {
    pub change: WorkspaceChange,
    /// The workspace the event is about, where applicable.
    pub current: Option<Node>,
    /// The previously focused workspace, only on focus changes.
    pub old: Option<Node>,
}

/// Output configuration changed. The server reports no finer reason than
/// the raw change string (currently always `"unspecified"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputEvent {
    pub change: String,
}

/// The binding mode changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeEvent {
    /// Name of the mode now active.
    pub change: String,
    #[serde(default)]
    pub pango_markup: bool,
}

/// Why a window event fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowChange {
    New,
    Close,
    Focus,
    Title,
    FullscreenMode,
    Move,
    Floating,
    Urgent,
    Mark,
}

/// A window/container changed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowEvent {
    pub change: WindowChange,
    /// The affected container's subtree.
    pub container: Node,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BindingChange {
    Run,
}

/// What kind of input device triggered a binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputType {
    Keyboard,
    Mouse,
}

/// Full descriptor of the binding that was triggered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Binding {
    /// The command the binding runs.
    pub command: String,
    /// Modifier names that were active, e.g. `["Mod4", "shift"]`.
    pub event_state_mask: Vec<String>,
    /// Keycode or button code; 0 when the binding is symbol-based.
    pub input_code: i32,
    /// Key symbol, absent for bindcode bindings.
    pub symbol: Option<String>,
    pub input_type: InputType,
}

/// A configured binding was triggered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindingEvent {
    pub change: BindingChange,
    pub binding: Binding,
}

/// Why the server is shutting down.
///
/// Carried as a JSON string field, not a structural tag; any other string
/// is a decode failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShutdownReason {
    Restart,
    Exit,
}

/// The server is shutting down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShutdownEvent {
    pub change: ShutdownReason,
}

/// A tick broadcast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickEvent {
    /// True on the synthetic tick delivered right after subscribing.
    pub first: bool,
    #[serde(default)]
    pub payload: String,
}

/// The closed set of event notifications a client can receive.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "event", content = "data")]
pub enum Event {
    Workspace(WorkspaceEvent),
    Output(OutputEvent),
    Mode(ModeEvent),
    Window(WindowEvent),
    BarconfigUpdate(BarConfig),
    Binding(BindingEvent),
    Shutdown(ShutdownEvent),
    Tick(TickEvent),
}

impl Event {
    /// Decode an event payload, selecting the variant by the frame's
    /// event-bit-stripped subtype.
    pub fn decode(subtype: u32, payload: &[u8]) -> Result<Event> {
        Ok(match subtype {
            kind::event::WORKSPACE => Event::Workspace(serde_json::from_slice(payload)?),
            kind::event::OUTPUT => Event::Output(serde_json::from_slice(payload)?),
            kind::event::MODE => Event::Mode(serde_json::from_slice(payload)?),
            kind::event::WINDOW => Event::Window(serde_json::from_slice(payload)?),
            kind::event::BARCONFIG_UPDATE => {
                Event::BarconfigUpdate(serde_json::from_slice(payload)?)
            }
            kind::event::BINDING => Event::Binding(serde_json::from_slice(payload)?),
            kind::event::SHUTDOWN => Event::Shutdown(serde_json::from_slice(payload)?),
            kind::event::TICK => Event::Tick(serde_json::from_slice(payload)?),
            other => return Err(DecodeError::UnknownEvent(other)),
        })
    }

    /// The topic name this event belongs to.
    pub fn name(&self) -> &'static str {
        match self {
            Event::Workspace(_) => "workspace",
            Event::Output(_) => "output",
            Event::Mode(_) => "mode",
            Event::Window(_) => "window",
            Event::BarconfigUpdate(_) => "barconfig_update",
            Event::Binding(_) => "binding",
            Event::Shutdown(_) => "shutdown",
            Event::Tick(_) => "tick",
        }
    }
}
