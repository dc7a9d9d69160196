//! Message kind identifiers.
//!
//! The low 31 bits of a frame's kind field select the request/reply or event
//! subtype; the top bit flags "this frame is an event". Requests and their
//! replies share the same kind value; the protocol carries no per-request
//! id, so replies are correlated by kind alone.

/// Top bit of the kind field: set on the wire for event frames.
pub const EVENT_BIT: u32 = 1 << 31;

/// Run one or more window manager commands.
pub const RUN_COMMAND: u32 = 0;

/// Query the list of workspaces.
pub const GET_WORKSPACES: u32 = 1;

/// Subscribe to a set of event topics.
pub const SUBSCRIBE: u32 = 2;

/// Query the list of outputs.
pub const GET_OUTPUTS: u32 = 3;

/// Query the layout tree.
pub const GET_TREE: u32 = 4;

/// Query the list of marks.
pub const GET_MARKS: u32 = 5;

/// Query bar ids (array reply) or one bar's config (object reply).
///
/// Both queries share this kind; replies are told apart by the outer JSON
/// shape of the payload, not by kind.
pub const GET_BAR_CONFIG: u32 = 6;

/// Query version information.
pub const GET_VERSION: u32 = 7;

/// Query the list of binding modes.
pub const GET_BINDING_MODES: u32 = 8;

/// Query the raw config text.
pub const GET_CONFIG: u32 = 9;

/// Broadcast a tick event to subscribers.
pub const SEND_TICK: u32 = 10;

/// Event subtypes, carried in the low 31 bits of an event frame's kind.
pub mod event {
    /// Workspace focus/lifecycle change.
    pub const WORKSPACE: u32 = 0;
    /// Output configuration change.
    pub const OUTPUT: u32 = 1;
    /// Binding mode change.
    pub const MODE: u32 = 2;
    /// Window/container change.
    pub const WINDOW: u32 = 3;
    /// Bar configuration update.
    pub const BARCONFIG_UPDATE: u32 = 4;
    /// A configured binding was triggered.
    pub const BINDING: u32 = 5;
    /// The window manager is shutting down.
    pub const SHUTDOWN: u32 = 6;
    /// Tick broadcast. Value matches i3 >= 4.15 and current sway; older
    /// servers do not emit ticks at all.
    pub const TICK: u32 = 7;
}

/// Returns a human-readable name for a request/reply kind.
pub fn request_name(kind: u32) -> &'static str {
    match kind {
        RUN_COMMAND => "run_command",
        GET_WORKSPACES => "get_workspaces",
        SUBSCRIBE => "subscribe",
        GET_OUTPUTS => "get_outputs",
        GET_TREE => "get_tree",
        GET_MARKS => "get_marks",
        GET_BAR_CONFIG => "get_bar_config",
        GET_VERSION => "get_version",
        GET_BINDING_MODES => "get_binding_modes",
        GET_CONFIG => "get_config",
        SEND_TICK => "send_tick",
        _ => "unknown",
    }
}

/// Returns a human-readable name for an event subtype.
pub fn event_name(subtype: u32) -> &'static str {
    match subtype {
        event::WORKSPACE => "workspace",
        event::OUTPUT => "output",
        event::MODE => "mode",
        event::WINDOW => "window",
        event::BARCONFIG_UPDATE => "barconfig_update",
        event::BINDING => "binding",
        event::SHUTDOWN => "shutdown",
        event::TICK => "tick",
        _ => "unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_names() {
        assert_eq!(request_name(RUN_COMMAND), "run_command");
        assert_eq!(request_name(SEND_TICK), "send_tick");
        assert_eq!(request_name(999), "unknown");
    }

    #[test]
    fn event_names() {
        assert_eq!(event_name(event::WORKSPACE), "workspace");
        assert_eq!(event_name(event::TICK), "tick");
        assert_eq!(event_name(999), "unknown");
    }

    #[test]
    fn event_bit_is_top_bit() {
        assert_eq!(EVENT_BIT, 0x8000_0000);
        assert_eq!(EVENT_BIT & (EVENT_BIT - 1), 0);
    }
}
