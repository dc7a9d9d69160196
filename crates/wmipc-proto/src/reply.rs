use serde::{Deserialize, Serialize};

use crate::node::Rect;

/// Outcome of one command in a `run_command` batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandOutcome {
    pub success: bool,
    /// Human-readable error for a failed command.
    pub error: Option<String>,
    /// Set when the command text itself could not be parsed.
    pub parse_error: Option<bool>,
}

/// One workspace as reported by `get_workspaces`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workspace {
    /// Workspace number, or -1 for named workspaces without one.
    pub num: i32,
    pub name: String,
    pub visible: bool,
    pub focused: bool,
    pub urgent: bool,
    pub rect: Rect,
    /// Name of the output this workspace is on.
    pub output: String,
}

/// One output as reported by `get_outputs`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Output {
    pub name: String,
    pub active: bool,
    #[serde(default)]
    pub primary: bool,
    /// The workspace visible on this output, absent for inactive outputs.
    pub current_workspace: Option<String>,
    pub rect: Rect,
}

/// Server version information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionInfo {
    pub major: i32,
    pub minor: i32,
    pub patch: i32,
    pub human_readable: String,
    pub loaded_config_file_name: Option<String>,
}

/// The raw config text wrapper returned by `get_config`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigReply {
    pub config: String,
}

/// Bare success acknowledgement, used by `subscribe` and `send_tick`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ack {
    pub success: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_command_outcomes() {
        let json = r#"[
            {"success": true},
            {"success": false, "error": "Unknown command", "parse_error": true}
        ]"#;
        let outcomes: Vec<CommandOutcome> = serde_json::from_str(json).unwrap();
        assert_eq!(outcomes.len(), 2);
        assert!(outcomes[0].success);
        assert_eq!(outcomes[0].error, None);
        assert_eq!(outcomes[1].error.as_deref(), Some("Unknown command"));
        assert_eq!(outcomes[1].parse_error, Some(true));
    }

    #[test]
    fn decode_workspaces() {
        let json = r#"[{
            "num": 1,
            "name": "1:web",
            "visible": true,
            "focused": true,
            "urgent": false,
            "rect": {"x": 0, "y": 0, "width": 1920, "height": 1080},
            "output": "eDP-1",
            "some_new_field": {}
        }]"#;
        let workspaces: Vec<Workspace> = serde_json::from_str(json).unwrap();
        assert_eq!(workspaces[0].num, 1);
        assert_eq!(workspaces[0].name, "1:web");
        assert_eq!(workspaces[0].output, "eDP-1");
    }

    #[test]
    fn workspace_missing_field_fails() {
        let json = r#"[{"num": 1, "name": "1"}]"#;
        assert!(serde_json::from_str::<Vec<Workspace>>(json).is_err());
    }

    #[test]
    fn decode_outputs() {
        let json = r#"[
            {
                "name": "eDP-1",
                "active": true,
                "primary": true,
                "current_workspace": "1",
                "rect": {"x": 0, "y": 0, "width": 1920, "height": 1080}
            },
            {
                "name": "HDMI-1",
                "active": false,
                "current_workspace": null,
                "rect": {"x": 0, "y": 0, "width": 0, "height": 0}
            }
        ]"#;
        let outputs: Vec<Output> = serde_json::from_str(json).unwrap();
        assert!(outputs[0].primary);
        assert!(!outputs[1].primary, "missing primary defaults to false");
        assert_eq!(outputs[1].current_workspace, None);
    }

    #[test]
    fn decode_version() {
        let json = r#"{
            "major": 4,
            "minor": 22,
            "patch": 1,
            "human_readable": "4.22.1",
            "loaded_config_file_name": "/home/u/.config/i3/config"
        }"#;
        let version: VersionInfo = serde_json::from_str(json).unwrap();
        assert_eq!((version.major, version.minor, version.patch), (4, 22, 1));
        assert_eq!(version.human_readable, "4.22.1");
    }

    #[test]
    fn decode_config_and_ack() {
        let config: ConfigReply = serde_json::from_str(r#"{"config": "font pango:monospace"}"#)
            .expect("config reply should decode");
        assert_eq!(config.config, "font pango:monospace");

        let ack: Ack = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert!(ack.success);
    }
}
