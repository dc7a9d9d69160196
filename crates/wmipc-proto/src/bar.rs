use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A colorable part of the bar.
///
/// Servers add new color keys over time; unrecognized keys are preserved
/// verbatim in [`BarPart::Other`] so a round-tripped config loses nothing.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BarPart {
    Background,
    Statusline,
    Separator,
    FocusedBackground,
    FocusedStatusline,
    FocusedSeparator,
    FocusedWorkspaceText,
    FocusedWorkspaceBg,
    FocusedWorkspaceBorder,
    ActiveWorkspaceText,
    ActiveWorkspaceBg,
    ActiveWorkspaceBorder,
    InactiveWorkspaceText,
    InactiveWorkspaceBg,
    InactiveWorkspaceBorder,
    UrgentWorkspaceText,
    UrgentWorkspaceBg,
    UrgentWorkspaceBorder,
    BindingModeText,
    BindingModeBg,
    BindingModeBorder,
    /// A color key this client does not know about.
    Other(String),
}

impl BarPart {
    pub fn as_str(&self) -> &str {
        match self {
            BarPart::Background => "background",
            BarPart::Statusline => "statusline",
            BarPart::Separator => "separator",
            BarPart::FocusedBackground => "focused_background",
            BarPart::FocusedStatusline => "focused_statusline",
            BarPart::FocusedSeparator => "focused_separator",
            BarPart::FocusedWorkspaceText => "focused_workspace_text",
            BarPart::FocusedWorkspaceBg => "focused_workspace_bg",
            BarPart::FocusedWorkspaceBorder => "focused_workspace_border",
            BarPart::ActiveWorkspaceText => "active_workspace_text",
            BarPart::ActiveWorkspaceBg => "active_workspace_bg",
            BarPart::ActiveWorkspaceBorder => "active_workspace_border",
            BarPart::InactiveWorkspaceText => "inactive_workspace_text",
            BarPart::InactiveWorkspaceBg => "inactive_workspace_bg",
            BarPart::InactiveWorkspaceBorder => "inactive_workspace_border",
            BarPart::UrgentWorkspaceText => "urgent_workspace_text",
            BarPart::UrgentWorkspaceBg => "urgent_workspace_bg",
            BarPart::UrgentWorkspaceBorder => "urgent_workspace_border",
            BarPart::BindingModeText => "binding_mode_text",
            BarPart::BindingModeBg => "binding_mode_bg",
            BarPart::BindingModeBorder => "binding_mode_border",
            BarPart::Other(raw) => raw,
        }
    }

    fn from_key(raw: String) -> Self {
        match raw.as_str() {
            "background" => BarPart::Background,
            "statusline" => BarPart::Statusline,
            "separator" => BarPart::Separator,
            "focused_background" => BarPart::FocusedBackground,
            "focused_statusline" => BarPart::FocusedStatusline,
            "focused_separator" => BarPart::FocusedSeparator,
            "focused_workspace_text" => BarPart::FocusedWorkspaceText,
            "focused_workspace_bg" => BarPart::FocusedWorkspaceBg,
            "focused_workspace_border" => BarPart::FocusedWorkspaceBorder,
            "active_workspace_text" => BarPart::ActiveWorkspaceText,
            "active_workspace_bg" => BarPart::ActiveWorkspaceBg,
            "active_workspace_border" => BarPart::ActiveWorkspaceBorder,
            "inactive_workspace_text" => BarPart::InactiveWorkspaceText,
            "inactive_workspace_bg" => BarPart::InactiveWorkspaceBg,
            "inactive_workspace_border" => BarPart::InactiveWorkspaceBorder,
            "urgent_workspace_text" => BarPart::UrgentWorkspaceText,
            "urgent_workspace_bg" => BarPart::UrgentWorkspaceBg,
            "urgent_workspace_border" => BarPart::UrgentWorkspaceBorder,
            "binding_mode_text" => BarPart::BindingModeText,
            "binding_mode_bg" => BarPart::BindingModeBg,
            "binding_mode_border" => BarPart::BindingModeBorder,
            _ => BarPart::Other(raw),
        }
    }
}

impl<'de> Deserialize<'de> for BarPart {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(BarPart::from_key(raw))
    }
}

impl Serialize for BarPart {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// The bar's color table, folded from one JSON object.
///
/// The fold is atomic: a non-string value under any key, recognized or not,
/// fails the whole decode rather than producing a partial map.
pub type BarColors = BTreeMap<BarPart, String>;

/// Configuration of one bar instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarConfig {
    pub id: String,
    /// Display mode: `dock`, `hide`, or `invisible`.
    pub mode: String,
    /// Screen edge: `top` or `bottom`.
    pub position: String,
    pub status_command: String,
    pub font: String,
    pub workspace_buttons: bool,
    pub binding_mode_indicator: bool,
    pub verbose: bool,
    pub colors: BarColors,
}

#[cfg(test)]
mod tests {
    use super::*;

    const BAR_JSON: &str = r##"{
        "id": "bar-0",
        "mode": "dock",
        "position": "bottom",
        "status_command": "i3status",
        "font": "monospace 9",
        "workspace_buttons": true,
        "binding_mode_indicator": true,
        "verbose": false,
        "colors": {
            "background": "#000000",
            "statusline": "#ffffff",
            "focused_workspace_text": "#4c7899"
        }
    }"##;

    #[test]
    fn decode_bar_config() {
        let bar: BarConfig = serde_json::from_str(BAR_JSON).unwrap();
        assert_eq!(bar.id, "bar-0");
        assert_eq!(bar.mode, "dock");
        assert!(bar.workspace_buttons);
        assert_eq!(bar.colors.len(), 3);
        assert_eq!(
            bar.colors.get(&BarPart::Background).map(String::as_str),
            Some("#000000")
        );
    }

    #[test]
    fn unknown_color_key_is_preserved() {
        let json = BAR_JSON.replace("\"statusline\"", "\"frobnicator_text\"");
        let bar: BarConfig = serde_json::from_str(&json).unwrap();
        let key = BarPart::Other("frobnicator_text".to_string());
        assert_eq!(bar.colors.get(&key).map(String::as_str), Some("#ffffff"));
        assert_eq!(key.as_str(), "frobnicator_text");
    }

    #[test]
    fn non_string_color_value_fails_atomically() {
        let json = BAR_JSON.replace("\"#ffffff\"", "42");
        let err = serde_json::from_str::<BarConfig>(&json);
        assert!(err.is_err(), "a non-string color must fail the whole decode");
    }

    #[test]
    fn missing_required_field_fails() {
        let json = BAR_JSON.replace("\"id\": \"bar-0\",", "");
        assert!(serde_json::from_str::<BarConfig>(&json).is_err());
    }

    #[test]
    fn known_keys_round_trip() {
        for key in [
            "background",
            "focused_workspace_border",
            "urgent_workspace_bg",
            "binding_mode_text",
        ] {
            let part = BarPart::from_key(key.to_string());
            assert!(!matches!(part, BarPart::Other(_)), "{key} should be known");
            assert_eq!(part.as_str(), key);
        }
    }

    #[test]
    fn empty_color_table() {
        let json = BAR_JSON.replace(
            r##""colors": {
            "background": "#000000",
            "statusline": "#ffffff",
            "focused_workspace_text": "#4c7899"
        }"##,
            r#""colors": {}"#,
        );
        let bar: BarConfig = serde_json::from_str(&json).unwrap();
        assert!(bar.colors.is_empty());
    }
}
