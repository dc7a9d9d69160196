use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A rectangle in output coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

/// What a tree node represents.
///
/// Unknown values are a decode failure: a node of unknown type cannot be
/// interpreted, unlike a layout string, which is only descriptive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Root,
    Output,
    Con,
    FloatingCon,
    Workspace,
    Dockarea,
}

/// Window border style.
///
/// Tolerates unrecognized values with an [`BorderStyle::Unknown`] arm; the
/// raw string is not preserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderStyle {
    Normal,
    None,
    Pixel,
    Unknown,
}

impl BorderStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            BorderStyle::Normal => "normal",
            BorderStyle::None => "none",
            BorderStyle::Pixel => "pixel",
            BorderStyle::Unknown => "unknown",
        }
    }
}

impl<'de> Deserialize<'de> for BorderStyle {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(match raw.as_str() {
            "normal" => BorderStyle::Normal,
            "none" => BorderStyle::None,
            "pixel" => BorderStyle::Pixel,
            _ => BorderStyle::Unknown,
        })
    }
}

impl Serialize for BorderStyle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Container layout.
///
/// Servers have grown new layout strings across versions, so unrecognized
/// values are preserved verbatim in [`LayoutKind::Other`] rather than
/// rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutKind {
    SplitH,
    SplitV,
    Stacked,
    Tabbed,
    DockArea,
    Output,
    /// A layout string this client does not know about.
    Other(String),
}

impl LayoutKind {
    pub fn as_str(&self) -> &str {
        match self {
            LayoutKind::SplitH => "splith",
            LayoutKind::SplitV => "splitv",
            LayoutKind::Stacked => "stacked",
            LayoutKind::Tabbed => "tabbed",
            LayoutKind::DockArea => "dockarea",
            LayoutKind::Output => "output",
            LayoutKind::Other(raw) => raw,
        }
    }
}

impl<'de> Deserialize<'de> for LayoutKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(match raw.as_str() {
            "splith" => LayoutKind::SplitH,
            "splitv" => LayoutKind::SplitV,
            "stacked" => LayoutKind::Stacked,
            "tabbed" => LayoutKind::Tabbed,
            "dockarea" => LayoutKind::DockArea,
            "output" => LayoutKind::Output,
            _ => LayoutKind::Other(raw),
        })
    }
}

impl Serialize for LayoutKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// One node of the layout tree.
///
/// Children are exclusively owned by their parent; the tree is a plain
/// recursive value with no back-pointers, so cycles are impossible by
/// construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Internal node id. Stable for the lifetime of the node.
    pub id: i64,
    /// Node name (window title, workspace name, output name).
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub node_type: NodeKind,
    pub border: BorderStyle,
    pub current_border_width: i32,
    pub layout: LayoutKind,
    /// Share of the parent taken by this node, if split.
    pub percent: Option<f64>,
    /// Absolute outer geometry.
    pub rect: Rect,
    /// Geometry of the actual client window inside the borders.
    pub window_rect: Rect,
    /// Geometry of the window decoration.
    pub deco_rect: Rect,
    /// Geometry the window itself asked for.
    pub geometry: Rect,
    /// X11 window id, for nodes that carry one.
    pub window: Option<i64>,
    pub urgent: bool,
    pub focused: bool,
    /// Child nodes, in layout order.
    #[serde(default)]
    pub nodes: Vec<Node>,
}

impl Node {
    /// Depth-first search for the focused node.
    pub fn find_focused(&self) -> Option<&Node> {
        if self.focused {
            return Some(self);
        }
        self.nodes.iter().find_map(Node::find_focused)
    }

    /// Total number of nodes in this subtree, including `self`.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        1 + self.nodes.iter().map(Node::len).sum::<usize>()
    }

    /// Depth of the subtree rooted here (a leaf has depth 1).
    pub fn depth(&self) -> usize {
        1 + self.nodes.iter().map(Node::depth).max().unwrap_or(0)
    }
}
