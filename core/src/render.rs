//! Rendering targets and the alert list renderer.
//!
//! # Design
//! The core never touches a real UI tree. A host hands it `RenderTarget`
//! handles (a DOM element, a terminal pane, a test double) and the core only
//! sets text, toggles markers, and swaps children made of plain `Node` data.
//! Methods take `&self` because UI handles are shared and mutate through
//! the host's own interior mutability, like DOM elements do.

use crate::types::AlertFeed;

/// Shown instead of a list when the feed has no features.
pub const NO_ALERTS_MESSAGE: &str = "No active weather alerts for this state.";

/// Class carried by every rendered alert list item.
pub const ALERT_ITEM_CLASS: &str = "alert-item";

/// Class-like flags a region can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    /// The region is not visible.
    Hidden,
    /// The region is styled as an error.
    Error,
}

impl Marker {
    pub fn as_str(self) -> &'static str {
        match self {
            Marker::Hidden => "hidden",
            Marker::Error => "error",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Heading,
    List,
    ListItem,
    Paragraph,
}

impl Tag {
    pub fn as_str(self) -> &'static str {
        match self {
            Tag::Heading => "h2",
            Tag::List => "ul",
            Tag::ListItem => "li",
            Tag::Paragraph => "p",
        }
    }
}

/// A detached element: the unit passed to [`RenderTarget::append_child`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub tag: Tag,
    pub class: Option<String>,
    pub text: String,
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(tag: Tag, text: impl Into<String>) -> Self {
        Self {
            tag,
            class: None,
            text: text.into(),
            children: Vec::new(),
        }
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.class = Some(class.to_string());
        self
    }

    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// Own text followed by every descendant's, depth first, joined by `\n`.
    pub fn text_content(&self) -> String {
        let mut parts = Vec::new();
        self.collect_text(&mut parts);
        parts.join("\n")
    }

    fn collect_text<'a>(&'a self, parts: &mut Vec<&'a str>) {
        if !self.text.is_empty() {
            parts.push(&self.text);
        }
        for child in &self.children {
            child.collect_text(parts);
        }
    }
}

/// A display region owned by the host.
pub trait RenderTarget {
    fn set_text(&self, text: &str);
    fn set_marker(&self, marker: Marker, enabled: bool);
    fn clear_children(&self);
    fn append_child(&self, node: Node);
}

/// The text field the state code is typed into.
pub trait InputField {
    fn value(&self) -> String;
    fn set_value(&self, value: &str);
}

/// Replace `target`'s content with a summary heading and either the alert
/// headlines or [`NO_ALERTS_MESSAGE`].
pub fn render_alerts(feed: &AlertFeed, target: &dyn RenderTarget) {
    target.clear_children();
    target.append_child(Node::new(Tag::Heading, feed.summary()));

    if feed.features.is_empty() {
        target.append_child(Node::new(Tag::Paragraph, NO_ALERTS_MESSAGE));
        return;
    }

    let list = feed.headlines().fold(Node::new(Tag::List, ""), |list, headline| {
        list.with_child(Node::new(Tag::ListItem, headline).with_class(ALERT_ITEM_CLASS))
    });
    target.append_child(list);
}
