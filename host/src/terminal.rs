//! Terminal-backed page regions.
//!
//! Regions buffer what the core writes and are painted once a cycle ends,
//! except the loading indicator, which reports as soon as it is shown.

use std::cell::{Cell, RefCell};
use std::io::{self, Write};

use alerts_core::{InputField, Marker, Node, RenderTarget, Surface, Tag};

/// The line most recently read from stdin.
#[derive(Default)]
pub struct LineInput {
    value: RefCell<String>,
}

impl LineInput {
    pub fn load(&self, line: &str) {
        *self.value.borrow_mut() = line.to_string();
    }
}

impl InputField for LineInput {
    fn value(&self) -> String {
        self.value.borrow().clone()
    }

    fn set_value(&self, value: &str) {
        self.load(value);
    }
}

/// A buffered region painted to a writer on demand.
pub struct Pane {
    text: RefCell<String>,
    children: RefCell<Vec<Node>>,
    hidden: Cell<bool>,
    error: Cell<bool>,
}

impl Pane {
    pub fn new(hidden: bool) -> Self {
        Self {
            text: RefCell::new(String::new()),
            children: RefCell::new(Vec::new()),
            hidden: Cell::new(hidden),
            error: Cell::new(false),
        }
    }

    #[cfg(test)]
    fn is_visible(&self) -> bool {
        !self.hidden.get()
    }

    pub fn paint(&self, out: &mut impl Write) -> io::Result<()> {
        if self.hidden.get() {
            return Ok(());
        }
        let text = self.text.borrow();
        if !text.is_empty() {
            if self.error.get() {
                writeln!(out, "error: {text}")?;
            } else {
                writeln!(out, "{text}")?;
            }
        }
        for node in self.children.borrow().iter() {
            paint_node(node, 0, out)?;
        }
        Ok(())
    }
}

fn paint_node(node: &Node, depth: usize, out: &mut impl Write) -> io::Result<()> {
    let indent = "  ".repeat(depth);
    match node.tag {
        Tag::Heading => {
            writeln!(out, "{indent}{}", node.text)?;
            writeln!(out, "{indent}{}", "=".repeat(node.text.chars().count()))?;
        }
        Tag::ListItem => writeln!(out, "{indent}- {}", node.text)?,
        Tag::Paragraph => writeln!(out, "{indent}{}", node.text)?,
        Tag::List => {}
    }
    let child_depth = if node.tag == Tag::List { depth + 1 } else { depth };
    for child in &node.children {
        paint_node(child, child_depth, out)?;
    }
    Ok(())
}

impl RenderTarget for Pane {
    fn set_text(&self, text: &str) {
        self.children.borrow_mut().clear();
        *self.text.borrow_mut() = text.to_string();
    }

    fn set_marker(&self, marker: Marker, enabled: bool) {
        match marker {
            Marker::Hidden => self.hidden.set(enabled),
            Marker::Error => self.error.set(enabled),
        }
    }

    fn clear_children(&self) {
        self.text.borrow_mut().clear();
        self.children.borrow_mut().clear();
    }

    fn append_child(&self, node: Node) {
        self.children.borrow_mut().push(node);
    }
}

/// Prints a notice to stderr each time it becomes visible.
#[derive(Default)]
pub struct Spinner {
    visible: Cell<bool>,
}

impl RenderTarget for Spinner {
    fn set_text(&self, _text: &str) {}

    fn set_marker(&self, marker: Marker, enabled: bool) {
        if marker != Marker::Hidden {
            return;
        }
        let show = !enabled;
        if show && !self.visible.get() {
            eprintln!("Fetching alerts...");
        }
        self.visible.set(show);
    }

    fn clear_children(&self) {}

    fn append_child(&self, _node: Node) {}
}

impl Spinner {
    #[cfg(test)]
    fn is_visible(&self) -> bool {
        self.visible.get()
    }
}

/// Every region of the terminal page.
pub struct TerminalPage {
    pub input: LineInput,
    pub results: Pane,
    pub error: Pane,
    pub loading: Spinner,
}

impl TerminalPage {
    pub fn new() -> Self {
        Self {
            input: LineInput::default(),
            results: Pane::new(false),
            error: Pane::new(true),
            loading: Spinner::default(),
        }
    }

    pub fn surface(&self) -> Surface<'_> {
        Surface {
            input: Some(&self.input),
            results: Some(&self.results),
            error: Some(&self.error),
            loading: Some(&self.loading),
        }
    }
}

impl Default for TerminalPage {
    fn default() -> Self {
        Self::new()
    }
}
