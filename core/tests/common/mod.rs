//! In-memory page and scripted transports shared by the core's integration
//! tests.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::{BTreeSet, VecDeque};
use std::rc::Rc;

use alerts_core::{
    HttpRequest, HttpResponse, InputField, Marker, Node, RenderTarget, Surface, Transport,
    TransportError,
};
use tokio::sync::Notify;

/// Writes from every region of a page, in the order they happened.
pub type Journal = Rc<RefCell<Vec<String>>>;

/// A region that records what the core did to it.
#[derive(Default)]
pub struct FakeElement {
    name: &'static str,
    journal: Option<Journal>,
    text: RefCell<String>,
    markers: RefCell<BTreeSet<&'static str>>,
    children: RefCell<Vec<Node>>,
    writes: Cell<usize>,
}

impl FakeElement {
    pub fn named(name: &'static str, journal: &Journal) -> Self {
        Self {
            name,
            journal: Some(Rc::clone(journal)),
            ..Self::default()
        }
    }

    /// A region that starts out with the `hidden` marker, like the page's
    /// error banner and spinner.
    pub fn hidden(self) -> Self {
        self.markers.borrow_mut().insert(Marker::Hidden.as_str());
        self
    }

    pub fn text(&self) -> String {
        self.text.borrow().clone()
    }

    /// Own text plus every child's, like the DOM's `textContent`.
    pub fn text_content(&self) -> String {
        let mut parts = vec![self.text()];
        parts.extend(self.children.borrow().iter().map(Node::text_content));
        parts.retain(|p| !p.is_empty());
        parts.join("\n")
    }

    pub fn children(&self) -> Vec<Node> {
        self.children.borrow().clone()
    }

    pub fn has(&self, marker: Marker) -> bool {
        self.markers.borrow().contains(marker.as_str())
    }

    pub fn writes(&self) -> usize {
        self.writes.get()
    }

    fn touch(&self, what: &str) {
        self.writes.set(self.writes.get() + 1);
        if let Some(journal) = &self.journal {
            journal.borrow_mut().push(format!("{}:{what}", self.name));
        }
    }
}

impl RenderTarget for FakeElement {
    fn set_text(&self, text: &str) {
        self.touch("text");
        self.children.borrow_mut().clear();
        *self.text.borrow_mut() = text.to_string();
    }

    fn set_marker(&self, marker: Marker, enabled: bool) {
        let sign = if enabled { '+' } else { '-' };
        self.touch(&format!("{sign}{}", marker.as_str()));
        let mut markers = self.markers.borrow_mut();
        if enabled {
            markers.insert(marker.as_str());
        } else {
            markers.remove(marker.as_str());
        }
    }

    fn clear_children(&self) {
        self.touch("clear");
        self.text.borrow_mut().clear();
        self.children.borrow_mut().clear();
    }

    fn append_child(&self, node: Node) {
        self.touch("append");
        self.children.borrow_mut().push(node);
    }
}

#[derive(Default)]
pub struct FakeInput {
    value: RefCell<String>,
}

impl FakeInput {
    pub fn set(&self, value: &str) {
        *self.value.borrow_mut() = value.to_string();
    }
}

impl InputField for FakeInput {
    fn value(&self) -> String {
        self.value.borrow().clone()
    }

    fn set_value(&self, value: &str) {
        self.set(value);
    }
}

/// The four regions of the alerts page.
pub struct Page {
    pub input: FakeInput,
    pub results: FakeElement,
    pub error: FakeElement,
    pub loading: FakeElement,
    pub journal: Journal,
}

impl Page {
    pub fn new() -> Self {
        let journal = Journal::default();
        Self {
            input: FakeInput::default(),
            results: FakeElement::named("results", &journal),
            error: FakeElement::named("error", &journal).hidden(),
            loading: FakeElement::named("loading", &journal).hidden(),
            journal,
        }
    }

    /// Position of the last journal entry equal to `entry`.
    pub fn last_write(&self, entry: &str) -> Option<usize> {
        self.journal.borrow().iter().rposition(|e| e == entry)
    }

    pub fn with_input(value: &str) -> Self {
        let page = Self::new();
        page.input.set(value);
        page
    }

    pub fn surface(&self) -> Surface<'_> {
        Surface {
            input: Some(&self.input),
            results: Some(&self.results),
            error: Some(&self.error),
            loading: Some(&self.loading),
        }
    }

    pub fn total_writes(&self) -> usize {
        self.results.writes() + self.error.writes() + self.loading.writes()
    }
}

/// Replays queued results in order and records every request.
#[derive(Default)]
pub struct ScriptedTransport {
    script: RefCell<VecDeque<Result<HttpResponse, TransportError>>>,
    requests: RefCell<Vec<HttpRequest>>,
}

impl ScriptedTransport {
    pub fn respond(self, status: u16, body: &str) -> Self {
        self.script
            .borrow_mut()
            .push_back(Ok(HttpResponse::new(status, body)));
        self
    }

    pub fn fail(self, message: &str) -> Self {
        self.script
            .borrow_mut()
            .push_back(Err(TransportError::new(message)));
        self
    }

    pub fn urls(&self) -> Vec<String> {
        self.requests.borrow().iter().map(|r| r.url.clone()).collect()
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }
}

impl Transport for ScriptedTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.borrow_mut().push(request);
        self.script
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::new("no scripted response")))
    }
}

/// Signals `entered` once a request arrives, then holds it until `release`.
pub struct GatedTransport {
    pub entered: Notify,
    pub release: Notify,
    body: String,
    requests: Cell<usize>,
}

impl GatedTransport {
    pub fn new(body: &str) -> Self {
        Self {
            entered: Notify::new(),
            release: Notify::new(),
            body: body.to_string(),
            requests: Cell::new(0),
        }
    }

    pub fn request_count(&self) -> usize {
        self.requests.get()
    }
}

impl Transport for GatedTransport {
    async fn execute(&self, _request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.set(self.requests.get() + 1);
        self.entered.notify_one();
        self.release.notified().await;
        Ok(HttpResponse::new(200, self.body.clone()))
    }
}

/// Notes the loading indicator's state when the request goes out.
pub struct WatchingTransport<'p> {
    page: &'p Page,
    body: String,
    loading_visible: Cell<Option<bool>>,
}

impl<'p> WatchingTransport<'p> {
    pub fn new(page: &'p Page, body: &str) -> Self {
        Self {
            page,
            body: body.to_string(),
            loading_visible: Cell::new(None),
        }
    }

    /// `None` until a request has been executed.
    pub fn loading_visible_during_request(&self) -> Option<bool> {
        self.loading_visible.get()
    }
}

impl Transport for WatchingTransport<'_> {
    async fn execute(&self, _request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.loading_visible
            .set(Some(!self.page.loading.has(Marker::Hidden)));
        self.page.journal.borrow_mut().push("transport:execute".to_string());
        Ok(HttpResponse::new(200, self.body.clone()))
    }
}

pub fn feed_json(title: &str, headlines: &[&str]) -> String {
    let features: Vec<_> = headlines
        .iter()
        .map(|h| serde_json::json!({ "properties": { "headline": h } }))
        .collect();
    serde_json::json!({ "title": title, "features": features }).to_string()
}
