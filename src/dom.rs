use crate::models::DisplayEvent;
use std::collections::HashMap;
use std::fmt::Write as _;

pub const CLICK: &str = "click";
pub const TOOLTIP_SHOW: &str = "tooltip:show";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    Click,
    TooltipShow(DisplayEvent),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub target: NodeId,
    pub kind: EventKind,
}

impl Event {
    pub fn click(target: NodeId) -> Self {
        Self {
            target,
            kind: EventKind::Click,
        }
    }

    pub fn tooltip_show(target: NodeId, detail: DisplayEvent) -> Self {
        Self {
            target,
            kind: EventKind::TooltipShow(detail),
        }
    }

    pub fn name(&self) -> &'static str {
        match self.kind {
            EventKind::Click => CLICK,
            EventKind::TooltipShow(_) => TOOLTIP_SHOW,
        }
    }
}

pub trait Listener {
    fn handle(&mut self, doc: &mut Document, event: &Event, current: NodeId);
}

impl<F> Listener for F
where
    F: FnMut(&mut Document, &Event, NodeId),
{
    fn handle(&mut self, doc: &mut Document, event: &Event, current: NodeId) {
        self(doc, event, current)
    }
}

#[derive(Debug, Default)]
struct Node {
    tag: String,
    classes: Vec<String>,
    attributes: Vec<(String, String)>,
    text: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

type Registration = (&'static str, Box<dyn Listener>);

pub struct Document {
    nodes: Vec<Node>,
    root: NodeId,
    listeners: HashMap<NodeId, Vec<Registration>>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new("div")
    }
}

impl Document {
    pub fn new(root_tag: &str) -> Self {
        Self {
            nodes: vec![Node {
                tag: root_tag.to_string(),
                ..Node::default()
            }],
            root: NodeId(0),
            listeners: HashMap::new(),
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.nodes.push(Node {
            tag: tag.to_string(),
            ..Node::default()
        });
        NodeId(self.nodes.len() - 1)
    }

    pub fn add_class(&mut self, node: NodeId, class: &str) {
        if !self.has_class(node, class) {
            self.nodes[node.0].classes.push(class.to_string());
        }
    }

    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.nodes[node.0].classes.iter().any(|c| c == class)
    }

    pub fn set_attribute(&mut self, node: NodeId, key: &str, value: impl Into<String>) {
        let value = value.into();
        let attributes = &mut self.nodes[node.0].attributes;
        match attributes.iter_mut().find(|(k, _)| k == key) {
            Some((_, existing)) => *existing = value,
            None => attributes.push((key.to_string(), value)),
        }
    }

    pub fn attribute(&self, node: NodeId, key: &str) -> Option<&str> {
        self.nodes[node.0]
            .attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn set_text(&mut self, node: NodeId, text: impl Into<String>) {
        self.nodes[node.0].text = text.into();
    }

    pub fn text(&self, node: NodeId) -> &str {
        &self.nodes[node.0].text
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes[node.0].parent
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        &self.nodes[node.0].children
    }

    pub fn append(&mut self, parent: NodeId, child: NodeId) {
        if self.contains(child, parent) {
            return;
        }
        self.detach(child);
        self.nodes[parent.0].children.push(child);
        self.nodes[child.0].parent = Some(parent);
    }

    pub fn prepend(&mut self, parent: NodeId, child: NodeId) {
        if self.contains(child, parent) {
            return;
        }
        self.detach(child);
        self.nodes[parent.0].children.insert(0, child);
        self.nodes[child.0].parent = Some(parent);
    }

    pub fn remove(&mut self, node: NodeId) {
        self.detach(node);
    }

    pub fn clear(&mut self, node: NodeId) {
        let children = std::mem::take(&mut self.nodes[node.0].children);
        for child in children {
            self.nodes[child.0].parent = None;
        }
    }

    fn detach(&mut self, node: NodeId) {
        if let Some(parent) = self.nodes[node.0].parent.take() {
            self.nodes[parent.0].children.retain(|c| *c != node);
        }
    }

    pub fn is_attached(&self, node: NodeId) -> bool {
        self.contains(self.root, node)
    }

    pub fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        self.ancestors(node).any(|n| n == ancestor)
    }

    pub fn closest(&self, node: NodeId, class: &str) -> Option<NodeId> {
        self.ancestors(node).find(|n| self.has_class(*n, class))
    }

    fn ancestors(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(Some(node), |n| self.nodes[n.0].parent)
    }

    pub fn query_class(&self, scope: NodeId, class: &str) -> Vec<NodeId> {
        let mut found = Vec::new();
        let mut stack: Vec<NodeId> = self.nodes[scope.0].children.iter().rev().copied().collect();
        while let Some(node) = stack.pop() {
            if self.has_class(node, class) {
                found.push(node);
            }
            stack.extend(self.nodes[node.0].children.iter().rev().copied());
        }
        found
    }

    pub fn add_event_listener(&mut self, node: NodeId, name: &'static str, listener: impl Listener + 'static) {
        self.listeners
            .entry(node)
            .or_default()
            .push((name, Box::new(listener)));
    }

    /// Runs every matching listener from the target up to the topmost
    /// ancestor before returning. A listener may dispatch further events;
    /// those skip the listeners of the node currently being handled.
    pub fn dispatch(&mut self, event: Event) {
        let path: Vec<NodeId> = self.ancestors(event.target).collect();
        let name = event.name();
        for node in path {
            let Some(mut registered) = self.listeners.remove(&node) else {
                continue;
            };
            for (listened, listener) in registered.iter_mut() {
                if *listened == name {
                    listener.handle(self, &event, node);
                }
            }
            if let Some(added) = self.listeners.remove(&node) {
                registered.extend(added);
            }
            self.listeners.insert(node, registered);
        }
    }

    pub fn render(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.render_into(node, &mut out);
        out
    }

    fn render_into(&self, node: NodeId, out: &mut String) {
        let n = &self.nodes[node.0];
        let _ = write!(out, "<{}", n.tag);
        if !n.classes.is_empty() {
            let _ = write!(out, " class=\"{}\"", html_escape(&n.classes.join(" ")));
        }
        for (key, value) in &n.attributes {
            let _ = write!(out, " {key}=\"{}\"", html_escape(value));
        }
        out.push('>');
        out.push_str(&html_escape(&n.text));
        for child in &n.children {
            self.render_into(*child, out);
        }
        let _ = write!(out, "</{}>", n.tag);
    }
}

fn html_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
