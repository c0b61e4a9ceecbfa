//! In-memory document for driving the controller without a browser.
//!
//! `set_inner_html` parses the fragment with html5ever and copies the
//! resulting elements into the arena. Comments are dropped, and text is
//! folded into its parent element.

use std::collections::BTreeMap;

use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData, RcDom};

use crate::dom::Dom;

/// Handle to a node in a [`MemoryDom`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Clone, Default)]
struct Element {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    text: String,
    value: String,
    checked: bool,
    disabled: bool,
    inner_html: Option<String>,
}

/// Arena-backed document tree
#[derive(Debug, Clone)]
pub struct MemoryDom {
    nodes: Vec<Element>,
    location_path: String,
    scroll_locked: bool,
    focused: Option<NodeId>,
    scrolled_into_view: Vec<NodeId>,
}

impl MemoryDom {
    /// Empty document with only a `<body>`
    pub fn new(location_path: &str) -> Self {
        Self {
            nodes: vec![Element {
                tag: "body".to_string(),
                ..Default::default()
            }],
            location_path: location_path.to_string(),
            scroll_locked: false,
            focused: None,
            scrolled_into_view: Vec::new(),
        }
    }

    /// Document whose body is `html`
    pub fn from_html(location_path: &str, html: &str) -> Self {
        let mut dom = Self::new(location_path);
        let body = dom.body();
        dom.append_html(body, html);
        dom
    }

    pub fn body(&self) -> NodeId {
        NodeId(0)
    }

    /// Append a single element under `parent`
    pub fn append(&mut self, parent: NodeId, tag: &str, classes: &[&str]) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Element {
            tag: tag.to_ascii_lowercase(),
            classes: classes.iter().map(|c| c.to_string()).collect(),
            parent: Some(parent),
            ..Default::default()
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Parse `html` and append the resulting nodes under `parent`
    pub fn append_html(&mut self, parent: NodeId, html: &str) {
        let parsed = parse_document(RcDom::default(), Default::default()).one(html);
        let Some(body) = find_element(&parsed.document, "body") else {
            return;
        };
        for child in body.children.borrow().iter() {
            self.convert(child, parent);
        }
    }

    fn convert(&mut self, handle: &Handle, parent: NodeId) {
        match &handle.data {
            NodeData::Element { name, attrs, .. } => {
                let node = self.append(parent, &name.local, &[]);
                for attr in attrs.borrow().iter() {
                    self.apply_parsed_attribute(node, &attr.name.local, &attr.value);
                }
                for child in handle.children.borrow().iter() {
                    self.convert(child, node);
                }
            }
            NodeData::Text { contents } => {
                let text = contents.borrow();
                if !text.trim().is_empty() {
                    self.nodes[parent.0].text.push_str(&text);
                }
            }
            _ => {}
        }
    }

    fn apply_parsed_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        match name {
            "id" => self.nodes[node.0].id = Some(value.to_string()),
            "class" => {
                self.nodes[node.0].classes = value.split_whitespace().map(str::to_string).collect()
            }
            "checked" => self.nodes[node.0].checked = true,
            "disabled" => self.nodes[node.0].disabled = true,
            _ => {
                if name == "value" {
                    self.nodes[node.0].value = value.to_string();
                }
                self.nodes[node.0]
                    .attributes
                    .insert(name.to_string(), value.to_string());
            }
        }
    }

    /// Every element with tag `tag`, in document order
    pub fn elements_by_tag(&self, tag: &str) -> Vec<NodeId> {
        self.preorder(self.body())
            .into_iter()
            .filter(|n| self.nodes[n.0].tag == tag)
            .collect()
    }

    /// First element carrying `class`
    pub fn first_by_class(&self, class: &str) -> Option<NodeId> {
        self.elements_by_class(class).into_iter().next()
    }

    /// First element whose `name` attribute is `name`
    pub fn first_by_name(&self, name: &str) -> Option<NodeId> {
        self.descendants_by_name(&self.body(), name).into_iter().next()
    }

    /// Anchor whose `href` attribute is exactly `href`
    pub fn link_with_href(&self, href: &str) -> Option<NodeId> {
        self.elements_by_tag("a")
            .into_iter()
            .find(|a| self.attribute(a, "href").as_deref() == Some(href))
    }

    pub fn tag(&self, node: NodeId) -> &str {
        &self.nodes[node.0].tag
    }

    pub fn classes(&self, node: NodeId) -> &[String] {
        &self.nodes[node.0].classes
    }

    pub fn is_disabled(&self, node: NodeId) -> bool {
        self.nodes[node.0].disabled
    }

    /// Raw HTML last written with `set_inner_html`
    pub fn inner_html(&self, node: NodeId) -> Option<&str> {
        self.nodes[node.0].inner_html.as_deref()
    }

    pub fn is_scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    pub fn focused(&self) -> Option<NodeId> {
        self.focused
    }

    /// Nodes scrolled into view, oldest first
    pub fn scrolled_into_view(&self) -> &[NodeId] {
        &self.scrolled_into_view
    }

    pub fn set_location_path(&mut self, path: &str) {
        self.location_path = path.to_string();
    }

    fn preorder(&self, root: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![root];
        while let Some(node) = stack.pop() {
            out.push(node);
            stack.extend(self.nodes[node.0].children.iter().rev().copied());
        }
        out
    }

    fn descendants(&self, root: NodeId) -> Vec<NodeId> {
        let mut all = self.preorder(root);
        all.remove(0);
        all
    }

    fn is_form_control(&self, node: NodeId) -> bool {
        matches!(
            self.nodes[node.0].tag.as_str(),
            "input" | "select" | "textarea"
        )
    }
}

/// First element named `tag` in document order
fn find_element(handle: &Handle, tag: &str) -> Option<Handle> {
    if let NodeData::Element { name, .. } = &handle.data {
        if name.local.as_ref() == tag {
            return Some(handle.clone());
        }
    }
    handle
        .children
        .borrow()
        .iter()
        .find_map(|child| find_element(child, tag))
}

impl Dom for MemoryDom {
    type Node = NodeId;

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.preorder(self.body())
            .into_iter()
            .find(|n| self.nodes[n.0].id.as_deref() == Some(id))
    }

    fn elements_by_class(&self, class: &str) -> Vec<NodeId> {
        self.preorder(self.body())
            .into_iter()
            .filter(|n| self.has_class(n, class))
            .collect()
    }

    fn descendants_by_class(&self, root: &NodeId, class: &str) -> Vec<NodeId> {
        self.descendants(*root)
            .into_iter()
            .filter(|n| self.has_class(n, class))
            .collect()
    }

    fn descendants_by_tag(&self, root: &NodeId, tag: &str) -> Vec<NodeId> {
        self.descendants(*root)
            .into_iter()
            .filter(|n| self.nodes[n.0].tag == tag)
            .collect()
    }

    fn descendants_by_name(&self, root: &NodeId, name: &str) -> Vec<NodeId> {
        self.descendants(*root)
            .into_iter()
            .filter(|n| self.nodes[n.0].attributes.get("name").map(String::as_str) == Some(name))
            .collect()
    }

    fn closest(&self, node: &NodeId, class: &str) -> Option<NodeId> {
        let mut current = Some(*node);
        while let Some(n) = current {
            if self.has_class(&n, class) {
                return Some(n);
            }
            current = self.nodes[n.0].parent;
        }
        None
    }

    fn location_path(&self) -> String {
        self.location_path.clone()
    }

    fn has_class(&self, node: &NodeId, class: &str) -> bool {
        self.nodes[node.0].classes.iter().any(|c| c == class)
    }

    fn add_class(&mut self, node: &NodeId, class: &str) {
        if !self.has_class(node, class) {
            self.nodes[node.0].classes.push(class.to_string());
        }
    }

    fn remove_class(&mut self, node: &NodeId, class: &str) {
        self.nodes[node.0].classes.retain(|c| c != class);
    }

    fn set_class_name(&mut self, node: &NodeId, class_name: &str) {
        self.nodes[node.0].classes = class_name.split_whitespace().map(str::to_string).collect();
    }

    fn attribute(&self, node: &NodeId, name: &str) -> Option<String> {
        self.nodes[node.0].attributes.get(name).cloned()
    }

    fn set_attribute(&mut self, node: &NodeId, name: &str, value: &str) {
        self.nodes[node.0]
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    fn set_inner_html(&mut self, node: &NodeId, html: &str) {
        for child in std::mem::take(&mut self.nodes[node.0].children) {
            self.nodes[child.0].parent = None;
        }
        self.nodes[node.0].text.clear();
        self.nodes[node.0].inner_html = Some(html.to_string());
        self.append_html(*node, html);
    }

    fn text(&self, node: &NodeId) -> String {
        self.nodes[node.0].text.clone()
    }

    fn set_text(&mut self, node: &NodeId, text: &str) {
        self.nodes[node.0].text = text.to_string();
    }

    fn value(&self, node: &NodeId) -> String {
        if self.is_form_control(*node) {
            self.nodes[node.0].value.clone()
        } else {
            String::new()
        }
    }

    fn set_value(&mut self, node: &NodeId, value: &str) {
        self.nodes[node.0].value = value.to_string();
    }

    fn is_checked(&self, node: &NodeId) -> bool {
        self.nodes[node.0].checked
    }

    fn set_checked(&mut self, node: &NodeId, checked: bool) {
        self.nodes[node.0].checked = checked;
    }

    fn set_disabled(&mut self, node: &NodeId, disabled: bool) {
        self.nodes[node.0].disabled = disabled;
    }

    fn reset_form(&mut self, form: &NodeId) {
        for node in self.descendants(*form) {
            if !self.is_form_control(node) {
                continue;
            }
            let el = &mut self.nodes[node.0];
            let kind = el.attributes.get("type").map(String::as_str);
            if matches!(kind, Some("checkbox") | Some("radio")) {
                el.checked = false;
            } else {
                el.value.clear();
            }
        }
    }

    fn focus(&mut self, node: &NodeId) {
        self.focused = Some(*node);
    }

    fn scroll_into_view_centered(&mut self, node: &NodeId) {
        self.scrolled_into_view.push(*node);
    }

    fn set_scroll_locked(&mut self, locked: bool) {
        self.scroll_locked = locked;
    }
}
