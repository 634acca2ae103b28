//! In-memory page model
//!
//! A small arena-backed DOM: elements with attributes, text nodes, a viewport
//! and box measurement. The hover core reads hovered text from it and keeps
//! its single tooltip node in it.

mod geometry;
mod html;
mod metrics;
mod text;

pub use geometry::{BoxSize, Point, Viewport};
pub use metrics::{TextMetrics, wrap_text};
pub use text::{break_count, collapse_whitespace, is_skipped};

/// Index of a node in its [`Document`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
enum NodeKind {
    Element(ElementData),
    Text(String),
}

#[derive(Debug, Clone)]
struct ElementData {
    tag: String,
    attributes: Vec<(String, String)>,
    position: Option<Point>,
}

#[derive(Debug, Clone)]
struct Node {
    kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Node>,
    root: NodeId,
    head: NodeId,
    body: NodeId,
    url: String,
    title: String,
    top_level: bool,
    viewport: Viewport,
    metrics: TextMetrics,
}

impl Document {
    /// Create an empty top-level document with `<html>`, `<head>` and `<body>`
    pub fn new(url: impl Into<String>) -> Self {
        let mut doc = Self {
            nodes: Vec::new(),
            root: NodeId(0),
            head: NodeId(0),
            body: NodeId(0),
            url: url.into(),
            title: String::new(),
            top_level: true,
            viewport: Viewport::default(),
            metrics: TextMetrics::default(),
        };
        doc.root = doc.create_element("html");
        doc.head = doc.append_element(doc.root, "head");
        doc.body = doc.append_element(doc.root, "body");
        doc
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn head(&self) -> NodeId {
        self.head
    }

    pub fn body(&self) -> NodeId {
        self.body
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Whether this is the outermost browsing context of the page
    pub fn is_top_level(&self) -> bool {
        self.top_level
    }

    pub fn set_top_level(&mut self, top_level: bool) {
        self.top_level = top_level;
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn metrics(&self) -> &TextMetrics {
        &self.metrics
    }

    pub fn set_metrics(&mut self, metrics: TextMetrics) {
        self.metrics = metrics;
    }

    // Tree construction

    /// Create a detached element
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.push_node(NodeKind::Element(ElementData {
            tag: tag.to_ascii_lowercase(),
            attributes: Vec::new(),
            position: None,
        }))
    }

    /// Move `child` under `parent`, detaching it from any previous parent
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if let Some(old_parent) = self.nodes[child.0].parent {
            self.nodes[old_parent.0].children.retain(|c| *c != child);
        }
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
    }

    pub fn append_element(&mut self, parent: NodeId, tag: &str) -> NodeId {
        let node = self.create_element(tag);
        self.append_child(parent, node);
        node
    }

    pub fn append_text(&mut self, parent: NodeId, text: &str) -> NodeId {
        let node = self.push_node(NodeKind::Text(text.to_string()));
        self.append_child(parent, node);
        node
    }

    /// Replace all children of `node` with a single text node (no markup)
    pub fn set_text_content(&mut self, node: NodeId, text: &str) {
        // Rewrite a lone text child in place
        if !text.is_empty()
            && let [only] = self.nodes[node.0].children[..]
            && let NodeKind::Text(existing) = &mut self.nodes[only.0].kind
        {
            existing.clear();
            existing.push_str(text);
            return;
        }

        let children = std::mem::take(&mut self.nodes[node.0].children);
        for child in children {
            self.nodes[child.0].parent = None;
        }
        if !text.is_empty() {
            self.append_text(node, text);
        }
    }

    /// Number of nodes ever allocated, attached or not
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn push_node(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            kind,
            parent: None,
            children: Vec::new(),
        });
        id
    }

    // Queries

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes[node.0].parent
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        &self.nodes[node.0].children
    }

    pub fn is_element(&self, node: NodeId) -> bool {
        matches!(self.nodes[node.0].kind, NodeKind::Element(_))
    }

    pub fn tag(&self, node: NodeId) -> Option<&str> {
        self.element(node).map(|e| e.tag.as_str())
    }

    /// Text of a text node
    pub fn text(&self, node: NodeId) -> Option<&str> {
        match &self.nodes[node.0].kind {
            NodeKind::Text(text) => Some(text),
            NodeKind::Element(_) => None,
        }
    }

    pub fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.element(node)?
            .attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn has_attribute(&self, node: NodeId, name: &str) -> bool {
        self.attribute(node, name).is_some()
    }

    pub fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        let Some(element) = self.element_mut(node) else {
            return;
        };
        let name = name.to_ascii_lowercase();
        match element.attributes.iter_mut().find(|(n, _)| *n == name) {
            Some((_, v)) => *v = value.to_string(),
            None => element.attributes.push((name, value.to_string())),
        }
    }

    pub fn remove_attribute(&mut self, node: NodeId, name: &str) {
        if let Some(element) = self.element_mut(node) {
            element.attributes.retain(|(n, _)| n != name);
        }
    }

    /// `node` and its descendants in tree order
    pub fn subtree(&self, node: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![node];
        while let Some(current) = stack.pop() {
            out.push(current);
            stack.extend(self.nodes[current.0].children.iter().rev());
        }
        out
    }

    /// First attached element carrying `id`, in tree order
    pub fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.subtree(self.root)
            .into_iter()
            .find(|n| self.attribute(*n, "id") == Some(id))
    }

    /// Number of attached elements carrying `id`
    pub fn count_with_id(&self, id: &str) -> usize {
        self.subtree(self.root)
            .into_iter()
            .filter(|n| self.attribute(*n, "id") == Some(id))
            .count()
    }

    pub fn elements_by_tag(&self, tag: &str) -> Vec<NodeId> {
        self.subtree(self.root)
            .into_iter()
            .filter(|n| self.tag(*n) == Some(tag))
            .collect()
    }

    /// `node` itself or its nearest ancestor element with the given tag
    pub fn closest(&self, node: NodeId, tag: &str) -> Option<NodeId> {
        let mut current = Some(node);
        while let Some(n) = current {
            if self.tag(n) == Some(tag) {
                return Some(n);
            }
            current = self.parent(n);
        }
        None
    }

    /// Raw concatenation of all descendant text
    pub fn text_content(&self, node: NodeId) -> String {
        self.subtree(node)
            .into_iter()
            .filter_map(|n| self.text(n))
            .collect()
    }

    /// Rendered (innerText-style) text of an element.
    ///
    /// `None` when the element has no rendering: text nodes, elements inside
    /// an `<svg>` subtree, and elements that are not displayed.
    pub fn rendered_text(&self, node: NodeId) -> Option<String> {
        self.rendered_text_excluding(node, &[])
    }

    /// Rendered text with extra tags skipped entirely
    pub fn rendered_text_excluding(&self, node: NodeId, excluded: &[&str]) -> Option<String> {
        if !self.is_element(node) || self.closest(node, "svg").is_some() {
            return None;
        }
        if !self.is_displayed(node) {
            return None;
        }
        Some(text::render_text(self, node, excluded))
    }

    /// Attached to the document and not hidden by itself or an ancestor
    pub fn is_displayed(&self, node: NodeId) -> bool {
        let mut current = Some(node);
        let mut last = node;
        while let Some(n) = current {
            if self.has_attribute(n, "hidden") {
                return false;
            }
            last = n;
            current = self.parent(n);
        }
        last == self.root
    }

    // Layout

    pub fn set_position(&mut self, node: NodeId, position: Point) {
        if let Some(element) = self.element_mut(node) {
            element.position = Some(position);
        }
    }

    pub fn position(&self, node: NodeId) -> Option<Point> {
        self.element(node)?.position
    }

    /// Rendered box of an element; zero when it is not displayed
    pub fn bounding_box(&self, node: NodeId) -> BoxSize {
        if !self.is_displayed(node) {
            return BoxSize::default();
        }
        self.metrics.measure(&self.text_content(node))
    }

    fn element(&self, node: NodeId) -> Option<&ElementData> {
        match &self.nodes.get(node.0)?.kind {
            NodeKind::Element(e) => Some(e),
            NodeKind::Text(_) => None,
        }
    }

    fn element_mut(&mut self, node: NodeId) -> Option<&mut ElementData> {
        match &mut self.nodes.get_mut(node.0)?.kind {
            NodeKind::Element(e) => Some(e),
            NodeKind::Text(_) => None,
        }
    }
}
