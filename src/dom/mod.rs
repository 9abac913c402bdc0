//! DOM node model, to the extent the parser reads and writes it.
//!
//! Arena + index representation: the `Document` owns a `Vec<Node>`, and all
//! tree links (parent, siblings, child list) are `NodeId` indices into it.
//! This keeps ownership acyclic while preserving bidirectional traversal.
//!
//! Invariants (hold after every mutation):
//! - Sibling links and the parent's child list are mutually consistent.
//! - A node has at most one parent; `detach` is the only way to clear it.
//! - The document node has at most one DocumentType child and at most one
//!   Element child (the document element).

mod namespace;
pub mod serialize;

pub use namespace::Namespace;

use crate::error::ParseError;
use crate::token::Attribute;

/// Handle into the document's node arena. `NodeId::DOCUMENT` is the root.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    pub const DOCUMENT: NodeId = NodeId(0);

    fn index(self) -> usize {
        self.0 as usize
    }
}

/// Document-level compatibility mode derived from the DOCTYPE.
///
/// Recorded but does not otherwise vary parser behavior.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum QuirksMode {
    NoQuirks,
    LimitedQuirks,
    #[default]
    Quirks,
}

/// Parser-facing element fields.
///
/// `already_started` / `parser_inserted` are the script-element bookkeeping
/// flags; no script ever executes here, but the tree builder still maintains
/// them the way the standard's stop-parsing and Text-mode rules require.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ElementFlags {
    pub already_started: bool,
    pub parser_inserted: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ElementData {
    pub namespace: Namespace,
    pub prefix: Option<String>,
    pub local: String,
    pub attrs: Vec<Attribute>,
    pub flags: ElementFlags,
}

impl ElementData {
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    pub fn is(&self, namespace: Namespace, local: &str) -> bool {
        self.namespace == namespace && self.local == local
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NodeData {
    Document,
    Doctype {
        name: String,
        public_id: String,
        system_id: String,
    },
    Element(ElementData),
    Text {
        data: String,
    },
    Comment {
        data: String,
    },
}

#[derive(Debug)]
pub struct Node {
    pub(crate) parent: Option<NodeId>,
    pub(crate) prev_sibling: Option<NodeId>,
    pub(crate) next_sibling: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) data: NodeData,
}

impl Node {
    pub fn data(&self) -> &NodeData {
        &self.data
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

/// Whole-parse instrumentation counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParserStats {
    pub tokens_emitted: u64,
    pub state_transitions: u64,
    pub parse_errors: u64,
    pub max_open_elements_depth: u32,
    pub max_formatting_depth: u32,
}

/// Parsed document: the arena root and the parser's per-document outputs.
#[derive(Debug)]
pub struct Document {
    nodes: Vec<Node>,
    quirks: QuirksMode,
    head: Option<NodeId>,
    body: Option<NodeId>,
    scripting: bool,
    errors: Vec<ParseError>,
    error_total: u64,
    stats: ParserStats,
}

impl Document {
    pub(crate) fn new(scripting: bool) -> Self {
        Self {
            nodes: vec![Node {
                parent: None,
                prev_sibling: None,
                next_sibling: None,
                children: Vec::new(),
                data: NodeData::Document,
            }],
            quirks: QuirksMode::NoQuirks,
            head: None,
            body: None,
            scripting,
            errors: Vec::new(),
            error_total: 0,
            stats: ParserStats::default(),
        }
    }

    // --- construction ---

    pub(crate) fn create_element(
        &mut self,
        namespace: Namespace,
        prefix: Option<String>,
        local: String,
        attrs: Vec<Attribute>,
    ) -> NodeId {
        self.push_node(NodeData::Element(ElementData {
            namespace,
            prefix,
            local,
            attrs,
            flags: ElementFlags::default(),
        }))
    }

    pub(crate) fn create_text(&mut self, data: String) -> NodeId {
        self.push_node(NodeData::Text { data })
    }

    pub(crate) fn create_comment(&mut self, data: String) -> NodeId {
        self.push_node(NodeData::Comment { data })
    }

    pub(crate) fn create_doctype(
        &mut self,
        name: String,
        public_id: String,
        system_id: String,
    ) -> NodeId {
        self.push_node(NodeData::Doctype {
            name,
            public_id,
            system_id,
        })
    }

    fn push_node(&mut self, data: NodeData) -> NodeId {
        let id = NodeId(u32::try_from(self.nodes.len()).expect("node arena overflow"));
        self.nodes.push(Node {
            parent: None,
            prev_sibling: None,
            next_sibling: None,
            children: Vec::new(),
            data,
        });
        id
    }

    // --- accessors ---

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    pub fn data(&self, id: NodeId) -> &NodeData {
        &self.nodes[id.index()].data
    }

    pub fn elem(&self, id: NodeId) -> Option<&ElementData> {
        match &self.nodes[id.index()].data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    pub(crate) fn elem_mut(&mut self, id: NodeId) -> Option<&mut ElementData> {
        match &mut self.nodes[id.index()].data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Element test against a namespace + local name.
    pub fn elem_is(&self, id: NodeId, namespace: Namespace, local: &str) -> bool {
        self.elem(id).is_some_and(|e| e.is(namespace, local))
    }

    pub fn is_html_element(&self, id: NodeId, local: &str) -> bool {
        self.elem_is(id, Namespace::Html, local)
    }

    /// Local name of an element node; `""` for non-elements.
    pub fn local_name(&self, id: NodeId) -> &str {
        self.elem(id).map_or("", |e| e.local.as_str())
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.index()].parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.index()].children
    }

    pub fn prev_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.index()].prev_sibling
    }

    pub fn next_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.index()].next_sibling
    }

    pub fn last_child(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.index()].children.last().copied()
    }

    pub fn is_text(&self, id: NodeId) -> bool {
        matches!(self.nodes[id.index()].data, NodeData::Text { .. })
    }

    pub(crate) fn text_data_mut(&mut self, id: NodeId) -> Option<&mut String> {
        match &mut self.nodes[id.index()].data {
            NodeData::Text { data } => Some(data),
            _ => None,
        }
    }

    /// The document element (single Element child of the document node).
    pub fn document_element(&self) -> Option<NodeId> {
        self.children(NodeId::DOCUMENT)
            .iter()
            .copied()
            .find(|&c| self.elem(c).is_some())
    }

    pub fn doctype(&self) -> Option<NodeId> {
        self.children(NodeId::DOCUMENT)
            .iter()
            .copied()
            .find(|&c| matches!(self.data(c), NodeData::Doctype { .. }))
    }

    pub fn head(&self) -> Option<NodeId> {
        self.head
    }

    pub fn body(&self) -> Option<NodeId> {
        self.body
    }

    pub fn quirks_mode(&self) -> QuirksMode {
        self.quirks
    }

    pub fn scripting(&self) -> bool {
        self.scripting
    }

    /// Parse errors recorded during the parse, bounded by the error policy.
    pub fn parse_errors(&self) -> &[ParseError] {
        &self.errors
    }

    /// Total parse-error count, including errors dropped by the policy bound.
    pub fn parse_error_total(&self) -> u64 {
        self.error_total
    }

    pub(crate) fn set_quirks_mode(&mut self, quirks: QuirksMode) {
        self.quirks = quirks;
    }

    /// Head pointer. Set once by the tree builder when the head is inserted.
    pub(crate) fn set_head(&mut self, id: NodeId) {
        debug_assert!(self.head.is_none(), "head pointer set twice");
        self.head = Some(id);
    }

    /// Body pointer. Only the first body insertion sets it; later `<body>`
    /// tags merge attributes and leave the pointer alone.
    pub(crate) fn set_body(&mut self, id: NodeId) {
        if self.body.is_none() {
            self.body = Some(id);
        }
    }

    pub(crate) fn set_errors(&mut self, errors: Vec<ParseError>, total: u64) {
        self.errors = errors;
        self.error_total = total;
    }

    pub(crate) fn set_stats(&mut self, stats: ParserStats) {
        self.stats = stats;
    }

    /// Instrumentation counters for the parse that produced this document.
    #[cfg(any(test, feature = "debug-stats"))]
    pub fn stats(&self) -> ParserStats {
        self.stats
    }

    // --- mutation ---

    /// Append `child` as the last child of `parent`. Detaches first if needed.
    pub(crate) fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.insert_at(parent, child, None);
    }

    /// Insert `child` into `parent` immediately before `before`
    /// (`None` = append at the end). Detaches `child` from any current parent.
    pub(crate) fn insert_at(&mut self, parent: NodeId, child: NodeId, before: Option<NodeId>) {
        debug_assert_ne!(parent, child, "node cannot parent itself");
        self.detach(child);

        let position = match before {
            Some(before) => {
                debug_assert_eq!(self.parent(before), Some(parent));
                self.nodes[parent.index()]
                    .children
                    .iter()
                    .position(|&c| c == before)
                    .unwrap_or(self.nodes[parent.index()].children.len())
            }
            None => self.nodes[parent.index()].children.len(),
        };

        let prev = position
            .checked_sub(1)
            .map(|i| self.nodes[parent.index()].children[i]);
        let next = self.nodes[parent.index()].children.get(position).copied();

        self.nodes[parent.index()].children.insert(position, child);
        let node = &mut self.nodes[child.index()];
        node.parent = Some(parent);
        node.prev_sibling = prev;
        node.next_sibling = next;
        if let Some(prev) = prev {
            self.nodes[prev.index()].next_sibling = Some(child);
        }
        if let Some(next) = next {
            self.nodes[next.index()].prev_sibling = Some(child);
        }
    }

    /// Unlink a node from its parent; the node stays alive in the arena.
    pub(crate) fn detach(&mut self, id: NodeId) {
        let Some(parent) = self.nodes[id.index()].parent else {
            return;
        };
        let prev = self.nodes[id.index()].prev_sibling;
        let next = self.nodes[id.index()].next_sibling;
        if let Some(prev) = prev {
            self.nodes[prev.index()].next_sibling = next;
        }
        if let Some(next) = next {
            self.nodes[next.index()].prev_sibling = prev;
        }
        self.nodes[parent.index()].children.retain(|&c| c != id);
        let node = &mut self.nodes[id.index()];
        node.parent = None;
        node.prev_sibling = None;
        node.next_sibling = None;
    }

    /// Move every child of `from` to the end of `to`, preserving order.
    pub(crate) fn reparent_children(&mut self, from: NodeId, to: NodeId) {
        let children = std::mem::take(&mut self.nodes[from.index()].children);
        for child in children {
            // detach() sees an already-cleared child list; only the child's
            // own links need resetting before re-insertion.
            let node = &mut self.nodes[child.index()];
            node.parent = None;
            node.prev_sibling = None;
            node.next_sibling = None;
            self.append_child(to, child);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc_with_elems(n: usize) -> (Document, Vec<NodeId>) {
        let mut doc = Document::new(false);
        let ids = (0..n)
            .map(|i| doc.create_element(Namespace::Html, None, format!("e{i}"), Vec::new()))
            .collect();
        (doc, ids)
    }

    fn assert_links_consistent(doc: &Document, parent: NodeId) {
        let children = doc.children(parent);
        for (i, &c) in children.iter().enumerate() {
            assert_eq!(doc.parent(c), Some(parent));
            let expect_prev = i.checked_sub(1).map(|j| children[j]);
            let expect_next = children.get(i + 1).copied();
            assert_eq!(doc.prev_sibling(c), expect_prev);
            assert_eq!(doc.next_sibling(c), expect_next);
        }
    }

    #[test]
    fn append_and_insert_before_keep_links_consistent() {
        let (mut doc, ids) = doc_with_elems(4);
        doc.append_child(NodeId::DOCUMENT, ids[0]);
        doc.append_child(ids[0], ids[1]);
        doc.append_child(ids[0], ids[3]);
        doc.insert_at(ids[0], ids[2], Some(ids[3]));
        assert_eq!(doc.children(ids[0]), &[ids[1], ids[2], ids[3]]);
        assert_links_consistent(&doc, ids[0]);
    }

    #[test]
    fn detach_unlinks_both_directions() {
        let (mut doc, ids) = doc_with_elems(3);
        doc.append_child(ids[0], ids[1]);
        doc.append_child(ids[0], ids[2]);
        doc.detach(ids[1]);
        assert_eq!(doc.children(ids[0]), &[ids[2]]);
        assert_eq!(doc.parent(ids[1]), None);
        assert_eq!(doc.prev_sibling(ids[2]), None);
        assert_links_consistent(&doc, ids[0]);
    }

    #[test]
    fn insert_moves_node_between_parents() {
        let (mut doc, ids) = doc_with_elems(3);
        doc.append_child(ids[0], ids[2]);
        doc.append_child(ids[1], ids[2]);
        assert!(doc.children(ids[0]).is_empty());
        assert_eq!(doc.children(ids[1]), &[ids[2]]);
    }

    #[test]
    fn reparent_children_preserves_order() {
        let (mut doc, ids) = doc_with_elems(4);
        doc.append_child(ids[0], ids[1]);
        doc.append_child(ids[0], ids[2]);
        doc.reparent_children(ids[0], ids[3]);
        assert!(doc.children(ids[0]).is_empty());
        assert_eq!(doc.children(ids[3]), &[ids[1], ids[2]]);
        assert_links_consistent(&doc, ids[3]);
    }

    #[test]
    fn body_pointer_sets_only_once() {
        let (mut doc, ids) = doc_with_elems(2);
        doc.set_body(ids[0]);
        doc.set_body(ids[1]);
        assert_eq!(doc.body(), Some(ids[0]));
    }
}
