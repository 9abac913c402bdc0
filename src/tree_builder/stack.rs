//! Stack of open elements: scope predicates and the special category.
//!
//! Entries are arena handles; names and namespaces are resolved through the
//! `Document`, so the stack itself stays copy-cheap. The bottom of the stack
//! (`Vec` end) is the current node; index 0 is the root `html` element.

use crate::dom::{Document, Namespace, NodeId};

/// Scope flavor for "has an element in X scope" probes.
///
/// `Select` is inverted relative to the others: every element type except
/// `optgroup` and `option` terminates the search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Scope {
    Default,
    ListItem,
    Button,
    Table,
    Select,
}

#[derive(Clone, Debug, Default)]
pub(crate) struct OpenElementsStack {
    items: Vec<NodeId>,
    max_depth: u32,
}

impl OpenElementsStack {
    pub(crate) fn push(&mut self, id: NodeId) {
        self.items.push(id);
        self.max_depth = self.max_depth.max(self.items.len() as u32);
    }

    pub(crate) fn pop(&mut self) -> Option<NodeId> {
        self.items.pop()
    }

    pub(crate) fn current(&self) -> Option<NodeId> {
        self.items.last().copied()
    }

    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }

    pub(crate) fn get(&self, index: usize) -> Option<NodeId> {
        self.items.get(index).copied()
    }

    pub(crate) fn first(&self) -> Option<NodeId> {
        self.items.first().copied()
    }

    pub(crate) fn contains(&self, id: NodeId) -> bool {
        self.items.contains(&id)
    }

    pub(crate) fn index_of(&self, id: NodeId) -> Option<usize> {
        self.items.iter().rposition(|&n| n == id)
    }

    pub(crate) fn remove(&mut self, id: NodeId) {
        if let Some(index) = self.index_of(id) {
            self.items.remove(index);
        }
    }

    pub(crate) fn insert_at(&mut self, index: usize, id: NodeId) {
        self.items.insert(index, id);
        self.max_depth = self.max_depth.max(self.items.len() as u32);
    }

    pub(crate) fn replace(&mut self, old: NodeId, new: NodeId) {
        if let Some(index) = self.index_of(old) {
            self.items[index] = new;
        }
    }

    pub(crate) fn truncate(&mut self, len: usize) {
        self.items.truncate(len);
    }

    pub(crate) fn iter(&self) -> impl DoubleEndedIterator<Item = NodeId> + ExactSizeIterator + '_ {
        self.items.iter().copied()
    }

    pub(crate) fn max_depth(&self) -> u32 {
        self.max_depth
    }

    /// Pop until an HTML element with one of `names` has been popped.
    pub(crate) fn pop_until_one_of(&mut self, doc: &Document, names: &[&str]) -> Option<NodeId> {
        while let Some(id) = self.items.pop() {
            if doc
                .elem(id)
                .is_some_and(|e| e.namespace == Namespace::Html && names.contains(&&*e.local))
            {
                return Some(id);
            }
        }
        None
    }

    /// Pop until `target` itself has been popped.
    pub(crate) fn pop_until_node(&mut self, target: NodeId) {
        while let Some(id) = self.items.pop() {
            if id == target {
                return;
            }
        }
    }

    /// Pop every element strictly above the first HTML element named one of
    /// `names` (used by "clear the stack back to a table context" helpers).
    pub(crate) fn clear_back_to(&mut self, doc: &Document, names: &[&str]) {
        while let Some(&id) = self.items.last() {
            let stop = self.items.len() == 1
                || doc
                    .elem(id)
                    .is_some_and(|e| e.namespace == Namespace::Html && names.contains(&&*e.local));
            if stop {
                return;
            }
            self.items.pop();
        }
    }

    /// "Has an element in scope" over an HTML-namespace target name.
    pub(crate) fn has_in_scope(&self, doc: &Document, scope: Scope, target: &str) -> bool {
        for id in self.items.iter().rev().copied() {
            if doc.is_html_element(id, target) {
                return true;
            }
            if is_scope_boundary(doc, id, scope) {
                return false;
            }
        }
        false
    }

    /// Scope probe over any of several HTML-namespace names.
    pub(crate) fn has_any_in_scope(&self, doc: &Document, scope: Scope, targets: &[&str]) -> bool {
        targets.iter().any(|t| self.has_in_scope(doc, scope, t))
    }

    /// Scope probe for a specific node rather than a name.
    pub(crate) fn has_node_in_scope(&self, doc: &Document, scope: Scope, target: NodeId) -> bool {
        for id in self.items.iter().rev().copied() {
            if id == target {
                return true;
            }
            if is_scope_boundary(doc, id, scope) {
                return false;
            }
        }
        false
    }
}

fn is_scope_boundary(doc: &Document, id: NodeId, scope: Scope) -> bool {
    let Some(elem) = doc.elem(id) else {
        return false;
    };
    let local = elem.local.as_str();
    match scope {
        Scope::Default => default_scope_boundary(elem.namespace, local),
        Scope::ListItem => {
            default_scope_boundary(elem.namespace, local)
                || (elem.namespace == Namespace::Html && matches!(local, "ol" | "ul"))
        }
        Scope::Button => {
            default_scope_boundary(elem.namespace, local)
                || (elem.namespace == Namespace::Html && local == "button")
        }
        Scope::Table => {
            elem.namespace == Namespace::Html && matches!(local, "html" | "table" | "template")
        }
        Scope::Select => {
            !(elem.namespace == Namespace::Html && matches!(local, "optgroup" | "option"))
        }
    }
}

fn default_scope_boundary(namespace: Namespace, local: &str) -> bool {
    match namespace {
        Namespace::Html => matches!(
            local,
            "applet" | "caption" | "html" | "table" | "td" | "th" | "marquee" | "object"
                | "template"
        ),
        Namespace::MathMl => matches!(
            local,
            "mi" | "mo" | "mn" | "ms" | "mtext" | "annotation-xml"
        ),
        Namespace::Svg => matches!(local, "foreignObject" | "desc" | "title"),
        _ => false,
    }
}

/// The special category: elements that terminate "any other end tag"
/// searches and bound the adoption agency's furthest-block scan.
pub(crate) fn is_special(doc: &Document, id: NodeId) -> bool {
    let Some(elem) = doc.elem(id) else {
        return false;
    };
    let local = elem.local.as_str();
    match elem.namespace {
        Namespace::Html => matches!(
            local,
            "address" | "applet" | "area" | "article" | "aside" | "base" | "basefont"
                | "bgsound" | "blockquote" | "body" | "br" | "button" | "caption" | "center"
                | "col" | "colgroup" | "dd" | "details" | "dir" | "div" | "dl" | "dt" | "embed"
                | "fieldset" | "figcaption" | "figure" | "footer" | "form" | "frame" | "frameset"
                | "h1" | "h2" | "h3" | "h4" | "h5" | "h6" | "head" | "header" | "hgroup" | "hr"
                | "html" | "iframe" | "img" | "input" | "keygen" | "li" | "link" | "listing"
                | "main" | "marquee" | "menu" | "meta" | "nav" | "noembed" | "noframes"
                | "noscript" | "object" | "ol" | "p" | "param" | "plaintext" | "pre" | "script"
                | "search" | "section" | "select" | "source" | "style" | "summary" | "table"
                | "tbody" | "td" | "template" | "textarea" | "tfoot" | "th" | "thead" | "title"
                | "tr" | "track" | "ul" | "wbr" | "xmp"
        ),
        Namespace::MathMl => matches!(
            local,
            "mi" | "mo" | "mn" | "ms" | "mtext" | "annotation-xml"
        ),
        Namespace::Svg => matches!(local, "foreignObject" | "desc" | "title"),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::Document;

    fn push_html(doc: &mut Document, stack: &mut OpenElementsStack, local: &str) -> NodeId {
        let id = doc.create_element(Namespace::Html, None, local.to_string(), Vec::new());
        stack.push(id);
        id
    }

    #[test]
    fn default_scope_stops_at_table_boundaries() {
        let mut doc = Document::new(false);
        let mut stack = OpenElementsStack::default();
        push_html(&mut doc, &mut stack, "html");
        push_html(&mut doc, &mut stack, "p");
        assert!(stack.has_in_scope(&doc, Scope::Default, "p"));
        push_html(&mut doc, &mut stack, "table");
        assert!(!stack.has_in_scope(&doc, Scope::Default, "p"));
        // Table scope still sees the table itself.
        assert!(stack.has_in_scope(&doc, Scope::Table, "table"));
    }

    #[test]
    fn button_and_list_item_scopes_extend_the_boundary_set() {
        let mut doc = Document::new(false);
        let mut stack = OpenElementsStack::default();
        push_html(&mut doc, &mut stack, "html");
        push_html(&mut doc, &mut stack, "p");
        push_html(&mut doc, &mut stack, "button");
        assert!(!stack.has_in_scope(&doc, Scope::Button, "p"));
        assert!(stack.has_in_scope(&doc, Scope::Default, "p"));

        let mut list = OpenElementsStack::default();
        push_html(&mut doc, &mut list, "html");
        push_html(&mut doc, &mut list, "li");
        push_html(&mut doc, &mut list, "ul");
        assert!(!list.has_in_scope(&doc, Scope::ListItem, "li"));
    }

    #[test]
    fn select_scope_is_inverted() {
        let mut doc = Document::new(false);
        let mut stack = OpenElementsStack::default();
        push_html(&mut doc, &mut stack, "select");
        push_html(&mut doc, &mut stack, "optgroup");
        push_html(&mut doc, &mut stack, "option");
        assert!(stack.has_in_scope(&doc, Scope::Select, "select"));

        let mut blocked = OpenElementsStack::default();
        push_html(&mut doc, &mut blocked, "select");
        push_html(&mut doc, &mut blocked, "div");
        assert!(!blocked.has_in_scope(&doc, Scope::Select, "select"));
    }

    #[test]
    fn clear_back_to_stops_at_named_element_or_root() {
        let mut doc = Document::new(false);
        let mut stack = OpenElementsStack::default();
        push_html(&mut doc, &mut stack, "html");
        let table = push_html(&mut doc, &mut stack, "table");
        push_html(&mut doc, &mut stack, "b");
        push_html(&mut doc, &mut stack, "i");
        stack.clear_back_to(&doc, &["table", "template", "html"]);
        assert_eq!(stack.current(), Some(table));
    }

    #[test]
    fn foreign_integration_points_bound_the_default_scope() {
        let mut doc = Document::new(false);
        let mut stack = OpenElementsStack::default();
        push_html(&mut doc, &mut stack, "html");
        push_html(&mut doc, &mut stack, "p");
        let fo = doc.create_element(
            Namespace::Svg,
            None,
            "foreignObject".to_string(),
            Vec::new(),
        );
        stack.push(fo);
        assert!(!stack.has_in_scope(&doc, Scope::Default, "p"));
    }
}
