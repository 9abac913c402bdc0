//! Active formatting elements: the list, reconstruction, and the adoption
//! agency algorithm.
//!
//! List entries snapshot the start-tag token they were created from, so a
//! reconstructed or adopted element can be rebuilt without consulting the
//! (possibly detached) original node.

use super::stack::{Scope, is_special};
use super::{Outcome, TreeBuilder};
use crate::dom::{Namespace, NodeId};
use crate::error::{ErrorSink, ParseErrorCode};
use crate::token::TagToken;

#[derive(Clone, Debug)]
pub(super) enum FormattingEntry {
    /// Scope marker pushed by applet/object/marquee/template/td/th/caption.
    Marker,
    Element { id: NodeId, tag: TagToken },
}

#[derive(Clone, Debug, Default)]
pub(super) struct ActiveFormattingList {
    items: Vec<FormattingEntry>,
    max_depth: u32,
}

impl ActiveFormattingList {
    pub(super) fn push_marker(&mut self) {
        self.items.push(FormattingEntry::Marker);
        self.max_depth = self.max_depth.max(self.items.len() as u32);
    }

    /// Push an element entry, applying the Noah's Ark clause: at most three
    /// entries with the same name and attribute set after the last marker.
    pub(super) fn push_element(&mut self, id: NodeId, tag: TagToken) {
        let mut matching: Vec<usize> = Vec::new();
        for (index, entry) in self.items.iter().enumerate().rev() {
            match entry {
                FormattingEntry::Marker => break,
                FormattingEntry::Element { tag: existing, .. } => {
                    if existing.name == tag.name && same_attribute_set(existing, &tag) {
                        matching.push(index);
                    }
                }
            }
        }
        if matching.len() >= 3 {
            // `matching` is in reverse order; the last element is earliest.
            self.items.remove(*matching.last().unwrap());
        }
        self.items.push(FormattingEntry::Element { id, tag });
        self.max_depth = self.max_depth.max(self.items.len() as u32);
    }

    pub(super) fn clear_to_last_marker(&mut self) {
        while let Some(entry) = self.items.pop() {
            if matches!(entry, FormattingEntry::Marker) {
                return;
            }
        }
    }

    pub(super) fn remove_by_id(&mut self, id: NodeId) {
        self.items.retain(
            |entry| !matches!(entry, FormattingEntry::Element { id: entry_id, .. } if *entry_id == id),
        );
    }

    pub(super) fn contains_id(&self, id: NodeId) -> bool {
        self.position_of(id).is_some()
    }

    pub(super) fn position_of(&self, id: NodeId) -> Option<usize> {
        self.items.iter().position(
            |entry| matches!(entry, FormattingEntry::Element { id: entry_id, .. } if *entry_id == id),
        )
    }

    /// Last element entry after the last marker with the given tag name.
    pub(super) fn find_after_last_marker(&self, name: &str) -> Option<(usize, NodeId, TagToken)> {
        for (index, entry) in self.items.iter().enumerate().rev() {
            match entry {
                FormattingEntry::Marker => return None,
                FormattingEntry::Element { id, tag } if tag.name == name => {
                    return Some((index, *id, tag.clone()));
                }
                FormattingEntry::Element { .. } => {}
            }
        }
        None
    }

    pub(super) fn entry_tag(&self, index: usize) -> Option<&TagToken> {
        match self.items.get(index) {
            Some(FormattingEntry::Element { tag, .. }) => Some(tag),
            _ => None,
        }
    }

    pub(super) fn entry_id(&self, index: usize) -> Option<NodeId> {
        match self.items.get(index) {
            Some(FormattingEntry::Element { id, .. }) => Some(*id),
            _ => None,
        }
    }

    pub(super) fn set_entry(&mut self, index: usize, id: NodeId, tag: TagToken) {
        self.items[index] = FormattingEntry::Element { id, tag };
    }

    pub(super) fn insert_entry(&mut self, index: usize, id: NodeId, tag: TagToken) {
        self.items.insert(index, FormattingEntry::Element { id, tag });
        self.max_depth = self.max_depth.max(self.items.len() as u32);
    }

    pub(super) fn remove_at(&mut self, index: usize) {
        self.items.remove(index);
    }

    pub(super) fn len(&self) -> usize {
        self.items.len()
    }

    pub(super) fn last_is_marker_or_empty(&self) -> bool {
        matches!(self.items.last(), None | Some(FormattingEntry::Marker))
    }

    pub(super) fn entry_is_marker(&self, index: usize) -> bool {
        matches!(self.items.get(index), Some(FormattingEntry::Marker))
    }

    pub(super) fn max_depth(&self) -> u32 {
        self.max_depth
    }
}

/// Attribute-set equality for the Noah's Ark clause: same names and values,
/// order-insensitive.
fn same_attribute_set(a: &TagToken, b: &TagToken) -> bool {
    if a.attrs.len() != b.attrs.len() {
        return false;
    }
    a.attrs
        .iter()
        .all(|attr| b.attr(&attr.name) == Some(attr.value.as_str()))
}

impl TreeBuilder {
    /// Re-open formatting elements after a scope break so inline formatting
    /// continues across block boundaries.
    pub(super) fn reconstruct_active_formatting_elements(&mut self, errors: &mut ErrorSink) {
        if self.formatting.last_is_marker_or_empty() {
            return;
        }
        let last_index = self.formatting.len() - 1;
        if let Some(id) = self.formatting.entry_id(last_index)
            && self.open.contains(id)
        {
            return;
        }

        // Rewind to the first entry that is a marker or still open.
        let mut entry_index = last_index;
        loop {
            if entry_index == 0 {
                break;
            }
            entry_index -= 1;
            let open = self.formatting.entry_is_marker(entry_index)
                || self
                    .formatting
                    .entry_id(entry_index)
                    .is_some_and(|id| self.open.contains(id));
            if open {
                entry_index += 1;
                break;
            }
        }

        // Advance: re-create each closed entry and update it in place.
        loop {
            let Some(tag) = self.formatting.entry_tag(entry_index).cloned() else {
                break;
            };
            let new_id = self.insert_html_element(&tag, errors);
            self.formatting.set_entry(entry_index, new_id, tag);
            if entry_index == self.formatting.len() - 1 {
                break;
            }
            entry_index += 1;
        }
    }

    /// The adoption agency algorithm. Returns `Some(outcome)` when the token
    /// was handled; `None` means the caller must run the "any other end tag"
    /// steps instead.
    pub(super) fn adoption_agency(
        &mut self,
        subject: &str,
        errors: &mut ErrorSink,
    ) -> Option<Outcome> {
        // Shortcut: current node matches and is not in the formatting list.
        if let Some(current) = self.current_node()
            && self.doc.is_html_element(current, subject)
            && !self.formatting.contains_id(current)
        {
            self.open.pop();
            return Some(Outcome::Done);
        }

        for _ in 0..8 {
            let Some((entry_index, fmt_elem, fmt_tag)) =
                self.formatting.find_after_last_marker(subject)
            else {
                return None;
            };

            if !self.open.contains(fmt_elem) {
                self.err(errors, ParseErrorCode::MisnestedTag);
                self.formatting.remove_at(entry_index);
                return Some(Outcome::Done);
            }
            if !self.open.has_node_in_scope(&self.doc, Scope::Default, fmt_elem) {
                self.err(errors, ParseErrorCode::MisnestedTag);
                return Some(Outcome::Done);
            }
            if self.current_node() != Some(fmt_elem) {
                self.err(errors, ParseErrorCode::MisnestedTag);
            }

            let Some(fmt_stack_index) = self.open.index_of(fmt_elem) else {
                debug_assert!(false, "formatting element vanished from the stack");
                return Some(Outcome::Done);
            };

            // Furthest block: topmost special element below the formatting
            // element.
            let furthest_block = (fmt_stack_index + 1..self.open.len())
                .filter_map(|i| self.open.get(i).map(|id| (i, id)))
                .find(|&(_, id)| is_special(&self.doc, id));

            let Some((furthest_index, furthest_block)) = furthest_block else {
                // No furthest block: pop through the formatting element and
                // drop its entry.
                self.open.pop_until_node(fmt_elem);
                self.formatting.remove_at(entry_index);
                return Some(Outcome::Done);
            };

            let Some(common_ancestor) = fmt_stack_index
                .checked_sub(1)
                .and_then(|i| self.open.get(i))
            else {
                debug_assert!(false, "formatting element at the stack root");
                return Some(Outcome::Done);
            };
            let mut bookmark = entry_index;

            // Inner loop: walk up from the furthest block, detaching entries
            // that are not in the formatting list and cloning those that are.
            let mut node_index = furthest_index;
            let mut last_node = furthest_block;
            let mut inner = 0u32;
            loop {
                inner += 1;
                let Some(next_index) = node_index.checked_sub(1) else {
                    debug_assert!(false, "inner walk left the stack");
                    break;
                };
                node_index = next_index;
                let Some(node) = self.open.get(node_index) else {
                    debug_assert!(false, "inner walk left the stack");
                    break;
                };
                if node == fmt_elem {
                    break;
                }
                if inner > 3 && self.formatting.contains_id(node) {
                    self.formatting.remove_by_id(node);
                }
                let Some(list_index) = self.formatting.position_of(node) else {
                    self.open.remove(node);
                    continue;
                };
                let Some(tag) = self.formatting.entry_tag(list_index).cloned() else {
                    debug_assert!(false, "formatting position resolved to a marker");
                    self.open.remove(node);
                    continue;
                };
                let replacement = self.create_element_for_token(&tag, Namespace::Html);
                self.doc.append_child(common_ancestor, replacement);
                self.formatting.set_entry(list_index, replacement, tag);
                self.open.replace(node, replacement);
                if last_node == furthest_block {
                    bookmark = list_index + 1;
                }
                self.doc.append_child(replacement, last_node);
                last_node = replacement;
            }

            // Move the chain under the common ancestor (foster-parented when
            // the ancestor is table-family).
            let point = self.appropriate_insertion_point(Some(common_ancestor));
            self.insert_at(point, last_node);

            // Fresh element for the formatting entry; the furthest block's
            // children move into it.
            let replacement = self.create_element_for_token(&fmt_tag, Namespace::Html);
            self.doc.reparent_children(furthest_block, replacement);
            self.doc.append_child(furthest_block, replacement);

            let Some(current_entry) = self.formatting.position_of(fmt_elem) else {
                debug_assert!(false, "formatting entry removed mid-algorithm");
                return Some(Outcome::Done);
            };
            if current_entry < bookmark {
                bookmark -= 1;
            }
            self.formatting.remove_at(current_entry);
            self.formatting
                .insert_entry(bookmark.min(self.formatting.len()), replacement, fmt_tag);

            self.open.remove(fmt_elem);
            match self.open.index_of(furthest_block) {
                Some(index) => self.open.insert_at(index + 1, replacement),
                None => {
                    debug_assert!(false, "furthest block fell off the stack");
                    self.open.push(replacement);
                }
            }
        }
        Some(Outcome::Done)
    }
}
