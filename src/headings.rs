//! Heading index and identifier derivation.
//!
//! The index is built once per page load, in document order, and that order
//! defines the navigation sequence. Offsets are not stored: they change with
//! reflow, so callers read them through the gateway when they need them.

#[cfg(test)]
#[path = "headings_test.rs"]
mod headings_test;

use crate::gateway::DocumentGateway;

/// Derive a heading identifier: lowercase text with every whitespace run
/// collapsed into a single `_`.
///
/// Identical texts always produce identical identifiers; collisions between
/// headings are not resolved.
#[must_use]
pub fn derive_identifier(text: &str) -> String {
    let mut id = String::with_capacity(text.len());
    let mut in_space = false;
    for ch in text.chars() {
        if ch.is_whitespace() {
            if !in_space {
                id.push('_');
            }
            in_space = true;
        } else {
            id.extend(ch.to_lowercase());
            in_space = false;
        }
    }
    id
}

/// A navigable heading: a back-reference into the live document plus its
/// derived identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct HeadingEntity<N> {
    pub node: N,
    pub id: String,
}

#[derive(Debug, Clone)]
pub struct HeadingIndex<N> {
    entries: Vec<HeadingEntity<N>>,
}

impl<N> Default for HeadingIndex<N> {
    fn default() -> Self {
        Self { entries: Vec::new() }
    }
}

impl<N: Clone + PartialEq> HeadingIndex<N> {
    /// Build the index from `nodes` in the given order.
    pub fn build(nodes: Vec<N>, text_of: impl Fn(&N) -> String) -> Self {
        let entries = nodes
            .into_iter()
            .map(|node| {
                let id = derive_identifier(&text_of(&node));
                HeadingEntity { node, id }
            })
            .collect();
        Self { entries }
    }

    /// Index every element matching `selector` and write each derived
    /// identifier back as the element's id, so URL fragments resolve.
    pub fn from_document<D>(doc: &mut D, selector: &str) -> Self
    where
        D: DocumentGateway<Node = N>,
    {
        let index = Self::build(doc.query_all(selector), |node| doc.text_content(node));
        for entry in &index.entries {
            doc.set_id(&entry.node, &entry.id);
        }
        log::debug!("indexed {} headings", index.len());
        index
    }

    /// Entries in document order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &HeadingEntity<N>> {
        self.entries.iter()
    }

    /// Entries in reverse document order.
    pub fn iter_rev(&self) -> impl Iterator<Item = &HeadingEntity<N>> {
        self.entries.iter().rev()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up the entry for a live element.
    #[must_use]
    pub fn find(&self, node: &N) -> Option<&HeadingEntity<N>> {
        self.entries.iter().find(|entry| &entry.node == node)
    }
}
