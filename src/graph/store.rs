//! In-memory triple store built up by the mappers.

use std::collections::HashSet;

use super::term::Triple;

/// Insertion-ordered set of triples plus the namespace prefix bindings
/// handed to the serializer.
///
/// The store performs no structural validation: every triple offered is
/// preserved in offered order, and duplicate triples collapse as in a
/// set. One store is created per conversion run and discarded afterwards.
#[derive(Debug, Default)]
pub struct TripleStore {
    triples: Vec<Triple>,
    seen: HashSet<Triple>,
    prefixes: Vec<(String, String)>,
}

impl TripleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `prefix` to a namespace IRI for serialization. Binding the
    /// same prefix again replaces the earlier namespace.
    pub fn bind(&mut self, prefix: &str, namespace: &str) {
        if let Some(entry) = self.prefixes.iter_mut().find(|(p, _)| p == prefix) {
            entry.1 = namespace.to_string();
        } else {
            self.prefixes.push((prefix.to_string(), namespace.to_string()));
        }
    }

    /// Inserts one triple. Returns false if an equal triple was already
    /// present.
    pub fn insert(&mut self, triple: Triple) -> bool {
        if self.seen.insert(triple.clone()) {
            self.triples.push(triple);
            true
        } else {
            false
        }
    }

    /// Inserts every triple from `triples`, preserving their order.
    pub fn extend(&mut self, triples: impl IntoIterator<Item = Triple>) {
        for triple in triples {
            self.insert(triple);
        }
    }

    pub fn len(&self) -> usize {
        self.triples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Triple> {
        self.triples.iter()
    }

    /// Prefix bindings in binding order.
    pub fn prefixes(&self) -> &[(String, String)] {
        &self.prefixes
    }
}
