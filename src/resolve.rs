//! Identifier and reference resolution.
//!
//! Record ids resolve into a document-scoped data namespace derived from
//! the input file's base name; free-text taxonomy labels percent-encode
//! into the fixed taxonomy namespace; anonymous nodes are minted from a
//! run-scoped counter. Resolution never fails — dangling references are
//! the strict-mode check's concern, not the resolver's.

use std::path::Path;

use crate::graph::term::{BlankNode, Iri};
use crate::vocab::Tax;

const DATA_NAMESPACE_BASE: &str = "https://w3id.org/zinl/package-statements/";

/// Resolves identifiers for one conversion run.
#[derive(Debug)]
pub struct Resolver {
    namespace: String,
    next_blank: u64,
}

impl Resolver {
    /// A resolver for the document named `name` (the input file's base
    /// name without extension).
    pub fn new(name: &str) -> Self {
        Resolver {
            namespace: format!("{}{}#", DATA_NAMESPACE_BASE, name),
            next_blank: 0,
        }
    }

    /// Derives the document name from the input path.
    pub fn for_input_path(path: &Path) -> Self {
        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self::new(&name)
    }

    /// The document-scoped data namespace, for prefix binding.
    pub fn data_namespace(&self) -> &str {
        &self.namespace
    }

    /// Resolves a document-scoped record id. Pure: the same document
    /// name and id always yield the same identifier.
    pub fn record(&self, id: &str) -> Iri {
        Iri::new(format!("{}{}", self.namespace, id))
    }

    /// Resolves a free-text taxonomy label by percent-encoding it into
    /// the taxonomy namespace. Equal labels converge on the same node;
    /// distinct labels never collide.
    pub fn taxonomy(&self, label: &str) -> Iri {
        Iri::new(format!("{}{}", Tax::NAMESPACE, urlencoding::encode(label)))
    }

    /// Mints a fresh anonymous node identity: unique within the run,
    /// never reused, never equal to any resolvable identifier.
    pub fn mint_anonymous(&mut self) -> BlankNode {
        let node = BlankNode(self.next_blank);
        self.next_blank += 1;
        node
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_resolution_is_deterministic() {
        let a = Resolver::new("dossier");
        let b = Resolver::new("dossier");
        assert_eq!(a.record("Pop-1"), b.record("Pop-1"));
    }

    #[test]
    fn document_name_scopes_the_namespace() {
        let a = Resolver::new("dossier-a");
        let b = Resolver::new("dossier-b");
        assert_ne!(a.record("Pop-1"), b.record("Pop-1"));
    }

    #[test]
    fn taxonomy_labels_percent_encode() {
        let resolver = Resolver::new("dossier");
        assert_eq!(
            resolver.taxonomy("type 2 diabetes").as_str(),
            "https://w3id.org/zinl/fpr-tax#type%202%20diabetes"
        );
    }

    #[test]
    fn equal_labels_converge_distinct_labels_differ() {
        let resolver = Resolver::new("dossier");
        assert_eq!(resolver.taxonomy("adults"), resolver.taxonomy("adults"));
        assert_ne!(resolver.taxonomy("adults"), resolver.taxonomy("children"));
    }

    #[test]
    fn empty_label_still_resolves() {
        let resolver = Resolver::new("dossier");
        assert_eq!(resolver.taxonomy("").as_str(), Tax::NAMESPACE);
    }

    #[test]
    fn anonymous_nodes_are_never_reused() {
        let mut resolver = Resolver::new("dossier");
        let first = resolver.mint_anonymous();
        let second = resolver.mint_anonymous();
        assert_ne!(first, second);
    }

    #[test]
    fn input_path_strips_directory_and_extension() {
        let resolver = Resolver::for_input_path(Path::new("/tmp/statements/lumacaftor.yaml"));
        assert_eq!(
            resolver.data_namespace(),
            "https://w3id.org/zinl/package-statements/lumacaftor#"
        );
    }
}
