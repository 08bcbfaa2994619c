//! Vocabulary registry: every namespace and term the mappers may emit.
//!
//! The FPR ontology and the Cochrane PICO vocabulary are closed
//! namespaces declared as enums; external vocabularies are declared as
//! `const` IRIs. All of it is immutable, process-wide data — mappers
//! reference it directly, tests can build restricted stores on top.

pub mod fpr;
pub mod obo;
pub mod pico;
pub mod standard;
pub mod tables;

pub use fpr::Fpr;
pub use pico::Pico;

use obo::{Iao, Obi, Ro, Stato, Uo};
use standard::{Dc, Dcterms, Fabio, Org, Prov, Qb, Rdf, Rdfs, Sdo, Skos, Time, Xsd};

/// The taxonomy namespace for percent-encoded free-text terms.
pub struct Tax;

impl Tax {
    pub const PREFIX: &'static str = "tax";
    pub const NAMESPACE: &'static str = "https://w3id.org/zinl/fpr-tax#";
}

/// The fixed prefix bindings, in binding order. The document-scoped
/// `data:` namespace is bound separately by the engine.
pub fn standard_bindings() -> [(&'static str, &'static str); 20] {
    [
        (Fpr::PREFIX, Fpr::NAMESPACE),
        (Dcterms::PREFIX, Dcterms::NAMESPACE),
        (Dc::PREFIX, Dc::NAMESPACE),
        (Org::PREFIX, Org::NAMESPACE),
        (Pico::PREFIX, Pico::NAMESPACE),
        (Tax::PREFIX, Tax::NAMESPACE),
        (Fabio::PREFIX, Fabio::NAMESPACE),
        (Iao::PREFIX, Iao::NAMESPACE),
        (Obi::PREFIX, Obi::NAMESPACE),
        (Stato::PREFIX, Stato::NAMESPACE),
        (Ro::PREFIX, Ro::NAMESPACE),
        (Uo::PREFIX, Uo::NAMESPACE),
        (Rdf::PREFIX, Rdf::NAMESPACE),
        (Rdfs::PREFIX, Rdfs::NAMESPACE),
        (Xsd::PREFIX, Xsd::NAMESPACE),
        (Skos::PREFIX, Skos::NAMESPACE),
        (Prov::PREFIX, Prov::NAMESPACE),
        (Time::PREFIX, Time::NAMESPACE),
        (Sdo::PREFIX, Sdo::NAMESPACE),
        (Qb::PREFIX, Qb::NAMESPACE),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binding_prefixes_are_unique() {
        let bindings = standard_bindings();
        let mut seen = std::collections::HashSet::new();
        for (prefix, _) in bindings {
            assert!(seen.insert(prefix), "duplicate prefix {prefix}");
        }
    }
}
