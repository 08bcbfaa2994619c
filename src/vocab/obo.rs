//! OBO Foundry vocabularies: OBI, IAO, STATO, RO, and the Units Ontology.
//!
//! OBO local names are numeric accession ids, so every term is declared
//! with its full IRI rather than namespace + local name.

use crate::graph::term::Iri;

/// Ontology for Biomedical Investigations.
pub struct Obi;

impl Obi {
    pub const PREFIX: &'static str = "OBI";
    pub const NAMESPACE: &'static str = "http://purl.obolibrary.org/obo/OBI_";

    pub const CLINICAL_TRIAL: Iri = Iri::from_static("http://purl.obolibrary.org/obo/OBI_0003699");
}

/// Information Artifact Ontology.
pub struct Iao;

impl Iao {
    pub const PREFIX: &'static str = "IAO";
    pub const NAMESPACE: &'static str = "http://purl.obolibrary.org/obo/IAO_";

    pub const IS_ABOUT: Iri = Iri::from_static("http://purl.obolibrary.org/obo/IAO_0000136");
    pub const IS_QUALITY_MEASUREMENT_OF: Iri =
        Iri::from_static("http://purl.obolibrary.org/obo/IAO_0000221");
    pub const HAS_MEASUREMENT_UNIT_LABEL: Iri =
        Iri::from_static("http://purl.obolibrary.org/obo/IAO_0000039");
}

/// Statistical Methods Ontology: cohort and effect measure terms.
pub struct Stato;

impl Stato {
    pub const PREFIX: &'static str = "STATO";
    pub const NAMESPACE: &'static str = "http://purl.obolibrary.org/obo/STATO_";

    pub const COHORT: Iri = Iri::from_static("http://purl.obolibrary.org/obo/STATO_0000203");
    pub const STANDARDIZED_MEAN_DIFFERENCE: Iri =
        Iri::from_static("http://purl.obolibrary.org/obo/STATO_0000176");
    pub const MEAN_DIFFERENCE: Iri =
        Iri::from_static("http://purl.obolibrary.org/obo/STATO_0000457");
    pub const MEDIAN_DIFFERENCE: Iri =
        Iri::from_static("http://purl.obolibrary.org/obo/STATO_0000617");
    pub const ABSOLUTE_DIFFERENCE: Iri =
        Iri::from_static("http://purl.obolibrary.org/obo/STATO_0000614");
    pub const HAZARD_RATIO: Iri = Iri::from_static("http://purl.obolibrary.org/obo/STATO_0000677");
    pub const RELATIVE_RISK: Iri = Iri::from_static("http://purl.obolibrary.org/obo/STATO_0000245");
    pub const CI95: Iri = Iri::from_static("http://purl.obolibrary.org/obo/STATO_0000196");

    pub const HAS_VALUE: Iri = Iri::from_static("http://purl.obolibrary.org/obo/STATO_0000129");
    pub const LOWER_LIMIT: Iri = Iri::from_static("http://purl.obolibrary.org/obo/STATO_0000315");
    pub const UPPER_LIMIT: Iri = Iri::from_static("http://purl.obolibrary.org/obo/STATO_0000314");
}

/// OBO Relations Ontology.
pub struct Ro;

impl Ro {
    pub const PREFIX: &'static str = "RO";
    pub const NAMESPACE: &'static str = "http://purl.obolibrary.org/obo/RO_";

    pub const PARTICIPATES_IN: Iri = Iri::from_static("http://purl.obolibrary.org/obo/RO_0000056");
    pub const CONCRETIZES: Iri = Iri::from_static("http://purl.obolibrary.org/obo/RO_0000059");
    /// Mereological part-of; lives in the BFO namespace.
    pub const HAS_PART: Iri = Iri::from_static("http://purl.obolibrary.org/obo/BFO_0000051");
}

/// Units of Measurement Ontology individuals for measurement units.
pub struct Uo;

impl Uo {
    pub const PREFIX: &'static str = "UO";
    pub const NAMESPACE: &'static str = "http://purl.obolibrary.org/obo/UO_";

    pub const PERCENT: Iri = Iri::from_static("http://purl.obolibrary.org/obo/UO_0000187");
    pub const MILLILITER: Iri = Iri::from_static("http://purl.obolibrary.org/obo/UO_0000098");
    pub const MONTH: Iri = Iri::from_static("http://purl.obolibrary.org/obo/UO_0000035");
}
