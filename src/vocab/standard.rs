//! Standard vocabularies: W3C core terms, Dublin Core, W3C ORG, PROV,
//! OWL-Time, schema.org, the RDF Data Cube vocabulary, and SPAR FaBiO.
//!
//! Only the terms the mappers emit are declared; each is a full IRI
//! constant so no run-time lookup can name an undeclared term.

use crate::graph::term::Iri;

pub struct Rdf;

impl Rdf {
    pub const PREFIX: &'static str = "rdf";
    pub const NAMESPACE: &'static str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";

    pub const TYPE: Iri = Iri::from_static("http://www.w3.org/1999/02/22-rdf-syntax-ns#type");
}

pub struct Rdfs;

impl Rdfs {
    pub const PREFIX: &'static str = "rdfs";
    pub const NAMESPACE: &'static str = "http://www.w3.org/2000/01/rdf-schema#";

    pub const LABEL: Iri = Iri::from_static("http://www.w3.org/2000/01/rdf-schema#label");
    pub const SEE_ALSO: Iri = Iri::from_static("http://www.w3.org/2000/01/rdf-schema#seeAlso");
}

/// XML Schema datatypes used by the fixed field→datatype table.
pub struct Xsd;

impl Xsd {
    pub const PREFIX: &'static str = "xsd";
    pub const NAMESPACE: &'static str = "http://www.w3.org/2001/XMLSchema#";

    pub const INTEGER: Iri = Iri::from_static("http://www.w3.org/2001/XMLSchema#integer");
    pub const FLOAT: Iri = Iri::from_static("http://www.w3.org/2001/XMLSchema#float");
    pub const BOOLEAN: Iri = Iri::from_static("http://www.w3.org/2001/XMLSchema#boolean");
    pub const DATE: Iri = Iri::from_static("http://www.w3.org/2001/XMLSchema#date");
    pub const DATE_TIME: Iri = Iri::from_static("http://www.w3.org/2001/XMLSchema#dateTime");
    pub const G_YEAR: Iri = Iri::from_static("http://www.w3.org/2001/XMLSchema#gYear");
}

pub struct Skos;

impl Skos {
    pub const PREFIX: &'static str = "skos";
    pub const NAMESPACE: &'static str = "http://www.w3.org/2004/02/skos/core#";

    pub const NOTE: Iri = Iri::from_static("http://www.w3.org/2004/02/skos/core#note");
}

pub struct Prov;

impl Prov {
    pub const PREFIX: &'static str = "prov";
    pub const NAMESPACE: &'static str = "http://www.w3.org/ns/prov#";

    pub const ENDED_AT_TIME: Iri = Iri::from_static("http://www.w3.org/ns/prov#endedAtTime");
    pub const WAS_GENERATED_BY: Iri = Iri::from_static("http://www.w3.org/ns/prov#wasGeneratedBy");
    pub const HAD_MEMBER: Iri = Iri::from_static("http://www.w3.org/ns/prov#hadMember");
    pub const WAS_DERIVED_FROM: Iri = Iri::from_static("http://www.w3.org/ns/prov#wasDerivedFrom");
}

/// OWL-Time terms for literature search year ranges.
pub struct Time;

impl Time {
    pub const PREFIX: &'static str = "time";
    pub const NAMESPACE: &'static str = "http://www.w3.org/2006/time#";

    pub const INTERVAL: Iri = Iri::from_static("http://www.w3.org/2006/time#Interval");
    pub const INSTANT: Iri = Iri::from_static("http://www.w3.org/2006/time#Instant");
    pub const HAS_BEGINNING: Iri = Iri::from_static("http://www.w3.org/2006/time#hasBeginning");
    pub const HAS_END: Iri = Iri::from_static("http://www.w3.org/2006/time#hasEnd");
    pub const IN_XSD_G_YEAR: Iri = Iri::from_static("http://www.w3.org/2006/time#inXSDgYear");
}

/// schema.org terms for literature searches and reference lists.
pub struct Sdo;

impl Sdo {
    pub const PREFIX: &'static str = "sdo";
    pub const NAMESPACE: &'static str = "https://schema.org/";

    pub const NAME: Iri = Iri::from_static("https://schema.org/name");
    pub const TARGET: Iri = Iri::from_static("https://schema.org/target");
    pub const QUERY: Iri = Iri::from_static("https://schema.org/query");
    pub const RESULT: Iri = Iri::from_static("https://schema.org/result");
    pub const NUMBER_OF_ITEMS: Iri = Iri::from_static("https://schema.org/numberOfItems");
    pub const ITEM_LIST_ELEMENT: Iri = Iri::from_static("https://schema.org/itemListElement");
}

/// RDF Data Cube terms for trend assumption and cost estimation datasets.
pub struct Qb;

impl Qb {
    pub const PREFIX: &'static str = "qb";
    pub const NAMESPACE: &'static str = "http://purl.org/linked-data/cube#";

    /// The qb:DataSet class.
    pub const DATA_SET: Iri = Iri::from_static("http://purl.org/linked-data/cube#DataSet");
    pub const OBSERVATION: Iri = Iri::from_static("http://purl.org/linked-data/cube#Observation");
    /// The qb:dataSet property linking an observation to its dataset.
    pub const DATA_SET_PROP: Iri = Iri::from_static("http://purl.org/linked-data/cube#dataSet");
}

pub struct Dc;

impl Dc {
    pub const PREFIX: &'static str = "dc";
    pub const NAMESPACE: &'static str = "http://purl.org/dc/elements/1.1/";

    pub const CONTRIBUTOR: Iri = Iri::from_static("http://purl.org/dc/elements/1.1/contributor");
}

pub struct Dcterms;

impl Dcterms {
    pub const PREFIX: &'static str = "dcterms";
    pub const NAMESPACE: &'static str = "http://purl.org/dc/terms/";

    pub const TITLE: Iri = Iri::from_static("http://purl.org/dc/terms/title");
    pub const DESCRIPTION: Iri = Iri::from_static("http://purl.org/dc/terms/description");
    pub const ISSUED: Iri = Iri::from_static("http://purl.org/dc/terms/issued");
    pub const PUBLISHER: Iri = Iri::from_static("http://purl.org/dc/terms/publisher");
    pub const HAS_PART: Iri = Iri::from_static("http://purl.org/dc/terms/hasPart");
    pub const SOURCE: Iri = Iri::from_static("http://purl.org/dc/terms/source");
    pub const IDENTIFIER: Iri = Iri::from_static("http://purl.org/dc/terms/identifier");
    pub const BIBLIOGRAPHIC_CITATION: Iri =
        Iri::from_static("http://purl.org/dc/terms/bibliographicCitation");
}

pub struct Org;

impl Org {
    pub const PREFIX: &'static str = "org";
    pub const NAMESPACE: &'static str = "http://www.w3.org/ns/org#";

    pub const FORMAL_ORGANIZATION: Iri =
        Iri::from_static("http://www.w3.org/ns/org#FormalOrganization");
    pub const ORGANIZATIONAL_UNIT: Iri =
        Iri::from_static("http://www.w3.org/ns/org#OrganizationalUnit");
    pub const HAS_UNIT: Iri = Iri::from_static("http://www.w3.org/ns/org#hasUnit");
}

/// SPAR FaBiO bibliographic classes.
pub struct Fabio;

impl Fabio {
    pub const PREFIX: &'static str = "fabio";
    pub const NAMESPACE: &'static str = "http://purl.org/spar/fabio/";

    pub const SYSTEMATIC_LITERATURE_REVIEW: Iri =
        Iri::from_static("http://purl.org/spar/fabio/SystematicLiteratureReview");
    pub const JOURNAL_ARTICLE: Iri = Iri::from_static("http://purl.org/spar/fabio/JournalArticle");
    pub const MANUSCRIPT: Iri = Iri::from_static("http://purl.org/spar/fabio/Manuscript");
}
