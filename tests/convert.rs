//! End-to-end conversion tests over complete documents.

use fprgraph::config::ConversionConfig;
use fprgraph::convert::{convert_document, convert_file};
use fprgraph::document::PackageDocument;
use fprgraph::error::AppError;
use fprgraph::graph::{Iri, Object, Subject, Triple, TripleStore};
use fprgraph::resolve::Resolver;
use fprgraph::vocab::standard::Time;
use fprgraph::vocab::{Fpr, Pico};

/// Minimal valid document: every required section present, most empty.
const BASE: &str = r#"
package-statement:
  id: PackageStatement-1
  package-type: Advice
  title: Advice on lumacaftor/ivacaftor
  date: 2023-04-01
  case-number: 2023012345
  serial-number: 1
  status: Definitive
  contact-person:
    - A. Adviseur
  see-also: https://example.org/dossier
  iic-assessments: []
populations: []
interventions: []
intervention-groups: []
outcomes: []
outcome-groups: []
picots: []
intervention-indication-combination-assessments: []
emsmps: []
systematic-literature-reviews: []
literature-searches: []
publications: []
literature-reference-lists: []
studies: []
cohorts: []
outcome-measurements: []
bias: []
"#;

fn convert(yaml: &str) -> Result<TripleStore, AppError> {
    let document: PackageDocument = serde_yaml::from_str(yaml).expect("fixture must parse");
    convert_document(&document, Resolver::new("doc"), &ConversionConfig::default())
}

fn convert_strict(yaml: &str) -> Result<TripleStore, AppError> {
    let document: PackageDocument = serde_yaml::from_str(yaml).expect("fixture must parse");
    let options = ConversionConfig {
        strict_references: true,
        ..ConversionConfig::default()
    };
    convert_document(&document, Resolver::new("doc"), &options)
}

fn triples_about<'a>(store: &'a TripleStore, subject: &Iri) -> Vec<&'a Triple> {
    store
        .iter()
        .filter(|t| t.subject == Subject::Iri(subject.clone()))
        .collect()
}

#[test]
fn population_record_emits_exactly_its_fields() {
    let yaml = BASE.replace(
        "populations: []",
        r#"populations:
  - id: Pop-1
    title: Adults
    conditions:
      - diabetes
"#,
    );
    let store = convert(&yaml).unwrap();
    let resolver = Resolver::new("doc");
    let subject = resolver.record("Pop-1");
    let triples = triples_about(&store, &subject);
    assert_eq!(triples.len(), 3, "type, label, one condition - nothing else");

    let sex: Iri = Pico::Sex.into();
    let age: Iri = Pico::Age.into();
    let treatment: Iri = Pico::Treatment.into();
    assert!(triples
        .iter()
        .all(|t| t.predicate != sex && t.predicate != age && t.predicate != treatment));
    assert!(triples
        .iter()
        .any(|t| t.object == Object::Iri(resolver.taxonomy("diabetes"))));
}

#[test]
fn search_with_only_a_beginning_gets_half_an_interval() {
    let yaml = BASE.replace(
        "literature-searches: []",
        r#"literature-searches:
  - id: Search-1
    label: PubMed search
    end-time: 2023-02-01T10:30:00Z
    target-db: PubMed
    target-url: https://pubmed.ncbi.nlm.nih.gov/
    query: lumacaftor AND cystic fibrosis
    range-beginning: 2000
"#,
    );
    let store = convert(&yaml).unwrap();
    let blanks: std::collections::HashSet<_> = store
        .iter()
        .filter_map(|t| match &t.subject {
            Subject::Blank(node) => Some(*node),
            _ => None,
        })
        .collect();
    assert_eq!(blanks.len(), 2, "one interval node, one beginning instant");
    assert!(store.iter().any(|t| t.predicate == Time::HAS_BEGINNING));
    assert!(store.iter().all(|t| t.predicate != Time::HAS_END));
}

#[test]
fn partial_confidence_interval_emits_nothing() {
    let yaml = BASE
        .replace(
            "outcomes: []",
            r#"outcomes:
  - id: Out-1
    name: FEV1 improvement
    outcome-classification: pulmonary function
    outcome-measurement: FEV1
    surrogate-outcome: true
"#,
        )
        .replace(
            "outcome-measurements: []",
            r#"outcome-measurements:
  - id: OM-1
    type: hazard ratio
    outcome-id: Out-1
    value: 0.61
    ci-lower: 0.44
"#,
        );
    let store = convert(&yaml).unwrap();
    assert!(
        store.iter().all(|t| !matches!(t.subject, Subject::Blank(_))),
        "no interval nodes for a partial CI"
    );
}

#[test]
fn unknown_evidence_type_aborts_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("lumacaftor.yaml");
    let output = dir.path().join("lumacaftor.ttl");
    let yaml = BASE.replace(
        "literature-searches: []",
        r#"literature-searches:
  - id: Search-1
    label: Broken search
    end-time: 2023-02-01T10:30:00Z
    target-db: PubMed
    target-url: https://pubmed.ncbi.nlm.nih.gov/
    query: anything
    evidence-type: Unknown-Type
"#,
    );
    std::fs::write(&input, yaml).unwrap();

    let err = convert_file(&input, &output, &ConversionConfig::default()).unwrap_err();
    assert!(matches!(
        err,
        AppError::UnimplementedMapping { field: "evidence-type", .. }
    ));
    assert!(!output.exists(), "no partial output file");
}

#[test]
fn strict_mode_rejects_dangling_references() {
    let yaml = BASE.replace(
        "interventions: []",
        r#"interventions:
  - id: Int-1
    title: Lumacaftor
    applied-intervention: lumacaftor
    intervention-rationale: CFTR modulation
    intervention-classification: drug
    child-interventions:
      - Int-99
"#,
    );
    // Default mode replicates the original behavior: dangling ids pass.
    assert!(convert(&yaml).is_ok());

    let err = convert_strict(&yaml).unwrap_err();
    match err {
        AppError::DanglingReference { id, referenced_from } => {
            assert_eq!(id, "Int-99");
            assert!(referenced_from.contains("Int-1"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn strict_mode_rejects_duplicate_ids() {
    let yaml = BASE.replace(
        "populations: []",
        r#"populations:
  - id: Pop-1
    title: Adults
    conditions: []
  - id: Pop-1
    title: Adults again
    conditions: []
"#,
    );
    assert!(matches!(convert_strict(&yaml), Err(AppError::DuplicateId(id)) if id == "Pop-1"));
}

/// A document exercising every section, internally consistent so it
/// also passes strict mode.
fn rich_document() -> String {
    let mut yaml = BASE.to_string();
    yaml = yaml.replace("iic-assessments: []", "iic-assessments:\n    - IIC-1");
    yaml = yaml.replace(
        "populations: []",
        r#"populations:
  - id: Pop-1
    title: Adults with cystic fibrosis
    sex: female
    age: 18-65
    conditions:
      - cystic fibrosis
    treatment:
      - standard care
"#,
    );
    yaml = yaml.replace(
        "interventions: []",
        r#"interventions:
  - id: Int-1
    title: Lumacaftor/ivacaftor
    applied-intervention: lumacaftor
    intervention-rationale: CFTR modulation
    intervention-classification: drug
    inn: lumacaftor
    atc-code: R07AX30
    costs: 170000.0
"#,
    );
    yaml = yaml.replace(
        "intervention-groups: []",
        r#"intervention-groups:
  - id: IG-1
    intervention-ids:
      - Int-1
  - id: IG-2
    intervention-ids: []
"#,
    );
    yaml = yaml.replace(
        "outcomes: []",
        r#"outcomes:
  - id: Out-1
    name: FEV1 improvement
    outcome-classification: pulmonary function
    outcome-measurement: FEV1
    surrogate-outcome: true
"#,
    );
    yaml = yaml.replace(
        "outcome-groups: []",
        r#"outcome-groups:
  - id: OG-1
    endpoint: FEV1
    outcome-ids:
      - Out-1
"#,
    );
    yaml = yaml.replace(
        "picots: []",
        r#"picots:
  - id: PICO-1
    population-ids:
      - Pop-1
    intervention-group-id: IG-1
    comparator-group-id: IG-2
    outcome-group-ids:
      - OG-1
"#,
    );
    yaml = yaml.replace(
        "intervention-indication-combination-assessments: []",
        r#"intervention-indication-combination-assessments:
  - id: IIC-1
    assessment-type: Initial
    intervention-id: Int-1
    indication-ids:
      - Pop-1
    emsmp-id: EMSMP-1
    bia-id: BIA-1
    conclusion: Positive
    conclusion-text: Include in the insured package.
    cost-effective: true
    managed-entry-agreement-text: Confidential price arrangement.
"#,
    );
    yaml = yaml.replace(
        "emsmps: []",
        r#"emsmps:
  - id: EMSMP-1
    title: EMSMP evaluation
    picots-id: PICO-1
    slr-id: SLR-1
    outcome-measurement-ids:
      - OM-1
    relative-effectiveness: Positive
    adheres-to-emsmps: true
"#,
    );
    yaml = yaml.replace(
        "systematic-literature-reviews: []",
        r#"systematic-literature-reviews:
  - id: SLR-1
    title: Systematic review of CFTR modulators
    literature-searches:
      - Search-1
    literature-reference-list: LRL-1
"#,
    );
    yaml = yaml.replace(
        "literature-searches: []",
        r#"literature-searches:
  - id: Search-1
    label: PubMed search
    end-time: 2023-02-01T10:30:00Z
    target-db: PubMed
    target-url: https://pubmed.ncbi.nlm.nih.gov/
    query: lumacaftor AND cystic fibrosis
    evidence-type: RCT
    range-beginning: 2000
    range-end: 2010
"#,
    );
    yaml = yaml.replace(
        "publications: []",
        r#"publications:
  - id: Pub-1
    title: Lumacaftor-Ivacaftor in Patients with Cystic Fibrosis
    type: JournalArticle
"#,
    );
    yaml = yaml.replace(
        "literature-reference-lists: []",
        r#"literature-reference-lists:
  - id: LRL-1
    title: Included references
    number-of-items: 1
    references:
      - Pub-1
"#,
    );
    yaml = yaml.replace(
        "studies: []",
        r#"studies:
  - id: Study-1
    title: TRAFFIC
    registry: https://clinicaltrials.gov
    registry-id: NCT01807923
    url: https://clinicaltrials.gov/study/NCT01807923
    literature-reference-list-ids:
      - LRL-1
"#,
    );
    yaml = yaml.replace(
        "cohorts: []",
        r#"cohorts:
  - id: Cohort-1
    study-id: Study-1
    intervention-group-id: IG-1
"#,
    );
    yaml = yaml.replace(
        "outcome-measurements: []",
        r#"outcome-measurements:
  - id: OM-1
    type: hazard ratio
    cohort-ids:
      - Cohort-1
    outcome-id: Out-1
    value: 0.61
    unit: '%'
    ci-lower: 0.44
    ci-upper: 0.84
"#,
    );
    yaml = yaml.replace(
        "bias: []",
        r#"trend-assumptions:
  - id: Trend-1
    title: Patient growth
    scenario-id: Scenario-1
    time-points:
      - 2024
      - 2025
    time-unit: year
    number-of-patients:
      - 120
      - 150
    intervention-market-penetration:
      - 0.4
      - 0.6
scenarios:
  - id: Scenario-1
    title: Base case
    description: Expected uptake without restrictions.
cost-estimations:
  - id: CE-1
    title: Cost development
    scenario-id: Scenario-1
    trend-assumption-id: Trend-1
    time-points:
      - 2024
      - 2025
    time-unit: year
    observation-groups:
      - type: Substitution
        intervention-ids:
          - Int-1
        number-of-patients:
          - 40
          - 60
        total-costs:
          - 1200000.5
          - 1800000.5
bias:
  - id: BIA-1
    title: Budget impact of lumacaftor/ivacaftor
    trend-assumption-id: Trend-1
    cost-estimation-ids:
      - CE-1
appropriate-use:
  id: AU-1
  title: Appropriate use agreement
  date: 2023-05-01
  agreements:
    - Alleen voorschrijven door een CF-centrum.
    - Jaarlijkse evaluatie van de behandeling.
"#,
    );
    yaml
}

#[test]
fn rich_document_passes_strict_mode() {
    assert!(convert_strict(&rich_document()).is_ok());
}

#[test]
fn bia_points_at_the_recomputed_dataset_identifiers() {
    let store = convert(&rich_document()).unwrap();
    let resolver = Resolver::new("doc");
    let bia = resolver.record("BIA-1");
    let triples = triples_about(&store, &bia);
    assert!(triples.iter().any(|t| t.predicate == Fpr::HasTrendAssumption.iri()
        && t.object == Object::Iri(resolver.record("DataSet-Trend-1"))));
    assert!(triples.iter().any(|t| t.predicate == Fpr::HasCostEstimation.iri()
        && t.object == Object::Iri(resolver.record("DataSet-CE-1"))));

    // The trend assumption dataset itself exists under that identifier,
    // with year-suffixed observations.
    let dataset = resolver.record("DataSet-Trend-1");
    assert!(!triples_about(&store, &dataset).is_empty());
    let observation = resolver.record("Trend-1-year-2025");
    assert!(!triples_about(&store, &observation).is_empty());
}

#[test]
fn conversion_is_deterministic() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("lumacaftor.yaml");
    std::fs::write(&input, rich_document()).unwrap();

    let first_output = dir.path().join("first.ttl");
    let second_output = dir.path().join("second.ttl");
    convert_file(&input, &first_output, &ConversionConfig::default()).unwrap();
    convert_file(&input, &second_output, &ConversionConfig::default()).unwrap();

    let first = std::fs::read_to_string(&first_output).unwrap();
    let second = std::fs::read_to_string(&second_output).unwrap();
    assert!(!first.is_empty());
    assert_eq!(first, second);
}

#[test]
fn output_binds_the_document_namespace() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("lumacaftor.yaml");
    let output = dir.path().join("lumacaftor.ttl");
    std::fs::write(&input, rich_document()).unwrap();

    let count = convert_file(&input, &output, &ConversionConfig::default()).unwrap();
    assert!(count > 0);

    let text = std::fs::read_to_string(&output).unwrap();
    assert!(text
        .contains("@prefix data: <https://w3id.org/zinl/package-statements/lumacaftor#> ."));
    assert!(text.contains("@prefix fpr: <https://w3id.org/zinl/fpr-o#> ."));
    assert!(text.contains("data:Pop-1 a pico:Population"));
    assert!(text.contains("tax:cystic%20fibrosis"));
}

#[test]
fn missing_required_section_aborts() {
    let yaml = BASE.replace("cohorts: []\n", "");
    let document = serde_yaml::from_str::<PackageDocument>(&yaml);
    assert!(document.unwrap_err().to_string().contains("cohorts"));
}
