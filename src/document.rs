//! Typed model of the input package statement document.
//!
//! The document is a YAML mapping from section names to ordered record
//! lists (plus two singleton sections). Required sections are
//! non-defaulted fields, so a missing section aborts deserialization
//! before any mapping starts; sections the original data may omit are
//! defaulted. Optional record fields are `Option` and emit nothing when
//! absent.

use std::fmt;
use std::path::Path;

use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;

use crate::error::AppError;

/// The whole input document, sections in mapping order.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct PackageDocument {
    pub package_statement: PackageStatement,
    pub populations: Vec<Population>,
    pub interventions: Vec<Intervention>,
    pub intervention_groups: Vec<InterventionGroup>,
    pub outcomes: Vec<Outcome>,
    pub outcome_groups: Vec<OutcomeGroup>,
    pub picots: Vec<Picots>,
    #[serde(rename = "intervention-indication-combination-assessments")]
    pub iic_assessments: Vec<IicAssessment>,
    pub emsmps: Vec<Emsmp>,
    pub systematic_literature_reviews: Vec<SystematicLiteratureReview>,
    pub literature_searches: Vec<LiteratureSearch>,
    pub publications: Vec<Publication>,
    pub literature_reference_lists: Vec<LiteratureReferenceList>,
    pub studies: Vec<Study>,
    pub cohorts: Vec<Cohort>,
    pub outcome_measurements: Vec<OutcomeMeasurement>,
    #[serde(default)]
    pub trend_assumptions: Vec<TrendAssumption>,
    #[serde(default)]
    pub scenarios: Vec<Scenario>,
    #[serde(default)]
    pub cost_estimations: Vec<CostEstimation>,
    pub bias: Vec<Bia>,
    #[serde(default)]
    pub appropriate_use: Option<AppropriateUse>,
}

impl PackageDocument {
    /// Loads and deserializes the document at `path`.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let text = std::fs::read_to_string(path).map_err(|e| AppError::io(path, e))?;
        Ok(serde_yaml::from_str(&text)?)
    }
}

/// The package statement itself: case metadata plus the assessments it
/// bundles.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct PackageStatement {
    pub id: String,
    pub package_type: String,
    pub package_type_medication_subtype: Option<String>,
    pub title: String,
    pub date: NaiveDate,
    pub case_number: i64,
    pub serial_number: i64,
    pub status: String,
    pub contact_person: Vec<String>,
    pub see_also: String,
    pub guarantee_document: Option<String>,
    pub iic_assessments: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Population {
    pub id: String,
    pub title: String,
    /// Taxonomy labels.
    pub sex: Option<String>,
    pub age: Option<String>,
    pub conditions: Vec<String>,
    #[serde(default)]
    pub treatment: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Intervention {
    pub id: String,
    pub title: String,
    pub applied_intervention: String,
    pub intervention_rationale: String,
    pub intervention_classification: String,
    pub marketing_authorization_holder: Option<String>,
    pub claim_code: Option<i64>,
    pub care_activity_code: Option<String>,
    pub care_product_code: Option<String>,
    // Drug information, for pharmaceuticals
    pub inn: Option<String>,
    pub atc_code: Option<String>,
    pub ema_id: Option<String>,
    pub costs: Option<f64>,
    #[serde(default)]
    pub child_interventions: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct InterventionGroup {
    pub id: String,
    #[serde(default)]
    pub intervention_ids: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Outcome {
    pub id: String,
    pub name: String,
    pub outcome_classification: String,
    pub outcome_measurement: String,
    pub specific_metric: Option<String>,
    pub surrogate_outcome: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct OutcomeGroup {
    pub id: String,
    pub endpoint: String,
    #[serde(default)]
    pub outcome_ids: Vec<String>,
}

/// A PICO(TS) question tying populations, intervention and comparator
/// groups, and outcome groups together.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Picots {
    pub id: String,
    #[serde(default)]
    pub population_ids: Vec<String>,
    pub intervention_group_id: String,
    pub comparator_group_id: String,
    #[serde(default)]
    pub outcome_group_ids: Vec<String>,
}

/// An intervention-indication-combination assessment.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct IicAssessment {
    pub id: String,
    pub assessment_type: Option<String>,
    pub intervention_id: String,
    #[serde(default)]
    pub indication_ids: Vec<String>,
    pub emsmp_id: String,
    pub bia_id: String,
    pub conclusion: String,
    pub conclusion_text: String,
    pub cost_effective: bool,
    pub managed_entry_agreement_text: Option<String>,
}

/// Established medical science and medical practice evaluation.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Emsmp {
    pub id: String,
    pub title: String,
    pub picots_id: String,
    pub slr_id: String,
    #[serde(default)]
    pub outcome_measurement_ids: Vec<String>,
    pub relative_effectiveness: Option<String>,
    pub adheres_to_emsmps: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SystematicLiteratureReview {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub literature_searches: Vec<String>,
    pub literature_reference_list: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct LiteratureSearch {
    pub id: String,
    pub label: String,
    pub end_time: DateTime<Utc>,
    pub target_db: String,
    pub target_url: String,
    pub query: String,
    pub evidence_type: Option<String>,
    /// Publication year range limits, each an xsd:gYear.
    pub range_beginning: Option<i32>,
    pub range_end: Option<i32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Publication {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct LiteratureReferenceList {
    pub id: String,
    pub title: String,
    pub number_of_items: i64,
    #[serde(default)]
    pub references: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Study {
    pub id: String,
    pub title: String,
    pub registry: String,
    pub registry_id: String,
    pub url: String,
    #[serde(default)]
    pub literature_reference_list_ids: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Cohort {
    pub id: String,
    pub study_id: String,
    pub intervention_group_id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct OutcomeMeasurement {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub cohort_ids: Vec<String>,
    pub outcome_id: String,
    pub value: f64,
    pub unit: Option<String>,
    pub ci_lower: Option<f64>,
    pub ci_upper: Option<f64>,
}

/// A time point in a dataset: either a bare number or a label.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TimePoint {
    Number(i64),
    Label(String),
}

impl fmt::Display for TimePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimePoint::Number(n) => write!(f, "{}", n),
            TimePoint::Label(s) => f.write_str(s),
        }
    }
}

/// Patient count development assumptions behind a budget impact
/// analysis, observed per time point.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TrendAssumption {
    pub id: String,
    pub title: String,
    pub scenario_id: String,
    /// Absent means a single unnamed time point; present-but-empty
    /// means no observations at all.
    pub time_points: Option<Vec<TimePoint>>,
    pub time_unit: Option<String>,
    pub number_of_patients: Vec<i64>,
    pub intervention_market_penetration: Option<Vec<f64>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Scenario {
    pub id: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CostEstimation {
    pub id: String,
    pub title: String,
    pub scenario_id: String,
    pub trend_assumption_id: String,
    pub time_points: Option<Vec<TimePoint>>,
    pub time_unit: Option<String>,
    #[serde(default)]
    pub observation_groups: Vec<ObservationGroup>,
}

/// One cost series within a cost estimation, per cost type and
/// intervention set.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ObservationGroup {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub intervention_ids: Vec<String>,
    pub number_of_patients: Vec<i64>,
    pub total_costs: Vec<f64>,
}

/// Budget impact analysis.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Bia {
    pub id: String,
    pub title: String,
    pub trend_assumption_id: String,
    pub cost_estimation_ids: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct AppropriateUse {
    pub id: String,
    pub title: String,
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub agreements: Vec<String>,
}
