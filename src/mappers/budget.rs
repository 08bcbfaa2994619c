//! Mappers for the budget impact chain: trend assumptions, scenarios,
//! cost estimations, and the BIA tying them together.
//!
//! Trend assumptions and cost estimations become qb:DataSet nodes with
//! synthesized `DataSet-{id}` identifiers; their per-timepoint
//! observations get identifiers concatenated from the record id and a
//! positional/time-unit postfix. A BIA record recomputes the same
//! identifiers from the same ids, so these must stay deterministic
//! across the run.

use crate::document::{Bia, CostEstimation, Scenario, TimePoint, TrendAssumption};
use crate::error::AppError;
use crate::graph::term::{Iri, Literal, Triple};
use crate::resolve::Resolver;
use crate::vocab::standard::{Dcterms, Prov, Qb, Rdf};
use crate::vocab::{tables, Fpr};

/// The synthesized dataset identifier shared by the dataset mappers and
/// the BIA mapper.
fn dataset_iri(resolver: &Resolver, id: &str) -> Iri {
    resolver.record(&format!("DataSet-{}", id))
}

fn timepoint_postfix(time_unit: Option<&str>, timepoint: &TimePoint) -> String {
    match time_unit {
        Some(unit) => format!("{}-{}", unit, timepoint),
        None => timepoint.to_string(),
    }
}

impl TimePoint {
    fn literal(&self) -> Literal {
        match self {
            TimePoint::Number(n) => Literal::integer(*n),
            TimePoint::Label(s) => Literal::string(s.as_str()),
        }
    }
}

/// Absent `time-points` means one unnamed observation; an explicitly
/// empty list means none.
fn effective_time_points(time_points: &Option<Vec<TimePoint>>) -> Vec<TimePoint> {
    match time_points {
        Some(points) => points.clone(),
        None => vec![TimePoint::Label("default".to_string())],
    }
}

fn series_value<T: Copy>(
    series: &[T],
    index: usize,
    record: &str,
    field: &'static str,
) -> Result<T, AppError> {
    series.get(index).copied().ok_or(AppError::MismatchedSeries {
        record: record.to_string(),
        field,
        index,
    })
}

pub fn map_trend_assumption(
    trend: &TrendAssumption,
    resolver: &mut Resolver,
) -> Result<Vec<Triple>, AppError> {
    let dataset = dataset_iri(resolver, &trend.id);
    let mut triples = vec![
        Triple::new(dataset.clone(), Rdf::TYPE, Qb::DATA_SET),
        Triple::new(dataset.clone(), Dcterms::TITLE, Literal::string(trend.title.as_str())),
        Triple::new(dataset.clone(), Fpr::HasScenario, resolver.record(&trend.scenario_id)),
    ];
    for (i, timepoint) in effective_time_points(&trend.time_points).iter().enumerate() {
        let postfix = timepoint_postfix(trend.time_unit.as_deref(), timepoint);
        let observation = resolver.record(&format!("{}-{}", trend.id, postfix));
        triples.push(Triple::new(observation.clone(), Rdf::TYPE, Qb::OBSERVATION));
        triples.push(Triple::new(observation.clone(), Qb::DATA_SET_PROP, dataset.clone()));
        triples.push(Triple::new(observation.clone(), Fpr::HasTimepoint, timepoint.literal()));
        triples.push(Triple::new(
            observation.clone(),
            Fpr::HasNumberOfPatients,
            Literal::integer(series_value(
                &trend.number_of_patients,
                i,
                &trend.id,
                "number-of-patients",
            )?),
        ));
        if let Some(penetration) = &trend.intervention_market_penetration {
            triples.push(Triple::new(
                observation,
                Fpr::HasMarketPenetration,
                Literal::float(series_value(
                    penetration,
                    i,
                    &trend.id,
                    "intervention-market-penetration",
                )?),
            ));
        }
    }
    Ok(triples)
}

pub fn map_scenario(scenario: &Scenario, resolver: &mut Resolver) -> Result<Vec<Triple>, AppError> {
    let subject = resolver.record(&scenario.id);
    Ok(vec![
        Triple::new(subject.clone(), Rdf::TYPE, Fpr::Scenario),
        Triple::new(subject.clone(), Dcterms::TITLE, Literal::string(scenario.title.as_str())),
        Triple::new(
            subject,
            Dcterms::DESCRIPTION,
            Literal::string(scenario.description.as_str()),
        ),
    ])
}

pub fn map_cost_estimation(
    estimation: &CostEstimation,
    resolver: &mut Resolver,
) -> Result<Vec<Triple>, AppError> {
    let dataset = dataset_iri(resolver, &estimation.id);
    let mut triples = vec![
        Triple::new(dataset.clone(), Rdf::TYPE, Qb::DATA_SET),
        Triple::new(dataset.clone(), Dcterms::TITLE, Literal::string(estimation.title.as_str())),
        Triple::new(dataset.clone(), Fpr::HasScenario, resolver.record(&estimation.scenario_id)),
        Triple::new(
            dataset.clone(),
            Prov::WAS_DERIVED_FROM,
            dataset_iri(resolver, &estimation.trend_assumption_id),
        ),
    ];
    let time_points = effective_time_points(&estimation.time_points);
    for group in &estimation.observation_groups {
        let cost_type = tables::cost_type(&group.kind)?;
        for (i, timepoint) in time_points.iter().enumerate() {
            let postfix = timepoint_postfix(estimation.time_unit.as_deref(), timepoint);
            let intervention_ids = group.intervention_ids.join("-");
            let observation = resolver.record(&format!(
                "{}-{}-{}-{}",
                estimation.id, intervention_ids, group.kind, postfix
            ));
            triples.push(Triple::new(observation.clone(), Rdf::TYPE, Qb::OBSERVATION));
            triples.push(Triple::new(observation.clone(), Fpr::HasCostType, cost_type));
            triples.push(Triple::new(observation.clone(), Qb::DATA_SET_PROP, dataset.clone()));
            triples.push(Triple::new(observation.clone(), Fpr::HasTimepoint, timepoint.literal()));
            for intervention in &group.intervention_ids {
                triples.push(Triple::new(
                    observation.clone(),
                    Fpr::HasIntervention,
                    resolver.record(intervention),
                ));
            }
            triples.push(Triple::new(
                observation.clone(),
                Fpr::HasNumberOfPatients,
                Literal::integer(series_value(
                    &group.number_of_patients,
                    i,
                    &estimation.id,
                    "number-of-patients",
                )?),
            ));
            triples.push(Triple::new(
                observation,
                Fpr::HasTotalCosts,
                Literal::float(series_value(&group.total_costs, i, &estimation.id, "total-costs")?),
            ));
        }
    }
    Ok(triples)
}

/// The BIA reaches its datasets by recomputing their synthesized
/// identifiers, not by resolving declared ids.
pub fn map_bia(bia: &Bia, resolver: &mut Resolver) -> Result<Vec<Triple>, AppError> {
    let subject = resolver.record(&bia.id);
    let mut triples = vec![
        Triple::new(subject.clone(), Rdf::TYPE, Fpr::Bia),
        Triple::new(subject.clone(), Dcterms::TITLE, Literal::string(bia.title.as_str())),
        Triple::new(
            subject.clone(),
            Fpr::HasTrendAssumption,
            dataset_iri(resolver, &bia.trend_assumption_id),
        ),
    ];
    for estimation in &bia.cost_estimation_ids {
        triples.push(Triple::new(
            subject.clone(),
            Fpr::HasCostEstimation,
            dataset_iri(resolver, estimation),
        ));
    }
    Ok(triples)
}
