//! Mappers for the PICO building blocks: populations, interventions,
//! outcomes, their groups, and the PICO(TS) questions tying them
//! together.

use crate::document::{Intervention, InterventionGroup, Outcome, OutcomeGroup, Picots, Population};
use crate::error::AppError;
use crate::graph::term::{Literal, Triple};
use crate::resolve::Resolver;
use crate::vocab::standard::{Dcterms, Rdf, Rdfs};
use crate::vocab::{Fpr, Pico};

pub fn map_population(
    population: &Population,
    resolver: &mut Resolver,
) -> Result<Vec<Triple>, AppError> {
    let subject = resolver.record(&population.id);
    let mut triples = vec![
        Triple::new(subject.clone(), Rdf::TYPE, Pico::Population),
        Triple::new(subject.clone(), Rdfs::LABEL, Literal::string(population.title.as_str())),
    ];
    if let Some(sex) = &population.sex {
        triples.push(Triple::new(subject.clone(), Pico::Sex, resolver.taxonomy(sex)));
    }
    if let Some(age) = &population.age {
        triples.push(Triple::new(subject.clone(), Pico::Age, resolver.taxonomy(age)));
    }
    for condition in &population.conditions {
        triples.push(Triple::new(
            subject.clone(),
            Pico::Condition,
            resolver.taxonomy(condition),
        ));
    }
    for treatment in &population.treatment {
        triples.push(Triple::new(
            subject.clone(),
            Pico::Treatment,
            resolver.taxonomy(treatment),
        ));
    }
    Ok(triples)
}

pub fn map_intervention(
    intervention: &Intervention,
    resolver: &mut Resolver,
) -> Result<Vec<Triple>, AppError> {
    let subject = resolver.record(&intervention.id);
    let mut triples = vec![
        Triple::new(subject.clone(), Rdf::TYPE, Pico::Intervention),
        Triple::new(
            subject.clone(),
            Dcterms::TITLE,
            Literal::string(intervention.title.as_str()),
        ),
        Triple::new(
            subject.clone(),
            Pico::AppliedIntervention,
            resolver.taxonomy(&intervention.applied_intervention),
        ),
        Triple::new(
            subject.clone(),
            Pico::InterventionRationale,
            Literal::string(intervention.intervention_rationale.as_str()),
        ),
        Triple::new(
            subject.clone(),
            Pico::InterventionClassification,
            resolver.taxonomy(&intervention.intervention_classification),
        ),
    ];
    if let Some(holder) = &intervention.marketing_authorization_holder {
        triples.push(Triple::new(
            subject.clone(),
            Fpr::HasMarketingAuthorizationHolder,
            Literal::string(holder.as_str()),
        ));
    }
    if let Some(code) = intervention.claim_code {
        triples.push(Triple::new(subject.clone(), Fpr::HasClaimCode, Literal::integer(code)));
    }
    if let Some(code) = &intervention.care_activity_code {
        triples.push(Triple::new(
            subject.clone(),
            Fpr::HasCareActivityCode,
            Literal::string(code.as_str()),
        ));
    }
    if let Some(code) = &intervention.care_product_code {
        triples.push(Triple::new(
            subject.clone(),
            Fpr::HasCareProductCode,
            Literal::string(code.as_str()),
        ));
    }
    // Drug information, for pharmaceuticals
    if let Some(inn) = &intervention.inn {
        triples.push(Triple::new(subject.clone(), Fpr::HasInn, Literal::string(inn.as_str())));
    }
    if let Some(atc) = &intervention.atc_code {
        triples.push(Triple::new(subject.clone(), Fpr::HasAtcCode, Literal::string(atc.as_str())));
    }
    if let Some(ema) = &intervention.ema_id {
        triples.push(Triple::new(subject.clone(), Fpr::HasEmaRef, Literal::string(ema.as_str())));
    }
    if let Some(costs) = intervention.costs {
        triples.push(Triple::new(subject.clone(), Fpr::HasTotalCosts, Literal::float(costs)));
    }
    for child in &intervention.child_interventions {
        triples.push(Triple::new(
            subject.clone(),
            Pico::ChildIntervention,
            resolver.record(child),
        ));
    }
    Ok(triples)
}

pub fn map_intervention_group(
    group: &InterventionGroup,
    resolver: &mut Resolver,
) -> Result<Vec<Triple>, AppError> {
    let subject = resolver.record(&group.id);
    let mut triples = vec![Triple::new(subject.clone(), Rdf::TYPE, Pico::InterventionGroup)];
    for member in &group.intervention_ids {
        triples.push(Triple::new(
            subject.clone(),
            Pico::InterventionProp,
            resolver.record(member),
        ));
    }
    Ok(triples)
}

pub fn map_outcome(outcome: &Outcome, resolver: &mut Resolver) -> Result<Vec<Triple>, AppError> {
    let subject = resolver.record(&outcome.id);
    let mut triples = vec![
        Triple::new(subject.clone(), Rdf::TYPE, Pico::Outcome),
        Triple::new(subject.clone(), Rdfs::LABEL, Literal::string(outcome.name.as_str())),
        Triple::new(
            subject.clone(),
            Pico::OutcomeClassification,
            resolver.taxonomy(&outcome.outcome_classification),
        ),
        Triple::new(
            subject.clone(),
            Pico::OutcomeMeasurement,
            resolver.taxonomy(&outcome.outcome_measurement),
        ),
    ];
    if let Some(metric) = &outcome.specific_metric {
        triples.push(Triple::new(
            subject.clone(),
            Pico::SpecificMetric,
            resolver.taxonomy(metric),
        ));
    }
    triples.push(Triple::new(
        subject,
        Fpr::IsSurrogateOutcome,
        Literal::boolean(outcome.surrogate_outcome),
    ));
    Ok(triples)
}

pub fn map_outcome_group(
    group: &OutcomeGroup,
    resolver: &mut Resolver,
) -> Result<Vec<Triple>, AppError> {
    let subject = resolver.record(&group.id);
    let mut triples = vec![
        Triple::new(subject.clone(), Rdf::TYPE, Pico::OutcomeGroup),
        Triple::new(subject.clone(), Pico::Endpoint, Literal::string(group.endpoint.as_str())),
    ];
    for member in &group.outcome_ids {
        triples.push(Triple::new(subject.clone(), Pico::OutcomeProp, resolver.record(member)));
    }
    Ok(triples)
}

pub fn map_picots(picots: &Picots, resolver: &mut Resolver) -> Result<Vec<Triple>, AppError> {
    let subject = resolver.record(&picots.id);
    let mut triples = vec![Triple::new(subject.clone(), Rdf::TYPE, Pico::Pico)];
    for population in &picots.population_ids {
        triples.push(Triple::new(
            subject.clone(),
            Pico::PopulationProp,
            resolver.record(population),
        ));
    }
    triples.push(Triple::new(
        subject.clone(),
        Pico::InterventionGroupProp,
        resolver.record(&picots.intervention_group_id),
    ));
    triples.push(Triple::new(
        subject.clone(),
        Pico::ComparatorGroup,
        resolver.record(&picots.comparator_group_id),
    ));
    for group in &picots.outcome_group_ids {
        triples.push(Triple::new(
            subject.clone(),
            Pico::OutcomeGroupProp,
            resolver.record(group),
        ));
    }
    Ok(triples)
}
