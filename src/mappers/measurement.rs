//! Mapper for outcome measurements, including the all-or-nothing
//! confidence interval.

use crate::document::OutcomeMeasurement;
use crate::error::AppError;
use crate::graph::term::{Literal, Triple};
use crate::resolve::Resolver;
use crate::vocab::obo::{Iao, Ro, Stato};
use crate::vocab::standard::Rdf;
use crate::vocab::tables;

pub fn map_outcome_measurement(
    measurement: &OutcomeMeasurement,
    resolver: &mut Resolver,
) -> Result<Vec<Triple>, AppError> {
    let subject = resolver.record(&measurement.id);
    let mut triples = Vec::new();
    if let Some(kind) = &measurement.kind {
        triples.push(Triple::new(subject.clone(), Rdf::TYPE, tables::measurement_type(kind)?));
    }
    for cohort in &measurement.cohort_ids {
        triples.push(Triple::new(subject.clone(), Iao::IS_ABOUT, resolver.record(cohort)));
    }
    triples.push(Triple::new(
        subject.clone(),
        Iao::IS_QUALITY_MEASUREMENT_OF,
        resolver.record(&measurement.outcome_id),
    ));
    triples.push(Triple::new(
        subject.clone(),
        Stato::HAS_VALUE,
        Literal::float(measurement.value),
    ));
    if let Some(unit) = &measurement.unit {
        triples.push(Triple::new(
            subject.clone(),
            Iao::HAS_MEASUREMENT_UNIT_LABEL,
            tables::measurement_unit(unit)?,
        ));
    }

    // Confidence interval: all-or-nothing. Partial bounds produce no
    // interval node at all; presence decides, so a 0.0 bound counts.
    if let (Some(lower), Some(upper)) = (measurement.ci_lower, measurement.ci_upper) {
        let lower_limit = resolver.mint_anonymous();
        triples.push(Triple::new(lower_limit, Rdf::TYPE, Stato::LOWER_LIMIT));
        triples.push(Triple::new(lower_limit, Stato::HAS_VALUE, Literal::float(lower)));
        let upper_limit = resolver.mint_anonymous();
        triples.push(Triple::new(upper_limit, Rdf::TYPE, Stato::UPPER_LIMIT));
        triples.push(Triple::new(upper_limit, Stato::HAS_VALUE, Literal::float(upper)));
        let interval = resolver.mint_anonymous();
        triples.push(Triple::new(interval, Rdf::TYPE, Stato::CI95));
        triples.push(Triple::new(interval, Iao::IS_ABOUT, subject));
        triples.push(Triple::new(interval, Ro::HAS_PART, lower_limit));
        triples.push(Triple::new(interval, Ro::HAS_PART, upper_limit));
    }
    Ok(triples)
}
