//! Mappers for IIC assessments and EMSMP evaluations.

use crate::document::{Emsmp, IicAssessment};
use crate::error::AppError;
use crate::graph::term::{Literal, Triple};
use crate::resolve::Resolver;
use crate::vocab::standard::{Dcterms, Rdf, Skos};
use crate::vocab::{tables, Fpr};

pub fn map_iic_assessment(
    assessment: &IicAssessment,
    resolver: &mut Resolver,
) -> Result<Vec<Triple>, AppError> {
    let subject = resolver.record(&assessment.id);
    let mut triples = vec![Triple::new(subject.clone(), Rdf::TYPE, Fpr::IicAssessment)];
    if let Some(kind) = &assessment.assessment_type {
        triples.push(Triple::new(
            subject.clone(),
            Fpr::HasAssessmentType,
            tables::assessment_type(kind)?,
        ));
    }
    triples.push(Triple::new(
        subject.clone(),
        Fpr::HasIntervention,
        resolver.record(&assessment.intervention_id),
    ));
    for indication in &assessment.indication_ids {
        triples.push(Triple::new(
            subject.clone(),
            Fpr::HasIndication,
            resolver.record(indication),
        ));
    }
    triples.push(Triple::new(
        subject.clone(),
        Fpr::HasEmsmp,
        resolver.record(&assessment.emsmp_id),
    ));
    triples.push(Triple::new(
        subject.clone(),
        Fpr::HasBia,
        resolver.record(&assessment.bia_id),
    ));
    triples.push(Triple::new(
        subject.clone(),
        Fpr::HasConclusion,
        tables::conclusion(&assessment.conclusion)?,
    ));
    triples.push(Triple::new(
        subject.clone(),
        Fpr::HasConclusionText,
        Literal::string(assessment.conclusion_text.as_str()),
    ));

    // The cost-effectiveness wrapper has no identity of its own.
    let cost_effectiveness = resolver.mint_anonymous();
    triples.push(Triple::new(cost_effectiveness, Rdf::TYPE, Fpr::CostEffectiveness));
    triples.push(Triple::new(
        cost_effectiveness,
        Fpr::IsCostEffective,
        Literal::boolean(assessment.cost_effective),
    ));
    triples.push(Triple::new(
        subject.clone(),
        Fpr::HasCostEffectiveness,
        cost_effectiveness,
    ));

    if let Some(text) = &assessment.managed_entry_agreement_text {
        let agreement = resolver.mint_anonymous();
        triples.push(Triple::new(agreement, Rdf::TYPE, Fpr::ManagedEntryAgreement));
        triples.push(Triple::new(agreement, Skos::NOTE, Literal::string(text.as_str())));
        triples.push(Triple::new(subject, Fpr::HasManagedEntryAgreement, agreement));
    }
    Ok(triples)
}

pub fn map_emsmp(emsmp: &Emsmp, resolver: &mut Resolver) -> Result<Vec<Triple>, AppError> {
    let subject = resolver.record(&emsmp.id);
    let mut triples = vec![
        Triple::new(subject.clone(), Rdf::TYPE, Fpr::Emsmp),
        Triple::new(subject.clone(), Dcterms::TITLE, Literal::string(emsmp.title.as_str())),
        Triple::new(subject.clone(), Fpr::HasPico, resolver.record(&emsmp.picots_id)),
        Triple::new(
            subject.clone(),
            Fpr::HasSystematicLiteratureReview,
            resolver.record(&emsmp.slr_id),
        ),
    ];
    for measurement in &emsmp.outcome_measurement_ids {
        triples.push(Triple::new(
            subject.clone(),
            Fpr::HasOutcomeMeasurement,
            resolver.record(measurement),
        ));
    }
    if let Some(effectiveness) = &emsmp.relative_effectiveness {
        triples.push(Triple::new(
            subject.clone(),
            Fpr::HasRelativeEffectiveness,
            tables::relative_effectiveness(effectiveness)?,
        ));
    }
    triples.push(Triple::new(
        subject,
        Fpr::AdheresToEmsmp,
        Literal::boolean(emsmp.adheres_to_emsmps),
    ));
    Ok(triples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::term::{Object, Subject};

    fn sample_assessment() -> IicAssessment {
        IicAssessment {
            id: "IIC-1".into(),
            assessment_type: Some("Initial".into()),
            intervention_id: "Int-1".into(),
            indication_ids: vec!["Pop-1".into()],
            emsmp_id: "EMSMP-1".into(),
            bia_id: "BIA-1".into(),
            conclusion: "Positive".into(),
            conclusion_text: "Include in the package.".into(),
            cost_effective: true,
            managed_entry_agreement_text: None,
        }
    }

    #[test]
    fn cost_effectiveness_is_an_anonymous_wrapper() {
        let mut resolver = Resolver::new("doc");
        let triples = map_iic_assessment(&sample_assessment(), &mut resolver).unwrap();
        let wrapper = triples
            .iter()
            .find_map(|t| match (&t.predicate, &t.object) {
                (p, Object::Blank(node)) if *p == Fpr::HasCostEffectiveness.iri() => Some(*node),
                _ => None,
            })
            .expect("wrapper link missing");
        assert!(triples.contains(&Triple::new(wrapper, Rdf::TYPE, Fpr::CostEffectiveness)));
        assert!(triples.contains(&Triple::new(
            wrapper,
            Fpr::IsCostEffective,
            Literal::boolean(true),
        )));
    }

    #[test]
    fn two_assessments_get_distinct_wrappers() {
        let mut resolver = Resolver::new("doc");
        let first = map_iic_assessment(&sample_assessment(), &mut resolver).unwrap();
        let second = map_iic_assessment(&sample_assessment(), &mut resolver).unwrap();
        let wrapper_of = |triples: &[Triple]| {
            triples
                .iter()
                .find_map(|t| match &t.subject {
                    Subject::Blank(node) => Some(*node),
                    _ => None,
                })
                .unwrap()
        };
        assert_ne!(wrapper_of(&first), wrapper_of(&second));
    }

    #[test]
    fn unknown_assessment_type_aborts() {
        let mut assessment = sample_assessment();
        assessment.assessment_type = Some("Exploratory".into());
        let mut resolver = Resolver::new("doc");
        let err = map_iic_assessment(&assessment, &mut resolver).unwrap_err();
        assert!(matches!(err, AppError::UnimplementedMapping { field: "assessment-type", .. }));
    }

    #[test]
    fn managed_entry_agreement_only_when_text_present() {
        let mut resolver = Resolver::new("doc");
        let triples = map_iic_assessment(&sample_assessment(), &mut resolver).unwrap();
        let mea: crate::graph::term::Iri = Fpr::HasManagedEntryAgreement.into();
        assert!(triples.iter().all(|t| t.predicate != mea));

        let mut assessment = sample_assessment();
        assessment.managed_entry_agreement_text = Some("Price arrangement applies.".into());
        let triples = map_iic_assessment(&assessment, &mut resolver).unwrap();
        assert!(triples.iter().any(|t| t.predicate == mea));
    }

    #[test]
    fn emsmp_relative_effectiveness_is_optional() {
        let emsmp = Emsmp {
            id: "EMSMP-1".into(),
            title: "EMSMP for lumacaftor".into(),
            picots_id: "PICO-1".into(),
            slr_id: "SLR-1".into(),
            outcome_measurement_ids: vec![],
            relative_effectiveness: None,
            adheres_to_emsmps: true,
        };
        let mut resolver = Resolver::new("doc");
        let triples = map_emsmp(&emsmp, &mut resolver).unwrap();
        let effectiveness: crate::graph::term::Iri = Fpr::HasRelativeEffectiveness.into();
        assert!(triples.iter().all(|t| t.predicate != effectiveness));
        assert!(triples.contains(&Triple::new(
            resolver.record("EMSMP-1"),
            Fpr::AdheresToEmsmp,
            Literal::boolean(true),
        )));
    }
}
