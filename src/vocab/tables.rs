//! Closed value→term tables for every enumerated field.
//!
//! One function per field, uniform policy: a value outside the closed
//! set is the named unimplemented-mapping failure, never a default and
//! never a pass-through literal. Absence of an optional enumerated field
//! is handled by the caller (no triple emitted).

use crate::error::AppError;
use crate::graph::term::Iri;

use super::fpr::Fpr;
use super::obo::{Obi, Stato, Uo};
use super::standard::Fabio;

/// `package-type` on the package statement.
pub fn package_type(value: &str) -> Result<Fpr, AppError> {
    match value {
        "PointOfView" => Ok(Fpr::PointOfView),
        "Advice" => Ok(Fpr::Advice),
        other => Err(AppError::unimplemented("package-type", other)),
    }
}

/// `package-type-medication-subtype` on the package statement.
pub fn medication_subtype(value: &str) -> Result<Fpr, AppError> {
    match value {
        "LockProcedureDrug" => Ok(Fpr::LockProcedureDrug),
        other => Err(AppError::unimplemented("package-type-medication-subtype", other)),
    }
}

/// `status` on the package statement.
pub fn editorial_status(value: &str) -> Result<Fpr, AppError> {
    match value {
        "Definitive" => Ok(Fpr::Definitive),
        other => Err(AppError::unimplemented("status", other)),
    }
}

/// `assessment-type` on an IIC assessment.
pub fn assessment_type(value: &str) -> Result<Fpr, AppError> {
    match value {
        "Initial" => Ok(Fpr::InitialAssessment),
        "Reassessment" => Ok(Fpr::Reassessment),
        "Indication extension" => Ok(Fpr::IndicationExtension),
        "Indication broadening" => Ok(Fpr::IndicationBroadening),
        other => Err(AppError::unimplemented("assessment-type", other)),
    }
}

/// `conclusion` on an IIC assessment.
pub fn conclusion(value: &str) -> Result<Fpr, AppError> {
    match value {
        "Positive" => Ok(Fpr::Positive),
        "Negative" => Ok(Fpr::Negative),
        other => Err(AppError::unimplemented("conclusion", other)),
    }
}

/// `relative-effectiveness` on an EMSMP.
pub fn relative_effectiveness(value: &str) -> Result<Fpr, AppError> {
    match value {
        "Positive" => Ok(Fpr::Positive),
        "Equal" => Ok(Fpr::Equal),
        "Negative" => Ok(Fpr::Negative),
        other => Err(AppError::unimplemented("relative-effectiveness", other)),
    }
}

/// `evidence-type` on a literature search.
pub fn evidence_type(value: &str) -> Result<Iri, AppError> {
    match value {
        "Clinical Trial" | "RCT" => Ok(Obi::CLINICAL_TRIAL),
        "Systematic Review" => Ok(Fabio::SYSTEMATIC_LITERATURE_REVIEW),
        other => Err(AppError::unimplemented("evidence-type", other)),
    }
}

/// `type` on a publication.
pub fn publication_type(value: &str) -> Result<Iri, AppError> {
    match value {
        "JournalArticle" => Ok(Fabio::JOURNAL_ARTICLE),
        "Manuscript" => Ok(Fabio::MANUSCRIPT),
        other => Err(AppError::unimplemented("type", other)),
    }
}

/// `type` on an outcome measurement, mapped to its STATO class.
pub fn measurement_type(value: &str) -> Result<Iri, AppError> {
    match value {
        "standardized mean difference" => Ok(Stato::STANDARDIZED_MEAN_DIFFERENCE),
        "mean difference" => Ok(Stato::MEAN_DIFFERENCE),
        "median difference" => Ok(Stato::MEDIAN_DIFFERENCE),
        "hazard ratio" => Ok(Stato::HAZARD_RATIO),
        "risk ratio" => Ok(Stato::RELATIVE_RISK),
        "absolute difference" => Ok(Stato::ABSOLUTE_DIFFERENCE),
        other => Err(AppError::unimplemented("type", other)),
    }
}

/// `unit` on an outcome measurement, mapped to its UO individual.
pub fn measurement_unit(value: &str) -> Result<Iri, AppError> {
    match value {
        "%" => Ok(Uo::PERCENT),
        "ml" => Ok(Uo::MILLILITER),
        "months" => Ok(Uo::MONTH),
        other => Err(AppError::unimplemented("unit", other)),
    }
}

/// `type` on a cost estimation observation group.
pub fn cost_type(value: &str) -> Result<Fpr, AppError> {
    match value {
        "Current" => Ok(Fpr::Current),
        "Substitution" => Ok(Fpr::Substitution),
        "Additional" => Ok(Fpr::Additional),
        "Total" => Ok(Fpr::Total),
        other => Err(AppError::unimplemented("cost-type", other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rct_and_clinical_trial_map_to_the_same_term() {
        assert_eq!(
            evidence_type("RCT").unwrap(),
            evidence_type("Clinical Trial").unwrap()
        );
    }

    #[test]
    fn unknown_evidence_type_is_a_named_failure() {
        let err = evidence_type("Case Report").unwrap_err();
        match err {
            AppError::UnimplementedMapping { field, value } => {
                assert_eq!(field, "evidence-type");
                assert_eq!(value, "Case Report");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn every_measurement_type_resolves_to_a_distinct_class() {
        let values = [
            "standardized mean difference",
            "mean difference",
            "median difference",
            "hazard ratio",
            "risk ratio",
            "absolute difference",
        ];
        let mut seen = std::collections::HashSet::new();
        for value in values {
            assert!(seen.insert(measurement_type(value).unwrap()));
        }
    }

    #[test]
    fn assessment_type_rejects_unknown_values() {
        assert!(assessment_type("Initial").is_ok());
        assert!(assessment_type("initial").is_err());
    }
}
