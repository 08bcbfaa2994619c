//! The FPR ontology namespace (`https://w3id.org/zinl/fpr-o#`).
//!
//! This is a closed namespace: the enum below is the exhaustive set of
//! FPR terms the mappers may emit. Referencing an undeclared term is a
//! compile error, not a runtime lookup failure.

use crate::graph::term::{Iri, Object, Subject};

/// Every FPR class, property, and individual used by the mapping rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fpr {
    // Classes
    PackageStatement,
    IicAssessment,
    Emsmp,
    LiteratureSearch,
    SystematicLiteratureReview,
    LiteratureReferenceList,
    Scenario,
    Bia,
    CostEffectiveness,
    ManagedEntryAgreement,
    AppropriateUseAgreement,

    // Classes for value sets
    PackageType,
    PackageTypeMedicationSubtype,
    EditorialStatus,
    AssessmentType,
    EvaluationOutcome,

    // Object properties
    HasPackageType,
    HasPackageTypeMedicationSubtype,
    HasStatus,
    HasAssessmentType,
    HasIndication,
    HasIntervention,
    HasIicAssessment,
    HasEmsmp,
    HasPico,
    HasSystematicLiteratureReview,
    HasDateLimit,
    HasEvidenceType,
    HasOutcomeMeasurement,
    HasBia,
    HasScenario,
    HasTrendAssumption,
    HasCostEstimation,
    HasConclusion,
    HasRelativeEffectiveness,
    HasCostEffectiveness,
    HasManagedEntryAgreement,

    // Data properties
    HasCaseNumber,
    HasSerialNumber,
    HasGuaranteeDocument,
    HasMarketingAuthorizationHolder,
    HasClaimCode,
    HasCareActivityCode,
    HasCareProductCode,
    HasInn,
    HasAtcCode,
    HasEmaRef,
    HasNumberOfPatients,
    HasTotalCosts,
    HasMarketPenetration,
    HasTimepoint,
    HasCostType,
    HasConclusionText,
    AdheresToEmsmp,
    IsCostEffective,
    IsSurrogateOutcome,

    // Individuals
    PointOfView,
    Advice,
    LockProcedureDrug,
    Definitive,
    InitialAssessment,
    Reassessment,
    IndicationExtension,
    IndicationBroadening,
    Positive,
    Negative,
    Equal,
    Current,
    Substitution,
    Additional,
    Total,
}

impl Fpr {
    pub const PREFIX: &'static str = "fpr";
    pub const NAMESPACE: &'static str = "https://w3id.org/zinl/fpr-o#";

    /// The term's local name inside the FPR namespace.
    pub fn local(self) -> &'static str {
        match self {
            Fpr::PackageStatement => "PackageStatement",
            Fpr::IicAssessment => "IICAssessment",
            Fpr::Emsmp => "EMSMP",
            Fpr::LiteratureSearch => "LiteratureSearch",
            Fpr::SystematicLiteratureReview => "SystematicLiteratureReview",
            Fpr::LiteratureReferenceList => "LiteratureReferenceList",
            Fpr::Scenario => "Scenario",
            Fpr::Bia => "BIA",
            Fpr::CostEffectiveness => "CostEffectiveness",
            Fpr::ManagedEntryAgreement => "ManagedEntryAgreement",
            Fpr::AppropriateUseAgreement => "AppropriateUseAgreement",
            Fpr::PackageType => "PackageType",
            Fpr::PackageTypeMedicationSubtype => "PackageTypeMedicationSubtype",
            Fpr::EditorialStatus => "EditorialStatus",
            Fpr::AssessmentType => "AssessmentType",
            Fpr::EvaluationOutcome => "EvaluationOutcome",
            Fpr::HasPackageType => "hasPackageType",
            Fpr::HasPackageTypeMedicationSubtype => "hasPackageTypeMedicationSubtype",
            Fpr::HasStatus => "hasStatus",
            Fpr::HasAssessmentType => "hasAssessmentType",
            Fpr::HasIndication => "hasIndication",
            Fpr::HasIntervention => "hasIntervention",
            Fpr::HasIicAssessment => "hasIICAssessment",
            Fpr::HasEmsmp => "hasEMSMP",
            Fpr::HasPico => "hasPICO",
            Fpr::HasSystematicLiteratureReview => "hasSystematicLiteratureReview",
            Fpr::HasDateLimit => "hasDateLimit",
            Fpr::HasEvidenceType => "hasEvidenceType",
            Fpr::HasOutcomeMeasurement => "hasOutcomeMeasurement",
            Fpr::HasBia => "hasBIA",
            Fpr::HasScenario => "hasScenario",
            Fpr::HasTrendAssumption => "hasTrendAssumption",
            Fpr::HasCostEstimation => "hasCostEstimation",
            Fpr::HasConclusion => "hasConclusion",
            Fpr::HasRelativeEffectiveness => "hasRelativeEffectiveness",
            Fpr::HasCostEffectiveness => "hasCostEffectiveness",
            Fpr::HasManagedEntryAgreement => "hasManagedEntryAgreement",
            Fpr::HasCaseNumber => "hasCaseNumber",
            Fpr::HasSerialNumber => "hasSerialNumber",
            Fpr::HasGuaranteeDocument => "hasGuaranteeDocument",
            Fpr::HasMarketingAuthorizationHolder => "hasMarketingAuthorizationHolder",
            Fpr::HasClaimCode => "hasClaimCode",
            Fpr::HasCareActivityCode => "hasCareActivityCode",
            Fpr::HasCareProductCode => "hasCareProductCode",
            Fpr::HasInn => "hasINN",
            Fpr::HasAtcCode => "hasATCCode",
            Fpr::HasEmaRef => "hasEMARef",
            Fpr::HasNumberOfPatients => "hasNumberOfPatients",
            Fpr::HasTotalCosts => "hasTotalCosts",
            Fpr::HasMarketPenetration => "hasMarketPenetration",
            Fpr::HasTimepoint => "hasTimepoint",
            Fpr::HasCostType => "hasCostType",
            Fpr::HasConclusionText => "hasConclusionText",
            Fpr::AdheresToEmsmp => "adheresToEMSMP",
            Fpr::IsCostEffective => "isCostEffective",
            Fpr::IsSurrogateOutcome => "isSurrogateOutcome",
            Fpr::PointOfView => "PointOfView",
            Fpr::Advice => "Advice",
            Fpr::LockProcedureDrug => "LockProcedureDrug",
            Fpr::Definitive => "Definitive",
            Fpr::InitialAssessment => "InitialAssessment",
            Fpr::Reassessment => "Reassessment",
            Fpr::IndicationExtension => "IndicationExtension",
            Fpr::IndicationBroadening => "IndicationBroadening",
            Fpr::Positive => "Positive",
            Fpr::Negative => "Negative",
            Fpr::Equal => "Equal",
            Fpr::Current => "Current",
            Fpr::Substitution => "Substitution",
            Fpr::Additional => "Additional",
            Fpr::Total => "Total",
        }
    }

    pub fn iri(self) -> Iri {
        Iri::new(format!("{}{}", Self::NAMESPACE, self.local()))
    }
}

impl From<Fpr> for Iri {
    fn from(term: Fpr) -> Self {
        term.iri()
    }
}

impl From<Fpr> for Subject {
    fn from(term: Fpr) -> Self {
        Subject::Iri(term.iri())
    }
}

impl From<Fpr> for Object {
    fn from(term: Fpr) -> Self {
        Object::Iri(term.iri())
    }
}
