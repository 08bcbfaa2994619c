//! The Cochrane PICO ontology namespace
//! (`http://data.cochrane.org/ontologies/pico/`).
//!
//! Closed namespace, same regime as [`crate::vocab::fpr::Fpr`].

use crate::graph::term::{Iri, Object, Subject};

/// Every PICO class and property used by the mapping rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pico {
    // Classes
    Pico,
    Population,
    Intervention,
    Outcome,
    PopulationGroup,
    InterventionGroup,
    OutcomeGroup,

    // Properties
    Sex,
    Age,
    Condition,
    Treatment,
    AppliedIntervention,
    InterventionRationale,
    InterventionClassification,
    ChildIntervention,
    InterventionProp,
    OutcomeProp,
    PopulationProp,
    InterventionGroupProp,
    ComparatorGroup,
    OutcomeGroupProp,
    OutcomeClassification,
    OutcomeMeasurement,
    Endpoint,
    SpecificMetric,
}

impl Pico {
    pub const PREFIX: &'static str = "pico";
    pub const NAMESPACE: &'static str = "http://data.cochrane.org/ontologies/pico/";

    /// The term's local name inside the PICO namespace. Class and
    /// property locals differ only in capitalization (`Outcome` vs
    /// `outcome`), hence the `Prop` variants.
    pub fn local(self) -> &'static str {
        match self {
            Pico::Pico => "PICO",
            Pico::Population => "Population",
            Pico::Intervention => "Intervention",
            Pico::Outcome => "Outcome",
            Pico::PopulationGroup => "PopulationGroup",
            Pico::InterventionGroup => "InterventionGroup",
            Pico::OutcomeGroup => "OutcomeGroup",
            Pico::Sex => "sex",
            Pico::Age => "age",
            Pico::Condition => "condition",
            Pico::Treatment => "treatment",
            Pico::AppliedIntervention => "appliedIntervention",
            Pico::InterventionRationale => "interventionRationale",
            Pico::InterventionClassification => "interventionClassification",
            Pico::ChildIntervention => "childIntervention",
            Pico::InterventionProp => "intervention",
            Pico::OutcomeProp => "outcome",
            Pico::PopulationProp => "population",
            Pico::InterventionGroupProp => "interventionGroup",
            Pico::ComparatorGroup => "comparatorGroup",
            Pico::OutcomeGroupProp => "outcomeGroup",
            Pico::OutcomeClassification => "outcomeClassification",
            Pico::OutcomeMeasurement => "outcomeMeasurement",
            Pico::Endpoint => "endpoint",
            Pico::SpecificMetric => "specificMetric",
        }
    }

    pub fn iri(self) -> Iri {
        Iri::new(format!("{}{}", Self::NAMESPACE, self.local()))
    }
}

impl From<Pico> for Iri {
    fn from(term: Pico) -> Self {
        term.iri()
    }
}

impl From<Pico> for Subject {
    fn from(term: Pico) -> Self {
        Subject::Iri(term.iri())
    }
}

impl From<Pico> for Object {
    fn from(term: Pico) -> Self {
        Object::Iri(term.iri())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_and_property_locals_are_distinct() {
        assert_eq!(Pico::Outcome.local(), "Outcome");
        assert_eq!(Pico::OutcomeProp.local(), "outcome");
        assert_ne!(Pico::Outcome.iri(), Pico::OutcomeProp.iri());
    }
}
