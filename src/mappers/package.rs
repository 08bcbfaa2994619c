//! Package statement mapping, plus the fixed organization preamble.

use crate::document::PackageStatement;
use crate::error::AppError;
use crate::graph::term::{Iri, Literal, Triple};
use crate::resolve::Resolver;
use crate::vocab::standard::{Dc, Dcterms, Org, Rdf, Rdfs};
use crate::vocab::{tables, Fpr};

const ORGANIZATION_ID: &str = "Organization-ZorginstituutNederland";
const DEPARTMENT_ID: &str = "OrganizationalUnit-Department-Zorg-I";
const TEAM_ID: &str = "OrganizationalUnit-Team-Pakket-en-Advies";

/// The issuing organization hierarchy: Zorginstituut Nederland, its
/// Zorg I department, and the Pakket en Advies team that publishes
/// every package statement.
pub fn organization_triples(resolver: &Resolver) -> Vec<Triple> {
    let zin = resolver.record(ORGANIZATION_ID);
    let department = resolver.record(DEPARTMENT_ID);
    let team = resolver.record(TEAM_ID);

    vec![
        Triple::new(zin.clone(), Rdf::TYPE, Org::FORMAL_ORGANIZATION),
        Triple::new(zin.clone(), Rdfs::LABEL, Literal::string("Zorginstituut Nederland")),
        Triple::new(department.clone(), Rdf::TYPE, Org::ORGANIZATIONAL_UNIT),
        Triple::new(department.clone(), Rdfs::LABEL, Literal::string("Department Zorg I")),
        Triple::new(zin, Org::HAS_UNIT, department.clone()),
        Triple::new(team.clone(), Rdf::TYPE, Org::ORGANIZATIONAL_UNIT),
        Triple::new(team.clone(), Rdfs::LABEL, Literal::string("Team Pakket en Advies")),
        Triple::new(department, Org::HAS_UNIT, team),
    ]
}

pub fn map_package_statement(
    package: &PackageStatement,
    resolver: &mut Resolver,
) -> Result<Vec<Triple>, AppError> {
    let subject = resolver.record(&package.id);
    let mut triples = vec![
        Triple::new(subject.clone(), Rdf::TYPE, Fpr::PackageStatement),
        Triple::new(
            subject.clone(),
            Fpr::HasPackageType,
            tables::package_type(&package.package_type)?,
        ),
    ];
    if let Some(subtype) = &package.package_type_medication_subtype {
        triples.push(Triple::new(
            subject.clone(),
            Fpr::HasPackageTypeMedicationSubtype,
            tables::medication_subtype(subtype)?,
        ));
    }
    triples.push(Triple::new(
        subject.clone(),
        Rdfs::LABEL,
        Literal::string(package.title.as_str()),
    ));
    triples.push(Triple::new(
        subject.clone(),
        Dcterms::ISSUED,
        Literal::date(package.date),
    ));
    triples.push(Triple::new(
        subject.clone(),
        Fpr::HasCaseNumber,
        Literal::integer(package.case_number),
    ));
    triples.push(Triple::new(
        subject.clone(),
        Fpr::HasSerialNumber,
        Literal::integer(package.serial_number),
    ));
    triples.push(Triple::new(
        subject.clone(),
        Fpr::HasStatus,
        tables::editorial_status(&package.status)?,
    ));
    for contact in &package.contact_person {
        triples.push(Triple::new(
            subject.clone(),
            Dc::CONTRIBUTOR,
            Literal::string(contact.as_str()),
        ));
    }
    triples.push(Triple::new(
        subject.clone(),
        Dcterms::PUBLISHER,
        resolver.record(TEAM_ID),
    ));
    triples.push(Triple::new(
        subject.clone(),
        Rdfs::SEE_ALSO,
        Iri::new(package.see_also.as_str()),
    ));
    if let Some(guarantee) = &package.guarantee_document {
        triples.push(Triple::new(
            subject.clone(),
            Fpr::HasGuaranteeDocument,
            Iri::new(guarantee.as_str()),
        ));
    }
    for assessment in &package.iic_assessments {
        triples.push(Triple::new(
            subject.clone(),
            Fpr::HasIicAssessment,
            resolver.record(assessment),
        ));
    }
    Ok(triples)
}
