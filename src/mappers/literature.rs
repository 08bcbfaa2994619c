//! Mappers for the evidence trail: systematic literature reviews,
//! literature searches, publications, reference lists, studies, and
//! cohorts.

use crate::document::{
    Cohort, LiteratureReferenceList, LiteratureSearch, Publication, Study,
    SystematicLiteratureReview,
};
use crate::error::AppError;
use crate::graph::term::{Iri, Literal, Triple};
use crate::resolve::Resolver;
use crate::vocab::obo::{Iao, Obi, Ro, Stato};
use crate::vocab::standard::{Dcterms, Fabio, Prov, Rdf, Rdfs, Sdo, Time};
use crate::vocab::{tables, Fpr};

pub fn map_systematic_literature_review(
    review: &SystematicLiteratureReview,
    resolver: &mut Resolver,
) -> Result<Vec<Triple>, AppError> {
    let subject = resolver.record(&review.id);
    let mut triples = vec![
        Triple::new(subject.clone(), Rdf::TYPE, Fpr::SystematicLiteratureReview),
        Triple::new(subject.clone(), Dcterms::TITLE, Literal::string(review.title.as_str())),
    ];
    for search in &review.literature_searches {
        triples.push(Triple::new(subject.clone(), Dcterms::HAS_PART, resolver.record(search)));
    }
    let reference_list = resolver.record(&review.literature_reference_list);
    triples.push(Triple::new(subject.clone(), Sdo::RESULT, reference_list.clone()));
    triples.push(Triple::new(reference_list, Prov::WAS_GENERATED_BY, subject));
    Ok(triples)
}

pub fn map_literature_search(
    search: &LiteratureSearch,
    resolver: &mut Resolver,
) -> Result<Vec<Triple>, AppError> {
    let subject = resolver.record(&search.id);
    let mut triples = vec![
        Triple::new(subject.clone(), Rdf::TYPE, Fpr::LiteratureSearch),
        Triple::new(subject.clone(), Rdfs::LABEL, Literal::string(search.label.as_str())),
        Triple::new(subject.clone(), Prov::ENDED_AT_TIME, Literal::date_time(search.end_time)),
        Triple::new(subject.clone(), Sdo::NAME, Literal::string(search.target_db.as_str())),
        Triple::new(subject.clone(), Sdo::TARGET, Iri::new(search.target_url.as_str())),
        Triple::new(subject.clone(), Sdo::QUERY, Literal::string(search.query.as_str())),
    ];
    if let Some(evidence) = &search.evidence_type {
        triples.push(Triple::new(
            subject.clone(),
            Fpr::HasEvidenceType,
            tables::evidence_type(evidence)?,
        ));
    }

    // Publication year limit, shaped as
    //   [] a time:Interval ;
    //      time:hasBeginning [ a time:Instant ; time:inXSDgYear "2000" ] ;
    //      time:hasEnd [ a time:Instant ; time:inXSDgYear "2010" ] .
    // with each node created only when its bound is present.
    if search.range_beginning.is_some() || search.range_end.is_some() {
        let interval = resolver.mint_anonymous();
        triples.push(Triple::new(interval, Rdf::TYPE, Time::INTERVAL));
        triples.push(Triple::new(subject, Fpr::HasDateLimit, interval));
        if let Some(year) = search.range_beginning {
            let beginning = resolver.mint_anonymous();
            triples.push(Triple::new(beginning, Rdf::TYPE, Time::INSTANT));
            triples.push(Triple::new(beginning, Time::IN_XSD_G_YEAR, Literal::g_year(year)));
            triples.push(Triple::new(interval, Time::HAS_BEGINNING, beginning));
        }
        if let Some(year) = search.range_end {
            let end = resolver.mint_anonymous();
            triples.push(Triple::new(end, Rdf::TYPE, Time::INSTANT));
            triples.push(Triple::new(end, Time::IN_XSD_G_YEAR, Literal::g_year(year)));
            triples.push(Triple::new(interval, Time::HAS_END, end));
        }
    }
    Ok(triples)
}

pub fn map_publication(
    publication: &Publication,
    resolver: &mut Resolver,
) -> Result<Vec<Triple>, AppError> {
    let subject = resolver.record(&publication.id);
    let class = tables::publication_type(&publication.kind)?;
    Ok(vec![
        Triple::new(subject.clone(), Dcterms::TITLE, Literal::string(publication.title.as_str())),
        Triple::new(subject, Rdf::TYPE, class),
    ])
}

pub fn map_literature_reference_list(
    list: &LiteratureReferenceList,
    resolver: &mut Resolver,
) -> Result<Vec<Triple>, AppError> {
    let subject = resolver.record(&list.id);
    let mut triples = vec![
        Triple::new(subject.clone(), Rdf::TYPE, Fabio::SYSTEMATIC_LITERATURE_REVIEW),
        Triple::new(subject.clone(), Dcterms::TITLE, Literal::string(list.title.as_str())),
        Triple::new(subject.clone(), Sdo::NUMBER_OF_ITEMS, Literal::integer(list.number_of_items)),
    ];
    for reference in &list.references {
        let item = resolver.record(reference);
        triples.push(Triple::new(subject.clone(), Sdo::ITEM_LIST_ELEMENT, item.clone()));
        triples.push(Triple::new(subject.clone(), Prov::HAD_MEMBER, item));
    }
    Ok(triples)
}

/// Studies cite their reference lists and the lists are about the
/// study: both directions come out of this single pass, which works
/// because record resolution does not depend on emission order.
pub fn map_study(study: &Study, resolver: &mut Resolver) -> Result<Vec<Triple>, AppError> {
    let subject = resolver.record(&study.id);
    let mut triples = vec![
        Triple::new(subject.clone(), Rdf::TYPE, Obi::CLINICAL_TRIAL),
        Triple::new(subject.clone(), Dcterms::TITLE, Literal::string(study.title.as_str())),
        Triple::new(subject.clone(), Dcterms::SOURCE, Iri::new(study.registry.as_str())),
        Triple::new(subject.clone(), Dcterms::IDENTIFIER, Literal::string(study.registry_id.as_str())),
        Triple::new(subject.clone(), Rdfs::SEE_ALSO, Iri::new(study.url.as_str())),
    ];
    for list in &study.literature_reference_list_ids {
        let list_iri = resolver.record(list);
        triples.push(Triple::new(
            subject.clone(),
            Dcterms::BIBLIOGRAPHIC_CITATION,
            list_iri.clone(),
        ));
        triples.push(Triple::new(list_iri, Iao::IS_ABOUT, subject.clone()));
    }
    Ok(triples)
}

pub fn map_cohort(cohort: &Cohort, resolver: &mut Resolver) -> Result<Vec<Triple>, AppError> {
    let subject = resolver.record(&cohort.id);
    Ok(vec![
        Triple::new(subject.clone(), Rdf::TYPE, Stato::COHORT),
        Triple::new(subject.clone(), Ro::PARTICIPATES_IN, resolver.record(&cohort.study_id)),
        Triple::new(subject, Ro::CONCRETIZES, resolver.record(&cohort.intervention_group_id)),
    ])
}
