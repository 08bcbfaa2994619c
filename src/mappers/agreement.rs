//! Mapper for the appropriate use agreement.

use crate::document::AppropriateUse;
use crate::error::AppError;
use crate::graph::term::{Literal, Triple};
use crate::resolve::Resolver;
use crate::vocab::standard::{Dcterms, Rdf};
use crate::vocab::Fpr;

/// Agreement lines have no identity of their own: each becomes an
/// anonymous node carrying the text as a language-tagged title.
pub fn map_appropriate_use(
    agreement: &AppropriateUse,
    resolver: &mut Resolver,
    language: &str,
) -> Result<Vec<Triple>, AppError> {
    let subject = resolver.record(&agreement.id);
    let mut triples = vec![
        Triple::new(subject.clone(), Rdf::TYPE, Fpr::AppropriateUseAgreement),
        Triple::new(subject.clone(), Dcterms::TITLE, Literal::string(agreement.title.as_str())),
    ];
    if let Some(date) = agreement.date {
        triples.push(Triple::new(subject.clone(), Dcterms::ISSUED, Literal::date(date)));
    }
    for text in &agreement.agreements {
        let item = resolver.mint_anonymous();
        triples.push(Triple::new(subject.clone(), Dcterms::HAS_PART, item));
        triples.push(Triple::new(item, Dcterms::TITLE, Literal::tagged(text.as_str(), language)));
    }
    Ok(triples)
}
