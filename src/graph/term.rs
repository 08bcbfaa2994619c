//! RDF term types: IRIs, blank nodes, literals, and triples.

use std::borrow::Cow;
use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};

use crate::vocab::standard::Xsd;

/// An absolute IRI.
///
/// Vocabulary constants borrow their text, resolved identifiers own it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Iri(Cow<'static, str>);

impl Iri {
    /// Wraps a static string. Used for vocabulary constants.
    pub const fn from_static(iri: &'static str) -> Self {
        Iri(Cow::Borrowed(iri))
    }

    /// Wraps an owned string, e.g. a resolved record identifier.
    pub fn new(iri: impl Into<String>) -> Self {
        Iri(Cow::Owned(iri.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Iri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An anonymous node identity, unique within one conversion run.
///
/// Blank nodes carry no stable address; they are reachable only through
/// the triples that mention them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlankNode(pub(crate) u64);

impl BlankNode {
    /// Serializer-facing label without the `_:` sigil, e.g. `b4`.
    pub fn label(&self) -> String {
        format!("b{}", self.0)
    }
}

/// Literal value kinds: plain, language-tagged, or datatyped.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum LiteralKind {
    Plain,
    Tagged(String),
    Typed(Iri),
}

/// An RDF literal with its lexical form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Literal {
    lexical: String,
    kind: LiteralKind,
}

impl Literal {
    /// A plain string literal.
    pub fn string(value: impl Into<String>) -> Self {
        Literal {
            lexical: value.into(),
            kind: LiteralKind::Plain,
        }
    }

    /// A language-tagged string literal.
    pub fn tagged(value: impl Into<String>, language: impl Into<String>) -> Self {
        Literal {
            lexical: value.into(),
            kind: LiteralKind::Tagged(language.into()),
        }
    }

    /// A literal with an explicit datatype IRI.
    pub fn typed(value: impl Into<String>, datatype: Iri) -> Self {
        Literal {
            lexical: value.into(),
            kind: LiteralKind::Typed(datatype),
        }
    }

    pub fn integer(value: i64) -> Self {
        Literal::typed(value.to_string(), Xsd::INTEGER)
    }

    pub fn float(value: f64) -> Self {
        Literal::typed(value.to_string(), Xsd::FLOAT)
    }

    pub fn boolean(value: bool) -> Self {
        Literal::typed(value.to_string(), Xsd::BOOLEAN)
    }

    pub fn date(value: NaiveDate) -> Self {
        Literal::typed(value.format("%Y-%m-%d").to_string(), Xsd::DATE)
    }

    pub fn date_time(value: DateTime<Utc>) -> Self {
        Literal::typed(value.to_rfc3339_opts(chrono::SecondsFormat::Secs, true), Xsd::DATE_TIME)
    }

    pub fn g_year(value: i32) -> Self {
        Literal::typed(format!("{:04}", value), Xsd::G_YEAR)
    }

    pub fn lexical(&self) -> &str {
        &self.lexical
    }

    /// The datatype IRI, if this is a datatyped literal.
    pub fn datatype(&self) -> Option<&Iri> {
        match &self.kind {
            LiteralKind::Typed(iri) => Some(iri),
            _ => None,
        }
    }

    /// The language tag, if this is a language-tagged literal.
    pub fn language(&self) -> Option<&str> {
        match &self.kind {
            LiteralKind::Tagged(tag) => Some(tag),
            _ => None,
        }
    }
}

/// A triple subject: an IRI or a blank node.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Subject {
    Iri(Iri),
    Blank(BlankNode),
}

/// A triple object: an IRI, a blank node, or a literal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Object {
    Iri(Iri),
    Blank(BlankNode),
    Literal(Literal),
}

/// One subject-predicate-object statement.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Triple {
    pub subject: Subject,
    pub predicate: Iri,
    pub object: Object,
}

impl Triple {
    pub fn new(
        subject: impl Into<Subject>,
        predicate: impl Into<Iri>,
        object: impl Into<Object>,
    ) -> Self {
        Triple {
            subject: subject.into(),
            predicate: predicate.into(),
            object: object.into(),
        }
    }
}

impl From<Iri> for Subject {
    fn from(iri: Iri) -> Self {
        Subject::Iri(iri)
    }
}

impl From<BlankNode> for Subject {
    fn from(node: BlankNode) -> Self {
        Subject::Blank(node)
    }
}

impl From<Iri> for Object {
    fn from(iri: Iri) -> Self {
        Object::Iri(iri)
    }
}

impl From<BlankNode> for Object {
    fn from(node: BlankNode) -> Self {
        Object::Blank(node)
    }
}

impl From<Literal> for Object {
    fn from(literal: Literal) -> Self {
        Object::Literal(literal)
    }
}

impl From<Subject> for Object {
    fn from(subject: Subject) -> Self {
        match subject {
            Subject::Iri(iri) => Object::Iri(iri),
            Subject::Blank(node) => Object::Blank(node),
        }
    }
}
