//! The in-memory semantic graph: term types, the triple store, and the
//! Turtle serializer.

pub mod store;
pub mod term;
pub mod turtle;

pub use store::TripleStore;
pub use term::{BlankNode, Iri, Literal, Object, Subject, Triple};
pub use turtle::to_turtle;
