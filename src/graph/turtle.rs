//! Turtle serialization of a finished triple store.
//!
//! Output is deterministic for a fixed store: `@prefix` declarations in
//! binding order, then subject groups in first-insertion order with the
//! per-subject statements in emission order. Term ordering inside the
//! text carries no meaning.

use std::collections::HashMap;

use super::store::TripleStore;
use super::term::{Iri, Literal, Object, Subject};
use crate::vocab::standard::Rdf;

/// Renders the store to Turtle text.
pub fn to_turtle(store: &TripleStore) -> String {
    let mut out = String::new();

    for (prefix, namespace) in store.prefixes() {
        out.push_str(&format!("@prefix {}: <{}> .\n", prefix, namespace));
    }
    out.push('\n');

    // Group triples by subject, preserving first-seen subject order.
    let mut order: Vec<&Subject> = Vec::new();
    let mut grouped: HashMap<&Subject, Vec<(&Iri, &Object)>> = HashMap::new();
    for triple in store.iter() {
        grouped
            .entry(&triple.subject)
            .or_insert_with(|| {
                order.push(&triple.subject);
                Vec::new()
            })
            .push((&triple.predicate, &triple.object));
    }

    for subject in order {
        let statements = &grouped[subject];
        let subject_text = render_subject(subject, store);
        for (i, (predicate, object)) in statements.iter().enumerate() {
            let predicate_text = render_predicate(predicate, store);
            let object_text = render_object(object, store);
            if i == 0 {
                out.push_str(&format!("{} {} {}", subject_text, predicate_text, object_text));
            } else {
                out.push_str(&format!("    {} {}", predicate_text, object_text));
            }
            out.push_str(if i + 1 == statements.len() { " .\n" } else { " ;\n" });
        }
    }

    out
}

fn render_subject(subject: &Subject, store: &TripleStore) -> String {
    match subject {
        Subject::Iri(iri) => render_iri(iri, store),
        Subject::Blank(node) => format!("_:{}", node.label()),
    }
}

fn render_predicate(predicate: &Iri, store: &TripleStore) -> String {
    if predicate == &Rdf::TYPE {
        "a".to_string()
    } else {
        render_iri(predicate, store)
    }
}

fn render_object(object: &Object, store: &TripleStore) -> String {
    match object {
        Object::Iri(iri) => render_iri(iri, store),
        Object::Blank(node) => format!("_:{}", node.label()),
        Object::Literal(literal) => render_literal(literal, store),
    }
}

fn render_literal(literal: &Literal, store: &TripleStore) -> String {
    let quoted = format!("\"{}\"", escape_literal(literal.lexical()));
    if let Some(tag) = literal.language() {
        format!("{}@{}", quoted, tag)
    } else if let Some(datatype) = literal.datatype() {
        format!("{}^^{}", quoted, render_iri(datatype, store))
    } else {
        quoted
    }
}

/// Compacts an IRI against the bound prefixes where the remainder is a
/// safe Turtle local name; falls back to the `<…>` form.
fn render_iri(iri: &Iri, store: &TripleStore) -> String {
    let text = iri.as_str();
    let mut best: Option<(&str, &str)> = None;
    for (prefix, namespace) in store.prefixes() {
        if let Some(local) = text.strip_prefix(namespace.as_str()) {
            let longer = best.map_or(true, |(_, ns): (&str, &str)| namespace.len() > ns.len());
            if longer && is_safe_local(local) {
                best = Some((prefix.as_str(), namespace.as_str()));
            }
        }
    }
    match best {
        Some((prefix, namespace)) => format!("{}:{}", prefix, &text[namespace.len()..]),
        None => format!("<{}>", text),
    }
}

/// Conservative PN_LOCAL check: alphanumerics, `_`, `-`, `.` (not
/// leading or trailing), and `%`-encoded octets. Anything else forces
/// the full IRI form.
fn is_safe_local(local: &str) -> bool {
    if local.is_empty() {
        return true;
    }
    if local.starts_with('.') || local.starts_with('-') || local.ends_with('.') {
        return false;
    }
    let bytes = local.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'_' | b'-' | b'.' => i += 1,
            b'%' => {
                if i + 2 >= bytes.len()
                    || !bytes[i + 1].is_ascii_hexdigit()
                    || !bytes[i + 2].is_ascii_hexdigit()
                {
                    return false;
                }
                i += 3;
            }
            _ => return false,
        }
    }
    true
}

fn escape_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::term::{BlankNode, Triple};

    fn sample_store() -> TripleStore {
        let mut store = TripleStore::new();
        store.bind("rdfs", "http://www.w3.org/2000/01/rdf-schema#");
        store.bind("tax", "https://w3id.org/zinl/fpr-tax#");
        store
    }

    #[test]
    fn prefixed_name_compaction() {
        let mut store = sample_store();
        store.insert(Triple::new(
            Iri::new("https://w3id.org/zinl/fpr-tax#diabetes"),
            Iri::from_static("http://www.w3.org/2000/01/rdf-schema#label"),
            Literal::string("diabetes"),
        ));
        let text = to_turtle(&store);
        assert!(text.contains("tax:diabetes rdfs:label \"diabetes\" ."));
    }

    #[test]
    fn percent_encoded_locals_stay_compact() {
        let mut store = sample_store();
        store.insert(Triple::new(
            Iri::new("https://w3id.org/zinl/fpr-tax#type%202%20diabetes"),
            Iri::from_static("http://www.w3.org/2000/01/rdf-schema#label"),
            Literal::string("type 2 diabetes"),
        ));
        let text = to_turtle(&store);
        assert!(text.contains("tax:type%202%20diabetes "));
    }

    #[test]
    fn unbound_namespaces_render_in_angle_brackets() {
        let mut store = sample_store();
        store.insert(Triple::new(
            Iri::new("http://example.org/x"),
            Iri::from_static("http://www.w3.org/2000/01/rdf-schema#seeAlso"),
            Iri::new("http://example.org/y"),
        ));
        let text = to_turtle(&store);
        assert!(text.contains("<http://example.org/x> rdfs:seeAlso <http://example.org/y> ."));
    }

    #[test]
    fn rdf_type_renders_as_a() {
        let mut store = sample_store();
        store.bind("rdf", "http://www.w3.org/1999/02/22-rdf-syntax-ns#");
        store.insert(Triple::new(
            Iri::new("https://w3id.org/zinl/fpr-tax#x"),
            Rdf::TYPE,
            Iri::new("https://w3id.org/zinl/fpr-tax#y"),
        ));
        assert!(to_turtle(&store).contains("tax:x a tax:y ."));
    }

    #[test]
    fn multiple_statements_share_the_subject() {
        let mut store = sample_store();
        let subject = Iri::new("https://w3id.org/zinl/fpr-tax#s");
        store.insert(Triple::new(
            subject.clone(),
            Iri::from_static("http://www.w3.org/2000/01/rdf-schema#label"),
            Literal::string("one"),
        ));
        store.insert(Triple::new(
            subject,
            Iri::from_static("http://www.w3.org/2000/01/rdf-schema#seeAlso"),
            Literal::string("two"),
        ));
        let text = to_turtle(&store);
        assert!(text.contains("tax:s rdfs:label \"one\" ;\n    rdfs:seeAlso \"two\" .\n"));
    }

    #[test]
    fn blank_nodes_use_stable_labels() {
        let mut store = sample_store();
        store.insert(Triple::new(
            BlankNode(0),
            Iri::from_static("http://www.w3.org/2000/01/rdf-schema#label"),
            Literal::string("anon"),
        ));
        assert!(to_turtle(&store).contains("_:b0 rdfs:label \"anon\" ."));
    }

    #[test]
    fn literal_escaping() {
        let mut store = sample_store();
        store.insert(Triple::new(
            Iri::new("https://w3id.org/zinl/fpr-tax#s"),
            Iri::from_static("http://www.w3.org/2000/01/rdf-schema#label"),
            Literal::string("say \"hi\"\nback\\slash"),
        ));
        assert!(to_turtle(&store).contains(r#""say \"hi\"\nback\\slash""#));
    }
}
