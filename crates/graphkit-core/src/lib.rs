//! Core RDF term model, well-known vocabulary tables, and the shared
//! error type for the `graphkit` graph engine.
//!
//! This crate has no knowledge of storage, query, or validation; it only
//! defines the value types every other `graphkit-*` crate builds on.

pub mod error;
pub mod term;
pub mod vocab;

pub use error::{GraphError, Result};
pub use term::{BlankNode, Iri, Literal, Term, Triple};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iri_rejects_whitespace() {
        assert!(Iri::new("http://example.org/has space").is_err());
        assert!(Iri::new("http://example.org/ok").is_ok());
    }

    #[test]
    fn literal_rejects_datatype_and_language_together() {
        let dt = Iri::new(vocab::xsd::STRING).unwrap();
        let err = Literal::new("hi", Some(dt), Some("en".into())).unwrap_err();
        assert_eq!(err, GraphError::LiteralDatatypeLanguageConflict);
    }

    #[test]
    fn literal_language_is_lowercased() {
        let lit = Literal::with_language("hi", "EN").unwrap();
        assert_eq!(lit.language(), Some("en"));
    }

    #[test]
    fn triple_rejects_literal_subject() {
        let lit = Term::Literal(Literal::plain("not a subject"));
        let pred = Iri::new("http://example.org/p").unwrap();
        let obj = Term::Literal(Literal::plain("o"));
        assert!(Triple::new(lit, pred, obj).is_err());
    }

    #[test]
    fn triple_accepts_blank_node_subject() {
        let subj = Term::BlankNode(BlankNode::fresh());
        let pred = Iri::new("http://example.org/p").unwrap();
        let obj = Term::Literal(Literal::plain("o"));
        assert!(Triple::new(subj, pred, obj).is_ok());
    }

    #[test]
    fn blank_nodes_are_fresh() {
        let a = BlankNode::fresh();
        let b = BlankNode::fresh();
        assert_ne!(a, b);
    }
}
