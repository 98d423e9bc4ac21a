//! A SHACL-Core shape validator over `graphkit-store`.
//!
//! [`loader::ShapesGraph::from_store`] reads `sh:NodeShape` individuals out
//! of a [`graphkit_store::TripleStore`]; [`validator::validate`] runs them
//! against that same store and returns a [`report::ValidationReport`].

pub mod loader;
pub mod report;
pub mod shape;
pub mod validator;

pub use loader::ShapesGraph;
pub use report::{ValidationReport, ValidationResult};
pub use shape::{Constraint, NodeKind, NodeShape, PropertyShape, Severity, Target};
pub use validator::validate;

#[cfg(test)]
mod tests {
    use super::*;
    use graphkit_core::vocab::{rdf, xsd};
    use graphkit_core::{Iri, Literal, Term, Triple};
    use graphkit_store::TripleStore;

    fn iri(s: &str) -> Iri {
        Iri::new(s).unwrap()
    }

    fn triple(s: Term, p: &str, o: Term) -> Triple {
        Triple::new(s, iri(p), o).unwrap()
    }

    #[test]
    fn conformant_store_validates_clean() {
        let person = iri("http://example.org/Person");
        let name = iri("http://xmlns.com/foaf/0.1/name");
        let age = iri("http://xmlns.com/foaf/0.1/age");
        let alice = Term::Iri(iri("http://example.org/alice"));

        let mut store = TripleStore::new();
        store.add(&triple(alice.clone(), rdf::TYPE, Term::Iri(person.clone())));
        store.add(&triple(alice.clone(), name.as_str(), Term::Literal(Literal::plain("Alice"))));
        store.add(&triple(
            alice,
            age.as_str(),
            Term::Literal(Literal::typed("30", iri(xsd::INTEGER))),
        ));

        let shape = NodeShape::new(iri("http://example.org/PersonShape"))
            .with_target(Target::Class(person))
            .with_property(PropertyShape::new(name).with_constraint(Constraint::MinCount(1)))
            .with_property(
                PropertyShape::new(age)
                    .with_constraint(Constraint::MinCount(1))
                    .with_constraint(Constraint::MaxCount(1))
                    .with_constraint(Constraint::MinInclusive(0.0)),
            );
        let shapes = ShapesGraph { shapes: vec![shape] };

        let report = validate(&store, &shapes);
        assert!(report.conforms());
    }

    #[test]
    fn datatype_violation_is_reported_with_the_offending_value() {
        let person = iri("http://example.org/Person");
        let age = iri("http://xmlns.com/foaf/0.1/age");
        let alice = Term::Iri(iri("http://example.org/alice"));

        let mut store = TripleStore::new();
        store.add(&triple(alice.clone(), rdf::TYPE, Term::Iri(person.clone())));
        store.add(&triple(alice, age.as_str(), Term::Literal(Literal::plain("thirty"))));

        let shape = NodeShape::new(iri("http://example.org/PersonShape"))
            .with_target(Target::Class(person))
            .with_property(
                PropertyShape::new(age).with_constraint(Constraint::Datatype(iri(xsd::INTEGER))),
            );
        let shapes = ShapesGraph { shapes: vec![shape] };

        let report = validate(&store, &shapes);
        assert!(!report.conforms());
        assert_eq!(report.violation_count(), 1);
        assert_eq!(
            report.results[0].source_constraint_component,
            "Datatype"
        );
    }

    #[test]
    fn deactivated_shape_is_skipped_entirely() {
        let person = iri("http://example.org/Person");
        let name = iri("http://xmlns.com/foaf/0.1/name");
        let alice = Term::Iri(iri("http://example.org/alice"));

        let mut store = TripleStore::new();
        store.add(&triple(alice, rdf::TYPE, Term::Iri(person.clone())));

        let mut shape = NodeShape::new(iri("http://example.org/PersonShape"))
            .with_target(Target::Class(person))
            .with_property(PropertyShape::new(name).with_constraint(Constraint::MinCount(1)));
        shape.deactivated = true;
        let shapes = ShapesGraph { shapes: vec![shape] };

        let report = validate(&store, &shapes);
        assert!(report.conforms());
        assert!(report.results.is_empty());
    }

    #[test]
    fn shapes_graph_loads_from_rdf_triples() {
        use graphkit_core::vocab::shacl;

        let shape_node = Term::Iri(iri("http://example.org/PersonShape"));
        let person = iri("http://example.org/Person");

        let mut store = TripleStore::new();
        store.add(&triple(shape_node.clone(), rdf::TYPE, Term::Iri(iri(shacl::NODE_SHAPE))));
        store.add(&triple(shape_node, shacl::TARGET_CLASS, Term::Iri(person)));

        let shapes = ShapesGraph::from_store(&store);
        assert_eq!(shapes.shapes.len(), 1);
        assert_eq!(shapes.shapes[0].targets.len(), 1);
    }
}
