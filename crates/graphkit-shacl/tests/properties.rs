use graphkit_core::vocab::rdf;
use graphkit_core::{Iri, Literal, Term, Triple};
use graphkit_shacl::{validate, Constraint, NodeShape, PropertyShape, ShapesGraph, Target};
use graphkit_store::TripleStore;
use proptest::prelude::*;

fn iri(s: &str) -> Iri {
    Iri::new(s).unwrap()
}

/// Builds a store with `count` instances of `ex:Person`, `present` of
/// which also carry a `foaf:name`, then a shape requiring `MinCount(1)`
/// on `foaf:name`.
fn build(count: u32, present: u32) -> (TripleStore, ShapesGraph) {
    let person = iri("http://example.org/Person");
    let name = iri("http://xmlns.com/foaf/0.1/name");
    let mut store = TripleStore::new();

    for i in 0..count {
        let subject = Term::Iri(iri(&format!("http://example.org/p{i}")));
        store.add(&Triple::new(subject.clone(), iri(rdf::TYPE), Term::Iri(person.clone())).unwrap());
        if i < present {
            store.add(
                &Triple::new(subject, name.clone(), Term::Literal(Literal::plain("N"))).unwrap(),
            );
        }
    }

    let shape = NodeShape::new(iri("http://example.org/PersonShape"))
        .with_target(Target::Class(person))
        .with_property(PropertyShape::new(name).with_constraint(Constraint::MinCount(1)));
    (store, ShapesGraph { shapes: vec![shape] })
}

proptest! {
    /// `conforms` is exactly "no result carries Violation severity" —
    /// here, exactly when every focus node has its required property.
    #[test]
    fn conforms_iff_no_violation_result(count in 0u32..15, present in 0u32..15) {
        let present = present.min(count);
        let (store, shapes) = build(count, present);
        let report = validate(&store, &shapes);

        let has_violation = report.results.iter().any(|r| r.is_violation());
        prop_assert_eq!(report.conforms(), !has_violation);
        prop_assert_eq!(report.conforms(), present == count);
        prop_assert_eq!(report.violation_count(), (count - present) as usize);
    }
}
