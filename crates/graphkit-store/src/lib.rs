//! An in-memory RDF triple store with a hexastore-style multi-index and
//! a prefix registry.

pub mod pattern;
pub mod prefix;
pub mod store;

pub use pattern::TriplePattern;
pub use prefix::PrefixRegistry;
pub use store::TripleStore;

#[cfg(test)]
mod tests {
    use super::*;
    use graphkit_core::{BlankNode, Iri, Literal, Term, Triple};

    fn iri(s: &str) -> Iri {
        Iri::new(s).unwrap()
    }

    fn triple(s: &str, p: &str, o: Term) -> Triple {
        Triple::new(Term::Iri(iri(s)), iri(p), o).unwrap()
    }

    #[test]
    fn add_then_has_is_true() {
        let mut store = TripleStore::new();
        let t = triple("ex:alice", "ex:name", Term::Literal(Literal::plain("Alice")));
        assert!(store.add(&t));
        assert!(store.has(&t));
        assert_eq!(store.count_triples(), 1);
    }

    #[test]
    fn add_is_idempotent() {
        let mut store = TripleStore::new();
        let t = triple("ex:alice", "ex:name", Term::Literal(Literal::plain("Alice")));
        assert!(store.add(&t));
        assert!(!store.add(&t));
        assert_eq!(store.count_triples(), 1);
    }

    #[test]
    fn remove_then_has_is_false() {
        let mut store = TripleStore::new();
        let t = triple("ex:alice", "ex:name", Term::Literal(Literal::plain("Alice")));
        store.add(&t);
        assert!(store.remove(&t));
        assert!(!store.has(&t));
        assert_eq!(store.count_triples(), 0);
    }

    #[test]
    fn remove_of_absent_triple_is_noop() {
        let mut store = TripleStore::new();
        let t = triple("ex:alice", "ex:name", Term::Literal(Literal::plain("Alice")));
        assert!(!store.remove(&t));
    }

    #[test]
    fn match_pattern_all_bound_combinations() {
        let mut store = TripleStore::new();
        let alice = Term::Iri(iri("ex:alice"));
        let bob = Term::Iri(iri("ex:bob"));
        let knows = iri("ex:knows");
        let name = iri("ex:name");
        store.add(&Triple::new(alice.clone(), knows.clone(), bob.clone()).unwrap());
        store.add(&Triple::new(alice.clone(), name.clone(), Term::Literal(Literal::plain("Alice"))).unwrap());
        store.add(&Triple::new(bob.clone(), name.clone(), Term::Literal(Literal::plain("Bob"))).unwrap());

        // s,p,o all bound
        let pat = TriplePattern::new(Some(alice.clone()), Some(knows.clone()), Some(bob.clone()));
        assert_eq!(store.match_pattern(&pat).len(), 1);

        // s,p bound
        let pat = TriplePattern::new(Some(alice.clone()), Some(name.clone()), None);
        assert_eq!(store.match_pattern(&pat).len(), 1);

        // p,o bound
        let pat = TriplePattern::new(None, Some(knows.clone()), Some(bob.clone()));
        assert_eq!(store.match_pattern(&pat).len(), 1);

        // s,o bound, p unbound
        let pat = TriplePattern::new(Some(alice.clone()), None, Some(bob.clone()));
        assert_eq!(store.match_pattern(&pat).len(), 1);

        // s bound only
        let pat = TriplePattern::new(Some(alice.clone()), None, None);
        assert_eq!(store.match_pattern(&pat).len(), 2);

        // p bound only
        let pat = TriplePattern::new(None, Some(name.clone()), None);
        assert_eq!(store.match_pattern(&pat).len(), 2);

        // o bound only
        let pat = TriplePattern::new(None, None, Some(Term::Literal(Literal::plain("Bob"))));
        assert_eq!(store.match_pattern(&pat).len(), 1);

        // none bound
        let pat = TriplePattern::any();
        assert_eq!(store.match_pattern(&pat).len(), 3);
    }

    #[test]
    fn index_symmetry_holds_after_add_and_remove() {
        let mut store = TripleStore::new();
        let s = Term::BlankNode(BlankNode::new("n1"));
        let p = iri("ex:p");
        let o = Term::Literal(Literal::plain("v"));
        let t = Triple::new(s, p, o).unwrap();
        store.add(&t);
        assert_eq!(store.match_pattern(&TriplePattern::any()).len(), 1);
        store.remove(&t);
        assert_eq!(store.match_pattern(&TriplePattern::any()).len(), 0);
        assert_eq!(store.count_subjects(), 0);
        assert_eq!(store.count_predicates(), 0);
        assert_eq!(store.count_objects(), 0);
    }

    #[test]
    fn count_by_predicate_matches_pso_scan() {
        let mut store = TripleStore::new();
        let knows = iri("ex:knows");
        for i in 0..5 {
            store.add(&triple(&format!("ex:s{i}"), "ex:knows", Term::Iri(iri(&format!("ex:o{i}")))));
        }
        assert_eq!(store.count_by_predicate(&knows), 5);
    }

    #[test]
    fn prefix_registry_round_trip() {
        let mut store = TripleStore::new();
        store.register_prefix("ex", "http://example.org/");
        let expanded = store.expand("ex:alice").unwrap();
        assert_eq!(expanded.as_str(), "http://example.org/alice");
        assert_eq!(store.abbreviate(&expanded).as_deref(), Some("ex:alice"));
    }

    #[test]
    fn prefix_registry_longest_namespace_wins() {
        let mut store = TripleStore::new();
        store.register_prefix("ex", "http://example.org/");
        store.register_prefix("exv", "http://example.org/vocab/");
        let iri_val = iri("http://example.org/vocab/Thing");
        assert_eq!(store.abbreviate(&iri_val).as_deref(), Some("exv:Thing"));
    }

    #[test]
    fn expand_unknown_prefix_is_an_error() {
        let store = TripleStore::new();
        assert!(store.expand("nope:thing").is_err());
    }

    #[test]
    fn from_iterator_and_extend_build_a_store() {
        let triples = vec![
            triple("ex:a", "ex:p", Term::Literal(Literal::plain("1"))),
            triple("ex:b", "ex:p", Term::Literal(Literal::plain("2"))),
        ];
        let store: TripleStore = triples.into_iter().collect();
        assert_eq!(store.count_triples(), 2);
    }
}
