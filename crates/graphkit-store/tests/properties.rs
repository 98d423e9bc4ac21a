use graphkit_core::{Iri, Literal, Term, Triple};
use graphkit_store::{TriplePattern, TripleStore};
use proptest::prelude::*;

fn arb_triple() -> impl Strategy<Value = Triple> {
    (0..20u32, 0..5u32, 0..20u32).prop_map(|(s, p, o)| {
        Triple::new(
            Term::Iri(Iri::new(format!("http://example.org/s{s}")).unwrap()),
            Iri::new(format!("http://example.org/p{p}")).unwrap(),
            Term::Literal(Literal::plain(format!("o{o}"))),
        )
        .unwrap()
    })
}

proptest! {
    #[test]
    fn add_then_has_holds_for_arbitrary_triples(t in arb_triple()) {
        let mut store = TripleStore::new();
        store.add(&t);
        prop_assert!(store.has(&t));
    }

    #[test]
    fn remove_after_add_clears_presence(t in arb_triple()) {
        let mut store = TripleStore::new();
        store.add(&t);
        store.remove(&t);
        prop_assert!(!store.has(&t));
    }

    #[test]
    fn adding_twice_does_not_change_triple_count(t in arb_triple()) {
        let mut store = TripleStore::new();
        store.add(&t);
        let before = store.count_triples();
        store.add(&t);
        prop_assert_eq!(store.count_triples(), before);
    }

    #[test]
    fn match_pattern_on_all_bound_positions_agrees_with_has(ts in prop::collection::vec(arb_triple(), 0..20)) {
        let mut store = TripleStore::new();
        for t in &ts {
            store.add(t);
        }
        for t in &ts {
            let pattern = TriplePattern::new(
                Some(t.subject().clone()),
                Some(t.predicate().clone()),
                Some(t.object().clone()),
            );
            prop_assert!(store.match_pattern(&pattern).contains(t));
        }
    }

    #[test]
    fn full_scan_count_matches_triple_count(ts in prop::collection::vec(arb_triple(), 0..30)) {
        let mut store = TripleStore::new();
        for t in &ts {
            store.add(t);
        }
        let distinct: std::collections::HashSet<_> = ts.into_iter().collect();
        prop_assert_eq!(store.match_pattern(&TriplePattern::any()).len(), distinct.len());
        prop_assert_eq!(store.count_triples(), distinct.len());
    }
}
