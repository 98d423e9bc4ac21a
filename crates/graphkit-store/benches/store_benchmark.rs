use criterion::{black_box, criterion_group, criterion_main, Criterion};
use graphkit_core::{Iri, Literal, Term, Triple};
use graphkit_store::{TriplePattern, TripleStore};

/// 1,000 triples spread across 100 subjects, 10 predicates, and 100
/// objects, matching the store's documented benchmark scenario.
fn build_store() -> TripleStore {
    let mut store = TripleStore::new();
    for i in 0..1000 {
        let subject = Term::Iri(Iri::new(format!("http://example.org/s{}", i % 100)).unwrap());
        let predicate = Iri::new(format!("http://example.org/p{}", i % 10)).unwrap();
        let object = if i % 3 == 0 {
            Term::Iri(Iri::new(format!("http://example.org/o{}", i % 100)).unwrap())
        } else {
            Term::Literal(Literal::plain(format!("value{}", i % 100)))
        };
        store.add(&Triple::new(subject, predicate, object).unwrap());
    }
    store
}

fn bench_insert(c: &mut Criterion) {
    c.bench_function("store_insert_1000", |b| {
        b.iter(|| black_box(build_store()));
    });
}

fn bench_match_by_predicate(c: &mut Criterion) {
    let store = build_store();
    let predicate = Iri::new("http://example.org/p3").unwrap();
    c.bench_function("store_match_by_predicate", |b| {
        b.iter(|| {
            let pattern = TriplePattern::new(None, Some(predicate.clone()), None);
            black_box(store.match_pattern(&pattern));
        });
    });
}

fn bench_match_spo(c: &mut Criterion) {
    let store = build_store();
    let subject = Term::Iri(Iri::new("http://example.org/s5").unwrap());
    let predicate = Iri::new("http://example.org/p5").unwrap();
    c.bench_function("store_match_spo_prefix", |b| {
        b.iter(|| {
            let pattern = TriplePattern::new(Some(subject.clone()), Some(predicate.clone()), None);
            black_box(store.match_pattern(&pattern));
        });
    });
}

criterion_group!(benches, bench_insert, bench_match_by_predicate, bench_match_spo);
criterion_main!(benches);
