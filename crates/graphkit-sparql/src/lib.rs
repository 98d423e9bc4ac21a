//! A SPARQL 1.1 subset: algebra, a hand-written recursive-descent parser
//! over a `logos`-generated tokenizer, and an executor over
//! `graphkit-store`'s hexastore.

pub mod algebra;
pub mod executor;
pub mod lexer;
pub mod parser;

pub use algebra::{GraphPattern, Query, Solution, Var};
pub use executor::{execute, evaluate, QueryResult};
pub use parser::parse;

#[cfg(test)]
mod tests {
    use super::*;
    use graphkit_core::{Iri, Literal, Term, Triple};
    use graphkit_store::TripleStore;

    fn iri(s: &str) -> Iri {
        Iri::new(s).unwrap()
    }

    fn triple(s: &str, p: &str, o: Term) -> Triple {
        Triple::new(Term::Iri(iri(s)), iri(p), o).unwrap()
    }

    fn sample_store() -> TripleStore {
        let mut store = TripleStore::new();
        store.add(&triple(
            "http://example.org/alice",
            "http://www.w3.org/1999/02/22-rdf-syntax-ns#type",
            Term::Iri(iri("http://xmlns.com/foaf/0.1/Person")),
        ));
        store.add(&triple(
            "http://example.org/alice",
            "http://xmlns.com/foaf/0.1/name",
            Term::Literal(Literal::plain("Alice")),
        ));
        store.add(&triple(
            "http://example.org/alice",
            "http://xmlns.com/foaf/0.1/age",
            Term::Literal(Literal::typed("30", iri("http://www.w3.org/2001/XMLSchema#integer"))),
        ));
        store.add(&triple(
            "http://example.org/alice",
            "http://xmlns.com/foaf/0.1/knows",
            Term::Iri(iri("http://example.org/bob")),
        ));
        store.add(&triple(
            "http://example.org/bob",
            "http://xmlns.com/foaf/0.1/name",
            Term::Literal(Literal::plain("Bob")),
        ));
        store
    }

    fn select_rows(result: &QueryResult) -> usize {
        match result {
            QueryResult::Select { solutions, .. } => solutions.len(),
            _ => panic!("expected a SELECT result"),
        }
    }

    #[test]
    fn select_two_names() {
        let store = sample_store();
        let query = parse(
            "PREFIX foaf: <http://xmlns.com/foaf/0.1/>
             SELECT ?p ?n WHERE { ?p foaf:name ?n }",
        )
        .unwrap();
        let result = execute(&store, &query);
        assert_eq!(select_rows(&result), 2);
    }

    #[test]
    fn filter_numeric_comparison() {
        let mut store = sample_store();
        store.add(&triple(
            "http://example.org/charlie",
            "http://xmlns.com/foaf/0.1/age",
            Term::Literal(Literal::typed("35", iri("http://www.w3.org/2001/XMLSchema#integer"))),
        ));
        let query = parse(
            "PREFIX foaf: <http://xmlns.com/foaf/0.1/>
             SELECT ?p WHERE { ?p foaf:age ?a . FILTER(?a > 28) }",
        )
        .unwrap();
        let result = execute(&store, &query);
        let QueryResult::Select { solutions, .. } = result else { panic!() };
        let names: std::collections::HashSet<_> = solutions
            .iter()
            .map(|s| s.get(&Var::new("p")).unwrap().to_string())
            .collect();
        assert_eq!(names.len(), 2);
    }

    #[test]
    fn optional_left_outer_join() {
        let store = sample_store();
        let query = parse(
            "PREFIX foaf: <http://xmlns.com/foaf/0.1/>
             SELECT ?p ?n ?a WHERE { ?p foaf:name ?n OPTIONAL { ?p foaf:age ?a } }",
        )
        .unwrap();
        let result = execute(&store, &query);
        let QueryResult::Select { solutions, .. } = result else { panic!() };
        assert_eq!(solutions.len(), 2);
        let alice = solutions
            .iter()
            .find(|s| s.get(&Var::new("n")).unwrap().to_string().contains("Alice"))
            .unwrap();
        assert!(alice.contains_key(&Var::new("a")));
        let bob = solutions
            .iter()
            .find(|s| s.get(&Var::new("n")).unwrap().to_string().contains("Bob"))
            .unwrap();
        assert!(!bob.contains_key(&Var::new("a")));
    }

    #[test]
    fn union_of_two_name_patterns() {
        let store = sample_store();
        let query = parse(
            "PREFIX foaf: <http://xmlns.com/foaf/0.1/>
             SELECT ?p WHERE {
               { ?p foaf:name \"Alice\" } UNION { ?p foaf:name \"Bob\" }
             }",
        )
        .unwrap();
        let result = execute(&store, &query);
        assert_eq!(select_rows(&result), 2);
    }

    #[test]
    fn ask_true_and_false() {
        let store = sample_store();
        let yes = parse(
            "PREFIX foaf: <http://xmlns.com/foaf/0.1/> ASK { ?p foaf:name \"Alice\" }",
        )
        .unwrap();
        assert_eq!(execute(&store, &yes), QueryResult::Ask { result: true });

        let no = parse(
            "PREFIX foaf: <http://xmlns.com/foaf/0.1/> ASK { ?p foaf:name \"Nobody\" }",
        )
        .unwrap();
        assert_eq!(execute(&store, &no), QueryResult::Ask { result: false });
    }

    #[test]
    fn construct_builds_new_triples() {
        let store = sample_store();
        let query = parse(
            "PREFIX foaf: <http://xmlns.com/foaf/0.1/>
             PREFIX ex: <http://example.org/vocab#>
             CONSTRUCT { ?p ex:hasName ?n } WHERE { ?p foaf:name ?n }",
        )
        .unwrap();
        let QueryResult::Construct { triples } = execute(&store, &query) else { panic!() };
        assert_eq!(triples.len(), 2);
    }

    #[test]
    fn describe_without_where_collects_all_triples_about_resource() {
        let store = sample_store();
        let query = parse("DESCRIBE <http://example.org/alice>").unwrap();
        let QueryResult::Describe { triples } = execute(&store, &query) else { panic!() };
        assert_eq!(triples.len(), 4);
    }

    #[test]
    fn order_by_limit_and_offset() {
        let store = sample_store();
        let query = parse(
            "PREFIX foaf: <http://xmlns.com/foaf/0.1/>
             SELECT ?n WHERE { ?p foaf:name ?n } ORDER BY ?n LIMIT 1 OFFSET 1",
        )
        .unwrap();
        let QueryResult::Select { solutions, .. } = execute(&store, &query) else { panic!() };
        assert_eq!(solutions.len(), 1);
        assert_eq!(solutions[0].get(&Var::new("n")).unwrap().to_string(), "\"Bob\"");
    }

    #[test]
    fn distinct_removes_duplicate_solutions() {
        let mut store = TripleStore::new();
        store.add(&triple(
            "http://example.org/alice",
            "http://xmlns.com/foaf/0.1/knows",
            Term::Iri(iri("http://example.org/bob")),
        ));
        store.add(&triple(
            "http://example.org/alice",
            "http://xmlns.com/foaf/0.1/knows",
            Term::Iri(iri("http://example.org/carol")),
        ));
        let query = parse(
            "PREFIX foaf: <http://xmlns.com/foaf/0.1/>
             SELECT DISTINCT ?p WHERE { ?p foaf:knows ?x }",
        )
        .unwrap();
        let QueryResult::Select { solutions, .. } = execute(&store, &query) else { panic!() };
        assert_eq!(solutions.len(), 1);
    }

    #[test]
    fn unknown_prefix_parse_error_is_an_error_variant() {
        let bad = "SELECT ?x WHERE { ?x foo:bar ?y";
        assert!(parse(bad).is_err());
    }
}
