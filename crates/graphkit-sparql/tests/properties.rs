use graphkit_sparql::parse;
use proptest::prelude::*;

fn arb_ident() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9]{0,6}".prop_map(|s| s)
}

proptest! {
    /// Any well-formed `SELECT ?v WHERE { ?v pfx:pred ?o }` over a
    /// randomly generated variable/prefix/local name parses without
    /// error and yields a `Query::Select` with exactly one selected
    /// variable.
    #[test]
    fn simple_select_queries_always_parse(v in arb_ident(), prefix in arb_ident(), local in arb_ident()) {
        let query_text = format!(
            "PREFIX {prefix}: <http://example.org/{prefix}/> SELECT ?{v} WHERE {{ ?{v} {prefix}:{local} ?o }}"
        );
        let query = parse(&query_text).expect("generated query should parse");
        match query {
            graphkit_sparql::Query::Select { variables, .. } => match variables {
                graphkit_sparql::algebra::SelectVars::Vars(vars) => prop_assert_eq!(vars.len(), 1),
                graphkit_sparql::algebra::SelectVars::All => prop_assert!(false, "expected explicit variable list"),
            },
            _ => prop_assert!(false, "expected a SELECT query"),
        }
    }

    /// ASK queries never fail to parse for the same pattern shape.
    #[test]
    fn simple_ask_queries_always_parse(prefix in arb_ident(), local in arb_ident()) {
        let query_text = format!(
            "PREFIX {prefix}: <http://example.org/{prefix}/> ASK {{ ?s {prefix}:{local} ?o }}"
        );
        prop_assert!(parse(&query_text).is_ok());
    }
}
