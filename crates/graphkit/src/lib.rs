//! # graphkit
//!
//! An in-memory RDF knowledge graph stack: a hexastore-indexed triple
//! store, a SPARQL 1.1 subset query engine, and a SHACL-Core shape
//! validator.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use graphkit::prelude::*;
//!
//! let mut store = TripleStore::new();
//! store.add(&Triple::new(
//!     Term::Iri(Iri::new("http://example.org/alice").unwrap()),
//!     Iri::new("http://xmlns.com/foaf/0.1/name").unwrap(),
//!     Term::Literal(Literal::plain("Alice")),
//! ).unwrap());
//!
//! let query = graphkit::sparql::parse(
//!     "PREFIX foaf: <http://xmlns.com/foaf/0.1/> SELECT ?n WHERE { ?p foaf:name ?n }"
//! ).unwrap();
//! let result = graphkit::sparql::execute(&store, &query);
//! ```
//!
//! ## Crates
//!
//! - [`graphkit_core`]: the RDF term model (`Iri`/`BlankNode`/`Literal`/`Term`/`Triple`) and well-known vocabulary.
//! - [`graphkit_store`]: the hexastore triple store and prefix registry.
//! - [`graphkit_sparql`]: the SPARQL 1.1 subset algebra, parser, and executor.
//! - [`graphkit_shacl`]: the SHACL-Core shape model, loader, and validator.
//!
//! ## Feature flags
//!
//! - `full` (default): all crates included.
//! - `core`: only the term model.
//! - `store`: the triple store (implies `core`).
//! - `sparql`: the query engine (implies `store`).
//! - `shacl`: the shape validator (implies `store`).

#[cfg(feature = "graphkit-core")]
pub use graphkit_core as core;

#[cfg(feature = "graphkit-store")]
pub use graphkit_store as store;

#[cfg(feature = "graphkit-sparql")]
pub use graphkit_sparql as sparql;

#[cfg(feature = "graphkit-shacl")]
pub use graphkit_shacl as shacl;

#[cfg(feature = "graphkit-core")]
pub use graphkit_core::{BlankNode, GraphError, Iri, Literal, Result, Term, Triple};

#[cfg(feature = "graphkit-store")]
pub use graphkit_store::{PrefixRegistry, TriplePattern, TripleStore};

#[cfg(feature = "graphkit-sparql")]
pub use graphkit_sparql::{execute, parse, QueryResult};

#[cfg(feature = "graphkit-shacl")]
pub use graphkit_shacl::{validate, ShapesGraph, ValidationReport};

pub use serde;
pub use serde_json;

/// Convenience imports for the common path: build a store, run a query,
/// validate it.
pub mod prelude {
    #[cfg(feature = "graphkit-core")]
    pub use crate::{BlankNode, GraphError, Iri, Literal, Term, Triple};

    #[cfg(feature = "graphkit-store")]
    pub use crate::{PrefixRegistry, TriplePattern, TripleStore};

    #[cfg(feature = "graphkit-sparql")]
    pub use crate::{execute as sparql_execute, parse as sparql_parse, QueryResult};

    #[cfg(feature = "graphkit-shacl")]
    pub use crate::{validate as shacl_validate, ShapesGraph, ValidationReport};
}

/// Current version of graphkit.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_constant_is_set() {
        assert!(!VERSION.is_empty());
    }

    #[cfg(all(feature = "graphkit-store", feature = "graphkit-sparql"))]
    #[test]
    fn end_to_end_query_through_the_facade() {
        use crate::prelude::*;

        let mut store = TripleStore::new();
        store
            .add(&Triple::new(
                Term::Iri(Iri::new("http://example.org/alice").unwrap()),
                Iri::new("http://xmlns.com/foaf/0.1/name").unwrap(),
                Term::Literal(Literal::plain("Alice")),
            ).unwrap());

        let query = sparql_parse(
            "PREFIX foaf: <http://xmlns.com/foaf/0.1/> SELECT ?n WHERE { ?p foaf:name ?n }",
        )
        .unwrap();
        let QueryResult::Select { solutions, .. } = sparql_execute(&store, &query) else {
            panic!("expected a SELECT result")
        };
        assert_eq!(solutions.len(), 1);
    }
}
