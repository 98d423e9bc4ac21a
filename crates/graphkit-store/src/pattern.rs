use graphkit_core::{Iri, Term};

/// A triple pattern with any position optionally bound. Passed as a
/// single value (rather than three keyword arguments) so the index
/// selection in [`crate::store::TripleStore::match_pattern`] can match
/// exhaustively over the eight bound/unbound combinations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TriplePattern {
    pub subject: Option<Term>,
    pub predicate: Option<Iri>,
    pub object: Option<Term>,
}

impl TriplePattern {
    pub fn new(subject: Option<Term>, predicate: Option<Iri>, object: Option<Term>) -> Self {
        Self {
            subject,
            predicate,
            object,
        }
    }

    pub fn any() -> Self {
        Self::default()
    }
}
