use std::collections::{HashMap, HashSet};

use graphkit_core::{Iri, Term, Triple};

use crate::pattern::TriplePattern;
use crate::prefix::PrefixRegistry;

type ObjectsByPredicate = HashMap<Iri, HashSet<Term>>;

/// An in-memory RDF triple store backed by three coordinated hash
/// indexes (SPO, OPS, PSO). Two of the six hexastore orderings already
/// cover every bound/unbound combination of (subject, predicate, object)
/// with at most one index scan; see [`TripleStore::match_pattern`].
#[derive(Debug, Clone, Default)]
pub struct TripleStore {
    spo: HashMap<Term, ObjectsByPredicate>,
    ops: HashMap<Term, ObjectsByPredicate>,
    pso: HashMap<Iri, HashMap<Term, HashSet<Term>>>,
    triple_count: usize,
    prefixes: PrefixRegistry,
}

impl TripleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts the triple if absent. Returns `true` if the store changed.
    pub fn add(&mut self, triple: &Triple) -> bool {
        let s = triple.subject().clone();
        let p = triple.predicate().clone();
        let o = triple.object().clone();

        let inserted = self
            .spo
            .entry(s.clone())
            .or_default()
            .entry(p.clone())
            .or_default()
            .insert(o.clone());
        if !inserted {
            return false;
        }

        self.ops
            .entry(o.clone())
            .or_default()
            .entry(p.clone())
            .or_default()
            .insert(s.clone());
        self.pso.entry(p).or_default().entry(s).or_default().insert(o);

        self.triple_count += 1;
        true
    }

    /// Removes the triple if present, pruning any inner maps left empty.
    /// Returns `true` if the store changed.
    pub fn remove(&mut self, triple: &Triple) -> bool {
        let s = triple.subject();
        let p = triple.predicate();
        let o = triple.object();

        let removed = self
            .spo
            .get_mut(s)
            .map(|by_pred| {
                let removed = by_pred.get_mut(p).map(|objs| objs.remove(o)).unwrap_or(false);
                if removed {
                    if by_pred.get(p).map(HashSet::is_empty).unwrap_or(false) {
                        by_pred.remove(p);
                    }
                }
                removed
            })
            .unwrap_or(false);

        if !removed {
            return false;
        }
        if self.spo.get(s).map(HashMap::is_empty).unwrap_or(false) {
            self.spo.remove(s);
        }

        if let Some(by_pred) = self.ops.get_mut(o) {
            if let Some(subs) = by_pred.get_mut(p) {
                subs.remove(s);
                if subs.is_empty() {
                    by_pred.remove(p);
                }
            }
            if by_pred.is_empty() {
                self.ops.remove(o);
            }
        }
        if let Some(by_subj) = self.pso.get_mut(p) {
            if let Some(objs) = by_subj.get_mut(s) {
                objs.remove(o);
                if objs.is_empty() {
                    by_subj.remove(s);
                }
            }
            if by_subj.is_empty() {
                self.pso.remove(p);
            }
        }

        self.triple_count -= 1;
        true
    }

    pub fn has(&self, triple: &Triple) -> bool {
        self.spo
            .get(triple.subject())
            .and_then(|by_pred| by_pred.get(triple.predicate()))
            .map(|objs| objs.contains(triple.object()))
            .unwrap_or(false)
    }

    /// Returns every stored triple matching `pattern`, selecting the
    /// index that gives the shortest scan for the given bound positions.
    pub fn match_pattern(&self, pattern: &TriplePattern) -> Vec<Triple> {
        match (&pattern.subject, &pattern.predicate, &pattern.object) {
            (Some(s), Some(p), Some(o)) => {
                if self
                    .spo
                    .get(s)
                    .and_then(|by_pred| by_pred.get(p))
                    .map(|objs| objs.contains(o))
                    .unwrap_or(false)
                {
                    vec![Triple::new(s.clone(), p.clone(), o.clone()).expect("already valid")]
                } else {
                    Vec::new()
                }
            }
            (Some(s), Some(p), None) => self
                .spo
                .get(s)
                .and_then(|by_pred| by_pred.get(p))
                .into_iter()
                .flatten()
                .map(|o| Triple::new(s.clone(), p.clone(), o.clone()).expect("already valid"))
                .collect(),
            (None, Some(p), Some(o)) => self
                .ops
                .get(o)
                .and_then(|by_pred| by_pred.get(p))
                .into_iter()
                .flatten()
                .map(|s| Triple::new(s.clone(), p.clone(), o.clone()).expect("already valid"))
                .collect(),
            (Some(s), None, Some(o)) => self
                .spo
                .get(s)
                .into_iter()
                .flat_map(|by_pred| by_pred.iter())
                .filter(|(_, objs)| objs.contains(o))
                .map(|(p, _)| Triple::new(s.clone(), p.clone(), o.clone()).expect("already valid"))
                .collect(),
            (Some(s), None, None) => self
                .spo
                .get(s)
                .into_iter()
                .flat_map(|by_pred| by_pred.iter())
                .flat_map(|(p, objs)| {
                    objs.iter()
                        .map(move |o| Triple::new(s.clone(), p.clone(), o.clone()).expect("already valid"))
                })
                .collect(),
            (None, Some(p), None) => self
                .pso
                .get(p)
                .into_iter()
                .flat_map(|by_subj| by_subj.iter())
                .flat_map(|(s, objs)| {
                    objs.iter()
                        .map(move |o| Triple::new(s.clone(), p.clone(), o.clone()).expect("already valid"))
                })
                .collect(),
            (None, None, Some(o)) => self
                .ops
                .get(o)
                .into_iter()
                .flat_map(|by_pred| by_pred.iter())
                .flat_map(|(p, subs)| {
                    subs.iter()
                        .map(move |s| Triple::new(s.clone(), p.clone(), o.clone()).expect("already valid"))
                })
                .collect(),
            (None, None, None) => self.iter().collect(),
        }
    }

    pub fn count_triples(&self) -> usize {
        self.triple_count
    }

    pub fn count_subjects(&self) -> usize {
        self.spo.len()
    }

    pub fn count_predicates(&self) -> usize {
        self.pso.len()
    }

    pub fn count_objects(&self) -> usize {
        self.ops.len()
    }

    pub fn count_by_predicate(&self, predicate: &Iri) -> usize {
        self.pso
            .get(predicate)
            .map(|by_subj| by_subj.values().map(HashSet::len).sum())
            .unwrap_or(0)
    }

    pub fn prefixes(&self) -> &PrefixRegistry {
        &self.prefixes
    }

    pub fn prefixes_mut(&mut self) -> &mut PrefixRegistry {
        &mut self.prefixes
    }

    pub fn register_prefix(&mut self, prefix: impl Into<String>, namespace: impl Into<String>) {
        self.prefixes.register(prefix, namespace);
    }

    pub fn expand(&self, prefixed_name: &str) -> graphkit_core::Result<Iri> {
        self.prefixes.expand(prefixed_name)
    }

    pub fn abbreviate(&self, iri: &Iri) -> Option<String> {
        self.prefixes.abbreviate(iri)
    }

    /// Iterates every stored triple exactly once. Order is unspecified
    /// but stable within a single call.
    pub fn iter(&self) -> impl Iterator<Item = Triple> + '_ {
        self.spo.iter().flat_map(|(s, by_pred)| {
            by_pred.iter().flat_map(move |(p, objs)| {
                objs.iter()
                    .map(move |o| Triple::new(s.clone(), p.clone(), o.clone()).expect("already valid"))
            })
        })
    }
}

impl Extend<Triple> for TripleStore {
    fn extend<T: IntoIterator<Item = Triple>>(&mut self, iter: T) {
        for triple in iter {
            self.add(&triple);
        }
    }
}

impl FromIterator<Triple> for TripleStore {
    fn from_iter<T: IntoIterator<Item = Triple>>(iter: T) -> Self {
        let mut store = Self::new();
        store.extend(iter);
        store
    }
}
