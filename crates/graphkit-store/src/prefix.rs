use std::collections::HashMap;

use graphkit_core::{GraphError, Iri, Result};

/// Maps short prefixes to IRI namespaces, owned by the store.
///
/// `abbreviate` picks the longest matching namespace so that, e.g., a
/// registry holding both `ex: http://example.org/` and
/// `exv: http://example.org/vocab/` abbreviates
/// `http://example.org/vocab/Thing` against `exv`, not `ex`.
#[derive(Debug, Clone, Default)]
pub struct PrefixRegistry {
    prefixes: HashMap<String, String>,
}

impl PrefixRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, prefix: impl Into<String>, namespace: impl Into<String>) {
        self.prefixes.insert(prefix.into(), namespace.into());
    }

    pub fn expand(&self, prefixed_name: &str) -> Result<Iri> {
        let (prefix, local) = prefixed_name
            .split_once(':')
            .ok_or_else(|| GraphError::UnknownPrefix(prefixed_name.to_string()))?;
        let namespace = self
            .prefixes
            .get(prefix)
            .ok_or_else(|| GraphError::UnknownPrefix(prefix.to_string()))?;
        Iri::new(format!("{namespace}{local}"))
    }

    pub fn abbreviate(&self, iri: &Iri) -> Option<String> {
        self.prefixes
            .iter()
            .filter(|(_, ns)| iri.as_str().starts_with(ns.as_str()))
            .max_by_key(|(_, ns)| ns.len())
            .map(|(prefix, ns)| format!("{prefix}:{}", &iri.as_str()[ns.len()..]))
    }
}
