use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, Result};

/// An absolute IRI. Equality and hashing are by value; construction
/// rejects any lexical form containing whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Iri(Arc<str>);

impl Iri {
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        if value.chars().any(char::is_whitespace) {
            return Err(GraphError::InvalidIri(value));
        }
        Ok(Self(Arc::from(value)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Iri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Iri {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

static BLANK_NODE_COUNTER: AtomicU64 = AtomicU64::new(0);

/// A blank node, locally scoped to the store or document that produced
/// it. Two blank nodes are equal iff their identifiers are equal; no
/// graph-isomorphism comparison is performed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BlankNode(Arc<str>);

impl BlankNode {
    pub fn new(id: impl Into<String>) -> Self {
        Self(Arc::from(id.into()))
    }

    /// Generates a fresh, process-unique blank node identifier.
    pub fn fresh() -> Self {
        let n = BLANK_NODE_COUNTER.fetch_add(1, Ordering::Relaxed);
        Self(Arc::from(format!("b{n:016x}")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BlankNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "_:{}", self.0)
    }
}

/// A literal value: a lexical form plus at most one of a datatype IRI or
/// a language tag (lowercased).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Literal {
    value: Arc<str>,
    datatype: Option<Iri>,
    language: Option<Arc<str>>,
}

impl Literal {
    /// A plain literal with no datatype and no language tag.
    pub fn plain(value: impl Into<String>) -> Self {
        Self {
            value: Arc::from(value.into()),
            datatype: None,
            language: None,
        }
    }

    pub fn typed(value: impl Into<String>, datatype: Iri) -> Self {
        Self {
            value: Arc::from(value.into()),
            datatype: Some(datatype),
            language: None,
        }
    }

    pub fn with_language(value: impl Into<String>, language: impl Into<String>) -> Result<Self> {
        Ok(Self {
            value: Arc::from(value.into()),
            datatype: None,
            language: Some(Arc::from(language.into().to_lowercase())),
        })
    }

    /// Full constructor enforcing the datatype/language mutual-exclusion
    /// invariant.
    pub fn new(
        value: impl Into<String>,
        datatype: Option<Iri>,
        language: Option<String>,
    ) -> Result<Self> {
        if datatype.is_some() && language.is_some() {
            return Err(GraphError::LiteralDatatypeLanguageConflict);
        }
        Ok(Self {
            value: Arc::from(value.into()),
            datatype,
            language: language.map(|l| Arc::from(l.to_lowercase())),
        })
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn datatype(&self) -> Option<&Iri> {
        self.datatype.as_ref()
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// Parses the lexical form as an `f64`, used by numeric FILTER/SHACL
    /// comparisons. Datatype is not consulted; any literal whose lexical
    /// form parses as a number is usable numerically.
    pub fn as_f64(&self) -> Option<f64> {
        self.value.parse().ok()
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self.value)?;
        if let Some(dt) = &self.datatype {
            write!(f, "^^<{dt}>")?;
        } else if let Some(lang) = &self.language {
            write!(f, "@{lang}")?;
        }
        Ok(())
    }
}

/// Any RDF term: the closed sum `IRI | BlankNode | Literal`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Term {
    Iri(Iri),
    BlankNode(BlankNode),
    Literal(Literal),
}

impl Term {
    pub fn is_iri(&self) -> bool {
        matches!(self, Term::Iri(_))
    }

    pub fn is_blank_node(&self) -> bool {
        matches!(self, Term::BlankNode(_))
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Term::Literal(_))
    }

    pub fn as_iri(&self) -> Option<&Iri> {
        match self {
            Term::Iri(iri) => Some(iri),
            _ => None,
        }
    }

    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Term::Literal(lit) => Some(lit),
            _ => None,
        }
    }

    /// A term is a valid subject iff it is an IRI or a blank node.
    pub fn is_subject_position(&self) -> bool {
        !matches!(self, Term::Literal(_))
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Iri(iri) => write!(f, "<{iri}>"),
            Term::BlankNode(b) => write!(f, "{b}"),
            Term::Literal(lit) => write!(f, "{lit}"),
        }
    }
}

impl From<Iri> for Term {
    fn from(iri: Iri) -> Self {
        Term::Iri(iri)
    }
}

impl From<BlankNode> for Term {
    fn from(b: BlankNode) -> Self {
        Term::BlankNode(b)
    }
}

impl From<Literal> for Term {
    fn from(l: Literal) -> Self {
        Term::Literal(l)
    }
}

/// A single (subject, predicate, object) statement. The subject is
/// restricted to `IRI | BlankNode` and the predicate to `IRI` at
/// construction time; the object accepts any term.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Triple {
    subject: Term,
    predicate: Iri,
    object: Term,
}

impl Triple {
    pub fn new(subject: Term, predicate: Iri, object: Term) -> Result<Self> {
        if !subject.is_subject_position() {
            return Err(GraphError::InvalidIri(format!(
                "literal {subject} cannot appear in subject position"
            )));
        }
        Ok(Self {
            subject,
            predicate,
            object,
        })
    }

    pub fn subject(&self) -> &Term {
        &self.subject
    }

    pub fn predicate(&self) -> &Iri {
        &self.predicate
    }

    pub fn object(&self) -> &Term {
        &self.object
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}> {} .", self.subject, self.predicate, self.object)
    }
}
