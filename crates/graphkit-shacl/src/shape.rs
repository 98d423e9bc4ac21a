use graphkit_core::{Iri, Term};

/// Severity a shape or constraint violation is reported at. `conforms`
/// is false iff at least one result carries [`Severity::Violation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Violation,
    Warning,
    Info,
}

impl Default for Severity {
    fn default() -> Self {
        Severity::Violation
    }
}

/// A rule selecting focus nodes from the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Class(Iri),
    Node(Term),
    SubjectsOf(Iri),
    ObjectsOf(Iri),
}

/// `sh:nodeKind` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Iri,
    BlankNode,
    Literal,
    BlankNodeOrIri,
    BlankNodeOrLiteral,
    IriOrLiteral,
}

/// The unified constraint model. Unlike the teacher's split
/// `NodeConstraint`/`PropertyConstraint` enums, every constraint kind
/// lives in one sum type: a node shape and a property shape evaluate the
/// same variants, just against a different value set (the focus node
/// itself for a node shape, or the property's resolved values for a
/// property shape).
#[derive(Debug, Clone, PartialEq)]
pub enum Constraint {
    // Cardinality (property shapes only; evaluated once per full value set)
    MinCount(u64),
    MaxCount(u64),

    // Value-type (per value)
    Datatype(Iri),
    Class(Iri),
    NodeKind(NodeKind),

    // String (per value)
    MinLength(u64),
    MaxLength(u64),
    Pattern { pattern: String, flags: Option<String> },
    LanguageIn(Vec<String>),

    // Set membership
    HasValue(Term),
    In(Vec<Term>),

    // Numeric (per value)
    MinInclusive(f64),
    MaxInclusive(f64),
    MinExclusive(f64),
    MaxExclusive(f64),

    // Property pair (property shapes only, compares against another path)
    Equals(Iri),
    Disjoint(Iri),
    LessThan(Iri),
    LessThanOrEquals(Iri),

    // Logical composition over nested shapes
    And(Vec<NodeShape>),
    Or(Vec<NodeShape>),
    Not(Box<NodeShape>),
    Xone(Vec<NodeShape>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct NodeShape {
    pub id: Iri,
    pub targets: Vec<Target>,
    pub constraints: Vec<Constraint>,
    pub property_shapes: Vec<PropertyShape>,
    pub message: Option<String>,
    pub severity: Severity,
    pub deactivated: bool,
}

impl NodeShape {
    pub fn new(id: Iri) -> Self {
        Self {
            id,
            targets: Vec::new(),
            constraints: Vec::new(),
            property_shapes: Vec::new(),
            message: None,
            severity: Severity::Violation,
            deactivated: false,
        }
    }

    pub fn with_target(mut self, target: Target) -> Self {
        self.targets.push(target);
        self
    }

    pub fn with_constraint(mut self, constraint: Constraint) -> Self {
        self.constraints.push(constraint);
        self
    }

    pub fn with_property(mut self, property: PropertyShape) -> Self {
        self.property_shapes.push(property);
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PropertyShape {
    pub id: Option<Iri>,
    pub path: Iri,
    pub constraints: Vec<Constraint>,
    pub message: Option<String>,
    pub severity: Severity,
    pub name: Option<String>,
}

impl PropertyShape {
    pub fn new(path: Iri) -> Self {
        Self {
            id: None,
            path,
            constraints: Vec::new(),
            message: None,
            severity: Severity::Violation,
            name: None,
        }
    }

    pub fn with_id(mut self, id: Iri) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_constraint(mut self, constraint: Constraint) -> Self {
        self.constraints.push(constraint);
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}
