use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use graphkit_core::{Iri, Term};

/// A SPARQL variable name, interned as a cheap-to-clone `Arc<str>` rather
/// than reusing [`Term`] — solution maps get cloned on every join step,
/// so variable identity needs to stay cheap.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Var(Arc<str>);

impl Var {
    pub fn new(name: impl Into<String>) -> Self {
        Self(Arc::from(name.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "?{}", self.0)
    }
}

/// A mapping from variable to bound term. Variables absent from a
/// solution are simply unbound in it.
pub type Solution = HashMap<Var, Term>;

/// Either a bound term or a variable, used in triple-pattern positions.
/// Predicate variables are permitted, so this is shared across all three
/// positions rather than restricting the predicate slot to `Iri`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TermOrVar {
    Var(Var),
    Term(Term),
}

impl TermOrVar {
    pub fn as_var(&self) -> Option<&Var> {
        match self {
            TermOrVar::Var(v) => Some(v),
            TermOrVar::Term(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TriplePatternAst {
    pub subject: TermOrVar,
    pub predicate: TermOrVar,
    pub object: TermOrVar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CmpOp {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicOp {
    And,
    Or,
    Not,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithOp {
    Add,
    Sub,
    Mul,
    Div,
}

/// Filter expressions, a closed sum over variables, constants,
/// comparisons, boolean connectives, built-in calls, and (reserved)
/// arithmetic.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Var(Var),
    Const(Term),
    Cmp(CmpOp, Box<Expression>, Box<Expression>),
    Logic(LogicOp, Vec<Expression>),
    Call(String, Vec<Expression>),
    Arith(ArithOp, Box<Expression>, Box<Expression>),
}

/// A graph pattern, evaluated left to right inside a [`GraphPattern::Group`]
/// via repeated `step(pattern, solutions)` application.
#[derive(Debug, Clone, PartialEq)]
pub enum GraphPattern {
    Triple(TriplePatternAst),
    Filter(Expression),
    /// `OPTIONAL { patterns }` — the patterns form their own group,
    /// evaluated independently and left-outer-joined onto the incoming
    /// solutions.
    Optional(Vec<GraphPattern>),
    /// `{ left } UNION { right }`.
    Union(Vec<GraphPattern>, Vec<GraphPattern>),
    /// A bare `{ patterns }` group, evaluated from a fresh seed and
    /// joined with the incoming solutions by compatibility.
    Group(Vec<GraphPattern>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Modifiers {
    pub order_by: Vec<(Var, OrderDirection)>,
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SelectVars {
    All,
    Vars(Vec<Var>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConstructTemplate {
    pub subject: TermOrVar,
    pub predicate: TermOrVar,
    pub object: TermOrVar,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DescribeTarget {
    Var(Var),
    Iri(Iri),
}

/// A parsed SPARQL query, one variant per supported query form.
#[derive(Debug, Clone, PartialEq)]
pub enum Query {
    Select {
        variables: SelectVars,
        distinct: bool,
        where_clause: Vec<GraphPattern>,
        modifiers: Modifiers,
    },
    Construct {
        template: Vec<ConstructTemplate>,
        where_clause: Vec<GraphPattern>,
        modifiers: Modifiers,
    },
    Ask {
        where_clause: Vec<GraphPattern>,
    },
    Describe {
        resources: Vec<DescribeTarget>,
        where_clause: Option<Vec<GraphPattern>>,
    },
}
