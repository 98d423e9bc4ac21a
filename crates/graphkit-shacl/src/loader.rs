use graphkit_core::vocab::{rdf, shacl};
use graphkit_core::{Iri, Term};
use graphkit_store::{TriplePattern, TripleStore};

use crate::shape::{Constraint, NodeKind, NodeShape, PropertyShape, Severity, Target};

/// All node shapes found in a store, keyed by construction order. Grounded
/// on `fukurow-shacl`'s `load_from_store`, but rewritten against the real
/// `graphkit_core` term types (the teacher's version referenced a
/// `fukurow_core::model` module that did not exist) and extended to cover
/// every constraint in [`Constraint`] rather than the five the teacher
/// detected.
#[derive(Debug, Clone, Default)]
pub struct ShapesGraph {
    pub shapes: Vec<NodeShape>,
}

impl ShapesGraph {
    /// Scans `store` for `sh:NodeShape` individuals and builds the
    /// corresponding [`NodeShape`] values, including any `sh:property`
    /// shapes nested inside them.
    pub fn from_store(store: &TripleStore) -> Self {
        let node_shape_class = Term::Iri(Iri::new(shacl::NODE_SHAPE).unwrap());
        let type_predicate = Iri::new(rdf::TYPE).unwrap();

        let shape_nodes = store.match_pattern(&TriplePattern::new(
            None,
            Some(type_predicate),
            Some(node_shape_class),
        ));

        let shapes = shape_nodes
            .into_iter()
            .map(|triple| build_node_shape(store, triple.subject()))
            .collect();

        Self { shapes }
    }
}

fn build_node_shape(store: &TripleStore, id: &Term) -> NodeShape {
    let id_iri = match id {
        Term::Iri(iri) => iri.clone(),
        other => {
            tracing::warn!(node = %other, "node shape identified by a non-IRI term, using its string form");
            Iri::new(format!("urn:graphkit:shape:{other}")).unwrap_or_else(|_| {
                Iri::new("urn:graphkit:shape:anonymous").expect("static IRI is valid")
            })
        }
    };

    let mut shape = NodeShape::new(id_iri);

    for triple in object_triples(store, id, shacl::TARGET_CLASS) {
        if let Term::Iri(class) = triple.object() {
            shape = shape.with_target(Target::Class(class.clone()));
        }
    }
    for triple in object_triples(store, id, shacl::TARGET_NODE) {
        shape = shape.with_target(Target::Node(triple.object().clone()));
    }
    for triple in object_triples(store, id, shacl::TARGET_SUBJECTS_OF) {
        if let Term::Iri(p) = triple.object() {
            shape = shape.with_target(Target::SubjectsOf(p.clone()));
        }
    }
    for triple in object_triples(store, id, shacl::TARGET_OBJECTS_OF) {
        if let Term::Iri(p) = triple.object() {
            shape = shape.with_target(Target::ObjectsOf(p.clone()));
        }
    }

    for constraint in node_level_constraints(store, id) {
        shape = shape.with_constraint(constraint);
    }

    if let Some(message) = string_value(store, id, shacl::MESSAGE) {
        shape = shape.with_message(message);
    }
    if let Some(severity) = severity_value(store, id) {
        shape = shape.with_severity(severity);
    }
    shape.deactivated = bool_value(store, id, shacl::DEACTIVATED).unwrap_or(false);

    for triple in object_triples(store, id, shacl::PROPERTY) {
        shape = shape.with_property(build_property_shape(store, triple.object()));
    }

    shape
}

fn build_property_shape(store: &TripleStore, id: &Term) -> PropertyShape {
    let path = object_triples(store, id, shacl::PATH)
        .into_iter()
        .find_map(|t| match t.object() {
            Term::Iri(p) => Some(p.clone()),
            _ => None,
        })
        .unwrap_or_else(|| Iri::new("urn:graphkit:shape:unresolved-path").expect("static IRI"));

    let mut property = PropertyShape::new(path);
    if let Term::Iri(iri) = id {
        property = property.with_id(iri.clone());
    }

    for constraint in property_level_constraints(store, id) {
        property = property.with_constraint(constraint);
    }

    if let Some(message) = string_value(store, id, shacl::MESSAGE) {
        property = property.with_message(message);
    }
    if let Some(severity) = severity_value(store, id) {
        property = property.with_severity(severity);
    }
    if let Some(name) = string_value(store, id, shacl::NAME) {
        property = property.with_name(name);
    }

    property
}

/// Constraints meaningful on either a node shape or a property shape:
/// datatype/class/nodeKind/string/numeric/set-membership/property-pair.
fn shared_constraints(store: &TripleStore, id: &Term) -> Vec<Constraint> {
    let mut out = Vec::new();

    for t in object_triples(store, id, shacl::DATATYPE) {
        if let Term::Iri(dt) = t.object() {
            out.push(Constraint::Datatype(dt.clone()));
        }
    }
    for t in object_triples(store, id, shacl::CLASS) {
        if let Term::Iri(c) = t.object() {
            out.push(Constraint::Class(c.clone()));
        }
    }
    if let Some(nk) = node_kind_value(store, id) {
        out.push(Constraint::NodeKind(nk));
    }
    if let Some(n) = numeric_value(store, id, shacl::MIN_LENGTH) {
        out.push(Constraint::MinLength(n as u64));
    }
    if let Some(n) = numeric_value(store, id, shacl::MAX_LENGTH) {
        out.push(Constraint::MaxLength(n as u64));
    }
    for t in object_triples(store, id, shacl::PATTERN) {
        if let Term::Literal(lit) = t.object() {
            out.push(Constraint::Pattern {
                pattern: lit.value().to_string(),
                flags: None,
            });
        }
    }
    if let Some(langs) = rdf_list_strings(store, id, shacl::LANGUAGE_IN) {
        out.push(Constraint::LanguageIn(langs));
    }
    if let Some(n) = numeric_value(store, id, shacl::MIN_INCLUSIVE) {
        out.push(Constraint::MinInclusive(n));
    }
    if let Some(n) = numeric_value(store, id, shacl::MAX_INCLUSIVE) {
        out.push(Constraint::MaxInclusive(n));
    }
    if let Some(n) = numeric_value(store, id, shacl::MIN_EXCLUSIVE) {
        out.push(Constraint::MinExclusive(n));
    }
    if let Some(n) = numeric_value(store, id, shacl::MAX_EXCLUSIVE) {
        out.push(Constraint::MaxExclusive(n));
    }
    for t in object_triples(store, id, shacl::HAS_VALUE) {
        out.push(Constraint::HasValue(t.object().clone()));
    }
    if let Some(terms) = rdf_list_terms(store, id, shacl::IN) {
        out.push(Constraint::In(terms));
    }
    for t in object_triples(store, id, shacl::EQUALS) {
        if let Term::Iri(p) = t.object() {
            out.push(Constraint::Equals(p.clone()));
        }
    }
    for t in object_triples(store, id, shacl::DISJOINT) {
        if let Term::Iri(p) = t.object() {
            out.push(Constraint::Disjoint(p.clone()));
        }
    }
    for t in object_triples(store, id, shacl::LESS_THAN) {
        if let Term::Iri(p) = t.object() {
            out.push(Constraint::LessThan(p.clone()));
        }
    }
    for t in object_triples(store, id, shacl::LESS_THAN_OR_EQUALS) {
        if let Term::Iri(p) = t.object() {
            out.push(Constraint::LessThanOrEquals(p.clone()));
        }
    }

    for t in object_triples(store, id, shacl::AND) {
        out.push(Constraint::And(rdf_list_shapes(store, t.object())));
    }
    for t in object_triples(store, id, shacl::OR) {
        out.push(Constraint::Or(rdf_list_shapes(store, t.object())));
    }
    for t in object_triples(store, id, shacl::NOT) {
        out.push(Constraint::Not(Box::new(build_node_shape(store, t.object()))));
    }
    for t in object_triples(store, id, shacl::XONE) {
        out.push(Constraint::Xone(rdf_list_shapes(store, t.object())));
    }

    out
}

fn node_level_constraints(store: &TripleStore, id: &Term) -> Vec<Constraint> {
    shared_constraints(store, id)
}

fn property_level_constraints(store: &TripleStore, id: &Term) -> Vec<Constraint> {
    let mut out = shared_constraints(store, id);
    if let Some(n) = numeric_value(store, id, shacl::MIN_COUNT) {
        out.push(Constraint::MinCount(n as u64));
    }
    if let Some(n) = numeric_value(store, id, shacl::MAX_COUNT) {
        out.push(Constraint::MaxCount(n as u64));
    }
    out
}

fn object_triples(
    store: &TripleStore,
    subject: &Term,
    predicate: &str,
) -> Vec<graphkit_core::Triple> {
    store.match_pattern(&TriplePattern::new(
        Some(subject.clone()),
        Some(Iri::new(predicate).expect("static predicate IRI")),
        None,
    ))
}

fn string_value(store: &TripleStore, subject: &Term, predicate: &str) -> Option<String> {
    object_triples(store, subject, predicate).into_iter().find_map(|t| match t.object() {
        Term::Literal(lit) => Some(lit.value().to_string()),
        _ => None,
    })
}

fn bool_value(store: &TripleStore, subject: &Term, predicate: &str) -> Option<bool> {
    string_value(store, subject, predicate).and_then(|s| s.parse().ok())
}

fn numeric_value(store: &TripleStore, subject: &Term, predicate: &str) -> Option<f64> {
    object_triples(store, subject, predicate).into_iter().find_map(|t| match t.object() {
        Term::Literal(lit) => lit.as_f64(),
        _ => None,
    })
}

fn node_kind_value(store: &TripleStore, subject: &Term) -> Option<NodeKind> {
    object_triples(store, subject, shacl::NODE_KIND).into_iter().find_map(|t| match t.object() {
        Term::Iri(iri) => match iri.as_str() {
            shacl::NODE_KIND_IRI => Some(NodeKind::Iri),
            shacl::NODE_KIND_BLANK_NODE => Some(NodeKind::BlankNode),
            shacl::NODE_KIND_LITERAL => Some(NodeKind::Literal),
            shacl::NODE_KIND_BLANK_NODE_OR_IRI => Some(NodeKind::BlankNodeOrIri),
            shacl::NODE_KIND_BLANK_NODE_OR_LITERAL => Some(NodeKind::BlankNodeOrLiteral),
            shacl::NODE_KIND_IRI_OR_LITERAL => Some(NodeKind::IriOrLiteral),
            other => {
                tracing::warn!(node_kind = other, "unknown sh:nodeKind value, ignoring");
                None
            }
        },
        _ => None,
    })
}

fn severity_value(store: &TripleStore, subject: &Term) -> Option<Severity> {
    object_triples(store, subject, shacl::SEVERITY).into_iter().find_map(|t| match t.object() {
        Term::Iri(iri) => match iri.as_str() {
            shacl::VIOLATION => Some(Severity::Violation),
            shacl::WARNING => Some(Severity::Warning),
            shacl::INFO => Some(Severity::Info),
            other => {
                tracing::warn!(severity = other, "unknown sh:severity value, defaulting to Violation");
                None
            }
        },
        _ => None,
    })
}

/// Walks an `rdf:first`/`rdf:rest` collection rooted at the object of
/// `subject predicate _` and returns its members in list order.
fn rdf_list_terms(store: &TripleStore, subject: &Term, predicate: &str) -> Option<Vec<Term>> {
    let head = object_triples(store, subject, predicate).into_iter().next()?.object().clone();
    Some(collect_list(store, &head))
}

fn rdf_list_strings(store: &TripleStore, subject: &Term, predicate: &str) -> Option<Vec<String>> {
    rdf_list_terms(store, subject, predicate).map(|terms| {
        terms
            .into_iter()
            .filter_map(|t| match t {
                Term::Literal(lit) => Some(lit.value().to_string()),
                _ => None,
            })
            .collect()
    })
}

fn rdf_list_shapes(store: &TripleStore, head: &Term) -> Vec<NodeShape> {
    collect_list(store, head).into_iter().map(|node| build_node_shape(store, &node)).collect()
}

fn collect_list(store: &TripleStore, head: &Term) -> Vec<Term> {
    let nil = Iri::new(rdf::NIL).expect("static IRI");
    let mut out = Vec::new();
    let mut current = head.clone();
    loop {
        if let Term::Iri(iri) = &current {
            if iri.as_str() == nil.as_str() {
                break;
            }
        }
        let first = object_triples(store, &current, rdf::FIRST).into_iter().next();
        let rest = object_triples(store, &current, rdf::REST).into_iter().next();
        match (first, rest) {
            (Some(first), Some(rest)) => {
                out.push(first.object().clone());
                current = rest.object().clone();
            }
            _ => break,
        }
    }
    out
}
