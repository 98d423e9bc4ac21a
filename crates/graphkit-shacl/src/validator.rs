use regex::Regex;

use graphkit_core::vocab::rdf;
use graphkit_core::{Iri, Term};
use graphkit_store::{TriplePattern, TripleStore};

use crate::report::{ValidationReport, ValidationResult};
use crate::shape::{Constraint, NodeKind, NodeShape, PropertyShape, Severity, Target};
use crate::ShapesGraph;

/// Validates every triple in `store` against every shape in `shapes`,
/// returning a single combined report.
///
/// Unlike the teacher's `ValidationMode` (FailFast/Warn/Skip), there is no
/// early-exit mode here: every target node of every shape is checked and
/// every result is collected, then `conforms` is derived from the results
/// rather than tracked as separate mutable state the way the teacher's
/// validator did (which let a later `Warn`-mode shape silently flip an
/// already-failed `conforms` flag back to `true`).
pub fn validate(store: &TripleStore, shapes: &ShapesGraph) -> ValidationReport {
    let mut results = Vec::new();
    for shape in &shapes.shapes {
        validate_node_shape(store, shape, &mut results);
    }
    ValidationReport::new(results)
}

fn validate_node_shape(store: &TripleStore, shape: &NodeShape, results: &mut Vec<ValidationResult>) {
    if shape.deactivated {
        return;
    }
    for focus_node in resolve_targets(store, &shape.targets) {
        validate_focus_node(store, shape, &focus_node, results);
    }
}

fn validate_focus_node(
    store: &TripleStore,
    shape: &NodeShape,
    focus_node: &Term,
    results: &mut Vec<ValidationResult>,
) {
    for constraint in &shape.constraints {
        evaluate_constraint(
            store,
            constraint,
            focus_node,
            std::slice::from_ref(focus_node),
            None,
            shape,
            results,
        );
    }
    for property in &shape.property_shapes {
        validate_property_shape(store, property, focus_node, results);
    }
}

fn validate_property_shape(
    store: &TripleStore,
    property: &PropertyShape,
    focus_node: &Term,
    results: &mut Vec<ValidationResult>,
) {
    let values: Vec<Term> = store
        .match_pattern(&TriplePattern::new(
            Some(focus_node.clone()),
            Some(property.path.clone()),
            None,
        ))
        .into_iter()
        .map(|t| t.object().clone())
        .collect();

    for constraint in &property.constraints {
        evaluate_property_constraint(store, constraint, focus_node, &values, property, results);
    }
}

/// Resolves the full set of focus nodes for a shape from its declared
/// targets. Implicit class-based targeting (a node shape that is itself
/// used as an `rdfs:Class`) is out of scope; only the four explicit
/// `sh:target*` predicates are honored, per the design notes.
fn resolve_targets(store: &TripleStore, targets: &[Target]) -> Vec<Term> {
    let mut out = Vec::new();
    let type_predicate = Iri::new(rdf::TYPE).expect("static IRI");

    for target in targets {
        match target {
            Target::Class(class) => {
                let matches = store.match_pattern(&TriplePattern::new(
                    None,
                    Some(type_predicate.clone()),
                    Some(Term::Iri(class.clone())),
                ));
                out.extend(matches.into_iter().map(|t| t.subject().clone()));
            }
            Target::Node(node) => out.push(node.clone()),
            Target::SubjectsOf(predicate) => {
                let matches = store.match_pattern(&TriplePattern::new(
                    None,
                    Some(predicate.clone()),
                    None,
                ));
                out.extend(matches.into_iter().map(|t| t.subject().clone()));
            }
            Target::ObjectsOf(predicate) => {
                let matches = store.match_pattern(&TriplePattern::new(
                    None,
                    Some(predicate.clone()),
                    None,
                ));
                out.extend(matches.into_iter().map(|t| t.object().clone()));
            }
        }
    }
    out.sort_by_key(|t| t.to_string());
    out.dedup();
    out
}

/// Cardinality, set-membership and logical constraints are evaluated once
/// per full value set; everything else is evaluated once per value, which
/// on a node shape means the single-element slice `[focus_node]`.
fn evaluate_constraint(
    store: &TripleStore,
    constraint: &Constraint,
    focus_node: &Term,
    values: &[Term],
    result_path: Option<&Iri>,
    shape: &NodeShape,
    results: &mut Vec<ValidationResult>,
) {
    let mut emit = |component: &str, value: Option<Term>, message: Option<String>| {
        results.push(ValidationResult {
            focus_node: focus_node.clone(),
            result_path: result_path.cloned(),
            value,
            source_constraint_component: component.to_string(),
            source_shape: shape.id.clone(),
            message: message.or_else(|| shape.message.clone()),
            severity: shape.severity,
        });
    };

    match constraint {
        Constraint::And(nested) => {
            let all_conform = nested.iter().all(|n| conforms_inline(store, n, focus_node));
            if !all_conform {
                emit("And", Some(focus_node.clone()), None);
            }
        }
        Constraint::Or(nested) => {
            let any_conform = nested.iter().any(|n| conforms_inline(store, n, focus_node));
            if !any_conform {
                emit("Or", Some(focus_node.clone()), None);
            }
        }
        Constraint::Not(nested) => {
            if conforms_inline(store, nested, focus_node) {
                emit("Not", Some(focus_node.clone()), None);
            }
        }
        Constraint::Xone(nested) => {
            let count = nested.iter().filter(|n| conforms_inline(store, n, focus_node)).count();
            if count != 1 {
                emit("Xone", Some(focus_node.clone()), None);
            }
        }
        Constraint::HasValue(expected) => {
            if !values.contains(expected) {
                emit("HasValue", None, None);
            }
        }
        Constraint::In(allowed) => {
            for value in values {
                if !allowed.contains(value) {
                    emit("In", Some(value.clone()), None);
                }
            }
        }
        Constraint::Class(class) => {
            for value in values {
                apply_class_constraint(store, class, value, &mut emit);
            }
        }
        other => {
            for value in values {
                check_per_value_constraint(other, value, &mut emit);
            }
        }
    }
}

/// Property shapes additionally support cardinality and property-pair
/// constraints, which need the full value set and the focus node's other
/// property values respectively.
fn evaluate_property_constraint(
    store: &TripleStore,
    constraint: &Constraint,
    focus_node: &Term,
    values: &[Term],
    property: &PropertyShape,
    results: &mut Vec<ValidationResult>,
) {
    let mut emit = |component: &str, value: Option<Term>, message: Option<String>| {
        results.push(ValidationResult {
            focus_node: focus_node.clone(),
            result_path: property.id.clone().or_else(|| Some(property.path.clone())),
            value,
            source_constraint_component: component.to_string(),
            source_shape: property
                .id
                .clone()
                .unwrap_or_else(|| property.path.clone()),
            message: message.or_else(|| property.message.clone()),
            severity: property.severity,
        });
    };

    match constraint {
        Constraint::MinCount(min) => {
            if (values.len() as u64) < *min {
                emit("MinCount", None, None);
            }
        }
        Constraint::MaxCount(max) => {
            if (values.len() as u64) > *max {
                emit("MaxCount", None, None);
            }
        }
        Constraint::HasValue(expected) => {
            if !values.contains(expected) {
                emit("HasValue", None, None);
            }
        }
        Constraint::In(allowed) => {
            for value in values {
                if !allowed.contains(value) {
                    emit("In", Some(value.clone()), None);
                }
            }
        }
        Constraint::Equals(other_path) => {
            let other_values = property_values(store, focus_node, other_path);
            if !same_set(values, &other_values) {
                emit("Equals", None, None);
            }
        }
        Constraint::Disjoint(other_path) => {
            let other_values = property_values(store, focus_node, other_path);
            if values.iter().any(|v| other_values.contains(v)) {
                emit("Disjoint", None, None);
            }
        }
        Constraint::LessThan(other_path) => {
            let other_values = property_values(store, focus_node, other_path);
            if !all_pairs_ordered(values, &other_values, false) {
                emit("LessThan", None, None);
            }
        }
        Constraint::LessThanOrEquals(other_path) => {
            let other_values = property_values(store, focus_node, other_path);
            if !all_pairs_ordered(values, &other_values, true) {
                emit("LessThanOrEquals", None, None);
            }
        }
        Constraint::And(nested) => {
            let all_conform = nested.iter().all(|n| conforms_inline(store, n, focus_node));
            if !all_conform {
                emit("And", None, None);
            }
        }
        Constraint::Or(nested) => {
            let any_conform = nested.iter().any(|n| conforms_inline(store, n, focus_node));
            if !any_conform {
                emit("Or", None, None);
            }
        }
        Constraint::Not(nested) => {
            if conforms_inline(store, nested, focus_node) {
                emit("Not", None, None);
            }
        }
        Constraint::Xone(nested) => {
            let count = nested.iter().filter(|n| conforms_inline(store, n, focus_node)).count();
            if count != 1 {
                emit("Xone", None, None);
            }
        }
        Constraint::Class(class) => {
            for value in values {
                apply_class_constraint(store, class, value, &mut emit);
            }
        }
        other => {
            for value in values {
                check_per_value_constraint(other, value, &mut emit);
            }
        }
    }
}

fn check_per_value_constraint(
    constraint: &Constraint,
    value: &Term,
    emit: &mut impl FnMut(&str, Option<Term>, Option<String>),
) {
    match constraint {
        Constraint::Datatype(expected) => {
            let actual = value.as_literal().and_then(|lit| lit.datatype());
            if actual != Some(expected) {
                emit("Datatype", Some(value.clone()), None);
            }
        }
        Constraint::NodeKind(kind) => {
            if !node_kind_matches(kind, value) {
                emit("NodeKind", Some(value.clone()), None);
            }
        }
        Constraint::MinLength(min) => {
            if lexical_len(value) < *min {
                emit("MinLength", Some(value.clone()), None);
            }
        }
        Constraint::MaxLength(max) => {
            if lexical_len(value) > *max {
                emit("MaxLength", Some(value.clone()), None);
            }
        }
        Constraint::Pattern { pattern, flags: _ } => match Regex::new(pattern) {
            Ok(re) => {
                if !re.is_match(lexical_form(value)) {
                    emit("Pattern", Some(value.clone()), None);
                }
            }
            Err(err) => {
                tracing::warn!(pattern, error = %err, "invalid sh:pattern regex, skipping constraint");
            }
        },
        Constraint::LanguageIn(langs) => {
            let ok = value
                .as_literal()
                .and_then(|lit| lit.language())
                .map(|lang| langs.iter().any(|l| l.eq_ignore_ascii_case(lang)))
                .unwrap_or(false);
            if !ok {
                emit("LanguageIn", Some(value.clone()), None);
            }
        }
        Constraint::MinInclusive(bound) => {
            if !numeric_of(value).map(|n| n >= *bound).unwrap_or(false) {
                emit("MinInclusive", Some(value.clone()), None);
            }
        }
        Constraint::MaxInclusive(bound) => {
            if !numeric_of(value).map(|n| n <= *bound).unwrap_or(false) {
                emit("MaxInclusive", Some(value.clone()), None);
            }
        }
        Constraint::MinExclusive(bound) => {
            if !numeric_of(value).map(|n| n > *bound).unwrap_or(false) {
                emit("MinExclusive", Some(value.clone()), None);
            }
        }
        Constraint::MaxExclusive(bound) => {
            if !numeric_of(value).map(|n| n < *bound).unwrap_or(false) {
                emit("MaxExclusive", Some(value.clone()), None);
            }
        }
        _ => {}
    }
}

fn class_membership_holds(store: &TripleStore, class: &Iri, value: &Term) -> bool {
    let type_predicate = Iri::new(rdf::TYPE).expect("static IRI");
    !store
        .match_pattern(&TriplePattern::new(
            Some(value.clone()),
            Some(type_predicate),
            Some(Term::Iri(class.clone())),
        ))
        .is_empty()
}

fn node_kind_matches(kind: &NodeKind, value: &Term) -> bool {
    match kind {
        NodeKind::Iri => value.is_iri(),
        NodeKind::BlankNode => value.is_blank_node(),
        NodeKind::Literal => value.is_literal(),
        NodeKind::BlankNodeOrIri => value.is_blank_node() || value.is_iri(),
        NodeKind::BlankNodeOrLiteral => value.is_blank_node() || value.is_literal(),
        NodeKind::IriOrLiteral => value.is_iri() || value.is_literal(),
    }
}

fn lexical_form(value: &Term) -> &str {
    match value {
        Term::Literal(lit) => lit.value(),
        Term::Iri(iri) => iri.as_str(),
        Term::BlankNode(b) => b.as_str(),
    }
}

fn lexical_len(value: &Term) -> u64 {
    lexical_form(value).chars().count() as u64
}

fn numeric_of(value: &Term) -> Option<f64> {
    value.as_literal().and_then(|lit| lit.as_f64())
}

fn property_values(store: &TripleStore, focus_node: &Term, path: &Iri) -> Vec<Term> {
    store
        .match_pattern(&TriplePattern::new(
            Some(focus_node.clone()),
            Some(path.clone()),
            None,
        ))
        .into_iter()
        .map(|t| t.object().clone())
        .collect()
}

fn same_set(a: &[Term], b: &[Term]) -> bool {
    a.len() == b.len() && a.iter().all(|v| b.contains(v))
}

fn all_pairs_ordered(values: &[Term], others: &[Term], inclusive: bool) -> bool {
    values.iter().all(|v| {
        let Some(vn) = numeric_of(v) else { return false };
        others.iter().all(|o| {
            let Some(on) = numeric_of(o) else { return false };
            if inclusive {
                vn <= on
            } else {
                vn < on
            }
        })
    })
}

/// Runs a nested shape (from `sh:and`/`sh:or`/`sh:not`/`sh:xone`) against a
/// single focus node and reports whether it conforms, without adding to
/// the outer report.
fn conforms_inline(store: &TripleStore, shape: &NodeShape, focus_node: &Term) -> bool {
    let mut nested_results = Vec::new();
    validate_focus_node(store, shape, focus_node, &mut nested_results);
    !nested_results.iter().any(ValidationResult::is_violation)
}

/// `sh:class` is handled outside the per-value dispatch table since it
/// needs store access; called from both node- and property-level paths.
fn apply_class_constraint(
    store: &TripleStore,
    class: &Iri,
    value: &Term,
    emit: &mut impl FnMut(&str, Option<Term>, Option<String>),
) {
    if !class_membership_holds(store, class, value) {
        emit("Class", Some(value.clone()), None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use graphkit_core::{Literal, Triple};
    use graphkit_store::TripleStore;

    fn iri(s: &str) -> Iri {
        Iri::new(s).unwrap()
    }

    #[test]
    fn min_count_violation_is_detected_and_then_resolved() {
        let person_class = iri("http://example.org/Person");
        let name_prop = iri("http://xmlns.com/foaf/0.1/name");
        let alice = Term::Iri(iri("http://example.org/alice"));

        let mut store = TripleStore::new();
        store.add(&Triple::new(alice.clone(), iri(rdf::TYPE), Term::Iri(person_class.clone())).unwrap());

        let shape = NodeShape::new(iri("http://example.org/PersonShape"))
            .with_target(Target::Class(person_class.clone()))
            .with_property(
                PropertyShape::new(name_prop.clone()).with_constraint(Constraint::MinCount(1)),
            );
        let shapes = ShapesGraph { shapes: vec![shape] };

        let report = validate(&store, &shapes);
        assert!(!report.conforms());
        assert_eq!(report.violation_count(), 1);

        store.add(&Triple::new(alice, name_prop, Term::Literal(Literal::plain("Alice"))).unwrap());
        let report = validate(&store, &shapes);
        assert!(report.conforms());
    }
}
