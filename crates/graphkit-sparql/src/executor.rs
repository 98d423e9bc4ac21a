use std::cmp::Ordering;
use std::collections::HashSet;

use graphkit_core::{Iri, Literal, Term, Triple};
use graphkit_store::{TriplePattern, TripleStore};

use crate::algebra::{
    ArithOp, CmpOp, ConstructTemplate, DescribeTarget, Expression, GraphPattern, LogicOp,
    Modifiers, OrderDirection, Query, SelectVars, Solution, TermOrVar, TriplePatternAst, Var,
};

/// The result of executing one of the four supported query forms.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryResult {
    Select {
        variables: Vec<Var>,
        solutions: Vec<Solution>,
    },
    Construct {
        triples: Vec<Triple>,
    },
    Ask {
        result: bool,
    },
    Describe {
        triples: Vec<Triple>,
    },
}

/// Executes a parsed query against `store`.
pub fn execute(store: &TripleStore, query: &Query) -> QueryResult {
    match query {
        Query::Select {
            variables,
            distinct,
            where_clause,
            modifiers,
        } => {
            let mut solutions = evaluate(store, where_clause);
            if *distinct {
                solutions = dedup_solutions(solutions);
            }
            apply_order_by(&mut solutions, &modifiers.order_by);
            let solutions = apply_offset_limit(solutions, modifiers.offset, modifiers.limit);
            let vars = match variables {
                SelectVars::All => collect_vars(where_clause),
                SelectVars::Vars(v) => v.clone(),
            };
            let projected = solutions.iter().map(|sigma| project(sigma, &vars)).collect();
            QueryResult::Select {
                variables: vars,
                solutions: projected,
            }
        }
        Query::Construct {
            template,
            where_clause,
            modifiers,
        } => {
            let mut solutions = evaluate(store, where_clause);
            apply_order_by(&mut solutions, &modifiers.order_by);
            let solutions = apply_offset_limit(solutions, modifiers.offset, modifiers.limit);
            let mut triples = Vec::new();
            for sigma in &solutions {
                for tpl in template {
                    if let Some(t) = instantiate(tpl, sigma) {
                        triples.push(t);
                    }
                }
            }
            QueryResult::Construct {
                triples: dedup_triples(triples),
            }
        }
        Query::Ask { where_clause } => {
            let solutions = evaluate(store, where_clause);
            QueryResult::Ask {
                result: !solutions.is_empty(),
            }
        }
        Query::Describe {
            resources,
            where_clause,
        } => {
            let solutions = where_clause.as_ref().map(|patterns| evaluate(store, patterns));
            let mut nodes = Vec::new();
            for resource in resources {
                match resource {
                    DescribeTarget::Iri(iri) => nodes.push(Term::Iri(iri.clone())),
                    DescribeTarget::Var(v) => {
                        if let Some(solutions) = &solutions {
                            for sigma in solutions {
                                if let Some(t) = sigma.get(v) {
                                    nodes.push(t.clone());
                                }
                            }
                        }
                    }
                }
            }
            let mut triples = Vec::new();
            for node in &nodes {
                triples.extend(store.match_pattern(&TriplePattern::new(Some(node.clone()), None, None)));
                triples.extend(store.match_pattern(&TriplePattern::new(None, None, Some(node.clone()))));
            }
            QueryResult::Describe {
                triples: dedup_triples(triples),
            }
        }
    }
}

/// Evaluates a sequence of graph patterns starting from the singleton
/// empty solution, folding `step` across the patterns left to right.
pub fn evaluate(store: &TripleStore, patterns: &[GraphPattern]) -> Vec<Solution> {
    let mut solutions = vec![Solution::new()];
    for pattern in patterns {
        solutions = step(store, pattern, solutions);
    }
    solutions
}

fn step(store: &TripleStore, pattern: &GraphPattern, solutions: Vec<Solution>) -> Vec<Solution> {
    match pattern {
        GraphPattern::Triple(tp) => step_triple(store, tp, solutions),
        GraphPattern::Filter(expr) => solutions
            .into_iter()
            .filter(|sigma| eval_bool(expr, sigma))
            .collect(),
        GraphPattern::Optional(inner) => step_optional(store, inner, solutions),
        GraphPattern::Union(left, right) => step_union(store, left, right, solutions),
        GraphPattern::Group(inner) => step_group(store, inner, solutions),
    }
}

fn resolve_term(t: &TermOrVar, sigma: &Solution) -> Option<Term> {
    match t {
        TermOrVar::Term(term) => Some(term.clone()),
        TermOrVar::Var(v) => sigma.get(v).cloned(),
    }
}

/// `Err(())` means the pattern can never match this solution (e.g. a
/// predicate variable already bound to a non-IRI term).
fn resolve_predicate(t: &TermOrVar, sigma: &Solution) -> Result<Option<Iri>, ()> {
    match t {
        TermOrVar::Term(Term::Iri(iri)) => Ok(Some(iri.clone())),
        TermOrVar::Term(_) => Err(()),
        TermOrVar::Var(v) => match sigma.get(v) {
            Some(Term::Iri(iri)) => Ok(Some(iri.clone())),
            Some(_) => Err(()),
            None => Ok(None),
        },
    }
}

fn try_bind(sigma: &mut Solution, v: &Var, term: Term) -> bool {
    match sigma.get(v) {
        Some(existing) => *existing == term,
        None => {
            sigma.insert(v.clone(), term);
            true
        }
    }
}

fn step_triple(store: &TripleStore, tp: &TriplePatternAst, solutions: Vec<Solution>) -> Vec<Solution> {
    let mut out = Vec::new();
    for sigma in solutions {
        let subject = resolve_term(&tp.subject, &sigma);
        let object = resolve_term(&tp.object, &sigma);
        let predicate = match resolve_predicate(&tp.predicate, &sigma) {
            Ok(p) => p,
            Err(()) => continue,
        };
        let pattern = TriplePattern::new(subject, predicate, object);
        for triple in store.match_pattern(&pattern) {
            let mut candidate = sigma.clone();
            let mut ok = true;
            if let TermOrVar::Var(v) = &tp.subject {
                ok &= try_bind(&mut candidate, v, triple.subject().clone());
            }
            if let TermOrVar::Var(v) = &tp.predicate {
                ok &= try_bind(&mut candidate, v, Term::Iri(triple.predicate().clone()));
            }
            if let TermOrVar::Var(v) = &tp.object {
                ok &= try_bind(&mut candidate, v, triple.object().clone());
            }
            if ok {
                out.push(candidate);
            }
        }
    }
    out
}

fn is_compatible(a: &Solution, b: &Solution) -> bool {
    a.iter().all(|(k, v)| b.get(k).map(|bv| bv == v).unwrap_or(true))
}

fn merge(a: &Solution, b: &Solution) -> Solution {
    let mut merged = a.clone();
    for (k, v) in b {
        merged.entry(k.clone()).or_insert_with(|| v.clone());
    }
    merged
}

fn step_optional(store: &TripleStore, inner: &[GraphPattern], solutions: Vec<Solution>) -> Vec<Solution> {
    let mut out = Vec::new();
    for sigma in solutions {
        let candidates = evaluate(store, inner);
        let compatible: Vec<_> = candidates.into_iter().filter(|tau| is_compatible(&sigma, tau)).collect();
        if compatible.is_empty() {
            out.push(sigma);
        } else {
            for tau in compatible {
                out.push(merge(&sigma, &tau));
            }
        }
    }
    out
}

fn step_union(
    store: &TripleStore,
    left: &[GraphPattern],
    right: &[GraphPattern],
    solutions: Vec<Solution>,
) -> Vec<Solution> {
    let left_results = evaluate(store, left);
    let right_results = evaluate(store, right);
    let mut out = Vec::new();
    for sigma in &solutions {
        for tau in left_results.iter().chain(right_results.iter()) {
            if is_compatible(sigma, tau) {
                out.push(merge(sigma, tau));
            }
        }
    }
    dedup_solutions(out)
}

fn step_group(store: &TripleStore, inner: &[GraphPattern], solutions: Vec<Solution>) -> Vec<Solution> {
    let inner_results = evaluate(store, inner);
    let mut out = Vec::new();
    for sigma in &solutions {
        for tau in &inner_results {
            if is_compatible(sigma, tau) {
                out.push(merge(sigma, tau));
            }
        }
    }
    out
}

// --- Filter expression evaluation ---

fn eval_value(expr: &Expression, sigma: &Solution) -> Option<Term> {
    match expr {
        Expression::Var(v) => sigma.get(v).cloned(),
        Expression::Const(t) => Some(t.clone()),
        Expression::Arith(op, l, r) => {
            let lv = eval_value(l, sigma)?.as_literal()?.as_f64()?;
            let rv = eval_value(r, sigma)?.as_literal()?.as_f64()?;
            let result = match op {
                ArithOp::Add => lv + rv,
                ArithOp::Sub => lv - rv,
                ArithOp::Mul => lv * rv,
                ArithOp::Div => lv / rv,
            };
            let dt = Iri::new(graphkit_core::vocab::xsd::DECIMAL).ok()?;
            Some(Term::Literal(Literal::typed(result.to_string(), dt)))
        }
        Expression::Cmp(..) | Expression::Logic(..) | Expression::Call(..) => None,
    }
}

fn eval_bool(expr: &Expression, sigma: &Solution) -> bool {
    match expr {
        Expression::Var(v) => sigma.contains_key(v),
        Expression::Const(_) => true,
        Expression::Cmp(op, l, r) => eval_cmp(*op, l, r, sigma),
        Expression::Logic(LogicOp::And, args) => args.iter().all(|a| eval_bool(a, sigma)),
        Expression::Logic(LogicOp::Or, args) => args.iter().any(|a| eval_bool(a, sigma)),
        Expression::Logic(LogicOp::Not, args) => {
            args.len() == 1 && !eval_bool(&args[0], sigma)
        }
        Expression::Call(name, args) => eval_call(name, args, sigma),
        Expression::Arith(..) => eval_value(expr, sigma).is_some(),
    }
}

fn eval_cmp(op: CmpOp, l: &Expression, r: &Expression, sigma: &Solution) -> bool {
    let (Some(lv), Some(rv)) = (eval_value(l, sigma), eval_value(r, sigma)) else {
        return false;
    };
    match op {
        CmpOp::Eq => lv == rv,
        CmpOp::Ne => lv != rv,
        _ => {
            let (Some(la), Some(ra)) = (numeric_value(&lv), numeric_value(&rv)) else {
                return false;
            };
            match op {
                CmpOp::Lt => la < ra,
                CmpOp::Le => la <= ra,
                CmpOp::Gt => la > ra,
                CmpOp::Ge => la >= ra,
                CmpOp::Eq | CmpOp::Ne => unreachable!(),
            }
        }
    }
}

fn numeric_value(term: &Term) -> Option<f64> {
    term.as_literal().and_then(Literal::as_f64)
}

fn eval_call(name: &str, args: &[Expression], sigma: &Solution) -> bool {
    match name.to_ascii_uppercase().as_str() {
        "BOUND" => match args.first() {
            Some(Expression::Var(v)) => sigma.contains_key(v),
            _ => false,
        },
        "ISIRI" | "ISURI" => args
            .first()
            .and_then(|a| eval_value(a, sigma))
            .map(|t| t.is_iri())
            .unwrap_or(false),
        "ISLITERAL" => args
            .first()
            .and_then(|a| eval_value(a, sigma))
            .map(|t| t.is_literal())
            .unwrap_or(false),
        "ISBLANK" => args
            .first()
            .and_then(|a| eval_value(a, sigma))
            .map(|t| t.is_blank_node())
            .unwrap_or(false),
        other => {
            tracing::warn!(function = other, "unknown filter function, treating as false");
            false
        }
    }
}

// --- Solution modifiers ---

fn canonical_key(sigma: &Solution) -> Vec<(Var, Term)> {
    let mut entries: Vec<_> = sigma.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
    entries.sort_by(|a, b| a.0.cmp(&b.0));
    entries
}

fn dedup_solutions(solutions: Vec<Solution>) -> Vec<Solution> {
    let mut seen = HashSet::new();
    solutions
        .into_iter()
        .filter(|sigma| seen.insert(canonical_key(sigma)))
        .collect()
}

fn dedup_triples(triples: Vec<Triple>) -> Vec<Triple> {
    let mut seen = HashSet::new();
    triples.into_iter().filter(|t| seen.insert(t.clone())).collect()
}

/// Term ordering for `ORDER BY`: IRI < BlankNode < Literal, ties broken
/// by string form.
fn term_rank(term: &Term) -> u8 {
    match term {
        Term::Iri(_) => 0,
        Term::BlankNode(_) => 1,
        Term::Literal(_) => 2,
    }
}

fn term_string_form(term: &Term) -> &str {
    match term {
        Term::Iri(i) => i.as_str(),
        Term::BlankNode(b) => b.as_str(),
        Term::Literal(l) => l.value(),
    }
}

fn compare_terms(a: &Term, b: &Term) -> Ordering {
    term_rank(a)
        .cmp(&term_rank(b))
        .then_with(|| term_string_form(a).cmp(term_string_form(b)))
}

/// Stable multi-key sort: applying each key in reverse order with a
/// stable sort gives primary-key-first semantics.
fn apply_order_by(solutions: &mut [Solution], order_by: &[(Var, OrderDirection)]) {
    for (var, direction) in order_by.iter().rev() {
        solutions.sort_by(|a, b| {
            let ord = match (a.get(var), b.get(var)) {
                (None, None) => Ordering::Equal,
                (None, Some(_)) => Ordering::Less,
                (Some(_), None) => Ordering::Greater,
                (Some(ta), Some(tb)) => compare_terms(ta, tb),
            };
            if *direction == OrderDirection::Desc {
                ord.reverse()
            } else {
                ord
            }
        });
    }
}

fn apply_offset_limit(solutions: Vec<Solution>, offset: Option<usize>, limit: Option<usize>) -> Vec<Solution> {
    let offset = offset.unwrap_or(0);
    let iter = solutions.into_iter().skip(offset);
    match limit {
        Some(n) => iter.take(n).collect(),
        None => iter.collect(),
    }
}

fn project(sigma: &Solution, vars: &[Var]) -> Solution {
    vars.iter()
        .filter_map(|v| sigma.get(v).map(|t| (v.clone(), t.clone())))
        .collect()
}

fn collect_vars(patterns: &[GraphPattern]) -> Vec<Var> {
    let mut seen = HashSet::new();
    let mut vars = Vec::new();
    collect_vars_into(patterns, &mut seen, &mut vars);
    vars
}

fn collect_vars_into(patterns: &[GraphPattern], seen: &mut HashSet<Var>, vars: &mut Vec<Var>) {
    let mut push = |v: &Var, seen: &mut HashSet<Var>, vars: &mut Vec<Var>| {
        if seen.insert(v.clone()) {
            vars.push(v.clone());
        }
    };
    for pattern in patterns {
        match pattern {
            GraphPattern::Triple(tp) => {
                for pos in [&tp.subject, &tp.predicate, &tp.object] {
                    if let TermOrVar::Var(v) = pos {
                        push(v, seen, vars);
                    }
                }
            }
            GraphPattern::Filter(_) => {}
            GraphPattern::Optional(inner) | GraphPattern::Group(inner) => {
                collect_vars_into(inner, seen, vars);
            }
            GraphPattern::Union(l, r) => {
                collect_vars_into(l, seen, vars);
                collect_vars_into(r, seen, vars);
            }
        }
    }
}

fn instantiate(tpl: &ConstructTemplate, sigma: &Solution) -> Option<Triple> {
    let subject = resolve_term(&tpl.subject, sigma)?;
    let predicate = resolve_term(&tpl.predicate, sigma)?.as_iri()?.clone();
    let object = resolve_term(&tpl.object, sigma)?;
    Triple::new(subject, predicate, object).ok()
}
