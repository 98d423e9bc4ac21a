//! Well-known vocabulary IRIs, grouped by namespace the way a hand-rolled
//! `rdf`/`rdfs`/`owl`/`xsd` namespace table is usually laid out. These are
//! plain string constants; callers turn them into [`crate::Iri`] values with
//! `Iri::new` at the point of use (the strings themselves are already
//! valid, whitespace-free IRIs, so that call never fails).

pub mod rdf {
    pub const TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
    pub const FIRST: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#first";
    pub const REST: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#rest";
    pub const NIL: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#nil";
}

pub mod rdfs {
    pub const CLASS: &str = "http://www.w3.org/2000/01/rdf-schema#Class";
    pub const SUB_CLASS_OF: &str = "http://www.w3.org/2000/01/rdf-schema#subClassOf";
}

pub mod owl {
    pub const CLASS: &str = "http://www.w3.org/2002/07/owl#Class";
}

pub mod xsd {
    pub const STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
    pub const BOOLEAN: &str = "http://www.w3.org/2001/XMLSchema#boolean";
    pub const DECIMAL: &str = "http://www.w3.org/2001/XMLSchema#decimal";
    pub const INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";
    pub const DOUBLE: &str = "http://www.w3.org/2001/XMLSchema#double";
    pub const FLOAT: &str = "http://www.w3.org/2001/XMLSchema#float";
    pub const DATE: &str = "http://www.w3.org/2001/XMLSchema#date";
    pub const DATE_TIME: &str = "http://www.w3.org/2001/XMLSchema#dateTime";
}

/// SHACL vocabulary predicates consumed by `graphkit-shacl`'s
/// `ShapesGraph::from_store`.
pub mod shacl {
    pub const NODE_SHAPE: &str = "http://www.w3.org/ns/shacl#NodeShape";
    pub const PROPERTY_SHAPE: &str = "http://www.w3.org/ns/shacl#PropertyShape";
    pub const TARGET_CLASS: &str = "http://www.w3.org/ns/shacl#targetClass";
    pub const TARGET_NODE: &str = "http://www.w3.org/ns/shacl#targetNode";
    pub const TARGET_SUBJECTS_OF: &str = "http://www.w3.org/ns/shacl#targetSubjectsOf";
    pub const TARGET_OBJECTS_OF: &str = "http://www.w3.org/ns/shacl#targetObjectsOf";
    pub const PROPERTY: &str = "http://www.w3.org/ns/shacl#property";
    pub const PATH: &str = "http://www.w3.org/ns/shacl#path";
    pub const MIN_COUNT: &str = "http://www.w3.org/ns/shacl#minCount";
    pub const MAX_COUNT: &str = "http://www.w3.org/ns/shacl#maxCount";
    pub const DATATYPE: &str = "http://www.w3.org/ns/shacl#datatype";
    pub const CLASS: &str = "http://www.w3.org/ns/shacl#class";
    pub const NODE_KIND: &str = "http://www.w3.org/ns/shacl#nodeKind";
    pub const MIN_LENGTH: &str = "http://www.w3.org/ns/shacl#minLength";
    pub const MAX_LENGTH: &str = "http://www.w3.org/ns/shacl#maxLength";
    pub const PATTERN: &str = "http://www.w3.org/ns/shacl#pattern";
    pub const MIN_INCLUSIVE: &str = "http://www.w3.org/ns/shacl#minInclusive";
    pub const MAX_INCLUSIVE: &str = "http://www.w3.org/ns/shacl#maxInclusive";
    pub const MIN_EXCLUSIVE: &str = "http://www.w3.org/ns/shacl#minExclusive";
    pub const MAX_EXCLUSIVE: &str = "http://www.w3.org/ns/shacl#maxExclusive";
    pub const HAS_VALUE: &str = "http://www.w3.org/ns/shacl#hasValue";
    pub const IN: &str = "http://www.w3.org/ns/shacl#in";
    pub const MESSAGE: &str = "http://www.w3.org/ns/shacl#message";
    pub const SEVERITY: &str = "http://www.w3.org/ns/shacl#severity";
    pub const DEACTIVATED: &str = "http://www.w3.org/ns/shacl#deactivated";
    pub const NAME: &str = "http://www.w3.org/ns/shacl#name";
    pub const VIOLATION: &str = "http://www.w3.org/ns/shacl#Violation";
    pub const WARNING: &str = "http://www.w3.org/ns/shacl#Warning";
    pub const INFO: &str = "http://www.w3.org/ns/shacl#Info";

    pub const LANGUAGE_IN: &str = "http://www.w3.org/ns/shacl#languageIn";
    pub const EQUALS: &str = "http://www.w3.org/ns/shacl#equals";
    pub const DISJOINT: &str = "http://www.w3.org/ns/shacl#disjoint";
    pub const LESS_THAN: &str = "http://www.w3.org/ns/shacl#lessThan";
    pub const LESS_THAN_OR_EQUALS: &str = "http://www.w3.org/ns/shacl#lessThanOrEquals";
    pub const AND: &str = "http://www.w3.org/ns/shacl#and";
    pub const OR: &str = "http://www.w3.org/ns/shacl#or";
    pub const NOT: &str = "http://www.w3.org/ns/shacl#not";
    pub const XONE: &str = "http://www.w3.org/ns/shacl#xone";

    pub const NODE_KIND_IRI: &str = "http://www.w3.org/ns/shacl#IRI";
    pub const NODE_KIND_BLANK_NODE: &str = "http://www.w3.org/ns/shacl#BlankNode";
    pub const NODE_KIND_LITERAL: &str = "http://www.w3.org/ns/shacl#Literal";
    pub const NODE_KIND_BLANK_NODE_OR_IRI: &str = "http://www.w3.org/ns/shacl#BlankNodeOrIRI";
    pub const NODE_KIND_BLANK_NODE_OR_LITERAL: &str =
        "http://www.w3.org/ns/shacl#BlankNodeOrLiteral";
    pub const NODE_KIND_IRI_OR_LITERAL: &str = "http://www.w3.org/ns/shacl#IRIOrLiteral";
}
