use graphkit_core::{GraphError, Iri, Literal};
use proptest::prelude::*;

fn arb_whitespace_free() -> impl Strategy<Value = String> {
    "[A-Za-z0-9_/:.#-]{1,20}".prop_map(|s| format!("http://example.org/{s}"))
}

fn arb_with_whitespace() -> impl Strategy<Value = String> {
    "[A-Za-z0-9_/:.#-]{0,10} [A-Za-z0-9_/:.#-]{0,10}"
        .prop_map(|s| format!("http://example.org/{s}"))
}

proptest! {
    #[test]
    fn iri_accepts_any_whitespace_free_string(s in arb_whitespace_free()) {
        prop_assert!(Iri::new(s).is_ok());
    }

    #[test]
    fn iri_rejects_any_string_containing_whitespace(s in arb_with_whitespace()) {
        prop_assert!(Iri::new(s).is_err());
    }

    #[test]
    fn literal_with_both_datatype_and_language_always_conflicts(
        value in "[A-Za-z0-9 ]{0,10}",
        dt_local in "[A-Za-z]{1,10}",
        lang in "[a-z]{2}",
    ) {
        let dt = Iri::new(format!("http://www.w3.org/2001/XMLSchema#{dt_local}")).unwrap();
        let result = Literal::new(value, Some(dt), Some(lang));
        prop_assert_eq!(result.unwrap_err(), GraphError::LiteralDatatypeLanguageConflict);
    }

    #[test]
    fn literal_language_tag_is_always_lowercased(value in "[A-Za-z0-9 ]{0,10}", lang in "[A-Za-z]{2,5}") {
        let lit = Literal::with_language(value, lang.clone()).unwrap();
        prop_assert_eq!(lit.language(), Some(lang.to_lowercase().as_str()));
    }

    #[test]
    fn plain_and_typed_literals_never_conflict(value in "[A-Za-z0-9 ]{0,10}", dt_local in "[A-Za-z]{1,10}") {
        let dt = Iri::new(format!("http://www.w3.org/2001/XMLSchema#{dt_local}")).unwrap();
        prop_assert!(Literal::new(value, Some(dt), None).is_ok());
    }
}
