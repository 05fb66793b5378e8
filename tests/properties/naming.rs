//! Property tests for identifier naming rules.

use proptest::prelude::*;

use barrelgen::domain::value_objects::{is_identifier, NamingRule};

fn segment() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z][a-z0-9]{0,8}").unwrap()
}

fn hyphenated_name() -> impl Strategy<Value = String> {
    proptest::collection::vec(segment(), 1..=5).prop_map(|segments| segments.join("-"))
}

fn capitalise(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: PascalJoin of lowercase hyphenated names is a PascalCase identifier.
    #[test]
    fn property_pascal_join_shape(name in hyphenated_name()) {
        let identifier = NamingRule::PascalJoin.transform(&name).unwrap();

        prop_assert!(identifier.chars().next().unwrap().is_ascii_uppercase());
        prop_assert!(identifier.chars().all(|c| c.is_ascii_alphanumeric()));
        prop_assert!(!identifier.contains('-'));
    }

    /// PROPERTY: PascalJoin equals the segment-wise capitalised join.
    #[test]
    fn property_pascal_join_concatenates_segments(name in hyphenated_name()) {
        let expected: String = name.split('-').map(capitalise).collect();
        prop_assert_eq!(NamingRule::PascalJoin.transform(&name).unwrap(), expected);
    }

    /// PROPERTY: UpperCase equals the upper-cased input whenever it succeeds.
    #[test]
    fn property_upper_case_is_to_uppercase(name in "[A-Za-z_][A-Za-z0-9_]{0,12}") {
        prop_assert_eq!(NamingRule::UpperCase.transform(&name).unwrap(), name.to_uppercase());
    }

    /// PROPERTY: Naming rules never panic and only ever return identifiers.
    #[test]
    fn property_transform_never_panics(name in "(?s).{0,64}") {
        for rule in [NamingRule::PascalJoin, NamingRule::UpperCase] {
            if let Ok(identifier) = rule.transform(&name) {
                prop_assert!(is_identifier(&identifier));
            }
        }
    }
}
