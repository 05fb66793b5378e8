//! Property tests for the builtin module formatter.

use proptest::prelude::*;

use barrelgen::config::{StyleConfig, TrailingComma};
use barrelgen::domain::entities::export_line;
use barrelgen::infrastructure::formatter::format_module;

fn identifier() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Z][A-Za-z0-9]{0,12}").unwrap()
}

fn file_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z0-9][a-z0-9-]{0,16}\\.svg").unwrap()
}

fn module_source() -> impl Strategy<Value = String> {
    proptest::collection::vec((identifier(), file_name()), 0..12).prop_map(|entries| {
        entries
            .iter()
            .map(|(id, file)| format!("{}\n", export_line(id, file)))
            .collect()
    })
}

fn style() -> impl Strategy<Value = StyleConfig> {
    (
        20usize..120,
        1usize..8,
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        prop_oneof![
            Just(TrailingComma::All),
            Just(TrailingComma::Es5),
            Just(TrailingComma::None)
        ],
    )
        .prop_map(
            |(print_width, tab_width, use_tabs, semi, single_quote, bracket_spacing, trailing_comma)| {
                StyleConfig {
                    print_width,
                    tab_width,
                    use_tabs,
                    semi,
                    single_quote,
                    bracket_spacing,
                    trailing_comma,
                    ..StyleConfig::default()
                }
            },
        )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Formatting is idempotent for every style.
    #[test]
    fn property_format_is_idempotent(source in module_source(), style in style()) {
        let once = format_module(&source, &style).unwrap();
        let twice = format_module(&once, &style).unwrap();
        prop_assert_eq!(once, twice);
    }

    /// PROPERTY: Every export line survives formatting, one statement per line.
    #[test]
    fn property_format_keeps_statement_count(source in module_source(), style in style()) {
        let formatted = format_module(&source, &style).unwrap();
        let statements = formatted.matches("export {").count();
        prop_assert_eq!(statements, source.lines().count());
    }

    /// PROPERTY: The formatter never panics on arbitrary text.
    #[test]
    fn property_format_never_panics(source in "(?s).{0,200}") {
        let _ = format_module(&source, &StyleConfig::default());
    }
}
