//! Naming rule value object - maps an asset file name to an export identifier

use std::fmt;

use thiserror::Error;

/// Errors raised when a file name cannot become a source identifier
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransformError {
    /// File name is empty once the extension is removed
    #[error("file name is empty")]
    EmptyName,

    /// Leading, trailing or doubled hyphen
    #[error("'{name}' has an empty segment between hyphens")]
    EmptySegment { name: String },

    /// Result is not a usable export name
    #[error("'{name}' maps to '{identifier}', which is not a valid identifier")]
    InvalidIdentifier { name: String, identifier: String },

    /// File name is not valid UTF-8
    #[error("file name is not valid UTF-8")]
    NonUtf8,
}

/// Rule that turns a base name (without extension) into an identifier.
///
/// Each asset class carries exactly one rule. New naming schemes are added
/// as variants here, dispatched through [`NamingRule::transform`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamingRule {
    /// `arrow-up` -> `ArrowUp`
    PascalJoin,
    /// `pld` -> `PLD`
    UpperCase,
}

impl NamingRule {
    /// Derive the export identifier for `name`.
    pub fn transform(&self, name: &str) -> Result<String, TransformError> {
        if name.is_empty() {
            return Err(TransformError::EmptyName);
        }

        let identifier = match self {
            NamingRule::PascalJoin => pascal_join(name)?,
            NamingRule::UpperCase => name.to_uppercase(),
        };

        if !is_identifier(&identifier) {
            return Err(TransformError::InvalidIdentifier {
                name: name.to_string(),
                identifier,
            });
        }

        Ok(identifier)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NamingRule::PascalJoin => "pascal-join",
            NamingRule::UpperCase => "upper-case",
        }
    }
}

impl fmt::Display for NamingRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn pascal_join(name: &str) -> Result<String, TransformError> {
    let mut out = String::with_capacity(name.len());
    for segment in name.split('-') {
        let mut chars = segment.chars();
        let Some(first) = chars.next() else {
            return Err(TransformError::EmptySegment {
                name: name.to_string(),
            });
        };
        out.extend(first.to_uppercase());
        out.push_str(chars.as_str());
    }
    Ok(out)
}

/// Check that `s` is an ECMAScript identifier name.
///
/// Accepts `$`, `_` and Unicode letters at the start, plus digits after
/// the first character.
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !(first == '$' || first == '_' || first.is_alphabetic()) {
        return false;
    }
    chars.all(|c| c == '$' || c == '_' || c.is_alphanumeric())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pascal_join_capitalises_each_segment() {
        assert_eq!(NamingRule::PascalJoin.transform("arrow-up").unwrap(), "ArrowUp");
        assert_eq!(NamingRule::PascalJoin.transform("close").unwrap(), "Close");
        assert_eq!(
            NamingRule::PascalJoin.transform("chevron-double-left").unwrap(),
            "ChevronDoubleLeft"
        );
    }

    #[test]
    fn pascal_join_keeps_digits_inside_segments() {
        assert_eq!(NamingRule::PascalJoin.transform("grid-2x2").unwrap(), "Grid2x2");
    }

    #[test]
    fn pascal_join_rejects_empty_segments() {
        for name in ["-arrow", "arrow-", "arrow--up", "-"] {
            assert_eq!(
                NamingRule::PascalJoin.transform(name),
                Err(TransformError::EmptySegment {
                    name: name.to_string()
                }),
                "{name}"
            );
        }
    }

    #[test]
    fn pascal_join_rejects_leading_digit() {
        let err = NamingRule::PascalJoin.transform("2-up").unwrap_err();
        assert!(matches!(err, TransformError::InvalidIdentifier { .. }));
    }

    #[test]
    fn upper_case_is_verbatim() {
        assert_eq!(NamingRule::UpperCase.transform("pld").unwrap(), "PLD");
        assert_eq!(NamingRule::UpperCase.transform("war").unwrap(), "WAR");
        assert_eq!(NamingRule::UpperCase.transform("sge_2").unwrap(), "SGE_2");
    }

    #[test]
    fn upper_case_rejects_hyphens() {
        let err = NamingRule::UpperCase.transform("blue-mage").unwrap_err();
        assert_eq!(
            err,
            TransformError::InvalidIdentifier {
                name: "blue-mage".to_string(),
                identifier: "BLUE-MAGE".to_string(),
            }
        );
    }

    #[test]
    fn empty_name_is_rejected() {
        assert_eq!(NamingRule::UpperCase.transform(""), Err(TransformError::EmptyName));
        assert_eq!(NamingRule::PascalJoin.transform(""), Err(TransformError::EmptyName));
    }

    #[test]
    fn dotted_names_are_not_identifiers() {
        assert!(NamingRule::PascalJoin.transform("icon.min").is_err());
    }

    #[test]
    fn is_identifier_cases() {
        assert!(is_identifier("ArrowUp"));
        assert!(is_identifier("_private"));
        assert!(is_identifier("$el"));
        assert!(!is_identifier(""));
        assert!(!is_identifier("9lives"));
        assert!(!is_identifier("a-b"));
        assert!(!is_identifier("a b"));
    }
}
