//! AssetClass entity - a named group of assets sharing a pattern and naming rule

use crate::domain::value_objects::{AssetPattern, NamingRule};
use crate::error::ConfigError;

/// Glob for icon assets, relative to the project root
pub const ICONS_PATTERN: &str = "src/assets/icons/*.svg";
/// Glob for job assets, relative to the project root
pub const JOBS_PATTERN: &str = "src/assets/jobs/*.svg";

/// One asset class. Immutable for the duration of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetClass {
    name: String,
    pattern: AssetPattern,
    naming: NamingRule,
}

impl AssetClass {
    pub fn new(name: impl Into<String>, pattern: AssetPattern, naming: NamingRule) -> Self {
        Self {
            name: name.into(),
            pattern,
            naming,
        }
    }

    /// Parse `pattern` and build the class
    pub fn parse(
        name: impl Into<String>,
        pattern: &str,
        naming: NamingRule,
    ) -> Result<Self, ConfigError> {
        Ok(Self::new(name, AssetPattern::parse(pattern)?, naming))
    }

    /// The two classes generated on every run: `icons` and `jobs`
    pub fn defaults() -> Result<Vec<Self>, ConfigError> {
        Ok(vec![
            Self::parse("icons", ICONS_PATTERN, NamingRule::PascalJoin)?,
            Self::parse("jobs", JOBS_PATTERN, NamingRule::UpperCase)?,
        ])
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pattern(&self) -> &AssetPattern {
        &self.pattern
    }

    pub fn naming(&self) -> NamingRule {
        self.naming
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn defaults_are_icons_then_jobs() {
        let classes = AssetClass::defaults().unwrap();
        let names: Vec<_> = classes.iter().map(|c| c.name()).collect();
        assert_eq!(names, ["icons", "jobs"]);

        assert_eq!(classes[0].naming(), NamingRule::PascalJoin);
        assert_eq!(classes[0].pattern().dir(), Path::new("src/assets/icons"));
        assert_eq!(classes[1].naming(), NamingRule::UpperCase);
        assert_eq!(classes[1].pattern().dir(), Path::new("src/assets/jobs"));
    }
}
