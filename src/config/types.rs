//! Configuration type definitions

use std::path::PathBuf;

use serde::Deserialize;

use crate::error::ConfigError;

/// Formatting style shared by every pipeline of a run.
///
/// Mirrors the subset of `.prettierrc` keys that affect re-export
/// statements. Missing keys take prettier's defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleConfig {
    #[serde(default = "default_print_width")]
    pub print_width: usize,

    #[serde(default = "default_tab_width")]
    pub tab_width: usize,

    #[serde(default)]
    pub use_tabs: bool,

    #[serde(default = "default_true")]
    pub semi: bool,

    #[serde(default)]
    pub single_quote: bool,

    #[serde(default = "default_true")]
    pub bracket_spacing: bool,

    #[serde(default)]
    pub trailing_comma: TrailingComma,

    #[serde(default)]
    pub end_of_line: EndOfLine,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            print_width: default_print_width(),
            tab_width: default_tab_width(),
            use_tabs: false,
            semi: true,
            single_quote: false,
            bracket_spacing: true,
            trailing_comma: TrailingComma::default(),
            end_of_line: EndOfLine::default(),
        }
    }
}

impl StyleConfig {
    pub fn quote(&self) -> char {
        if self.single_quote {
            '\''
        } else {
            '"'
        }
    }

    pub fn indent(&self) -> String {
        if self.use_tabs {
            "\t".to_string()
        } else {
            " ".repeat(self.tab_width)
        }
    }
}

fn default_print_width() -> usize {
    80
}

fn default_tab_width() -> usize {
    2
}

fn default_true() -> bool {
    true
}

/// Trailing comma policy for broken specifier lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrailingComma {
    #[default]
    All,
    Es5,
    None,
}

/// Line ending of the emitted file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EndOfLine {
    #[default]
    Lf,
    Crlf,
    Cr,
    /// Treated as `lf`; there is no existing file content to sniff
    Auto,
}

impl EndOfLine {
    pub fn as_str(&self) -> &'static str {
        match self {
            EndOfLine::Lf | EndOfLine::Auto => "\n",
            EndOfLine::Crlf => "\r\n",
            EndOfLine::Cr => "\r",
        }
    }
}

/// Which formatter turns module text into its final form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormatterKind {
    /// In-process printer for re-export statements
    #[default]
    Builtin,
    /// External command, fed on stdin
    Command,
}

impl FormatterKind {
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.trim().to_lowercase().as_str() {
            "builtin" | "" => Ok(FormatterKind::Builtin),
            "command" | "cmd" | "prettier" => Ok(FormatterKind::Command),
            _ => Err(ConfigError::UnknownFormatter {
                value: value.to_string(),
            }),
        }
    }
}

/// Default external formatter invocation; `{path}` is the target file
pub const DEFAULT_FORMATTER_CMD: &str = "prettier --stdin-filepath {path}";

/// Run-level settings collected from the environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Explicit project root; discovered when `None`
    pub root: Option<PathBuf>,
    pub formatter: FormatterKind,
    pub formatter_cmd: String,
    pub verbose: bool,
    pub no_color: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            root: None,
            formatter: FormatterKind::default(),
            formatter_cmd: DEFAULT_FORMATTER_CMD.to_string(),
            verbose: false,
            no_color: false,
        }
    }
}
