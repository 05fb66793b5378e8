//! Configuration loading
//!
//! The style configuration is read once at start. Run settings come from
//! `BARRELGEN_*` environment variables layered over built-in defaults.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::ConfigError;

use super::types::{FormatterKind, GeneratorConfig, StyleConfig};

/// Style configuration file, relative to the project root
pub const STYLE_CONFIG_FILE: &str = ".prettierrc";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load the style configuration and collect unknown keys as warnings.
///
/// A missing file yields the default style.
pub fn load_style_with_warnings(
    path: &Path,
) -> Result<(StyleConfig, Vec<ConfigWarning>), ConfigError> {
    if !path.exists() {
        debug!(path = %path.display(), "no style config, using defaults");
        return Ok((StyleConfig::default(), Vec::new()));
    }

    let content = fs::read_to_string(path).map_err(|source| ConfigError::StyleRead {
        path: path.to_path_buf(),
        source,
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let mut deserializer = serde_json::Deserializer::from_str(&content);

    let style: StyleConfig = serde_ignored::deserialize(&mut deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ConfigError::StyleParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    deserializer.end().map_err(|e| ConfigError::StyleParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
                file: path.to_path_buf(),
                key,
            }
        })
        .collect();

    Ok((style, warnings))
}

/// Build run settings from the process environment
pub fn from_env() -> Result<GeneratorConfig, ConfigError> {
    with_env_overrides(GeneratorConfig::default(), |key| std::env::var(key).ok())
}

/// Apply environment variable overrides (BARRELGEN_* prefix)
pub fn with_env_overrides(
    config: GeneratorConfig,
    get_env: impl Fn(&str) -> Option<String>,
) -> Result<GeneratorConfig, ConfigError> {
    let mut config = with_lenient_env_overrides(config, &get_env);

    if let Some(kind) = get_env("BARRELGEN_FORMATTER") {
        config.formatter = FormatterKind::parse(&kind)?;
    }

    Ok(config)
}

/// Apply only the overrides that cannot fail.
///
/// Used to render a [`from_env`] failure with the user's display settings.
pub fn with_lenient_env_overrides(
    mut config: GeneratorConfig,
    get_env: impl Fn(&str) -> Option<String>,
) -> GeneratorConfig {
    if let Some(root) = get_env("BARRELGEN_ROOT").filter(|v| !v.trim().is_empty()) {
        config.root = Some(PathBuf::from(root));
    }

    if let Some(cmd) = get_env("BARRELGEN_FORMATTER_CMD").filter(|v| !v.trim().is_empty()) {
        config.formatter_cmd = cmd;
    }

    if let Some(val) = get_env("BARRELGEN_VERBOSE") {
        config.verbose = is_truthy(&val);
    }

    if get_env("NO_COLOR").is_some() {
        config.no_color = true;
    }
    if let Some(val) = get_env("BARRELGEN_NO_COLOR") {
        config.no_color = is_truthy(&val);
    }

    config
}

fn is_truthy(val: &str) -> bool {
    let v = val.trim().to_lowercase();
    !(v.is_empty() || v == "0" || v == "false" || v == "no")
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    let quoted = format!("\"{needle}\"");
    content
        .lines()
        .position(|line| line.contains(&quoted))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "printWidth",
        "tabWidth",
        "useTabs",
        "semi",
        "singleQuote",
        "bracketSpacing",
        "trailingComma",
        "endOfLine",
    ];

    let unknown_lower = unknown.to_lowercase();
    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(&unknown_lower, &candidate.to_lowercase());
        best = match best {
            Some((_, best_dist)) if dist >= best_dist => best,
            _ => Some((candidate, dist)),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let b_chars: Vec<char> = b.chars().collect();
    let mut prev: Vec<usize> = (0..=b_chars.len()).collect();
    let mut curr = vec![0usize; b_chars.len() + 1];

    for (i, ac) in a.chars().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_chars.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b_chars.len()]
}
