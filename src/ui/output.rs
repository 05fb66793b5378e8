use barrelgen::config::ConfigWarning;

use crate::ui::primitives::icon::Icon;

pub fn render_config_warnings(
    warnings: &[ConfigWarning],
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = String::new();
    let icon = Icon::Warning.colored(supports_color, supports_unicode);
    for w in warnings {
        match w.line {
            Some(line) => out.push_str(&format!(
                "{} Unknown config key '{}' in {}:{}\n",
                icon,
                w.key,
                w.file.display(),
                line
            )),
            None => out.push_str(&format!(
                "{} Unknown config key '{}' in {}\n",
                icon,
                w.key,
                w.file.display()
            )),
        }

        if let Some(suggestion) = &w.suggestion {
            out.push_str(&format!("   Did you mean '{}'?\n", suggestion));
        }
    }
    out
}

pub fn print_config_warnings(warnings: &[ConfigWarning], supports_color: bool, supports_unicode: bool) {
    if warnings.is_empty() {
        return;
    }
    eprint!("{}", render_config_warnings(warnings, supports_color, supports_unicode));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn warning_with_line_and_suggestion() {
        let warnings = vec![ConfigWarning {
            key: "tabWidht".to_string(),
            file: PathBuf::from(".prettierrc"),
            line: Some(3),
            suggestion: Some("tabWidth".to_string()),
        }];
        assert_eq!(
            render_config_warnings(&warnings, false, false),
            "[WARN] Unknown config key 'tabWidht' in .prettierrc:3\n   Did you mean 'tabWidth'?\n"
        );
    }

    #[test]
    fn warning_without_line() {
        let warnings = vec![ConfigWarning {
            key: "plugins".to_string(),
            file: PathBuf::from(".prettierrc"),
            line: None,
            suggestion: None,
        }];
        assert_eq!(
            render_config_warnings(&warnings, false, true),
            "⚠ Unknown config key 'plugins' in .prettierrc\n"
        );
    }
}
