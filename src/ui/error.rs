use barrelgen::error::{BarrelError, ConfigError};

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// Render a fatal setup error with its cause chain and a fix hint
pub fn format_error(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    let mut out = format!(
        "{} {}\n",
        Icon::Error.colored(supports_color, supports_unicode),
        ColoredText::error(err.to_string()).bold().render(supports_color)
    );

    for cause in err.chain().skip(1) {
        out.push_str(&format!("  caused by: {}\n", cause));
    }

    if let Some(hint) = config_error(err).and_then(fix_hint) {
        out.push_str(&ColoredText::dim(format!("  hint: {}", hint)).render(supports_color));
        out.push('\n');
    }

    out
}

fn config_error(err: &anyhow::Error) -> Option<&ConfigError> {
    match err.downcast_ref::<BarrelError>() {
        Some(BarrelError::Config(config)) => Some(config),
        Some(_) => None,
        None => err.downcast_ref::<ConfigError>(),
    }
}

fn fix_hint(err: &ConfigError) -> Option<&'static str> {
    match err {
        ConfigError::StyleParse { .. } => Some("fix the JSON in .prettierrc or remove the file"),
        ConfigError::UnknownFormatter { .. } => Some("set BARRELGEN_FORMATTER to 'builtin' or 'command'"),
        ConfigError::FormatterCommand { .. } => {
            Some("check the quoting in BARRELGEN_FORMATTER_CMD")
        }
        ConfigError::InvalidRoot { .. } => Some("point BARRELGEN_ROOT at the project directory"),
        ConfigError::StyleRead { .. } | ConfigError::InvalidPattern { .. } => None,
    }
}

pub fn print_error(err: &anyhow::Error, ui: &UiContext) {
    eprint!("{}", format_error(err, ui.color, ui.unicode));
}
