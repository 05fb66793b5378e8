use barrelgen::config::GeneratorConfig;

use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub verbose: bool,
    pub caps: TerminalCapabilities,
    pub color: bool,
    pub unicode: bool,
}

impl UiContext {
    pub fn new(config: &GeneratorConfig) -> Self {
        Self::from_caps(config, detect_capabilities())
    }

    pub(crate) fn from_caps(config: &GeneratorConfig, caps: TerminalCapabilities) -> Self {
        Self {
            verbose: config.verbose,
            caps,
            color: !config.no_color && caps.supports_color && !caps.is_ci,
            unicode: caps.supports_unicode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tty_caps(is_ci: bool) -> TerminalCapabilities {
        TerminalCapabilities {
            is_tty: true,
            supports_color: true,
            supports_unicode: true,
            is_ci,
        }
    }

    #[test]
    fn color_on_interactive_terminal() {
        let ui = UiContext::from_caps(&GeneratorConfig::default(), tty_caps(false));
        assert!(ui.color);
        assert!(!ui.verbose);
    }

    #[test]
    fn ci_defaults_to_no_color() {
        let ui = UiContext::from_caps(&GeneratorConfig::default(), tty_caps(true));
        assert!(!ui.color);
    }

    #[test]
    fn config_no_color_wins() {
        let config = GeneratorConfig {
            no_color: true,
            verbose: true,
            ..GeneratorConfig::default()
        };
        let ui = UiContext::from_caps(&config, tty_caps(false));
        assert!(!ui.color);
        assert!(ui.verbose);
    }
}
