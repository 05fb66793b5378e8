//! Barrelgen CLI - asset barrel module generator
//!
//! Usage: barrelgen
//!
//! Writes `src/assets/icons/index.ts` and `src/assets/jobs/index.ts` in the
//! project root. Takes no arguments; see `BARRELGEN_*` environment variables.

use std::process::ExitCode;

mod commands;
mod ui;

use barrelgen::config::{from_env, with_lenient_env_overrides, GeneratorConfig};
use commands::generate::{cmd_generate, EXIT_SETUP_FAILURE};
use ui::context::UiContext;
use ui::error::print_error;

fn main() -> ExitCode {
    let config = match from_env() {
        Ok(config) => config,
        Err(e) => {
            let fallback =
                with_lenient_env_overrides(GeneratorConfig::default(), |key| std::env::var(key).ok());
            barrelgen::logging::init_logging(fallback.verbose);
            print_error(&anyhow::Error::new(e), &UiContext::new(&fallback));
            return ExitCode::from(EXIT_SETUP_FAILURE);
        }
    };
    barrelgen::logging::init_logging(config.verbose);
    let ui = UiContext::new(&config);

    match cmd_generate(&config, &ui) {
        Ok(code) => code,
        Err(e) => {
            print_error(&e, &ui);
            ExitCode::from(EXIT_SETUP_FAILURE)
        }
    }
}
