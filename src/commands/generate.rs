//! The generate command: the only thing `barrelgen` does

use std::process::ExitCode;

use anyhow::{Context, Result};

use barrelgen::application::{prepare_run, GenerateReport, GenerateUseCase, PreparedRun};
use barrelgen::config::GeneratorConfig;
use barrelgen::project_root::resolve_project_root;

use crate::ui::context::UiContext;
use crate::ui::output::print_config_warnings;
use crate::ui::views::generate::{
    render_generate_failures, render_generate_start, render_generate_summary,
};

/// Exit status when every asset class was generated
pub const EXIT_SUCCESS: u8 = 0;
/// Exit status when at least one asset class failed
pub const EXIT_PARTIAL_FAILURE: u8 = 1;
/// Exit status when the run could not start
pub const EXIT_SETUP_FAILURE: u8 = 2;

pub fn cmd_generate(config: &GeneratorConfig, ui: &UiContext) -> Result<ExitCode> {
    let cwd = std::env::current_dir().context("cannot determine current directory")?;
    let root = resolve_project_root(config.root.as_deref(), &cwd);
    let PreparedRun {
        root,
        classes,
        context,
        warnings,
    } = prepare_run(&root, config)?;
    print_config_warnings(&warnings, ui.color, ui.unicode);

    println!("{}", render_generate_start(&classes, ui.color, ui.unicode));

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;
    let report = runtime.block_on(GenerateUseCase::new(context).execute(&classes));

    print!(
        "{}",
        render_generate_summary(&report, &root, ui.verbose, ui.color, ui.unicode)
    );
    eprint!("{}", render_generate_failures(&report, ui.color));

    Ok(ExitCode::from(exit_code(&report)))
}

pub fn exit_code(report: &GenerateReport) -> u8 {
    if report.is_success() {
        EXIT_SUCCESS
    } else {
        EXIT_PARTIAL_FAILURE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    use barrelgen::application::{GeneratedIndex, ModuleStatus, RunResult};
    use barrelgen::error::PipelineError;

    fn result(class: &str, failed: bool) -> RunResult {
        let outcome = if failed {
            Err(PipelineError::Aborted {
                class: class.to_string(),
                message: "panicked".to_string(),
            })
        } else {
            Ok(GeneratedIndex {
                path: PathBuf::from("index.ts"),
                status: ModuleStatus::Created,
            })
        };
        RunResult {
            class: class.to_string(),
            files: 0,
            outcome,
        }
    }

    #[test]
    fn exit_code_zero_only_when_all_succeed() {
        let ok = GenerateReport::new(vec![result("icons", false), result("jobs", false)]);
        assert_eq!(exit_code(&ok), EXIT_SUCCESS);

        let partial = GenerateReport::new(vec![result("icons", false), result("jobs", true)]);
        assert_eq!(exit_code(&partial), EXIT_PARTIAL_FAILURE);
    }

    #[test]
    fn empty_report_is_success() {
        assert_eq!(exit_code(&GenerateReport::default()), EXIT_SUCCESS);
    }
}
