//! Generate command UI views
//!
//! The start line and summary go to stdout; per-class error detail goes to
//! stderr.

use std::path::Path;

use barrelgen::application::{GenerateReport, ModuleStatus, RunResult};
use barrelgen::domain::entities::AssetClass;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// `a`, `a and b`, `a, b and c`
fn join_list(items: &[String]) -> String {
    match items {
        [] => String::new(),
        [only] => only.clone(),
        [init @ .., last] => format!("{} and {}", init.join(", "), last),
    }
}

pub fn render_generate_start(
    classes: &[AssetClass],
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let names: Vec<String> = classes.iter().map(|c| c.name().to_string()).collect();
    format!(
        "{} {}",
        Icon::Progress.colored(supports_color, supports_unicode),
        ColoredText::info(format!("generating index.ts for {}...", join_list(&names)))
            .render(supports_color)
    )
}

/// Aggregate success or failure line, plus per-class status when verbose
pub fn render_generate_summary(
    report: &GenerateReport,
    root: &Path,
    verbose: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = String::new();

    if report.is_success() {
        let counts: Vec<String> = report
            .results
            .iter()
            .map(|r| format!("{} {}", r.files, r.class))
            .collect();
        out.push_str(&format!(
            "{} {}\n",
            Icon::Success.colored(supports_color, supports_unicode),
            ColoredText::success(format!("generated index.ts for {}", join_list(&counts)))
                .bold()
                .render(supports_color)
        ));
    } else {
        out.push_str(&format!(
            "{} {}\n",
            Icon::Error.colored(supports_color, supports_unicode),
            ColoredText::error("failed to generate some of indexes")
                .bold()
                .render(supports_color)
        ));
    }

    if verbose {
        for result in report.results.iter().filter(|r| r.is_success()) {
            out.push_str(&render_class_status(result, root, supports_color, supports_unicode));
        }
    }

    out
}

fn render_class_status(
    result: &RunResult,
    root: &Path,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let Some(index) = result.generated() else {
        return String::new();
    };

    let icon = match index.status {
        ModuleStatus::Created | ModuleStatus::Updated => Icon::Success,
        ModuleStatus::Unchanged | ModuleStatus::DirectoryMissing => Icon::Unchanged,
    };
    let shown = index.path.strip_prefix(root).unwrap_or(&index.path);

    format!(
        "  {} {} {} {}\n",
        icon.colored(supports_color, supports_unicode),
        result.class,
        shown.display(),
        ColoredText::dim(format!("({})", index.status.label())).render(supports_color)
    )
}

/// One block per failed class
pub fn render_generate_failures(report: &GenerateReport, supports_color: bool) -> String {
    let mut out = String::new();
    for failed in report.failures() {
        if let Some(err) = failed.error() {
            out.push_str(&format!(
                "  {}: {}\n",
                ColoredText::error(&failed.class).bold().render(supports_color),
                err
            ));
        }
    }
    out
}
