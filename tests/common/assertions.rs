//! Assertion macros with descriptive failure output

use std::path::Path;

/// List all files below `dir` (for failure messages)
pub fn list_all_files(dir: &Path) -> Vec<String> {
    let mut files = Vec::new();
    if let Ok(entries) = std::fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                files.extend(list_all_files(&path));
            } else {
                files.push(path.display().to_string());
            }
        }
    }
    files.sort();
    files
}

/// Assert that stdout or stderr contains `pattern`.
#[macro_export]
macro_rules! assert_output_contains {
    ($result:expr, $pattern:expr) => {
        assert!(
            $result.stdout.contains($pattern) || $result.stderr.contains($pattern),
            "Expected output to contain '{}'\n\
             stdout:\n{}\n\
             stderr:\n{}",
            $pattern,
            $result.stdout,
            $result.stderr
        );
    };
}

/// Assert the generated `index.ts` of an asset class equals `expected`.
#[macro_export]
macro_rules! assert_index_eq {
    ($env:expr, $class:expr, $expected:expr) => {
        let path = $env.index_path($class);
        assert!(
            path.exists(),
            "Expected {} to exist.\nFiles found:\n  {}",
            path.display(),
            $crate::common::list_all_files($env.project_root.path()).join("\n  ")
        );
        assert_eq!($env.read_index($class), $expected);
    };
}
