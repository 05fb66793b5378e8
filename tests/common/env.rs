//! Test environment builder for isolated barrelgen runs.
//!
//! Every run points `BARRELGEN_ROOT` at a fresh temp directory and disables
//! color so output can be matched as plain text.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// Result of running the barrelgen binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

#[allow(dead_code)]
impl TestResult {
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated project directory
pub struct TestEnv {
    pub project_root: TempDir,
    bin: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    pub fn builder() -> TestEnvBuilder {
        TestEnvBuilder::default()
    }

    /// Get path relative to project root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    pub fn index_path(&self, class: &str) -> PathBuf {
        self.project_path(&format!("src/assets/{class}/index.ts"))
    }

    pub fn read_index(&self, class: &str) -> String {
        let path = self.index_path(class);
        std::fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e))
    }

    /// Write a file to the project directory
    pub fn write_project_file(&self, relative_path: &str, content: &str) {
        let full_path = self.project_path(relative_path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
    }

    pub fn add_asset(&self, class: &str, file_name: &str) {
        self.write_project_file(&format!("src/assets/{class}/{file_name}"), "<svg/>");
    }

    /// Run barrelgen with the project root as working directory
    pub fn run(&self) -> TestResult {
        self.run_with_env(&[])
    }

    pub fn run_with_env(&self, env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = self.command(self.project_root.path());
        cmd.env("BARRELGEN_ROOT", self.project_root.path());
        for (key, value) in env_vars {
            cmd.env(key, value);
        }
        self.output_to_result(cmd.output().expect("Failed to execute barrelgen"))
    }

    /// Run from `cwd` without `BARRELGEN_ROOT`, so the root is discovered
    pub fn run_discovering_from(&self, cwd: &Path) -> TestResult {
        let mut cmd = self.command(cwd);
        cmd.env_remove("BARRELGEN_ROOT");
        self.output_to_result(cmd.output().expect("Failed to execute barrelgen"))
    }

    fn command(&self, cwd: &Path) -> Command {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(cwd)
            .env("NO_COLOR", "1")
            .env_remove("BARRELGEN_FORMATTER")
            .env_remove("BARRELGEN_FORMATTER_CMD")
            .env_remove("BARRELGEN_VERBOSE")
            .env_remove("RUST_LOG");
        cmd
    }

    fn output_to_result(&self, output: Output) -> TestResult {
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}

/// Builder for TestEnv with fluent API
#[derive(Default)]
pub struct TestEnvBuilder {
    icons: Vec<String>,
    jobs: Vec<String>,
    style_config: Option<String>,
    skip_jobs_dir: bool,
}

#[allow(dead_code)]
impl TestEnvBuilder {
    pub fn with_icons(mut self, names: &[&str]) -> Self {
        self.icons.extend(names.iter().map(|s| s.to_string()));
        self
    }

    pub fn with_jobs(mut self, names: &[&str]) -> Self {
        self.jobs.extend(names.iter().map(|s| s.to_string()));
        self
    }

    /// Contents of `.prettierrc`
    pub fn with_style_config(mut self, content: &str) -> Self {
        self.style_config = Some(content.to_string());
        self
    }

    pub fn without_jobs_dir(mut self) -> Self {
        self.skip_jobs_dir = true;
        self
    }

    pub fn build(self) -> TestEnv {
        let project_root = tempfile::tempdir().expect("Failed to create temp dir");
        let env = TestEnv {
            project_root,
            bin: PathBuf::from(env!("CARGO_BIN_EXE_barrelgen")),
        };

        std::fs::create_dir_all(env.project_path("src/assets/icons"))
            .expect("Failed to create icons dir");
        if !self.skip_jobs_dir {
            std::fs::create_dir_all(env.project_path("src/assets/jobs"))
                .expect("Failed to create jobs dir");
        }
        for name in &self.icons {
            env.add_asset("icons", name);
        }
        for name in &self.jobs {
            env.add_asset("jobs", name);
        }
        if let Some(style) = &self.style_config {
            env.write_project_file(".prettierrc", style);
        }

        env
    }
}
