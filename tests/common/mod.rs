//! Shared integration-test harness for running the `docsmith` binary as a
//! child process and inspecting its output.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Helpers for spawning the compiled `docsmith` binary.
pub struct DocsmithProcess;

impl DocsmithProcess {
    /// Runs `docsmith` with the given arguments and captures its output.
    #[allow(clippy::missing_panics_doc)]
    pub fn run(args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_docsmith"))
            .args(args)
            .output()
            .expect("failed to spawn docsmith")
    }

    /// Runs `docsmith` with the given working directory.
    #[allow(clippy::missing_panics_doc)]
    pub fn run_in(dir: &Path, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_docsmith"))
            .args(args)
            .current_dir(dir)
            .output()
            .expect("failed to spawn docsmith")
    }

    /// Returns the path to a test fixture.
    #[must_use]
    pub fn fixture_path(name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests/fixtures")
            .join(name)
    }
}

/// Decode stderr for assertion messages.
#[must_use]
pub fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
