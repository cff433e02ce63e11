//! Test utilities for animgen integration tests

// Internal imports (std, crate)
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

// External imports (alphabetized)
use anyhow::Context;
use tempfile::TempDir;

/// Controller used by most tests
pub const LOCOMOTION: &str = r#"
name: Locomotion
parameters:
  - { name: speed, type: float, hash: 123 }
  - { name: Jump, type: trigger, hash: 456 }
  - { name: isGrounded, type: 4, hash: -789 }
"#;

/// Creates a temporary directory for test outputs
pub fn create_temp_dir() -> anyhow::Result<(TempDir, PathBuf)> {
    let temp_dir = tempfile::tempdir()?;
    let temp_path = temp_dir.path().to_path_buf();
    Ok((temp_dir, temp_path))
}

/// Writes a controller description into `dir`
pub fn write_controller(dir: &Path, file_name: &str, content: &str) -> anyhow::Result<PathBuf> {
    let path = dir.join(file_name);
    fs::write(&path, content)
        .with_context(|| format!("Failed to write controller {}", path.display()))?;
    Ok(path)
}

/// Path as a command-line argument
pub fn arg(path: &Path) -> &str {
    path.to_str().expect("temp paths are UTF-8")
}

/// Runs the animgen binary with `args`
pub fn run_animgen<I, S>(args: I) -> anyhow::Result<Output>
where
    I: IntoIterator<Item = S>,
    S: AsRef<std::ffi::OsStr>,
{
    Command::new(env!("CARGO_BIN_EXE_animgen"))
        .args(args)
        .env("RUST_LOG", "warn")
        .output()
        .context("Failed to run animgen")
}
