use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use log::debug;

use crate::cli::GITHUB_OUTPUT_ENV;

pub const ABSOLUTE_CSPROJ_PATH_KEY: &str = "absolute_csproj_path";
pub const CSPROJ_DIR_KEY: &str = "csproj_dir";

/// Destination for GitHub Actions step outputs.
#[derive(Debug, Clone)]
pub struct StepOutput {
    path: PathBuf,
}

impl StepOutput {
    /// Unset and empty destinations are both configuration errors.
    pub fn new(path: Option<PathBuf>) -> Result<Self> {
        match path {
            Some(path) if !path.as_os_str().is_empty() => Ok(Self { path }),
            _ => bail!(
                "🛑 GitHub Actions output file not found: {} is not set.\n\
                 → This tool is meant to run as a GitHub Actions step, or pass --output <FILE>.",
                GITHUB_OUTPUT_ENV
            ),
        }
    }

    /// Replaces the output file's contents with the project's path and
    /// directory, one `key=value` pair per line.
    pub fn write_project_outputs(&self, project_path: &Path) -> Result<()> {
        let file = File::create(&self.path).with_context(|| {
            format!("Failed to open step output file {}", self.path.display())
        })?;
        let mut writer = BufWriter::new(file);

        for (key, value) in project_outputs(project_path) {
            println!("📝 Setting step output {}={}", key, value);
            writeln!(writer, "{}={}", key, value).with_context(|| {
                format!("Failed to write '{}' to {}", key, self.path.display())
            })?;
        }

        writer
            .flush()
            .with_context(|| format!("Failed to flush {}", self.path.display()))?;
        debug!("wrote step outputs to {}", self.path.display());

        Ok(())
    }
}

/// Key/value pairs published for a located project, in output order.
pub fn project_outputs(project_path: &Path) -> Vec<(&'static str, String)> {
    let dir = project_path
        .parent()
        .map(|dir| dir.display().to_string())
        .unwrap_or_default();

    vec![
        (ABSOLUTE_CSPROJ_PATH_KEY, project_path.display().to_string()),
        (CSPROJ_DIR_KEY, dir),
    ]
}
