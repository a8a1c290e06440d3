//! csproj-locate
//!
//! Finds `<project>.csproj` somewhere under the working directory and hands its
//! location to later GitHub Actions steps through `$GITHUB_OUTPUT`.

mod cli;
mod locator;
mod output;

use anyhow::{Context, bail};
use cli::{Cli, parse_args};
use locator::find_project;
use output::StepOutput;

fn main() {
    env_logger::init();

    let cli = parse_args();

    // Usage errors are reported by clap on stderr; everything else is part of
    // the step log on stdout.
    if let Err(err) = run(cli) {
        println!("{:#}", err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let root = match cli.root {
        Some(root) => root,
        None => std::env::current_dir().context("Failed to read the current directory")?,
    };

    let Some(project_path) = find_project(&root, &cli.project)? else {
        bail!("🛑 Couldn't find the specified project {}", cli.project);
    };

    println!("✅ Found csproj: {}", project_path.display());

    let step_output = StepOutput::new(cli.output)?;
    step_output.write_project_outputs(&project_path)?;

    Ok(())
}
