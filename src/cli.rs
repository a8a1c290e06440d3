use std::path::PathBuf;
use clap::Parser;

/// Environment variable GitHub Actions uses for step outputs
pub const GITHUB_OUTPUT_ENV: &str = "GITHUB_OUTPUT";

#[derive(Parser, Debug)]
#[command(
    name = "csproj-locate",
    version,
    about = "Finds a .csproj by name and publishes its path as GitHub Actions step outputs.",
    long_about = None
)]
pub struct Cli {
    /// Name of the project to find, without the .csproj extension
    #[arg(value_name = "PROJECT_NAME", allow_hyphen_values = true)]
    pub project: String,

    /// Directory to search (defaults to the current directory)
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// File to write step outputs to
    #[arg(long, value_name = "FILE", env = GITHUB_OUTPUT_ENV)]
    pub output: Option<PathBuf>,
}

/// Parses the command line. Usage errors exit with code 1 rather than
/// clap's default of 2; help and version output still exit 0.
pub fn parse_args() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if !err.use_stderr() => err.exit(),
        Err(err) => {
            let _ = err.print();
            std::process::exit(1);
        }
    }
}
