use crate::model::{DEFAULT_OUTPUT, DEFAULT_TICKET_PATTERN};
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tix")]
#[command(about = "Per-ticket code churn statistics from git commit history")]
#[command(version)]
pub struct Cli {
    #[arg(help = "Path to git repository (defaults to the current directory)")]
    pub repo: Option<PathBuf>,

    #[arg(help = "Output path for the report", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    #[arg(
        long,
        short = 'p',
        help = "Regex used to extract ticket identifiers from commit messages",
        default_value = DEFAULT_TICKET_PATTERN
    )]
    pub pattern: String,

    #[arg(long, help = "Write the report as JSON instead of CSV")]
    pub json: bool,
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn execute(self) -> Result<()> {
        crate::churn::exec(self.repo, &self.output, &self.pattern, self.json)
    }
}
