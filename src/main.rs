use anyhow::Result;
use clap::Parser;
use tix::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.execute()
}
