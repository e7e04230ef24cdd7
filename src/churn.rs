use crate::aggregate::aggregate;
use crate::git::GitRepo;
use crate::parse::parse_log;
use crate::report;
use crate::tickets::compile_pattern;
use anyhow::Context;
use std::path::{Path, PathBuf};

pub fn exec(repo: Option<PathBuf>, output: &Path, pattern: &str, json: bool) -> anyhow::Result<()> {
    // Pattern compiles before any history is touched, so a bad pattern
    // produces no output file at all.
    let pattern_re = compile_pattern(pattern)?;

    let repo = GitRepo::open(repo.as_ref()).context("Failed to open git repository")?;

    let log = repo
        .numstat_log()
        .context("Failed to read commit history")?;

    let commits = parse_log(&log).context("Failed to parse commit history")?;

    let stats = aggregate(&commits, &pattern_re);

    if json {
        report::write_json(output, &stats, &repo, pattern)
            .with_context(|| format!("Failed to write report to {}", output.display()))?;
    } else {
        report::write_csv(output, &stats)
            .with_context(|| format!("Failed to write report to {}", output.display()))?;
    }

    report::print_summary(&stats, output);
    Ok(())
}
