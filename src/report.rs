use crate::error::Result;
use crate::git::GitRepo;
use crate::model::{ReportOutput, TicketStat, SCHEMA_VERSION};
use chrono::Utc;
use console::style;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

const CSV_HEADER: &str = "ticket,added,deleted,total,commits";

/// Write the per-ticket report as CSV, creating the destination if absent
/// and overwriting it if present. The report is rendered in memory first so
/// a failed write never leaves a truncated file with partial rows.
pub fn write_csv(path: &Path, tickets: &[TicketStat]) -> Result<()> {
    let mut buf = String::with_capacity(64 * (tickets.len() + 1));
    buf.push_str(CSV_HEADER);
    buf.push('\n');
    for t in tickets {
        let _ = writeln!(
            buf,
            "{},{},{},{},{}",
            t.ticket, t.added, t.deleted, t.total, t.commits
        );
    }
    fs::write(path, buf)?;
    Ok(())
}

pub fn write_json(path: &Path, tickets: &[TicketStat], repo: &GitRepo, pattern: &str) -> Result<()> {
    let output = ReportOutput {
        version: SCHEMA_VERSION,
        generated_at: Utc::now(),
        repository_path: repo.path().to_string_lossy().to_string(),
        pattern: pattern.to_string(),
        tickets: tickets.to_vec(),
    };
    fs::write(path, serde_json::to_vec_pretty(&output)?)?;
    Ok(())
}

pub fn print_summary(tickets: &[TicketStat], output: &Path) {
    if tickets.is_empty() {
        println!("No ticket references found in the commit history.");
        println!("Report written to {}", output.display());
        return;
    }

    println!(
        "{:<16} {:>8} {:>8} {:>8} {:>8}",
        style("Ticket").bold(),
        style("Added").bold(),
        style("Deleted").bold(),
        style("Total").bold(),
        style("Commits").bold()
    );
    println!("{}", "─".repeat(52));

    let mut ranked: Vec<&TicketStat> = tickets.iter().collect();
    ranked.sort_by(|a, b| b.total.cmp(&a.total));

    for t in ranked.iter().take(50) {
        println!(
            "{:<16} {:>8} {:>8} {:>8} {:>8}",
            t.ticket, t.added, t.deleted, t.total, t.commits
        );
    }
    if ranked.len() > 50 {
        println!("\n... and {} more tickets", ranked.len() - 50);
    }

    println!(
        "\n{} tickets written to {}",
        style(tickets.len()).cyan(),
        output.display()
    );
}
