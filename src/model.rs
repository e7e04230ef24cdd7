use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const SCHEMA_VERSION: u32 = 1;

/// Default pattern: one or more uppercase letters, a hyphen, one or more
/// digits, e.g. `PROJ-123`.
pub const DEFAULT_TICKET_PATTERN: &str = "[A-Z]+-[0-9]+";

pub const DEFAULT_OUTPUT: &str = "ticket-stats.csv";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileStat {
    pub added: u64,
    pub deleted: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitRecord {
    pub message: String,
    pub files: Vec<FileStat>,
}

impl CommitRecord {
    /// Sum the per-file counts into this commit's short stat.
    /// A commit touching no files folds to zero.
    pub fn short_stat(&self) -> ShortStat {
        let mut short = ShortStat { added: 0, deleted: 0 };
        for f in &self.files {
            short.added += f.added;
            short.deleted += f.deleted;
        }
        short
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShortStat {
    pub added: u64,
    pub deleted: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketStat {
    pub ticket: String,
    pub added: u64,
    pub deleted: u64,
    pub total: u64,
    pub commits: u64,
}

impl TicketStat {
    pub fn new(ticket: String, short: ShortStat) -> Self {
        Self {
            ticket,
            added: short.added,
            deleted: short.deleted,
            total: short.added + short.deleted,
            commits: 1,
        }
    }

    /// Record one more mention of this ticket. Called once per mention,
    /// so a message naming the same ticket twice counts its diff twice.
    pub fn add(&mut self, short: ShortStat) {
        self.added += short.added;
        self.deleted += short.deleted;
        self.total += short.added + short.deleted;
        self.commits += 1;
    }

    /// Pointwise merge of two accumulators for the same ticket. The tuple
    /// is a commutative monoid under addition, so partial results from a
    /// partitioned input can be recombined in any order.
    pub fn merge(&mut self, other: &TicketStat) {
        self.added += other.added;
        self.deleted += other.deleted;
        self.total += other.total;
        self.commits += other.commits;
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportOutput {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub repository_path: String,
    pub pattern: String,
    pub tickets: Vec<TicketStat>,
}
