use crate::model::{CommitRecord, TicketStat};
use crate::tickets::extract_tickets;
use regex::Regex;
use std::collections::HashMap;

/// Fold a commit sequence into one `TicketStat` per distinct ticket
/// identifier, in first-seen order.
///
/// Every mention counts: a commit whose message names the same ticket twice
/// adds its short stat twice and bumps `commits` twice. That mirrors the
/// mention-level attribution policy rather than deduplicating per commit.
pub fn aggregate(commits: &[CommitRecord], pattern: &Regex) -> Vec<TicketStat> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut stats: Vec<TicketStat> = Vec::new();

    for commit in commits {
        let short = commit.short_stat();
        for ticket in extract_tickets(&commit.message, pattern) {
            match index.get(ticket) {
                Some(&i) => stats[i].add(short),
                None => {
                    index.insert(ticket.to_string(), stats.len());
                    stats.push(TicketStat::new(ticket.to_string(), short));
                }
            }
        }
    }

    stats
}
