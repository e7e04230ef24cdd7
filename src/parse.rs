use crate::error::{Result, TixError};
use crate::git::{FIELD_SEP, RECORD_SEP};
use crate::model::{CommitRecord, FileStat};

/// Lex raw `git log --numstat` text into commit records, preserving log
/// order and each commit's full message.
///
/// Each record in the input is `\x01<id>\x02<message>\x02` followed by the
/// commit's numstat lines (`added\tdeleted\tpath`). Binary files are
/// reported by git as `-\t-\tpath` and count as zero added/deleted rather
/// than being dropped.
pub fn parse_log(text: &str) -> Result<Vec<CommitRecord>> {
    let mut commits = Vec::new();

    for chunk in text.split(RECORD_SEP) {
        if chunk.is_empty() {
            continue;
        }

        let mut parts = chunk.splitn(3, FIELD_SEP);
        let id = parts.next().unwrap_or("");
        let (message, stat_block) = match (parts.next(), parts.next()) {
            (Some(m), Some(s)) => (m, s),
            _ => {
                return Err(TixError::Parse(format!(
                    "malformed log record: {}",
                    truncate(chunk, 80)
                )))
            }
        };

        let mut files = Vec::new();
        for line in stat_block.lines().filter(|l| !l.trim().is_empty()) {
            files.push(parse_numstat_line(line, id)?);
        }

        commits.push(CommitRecord {
            message: message.trim_end().to_string(),
            files,
        });
    }

    Ok(commits)
}

fn parse_numstat_line(line: &str, commit_id: &str) -> Result<FileStat> {
    let mut fields = line.splitn(3, '\t');
    let (added, deleted) = match (fields.next(), fields.next(), fields.next()) {
        (Some(a), Some(d), Some(_path)) => (a, d),
        _ => {
            return Err(TixError::Parse(format!(
                "bad numstat line in commit {commit_id}: {line:?}"
            )))
        }
    };

    Ok(FileStat {
        added: parse_count(added, commit_id, line)?,
        deleted: parse_count(deleted, commit_id, line)?,
    })
}

fn parse_count(field: &str, commit_id: &str, line: &str) -> Result<u64> {
    if field == "-" {
        // binary file, no line counts
        return Ok(0);
    }
    field.parse().map_err(|_| {
        TixError::Parse(format!(
            "bad numstat count in commit {commit_id}: {line:?}"
        ))
    })
}

fn truncate(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
