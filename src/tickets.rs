use crate::error::{Result, TixError};
use regex::Regex;

/// Compile the user-supplied ticket pattern, failing before any commit is
/// processed so an invalid pattern never produces partial output.
pub fn compile_pattern(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| TixError::Pattern {
        pattern: pattern.to_string(),
        source,
    })
}

/// Every non-overlapping match of `pattern` in `message`, left to right.
/// Duplicates are preserved; an unmatched or empty message yields an empty
/// sequence.
pub fn extract_tickets<'m>(message: &'m str, pattern: &Regex) -> Vec<&'m str> {
    pattern.find_iter(message).map(|m| m.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DEFAULT_TICKET_PATTERN;
    use pretty_assertions::assert_eq;

    fn default_pattern() -> Regex {
        compile_pattern(DEFAULT_TICKET_PATTERN).unwrap()
    }

    #[test]
    fn extracts_matches_in_order() {
        let tickets = extract_tickets("PROJ-2 fixed after PROJ-1", &default_pattern());
        assert_eq!(tickets, vec!["PROJ-2", "PROJ-1"]);
    }

    #[test]
    fn preserves_duplicate_mentions() {
        let tickets = extract_tickets("PROJ-1 reverts PROJ-1", &default_pattern());
        assert_eq!(tickets, vec!["PROJ-1", "PROJ-1"]);
    }

    #[test]
    fn empty_message_yields_nothing() {
        assert_eq!(extract_tickets("", &default_pattern()), Vec::<&str>::new());
    }

    #[test]
    fn no_match_yields_nothing() {
        let tickets = extract_tickets("chore: bump deps", &default_pattern());
        assert_eq!(tickets, Vec::<&str>::new());
    }

    #[test]
    fn default_pattern_requires_uppercase_prefix() {
        assert_eq!(
            extract_tickets("see proj-42 and PROJ-42", &default_pattern()),
            vec!["PROJ-42"]
        );
    }

    #[test]
    fn custom_pattern_restricts_the_prefix() {
        let custom = compile_pattern(r"TICKET-\d+").unwrap();
        assert_eq!(extract_tickets("see TICKET-42", &custom), vec!["TICKET-42"]);
        assert_eq!(extract_tickets("see PROJ-42", &custom), Vec::<&str>::new());
    }

    #[test]
    fn invalid_pattern_fails_at_compile_time() {
        assert!(compile_pattern("[A-Z").is_err());
    }
}
