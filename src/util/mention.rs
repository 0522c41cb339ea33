//! Extraction of lootsplit recipients from free-form command input.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

static MENTION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<@!?(\d+)>").expect("mention pattern is valid"));

static SNOWFLAKE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d{17,20})\b").expect("snowflake pattern is valid"));

/// Recipients named in a lootsplit `users` option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecipientQuery {
    /// Explicit user ids, de-duplicated and ascending.
    ///
    /// `oversized` holds digit runs too large for a snowflake, ascending, so they can
    /// still be reported as unresolved.
    Ids {
        ids: BTreeSet<u64>,
        oversized: Vec<String>,
    },
    /// `@name` tokens to resolve against cached guild members, in input order.
    Names(Vec<String>),
    /// Nothing usable was given.
    Empty,
}

/// Parses the recipients of a lootsplit.
///
/// Mentions (`<@id>` / `<@!id>`) take precedence. Without mentions, bare 17-20 digit
/// snowflakes are used. Without either, whitespace separated tokens starting with `@`
/// are returned as names.
pub fn parse_recipients(input: &str) -> RecipientQuery {
    if let Some(query) = capture_ids(&MENTION_PATTERN, input) {
        return query;
    }

    if let Some(query) = capture_ids(&SNOWFLAKE_PATTERN, input) {
        return query;
    }

    let mut names: Vec<String> = Vec::new();
    for token in input.split_whitespace() {
        let Some(name) = token.strip_prefix('@') else {
            continue;
        };
        if !name.is_empty() && !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
    }

    if names.is_empty() {
        RecipientQuery::Empty
    } else {
        RecipientQuery::Names(names)
    }
}

fn capture_ids(pattern: &Regex, input: &str) -> Option<RecipientQuery> {
    let mut ids = BTreeSet::new();
    let mut oversized: Vec<String> = Vec::new();

    for digits in pattern
        .captures_iter(input)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
    {
        match digits.parse::<u64>() {
            Ok(id) => {
                ids.insert(id);
            }
            Err(_) => {
                let digits = digits.trim_start_matches('0').to_string();
                if !oversized.contains(&digits) {
                    oversized.push(digits);
                }
            }
        }
    }

    if ids.is_empty() && oversized.is_empty() {
        return None;
    }

    // Same length digit runs without leading zeros order numerically as text
    oversized.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));

    Some(RecipientQuery::Ids { ids, oversized })
}
