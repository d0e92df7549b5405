//! Tag conventions for answer counting.
//!
//! A note opts in by carrying a tag equal to the configured prefix
//! (`multiple_answers`) or the prefix followed by a separator and a split
//! char (`multiple_answers_;`). More split chars can be supplied by
//! adding more tags; they apply in tag order.

use crate::types::CountConfig;

/// Symbolic names for split chars that are awkward to put in a tag.
pub const SPLIT_CHAR_ALIASES: &[(&str, &str)] = &[("space", " ")];

/// Resolve a symbolic alias to its literal split string, or return the
/// input unchanged. One level of lookup, no recursion.
pub fn resolve_alias(split_char: &str) -> &str {
    SPLIT_CHAR_ALIASES
        .iter()
        .find(|(name, _)| *name == split_char)
        .map(|(_, literal)| *literal)
        .unwrap_or(split_char)
}

/// Split the host's space-separated tag string into the ordered tag list.
///
/// Empty tokens are preserved; downstream matching ignores them.
pub fn split_tags(tag_string: &str) -> Vec<String> {
    tag_string.split(' ').map(str::to_string).collect()
}

/// Derive the ordered split-char list from a note's tags.
///
/// Returns `None` when no tag equals or starts with the configured
/// prefix (a tag containing the prefix elsewhere does not count). A bare
/// prefix tag contributes no split char of its own; when no tag supplies
/// one, the configured default is used.
pub fn split_chars(tags: &[String], config: &CountConfig) -> Option<Vec<String>> {
    let suffixes: Vec<&str> = tags
        .iter()
        .filter_map(|tag| tag.strip_prefix(&config.tag_prefix))
        .collect();

    if suffixes.is_empty() {
        return None;
    }

    // The first suffix char is the separator; whatever follows is the
    // split char. A suffix that is only a separator names nothing.
    let mut chars: Vec<&str> = suffixes
        .iter()
        .filter(|suffix| !suffix.is_empty())
        .map(|suffix| strip_separator(suffix))
        .filter(|candidate| !candidate.is_empty())
        .collect();

    if chars.is_empty() {
        chars.push(&config.default_split_char);
    }

    Some(
        chars
            .into_iter()
            .map(|candidate| resolve_alias(candidate).to_string())
            .collect(),
    )
}

/// Drop exactly one leading character, respecting char boundaries.
fn strip_separator(suffix: &str) -> &str {
    let mut rest = suffix.chars();
    rest.next();
    rest.as_str()
}
