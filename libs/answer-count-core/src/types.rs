//! Configuration types for answer counting.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::{CountError, Result};

/// Note fields as an explicit field-name to value mapping.
///
/// Host adapters build this from the note before calling into the crate;
/// no field discovery happens here.
pub type NoteFields = HashMap<String, String>;

fn default_tag_prefix() -> String {
    "multiple_answers".to_string()
}

fn default_answer_field() -> String {
    "Back".to_string()
}

fn default_question_field() -> String {
    "Front".to_string()
}

fn default_split_char() -> String {
    ",".to_string()
}

/// Global answer-count settings, as stored in the host's config store.
///
/// Missing keys deserialize to the built-in defaults, so a store written
/// by an older version (or an empty one) always loads to a complete
/// config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Tag prefix marking a note as having multiple answers.
    #[serde(default = "default_tag_prefix")]
    pub tag_prefix: String,
    /// Field the answer text is read from.
    #[serde(default = "default_answer_field")]
    pub answer_field: String,
    /// Field rewritten at save time to carry the count.
    #[serde(default = "default_question_field")]
    pub question_field: String,
    /// Split character used when no tag supplies one.
    #[serde(default = "default_split_char")]
    pub default_split_char: String,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            tag_prefix: default_tag_prefix(),
            answer_field: default_answer_field(),
            question_field: default_question_field(),
            default_split_char: default_split_char(),
        }
    }
}

impl GlobalConfig {
    /// Check settings a preferences dialog is about to persist.
    pub fn validate(&self) -> Result<()> {
        if self.tag_prefix.is_empty() {
            return Err(CountError::EmptyTagPrefix);
        }
        if self.default_split_char.is_empty() {
            return Err(CountError::EmptyDefaultSplitChar);
        }
        Ok(())
    }
}

/// Per-deck settings (all fields optional for overrides).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckConfig {
    pub deck_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer_field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question_field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_split_char: Option<String>,
}

impl DeckConfig {
    /// Create new deck settings with only the path set.
    pub fn new(deck_path: String) -> Self {
        Self {
            deck_path,
            tag_prefix: None,
            answer_field: None,
            question_field: None,
            default_split_char: None,
        }
    }
}

/// Effective configuration (global merged with deck overrides).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountConfig {
    pub tag_prefix: String,
    pub answer_field: String,
    pub question_field: String,
    pub default_split_char: String,
}

impl CountConfig {
    /// Merge global settings with optional deck overrides.
    pub fn resolve(global: &GlobalConfig, deck: Option<&DeckConfig>) -> Self {
        match deck {
            Some(d) => Self {
                tag_prefix: d
                    .tag_prefix
                    .clone()
                    .unwrap_or_else(|| global.tag_prefix.clone()),
                answer_field: d
                    .answer_field
                    .clone()
                    .unwrap_or_else(|| global.answer_field.clone()),
                question_field: d
                    .question_field
                    .clone()
                    .unwrap_or_else(|| global.question_field.clone()),
                default_split_char: d
                    .default_split_char
                    .clone()
                    .unwrap_or_else(|| global.default_split_char.clone()),
            },
            None => Self {
                tag_prefix: global.tag_prefix.clone(),
                answer_field: global.answer_field.clone(),
                question_field: global.question_field.clone(),
                default_split_char: global.default_split_char.clone(),
            },
        }
    }
}

impl Default for CountConfig {
    fn default() -> Self {
        Self::resolve(&GlobalConfig::default(), None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_global_config() {
        let config = GlobalConfig::default();
        assert_eq!(config.tag_prefix, "multiple_answers");
        assert_eq!(config.answer_field, "Back");
        assert_eq!(config.question_field, "Front");
        assert_eq!(config.default_split_char, ",");
    }

    #[test]
    fn validate_accepts_defaults() {
        assert!(GlobalConfig::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_tag_prefix() {
        let config = GlobalConfig {
            tag_prefix: String::new(),
            ..GlobalConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(CountError::EmptyTagPrefix)
        ));
    }

    #[test]
    fn validate_rejects_empty_default_split_char() {
        let config = GlobalConfig {
            default_split_char: String::new(),
            ..GlobalConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(CountError::EmptyDefaultSplitChar)
        ));
    }

    #[test]
    fn empty_store_deserializes_to_defaults() {
        let config: GlobalConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, GlobalConfig::default());
    }

    #[test]
    fn partial_store_fills_missing_keys() {
        let config: GlobalConfig =
            serde_json::from_str(r#"{"tag_prefix": "answer_count"}"#).unwrap();
        assert_eq!(config.tag_prefix, "answer_count");
        assert_eq!(config.answer_field, "Back");
        assert_eq!(config.default_split_char, ",");
    }

    #[test]
    fn resolve_without_deck_uses_global() {
        let global = GlobalConfig::default();
        let effective = CountConfig::resolve(&global, None);
        assert_eq!(effective.tag_prefix, global.tag_prefix);
        assert_eq!(effective.answer_field, global.answer_field);
        assert_eq!(effective.question_field, global.question_field);
        assert_eq!(effective.default_split_char, global.default_split_char);
    }

    #[test]
    fn resolve_applies_deck_overrides_per_field() {
        let global = GlobalConfig::default();
        let mut deck = DeckConfig::new("languages/japanese".to_string());
        deck.answer_field = Some("Reading".to_string());
        deck.default_split_char = Some("、".to_string());

        let effective = CountConfig::resolve(&global, Some(&deck));
        assert_eq!(effective.answer_field, "Reading");
        assert_eq!(effective.default_split_char, "、");
        // untouched fields fall back to global
        assert_eq!(effective.tag_prefix, "multiple_answers");
        assert_eq!(effective.question_field, "Front");
    }

    #[test]
    fn new_deck_config_has_no_overrides() {
        let deck = DeckConfig::new("history".to_string());
        assert_eq!(deck.deck_path, "history");
        assert!(deck.tag_prefix.is_none());
        assert!(deck.answer_field.is_none());
        assert!(deck.question_field.is_none());
        assert!(deck.default_split_char.is_none());
    }

    #[test]
    fn deck_config_serializes_only_set_overrides() {
        let deck = DeckConfig::new("history".to_string());
        let json = serde_json::to_string(&deck).unwrap();
        assert_eq!(json, r#"{"deck_path":"history"}"#);
    }
}
