//! Entry points for the host's render and field-save callbacks.
//!
//! The host adapter resolves the effective config first (via
//! [`CountConfig::resolve`]) and hands in the note's fields as an
//! explicit map; nothing here touches the host's own state.

use crate::counter::{annotate_question, append_count, count_answers};
use crate::error::{CountError, Result};
use crate::tags;
use crate::types::{CountConfig, NoteFields};

/// Display-time hook: annotate the about-to-be-shown question text.
///
/// A note whose fields lack the configured answer field is left alone.
/// The returned text is display-only; nothing is persisted.
pub fn render_question(
    question: &str,
    fields: &NoteFields,
    tags: &[String],
    config: &CountConfig,
) -> String {
    match fields.get(&config.answer_field) {
        Some(answer) => annotate_question(question, answer, tags, config),
        None => question.to_string(),
    }
}

/// Save-time hook: rewrite the configured question field to carry the
/// answer count before the host persists the fields.
///
/// Checks happen in the same order as at render time: a note without an
/// opt-in tag, or without the configured answer field, is left untouched.
/// A missing question field on an opted-in note is an error, since the
/// host is about to persist a field set the config says should exist.
pub fn save_fields(
    fields: &mut NoteFields,
    note_tags: &[String],
    config: &CountConfig,
) -> Result<()> {
    let split_chars = match tags::split_chars(note_tags, config) {
        Some(chars) => chars,
        None => return Ok(()),
    };

    let answer = match fields.get(&config.answer_field) {
        Some(answer) => answer.clone(),
        None => return Ok(()),
    };

    let count = count_answers(&answer, &split_chars);
    let question = fields
        .get_mut(&config.question_field)
        .ok_or_else(|| CountError::MissingQuestionField {
            field: config.question_field.clone(),
        })?;

    *question = append_count(question, count);
    Ok(())
}
