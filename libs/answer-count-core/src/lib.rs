//! Tag-driven answer counting for flashcard questions.
//!
//! Appends the number of discrete answers, as `(N)`, to a question's text
//! when the note carries an opt-in tag. A tag equal to the configured
//! prefix uses the default split character; tags of the form
//! `<prefix>_<split_char>` choose their own, and several tags chain.
//!
//! Provides:
//! - Split-char derivation from tag conventions (aliases included)
//! - Chained-delimiter answer counting and question annotation
//! - Global/deck configuration with merge-with-fallback resolution
//! - The render-time and save-time entry points for host adapters

pub mod counter;
pub mod error;
pub mod hooks;
pub mod tags;
pub mod types;

pub use counter::{annotate_question, append_count, count_answers};
pub use error::{CountError, Result};
pub use hooks::{render_question, save_fields};
pub use tags::{resolve_alias, split_chars, split_tags, SPLIT_CHAR_ALIASES};
pub use types::{CountConfig, DeckConfig, GlobalConfig, NoteFields};
