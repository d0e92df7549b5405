//! Answer counting and question annotation.

use crate::tags;
use crate::types::CountConfig;

/// Count the discrete answers in an answer field's text.
///
/// Leading and trailing newlines are stripped first (newlines only, not
/// other whitespace). The split chars apply in order: each one splits
/// every piece produced so far, and empty pieces are dropped. An answer
/// that is empty, or consumed entirely by splitting, counts as zero.
pub fn count_answers(answer: &str, split_chars: &[String]) -> usize {
    let answer = answer.trim_matches('\n');

    let mut answers: Vec<&str> = vec![answer];
    for split_char in split_chars {
        answers = answers
            .iter()
            .flat_map(|piece| piece.split(split_char.as_str()))
            .filter(|piece| !piece.is_empty())
            .collect();
    }

    answers.len()
}

/// Append `" (count)"` to the last line of `question` containing any
/// non-whitespace character, or to the final line when every line is
/// blank. Line structure is otherwise preserved verbatim.
pub fn append_count(question: &str, count: usize) -> String {
    let mut lines: Vec<String> = question.split('\n').map(str::to_string).collect();

    let target = lines
        .iter()
        .rposition(|line| !line.trim().is_empty())
        .unwrap_or(lines.len() - 1);

    lines[target] = format!("{} ({})", lines[target], count);
    lines.join("\n")
}

/// Annotate a question with its answer count.
///
/// Returns the question unchanged when the note's tags do not opt in.
pub fn annotate_question(
    question: &str,
    answer: &str,
    note_tags: &[String],
    config: &CountConfig,
) -> String {
    match tags::split_chars(note_tags, config) {
        Some(chars) => append_count(question, count_answers(answer, &chars)),
        None => question.to_string(),
    }
}
