//! Helper functions and utilities
//!
//! Text helpers shared by the command handlers and the question store.

use std::num::IntErrorKind;

/// Format questions as a numbered list, starting from 1
pub fn format_numbered_list(items: &[String]) -> String {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| format!("{}. {}", i + 1, item))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Normalize question text so it fits on a single line
///
/// Surrounding whitespace is trimmed and every run of line breaks is
/// collapsed into a single space.
pub fn normalize_question_text(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Result of parsing a question number typed by the admin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionNumber {
    /// Zero-based index into the question list
    Index(usize),
    /// A number that cannot address any question (zero, negative or huge)
    OutOfRange,
    /// Input was not an integer
    NotANumber,
}

/// Parse a 1-based question number into a zero-based index
pub fn parse_question_number(text: &str) -> QuestionNumber {
    match text.trim().parse::<i64>() {
        Ok(n) if n >= 1 => match usize::try_from(n - 1) {
            Ok(index) => QuestionNumber::Index(index),
            Err(_) => QuestionNumber::OutOfRange,
        },
        Ok(_) => QuestionNumber::OutOfRange,
        Err(e) => match e.kind() {
            // a well-formed integer, just too large to address any question
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => QuestionNumber::OutOfRange,
            _ => QuestionNumber::NotANumber,
        },
    }
}

/// Maximum length of a Telegram text message, in characters
pub const TELEGRAM_MESSAGE_LIMIT: usize = 4096;

/// Split text into chunks of at most `limit` characters
///
/// Splits on line boundaries where possible; a single line longer than
/// `limit` is cut at character boundaries.
pub fn chunk_message(text: &str, limit: usize) -> Vec<String> {
    if text.chars().count() <= limit {
        return vec![text.to_string()];
    }

    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for line in text.split('\n') {
        let line_len = line.chars().count();
        let needed = if current.is_empty() { line_len } else { line_len + 1 };

        if current_len + needed > limit && !current.is_empty() {
            chunks.push(std::mem::take(&mut current));
            current_len = 0;
        }

        if line_len > limit {
            let chars: Vec<char> = line.chars().collect();
            for piece in chars.chunks(limit) {
                chunks.push(piece.iter().collect());
            }
            continue;
        }

        if !current.is_empty() {
            current.push('\n');
            current_len += 1;
        }
        current.push_str(line);
        current_len += line_len;
    }

    if !current.is_empty() {
        chunks.push(current);
    }

    chunks
}
