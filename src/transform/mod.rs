//! Word capitalization transform.
//!
//! # Responsibilities
//! - Upper-case the first character of each whitespace-separated word
//! - Preserve the input's whitespace layout exactly
//!
//! # Design Decisions
//! - Word boundaries use `char::is_whitespace`, not an ASCII check, so
//!   international text segments correctly
//! - Only a word's first character changes; interior characters pass through
//! - Total function: no errors, no side effects, empty in means empty out

/// Capitalize the first character of every word in `input`.
///
/// A word is a maximal run of non-whitespace characters. Upper-casing goes
/// through [`char::to_uppercase`], which may expand a single character into
/// several (e.g. some ligatures).
pub fn capitalize_words(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut at_word_start = true;

    for ch in input.chars() {
        if ch.is_whitespace() {
            at_word_start = true;
            output.push(ch);
        } else if at_word_start {
            at_word_start = false;
            output.extend(ch.to_uppercase());
        } else {
            output.push(ch);
        }
    }

    output
}
