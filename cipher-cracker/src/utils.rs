//! Text helpers shared by the transforms and the breakers

/// Number of letters in the alphabet every key permutes.
pub const ALPHABET_LEN: usize = 26;

/// Keeps only ASCII letters and converts them to uppercase
pub fn clean(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Splits text into words on any run of ASCII whitespace
pub fn split_by_spaces(text: &str) -> Vec<String> {
    text.split_ascii_whitespace().map(str::to_string).collect()
}

/// Joins words with a single space between them
pub fn join_with_spaces(words: &[String]) -> String {
    words.join(" ")
}

/// Position of an ASCII letter in the alphabet (A = 0 ... Z = 25), ignoring case
pub fn letter_index(c: char) -> Option<usize> {
    if c.is_ascii_alphabetic() {
        Some((c.to_ascii_uppercase() as u8 - b'A') as usize)
    } else {
        None
    }
}
