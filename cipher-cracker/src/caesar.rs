//! Dictionary-validated brute force over the 26 Caesar rotations

use std::collections::HashSet;

use tracing::debug;

use crate::transform::rotate_all;
use crate::utils::{clean, join_with_spaces, split_by_spaces, ALPHABET_LEN};

/// Set of known words, stored cleaned (letters only, uppercase)
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|word| clean(word.as_ref()))
            .filter(|word| !word.is_empty())
            .collect();
        Self { words }
    }

    /// Exact match against an already cleaned word
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// One rotation whose output is mostly dictionary words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaesarCandidate {
    /// Rotation applied to the ciphertext to obtain `text`
    pub rotation: u8,
    /// Rotated words joined by single spaces
    pub text: String,
    /// How many rotated words were found in the dictionary
    pub matches: usize,
}

impl CaesarCandidate {
    /// The encryption rotation that turns `text` back into the ciphertext
    pub fn key(&self) -> u8 {
        (ALPHABET_LEN as u8 - self.rotation) % ALPHABET_LEN as u8
    }
}

/// Result of [`break_caesar`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaesarOutcome {
    /// Every qualifying rotation, in increasing rotation order (never empty)
    Decrypted(Vec<CaesarCandidate>),
    /// No rotation produced a majority of dictionary words
    NoGoodDecryption,
}

impl CaesarOutcome {
    pub fn candidates(&self) -> &[CaesarCandidate] {
        match self {
            CaesarOutcome::Decrypted(candidates) => candidates,
            CaesarOutcome::NoGoodDecryption => &[],
        }
    }

    pub fn is_decrypted(&self) -> bool {
        matches!(self, CaesarOutcome::Decrypted(_))
    }
}

/// Counts the words that appear in the dictionary
pub fn num_words_in(words: &[String], dictionary: &Dictionary) -> usize {
    words.iter().filter(|word| dictionary.contains(word)).count()
}

/// Tries all 26 rotations and keeps those where strictly more than half of the
/// words (integer division) are dictionary words.
///
/// Original punctuation and casing are lost: each candidate is the cleaned,
/// rotated words rejoined with single spaces.
pub fn break_caesar(ciphertext: &str, dictionary: &Dictionary) -> CaesarOutcome {
    let words: Vec<String> = split_by_spaces(ciphertext)
        .iter()
        .map(|word| clean(word))
        .collect();
    let threshold = words.len() / 2;

    let mut candidates = Vec::new();
    for rotation in 0..ALPHABET_LEN as u8 {
        let mut rotated = words.clone();
        rotate_all(&mut rotated, rotation as i32);

        let matches = num_words_in(&rotated, dictionary);
        if matches > threshold {
            debug!(rotation, matches, total = words.len(), "rotation qualifies");
            candidates.push(CaesarCandidate {
                rotation,
                text: join_with_spaces(&rotated),
                matches,
            });
        }
    }

    if candidates.is_empty() {
        CaesarOutcome::NoGoodDecryption
    } else {
        CaesarOutcome::Decrypted(candidates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::rotate;

    fn hello_world() -> Dictionary {
        Dictionary::new(["HELLO", "WORLD"])
    }

    #[test]
    fn test_dictionary_cleans_entries() {
        let dict = Dictionary::new(["hello", " World\r", "", "42", "don't"]);
        assert_eq!(dict.len(), 3);
        assert!(dict.contains("HELLO"));
        assert!(dict.contains("WORLD"));
        assert!(dict.contains("DONT"));
        assert!(!dict.contains("hello"));
    }

    #[test]
    fn test_num_words_in() {
        let words = vec!["HELLO".to_string(), "THERE".to_string(), "WORLD".to_string()];
        assert_eq!(num_words_in(&words, &hello_world()), 2);
    }

    #[test]
    fn test_breaks_hello_world() {
        let outcome = break_caesar("KHOOR ZRUOG", &hello_world());
        assert_eq!(
            outcome,
            CaesarOutcome::Decrypted(vec![CaesarCandidate {
                rotation: 23,
                text: "HELLO WORLD".to_string(),
                matches: 2,
            }])
        );
        assert_eq!(outcome.candidates()[0].key(), 3);
    }

    #[test]
    fn test_punctuation_and_case_are_lost() {
        let outcome = break_caesar("khoor,   Zruog!", &hello_world());
        assert_eq!(outcome.candidates()[0].text, "HELLO WORLD");
    }

    #[test]
    fn test_requires_strict_majority() {
        // 1 of 2 words is not more than half
        assert_eq!(
            break_caesar("KHOOR XYZZY", &hello_world()),
            CaesarOutcome::NoGoodDecryption
        );
        // 2 of 3 words is
        let outcome = break_caesar("KHOOR ZRUOG XYZZY", &hello_world());
        assert!(outcome.is_decrypted());
        assert_eq!(outcome.candidates()[0].matches, 2);
    }

    #[test]
    fn test_reports_all_qualifying_rotations_in_order() {
        // "AB" rotated by 1 is "BC"; both are words, so rotations 0 and 1 qualify
        let dict = Dictionary::new(["AB", "BC"]);
        let outcome = break_caesar("AB", &dict);
        let rotations: Vec<u8> = outcome.candidates().iter().map(|c| c.rotation).collect();
        assert_eq!(rotations, vec![0, 1]);
        assert_eq!(outcome.candidates()[1].text, "BC");
    }

    #[test]
    fn test_empty_ciphertext_has_no_decryption() {
        let outcome = break_caesar("   ", &hello_world());
        assert_eq!(outcome, CaesarOutcome::NoGoodDecryption);
        assert!(outcome.candidates().is_empty());
    }

    #[test]
    fn test_round_trip_with_every_key() {
        let dict = Dictionary::new(["ATTACK", "AT", "DAWN"]);
        for key in 0..26 {
            let ciphertext = rotate("Attack at dawn", key);
            let outcome = break_caesar(&ciphertext, &dict);
            let found = outcome
                .candidates()
                .iter()
                .find(|c| c.text == "ATTACK AT DAWN")
                .expect("plaintext must be among the candidates");
            assert_eq!(found.key() as i32, key);
        }
    }
}
