//! Caesar rotation and monoalphabetic substitution

use crate::key::CipherKey;
use crate::random::RandomSource;
use crate::utils::{letter_index, ALPHABET_LEN};

/// Rotates an uppercase letter within A-Z by `amount` (any sign)
fn rotate_letter(c: char, amount: i32) -> char {
    let shift = amount.rem_euclid(ALPHABET_LEN as i32) as u8;
    (((c as u8 - b'A') + shift) % ALPHABET_LEN as u8 + b'A') as char
}

/// Applies a Caesar rotation.
///
/// Letters are uppercased and rotated, ASCII whitespace passes through unchanged
/// and every other character (digits, punctuation, non-ASCII spaces) is dropped.
pub fn rotate(text: &str, amount: i32) -> String {
    text.chars()
        .filter_map(|c| {
            if c.is_ascii_alphabetic() {
                Some(rotate_letter(c.to_ascii_uppercase(), amount))
            } else if c.is_ascii_whitespace() {
                Some(c)
            } else {
                None
            }
        })
        .collect()
}

/// Rotates every string in place by the same amount
pub fn rotate_all(strings: &mut [String], amount: i32) {
    for s in strings.iter_mut() {
        *s = rotate(s, amount);
    }
}

/// Applies a substitution key.
///
/// Letters are uppercased and replaced by `key[letter]`; everything else is kept
/// as is, so punctuation and spacing survive.
pub fn substitute(key: &CipherKey, text: &str) -> String {
    text.chars()
        .map(|c| match letter_index(c) {
            Some(index) => key.symbol(index),
            None => c,
        })
        .collect()
}

/// Encrypts with a freshly drawn random key and returns the key alongside the ciphertext
pub fn encrypt_random<R: RandomSource + ?Sized>(text: &str, rng: &mut R) -> (CipherKey, String) {
    let key = CipherKey::random(rng);
    let ciphertext = substitute(&key, text);
    (key, ciphertext)
}
