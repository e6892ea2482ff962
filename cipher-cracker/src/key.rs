//! Substitution keys
//!
//! A [`CipherKey`] maps plaintext letter index `i` (A = 0 ... Z = 25) to the
//! ciphertext letter `key[i]`. It can only be built as a permutation of A-Z, so
//! every key has an inverse.

use std::fmt;
use std::str::FromStr;

use crate::error::{CrackError, Result};
use crate::random::RandomSource;
use crate::utils::ALPHABET_LEN;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CipherKey([u8; ALPHABET_LEN]);

impl CipherKey {
    /// The key mapping every letter to itself
    pub fn identity() -> Self {
        let mut symbols = [0u8; ALPHABET_LEN];
        for (i, symbol) in symbols.iter_mut().enumerate() {
            *symbol = b'A' + i as u8;
        }
        Self(symbols)
    }

    /// The Caesar key `key[i] = (i + amount) mod 26`
    pub fn from_rotation(amount: i32) -> Self {
        let shift = amount.rem_euclid(ALPHABET_LEN as i32) as usize;
        let mut symbols = [0u8; ALPHABET_LEN];
        for (i, symbol) in symbols.iter_mut().enumerate() {
            *symbol = b'A' + ((i + shift) % ALPHABET_LEN) as u8;
        }
        Self(symbols)
    }

    /// Uniformly random key, shuffled Fisher-Yates style from the identity.
    ///
    /// Draws `rand_int(25)`, `rand_int(24)`, ..., `rand_int(1)` in that order.
    pub fn random<R: RandomSource + ?Sized>(rng: &mut R) -> Self {
        let mut symbols = Self::identity().0;
        for i in (1..ALPHABET_LEN).rev() {
            let j = rng.rand_int(i);
            symbols.swap(i, j);
        }
        Self(symbols)
    }

    /// Ciphertext letter for the plaintext letter at `index`
    pub fn symbol(&self, index: usize) -> char {
        self.0[index] as char
    }

    /// Copy of this key with the symbols at `i` and `j` exchanged
    pub fn swapped(&self, i: usize, j: usize) -> Self {
        let mut symbols = self.0;
        symbols.swap(i, j);
        Self(symbols)
    }

    /// The key that undoes this one
    pub fn inverse(&self) -> Self {
        let mut symbols = [0u8; ALPHABET_LEN];
        for (i, &symbol) in self.0.iter().enumerate() {
            symbols[(symbol - b'A') as usize] = b'A' + i as u8;
        }
        Self(symbols)
    }

    pub fn as_bytes(&self) -> &[u8; ALPHABET_LEN] {
        &self.0
    }
}

impl fmt::Display for CipherKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &symbol in &self.0 {
            write!(f, "{}", symbol as char)?;
        }
        Ok(())
    }
}

impl FromStr for CipherKey {
    type Err = CrackError;

    /// Parses 26 letters (any case), each of A-Z exactly once
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || CrackError::InvalidKey(s.to_string());

        let bytes = s.trim().as_bytes();
        if bytes.len() != ALPHABET_LEN {
            return Err(invalid());
        }

        let mut symbols = [0u8; ALPHABET_LEN];
        let mut seen = [false; ALPHABET_LEN];
        for (symbol, &byte) in symbols.iter_mut().zip(bytes) {
            if !byte.is_ascii_alphabetic() {
                return Err(invalid());
            }
            let upper = byte.to_ascii_uppercase();
            let index = (upper - b'A') as usize;
            if seen[index] {
                return Err(invalid());
            }
            seen[index] = true;
            *symbol = upper;
        }

        Ok(Self(symbols))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{ReplayRandom, SeededRandom};

    fn is_permutation(key: &CipherKey) -> bool {
        let mut seen = [false; ALPHABET_LEN];
        for &symbol in key.as_bytes() {
            if !symbol.is_ascii_uppercase() || seen[(symbol - b'A') as usize] {
                return false;
            }
            seen[(symbol - b'A') as usize] = true;
        }
        true
    }

    #[test]
    fn test_identity_and_rotation() {
        assert_eq!(CipherKey::identity().to_string(), "ABCDEFGHIJKLMNOPQRSTUVWXYZ");
        assert_eq!(CipherKey::from_rotation(3).to_string(), "DEFGHIJKLMNOPQRSTUVWXYZABC");
        assert_eq!(CipherKey::from_rotation(-1), CipherKey::from_rotation(25));
        assert_eq!(CipherKey::from_rotation(26), CipherKey::identity());
    }

    #[test]
    fn test_random_key_is_permutation() {
        let mut rng = SeededRandom::new(2024);
        for _ in 0..50 {
            assert!(is_permutation(&CipherKey::random(&mut rng)));
        }
    }

    #[test]
    fn test_random_key_draw_order() {
        let mut rng = ReplayRandom::new(vec![0]);
        let key = CipherKey::random(&mut rng);
        let expected: Vec<usize> = (1..ALPHABET_LEN).rev().collect();
        assert_eq!(rng.requested, expected);
        // always swapping with position 0 rotates the identity by one
        assert_eq!(key.to_string(), "BCDEFGHIJKLMNOPQRSTUVWXYZA");
    }

    #[test]
    fn test_inverse() {
        let key: CipherKey = "QWERTYUIOPASDFGHJKLZXCVBNM".parse().unwrap();
        assert_eq!(key.inverse().inverse(), key);
        assert_eq!(key.inverse().symbol(('Q' as u8 - b'A') as usize), 'A');
        assert_eq!(CipherKey::from_rotation(3).inverse(), CipherKey::from_rotation(23));
    }

    #[test]
    fn test_swapped_leaves_original() {
        let key = CipherKey::identity();
        let swapped = key.swapped(0, 25);
        assert_eq!(swapped.symbol(0), 'Z');
        assert_eq!(swapped.symbol(25), 'A');
        assert_eq!(key, CipherKey::identity());
        assert!(is_permutation(&swapped));
    }

    #[test]
    fn test_parse_rejects_non_permutations() {
        assert!("qwertyuiopasdfghjklzxcvbnm".parse::<CipherKey>().is_ok());
        assert!(matches!(
            "AACDEFGHIJKLMNOPQRSTUVWXYZ".parse::<CipherKey>(),
            Err(CrackError::InvalidKey(_))
        ));
        assert!("ABC".parse::<CipherKey>().is_err());
        assert!("ABCDEFGHIJKLMNOPQRSTUVWXY1".parse::<CipherKey>().is_err());
    }
}
