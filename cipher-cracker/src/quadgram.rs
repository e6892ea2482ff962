//! Quadgram statistics used as the fitness function for substitution breaking

use std::collections::HashMap;

use crate::error::{CrackError, Result};
use crate::utils::clean;

/// Score returned by [`QuadgramScorer::score_text`] for text with fewer than 4 letters
pub const SHORT_TEXT_SCORE: f64 = -1000.0;

/// Pseudo-count assigned to quadgrams missing from the table
pub const FLOOR_PSEUDO_COUNT: f64 = 0.01;

const QUADGRAM_LEN: usize = 4;

/// Log-probabilities of 4-letter sequences, built once and shared read-only.
///
/// A quadgram seen `count` times scores `log10(count / total)`; an unseen one
/// scores `log10(0.01 / total)`.
#[derive(Debug, Clone)]
pub struct QuadgramScorer {
    log_probs: HashMap<String, f64>,
    floor: f64,
    total: u64,
}

impl QuadgramScorer {
    /// Build from `(quadgram, count)` pairs; repeated quadgrams accumulate
    pub fn new<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, u64)>,
        S: AsRef<str>,
    {
        let mut counts: HashMap<String, u64> = HashMap::new();
        for (quadgram, count) in entries {
            *counts.entry(quadgram.as_ref().to_ascii_uppercase()).or_insert(0) += count;
        }

        let total: u64 = counts.values().sum();
        if total == 0 {
            return Err(CrackError::EmptyQuadgramTable);
        }

        let total_f = total as f64;
        let log_probs = counts
            .into_iter()
            .map(|(quadgram, count)| {
                let log_prob = if count == 0 {
                    (FLOOR_PSEUDO_COUNT / total_f).log10()
                } else {
                    (count as f64 / total_f).log10()
                };
                (quadgram, log_prob)
            })
            .collect();

        Ok(Self {
            log_probs,
            floor: (FLOOR_PSEUDO_COUNT / total_f).log10(),
            total,
        })
    }

    /// Log-probability of a single uppercase quadgram
    pub fn score(&self, quadgram: &str) -> f64 {
        self.log_probs.get(quadgram).copied().unwrap_or(self.floor)
    }

    /// English-likeness of arbitrary text; higher is more English.
    ///
    /// The text is cleaned first, then every overlapping quadgram contributes,
    /// so `n` letters give `n - 3` terms. Fewer than 4 letters yields
    /// [`SHORT_TEXT_SCORE`].
    pub fn score_text(&self, text: &str) -> f64 {
        let cleaned = clean(text);
        if cleaned.len() < QUADGRAM_LEN {
            return SHORT_TEXT_SCORE;
        }

        (0..=cleaned.len() - QUADGRAM_LEN)
            .map(|i| self.score(&cleaned[i..i + QUADGRAM_LEN]))
            .sum()
    }

    /// Score assigned to quadgrams missing from the table
    pub fn floor(&self) -> f64 {
        self.floor
    }

    /// Sum of all counts in the table
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of distinct quadgrams
    pub fn len(&self) -> usize {
        self.log_probs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.log_probs.is_empty()
    }
}
