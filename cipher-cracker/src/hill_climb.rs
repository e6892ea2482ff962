//! Hill climbing with random restarts over substitution keys
//!
//! A single climb starts from a random key and keeps swapping two symbols,
//! adopting the swap only when the quadgram score strictly improves. It stops
//! after `stall_limit` consecutive trials without improvement. Because one climb
//! only reaches a local optimum, [`break_cipher`] repeats it and keeps the best.

use rayon::prelude::*;
use tracing::{debug, info, trace};

use crate::key::CipherKey;
use crate::quadgram::QuadgramScorer;
use crate::random::{derive_seed, RandomSource, SeededRandom};
use crate::transform::substitute;
use crate::utils::ALPHABET_LEN;

/// Default number of independent climbs per break
pub const DEFAULT_RESTARTS: usize = 25;

/// Default number of consecutive non-improving swaps that ends a climb
pub const DEFAULT_STALL_LIMIT: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreakerConfig {
    /// Number of climbs; at least one is always run
    pub restarts: usize,
    pub stall_limit: usize,
}

impl Default for BreakerConfig {
    fn default() -> Self {
        Self {
            restarts: DEFAULT_RESTARTS,
            stall_limit: DEFAULT_STALL_LIMIT,
        }
    }
}

/// A decryption together with the key that produced it and its score
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub key: CipherKey,
    pub text: String,
    pub score: f64,
}

/// Result of one climb
#[derive(Debug, Clone, PartialEq)]
pub struct ClimbOutcome {
    pub key: CipherKey,
    pub score: f64,
    /// Score of the starting key followed by every accepted improvement
    pub accepted_scores: Vec<f64>,
}

/// Two distinct positions in `[0, 26)`, redrawing the second until it differs
fn random_distinct_pair<R: RandomSource + ?Sized>(rng: &mut R) -> (usize, usize) {
    let first = rng.rand_int(ALPHABET_LEN - 1);
    let mut second = rng.rand_int(ALPHABET_LEN - 1);
    while second == first {
        second = rng.rand_int(ALPHABET_LEN - 1);
    }
    (first, second)
}

/// Runs one hill climb from a fresh random key
pub fn climb_once<R: RandomSource + ?Sized>(
    ciphertext: &str,
    scorer: &QuadgramScorer,
    rng: &mut R,
    stall_limit: usize,
) -> ClimbOutcome {
    let mut best_key = CipherKey::random(rng);
    let mut best_score = scorer.score_text(&substitute(&best_key, ciphertext));
    let mut accepted_scores = vec![best_score];

    let mut stalled = 0;
    while stalled < stall_limit {
        let (i, j) = random_distinct_pair(rng);
        let candidate_key = best_key.swapped(i, j);
        let candidate_score = scorer.score_text(&substitute(&candidate_key, ciphertext));

        if candidate_score > best_score {
            trace!(i, j, score = candidate_score, "accepted swap");
            best_key = candidate_key;
            best_score = candidate_score;
            accepted_scores.push(best_score);
            stalled = 0;
        } else {
            stalled += 1;
        }
    }

    ClimbOutcome {
        key: best_key,
        score: best_score,
        accepted_scores,
    }
}

impl Candidate {
    /// Placeholder that any scored decryption beats
    fn unscored(ciphertext: &str) -> Self {
        Self {
            key: CipherKey::identity(),
            text: ciphertext.to_string(),
            score: f64::NEG_INFINITY,
        }
    }

    /// Adopts `outcome` if it strictly beats this candidate; ties keep the earlier one
    fn keep_best(&mut self, outcome: ClimbOutcome, ciphertext: &str) {
        if outcome.score > self.score {
            self.text = substitute(&outcome.key, ciphertext);
            self.key = outcome.key;
            self.score = outcome.score;
        }
    }
}

/// Breaks a substitution cipher by repeated hill climbing.
///
/// All restarts draw from the same `rng` stream in sequence, so the result is
/// fully determined by the generator's seed.
pub fn break_cipher<R: RandomSource + ?Sized>(
    ciphertext: &str,
    scorer: &QuadgramScorer,
    rng: &mut R,
    config: &BreakerConfig,
) -> Candidate {
    let mut best = Candidate::unscored(ciphertext);

    for restart in 0..config.restarts.max(1) {
        let outcome = climb_once(ciphertext, scorer, rng, config.stall_limit);
        debug!(restart, score = outcome.score, key = %outcome.key, "restart finished");
        best.keep_best(outcome, ciphertext);
    }

    info!(score = best.score, key = %best.key, "best decryption");
    best
}

/// Parallel variant of [`break_cipher`].
///
/// Restart `i` runs on its own generator seeded with `derive_seed(base_seed, i)`,
/// so the result depends only on `base_seed` and `config`, not on how rayon
/// schedules the restarts. It is not the same result as the single-stream
/// [`break_cipher`].
pub fn break_cipher_partitioned(
    ciphertext: &str,
    scorer: &QuadgramScorer,
    base_seed: u64,
    config: &BreakerConfig,
) -> Candidate {
    let outcomes: Vec<(usize, ClimbOutcome)> = (0..config.restarts.max(1))
        .into_par_iter()
        .map(|restart| {
            let mut rng = SeededRandom::new(derive_seed(base_seed, restart));
            (restart, climb_once(ciphertext, scorer, &mut rng, config.stall_limit))
        })
        .collect();

    let mut best = Candidate::unscored(ciphertext);
    for (restart, outcome) in outcomes {
        debug!(restart, score = outcome.score, key = %outcome.key, "restart finished");
        best.keep_best(outcome, ciphertext);
    }

    info!(score = best.score, key = %best.key, base_seed, "best decryption (partitioned)");
    best
}
