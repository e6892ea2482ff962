//! Loading the quadgram table and the dictionary from disk
//!
//! Malformed resources are rejected here, before any breaker runs.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::caesar::Dictionary;
use crate::error::{CrackError, Result};
use crate::quadgram::QuadgramScorer;

/// Parses `QUAD,count` lines; blank lines are skipped
pub fn parse_quadgrams<R: BufRead>(reader: R) -> Result<Vec<(String, u64)>> {
    let mut entries = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let malformed = || CrackError::MalformedQuadgram {
            line: index + 1,
            content: line.clone(),
        };

        let (quadgram, count) = trimmed.split_once(',').ok_or_else(malformed)?;
        let quadgram = quadgram.trim();
        if quadgram.len() != 4 || !quadgram.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(malformed());
        }
        let count: u64 = count.trim().parse().map_err(|_| malformed())?;

        entries.push((quadgram.to_ascii_uppercase(), count));
    }

    Ok(entries)
}

/// Reads one word per line
pub fn parse_dictionary<R: BufRead>(reader: R) -> Result<Dictionary> {
    let words = reader.lines().collect::<std::io::Result<Vec<String>>>()?;
    Ok(Dictionary::new(words))
}

/// Builds a scorer from a quadgram frequency file
pub fn load_quadgrams<P: AsRef<Path>>(path: P) -> Result<QuadgramScorer> {
    let file = File::open(path.as_ref())?;
    let entries = parse_quadgrams(BufReader::new(file))?;
    debug!(path = %path.as_ref().display(), entries = entries.len(), "loaded quadgrams");
    QuadgramScorer::new(entries)
}

/// Loads a dictionary file
pub fn load_dictionary<P: AsRef<Path>>(path: P) -> Result<Dictionary> {
    let file = File::open(path.as_ref())?;
    let dictionary = parse_dictionary(BufReader::new(file))?;
    debug!(path = %path.as_ref().display(), words = dictionary.len(), "loaded dictionary");
    Ok(dictionary)
}
