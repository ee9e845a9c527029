//! Chunk relevance scoring: exact matches, proximity, completeness

use crate::keywords::tokenize;
use std::collections::HashSet;

/// Points per exact keyword match
pub const MATCH_SCORE: u32 = 5;

/// Match pairs closer than this many tokens earn a proximity bonus
pub const PROXIMITY_WINDOW: usize = 10;

/// Flat bonus when a chunk contains every distinct keyword
pub const COMPLETENESS_BONUS: u32 = 50;

/// Score one chunk against the keyword sequence.
///
/// The keyword sequence is scanned as-is: a keyword repeated in the query is
/// rescored per repetition, which deliberately compounds the exact-match
/// contribution.
pub fn score_chunk(chunk_text: &str, keywords: &[String]) -> u32 {
    let words = tokenize(chunk_text);

    let mut score = 0u32;
    let mut positions: Vec<usize> = Vec::new();
    for keyword in keywords {
        for (position, word) in words.iter().enumerate() {
            if word == keyword {
                positions.push(position);
                score += MATCH_SCORE;
            }
        }
    }

    // Clustered matches earn up to PROXIMITY_WINDOW - 1 extra points per
    // consecutive pair; gaps of PROXIMITY_WINDOW or more earn nothing.
    positions.sort_unstable();
    for pair in positions.windows(2) {
        let gap = pair[1] - pair[0];
        if gap > 0 {
            score += PROXIMITY_WINDOW.saturating_sub(gap) as u32;
        }
    }

    let word_set: HashSet<&str> = words.iter().map(String::as_str).collect();
    if keywords.iter().all(|k| word_set.contains(k.as_str())) {
        score += COMPLETENESS_BONUS;
    }

    score
}
