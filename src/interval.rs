//! Intervening-segment extraction.
//!
//! Given the letter positions of a hit, pulls out the literal substrings
//! lying strictly between each consecutive pair of hit letters. Scoring
//! those substrings is somebody else's job: the caller supplies an opaque
//! value function to [`score_segments`] and this module assumes nothing
//! about its rule.

use serde::{Deserialize, Serialize};

/// The letters strictly between two consecutive hit letters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterveningSegment {
    pub from_letter: char,
    pub to_letter: char,
    pub letters: String,
}

/// Extract one segment per adjacent position pair.
///
/// Both endpoints are excluded. Decreasing pairs (reverse-oriented hits)
/// are sliced in walk order, so the segment reads the way the hit was
/// traversed. Labels come from the term's corresponding letters; fewer
/// than two positions yield no segments. Degenerate input never panics:
/// an equal pair or an out-of-range position yields an empty segment.
pub fn intervening_segments(
    letters: &[char],
    positions: &[usize],
    term: &str,
) -> Vec<InterveningSegment> {
    let term_chars: Vec<char> = term.chars().collect();
    let mut segments = Vec::new();

    for (i, pair) in positions.windows(2).enumerate() {
        let (from, to) = (pair[0], pair[1]);
        let between: String = if to > from {
            letters
                .get(from + 1..to)
                .map(|s| s.iter().collect())
                .unwrap_or_default()
        } else if from > to {
            letters
                .get(to + 1..from)
                .map(|s| s.iter().rev().collect())
                .unwrap_or_default()
        } else {
            String::new()
        };
        segments.push(InterveningSegment {
            from_letter: term_chars.get(i).copied().unwrap_or_default(),
            to_letter: term_chars.get(i + 1).copied().unwrap_or_default(),
            letters: between,
        });
    }
    segments
}

/// Score each segment's letters with a caller-supplied value function.
pub fn score_segments<F>(segments: &[InterveningSegment], value_fn: F) -> Vec<f64>
where
    F: Fn(&str) -> f64,
{
    segments.iter().map(|s| value_fn(&s.letters)).collect()
}
