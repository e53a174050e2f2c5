//! Equidistant letter sequence (ELS) search.
//!
//! Samples letters at a constant skip distance and compares the sampled
//! substring to the term exactly. A ranged search runs every skip value in
//! the range; skip values are independent, so the range is partitioned
//! across rayon tasks and the per-task hit lists are merged afterwards.
//! This is the dominant cost center: worst-case work is
//! `O(skip_range * text_length)`, so callers bound `max_skip` for large
//! texts and can abort through the [`CancelToken`].

use crate::prepare::PreparedText;
use crate::search::CancelToken;
use crate::search::types::{Direction, Scan, SearchHit, SearchSummary};
use rayon::prelude::*;
use std::ops::RangeInclusive;

/// Find every occurrence of `term` at every skip in `skips`.
///
/// Hits are sorted by `(skip, direction, start_pos)` so the output is
/// deterministic regardless of how the parallel merge interleaves. Empty
/// text, empty term, or a range containing only non-positive skips all
/// yield an empty summary; none of these are errors.
pub fn search_equidistant(
    text: &PreparedText,
    term: &str,
    skips: RangeInclusive<usize>,
    scan: Scan,
    cancel: Option<&CancelToken>,
) -> SearchSummary {
    let n = text.len();
    let term_chars: Vec<char> = term.chars().collect();
    if n == 0 || term_chars.is_empty() {
        return SearchSummary::empty(n);
    }

    // Only materialized when a reverse pass will actually run
    let reversed: Vec<char> = if scan.directions().contains(&Direction::Reverse) {
        text.letters.iter().rev().copied().collect()
    } else {
        Vec::new()
    };
    let skip_values: Vec<usize> = skips.filter(|&s| s > 0).collect();

    let mut hits: Vec<SearchHit> = skip_values
        .into_par_iter()
        .flat_map_iter(|skip| {
            // Cancellation boundary: a cancelled search drops whole skip
            // values but never truncates one mid-scan.
            if cancel.is_some_and(|c| c.is_cancelled()) {
                return Vec::new();
            }
            let mut found = Vec::new();
            for &direction in scan.directions() {
                let letters: &[char] = match direction {
                    Direction::Forward => &text.letters,
                    Direction::Reverse => &reversed,
                };
                for start in match_starts(letters, &term_chars, skip) {
                    let positions: Vec<usize> = (0..term_chars.len())
                        .map(|i| {
                            let p = start + i * skip;
                            match direction {
                                Direction::Forward => p,
                                Direction::Reverse => n - 1 - p,
                            }
                        })
                        .collect();
                    found.push(SearchHit::new(term, skip, direction, positions));
                }
            }
            found
        })
        .collect();

    hits.sort_by(|a, b| {
        (a.skip, a.direction, a.start_pos).cmp(&(b.skip, b.direction, b.start_pos))
    });

    SearchSummary {
        hits,
        source_text_length: n,
    }
}

/// Start indices where sampling `letters` every `skip` chars spells `term`.
fn match_starts(letters: &[char], term: &[char], skip: usize) -> Vec<usize> {
    let n = letters.len();
    let span = (term.len() - 1) * skip;
    if span >= n {
        return Vec::new();
    }
    let max_start = n - 1 - span;

    let mut starts = Vec::new();
    'outer: for start in 0..=max_start {
        for (i, &want) in term.iter().enumerate() {
            if letters[start + i * skip] != want {
                continue 'outer;
            }
        }
        starts.push(start);
    }
    starts
}
