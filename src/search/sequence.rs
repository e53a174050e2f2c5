//! Sequence search: letter positions follow a growing formula instead of a
//! constant skip.
//!
//! Each generator produces a complete, strictly increasing position list
//! for a candidate start, or `None` when the sequence would run past the
//! end of the text; such starts are silently skipped. Hits carry `skip: 0`
//! since the spacing is non-constant.

use crate::prepare::PreparedText;
use crate::search::types::{Direction, Scan, SearchHit, SearchSummary, SequenceKind};

/// Positions for `len` letters starting at `start`, or `None` if the last
/// position would be `>= max_pos`.
fn generate_positions(
    kind: SequenceKind,
    start: usize,
    len: usize,
    max_pos: usize,
) -> Option<Vec<usize>> {
    let mut positions = Vec::with_capacity(len);
    let mut fib = (1usize, 1usize);
    let mut offset = 0usize;

    for i in 0..len {
        if i > 0 {
            offset = match kind {
                // offsets 1, 3, 6, 10, ... (cumulative 1, 2, 3, 4, ...)
                SequenceKind::Triangular => i * (i + 1) / 2,
                // offsets 1, 4, 9, 16, ...
                SequenceKind::Square => i * i,
                // skip distances 1, 1, 2, 3, 5, ... accumulated
                SequenceKind::Fibonacci => {
                    let step = fib.0;
                    fib = (fib.1, fib.0 + fib.1);
                    offset + step
                }
            };
        }
        let pos = start + offset;
        if pos >= max_pos {
            return None;
        }
        positions.push(pos);
    }
    Some(positions)
}

/// Find every occurrence of `term` whose letter spacing follows `kind`.
pub fn search_sequence(
    text: &PreparedText,
    term: &str,
    kind: SequenceKind,
    scan: Scan,
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
    let mut hits = Vec::new();

    for &direction in scan.directions() {
        let letters: &[char] = match direction {
            Direction::Forward => &text.letters,
            Direction::Reverse => &reversed,
        };
        for start in 0..n {
            let Some(positions) = generate_positions(kind, start, term_chars.len(), n) else {
                continue;
            };
            if positions
                .iter()
                .zip(&term_chars)
                .all(|(&p, &want)| letters[p] == want)
            {
                let mapped: Vec<usize> = positions
                    .into_iter()
                    .map(|p| match direction {
                        Direction::Forward => p,
                        Direction::Reverse => n - 1 - p,
                    })
                    .collect();
                hits.push(SearchHit::new(term, 0, direction, mapped));
            }
        }
    }

    SearchSummary {
        hits,
        source_text_length: n,
    }
}

/// String-keyed entry point: an unrecognized kind name yields an empty
/// summary rather than an error.
pub fn search_sequence_named(
    text: &PreparedText,
    term: &str,
    kind_name: &str,
    scan: Scan,
) -> SearchSummary {
    match SequenceKind::from_name(kind_name) {
        Some(kind) => search_sequence(text, term, kind, scan),
        None => SearchSummary::empty(text.len()),
    }
}
