//! Chain search: greedy nearest-occurrence walk.
//!
//! Every occurrence of the term's first letter starts a candidate path.
//! From there the walk repeatedly jumps to the *nearest* occurrence of the
//! next required letter, strictly after (or, reversed, strictly before)
//! the current position. A path missing any letter is abandoned outright;
//! partial chains are never emitted.
//!
//! The walk is greedy by design and never backtracks: it will not revisit
//! a farther occurrence of an intermediate letter even when that would
//! allow a shorter overall path, so the result is not globally optimal.
//!
//! ASCII text takes a byte-buffer fast path scanned with `memchr` /
//! `memrchr`; anything else falls back to a char-wise scan.

use crate::prepare::PreparedText;
use crate::search::types::{ChainPath, ChainSearchSummary, ChainStep};
use memchr::{memchr, memrchr};

/// Scanner over the prepared letters, with a byte fast path when the whole
/// text (and term) is ASCII.
enum LetterScanner<'a> {
    Bytes(Vec<u8>),
    Chars(&'a [char]),
}

impl<'a> LetterScanner<'a> {
    fn new(letters: &'a [char], term: &[char]) -> LetterScanner<'a> {
        if letters.iter().all(char::is_ascii) && term.iter().all(char::is_ascii) {
            LetterScanner::Bytes(letters.iter().map(|&c| c as u8).collect())
        } else {
            LetterScanner::Chars(letters)
        }
    }

    /// Nearest occurrence of `want` strictly after `from`.
    fn next_after(&self, want: char, from: usize) -> Option<usize> {
        match self {
            LetterScanner::Bytes(bytes) => {
                memchr(want as u8, &bytes[from + 1..]).map(|i| from + 1 + i)
            }
            LetterScanner::Chars(chars) => chars[from + 1..]
                .iter()
                .position(|&c| c == want)
                .map(|i| from + 1 + i),
        }
    }

    /// Nearest occurrence of `want` strictly before `from`.
    fn next_before(&self, want: char, from: usize) -> Option<usize> {
        match self {
            LetterScanner::Bytes(bytes) => memrchr(want as u8, &bytes[..from]),
            LetterScanner::Chars(chars) => chars[..from].iter().rposition(|&c| c == want),
        }
    }
}

/// Letters strictly between `prev` and `found`, read in walk order.
fn intervening(letters: &[char], prev: usize, found: usize) -> String {
    if found > prev {
        letters[prev + 1..found].iter().collect()
    } else {
        letters[found + 1..prev].iter().rev().collect()
    }
}

/// Walk all chain paths for `term` through the text.
///
/// `max_results` caps the number of accepted paths; 0 means unlimited.
/// Empty text or term yields an empty summary.
pub fn search_chain(
    text: &PreparedText,
    term: &str,
    reverse: bool,
    max_results: usize,
) -> ChainSearchSummary {
    let n = text.len();
    let term_chars: Vec<char> = term.chars().collect();
    if n == 0 || term_chars.is_empty() {
        return ChainSearchSummary::empty(n);
    }

    let scanner = LetterScanner::new(&text.letters, &term_chars);
    let first = term_chars[0];
    let mut paths = Vec::new();

    for start in 0..n {
        if text.letters[start] != first {
            continue;
        }
        if let Some(path) = walk(text, &scanner, &term_chars, start, reverse) {
            paths.push(path);
            if max_results > 0 && paths.len() == max_results {
                break;
            }
        }
    }

    ChainSearchSummary {
        paths,
        source_text_length: n,
    }
}

/// One greedy walk from `start`; `None` when any letter cannot be reached.
fn walk(
    text: &PreparedText,
    scanner: &LetterScanner,
    term_chars: &[char],
    start: usize,
    reverse: bool,
) -> Option<ChainPath> {
    let mut steps = Vec::with_capacity(term_chars.len());
    steps.push(ChainStep {
        letter: term_chars[0],
        position: start,
        interval: 0,
        intervening_letters: String::new(),
    });

    let mut current = start;
    for &letter in &term_chars[1..] {
        let found = if reverse {
            scanner.next_before(letter, current)?
        } else {
            scanner.next_after(letter, current)?
        };
        steps.push(ChainStep {
            letter,
            position: found,
            interval: current.abs_diff(found),
            intervening_letters: intervening(&text.letters, current, found),
        });
        current = found;
    }

    Some(ChainPath { steps })
}
