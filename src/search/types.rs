//! Result model shared by the searchers.
//!
//! All results are plain value objects: created by a single search call,
//! immutable once returned, serializable for export.

use serde::{Deserialize, Serialize};

/// Orientation of a single hit within the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Forward,
    Reverse,
}

/// Which directions a search should cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scan {
    Forward,
    Reverse,
    Both,
}

impl Scan {
    /// The concrete directions this selector expands to.
    pub fn directions(self) -> &'static [Direction] {
        match self {
            Scan::Forward => &[Direction::Forward],
            Scan::Reverse => &[Direction::Reverse],
            Scan::Both => &[Direction::Forward, Direction::Reverse],
        }
    }
}

/// Position-spacing rule for sequence searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SequenceKind {
    Triangular,
    Square,
    Fibonacci,
}

impl SequenceKind {
    /// Parse a kind name; `None` for anything unrecognized.
    pub fn from_name(name: &str) -> Option<SequenceKind> {
        match name.to_lowercase().as_str() {
            "triangular" | "tri" => Some(SequenceKind::Triangular),
            "square" | "sq" => Some(SequenceKind::Square),
            "fibonacci" | "fib" => Some(SequenceKind::Fibonacci),
            _ => None,
        }
    }
}

/// One occurrence of a term found by an equidistant or sequence search.
///
/// `letter_positions` indexes into the prepared letter sequence, one entry
/// per term letter; `skip` is 0 for non-constant-spacing hits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    pub term: String,
    pub skip: usize,
    pub start_pos: usize,
    pub direction: Direction,
    pub letter_positions: Vec<usize>,
}

impl SearchHit {
    /// Build a hit, enforcing one position per term letter.
    pub(crate) fn new(
        term: &str,
        skip: usize,
        direction: Direction,
        letter_positions: Vec<usize>,
    ) -> SearchHit {
        debug_assert_eq!(term.chars().count(), letter_positions.len());
        SearchHit {
            term: term.to_string(),
            skip,
            start_pos: letter_positions.first().copied().unwrap_or(0),
            direction,
            letter_positions,
        }
    }
}

/// All hits from one search invocation over one text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchSummary {
    pub hits: Vec<SearchHit>,
    pub source_text_length: usize,
}

impl SearchSummary {
    pub fn empty(source_text_length: usize) -> SearchSummary {
        SearchSummary {
            hits: Vec::new(),
            source_text_length,
        }
    }

    pub fn len(&self) -> usize {
        self.hits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }
}

/// One step of a chain path: a matched letter, where it was found, how far
/// it sits from the previous step, and the letters skipped over in between.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainStep {
    pub letter: char,
    pub position: usize,
    /// Absolute distance from the previous step's position; 0 for the
    /// first step.
    pub interval: usize,
    pub intervening_letters: String,
}

/// A complete chain through the text, one step per term letter.
///
/// Partial chains are never constructed; `steps.len()` always equals the
/// term's letter count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainPath {
    pub steps: Vec<ChainStep>,
}

impl ChainPath {
    /// Position of each step, in walk order.
    pub fn positions(&self) -> Vec<usize> {
        self.steps.iter().map(|s| s.position).collect()
    }
}

/// All chain paths from one chain search over one text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainSearchSummary {
    pub paths: Vec<ChainPath>,
    pub source_text_length: usize,
}

impl ChainSearchSummary {
    pub fn empty(source_text_length: usize) -> ChainSearchSummary {
        ChainSearchSummary {
            paths: Vec::new(),
            source_text_length,
        }
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_expansion() {
        assert_eq!(Scan::Forward.directions(), &[Direction::Forward]);
        assert_eq!(Scan::Reverse.directions(), &[Direction::Reverse]);
        assert_eq!(Scan::Both.directions().len(), 2);
    }

    #[test]
    fn test_sequence_kind_names() {
        assert_eq!(
            SequenceKind::from_name("Triangular"),
            Some(SequenceKind::Triangular)
        );
        assert_eq!(SequenceKind::from_name("fib"), Some(SequenceKind::Fibonacci));
        assert_eq!(SequenceKind::from_name("pentagonal"), None);
    }

    #[test]
    fn test_hit_start_pos_tracks_first_position() {
        let hit = SearchHit::new("AB", 5, Direction::Forward, vec![3, 8]);
        assert_eq!(hit.start_pos, 3);
        assert_eq!(hit.letter_positions, vec![3, 8]);
    }
}
