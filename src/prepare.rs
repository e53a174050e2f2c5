//! Text preparation: strip raw input down to its letter sequence.
//!
//! All searchers operate on a [`PreparedText`], which holds the kept
//! letters plus a map from each letter back to its byte offset in the raw
//! input. The preparer never folds case; callers that want case-blind
//! matching fold both text and term first (see [`PreparedText::to_uppercase`]).

/// A canonical letter sequence extracted from raw text.
///
/// `position_map[i]` is the byte offset in the original raw text of the
/// character that produced `letters[i]`. The two vectors always have equal
/// length and the map is strictly increasing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreparedText {
    pub letters: Vec<char>,
    pub position_map: Vec<usize>,
}

impl PreparedText {
    /// Number of kept letters.
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// The kept letters as a single string. Useful for display and tests.
    pub fn as_string(&self) -> String {
        self.letters.iter().collect()
    }

    /// A copy with every letter uppercased, position map unchanged.
    ///
    /// Matching is exact char comparison, so callers fold case here (and on
    /// the term) before searching rather than inside the searchers. The
    /// mapping stays one-to-one: a letter whose uppercase expands to
    /// multiple chars (like 'ß') keeps only the first, since each map
    /// entry must keep pointing at exactly one raw character.
    pub fn to_uppercase(&self) -> PreparedText {
        PreparedText {
            letters: self
                .letters
                .iter()
                .map(|&c| c.to_uppercase().next().unwrap_or(c))
                .collect(),
            position_map: self.position_map.clone(),
        }
    }
}

/// Strip raw text down to its letters in a single linear pass.
///
/// Keeps alphabetic characters, plus literal spaces when `keep_spaces` is
/// set, recording the byte offset of each kept character. Empty input
/// produces an empty [`PreparedText`]; there are no failure modes.
pub fn prepare(raw: &str, keep_spaces: bool) -> PreparedText {
    let mut letters = Vec::with_capacity(raw.len());
    let mut position_map = Vec::with_capacity(raw.len());

    for (offset, ch) in raw.char_indices() {
        if ch.is_alphabetic() || (keep_spaces && ch == ' ') {
            letters.push(ch);
            position_map.push(offset);
        }
    }

    PreparedText {
        letters,
        position_map,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_non_letters() {
        let p = prepare("a1b2 c3!", false);
        assert_eq!(p.as_string(), "abc");
        assert_eq!(p.position_map, vec![0, 2, 5]);
    }

    #[test]
    fn test_keep_spaces() {
        let p = prepare("a b", true);
        assert_eq!(p.as_string(), "a b");
        assert_eq!(p.position_map, vec![0, 1, 2]);
    }

    #[test]
    fn test_empty_input() {
        let p = prepare("", false);
        assert!(p.is_empty());
        assert_eq!(p.position_map.len(), 0);
    }

    #[test]
    fn test_position_map_round_trip() {
        let raw = "The quick, brown fox; 42 jumps!";
        let p = prepare(raw, false);
        assert_eq!(p.letters.len(), p.position_map.len());
        for (i, &offset) in p.position_map.iter().enumerate() {
            let original = raw[offset..].chars().next().unwrap();
            assert!(original.is_alphabetic());
            assert_eq!(original, p.letters[i]);
        }
        // Strictly increasing map
        assert!(p.position_map.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_multibyte_offsets() {
        let raw = "é-x";
        let p = prepare(raw, false);
        assert_eq!(p.letters, vec!['é', 'x']);
        assert_eq!(p.position_map, vec![0, 3]);
    }

    #[test]
    fn test_to_uppercase_preserves_map() {
        let p = prepare("ab-cd", false).to_uppercase();
        assert_eq!(p.as_string(), "ABCD");
        assert_eq!(p.position_map, vec![0, 1, 3, 4]);
    }
}
