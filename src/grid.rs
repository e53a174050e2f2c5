//! Grid layout advice for visualizing a letter sequence as a rectangle.
//!
//! Independent of the search logic: only the letter count matters. Layouts
//! are ranked by "squareness" (how close columns and rows are to each
//! other), since near-square grids read best on screen.

use serde::{Deserialize, Serialize};

/// Widths people actually pick when a count factors poorly. Used as a
/// fallback so prime and near-prime counts still get usable layouts.
const COMMON_WIDTHS: [usize; 10] = [10, 15, 20, 22, 25, 26, 30, 35, 40, 50];

/// Below this many exact factor pairs, common-width fallbacks are added.
const MIN_EXACT_PAIRS: usize = 4;

/// A candidate rectangular layout for `n` letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridLayout {
    pub columns: usize,
    pub rows: usize,
    /// True when `columns * rows == n` exactly; false for common-width
    /// fallbacks, whose last row is incomplete.
    pub exact: bool,
}

impl GridLayout {
    /// Squareness rank: lower is closer to square.
    pub fn squareness(&self) -> usize {
        self.columns.abs_diff(self.rows)
    }
}

/// A nearby letter count and how many exact factor pairs it has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountSuggestion {
    pub count: usize,
    pub factor_pairs: usize,
}

/// Exact integer factor pairs `(c, n/c)` with `2 <= c <= isqrt(n)`.
fn factor_pairs(n: usize) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    let mut c = 2;
    while c * c <= n {
        if n % c == 0 {
            pairs.push((c, n / c));
        }
        c += 1;
    }
    pairs
}

/// Candidate grid layouts for `n` letters, best (most square) first.
///
/// Exact factor pairs come from trial division up to `isqrt(n)`. When there
/// are fewer than four of them the count factors poorly (prime or
/// near-prime), so common display widths are synthesized with
/// `rows = ceil(n / width)` and an incomplete last row; these are marked
/// `exact: false`. `include_common_widths` forces the fallback list in even
/// when the count factors well.
pub fn grid_layouts(n: usize, include_common_widths: bool) -> Vec<GridLayout> {
    if n < 2 {
        return Vec::new();
    }

    let mut layouts: Vec<GridLayout> = factor_pairs(n)
        .into_iter()
        .map(|(c, r)| GridLayout {
            columns: c,
            rows: r,
            exact: true,
        })
        .collect();

    if include_common_widths || layouts.len() < MIN_EXACT_PAIRS {
        for &width in &COMMON_WIDTHS {
            if width >= n {
                continue;
            }
            let rows = n.div_ceil(width);
            let candidate = GridLayout {
                columns: width,
                rows,
                exact: width * rows == n,
            };
            if !layouts.contains(&candidate) {
                layouts.push(candidate);
            }
        }
    }

    layouts.sort_by_key(|l| l.squareness());
    layouts
}

/// Rank letter counts near `n` by how well they factor.
///
/// Scans `n - range ..= n + range` (clamped so counts stay >= 2) and sorts
/// by exact-factor-pair count descending, breaking ties by closeness to
/// `n`. Used to advise the caller when `n` itself factors poorly.
pub fn suggest_better_counts(n: usize, range: usize) -> Vec<CountSuggestion> {
    let lo = n.saturating_sub(range).max(2);
    let hi = n + range;

    let mut suggestions: Vec<CountSuggestion> = (lo..=hi)
        .map(|count| CountSuggestion {
            count,
            factor_pairs: factor_pairs(count).len(),
        })
        .collect();

    suggestions.sort_by(|a, b| {
        b.factor_pairs
            .cmp(&a.factor_pairs)
            .then_with(|| a.count.abs_diff(n).cmp(&b.count.abs_diff(n)))
    });
    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_factors() {
        let layouts = grid_layouts(36, false);
        assert!(layouts.iter().any(|l| l.columns == 6 && l.rows == 6));
        assert!(layouts.iter().any(|l| l.columns == 4 && l.rows == 9));
        assert!(layouts.iter().all(|l| l.exact));
    }

    #[test]
    fn test_squareness_ordering() {
        let layouts = grid_layouts(36, false);
        assert!(
            layouts
                .windows(2)
                .all(|w| w[0].squareness() <= w[1].squareness())
        );
        // 6x6 is the most square
        assert_eq!(layouts[0].columns, 6);
        assert_eq!(layouts[0].rows, 6);
    }

    #[test]
    fn test_prime_falls_back_to_common_widths() {
        let layouts = grid_layouts(17, false);
        assert!(!layouts.is_empty());
        assert!(layouts.iter().all(|l| !l.exact));
        for l in &layouts {
            assert!(COMMON_WIDTHS.contains(&l.columns));
            assert_eq!(l.rows, 17usize.div_ceil(l.columns));
        }
    }

    #[test]
    fn test_rich_count_has_no_fallbacks() {
        // 240 has plenty of exact pairs, so no ragged layouts appear
        let layouts = grid_layouts(240, false);
        assert!(layouts.len() >= MIN_EXACT_PAIRS);
        assert!(layouts.iter().all(|l| l.exact));
    }

    #[test]
    fn test_include_common_widths_flag() {
        let layouts = grid_layouts(240, true);
        assert!(layouts.iter().any(|l| !l.exact));
    }

    #[test]
    fn test_tiny_counts() {
        assert!(grid_layouts(0, false).is_empty());
        assert!(grid_layouts(1, false).is_empty());
    }

    #[test]
    fn test_suggest_better_counts() {
        // 17 is prime; nearby 16 and 18 factor much better
        let suggestions = suggest_better_counts(17, 3);
        assert_eq!(suggestions.len(), 7);
        let best = suggestions[0];
        assert!(best.factor_pairs > 0);
        assert!(best.count != 17 || best.factor_pairs == 0);
        // Descending by factor count
        assert!(
            suggestions
                .windows(2)
                .all(|w| w[0].factor_pairs >= w[1].factor_pairs)
        );
    }

    #[test]
    fn test_suggest_clamps_low_end() {
        let suggestions = suggest_better_counts(3, 10);
        assert!(suggestions.iter().all(|s| s.count >= 2));
    }
}
