//! End-to-end scenarios over the library surface, with hand-computed
//! expectations.

use elscan::grid::{grid_layouts, suggest_better_counts};
use elscan::interval::intervening_segments;
use elscan::prepare::prepare;
use elscan::search::types::{Direction, Scan, SequenceKind};
use elscan::search::{CancelToken, search_chain, search_equidistant, search_sequence};

#[test]
fn preparation_round_trips_into_the_raw_text() {
    let raw = "In the beginning... 42 letters, MIXED case!";
    let text = prepare(raw, false);
    for (i, &offset) in text.position_map.iter().enumerate() {
        let original = raw[offset..].chars().next().unwrap();
        assert!(original.is_alphabetic());
        assert!(original.eq_ignore_ascii_case(&text.letters[i]));
    }
}

#[test]
fn equidistant_scenario_abcabcabc() {
    let text = prepare("ABCABCABC", false);
    let summary = search_equidistant(&text, "AAA", 3..=3, Scan::Forward, None);
    assert_eq!(summary.len(), 1);
    let hit = &summary.hits[0];
    assert_eq!(hit.start_pos, 0);
    assert_eq!(hit.letter_positions, vec![0, 3, 6]);
    assert_eq!(hit.direction, Direction::Forward);
}

#[test]
fn equidistant_hits_satisfy_skip_arithmetic() {
    // Punctuation and case noise must not disturb the letter indexing
    let text = prepare("a-b-c-a-b-c-a-b-c", false).to_uppercase();
    let summary = search_equidistant(&text, "AAA", 1..=4, Scan::Both, None);
    assert!(!summary.is_empty());
    for hit in &summary.hits {
        for w in hit.letter_positions.windows(2) {
            let delta = match hit.direction {
                Direction::Forward => w[1] as i64 - w[0] as i64,
                Direction::Reverse => w[0] as i64 - w[1] as i64,
            };
            assert_eq!(delta, hit.skip as i64);
        }
        let sampled: String = hit
            .letter_positions
            .iter()
            .map(|&p| text.letters[p])
            .collect();
        assert_eq!(sampled, hit.term);
    }
}

#[test]
fn chain_scenario_quick_brown_fox() {
    let text = prepare("THEQUICKBROWNFOX", false);
    let summary = search_chain(&text, "QB", false, 0);
    assert_eq!(summary.len(), 1);
    let path = &summary.paths[0];
    assert_eq!(path.steps[0].position, 4);
    assert_eq!(path.steps[1].position, 7);
    assert_eq!(path.steps[1].interval, 3);
    assert_eq!(path.steps[1].intervening_letters, "UI");

    // The analyzer agrees with the chain's own extraction
    let segments = intervening_segments(&text.letters, &path.positions(), "QB");
    assert_eq!(segments[0].letters, "UI");
}

#[test]
fn chains_are_never_partial() {
    let text = prepare("THEQUICKBROWNFOXJUMPSOVERTHELAZYDOG", false);
    let summary = search_chain(&text, "TOG", false, 0);
    for path in &summary.paths {
        assert_eq!(path.steps.len(), 3);
    }
    // A term whose tail never occurs produces nothing at all
    let none = search_chain(&text, "TQQQ", false, 0);
    assert!(none.is_empty());
}

#[test]
fn grid_17_falls_back_to_common_widths() {
    let layouts = grid_layouts(17, false);
    assert!(!layouts.is_empty());
    for layout in &layouts {
        assert!(!layout.exact);
        assert_eq!(layout.rows, 17usize.div_ceil(layout.columns));
    }
    assert!(
        layouts
            .windows(2)
            .all(|w| w[0].squareness() <= w[1].squareness())
    );
}

#[test]
fn suggest_ranks_nearby_counts_by_factor_richness() {
    let suggestions = suggest_better_counts(17, 5);
    assert!(
        suggestions
            .windows(2)
            .all(|w| w[0].factor_pairs >= w[1].factor_pairs)
    );
    let seventeen = suggestions.iter().find(|s| s.count == 17).unwrap();
    assert_eq!(seventeen.factor_pairs, 0);
}

#[test]
fn square_sequence_rejects_out_of_bounds_starts() {
    // Text of 5 letters; a length-3 square sequence spans start..start+4,
    // so only start 0 is viable
    let text = prepare("ABCDA", false);
    let summary = search_sequence(&text, "ABA", SequenceKind::Square, Scan::Forward);
    assert_eq!(summary.len(), 1);
    assert_eq!(summary.hits[0].letter_positions, vec![0, 1, 4]);
    assert_eq!(summary.hits[0].skip, 0);
}

#[test]
fn cancelled_search_returns_cleanly() {
    let haystack: String = std::iter::repeat("ABCD").take(500).collect();
    let text = prepare(&haystack, false);
    let token = CancelToken::new();
    token.cancel();
    let summary = search_equidistant(&text, "AAA", 1..=50, Scan::Both, Some(&token));
    assert!(summary.is_empty());
    assert_eq!(summary.source_text_length, 2000);
}

#[test]
fn full_pipeline_prepare_search_analyze() {
    let raw = "The quick brown fox jumps over the lazy dog.";
    let text = prepare(raw, false).to_uppercase();
    let summary = search_equidistant(&text, "TO", 1..=10, Scan::Forward, None);
    assert!(!summary.is_empty());
    for hit in &summary.hits {
        let segments = intervening_segments(&text.letters, &hit.letter_positions, &hit.term);
        assert_eq!(segments.len(), hit.letter_positions.len() - 1);
        for segment in &segments {
            assert_eq!(segment.letters.chars().count(), hit.skip - 1);
        }
    }
}
