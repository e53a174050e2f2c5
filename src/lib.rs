//! # elscan - letter-pattern search engine
//!
//! elscan locates hidden terms inside a body of text by sampling letters at
//! regular or mathematically generated intervals, and by chaining through
//! the nearest successive occurrence of each letter of a term.
//!
//! ## Architecture
//!
//! The crate is organized into these main modules:
//!
//! - [`prepare`] - Raw text to canonical letter sequence + position map
//! - [`search`] - The three search modes (equidistant, sequence, chain)
//! - [`interval`] - Intervening-segment extraction between hit letters
//! - [`grid`] - Rectangular layout advice for visualization
//! - [`output`] - Terminal result formatting
//!
//! ## Quick Start
//!
//! ```
//! use elscan::prepare::prepare;
//! use elscan::search::{Scan, search_equidistant};
//!
//! let text = prepare("A.B:C abc ABC", false).to_uppercase();
//! let summary = search_equidistant(&text, "AAA", 3..=3, Scan::Forward, None);
//!
//! for hit in &summary.hits {
//!     println!("{} at {:?} (skip {})", hit.term, hit.letter_positions, hit.skip);
//! }
//! ```
//!
//! Every operation is a pure function over immutable inputs: no shared
//! state, no I/O, fresh result collections per call. Ranged equidistant
//! searches fan skip values out across rayon tasks and accept a
//! [`search::CancelToken`] so callers can abort long scans cleanly.

pub mod grid;
pub mod interval;
pub mod output;
pub mod prepare;
pub mod search;
