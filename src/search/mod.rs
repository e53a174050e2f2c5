//! Search modes over prepared text.
//!
//! Three searchers share the result model in [`types`]:
//!
//! - [`equidistant`] - constant-skip sampling, exact or ranged skip
//! - [`sequence`] - triangular / square / fibonacci spacing
//! - [`chain`] - greedy nearest-occurrence walk
//!
//! All searchers are pure functions over immutable inputs. Long ranged
//! searches can be aborted cooperatively through a [`CancelToken`]; the
//! searcher stops accumulating and returns whatever it found so far.

pub mod chain;
pub mod equidistant;
pub mod sequence;
pub mod types;

pub use chain::search_chain;
pub use equidistant::search_equidistant;
pub use sequence::{search_sequence, search_sequence_named};
pub use types::*;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Cooperative cancellation flag, checked at per-skip-value boundaries.
///
/// Cloning is cheap; all clones observe the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> CancelToken {
        CancelToken::default()
    }

    /// Request cancellation. Searches already past their last check still
    /// finish their current skip value.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}
