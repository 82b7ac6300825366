//! # Sort Keys
//!
//! This module defines [`SortKey`], the opaque numeric value that determines
//! display order among siblings. Keys are finite `f64` values; the engine is
//! the only producer of new keys, so finiteness is an invariant everywhere
//! else in the system.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt::{self, Display};

/// Numeric sort key with a total order.
///
/// Wraps `f64` but compares via [`f64::total_cmp`], so keys are usable as an
/// `Ord` sort criterion. [`SortKey::new`] rejects non-finite input; every
/// key the engine computes is checked finite before it is returned.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SortKey(f64);

impl SortKey {
    /// Key handed out for the first item of an empty group.
    pub const BASELINE: SortKey = SortKey(0.0);

    /// Increment applied when only one positional neighbor exists.
    pub const STEP: f64 = 1.0;

    /// Spacing used by renumbering to restore precision headroom.
    pub const RENUMBER_STEP: f64 = 10.0;

    /// Creates a key from a raw value, rejecting NaN and infinities.
    pub fn new(value: f64) -> Option<Self> {
        value.is_finite().then_some(Self(value))
    }

    /// The underlying numeric value.
    pub fn value(self) -> f64 {
        self.0
    }

    // Internal constructor for engine arithmetic. Results are validated
    // against the neighbor bounds before they escape the engine.
    pub(crate) fn raw(value: f64) -> Self {
        Self(value)
    }
}

impl PartialEq for SortKey {
    fn eq(&self, other: &Self) -> bool {
        self.0.total_cmp(&other.0) == Ordering::Equal
    }
}

impl Eq for SortKey {}

impl PartialOrd for SortKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SortKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
