//! Bead plate derivation.
//!
//! The simplest road: a dense, gapless chronological fill. Every outcome,
//! ties included, gets its own cell — outcome `i` lands at column `i / R`,
//! row `i % R`. No tie-collapsing, no pattern logic; the other roads must
//! agree with this one on round ordering and count.

use std::collections::BTreeMap;

use super::grid::GridPosition;
use crate::outcome::RoundOutcome;

/// Derive the bead plate with `rows` cells per column.
pub fn derive(outcomes: &[RoundOutcome], rows: usize) -> BTreeMap<GridPosition, RoundOutcome> {
    debug_assert!(rows > 0);

    outcomes
        .iter()
        .enumerate()
        .map(|(i, outcome)| (GridPosition::new(i / rows, i % rows), *outcome))
        .collect()
}
