//! Big Road derivation.
//!
//! Each column of the Big Road is one streak: a maximal run of consecutive
//! non-tie outcomes sharing the same winner. Ties never start, end, or
//! split a streak — they are counted and overlaid on the streak in
//! progress. A tie arriving before any non-tie outcome has no streak to
//! attach to and is dropped silently (buffering it until the first non-tie
//! arrives would be the one defensible alternative; this module does not
//! implement it).
//!
//! ## Tie bookkeeping
//!
//! Ties are visible from two directions:
//!
//! - [`BigRoadStreak::tie_count_at_end`] counts ties after the streak's
//!   last cell and before the next streak starts — the trailing overlay.
//! - [`BigRoadCell::tie_count`] counts ties that preceded the cell since
//!   the previous non-tie cell — so a tie that lands mid-streak (same
//!   winner continues afterwards) is re-homed onto the continuing cell.
//!
//! A tie's own pair/natural markers ride along with whichever tie count
//! they belong to (see [`TieMarkers`]); streak cell data is never rewritten
//! by a tie. Renderers cap the overlay iconography at 8 ties, but the
//! counters here are unbounded.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

use super::grid::{self, GridPosition};
use crate::outcome::{RoundOutcome, TieMarkers, Winner};

/// One non-tie outcome's display projection inside a streak.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BigRoadCell {
    /// Player or Banker; never Tie.
    pub winner: Winner,
    pub player_pair: bool,
    pub banker_pair: bool,
    pub is_natural: bool,
    /// Ties between the previous non-tie cell and this one.
    pub tie_count: u32,
    /// Markers carried by those ties.
    pub tie_markers: TieMarkers,
}

impl BigRoadCell {
    fn new(outcome: &RoundOutcome, tie_count: u32, tie_markers: TieMarkers) -> Self {
        Self {
            winner: outcome.winner,
            player_pair: outcome.player_pair,
            banker_pair: outcome.banker_pair,
            is_natural: outcome.is_natural(),
            tie_count,
            tie_markers,
        }
    }
}

/// A maximal run of consecutive same-winner non-tie outcomes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BigRoadStreak {
    /// Player or Banker; never Tie.
    pub winner: Winner,
    /// One cell per non-tie outcome, chronological.
    pub cells: SmallVec<[BigRoadCell; 8]>,
    /// Ties after the last cell and before the next streak starts.
    pub tie_count_at_end: u32,
    /// Markers carried by those trailing ties.
    pub tie_markers: TieMarkers,
}

impl BigRoadStreak {
    fn open(cell: BigRoadCell) -> Self {
        Self {
            winner: cell.winner,
            cells: smallvec![cell],
            tie_count_at_end: 0,
            tie_markers: TieMarkers::default(),
        }
    }

    /// Number of cells (non-tie outcomes) in the streak.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// A streak always holds at least one cell.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Group outcomes into Big Road streaks.
pub fn derive_streaks(outcomes: &[RoundOutcome]) -> Vec<BigRoadStreak> {
    let mut streaks: Vec<BigRoadStreak> = Vec::new();
    // Ties seen since the last non-tie outcome, awaiting the next cell.
    let mut pending_ties: u32 = 0;
    let mut pending_markers = TieMarkers::default();

    for outcome in outcomes {
        if outcome.winner.is_tie() {
            // No streak yet means nothing to attach to: dropped.
            let Some(open) = streaks.last_mut() else { continue };
            open.tie_count_at_end += 1;
            open.tie_markers.absorb(outcome);
            pending_ties += 1;
            pending_markers.absorb(outcome);
            continue;
        }

        let cell = BigRoadCell::new(outcome, pending_ties, pending_markers);
        pending_ties = 0;
        pending_markers = TieMarkers::default();

        match streaks.last_mut() {
            Some(open) if open.winner == outcome.winner => {
                // The ties counted at this streak's end are now interior;
                // they live on the continuing cell instead.
                open.tie_count_at_end = 0;
                open.tie_markers = TieMarkers::default();
                open.cells.push(cell);
            }
            _ => streaks.push(BigRoadStreak::open(cell)),
        }
    }

    streaks
}

/// Place streaks on the grid: one column per streak, rows capped at
/// `max_rows`, overlong streaks tailing along the bottom row.
pub fn layout(streaks: &[BigRoadStreak], max_rows: usize) -> BTreeMap<GridPosition, BigRoadCell> {
    let sizes: Vec<usize> = streaks.iter().map(BigRoadStreak::len).collect();
    let placed = grid::place_columns(&sizes, max_rows);

    let mut cells = BTreeMap::new();
    for (streak, positions) in streaks.iter().zip(&placed) {
        for (cell, pos) in streak.cells.iter().zip(positions) {
            if let Some(pos) = pos {
                cells.insert(*pos, *cell);
            }
        }
    }
    cells
}
