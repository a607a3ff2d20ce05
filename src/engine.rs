//! The road engine: complete outcome history in, full derived state out.
//!
//! There is no incremental mode. Appends, undo/deletes of recent rounds,
//! and full resets all look the same from here: the caller hands over the
//! new complete, chronologically-ordered list and gets every road back,
//! recomputed. Nothing survives between calls, so there is no cached state
//! that an undo could invalidate.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::outcome::RoundOutcome;
use crate::roads::{bead, big_road, tempo};
use crate::roads::{BigRoadCell, BigRoadStreak, GridPosition, TempoRoad, TempoRoadKind};
use crate::stats::RoundStats;

/// Row caps for the rendered grids.
///
/// Parlor boards vary between 4 and 6 rows per road; 6 is the common
/// full-size shape and the default here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadConfig {
    /// Rows per bead-plate column.
    pub bead_rows: usize,
    /// Rows per Big Road column before the dragon tail kicks in.
    pub big_road_rows: usize,
    /// Rows per derived-road column.
    pub tempo_rows: usize,
}

impl RoadConfig {
    /// Create a config, asserting every cap is at least one row.
    #[must_use]
    pub fn new(bead_rows: usize, big_road_rows: usize, tempo_rows: usize) -> Self {
        assert!(bead_rows > 0, "bead plate needs at least one row");
        assert!(big_road_rows > 0, "big road needs at least one row");
        assert!(tempo_rows > 0, "tempo roads need at least one row");

        Self {
            bead_rows,
            big_road_rows,
            tempo_rows,
        }
    }
}

impl Default for RoadConfig {
    fn default() -> Self {
        Self::new(6, 6, 6)
    }
}

/// Everything the display surfaces consume, derived from one history.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadState {
    /// Dense chronological grid; one cell per round, ties included.
    pub bead_plate: BTreeMap<GridPosition, RoundOutcome>,
    /// Big Road streaks, chronological.
    pub big_road: Vec<BigRoadStreak>,
    /// Big Road cells by grid position.
    pub big_road_layout: BTreeMap<GridPosition, BigRoadCell>,
    pub big_eye_boy: TempoRoad,
    pub small_road: TempoRoad,
    pub cockroach_pig: TempoRoad,
    /// Dashboard counters for the same history.
    pub stats: RoundStats,
}

impl RoadState {
    /// True when no round has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bead_plate.is_empty()
    }
}

/// Stateless-per-call derivation of [`RoadState`] from an outcome history.
#[derive(Clone, Copy, Debug, Default)]
pub struct RoadEngine {
    config: RoadConfig,
}

impl RoadEngine {
    /// Create an engine with the given row caps.
    #[must_use]
    pub fn new(config: RoadConfig) -> Self {
        Self { config }
    }

    /// The engine's row caps.
    #[must_use]
    pub fn config(&self) -> &RoadConfig {
        &self.config
    }

    /// Derive every road from the complete, oldest-first outcome list.
    ///
    /// Deterministic: the same input always yields the same `RoadState`,
    /// down to serialized bytes.
    #[must_use]
    pub fn derive(&self, outcomes: &[RoundOutcome]) -> RoadState {
        let bead_plate = bead::derive(outcomes, self.config.bead_rows);
        let streaks = big_road::derive_streaks(outcomes);
        let big_road_layout = big_road::layout(&streaks, self.config.big_road_rows);

        let big_eye_boy = tempo::derive(&streaks, TempoRoadKind::BigEyeBoy, self.config.tempo_rows);
        let small_road = tempo::derive(&streaks, TempoRoadKind::SmallRoad, self.config.tempo_rows);
        let cockroach_pig =
            tempo::derive(&streaks, TempoRoadKind::CockroachPig, self.config.tempo_rows);

        RoadState {
            bead_plate,
            big_road: streaks,
            big_road_layout,
            big_eye_boy,
            small_road,
            cockroach_pig,
            stats: RoundStats::tally(outcomes),
        }
    }
}
