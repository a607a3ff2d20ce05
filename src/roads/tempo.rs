//! Derived pattern roads: Big Eye Boy, Small Road, Cockroach Pig.
//!
//! All three run the same comparison over the finished Big Road streaks,
//! differing only in their lookback `k` (1, 2, 3). Streaks at index < k+1
//! have no defined comparison and contribute nothing — not even a
//! placeholder. For a contributing streak at index `i`:
//!
//! - its first cell compares `len(streak[i-1])` with `len(streak[i-1-k])`:
//!   equal is Stable, unequal is Unstable;
//! - its cell at row `j > 0` is Unstable exactly when `streak[i-k]` has
//!   `j` cells, Stable otherwise.
//!
//! The flat tempo sequence is then regrouped into columns by the same
//! run-length rule as the Big Road itself (new column on tempo change) and
//! placed with the shared dragon-tail layout.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::big_road::BigRoadStreak;
use super::grid::{self, GridPosition};

/// Pattern-repetition classification of one derived-road cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tempo {
    Stable,
    Unstable,
}

/// Which derived road, i.e. which lookback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TempoRoadKind {
    BigEyeBoy,
    SmallRoad,
    CockroachPig,
}

impl TempoRoadKind {
    /// Streak-index lookback used by this road's comparison.
    #[must_use]
    pub const fn lookback(self) -> usize {
        match self {
            TempoRoadKind::BigEyeBoy => 1,
            TempoRoadKind::SmallRoad => 2,
            TempoRoadKind::CockroachPig => 3,
        }
    }
}

/// One derived road: the flat chronological tempo sequence and its grid
/// layout.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TempoRoad {
    pub values: Vec<Tempo>,
    pub layout: BTreeMap<GridPosition, Tempo>,
}

impl TempoRoad {
    /// True when no streak contributed a tempo value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Derive one pattern road from the finished Big Road streaks.
pub fn derive(streaks: &[BigRoadStreak], kind: TempoRoadKind, max_rows: usize) -> TempoRoad {
    let k = kind.lookback();
    let mut values = Vec::new();

    for i in (k + 1)..streaks.len() {
        for j in 0..streaks[i].len() {
            let tempo = if j == 0 {
                if streaks[i - 1].len() == streaks[i - 1 - k].len() {
                    Tempo::Stable
                } else {
                    Tempo::Unstable
                }
            } else if streaks[i - k].len() == j {
                Tempo::Unstable
            } else {
                Tempo::Stable
            };
            values.push(tempo);
        }
    }

    let layout = layout_values(&values, max_rows);
    TempoRoad { values, layout }
}

/// Run-length regroup the tempo sequence and place it on the grid.
fn layout_values(values: &[Tempo], max_rows: usize) -> BTreeMap<GridPosition, Tempo> {
    let mut group_sizes: Vec<usize> = Vec::new();
    let mut last: Option<Tempo> = None;
    for &value in values {
        match group_sizes.last_mut() {
            Some(size) if last == Some(value) => *size += 1,
            _ => {
                group_sizes.push(1);
                last = Some(value);
            }
        }
    }

    let placed = grid::place_columns(&group_sizes, max_rows);
    values
        .iter()
        .zip(placed.into_iter().flatten())
        .filter_map(|(&value, pos)| pos.map(|pos| (pos, value)))
        .collect()
}
