//! Grid vocabulary shared by every road.
//!
//! All rendered roads address cells by `(column, row)`. Big Road and the
//! three tempo roads also share one placement routine: each run-length
//! group occupies its own column, filling rows top-to-bottom up to a cap,
//! with overlong groups continuing rightward along the bottom row (the
//! "dragon tail"). A cell whose target is already taken slides diagonally
//! up-and-right until a free position is found; a slide that would pass
//! above row 0 drops the cell instead of corrupting the grid.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// One cell address in a rendered road, zero-based.
///
/// Within one road no two cells share a position. Ordered column-major so
/// grid maps iterate (and serialize) deterministically.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GridPosition {
    pub column: usize,
    pub row: usize,
}

impl GridPosition {
    /// Create a position.
    #[must_use]
    pub const fn new(column: usize, row: usize) -> Self {
        Self { column, row }
    }
}

impl std::fmt::Display for GridPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.column, self.row)
    }
}

/// Place run-length groups on a row-capped grid.
///
/// Group `g` homes at column `g` (column indices are strictly increasing,
/// one per group, never reused). Cell `j` of a group targets row `j`;
/// cells past the cap target `(g + j - max_rows + 1, max_rows - 1)`,
/// tailing rightward along the bottom row.
///
/// Returns one position per cell, in group order; `None` marks a cell
/// dropped because its collision slide ran off the top of the grid.
pub(crate) fn place_columns(group_sizes: &[usize], max_rows: usize) -> Vec<Vec<Option<GridPosition>>> {
    debug_assert!(max_rows > 0);

    let mut occupied: FxHashSet<GridPosition> = FxHashSet::default();
    let mut placements = Vec::with_capacity(group_sizes.len());

    for (group, &size) in group_sizes.iter().enumerate() {
        let mut cells = Vec::with_capacity(size);
        for j in 0..size {
            let target = if j < max_rows {
                GridPosition::new(group, j)
            } else {
                GridPosition::new(group + j - max_rows + 1, max_rows - 1)
            };
            cells.push(settle(target, &mut occupied));
        }
        placements.push(cells);
    }

    placements
}

/// Slide a colliding cell up-and-right until a free position is found.
fn settle(target: GridPosition, occupied: &mut FxHashSet<GridPosition>) -> Option<GridPosition> {
    let mut pos = target;
    loop {
        if occupied.insert(pos) {
            return Some(pos);
        }
        if pos.row == 0 {
            warn!(column = target.column, row = target.row, "cell dropped: slide passed row 0");
            return None;
        }
        pos = GridPosition::new(pos.column + 1, pos.row - 1);
    }
}
