//! # baccarat-roads
//!
//! Road-derivation engine for live baccarat score boards: the pure
//! transformation from a chronological list of settled rounds to the grids
//! a results dashboard renders — Bead Plate, Big Road (with dragon-tail
//! overflow), and the three derived pattern roads (Big Eye Boy, Small
//! Road, Cockroach Pig).
//!
//! ## Design Principles
//!
//! 1. **Pure and stateless-per-call**: `RoundOutcome[] -> RoadState`,
//!    nothing retained between calls. Appends, undo, and resets all reduce
//!    to "derive again from the new complete list", which sidesteps the
//!    incremental-invalidation bug class entirely.
//!
//! 2. **Validation at the boundary**: raw store/socket records are
//!    narrowed into typed [`RoundOutcome`] values by the adapter; the
//!    derivations assume valid input and never fail.
//!
//! 3. **Degrade, never crash**: the documented degenerate cases (leading
//!    ties, collision slides past the top row) drop or clip decorations.
//!    A live display must survive any legal round sequence.
//!
//! ## Modules
//!
//! - `outcome`: round records, tie markers, the raw-record adapter
//! - `roads`: bead plate, Big Road, tempo roads, shared grid placement
//! - `stats`: dashboard win/marker tallies
//! - `engine`: configuration and the `derive` entry point
//!
//! ## Example
//!
//! ```
//! use baccarat_roads::{RoadEngine, RoundOutcome, Winner};
//!
//! let history = vec![
//!     RoundOutcome::plain(Winner::Player),
//!     RoundOutcome::plain(Winner::Player),
//!     RoundOutcome::plain(Winner::Tie),
//!     RoundOutcome::plain(Winner::Banker),
//! ];
//!
//! let state = RoadEngine::default().derive(&history);
//! assert_eq!(state.bead_plate.len(), 4);
//! assert_eq!(state.big_road.len(), 2);
//! assert_eq!(state.big_road[0].tie_count_at_end, 1);
//! ```

pub mod engine;
pub mod outcome;
pub mod roads;
pub mod stats;

// Re-export commonly used types
pub use crate::engine::{RoadConfig, RoadEngine, RoadState};
pub use crate::outcome::{parse_history, OutcomeError, RawRound, RoundOutcome, TieMarkers, Winner};
pub use crate::roads::{BigRoadCell, BigRoadStreak, GridPosition, Tempo, TempoRoad, TempoRoadKind};
pub use crate::stats::RoundStats;
