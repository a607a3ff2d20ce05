//! Road derivations: bead plate, Big Road, and the derived pattern roads.
//!
//! All derivations are pure functions over the chronological outcome list.
//! Callers normally go through [`crate::engine::RoadEngine`] rather than
//! invoking these directly.

pub mod bead;
pub mod big_road;
pub mod grid;
pub mod tempo;

pub use big_road::{BigRoadCell, BigRoadStreak};
pub use grid::GridPosition;
pub use tempo::{Tempo, TempoRoad, TempoRoadKind};
