//! Round-outcome data model and the boundary adapter that produces it.

pub mod adapter;
pub mod record;

pub use adapter::{parse_history, OutcomeError, RawRound};
pub use record::{RoundOutcome, TieMarkers, Winner};
