//! Settled-round records.
//!
//! One immutable `RoundOutcome` per settled round, ordered by settlement
//! time. The engine assumes it only ever sees valid records; validation of
//! raw upstream data lives in [`crate::outcome::adapter`].

use serde::{Deserialize, Serialize};

/// Who won a settled round.
///
/// Exactly one winner per round. A tie is a winner value of its own, never
/// a flag on a player/banker result. Wire form is lowercase to match the
/// upstream record strings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    Player,
    Banker,
    Tie,
}

impl Winner {
    /// Check whether this is a tie result.
    #[must_use]
    pub const fn is_tie(self) -> bool {
        matches!(self, Winner::Tie)
    }
}

impl std::fmt::Display for Winner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Winner::Player => write!(f, "player"),
            Winner::Banker => write!(f, "banker"),
            Winner::Tie => write!(f, "tie"),
        }
    }
}

/// One settled round.
///
/// The side markers are independent of the winner: a tie may still carry
/// pair flags, and `is_super_six` marks a banker win by six without being
/// a winner value of its own.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundOutcome {
    pub winner: Winner,
    pub player_pair: bool,
    pub banker_pair: bool,
    pub player_natural: bool,
    pub banker_natural: bool,
    pub is_super_six: bool,
}

impl RoundOutcome {
    /// Create an outcome with no side markers set.
    #[must_use]
    pub const fn plain(winner: Winner) -> Self {
        Self {
            winner,
            player_pair: false,
            banker_pair: false,
            player_natural: false,
            banker_natural: false,
            is_super_six: false,
        }
    }

    /// Either hand settled as a natural.
    #[must_use]
    pub const fn is_natural(&self) -> bool {
        self.player_natural || self.banker_natural
    }
}

/// Pair/natural flags carried by tie outcomes.
///
/// A tie never owns a Big Road cell, but its markers are still rendered:
/// they ride along with the tie-count overlay on whichever cell that
/// overlay attaches to, leaving the cell's own data untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TieMarkers {
    pub player_pair: bool,
    pub banker_pair: bool,
    pub natural: bool,
}

impl TieMarkers {
    /// Fold in the markers of one tie outcome.
    pub fn absorb(&mut self, outcome: &RoundOutcome) {
        self.player_pair |= outcome.player_pair;
        self.banker_pair |= outcome.banker_pair;
        self.natural |= outcome.is_natural();
    }

    /// True when no marker is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        !(self.player_pair || self.banker_pair || self.natural)
    }
}
