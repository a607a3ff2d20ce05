//! Running tallies shown beside the roads on the results dashboard.
//!
//! Same contract as the roads: a pure fold over the complete outcome list,
//! recomputed from scratch on every change.

use serde::{Deserialize, Serialize};

use crate::outcome::{RoundOutcome, Winner};

/// Win/marker counters over a history of settled rounds.
///
/// Markers are counted independently of the winner: a tie carrying a pair
/// still bumps the pair counter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundStats {
    pub player_wins: u32,
    pub banker_wins: u32,
    pub ties: u32,
    pub player_pairs: u32,
    pub banker_pairs: u32,
    pub player_naturals: u32,
    pub banker_naturals: u32,
    pub super_sixes: u32,
}

impl RoundStats {
    /// Tally a complete history.
    #[must_use]
    pub fn tally(outcomes: &[RoundOutcome]) -> Self {
        let mut stats = Self::default();
        for outcome in outcomes {
            match outcome.winner {
                Winner::Player => stats.player_wins += 1,
                Winner::Banker => stats.banker_wins += 1,
                Winner::Tie => stats.ties += 1,
            }
            stats.player_pairs += u32::from(outcome.player_pair);
            stats.banker_pairs += u32::from(outcome.banker_pair);
            stats.player_naturals += u32::from(outcome.player_natural);
            stats.banker_naturals += u32::from(outcome.banker_natural);
            stats.super_sixes += u32::from(outcome.is_super_six);
        }
        stats
    }

    /// Total settled rounds, ties included.
    #[must_use]
    pub const fn rounds(&self) -> u32 {
        self.player_wins + self.banker_wins + self.ties
    }

    /// Naturals on either hand.
    #[must_use]
    pub const fn naturals(&self) -> u32 {
        self.player_naturals + self.banker_naturals
    }
}
