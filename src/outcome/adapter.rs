//! Boundary adapter for raw upstream records.
//!
//! The results store and the live socket both hand over loosely-typed JSON
//! records. This module validates and narrows them into [`RoundOutcome`]
//! values before they ever reach the engine, so the derivations themselves
//! never have to consider malformed data.
//!
//! Unknown winner strings are rejected; unknown extra fields (round number,
//! timestamps, bookkeeping flags) are ignored.

use serde::Deserialize;
use thiserror::Error;

use super::record::{RoundOutcome, Winner};

/// Error narrowing a raw record into a [`RoundOutcome`].
#[derive(Debug, Error)]
pub enum OutcomeError {
    /// The record's winner string is not `"player"`, `"banker"` or `"tie"`.
    #[error("unrecognized winner value {0:?}")]
    UnknownWinner(String),

    /// The payload is not valid JSON of the expected shape.
    #[error("malformed results payload: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// A raw settled-round record as the store/socket delivers it.
///
/// Marker fields are optional upstream; missing means unset.
#[derive(Clone, Debug, Deserialize)]
pub struct RawRound {
    pub winner: String,
    #[serde(default)]
    pub player_pair: bool,
    #[serde(default)]
    pub banker_pair: bool,
    #[serde(default)]
    pub player_natural: bool,
    #[serde(default)]
    pub banker_natural: bool,
    #[serde(default)]
    pub is_super_six: bool,
}

impl TryFrom<RawRound> for RoundOutcome {
    type Error = OutcomeError;

    fn try_from(raw: RawRound) -> Result<Self, Self::Error> {
        let winner = match raw.winner.as_str() {
            "player" => Winner::Player,
            "banker" => Winner::Banker,
            "tie" => Winner::Tie,
            other => return Err(OutcomeError::UnknownWinner(other.to_string())),
        };

        Ok(RoundOutcome {
            winner,
            player_pair: raw.player_pair,
            banker_pair: raw.banker_pair,
            player_natural: raw.player_natural,
            banker_natural: raw.banker_natural,
            is_super_six: raw.is_super_six,
        })
    }
}

/// Decode a results-store payload (a JSON array of round records, oldest
/// first) into validated outcomes.
///
/// Fails on the first malformed record; a partial history would silently
/// skew every road derived from it.
pub fn parse_history(json: &str) -> Result<Vec<RoundOutcome>, OutcomeError> {
    let raw: Vec<RawRound> = serde_json::from_str(json)?;
    raw.into_iter().map(RoundOutcome::try_from).collect()
}
