//! Session score record
//!
//! Counters live for the process lifetime but their content outlives it via
//! the persisted stats file; the loop controller flushes after every
//! mutation.

use serde::{Deserialize, Serialize};

use crate::board::{MatchOutcome, Player};

/// Win/loss/draw/move counters persisted across runs.
///
/// Every field carries `#[serde(default)]` so a record written by an older
/// run with missing keys loads with those counters at zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    #[serde(default)]
    pub wins: u64,
    #[serde(default)]
    pub losses: u64,
    #[serde(default)]
    pub draws: u64,
    #[serde(default)]
    pub moves_played: u64,
}

impl SessionStats {
    /// Count a finished match.
    pub fn record_outcome(&mut self, outcome: MatchOutcome) {
        match outcome {
            MatchOutcome::Win(Player::Bot) => self.wins += 1,
            MatchOutcome::Win(Player::Human) => self.losses += 1,
            MatchOutcome::Draw => self.draws += 1,
        }
    }

    /// Count an executed move.
    pub fn record_move(&mut self) {
        self.moves_played += 1;
    }

    /// Total matches seen to completion.
    pub fn games_played(&self) -> u64 {
        self.wins + self.losses + self.draws
    }
}
