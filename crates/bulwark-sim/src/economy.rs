//! Economy and run state: gold, lives, score, wave counter and pacing.
//!
//! Stored on `SimulationEngine` and handed to systems by reference.

use serde::{Deserialize, Serialize};

use bulwark_core::constants::*;
use bulwark_core::state::{RunView, SaveRecord};

/// Mutable state of one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunState {
    pub gold: u32,
    pub lives: i32,
    pub wave: u32,
    pub score: u64,
    /// Becomes false for good once lives run out.
    pub playing: bool,
    pub paused: bool,
    pub wave_active: bool,
    pub time_scale: f64,
}

impl Default for RunState {
    fn default() -> Self {
        Self {
            gold: START_GOLD,
            lives: START_LIVES,
            wave: 0,
            score: 0,
            playing: true,
            paused: false,
            wave_active: false,
            time_scale: 1.0,
        }
    }
}

impl RunState {
    /// Resume a run from persisted progress.
    pub fn from_record(record: &SaveRecord) -> Self {
        Self {
            gold: record.gold,
            lives: record.lives,
            wave: record.wave,
            score: record.score,
            playing: record.lives > 0,
            ..Self::default()
        }
    }

    pub fn save_record(&self) -> SaveRecord {
        SaveRecord {
            gold: self.gold,
            wave: self.wave,
            lives: self.lives,
            score: self.score,
        }
    }

    /// Deduct `cost` if affordable. Gold is never driven below zero.
    pub fn try_spend(&mut self, cost: u32) -> bool {
        match self.gold.checked_sub(cost) {
            Some(left) => {
                self.gold = left;
                true
            }
            None => false,
        }
    }

    pub fn earn(&mut self, gold: u32) {
        self.gold = self.gold.saturating_add(gold);
    }

    /// Lose one life. Returns `true` on the transition into game over.
    pub fn lose_life(&mut self) -> bool {
        self.lives -= 1;
        if self.lives <= 0 && self.playing {
            self.playing = false;
            return true;
        }
        false
    }

    /// Flip between 1x and fast speed. Returns the new scale.
    pub fn toggle_time_scale(&mut self) -> f64 {
        self.time_scale = if self.time_scale == 1.0 {
            FAST_TIME_SCALE
        } else {
            1.0
        };
        self.time_scale
    }

    /// Whether systems should run this tick.
    pub fn is_running(&self) -> bool {
        self.playing && !self.paused
    }

    /// Gold awarded for clearing the current wave.
    pub fn wave_bonus(&self) -> u32 {
        WAVE_BONUS_BASE + self.wave * WAVE_BONUS_PER_WAVE
    }

    pub fn view(&self) -> RunView {
        RunView {
            gold: self.gold,
            lives: self.lives,
            wave: self.wave,
            score: self.score,
            playing: self.playing,
            paused: self.paused,
            wave_active: self.wave_active,
            time_scale: self.time_scale,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_a_fresh_run() {
        let run = RunState::default();
        assert_eq!(run.gold, 200);
        assert_eq!(run.lives, 20);
        assert_eq!(run.wave, 0);
        assert_eq!(run.score, 0);
        assert!(run.playing);
        assert!(!run.wave_active);
        assert_eq!(run.time_scale, 1.0);
    }

    #[test]
    fn spend_refuses_overdraft() {
        let mut run = RunState::default();
        assert!(!run.try_spend(201));
        assert_eq!(run.gold, 200);
        assert!(run.try_spend(200));
        assert_eq!(run.gold, 0);
    }

    #[test]
    fn last_life_ends_the_run_once() {
        let mut run = RunState {
            lives: 2,
            ..RunState::default()
        };
        assert!(!run.lose_life());
        assert!(run.playing);
        assert!(run.lose_life());
        assert!(!run.playing);
        assert!(!run.lose_life(), "already over");
        assert_eq!(run.lives, -1);
    }

    #[test]
    fn time_scale_toggles_between_one_and_two() {
        let mut run = RunState::default();
        assert_eq!(run.toggle_time_scale(), 2.0);
        assert_eq!(run.toggle_time_scale(), 1.0);
    }

    #[test]
    fn wave_bonus_grows_by_ten() {
        let mut run = RunState::default();
        run.wave = 1;
        assert_eq!(run.wave_bonus(), 90);
        run.wave = 7;
        assert_eq!(run.wave_bonus(), 150);
    }

    #[test]
    fn record_round_trip() {
        let record = SaveRecord {
            gold: 512,
            wave: 9,
            lives: 3,
            score: 4200,
        };
        let run = RunState::from_record(&record);
        assert!(run.playing);
        assert!(!run.wave_active);
        assert_eq!(run.save_record(), record);
    }

    #[test]
    fn record_without_lives_is_game_over() {
        let run = RunState::from_record(&SaveRecord {
            lives: 0,
            ..SaveRecord::default()
        });
        assert!(!run.playing);
    }
}
