//! Round lifecycle: the per-frame step and the Idle/Running/Ended machine

use crate::config::GameConfig;
use crate::spin::{self, SpinState};

/// Where a round is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    Idle,
    Running,
    Ended,
}

/// What a single step produced, for the host to display
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepOutcome {
    /// Sprite bucket for the current angle
    pub frame: usize,
    /// New score, only when it changed this step
    pub score_changed: Option<u32>,
    /// Time left in the round in milliseconds
    pub remaining_ms: f64,
    /// The round finished on this step; do not schedule another
    pub ended: bool,
}

/// One timed round of spinning
#[derive(Debug, Clone)]
pub struct Round {
    config: GameConfig,
    state: SpinState,
    phase: RoundPhase,
    /// Timestamp of the first frame, in ms
    start_ts: Option<f64>,
    /// Timestamp of the previous frame, in ms
    last_ts: f64,
    remaining_ms: f64,
}

impl Round {
    pub fn new(config: GameConfig) -> Self {
        let remaining_ms = config.duration_ms as f64;
        Self {
            config,
            state: SpinState::default(),
            phase: RoundPhase::Idle,
            start_ts: None,
            last_ts: 0.0,
            remaining_ms,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> &SpinState {
        &self.state
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == RoundPhase::Running
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    pub fn remaining_ms(&self) -> f64 {
        self.remaining_ms
    }

    /// Seconds left as shown on the HUD
    pub fn seconds_left(&self) -> u64 {
        spin::seconds_left(self.remaining_ms)
    }

    /// Sprite bucket for the current angle
    pub fn frame(&self) -> usize {
        spin::frame_index(self.state.angle, self.config.frames)
    }

    /// Progress through the round as 0.0 to 1.0
    pub fn progress(&self) -> f32 {
        let duration = self.config.duration_ms as f64;
        (1.0 - self.remaining_ms / duration).clamp(0.0, 1.0) as f32
    }

    /// Drop all round state and go back to Idle
    pub fn reset(&mut self) {
        self.state = SpinState::default();
        self.phase = RoundPhase::Idle;
        self.start_ts = None;
        self.last_ts = 0.0;
        self.remaining_ms = self.config.duration_ms as f64;
    }

    /// Begin a fresh round. Returns false if one is already running.
    ///
    /// The clock starts on the first `step`, not here.
    pub fn start(&mut self) -> bool {
        if self.is_running() {
            return false;
        }
        self.reset();
        self.state = SpinState::launched(self.config.initial_velocity);
        self.phase = RoundPhase::Running;
        log::info!(
            "Round started: {} ms, initial velocity {}",
            self.config.duration_ms,
            self.config.initial_velocity
        );
        true
    }

    /// Apply a tap impulse. No-op unless running.
    pub fn tap(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.state.tap(self.config.tap_boost, self.config.max_velocity);
        true
    }

    /// Advance one frame to timestamp `ts` (ms, monotonic).
    ///
    /// Returns `None` when the round is not running.
    pub fn step(&mut self, ts: f64) -> Option<StepOutcome> {
        if !self.is_running() {
            return None;
        }

        let start_ts = match self.start_ts {
            Some(start_ts) => start_ts,
            None => {
                self.start_ts = Some(ts);
                self.last_ts = ts;
                ts
            }
        };

        let dt = spin::clamp_dt(ts - self.last_ts, self.config.max_frame_dt_ms as f64);
        self.last_ts = ts;

        let score_changed = self.state.advance(dt, self.config.damping);

        let elapsed = ts - start_ts;
        self.remaining_ms = (self.config.duration_ms as f64 - elapsed).max(0.0);

        let ended = self.remaining_ms <= 0.0;
        if ended {
            self.phase = RoundPhase::Ended;
            log::info!(
                "Round ended: score {} ({:.1} degrees total)",
                self.state.score,
                self.state.total_angle
            );
        }

        Some(StepOutcome {
            frame: self.frame(),
            score_changed,
            remaining_ms: self.remaining_ms,
            ended,
        })
    }
}
