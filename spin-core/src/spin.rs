//! Spin state and the pure helpers that advance it

/// Degrees in a full turn
pub const FULL_TURN: f64 = 360.0;

/// Rotation state of the sprite
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SpinState {
    /// Display angle in degrees (unwrapped; wrap with `wrapped_angle`)
    pub angle: f64,
    /// Signed cumulative rotation since the round started
    pub total_angle: f64,
    /// Signed angular speed in degrees/second
    pub velocity: f64,
    /// Completed full turns, `floor(|total_angle| / 360)`
    pub score: u32,
}

impl SpinState {
    /// Fresh state with an initial push
    pub fn launched(initial_velocity: f64) -> Self {
        Self {
            velocity: initial_velocity,
            ..Self::default()
        }
    }

    /// Damp, integrate and rescore over `dt` seconds.
    ///
    /// Returns the new score when it changed.
    pub fn advance(&mut self, dt: f64, damping: f64) -> Option<u32> {
        self.velocity = damp(self.velocity, damping, dt);

        let delta = self.velocity * dt;
        self.angle += delta;
        self.total_angle += delta;

        let score = score_for(self.total_angle);
        if score != self.score {
            self.score = score;
            Some(score)
        } else {
            None
        }
    }

    /// Add an impulse, keeping the speed within `max_velocity`
    pub fn tap(&mut self, boost: f64, max_velocity: f64) {
        self.velocity = (self.velocity + boost).clamp(-max_velocity, max_velocity);
    }

    /// Display angle wrapped into [0, 360)
    pub fn wrapped_angle(&self) -> f64 {
        wrap_angle(self.angle)
    }
}

/// Frame-rate independent exponential decay
pub fn damp(velocity: f64, damping: f64, dt: f64) -> f64 {
    velocity * (-damping * dt).exp()
}

pub fn score_for(total_angle: f64) -> u32 {
    (total_angle.abs() / FULL_TURN).floor() as u32
}

pub fn wrap_angle(degrees: f64) -> f64 {
    degrees.rem_euclid(FULL_TURN)
}

/// Map an angle onto one of `frames` equal buckets.
///
/// The trailing modulo matters: `rem_euclid` can round a tiny negative
/// angle up to exactly 360.0.
pub fn frame_index(angle: f64, frames: u32) -> usize {
    let frames = frames.max(1) as usize;
    let width = FULL_TURN / frames as f64;
    (wrap_angle(angle) / width).floor() as usize % frames
}

/// Frame delta in seconds, clamped to `[0, max_dt_ms]`
pub fn clamp_dt(delta_ms: f64, max_dt_ms: f64) -> f64 {
    delta_ms.clamp(0.0, max_dt_ms) / 1000.0
}

/// Whole seconds left, rounded up for display
pub fn seconds_left(remaining_ms: f64) -> u64 {
    (remaining_ms.max(0.0) / 1000.0).ceil() as u64
}
