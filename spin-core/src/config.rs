//! Game tunables and their loading/validation

use anyhow::{ensure, Context, Result};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Tunable constants for a round
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Round length in milliseconds
    pub duration_ms: u64,
    /// Number of sprite frames (angular buckets)
    pub frames: u32,
    /// Velocity added per tap, in degrees/second
    pub tap_boost: f64,
    /// Velocity magnitude cap, in degrees/second
    pub max_velocity: f64,
    /// Exponential decay rate, per second
    pub damping: f64,
    /// Velocity seeded when a round starts
    pub initial_velocity: f64,
    /// Largest frame delta fed to the integrator
    pub max_frame_dt_ms: u64,
    /// Extra play attempts after a failed one
    pub audio_retries: u32,
    /// Delay before each audio retry
    pub audio_retry_delay_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            duration_ms: 60_000,
            frames: 8,
            tap_boost: 850.0,
            max_velocity: 4200.0,
            damping: 4.2,
            initial_velocity: 900.0,
            max_frame_dt_ms: 33,
            audio_retries: 1,
            audio_retry_delay_ms: 150,
        }
    }
}

impl GameConfig {
    /// Load a JSON config file; missing fields keep their defaults
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: GameConfig = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<()> {
        ensure!(self.duration_ms > 0, "duration_ms must be positive");
        ensure!(self.frames > 0, "frames must be at least 1");
        ensure!(self.max_frame_dt_ms > 0, "max_frame_dt_ms must be positive");
        for (name, value) in [
            ("tap_boost", self.tap_boost),
            ("max_velocity", self.max_velocity),
            ("damping", self.damping),
        ] {
            ensure!(
                value.is_finite() && value >= 0.0,
                "{} must be a finite non-negative number (got {})",
                name,
                value
            );
        }
        ensure!(
            self.initial_velocity.is_finite() && self.initial_velocity.abs() <= self.max_velocity,
            "initial_velocity {} exceeds max_velocity {}",
            self.initial_velocity,
            self.max_velocity
        );
        Ok(())
    }

    pub fn audio_retry_delay(&self) -> Duration {
        Duration::from_millis(self.audio_retry_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn write_temp(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("spin-core-{}-{}", std::process::id(), name));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn defaults_are_valid() {
        let config = GameConfig::default();
        config.validate().unwrap();
        assert_eq!(config.audio_retry_delay(), Duration::from_millis(150));
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let path = write_temp("partial.json", r#"{ "duration_ms": 30000, "frames": 12 }"#);
        let config = GameConfig::from_path(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(config.duration_ms, 30_000);
        assert_eq!(config.frames, 12);
        assert_eq!(config.tap_boost, 850.0);
        assert_eq!(config.damping, 4.2);
    }

    #[test]
    fn unknown_field_is_rejected() {
        let path = write_temp("unknown.json", r#"{ "gravity": 9.8 }"#);
        let err = GameConfig::from_path(&path).unwrap_err();
        std::fs::remove_file(&path).ok();

        assert!(format!("{:#}", err).contains("gravity"));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = GameConfig::from_path("/definitely/not/here.json").unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }

    #[test]
    fn invalid_values_are_rejected() {
        let zero_frames = GameConfig { frames: 0, ..Default::default() };
        assert!(zero_frames.validate().is_err());

        let negative_damping = GameConfig { damping: -1.0, ..Default::default() };
        let err = negative_damping.validate().unwrap_err();
        assert!(err.to_string().contains("damping"));

        let nan_boost = GameConfig { tap_boost: f64::NAN, ..Default::default() };
        assert!(nan_boost.validate().is_err());

        let fast_start = GameConfig { initial_velocity: 5000.0, ..Default::default() };
        assert!(fast_start.validate().is_err());

        let no_time = GameConfig { duration_ms: 0, ..Default::default() };
        assert!(no_time.validate().is_err());
    }

    #[test]
    fn invalid_file_fails_validation() {
        let path = write_temp("invalid.json", r#"{ "frames": 0 }"#);
        let err = GameConfig::from_path(&path).unwrap_err();
        std::fs::remove_file(&path).ok();

        assert!(err.to_string().contains("frames"));
    }
}
