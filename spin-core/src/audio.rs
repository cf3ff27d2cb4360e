//! Music contract and best-effort playback with a single retry

use crate::config::GameConfig;
use anyhow::Result;
use std::fmt;
use std::time::Duration;

/// Background music tracks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Track {
    /// Start screen loop
    Menu,
    /// Played while a round runs
    Game,
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Track::Menu => write!(f, "menu"),
            Track::Game => write!(f, "game"),
        }
    }
}

/// Something that can play and stop the music tracks
pub trait TrackPlayer {
    /// Start `track` from the beginning; may be refused by the host
    fn play(&mut self, track: Track) -> Result<()>;

    /// Stop `track`; failures are the implementation's to swallow
    fn stop(&mut self, track: Track);
}

/// How often and how patiently to retry a refused play
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Extra attempts after the first
    pub retries: u32,
    /// Wait before each retry
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            retries: 1,
            delay: Duration::from_millis(150),
        }
    }
}

impl RetryPolicy {
    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            retries: config.audio_retries,
            delay: config.audio_retry_delay(),
        }
    }
}

/// Try to play `track`, retrying per `policy`.
///
/// Returns whether the track is playing. Never fails: once the retries are
/// used up the game just carries on without music.
pub fn play_with_retry<P, S>(player: &mut P, track: Track, policy: RetryPolicy, mut sleep: S) -> bool
where
    P: TrackPlayer + ?Sized,
    S: FnMut(Duration),
{
    let attempts = policy.retries + 1;
    for attempt in 1..=attempts {
        match player.play(track) {
            Ok(()) => return true,
            Err(e) => {
                log::warn!(
                    "Failed to play {} track (attempt {}/{}): {:#}",
                    track,
                    attempt,
                    attempts,
                    e
                );
                if attempt < attempts {
                    sleep(policy.delay);
                }
            }
        }
    }
    log::warn!("Giving up on {} track, continuing without music", track);
    false
}
