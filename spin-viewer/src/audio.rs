//! Music playback using kira

use anyhow::{Context, Result};
use kira::{
    AudioManager, AudioManagerSettings, DefaultBackend,
    sound::static_sound::{StaticSoundData, StaticSoundHandle},
    Tween,
};
use spin_core::{Track, TrackPlayer};
use std::collections::HashMap;
use std::path::Path;

/// Audio player wrapper holding one looping sound per track
pub struct AudioPlayer {
    /// `None` when no output device could be opened
    manager: Option<AudioManager<DefaultBackend>>,
    tracks: HashMap<Track, StaticSoundData>,
    handles: HashMap<Track, StaticSoundHandle>,
}

impl AudioPlayer {
    /// Create a new audio player, falling back to a silent one
    pub fn new() -> Self {
        let manager = match AudioManager::<DefaultBackend>::new(AudioManagerSettings::default()) {
            Ok(manager) => Some(manager),
            Err(e) => {
                log::warn!("Failed to create audio manager: {}. Playback will be silent.", e);
                None
            }
        };

        Self {
            manager,
            tracks: HashMap::new(),
            handles: HashMap::new(),
        }
    }

    /// Load a track from a file; it loops until stopped
    pub fn load<P: AsRef<Path>>(&mut self, track: Track, path: P) -> Result<()> {
        let sound_data = StaticSoundData::from_file(path.as_ref())
            .with_context(|| format!("Failed to load {} track", track))?;
        self.tracks.insert(track, sound_data.loop_region(..));
        Ok(())
    }

    /// Check if any track is loaded and can be heard
    pub fn has_audio(&self) -> bool {
        self.manager.is_some() && !self.tracks.is_empty()
    }
}

impl TrackPlayer for AudioPlayer {
    fn play(&mut self, track: Track) -> Result<()> {
        let manager = self
            .manager
            .as_mut()
            .context("No audio output available")?;
        let sound_data = self
            .tracks
            .get(&track)
            .with_context(|| format!("No {} track loaded", track))?;

        // Always restart from the top
        if let Some(mut old) = self.handles.remove(&track) {
            old.stop(Tween::default());
        }

        let handle = manager
            .play(sound_data.clone())
            .with_context(|| format!("Failed to play {} track", track))?;
        self.handles.insert(track, handle);
        Ok(())
    }

    fn stop(&mut self, track: Track) {
        if let Some(mut handle) = self.handles.remove(&track) {
            handle.stop(Tween::default());
        }
    }
}
