//! Sound cues
//!
//! The simulation only names what happened; this module turns those names into
//! clips at the right volume. Playback itself is a backend's job and is never
//! waited on.

use serde::{Deserialize, Serialize};

use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoundEffect {
    /// Player fired a bullet
    ShotFired,
    /// A bullet destroyed a meteor
    HazardDestroyed,
    /// A meteor hit the player
    PlayerHit,
    /// Health reached zero
    PlayerDied,
}

impl SoundEffect {
    pub const ALL: [SoundEffect; 4] = [
        SoundEffect::ShotFired,
        SoundEffect::HazardDestroyed,
        SoundEffect::PlayerHit,
        SoundEffect::PlayerDied,
    ];

    /// Cue name as used in logs and by external players
    pub fn name(&self) -> &'static str {
        match self {
            SoundEffect::ShotFired => "shot_fired",
            SoundEffect::HazardDestroyed => "hazard_destroyed",
            SoundEffect::PlayerHit => "player_hit",
            SoundEffect::PlayerDied => "player_died",
        }
    }

    /// Clip file under `sounds/`
    pub fn file_name(&self) -> &'static str {
        match self {
            SoundEffect::ShotFired => "laserShoot.wav",
            SoundEffect::HazardDestroyed => "explosion (9).wav",
            SoundEffect::PlayerHit => "hitHurt.wav",
            SoundEffect::PlayerDied => "synth.wav",
        }
    }

    /// Per-clip gain before master/SFX volume. Explosions are mixed down.
    pub fn base_gain(&self) -> f32 {
        match self {
            SoundEffect::HazardDestroyed => 0.6,
            _ => 1.0,
        }
    }
}

impl From<GameEvent> for SoundEffect {
    fn from(event: GameEvent) -> Self {
        match event {
            GameEvent::ShotFired => SoundEffect::ShotFired,
            GameEvent::HazardDestroyed => SoundEffect::HazardDestroyed,
            GameEvent::PlayerHit => SoundEffect::PlayerHit,
            GameEvent::PlayerDied => SoundEffect::PlayerDied,
        }
    }
}

/// Anything that accepts sound cues from the game loop
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect);
}

/// Actually produces sound (mixer, device, ...). Fire and forget.
pub trait AudioBackend {
    fn play_clip(&mut self, effect: SoundEffect, volume: f32);
}

/// Audio manager for the game
pub struct AudioManager {
    backend: Option<Box<dyn AudioBackend>>,
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new(None)
    }
}

impl AudioManager {
    pub fn new(backend: Option<Box<dyn AudioBackend>>) -> Self {
        if backend.is_none() {
            log::warn!("No audio backend - sound cues will only be logged");
        }
        Self {
            backend,
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Final volume for a clip
    pub fn effective_volume(&self, effect: SoundEffect) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume * effect.base_gain()
        }
    }
}

impl AudioSink for AudioManager {
    fn play(&mut self, effect: SoundEffect) {
        let vol = self.effective_volume(effect);
        log::debug!("Sound cue {} at volume {:.2}", effect.name(), vol);
        if vol <= 0.0 {
            return;
        }
        if let Some(backend) = self.backend.as_mut() {
            backend.play_clip(effect, vol);
        }
    }
}
