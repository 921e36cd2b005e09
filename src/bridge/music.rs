//! Music surface: platform music-player pass-throughs.

use super::Bridge;
use crate::facade::PlatformFacade;

impl<F: PlatformFacade> Bridge<F> {
    /// `true` when the platform music player is enabled.
    pub fn music_enabled(&self) -> bool {
        self.facade
            .as_ref()
            .is_some_and(PlatformFacade::music_enabled)
    }

    /// `true` when music is currently playing.
    pub fn music_playing(&self) -> bool {
        self.facade
            .as_ref()
            .is_some_and(PlatformFacade::music_playing)
    }

    /// Current music volume in `0.0..=1.0`.
    pub fn music_volume(&self) -> f32 {
        self.facade
            .as_ref()
            .map_or(0.0, PlatformFacade::music_volume)
    }

    /// Pauses playback.
    pub fn music_pause(&mut self) {
        if let Some(facade) = self.facade.as_mut() {
            facade.music_pause();
        }
    }

    /// Resumes playback.
    pub fn music_play(&mut self) {
        if let Some(facade) = self.facade.as_mut() {
            facade.music_play();
        }
    }

    /// Skips to the next track.
    pub fn music_play_next(&mut self) {
        if let Some(facade) = self.facade.as_mut() {
            facade.music_play_next();
        }
    }

    /// Returns to the previous track.
    pub fn music_play_previous(&mut self) {
        if let Some(facade) = self.facade.as_mut() {
            facade.music_play_previous();
        }
    }

    /// Sets the music volume in `0.0..=1.0`.
    pub fn music_set_volume(&mut self, volume: f32) {
        if let Some(facade) = self.facade.as_mut() {
            facade.music_set_volume(volume);
        }
    }
}
