//! Audio routing
//!
//! Two cues: a looping background track and a one-shot death sound. The
//! simulation only emits `GameEvent`s; this module decides what each event
//! means for playback. Actual playback uses `<audio>` elements on the web.

use crate::settings::Settings;
use crate::sim::GameEvent;

/// Audio tracks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCue {
    /// Looping background music
    Music,
    /// Played once when the enemy catches the player
    Death,
}

impl AudioCue {
    pub fn asset_path(&self) -> &'static str {
        match self {
            AudioCue::Music => "images/background-music.mp3",
            AudioCue::Death => "images/death.mp3",
        }
    }

    pub fn looping(&self) -> bool {
        matches!(self, AudioCue::Music)
    }

    /// Playback volume for this cue under `settings`
    pub fn volume(&self, settings: &Settings) -> f32 {
        match self {
            AudioCue::Music => settings.effective_music_volume(),
            AudioCue::Death => settings.effective_sfx_volume(),
        }
    }
}

/// Playback instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCommand {
    /// Start playing (one-shots rewind first)
    Play(AudioCue),
    /// Pause and rewind to the start
    Stop(AudioCue),
}

/// Playback commands for a game event, in the order they should run
pub fn commands_for(event: &GameEvent) -> &'static [AudioCommand] {
    match event {
        GameEvent::RunStarted => &[AudioCommand::Play(AudioCue::Music)],
        GameEvent::PlayerHit => &[
            AudioCommand::Stop(AudioCue::Music),
            AudioCommand::Play(AudioCue::Death),
        ],
        _ => &[],
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::AudioManager;

#[cfg(target_arch = "wasm32")]
mod web {
    use wasm_bindgen::JsValue;
    use web_sys::HtmlAudioElement;

    use super::{AudioCommand, AudioCue, commands_for};
    use crate::settings::Settings;
    use crate::sim::GameEvent;

    /// Audio manager for the game
    pub struct AudioManager {
        music: HtmlAudioElement,
        death: HtmlAudioElement,
        settings: Settings,
    }

    impl AudioManager {
        pub fn new(settings: &Settings) -> Result<Self, JsValue> {
            let music = HtmlAudioElement::new_with_src(AudioCue::Music.asset_path())?;
            music.set_loop(AudioCue::Music.looping());
            let death = HtmlAudioElement::new_with_src(AudioCue::Death.asset_path())?;

            let mut manager = Self {
                music,
                death,
                settings: settings.clone(),
            };
            manager.apply_settings(settings);
            Ok(manager)
        }

        /// Push new volume/mute preferences to both elements
        pub fn apply_settings(&mut self, settings: &Settings) {
            self.settings = settings.clone();
            self.music.set_volume(AudioCue::Music.volume(settings) as f64);
            self.death.set_volume(AudioCue::Death.volume(settings) as f64);
        }

        fn element(&self, cue: AudioCue) -> &HtmlAudioElement {
            match cue {
                AudioCue::Music => &self.music,
                AudioCue::Death => &self.death,
            }
        }

        pub fn run(&self, command: AudioCommand) {
            match command {
                AudioCommand::Play(cue) => {
                    if cue.volume(&self.settings) <= 0.0 {
                        return;
                    }
                    let el = self.element(cue);
                    if !cue.looping() {
                        el.set_current_time(0.0);
                    }
                    // Browsers reject play() before a user gesture; the start
                    // button click counts as one, so a failure here is only logged
                    if let Err(e) = el.play() {
                        log::warn!("Failed to play {:?}: {:?}", cue, e);
                    }
                }
                AudioCommand::Stop(cue) => {
                    let el = self.element(cue);
                    let _ = el.pause();
                    el.set_current_time(0.0);
                }
            }
        }

        /// Route a game event to playback
        pub fn handle(&self, event: &GameEvent) {
            for command in commands_for(event) {
                self.run(*command);
            }
        }

        /// Silence everything (page hidden)
        pub fn stop_all(&self) {
            self.run(AudioCommand::Stop(AudioCue::Music));
            self.run(AudioCommand::Stop(AudioCue::Death));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_start_plays_music() {
        assert_eq!(
            commands_for(&GameEvent::RunStarted),
            &[AudioCommand::Play(AudioCue::Music)]
        );
    }

    #[test]
    fn test_hit_stops_music_then_plays_death() {
        assert_eq!(
            commands_for(&GameEvent::PlayerHit),
            &[AudioCommand::Stop(AudioCue::Music), AudioCommand::Play(AudioCue::Death)]
        );
    }

    #[test]
    fn test_other_events_are_silent() {
        assert!(commands_for(&GameEvent::ScoreChanged(3)).is_empty());
        assert!(commands_for(&GameEvent::GameOverShown { score: 3 }).is_empty());
    }

    #[test]
    fn test_mute_zeroes_volume() {
        let mut settings = Settings::default();
        assert!(AudioCue::Music.volume(&settings) > 0.0);
        settings.muted = true;
        assert_eq!(AudioCue::Music.volume(&settings), 0.0);
        assert_eq!(AudioCue::Death.volume(&settings), 0.0);
    }
}
