use std::cell::Cell;

use wasm_bindgen::JsValue;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::HtmlAudioElement;

use hanoi_core::{ListenerError, PuzzleEvent, PuzzleListener};

const BACKGROUND_VOLUME: f64 = 0.3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Sound {
    Pickup,
    Drop,
    Win,
    Background,
}

impl Sound {
    fn src(self) -> &'static str {
        match self {
            Sound::Pickup => "/audio/pickup.mp3",
            Sound::Drop => "/audio/drop.mp3",
            Sound::Win => "/audio/win.mp3",
            Sound::Background => "/audio/background.mp3",
        }
    }
}

/// Maps a puzzle event to its effect, if it has one.
pub(crate) fn sound_for_event(event: &PuzzleEvent) -> Option<Sound> {
    match event {
        PuzzleEvent::DiskPickedUp { .. } => Some(Sound::Pickup),
        PuzzleEvent::MoveApplied { .. } => Some(Sound::Drop),
        PuzzleEvent::Solved { .. } => Some(Sound::Win),
        PuzzleEvent::Reset { .. } => None,
    }
}

pub(crate) struct SoundBoard {
    pickup: Option<HtmlAudioElement>,
    drop: Option<HtmlAudioElement>,
    win: Option<HtmlAudioElement>,
    background: Option<HtmlAudioElement>,
    muted: Cell<bool>,
}

impl SoundBoard {
    pub(crate) fn new(muted: bool) -> Self {
        let background = load(Sound::Background);
        if let Some(track) = background.as_ref() {
            track.set_loop(true);
            track.set_volume(BACKGROUND_VOLUME);
        }
        Self {
            pickup: load(Sound::Pickup),
            drop: load(Sound::Drop),
            win: load(Sound::Win),
            background,
            muted: Cell::new(muted),
        }
    }

    fn element(&self, sound: Sound) -> Option<&HtmlAudioElement> {
        match sound {
            Sound::Pickup => self.pickup.as_ref(),
            Sound::Drop => self.drop.as_ref(),
            Sound::Win => self.win.as_ref(),
            Sound::Background => self.background.as_ref(),
        }
    }

    /// Rewinds and plays an effect. Does nothing while muted.
    pub(crate) fn play(&self, sound: Sound) {
        if self.muted.get() {
            return;
        }
        let Some(element) = self.element(sound) else {
            return;
        };
        element.set_current_time(0.0);
        start(element, sound);
    }

    pub(crate) fn start_background(&self) {
        if self.muted.get() {
            return;
        }
        if let Some(track) = self.background.as_ref() {
            start(track, Sound::Background);
        }
    }

    pub(crate) fn set_muted(&self, muted: bool) {
        if self.muted.replace(muted) == muted {
            return;
        }
        if muted {
            if let Some(track) = self.background.as_ref() {
                pause(track, Sound::Background);
            }
        } else {
            self.start_background();
        }
    }

    pub(crate) fn stop_all(&self) {
        for sound in [Sound::Pickup, Sound::Drop, Sound::Win, Sound::Background] {
            if let Some(element) = self.element(sound) {
                pause(element, sound);
            }
        }
    }
}

impl Drop for SoundBoard {
    fn drop(&mut self) {
        self.stop_all();
    }
}

impl PuzzleListener for SoundBoard {
    fn on_event(&self, event: &PuzzleEvent) -> Result<(), ListenerError> {
        if let Some(sound) = sound_for_event(event) {
            self.play(sound);
        }
        Ok(())
    }
}

fn load(sound: Sound) -> Option<HtmlAudioElement> {
    match HtmlAudioElement::new_with_src(sound.src()) {
        Ok(element) => Some(element),
        Err(err) => {
            gloo::console::warn!("audio unavailable", sound.src(), err);
            None
        }
    }
}

// Autoplay policies reject the promise until the page sees a gesture.
fn start(element: &HtmlAudioElement, sound: Sound) {
    let promise = match element.play() {
        Ok(promise) => promise,
        Err(err) => {
            report("audio playback failed", sound, err);
            return;
        }
    };
    spawn_local(async move {
        if let Err(err) = JsFuture::from(promise).await {
            report("audio playback failed", sound, err);
        }
    });
}

fn pause(element: &HtmlAudioElement, sound: Sound) {
    if let Err(err) = element.pause() {
        report("audio pause failed", sound, err);
    }
}

fn report(message: &str, sound: Sound, err: JsValue) {
    gloo::console::warn!(message, sound.src(), err);
}

#[cfg(test)]
mod tests {
    use super::*;
    use hanoi_core::{DiskSize, PegIndex};

    #[test]
    fn events_map_to_effects() {
        let picked = PuzzleEvent::DiskPickedUp {
            peg: PegIndex::Left,
            disk: DiskSize(1),
        };
        let moved = PuzzleEvent::MoveApplied {
            source: PegIndex::Left,
            target: PegIndex::Right,
            disk: DiskSize(1),
            move_count: 1,
        };
        assert_eq!(sound_for_event(&picked), Some(Sound::Pickup));
        assert_eq!(sound_for_event(&moved), Some(Sound::Drop));
        assert_eq!(
            sound_for_event(&PuzzleEvent::Solved { move_count: 3 }),
            Some(Sound::Win)
        );
        assert_eq!(sound_for_event(&PuzzleEvent::Reset { disk_count: 3 }), None);
    }
}
