//! Background audio.
//!
//! [`AudioController`] is the only owner of the output device. It is created
//! once at application start, handed by `&mut` to the UI code that needs it,
//! and torn down on exit (or drop). Playback failures never propagate to the
//! caller: they are logged and the controller state is left as it was.

#[cfg(feature = "audio")]
mod rodio_backend;

#[cfg(feature = "audio")]
pub use rodio_backend::RodioBackend;

use std::path::{Path, PathBuf};

use crate::error::AudioError;

pub const DEFAULT_VOLUME: f32 = 0.4;

/// Platform seam for audio output.
pub trait AudioBackend {
    /// Open `source` as the looping background track, initially paused.
    fn load_background(&mut self, source: &Path) -> Result<(), AudioError>;
    /// Start or resume the background track.
    fn play(&mut self) -> Result<(), AudioError>;
    fn pause(&mut self);
    fn set_volume(&mut self, volume: f32);
    /// Play `source` once on an independent voice so overlapping triggers
    /// do not cut each other off.
    fn play_one_shot(&mut self, source: &Path, volume: f32) -> Result<(), AudioError>;
    /// Stop playback and release the background source.
    fn stop(&mut self);
}

/// Backend with no output device. Loading always fails, so the controller
/// stays silent.
#[derive(Debug, Default)]
pub struct NullBackend;

impl AudioBackend for NullBackend {
    fn load_background(&mut self, _source: &Path) -> Result<(), AudioError> {
        Err(AudioError::NoOutput("audio disabled".into()))
    }
    fn play(&mut self) -> Result<(), AudioError> {
        Err(AudioError::NoOutput("audio disabled".into()))
    }
    fn pause(&mut self) {}
    fn set_volume(&mut self, _volume: f32) {}
    fn play_one_shot(&mut self, _source: &Path, _volume: f32) -> Result<(), AudioError> {
        Ok(())
    }
    fn stop(&mut self) {}
}

/// File locations of the three sounds.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioSources {
    pub background: PathBuf,
    /// Substituted once if `background` cannot be loaded.
    pub fallback: PathBuf,
    pub click: PathBuf,
}

impl AudioSources {
    /// Standard layout under an asset root.
    pub fn under(root: &Path) -> Self {
        let dir = root.join("audio");
        Self {
            background: dir.join("ambient.mp3"),
            fallback: dir.join("deep-space.mp3"),
            click: dir.join("click.mp3"),
        }
    }
}

/// Which background source ended up loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Track {
    Primary,
    Fallback,
    Unavailable,
}

pub struct AudioController {
    backend: Box<dyn AudioBackend>,
    sources: AudioSources,
    track: Track,
    playing: bool,
    volume: f32,
    disposed: bool,
}

impl AudioController {
    /// Load the background track, substituting the fallback source at most
    /// once.
    pub fn new(mut backend: Box<dyn AudioBackend>, sources: AudioSources, volume: f32) -> Self {
        let volume = if volume.is_nan() { DEFAULT_VOLUME } else { volume.clamp(0.0, 1.0) };
        backend.set_volume(volume);

        let track = match backend.load_background(&sources.background) {
            Ok(()) => {
                log::info!("background audio loaded: {}", sources.background.display());
                Track::Primary
            }
            Err(AudioError::NoOutput(reason)) => {
                log::warn!("audio output unavailable: {reason}");
                Track::Unavailable
            }
            Err(e) => {
                log::error!("error loading audio: {e}");
                log::info!("attempting fallback audio: {}", sources.fallback.display());
                match backend.load_background(&sources.fallback) {
                    Ok(()) => Track::Fallback,
                    Err(e) => {
                        log::error!("fallback audio failed, staying silent: {e}");
                        Track::Unavailable
                    }
                }
            }
        };

        Self {
            backend,
            sources,
            track,
            playing: false,
            volume,
            disposed: false,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    pub fn track(&self) -> Track {
        self.track
    }

    pub fn is_available(&self) -> bool {
        !self.disposed && self.track != Track::Unavailable
    }

    /// Flip between playing and paused. A rejected start leaves the state
    /// untouched.
    pub fn toggle(&mut self) {
        if !self.is_available() {
            log::debug!("audio toggle ignored: no background track");
            return;
        }
        if self.playing {
            self.backend.pause();
            self.playing = false;
            log::info!("audio paused");
        } else {
            match self.backend.play() {
                Ok(()) => {
                    self.playing = true;
                    log::info!("audio playing");
                }
                Err(e) => log::error!("audio playback prevented: {e}"),
            }
        }
    }

    /// Set the volume, clamped to [0, 1]. NaN is ignored. Independent of
    /// the play/pause state.
    pub fn set_volume(&mut self, volume: f32) {
        if volume.is_nan() {
            return;
        }
        self.volume = volume.clamp(0.0, 1.0);
        if !self.disposed {
            self.backend.set_volume(self.volume);
        }
    }

    /// Play the click sound once. Failures are logged only.
    pub fn play_one_shot(&mut self) {
        if self.disposed {
            return;
        }
        if let Err(e) = self.backend.play_one_shot(&self.sources.click, self.volume) {
            log::error!("click sound playback prevented: {e}");
        }
    }

    /// Stop playback and release the backend. Idempotent.
    pub fn shutdown(&mut self) {
        if self.disposed {
            return;
        }
        self.backend.stop();
        self.playing = false;
        self.disposed = true;
        log::debug!("audio controller shut down");
    }
}

impl Drop for AudioController {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Default)]
    struct Calls {
        loads: Vec<PathBuf>,
        plays: usize,
        pauses: usize,
        one_shots: usize,
        stops: usize,
        volume: Option<f32>,
    }

    struct MockBackend {
        calls: Rc<RefCell<Calls>>,
        fail_loads: usize,
        reject_play: bool,
    }

    impl MockBackend {
        fn new(fail_loads: usize, reject_play: bool) -> (Box<dyn AudioBackend>, Rc<RefCell<Calls>>) {
            let calls = Rc::new(RefCell::new(Calls::default()));
            let backend = Box::new(Self { calls: Rc::clone(&calls), fail_loads, reject_play });
            (backend, calls)
        }
    }

    impl AudioBackend for MockBackend {
        fn load_background(&mut self, source: &Path) -> Result<(), AudioError> {
            self.calls.borrow_mut().loads.push(source.to_path_buf());
            if self.fail_loads > 0 {
                self.fail_loads -= 1;
                return Err(AudioError::Load {
                    path: source.to_path_buf(),
                    reason: "missing".into(),
                });
            }
            Ok(())
        }
        fn play(&mut self) -> Result<(), AudioError> {
            self.calls.borrow_mut().plays += 1;
            if self.reject_play {
                Err(AudioError::Rejected("autoplay blocked".into()))
            } else {
                Ok(())
            }
        }
        fn pause(&mut self) {
            self.calls.borrow_mut().pauses += 1;
        }
        fn set_volume(&mut self, volume: f32) {
            self.calls.borrow_mut().volume = Some(volume);
        }
        fn play_one_shot(&mut self, _source: &Path, _volume: f32) -> Result<(), AudioError> {
            self.calls.borrow_mut().one_shots += 1;
            if self.reject_play {
                Err(AudioError::Rejected("autoplay blocked".into()))
            } else {
                Ok(())
            }
        }
        fn stop(&mut self) {
            self.calls.borrow_mut().stops += 1;
        }
    }

    fn sources() -> AudioSources {
        AudioSources::under(Path::new("assets"))
    }

    #[test]
    fn toggle_plays_then_pauses() {
        let (backend, calls) = MockBackend::new(0, false);
        let mut audio = AudioController::new(backend, sources(), DEFAULT_VOLUME);
        assert_eq!(audio.track(), Track::Primary);
        audio.toggle();
        assert!(audio.is_playing());
        audio.toggle();
        assert!(!audio.is_playing());
        assert_eq!(calls.borrow().plays, 1);
        assert_eq!(calls.borrow().pauses, 1);
    }

    #[test]
    fn rejected_play_leaves_state_unchanged() {
        let (backend, calls) = MockBackend::new(0, true);
        let mut audio = AudioController::new(backend, sources(), DEFAULT_VOLUME);
        audio.toggle();
        assert!(!audio.is_playing());
        assert_eq!(calls.borrow().plays, 1);
        audio.play_one_shot();
        assert_eq!(calls.borrow().one_shots, 1);
    }

    #[test]
    fn fallback_is_tried_exactly_once() {
        let (backend, calls) = MockBackend::new(1, false);
        let audio = AudioController::new(backend, sources(), DEFAULT_VOLUME);
        assert_eq!(audio.track(), Track::Fallback);
        assert_eq!(calls.borrow().loads, vec![sources().background, sources().fallback]);

        let (backend, calls) = MockBackend::new(5, false);
        let mut audio = AudioController::new(backend, sources(), DEFAULT_VOLUME);
        assert_eq!(audio.track(), Track::Unavailable);
        assert_eq!(calls.borrow().loads.len(), 2);
        audio.toggle();
        assert!(!audio.is_playing());
        assert_eq!(calls.borrow().plays, 0);
    }

    #[test]
    fn volume_is_clamped_and_independent_of_playing() {
        let (backend, calls) = MockBackend::new(0, false);
        let mut audio = AudioController::new(backend, sources(), DEFAULT_VOLUME);
        audio.toggle();
        audio.set_volume(0.0);
        assert!(audio.is_playing());
        assert_eq!(audio.volume(), 0.0);
        audio.set_volume(1.7);
        assert_eq!(audio.volume(), 1.0);
        audio.set_volume(-3.0);
        assert_eq!(audio.volume(), 0.0);
        audio.set_volume(f32::NAN);
        assert_eq!(audio.volume(), 0.0);
        assert_eq!(calls.borrow().volume, Some(0.0));
    }

    #[test]
    fn shutdown_stops_once_and_on_drop() {
        let (backend, calls) = MockBackend::new(0, false);
        let mut audio = AudioController::new(backend, sources(), DEFAULT_VOLUME);
        audio.toggle();
        audio.shutdown();
        audio.shutdown();
        assert!(!audio.is_playing());
        audio.toggle();
        assert!(!audio.is_playing());
        drop(audio);
        assert_eq!(calls.borrow().stops, 1);

        let (backend, calls) = MockBackend::new(0, false);
        drop(AudioController::new(backend, sources(), DEFAULT_VOLUME));
        assert_eq!(calls.borrow().stops, 1);
    }

    #[test]
    fn null_backend_is_silent() {
        let mut audio = AudioController::new(Box::new(NullBackend), sources(), 0.5);
        assert_eq!(audio.track(), Track::Unavailable);
        audio.toggle();
        assert!(!audio.is_playing());
        audio.play_one_shot();
    }
}
