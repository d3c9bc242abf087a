//! Audio output through rodio.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source};

use super::AudioBackend;
use crate::error::AudioError;

pub struct RodioBackend {
    // Dropping the stream closes the device, so it lives as long as the backend.
    _stream: OutputStream,
    handle: OutputStreamHandle,
    background: Option<Sink>,
    volume: f32,
}

impl RodioBackend {
    /// Open the default output device.
    pub fn new() -> Result<Self, AudioError> {
        let (stream, handle) =
            OutputStream::try_default().map_err(|e| AudioError::NoOutput(e.to_string()))?;
        Ok(Self {
            _stream: stream,
            handle,
            background: None,
            volume: super::DEFAULT_VOLUME,
        })
    }

    fn open(path: &Path) -> Result<Decoder<BufReader<File>>, AudioError> {
        let file = File::open(path).map_err(|e| AudioError::Load {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Decoder::new(BufReader::new(file)).map_err(|e| AudioError::Load {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    fn new_sink(&self) -> Result<Sink, AudioError> {
        Sink::try_new(&self.handle).map_err(|e| AudioError::Rejected(e.to_string()))
    }
}

impl AudioBackend for RodioBackend {
    fn load_background(&mut self, source: &Path) -> Result<(), AudioError> {
        let decoder = Self::open(source)?;
        let sink = self.new_sink()?;
        sink.pause();
        sink.set_volume(self.volume);
        sink.append(decoder.repeat_infinite());
        if let Some(old) = self.background.replace(sink) {
            old.stop();
        }
        Ok(())
    }

    fn play(&mut self) -> Result<(), AudioError> {
        match &self.background {
            Some(sink) => {
                sink.play();
                Ok(())
            }
            None => Err(AudioError::Rejected("no background track loaded".into())),
        }
    }

    fn pause(&mut self) {
        if let Some(sink) = &self.background {
            sink.pause();
        }
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume;
        if let Some(sink) = &self.background {
            sink.set_volume(volume);
        }
    }

    fn play_one_shot(&mut self, source: &Path, volume: f32) -> Result<(), AudioError> {
        let decoder = Self::open(source)?;
        let sink = self.new_sink()?;
        sink.set_volume(volume);
        sink.append(decoder);
        sink.detach();
        Ok(())
    }

    fn stop(&mut self) {
        if let Some(sink) = self.background.take() {
            sink.stop();
        }
    }
}
