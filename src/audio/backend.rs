use std::fs::File;
use std::io::BufReader;

use anyhow::{Context, Result};
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source};

use super::{AudioEngine, SoundHandle, SoundSource};

/// Audio backend over the default output device. Each created sound gets its
/// own sink so stopping one never touches another.
pub struct RodioEngine {
    _stream: OutputStream,
    handle: OutputStreamHandle,
}

impl RodioEngine {
    pub fn new() -> Result<Self> {
        let (stream, handle) =
            OutputStream::try_default().context("failed to open default audio output")?;
        Ok(Self {
            _stream: stream,
            handle,
        })
    }

    fn open_sink(&self, source: &SoundSource) -> Result<Sink> {
        let file = File::open(&source.path)
            .with_context(|| format!("failed to open sound file {}", source.path))?;
        let decoder = Decoder::new(BufReader::new(file))
            .with_context(|| format!("failed to decode sound file {}", source.path))?;
        let sink = Sink::try_new(&self.handle).context("failed to create playback sink")?;
        // Created paused; playback starts on the handle's play() call.
        sink.pause();
        if source.streaming {
            sink.append(decoder);
        } else {
            sink.append(decoder.buffered());
        }
        Ok(sink)
    }
}

impl AudioEngine for RodioEngine {
    type Handle = RodioSound;

    fn create(&mut self, source: &SoundSource) -> RodioSound {
        match self.open_sink(source) {
            Ok(sink) => RodioSound { sink: Some(sink) },
            Err(err) => {
                tracing::warn!(path = %source.path, %err, "sound unavailable");
                RodioSound { sink: None }
            }
        }
    }
}

/// A sound that failed to load carries no sink and ignores play/stop.
pub struct RodioSound {
    sink: Option<Sink>,
}

impl SoundHandle for RodioSound {
    fn play(&mut self) {
        if let Some(sink) = &self.sink {
            sink.play();
        }
    }

    fn stop(&mut self) {
        if let Some(sink) = self.sink.take() {
            sink.stop();
        }
    }
}
