pub mod backend;

use serde::{Deserialize, Serialize};

/// One loadable sound resource. `streaming` selects whether the backend
/// feeds the decoder straight to the output or buffers the clip up front.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoundSource {
    pub path: String,
    pub streaming: bool,
}

impl SoundSource {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            streaming: true,
        }
    }
}

/// One loaded, controllable sound instance.
pub trait SoundHandle {
    fn play(&mut self);
    fn stop(&mut self);
}

/// Playback capability consumed by the controller. Load and decode failures
/// stay inside the implementation; `create` always hands back a handle.
pub trait AudioEngine {
    type Handle: SoundHandle;

    fn create(&mut self, source: &SoundSource) -> Self::Handle;
}
