use crate::audio::{AudioEngine, SoundHandle, SoundSource};
use crate::config::SoundConfig;

/// Gated player for transaction and block chimes. Each category is one slot
/// holding at most one in-flight sound; replaying a slot stops the prior
/// sound before the next one starts.
pub struct SoundController<E: AudioEngine> {
    engine: E,
    config: SoundConfig,
    enabled: bool,
    tx_handle: Option<E::Handle>,
    block_handle: Option<E::Handle>,
}

impl<E: AudioEngine> SoundController<E> {
    pub fn new(engine: E, config: SoundConfig) -> Self {
        Self {
            engine,
            config,
            enabled: false,
            tx_handle: None,
            block_handle: None,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Flips the activation flag and returns the new value. Audio state is
    /// untouched; a sound already playing keeps playing.
    pub fn toggle(&mut self) -> bool {
        self.enabled = !self.enabled;
        tracing::debug!(enabled = self.enabled, "sounds toggled");
        self.enabled
    }

    pub fn play_tx(&mut self, name: &str) {
        if !self.enabled {
            tracing::trace!(%name, "sounds disabled, skipping tx chime");
            return;
        }
        Self::replace(&mut self.engine, &mut self.tx_handle, &self.config.tx_sound);
        tracing::debug!(%name, "tx chime started");
    }

    pub fn play_block(&mut self, name: &str) {
        if !self.enabled {
            tracing::trace!(%name, "sounds disabled, skipping block chime");
            return;
        }
        Self::replace(
            &mut self.engine,
            &mut self.block_handle,
            &self.config.block_sound,
        );
        tracing::debug!(%name, "block chime started");
    }

    // Stops whatever the slot holds, then fills it with a freshly started sound.
    fn replace(engine: &mut E, slot: &mut Option<E::Handle>, source: &SoundSource) {
        if let Some(mut prior) = slot.take() {
            prior.stop();
        }
        let mut handle = engine.create(source);
        handle.play();
        *slot = Some(handle);
    }
}
