use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::audio::SoundSource;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoundConfig {
    pub tx_sound: SoundSource,
    pub block_sound: SoundSource,
}

impl Default for SoundConfig {
    fn default() -> Self {
        Self {
            tx_sound: SoundSource::new("assets/sounds/tx.wav"),
            block_sound: SoundSource::new("assets/sounds/block.wav"),
        }
    }
}

impl SoundConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read sound config {}", path.display()))?;
        ron::from_str(&text)
            .with_context(|| format!("failed to parse sound config {}", path.display()))
    }

    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(config) => config,
            Err(err) => {
                tracing::debug!(path = %path.display(), %err, "using default sound config");
                Self::default()
            }
        }
    }
}
