use std::thread;
use std::time::Duration;

use anyhow::Result;
use chime::audio::backend::RodioEngine;
use chime::config::SoundConfig;
use chime::controller::SoundController;

fn main() -> Result<()> {
    init_tracing();

    let config = SoundConfig::load_or_default("chime.ron");
    let engine = RodioEngine::new()?;
    let mut sounds = SoundController::new(engine, config);

    sounds.toggle();
    sounds.play_tx("demo-tx");
    sounds.play_block("demo-block");

    // Give the chimes time to ring before the output stream drops.
    thread::sleep(Duration::from_secs(2));
    Ok(())
}

fn init_tracing() {
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("tracing subscriber already set");
    }
}
