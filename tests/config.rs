use chime::config::SoundConfig;

#[test]
fn default_slots_use_distinct_resources() {
    let config = SoundConfig::default();

    assert_ne!(config.tx_sound.path, config.block_sound.path);
    assert!(config.tx_sound.streaming);
    assert!(config.block_sound.streaming);
}

#[test]
fn load_reads_ron_file() {
    let path = std::env::temp_dir().join("chime_load_reads_ron_file.ron");
    std::fs::write(
        &path,
        r#"(
            tx_sound: (path: "a.wav", streaming: false),
            block_sound: (path: "b.wav", streaming: true),
        )"#,
    )
    .unwrap();

    let config = SoundConfig::load(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(config.tx_sound.path, "a.wav");
    assert!(!config.tx_sound.streaming);
    assert_eq!(config.block_sound.path, "b.wav");
    assert!(config.block_sound.streaming);
}

#[test]
fn load_round_trips_through_ron() {
    let config = SoundConfig::default();
    let text = ron::to_string(&config).unwrap();
    let parsed: SoundConfig = ron::from_str(&text).unwrap();

    assert_eq!(parsed.tx_sound.path, config.tx_sound.path);
    assert_eq!(parsed.block_sound.path, config.block_sound.path);
}

#[test]
fn missing_file_falls_back_to_default() {
    let config = SoundConfig::load_or_default("/nonexistent/chime.ron");

    assert_eq!(config.tx_sound.path, SoundConfig::default().tx_sound.path);
}
