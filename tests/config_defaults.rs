use std::fs;

use space_intruders::core::levels::LevelTable;
use space_intruders::GameConfig;

#[test]
fn default_level_table_matches_tuning() {
    let cfg = GameConfig::default();
    let levels = LevelTable::from_config(&cfg.levels);
    assert!((levels.spawn_interval_for(2) - 0.8).abs() < 1e-6);
    assert!((levels.spawn_interval_for(99) - 4.0).abs() < 1e-6);
    assert!(levels.should_advance(5));
    assert!(!levels.should_advance(6));
}

#[test]
fn shipped_config_parses_and_validates() {
    let cfg = GameConfig::load_from_file("assets/config/game.ron")
        .expect("shipped config must parse");
    let warnings = cfg.validate();
    assert!(warnings.is_empty(), "shipped config warnings: {warnings:?}");
}

#[test]
fn partial_override_keeps_other_defaults() {
    let mut path = std::env::temp_dir();
    path.push("space_intruders_partial_config.ron");
    let ron = r#"
        (
            window: (width: 600.0, height: 800.0),
            levels: (
                spawn_intervals: [2.0],
                advance_scores: [3, 6],
            ),
        )
    "#;
    fs::write(&path, ron).expect("write temp ron");
    let cfg = GameConfig::load_from_file(&path).expect("parse partial config");
    assert_eq!(cfg.window.width, 600.0);
    // Untouched sections and fields keep defaults.
    assert_eq!(cfg.window.title, "Space Intruders");
    assert_eq!(cfg.levels.default_spawn_interval, 4.0);

    let levels = LevelTable::from_config(&cfg.levels);
    assert!((levels.spawn_interval_for(1) - 2.0).abs() < 1e-6);
    assert!((levels.spawn_interval_for(2) - 4.0).abs() < 1e-6);
    assert!(levels.should_advance(3) && levels.should_advance(6));
    assert!(!levels.should_advance(5));
}
