use bevy::prelude::*;
use clap::Parser;

use space_intruders::{GameConfig, GamePlugin, LevelTable};

#[derive(Parser, Debug)]
#[command(name = "space_intruders", about = "Top-down arcade shooter")]
struct Cli {
    /// Path to the RON game config.
    #[arg(long, default_value = "assets/config/game.ron")]
    config: String,
}

fn main() {
    let cli = Cli::parse();
    let (cfg, load_err) = GameConfig::load_or_default(&cli.config);

    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: cfg.window.title.clone(),
            resolution: (cfg.window.width, cfg.window.height).into(),
            resizable: true,
            ..default()
        }),
        ..default()
    }));

    if let Some(err) = load_err {
        warn!(target: "config", "{}: {err}; using defaults", cli.config);
    }
    for warning in cfg.validate() {
        warn!(target: "config", "{warning}");
    }

    app.insert_resource(LevelTable::from_config(&cfg.levels))
        .insert_resource(cfg)
        .add_plugins(GamePlugin)
        .run();
}
