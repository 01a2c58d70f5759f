use bevy::prelude::*;

/// Screen-level app state, mirroring the core session `Phase`.
/// MainMenu -> Playing -> GameOver; a restart re-enters Playing with a
/// fresh session.
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum AppState {
    #[default]
    MainMenu,
    Playing,
    GameOver,
}
