use bevy::prelude::*;

use super::state::AppState;
use crate::core::session::GameSession;

pub struct GameOverPlugin;

impl Plugin for GameOverPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(AppState::GameOver), spawn_game_over_ui)
            .add_systems(
                Update,
                handle_restart_button.run_if(in_state(AppState::GameOver)),
            )
            .add_systems(OnExit(AppState::GameOver), despawn_game_over_ui);
    }
}

#[derive(Component)]
struct GameOverUiRoot;
#[derive(Component)]
struct RestartButton;

fn spawn_game_over_ui(mut commands: Commands, session: Res<GameSession>) {
    commands
        .spawn((
            GameOverUiRoot,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                row_gap: Val::Px(24.0),
                ..default()
            },
        ))
        .with_children(|p| {
            p.spawn((
                Text::new("GAME OVER"),
                TextFont {
                    font_size: 110.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
            p.spawn((
                Text::new(format!("Final Score: {}", session.score())),
                TextFont {
                    font_size: 48.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
            p.spawn((
                RestartButton,
                Button,
                Node {
                    margin: UiRect::top(Val::Px(60.0)),
                    padding: UiRect::axes(Val::Px(32.0), Val::Px(8.0)),
                    ..default()
                },
            ))
            .with_children(|b| {
                b.spawn((
                    Text::new("RESTART"),
                    TextFont {
                        font_size: 64.0,
                        ..default()
                    },
                    TextColor(Color::WHITE),
                ));
            });
        });
}

/// Restart goes straight back into gameplay with a fresh session.
fn handle_restart_button(
    q_button: Query<&Interaction, (Changed<Interaction>, With<RestartButton>)>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    for interaction in &q_button {
        if *interaction == Interaction::Pressed {
            info!(target: "menu", "restart pressed");
            next_state.set(AppState::Playing);
        }
    }
}

fn despawn_game_over_ui(mut commands: Commands, q_root: Query<Entity, With<GameOverUiRoot>>) {
    for e in &q_root {
        commands.entity(e).despawn();
    }
}
