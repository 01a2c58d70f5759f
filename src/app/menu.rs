use bevy::prelude::*;

use super::state::AppState;

pub struct MenuPlugin;

impl Plugin for MenuPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(AppState::MainMenu), spawn_menu_ui)
            .add_systems(
                Update,
                handle_play_button.run_if(in_state(AppState::MainMenu)),
            )
            .add_systems(OnExit(AppState::MainMenu), despawn_menu_ui);
    }
}

#[derive(Component)]
struct MenuUiRoot;
#[derive(Component)]
struct PlayButton;

fn spawn_menu_ui(mut commands: Commands) {
    commands
        .spawn((
            MenuUiRoot,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                row_gap: Val::Px(12.0),
                ..default()
            },
        ))
        .with_children(|p| {
            p.spawn((
                Text::new("NoobGame's"),
                TextFont {
                    font_size: 32.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
            p.spawn((
                Text::new("Space"),
                TextFont {
                    font_size: 120.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
            p.spawn((
                Text::new("Intruders"),
                TextFont {
                    font_size: 120.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
            p.spawn((
                PlayButton,
                Button,
                Node {
                    margin: UiRect::top(Val::Px(80.0)),
                    padding: UiRect::axes(Val::Px(32.0), Val::Px(8.0)),
                    ..default()
                },
            ))
            .with_children(|b| {
                b.spawn((
                    Text::new("PLAY"),
                    TextFont {
                        font_size: 90.0,
                        ..default()
                    },
                    TextColor(Color::WHITE),
                ));
            });
        });
}

fn handle_play_button(
    q_button: Query<&Interaction, (Changed<Interaction>, With<PlayButton>)>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    for interaction in &q_button {
        if *interaction == Interaction::Pressed {
            info!(target: "menu", "play pressed, starting game");
            next_state.set(AppState::Playing);
        }
    }
}

fn despawn_menu_ui(mut commands: Commands, q_root: Query<Entity, With<MenuUiRoot>>) {
    for e in &q_root {
        commands.entity(e).despawn();
    }
}
