use bevy::prelude::*;

use crate::app::state::AppState;
use crate::core::config::GameConfig;
use crate::core::session::GameSession;

/// Directive to flash a transient centered banner ("Starting Level N").
#[derive(Event, Debug, Clone)]
pub struct ShowBanner {
    pub text: String,
}

impl ShowBanner {
    pub fn level(level: u32) -> Self {
        Self {
            text: format!("Starting Level {level}"),
        }
    }
}

#[derive(Component)]
struct HudRoot;
#[derive(Component)]
struct ScoreText;
#[derive(Component)]
struct LivesText;
#[derive(Component)]
struct Banner(Timer);

pub struct HudPlugin;

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        // After the session reset, so a restart never shows last run's numbers.
        app.add_event::<ShowBanner>()
            .add_systems(
                OnEnter(AppState::Playing),
                spawn_hud.after(super::start_session),
            )
            .add_systems(
                Update,
                (
                    update_hud.run_if(resource_changed::<GameSession>),
                    show_banners,
                )
                    .run_if(in_state(AppState::Playing)),
            )
            .add_systems(Update, fade_banners)
            .add_systems(OnExit(AppState::Playing), despawn_hud);
    }
}

fn spawn_hud(mut commands: Commands, session: Res<GameSession>) {
    commands
        .spawn((
            HudRoot,
            Node {
                width: Val::Percent(100.0),
                padding: UiRect::all(Val::Px(12.0)),
                justify_content: JustifyContent::SpaceBetween,
                ..default()
            },
        ))
        .with_children(|p| {
            p.spawn((
                ScoreText,
                Text::new(format!("Score: {}", session.score())),
                TextFont {
                    font_size: 36.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
            p.spawn((
                LivesText,
                Text::new(format!("Lives: {}", session.lives())),
                TextFont {
                    font_size: 36.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
        });
}

fn update_hud(
    session: Res<GameSession>,
    mut q_score: Query<&mut Text, (With<ScoreText>, Without<LivesText>)>,
    mut q_lives: Query<&mut Text, (With<LivesText>, Without<ScoreText>)>,
) {
    if let Ok(mut text) = q_score.single_mut() {
        *text = Text::new(format!("Score: {}", session.score()));
    }
    if let Ok(mut text) = q_lives.single_mut() {
        *text = Text::new(format!("Lives: {}", session.lives()));
    }
}

fn show_banners(mut commands: Commands, cfg: Res<GameConfig>, mut ev: EventReader<ShowBanner>) {
    for banner in ev.read() {
        commands.spawn((
            Banner(Timer::from_seconds(cfg.effects.banner_secs, TimerMode::Once)),
            Text::new(banner.text.clone()),
            TextFont {
                font_size: 64.0,
                ..default()
            },
            TextColor(Color::WHITE),
            Node {
                position_type: PositionType::Absolute,
                align_self: AlignSelf::Center,
                justify_self: JustifySelf::Center,
                ..default()
            },
        ));
    }
}

fn fade_banners(
    mut commands: Commands,
    time: Res<Time>,
    mut q: Query<(Entity, &mut Banner, &mut TextColor)>,
) {
    for (entity, mut banner, mut color) in &mut q {
        banner.0.tick(time.delta());
        if banner.0.finished() {
            commands.entity(entity).despawn();
            continue;
        }
        color.0 = color.0.with_alpha(1.0 - banner.0.fraction());
    }
}

fn despawn_hud(
    mut commands: Commands,
    q_root: Query<Entity, With<HudRoot>>,
    q_banners: Query<Entity, With<Banner>>,
) {
    for e in q_root.iter().chain(q_banners.iter()) {
        commands.entity(e).despawn();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::levels::LevelTable;
    use crate::gameplay::enemies::EnemySpawnTimer;

    #[test]
    fn hud_spawns_with_fresh_session_numbers_on_restart() {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, bevy::state::app::StatesPlugin));
        app.init_state::<AppState>();
        app.insert_resource(GameConfig::default());
        app.insert_resource(LevelTable::from_config(&GameConfig::default().levels));
        app.init_resource::<GameSession>();
        app.init_resource::<EnemySpawnTimer>();
        app.add_plugins(HudPlugin);
        app.add_systems(OnEnter(AppState::Playing), crate::gameplay::start_session);

        // End a previous run at zero lives, then restart.
        {
            let mut session = app.world_mut().resource_mut::<GameSession>();
            for _ in 0..3 {
                let _ = session.on_enemy_reached_bottom();
            }
            assert_eq!(session.lives(), 0);
        }
        app.world_mut()
            .resource_mut::<NextState<AppState>>()
            .set(AppState::Playing);
        app.update();

        let world = app.world_mut();
        let mut q = world.query_filtered::<&Text, With<LivesText>>();
        let text = q.single(world).unwrap();
        assert_eq!(text.0, "Lives: 3");
    }
}
