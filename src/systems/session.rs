use bevy::{prelude::*, window::PrimaryWindow};

use crate::components::*;
use crate::constants::*;
use crate::resources::*;
use crate::save::persist_high_score;
use crate::systems::scoreboard_text;
use crate::util::*;

pub fn set_window_title(windows: &mut Query<&mut Window, With<PrimaryWindow>>, title: String) {
    if let Ok(mut window) = windows.get_single_mut() {
        window.title = title;
    }
}

pub fn despawn_with<T: Component>(mut commands: Commands, query: Query<Entity, With<T>>) {
    for entity in &query {
        commands.entity(entity).despawn_recursive();
    }
}

pub fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2dBundle::default());
}

fn text_style(color: Color) -> TextStyle {
    TextStyle {
        font_size: FONT_SIZE,
        color,
        ..default()
    }
}

fn spawn_button(parent: &mut ChildBuilder, rect: Rect, label: &str, color: Color) {
    parent
        .spawn(NodeBundle {
            style: Style {
                position_type: PositionType::Absolute,
                left: Val::Px(rect.min.x),
                top: Val::Px(rect.min.y),
                width: Val::Px(rect.width()),
                height: Val::Px(rect.height()),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            background_color: color.into(),
            ..default()
        })
        .with_children(|button| {
            button.spawn(TextBundle::from_section(label, text_style(BUTTON_TEXT_COLOR)));
        });
}

pub fn spawn_menu(
    mut commands: Commands,
    high_score: Res<HighScore>,
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
) {
    set_window_title(&mut windows, menu_window_title());

    commands
        .spawn((
            NodeBundle {
                style: Style {
                    width: Val::Percent(100.),
                    height: Val::Percent(100.),
                    ..default()
                },
                background_color: MENU_BACKGROUND_COLOR.into(),
                ..default()
            },
            MenuUi,
        ))
        .with_children(|parent| {
            spawn_button(parent, START_BUTTON_RECT, "START", START_BUTTON_COLOR);
            spawn_button(parent, TWO_PLAYERS_BUTTON_RECT, "2 PLAYERS", TWO_PLAYERS_BUTTON_COLOR);

            parent
                .spawn(NodeBundle {
                    style: Style {
                        position_type: PositionType::Absolute,
                        top: Val::Px(RECORD_TEXT_TOP),
                        width: Val::Percent(100.),
                        justify_content: JustifyContent::Center,
                        ..default()
                    },
                    ..default()
                })
                .with_children(|row| {
                    row.spawn((
                        TextBundle::from_section(
                            format!("Record: {}", high_score.0),
                            text_style(TEXT_COLOR),
                        ),
                        RecordText,
                    ));
                });
        });
}

fn reset_session_resources(commands: &mut Commands) {
    commands.insert_resource(Scores::default());
    commands.insert_resource(SpawnTimers::default());
    commands.insert_resource(GameOverFlags::default());
    commands.insert_resource(GameOverCountdown::default());
}

fn spawn_highway(commands: &mut Commands, images: &ImageAssets) {
    // the highway image covers the whole window; the placeholder only paints the road
    let size = if images.is_loaded(GameImage::Highway) {
        Vec2::new(WINDOW_WIDTH, WINDOW_HEIGHT)
    } else {
        Vec2::new(HIGHWAY_RIGHT - HIGHWAY_LEFT, WINDOW_HEIGHT)
    };

    commands.spawn((
        images.sprite_bundle(GameImage::Highway, Vec2::ZERO, size, BACKGROUND_Z),
        SessionEntity,
    ));
}

fn spawn_scoreboards(commands: &mut Commands, game_mode: GameMode, scores: &Scores) {
    commands
        .spawn((
            NodeBundle {
                style: Style {
                    position_type: PositionType::Absolute,
                    top: SCOREBOARD_TEXT_PADDING,
                    width: Val::Percent(100.),
                    justify_content: JustifyContent::Center,
                    ..default()
                },
                ..default()
            },
            SessionEntity,
        ))
        .with_children(|row| {
            row.spawn((
                TextBundle::from_section(scoreboard_text(0, scores), text_style(TEXT_COLOR)),
                ScoreboardUi(0),
            ));
        });

    if game_mode == GameMode::TwoPlayer {
        commands.spawn((
            TextBundle::from_section(scoreboard_text(1, scores), text_style(TEXT_COLOR))
                .with_style(Style {
                    position_type: PositionType::Absolute,
                    top: SCOREBOARD_TEXT_PADDING,
                    left: SCOREBOARD_TEXT_PADDING,
                    ..default()
                }),
            ScoreboardUi(1),
            SessionEntity,
        ));
    }
}

pub fn start_session(
    mut commands: Commands,
    game_mode: Res<GameMode>,
    images: Res<ImageAssets>,
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
) {
    info!("starting {:?} session", *game_mode);
    set_window_title(&mut windows, game_mode.window_title());

    reset_session_resources(&mut commands);
    spawn_highway(&mut commands, &images);

    for index in 0..game_mode.player_count() {
        let sprite = images.sprite_bundle(
            GameImage::Car(CarColor::for_player(index)),
            player_start_position(index),
            CAR_SIZE,
            PLAYER_Z,
        );
        commands.spawn(PlayerCarBundle::new(index, sprite));
    }

    spawn_scoreboards(&mut commands, *game_mode, &Scores::default());
}

pub fn enter_game_over(
    mut commands: Commands,
    scores: Res<Scores>,
    mut high_score: ResMut<HighScore>,
    mut countdown: ResMut<GameOverCountdown>,
    save_path: Res<SavePath>,
    images: Res<ImageAssets>,
) {
    // only player one's score can set the record
    let score = scores.displayed(0);
    info!("game over with score {score}");

    if high_score.submit(score) {
        info!("new record: {score}");
    }
    persist_high_score(save_path.path(), high_score.0);

    countdown.0 = GAME_OVER_TICKS;

    if images.is_loaded(GameImage::GameOver) {
        commands.spawn((
            images.sprite_bundle(
                GameImage::GameOver,
                Vec2::ZERO,
                Vec2::new(WINDOW_WIDTH, WINDOW_HEIGHT),
                PLAYER_Z + 1.,
            ),
            GameOverUi,
        ));
    } else {
        commands
            .spawn((
                NodeBundle {
                    style: Style {
                        width: Val::Percent(100.),
                        height: Val::Percent(100.),
                        justify_content: JustifyContent::Center,
                        align_items: AlignItems::Center,
                        ..default()
                    },
                    background_color: GameImage::GameOver.fallback_color().into(),
                    ..default()
                },
                GameOverUi,
            ))
            .with_children(|parent| {
                parent.spawn(TextBundle::from_section(
                    "GAME OVER",
                    text_style(GAME_OVER_TEXT_COLOR),
                ));
            });
    }
}

pub fn teardown_session(
    mut commands: Commands,
    query: Query<Entity, Or<(With<SessionEntity>, With<GameOverUi>)>>,
    mut next_pause_state: ResMut<NextState<PauseState>>,
) {
    for entity in &query {
        commands.entity(entity).despawn_recursive();
    }

    reset_session_resources(&mut commands);
    next_pause_state.set(PauseState::Running);
    debug!("session torn down");
}

pub fn spawn_pause_text(mut commands: Commands) {
    commands
        .spawn((
            NodeBundle {
                style: Style {
                    width: Val::Percent(100.),
                    height: Val::Percent(100.),
                    justify_content: JustifyContent::Center,
                    align_items: AlignItems::Center,
                    ..default()
                },
                ..default()
            },
            PauseUi,
        ))
        .with_children(|parent| {
            parent.spawn(TextBundle::from_section("PAUSED", text_style(TEXT_COLOR)));
        });
}
