use bevy::prelude::*;
use bevy_egui::EguiPlugin;

mod components;
mod constants;
mod events;
mod resources;
mod save;
mod systems;
mod util;

use components::*;
use constants::*;
use events::*;
use resources::*;
use save::*;
use systems::*;
use util::*;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: menu_window_title(),
                resolution: (WINDOW_WIDTH, WINDOW_HEIGHT).into(),
                resizable: false,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin)
        .add_plugins(GamePlugin)
        .run();
}

pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(Time::<Fixed>::from_hz(TICKS_PER_SECOND))
            .insert_resource(ClearColor(SHOULDER_COLOR))
            .init_state::<GameState>()
            .init_state::<PauseState>()
            .init_state::<DebugState>()
            .init_resource::<GameMode>()
            .init_resource::<Scores>()
            .init_resource::<HighScore>()
            .init_resource::<GameClock>()
            .init_resource::<SpawnTimers>()
            .init_resource::<GameOverFlags>()
            .init_resource::<GameOverCountdown>()
            .init_resource::<SpawnRng>()
            .init_resource::<SavePath>()
            .init_resource::<ImageAssets>()
            .add_event::<StartSessionEvent>()
            .add_event::<SpawnEvent>()
            .add_event::<PlayerCrashedEvent>()
            .add_event::<PowerUpCollectedEvent>()
            .add_event::<PowerUpExpiredEvent>()
            .add_event::<DebugModeEvent>()
            .add_systems(Startup, (setup_camera, load_images_system, load_high_score_system))
            .add_systems(OnEnter(GameState::Menu), spawn_menu)
            .add_systems(OnExit(GameState::Menu), despawn_with::<MenuUi>)
            .add_systems(OnEnter(GameState::Playing), start_session)
            .add_systems(OnEnter(GameState::GameOver), enter_game_over)
            .add_systems(OnExit(GameState::GameOver), teardown_session)
            .add_systems(OnEnter(PauseState::Paused), spawn_pause_text)
            .add_systems(OnExit(PauseState::Paused), despawn_with::<PauseUi>)
            .add_systems(FixedUpdate, advance_game_clock)
            .add_systems(
                FixedUpdate,
                (
                    player_input_system,
                    spawn_timer_system,
                    spawn_system,
                    scroll_system,
                    despawn_offscreen_system,
                    collision_system,
                    power_up_collected_listener,
                    power_up_timer_system,
                    power_up_expired_listener,
                    crash_listener,
                    score_system,
                )
                    .chain()
                    .after(advance_game_clock)
                    .run_if(in_state(GameState::Playing))
                    .run_if(in_state(PauseState::Running))
                    .run_if(session_running),
            )
            .add_systems(
                FixedUpdate,
                game_over_countdown_system.run_if(in_state(GameState::GameOver)),
            )
            .add_systems(
                Update,
                (mouse_click_system, start_session_listener)
                    .chain()
                    .run_if(in_state(GameState::Menu)),
            )
            .add_systems(
                Update,
                (pause_input_system, update_scoreboard).run_if(in_state(GameState::Playing)),
            )
            .add_systems(
                Update,
                (
                    (debug_input_system, debug_mode_listener).chain(),
                    debug_overlay_system.run_if(in_state(DebugState::Enabled)),
                    bevy::window::close_on_esc,
                ),
            )
            .add_systems(Last, save_high_score_on_exit);
    }
}
