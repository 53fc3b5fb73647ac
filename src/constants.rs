use bevy::prelude::*;

pub const GAME_TITLE: &str = "Asphalt Assault";

pub const WINDOW_WIDTH: f32 = 800.0;
pub const WINDOW_HEIGHT: f32 = 600.0;
pub const WINDOW_WIDTH_HALF: f32 = WINDOW_WIDTH / 2.0;
pub const WINDOW_HEIGHT_HALF: f32 = WINDOW_HEIGHT / 2.0;

pub const TICKS_PER_SECOND: f64 = 60.0;

// x coordinates
pub const HIGHWAY_LEFT: f32 = -200.;
pub const HIGHWAY_RIGHT: f32 = 200.;
// y coordinates
pub const BOTTOM_WALL: f32 = -WINDOW_HEIGHT_HALF;
pub const TOP_WALL: f32 = WINDOW_HEIGHT_HALF;

pub const CAR_SIZE: Vec2 = Vec2::new(50.0, 50.0);
pub const CAR_SIZE_HALF: Vec2 = Vec2::new(25.0, 25.0);
pub const POWER_UP_SIZE: Vec2 = CAR_SIZE;

// speeds are in pixels per tick
pub const PLAYER_BASE_SPEED: f32 = 5.0;
pub const SPEED_BOOST_FACTOR: f32 = 2.5;
pub const PLAYER_START_X: [f32; 2] = [-175.0, 175.0];
pub const PLAYER_START_Y: f32 = BOTTOM_WALL + 75.0;

pub const TRAFFIC_BASE_SPEED: f32 = 5.0;
pub const TRAFFIC_SPEEDUP_MS: u64 = 30_000;
pub const POWER_UP_SPEED: f32 = 5.0;

// spawn intervals are in ticks
pub const OBSTACLE_BASE_INTERVAL: u32 = 60;
pub const OBSTACLE_MIN_INTERVAL: u32 = 10;
pub const OBSTACLE_INTERVAL_STEP_MS: u64 = 10_000;
pub const POWER_UP_DECAY_RATE: u64 = 5; // per mille of the base interval per second
pub const POWER_UP_DURATION_TICKS: u32 = 300;

pub const SPAWN_Y: f32 = TOP_WALL + CAR_SIZE_HALF.y;
pub const DESPAWN_Y: f32 = BOTTOM_WALL - CAR_SIZE_HALF.y;

pub const SCORE_TICKS_PER_POINT: u32 = 20;
pub const GAME_OVER_TICKS: u32 = 120;

pub const PLAYER_COUNT_MAX: usize = 2;

pub const HIGH_SCORE_FILE: &str = "high_score.sav";

// menu buttons in window coordinates (origin top-left, y down), same space as the cursor
pub const START_BUTTON_RECT: Rect = Rect {
    min: Vec2::new(WINDOW_WIDTH_HALF - 80.0, WINDOW_HEIGHT_HALF - 60.0),
    max: Vec2::new(WINDOW_WIDTH_HALF + 80.0, WINDOW_HEIGHT_HALF + 10.0),
};
pub const TWO_PLAYERS_BUTTON_RECT: Rect = Rect {
    min: Vec2::new(WINDOW_WIDTH_HALF - 80.0, WINDOW_HEIGHT_HALF + 10.0),
    max: Vec2::new(WINDOW_WIDTH_HALF + 80.0, WINDOW_HEIGHT_HALF + 80.0),
};
pub const RECORD_TEXT_TOP: f32 = WINDOW_HEIGHT_HALF + 100.0;

pub const MENU_BACKGROUND_COLOR: Color = Color::BLACK;
pub const START_BUTTON_COLOR: Color = Color::rgb(0.0, 1.0, 0.0);
pub const TWO_PLAYERS_BUTTON_COLOR: Color = Color::rgb(0.0, 0.0, 1.0);
pub const BUTTON_TEXT_COLOR: Color = Color::BLACK;
pub const TEXT_COLOR: Color = Color::WHITE;
pub const GAME_OVER_TEXT_COLOR: Color = Color::rgb(1.0, 0.2, 0.2);

// placeholder colors used when an image cannot be loaded
pub const HIGHWAY_COLOR: Color = Color::rgb(0.3, 0.3, 0.3);
pub const SHOULDER_COLOR: Color = Color::rgb(0.1, 0.45, 0.1);
pub const RED_CAR_COLOR: Color = Color::rgb(0.85, 0.1, 0.1);
pub const BLUE_CAR_COLOR: Color = Color::rgb(0.1, 0.2, 0.9);
pub const BLACK_CAR_COLOR: Color = Color::rgb(0.05, 0.05, 0.05);
pub const SPEED_POWER_UP_COLOR: Color = Color::rgb(1.0, 0.85, 0.0);
pub const IMMORTALITY_POWER_UP_COLOR: Color = Color::rgb(0.0, 0.9, 0.9);

pub const FONT_SIZE: f32 = 32.0;
pub const SCOREBOARD_TEXT_PADDING: Val = Val::Px(10.0);

// z ordering
pub const BACKGROUND_Z: f32 = 0.0;
pub const ENTITY_Z: f32 = 1.0;
pub const PLAYER_Z: f32 = 2.0;
