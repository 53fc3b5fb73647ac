use crate::constants::*;
use bevy::prelude::*;
use lazy_static::lazy_static;
use std::collections::HashMap;

#[derive(States, Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    #[default]
    Menu,
    Playing,
    GameOver,
}

#[derive(States, Default, Debug, Clone, PartialEq, Eq, Hash)]
pub enum DebugState {
    #[default]
    Disabled,
    Enabled,
}

#[derive(States, Default, Debug, Clone, PartialEq, Eq, Hash)]
pub enum PauseState {
    #[default]
    Running,
    Paused,
}

#[derive(Resource, Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameMode {
    #[default]
    SinglePlayer,
    TwoPlayer,
}

impl GameMode {
    pub fn player_count(&self) -> usize {
        match self {
            GameMode::SinglePlayer => 1,
            GameMode::TwoPlayer => 2,
        }
    }

    pub fn window_title(&self) -> String {
        match self {
            GameMode::SinglePlayer => format!("{GAME_TITLE} - 1 Player"),
            GameMode::TwoPlayer => format!("{GAME_TITLE} - 2 Players"),
        }
    }
}

pub fn menu_window_title() -> String {
    format!("{GAME_TITLE} - Main Menu")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PowerUpKind {
    Speed,
    Immortality,
}

impl PowerUpKind {
    pub const ALL: [PowerUpKind; 2] = [PowerUpKind::Speed, PowerUpKind::Immortality];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CarColor {
    Red,
    Blue,
    Black,
}

impl CarColor {
    pub fn for_player(index: usize) -> CarColor {
        if index == 0 {
            CarColor::Red
        } else {
            CarColor::Blue
        }
    }
}

lazy_static! {
    pub static ref POWER_UP_SPAWN_INTERVALS: HashMap<PowerUpKind, u32> = {
        let mut map = HashMap::new();
        map.insert(PowerUpKind::Speed, 100);
        map.insert(PowerUpKind::Immortality, 300);

        map
    };
    pub static ref POWER_UP_IMAGE_FILES: HashMap<PowerUpKind, &'static str> = {
        let mut map = HashMap::new();
        map.insert(PowerUpKind::Speed, "speed_powerup.png");
        map.insert(PowerUpKind::Immortality, "immortality_powerup.png");

        map
    };
    pub static ref POWER_UP_COLORS: HashMap<PowerUpKind, Color> = {
        let mut map = HashMap::new();
        map.insert(PowerUpKind::Speed, SPEED_POWER_UP_COLOR);
        map.insert(PowerUpKind::Immortality, IMMORTALITY_POWER_UP_COLOR);

        map
    };
    pub static ref CAR_IMAGE_FILES: HashMap<CarColor, &'static str> = {
        let mut map = HashMap::new();
        map.insert(CarColor::Red, "red_car.png");
        map.insert(CarColor::Blue, "blue_car.png");
        map.insert(CarColor::Black, "black_car.png");

        map
    };
    pub static ref CAR_COLORS: HashMap<CarColor, Color> = {
        let mut map = HashMap::new();
        map.insert(CarColor::Red, RED_CAR_COLOR);
        map.insert(CarColor::Blue, BLUE_CAR_COLOR);
        map.insert(CarColor::Black, BLACK_CAR_COLOR);

        map
    };
}

pub fn power_up_base_interval(kind: &PowerUpKind) -> u32 {
    POWER_UP_SPAWN_INTERVALS[kind]
}

pub fn power_up_image_file(kind: &PowerUpKind) -> &'static str {
    POWER_UP_IMAGE_FILES[kind]
}

pub fn power_up_color(kind: &PowerUpKind) -> Color {
    POWER_UP_COLORS[kind]
}

pub fn car_image_file(color: &CarColor) -> &'static str {
    CAR_IMAGE_FILES[color]
}

pub fn car_color(color: &CarColor) -> Color {
    CAR_COLORS[color]
}

/// Ticks between two traffic spawns; shrinks by one tick every 10 s down to a floor.
pub fn obstacle_spawn_interval(elapsed_ms: u64) -> u32 {
    let reduction = (elapsed_ms / OBSTACLE_INTERVAL_STEP_MS).min(u32::MAX as u64) as u32;

    OBSTACLE_BASE_INTERVAL
        .saturating_sub(reduction)
        .max(OBSTACLE_MIN_INTERVAL)
}

/// Ticks between two power-up spawns of `kind`; grows by one base period every 200 s.
pub fn power_up_spawn_interval(kind: &PowerUpKind, elapsed_ms: u64) -> u32 {
    let periods = 1 + elapsed_ms.saturating_mul(POWER_UP_DECAY_RATE) / 1_000_000;

    (power_up_base_interval(kind) as u64 * periods).min(u32::MAX as u64) as u32
}

pub fn traffic_speed(elapsed_ms: u64) -> f32 {
    TRAFFIC_BASE_SPEED + (elapsed_ms / TRAFFIC_SPEEDUP_MS) as f32
}

pub fn boosted_speed(speed: f32) -> f32 {
    (speed * SPEED_BOOST_FACTOR).floor()
}

pub fn clamp_to_highway_x(x: f32) -> f32 {
    x.clamp(HIGHWAY_LEFT + CAR_SIZE_HALF.x, HIGHWAY_RIGHT - CAR_SIZE_HALF.x)
}

pub fn clamp_to_screen_y(y: f32) -> f32 {
    y.clamp(BOTTOM_WALL + CAR_SIZE_HALF.y, TOP_WALL - CAR_SIZE_HALF.y)
}

pub fn player_start_position(index: usize) -> Vec2 {
    Vec2::new(
        clamp_to_highway_x(PLAYER_START_X[index.min(PLAYER_COUNT_MAX - 1)]),
        PLAYER_START_Y,
    )
}

/// Range of whole-pixel left edges at which a spawned box still lies on the highway.
pub fn spawn_left_edge_range() -> std::ops::RangeInclusive<i32> {
    (HIGHWAY_LEFT as i32)..=((HIGHWAY_RIGHT - CAR_SIZE.x) as i32)
}

pub fn spawn_position(left_edge: i32) -> Vec2 {
    Vec2::new(left_edge as f32 + CAR_SIZE_HALF.x, SPAWN_Y)
}

pub fn is_below_screen(y: f32) -> bool {
    y < DESPAWN_Y
}

pub fn display_score(raw: u32) -> u32 {
    raw / SCORE_TICKS_PER_POINT
}

// half-open on the right and bottom edges
pub fn rect_contains_point(rect: &Rect, point: Vec2) -> bool {
    point.x >= rect.min.x && point.x < rect.max.x && point.y >= rect.min.y && point.y < rect.max.y
}

pub fn menu_button_at(cursor_pos: Vec2) -> Option<GameMode> {
    if rect_contains_point(&START_BUTTON_RECT, cursor_pos) {
        Some(GameMode::SinglePlayer)
    } else if rect_contains_point(&TWO_PLAYERS_BUTTON_RECT, cursor_pos) {
        Some(GameMode::TwoPlayer)
    } else {
        None
    }
}

pub fn ticks_to_ms(ticks: u64) -> u64 {
    ticks.saturating_mul(1000) / TICKS_PER_SECOND as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_obstacle_interval_shrinks_to_floor() {
        assert_eq!(obstacle_spawn_interval(0), 60);
        assert_eq!(obstacle_spawn_interval(9_999), 60);
        assert_eq!(obstacle_spawn_interval(10_000), 59);
        assert_eq!(obstacle_spawn_interval(495_000), 11);
        assert_eq!(obstacle_spawn_interval(500_000), 10);
        assert_eq!(obstacle_spawn_interval(10_000_000), 10);
        assert_eq!(obstacle_spawn_interval(u64::MAX), 10);
    }

    #[test]
    fn test_power_up_interval_grows_in_steps() {
        assert_eq!(power_up_spawn_interval(&PowerUpKind::Speed, 0), 100);
        assert_eq!(power_up_spawn_interval(&PowerUpKind::Speed, 199_999), 100);
        assert_eq!(power_up_spawn_interval(&PowerUpKind::Speed, 200_000), 200);
        assert_eq!(power_up_spawn_interval(&PowerUpKind::Immortality, 0), 300);
        assert_eq!(
            power_up_spawn_interval(&PowerUpKind::Immortality, 400_000),
            900
        );
    }

    #[test]
    fn test_traffic_speed_ramps_every_30_seconds() {
        assert_eq!(traffic_speed(0), 5.0);
        assert_eq!(traffic_speed(29_999), 5.0);
        assert_eq!(traffic_speed(30_000), 6.0);
        assert_eq!(traffic_speed(95_000), 8.0);
    }

    #[test]
    fn test_boosted_speed_truncates() {
        assert_eq!(boosted_speed(PLAYER_BASE_SPEED), 12.0);
        assert_eq!(boosted_speed(2.0), 5.0);
    }

    #[test]
    fn test_highway_clamp() {
        assert_eq!(clamp_to_highway_x(-1000.0), -175.0);
        assert_eq!(clamp_to_highway_x(1000.0), 175.0);
        assert_eq!(clamp_to_highway_x(10.0), 10.0);
        assert_eq!(clamp_to_screen_y(-1000.0), -275.0);
        assert_eq!(clamp_to_screen_y(1000.0), 275.0);
    }

    #[test]
    fn test_player_start_positions_on_highway() {
        assert_eq!(player_start_position(0), Vec2::new(-175.0, -225.0));
        assert_eq!(player_start_position(1), Vec2::new(175.0, -225.0));
    }

    #[test]
    fn test_spawn_range_keeps_box_on_highway() {
        let range = spawn_left_edge_range();
        assert_eq!(*range.start(), -200);
        assert_eq!(*range.end(), 150);

        let leftmost = spawn_position(*range.start());
        let rightmost = spawn_position(*range.end());
        assert_eq!(leftmost.x - CAR_SIZE_HALF.x, HIGHWAY_LEFT);
        assert_eq!(rightmost.x + CAR_SIZE_HALF.x, HIGHWAY_RIGHT);
        assert_eq!(leftmost.y, 325.0);
    }

    #[test]
    fn test_display_score() {
        assert_eq!(display_score(0), 0);
        assert_eq!(display_score(19), 0);
        assert_eq!(display_score(20), 1);
        assert_eq!(display_score(1234), 61);
    }

    #[test]
    fn test_menu_button_hit_test() {
        assert_eq!(menu_button_at(Vec2::new(400.0, 275.0)), Some(GameMode::SinglePlayer));
        assert_eq!(menu_button_at(Vec2::new(320.0, 240.0)), Some(GameMode::SinglePlayer));
        assert_eq!(menu_button_at(Vec2::new(400.0, 310.0)), Some(GameMode::TwoPlayer));
        assert_eq!(menu_button_at(Vec2::new(479.0, 379.0)), Some(GameMode::TwoPlayer));
        assert_eq!(menu_button_at(Vec2::new(480.0, 300.0)), None);
        assert_eq!(menu_button_at(Vec2::new(400.0, 380.0)), None);
        assert_eq!(menu_button_at(Vec2::new(10.0, 10.0)), None);
    }

    #[test]
    fn test_ticks_to_ms() {
        assert_eq!(ticks_to_ms(0), 0);
        assert_eq!(ticks_to_ms(60), 1000);
        assert_eq!(ticks_to_ms(600), 10_000);
    }

    #[test]
    fn test_window_titles() {
        assert_eq!(GameMode::SinglePlayer.window_title(), "Asphalt Assault - 1 Player");
        assert_eq!(GameMode::TwoPlayer.window_title(), "Asphalt Assault - 2 Players");
        assert_eq!(menu_window_title(), "Asphalt Assault - Main Menu");
        assert_eq!(GameMode::TwoPlayer.player_count(), 2);
    }
}
