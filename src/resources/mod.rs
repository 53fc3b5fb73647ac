use std::path::{Path, PathBuf};

use bevy::prelude::*;
use bevy::utils::hashbrown::HashMap;
use rand::{rngs::StdRng, SeedableRng};

use crate::constants::*;
use crate::util::*;

#[derive(Resource, Debug, Default, Clone, PartialEq, Eq)]
pub struct Scores {
    // ticks survived per player; shown divided by SCORE_TICKS_PER_POINT
    pub raw: [u32; PLAYER_COUNT_MAX],
}

impl Scores {
    pub fn tick(&mut self) {
        for score in self.raw.iter_mut() {
            *score = score.saturating_add(1);
        }
    }

    pub fn displayed(&self, player: usize) -> u32 {
        display_score(self.raw[player])
    }
}

#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct HighScore(pub u32);

impl HighScore {
    /// Raises the record to `score` if it is higher. Returns whether the record changed.
    pub fn submit(&mut self, score: u32) -> bool {
        if score > self.0 {
            self.0 = score;
            return true;
        }

        false
    }
}

/// Fixed ticks since startup, in every state. Difficulty is derived from it and it is never
/// reset, so a new session picks up where the previous one left off.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GameClock {
    pub ticks: u64,
}

impl GameClock {
    pub fn elapsed_ms(&self) -> u64 {
        ticks_to_ms(self.ticks)
    }
}

#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct SpawnTimers {
    pub obstacle: u32,
    pub power_ups: HashMap<PowerUpKind, u32>,
}

impl Default for SpawnTimers {
    fn default() -> Self {
        SpawnTimers {
            obstacle: 0,
            power_ups: PowerUpKind::ALL.iter().map(|kind| (*kind, 0)).collect(),
        }
    }
}

impl SpawnTimers {
    pub fn advance(&mut self) {
        self.obstacle += 1;
        for ticks in self.power_ups.values_mut() {
            *ticks += 1;
        }
    }

    pub fn power_up(&self, kind: PowerUpKind) -> u32 {
        self.power_ups.get(&kind).copied().unwrap_or(0)
    }
}

#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GameOverFlags(pub [bool; PLAYER_COUNT_MAX]);

impl GameOverFlags {
    pub fn any(&self) -> bool {
        self.0.iter().any(|crashed| *crashed)
    }
}

// ticks left on the game-over screen before returning to the menu
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GameOverCountdown(pub u32);

#[derive(Resource)]
pub struct SpawnRng(pub StdRng);

impl Default for SpawnRng {
    fn default() -> Self {
        SpawnRng(StdRng::from_entropy())
    }
}

impl SpawnRng {
    pub fn seeded(seed: u64) -> SpawnRng {
        SpawnRng(StdRng::seed_from_u64(seed))
    }
}

#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct SavePath(pub PathBuf);

impl Default for SavePath {
    fn default() -> Self {
        SavePath(PathBuf::from(HIGH_SCORE_FILE))
    }
}

impl SavePath {
    pub fn path(&self) -> &Path {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameImage {
    Highway,
    Car(CarColor),
    GameOver,
    PowerUp(PowerUpKind),
}

impl GameImage {
    pub const ALL: [GameImage; 7] = [
        GameImage::Highway,
        GameImage::Car(CarColor::Red),
        GameImage::Car(CarColor::Blue),
        GameImage::Car(CarColor::Black),
        GameImage::GameOver,
        GameImage::PowerUp(PowerUpKind::Speed),
        GameImage::PowerUp(PowerUpKind::Immortality),
    ];

    pub fn file_name(&self) -> &'static str {
        match self {
            GameImage::Highway => "highway.png",
            GameImage::Car(color) => car_image_file(color),
            GameImage::GameOver => "game_over.png",
            GameImage::PowerUp(kind) => power_up_image_file(kind),
        }
    }

    pub fn fallback_color(&self) -> Color {
        match self {
            GameImage::Highway => HIGHWAY_COLOR,
            GameImage::Car(color) => car_color(color),
            GameImage::GameOver => MENU_BACKGROUND_COLOR,
            GameImage::PowerUp(kind) => power_up_color(kind),
        }
    }
}

/// Handles of the images that were found on disk. Missing ones are drawn as flat-colored quads.
#[derive(Resource, Debug, Default, Clone)]
pub struct ImageAssets {
    loaded: HashMap<GameImage, Handle<Image>>,
}

impl ImageAssets {
    pub fn insert(&mut self, image: GameImage, handle: Handle<Image>) {
        self.loaded.insert(image, handle);
    }

    pub fn handle(&self, image: GameImage) -> Option<Handle<Image>> {
        self.loaded.get(&image).cloned()
    }

    pub fn is_loaded(&self, image: GameImage) -> bool {
        self.loaded.contains_key(&image)
    }

    pub fn sprite_bundle(
        &self,
        image: GameImage,
        position: Vec2,
        size: Vec2,
        z: f32,
    ) -> SpriteBundle {
        let transform = Transform::from_translation(position.extend(z));

        match self.handle(image) {
            Some(texture) => SpriteBundle {
                texture,
                sprite: Sprite {
                    custom_size: Some(size),
                    ..default()
                },
                transform,
                ..default()
            },
            None => SpriteBundle {
                sprite: Sprite {
                    color: image.fallback_color(),
                    custom_size: Some(size),
                    ..default()
                },
                transform,
                ..default()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scores_tick_and_display() {
        let mut scores = Scores::default();
        for _ in 0..45 {
            scores.tick();
        }
        assert_eq!(scores.raw, [45, 45]);
        assert_eq!(scores.displayed(0), 2);
        assert_eq!(scores.displayed(1), 2);
    }

    #[test]
    fn test_high_score_never_decreases() {
        let mut high_score = HighScore(10);
        assert!(!high_score.submit(3));
        assert_eq!(high_score.0, 10);
        assert!(!high_score.submit(10));
        assert!(high_score.submit(11));
        assert_eq!(high_score.0, 11);
    }

    #[test]
    fn test_spawn_timers_advance_together() {
        let mut timers = SpawnTimers::default();
        timers.advance();
        timers.advance();
        assert_eq!(timers.obstacle, 2);
        assert_eq!(timers.power_up(PowerUpKind::Speed), 2);
        assert_eq!(timers.power_up(PowerUpKind::Immortality), 2);
    }

    #[test]
    fn test_game_clock_elapsed() {
        let clock = GameClock { ticks: 1800 };
        assert_eq!(clock.elapsed_ms(), 30_000);
    }

    #[test]
    fn test_game_over_flags_any() {
        assert!(!GameOverFlags::default().any());
        assert!(GameOverFlags([false, true]).any());
    }

    #[test]
    fn test_missing_image_falls_back_to_flat_color() {
        let assets = ImageAssets::default();
        let image = GameImage::Car(CarColor::Black);
        assert!(!assets.is_loaded(image));

        let bundle = assets.sprite_bundle(image, Vec2::new(1., 2.), CAR_SIZE, ENTITY_Z);
        assert_eq!(bundle.sprite.color, BLACK_CAR_COLOR);
        assert_eq!(bundle.sprite.custom_size, Some(CAR_SIZE));
        assert_eq!(bundle.transform.translation, Vec3::new(1., 2., ENTITY_Z));
    }

    #[test]
    fn test_image_file_names() {
        assert_eq!(GameImage::Highway.file_name(), "highway.png");
        assert_eq!(GameImage::Car(CarColor::Red).file_name(), "red_car.png");
        assert_eq!(
            GameImage::PowerUp(PowerUpKind::Immortality).file_name(),
            "immortality_powerup.png"
        );
    }
}
