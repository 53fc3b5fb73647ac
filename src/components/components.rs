use bevy::{math::bounding::Aabb2d, prelude::*, utils::hashbrown::HashMap};

use crate::constants::*;
use crate::util::*;

// COMPONENTS

/// Remaining ticks of every power-up currently active on a car.
#[derive(Clone, Debug, Default)]
pub struct PowerUpTimers {
    remaining: HashMap<PowerUpKind, u32>,
}

impl PowerUpTimers {
    pub fn is_active(&self, kind: PowerUpKind) -> bool {
        self.remaining.contains_key(&kind)
    }

    pub fn remaining_ticks(&self, kind: PowerUpKind) -> Option<u32> {
        self.remaining.get(&kind).copied()
    }

    /// Starts the timer for `kind`; an already running timer is left alone.
    pub fn activate(&mut self, kind: PowerUpKind, ticks: u32) -> bool {
        if self.is_active(kind) {
            return false;
        }

        self.remaining.insert(kind, ticks.max(1));
        true
    }

    /// Advances every timer by one tick and returns the kinds that ran out.
    pub fn tick(&mut self) -> Vec<PowerUpKind> {
        let mut expired = Vec::new();

        for (kind, ticks) in self.remaining.iter_mut() {
            *ticks = ticks.saturating_sub(1);
            if *ticks == 0 {
                expired.push(*kind);
            }
        }

        for kind in &expired {
            self.remaining.remove(kind);
        }

        expired
    }

    pub fn clear(&mut self) {
        self.remaining.clear();
    }
}

#[derive(Component, Clone, Debug)]
pub struct Car {
    pub speed: f32,
    pub is_immortal: bool,
    pub power_ups: PowerUpTimers,
}

impl Default for Car {
    fn default() -> Self {
        Car {
            speed: PLAYER_BASE_SPEED,
            is_immortal: false,
            power_ups: PowerUpTimers::default(),
        }
    }
}

impl Car {
    /// `direction` is -1, 0 or 1; the car never leaves the highway.
    pub fn steer(&self, transform: &mut Transform, direction: f32) {
        transform.translation.x =
            clamp_to_highway_x(transform.translation.x + direction * self.speed);
    }

    pub fn move_forward(&self, transform: &mut Transform) {
        transform.translation.y = clamp_to_screen_y(transform.translation.y + self.speed);
    }

    pub fn move_backward(&self, transform: &mut Transform) {
        transform.translation.y = clamp_to_screen_y(transform.translation.y - self.speed);
    }

    /// Applies the effect of `kind` unless it is already running. Returns whether it was applied.
    pub fn collect(&mut self, kind: PowerUpKind) -> bool {
        if !self.power_ups.activate(kind, POWER_UP_DURATION_TICKS) {
            return false;
        }

        match kind {
            PowerUpKind::Speed => self.speed = boosted_speed(self.speed),
            PowerUpKind::Immortality => self.is_immortal = true,
        }

        true
    }

    pub fn expire(&mut self, kind: PowerUpKind) {
        match kind {
            PowerUpKind::Speed => self.speed = PLAYER_BASE_SPEED,
            PowerUpKind::Immortality => self.is_immortal = false,
        }
    }

    pub fn tick_power_ups(&mut self) -> Vec<PowerUpKind> {
        let expired = self.power_ups.tick();

        for kind in &expired {
            self.expire(*kind);
        }

        expired
    }
}

// which player drives this car; 0 is player one
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Player(pub usize);

#[derive(Component, Clone)]
pub struct Obstacle;

#[derive(Component, Clone, Debug)]
pub struct PowerUp {
    pub kind: PowerUpKind,
}

#[derive(Component, Clone, Copy)]
pub struct Collider {
    pub half_size: Vec2,
}

impl Collider {
    pub fn new(size: Vec2) -> Collider {
        Collider {
            half_size: size / 2.,
        }
    }

    pub fn aabb(&self, transform: &Transform) -> Aabb2d {
        Aabb2d::new(transform.translation.truncate(), self.half_size)
    }

    /// Strict overlap test: boxes that only share an edge do not collide.
    pub fn overlaps(
        &self,
        transform: &Transform,
        other: &Collider,
        other_transform: &Transform,
    ) -> bool {
        let a = self.aabb(transform);
        let b = other.aabb(other_transform);

        a.min.x < b.max.x && a.max.x > b.min.x && a.min.y < b.max.y && a.max.y > b.min.y
    }
}

// how fast an entity scrolls down the highway
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub enum Scroll {
    // follows the traffic speed, which ramps up over the session
    Traffic,
    Fixed(f32),
}

// everything that belongs to a running session and is cleared when it ends
#[derive(Component, Clone)]
pub struct SessionEntity;

#[derive(Component)]
pub struct ScoreboardUi(pub usize);

#[derive(Component)]
pub struct MenuUi;

#[derive(Component)]
pub struct RecordText;

#[derive(Component)]
pub struct GameOverUi;

#[derive(Component)]
pub struct PauseUi;

// BUNDLES
#[derive(Bundle)]
pub struct PlayerCarBundle {
    car: Car,
    player: Player,
    sprite_bundle: SpriteBundle,
    collider: Collider,
    session: SessionEntity,
}

impl PlayerCarBundle {
    pub fn new(index: usize, sprite_bundle: SpriteBundle) -> PlayerCarBundle {
        PlayerCarBundle {
            car: Car::default(),
            player: Player(index),
            sprite_bundle,
            collider: Collider::new(CAR_SIZE),
            session: SessionEntity,
        }
    }
}

#[derive(Bundle)]
pub struct ObstacleBundle {
    obstacle: Obstacle,
    sprite_bundle: SpriteBundle,
    collider: Collider,
    scroll: Scroll,
    session: SessionEntity,
}

impl ObstacleBundle {
    pub fn new(sprite_bundle: SpriteBundle) -> ObstacleBundle {
        ObstacleBundle {
            obstacle: Obstacle,
            sprite_bundle,
            collider: Collider::new(CAR_SIZE),
            scroll: Scroll::Traffic,
            session: SessionEntity,
        }
    }
}

#[derive(Bundle)]
pub struct PowerUpBundle {
    power_up: PowerUp,
    sprite_bundle: SpriteBundle,
    collider: Collider,
    scroll: Scroll,
    session: SessionEntity,
}

impl PowerUpBundle {
    pub fn new(kind: PowerUpKind, sprite_bundle: SpriteBundle) -> PowerUpBundle {
        PowerUpBundle {
            power_up: PowerUp { kind },
            sprite_bundle,
            collider: Collider::new(POWER_UP_SIZE),
            scroll: Scroll::Fixed(POWER_UP_SPEED),
            session: SessionEntity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transform_at(x: f32, y: f32) -> Transform {
        Transform::from_xyz(x, y, 0.)
    }

    #[test]
    fn test_steer_stays_on_highway() {
        let car = Car::default();
        let mut transform = transform_at(170., 0.);

        for _ in 0..10 {
            car.steer(&mut transform, 1.);
        }
        assert_eq!(transform.translation.x, HIGHWAY_RIGHT - CAR_SIZE_HALF.x);

        for _ in 0..200 {
            car.steer(&mut transform, -1.);
        }
        assert_eq!(transform.translation.x, HIGHWAY_LEFT + CAR_SIZE_HALF.x);
    }

    #[test]
    fn test_steer_moves_by_speed() {
        let car = Car::default();
        let mut transform = transform_at(0., 0.);
        car.steer(&mut transform, 1.);
        assert_eq!(transform.translation.x, PLAYER_BASE_SPEED);
        car.steer(&mut transform, 0.);
        assert_eq!(transform.translation.x, PLAYER_BASE_SPEED);
    }

    #[test]
    fn test_forward_and_backward_stay_on_screen() {
        let car = Car::default();
        let mut transform = transform_at(0., 270.);
        car.move_forward(&mut transform);
        assert_eq!(transform.translation.y, TOP_WALL - CAR_SIZE_HALF.y);

        let mut transform = transform_at(0., -273.);
        car.move_backward(&mut transform);
        assert_eq!(transform.translation.y, BOTTOM_WALL + CAR_SIZE_HALF.y);

        let mut transform = transform_at(0., 0.);
        car.move_forward(&mut transform);
        assert_eq!(transform.translation.y, PLAYER_BASE_SPEED);
    }

    #[test]
    fn test_speed_power_up_applies_once() {
        let mut car = Car::default();
        assert!(car.collect(PowerUpKind::Speed));
        assert_eq!(car.speed, 12.);

        // a second pickup while active does not stack
        assert!(!car.collect(PowerUpKind::Speed));
        assert_eq!(car.speed, 12.);
    }

    #[test]
    fn test_power_up_expires_after_duration() {
        let mut car = Car::default();
        car.collect(PowerUpKind::Immortality);
        car.collect(PowerUpKind::Speed);
        assert!(car.is_immortal);

        for _ in 0..POWER_UP_DURATION_TICKS - 1 {
            assert!(car.tick_power_ups().is_empty());
        }
        assert!(car.is_immortal);

        let mut expired = car.tick_power_ups();
        expired.sort_by_key(|kind| *kind as u8);
        assert_eq!(expired, vec![PowerUpKind::Speed, PowerUpKind::Immortality]);
        assert!(!car.is_immortal);
        assert_eq!(car.speed, PLAYER_BASE_SPEED);

        // can be collected again once reset
        assert!(car.collect(PowerUpKind::Speed));
    }

    #[test]
    fn test_power_up_timers_remaining() {
        let mut timers = PowerUpTimers::default();
        assert_eq!(timers.remaining_ticks(PowerUpKind::Speed), None);
        assert!(timers.activate(PowerUpKind::Speed, 3));
        timers.tick();
        assert_eq!(timers.remaining_ticks(PowerUpKind::Speed), Some(2));
        timers.clear();
        assert!(!timers.is_active(PowerUpKind::Speed));
    }

    #[test]
    fn test_collider_overlap() {
        let collider = Collider::new(CAR_SIZE);
        let origin = transform_at(0., 0.);
        assert!(collider.overlaps(&origin, &collider, &transform_at(49., 0.)));
        assert!(collider.overlaps(&origin, &collider, &transform_at(-49., 49.)));
        assert!(!collider.overlaps(&origin, &collider, &transform_at(0., 60.)));
    }

    #[test]
    fn test_touching_colliders_do_not_overlap() {
        let collider = Collider::new(CAR_SIZE);
        let player = transform_at(-175., -225.);

        // side by side, above, and corner to corner
        for (x, y) in [(-125., -225.), (-175., -175.), (-125., -175.), (-225., -275.)] {
            assert!(
                !collider.overlaps(&player, &collider, &transform_at(x, y)),
                "({x}, {y}) only touches the player"
            );
        }
    }
}
