use bevy::prelude::*;
use rand::Rng;

use crate::resources::SpawnRng;
use crate::util::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnKind {
    Obstacle,
    PowerUp(PowerUpKind),
}

// request that a scrolling entity be spawned
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct SpawnEvent {
    pub kind: SpawnKind,
    pub position: Vec2,
}

impl SpawnEvent {
    /// Queues a spawn of `kind` just above the screen at a random spot on the highway.
    pub fn request_spawn(
        spawn_events: &mut EventWriter<SpawnEvent>,
        rng: &mut SpawnRng,
        kind: SpawnKind,
    ) {
        let left_edge = rng.0.gen_range(spawn_left_edge_range());
        let position = spawn_position(left_edge);
        debug!("requesting {:?} spawn at {}", kind, position);

        spawn_events.send(SpawnEvent { kind, position });
    }
}

// a menu button was clicked
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartSessionEvent(pub GameMode);

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerCrashedEvent {
    pub player: usize,
}

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PowerUpCollectedEvent {
    pub player: usize,
    pub kind: PowerUpKind,
}

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PowerUpExpiredEvent {
    pub player: usize,
    pub kind: PowerUpKind,
}

#[derive(Event, Default)]
pub struct DebugModeEvent;
