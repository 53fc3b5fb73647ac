use bevy::prelude::*;

use crate::components::*;
use crate::constants::*;
use crate::events::*;
use crate::resources::*;
use crate::util::*;

pub fn advance_game_clock(mut clock: ResMut<GameClock>) {
    clock.ticks += 1;
}

pub fn spawn_timer_system(
    clock: Res<GameClock>,
    mut timers: ResMut<SpawnTimers>,
    mut rng: ResMut<SpawnRng>,
    mut spawn_events: EventWriter<SpawnEvent>,
) {
    let elapsed_ms = clock.elapsed_ms();
    timers.advance();

    if timers.obstacle >= obstacle_spawn_interval(elapsed_ms) {
        SpawnEvent::request_spawn(&mut spawn_events, &mut rng, SpawnKind::Obstacle);
        timers.obstacle = 0;
    }

    for kind in PowerUpKind::ALL {
        let interval = power_up_spawn_interval(&kind, elapsed_ms);
        if let Some(ticks) = timers.power_ups.get_mut(&kind) {
            if *ticks >= interval {
                SpawnEvent::request_spawn(&mut spawn_events, &mut rng, SpawnKind::PowerUp(kind));
                *ticks = 0;
            }
        }
    }
}

pub fn spawn_system(
    mut commands: Commands,
    mut events: EventReader<SpawnEvent>,
    images: Res<ImageAssets>,
) {
    for event in events.read() {
        match event.kind {
            SpawnKind::Obstacle => {
                commands.spawn(ObstacleBundle::new(images.sprite_bundle(
                    GameImage::Car(CarColor::Black),
                    event.position,
                    CAR_SIZE,
                    ENTITY_Z,
                )));
            }
            SpawnKind::PowerUp(kind) => {
                commands.spawn(PowerUpBundle::new(
                    kind,
                    images.sprite_bundle(
                        GameImage::PowerUp(kind),
                        event.position,
                        POWER_UP_SIZE,
                        ENTITY_Z,
                    ),
                ));
            }
        }
        debug!("spawned {:?} at {}", event.kind, event.position);
    }
}
