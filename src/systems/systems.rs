use bevy::{prelude::*, utils::HashSet};

use crate::components::*;
use crate::events::*;
use crate::resources::*;
use crate::util::*;

// run condition: gameplay stops as soon as a player crashed
pub fn session_running(game_over: Res<GameOverFlags>) -> bool {
    !game_over.any()
}

pub fn scroll_system(clock: Res<GameClock>, mut query: Query<(&mut Transform, &Scroll)>) {
    let traffic = traffic_speed(clock.elapsed_ms());

    for (mut transform, scroll) in &mut query {
        let speed = match scroll {
            Scroll::Traffic => traffic,
            Scroll::Fixed(speed) => *speed,
        };
        transform.translation.y -= speed;
    }
}

pub fn despawn_offscreen_system(
    mut commands: Commands,
    query: Query<(Entity, &Transform), With<Scroll>>,
) {
    for (entity, transform) in &query {
        if is_below_screen(transform.translation.y) {
            commands.entity(entity).despawn();
        }
    }
}

pub fn collision_system(
    mut commands: Commands,
    player_query: Query<(&Player, &Car, &Transform, &Collider)>,
    obstacle_query: Query<(&Transform, &Collider), With<Obstacle>>,
    power_up_query: Query<(Entity, &PowerUp, &Transform, &Collider)>,
    mut crash_writer: EventWriter<PlayerCrashedEvent>,
    mut collected_writer: EventWriter<PowerUpCollectedEvent>,
) {
    let mut players: Vec<_> = player_query.iter().collect();
    players.sort_by_key(|(player, ..)| player.0);

    // a power-up can only be picked up once, by the lowest-numbered player touching it
    let mut collected: HashSet<Entity> = HashSet::default();

    for (player, car, transform, collider) in players {
        if !car.is_immortal
            && obstacle_query
                .iter()
                .any(|(obstacle_transform, obstacle_collider)| {
                    collider.overlaps(transform, obstacle_collider, obstacle_transform)
                })
        {
            info!("player {} crashed", player.0 + 1);
            crash_writer.send(PlayerCrashedEvent { player: player.0 });
        }

        for (entity, power_up, power_up_transform, power_up_collider) in &power_up_query {
            if collected.contains(&entity) {
                continue;
            }

            if collider.overlaps(transform, power_up_collider, power_up_transform) {
                collected.insert(entity);
                commands.entity(entity).despawn();
                collected_writer.send(PowerUpCollectedEvent {
                    player: player.0,
                    kind: power_up.kind,
                });
            }
        }
    }
}

pub fn score_system(mut scores: ResMut<Scores>) {
    scores.tick();
}

pub fn update_scoreboard(scores: Res<Scores>, mut query: Query<(&mut Text, &ScoreboardUi)>) {
    for (mut text, scoreboard) in &mut query {
        text.sections[0].value = scoreboard_text(scoreboard.0, &scores);
    }
}

pub fn scoreboard_text(player: usize, scores: &Scores) -> String {
    if player == 0 {
        format!("Score: {}", scores.displayed(0))
    } else {
        format!("Score P{}: {}", player + 1, scores.displayed(player))
    }
}

pub fn game_over_countdown_system(
    mut countdown: ResMut<GameOverCountdown>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    countdown.0 = countdown.0.saturating_sub(1);

    if countdown.0 == 0 {
        next_state.set(GameState::Menu);
    }
}
