use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::components::*;
use crate::resources::*;
use crate::util::*;

pub fn spawn_timer_lines(clock: &GameClock, timers: &SpawnTimers) -> Vec<String> {
    let elapsed_ms = clock.elapsed_ms();
    let mut lines = vec![
        format!("Game time: {:.1} s ({} ticks)", elapsed_ms as f32 / 1000., clock.ticks),
        format!("Traffic speed: {} px/tick", traffic_speed(elapsed_ms)),
        format!(
            "Traffic spawn: {}/{}",
            timers.obstacle,
            obstacle_spawn_interval(elapsed_ms)
        ),
    ];

    for kind in PowerUpKind::ALL {
        lines.push(format!(
            "{:?} spawn: {}/{}",
            kind,
            timers.power_up(kind),
            power_up_spawn_interval(&kind, elapsed_ms)
        ));
    }

    lines
}

pub fn car_line(player: &Player, car: &Car, transform: &Transform) -> String {
    let active: Vec<String> = PowerUpKind::ALL
        .iter()
        .filter_map(|kind| {
            car.power_ups
                .remaining_ticks(*kind)
                .map(|ticks| format!("{:?} {}", kind, ticks))
        })
        .collect();

    format!(
        "P{} at ({}, {}) speed {}{}: {}",
        player.0 + 1,
        transform.translation.x,
        transform.translation.y,
        car.speed,
        if car.is_immortal { " immortal" } else { "" },
        if active.is_empty() {
            "no power-ups".to_string()
        } else {
            active.join(", ")
        }
    )
}

pub fn debug_overlay_system(
    mut contexts: EguiContexts,
    game_state: Res<State<GameState>>,
    clock: Res<GameClock>,
    timers: Res<SpawnTimers>,
    scores: Res<Scores>,
    cars: Query<(&Player, &Car, &Transform)>,
    obstacles: Query<(), With<Obstacle>>,
    power_ups: Query<(), With<PowerUp>>,
) {
    let mut cars: Vec<_> = cars.iter().collect();
    cars.sort_by_key(|(player, ..)| player.0);

    egui::Window::new("Debug").show(contexts.ctx_mut(), |ui| {
        ui.label(format!("State: {:?}", game_state.get()));
        for line in spawn_timer_lines(&clock, &timers) {
            ui.label(line);
        }
        ui.label(format!(
            "Traffic: {}  Power-ups: {}",
            obstacles.iter().count(),
            power_ups.iter().count()
        ));
        ui.label(format!("Raw scores: {:?}", scores.raw));

        ui.separator();
        for (player, car, transform) in &cars {
            ui.label(car_line(player, car, transform));
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_timer_lines() {
        let clock = GameClock { ticks: 600 };
        let mut timers = SpawnTimers::default();
        timers.obstacle = 12;

        let lines = spawn_timer_lines(&clock, &timers);
        assert_eq!(lines[0], "Game time: 10.0 s (600 ticks)");
        assert_eq!(lines[1], "Traffic speed: 5 px/tick");
        assert_eq!(lines[2], "Traffic spawn: 12/59");
        assert_eq!(lines[3], "Speed spawn: 0/100");
        assert_eq!(lines[4], "Immortality spawn: 0/300");
    }

    #[test]
    fn test_car_line_lists_active_power_ups() {
        let mut car = Car::default();
        assert!(car_line(&Player(0), &car, &Transform::default()).ends_with("no power-ups"));

        car.collect(PowerUpKind::Immortality);
        let line = car_line(&Player(1), &car, &Transform::default());
        assert!(line.starts_with("P2"), "got: {line}");
        assert!(line.contains("immortal"), "got: {line}");
        assert!(line.contains("Immortality 300"), "got: {line}");
    }
}
