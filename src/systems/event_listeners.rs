use bevy::prelude::*;

use crate::components::*;
use crate::events::*;
use crate::resources::*;
use crate::util::*;

pub fn start_session_listener(
    mut events: EventReader<StartSessionEvent>,
    mut game_mode: ResMut<GameMode>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    // a double click only starts one session
    if let Some(StartSessionEvent(mode)) = events.read().last() {
        *game_mode = *mode;
        next_state.set(GameState::Playing);
    }
}

pub fn crash_listener(
    mut events: EventReader<PlayerCrashedEvent>,
    mut game_over: ResMut<GameOverFlags>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    for event in events.read() {
        if let Some(flag) = game_over.0.get_mut(event.player) {
            *flag = true;
        }
    }

    if game_over.any() {
        next_state.set(GameState::GameOver);
    }
}

pub fn power_up_collected_listener(
    mut events: EventReader<PowerUpCollectedEvent>,
    mut query: Query<(&Player, &mut Car)>,
) {
    for event in events.read() {
        for (player, mut car) in &mut query {
            if player.0 != event.player {
                continue;
            }

            if car.collect(event.kind) {
                debug!("player {} picked up {:?}", player.0 + 1, event.kind);
            } else {
                debug!(
                    "player {} picked up {:?} while it was already active",
                    player.0 + 1,
                    event.kind
                );
            }
        }
    }
}

pub fn power_up_timer_system(
    mut query: Query<(&Player, &mut Car)>,
    mut expired_writer: EventWriter<PowerUpExpiredEvent>,
) {
    for (player, mut car) in &mut query {
        for kind in car.tick_power_ups() {
            expired_writer.send(PowerUpExpiredEvent {
                player: player.0,
                kind,
            });
        }
    }
}

pub fn power_up_expired_listener(mut events: EventReader<PowerUpExpiredEvent>) {
    for event in events.read() {
        debug!("player {} lost {:?}", event.player + 1, event.kind);
    }
}

pub fn debug_mode_listener(
    mut events: EventReader<DebugModeEvent>,
    debug_state: Res<State<DebugState>>,
    mut next_debug_state: ResMut<NextState<DebugState>>,
) {
    // toggle once per event
    let toggles = events.read().count();
    if toggles % 2 == 0 {
        return;
    }

    let next = match debug_state.get() {
        DebugState::Disabled => DebugState::Enabled,
        DebugState::Enabled => DebugState::Disabled,
    };
    info!("Debug Mode is now {:?}", next);
    next_debug_state.set(next);
}
