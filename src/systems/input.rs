use bevy::{prelude::*, window::PrimaryWindow};

use crate::components::*;
use crate::events::*;
use crate::util::*;

pub struct PlayerKeys {
    pub left: KeyCode,
    pub right: KeyCode,
    pub forward: KeyCode,
    pub backward: KeyCode,
}

pub static PLAYER_KEYS: [PlayerKeys; 2] = [
    PlayerKeys {
        left: KeyCode::KeyA,
        right: KeyCode::KeyD,
        forward: KeyCode::KeyW,
        backward: KeyCode::KeyS,
    },
    PlayerKeys {
        left: KeyCode::ArrowLeft,
        right: KeyCode::ArrowRight,
        forward: KeyCode::ArrowUp,
        backward: KeyCode::ArrowDown,
    },
];

fn axis(keyboard_input: &ButtonInput<KeyCode>, negative: KeyCode, positive: KeyCode) -> f32 {
    keyboard_input.pressed(positive) as i32 as f32 - keyboard_input.pressed(negative) as i32 as f32
}

pub fn player_input_system(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    mut query: Query<(&Car, &Player, &mut Transform)>,
) {
    for (car, player, mut transform) in &mut query {
        let Some(keys) = PLAYER_KEYS.get(player.0) else {
            continue;
        };

        car.steer(&mut transform, axis(&keyboard_input, keys.left, keys.right));

        if keyboard_input.pressed(keys.forward) {
            car.move_forward(&mut transform);
        }
        if keyboard_input.pressed(keys.backward) {
            car.move_backward(&mut transform);
        }
    }
}

pub fn pause_input_system(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    pause_state: Res<State<PauseState>>,
    mut next_pause_state: ResMut<NextState<PauseState>>,
) {
    if keyboard_input.just_pressed(KeyCode::KeyP) {
        debug!("You pressed P!");
        if *pause_state.get() == PauseState::Paused {
            next_pause_state.set(PauseState::Running);
        } else {
            next_pause_state.set(PauseState::Paused);
        }
    }
}

pub fn debug_input_system(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    mut debug_writer: EventWriter<DebugModeEvent>,
) {
    if keyboard_input.just_pressed(KeyCode::F3) {
        debug!("You pressed F3!");
        debug_writer.send(DebugModeEvent);
    }
}

pub fn mouse_click_system(
    mouse_button_input: Res<ButtonInput<MouseButton>>,
    q_windows: Query<&Window, With<PrimaryWindow>>,
    mut start_writer: EventWriter<StartSessionEvent>,
) {
    if !mouse_button_input.just_pressed(MouseButton::Left) {
        return;
    }

    // cursor_position is in window coordinates, the same space as the button rects
    let Some(position) = q_windows.get_single().ok().and_then(Window::cursor_position) else {
        return;
    };

    if let Some(mode) = menu_button_at(position) {
        info!("menu click at {position} starts {mode:?}");
        start_writer.send(StartSessionEvent(mode));
    }
}
