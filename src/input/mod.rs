//! Input plugin - translates keyboard presses and touch swipes into game controls.

use bevy::prelude::*;

use crate::game::{Control, ControlEvent, GameSet};

/// Plugin for keyboard and touch controls.
pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (keyboard_controls, touch_controls).in_set(GameSet::Input),
        );
    }
}

/// Maps a key to its control. WASD and the arrows steer, space confirms.
pub fn control_for_key(key: KeyCode) -> Control {
    match key {
        KeyCode::KeyW | KeyCode::ArrowUp => Control::Up,
        KeyCode::KeyS | KeyCode::ArrowDown => Control::Down,
        KeyCode::KeyA | KeyCode::ArrowLeft => Control::Left,
        KeyCode::KeyD | KeyCode::ArrowRight => Control::Right,
        KeyCode::Space => Control::Confirm,
        _ => Control::None,
    }
}

/// Classifies a finished touch by the dominant axis of its displacement.
/// Window coordinates grow downwards. A touch that never moved is a tap.
pub fn control_for_swipe(start: Vec2, end: Vec2) -> Control {
    let travel = end - start;
    if travel == Vec2::ZERO {
        return Control::Confirm;
    }
    if travel.x.abs() > travel.y.abs() {
        if travel.x < 0.0 { Control::Left } else { Control::Right }
    } else if travel.y > 0.0 {
        Control::Down
    } else {
        Control::Up
    }
}

fn keyboard_controls(keys: Res<ButtonInput<KeyCode>>, mut controls: MessageWriter<ControlEvent>) {
    for key in keys.get_just_pressed() {
        let control = control_for_key(*key);
        if control != Control::None {
            controls.write(ControlEvent(control));
        }
    }
}

fn touch_controls(touches: Res<Touches>, mut controls: MessageWriter<ControlEvent>) {
    for touch in touches.iter_just_released() {
        let control = control_for_swipe(touch.start_position(), touch.position());
        debug!("Touch {:?} -> {:?}", touch.id(), control);
        controls.write(ControlEvent(control));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_map_to_controls() {
        let cases = [
            (KeyCode::KeyW, Control::Up),
            (KeyCode::ArrowUp, Control::Up),
            (KeyCode::KeyS, Control::Down),
            (KeyCode::ArrowDown, Control::Down),
            (KeyCode::KeyA, Control::Left),
            (KeyCode::ArrowLeft, Control::Left),
            (KeyCode::KeyD, Control::Right),
            (KeyCode::ArrowRight, Control::Right),
            (KeyCode::Space, Control::Confirm),
            (KeyCode::Enter, Control::None),
            (KeyCode::KeyQ, Control::None),
        ];
        for (key, expected) in cases {
            assert_eq!(control_for_key(key), expected, "{key:?}");
        }
    }

    #[test]
    fn swipes_follow_the_dominant_axis() {
        let start = Vec2::new(100.0, 100.0);
        assert_eq!(control_for_swipe(start, Vec2::new(40.0, 90.0)), Control::Left);
        assert_eq!(control_for_swipe(start, Vec2::new(160.0, 120.0)), Control::Right);
        assert_eq!(control_for_swipe(start, Vec2::new(110.0, 180.0)), Control::Down);
        assert_eq!(control_for_swipe(start, Vec2::new(95.0, 20.0)), Control::Up);
    }

    #[test]
    fn diagonal_swipe_counts_as_vertical() {
        let start = Vec2::ZERO;
        assert_eq!(control_for_swipe(start, Vec2::new(30.0, 30.0)), Control::Down);
        assert_eq!(control_for_swipe(start, Vec2::new(-30.0, -30.0)), Control::Up);
    }

    #[test]
    fn tap_confirms() {
        let at = Vec2::new(12.0, 34.0);
        assert_eq!(control_for_swipe(at, at), Control::Confirm);
    }
}
