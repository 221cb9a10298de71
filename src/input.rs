//! Per-frame input sampling.
//!
//! Window events are never read by the simulation directly.  Instead
//! [`sample_input_system`] folds the current mouse and keyboard state into an
//! [`InputSample`] resource, and [`crate::simulation::simulation_tick_system`]
//! consumes it once per tick.
//!
//! | Action        | Binding                  |
//! |---------------|--------------------------|
//! | Aim           | cursor position          |
//! | Fire          | left click, `1`          |
//! | Toggle debug  | `D`                      |
//! | Restart       | `R` (after a win)        |

use crate::config::GameConfig;
use bevy::input::mouse::MouseButton;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

/// Aggregated player intent for the current tick.
///
/// `fire`, `toggle_debug` and `restart` are edge triggers: they are set on the
/// frame the button goes down and cleared when the tick consumes the sample.
/// Tests can populate this directly to drive the simulation without a device.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct InputSample {
    /// Pointer in play-field coordinates; `None` keeps the last known position.
    pub pointer: Option<Vec2>,
    pub fire: bool,
    pub toggle_debug: bool,
    /// Ignored by the simulation until the session is over.
    pub restart: bool,
}

/// Map a window cursor position (logical pixels, origin top-left) onto the
/// play field.  Both share the +Y-down convention, so only scaling applies.
pub fn window_to_field(cursor: Vec2, window_size: Vec2, field_size: Vec2) -> Vec2 {
    if window_size.x <= 0.0 || window_size.y <= 0.0 {
        return cursor;
    }
    cursor * field_size / window_size
}

pub fn sample_input_system(
    mut sample: ResMut<InputSample>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    keys: Res<ButtonInput<KeyCode>>,
    config: Res<GameConfig>,
) {
    if let Ok(window) = windows.single() {
        if let Some(cursor) = window.cursor_position() {
            let window_size = Vec2::new(window.width(), window.height());
            let field_size = Vec2::new(config.field_width, config.field_height);
            sample.pointer = Some(window_to_field(cursor, window_size, field_size));
        }
    }

    // Edge triggers accumulate until the tick consumes them.
    sample.fire |=
        mouse_buttons.just_pressed(MouseButton::Left) || keys.just_released(KeyCode::Digit1);
    sample.toggle_debug |= keys.just_released(KeyCode::KeyD);
    sample.restart |= keys.just_released(KeyCode::KeyR);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_maps_one_to_one_when_sizes_match() {
        let p = window_to_field(
            Vec2::new(123.0, 456.0),
            Vec2::new(800.0, 800.0),
            Vec2::new(800.0, 800.0),
        );
        assert_eq!(p, Vec2::new(123.0, 456.0));
    }

    #[test]
    fn cursor_scales_to_field() {
        let p = window_to_field(
            Vec2::new(200.0, 100.0),
            Vec2::new(400.0, 400.0),
            Vec2::new(800.0, 800.0),
        );
        assert_eq!(p, Vec2::new(400.0, 200.0));
    }

    #[test]
    fn zero_sized_window_passes_cursor_through() {
        let p = window_to_field(Vec2::new(5.0, 6.0), Vec2::ZERO, Vec2::new(800.0, 800.0));
        assert_eq!(p, Vec2::new(5.0, 6.0));
    }
}
