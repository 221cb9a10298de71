use crate::config::GameConfig;
use crate::geometry::FieldBounds;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

/// Setup camera for 2D rendering.  The default `Camera2d` centres the world
/// origin in the window, which is where [`field_to_world`] puts the field centre.
pub fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Resize the primary window to the configured field so one field unit is one
/// logical pixel.  Must run after the config has been loaded.
pub fn fit_window_to_field(
    config: Res<GameConfig>,
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
) {
    let Ok(mut window) = windows.single_mut() else {
        return;
    };
    let bounds = config.field_bounds();
    if window.width() != bounds.width || window.height() != bounds.height {
        window.resolution.set(bounds.width, bounds.height);
        info!("Window sized to {}x{} field", bounds.width, bounds.height);
    }
}

/// Convert a play-field point (origin top-left, +Y down) to Bevy world space
/// (origin centre, +Y up).
#[inline]
pub fn field_to_world(point: Vec2, bounds: FieldBounds) -> Vec2 {
    Vec2::new(point.x - bounds.width * 0.5, bounds.height * 0.5 - point.y)
}

/// Convert a play-field angle to a world-space angle.  Flipping Y mirrors the
/// rotation direction.
#[inline]
pub fn field_angle_to_world(angle: f32) -> f32 {
    -angle
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIELD: FieldBounds = FieldBounds {
        width: 800.0,
        height: 600.0,
    };

    #[test]
    fn field_centre_is_world_origin() {
        assert_eq!(field_to_world(Vec2::new(400.0, 300.0), FIELD), Vec2::ZERO);
    }

    #[test]
    fn top_left_maps_to_upper_left_quadrant() {
        assert_eq!(
            field_to_world(Vec2::ZERO, FIELD),
            Vec2::new(-400.0, 300.0)
        );
    }

    #[test]
    fn angle_flip_matches_point_flip() {
        let dir = Vec2::new(0.6, 0.8);
        let field_angle = dir.y.atan2(dir.x);
        // A field direction flips its Y component in world space.
        let world_dir = Vec2::new(dir.x, -dir.y);
        let world_angle = world_dir.y.atan2(world_dir.x);
        assert!((field_angle_to_world(field_angle) - world_angle).abs() < 1e-5);
    }

    #[test]
    fn window_follows_configured_field() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .insert_resource(GameConfig {
                field_width: 640.0,
                field_height: 480.0,
                ..GameConfig::default()
            })
            .add_systems(Update, fit_window_to_field);
        app.world_mut().spawn((Window::default(), PrimaryWindow));
        app.update();

        let mut windows = app
            .world_mut()
            .query_filtered::<&Window, With<PrimaryWindow>>();
        let window = windows.single(app.world()).unwrap();
        assert_eq!(window.width(), 640.0);
        assert_eq!(window.height(), 480.0);
    }
}
