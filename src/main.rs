use bevy::prelude::*;
use bevy::window::WindowResolution;
use planet_defense::config::{self, GameConfig};
use planet_defense::constants::{FIELD_HEIGHT, FIELD_WIDTH};
use planet_defense::graphics;
use planet_defense::input;
use planet_defense::rendering;
use planet_defense::simulation::{self, SimulationPlugin};

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Planet Defense".into(),
            // Compiled field size; `fit_window_to_field` applies a config override.
            resolution: WindowResolution::new(FIELD_WIDTH as u32, FIELD_HEIGHT as u32),
            resizable: false,
            ..Default::default()
        }),
        ..Default::default()
    }))
    .insert_resource(ClearColor(Color::BLACK))
    // Insert GameConfig with compiled defaults; load_game_config will
    // overwrite it from assets/game.toml (if present) in the Startup schedule.
    .insert_resource(GameConfig::default())
    .add_plugins(SimulationPlugin)
    .add_systems(
        Startup,
        (
            // Load config first so every other startup system sees the final values.
            config::load_game_config,
            graphics::setup_camera,
            graphics::fit_window_to_field.after(config::load_game_config),
            rendering::setup_hud_score.after(config::load_game_config),
        ),
    )
    .add_systems(
        Update,
        (
            input::sample_input_system.before(simulation::simulation_tick_system),
            (
                rendering::draw_simulation_system,
                rendering::hud_score_display_system,
            )
                .after(simulation::simulation_tick_system),
        ),
    );

    app.run();
}
