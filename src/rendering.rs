//! Gizmo drawing and the score HUD.
//!
//! Reads the [`ActiveSimulation`] after the tick system has run; never mutates it.
//!
//! ## Layer model
//!
//! | Layer                 | Technology | Visible                 |
//! |-----------------------|------------|-------------------------|
//! | Planet, ship, shots   | Gizmos     | always                  |
//! | Enemy bodies          | Gizmos     | always, fade when dying |
//! | Collision circles     | Gizmos     | debug mode              |
//! | Enemy hit-point bars  | Gizmos     | debug mode              |
//! | Score / win banner    | UI `Text`  | always                  |

use crate::config::GameConfig;
use crate::enemy::{Enemy, EnemyKind, EnemyPhase};
use crate::geometry::FieldBounds;
use crate::graphics::{field_angle_to_world, field_to_world};
use crate::simulation::{ActiveSimulation, Simulation};
use bevy::prelude::*;

/// Marker for the HUD score node.
#[derive(Component)]
pub struct HudScoreDisplay;

const PLANET_COLOR: Color = Color::srgb(0.35, 0.55, 0.95);
const PLAYER_COLOR: Color = Color::srgb(0.2, 0.9, 0.9);
const PROJECTILE_COLOR: Color = Color::srgb(1.0, 0.84, 0.0);
const DEBUG_COLOR: Color = Color::WHITE;

fn enemy_color(kind: EnemyKind) -> Color {
    match kind {
        EnemyKind::Asteroid => Color::srgb(0.65, 0.55, 0.45),
        EnemyKind::Lobstermorph => Color::srgb(0.95, 0.35, 0.3),
    }
}

/// Dying enemies fade out across their remaining animation frames.
fn enemy_alpha(enemy: &Enemy) -> f32 {
    match enemy.phase() {
        EnemyPhase::Dying => {
            let progress = enemy.animation_frame as f32 / (enemy.max_frame() + 1) as f32;
            (1.0 - progress).clamp(0.15, 1.0)
        }
        _ => 1.0,
    }
}

// ── Startup: score HUD ────────────────────────────────────────────────────────

/// Spawn the permanent top-left score HUD.
pub fn setup_hud_score(mut commands: Commands, config: Res<GameConfig>) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(10.0),
                top: Val::Px(10.0),
                ..default()
            },
            HudScoreDisplay,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("Score: 0"),
                TextFont {
                    font_size: config.hud_font_size,
                    ..default()
                },
                TextColor(Color::srgb(0.95, 0.88, 0.45)),
            ));
        });
}

/// HUD line for the current session state.
pub fn hud_text(simulation: &Simulation) -> String {
    match simulation.status_message() {
        Some(message) => format!("{message}  Press R to play again"),
        None => format!(
            "Score: {} / {}",
            simulation.score(),
            simulation.winning_score()
        ),
    }
}

// ── Update: score HUD ─────────────────────────────────────────────────────────

/// Refresh the score HUD whenever the session changes.
pub fn hud_score_display_system(
    simulation: Option<Res<ActiveSimulation>>,
    parent_query: Query<&Children, With<HudScoreDisplay>>,
    mut text_query: Query<&mut Text>,
) {
    let Some(simulation) = simulation else {
        return;
    };
    if !simulation.is_changed() {
        return;
    }
    let line = hud_text(&simulation.0);
    for children in parent_query.iter() {
        for child in children.iter() {
            if let Ok(mut text) = text_query.get_mut(child) {
                *text = Text::new(line.clone());
            }
        }
    }
}

// ── Update: gizmos ────────────────────────────────────────────────────────────

/// Draw a horizontal bar above `center` filled to `fraction`.
fn draw_bar(gizmos: &mut Gizmos, center: Vec2, half_width: f32, fraction: f32, color: Color) {
    let left = center - Vec2::new(half_width, 0.0);
    let right = center + Vec2::new(half_width, 0.0);
    gizmos.line_2d(left, right, Color::srgba(1.0, 1.0, 1.0, 0.25));
    let filled = left + Vec2::new(2.0 * half_width * fraction.clamp(0.0, 1.0), 0.0);
    gizmos.line_2d(left, filled, color);
}

/// Draw the planet, ship, projectiles and enemies.
pub fn draw_simulation_system(mut gizmos: Gizmos, simulation: Option<Res<ActiveSimulation>>) {
    let Some(simulation) = simulation else {
        return;
    };
    let sim = &simulation.0;
    let bounds: FieldBounds = sim.bounds();
    let debug = sim.debug_mode();

    // Planet
    let planet = sim.planet();
    let planet_pos = field_to_world(planet.position, bounds);
    gizmos.circle_2d(planet_pos, planet.radius, PLANET_COLOR);

    // Ship: hull ring plus a nose line along the facing angle.
    let player = sim.player();
    let player_pos = field_to_world(player.position, bounds);
    // The sprite faces along the raw aim delta, which points back at the planet.
    let facing = field_angle_to_world(player.orientation_angle);
    let nose = player_pos - Vec2::from_angle(facing) * player.radius;
    gizmos.circle_2d(player_pos, player.radius * 0.6, PLAYER_COLOR);
    gizmos.line_2d(player_pos, nose, PLAYER_COLOR);
    if debug {
        gizmos.circle_2d(player_pos, player.radius, DEBUG_COLOR);
        gizmos.circle_2d(planet_pos, planet.radius, DEBUG_COLOR);
    }

    // Projectiles
    for projectile in sim.projectiles().iter_active() {
        let pos = field_to_world(projectile.position, bounds);
        gizmos.circle_2d(pos, projectile.radius, PROJECTILE_COLOR);
    }

    // Enemies
    for enemy in sim.enemies().iter_active() {
        let pos = field_to_world(enemy.position, bounds);
        let color = enemy_color(enemy.kind).with_alpha(enemy_alpha(enemy));
        gizmos.circle_2d(pos, enemy.radius * 0.8, color);

        if debug {
            gizmos.circle_2d(pos, enemy.radius, DEBUG_COLOR);
            let fraction = enemy.hit_points as f32 / enemy.max_hit_points() as f32;
            draw_bar(
                &mut gizmos,
                pos + Vec2::new(0.0, enemy.radius + 8.0),
                enemy.radius * 0.75,
                fraction,
                Color::srgb(0.3, 1.0, 0.4),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::InputSample;

    fn sim() -> Simulation {
        let config = GameConfig {
            seed: Some(5),
            ..GameConfig::default()
        };
        Simulation::new(&config).unwrap()
    }

    #[test]
    fn hud_shows_progress_then_win_banner() {
        let mut s = sim();
        assert_eq!(hud_text(&s), "Score: 0 / 10");

        for enemy in s.enemies_mut().iter_mut().take(10) {
            enemy.active = true;
            enemy.position = Vec2::new(-500.0, -500.0);
            enemy.hit_points = 0;
        }
        while !s.is_game_over() {
            s.tick(150.0, InputSample::default());
        }
        assert!(hud_text(&s).starts_with("You win, your score is 10!"));
    }

    #[test]
    fn dying_enemies_fade_but_stay_visible() {
        let mut enemy = Enemy::new(EnemyKind::Asteroid);
        enemy.active = true;
        assert_eq!(enemy_alpha(&enemy), 1.0);

        enemy.hit_points = 0;
        enemy.animation_frame = 7;
        let alpha = enemy_alpha(&enemy);
        assert!(alpha < 1.0 && alpha >= 0.15);
    }
}
