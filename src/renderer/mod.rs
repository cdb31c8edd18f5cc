//! 2D rendering module
//!
//! The simulation is drawn through the [`Surface`] trait: a browser canvas on
//! the web, a recorded [`DrawList`] for headless runs and tests.

pub mod commands;
pub mod heart;

pub use commands::{DrawCommand, DrawList};
pub use heart::{barrier_tiles, heart_path};

use glam::Vec2;

use crate::consts::ACTOR_X;
use crate::sim::{GameConfig, GameState, Rect, obstacle_hitboxes};

/// RGBA color, components in 0-1
pub type Color = [f32; 4];

/// One step of a filled outline
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCmd {
    MoveTo(Vec2),
    CubicTo { c1: Vec2, c2: Vec2, to: Vec2 },
}

/// A fixed-size 2D raster target
pub trait Surface {
    /// Erase everything drawn so far
    fn clear(&mut self);
    fn fill_rect(&mut self, rect: Rect, color: Color);
    /// Fill a closed outline
    fn fill_path(&mut self, path: &[PathCmd], color: Color);
}

/// Colors for game elements
pub mod colors {
    pub const ACTOR: [f32; 4] = [1.0, 0.75, 0.8, 1.0]; // Pink
    pub const HEART: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
}

/// Draw one frame: actor, then both barriers of every obstacle
pub fn render(state: &GameState, config: &GameConfig, surface: &mut impl Surface) {
    surface.clear();

    surface.fill_rect(
        Rect::new(ACTOR_X, state.actor.y, config.actor_size, config.actor_size),
        colors::ACTOR,
    );

    for obstacle in &state.obstacles {
        let (top, bottom) = obstacle_hitboxes(obstacle, config);
        for tile in barrier_tiles(top, config.obstacle_height) {
            surface.fill_path(&heart_path(tile, false), colors::HEART);
        }
        // Bottom hearts are flipped so they hang from the opening
        for tile in barrier_tiles(bottom, config.obstacle_height) {
            surface.fill_path(&heart_path(tile, true), colors::HEART);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Obstacle, Phase};

    #[test]
    fn test_render_draws_actor_and_hearts() {
        let config = GameConfig::default();
        let mut state = GameState::new(&config, 1);
        state.phase = Phase::Running;
        state.obstacles.push(Obstacle { x: 200.0, gap_start: 120.0 });

        let mut list = DrawList::new();
        render(&state, &config, &mut list);

        assert_eq!(list.0[0], DrawCommand::Clear);
        assert_eq!(
            list.0[1],
            DrawCommand::Rect {
                rect: Rect::new(50.0, 350.0, 30.0, 30.0),
                color: colors::ACTOR,
            }
        );
        // Top barrier 120 tall -> 3 tiles, bottom 380 tall -> 10 tiles
        assert_eq!(list.path_count(), 13);
    }

    #[test]
    fn test_render_empty_field() {
        let config = GameConfig::default();
        let state = GameState::new(&config, 1);
        let mut list = DrawList::new();
        render(&state, &config, &mut list);
        assert_eq!(list.0.len(), 2);
        assert_eq!(list.path_count(), 0);
    }
}
