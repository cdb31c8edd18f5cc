//! Recorded draw commands
//!
//! A [`Surface`] that stores what was drawn instead of rasterizing it.

use super::{Color, PathCmd, Surface};
use crate::sim::Rect;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear,
    Rect { rect: Rect, color: Color },
    Path { path: Vec<PathCmd>, color: Color },
}

#[derive(Debug, Default)]
pub struct DrawList(pub Vec<DrawCommand>);

impl DrawList {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, cmd: DrawCommand) {
        self.0.push(cmd);
    }

    /// Number of filled outlines recorded
    pub fn path_count(&self) -> usize {
        self.0
            .iter()
            .filter(|cmd| matches!(cmd, DrawCommand::Path { .. }))
            .count()
    }
}

impl Surface for DrawList {
    /// Clearing drops earlier frames so the list only holds the latest one
    fn clear(&mut self) {
        self.0.clear();
        self.push(DrawCommand::Clear);
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.push(DrawCommand::Rect { rect, color });
    }

    fn fill_path(&mut self, path: &[PathCmd], color: Color) {
        self.push(DrawCommand::Path {
            path: path.to_vec(),
            color,
        });
    }
}
