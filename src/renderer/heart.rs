//! Heart silhouette generation
//!
//! The outline is authored in a 100x100 design box centered on the origin and
//! scaled uniformly to fit the target box.

use glam::Vec2;

use super::PathCmd;
use crate::sim::Rect;

/// Side length of the design box
const DESIGN_SIZE: f32 = 100.0;

/// Outline in design units (y down): start point then two cubic curves
const START: Vec2 = Vec2::new(0.0, 30.0);
const CURVES: [[Vec2; 3]; 2] = [
    [Vec2::new(-40.0, -30.0), Vec2::new(-80.0, 20.0), Vec2::new(0.0, 80.0)],
    [Vec2::new(80.0, 20.0), Vec2::new(40.0, -30.0), Vec2::new(0.0, 30.0)],
];

/// Heart outline fitted to `bounds`, optionally mirrored vertically
pub fn heart_path(bounds: Rect, flipped: bool) -> Vec<PathCmd> {
    let center = bounds.min + bounds.size / 2.0;
    let scale = bounds.size.x.min(bounds.size.y) / DESIGN_SIZE;
    let flip = if flipped { -1.0 } else { 1.0 };
    let place = |p: Vec2| center + Vec2::new(p.x, p.y * flip) * scale;

    let mut path = Vec::with_capacity(CURVES.len() + 1);
    path.push(PathCmd::MoveTo(place(START)));
    for [c1, c2, to] in CURVES {
        path.push(PathCmd::CubicTo {
            c1: place(c1),
            c2: place(c2),
            to: place(to),
        });
    }
    path
}

/// Split a barrier into evenly sized tiles no taller than `max_tile_height`
///
/// A non-positive limit draws the barrier as a single tile. Empty barriers
/// produce no tiles.
pub fn barrier_tiles(barrier: Rect, max_tile_height: f32) -> Vec<Rect> {
    let height = barrier.size.y;
    if height <= 0.0 || barrier.size.x <= 0.0 {
        return Vec::new();
    }
    if max_tile_height <= 0.0 {
        return vec![barrier];
    }

    let count = (height / max_tile_height).ceil().max(1.0) as usize;
    let tile_height = height / count as f32;
    (0..count)
        .map(|i| {
            Rect::new(
                barrier.min.x,
                barrier.min.y + i as f32 * tile_height,
                barrier.size.x,
                tile_height,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(path: &[PathCmd]) -> Vec<Vec2> {
        path.iter()
            .flat_map(|cmd| match *cmd {
                PathCmd::MoveTo(p) => vec![p],
                PathCmd::CubicTo { c1, c2, to } => vec![c1, c2, to],
            })
            .collect()
    }

    #[test]
    fn test_heart_is_closed() {
        let path = heart_path(Rect::new(0.0, 0.0, 100.0, 100.0), false);
        assert_eq!(path.len(), 3);
        let PathCmd::MoveTo(start) = path[0] else {
            panic!("path must start with MoveTo");
        };
        let PathCmd::CubicTo { to: end, .. } = path[2] else {
            panic!("path must end with a curve");
        };
        assert_eq!(start, end);
    }

    #[test]
    fn test_heart_scales_to_smaller_axis() {
        // 40x200 box -> scale 0.4, centered at (20, 100)
        let path = heart_path(Rect::new(0.0, 0.0, 40.0, 200.0), false);
        assert_eq!(path[0], PathCmd::MoveTo(Vec2::new(20.0, 112.0)));
    }

    #[test]
    fn test_flipped_heart_mirrors_about_center() {
        let bounds = Rect::new(10.0, 10.0, 50.0, 50.0);
        let up = points(&heart_path(bounds, false));
        let down = points(&heart_path(bounds, true));
        let center_y = 35.0;
        for (a, b) in up.iter().zip(&down) {
            assert!((a.x - b.x).abs() < 1e-4);
            assert!(((a.y - center_y) + (b.y - center_y)).abs() < 1e-4);
        }
    }

    #[test]
    fn test_tiles_cover_barrier() {
        let tiles = barrier_tiles(Rect::new(5.0, 300.0, 40.0, 100.0), 40.0);
        assert_eq!(tiles.len(), 3);
        assert_eq!(tiles[0].min.y, 300.0);
        let last = tiles[2];
        assert!((last.max().y - 400.0).abs() < 1e-3);
        assert!(tiles.iter().all(|t| t.size.y <= 40.0));
    }

    #[test]
    fn test_tiles_degenerate() {
        assert!(barrier_tiles(Rect::new(0.0, 0.0, 40.0, 0.0), 40.0).is_empty());
        let single = barrier_tiles(Rect::new(0.0, 0.0, 40.0, 90.0), 0.0);
        assert_eq!(single, vec![Rect::new(0.0, 0.0, 40.0, 90.0)]);
    }
}
