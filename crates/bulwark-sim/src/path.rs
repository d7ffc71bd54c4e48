//! The fixed route enemies walk.

use glam::DVec2;

use bulwark_core::error::PathError;
use bulwark_core::types::Position;

/// Immutable ordered waypoint list with at least two points.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    waypoints: Vec<Position>,
}

impl Path {
    pub fn new(waypoints: Vec<Position>) -> Result<Self, PathError> {
        if waypoints.len() < 2 {
            return Err(PathError::TooFewWaypoints {
                len: waypoints.len(),
            });
        }
        Ok(Self { waypoints })
    }

    /// The default map: enters off-screen left, zig-zags, exits right.
    pub fn default_map() -> Self {
        Self {
            waypoints: [
                (-40.0, 150.0),
                (160.0, 150.0),
                (160.0, 320.0),
                (420.0, 320.0),
                (420.0, 260.0),
                (700.0, 260.0),
                (920.0, 260.0),
            ]
            .into_iter()
            .map(|(x, y)| Position::new(x, y))
            .collect(),
        }
    }

    /// Waypoint `i`, clamped to the last waypoint.
    pub fn waypoint(&self, i: usize) -> Position {
        self.waypoints[i.min(self.waypoints.len() - 1)]
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn last_index(&self) -> usize {
        self.waypoints.len() - 1
    }

    pub fn start(&self) -> Position {
        self.waypoints[0]
    }

    /// Perpendicular distance from `point` to the nearest path segment.
    /// Zero-length segments are skipped.
    pub fn distance_to(&self, point: &Position) -> f64 {
        let p = point.as_vec();
        self.waypoints
            .windows(2)
            .filter_map(|seg| segment_distance(p, seg[0].as_vec(), seg[1].as_vec()))
            .fold(f64::INFINITY, f64::min)
    }
}

fn segment_distance(p: DVec2, a: DVec2, b: DVec2) -> Option<f64> {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq == 0.0 {
        return None;
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    Some(p.distance(a + ab * t))
}
