//! Planar rotation and cardinal directions.
//!
//! `rotate` is the one rotation primitive every reference frame is built
//! from. [`CardinalDirection`] names the four principal edge directions of
//! an axis-aligned rectangle; the boundary field dispatches its per-edge
//! math over it.

use glam::{DMat2, DVec2};
use std::f64::consts::{FRAC_PI_2, TAU};

/// Applies the standard planar rotation matrix
/// `[[cos, -sin], [sin, cos]]` to `v`.
///
/// A positive angle rotates counter-clockwise. Pure and total: every
/// finite input produces a finite output.
pub fn rotate(v: DVec2, angle: f64) -> DVec2 {
    DMat2::from_angle(angle) * v
}

/// The four principal cardinal directions.
///
/// North is orientation zero; the rest follow clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardinalDirection {
    North,
    East,
    South,
    West,
}

impl CardinalDirection {
    /// All four directions, in dispatch order.
    pub const ALL: [CardinalDirection; 4] = [
        CardinalDirection::North,
        CardinalDirection::East,
        CardinalDirection::South,
        CardinalDirection::West,
    ];

    /// Snaps an orientation in radians (north = 0, clockwise positive) to
    /// the nearest principal direction.
    pub fn from_angle(orientation: f64) -> Self {
        let quadrant = (orientation.rem_euclid(TAU) / FRAC_PI_2).round() as usize % 4;
        Self::ALL[quadrant]
    }
}
