//! Rectangular boundary field.
//!
//! Bounds the workspace rectangle `[0, width] x [0, length]` with four
//! logistic edge terms. Each edge contributes
//! `1 / (1 + exp(displacement - d))` in the distance `d` to that edge, so
//! the potential ramps across a band of roughly `displacement` around each
//! edge and flattens out elsewhere. The field's origin is pinned to the
//! rectangle corner at zero.

use glam::DVec2;
use navfield_core::error::FieldError;
use navfield_core::geometry::CardinalDirection;
use navfield_core::integral::{integrate_segment, ParametricLineIntegral};
use navfield_core::params::param_f64;
use navfield_core::PotentialField;
use serde_json::Value;

/// Default workspace width.
const DEFAULT_WIDTH: f64 = 10.0;
/// Default workspace length.
const DEFAULT_LENGTH: f64 = 10.0;
/// Default displacement of the potential band from the edge.
const DEFAULT_DISPLACEMENT: f64 = 1.0;

/// Construction parameters for a [`Boundary`] field.
#[derive(Debug, Clone, Copy)]
pub struct BoundaryParams {
    /// Extent of the rectangle along the x-axis.
    pub width: f64,
    /// Extent of the rectangle along the y-axis.
    pub length: f64,
    /// Displacement of the potential band from each edge.
    pub displacement: f64,
}

impl Default for BoundaryParams {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            length: DEFAULT_LENGTH,
            displacement: DEFAULT_DISPLACEMENT,
        }
    }
}

impl BoundaryParams {
    /// Extracts parameters from a JSON object, falling back to defaults.
    pub fn from_json(params: &Value) -> Self {
        Self {
            width: param_f64(params, "width", DEFAULT_WIDTH),
            length: param_f64(params, "length", DEFAULT_LENGTH),
            displacement: param_f64(params, "displacement", DEFAULT_DISPLACEMENT),
        }
    }
}

/// A rectangular boundary potential field.
///
/// The potential is the sum of one logistic term per edge; the force is
/// its exact negative gradient, composed of the per-edge logistic
/// derivative along each edge normal. The line integral sums a per-edge
/// closed-form antiderivative over the four edges and scales by segment
/// length.
#[derive(Debug, Clone, Copy)]
pub struct Boundary {
    width: f64,
    length: f64,
    displacement: f64,
}

/// `ln(e^a + e^b)` without overflowing for large exponents.
fn ln_add_exp(a: f64, b: f64) -> f64 {
    let (hi, lo) = if a >= b { (a, b) } else { (b, a) };
    hi + (lo - hi).exp().ln_1p()
}

impl Boundary {
    /// Creates a boundary field for the rectangle
    /// `[0, width] x [0, length]`.
    ///
    /// Returns `FieldError::InvalidExtent` unless both extents are positive
    /// and finite, and `FieldError::NonFiniteParameter` for a NaN or
    /// infinite displacement.
    pub fn new(width: f64, length: f64, displacement: f64) -> Result<Self, FieldError> {
        if !(width.is_finite() && width > 0.0) {
            return Err(FieldError::InvalidExtent {
                name: "width",
                value: width,
            });
        }
        if !(length.is_finite() && length > 0.0) {
            return Err(FieldError::InvalidExtent {
                name: "length",
                value: length,
            });
        }
        if !displacement.is_finite() {
            return Err(FieldError::NonFiniteParameter {
                name: "displacement",
                value: displacement,
            });
        }
        Ok(Self {
            width,
            length,
            displacement,
        })
    }

    /// Creates a boundary field from a JSON params object.
    pub fn from_json(params: &Value) -> Result<Self, FieldError> {
        let p = BoundaryParams::from_json(params);
        Self::new(p.width, p.length, p.displacement)
    }

    /// Extent of the rectangle along the x-axis.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Extent of the rectangle along the y-axis.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Displacement of the potential band from each edge.
    pub fn displacement(&self) -> f64 {
        self.displacement
    }

    /// Potential due to a single edge at the given distance from it.
    fn edge_potential(&self, distance: f64) -> f64 {
        1.0 / (1.0 + (self.displacement - distance).exp())
    }

    /// Magnitude of the force due to a single edge.
    ///
    /// Logistic derivative in the product form `s * (1 - s)`, which stays
    /// finite for any distance.
    fn edge_force(&self, distance: f64) -> f64 {
        let s = self.edge_potential(distance);
        s * (1.0 - s)
    }

    /// Start and end distances to one edge along the segment `from -> to`.
    fn edge_bounds(&self, from: DVec2, to: DVec2, edge: CardinalDirection) -> (f64, f64) {
        match edge {
            CardinalDirection::North => (from.x, to.x),
            CardinalDirection::South => (self.width - from.x, self.width - to.x),
            CardinalDirection::East => (from.y, to.y),
            CardinalDirection::West => (self.length - from.y, self.length - to.y),
        }
    }

    /// Antiderivative of one edge's logistic term along the segment where
    /// the distance to the edge moves linearly from `start` to `end`.
    ///
    /// A segment parallel to the edge (`start == end`) contributes zero.
    fn edge_antiderivative(&self, start: f64, end: f64) -> impl Fn(f64) -> f64 {
        let displacement = self.displacement;
        let slope = end - start;
        move |t| {
            if slope == 0.0 {
                0.0
            } else {
                ln_add_exp(slope * t + start, displacement) / slope
            }
        }
    }
}

impl ParametricLineIntegral for Boundary {
    fn antiderivative(&self, from: DVec2, to: DVec2) -> impl Fn(f64) -> f64 {
        let edges = CardinalDirection::ALL.map(|edge| {
            let (start, end) = self.edge_bounds(from, to, edge);
            self.edge_antiderivative(start, end)
        });
        move |t| edges.iter().map(|edge| edge(t)).sum()
    }
}

impl PotentialField for Boundary {
    fn potential(&self, position: DVec2) -> f64 {
        self.edge_potential(position.x)
            + self.edge_potential(self.width - position.x)
            + self.edge_potential(position.y)
            + self.edge_potential(self.length - position.y)
    }

    fn force(&self, position: DVec2) -> DVec2 {
        DVec2::new(
            self.edge_force(self.width - position.x) - self.edge_force(position.x),
            self.edge_force(self.length - position.y) - self.edge_force(position.y),
        )
    }

    fn line_integral(&self, from: DVec2, to: DVec2) -> f64 {
        integrate_segment(self, from, to)
    }

    fn origin(&self) -> DVec2 {
        DVec2::ZERO
    }
}
