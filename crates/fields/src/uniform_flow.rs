//! Uniform flow field: a constant attractor.
//!
//! The potential is a plane sloping down in the flow direction, so the
//! force is the same vector everywhere. Used to pull an agent toward a
//! goal direction regardless of position.

use glam::DVec2;
use navfield_core::error::FieldError;
use navfield_core::integral::{integrate_segment, ParametricLineIntegral};
use navfield_core::params::param_f64;
use navfield_core::PotentialField;
use serde_json::Value;

/// Default flow angle in radians.
const DEFAULT_ANGLE: f64 = 0.0;
/// Default flow strength (slope of the potential plane).
const DEFAULT_STRENGTH: f64 = 1.0;

/// Construction parameters for a [`UniformFlow`] field.
#[derive(Debug, Clone, Copy)]
pub struct UniformFlowParams {
    /// Origin of the field (descriptive; the flow is position-independent).
    pub origin_x: f64,
    /// See `origin_x`.
    pub origin_y: f64,
    /// Direction the flow pushes toward, in radians.
    pub angle: f64,
    /// Slope of the potential plane.
    pub strength: f64,
}

impl Default for UniformFlowParams {
    fn default() -> Self {
        Self {
            origin_x: 0.0,
            origin_y: 0.0,
            angle: DEFAULT_ANGLE,
            strength: DEFAULT_STRENGTH,
        }
    }
}

impl UniformFlowParams {
    /// Extracts parameters from a JSON object, falling back to defaults.
    pub fn from_json(params: &Value) -> Self {
        Self {
            origin_x: param_f64(params, "origin_x", 0.0),
            origin_y: param_f64(params, "origin_y", 0.0),
            angle: param_f64(params, "angle", DEFAULT_ANGLE),
            strength: param_f64(params, "strength", DEFAULT_STRENGTH),
        }
    }
}

/// A uniform flow potential field.
///
/// The potential at `p` is `p . multiplier` with
/// `multiplier = -strength * (cos angle, sin angle)`, so the force is the
/// constant `strength * (cos angle, sin angle)` in every point.
#[derive(Debug, Clone, Copy)]
pub struct UniformFlow {
    origin: DVec2,
    angle: f64,
    strength: f64,
    multiplier: DVec2,
}

impl UniformFlow {
    /// Creates a uniform flow pushing toward `angle` with the given
    /// strength.
    ///
    /// Returns `FieldError::NonFiniteParameter` for a NaN or infinite
    /// angle, strength, or origin component.
    pub fn new(origin: DVec2, angle: f64, strength: f64) -> Result<Self, FieldError> {
        if !angle.is_finite() {
            return Err(FieldError::NonFiniteParameter {
                name: "angle",
                value: angle,
            });
        }
        if !strength.is_finite() {
            return Err(FieldError::NonFiniteParameter {
                name: "strength",
                value: strength,
            });
        }
        if !origin.is_finite() {
            return Err(FieldError::NonFiniteParameter {
                name: "origin",
                value: if origin.x.is_finite() {
                    origin.y
                } else {
                    origin.x
                },
            });
        }
        Ok(Self {
            origin,
            angle,
            strength,
            multiplier: DVec2::from_angle(angle) * -strength,
        })
    }

    /// Creates a uniform flow from a JSON params object.
    pub fn from_json(params: &Value) -> Result<Self, FieldError> {
        let p = UniformFlowParams::from_json(params);
        Self::new(DVec2::new(p.origin_x, p.origin_y), p.angle, p.strength)
    }

    /// The direction the flow pushes toward, in radians.
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// The slope of the potential plane.
    pub fn strength(&self) -> f64 {
        self.strength
    }
}

impl ParametricLineIntegral for UniformFlow {
    fn antiderivative(&self, from: DVec2, to: DVec2) -> impl Fn(f64) -> f64 {
        let delta = to - from;
        let multiplier = self.multiplier;
        move |t| (delta * (t * t / 2.0) + from * t).dot(multiplier)
    }
}

impl PotentialField for UniformFlow {
    fn potential(&self, position: DVec2) -> f64 {
        position.dot(self.multiplier)
    }

    fn force(&self, _position: DVec2) -> DVec2 {
        -self.multiplier
    }

    fn line_integral(&self, from: DVec2, to: DVec2) -> f64 {
        integrate_segment(self, from, to)
    }

    fn origin(&self) -> DVec2 {
        self.origin
    }
}
