//! Hydrodynamic flow-around-obstacle field.
//!
//! The harmonic potential `height * ln(|local(p)|^2) / 2 pi` from the
//! Kim-Oh formulation of hydrodynamic obstacle avoidance. The potential is
//! unbounded at the field's own origin (`ln 0`); callers must not query
//! exactly there. That precondition is documented rather than checked —
//! a singular query propagates the non-finite value the arithmetic
//! produces.

use glam::DVec2;
use navfield_core::error::FieldError;
use navfield_core::frame::Frame;
use navfield_core::integral::{integrate_segment_local, ParametricLineIntegral};
use navfield_core::params::param_f64;
use navfield_core::PotentialField;
use serde_json::Value;
use std::f64::consts::PI;

/// Default source strength.
const DEFAULT_HEIGHT: f64 = 1.0;
/// Default extent along the local x-axis.
const DEFAULT_LENGTH: f64 = 1.0;
/// Default extent along the local y-axis.
const DEFAULT_WIDTH: f64 = 1.0;
/// Default orientation in radians.
const DEFAULT_ANGLE: f64 = 0.0;

/// Construction parameters for a [`Hydrodynamic`] field.
#[derive(Debug, Clone, Copy)]
pub struct HydrodynamicParams {
    /// Center of the obstacle.
    pub origin_x: f64,
    /// See `origin_x`.
    pub origin_y: f64,
    /// Source strength; negative values raise a barrier around the origin.
    pub height: f64,
    /// Extent along the local y-axis.
    pub width: f64,
    /// Extent along the local x-axis.
    pub length: f64,
    /// Orientation in radians.
    pub angle: f64,
}

impl Default for HydrodynamicParams {
    fn default() -> Self {
        Self {
            origin_x: 0.0,
            origin_y: 0.0,
            height: DEFAULT_HEIGHT,
            width: DEFAULT_WIDTH,
            length: DEFAULT_LENGTH,
            angle: DEFAULT_ANGLE,
        }
    }
}

impl HydrodynamicParams {
    /// Extracts parameters from a JSON object, falling back to defaults.
    pub fn from_json(params: &Value) -> Self {
        Self {
            origin_x: param_f64(params, "origin_x", 0.0),
            origin_y: param_f64(params, "origin_y", 0.0),
            height: param_f64(params, "height", DEFAULT_HEIGHT),
            width: param_f64(params, "width", DEFAULT_WIDTH),
            length: param_f64(params, "length", DEFAULT_LENGTH),
            angle: param_f64(params, "angle", DEFAULT_ANGLE),
        }
    }
}

/// A hydrodynamic potential field around an obstacle.
#[derive(Debug, Clone, Copy)]
pub struct Hydrodynamic {
    frame: Frame,
    height: f64,
}

impl Hydrodynamic {
    /// Creates a hydrodynamic field centered on `origin` with the given
    /// strength, extents, and orientation.
    ///
    /// Returns `FieldError::InvalidExtent` unless both extents are positive
    /// and finite, and `FieldError::NonFiniteParameter` for a NaN or
    /// infinite height, angle, or origin component.
    pub fn new(
        origin: DVec2,
        height: f64,
        width: f64,
        length: f64,
        angle: f64,
    ) -> Result<Self, FieldError> {
        if !height.is_finite() {
            return Err(FieldError::NonFiniteParameter {
                name: "height",
                value: height,
            });
        }
        Ok(Self {
            frame: Frame::new(origin, angle, length, width)?,
            height,
        })
    }

    /// Creates a hydrodynamic field from a JSON params object.
    pub fn from_json(params: &Value) -> Result<Self, FieldError> {
        let p = HydrodynamicParams::from_json(params);
        Self::new(
            DVec2::new(p.origin_x, p.origin_y),
            p.height,
            p.width,
            p.length,
            p.angle,
        )
    }

    /// The source strength.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// The field's reference frame.
    pub fn frame(&self) -> &Frame {
        &self.frame
    }
}

impl ParametricLineIntegral for Hydrodynamic {
    /// Closed form for the integral of
    /// `height / 2 pi * ln((A t + B)^2 + (C t + D)^2)` in `t`, where the
    /// local segment is `(A t + B, C t + D)`. With `u = A^2 + C^2`,
    /// `v = A B + C D`, `w = B^2 + D^2`, `k = A D - B C`:
    ///
    /// `height / (2 pi u) * ((u t + v) ln(u t^2 + 2 v t + w)
    ///  + 2 k atan(-k / (u t + v)) - 2 u t)`
    fn antiderivative(&self, from: DVec2, to: DVec2) -> impl Fn(f64) -> f64 {
        let height = self.height;
        let delta = to - from;
        let u = delta.length_squared();
        let v = delta.dot(from);
        let w = from.length_squared();
        let k = delta.perp_dot(from);
        move |t| {
            if u == 0.0 {
                return 0.0;
            }
            let linear = u * t + v;
            let quadratic = u * t * t + 2.0 * v * t + w;
            let log_term = linear * quadratic.ln();
            // The arctangent term carries a factor of k; dropping it when
            // k == 0 avoids 0 * atan(inf) turning into NaN on segments
            // aimed straight at the origin.
            let atan_term = if k == 0.0 {
                0.0
            } else {
                2.0 * k * (-k / linear).atan()
            };
            height * (log_term + atan_term - 2.0 * u * t) / (2.0 * PI * u)
        }
    }
}

impl PotentialField for Hydrodynamic {
    fn potential(&self, position: DVec2) -> f64 {
        let local = self.frame.to_local(position);
        self.height * local.length_squared().ln() / (2.0 * PI)
    }

    fn force(&self, position: DVec2) -> DVec2 {
        let local = self.frame.to_local(position);
        let local_gradient = local / local.length_squared() * (self.height / PI);
        -self.frame.gradient_to_global(local_gradient)
    }

    fn line_integral(&self, from: DVec2, to: DVec2) -> f64 {
        integrate_segment_local(self, &self.frame, from, to)
    }

    fn origin(&self) -> DVec2 {
        self.frame.origin()
    }
}
