//! Anisotropic Gaussian bump field.
//!
//! Models an obstacle (or goal, with negative height) as a smooth bump:
//! the potential is `height * exp(-|local(p)|^2)` in the field's own
//! oriented, scaled frame. The line integral has a closed form through the
//! Gaussian error function.

use glam::DVec2;
use navfield_core::error::FieldError;
use navfield_core::frame::Frame;
use navfield_core::integral::{integrate_segment_local, ParametricLineIntegral};
use navfield_core::params::param_f64;
use navfield_core::PotentialField;
use serde_json::Value;
use statrs::function::erf::erf;
use std::f64::consts::PI;

/// Default peak height.
const DEFAULT_HEIGHT: f64 = 1.0;
/// Default extent along the local x-axis.
const DEFAULT_LENGTH: f64 = 1.0;
/// Default extent along the local y-axis.
const DEFAULT_WIDTH: f64 = 1.0;
/// Default orientation in radians.
const DEFAULT_ANGLE: f64 = 0.0;

/// Construction parameters for a [`Gaussian`] field.
#[derive(Debug, Clone, Copy)]
pub struct GaussianParams {
    /// Center of the bump.
    pub origin_x: f64,
    /// See `origin_x`.
    pub origin_y: f64,
    /// Potential at the peak.
    pub height: f64,
    /// Extent along the local y-axis.
    pub width: f64,
    /// Extent along the local x-axis.
    pub length: f64,
    /// Orientation in radians.
    pub angle: f64,
}

impl Default for GaussianParams {
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

impl GaussianParams {
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

/// An anisotropic Gaussian potential field.
#[derive(Debug, Clone, Copy)]
pub struct Gaussian {
    frame: Frame,
    height: f64,
}

impl Gaussian {
    /// Creates a Gaussian bump centered on `origin` with the given peak
    /// height, extents, and orientation.
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

    /// Creates a Gaussian field from a JSON params object.
    pub fn from_json(params: &Value) -> Result<Self, FieldError> {
        let p = GaussianParams::from_json(params);
        Self::new(
            DVec2::new(p.origin_x, p.origin_y),
            p.height,
            p.width,
            p.length,
            p.angle,
        )
    }

    /// The potential at the peak.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// The field's reference frame.
    pub fn frame(&self) -> &Frame {
        &self.frame
    }
}

impl ParametricLineIntegral for Gaussian {
    /// Closed form for the integral of
    /// `height * exp(-((A t + B)^2 + (C t + D)^2))` in `t`, where the
    /// local segment is `(A t + B, C t + D)`:
    ///
    /// `height * sqrt(pi) / (2 sqrt(u)) * exp(-k^2 / u)
    ///  * erf((u t + v) / sqrt(u))`
    ///
    /// with `u = A^2 + C^2`, `v = A B + C D`, `k = A D - B C`.
    fn antiderivative(&self, from: DVec2, to: DVec2) -> impl Fn(f64) -> f64 {
        let height = self.height;
        let delta = to - from;
        let u = delta.length_squared();
        let v = delta.dot(from);
        let k = delta.perp_dot(from);
        move |t| {
            if u == 0.0 {
                return 0.0;
            }
            let scale = height * PI.sqrt() / (2.0 * u.sqrt());
            let envelope = (-k * k / u).exp();
            scale * envelope * erf((u * t + v) / u.sqrt())
        }
    }
}

impl PotentialField for Gaussian {
    fn potential(&self, position: DVec2) -> f64 {
        let local = self.frame.to_local(position);
        self.height * (-local.length_squared()).exp()
    }

    fn force(&self, position: DVec2) -> DVec2 {
        let local = self.frame.to_local(position);
        let potential = self.height * (-local.length_squared()).exp();
        self.frame.gradient_to_global(local * (2.0 * potential))
    }

    fn line_integral(&self, from: DVec2, to: DVec2) -> f64 {
        integrate_segment_local(self, &self.frame, from, to)
    }

    fn origin(&self) -> DVec2 {
        self.frame.origin()
    }
}
