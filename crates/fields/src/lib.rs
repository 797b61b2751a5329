#![deny(unsafe_code)]
//! Field archetypes and aggregation for the navfield potential-field
//! system.
//!
//! Four analytic archetypes implement the `PotentialField` contract —
//! [`Boundary`], [`Gaussian`], [`Hydrodynamic`], and [`UniformFlow`] —
//! each with a closed-form line integral so the control loop never runs
//! numerical quadrature. [`Aggregated`] superposes any set of fields, and
//! [`FieldKind`] maps archetype names to implementations for string-based
//! construction by a configuration layer.

pub mod aggregate;
pub mod boundary;
pub mod gaussian;
pub mod hydrodynamic;
pub mod uniform_flow;

use glam::DVec2;
use navfield_core::error::FieldError;
use navfield_core::PotentialField;
use serde_json::Value;

pub use aggregate::Aggregated;
pub use boundary::Boundary;
pub use gaussian::Gaussian;
pub use hydrodynamic::Hydrodynamic;
pub use uniform_flow::UniformFlow;

/// All available field archetype names.
const FIELD_NAMES: &[&str] = &["boundary", "gaussian", "hydrodynamic", "uniform-flow"];

/// Enumeration of the available field archetypes.
///
/// Wraps each implementation and delegates the `PotentialField` methods.
/// Use [`FieldKind::from_name`] for string-based construction.
pub enum FieldKind {
    /// Rectangular workspace boundary.
    Boundary(Boundary),
    /// Anisotropic Gaussian bump.
    Gaussian(Gaussian),
    /// Hydrodynamic flow around an obstacle.
    Hydrodynamic(Hydrodynamic),
    /// Constant attractor.
    UniformFlow(UniformFlow),
}

impl FieldKind {
    /// Constructs a field archetype by name from a JSON params object.
    ///
    /// Returns `FieldError::UnknownField` if the name is not recognized,
    /// or the archetype's own construction error for invalid parameters.
    pub fn from_name(name: &str, params: &Value) -> Result<Self, FieldError> {
        match name {
            "boundary" => Ok(FieldKind::Boundary(Boundary::from_json(params)?)),
            "gaussian" => Ok(FieldKind::Gaussian(Gaussian::from_json(params)?)),
            "hydrodynamic" => Ok(FieldKind::Hydrodynamic(Hydrodynamic::from_json(params)?)),
            "uniform-flow" => Ok(FieldKind::UniformFlow(UniformFlow::from_json(params)?)),
            _ => Err(FieldError::UnknownField(name.to_string())),
        }
    }

    /// Returns a slice of all recognized archetype names.
    pub fn list_fields() -> &'static [&'static str] {
        FIELD_NAMES
    }
}

impl PotentialField for FieldKind {
    fn potential(&self, position: DVec2) -> f64 {
        match self {
            FieldKind::Boundary(f) => f.potential(position),
            FieldKind::Gaussian(f) => f.potential(position),
            FieldKind::Hydrodynamic(f) => f.potential(position),
            FieldKind::UniformFlow(f) => f.potential(position),
        }
    }

    fn force(&self, position: DVec2) -> DVec2 {
        match self {
            FieldKind::Boundary(f) => f.force(position),
            FieldKind::Gaussian(f) => f.force(position),
            FieldKind::Hydrodynamic(f) => f.force(position),
            FieldKind::UniformFlow(f) => f.force(position),
        }
    }

    fn line_integral(&self, from: DVec2, to: DVec2) -> f64 {
        match self {
            FieldKind::Boundary(f) => f.line_integral(from, to),
            FieldKind::Gaussian(f) => f.line_integral(from, to),
            FieldKind::Hydrodynamic(f) => f.line_integral(from, to),
            FieldKind::UniformFlow(f) => f.line_integral(from, to),
        }
    }

    fn origin(&self) -> DVec2 {
        match self {
            FieldKind::Boundary(f) => f.origin(),
            FieldKind::Gaussian(f) => f.origin(),
            FieldKind::Hydrodynamic(f) => f.origin(),
            FieldKind::UniformFlow(f) => f.origin(),
        }
    }
}
