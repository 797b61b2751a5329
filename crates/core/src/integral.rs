//! The layered line-integral contract.
//!
//! Every field must report the accumulated potential along a straight
//! segment. The layers, bottom up:
//!
//! 1. **Parametric**: [`ParametricLineIntegral`] hands back a closed-form
//!    antiderivative `F` of the potential along the parametrized segment
//!    `p(t) = from + t * (to - from)`; the definite integral is
//!    `F(t1) - F(t0)`. Deriving `F` once keeps numerical quadrature out of
//!    the evaluation path entirely.
//! 2. **Linear**: [`integrate_segment`] evaluates the parametric integral
//!    over `t in [0, 1]` and scales by the segment's arc length.
//! 3. **Local-linear**: [`integrate_segment_local`] first moves both bounds
//!    into a field's [`Frame`], then scales by the arc length of the
//!    *local* segment — the Jacobian scalar of the linear
//!    reparametrization, since the antiderivative lives in the parameter
//!    while the path length lives in local coordinates.
//!
//! The raw layer is `PotentialField::line_integral` itself, which each
//! archetype implements in terms of one of these evaluators.

use crate::frame::Frame;
use glam::DVec2;

/// A potential whose line integral along a straight segment has a closed
/// form, exposed as a single-variable antiderivative.
pub trait ParametricLineIntegral {
    /// Returns the indefinite integral `F(t)` of the potential along
    /// `p(t) = from + t * (to - from)`.
    ///
    /// When the segment is degenerate (`from == to`) the returned function
    /// evaluates to zero everywhere; a zero-length sub-path contributes no
    /// accumulated potential.
    fn antiderivative(&self, from: DVec2, to: DVec2) -> impl Fn(f64) -> f64;

    /// Evaluates the parametrized line integral between two parameter
    /// bounds as `F(upper) - F(lower)`.
    fn integral_between(&self, from: DVec2, to: DVec2, lower: f64, upper: f64) -> f64 {
        let primitive = self.antiderivative(from, to);
        primitive(upper) - primitive(lower)
    }
}

/// Line integral of a potential along a global-frame segment: the
/// parametric result over `[0, 1]` scaled by the segment's length.
pub fn integrate_segment<F>(field: &F, from: DVec2, to: DVec2) -> f64
where
    F: ParametricLineIntegral,
{
    (to - from).length() * field.integral_between(from, to, 0.0, 1.0)
}

/// Line integral of a frame-local potential: both bounds move into the
/// field's local coordinates and the parametric result is scaled by the
/// local segment's length.
pub fn integrate_segment_local<F>(field: &F, frame: &Frame, from: DVec2, to: DVec2) -> f64
where
    F: ParametricLineIntegral,
{
    let local_from = frame.to_local(from);
    let local_to = frame.to_local(to);
    (local_to - local_from).length() * field.integral_between(local_from, local_to, 0.0, 1.0)
}
