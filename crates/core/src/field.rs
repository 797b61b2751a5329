//! The core `PotentialField` trait that every analytic field implements.
//!
//! The trait is object-safe so heterogeneous fields can be aggregated and
//! evaluated behind `dyn PotentialField`. The `Send + Sync` bound lets a
//! control loop query the same field from several threads without locking:
//! fields are immutable once constructed and evaluation is pure.

use glam::DVec2;

/// A differentiable conservative potential field over the 2-D workspace.
///
/// A field defines a scalar potential in every point, the force (negative
/// gradient) it exerts there, and the accumulated potential along a
/// straight segment between two points. All three are closed-form, pure
/// functions of the construction parameters and the query — no iteration,
/// no convergence loops, no shared mutable state.
///
/// # Invariant
///
/// `force(p)` equals the negative spatial gradient of `potential` at `p`,
/// and `line_integral(a, b)` equals the potential integrated along the
/// straight segment from `a` to `b`. The archetypes uphold this
/// analytically; the tests check it against finite differences and
/// quadrature.
pub trait PotentialField: Send + Sync {
    /// The potential in the point to which `position` points.
    fn potential(&self, position: DVec2) -> f64;

    /// The force vector due to the potential in the neighborhood of
    /// `position`.
    fn force(&self, position: DVec2) -> DVec2;

    /// The accumulated potential along the straight segment `from -> to`.
    ///
    /// A degenerate segment (`from == to`) accumulates exactly zero.
    fn line_integral(&self, from: DVec2, to: DVec2) -> f64;

    /// The vector pointing to the origin of the field.
    fn origin(&self) -> DVec2;
}
