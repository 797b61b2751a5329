//! Superposition of potential fields.
//!
//! An [`Aggregated`] field owns shared references to its constituents and
//! answers every query by summation. Linearity of summation and
//! integration makes this valid without re-deriving anything per member:
//! the aggregate of conservative fields is conservative.

use glam::DVec2;
use navfield_core::PotentialField;
use std::sync::Arc;

/// An aggregation of potential fields, evaluated by superposition.
///
/// Members are shared read-only (`Arc`), so the same constituent field may
/// sit in several aggregates or be queried directly at the same time. The
/// aggregate's `origin` is a descriptive value supplied at construction;
/// it plays no part in evaluation.
pub struct Aggregated {
    origin: DVec2,
    members: Vec<Arc<dyn PotentialField>>,
}

impl Aggregated {
    /// Creates an aggregate over the given member fields.
    pub fn new(origin: DVec2, members: Vec<Arc<dyn PotentialField>>) -> Self {
        Self { origin, members }
    }

    /// Number of member fields.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the aggregate has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl PotentialField for Aggregated {
    fn potential(&self, position: DVec2) -> f64 {
        self.members
            .iter()
            .map(|member| member.potential(position))
            .sum()
    }

    fn force(&self, position: DVec2) -> DVec2 {
        self.members
            .iter()
            .fold(DVec2::ZERO, |total, member| total + member.force(position))
    }

    fn line_integral(&self, from: DVec2, to: DVec2) -> f64 {
        self.members
            .iter()
            .map(|member| member.line_integral(from, to))
            .sum()
    }

    fn origin(&self) -> DVec2 {
        self.origin
    }
}
