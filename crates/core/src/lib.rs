#![deny(unsafe_code)]
//! Core types and traits for the navfield potential-field system.
//!
//! Provides the [`PotentialField`] trait, the [`Frame`] reference-frame
//! transform, the layered line-integral contract
//! ([`ParametricLineIntegral`] plus the segment evaluators), the planar
//! rotation primitive, construction errors, and JSON parameter helpers.
//!
//! Concrete field archetypes live in the `navfield-fields` crate; this
//! crate holds everything they share.

pub mod error;
pub mod field;
pub mod frame;
pub mod geometry;
pub mod integral;
pub mod params;

pub use error::FieldError;
pub use field::PotentialField;
pub use frame::Frame;
pub use integral::{integrate_segment, integrate_segment_local, ParametricLineIntegral};
