//! Field-local reference frames.
//!
//! A [`Frame`] is an oriented, anisotropically scaled coordinate system
//! attached to a field: local coordinates are obtained by translating the
//! query point by the negated origin, rotating by the frame angle, and
//! dividing component-wise by the extent. `to_global` is the exact inverse,
//! so `to_global(to_local(p)) == p` for every point (up to floating-point
//! tolerance).

use crate::error::FieldError;
use crate::geometry::rotate;
use glam::DVec2;

/// An oriented, scaled local coordinate system over the 2-D workspace.
///
/// The extent is `(length, width)`: length scales the local x-axis, width
/// the local y-axis. Frames are immutable values; fields that need one
/// compose it rather than re-deriving the transforms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    origin: DVec2,
    angle: f64,
    extent: DVec2,
}

impl Frame {
    /// Creates a frame centered on `origin`, rotated by `angle` radians,
    /// with the given length (local x) and width (local y).
    ///
    /// Returns `FieldError::InvalidExtent` unless both extents are positive
    /// and finite, and `FieldError::NonFiniteParameter` for a NaN or
    /// infinite angle or origin.
    pub fn new(origin: DVec2, angle: f64, length: f64, width: f64) -> Result<Self, FieldError> {
        if !(length.is_finite() && length > 0.0) {
            return Err(FieldError::InvalidExtent {
                name: "length",
                value: length,
            });
        }
        if !(width.is_finite() && width > 0.0) {
            return Err(FieldError::InvalidExtent {
                name: "width",
                value: width,
            });
        }
        if !angle.is_finite() {
            return Err(FieldError::NonFiniteParameter {
                name: "angle",
                value: angle,
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
            extent: DVec2::new(length, width),
        })
    }

    /// Expresses a global position in this frame's basis.
    pub fn to_local(&self, position: DVec2) -> DVec2 {
        rotate(position - self.origin, self.angle) / self.extent
    }

    /// Expresses a local position in the global (standard) basis.
    ///
    /// Exact inverse of [`to_local`](Self::to_local).
    pub fn to_global(&self, position: DVec2) -> DVec2 {
        rotate(position * self.extent, -self.angle) + self.origin
    }

    /// Maps a gradient taken with respect to local coordinates back to the
    /// global frame.
    ///
    /// This is the transpose Jacobian of [`to_local`](Self::to_local):
    /// divide by the extent, rotate back. It differs from `to_global` in
    /// that gradients are covectors — they carry no translation and scale
    /// with the *inverse* extent, which is what makes a force computed in
    /// local coordinates equal the true global-frame gradient under
    /// anisotropic scaling.
    pub fn gradient_to_global(&self, gradient: DVec2) -> DVec2 {
        rotate(gradient / self.extent, -self.angle)
    }

    /// The global position of the frame origin.
    pub fn origin(&self) -> DVec2 {
        self.origin
    }

    /// The frame orientation in radians.
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Extent along the local x-axis.
    pub fn length(&self) -> f64 {
        self.extent.x
    }

    /// Extent along the local y-axis.
    pub fn width(&self) -> f64 {
        self.extent.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    const EPS: f64 = 1e-9;

    #[test]
    fn new_rejects_zero_length() {
        let result = Frame::new(DVec2::ZERO, 0.0, 0.0, 1.0);
        assert!(matches!(
            result,
            Err(FieldError::InvalidExtent { name: "length", .. })
        ));
    }

    #[test]
    fn new_rejects_negative_width() {
        let result = Frame::new(DVec2::ZERO, 0.0, 1.0, -2.0);
        assert!(matches!(
            result,
            Err(FieldError::InvalidExtent { name: "width", .. })
        ));
    }

    #[test]
    fn new_rejects_nan_angle() {
        let result = Frame::new(DVec2::ZERO, f64::NAN, 1.0, 1.0);
        assert!(matches!(
            result,
            Err(FieldError::NonFiniteParameter { name: "angle", .. })
        ));
    }

    #[test]
    fn new_rejects_infinite_origin() {
        let result = Frame::new(DVec2::new(f64::INFINITY, 0.0), 0.0, 1.0, 1.0);
        assert!(matches!(
            result,
            Err(FieldError::NonFiniteParameter { name: "origin", .. })
        ));
    }

    #[test]
    fn identity_frame_leaves_points_alone() {
        let frame = Frame::new(DVec2::ZERO, 0.0, 1.0, 1.0).unwrap();
        let p = DVec2::new(2.5, -1.5);
        assert!((frame.to_local(p) - p).length() < EPS);
        assert!((frame.to_global(p) - p).length() < EPS);
    }

    #[test]
    fn to_local_translates_by_origin() {
        let frame = Frame::new(DVec2::new(3.0, 4.0), 0.0, 1.0, 1.0).unwrap();
        let local = frame.to_local(DVec2::new(3.0, 4.0));
        assert!(local.length() < EPS, "origin should map to zero, got {local}");
    }

    #[test]
    fn to_local_scales_by_extent() {
        let frame = Frame::new(DVec2::ZERO, 0.0, 2.0, 4.0).unwrap();
        let local = frame.to_local(DVec2::new(2.0, 4.0));
        assert!(
            (local - DVec2::ONE).length() < EPS,
            "extent scaling failed, got {local}"
        );
    }

    #[test]
    fn to_local_rotates_into_frame() {
        // A frame rotated a quarter turn sees global x as local y.
        let frame = Frame::new(DVec2::ZERO, FRAC_PI_2, 1.0, 1.0).unwrap();
        let local = frame.to_local(DVec2::X);
        assert!(
            (local - DVec2::Y).length() < EPS,
            "rotation into frame failed, got {local}"
        );
    }

    #[test]
    fn round_trip_with_all_components() {
        let frame = Frame::new(DVec2::new(-2.0, 5.0), 0.7, 3.0, 0.5).unwrap();
        let p = DVec2::new(1.0, -8.0);
        let round_trip = frame.to_global(frame.to_local(p));
        assert!(
            (round_trip - p).length() < EPS,
            "round trip moved {p} to {round_trip}"
        );
    }

    #[test]
    fn gradient_map_carries_no_translation() {
        let frame = Frame::new(DVec2::new(10.0, 10.0), 0.0, 1.0, 1.0).unwrap();
        let g = frame.gradient_to_global(DVec2::ZERO);
        assert!(g.length() < EPS, "zero gradient must stay zero, got {g}");
    }

    #[test]
    fn gradient_map_uses_inverse_extent() {
        let frame = Frame::new(DVec2::ZERO, 0.0, 2.0, 5.0).unwrap();
        let g = frame.gradient_to_global(DVec2::new(2.0, 5.0));
        assert!(
            (g - DVec2::ONE).length() < EPS,
            "gradient scaling failed, got {g}"
        );
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn any_coord() -> impl Strategy<Value = f64> {
            -100.0_f64..100.0
        }

        fn any_angle() -> impl Strategy<Value = f64> {
            -6.5_f64..6.5
        }

        fn any_extent() -> impl Strategy<Value = f64> {
            0.1_f64..50.0
        }

        proptest! {
            #[test]
            fn to_global_inverts_to_local(
                ox in any_coord(),
                oy in any_coord(),
                angle in any_angle(),
                length in any_extent(),
                width in any_extent(),
                px in any_coord(),
                py in any_coord(),
            ) {
                let frame = Frame::new(DVec2::new(ox, oy), angle, length, width).unwrap();
                let p = DVec2::new(px, py);
                let round_trip = frame.to_global(frame.to_local(p));
                prop_assert!(
                    (round_trip - p).length() < 1e-9 * (1.0 + p.length()),
                    "round trip moved {} to {}",
                    p,
                    round_trip
                );
            }

            #[test]
            fn to_local_inverts_to_global(
                ox in any_coord(),
                oy in any_coord(),
                angle in any_angle(),
                length in any_extent(),
                width in any_extent(),
                px in any_coord(),
                py in any_coord(),
            ) {
                let frame = Frame::new(DVec2::new(ox, oy), angle, length, width).unwrap();
                let p = DVec2::new(px, py);
                let round_trip = frame.to_local(frame.to_global(p));
                prop_assert!(
                    (round_trip - p).length() < 1e-9 * (1.0 + p.length()),
                    "round trip moved {} to {}",
                    p,
                    round_trip
                );
            }
        }
    }
}
