//! In-plane axis rotation for stress/strain vectors in Voigt notation

use serde::{Deserialize, Serialize};

use super::Mat3;
use crate::error::{PlyError, PlyResult};

/// Change-of-frame matrix J for an in-plane rotation, with its inverse,
/// transpose and transpose-inverse
///
/// Stress and engineering strain transform differently, so rotating a
/// stiffness matrix needs `J⁻¹` and `(Jᵗ)⁻¹` rather than a single congruence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RotationTransform {
    /// Angle in degrees
    pub angle: f64,
    pub j: Mat3,
    pub j_inv: Mat3,
    pub j_trans: Mat3,
    pub j_trans_inv: Mat3,
}

impl RotationTransform {
    /// Build the transform family for `angle` degrees
    pub fn new(angle: f64) -> PlyResult<Self> {
        let (s, c) = angle.to_radians().sin_cos();
        let cs = c * s;

        #[rustfmt::skip]
        let j = Mat3::new(
            c * c,  s * s,  2.0 * cs,
            s * s,  c * c,  -2.0 * cs,
            -cs,    cs,     c * c - s * s,
        );

        let singular = || PlyError::SingularMatrix {
            context: format!("rotation transform at {} degrees", angle),
        };
        let j_inv = j.try_inverse().ok_or_else(singular)?;
        let j_trans = j.transpose();
        let j_trans_inv = j_trans.try_inverse().ok_or_else(singular)?;

        Ok(Self {
            angle,
            j,
            j_inv,
            j_trans,
            j_trans_inv,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_zero_angle_is_identity() {
        let t = RotationTransform::new(0.0).unwrap();
        assert_relative_eq!(t.j, Mat3::identity(), epsilon = 1e-15);
        assert_relative_eq!(t.j_inv, Mat3::identity(), epsilon = 1e-15);
    }

    #[test]
    fn test_inverse_and_transpose_consistent() {
        for angle in [-90.0, -45.0, 10.0, 30.0, 89.0] {
            let t = RotationTransform::new(angle).unwrap();
            assert_relative_eq!(t.j * t.j_inv, Mat3::identity(), epsilon = 1e-12);
            assert_relative_eq!(t.j_trans, t.j.transpose());
            assert_relative_eq!(t.j_trans_inv, t.j_inv.transpose(), epsilon = 1e-12);
        }
    }

    #[test]
    fn test_inverse_is_negative_rotation() {
        let t = RotationTransform::new(30.0).unwrap();
        let back = RotationTransform::new(-30.0).unwrap();
        assert_relative_eq!(t.j_inv, back.j, epsilon = 1e-12);
    }
}
