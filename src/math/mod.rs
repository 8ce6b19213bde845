//! Plane-stress stiffness utilities
//!
//! All matrices are 3x3 in reduced Voigt notation, ordered `[L, T, LT]` in
//! the material frame and `[x, y, xy]` in the global frame.

pub mod rotation;

use nalgebra::Matrix3;

use crate::error::{PlyError, PlyResult};

pub use rotation::RotationTransform;

pub type Mat3 = Matrix3<f64>;

/// Reduced stiffness matrix of an orthotropic lamina in its material frame
///
/// # Arguments
/// * `el` - Longitudinal modulus
/// * `et` - Transverse modulus
/// * `glt` - In-plane shear modulus
/// * `nult` - Major Poisson ratio
pub fn reduced_stiffness(el: f64, et: f64, glt: f64, nult: f64) -> PlyResult<Mat3> {
    if el == 0.0 {
        return Err(PlyError::division(
            "reduced_stiffness",
            "longitudinal modulus is zero, minor Poisson ratio undefined",
        ));
    }
    let nutl = nult * et / el;
    let d = 1.0 - nult * nutl;
    if d == 0.0 {
        return Err(PlyError::division(
            "reduced_stiffness",
            format!("nult * nutl = 1 (nult = {}, nutl = {})", nult, nutl),
        ));
    }

    #[rustfmt::skip]
    let q0 = Mat3::new(
        el / d,         nult * et / d,  0.0,
        nutl * el / d,  et / d,         0.0,
        0.0,            0.0,            glt,
    );
    Ok(q0)
}

/// Rotate a material-frame stiffness into the global frame, J⁻¹ · Q0 · (Jᵗ)⁻¹
pub fn rotate_stiffness(j_inv: &Mat3, j_trans_inv: &Mat3, q0: &Mat3) -> Mat3 {
    j_inv * q0 * j_trans_inv
}

/// Compliance matrix, the inverse of a stiffness matrix
pub fn compliance(stiffness: &Mat3, context: &str) -> PlyResult<Mat3> {
    stiffness.try_inverse().ok_or_else(|| PlyError::SingularMatrix {
        context: context.to_string(),
    })
}
