//! Angle sweep of apparent engineering constants

use log::{debug, info};

use super::SweepOptions;
use crate::error::PlyResult;
use crate::math::{self, Mat3, RotationTransform};
use crate::ply::Ply;
use crate::results::{AngleSweep, ApparentConstants};

/// One sweep iteration: apparent constants plus the compliance they came from
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleSample {
    pub constants: ApparentConstants,
    /// Global-frame stiffness
    pub stiffness: Mat3,
    /// Global-frame compliance
    pub compliance: Mat3,
}

/// Rotate `q0` by `angle` degrees and extract Ex, Ey, Gxy and Nuxy
pub fn apparent_constants(q0: &Mat3, angle: i32) -> PlyResult<AngleSample> {
    let t = RotationTransform::new(angle as f64)?;
    let stiffness = math::rotate_stiffness(&t.j_inv, &t.j_trans_inv, q0);
    let s = math::compliance(&stiffness, &format!("rotated stiffness at {} degrees", angle))?;

    let constants = ApparentConstants {
        angle,
        ex: 1.0 / s[(0, 0)],
        ey: 1.0 / s[(1, 1)],
        gxy: 1.0 / s[(2, 2)],
        nuxy: -s[(0, 1)] / s[(0, 0)],
    };

    Ok(AngleSample {
        constants,
        stiffness,
        compliance: s,
    })
}

/// Sweep the unidirectional ply over `options` and collect apparent constants
pub fn angle_sweep(ply: &Ply, options: &SweepOptions) -> PlyResult<AngleSweep> {
    options.validate()?;

    let ud = ply.self_consistent();
    let q0 = math::reduced_stiffness(ud.el, ud.et, ud.glt, ud.nult)?;

    let mut sweep = AngleSweep::with_capacity(options.len());
    for angle in options.angles() {
        let sample = apparent_constants(&q0, angle)?;
        debug!(
            "angle {:>4}: Ex={:.1}, Ey={:.1}, Gxy={:.1}, Nuxy={:.3}",
            angle,
            sample.constants.ex,
            sample.constants.ey,
            sample.constants.gxy,
            sample.constants.nuxy
        );
        sweep.push(sample.constants);
    }

    info!(
        "angle sweep complete: {} orientations from {} to {} degrees",
        sweep.len(),
        options.start,
        options.end
    );
    Ok(sweep)
}
