//! Homogenization formulas
//!
//! Closed-form micromechanics estimates of ply properties from the
//! constituent store: rule of mixtures for density and masses, the
//! self-consistent scheme for a unidirectional ply, and weighted
//! combinations of the UD constants for mat and woven fabric plies.

use log::{debug, warn};

use crate::error::{PlyError, PlyResult};
use crate::ply::Ply;
use crate::results::{
    FabricProperties, MassFractions, MatProperties, PlyMasses, PlyReport,
    UnidirectionalProperties,
};

impl Ply {
    /// Ply density, rule of mixtures
    pub fn density(&self) -> f64 {
        self.reinforcement().rho * self.vf() + self.matrix().rho * self.vm()
    }

    /// Fiber and resin mass fractions and the impregnation ratio
    pub fn mass_fractions(&self) -> PlyResult<MassFractions> {
        let fiber = self.vf() * self.reinforcement().rho;
        let total = fiber + self.vm() * self.matrix().rho;
        if total == 0.0 {
            return Err(PlyError::division(
                "mass_fractions",
                "both constituent densities are zero",
            ));
        }

        let mf = fiber / total;
        let mm = 1.0 - mf;
        if mf == 0.0 {
            return Err(PlyError::division(
                "mass_fractions",
                "fiber mass fraction is zero, impregnation ratio undefined (reinforcement.rho = 0)",
            ));
        }

        Ok(MassFractions {
            mf,
            mm,
            impregnation_ratio: mm / mf,
        })
    }

    /// Ply thickness in mm, Msf / (rho * Vf)
    pub fn thickness(&self) -> PlyResult<f64> {
        let rho = self.reinforcement().rho;
        let denominator = rho * self.vf();
        let thickness = self.reinforcement().msf / denominator;
        if denominator == 0.0 || !thickness.is_finite() {
            return Err(PlyError::UndefinedThickness { vf: self.vf(), rho });
        }
        Ok(thickness)
    }

    /// Fiber and resin masses (grams) for `surface` square meters of ply
    pub fn masses(&self, surface: f64) -> PlyResult<PlyMasses> {
        if !surface.is_finite() || surface <= 0.0 {
            return Err(PlyError::invalid(
                "surface",
                format!("surface must be positive, got {}", surface),
            ));
        }
        let fiber = self.reinforcement().msf * surface;
        let resin = self.mass_fractions()?.impregnation_ratio * fiber;
        Ok(PlyMasses { fiber, resin })
    }

    /// Unidirectional ply constants from the self-consistent scheme
    pub fn self_consistent(&self) -> UnidirectionalProperties {
        let (m, r) = (self.matrix(), self.reinforcement());
        let k = self.bulk_moduli();
        let (km, kr) = (k.matrix, k.reinforcement);
        let (gm, gr) = (m.glt, r.glt);
        let vf = self.vf();
        let vm = self.vm();

        let el = vf * r.el + vm * m.el;

        let k_ply = ((kr + gm) * km + (kr - km) * gm * vf) / (kr + gm - (kr - km) * vf);

        let gtt = gm * (km * (gr + gm) + 2.0 * gr * gm + km * (gr - gm) * vf)
            / (km * (gm + gr) + 2.0 * gm * gr - (km + 2.0 * gm) * (gr - gm) * vf);

        let nult = r.nult * vf + m.nult * vm;

        let et = 1.0 / ((1.0 / (4.0 * k_ply)) + (1.0 / (4.0 * gtt)) + (nult.powi(2) / el));

        // Shear moduli only, no bulk term
        let glt = gm * ((1.0 - vf) * gm + (1.0 + vf) * gr) / ((1.0 - vf) * gr + (1.0 + vf) * gm);

        let nutl = nult * et / el;

        let nutt = (2.0 * el * k_ply - el * et - 4.0 * nult.powi(2) * k_ply * et) / (2.0 * el * k_ply);

        debug!(
            "self-consistent: k={:.3}, El={:.3}, Et={:.3}, Glt={:.3}, Gtt={:.3}",
            k_ply, el, et, glt, gtt
        );

        UnidirectionalProperties {
            el,
            et,
            glt,
            gtt,
            nult,
            nutl,
            nutt,
        }
    }

    /// Random mat constants, weighted from the UD constants
    pub fn mat_properties(&self) -> PlyResult<MatProperties> {
        let ud = self.self_consistent();
        let e = 3.0 / 8.0 * ud.el + 5.0 / 8.0 * ud.et;
        let g = 1.0 / 8.0 * ud.el + 1.0 / 4.0 * ud.et;
        if g == 0.0 {
            return Err(PlyError::division("mat_properties", "mat shear modulus is zero"));
        }
        Ok(MatProperties {
            e,
            g,
            nu: e / (2.0 * g) - 1.0,
        })
    }

    /// Woven fabric constants, weighted by the warp/weft balance
    pub fn fabric_properties(&self) -> PlyResult<FabricProperties> {
        let w = self.balance().warp_ratio().ok_or_else(|| {
            PlyError::division("fabric_properties", "warp + weft weights sum to zero")
        })?;
        let ud = self.self_consistent();
        if ud.et == 0.0 {
            return Err(PlyError::division(
                "fabric_properties",
                "unidirectional transverse modulus is zero",
            ));
        }

        Ok(FabricProperties {
            el: w * ud.el + (1.0 - w) * ud.et,
            et: w * ud.et + (1.0 - w) * ud.el,
            glt: ud.glt,
            nult: ud.nult / (w + (1.0 - w) * (ud.el / ud.et)),
        })
    }

    /// Compute every scalar result for `surface` square meters of ply
    pub fn report(&self, surface: f64) -> PlyResult<PlyReport> {
        let mat = self.mat_properties()?;
        if !(-1.0..=0.5).contains(&mat.nu) {
            warn!("mat Poisson ratio {:.3} outside the isotropic range", mat.nu);
        }

        Ok(PlyReport {
            vf: self.vf(),
            vm: self.vm(),
            density: self.density(),
            mass_fractions: self.mass_fractions()?,
            thickness: self.thickness()?,
            surface,
            masses: self.masses(surface)?,
            unidirectional: self.self_consistent(),
            mat,
            fabric: self.fabric_properties()?,
        })
    }
}
