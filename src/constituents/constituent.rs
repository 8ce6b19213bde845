//! Mechanical properties of a single ply constituent

use serde::{Deserialize, Serialize};

/// Mechanical and areal properties of one constituent (matrix or reinforcement)
///
/// Moduli share whatever unit the caller picks (MPa in the shipped presets).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Constituent {
    /// Longitudinal Young's modulus
    pub el: f64,
    /// Transverse Young's modulus (0 for an isotropic constituent)
    #[serde(default)]
    pub et: f64,
    /// In-plane shear modulus
    pub glt: f64,
    /// Major Poisson ratio
    pub nult: f64,
    /// Density in kg/m³
    pub rho: f64,
    /// Areal fiber mass in g/m² (only read for the reinforcement)
    #[serde(default)]
    pub msf: f64,
}

impl Constituent {
    /// Create a new constituent with given properties
    pub fn new(el: f64, et: f64, glt: f64, nult: f64, rho: f64, msf: f64) -> Self {
        Self {
            el,
            et,
            glt,
            nult,
            rho,
            msf,
        }
    }

    /// Create an isotropic constituent, G = E / (2 * (1 + nu))
    pub fn isotropic(e: f64, nu: f64, rho: f64) -> Self {
        let g = e / (2.0 * (1.0 + nu));
        Self::new(e, 0.0, g, nu, rho, 0.0)
    }

    /// Set the areal fiber mass
    pub fn with_areal_mass(mut self, msf: f64) -> Self {
        self.msf = msf;
        self
    }

    /// Standard epoxy resin matrix
    pub fn epoxy() -> Self {
        Self {
            el: 3450.0, // MPa
            et: 0.0,
            glt: 1300.0,
            nult: 0.4,
            rho: 1200.0,
            msf: 0.0,
        }
    }

    /// E-glass reinforcement, 300 g/m²
    pub fn e_glass() -> Self {
        Self {
            el: 72000.0, // MPa
            et: 72000.0,
            glt: 29508.0,
            nult: 0.22,
            rho: 2550.0,
            msf: 300.0,
        }
    }

    /// Isostatic bulk modulus under the plane isotropic assumption
    pub fn bulk_modulus(&self) -> f64 {
        self.el / (2.0 * (1.0 - 2.0 * self.nult) * (1.0 + self.nult))
    }
}

/// Warp/weft balance of a woven reinforcement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FabricBalance {
    /// Weight of the warp direction
    pub warp: f64,
    /// Weight of the weft direction
    pub weft: f64,
}

impl FabricBalance {
    pub fn new(warp: f64, weft: f64) -> Self {
        Self { warp, weft }
    }

    /// Balanced fabric (equal warp and weft)
    pub fn balanced() -> Self {
        Self::new(1.0, 1.0)
    }

    /// Share of the warp direction, warp / (warp + weft)
    pub fn warp_ratio(&self) -> Option<f64> {
        let total = self.warp + self.weft;
        if total == 0.0 {
            None
        } else {
            Some(self.warp / total)
        }
    }
}

impl Default for FabricBalance {
    fn default() -> Self {
        Self::balanced()
    }
}
