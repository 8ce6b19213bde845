//! Result types for homogenization and angle sweeps

use serde::{Deserialize, Serialize};

/// Round to a fixed number of decimals
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

const MODULUS_DECIMALS: i32 = 1;
const RATIO_DECIMALS: i32 = 3;

/// Fiber and resin mass fractions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MassFractions {
    /// Fiber mass fraction
    pub mf: f64,
    /// Resin mass fraction, 1 - mf
    pub mm: f64,
    /// Resin mass per unit fiber mass, mm / mf
    pub impregnation_ratio: f64,
}

/// Fiber and resin masses for a given ply surface
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlyMasses {
    /// Fiber mass in grams
    pub fiber: f64,
    /// Resin mass in grams
    pub resin: f64,
}

impl PlyMasses {
    /// Fiber mass to 3 decimals, resin mass to 1 decimal
    pub fn rounded(&self) -> Self {
        Self {
            fiber: round_to(self.fiber, 3),
            resin: round_to(self.resin, 1),
        }
    }
}

/// Homogenized constants of a unidirectional ply
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UnidirectionalProperties {
    pub el: f64,
    pub et: f64,
    pub glt: f64,
    pub gtt: f64,
    pub nult: f64,
    pub nutl: f64,
    pub nutt: f64,
}

impl UnidirectionalProperties {
    pub fn rounded(&self) -> Self {
        Self {
            el: round_to(self.el, MODULUS_DECIMALS),
            et: round_to(self.et, MODULUS_DECIMALS),
            glt: round_to(self.glt, MODULUS_DECIMALS),
            gtt: round_to(self.gtt, MODULUS_DECIMALS),
            nult: round_to(self.nult, RATIO_DECIMALS),
            nutl: round_to(self.nutl, RATIO_DECIMALS),
            nutt: round_to(self.nutt, RATIO_DECIMALS),
        }
    }
}

/// Homogenized constants of a random mat (in-plane isotropic)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatProperties {
    pub e: f64,
    pub g: f64,
    pub nu: f64,
}

impl MatProperties {
    pub fn rounded(&self) -> Self {
        Self {
            e: round_to(self.e, MODULUS_DECIMALS),
            g: round_to(self.g, MODULUS_DECIMALS),
            nu: round_to(self.nu, RATIO_DECIMALS),
        }
    }
}

/// Homogenized constants of a woven fabric ply
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FabricProperties {
    pub el: f64,
    pub et: f64,
    pub glt: f64,
    pub nult: f64,
}

impl FabricProperties {
    pub fn rounded(&self) -> Self {
        Self {
            el: round_to(self.el, MODULUS_DECIMALS),
            et: round_to(self.et, MODULUS_DECIMALS),
            glt: round_to(self.glt, MODULUS_DECIMALS),
            nult: round_to(self.nult, RATIO_DECIMALS),
        }
    }
}

/// All scalar results for one ply
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlyReport {
    pub vf: f64,
    pub vm: f64,
    /// Density in kg/m³
    pub density: f64,
    pub mass_fractions: MassFractions,
    /// Thickness in mm
    pub thickness: f64,
    /// Surface used for `masses`, in m²
    pub surface: f64,
    pub masses: PlyMasses,
    pub unidirectional: UnidirectionalProperties,
    pub mat: MatProperties,
    pub fabric: FabricProperties,
}

/// Apparent engineering constants at one orientation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ApparentConstants {
    /// Orientation in degrees
    pub angle: i32,
    pub ex: f64,
    pub ey: f64,
    pub gxy: f64,
    pub nuxy: f64,
}

/// Apparent constants over a range of orientations, stored as parallel sequences
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AngleSweep {
    pub angles: Vec<i32>,
    pub ex: Vec<f64>,
    pub ey: Vec<f64>,
    pub gxy: Vec<f64>,
    pub nuxy: Vec<f64>,
}

impl AngleSweep {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            angles: Vec::with_capacity(capacity),
            ex: Vec::with_capacity(capacity),
            ey: Vec::with_capacity(capacity),
            gxy: Vec::with_capacity(capacity),
            nuxy: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, sample: ApparentConstants) {
        self.angles.push(sample.angle);
        self.ex.push(sample.ex);
        self.ey.push(sample.ey);
        self.gxy.push(sample.gxy);
        self.nuxy.push(sample.nuxy);
    }

    pub fn len(&self) -> usize {
        self.angles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.angles.is_empty()
    }

    /// Sample at position `index`
    pub fn sample(&self, index: usize) -> Option<ApparentConstants> {
        Some(ApparentConstants {
            angle: *self.angles.get(index)?,
            ex: *self.ex.get(index)?,
            ey: *self.ey.get(index)?,
            gxy: *self.gxy.get(index)?,
            nuxy: *self.nuxy.get(index)?,
        })
    }

    /// Sample at a given angle, if it was swept
    pub fn at_angle(&self, angle: i32) -> Option<ApparentConstants> {
        let index = self.angles.iter().position(|&a| a == angle)?;
        self.sample(index)
    }

    pub fn samples(&self) -> impl Iterator<Item = ApparentConstants> + '_ {
        (0..self.len()).filter_map(move |i| self.sample(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(9851.55324868616, 1), 9851.6);
        assert_eq!(round_to(0.08095378415090018, 3), 0.081);
        assert_eq!(round_to(141.17647058823525, 1), 141.2);
    }

    #[test]
    fn test_sweep_lookup() {
        let mut sweep = AngleSweep::with_capacity(2);
        sweep.push(ApparentConstants {
            angle: -1,
            ex: 1.0,
            ey: 2.0,
            gxy: 3.0,
            nuxy: 0.1,
        });
        sweep.push(ApparentConstants {
            angle: 0,
            ex: 4.0,
            ey: 5.0,
            gxy: 6.0,
            nuxy: 0.2,
        });
        assert_eq!(sweep.len(), 2);
        assert_eq!(sweep.at_angle(0).unwrap().ex, 4.0);
        assert!(sweep.at_angle(7).is_none());
        assert_eq!(sweep.samples().count(), 2);
    }
}
