//! Ply - constituent property store
//!
//! A [`Ply`] is validated once at construction and is immutable afterwards.
//! Homogenization formulas live in [`crate::homogenization`] and read from it.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::constituents::{ColumnInput, Constituent, FabricBalance, PlyInput};
use crate::error::{PlyError, PlyResult};

/// Fiber and matrix volume fractions, always summing to 1
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MixParameters {
    /// Fiber volume fraction in [0, 1]
    pub vf: f64,
    /// Matrix volume fraction, 1 - vf
    pub vm: f64,
}

impl MixParameters {
    /// Build from a fiber volume percentage (0-100)
    pub fn from_percent(percent: f64) -> Self {
        let vf = percent / 100.0;
        Self { vf, vm: 1.0 - vf }
    }
}

/// Isostatic bulk modulus of each constituent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BulkModuli {
    pub matrix: f64,
    pub reinforcement: f64,
}

/// A composite ply made of one matrix and one reinforcement
#[derive(Debug, Clone, Serialize)]
pub struct Ply {
    matrix: Constituent,
    reinforcement: Constituent,
    balance: FabricBalance,
    fiber_volume_percent: f64,
    mix: MixParameters,
    bulk: BulkModuli,
}

impl Ply {
    /// Validate an input record and build the ply
    pub fn new(input: PlyInput) -> PlyResult<Self> {
        validate_constituent("matrix", &input.matrix)?;
        validate_constituent("reinforcement", &input.reinforcement)?;
        validate_balance(&input.balance)?;

        let percent = input.fiber_volume_percent;
        if !percent.is_finite() || percent <= 0.0 || percent >= 100.0 {
            return Err(PlyError::invalid(
                "vf",
                format!("fiber volume percentage must lie in (0, 100), got {}", percent),
            ));
        }

        let bulk = BulkModuli {
            matrix: bulk_modulus("matrix", &input.matrix)?,
            reinforcement: bulk_modulus("reinforcement", &input.reinforcement)?,
        };
        let mix = MixParameters::from_percent(percent);

        debug!(
            "ply created: vf={:.4}, k_matrix={:.3}, k_reinforcement={:.3}",
            mix.vf, bulk.matrix, bulk.reinforcement
        );

        Ok(Self {
            matrix: input.matrix,
            reinforcement: input.reinforcement,
            balance: input.balance,
            fiber_volume_percent: percent,
            mix,
            bulk,
        })
    }

    /// Build from column-oriented sequences (index 0 = matrix, 1 = reinforcement)
    pub fn from_columns(columns: &ColumnInput) -> PlyResult<Self> {
        Self::new(PlyInput::try_from(columns)?)
    }

    pub fn matrix(&self) -> &Constituent {
        &self.matrix
    }

    pub fn reinforcement(&self) -> &Constituent {
        &self.reinforcement
    }

    pub fn balance(&self) -> &FabricBalance {
        &self.balance
    }

    pub fn mix(&self) -> MixParameters {
        self.mix
    }

    /// Fiber volume fraction in [0, 1]
    pub fn vf(&self) -> f64 {
        self.mix.vf
    }

    /// Matrix volume fraction
    pub fn vm(&self) -> f64 {
        self.mix.vm
    }

    /// Fiber volume percentage as given at construction
    pub fn fiber_volume_percent(&self) -> f64 {
        self.fiber_volume_percent
    }

    pub fn bulk_moduli(&self) -> BulkModuli {
        self.bulk
    }

    /// Rebuild the named input record this ply was created from
    pub fn input(&self) -> PlyInput {
        PlyInput {
            matrix: self.matrix,
            reinforcement: self.reinforcement,
            fiber_volume_percent: self.fiber_volume_percent,
            balance: self.balance,
        }
    }
}

fn require_finite(field: String, value: f64) -> PlyResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(PlyError::invalid(field, format!("value must be finite, got {}", value)))
    }
}

fn validate_constituent(name: &str, c: &Constituent) -> PlyResult<()> {
    let field = |prop: &str| format!("{}.{}", name, prop);

    for (prop, value) in [("el", c.el), ("glt", c.glt)] {
        if require_finite(field(prop), value)? <= 0.0 {
            return Err(PlyError::invalid(
                field(prop),
                format!("modulus must be positive, got {}", value),
            ));
        }
    }

    for (prop, value) in [("et", c.et), ("rho", c.rho), ("msf", c.msf)] {
        if require_finite(field(prop), value)? < 0.0 {
            return Err(PlyError::invalid(
                field(prop),
                format!("value must not be negative, got {}", value),
            ));
        }
    }

    let nult = require_finite(field("nult"), c.nult)?;
    if !(0.0..0.5).contains(&nult) {
        return Err(PlyError::invalid(
            field("nult"),
            format!("Poisson ratio must lie in [0, 0.5), got {}", nult),
        ));
    }

    Ok(())
}

fn validate_balance(balance: &FabricBalance) -> PlyResult<()> {
    for (prop, value) in [("warp", balance.warp), ("weft", balance.weft)] {
        let field = format!("balance.{}", prop);
        if require_finite(field.clone(), value)? < 0.0 {
            return Err(PlyError::invalid(
                field,
                format!("fabric weight must not be negative, got {}", value),
            ));
        }
    }
    Ok(())
}

fn bulk_modulus(name: &str, c: &Constituent) -> PlyResult<f64> {
    let k = c.bulk_modulus();
    if !k.is_finite() || k <= 0.0 {
        return Err(PlyError::invalid(
            format!("{}.nult", name),
            format!("bulk modulus is undefined for nult = {}", c.nult),
        ));
    }
    Ok(k)
}
