//! Input records for a two-constituent ply

use serde::{Deserialize, Serialize};

use super::{Constituent, FabricBalance};
use crate::error::{PlyError, PlyResult};

/// Named input record: matrix, reinforcement, fiber volume and fabric balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlyInput {
    pub matrix: Constituent,
    pub reinforcement: Constituent,
    /// Fiber volume fraction as a percentage (0-100)
    pub fiber_volume_percent: f64,
    #[serde(default)]
    pub balance: FabricBalance,
}

impl PlyInput {
    pub fn new(matrix: Constituent, reinforcement: Constituent, fiber_volume_percent: f64) -> Self {
        Self {
            matrix,
            reinforcement,
            fiber_volume_percent,
            balance: FabricBalance::default(),
        }
    }

    /// Set the woven fabric balance
    pub fn with_balance(mut self, balance: FabricBalance) -> Self {
        self.balance = balance;
        self
    }

    /// Epoxy / E-glass at 50% fiber volume, balanced fabric
    pub fn glass_epoxy() -> Self {
        Self::new(Constituent::epoxy(), Constituent::e_glass(), 50.0)
    }
}

/// Column-oriented input, one two-element sequence per property
///
/// Index 0 is the matrix, index 1 the reinforcement. This is the shape
/// produced by spreadsheet import.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColumnInput {
    pub el: Vec<f64>,
    pub et: Vec<f64>,
    pub glt: Vec<f64>,
    pub nult: Vec<f64>,
    pub rho: Vec<f64>,
    pub msf: Vec<f64>,
    /// Fabric balance weights (warp, weft)
    pub n: Vec<f64>,
    /// Fiber volume fraction as a percentage
    pub vf: f64,
}

fn pair(name: &str, values: &[f64]) -> PlyResult<[f64; 2]> {
    match values {
        [matrix, reinforcement] => Ok([*matrix, *reinforcement]),
        _ => Err(PlyError::invalid(
            name,
            format!("expected 2 values (matrix, reinforcement), got {}", values.len()),
        )),
    }
}

impl TryFrom<&ColumnInput> for PlyInput {
    type Error = PlyError;

    fn try_from(columns: &ColumnInput) -> PlyResult<Self> {
        let el = pair("El", &columns.el)?;
        let et = pair("Et", &columns.et)?;
        let glt = pair("Glt", &columns.glt)?;
        let nult = pair("Nult", &columns.nult)?;
        let rho = pair("Rho", &columns.rho)?;
        let msf = pair("Msf", &columns.msf)?;
        let n = pair("n", &columns.n)?;

        let phase = |i: usize| Constituent::new(el[i], et[i], glt[i], nult[i], rho[i], msf[i]);

        Ok(Self {
            matrix: phase(0),
            reinforcement: phase(1),
            fiber_volume_percent: columns.vf,
            balance: FabricBalance::new(n[0], n[1]),
        })
    }
}

impl From<&PlyInput> for ColumnInput {
    fn from(input: &PlyInput) -> Self {
        let (m, r) = (&input.matrix, &input.reinforcement);
        Self {
            el: vec![m.el, r.el],
            et: vec![m.et, r.et],
            glt: vec![m.glt, r.glt],
            nult: vec![m.nult, r.nult],
            rho: vec![m.rho, r.rho],
            msf: vec![m.msf, r.msf],
            n: vec![input.balance.warp, input.balance.weft],
            vf: input.fiber_volume_percent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columns_map_to_named_phases() {
        let columns = ColumnInput::from(&PlyInput::glass_epoxy());
        let input = PlyInput::try_from(&columns).unwrap();
        assert_eq!(input.matrix, Constituent::epoxy());
        assert_eq!(input.reinforcement, Constituent::e_glass());
        assert_eq!(input.fiber_volume_percent, 50.0);
    }

    #[test]
    fn test_wrong_column_length_names_column() {
        let mut columns = ColumnInput::from(&PlyInput::glass_epoxy());
        columns.glt.push(1.0);
        match PlyInput::try_from(&columns) {
            Err(PlyError::InvalidInput { field, .. }) => assert_eq!(field, "Glt"),
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_json_defaults_balance() {
        let json = r#"{
            "matrix": {"el": 3450, "glt": 1300, "nult": 0.4, "rho": 1200},
            "reinforcement": {"el": 72000, "et": 72000, "glt": 29508, "nult": 0.22, "rho": 2550, "msf": 300},
            "fiber_volume_percent": 50
        }"#;
        let input: PlyInput = serde_json::from_str(json).unwrap();
        assert_eq!(input, PlyInput::glass_epoxy());
    }
}
