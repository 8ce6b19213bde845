//! Ply Homogenization - micromechanics estimates for composite plies
//!
//! This library predicts the stiffness of a composite ply from the
//! properties of its matrix and reinforcement, supporting:
//! - Density, mass fractions, ply thickness and constituent masses
//! - Unidirectional ply constants (self-consistent scheme)
//! - Random mat and woven fabric estimates
//! - Off-axis apparent constants over an angle sweep
//! - Spreadsheet import, text reports and SVG plots
//!
//! ## Example
//! ```rust
//! use ply_homogenization::prelude::*;
//!
//! let input = PlyInput::new(Constituent::epoxy(), Constituent::e_glass(), 50.0)
//!     .with_balance(FabricBalance::balanced());
//! let ply = Ply::new(input).unwrap();
//!
//! let ud = ply.self_consistent();
//! assert_eq!(ud.el, 37725.0);
//!
//! let sweep = angle_sweep(&ply, &SweepOptions::default()).unwrap();
//! assert_eq!(sweep.len(), 180);
//! ```

pub mod analysis;
pub mod api;
pub mod constituents;
pub mod error;
pub mod homogenization;
pub mod io;
pub mod math;
pub mod ply;
pub mod results;

// Re-export common types
pub mod prelude {
    pub use crate::analysis::{angle_sweep, apparent_constants, AngleSample, SweepOptions};
    pub use crate::constituents::{ColumnInput, Constituent, FabricBalance, PlyInput};
    pub use crate::error::{PlyError, PlyResult};
    pub use crate::math::{compliance, reduced_stiffness, rotate_stiffness, Mat3, RotationTransform};
    pub use crate::ply::{BulkModuli, MixParameters, Ply};
    pub use crate::results::{
        AngleSweep, ApparentConstants, FabricProperties, MassFractions, MatProperties, PlyMasses,
        PlyReport, UnidirectionalProperties,
    };
}

#[cfg(feature = "wasm")]
pub mod wasm;
