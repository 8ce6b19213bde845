//! Constituent input records

mod constituent;
mod input;

pub use constituent::{Constituent, FabricBalance};
pub use input::{ColumnInput, PlyInput};
