//! Input and output collaborators: spreadsheet import, text report, plots

pub mod plot;
pub mod report;
pub mod spreadsheet;

pub use plot::{render_svg, write_svg};
pub use report::{render_report, write_report, write_sweep_csv, Timings};
pub use spreadsheet::{load_columns, load_table, ConstituentTable, Labels};
