//! Constituent tables from Excel workbooks and CSV files
//!
//! The table has one header row and exactly two data rows, matrix first:
//!
//! | Composant | El | Et | Glt | Nult | Rho | Msf | Vf | Tissu | Equilibrage |
//! |-----------|----|----|-----|------|-----|-----|----|-------|-------------|
//!
//! `Vf` is read from the first data row. `Composant` and `Equilibrage` are
//! optional labels used by the text report.

use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

use calamine::{open_workbook, Data, Reader, Xlsx};
use csv::ReaderBuilder;
use log::{debug, info};

use crate::constituents::ColumnInput;
use crate::error::{PlyError, PlyResult};

type RawRecord = HashMap<String, String>;

/// Row labels carried alongside the numeric columns
#[derive(Debug, Clone, PartialEq)]
pub struct Labels {
    /// Component names, matrix then reinforcement
    pub components: [String; 2],
    /// Fabric balance labels, warp then weft
    pub balance: [String; 2],
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            components: ["Matrix".to_string(), "Reinforcement".to_string()],
            balance: ["Warp".to_string(), "Weft".to_string()],
        }
    }
}

/// Numeric columns and labels read from a constituent table
#[derive(Debug, Clone, PartialEq)]
pub struct ConstituentTable {
    pub columns: ColumnInput,
    pub labels: Labels,
}

/// Load a constituent table, choosing the parser from the file extension
pub fn load_table<P: AsRef<Path>>(path: P) -> PlyResult<ConstituentTable> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(PlyError::Import(format!("file not found: {}", path.display())));
    }

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    let records = match ext.as_str() {
        "csv" => read_csv(path)?,
        "xlsx" => read_xlsx(path)?,
        _ => return Err(PlyError::Import(format!("unsupported file format '{}'", ext))),
    };

    info!("read {} constituent rows from {}", records.len(), path.display());
    table_from_records(&records)
}

/// Load only the numeric columns
pub fn load_columns<P: AsRef<Path>>(path: P) -> PlyResult<ColumnInput> {
    load_table(path).map(|table| table.columns)
}

fn read_csv(path: &Path) -> PlyResult<Vec<RawRecord>> {
    let file = File::open(path)?;
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(file);

    let headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();

    let mut records = Vec::new();
    for result in reader.records() {
        let record = result?;
        let row: RawRecord = headers
            .iter()
            .cloned()
            .zip(record.iter().map(|v| v.to_string()))
            .collect();
        if row.values().all(|v| v.is_empty()) {
            continue;
        }
        records.push(row);
    }
    Ok(records)
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        other => other.to_string().trim().to_string(),
    }
}

fn read_xlsx(path: &Path) -> PlyResult<Vec<RawRecord>> {
    let mut workbook: Xlsx<_> = open_workbook(path)
        .map_err(|e: calamine::XlsxError| PlyError::Import(e.to_string()))?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| PlyError::Import("workbook has no sheets".to_string()))?;
    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| PlyError::Import(e.to_string()))?;

    let mut rows = range.rows();
    let headers: Vec<String> = rows
        .next()
        .ok_or_else(|| PlyError::Import(format!("sheet '{}' is empty", sheet_name)))?
        .iter()
        .map(cell_text)
        .collect();

    let mut records = Vec::new();
    for data_row in rows {
        let row: RawRecord = headers
            .iter()
            .cloned()
            .zip(data_row.iter().map(cell_text))
            .collect();
        if row.values().all(|v| v.is_empty()) {
            continue;
        }
        records.push(row);
    }
    Ok(records)
}

fn number(record: &RawRecord, column: &str, row: usize) -> PlyResult<f64> {
    let raw = record
        .get(column)
        .ok_or_else(|| PlyError::Import(format!("missing column '{}'", column)))?;
    raw.replace(',', ".").parse::<f64>().map_err(|_| {
        PlyError::Import(format!(
            "column '{}', row {}: '{}' is not a number",
            column,
            row + 1,
            raw
        ))
    })
}

fn label(record: &RawRecord, column: &str) -> Option<String> {
    record.get(column).filter(|v| !v.is_empty()).cloned()
}

fn table_from_records(records: &[RawRecord]) -> PlyResult<ConstituentTable> {
    let [matrix, reinforcement] = records else {
        return Err(PlyError::Import(format!(
            "expected 2 data rows (matrix, reinforcement), found {}",
            records.len()
        )));
    };

    let column = |name: &str| -> PlyResult<Vec<f64>> {
        Ok(vec![number(matrix, name, 0)?, number(reinforcement, name, 1)?])
    };

    let columns = ColumnInput {
        el: column("El")?,
        et: column("Et")?,
        glt: column("Glt")?,
        nult: column("Nult")?,
        rho: column("Rho")?,
        msf: column("Msf")?,
        n: column("Tissu")?,
        vf: number(matrix, "Vf", 0)?,
    };
    debug!("imported columns: {:?}", columns);

    let defaults = Labels::default();
    let pick = |column: &str, fallback: &[String; 2]| -> [String; 2] {
        [
            label(matrix, column).unwrap_or_else(|| fallback[0].clone()),
            label(reinforcement, column).unwrap_or_else(|| fallback[1].clone()),
        ]
    };

    Ok(ConstituentTable {
        columns,
        labels: Labels {
            components: pick("Composant", &defaults.components),
            balance: pick("Equilibrage", &defaults.balance),
        },
    })
}
