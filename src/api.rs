//! JSON request/response contract shared by the HTTP server and WASM bindings

use log::warn;
use serde::{Deserialize, Serialize};

use crate::analysis::{angle_sweep, SweepOptions};
use crate::constituents::PlyInput;
use crate::error::PlyResult;
use crate::ply::Ply;
use crate::results::{AngleSweep, PlyReport};

fn default_surface() -> f64 {
    1.0
}

/// Homogenization request: the ply input plus optional report settings
#[derive(Debug, Clone, Deserialize)]
pub struct HomogenizeRequest {
    #[serde(flatten)]
    pub input: PlyInput,
    /// Ply surface in m² used for masses
    #[serde(default = "default_surface")]
    pub surface: f64,
    /// Angle sweep settings; the default half-turn sweep when absent
    #[serde(default)]
    pub sweep: Option<SweepOptions>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HomogenizeResults {
    pub report: PlyReport,
    pub sweep: AngleSweep,
}

#[derive(Debug, Clone, Serialize)]
pub struct HomogenizeResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<HomogenizeResults>,
}

impl HomogenizeResponse {
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
            results: None,
        }
    }
}

/// Run every computation requested
pub fn run(request: HomogenizeRequest) -> PlyResult<HomogenizeResults> {
    let ply = Ply::new(request.input)?;
    let report = ply.report(request.surface)?;
    let sweep = angle_sweep(&ply, &request.sweep.unwrap_or_default())?;
    Ok(HomogenizeResults { report, sweep })
}

/// Run a request, folding errors into the response body
pub fn homogenize(request: HomogenizeRequest) -> HomogenizeResponse {
    match run(request) {
        Ok(results) => HomogenizeResponse {
            success: true,
            error: None,
            results: Some(results),
        },
        Err(e) => {
            warn!("homogenization request failed: {}", e);
            HomogenizeResponse::failure(e.to_string())
        }
    }
}

/// Parse a JSON request and serialize the response
pub fn homogenize_json(request_json: &str) -> String {
    let response = match serde_json::from_str::<HomogenizeRequest>(request_json) {
        Ok(request) => homogenize(request),
        Err(e) => HomogenizeResponse::failure(format!("Failed to parse request: {}", e)),
    };

    serde_json::to_string(&response).unwrap_or_else(|e| {
        format!(r#"{{"success":false,"error":"Serialization failed: {}"}}"#, e)
    })
}
