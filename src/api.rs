use crate::{Error, stats::Stats};
use serde::Serialize;

/// Output of one analysis. Serializes to `{"stats": {...}, "suggestions": [...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisResult {
    pub stats: Stats,
    /// In rule evaluation order
    pub suggestions: Vec<String>,
}

impl AnalysisResult {
    pub fn to_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, Error> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
