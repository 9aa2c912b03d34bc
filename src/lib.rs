//! # bpmn-lint
//!
//! `bpmn-lint` reads a Business Process Model and Notation (BPMN) 2.0 file, for example one created by <https://demo.bpmn.io/new>,
//! and reports structural statistics together with a list of improvement suggestions.
//!
//! - Static analysis only. Nothing is executed or simulated.
//! - Elements are matched by namespace, so `bpmn:`, `bpmn2:` or a default namespace give the same result.
//! - Finds dangling flow references, dead-end tasks, unreachable elements and missing error handling.
//! - Rule thresholds can be tuned or rules disabled by name.
//! - Single or multithreaded index building (opt in)
//!
//! ## Example
//!
//! ### Cargo.toml
//! ```toml
//! [dependencies]
//! bpmn-lint = "0.1"
//! log = "0.4"
//! pretty_env_logger = "0.5"
//! ```
//! ### main.rs
//!
//! ```
//! extern crate pretty_env_logger;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     pretty_env_logger::init();
//!
//!     let result = bpmn_lint::analyze_file("demos/order.bpmn")?;
//!     println!("Tasks: {}", result.stats.total_tasks);
//!     for suggestion in &result.suggestions {
//!         println!("- {suggestion}");
//!     }
//!     Ok(())
//! }
//! ```

mod analyzer;
mod api;
mod bpmn;
mod diagram;
mod error;
#[cfg(test)]
mod fixtures;
pub mod stats;
pub mod suggest;

pub use analyzer::Analyzer;
pub use api::AnalysisResult;
pub use bpmn::{
    AnalysisDocument, BPMN_NS, ElementKind, GatewayType, Process, ProcessElement, SequenceFlow,
    Symbol,
};
pub use diagram::{DanglingFlow, Diagram, Endpoint, ProcessIndex, reader::read_bpmn};
pub use error::{Error, Result};
pub use stats::Stats;
pub use suggest::Thresholds;

use std::path::Path;

/// Analyze BPMN XML text with default thresholds.
pub fn analyze(xml: &str) -> Result<AnalysisResult> {
    Analyzer::default().analyze(xml)
}

/// Analyze a BPMN file with default thresholds.
pub fn analyze_file(path: impl AsRef<Path>) -> Result<AnalysisResult> {
    Analyzer::default().analyze_file(path)
}
