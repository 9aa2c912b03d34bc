use crate::{
    Error,
    api::AnalysisResult,
    bpmn::AnalysisDocument,
    diagram::{Diagram, reader::read_bpmn},
    stats,
    suggest::{self, Thresholds},
};
use log::{info, warn};
use std::path::Path;

/// Analysis entry point carrying the rule thresholds.
/// ```
/// use bpmn_lint::{Analyzer, Thresholds};
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let analyzer = Analyzer::new()
///         .thresholds(Thresholds {
///             max_complexity: 60,
///             ..Default::default()
///         })
///         .disable("missing-lanes");
///     let result = analyzer.analyze_file("demos/order.bpmn")?;
///     println!("{}", result.to_json_pretty()?);
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    thresholds: Thresholds,
}

impl Analyzer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all thresholds, disabled rules included.
    pub fn thresholds(mut self, thresholds: Thresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Skip a rule by name.
    pub fn disable(mut self, rule: impl Into<String>) -> Self {
        let rule = rule.into();
        if !suggest::rules().iter().any(|known| known.name == rule) {
            warn!(r#"Disabled unknown rule "{rule}""#);
        }
        self.thresholds.disabled_rules.push(rule);
        self
    }

    pub fn get_thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    /// Parse and analyze BPMN XML text. Parse errors are returned unchanged, no partial result.
    pub fn analyze(&self, xml: &str) -> Result<AnalysisResult, Error> {
        let document = read_bpmn(xml)?;
        Ok(self.analyze_document(&document))
    }

    /// Read a BPMN file and analyze it.
    pub fn analyze_file(&self, path: impl AsRef<Path>) -> Result<AnalysisResult, Error> {
        let document = AnalysisDocument::from_file(path)?;
        Ok(self.analyze_document(&document))
    }

    /// Analyze an already parsed document. Structural problems end up in the result, never as errors.
    pub fn analyze_document(&self, document: &AnalysisDocument) -> AnalysisResult {
        let diagram = Diagram::new(document);
        let stats = stats::collect(&diagram);
        let suggestions = suggest::evaluate(&diagram, &stats, &self.thresholds);
        info!(
            "Analyzed {} processes, {} elements, {} suggestions",
            stats.total_processes,
            stats.total_elements,
            suggestions.len()
        );
        AnalysisResult { stats, suggestions }
    }

    /// Run [`Analyzer::analyze`] on tokio's blocking pool.
    #[cfg(feature = "async")]
    pub async fn analyze_async(&self, xml: String) -> Result<AnalysisResult, Error> {
        let analyzer = self.clone();
        tokio::task::spawn_blocking(move || analyzer.analyze(&xml))
            .await
            .map_err(|error| Error::Task(error.to_string()))?
    }
}
