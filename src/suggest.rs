mod rules;

use crate::{Error, diagram::Diagram, stats::Stats};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

pub(crate) const WELL_STRUCTURED: &str =
    "No specific suggestions. The BPMN model appears well-structured.";

/// Tunable limits of the suggestion rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    /// Fewer flow nodes than this and the model is considered trivial
    pub min_elements: usize,
    /// More tasks than this without any gateway suggests missing decisions
    pub gateway_task_threshold: usize,
    /// More tasks than this without lanes suggests adding lanes
    pub lane_task_threshold: usize,
    pub min_complexity: usize,
    pub max_complexity: usize,
    /// Complexity above which a model without sub processes should be split
    pub subprocess_complexity: usize,
    /// Also report gateways that only merge (fan-in > 1, fan-out 1)
    pub flag_merging_gateways: bool,
    /// Rule names that are not evaluated
    pub disabled_rules: Vec<String>,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            min_elements: 3,
            gateway_task_threshold: 3,
            lane_task_threshold: 5,
            min_complexity: 10,
            max_complexity: 100,
            subprocess_complexity: 50,
            flag_merging_gateways: true,
            disabled_rules: Vec::new(),
        }
    }
}

impl Thresholds {
    /// Missing keys keep their default value. Anything but a JSON object is rejected.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        if !value.is_object() {
            return Err(Error::Json(serde::de::Error::custom(
                "thresholds must be a JSON object",
            )));
        }
        Ok(serde_json::from_value(value)?)
    }

    pub fn is_disabled(&self, rule: &str) -> bool {
        self.disabled_rules.iter().any(|name| name == rule)
    }
}

/// Everything a rule may look at.
pub struct RuleContext<'a> {
    pub diagram: &'a Diagram<'a>,
    pub stats: &'a Stats,
    pub thresholds: &'a Thresholds,
}

/// A rule emits at most one suggestion. Errors skip the rule.
pub type Check = fn(&RuleContext<'_>) -> Result<Option<String>, Error>;

#[derive(Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    pub check: Check,
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule").field("name", &self.name).finish()
    }
}

/// All rules in evaluation order.
pub fn rules() -> &'static [Rule] {
    rules::RULES
}

/// Run every enabled rule in table order.
pub fn evaluate(diagram: &Diagram, stats: &Stats, thresholds: &Thresholds) -> Vec<String> {
    let context = RuleContext {
        diagram,
        stats,
        thresholds,
    };

    let mut suggestions: Vec<String> = rules()
        .iter()
        .filter(|rule| !thresholds.is_disabled(rule.name))
        .filter_map(|rule| match (rule.check)(&context) {
            Ok(suggestion) => {
                if suggestion.is_some() {
                    debug!("Rule {} fired", rule.name);
                }
                suggestion
            }
            Err(error) => {
                warn!("Skipped rule {}: {error}", rule.name);
                None
            }
        })
        .collect();

    if suggestions.is_empty() {
        suggestions.push(WELL_STRUCTURED.into());
    }
    suggestions
}
