// Rule set — the decision table and suggestion catalog as versioned data.
//
// Rules are evaluated in order and the first one whose score strictly
// exceeds its threshold wins. A category the classifier didn't score never
// matches. The built-in set carries the product constants; a JSON file with
// the same shape can replace it without touching the evaluation logic.

pub mod catalog;
pub mod picker;

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ModerationError;
use crate::toxicity::traits::{Category, CategoryScores};

/// Suggestion bucket sampled when a rule fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RewriteCategory {
    Threat,
    Severe,
    Insult,
    Profanity,
    General,
}

impl RewriteCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            RewriteCategory::Threat => "threat",
            RewriteCategory::Severe => "severe",
            RewriteCategory::Insult => "insult",
            RewriteCategory::Profanity => "profanity",
            RewriteCategory::General => "general",
        }
    }
}

impl std::fmt::Display for RewriteCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the decision table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    pub category: Category,
    /// Fires when the score is strictly greater than this.
    pub threshold: f64,
    pub rewrite: RewriteCategory,
}

impl Rule {
    pub fn new(category: Category, threshold: f64, rewrite: RewriteCategory) -> Self {
        Self {
            category,
            threshold,
            rewrite,
        }
    }

    /// Whether this rule fires for the given scores.
    pub fn matches(&self, scores: &CategoryScores) -> bool {
        scores
            .get(self.category)
            .is_some_and(|score| score > self.threshold)
    }
}

/// Ordered decision table plus the suggestion catalog it points into.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleSet {
    pub version: u32,
    pub rules: Vec<Rule>,
    pub suggestions: BTreeMap<RewriteCategory, Vec<String>>,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            version: 1,
            rules: vec![
                Rule::new(Category::Threat, 0.25, RewriteCategory::Threat),
                Rule::new(Category::SevereToxicity, 0.25, RewriteCategory::Severe),
                Rule::new(Category::Insult, 0.30, RewriteCategory::Insult),
                Rule::new(Category::Profanity, 0.30, RewriteCategory::Profanity),
                Rule::new(Category::Toxicity, 0.35, RewriteCategory::General),
            ],
            suggestions: catalog::default_suggestions(),
        }
    }
}

impl RuleSet {
    /// Parse and validate a rule set from JSON.
    pub fn from_json(json: &str) -> Result<Self, ModerationError> {
        let rules: RuleSet = serde_json::from_str(json)
            .map_err(|e| ModerationError::InvalidRules(e.to_string()))?;
        rules.validate()?;
        Ok(rules)
    }

    /// Read, parse and validate a rule set file.
    pub fn from_path(path: &Path) -> Result<Self, ModerationError> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| ModerationError::InvalidRules(format!("{}: {e}", path.display())))?;
        Self::from_json(&json)
    }

    /// Reject tables that could fire a rule with nothing to suggest.
    pub fn validate(&self) -> Result<(), ModerationError> {
        if self.rules.is_empty() {
            return Err(ModerationError::InvalidRules(
                "at least one rule is required".to_string(),
            ));
        }
        for rule in &self.rules {
            if !(0.0..=1.0).contains(&rule.threshold) {
                return Err(ModerationError::InvalidRules(format!(
                    "{} threshold {} is outside [0, 1]",
                    rule.category, rule.threshold
                )));
            }
            if self.suggestions_for(rule.rewrite).is_empty() {
                return Err(ModerationError::InvalidRules(format!(
                    "no suggestions for rewrite category {}",
                    rule.rewrite
                )));
            }
        }
        Ok(())
    }

    /// First matching rule in priority order, `None` if the message is fine.
    pub fn decide(&self, scores: &CategoryScores) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.matches(scores))
    }

    pub fn suggestions_for(&self, rewrite: RewriteCategory) -> &[String] {
        self.suggestions
            .get(&rewrite)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
