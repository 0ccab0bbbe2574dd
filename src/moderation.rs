// Moderation policy — scores a message and turns the scores into a verdict.
//
// One classifier call per message, one pass over the rule set, no state kept
// between calls. Errors from the scorer are returned untouched.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info};

use crate::error::ModerationError;
use crate::rules::picker::{SuggestionPicker, ThreadRngPicker};
use crate::rules::RuleSet;
use crate::toxicity::traits::{CategoryScores, ToxicityScorer};

/// Provenance recorded on every blocked verdict: the external classifier
/// made the call. The matched rule is deliberately not exposed here.
pub const DETECTED_BY_CLASSIFIER: &str = "perspective_api";

/// The verdict for one message.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModerationResult {
    pub allowed: bool,
    /// The original text when allowed, a catalog rephrasing when blocked.
    pub suggestion: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scores: Option<CategoryScores>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detected_category: Option<String>,
}

/// Scores messages and decides whether they can be sent.
pub struct ModerationPolicy {
    scorer: Arc<dyn ToxicityScorer>,
    rules: RuleSet,
    picker: Box<dyn SuggestionPicker>,
}

impl ModerationPolicy {
    /// Policy with the built-in rule set and a fresh random draw per block.
    pub fn new(scorer: Arc<dyn ToxicityScorer>) -> Self {
        Self {
            scorer,
            rules: RuleSet::default(),
            picker: Box::new(ThreadRngPicker),
        }
    }

    pub fn with_rules(mut self, rules: RuleSet) -> Self {
        self.rules = rules;
        self
    }

    pub fn with_picker(mut self, picker: impl SuggestionPicker + 'static) -> Self {
        self.picker = Box::new(picker);
        self
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Score `text` and return the verdict.
    pub async fn evaluate(&self, text: &str) -> Result<ModerationResult, ModerationError> {
        let scores = self.scorer.score_text(text).await?;
        Ok(self.verdict(text, scores))
    }

    /// Apply the rule set to scores that were already obtained.
    pub fn verdict(&self, text: &str, scores: CategoryScores) -> ModerationResult {
        let Some(rule) = self.rules.decide(&scores) else {
            debug!(toxicity = scores.toxicity, "Message allowed");
            return ModerationResult {
                allowed: true,
                suggestion: text.to_string(),
                scores: Some(scores),
                detected_category: None,
            };
        };

        let suggestions = self.rules.suggestions_for(rule.rewrite);
        // Empty only for rule sets that never went through validate().
        let suggestion = if suggestions.is_empty() {
            String::new()
        } else {
            // Custom pickers may return an index past the end.
            suggestions[self.picker.pick(suggestions.len()) % suggestions.len()].clone()
        };

        debug!(
            category = %rule.category,
            rewrite = %rule.rewrite,
            threshold = rule.threshold,
            "Matched rule"
        );
        info!("Message blocked");

        ModerationResult {
            allowed: false,
            suggestion,
            scores: Some(scores),
            detected_category: Some(DETECTED_BY_CLASSIFIER.to_string()),
        }
    }
}
