// Toxicity scorer trait and the score types it produces.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::ModerationError;

/// A harmful-content category the classifier can score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    Toxicity,
    SevereToxicity,
    Insult,
    Profanity,
    Threat,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Toxicity,
        Category::SevereToxicity,
        Category::Insult,
        Category::Profanity,
        Category::Threat,
    ];

    /// Attribute name on the Perspective wire format.
    pub fn attribute(self) -> &'static str {
        match self {
            Category::Toxicity => "TOXICITY",
            Category::SevereToxicity => "SEVERE_TOXICITY",
            Category::Insult => "INSULT",
            Category::Profanity => "PROFANITY",
            Category::Threat => "THREAT",
        }
    }

    /// Name used in serialized scores and rule files.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Toxicity => "toxicity",
            Category::SevereToxicity => "severeToxicity",
            Category::Insult => "insult",
            Category::Profanity => "profanity",
            Category::Threat => "threat",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-category probabilities (all 0.0 to 1.0) for one message.
///
/// `toxicity` is always returned by the classifier. The other attributes
/// are best-effort and stay `None` when the classifier omits them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryScores {
    pub toxicity: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severe_toxicity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insult: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profanity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threat: Option<f64>,
}

impl CategoryScores {
    /// Score for a category, `None` when the classifier didn't return it.
    pub fn get(&self, category: Category) -> Option<f64> {
        match category {
            Category::Toxicity => Some(self.toxicity),
            Category::SevereToxicity => self.severe_toxicity,
            Category::Insult => self.insult,
            Category::Profanity => self.profanity,
            Category::Threat => self.threat,
        }
    }
}

/// Trait for scoring text toxicity. Implementations must be async because
/// most providers require HTTP API calls.
#[async_trait]
pub trait ToxicityScorer: Send + Sync {
    /// Score a single text. Failures are returned unmodified; no retry.
    async fn score_text(&self, text: &str) -> Result<CategoryScores, ModerationError>;
}
