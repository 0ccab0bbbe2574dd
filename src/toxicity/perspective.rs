// Google Perspective API implementation.
//
// Perspective API analyzes text for toxicity, insults, threats, etc.
// We ask for the five attributes the rule set understands, declare the
// product languages, and tell the service not to keep the message.
//
// API docs: https://developers.perspectiveapi.com/s/about-the-api-methods

use std::collections::HashMap;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::traits::{Category, CategoryScores, ToxicityScorer};
use crate::config::{self, DEFAULT_LANGUAGES};
use crate::error::ModerationError;
use crate::output::truncate_chars;

/// Public comments:analyze endpoint.
pub const DEFAULT_ENDPOINT: &str =
    "https://commentanalyzer.googleapis.com/v1alpha1/comments:analyze";

/// Perspective API toxicity scorer.
pub struct PerspectiveScorer {
    client: Client,
    api_key: String,
    endpoint: String,
    languages: Vec<String>,
}

impl PerspectiveScorer {
    /// Create a scorer against the public endpoint with the given API key.
    ///
    /// The key is not validated here; `score_text` refuses to run with an
    /// empty or placeholder key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            languages: DEFAULT_LANGUAGES.iter().map(|l| l.to_string()).collect(),
        }
    }

    /// Point the scorer at another comments:analyze URL.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Replace the candidate languages sent with each request.
    pub fn with_languages(mut self, languages: Vec<String>) -> Self {
        self.languages = languages;
        self
    }

    fn build_request<'a>(&'a self, text: &'a str) -> PerspectiveRequest<'a> {
        PerspectiveRequest {
            comment: Comment { text },
            languages: &self.languages,
            requested_attributes: Category::ALL
                .iter()
                .map(|c| (c.attribute(), AttributeConfig {}))
                .collect(),
            do_not_store: true,
        }
    }
}

#[async_trait]
impl ToxicityScorer for PerspectiveScorer {
    async fn score_text(&self, text: &str) -> Result<CategoryScores, ModerationError> {
        if !config::api_key_is_usable(&self.api_key) {
            return Err(ModerationError::Configuration(
                "PERSPECTIVE_API_KEY is empty or still the placeholder value".to_string(),
            ));
        }

        let response = self
            .client
            .post(&self.endpoint)
            .query(&[("key", self.api_key.as_str())])
            .json(&self.build_request(text))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ModerationError::Classification { status, body });
        }

        let body = response.text().await?;
        let parsed: PerspectiveResponse = serde_json::from_str(&body)?;
        let scores = extract_scores(&parsed)?;

        debug!(
            toxicity = scores.toxicity,
            severe_toxicity = ?scores.severe_toxicity,
            insult = ?scores.insult,
            profanity = ?scores.profanity,
            threat = ?scores.threat,
            text_preview = %truncate_chars(text, 50),
            "Scored text"
        );

        Ok(scores)
    }
}

/// Turn the attribute map into `CategoryScores`. Only TOXICITY is mandatory.
fn extract_scores(response: &PerspectiveResponse) -> Result<CategoryScores, ModerationError> {
    let score = |category: Category| {
        response
            .attribute_scores
            .get(category.attribute())
            .map(|s| s.summary_score.value)
    };

    let toxicity = score(Category::Toxicity)
        .ok_or(ModerationError::MissingScore(Category::Toxicity.attribute()))?;

    Ok(CategoryScores {
        toxicity,
        severe_toxicity: score(Category::SevereToxicity),
        insult: score(Category::Insult),
        profanity: score(Category::Profanity),
        threat: score(Category::Threat),
    })
}

// --- Perspective API request/response types ---

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PerspectiveRequest<'a> {
    comment: Comment<'a>,
    languages: &'a [String],
    requested_attributes: HashMap<&'static str, AttributeConfig>,
    do_not_store: bool,
}

#[derive(Serialize)]
struct Comment<'a> {
    text: &'a str,
}

#[derive(Serialize)]
struct AttributeConfig {}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PerspectiveResponse {
    #[serde(default)]
    attribute_scores: HashMap<String, AttributeScore>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AttributeScore {
    summary_score: SummaryScore,
}

#[derive(Deserialize)]
struct SummaryScore {
    value: f64,
}
