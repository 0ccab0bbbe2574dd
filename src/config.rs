use std::env;
use std::path::PathBuf;

use crate::error::ModerationError;
use crate::rules::RuleSet;
use crate::toxicity::perspective::{PerspectiveScorer, DEFAULT_ENDPOINT};

/// Value shipped in `.env.example`. Treated the same as an unset key.
pub const PLACEHOLDER_API_KEY: &str = "YOUR_PERSPECTIVE_API_KEY";

/// Candidate languages sent to the classifier when none are configured.
pub const DEFAULT_LANGUAGES: &[&str] = &["fr", "en"];

/// True when `key` is neither blank nor the placeholder.
pub fn api_key_is_usable(key: &str) -> bool {
    let key = key.trim();
    !key.is_empty() && key != PLACEHOLDER_API_KEY
}

/// Central configuration loaded from environment variables.
///
/// All secrets come from env vars (never hardcoded). The .env file
/// is loaded automatically at startup via dotenvy.
#[derive(Clone)]
pub struct Config {
    pub perspective_api_key: String,
    /// comments:analyze URL (defaults to the public Google endpoint)
    pub perspective_api_url: String,
    /// Language hints passed through to the classifier
    pub languages: Vec<String>,
    /// Optional JSON rule set replacing the built-in thresholds and catalog
    pub rules_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the process environment.
    pub fn load() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build a config from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let languages = lookup("TACTFUL_LANGUAGES")
            .map(|raw| {
                raw.split(',')
                    .map(|l| l.trim().to_string())
                    .filter(|l| !l.is_empty())
                    .collect::<Vec<_>>()
            })
            .filter(|langs| !langs.is_empty())
            .unwrap_or_else(|| DEFAULT_LANGUAGES.iter().map(|l| l.to_string()).collect());

        Self {
            perspective_api_key: lookup("PERSPECTIVE_API_KEY").unwrap_or_default(),
            perspective_api_url: lookup("PERSPECTIVE_API_URL")
                .filter(|url| !url.is_empty())
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            languages,
            rules_path: lookup("TACTFUL_RULES")
                .filter(|p| !p.is_empty())
                .map(PathBuf::from),
        }
    }

    /// Check that the Perspective API key is configured.
    /// Call this before any operation that needs toxicity scoring.
    pub fn require_perspective(&self) -> Result<(), ModerationError> {
        if !api_key_is_usable(&self.perspective_api_key) {
            return Err(ModerationError::Configuration(
                "PERSPECTIVE_API_KEY not set. Add it to your .env file.\n\
                 See .env.example for the required variables."
                    .to_string(),
            ));
        }
        Ok(())
    }

    /// Build the Perspective scorer described by this config.
    pub fn perspective_scorer(&self) -> PerspectiveScorer {
        PerspectiveScorer::new(self.perspective_api_key.clone())
            .with_endpoint(self.perspective_api_url.clone())
            .with_languages(self.languages.clone())
    }

    /// The rule set from `TACTFUL_RULES`, or the built-in one.
    pub fn rule_set(&self) -> Result<RuleSet, ModerationError> {
        match &self.rules_path {
            Some(path) => RuleSet::from_path(path),
            None => Ok(RuleSet::default()),
        }
    }
}
