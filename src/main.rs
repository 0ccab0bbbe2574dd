use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use futures::stream::{self, StreamExt};
use tracing::{info, warn};

use tactful::config::Config;
use tactful::output::terminal;
use tactful::ModerationPolicy;

/// Tactful: message moderation for co-parenting conversations.
///
/// Scores a message with the Perspective API and, when it crosses a
/// threshold, proposes a neutral rephrasing instead.
#[derive(Parser)]
#[command(name = "tactful", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a single message
    Check {
        /// The message text
        text: String,

        /// Print the verdict as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check every non-empty line of a file
    Batch {
        /// File with one message per line
        file: PathBuf,

        /// Number of messages to score in parallel (default: 4)
        #[arg(long, default_value = "4")]
        concurrency: usize,

        /// Print verdicts as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the active rule set (thresholds and suggestions)
    Rules {
        /// Print the rule set as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("tactful=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load();

    match cli.command {
        Commands::Check { text, json } => {
            let policy = build_policy(&config)?;
            let result = policy.evaluate(&text).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                terminal::display_result(&text, &result);
            }
        }

        Commands::Batch {
            file,
            concurrency,
            json,
        } => {
            let policy = build_policy(&config)?;
            let contents = std::fs::read_to_string(&file)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            let messages = message_lines(&contents);

            info!(count = messages.len(), concurrency, "Checking messages");

            let policy = &policy;
            let outcomes: Vec<_> = stream::iter(messages)
                .map(|text| async move { (text, policy.evaluate(text).await) })
                .buffered(concurrency.max(1))
                .collect()
                .await;

            let (mut allowed, mut blocked, mut failed) = (0, 0, 0);
            let mut report = Vec::with_capacity(outcomes.len());

            for (text, outcome) in outcomes {
                match outcome {
                    Ok(result) => {
                        if result.allowed {
                            allowed += 1;
                        } else {
                            blocked += 1;
                        }
                        if json {
                            report.push(serde_json::json!({ "text": text, "result": result }));
                        } else {
                            terminal::display_result(text, &result);
                            println!();
                        }
                    }
                    Err(e) => {
                        failed += 1;
                        warn!(error = %e, "Failed to check message");
                        if json {
                            report.push(serde_json::json!({ "text": text, "error": e.to_string() }));
                        } else {
                            println!("  {} {}", "Error:".red().bold(), e);
                            println!();
                        }
                    }
                }
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                terminal::display_batch_summary(allowed, blocked, failed);
            }
        }

        Commands::Rules { json } => {
            let rules = config.rule_set()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&rules)?);
            } else {
                terminal::display_rule_set(&rules);
            }
        }
    }

    Ok(())
}

/// Non-blank lines of a batch file, as written.
fn message_lines(contents: &str) -> Vec<&str> {
    contents
        .lines()
        .filter(|line| !line.trim().is_empty())
        .collect()
}

/// Build the moderation policy from config, failing early without a key.
fn build_policy(config: &Config) -> Result<ModerationPolicy> {
    config.require_perspective()?;
    let rules = config.rule_set()?;
    let scorer = Arc::new(config.perspective_scorer());
    Ok(ModerationPolicy::new(scorer).with_rules(rules))
}
