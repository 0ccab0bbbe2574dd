// Colored terminal output for verdicts and the active rule set.
//
// main.rs delegates here for anything that isn't --json.

use colored::Colorize;

use crate::moderation::ModerationResult;
use crate::rules::RuleSet;
use crate::toxicity::traits::{Category, CategoryScores};

use super::truncate_chars;

/// Display a single verdict.
pub fn display_result(text: &str, result: &ModerationResult) {
    println!("  {} {}", "Message:".dimmed(), truncate_chars(text, 80));

    if result.allowed {
        println!("  {} {}", "Verdict:".dimmed(), "allowed".green().bold());
    } else {
        println!("  {} {}", "Verdict:".dimmed(), "blocked".red().bold());
        println!("  {} {}", "Suggestion:".dimmed(), result.suggestion.cyan());
        if let Some(source) = &result.detected_category {
            println!("  {} {}", "Detected by:".dimmed(), source);
        }
    }

    if let Some(scores) = &result.scores {
        display_scores(scores);
    }
}

fn display_scores(scores: &CategoryScores) {
    let line = Category::ALL
        .iter()
        .map(|category| match scores.get(*category) {
            Some(score) => format!("{}={}", category, colorize_score(score)),
            None => format!("{}={}", category, "-".dimmed()),
        })
        .collect::<Vec<_>>()
        .join("  ");
    println!("  {} {}", "Scores:".dimmed(), line);
}

/// Summary line after a batch run.
pub fn display_batch_summary(allowed: usize, blocked: usize, failed: usize) {
    println!();
    println!(
        "{} {} allowed, {} blocked, {} failed",
        "Summary:".bold(),
        allowed.to_string().green(),
        blocked.to_string().red(),
        failed.to_string().yellow(),
    );
}

/// Display the decision table and catalog.
pub fn display_rule_set(rules: &RuleSet) {
    println!(
        "\n{}",
        format!("=== Rule set v{} ===", rules.version).bold()
    );
    println!();
    println!(
        "  {:>4}  {:<16} {:>9}  {:<10}",
        "Prio".dimmed(),
        "Category".dimmed(),
        "Threshold".dimmed(),
        "Rewrite".dimmed(),
    );
    println!("  {}", "-".repeat(44).dimmed());

    for (i, rule) in rules.rules.iter().enumerate() {
        println!(
            "  {:>4}. {:<16} {:>9.2}  {:<10}",
            i + 1,
            rule.category.as_str(),
            rule.threshold,
            rule.rewrite.as_str(),
        );
    }

    for (rewrite, lines) in &rules.suggestions {
        println!("\n  {}", format!("[{rewrite}]").bold());
        for line in lines {
            println!("    - {line}");
        }
    }
    println!();
}

fn colorize_score(score: f64) -> String {
    let text = format!("{score:.2}");
    if score > 0.5 {
        text.red().to_string()
    } else if score > 0.25 {
        text.yellow().to_string()
    } else {
        text.green().to_string()
    }
}
