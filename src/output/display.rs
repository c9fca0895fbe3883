//! Display functions for command results

use super::formatters::{create_progress_bar, rejection_message, rejection_title, spaced_letters};
use crate::commands::{HintsResult, RoundStatus, SubmitResult, SurveyResult};
use crate::round::RoundOrigin;
use crate::validation::RuleConfig;
use colored::Colorize;

/// Print the root word banner
pub fn print_root(root: &str) {
    println!("\n{}", "═".repeat(60).cyan());
    println!("   {}", spaced_letters(root).bright_yellow().bold());
    println!("{}", "═".repeat(60).cyan());
}

/// Print the current round
pub fn print_status(status: &RoundStatus) {
    print_root(&status.root);

    let origin = match status.origin {
        RoundOrigin::Resumed => "Resumed saved round".bright_black(),
        RoundOrigin::Started => "New round".green(),
    };
    println!("{origin}");

    if status.used.is_empty() {
        println!("\nNo words yet. Make words from the letters above!");
        return;
    }

    println!(
        "\n📝 {} ({})",
        "Your words:".bright_cyan().bold(),
        status.used.len()
    );
    for word in &status.used {
        println!("   • {}", word.bright_white());
    }
}

/// Print the outcome of one submission
pub fn print_submission(result: &SubmitResult, rules: &RuleConfig) {
    match &result.outcome {
        Ok(word) => {
            println!(
                "{} {} ({} {})",
                "✓".green().bold(),
                word.bright_white().bold(),
                result.total_words,
                if result.total_words == 1 { "word" } else { "words" }
            );
        }
        Err(reason) => {
            println!(
                "{} {}: {}",
                "✗".red().bold(),
                rejection_title(*reason).red().bold(),
                rejection_message(*reason, &result.root, rules)
            );
        }
    }
}

/// Print hint results; words only when `show` is set
pub fn print_hints(result: &HintsResult, show: bool) {
    print_root(&result.root);

    println!(
        "\n💡 {} words still playable ({} found so far)",
        result.words.len().to_string().bright_yellow().bold(),
        result.used
    );

    if show {
        for word in &result.words {
            println!("   • {word}");
        }
    } else if !result.words.is_empty() {
        println!("   Run with --show to list them.");
    }
}

/// Print survey rankings, `top` entries at most
pub fn print_survey(result: &SurveyResult, top: usize) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "ROOT SURVEY".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Summary:".bright_cyan().bold());
    println!("   Roots surveyed:   {}", result.entries.len());
    println!("   Dictionary size:  {}", result.vocabulary_size);
    println!(
        "   Average playable: {}",
        format!("{:.1}", result.average_playable)
            .bright_yellow()
            .bold()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    let max = result.entries.first().map_or(0, |entry| entry.playable);

    println!("\n📈 {}", "Most generous roots:".bright_cyan().bold());
    for entry in result.entries.iter().take(top) {
        let bar = create_progress_bar(entry.playable as f64, max as f64, 30);
        println!(
            "   {:<10} {} {:4}  {}",
            entry.root.to_uppercase(),
            bar.green(),
            entry.playable,
            entry.longest.as_deref().unwrap_or("-").bright_black()
        );
    }

    let dead = result.dead_roots();
    if !dead.is_empty() {
        println!(
            "\n⚠️  {} {}",
            "Roots with no playable words:".yellow().bold(),
            dead.join(", ")
        );
    }
}
