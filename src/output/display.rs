//! Display functions for command results

use super::formatters::{create_progress_bar, length_badge, spaced_letters};
use crate::commands::{AnalysisResult, CheckResult};
use crate::game::Verdict;
use colored::Colorize;

/// Print the verdict of every word in a batch check
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Root word: {}",
        spaced_letters(&result.root_word).bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for step in &result.steps {
        match step.verdict {
            Verdict::Accepted => {
                println!("  {} {}", "✓".green().bold(), step.word.bright_white());
            }
            Verdict::Rejected(reason) => {
                println!(
                    "  {} {:<12} {} - {}",
                    "✗".red().bold(),
                    step.word,
                    reason.title().red(),
                    reason.message(&result.root_word).bright_black()
                );
            }
            Verdict::Ignored => {
                println!("  {} {}", "·".bright_black(), "(empty)".bright_black());
            }
        }
    }

    println!();
    println!(
        "{}",
        format!(
            "Score: {} of {} submitted",
            result.score(),
            result.steps.len()
        )
        .bold()
    );
}

/// Print every word reachable from a root word
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "ROOT WORD ANALYSIS:".bright_cyan().bold(),
        spaced_letters(&result.root_word).bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let max_score = result.max_score();
    println!(
        "\n📊 {} playable words out of {} in the dictionary",
        max_score.to_string().bright_yellow().bold(),
        result.dictionary_size
    );

    if max_score == 0 {
        println!("\n   No words can be made from this root word.");
        return;
    }

    println!("\n📈 {}", "By length:".bright_cyan().bold());
    for (length, words) in &result.by_length {
        let bar = create_progress_bar(words.len() as f64, max_score as f64, 30);
        println!(
            "   {} {} {:4}",
            length_badge(*length),
            bar.green(),
            words.len()
        );
    }

    for (length, words) in result.by_length.iter().rev() {
        println!(
            "\n{} {}",
            length_badge(*length).bright_cyan().bold(),
            format!("{length}-letter words").bright_cyan()
        );
        for chunk in words.chunks(8) {
            println!("   {}", chunk.join("  "));
        }
    }
}
