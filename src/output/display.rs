//! Display functions for command results

use super::formatters::{create_progress_bar, valid_tag};
use crate::commands::{AnalysisResult, RankReport, VerifyResult};
use crate::core::Constraint;
use colored::Colorize;

/// Print the user constraints a run is filtered by
pub fn print_constraints(constraints: &[Constraint]) {
    if constraints.is_empty() {
        return;
    }

    println!(
        "{}\n",
        "Running Wordle solver with the following user-defined constraints:".bright_cyan()
    );
    for constraint in constraints {
        println!("\t * {constraint}");
    }
    println!();
}

/// Print the top ranked guesses
pub fn print_rank_report(report: &RankReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} ",
        format!("TOP {} CANDIDATES", report.ranked.len())
            .bright_cyan()
            .bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n   Scored {} guesses against {} answers ({} scorer, {:.2}s)\n",
        report.total_guesses,
        report.total_answers,
        report.scorer,
        report.duration.as_secs_f64()
    );

    for (i, guess) in report.ranked.iter().enumerate() {
        println!(
            "   {:>2}. {} {:>6}  {}",
            i + 1,
            guess.word.text().to_uppercase().bright_yellow().bold(),
            guess.score,
            valid_tag(guess.valid).green()
        );
    }
}

/// Print the result of guess analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} {}",
        "ELIMINATION ANALYSIS:".bright_cyan().bold(),
        result.word.text().to_uppercase().bright_yellow().bold(),
        valid_tag(result.valid).green()
    );
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n📊 Against {} targets ({} possible answers):",
        result.targets, result.total_answers
    );
    println!(
        "   Median eliminated: {}",
        result.median.to_string().bright_yellow().bold()
    );
    println!("   Mean eliminated:   {:.1}", result.mean);
    println!("   Range:             {} - {}", result.min, result.max);

    let peak = result
        .distribution
        .iter()
        .map(|&(_, targets)| targets)
        .max()
        .unwrap_or(0);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for &(eliminated, targets) in &result.distribution {
        let bar = create_progress_bar(targets as f64, peak as f64, 40);
        println!("   {eliminated:>6}: {} {targets:4}", bar.green());
    }
}

/// Print the result of the strategy cross-check
pub fn print_verify_result(result: &VerifyResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "STRATEGY CROSS-CHECK".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n   Guesses checked:  {}", result.guesses);
    println!("   Pairs scored:     {}", result.pairs);
    println!(
        "   Indexed:          {:.2}s",
        result.indexed_time.as_secs_f64()
    );
    println!(
        "   Brute force:      {:.2}s",
        result.brute_force_time.as_secs_f64()
    );

    if result.is_consistent() {
        println!("\n{}", "✅ Strategies agree on every pair".green().bold());
        return;
    }

    println!(
        "\n{}",
        format!("❌ {} mismatched pairs", result.mismatches.len())
            .red()
            .bold()
    );
    for m in result.mismatches.iter().take(20) {
        println!(
            "   {} vs {}: indexed {}, brute force {}",
            m.guess, m.target, m.indexed, m.brute_force
        );
    }
}
