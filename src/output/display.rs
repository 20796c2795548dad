//! Display functions for command results

use super::formatters::{create_progress_bar, feedback_line, guesses_word};
use crate::commands::{
    EvaluationStatistics, OpenerStats, SolveResult, SuggestResult, WordlistReport,
};
use crate::core::WORD_LENGTH;
use crate::game::MAX_GUESSES;
use crate::scoring::frequency::alphabet;
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {} ({})",
        result.target.to_uppercase().bright_yellow().bold(),
        result.method
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        println!("\nTurn {}: {}", i + 1, feedback_line(&step.feedback));

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
        }
    }

    println!();
    let count = result.steps.len();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {count} {}!", guesses_word(count))
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {count} {}", guesses_word(count))
                .red()
                .bold()
        );
    }
}

/// Print batch evaluation statistics
pub fn print_evaluation_statistics(stats: &EvaluationStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Evaluation Results ({}) ", stats.method);
    println!("{}", "═".repeat(70));

    let total = stats.total_words.max(1) as f64;

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Total words tested:  {}", stats.total_words);
    println!(
        "  Successfully solved: {} {}",
        stats.solved,
        format!("({:.1}%)", stats.solved as f64 / total * 100.0).green()
    );
    if stats.failed > 0 {
        println!(
            "  Failed to solve:     {} {}",
            stats.failed,
            format!("({:.1}%)", stats.failed as f64 / total * 100.0).red()
        );
    }
    println!(
        "  Average guesses:     {}",
        format!("{:.3}", stats.average_guesses).bright_yellow().bold()
    );
    println!("  Best / worst:        {} / {}", stats.min_guesses, stats.max_guesses);
    println!(
        "  Total time:          {:.2}s",
        stats.total_time.as_secs_f64()
    );

    println!("\n📈 {}", "Guess Distribution".bright_cyan().bold());
    let max_count = stats.guess_distribution.values().copied().max().unwrap_or(0);
    for guesses in 1..=MAX_GUESSES {
        let count = stats.guess_distribution.get(&guesses).copied().unwrap_or(0);
        let percentage = count as f64 / stats.solved.max(1) as f64 * 100.0;
        let bar = create_progress_bar(count as f64, max_count as f64, 40);
        println!("  {guesses} guesses: {} {count:4} ({percentage:5.1}%)", bar.green());
    }

    if !stats.hardest_words.is_empty() {
        println!("\n😰 {}", "Hardest Words".yellow().bold());
        for (word, guesses) in stats.hardest_words.iter().take(5) {
            println!("  {} ({guesses} {})", word.to_uppercase().yellow(), guesses_word(*guesses));
        }
    }

    if !stats.failed_words.is_empty() {
        println!("\n❌ {}", "Unsolved".red().bold());
        println!("  {}", stats.failed_words.join(", ").to_uppercase());
    }
}

/// Print ranked suggestions and the surviving pool
pub fn print_suggestions(result: &SuggestResult, method: &str) {
    println!(
        "\n{} candidates remaining",
        result.remaining.len().to_string().bright_cyan().bold()
    );
    if result.remaining.len() <= 10 {
        let words: Vec<String> = result
            .remaining
            .iter()
            .map(|w| w.text().to_uppercase())
            .collect();
        println!("  {}", words.join(", "));
    }

    println!("\n🎯 {} ({method})", "Suggestions".bright_cyan().bold());
    for (rank, (word, score)) in result.suggestions.iter().enumerate() {
        println!(
            "  {:2}. {} {score:.4}",
            rank + 1,
            word.to_uppercase().bright_white().bold()
        );
    }
}

/// Print the opener study as a table
pub fn print_opener_table(study: &[OpenerStats]) {
    println!("\n{:<8} {:>8} {:>5} {:>7}", "OPENER", "AVERAGE", "MAX", "FAILED");
    for row in study {
        println!(
            "{:<8} {:>8.4} {:>5} {:>7}",
            row.opener.to_uppercase(),
            row.average_guesses,
            row.max_guesses,
            row.failed
        );
    }
}

/// Print wordlist analytics
pub fn print_report(report: &WordlistReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "WORDLIST STATISTICS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📚 {}", "Lists".bright_cyan().bold());
    println!("  Solutions:        {}", report.solution_count);
    println!("  Extra guesses:    {}", report.guess_count);
    println!("  Accepted guesses: {}", report.dictionary_size);

    println!("\n🔤 {}", "Letter inclusion (solutions)".bright_cyan().bold());
    for (letter, fraction) in &report.inclusion {
        if *fraction > 0.0 {
            let bar = create_progress_bar(*fraction, 1.0, 30);
            println!("  {letter}: {} {:5.1}%", bar.green(), fraction * 100.0);
        }
    }

    println!("\n🔢 {}", "Letter occurrences".bright_cyan().bold());
    let top: Vec<String> = report
        .letter_counts
        .iter()
        .take(10)
        .map(|(letter, count)| format!("{letter}={count}"))
        .collect();
    println!("  {}", top.join("  "));

    println!("\n📍 {}", "Occurrences by position".bright_cyan().bold());
    println!("  {}", (1..=WORD_LENGTH).map(|p| format!("{p:>5}")).collect::<String>());
    for (index, letter) in alphabet().enumerate() {
        let row: Vec<usize> = report
            .positional_counts
            .iter()
            .map(|counts| counts[index])
            .collect();
        if row.iter().any(|&count| count > 0) {
            let cells: String = row.iter().map(|count| format!("{count:>5}")).collect();
            println!("{letter} {cells}");
        }
    }

    println!("\n🔁 {}", "Repeated letters".bright_cyan().bold());
    for row in &report.repeats {
        println!(
            "  more than {} of a letter: {:5} solutions, {:5} guesses",
            row.repeats, row.solutions, row.guesses
        );
    }

    println!("\n🎚  {}", "Difficulty".bright_cyan().bold());
    println!(
        "  Easiest: {} ({:.4})",
        report.easiest.0.to_uppercase().green(),
        report.easiest.1
    );
    println!(
        "  Hardest: {} ({:.4})",
        report.hardest.0.to_uppercase().red(),
        report.hardest.1
    );
}
