//! Display functions for command results

use super::formatters::{blank_notation, columns, status_message, truncation_note};
use crate::commands::{BenchmarkResult, ReportEntry, SearchReport};
use crate::matcher::{InvalidPatternError, SearchStatus};
use colored::Colorize;

const LINE_WIDTH: usize = 72;

fn shown(report: &SearchReport, limit: usize) -> &[ReportEntry] {
    if limit == 0 {
        &report.entries
    } else {
        &report.entries[..report.len().min(limit)]
    }
}

/// Print a search report, at most `limit` entries (`0` prints all)
pub fn print_report(report: &SearchReport, limit: usize) {
    let headline = status_message(report);
    match report.status {
        SearchStatus::NotSearched => println!("\n{}", headline.bright_black()),
        SearchStatus::SearchedEmpty => println!("\n{}", headline.yellow()),
        SearchStatus::SearchedWithResults => println!("\n{}", headline.green().bold()),
    }

    let entries = shown(report, limit);
    if entries.is_empty() {
        println!();
        return;
    }
    println!("{}", "─".repeat(LINE_WIDTH).cyan());

    if report.is_scored() {
        for entry in entries {
            print_scored(entry);
        }
    } else {
        let cells: Vec<String> = entries.iter().map(|e| e.word.clone()).collect();
        for line in columns(&cells, LINE_WIDTH) {
            println!("  {line}");
        }
    }

    if let Some(note) = truncation_note(report.len(), entries.len()) {
        println!("  {}", note.bright_black());
    }
    println!();
}

fn print_scored(entry: &ReportEntry) {
    let word: String = blank_notation(&entry.word, &entry.wildcards)
        .chars()
        .map(|ch| {
            if ch.is_ascii_lowercase() {
                ch.to_string().bright_magenta().to_string()
            } else {
                ch.to_string().bright_white().bold().to_string()
            }
        })
        .collect();
    let padding = " ".repeat(12_usize.saturating_sub(entry.word.len()));
    let score = entry.score.unwrap_or(0);
    println!("  {word}{padding}{}", format!("{score:>3}").bright_yellow());
}

/// Print a rejected crossword pattern; the search counts as empty
pub fn print_invalid_pattern(error: &InvalidPatternError) {
    println!("\n{} {}", "❌".red(), error.to_string().red());
    print_report(&SearchReport::empty(), 0);
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words sampled:    {}", result.words);
    println!("   Queries run:      {}", result.queries);
    println!("   Crossword hits:   {}", result.crossword_matches);
    println!("   Letter hits:      {}", result.anagram_matches);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!(
        "   Queries/second:   {}",
        format!("{:.1}", result.queries_per_second)
            .bright_yellow()
            .bold()
    );

    println!("\n🔎 {}", "Consistency:".bright_cyan().bold());
    if result.is_consistent() {
        println!(
            "   {}",
            "Every source word was found by both of its queries".green()
        );
    } else {
        println!(
            "   {}",
            format!("{} source words missing:", result.failures.len()).red()
        );
        for word in &result.failures {
            println!("     • {word}");
        }
    }
}
