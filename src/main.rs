//! wordhelp - CLI
//!
//! Crossword, Wordle and letter-tile word finder.

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::debug;
use wordhelp::{
    commands::{
        BenchmarkConfig, CrosswordConfig, GuessRow, LettersConfig, WordleConfig, run_benchmark,
        run_crossword, run_interactive, run_letters, run_wordle,
    },
    dictionary::Dictionary,
    grid::Grid,
    log::{debug_from_env, init_logger},
    matcher::Anchor,
    output::{print_benchmark_result, print_invalid_pattern, print_report},
};

#[derive(Parser)]
#[command(
    name = "wordhelp",
    about = "Find words for crosswords, Wordle and letter-tile games",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Maximum number of results to print (0 prints all)
    #[arg(short = 'n', long, global = true, default_value = "100")]
    limit: usize,

    /// Enable debug logging (same as setting WORDHELP_DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Words fitting a crossword pattern, '_' or '?' for unknown letters
    Crossword {
        /// Pattern such as C_T or ??ORD
        pattern: String,

        /// Letters the answer must contain somewhere
        #[arg(short, long, default_value = "")]
        include: String,
    },

    /// Words still possible after Wordle guesses
    Wordle {
        /// Word length
        #[arg(short = 'l', long, default_value_t = Grid::DEFAULT_COLUMNS)]
        length: usize,

        /// A guess and its feedback, e.g. CRANE:--Y-G (G green, Y yellow, - gray)
        #[arg(short, long = "row")]
        rows: Vec<GuessRow>,
    },

    /// Words playable from letter tiles, '.' or '?' for blanks
    Letters {
        /// Tiles such as EROIBU.
        tiles: String,

        /// Letters already on the board that the word must include
        #[arg(short, long)]
        fixed: Option<String>,

        /// Where the fixed letters sit: beginning, middle or end
        #[arg(short, long, default_value = "beginning")]
        at: Anchor,
    },

    /// Interactive Wordle helper (default)
    Interactive {
        /// Word length
        #[arg(short = 'l', long, default_value_t = Grid::DEFAULT_COLUMNS)]
        length: usize,
    },

    /// Benchmark matcher throughput on random queries
    Benchmark {
        /// Number of random words to derive queries from
        #[arg(short, long, default_value = "500")]
        count: usize,

        /// Seed for a reproducible workload
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

/// Load the dictionary named by the -w flag
fn load_dictionary(wordlist: &str) -> Result<Dictionary> {
    match wordlist {
        "embedded" => Ok(Dictionary::embedded()),
        path => Ok(Dictionary::from_file(path)?),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose || debug_from_env());

    let dictionary = load_dictionary(&cli.wordlist)?;
    debug!("Using {} words from {}", dictionary.len(), cli.wordlist);

    // Default to interactive mode if no command given
    let command = cli.command.unwrap_or(Commands::Interactive {
        length: Grid::DEFAULT_COLUMNS,
    });

    match command {
        Commands::Crossword { pattern, include } => {
            let config = CrosswordConfig::new(pattern).include(include);
            match run_crossword(&dictionary, &config) {
                Ok(report) => print_report(&report, cli.limit),
                Err(e) => print_invalid_pattern(&e),
            }
            Ok(())
        }
        Commands::Wordle { length, rows } => {
            let config = WordleConfig { length, rows };
            let report = run_wordle(&dictionary, &config)?;
            print_report(&report, cli.limit);
            Ok(())
        }
        Commands::Letters { tiles, fixed, at } => {
            let mut config = LettersConfig::new(tiles);
            if let Some(fixed) = fixed {
                config = config.fixed(fixed, at);
            }
            print_report(&run_letters(&dictionary, &config), cli.limit);
            Ok(())
        }
        Commands::Interactive { length } => run_interactive(&dictionary, length, cli.limit),
        Commands::Benchmark { count, seed } => {
            println!("Running benchmark on {count} random words...");
            let config = BenchmarkConfig {
                seed,
                ..BenchmarkConfig::new(count)
            };
            print_benchmark_result(&run_benchmark(&dictionary, &config));
            Ok(())
        }
    }
}
