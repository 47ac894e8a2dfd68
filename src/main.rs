use std::num::NonZeroUsize;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use log::info;

use anagrind::errors::AnagramError;
use anagrind::finder::{self, FinderConfig};
use anagrind::pipeline::{PipelineConfig, DEFAULT_WORKERS};
use anagrind::word_list;

/// Find every word in a word list that uses exactly the letters of WORD
#[derive(Parser, Debug)]
#[command(author, version = env!("ANAGRIND_VERSION"), about, long_about = None)]
struct Cli {
    /// The word to rearrange (e.g., "listen")
    word: String,

    /// Path to the word list file (one word per line)
    #[arg(short, long, default_value = "words.txt")]
    word_list: String,

    /// Number of checker threads
    #[arg(short = 'j', long, default_value_t = DEFAULT_WORKERS)]
    workers: NonZeroUsize,

    /// Refuse lookup words longer than this many characters (no limit by default)
    #[arg(long = "max-len")]
    max_len: Option<usize>,
}

/// Entry point of the anagrind CLI.
///
/// Delegates to [`try_main`]; any error is printed with its code and help
/// text before exiting with code 1. A missing WORD argument is reported by
/// clap itself, which also exits non-zero.
fn main() -> ExitCode {
    anagrind::log::init_logger(anagrind::log::debug_requested());

    let cli = Cli::parse();

    if let Err(e) = try_main(&cli) {
        eprintln!("Error: {}", e.display_detailed());
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Core application logic.
///
/// Steps:
/// 1. Load the word list into a trie.
/// 2. Generate the rearrangements of WORD and check them on the worker pool.
/// 3. Print each match on stdout as it arrives.
/// 4. Print the elapsed time on stdout and log a summary at info level.
fn try_main(cli: &Cli) -> Result<(), AnagramError> {
    let t_total = Instant::now();

    // 1. Load the word list from disk
    let t_load = Instant::now();
    let dictionary = word_list::load_from_path(&cli.word_list)?;
    let load_secs = t_load.elapsed().as_secs_f64();

    let config = FinderConfig {
        pipeline: PipelineConfig::with_workers(cli.workers),
        max_word_len: cli.max_len,
    };

    // 2 + 3. Search, streaming matches straight to stdout
    let report = finder::find_anagrams_with(&cli.word, &dictionary, &config, |hit| {
        println!("{hit}");
    })?;

    // 4. Timing line; the summary is only logged
    println!("anagram search took {:?}", t_total.elapsed());
    info!(
        "Loaded {} words in {:.3}s; checked {} candidates on {} workers in {:.3}s ({} matches).",
        dictionary.len(),
        load_secs,
        report.stats.checked,
        report.stats.workers,
        report.check_time.as_secs_f64(),
        report.stats.matches
    );

    Ok(())
}
