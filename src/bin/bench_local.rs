//! `bench_local.rs`: quick local timing runner (no Criterion)
//!
//! PURPOSE
//! -------
//! - Fast, ad-hoc timing for a handful of query words on *your* machine.
//! - Loads the word list once, then runs each word several times and reports the median.
//! - Repeats every word for each requested worker count, so pool sizes can be compared.
//!
//! HOW TO RUN
//! ----------
//! - Optimized build:                `cargo run --bin bench_local --release`
//! - Multiple repeats:               `cargo run --bin bench_local --release -- -r 5`
//! - Compare pool sizes:             `cargo run --bin bench_local --release -- -j 1 -j 5 -j 16`
//! - Print the matches:              `cargo run --bin bench_local --release -- -p`
//!
//! NOTES
//! -----
//! - Not statistically rigorous. Use the same machine and `--release` for comparable numbers.
//! - Word-list loading and printing are kept outside the timed section.
//! - One warm-up run per word is done (not included in timing).

use std::hint::black_box;
use std::num::NonZeroUsize;
use std::time::Instant;

use clap::Parser;

use anagrind::errors::AnagramError;
use anagrind::finder::{self, FinderConfig};
use anagrind::pipeline::{PipelineConfig, DEFAULT_WORKERS};
use anagrind::word_list;

/// Simple local benchmark runner: load the word list once, time several query words.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the word list file (one word per line)
    #[arg(short, long, default_value = "words.txt")]
    word_list: String,

    /// Number of repeats per word (use >1 to reduce noise; median is reported)
    #[arg(short = 'r', long = "repeats", default_value_t = 3)]
    num_repeats: usize,

    /// Worker counts to try (repeatable)
    #[arg(short = 'j', long = "workers")]
    workers: Vec<NonZeroUsize>,

    /// Print the matches of the last run for each word
    #[arg(short = 'p', long = "print")]
    print_matches: bool,
}

/// Query words to time. Lengths 5 through 9, some with repeated letters.
const CASES: &[&str] = &["least", "listen", "parties", "triangle", "algorithm", "mississip"];

/// Small helper: robust central tendency for small samples.
fn median(mut xs: Vec<f64>) -> f64 {
    if xs.is_empty() {
        return 0.0;
    }
    xs.sort_by(f64::total_cmp);
    let n = xs.len();
    if n % 2 == 1 {
        xs[n / 2]
    } else {
        0.5 * (xs[n / 2 - 1] + xs[n / 2])
    }
}

fn pluralizer(count: usize, singular: String, plural: Option<String>) -> String {
    if count == 1 {
        singular
    } else {
        plural.unwrap_or_else(|| singular + "s")
    }
}

fn main() -> Result<(), AnagramError> {
    anagrind::log::init_logger(anagrind::log::debug_requested());
    let cli = Cli::parse();

    let worker_counts = if cli.workers.is_empty() {
        vec![DEFAULT_WORKERS]
    } else {
        cli.workers.clone()
    };

    // Load the word list once. This I/O is *not* included in per-word timing.
    eprintln!("Loading word list from: {}", cli.word_list);
    let t_load = Instant::now();
    let dictionary = word_list::load_from_path(&cli.word_list)?;
    eprintln!("Loaded {} words in {:.3}s", dictionary.len(), t_load.elapsed().as_secs_f64());

    // (word, workers, median seconds, candidates, matches)
    let mut summary: Vec<(&str, usize, f64, usize, usize)> = Vec::new();

    for (idx, &word) in CASES.iter().enumerate() {
        eprintln!("\n[{:02}] {}", idx + 1, word);

        for &workers in &worker_counts {
            let config = FinderConfig {
                pipeline: PipelineConfig::with_workers(workers),
                ..FinderConfig::default()
            };

            // warm-up, timing ignored
            finder::find_anagrams(word, &dictionary, &config)?;

            let mut times = Vec::with_capacity(cli.num_repeats);
            let mut last = None;
            for _ in 0..cli.num_repeats {
                let t_find = Instant::now();
                let result = finder::find_anagrams(black_box(word), &dictionary, &config)?;
                times.push(t_find.elapsed().as_secs_f64());
                last = Some(result);
            }

            let med = median(times);
            let (candidates, matches) = last
                .as_ref()
                .map_or((0, 0), |r| (r.report.stats.candidates, r.matches.len()));

            eprintln!(
                "  {:>3} {}: median {:.3}s over {} run(s); {} candidates, {} {}",
                workers,
                pluralizer(workers.get(), "worker".into(), None),
                med,
                cli.num_repeats,
                candidates,
                matches,
                pluralizer(matches, "match".into(), Some("matches".into()))
            );

            if cli.print_matches {
                if let Some(result) = last {
                    for hit in result {
                        println!("{hit}");
                    }
                }
            }

            summary.push((word, workers.get(), med, candidates, matches));
        }
    }

    // Compact summary at the end for a quick scan across all words.
    eprintln!("\n==== Summary ====");
    eprintln!("{:<12} | {:>7} | {:>10} | {:>10} | {:>7}", "word", "workers", "median (s)", "candidates", "matches");
    eprintln!("{:-<12}-+-{:-<7}-+-{:-<10}-+-{:-<10}-+-{:-<7}", "", "", "", "", "");
    for (word, workers, med, candidates, matches) in &summary {
        eprintln!("{word:<12} | {workers:>7} | {med:>10.3} | {candidates:>10} | {matches:>7}");
    }

    Ok(())
}
