//! Generate error code documentation from the source of truth (the error enum).
//!
//! This binary reads the error codes, descriptions, details, and help text
//! directly from `AnagramError` via its `code()`, `description()`,
//! `details()`, and `help()` methods.
//!
//! Run with:
//! ```bash
//! cargo run --bin generate_error_docs > docs/ERROR_CODES.md
//! ```

use std::io;
use std::path::PathBuf;

use anagrind::errors::AnagramError;

/// One sample of every `AnagramError` variant, in code order
fn all_error_variants() -> Vec<AnagramError> {
    vec![
        AnagramError::EmptyWord,
        AnagramError::WordTooLong { len: 14, max: 10 },
        AnagramError::WordListUnreadable {
            path: PathBuf::from("words.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory (os error 2)"),
        },
        AnagramError::WorkerPanicked { worker: 2 },
        AnagramError::WorkerSpawn {
            source: io::Error::new(io::ErrorKind::WouldBlock, "Resource temporarily unavailable (os error 11)"),
        },
    ]
}

fn main() {
    println!("# Error Code Reference\n");
    println!("**⚠️ This document is auto-generated from the source code. Do not edit manually.**\n");

    println!("## Table of Contents\n");
    println!("- [Errors (A001–A005)](#errors)");
    println!("- [How to Use Error Codes](#how-to-use-error-codes)\n");

    println!("## Errors\n");
    println!("Everything the CLI can report, from loading the word list to the last worker finishing.\n");

    for error in all_error_variants() {
        println!("### {}: {}\n", error.code(), error.description());
        println!("**Details:** {}\n", error.details());

        if let Some(help_text) = error.help() {
            println!("**How to fix:**");
            println!("```");
            println!("{help_text}");
            println!("```\n");
        }

        println!("**Example error message:**");
        println!("```");
        println!("{error}");
        println!("```\n");

        println!("**Detailed format:**");
        println!("```");
        println!("{}", error.display_detailed());
        println!("```\n");

        println!("---\n");
    }

    println!("\n## How to Use Error Codes\n");
    println!("When you see an error like:\n");
    println!("```");
    println!("Error: {}", AnagramError::EmptyWord.display_detailed());
    println!("```\n");
    println!("1. Note the error code (e.g., `A001`)");
    println!("2. Look it up in this document for detailed explanation");
    println!("3. Follow the suggested resolution steps\n");
    println!("A missing WORD argument is reported by the argument parser (exit code 2) and has no code.\n");
}
