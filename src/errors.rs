//! Error types for anagram search, with error codes and helpful messages.
//!
//! # Error Codes
//!
//! Each error variant has a unique code (A001-A005) for documentation lookup:
//!
//! - A001: `EmptyWord` (Query word is empty)
//! - A002: `WordTooLong` (Query word exceeds the permutation limit)
//! - A003: `WordListUnreadable` (Word list could not be read)
//! - A004: `WorkerPanicked` (A checker thread panicked)
//! - A005: `WorkerSpawn` (A checker thread could not be started)
//!
//! # Examples
//!
//! ```
//! use anagrind::errors::AnagramError;
//!
//! let err = AnagramError::WordTooLong { len: 14, max: 10 };
//! assert_eq!(err.code(), "A002");
//! assert!(err.display_detailed().contains("--max-len"));
//! ```

use std::io;
use std::path::PathBuf;

/// Everything that can go wrong between reading the word list and printing
/// the last match.
#[derive(Debug, thiserror::Error)]
pub enum AnagramError {
    #[error("Empty lookup word")]
    EmptyWord,

    #[error("Lookup word has {len} characters; at most {max} are allowed")]
    WordTooLong { len: usize, max: usize },

    #[error("Failed to read word list from '{}': {source}", .path.display())]
    WordListUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Checker worker {worker} panicked")]
    WorkerPanicked { worker: usize },

    #[error("Failed to start checker worker: {source}")]
    WorkerSpawn {
        #[source]
        source: io::Error,
    },
}

impl AnagramError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            AnagramError::EmptyWord => "A001",
            AnagramError::WordTooLong { .. } => "A002",
            AnagramError::WordListUnreadable { .. } => "A003",
            AnagramError::WorkerPanicked { .. } => "A004",
            AnagramError::WorkerSpawn { .. } => "A005",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            AnagramError::EmptyWord => "Query word is empty",
            AnagramError::WordTooLong { .. } => "Query word exceeds the permutation limit",
            AnagramError::WordListUnreadable { .. } => "Word list could not be read",
            AnagramError::WorkerPanicked { .. } => "A checker thread panicked",
            AnagramError::WorkerSpawn { .. } => "A checker thread could not be started",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            AnagramError::EmptyWord => "The lookup word was empty (or only whitespace) after trimming. An empty word has no characters to rearrange.",
            AnagramError::WordTooLong { .. } => "Every distinct arrangement of the lookup word is generated and checked, and a word of n distinct letters has n! arrangements. When a limit is configured, longer words are refused before any work starts.",
            AnagramError::WordListUnreadable { .. } => "The word list file is missing, unreadable, or not valid UTF-8. Nothing is loaded and no search runs.",
            AnagramError::WorkerPanicked { .. } => "A checker thread in the dispatch pipeline panicked while testing candidates. The match list printed so far may be incomplete. This is a bug.",
            AnagramError::WorkerSpawn { .. } => "The operating system refused to start one of the checker threads, usually because of a thread or memory limit.",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            AnagramError::EmptyWord => Some("Pass a non-empty word, e.g. 'anagrind listen'"),
            AnagramError::WordTooLong { .. } => Some("Use a shorter word, raise --max-len, or drop --max-len to search without a limit (expect factorial growth in time and memory)"),
            AnagramError::WordListUnreadable { .. } => Some("Check the path given to --word-list (default: words.txt in the current directory)"),
            AnagramError::WorkerSpawn { .. } => Some("Try fewer workers with --workers"),
            AnagramError::WorkerPanicked { .. } => None,
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Helper function to format error messages with code and optional help text
pub(crate) fn format_error_with_code_and_help(base_msg: &str, code: &str, help: Option<&str>) -> String {
    if let Some(help_text) = help {
        format!("{base_msg} ({code})\n{help_text}")
    } else {
        format!("{base_msg} ({code})")
    }
}
