//! `finder`: the whole search for one query word.
//!
//! Turns a query word into its distinct rearrangements, runs them through the
//! dispatch [`pipeline`](crate::pipeline) against a dictionary, and reports
//! what was found and how long each stage took.
//!
//! # Examples
//!
//! ```
//! use anagrind::finder::{find_anagrams, FinderConfig};
//! use anagrind::trie::Trie;
//!
//! let dictionary: Trie = ["cat", "act", "tac", "dog"].into_iter().collect();
//! let mut result = find_anagrams("cat", &dictionary, &FinderConfig::default())?;
//! result.matches.sort();
//!
//! assert_eq!(result.matches, vec!["act", "cat", "tac"]);
//! assert_eq!(result.report.stats.candidates, 6);
//! # Ok::<(), anagrind::errors::AnagramError>(())
//! ```

use std::time::{Duration, Instant};

use log::{debug, warn};

use crate::errors::AnagramError;
use crate::permutations::{distinct_permutation_count, permutations};
use crate::pipeline::{self, PipelineConfig, PipelineStats};
use crate::trie::Lexicon;

// Above this many candidates we warn before generating them.
// Ten distinct letters already mean 3,628,800.
const LARGE_CANDIDATE_SET: u128 = 1_000_000;

/// Configuration for a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FinderConfig {
    pub pipeline: PipelineConfig,
    /// If set, query words with more characters than this are refused.
    /// Unbounded by default.
    pub max_word_len: Option<usize>,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            pipeline: PipelineConfig::default(),
            max_word_len: None,
        }
    }
}

/// Timings and counts for one search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    /// The query word after trimming.
    pub word: String,
    pub stats: PipelineStats,
    /// Time spent generating candidates.
    pub permute_time: Duration,
    /// Time spent in the dispatch pipeline.
    pub check_time: Duration,
}

/// A finished search with its hits gathered.
#[derive(Debug, Clone)]
pub struct FindResult {
    /// Hits in arrival order (not sorted).
    pub matches: Vec<String>,
    pub report: SearchReport,
}

impl IntoIterator for FindResult {
    type Item = String;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.matches.into_iter()
    }
}

/// Search for rearrangements of `word` in `lexicon`, handing each hit to
/// `sink` the moment it is found.
///
/// # Errors
///
/// - [`AnagramError::EmptyWord`] if `word` is empty after trimming.
/// - [`AnagramError::WordTooLong`] if `config.max_word_len` is set and the
///   word has more characters than that.
/// - Any error from [`pipeline::dispatch`].
pub fn find_anagrams_with<L, F>(
    word: &str,
    lexicon: &L,
    config: &FinderConfig,
    sink: F,
) -> Result<SearchReport, AnagramError>
where
    L: Lexicon + ?Sized,
    F: FnMut(String),
{
    let word = validate_word(word, config.max_word_len)?;

    match distinct_permutation_count(word) {
        Some(n) if n > LARGE_CANDIDATE_SET => warn!("'{word}' has {n} distinct arrangements; this may take a while"),
        Some(n) => debug!("'{word}' has {n} distinct arrangements"),
        None => warn!("'{word}' has more distinct arrangements than fit in a u128"),
    }

    let t_permute = Instant::now();
    let candidates = permutations(word);
    let permute_time = t_permute.elapsed();

    let t_check = Instant::now();
    let stats = pipeline::dispatch(lexicon, &candidates, &config.pipeline, sink)?;
    let check_time = t_check.elapsed();

    debug!(
        "'{}': {} candidates, {} matches ({:.3}s permuting, {:.3}s checking)",
        word,
        stats.candidates,
        stats.matches,
        permute_time.as_secs_f64(),
        check_time.as_secs_f64()
    );

    Ok(SearchReport {
        word: word.to_string(),
        stats,
        permute_time,
        check_time,
    })
}

/// Like [`find_anagrams_with`], but collect the hits.
///
/// # Errors
///
/// Same as [`find_anagrams_with`].
pub fn find_anagrams<L>(word: &str, lexicon: &L, config: &FinderConfig) -> Result<FindResult, AnagramError>
where
    L: Lexicon + ?Sized,
{
    let mut matches = Vec::new();
    let report = find_anagrams_with(word, lexicon, config, |hit| matches.push(hit))?;
    Ok(FindResult { matches, report })
}

fn validate_word(word: &str, max_len: Option<usize>) -> Result<&str, AnagramError> {
    let word = word.trim();
    if word.is_empty() {
        return Err(AnagramError::EmptyWord);
    }

    if let Some(max) = max_len {
        let len = word.chars().count();
        if len > max {
            return Err(AnagramError::WordTooLong { len, max });
        }
    }

    Ok(word)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trie::Trie;
    use std::collections::HashSet;
    use std::num::NonZeroUsize;

    fn dictionary(words: &[&str]) -> Trie {
        words.iter().collect()
    }

    fn sorted(mut words: Vec<String>) -> Vec<String> {
        words.sort();
        words
    }

    #[test]
    fn test_find_cat() {
        let trie = dictionary(&["cat", "act", "tac", "dog"]);
        let result = find_anagrams("cat", &trie, &FinderConfig::default()).unwrap();

        assert_eq!(sorted(result.matches), vec!["act", "cat", "tac"]);
        assert_eq!(result.report.word, "cat");
        assert_eq!(result.report.stats.candidates, 6);
        assert_eq!(result.report.stats.matches, 3);
    }

    #[test]
    fn test_query_is_trimmed() {
        let trie = dictionary(&["god", "dog"]);
        let result = find_anagrams("  dog\n", &trie, &FinderConfig::default()).unwrap();

        assert_eq!(result.report.word, "dog");
        assert_eq!(sorted(result.matches), vec!["dog", "god"]);
    }

    #[test]
    fn test_repeated_letters_in_query() {
        let trie = dictionary(&["aab"]);
        let result = find_anagrams("aba", &trie, &FinderConfig::default()).unwrap();

        assert_eq!(result.matches, vec!["aab"]);
        assert_eq!(result.report.stats.candidates, 3);
    }

    #[test]
    fn test_no_match() {
        let trie = dictionary(&["dog"]);
        let result = find_anagrams("xyz", &trie, &FinderConfig::default()).unwrap();

        assert!(result.matches.is_empty());
        assert_eq!(result.report.stats.checked, 6);
    }

    #[test]
    fn test_empty_word_is_rejected() {
        let trie = dictionary(&["a"]);

        let err = find_anagrams("", &trie, &FinderConfig::default()).unwrap_err();
        assert!(matches!(err, AnagramError::EmptyWord));

        let err = find_anagrams(" \t ", &trie, &FinderConfig::default()).unwrap_err();
        assert!(matches!(err, AnagramError::EmptyWord));
    }

    #[test]
    fn test_too_long_word_is_rejected() {
        let trie = dictionary(&["a"]);
        let config = FinderConfig { max_word_len: Some(4), ..FinderConfig::default() };

        let err = find_anagrams("abcde", &trie, &config).unwrap_err();

        assert!(matches!(err, AnagramError::WordTooLong { len: 5, max: 4 }));
    }

    #[test]
    fn test_double_digit_word_is_searched_by_default() {
        let trie = dictionary(&["aaaaaaaaaab", "baaaaaaaaaa"]);

        let result = find_anagrams("aaaaabaaaaa", &trie, &FinderConfig::default()).unwrap();

        assert_eq!(result.report.stats.candidates, 11);
        assert_eq!(sorted(result.matches), vec!["aaaaaaaaaab", "baaaaaaaaaa"]);
    }

    #[test]
    fn test_limit_counts_chars_not_bytes() {
        let trie = dictionary(&["año"]);
        let config = FinderConfig { max_word_len: Some(3), ..FinderConfig::default() };

        let result = find_anagrams("oña", &trie, &config).unwrap();

        assert_eq!(result.matches, vec!["año"]);
    }

    #[test]
    fn test_streaming_sink_sees_each_match() {
        let trie = dictionary(&["stop", "pots", "tops", "spot"]);
        let mut streamed = HashSet::new();

        let report = find_anagrams_with("post", &trie, &FinderConfig::default(), |hit| {
            assert!(streamed.insert(hit), "match delivered twice");
        })
        .unwrap();

        assert_eq!(streamed.len(), 4);
        assert_eq!(report.stats.matches, 4);
        assert_eq!(report.stats.workers, 5);
    }

    #[test]
    fn test_custom_worker_count_is_used() {
        let trie = dictionary(&["ab"]);
        let config = FinderConfig {
            pipeline: PipelineConfig::with_workers(NonZeroUsize::new(2).unwrap()),
            ..FinderConfig::default()
        };

        let result = find_anagrams("ba", &trie, &config).unwrap();

        assert_eq!(result.report.stats.workers, 2);
        assert_eq!(result.into_iter().collect::<Vec<_>>(), vec!["ab"]);
    }
}
