//! `pipeline`: check candidates against a [`Lexicon`] on a fixed pool of
//! threads and stream the hits back to the caller.
//!
//! # Shape of a run
//!
//! 1. `workers` named checker threads start inside a [`std::thread::scope`].
//!    They share one job receiver (behind a `Mutex`, so the next free worker
//!    takes the next job) and each holds a clone of the result sender.
//! 2. Every candidate is pushed into the job channel, which is sized to the
//!    candidate count so this never blocks, and the sender is dropped.
//! 3. Each worker takes jobs until the channel is empty and closed. A hit is
//!    sent on the result channel, which has no buffer: the send waits until
//!    the caller receives it.
//! 4. A supervisor thread owns the worker handles and the last result sender.
//!    It joins every worker, then drops that sender, which closes the result
//!    stream. A panicked worker is reported as [`AnagramError::WorkerPanicked`].
//! 5. The caller's thread drains the result stream into `sink`, then collects
//!    the supervisor's verdict.
//!
//! Hits arrive in whatever order the workers find them. The *set* of hits
//! does not depend on the number of workers.
//!
//! The lexicon is only ever read here, so it is shared as a plain `&L`.

use std::num::NonZeroUsize;
use std::panic;
use std::sync::mpsc::{self, Receiver, SyncSender};
use std::sync::{Arc, Mutex, PoisonError};
use std::thread::{self, ScopedJoinHandle};

use log::{debug, error};

use crate::errors::AnagramError;
use crate::trie::Lexicon;

/// Number of checker threads used when nothing else is configured.
pub const DEFAULT_WORKERS: NonZeroUsize = match NonZeroUsize::new(5) {
    Some(n) => n,
    None => unreachable!(),
};

/// Knobs for one pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Size of the checker pool.
    pub workers: NonZeroUsize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self { workers: DEFAULT_WORKERS }
    }
}

impl PipelineConfig {
    #[must_use]
    pub fn with_workers(workers: NonZeroUsize) -> Self {
        Self { workers }
    }
}

/// What a finished run did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineStats {
    /// Candidates handed to the pipeline.
    pub candidates: usize,
    /// Candidates actually taken off the job channel by some worker.
    pub checked: usize,
    /// Hits delivered to the sink.
    pub matches: usize,
    /// Checker threads that ran.
    pub workers: usize,
}

type JobSource = Arc<Mutex<Receiver<String>>>;

/// Check every candidate against `lexicon` and pass each hit to `sink`, on
/// the calling thread, as soon as it arrives.
///
/// Candidates are not deduplicated here: a candidate listed twice that is in
/// the lexicon reaches `sink` twice.
///
/// # Errors
///
/// - [`AnagramError::WorkerSpawn`] if a thread could not be started. Nothing
///   is checked in that case.
/// - [`AnagramError::WorkerPanicked`] if a worker panicked. Hits found by the
///   other workers have still been passed to `sink`.
pub fn dispatch<L, F>(
    lexicon: &L,
    candidates: &[String],
    config: &PipelineConfig,
    mut sink: F,
) -> Result<PipelineStats, AnagramError>
where
    L: Lexicon + ?Sized,
    F: FnMut(String),
{
    let workers = config.workers.get();
    debug!("Dispatching {} candidates to {} workers", candidates.len(), workers);

    let (result_tx, result_rx) = mpsc::sync_channel::<String>(0);

    thread::scope(|scope| -> Result<PipelineStats, AnagramError> {
        // 1. Setup
        let (job_tx, job_rx) = mpsc::sync_channel::<String>(candidates.len().max(1));
        let job_rx: JobSource = Arc::new(Mutex::new(job_rx));

        let mut handles = Vec::with_capacity(workers);
        for worker in 0..workers {
            let jobs = Arc::clone(&job_rx);
            let results = result_tx.clone();
            let handle = thread::Builder::new()
                .name(format!("anagram-worker-{worker}"))
                .spawn_scoped(scope, move || check_loop(worker, lexicon, &jobs, &results))
                .map_err(|source| AnagramError::WorkerSpawn { source })?;
            handles.push(handle);
        }
        // workers hold the only job receivers from here on
        drop(job_rx);

        let supervisor = thread::Builder::new()
            .name("anagram-supervisor".into())
            .spawn_scoped(scope, move || supervise(handles, result_tx))
            .map_err(|source| AnagramError::WorkerSpawn { source })?;

        // 2. Dispatch
        for candidate in candidates {
            if job_tx.send(candidate.clone()).is_err() {
                // every worker is gone; the supervisor will say why
                break;
            }
        }
        drop(job_tx);

        // 5. Collection
        let mut matches = 0;
        for hit in result_rx {
            matches += 1;
            sink(hit);
        }

        let checked = match supervisor.join() {
            Ok(verdict) => verdict?,
            Err(payload) => panic::resume_unwind(payload),
        };

        debug!("Pipeline finished: {checked} checked, {matches} matches");
        Ok(PipelineStats {
            candidates: candidates.len(),
            checked,
            matches,
            workers,
        })
    })
}

/// Run [`dispatch`] and gather the hits, in arrival order.
///
/// # Errors
///
/// Same as [`dispatch`].
pub fn collect_matches<L>(
    lexicon: &L,
    candidates: &[String],
    config: &PipelineConfig,
) -> Result<Vec<String>, AnagramError>
where
    L: Lexicon + ?Sized,
{
    let mut hits = Vec::new();
    dispatch(lexicon, candidates, config, |hit| hits.push(hit))?;
    Ok(hits)
}

/// 3. Check loop: one worker, until the job channel is drained and closed.
///
/// Returns how many jobs this worker took.
fn check_loop<L>(
    worker: usize,
    lexicon: &L,
    jobs: &Mutex<Receiver<String>>,
    results: &SyncSender<String>,
) -> usize
where
    L: Lexicon + ?Sized,
{
    let mut checked = 0;
    loop {
        // the lock guard is a temporary: it is released before the lookup
        let job = jobs.lock().unwrap_or_else(PoisonError::into_inner).recv();
        let Ok(candidate) = job else {
            break;
        };
        checked += 1;

        if lexicon.contains(&candidate) && results.send(candidate).is_err() {
            // receiver dropped; nobody is listening any more
            break;
        }
    }

    debug!("Worker {worker} done after {checked} candidates");
    checked
}

/// 4. Completion watch: join every worker, then close the result stream.
fn supervise(
    handles: Vec<ScopedJoinHandle<'_, usize>>,
    results: SyncSender<String>,
) -> Result<usize, AnagramError> {
    let mut checked = 0;
    let mut first_panicked = None;

    for (worker, handle) in handles.into_iter().enumerate() {
        match handle.join() {
            Ok(n) => checked += n,
            Err(_) => {
                error!("Worker {worker} panicked");
                first_panicked.get_or_insert(worker);
            }
        }
    }

    drop(results);

    match first_panicked {
        Some(worker) => Err(AnagramError::WorkerPanicked { worker }),
        None => Ok(checked),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::permutations::permutations;
    use crate::trie::Trie;
    use std::collections::HashSet;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn workers(n: usize) -> PipelineConfig {
        PipelineConfig::with_workers(NonZeroUsize::new(n).unwrap())
    }

    fn as_set(words: Vec<String>) -> HashSet<String> {
        words.into_iter().collect()
    }

    fn strings(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| (*w).to_string()).collect()
    }

    /// Counts every lookup, answers from a fixed set.
    struct CountingLexicon {
        words: HashSet<String>,
        lookups: AtomicUsize,
    }

    impl Lexicon for CountingLexicon {
        fn contains(&self, word: &str) -> bool {
            self.lookups.fetch_add(1, Ordering::Relaxed);
            self.words.contains(word)
        }
    }

    /// Panics when asked about one particular word.
    struct TrippingLexicon {
        trip_on: &'static str,
        words: Trie,
    }

    impl Lexicon for TrippingLexicon {
        fn contains(&self, word: &str) -> bool {
            assert_ne!(word, self.trip_on, "tripped on '{word}'");
            self.words.contains(word)
        }
    }

    #[test]
    fn test_default_worker_count() {
        assert_eq!(PipelineConfig::default().workers.get(), 5);
    }

    #[test]
    fn test_finds_all_anagrams() {
        let trie: Trie = ["cat", "act", "tac", "dog"].into_iter().collect();
        let hits = collect_matches(&trie, &permutations("cat"), &PipelineConfig::default()).unwrap();

        assert_eq!(as_set(hits), as_set(strings(&["cat", "act", "tac"])));
    }

    #[test]
    fn test_repeated_letters() {
        let trie: Trie = ["aab"].into_iter().collect();
        let hits = collect_matches(&trie, &permutations("aba"), &PipelineConfig::default()).unwrap();

        assert_eq!(hits, vec!["aab"]);
    }

    #[test]
    fn test_no_matches_is_not_an_error() {
        let trie: Trie = ["dog"].into_iter().collect();
        let hits = collect_matches(&trie, &permutations("cat"), &PipelineConfig::default()).unwrap();

        assert!(hits.is_empty());
    }

    #[test]
    fn test_worker_count_does_not_change_result_set() {
        let trie: Trie = ["stare", "tears", "rates", "aster", "taser", "stear", "star"]
            .into_iter()
            .collect();
        let candidates = permutations("stare");
        let baseline = as_set(collect_matches(&trie, &candidates, &workers(1)).unwrap());

        assert_eq!(baseline.len(), 6);
        for n in [2, 3, 5, 8, 16] {
            let hits = as_set(collect_matches(&trie, &candidates, &workers(n)).unwrap());
            assert_eq!(hits, baseline, "different result with {n} workers");
        }
    }

    #[test]
    fn test_single_candidate_terminates() {
        let trie: Trie = ["a"].into_iter().collect();
        let hits = collect_matches(&trie, &permutations("a"), &PipelineConfig::default()).unwrap();

        assert_eq!(hits, vec!["a"]);
    }

    #[test]
    fn test_no_candidates_terminates() {
        let trie: Trie = ["a"].into_iter().collect();
        let stats = dispatch(&trie, &[], &workers(3), |_| panic!("no hits expected")).unwrap();

        assert_eq!(
            stats,
            PipelineStats { candidates: 0, checked: 0, matches: 0, workers: 3 }
        );
    }

    #[test]
    fn test_every_candidate_checked_exactly_once() {
        let lexicon = CountingLexicon {
            words: as_set(strings(&["least", "slate", "stale", "steal", "tales", "teals"])),
            lookups: AtomicUsize::new(0),
        };
        let candidates = permutations("least");

        let stats = dispatch(&lexicon, &candidates, &workers(4), |_| {}).unwrap();

        assert_eq!(stats.candidates, 120);
        assert_eq!(stats.checked, 120);
        assert_eq!(lexicon.lookups.load(Ordering::Relaxed), 120);
        assert_eq!(stats.matches, 6);
    }

    #[test]
    fn test_duplicate_candidates_give_duplicate_hits() {
        let trie: Trie = ["tac"].into_iter().collect();
        let candidates = strings(&["tac", "cat", "tac"]);

        let hits = collect_matches(&trie, &candidates, &workers(2)).unwrap();

        assert_eq!(hits, vec!["tac", "tac"]);
    }

    #[test]
    fn test_more_workers_than_candidates() {
        let trie: Trie = ["ab", "ba"].into_iter().collect();
        let hits = collect_matches(&trie, &permutations("ab"), &workers(32)).unwrap();

        assert_eq!(as_set(hits), as_set(strings(&["ab", "ba"])));
    }

    #[test]
    fn test_sink_sees_hits_in_arrival_order() {
        let trie: Trie = ["xyz"].into_iter().collect();
        let mut seen = Vec::new();

        let stats = dispatch(&trie, &permutations("zyx"), &workers(2), |hit| seen.push(hit)).unwrap();

        assert_eq!(seen, vec!["xyz"]);
        assert_eq!(stats.matches, 1);
        assert_eq!(stats.checked, 6);
    }

    #[test]
    fn test_works_with_hash_set_lexicon() {
        let set = as_set(strings(&["post", "pots", "spot", "stop", "tops", "opts"]));
        let hits = collect_matches(&set, &permutations("stop"), &PipelineConfig::default()).unwrap();

        assert_eq!(as_set(hits), set);
    }

    #[test]
    fn test_panicking_worker_is_reported() {
        let lexicon = TrippingLexicon {
            trip_on: "bca",
            words: ["abc", "cab"].into_iter().collect(),
        };
        let candidates = permutations("abc");

        let mut hits = Vec::new();
        let result = dispatch(&lexicon, &candidates, &workers(3), |hit| hits.push(hit));

        assert!(matches!(result, Err(AnagramError::WorkerPanicked { .. })));
        // the surviving workers still drain the queue
        assert_eq!(as_set(hits), as_set(strings(&["abc", "cab"])));
    }

    #[test]
    fn test_lone_worker_panicking_does_not_hang() {
        let lexicon = TrippingLexicon {
            trip_on: "ab",
            words: Trie::new(),
        };

        let result = collect_matches(&lexicon, &permutations("ab"), &workers(1));

        assert!(matches!(result, Err(AnagramError::WorkerPanicked { worker: 0 })));
    }
}
