//! `word_list`: read the dictionary word list and build the [`Trie`].
//!
//! The file format is as plain as it gets: one word per line. The parsing logic:
//! - The input is split on `\n` (a trailing `\r` is removed by the trim).
//! - Each line is trimmed of surrounding whitespace.
//! - The trimmed line is inserted as-is. No lowercasing, no filtering.
//! - Blank lines trim down to the empty word, which the trie ignores.
//!
//! Loading happens once, on one thread, before any lookup runs. The returned
//! `Trie` is never modified afterwards.

use std::path::Path;

use log::debug;

use crate::errors::AnagramError;
use crate::trie::Trie;

/// Build a trie from in-memory word-list contents.
///
/// # Example
/// ```
/// use anagrind::word_list;
///
/// let trie = word_list::parse_from_str("cat\n  act \n\ntac\n");
/// assert_eq!(trie.len(), 3);
/// assert!(trie.contains("act"));
/// ```
#[must_use]
pub fn parse_from_str(contents: &str) -> Trie {
    let trie: Trie = contents.split('\n').map(str::trim).collect();
    debug!("Parsed {} words into {} trie nodes", trie.len(), trie.node_count());
    trie
}

/// Read the word list at `path` and build a trie from it.
///
/// # Errors
///
/// Returns [`AnagramError::WordListUnreadable`] if the file cannot be read or
/// is not valid UTF-8. No trie is built in that case.
pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Trie, AnagramError> {
    let path_ref = path.as_ref();

    let data = std::fs::read_to_string(path_ref).map_err(|source| AnagramError::WordListUnreadable {
        path: path_ref.to_path_buf(),
        source,
    })?;
    debug!("Read {} bytes from '{}'", data.len(), path_ref.display());

    Ok(parse_from_str(&data))
}
