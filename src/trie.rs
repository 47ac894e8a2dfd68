//! `trie`: exact-membership dictionary keyed by one `char` per edge.
//!
//! Nodes live in a single arena (`Vec<TrieNode>`) and refer to their children
//! by `NodeId`. Nothing holds a reference into another node, so the whole
//! structure is plain owned data: it is `Send + Sync`, and once loading is
//! finished it can be shared by `&Trie` across any number of threads.
//!
//! A word ends at a node when that node's `is_terminal` flag is set. That flag
//! is separate from "has no children": `cat` and `cats` can both be words, and
//! inserting only `cat` never makes `ca` a word.
//!
//! The empty word is never stored. Inserting it is a no-op, and asking for it
//! always answers `false`, because the root can never be terminal.

use std::collections::HashMap;

/// Index of a node inside a [`Trie`]'s arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(usize);

impl NodeId {
    /// The root node, present in every trie.
    pub(crate) const ROOT: NodeId = NodeId(0);

    #[inline]
    fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Default, Clone)]
struct TrieNode {
    children: HashMap<char, NodeId>,
    is_terminal: bool,
}

/// Arena-backed prefix tree used strictly for membership tests.
#[derive(Debug, Clone)]
pub struct Trie {
    nodes: Vec<TrieNode>,
    word_count: usize,
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl Trie {
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::default()],
            word_count: 0,
        }
    }

    /// Insert `word`, creating one node per missing character edge.
    ///
    /// Returns `true` if the word was not already present. The empty word is
    /// ignored and returns `false`.
    pub fn insert(&mut self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }

        let mut current = NodeId::ROOT;
        for ch in word.chars() {
            current = self.child_or_insert(current, ch);
        }

        let node = &mut self.nodes[current.index()];
        if node.is_terminal {
            false
        } else {
            node.is_terminal = true;
            self.word_count += 1;
            true
        }
    }

    /// `true` iff `word` was inserted as a complete word.
    ///
    /// Stops at the first missing edge; never allocates.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }

        let mut current = NodeId::ROOT;
        for ch in word.chars() {
            match self.nodes[current.index()].children.get(&ch) {
                Some(&next) => current = next,
                None => return false,
            }
        }

        self.nodes[current.index()].is_terminal
    }

    /// Number of distinct words stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.word_count
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Number of arena nodes, root included.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn child_or_insert(&mut self, parent: NodeId, ch: char) -> NodeId {
        if let Some(&existing) = self.nodes[parent.index()].children.get(&ch) {
            return existing;
        }

        let id = NodeId(self.nodes.len());
        self.nodes.push(TrieNode::default());
        self.nodes[parent.index()].children.insert(ch, id);
        id
    }
}

impl<S: AsRef<str>> Extend<S> for Trie {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for Trie {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut trie = Trie::new();
        trie.extend(iter);
        trie
    }
}

/// Anything that can answer "is this exact word in the dictionary?".
///
/// The dispatch pipeline checks candidates through this trait, so it must be
/// safe to query from several threads at once.
pub trait Lexicon: Sync {
    fn contains(&self, word: &str) -> bool;
}

impl Lexicon for Trie {
    fn contains(&self, word: &str) -> bool {
        Trie::contains(self, word)
    }
}
