// Reusable library API, shared by the CLI and the helper binaries
pub mod errors;
pub mod finder;
pub mod log;
pub mod permutations;
pub mod pipeline;
pub mod trie;
pub mod word_list;

pub use errors::AnagramError;
pub use finder::{find_anagrams, find_anagrams_with, FinderConfig};
pub use trie::{Lexicon, Trie};
