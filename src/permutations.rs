//! `permutations`: build the distinct rearrangements of a query word.
//!
//! Generation is by incremental insertion. We start from the one-character
//! arrangement made of the first character; then, for each later character,
//! every arrangement built so far is expanded by inserting that character at
//! every position (front through back). After each step the batch is sorted and
//! deduplicated, so repeated letters never multiply the work beyond what the
//! distinct arrangements require.
//!
//! The result is deterministic: the same word always yields the same vector,
//! in lexicographic (`str`) order.
//!
//! Characters are Unicode scalar values (`char`), not grapheme clusters.

use std::collections::HashMap;
use std::iter;

/// Every distinct arrangement of the characters of `word`.
///
/// Returns an empty vector for the empty word: there is no first character to
/// start from, so there are no candidates.
///
/// # Example
/// ```
/// use anagrind::permutations::permutations;
///
/// assert_eq!(permutations("aab"), vec!["aab", "aba", "baa"]);
/// ```
#[must_use]
pub fn permutations(word: &str) -> Vec<String> {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return Vec::new();
    };

    let mut perms = vec![first.to_string()];

    for ch in chars {
        let mut next = Vec::with_capacity(perms.len() * (perms[0].chars().count() + 1));
        for perm in &perms {
            next.extend(insert_everywhere(perm, ch));
        }

        // sort first: dedup() only drops *adjacent* repeats
        next.sort_unstable();
        next.dedup();
        perms = next;
    }

    perms
}

/// All strings made by inserting `ch` into `base` at each char boundary.
fn insert_everywhere(base: &str, ch: char) -> impl Iterator<Item = String> + '_ {
    base.char_indices()
        .map(|(pos, _)| pos)
        .chain(iter::once(base.len()))
        .map(move |pos| {
            let mut out = String::with_capacity(base.len() + ch.len_utf8());
            out.push_str(&base[..pos]);
            out.push(ch);
            out.push_str(&base[pos..]);
            out
        })
}

/// How many distinct arrangements `word` has: n! / (k1! * k2! * ...), where
/// the k's are the multiplicities of each character.
///
/// Returns `None` if the count does not fit in a `u128`. The empty word has
/// zero arrangements, matching [`permutations`].
#[must_use]
pub fn distinct_permutation_count(word: &str) -> Option<u128> {
    if word.is_empty() {
        return Some(0);
    }

    let mut counts: HashMap<char, u128> = HashMap::new();
    for ch in word.chars() {
        *counts.entry(ch).or_insert(0) += 1;
    }

    // Product of binomials: place each letter group into the remaining slots
    let mut placed: u128 = 0;
    let mut total: u128 = 1;
    for k in counts.into_values() {
        placed += k;
        total = total.checked_mul(binomial(placed, k)?)?;
    }
    Some(total)
}

fn binomial(n: u128, k: u128) -> Option<u128> {
    let k = k.min(n - k);
    let mut acc: u128 = 1;
    for i in 1..=k {
        // acc == C(n - k + i - 1, i - 1) here, so the division is exact
        acc = acc.checked_mul(n - k + i)? / i;
    }
    Some(acc)
}
