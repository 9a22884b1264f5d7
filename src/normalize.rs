use std::borrow::Cow;
use std::iter::once;

use smallvec::SmallVec;
use unicode_normalization::UnicodeNormalization;

/// Canonicalize a word so that Unicode-equivalent spellings share one
/// tree path. ASCII input is passed through without allocating.
pub fn normalize(word: &str) -> Cow<'_, str> {
    if word.is_ascii() {
        Cow::Borrowed(word)
    } else {
        Cow::Owned(word.nfkc().collect())
    }
}

/// Decompose a single character into its base character followed by
/// any combining marks. A character without marks decomposes to itself.
pub fn denormalize(c: char) -> SmallVec<[char; 4]> {
    once(c).nfkd().collect()
}

/// Flip the case of a single character. Non-letters pass through, as
/// do characters whose counterpart in the other case is more than one
/// character long (e.g. 'ß' uppercases to "SS").
pub fn swap_case(c: char) -> char {
    if c.is_lowercase() {
        single(c.to_uppercase()).unwrap_or(c)
    } else if c.is_uppercase() {
        single(c.to_lowercase()).unwrap_or(c)
    } else {
        c
    }
}

fn single(mut iter: impl Iterator<Item = char>) -> Option<char> {
    let c = iter.next()?;
    if iter.next().is_none() {
        Some(c)
    } else {
        None
    }
}
