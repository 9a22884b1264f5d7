use fnv::FnvHashMap;
use smallvec::SmallVec;

use crate::normalize::{denormalize, swap_case};

/// Accented characters observed during insertion, keyed by their
/// unaccented lowercase base. The index only grows: removing a word
/// never unlearns a variant, since the variant may still be useful
/// for matching the rest of the vocabulary.
///
/// Each trie owns its own index; it is never shared between stores.
#[derive(Clone, Debug, Default)]
pub(crate) struct AccentIndex {
    variants: FnvHashMap<char, SmallVec<[char; 4]>>,
}

impl AccentIndex {
    /// Record `c` as an accent variant of its base character, if it
    /// decomposes into a base plus at least one combining mark.
    pub(crate) fn observe(&mut self, c: char) {
        if c.is_ascii() {
            return;
        }
        let decomposed = denormalize(c);
        if decomposed.len() < 2 {
            return;
        }
        let entry = self.variants.entry(lower(decomposed[0])).or_default();
        if !entry.contains(&c) {
            entry.push(c);
        }
    }

    /// All variants recorded for the lowercase base of `c`.
    pub(crate) fn variants_of(&self, c: char) -> &[char] {
        self.variants.get(&lower(c)).map_or(&[], |v| v.as_slice())
    }

    /// True if `actual` was recorded as an accent variant of
    /// `expected`'s base character.
    pub(crate) fn is_variant(&self, expected: char, actual: char) -> bool {
        self.variants_of(expected).contains(&actual)
    }
}

fn lower(c: char) -> char {
    if c.is_uppercase() {
        swap_case(c)
    } else {
        c
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_observe_accents() {
        let mut index = AccentIndex::default();
        index.observe('é');
        index.observe('è');
        index.observe('É');
        index.observe('e'); // ASCII, ignored
        index.observe('ø'); // no decomposition, ignored

        assert_eq!(['é', 'è', 'É'], index.variants_of('e'));
        assert_eq!(['é', 'è', 'É'], index.variants_of('E'));
        assert!(index.variants_of('o').is_empty());
    }

    #[test]
    fn test_observe_dedups() {
        let mut index = AccentIndex::default();
        index.observe('ü');
        index.observe('ü');
        assert_eq!(['ü'], index.variants_of('u'));
    }

    #[test]
    fn test_is_variant() {
        let mut index = AccentIndex::default();
        index.observe('é');
        assert!(index.is_variant('e', 'é'));
        assert!(index.is_variant('E', 'é'));
        assert!(!index.is_variant('e', 'è'));
        assert!(!index.is_variant('a', 'é'));
    }
}
