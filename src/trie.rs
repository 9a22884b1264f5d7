use std::collections::BTreeMap;
use std::fmt;

use itertools::Itertools;

use crate::accents::AccentIndex;
use crate::error::TrieError;
use crate::fuzzy;
use crate::normalize::normalize;
use crate::wildcard::Matches;

/// One node of the tree. Children are keyed by a single code point;
/// a `Some` value marks the path from the root as a complete word.
/// A node is owned exclusively by its parent.
#[derive(Clone, Debug)]
pub(crate) struct TrieNode<V> {
    pub(crate) children: BTreeMap<char, TrieNode<V>>,
    pub(crate) value: Option<V>,
}

impl<V> Default for TrieNode<V> {
    fn default() -> Self {
        TrieNode {
            children: BTreeMap::new(),
            value: None,
        }
    }
}

/// A sorted prefix tree mapping words to values of type `V`.
///
/// Words are normalized (NFKC) on the way in, so composed and
/// decomposed spellings of the same text land on the same path.
/// Use `Trie<()>` when only membership matters.
#[derive(Clone, Debug)]
pub struct Trie<V> {
    root: TrieNode<V>,
    size: usize,
    accents: AccentIndex,
}

impl<V> Trie<V> {
    pub fn new() -> Self {
        Trie {
            root: TrieNode::default(),
            size: 0,
            accents: AccentIndex::default(),
        }
    }

    /// Number of complete words currently stored.
    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Insert `word` with `value`, overwriting and returning any
    /// previous value. Accented characters along the path are recorded
    /// in the accent index as a side effect.
    pub fn insert(&mut self, word: &str, value: V) -> Option<V> {
        let word = normalize(word);
        let mut node = &mut self.root;
        for c in word.chars() {
            self.accents.observe(c);
            node = node.children.entry(c).or_default();
        }
        let prev = node.value.replace(value);
        if prev.is_none() {
            self.size += 1;
        }
        prev
    }

    /// Remove `word`, returning its value. Only the terminal marker is
    /// cleared; the path itself stays in place, so removal is O(word
    /// length) with no subtree cleanup. Removing a word that is not
    /// present (including a second removal) fails.
    pub fn remove(&mut self, word: &str) -> Result<V, TrieError> {
        let normalized = normalize(word);
        let mut node = &mut self.root;
        for c in normalized.chars() {
            node = match node.children.get_mut(&c) {
                Some(child) => child,
                None => return Err(TrieError::WordNotFound(word.to_string())),
            };
        }
        match node.value.take() {
            Some(value) => {
                self.size -= 1;
                Ok(value)
            }
            None => Err(TrieError::WordNotFound(word.to_string())),
        }
    }

    /// True if `word` is stored as a complete word. A prefix of a
    /// longer word does not count.
    pub fn contains(&self, word: &str) -> bool {
        self.node_at(&normalize(word))
            .map_or(false, |node| node.value.is_some())
    }

    /// The value stored for `word`, if it is a complete word.
    pub fn get(&self, word: &str) -> Option<&V> {
        self.node_at(&normalize(word))
            .and_then(|node| node.value.as_ref())
    }

    /// Like [`Trie::get`], but returns `default` when the word is absent.
    pub fn get_or(&self, word: &str, default: V) -> V
    where
        V: Clone,
    {
        self.get(word).cloned().unwrap_or(default)
    }

    /// The subtree at the end of `prefix`, or `None` if the path does
    /// not fully exist. `prefix` must already be normalized. All the
    /// traversal algorithms start here.
    pub(crate) fn node_at(&self, prefix: &str) -> Option<&TrieNode<V>> {
        let mut node = &self.root;
        for c in prefix.chars() {
            node = node.children.get(&c)?;
        }
        Some(node)
    }

    pub(crate) fn root(&self) -> &TrieNode<V> {
        &self.root
    }

    pub(crate) fn accents(&self) -> &AccentIndex {
        &self.accents
    }

    /// All words in the trie, in code point order.
    pub fn iter(&self) -> Words<'_, V> {
        Words::new(Some(&self.root), String::new())
    }

    /// All words starting with `prefix`, in code point order. The
    /// prefix itself comes first if it is a complete word.
    pub fn prefix(&self, prefix: &str) -> Words<'_, V> {
        let prefix = normalize(prefix);
        Words::new(self.node_at(&prefix), prefix.into_owned())
    }

    /// All words matching `pattern`, where [`crate::WILDCARD`] matches
    /// any single character. Literal pattern characters also match
    /// their case-swapped form and any recorded accent variant.
    pub fn search<'a>(&'a self, pattern: &str) -> Matches<'a, V> {
        Matches::new(self, pattern)
    }

    /// Spelling candidates for `word` within edit cost 3, sorted by
    /// ascending cost and then alphabetically.
    pub fn spellcheck(&self, word: &str) -> Vec<(String, u32)> {
        fuzzy::spellcheck(self, &normalize(word))
    }
}

impl<V> Default for Trie<V> {
    fn default() -> Self {
        Trie::new()
    }
}

impl<'a> FromIterator<&'a str> for Trie<()> {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut trie = Trie::new();
        for word in iter {
            trie.insert(word, ());
        }
        trie
    }
}

impl<'a, V> IntoIterator for &'a Trie<V> {
    type Item = String;
    type IntoIter = Words<'a, V>;

    fn into_iter(self) -> Words<'a, V> {
        self.iter()
    }
}

impl<V> fmt::Display for Trie<V> {
    /// Summary form: the word count and the first three words, with an
    /// ellipsis marker if there are more, e.g.
    /// `<trie 4 words ['hello', 'test', 'testing', '...']>`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut sample: Vec<String> = self.iter().take(4).collect();
        if sample.len() > 3 {
            sample.truncate(3);
            sample.push("...".to_string());
        }
        write!(
            f,
            "<trie {} words [{}]>",
            self.size,
            sample.iter().map(|w| format!("'{}'", w)).join(", ")
        )
    }
}

/// Depth-first word enumerator with an explicit traversal stack.
/// A node's own word is yielded before its children's, and children
/// are visited in code point order, so output is lexicographic.
#[derive(Debug)]
pub struct Words<'a, V> {
    stack: Vec<(String, &'a TrieNode<V>)>,
}

impl<'a, V> Words<'a, V> {
    pub(crate) fn new(node: Option<&'a TrieNode<V>>, prefix: String) -> Self {
        Words {
            stack: node.map(|node| (prefix, node)).into_iter().collect(),
        }
    }
}

impl<'a, V> Iterator for Words<'a, V> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((prefix, node)) = self.stack.pop() {
            // Reversed so the stack pops the children in sorted order.
            for (&c, child) in node.children.iter().rev() {
                let mut next = prefix.clone();
                next.push(c);
                self.stack.push((next, child));
            }
            if node.value.is_some() {
                return Some(prefix);
            }
        }
        None
    }
}
