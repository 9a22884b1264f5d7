use crate::accents::AccentIndex;
use crate::normalize::{normalize, swap_case};
use crate::trie::{Trie, TrieNode};

/// The pattern character that matches any single tree edge.
pub const WILDCARD: char = '?';

/// Lazy depth-first iterator over wildcard pattern matches.
///
/// One pattern character is matched per tree depth. A literal
/// character follows the exactly-matching edge, the case-swapped edge
/// and every accent variant recorded for its base character; the
/// wildcard follows every edge. A word is yielded when the pattern is
/// exhausted on a terminal node.
#[derive(Debug)]
pub struct Matches<'a, V> {
    pattern: Vec<char>,
    accents: &'a AccentIndex,
    stack: Vec<(String, usize, &'a TrieNode<V>)>,
}

impl<'a, V> Matches<'a, V> {
    pub(crate) fn new(trie: &'a Trie<V>, pattern: &str) -> Self {
        Matches {
            pattern: normalize(pattern).chars().collect(),
            accents: trie.accents(),
            stack: vec![(String::new(), 0, trie.root())],
        }
    }

    /// Push the children of `node` that can match the pattern
    /// character at `pos`, reversed so the stack pops them in branch
    /// order: exact match first, then the case swap, then accents.
    fn expand(&mut self, prefix: &str, pos: usize, node: &'a TrieNode<V>) {
        let expected = self.pattern[pos];
        if expected == WILDCARD {
            for (&c, child) in node.children.iter().rev() {
                let mut next = prefix.to_string();
                next.push(c);
                self.stack.push((next, pos + 1, child));
            }
            return;
        }
        let accents = self.accents;
        let swapped = swap_case(expected);
        for &c in accents.variants_of(expected).iter().rev() {
            if c != expected && c != swapped {
                self.push_child(prefix, pos, node, c);
            }
        }
        if swapped != expected {
            self.push_child(prefix, pos, node, swapped);
        }
        self.push_child(prefix, pos, node, expected);
    }

    fn push_child(
        &mut self,
        prefix: &str,
        pos: usize,
        node: &'a TrieNode<V>,
        c: char,
    ) {
        if let Some(child) = node.children.get(&c) {
            let mut next = prefix.to_string();
            next.push(c);
            self.stack.push((next, pos + 1, child));
        }
    }
}

impl<'a, V> Iterator for Matches<'a, V> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((prefix, pos, node)) = self.stack.pop() {
            if pos == self.pattern.len() {
                if node.value.is_some() {
                    return Some(prefix);
                }
            } else {
                self.expand(&prefix, pos, node);
            }
        }
        None
    }
}

#[cfg(test)]
mod test {
    use crate::trie::Trie;

    fn search(trie: &Trie<()>, pattern: &str) -> Vec<String> {
        trie.search(pattern).collect()
    }

    #[test]
    fn test_wildcard_positions() {
        let trie: Trie<()> = ["hello", "world"].into_iter().collect();
        assert_eq!(vec!["hello"], search(&trie, "h??l?"));
        assert_eq!(vec!["hello", "world"], search(&trie, "???l?"));
        assert!(search(&trie, "??").is_empty());
    }

    #[test]
    fn test_all_wildcards_match_by_length() {
        let trie: Trie<()> =
            ["fan", "fin", "fun", "fund", "at"].into_iter().collect();
        assert_eq!(vec!["fan", "fin", "fun"], search(&trie, "???"));
        assert_eq!(vec!["fan", "fin", "fun"], search(&trie, "f?n"));
        assert_eq!(vec!["fund"], search(&trie, "????"));
    }

    #[test]
    fn test_exact_pattern_needs_terminal() {
        let trie: Trie<()> = ["testing"].into_iter().collect();
        // "test" is only a path, not a word
        assert!(search(&trie, "test").is_empty());
        assert_eq!(vec!["testing"], search(&trie, "testing"));
    }

    #[test]
    fn test_case_swap_matches() {
        let trie: Trie<()> = ["Hello", "hello"].into_iter().collect();
        let found = search(&trie, "?ello");
        assert_eq!(vec!["Hello", "hello"], found);
        // literal 'h' also reaches the uppercase branch
        let found = search(&trie, "hello");
        assert!(found.contains(&"hello".to_string()));
        assert!(found.contains(&"Hello".to_string()));
    }

    #[test]
    fn test_accent_variants_match() {
        let trie: Trie<()> = ["café", "cafe"].into_iter().collect();
        let found = search(&trie, "caf?");
        assert_eq!(vec!["cafe", "café"], found);
        let found = search(&trie, "cafe");
        assert!(found.contains(&"cafe".to_string()));
        assert!(found.contains(&"café".to_string()));
    }

    #[test]
    fn test_restartable() {
        let trie: Trie<()> = ["fan", "fin"].into_iter().collect();
        let first: Vec<String> = trie.search("f?n").collect();
        let second: Vec<String> = trie.search("f?n").collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_pattern() {
        let mut trie = Trie::new();
        trie.insert("", ());
        trie.insert("a", ());
        assert_eq!(vec![""], search(&trie, ""));
    }
}
