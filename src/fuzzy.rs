use fnv::FnvHashMap;

use crate::accents::AccentIndex;
use crate::normalize::swap_case;
use crate::trie::{Trie, TrieNode};

/// Search states whose accumulated cost exceeds this are abandoned.
const MAX_COST: u32 = 3;

/// Cost of matching the tree edge `actual` against the query character
/// `expected`: free for the same character, 1 for a case swap or a
/// recorded accent variant, 2 for anything else.
fn substitution_cost(accents: &AccentIndex, expected: char, actual: char) -> u32 {
    if expected == actual {
        0
    } else if swap_case(expected) == actual || accents.is_variant(expected, actual) {
        1
    } else {
        2
    }
}

/// Every word within edit cost [`MAX_COST`] of `word`, sorted by
/// ascending cost and then alphabetically. `word` must already be
/// normalized.
pub(crate) fn spellcheck<V>(trie: &Trie<V>, word: &str) -> Vec<(String, u32)> {
    let query: Vec<char> = word.chars().collect();
    let mut found = FnvHashMap::default();
    let mut prefix = String::new();
    walk(trie.root(), trie.accents(), &query, &mut prefix, 0, &mut found);
    let mut result: Vec<(String, u32)> = found.into_iter().collect();
    result.sort_unstable_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(&b.0)));
    result
}

/// One backtracking step. Deletion, insertion, substitution and
/// transposition of the leading query characters are all explored;
/// the same word can be reached along several paths with different
/// costs, so the collector keeps the cheapest cost per word.
fn walk<V>(
    node: &TrieNode<V>,
    accents: &AccentIndex,
    query: &[char],
    prefix: &mut String,
    cost: u32,
    found: &mut FnvHashMap<String, u32>,
) {
    if cost > MAX_COST {
        return;
    }
    let (&expected, rest) = match query.split_first() {
        Some(split) => split,
        None => {
            if node.value.is_some() {
                let entry = found.entry(prefix.clone()).or_insert(cost);
                *entry = (*entry).min(cost);
            }
            return;
        }
    };

    // Transpose the two leading query characters, if the tree has the
    // swapped two-character sequence.
    if let Some(&next) = rest.first() {
        let step = node
            .children
            .get(&next)
            .and_then(|child| child.children.get(&expected));
        if let Some(step) = step {
            prefix.push(next);
            prefix.push(expected);
            walk(step, accents, &rest[1..], prefix, cost + 1, found);
            prefix.pop();
            prefix.pop();
        }
    }

    // Delete the leading query character.
    walk(node, accents, rest, prefix, cost + 1, found);

    for (&c, child) in node.children.iter() {
        prefix.push(c);
        // Insert `c` without consuming the query.
        walk(child, accents, query, prefix, cost + 1, found);
        // Substitute `c` for the expected character.
        let sub = substitution_cost(accents, expected, c);
        walk(child, accents, rest, prefix, cost + sub, found);
        prefix.pop();
    }
}
