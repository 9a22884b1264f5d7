//! File-facing loaders. These are thin wrappers that feed a text
//! source into a [`Trie`] one insertion at a time; all the indexing
//! logic lives in the trie itself.

use std::fs::read_to_string;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use nom::bytes::complete::take_till1;
use nom::character::complete::{char, u64 as decimal};
use nom::combinator::all_consuming;
use nom::sequence::separated_pair;
use nom::{Finish, IResult};

use crate::trie::Trie;

/// Load a word list into `trie`, one word per line. Trailing
/// whitespace is trimmed and blank lines are skipped. Returns the
/// number of words that were not already present.
pub fn load_word_list(trie: &mut Trie<()>, path: &Path) -> Result<usize> {
    let text = read_to_string(path).with_context(|| {
        format!("Could not read word list from {}", path.display())
    })?;
    let mut added = 0;
    for line in text.lines() {
        let word = line.trim_end();
        if word.is_empty() {
            continue;
        }
        if trie.insert(word, ()).is_none() {
            added += 1;
        }
    }
    Ok(added)
}

/// One `word,count` entry: everything up to the single comma, then a
/// decimal count filling the rest of the line.
fn frequency_line(line: &str) -> IResult<&str, (&str, u64)> {
    all_consuming(separated_pair(
        take_till1(|c| c == ','),
        char(','),
        decimal,
    ))(line)
}

/// Load a comma-delimited `word,count` frequency list into `trie`.
/// The first line is a header and is skipped. A malformed line aborts
/// the load with an error naming the line. Returns the number of
/// words that were not already present.
pub fn load_frequency_list(trie: &mut Trie<u64>, path: &Path) -> Result<usize> {
    let text = read_to_string(path).with_context(|| {
        format!("Could not read frequency list from {}", path.display())
    })?;
    let mut added = 0;
    for (i, line) in text.lines().enumerate().skip(1) {
        let (_, (word, count)) = frequency_line(line)
            .finish()
            .map_err(|e| anyhow!(e.to_string()))
            .with_context(|| {
                format!(
                    "Malformed frequency entry on line {} of {}",
                    i + 1,
                    path.display()
                )
            })?;
        if trie.insert(word, count).is_none() {
            added += 1;
        }
    }
    Ok(added)
}

#[cfg(test)]
mod test {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn write_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_word_list() {
        let file = write_file("hello\nworld\n\nhello\n");
        let mut trie = Trie::new();
        let added = load_word_list(&mut trie, file.path()).unwrap();
        assert_eq!(2, added);
        assert_eq!(2, trie.len());
        assert_eq!(
            vec!["hello", "world"],
            trie.iter().collect::<Vec<String>>()
        );
    }

    #[test]
    fn test_load_word_list_missing_file() {
        let mut trie = Trie::new();
        let err = load_word_list(&mut trie, Path::new("no/such/file.txt"));
        assert!(err.is_err());
    }

    #[test]
    fn test_load_frequency_list() {
        let file = write_file("word,count\nthe,4521\nof,2213\n");
        let mut trie = Trie::new();
        let added = load_frequency_list(&mut trie, file.path()).unwrap();
        assert_eq!(2, added);
        assert_eq!(Some(&4521), trie.get("the"));
        assert_eq!(Some(&2213), trie.get("of"));
    }

    #[test]
    fn test_malformed_frequency_line() {
        let file = write_file("word,count\nthe,4521\nbroken line\n");
        let mut trie = Trie::new();
        let err = load_frequency_list(&mut trie, file.path()).unwrap_err();
        assert!(err.to_string().contains("line 3"));
    }

    #[test]
    fn test_frequency_line_rejects_extra_comma() {
        let file = write_file("word,count\na,1,2\n");
        let mut trie = Trie::new();
        assert!(load_frequency_list(&mut trie, file.path()).is_err());
    }
}
