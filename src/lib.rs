#![warn(missing_debug_implementations)]

pub mod loader;

mod accents;
mod error;
mod fuzzy;
mod normalize;
mod trie;
mod wildcard;

pub use crate::error::TrieError;
pub use crate::normalize::{denormalize, normalize, swap_case};
pub use crate::trie::{Trie, Words};
pub use crate::wildcard::{Matches, WILDCARD};
