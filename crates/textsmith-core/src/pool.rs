use std::collections::HashSet;

use crate::charset::{ClassId, characters_for};

/// Ordered candidate characters built from one or more classes.
///
/// Characters shared by several selected classes appear once per class, so
/// they are drawn more often when sampling.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pool {
    chars: Vec<char>,
}

impl Pool {
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn as_slice(&self) -> &[char] {
        &self.chars
    }

    /// Linear membership test; prefer [`Pool::to_set`] when scanning a buffer.
    pub fn contains(&self, ch: char) -> bool {
        self.chars.contains(&ch)
    }

    pub fn to_set(&self) -> CharSet {
        CharSet {
            chars: self.chars.iter().copied().collect(),
        }
    }
}

/// Hashed membership set for O(1) character tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharSet {
    chars: HashSet<char>,
}

impl CharSet {
    pub fn contains(&self, ch: char) -> bool {
        self.chars.contains(&ch)
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn extend_from_str(&mut self, chars: &str) {
        self.chars.extend(chars.chars());
    }
}

/// Concatenates the characters of each class in the order given.
pub fn build_pool(classes: &[ClassId]) -> Pool {
    let chars = classes
        .iter()
        .flat_map(|class| characters_for(class).chars())
        .collect();
    Pool { chars }
}

/// Union of the characters of each class.
pub fn build_set(classes: &[ClassId]) -> CharSet {
    let mut set = CharSet::default();
    for class in classes {
        set.extend_from_str(characters_for(class));
    }
    set
}
