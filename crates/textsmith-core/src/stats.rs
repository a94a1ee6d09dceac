use serde::{Deserialize, Serialize};

use crate::charset::CharacterClass;

/// Number of buffer characters belonging to a class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassCount {
    pub class: CharacterClass,
    pub count: usize,
}

/// Character counts for a buffer, measured in `char`s.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BufferStats {
    pub length: usize,
    pub classes: Vec<ClassCount>,
    /// Characters outside every built-in class.
    pub other: usize,
}

impl BufferStats {
    pub fn of(buffer: &str) -> Self {
        let mut counts = [0_usize; CharacterClass::ALL.len()];
        let mut length = 0;
        let mut other = 0;

        for ch in buffer.chars() {
            length += 1;
            if let Some(idx) = CharacterClass::ALL.iter().position(|c| c.contains(ch)) {
                counts[idx] += 1;
            } else {
                other += 1;
            }
        }

        let classes = CharacterClass::ALL
            .into_iter()
            .zip(counts)
            .map(|(class, count)| ClassCount { class, count })
            .collect();

        Self {
            length,
            classes,
            other,
        }
    }

    pub fn count(&self, class: CharacterClass) -> usize {
        self.classes
            .iter()
            .find(|entry| entry.class == class)
            .map(|entry| entry.count)
            .unwrap_or(0)
    }
}
