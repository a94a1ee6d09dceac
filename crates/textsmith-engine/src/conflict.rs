use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use textsmith_core::{ClassId, build_set};

/// How existing buffer content relates to a new generation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Resolution {
    /// Buffer is empty; generate directly.
    Proceed,
    /// Buffer already reaches the full length; nothing can be added.
    Blocked {
        existing_len: usize,
        full_length: i64,
    },
    /// Buffer holds characters outside the requested classes.
    Mismatch {
        existing_len: usize,
        foreign_chars: usize,
    },
    /// Buffer holds only characters from the requested classes.
    Compatible { existing_len: usize },
}

/// Action a caller can offer for a [`Resolution`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictChoice {
    ClearThenGenerate,
    Append,
    Acknowledge,
}

impl Resolution {
    pub fn choices(&self) -> &'static [ConflictChoice] {
        match self {
            Resolution::Proceed => &[],
            Resolution::Blocked { .. } => &[ConflictChoice::Acknowledge],
            Resolution::Mismatch { .. } | Resolution::Compatible { .. } => {
                &[ConflictChoice::ClearThenGenerate, ConflictChoice::Append]
            }
        }
    }

    /// Short title for a prompt.
    pub fn title(&self) -> &'static str {
        match self {
            Resolution::Proceed => "Ready",
            Resolution::Blocked { .. } => "Full length reached",
            Resolution::Mismatch { .. } => "Selected characters do not match existing characters",
            Resolution::Compatible { .. } => "Existing text found",
        }
    }

    pub fn message(&self) -> String {
        match self {
            Resolution::Proceed => "Buffer is empty; generation can start.".to_string(),
            Resolution::Blocked {
                existing_len,
                full_length,
            } => format!(
                "Existing text length ({existing_len}) is already equal to or greater than \
                 full length ({full_length}). No more characters can be added."
            ),
            Resolution::Mismatch {
                existing_len,
                foreign_chars,
            } => format!(
                "Existing text (length {existing_len}) contains {foreign_chars} characters \
                 not in the chosen types. Clear or continue?"
            ),
            Resolution::Compatible { existing_len } => {
                format!("You have existing text (length {existing_len}). Clear or continue?")
            }
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title(), self.message())
    }
}

/// Non-interactive answer to a clear/continue prompt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictPolicy {
    Clear,
    Append,
    #[default]
    Abort,
}

/// Inspects `buffer` against a generation request before anything is mutated.
pub fn resolve_conflict(buffer: &str, classes: &[ClassId], full_length: Option<i64>) -> Resolution {
    if buffer.is_empty() {
        return Resolution::Proceed;
    }

    let existing_len = buffer.chars().count();
    if let Some(full_length) = full_length {
        if i64::try_from(existing_len).unwrap_or(i64::MAX) >= full_length {
            debug!(event = "conflict_blocked", existing_len, full_length);
            return Resolution::Blocked {
                existing_len,
                full_length,
            };
        }
    }

    let allowed = build_set(classes);
    let foreign_chars = buffer.chars().filter(|ch| !allowed.contains(*ch)).count();
    if foreign_chars > 0 {
        debug!(event = "conflict_mismatch", existing_len, foreign_chars);
        Resolution::Mismatch {
            existing_len,
            foreign_chars,
        }
    } else {
        debug!(event = "conflict_compatible", existing_len);
        Resolution::Compatible { existing_len }
    }
}
