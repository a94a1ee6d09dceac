use thiserror::Error;

use crate::conflict::Resolution;

/// Errors emitted by the transformation engine.
///
/// Zero-effect conditions (`NothingToGenerate`, `NoCharactersRemoved`,
/// `NoReplacementsMade`) are errors too, so callers can surface them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("count and full length cannot both be empty")]
    MissingTarget,
    #[error("select at least one character type")]
    NoClassesSelected,
    #[error("count ({count}) is greater than full length ({full_length})")]
    CountExceedsFullLength { count: i64, full_length: i64 },
    #[error("no characters available for generation")]
    EmptyPool,
    #[error("{field} cannot be negative")]
    NegativeTarget { field: &'static str },
    #[error("nothing to generate (count is 0 or no space left)")]
    NothingToGenerate,
    #[error("refusing to generate {need} characters (limit is {limit})")]
    TargetTooLarge { need: i64, limit: usize },
    #[error("buffer is empty")]
    EmptyBuffer,
    #[error("enter custom characters to remove")]
    NoCustomChars,
    #[error("no characters were removed")]
    NoCharactersRemoved,
    #[error("select character types to replace (from)")]
    NoFromClasses,
    #[error("select replacement character types (to)")]
    NoToClasses,
    #[error("replacement pool is empty")]
    EmptyReplacementPool,
    #[error("add at least one replace pair")]
    NoPairsProvided,
    #[error("no replacements were made")]
    NoReplacementsMade,
    #[error("existing length ({existing_len}) is at full length ({full_length})")]
    FullLengthReached { existing_len: usize, full_length: i64 },
    #[error("{0}")]
    ConflictUnresolved(Resolution),
    #[error("step {index} failed: {source}")]
    Step {
        index: usize,
        source: Box<EngineError>,
    },
    #[error("internal error: {0}")]
    Internal(String),
}

impl EngineError {
    /// Stable snake_case identifier of the error kind.
    pub fn code(&self) -> &'static str {
        match self {
            EngineError::MissingTarget => "missing_target",
            EngineError::NoClassesSelected => "no_classes_selected",
            EngineError::CountExceedsFullLength { .. } => "count_exceeds_full_length",
            EngineError::EmptyPool => "empty_pool",
            EngineError::NegativeTarget { .. } => "negative_target",
            EngineError::NothingToGenerate => "nothing_to_generate",
            EngineError::TargetTooLarge { .. } => "target_too_large",
            EngineError::EmptyBuffer => "empty_buffer",
            EngineError::NoCustomChars => "no_custom_chars",
            EngineError::NoCharactersRemoved => "no_characters_removed",
            EngineError::NoFromClasses => "no_from_classes",
            EngineError::NoToClasses => "no_to_classes",
            EngineError::EmptyReplacementPool => "empty_replacement_pool",
            EngineError::NoPairsProvided => "no_pairs_provided",
            EngineError::NoReplacementsMade => "no_replacements_made",
            EngineError::FullLengthReached { .. } => "full_length_reached",
            EngineError::ConflictUnresolved(_) => "conflict_unresolved",
            EngineError::Step { source, .. } => source.code(),
            EngineError::Internal(_) => "internal_error",
        }
    }

    /// True when the request was valid but had no effect on the buffer.
    pub fn is_zero_effect(&self) -> bool {
        match self {
            EngineError::NothingToGenerate
            | EngineError::NoCharactersRemoved
            | EngineError::NoReplacementsMade => true,
            EngineError::Step { source, .. } => source.is_zero_effect(),
            _ => false,
        }
    }
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;
