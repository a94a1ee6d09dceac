//! Transformation engine for textsmith.
//!
//! Generates, removes, and replaces characters in a caller-owned buffer. Every
//! operation takes the buffer by reference and returns a new value, so a
//! failed call never leaves a partially edited buffer behind.
//!
//! Random sampling is uniform over pool indices and uses a ChaCha8 stream.
//! It is not meant for secrets: do not use generated text as credentials.

pub mod conflict;
pub mod engine;
pub mod errors;
pub mod generate;
pub mod model;
pub mod remove;
pub mod replace;

pub use conflict::{ConflictChoice, ConflictPolicy, Resolution, resolve_conflict};
pub use engine::{Engine, EngineOptions};
pub use errors::{EngineError, Result};
pub use model::{Operation, OperationKind, Outcome, ScriptOutcome, StepSummary};
