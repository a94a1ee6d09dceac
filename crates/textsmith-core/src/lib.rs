//! Core contracts and helpers for textsmith.
//!
//! This crate defines the fixed character classes, pool construction, and the
//! request types shared by the transformation engine and the CLI.

pub mod charset;
pub mod error;
pub mod pool;
pub mod request;
pub mod stats;

pub use charset::{CharacterClass, ClassId, characters_for, lookup};
pub use error::{Error, Result};
pub use pool::{CharSet, Pool, build_pool, build_set};
pub use request::{GenerateRequest, RemoveMode, RemoveRequest, ReplacePair, ReplaceRequest};
pub use stats::{BufferStats, ClassCount};
