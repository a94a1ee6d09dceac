use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use textsmith_core::{ClassId, GenerateRequest, RemoveRequest, ReplaceRequest};

use crate::conflict::{ConflictPolicy, Resolution, resolve_conflict};
use crate::errors::{EngineError, Result};
use crate::generate::{generate, precheck};
use crate::model::{Operation, Outcome, ScriptOutcome, StepSummary};
use crate::remove::remove;
use crate::replace::replace;

const DEFAULT_MAX_GENERATE: usize = 1_000_000;

/// Options for the transformation engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineOptions {
    /// Seed for a reproducible random stream; seeded from the thread RNG when absent.
    pub seed: Option<u64>,
    /// Upper bound on characters produced by a single generation.
    pub max_generate: usize,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            seed: None,
            max_generate: DEFAULT_MAX_GENERATE,
        }
    }
}

/// Entry point for transforming a buffer.
///
/// The engine keeps no reference to any buffer between calls; the only state
/// it carries is its random stream.
#[derive(Debug, Clone)]
pub struct Engine {
    options: EngineOptions,
    rng: ChaCha8Rng,
}

impl Engine {
    pub fn new(options: EngineOptions) -> Self {
        let rng = match options.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_rng(&mut rand::rng()),
        };
        Self { options, rng }
    }

    pub fn generate(
        &mut self,
        buffer: &str,
        request: &GenerateRequest,
        append: bool,
    ) -> Result<Outcome> {
        let limit = self.options.max_generate;
        generate(buffer, request, append, limit, &mut self.rng)
    }

    pub fn resolve_conflict(
        &self,
        buffer: &str,
        classes: &[ClassId],
        full_length: Option<i64>,
    ) -> Resolution {
        resolve_conflict(buffer, classes, full_length)
    }

    /// Full generation flow: validate the request, resolve any conflict with
    /// existing content, then generate according to `policy`.
    pub fn generate_resolved(
        &mut self,
        buffer: &str,
        request: &GenerateRequest,
        policy: ConflictPolicy,
    ) -> Result<Outcome> {
        precheck(request)?;

        match resolve_conflict(buffer, &request.classes, request.full_length) {
            Resolution::Proceed => self.generate(buffer, request, false),
            Resolution::Blocked {
                existing_len,
                full_length,
            } => Err(EngineError::FullLengthReached {
                existing_len,
                full_length,
            }),
            resolution @ (Resolution::Mismatch { .. } | Resolution::Compatible { .. }) => {
                match policy {
                    ConflictPolicy::Clear => self.generate("", request, false),
                    ConflictPolicy::Append => self.generate(buffer, request, true),
                    ConflictPolicy::Abort => Err(EngineError::ConflictUnresolved(resolution)),
                }
            }
        }
    }

    pub fn remove(&self, buffer: &str, request: &RemoveRequest) -> Result<Outcome> {
        remove(buffer, request)
    }

    pub fn replace(&mut self, buffer: &str, request: &ReplaceRequest) -> Result<Outcome> {
        replace(buffer, request, &mut self.rng)
    }

    /// Applies one operation. Generation with `append` set skips the
    /// clear/continue decision and appends directly.
    ///
    /// A panic inside an engine is reported as [`EngineError::Internal`].
    pub fn apply(
        &mut self,
        buffer: &str,
        operation: &Operation,
        policy: ConflictPolicy,
    ) -> Result<Outcome> {
        let guarded = AssertUnwindSafe(|| self.dispatch(buffer, operation, policy));
        let result = match panic::catch_unwind(guarded) {
            Ok(result) => result,
            Err(payload) => Err(EngineError::Internal(panic_message(payload))),
        };

        match &result {
            Ok(outcome) => info!(
                event = "operation_applied",
                operation = %operation.kind(),
                before = buffer.chars().count(),
                after = outcome.buffer.chars().count(),
                affected = outcome.affected,
                capped = outcome.capped()
            ),
            Err(err) => warn!(
                event = "operation_rejected",
                operation = %operation.kind(),
                code = err.code(),
                error = %err
            ),
        }

        result
    }

    fn dispatch(
        &mut self,
        buffer: &str,
        operation: &Operation,
        policy: ConflictPolicy,
    ) -> Result<Outcome> {
        match operation {
            Operation::Generate {
                request,
                append: true,
            } => {
                precheck(request)?;
                match resolve_conflict(buffer, &request.classes, request.full_length) {
                    Resolution::Blocked {
                        existing_len,
                        full_length,
                    } => Err(EngineError::FullLengthReached {
                        existing_len,
                        full_length,
                    }),
                    _ => self.generate(buffer, request, true),
                }
            }
            Operation::Generate {
                request,
                append: false,
            } => self.generate_resolved(buffer, request, policy),
            Operation::Remove(request) => self.remove(buffer, request),
            Operation::Replace(request) => self.replace(buffer, request),
        }
    }

    /// Applies `operations` in order. The whole script is atomic: the first
    /// failure is returned with its step index and no buffer is produced.
    pub fn apply_all(
        &mut self,
        buffer: &str,
        operations: &[Operation],
        policy: ConflictPolicy,
    ) -> Result<ScriptOutcome> {
        let mut current = buffer.to_string();
        let mut steps = Vec::with_capacity(operations.len());

        for (index, operation) in operations.iter().enumerate() {
            let outcome = match self.apply(&current, operation, policy) {
                Ok(outcome) => outcome,
                Err(source) => {
                    return Err(EngineError::Step {
                        index,
                        source: Box::new(source),
                    });
                }
            };
            steps.push(StepSummary {
                index,
                operation: outcome.operation,
                affected: outcome.affected,
                capped_at: outcome.capped_at,
            });
            current = outcome.buffer;
        }

        info!(event = "script_applied", steps = steps.len());
        Ok(ScriptOutcome {
            buffer: current,
            steps,
        })
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(EngineOptions::default())
    }
}

fn panic_message(panic: Box<dyn Any + Send>) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "panic during transformation".to_string()
    }
}
