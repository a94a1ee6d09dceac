use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use textsmith_core::{GenerateRequest, RemoveRequest, ReplaceRequest};

/// Kind of transformation applied to a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum OperationKind {
    Generate,
    Remove,
    Replace,
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OperationKind::Generate => "generate",
            OperationKind::Remove => "remove",
            OperationKind::Replace => "replace",
        };
        f.write_str(name)
    }
}

/// A single transformation, as accepted by [`crate::Engine::apply`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Operation {
    Generate {
        #[serde(flatten)]
        request: GenerateRequest,
        /// Append to existing content instead of resolving the conflict by policy.
        #[serde(default)]
        append: bool,
    },
    Remove(RemoveRequest),
    Replace(ReplaceRequest),
}

impl Operation {
    pub fn kind(&self) -> OperationKind {
        match self {
            Operation::Generate { .. } => OperationKind::Generate,
            Operation::Remove(_) => OperationKind::Remove,
            Operation::Replace(_) => OperationKind::Replace,
        }
    }
}

/// Successful result of an operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub operation: OperationKind,
    /// The transformed buffer.
    pub buffer: String,
    /// Characters added, removed, or replaced.
    pub affected: usize,
    /// Full length the generation target was clamped to, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capped_at: Option<usize>,
}

impl Outcome {
    pub fn new(operation: OperationKind, buffer: String, affected: usize) -> Self {
        Self {
            operation,
            buffer,
            affected,
            capped_at: None,
        }
    }

    pub fn capped(&self) -> bool {
        self.capped_at.is_some()
    }

    /// User-facing success message.
    pub fn summary(&self) -> String {
        match self.operation {
            OperationKind::Generate => {
                let added = self.affected;
                match self.capped_at {
                    Some(full_length) => format!(
                        "Generation successful: {added} characters added. Note: only appended up \
                         to full length ({full_length} chars); extra characters were not added."
                    ),
                    None => format!("Generation successful: {added} characters added."),
                }
            }
            OperationKind::Remove => {
                format!("Removal successful: {} characters removed.", self.affected)
            }
            OperationKind::Replace => {
                format!("Replace successful: {} replacements made.", self.affected)
            }
        }
    }
}

/// Per-step record of a script run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepSummary {
    pub index: usize,
    pub operation: OperationKind,
    pub affected: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capped_at: Option<usize>,
}

/// Result of applying a list of operations in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptOutcome {
    pub buffer: String,
    pub steps: Vec<StepSummary>,
}

impl ScriptOutcome {
    pub fn affected_total(&self) -> usize {
        self.steps.iter().map(|step| step.affected).sum()
    }
}
