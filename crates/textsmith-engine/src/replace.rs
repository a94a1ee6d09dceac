use rand::RngCore;
use tracing::debug;

use textsmith_core::{ClassId, ReplacePair, ReplaceRequest, build_pool, build_set};

use crate::errors::{EngineError, Result};
use crate::generate::draw;
use crate::model::{OperationKind, Outcome};

/// Rewrites `buffer` according to `request`.
pub fn replace(buffer: &str, request: &ReplaceRequest, rng: &mut dyn RngCore) -> Result<Outcome> {
    if buffer.is_empty() {
        return Err(EngineError::EmptyBuffer);
    }

    let (out, replaced) = match request {
        ReplaceRequest::Selection { from, to } => replace_classes(buffer, from, to, rng)?,
        ReplaceRequest::Custom { pairs } => replace_pairs(buffer, pairs)?,
    };

    if replaced == 0 {
        return Err(EngineError::NoReplacementsMade);
    }

    Ok(Outcome::new(OperationKind::Replace, out, replaced))
}

/// Each character of `from` is swapped for an independent draw from `to`.
fn replace_classes(
    buffer: &str,
    from: &[ClassId],
    to: &[ClassId],
    rng: &mut dyn RngCore,
) -> Result<(String, usize)> {
    if from.is_empty() {
        return Err(EngineError::NoFromClasses);
    }
    if to.is_empty() {
        return Err(EngineError::NoToClasses);
    }

    let from_set = build_set(from);
    let to_pool = build_pool(to);
    if to_pool.is_empty() {
        return Err(EngineError::EmptyReplacementPool);
    }

    let mut replaced = 0;
    let mut out = String::with_capacity(buffer.len());
    for ch in buffer.chars() {
        if from_set.contains(ch) {
            out.push(draw(&to_pool, rng));
            replaced += 1;
        } else {
            out.push(ch);
        }
    }

    debug!(event = "replaced_classes", replaced, pool = to_pool.len());
    Ok((out, replaced))
}

/// Pairs run in order against the progressively rewritten buffer, so later
/// pairs see the output of earlier ones.
fn replace_pairs(buffer: &str, pairs: &[ReplacePair]) -> Result<(String, usize)> {
    if pairs.is_empty() {
        return Err(EngineError::NoPairsProvided);
    }

    let mut current = buffer.to_string();
    let mut replaced = 0;
    for pair in pairs {
        if pair.from.is_empty() {
            continue;
        }
        let matches = current.matches(pair.from.as_str()).count();
        if matches > 0 {
            current = current.replace(pair.from.as_str(), &pair.to);
            replaced += matches;
        }
    }

    debug!(event = "replaced_pairs", pairs = pairs.len(), replaced);
    Ok((current, replaced))
}
