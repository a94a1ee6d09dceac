use rand::{Rng, RngCore};
use tracing::debug;

use textsmith_core::{GenerateRequest, Pool, build_pool};

use crate::errors::{EngineError, Result};
use crate::model::{OperationKind, Outcome};

/// Request checks that run before the buffer is inspected.
pub fn precheck(request: &GenerateRequest) -> Result<()> {
    if request.count.is_none() && request.full_length.is_none() {
        return Err(EngineError::MissingTarget);
    }
    if request.classes.is_empty() {
        return Err(EngineError::NoClassesSelected);
    }
    if let (Some(count), Some(full_length)) = (request.count, request.full_length) {
        if count > full_length {
            return Err(EngineError::CountExceedsFullLength { count, full_length });
        }
    }
    Ok(())
}

/// Generates characters into `buffer`.
///
/// With `append` the new characters follow the existing content, otherwise
/// they replace it. `full_length` clamps the final length; a clamped result is
/// reported through [`Outcome::capped_at`].
pub fn generate(
    buffer: &str,
    request: &GenerateRequest,
    append: bool,
    max_generate: usize,
    rng: &mut dyn RngCore,
) -> Result<Outcome> {
    precheck(request)?;

    let pool = build_pool(&request.classes);
    if pool.is_empty() {
        return Err(EngineError::EmptyPool);
    }
    if request.count.is_some_and(|count| count < 0) {
        return Err(EngineError::NegativeTarget { field: "count" });
    }
    if request.full_length.is_some_and(|full| full < 0) {
        return Err(EngineError::NegativeTarget {
            field: "full length",
        });
    }

    let existing = if append {
        i64::try_from(buffer.chars().count()).unwrap_or(i64::MAX)
    } else {
        0
    };

    let mut target = match (request.count, request.full_length) {
        (Some(count), _) => existing.saturating_add(count),
        (None, Some(full_length)) => full_length,
        (None, None) => return Err(EngineError::MissingTarget),
    };

    let mut capped_at = None;
    if let Some(full_length) = request.full_length {
        if target > full_length {
            target = full_length;
            capped_at = Some(usize::try_from(full_length).unwrap_or(usize::MAX));
        }
    }

    let need = target - existing;
    if need <= 0 {
        return Err(EngineError::NothingToGenerate);
    }
    let need = usize::try_from(need)
        .ok()
        .filter(|need| *need <= max_generate)
        .ok_or(EngineError::TargetTooLarge {
            need,
            limit: max_generate,
        })?;

    let mut out = String::with_capacity(if append { buffer.len() } else { 0 } + need);
    if append {
        out.push_str(buffer);
    }
    for _ in 0..need {
        out.push(draw(&pool, rng));
    }

    debug!(
        event = "generated",
        append,
        existing,
        added = need,
        capped = capped_at.is_some(),
        pool = pool.len()
    );

    Ok(Outcome {
        operation: OperationKind::Generate,
        buffer: out,
        affected: need,
        capped_at,
    })
}

/// Uniform draw over pool indices. `pool` must be non-empty.
pub(crate) fn draw(pool: &Pool, rng: &mut dyn RngCore) -> char {
    let chars = pool.as_slice();
    chars[rng.random_range(0..chars.len())]
}
