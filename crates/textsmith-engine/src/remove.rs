use tracing::debug;

use textsmith_core::{RemoveMode, RemoveRequest, build_set};

use crate::errors::{EngineError, Result};
use crate::model::{OperationKind, Outcome};

/// Strips every character of the selected classes and literal characters.
pub fn remove(buffer: &str, request: &RemoveRequest) -> Result<Outcome> {
    if buffer.is_empty() {
        return Err(EngineError::EmptyBuffer);
    }
    match request.mode {
        RemoveMode::Selection if request.classes.is_empty() => {
            return Err(EngineError::NoClassesSelected);
        }
        RemoveMode::Custom if request.literal_chars.is_empty() => {
            return Err(EngineError::NoCustomChars);
        }
        _ => {}
    }

    let mut removal = build_set(&request.classes);
    removal.extend_from_str(&request.literal_chars);

    let mut before = 0;
    let mut out = String::with_capacity(buffer.len());
    for ch in buffer.chars() {
        before += 1;
        if !removal.contains(ch) {
            out.push(ch);
        }
    }

    let removed = before - out.chars().count();
    debug!(event = "removed", mode = ?request.mode, before, removed);
    if removed == 0 {
        return Err(EngineError::NoCharactersRemoved);
    }

    Ok(Outcome::new(OperationKind::Remove, out, removed))
}
