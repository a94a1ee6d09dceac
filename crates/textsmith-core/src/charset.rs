use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

const UPPER: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWER: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "0123456789";
const SPECIAL: &str = "!@#$%^&*()_+-=[]{}|;:',.<>/?`~";
const SPACE: &str = " ";

/// One of the five built-in character classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum CharacterClass {
    Upper,
    Lower,
    Digits,
    Special,
    Space,
}

impl CharacterClass {
    /// All classes in canonical order.
    pub const ALL: [CharacterClass; 5] = [
        CharacterClass::Upper,
        CharacterClass::Lower,
        CharacterClass::Digits,
        CharacterClass::Special,
        CharacterClass::Space,
    ];

    /// Literal characters belonging to the class.
    pub const fn characters(self) -> &'static str {
        match self {
            CharacterClass::Upper => UPPER,
            CharacterClass::Lower => LOWER,
            CharacterClass::Digits => DIGITS,
            CharacterClass::Special => SPECIAL,
            CharacterClass::Space => SPACE,
        }
    }

    /// Identifier used on the wire and on the command line.
    pub const fn as_str(self) -> &'static str {
        match self {
            CharacterClass::Upper => "upper",
            CharacterClass::Lower => "lower",
            CharacterClass::Digits => "digits",
            CharacterClass::Special => "special",
            CharacterClass::Space => "space",
        }
    }

    /// Human readable label for pickers.
    pub const fn label(self) -> &'static str {
        match self {
            CharacterClass::Upper => "Uppercase (A-Z)",
            CharacterClass::Lower => "Lowercase (a-z)",
            CharacterClass::Digits => "Digits (0-9)",
            CharacterClass::Special => "Special (!@#...)",
            CharacterClass::Space => "Space",
        }
    }

    /// Returns true when `ch` belongs to the class.
    pub fn contains(self, ch: char) -> bool {
        self.characters().contains(ch)
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for CharacterClass {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        CharacterClass::ALL
            .into_iter()
            .find(|class| class.as_str() == value)
            .ok_or_else(|| Error::InvalidClass(value.to_string()))
    }
}

/// Class identifier as supplied by a caller.
///
/// Callers may hold stale identifiers, so a `ClassId` is not guaranteed to
/// name a known class. Lenient lookups treat unknown ids as the empty set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct ClassId(String);

impl ClassId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Resolves the identifier to a built-in class, if it names one.
    pub fn class(&self) -> Option<CharacterClass> {
        self.0.parse().ok()
    }
}

impl From<CharacterClass> for ClassId {
    fn from(class: CharacterClass) -> Self {
        Self(class.as_str().to_string())
    }
}

impl From<&str> for ClassId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

/// Strict lookup: fails with [`Error::InvalidClass`] for unknown identifiers.
pub fn lookup(name: &str) -> Result<&'static str> {
    name.parse::<CharacterClass>()
        .map(CharacterClass::characters)
}

/// Lenient lookup used by the engine; unknown identifiers contribute nothing.
pub fn characters_for(id: &ClassId) -> &'static str {
    id.class().map(CharacterClass::characters).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_sizes_match_fixed_sets() {
        assert_eq!(CharacterClass::Upper.characters().chars().count(), 26);
        assert_eq!(CharacterClass::Lower.characters().chars().count(), 26);
        assert_eq!(CharacterClass::Digits.characters().chars().count(), 10);
        assert_eq!(CharacterClass::Special.characters().chars().count(), 30);
        assert_eq!(CharacterClass::Space.characters(), " ");
    }

    #[test]
    fn strict_lookup_rejects_unknown_ids() {
        assert_eq!(lookup("digits"), Ok("0123456789"));
        assert_eq!(
            lookup("emoji"),
            Err(Error::InvalidClass("emoji".to_string()))
        );
    }

    #[test]
    fn lenient_lookup_maps_unknown_ids_to_empty() {
        assert_eq!(characters_for(&ClassId::from("emoji")), "");
        assert_eq!(characters_for(&ClassId::from(CharacterClass::Space)), " ");
    }
}
