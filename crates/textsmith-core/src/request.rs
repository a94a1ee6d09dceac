use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::charset::ClassId;

/// Request to generate characters into a buffer.
///
/// `count` and `full_length` are signed so that negative input coming from a
/// caller can be reported instead of being rejected while parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct GenerateRequest {
    /// Classes the new characters are drawn from.
    pub classes: Vec<ClassId>,
    /// Number of characters to produce.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,
    /// Ceiling on the final buffer length.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_length: Option<i64>,
}

impl GenerateRequest {
    pub fn new<I, C>(classes: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<ClassId>,
    {
        Self {
            classes: classes.into_iter().map(Into::into).collect(),
            count: None,
            full_length: None,
        }
    }

    pub fn with_count(mut self, count: i64) -> Self {
        self.count = Some(count);
        self
    }

    pub fn with_full_length(mut self, full_length: i64) -> Self {
        self.full_length = Some(full_length);
        self
    }
}

/// How a removal request names the characters to strip.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum RemoveMode {
    #[default]
    Selection,
    Custom,
}

/// Request to strip characters from a buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RemoveRequest {
    pub mode: RemoveMode,
    /// Classes whose characters are removed.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<ClassId>,
    /// Individual characters to remove, unioned with `classes`.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub literal_chars: String,
}

impl RemoveRequest {
    pub fn selection<I, C>(classes: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<ClassId>,
    {
        Self {
            mode: RemoveMode::Selection,
            classes: classes.into_iter().map(Into::into).collect(),
            literal_chars: String::new(),
        }
    }

    pub fn custom(literal_chars: impl Into<String>) -> Self {
        Self {
            mode: RemoveMode::Custom,
            classes: Vec::new(),
            literal_chars: literal_chars.into(),
        }
    }
}

/// A literal `from -> to` substitution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ReplacePair {
    pub from: String,
    #[serde(default)]
    pub to: String,
}

impl ReplacePair {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// Request to rewrite characters in a buffer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ReplaceRequest {
    /// Replace every character of the `from` classes with a random character
    /// drawn from the `to` classes.
    Selection {
        #[serde(default)]
        from: Vec<ClassId>,
        #[serde(default)]
        to: Vec<ClassId>,
    },
    /// Apply literal pairs in order, each one globally.
    Custom {
        #[serde(default)]
        pairs: Vec<ReplacePair>,
    },
}

impl ReplaceRequest {
    pub fn selection<F, T, C, D>(from: F, to: T) -> Self
    where
        F: IntoIterator<Item = C>,
        T: IntoIterator<Item = D>,
        C: Into<ClassId>,
        D: Into<ClassId>,
    {
        ReplaceRequest::Selection {
            from: from.into_iter().map(Into::into).collect(),
            to: to.into_iter().map(Into::into).collect(),
        }
    }

    pub fn custom(pairs: impl IntoIterator<Item = ReplacePair>) -> Self {
        ReplaceRequest::Custom {
            pairs: pairs.into_iter().collect(),
        }
    }
}
