//! The token value type produced by the engine.

use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One matched region of the input.
///
/// Tokens are plain values: the engine builds one per non-skip match,
/// passes it through the processing pipeline, and appends the result to
/// the output sequence, after which it is never touched again. The fields
/// are public so processing hooks can rewrite them freely.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Token {
    /// Kind label copied from the matching definition.
    pub kind: String,
    /// Effective matched text: the whole match, or the `value` capture
    /// when the rule designates one.
    pub value: String,
    /// Named captures other than `value`, keyed by group name.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "BTreeMap::is_empty")
    )]
    pub data: BTreeMap<String, String>,
    /// Child tokens, present only when the matching definition is deep.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub children: Option<Vec<Token>>,
}

impl Token {
    /// Construct a childless token with no extra data.
    #[must_use]
    pub fn new(kind: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            value: value.into(),
            data: BTreeMap::new(),
            children: None,
        }
    }
}
