//! Capture extraction shared with the engine crate.

use std::collections::BTreeMap;

use regex::Regex;

/// Name of the capture group whose content replaces the whole match as the
/// extracted value. This lets a rule match surrounding context without that
/// context appearing in the emitted token.
pub const VALUE_GROUP: &str = "value";

/// Outcome of extracting an anchored rule match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedMatch {
    /// Number of bytes the match consumed from the input.
    pub length: usize,
    /// Effective value: the [`VALUE_GROUP`] capture when present, otherwise
    /// the whole match.
    pub value: String,
    /// Remaining named captures, keyed by group name. Groups that did not
    /// participate in the match are absent.
    pub data: BTreeMap<String, String>,
}

/// Extract the match of `rule` at the start of `text`, returning `None`
/// when the rule does not match there.
///
/// `rule` is expected to be anchored (see
/// [`compile_anchored`](crate::compile_anchored)); the consumed
/// length is the end offset of the whole match, which may exceed the
/// length of the effective value when a [`VALUE_GROUP`] capture narrows
/// it.
#[must_use]
pub fn extract_match(rule: &Regex, text: &str) -> Option<ExtractedMatch> {
    let caps = rule.captures(text)?;
    let whole = caps.get(0)?;
    let value = caps
        .name(VALUE_GROUP)
        .map_or_else(|| whole.as_str().to_string(), |m| m.as_str().to_string());
    let mut data = BTreeMap::new();
    for name in rule.capture_names().flatten() {
        if name == VALUE_GROUP {
            continue;
        }
        if let Some(capture) = caps.name(name) {
            data.insert(name.to_string(), capture.as_str().to_string());
        }
    }
    Some(ExtractedMatch {
        length: whole.end(),
        value,
        data,
    })
}
