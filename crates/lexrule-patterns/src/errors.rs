//! Error types shared by the rule-construction modules.

use thiserror::Error;

/// Errors surfaced while turning rule sources into regular expressions.
///
/// Every variant is a construction-time failure: once a rule compiles, the
/// only runtime outcomes are "matched" and "did not match".
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PatternError {
    /// No source form was supplied at all.
    #[error("a rule needs a literal value, a list of values, a pattern, or a list of patterns")]
    MissingSource,
    /// More than one source form was supplied.
    #[error("value, values, pattern, and patterns are mutually exclusive")]
    AmbiguousSource,
    /// A source form was empty or contained an empty entry.
    #[error("rule sources must not be empty")]
    EmptySource,
    /// A raw pattern carried its own start-of-string anchor.
    #[error(
        "pattern {pattern:?} must not carry a start-of-string anchor; matching is always anchored"
    )]
    NestedAnchor {
        /// The offending pattern text as supplied by the caller.
        pattern: String,
    },
    /// A flag outside the supported inline set was supplied.
    #[error("unsupported rule flag {flag:?}")]
    UnsupportedFlag {
        /// The flag character that was rejected.
        flag: char,
    },
    /// The assembled source failed to compile as a regular expression.
    #[error(transparent)]
    Regex(#[from] regex::Error),
}
