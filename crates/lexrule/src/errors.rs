//! Error enums for definition construction and tokenization runs.

use lexrule_patterns::PatternError;
use thiserror::Error;

/// Errors raised while building a definition or a tokenizer.
///
/// These are always configuration mistakes on the caller's side; nothing
/// here is recovered internally.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigurationError {
    /// The underlying rule source was malformed.
    #[error(transparent)]
    Pattern(#[from] PatternError),
    /// The definition kind label was empty.
    #[error("definition kind must not be empty")]
    EmptyKind,
    /// Both `valid` and `next_valid` were supplied.
    #[error("valid and next_valid are mutually exclusive")]
    ConflictingValidation,
    /// A tokenizer needs at least one definition.
    #[error("a tokenizer needs at least one definition")]
    NoDefinitions,
}

/// Errors raised while tokenizing an input.
///
/// All three abort the whole call: a tokenization either fully succeeds or
/// reports one specific failure, never a partial token list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenizeError {
    /// No active definition's validation rule matched at the current
    /// position.
    #[error("no definition matched the remaining input {remaining:?}")]
    NoDefinitionMatched {
        /// The unconsumed input at the failure position.
        remaining: String,
    },
    /// A validation rule accepted a prefix that its match rule cannot
    /// extract: the `valid`/`next_valid` rule diverges from the match
    /// rule.
    #[error("a definition validated but extracted no value from {remaining:?}")]
    NoValueMatched {
        /// The unconsumed input at the failure position.
        remaining: String,
    },
    /// A deep definition was asked to recurse on a value it is already
    /// recursing on.
    #[error("infinite recursion of {} on {value:?}", .chain.join(" -> "))]
    InfiniteLoop {
        /// The value the recursion failed to shrink.
        value: String,
        /// Definition kinds on the recursion stack, oldest first, followed
        /// by the offending kind.
        chain: Vec<String>,
    },
}
