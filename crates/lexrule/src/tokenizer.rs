//! The tokenizer engine: ordered matching, deep recursion, loop safety.

use std::sync::Arc;

use crate::definition::Definition;
use crate::errors::{ConfigurationError, TokenizeError};
use crate::process::{TokenProcessor, run_pipeline};
use crate::token::Token;

/// One in-flight deep recursion: the definition descending into its own
/// match, and the exact value it is recursing on.
struct Frame {
    definition: Arc<Definition>,
    value: String,
}

/// A reusable tokenizer over an ordered definition list.
///
/// List order is priority order: at each position the first definition
/// whose validation rule matches wins, even when a later definition would
/// consume more text. Definitions are held behind shared read-only
/// handles, so the top-level pass and every deep recursion reference the
/// same compiled rules without copying, and a tokenizer can serve
/// concurrent calls from multiple threads.
pub struct Tokenizer {
    definitions: Vec<Arc<Definition>>,
    hook: Option<TokenProcessor>,
}

impl Tokenizer {
    /// Build a tokenizer over `definitions`.
    ///
    /// # Errors
    /// Returns [`ConfigurationError::NoDefinitions`] when the list is
    /// empty.
    pub fn new(
        definitions: impl IntoIterator<Item = Definition>,
    ) -> Result<Self, ConfigurationError> {
        Self::build(definitions, None)
    }

    /// Build a tokenizer with an engine-level hook, run as the last
    /// pipeline stage for every emitted token.
    ///
    /// # Errors
    /// Returns [`ConfigurationError::NoDefinitions`] when the list is
    /// empty.
    pub fn with_hook(
        definitions: impl IntoIterator<Item = Definition>,
        hook: TokenProcessor,
    ) -> Result<Self, ConfigurationError> {
        Self::build(definitions, Some(hook))
    }

    fn build(
        definitions: impl IntoIterator<Item = Definition>,
        hook: Option<TokenProcessor>,
    ) -> Result<Self, ConfigurationError> {
        let definitions: Vec<_> = definitions.into_iter().map(Arc::new).collect();
        if definitions.is_empty() {
            return Err(ConfigurationError::NoDefinitions);
        }
        Ok(Self { definitions, hook })
    }

    /// Tokenize `input` into the complete token sequence.
    ///
    /// An empty input yields an empty sequence. On failure nothing is
    /// returned: tokens produced before the failure point are discarded.
    ///
    /// # Errors
    /// Returns [`TokenizeError::NoDefinitionMatched`] when no active
    /// definition is eligible at the current position,
    /// [`TokenizeError::NoValueMatched`] when a validation rule accepted
    /// a prefix its match rule cannot extract, and
    /// [`TokenizeError::InfiniteLoop`] when a deep definition recurses on
    /// a value it is already recursing on.
    pub fn tokenize(&self, input: &str) -> Result<Vec<Token>, TokenizeError> {
        self.tokenize_level(input, None, &mut Vec::new())
    }

    /// Tokenize `input` with a per-call hook, run between each
    /// definition's own hook and the engine-level hook.
    ///
    /// # Errors
    /// As for [`tokenize`](Self::tokenize).
    pub fn tokenize_with(
        &self,
        input: &str,
        call_hook: &TokenProcessor,
    ) -> Result<Vec<Token>, TokenizeError> {
        self.tokenize_level(input, Some(call_hook), &mut Vec::new())
    }

    /// One recursion level over `input`.
    ///
    /// `stack` holds the in-flight deep recursions, oldest first. The
    /// newest frame is the recursion this level is the body of; its
    /// definition is excluded from matching here so a deep definition
    /// cannot immediately re-match its own output. Ancestors further up
    /// stay eligible: re-entry on a different value is a legitimate
    /// recursive grammar, and re-entry on the same value is caught by the
    /// loop check.
    fn tokenize_level(
        &self,
        input: &str,
        call_hook: Option<&TokenProcessor>,
        stack: &mut Vec<Frame>,
    ) -> Result<Vec<Token>, TokenizeError> {
        let excluded = stack.last().map(|frame| Arc::clone(&frame.definition));
        let mut remaining = input;
        let mut tokens = Vec::new();
        while !remaining.is_empty() {
            let definition = self
                .first_match(remaining, excluded.as_ref())
                .ok_or_else(|| TokenizeError::NoDefinitionMatched {
                    remaining: remaining.to_string(),
                })?;
            let Some(extracted) = definition.extract(remaining) else {
                return Err(TokenizeError::NoValueMatched {
                    remaining: remaining.to_string(),
                });
            };
            log::trace!("{} matched {:?}", definition.kind(), extracted.value);
            remaining = remaining.get(extracted.length..).unwrap_or("");
            if let Some(chain) = loop_chain(stack, definition, &extracted.value) {
                return Err(TokenizeError::InfiniteLoop {
                    value: extracted.value,
                    chain,
                });
            }
            if definition.is_skip() {
                continue;
            }
            let mut token = Token {
                kind: definition.kind().to_string(),
                value: extracted.value,
                data: extracted.data,
                children: None,
            };
            if definition.is_deep() {
                token.children = Some(self.descend(definition, &token.value, call_hook, stack)?);
            }
            token = run_pipeline(
                token,
                [definition.process_hook(), call_hook, self.hook.as_ref()],
            );
            tokens.push(token);
        }
        Ok(tokens)
    }

    /// Recursively tokenize the value a deep definition just matched.
    fn descend(
        &self,
        definition: &Arc<Definition>,
        value: &str,
        call_hook: Option<&TokenProcessor>,
        stack: &mut Vec<Frame>,
    ) -> Result<Vec<Token>, TokenizeError> {
        log::debug!("descending into {} on {:?}", definition.kind(), value);
        stack.push(Frame {
            definition: Arc::clone(definition),
            value: value.to_string(),
        });
        let children = self.tokenize_level(value, call_hook, stack);
        stack.pop();
        children
    }

    /// First active definition, in list order, whose validation rule
    /// matches. Later definitions at the same position are never tested.
    fn first_match(
        &self,
        remaining: &str,
        excluded: Option<&Arc<Definition>>,
    ) -> Option<&Arc<Definition>> {
        self.definitions
            .iter()
            .filter(|definition| {
                excluded.is_none_or(|excluded| !Arc::ptr_eq(excluded, definition))
            })
            .find(|definition| definition.matches(remaining))
    }
}

impl std::fmt::Debug for Tokenizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tokenizer")
            .field("definitions", &self.definitions)
            .field("hook", &self.hook.is_some())
            .finish()
    }
}

/// The recursion chain to report when `definition` is already recursing
/// on `value`, or `None` when no loop is forming.
fn loop_chain(stack: &[Frame], definition: &Arc<Definition>, value: &str) -> Option<Vec<String>> {
    let looping = stack
        .iter()
        .any(|frame| Arc::ptr_eq(&frame.definition, definition) && frame.value == value);
    if !looping {
        return None;
    }
    let mut chain: Vec<String> = stack
        .iter()
        .map(|frame| frame.definition.kind().to_string())
        .collect();
    chain.push(definition.kind().to_string());
    Some(chain)
}
