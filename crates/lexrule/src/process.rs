//! The layered token-processing pipeline.

use std::sync::Arc;

use crate::token::Token;

/// A transformation applied to a freshly built token.
///
/// Processors are expected to be pure and to preserve the token kind so
/// downstream consumers can keep relying on it; the engine enforces
/// neither. They run in a fixed order per token: the definition's own
/// hook, then the per-call hook, then the engine-level hook.
pub type TokenProcessor = Arc<dyn Fn(Token) -> Token + Send + Sync>;

/// Wrap a closure as a shareable processor.
#[must_use]
pub fn processor<F>(hook: F) -> TokenProcessor
where
    F: Fn(Token) -> Token + Send + Sync + 'static,
{
    Arc::new(hook)
}

/// Run the pipeline stages over `token`, skipping absent stages.
pub(crate) fn run_pipeline(token: Token, stages: [Option<&TokenProcessor>; 3]) -> Token {
    let mut token = token;
    for stage in stages.into_iter().flatten() {
        token = stage(token);
    }
    token
}
