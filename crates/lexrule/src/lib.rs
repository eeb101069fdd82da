//! A configurable, recursive, regex-driven tokenizer.
//!
//! An ordered list of compiled [`Definition`]s is matched greedily against
//! an input string: at each position the first definition in list order
//! whose validation rule matches wins, its match rule extracts the
//! consumed text, and the cursor advances. Skip definitions consume input
//! silently; deep definitions re-tokenize their own match into child
//! tokens, with value-sensitive loop detection guarding mutual recursion.
//! Every emitted token runs through a three-stage processing pipeline:
//! the definition's own hook, the per-call hook, then the engine hook.
//!
//! A tokenization either fully succeeds or fails with one specific
//! error; there is no partial output and no recovery.
//!
//! ```
//! use lexrule::{DefinitionSpec, Tokenizer, compile_definition};
//!
//! let word = compile_definition(
//!     DefinitionSpec::new("word").pattern("[^ ]+").word_boundary(false),
//! )?;
//! let space = compile_definition(
//!     DefinitionSpec::new("space")
//!         .pattern("[ ]+")
//!         .word_boundary(false)
//!         .skip(true),
//! )?;
//! let tokens = Tokenizer::new([word, space])?.tokenize("not all those who wander")?;
//! assert_eq!(tokens.len(), 5);
//! assert_eq!(tokens.first().map(|t| t.value.as_str()), Some("not"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod definition;
mod errors;
mod process;
mod token;
mod tokenizer;

pub use definition::{Definition, DefinitionSpec, compile_definition};
pub use errors::{ConfigurationError, TokenizeError};
pub use process::{TokenProcessor, processor};
pub use token::Token;
pub use tokenizer::Tokenizer;

// Re-export the shared rule-compilation types so most callers never need
// the patterns crate directly.
pub use lexrule_patterns::{ExtractedMatch, PatternError, RuleSource, VALUE_GROUP};
