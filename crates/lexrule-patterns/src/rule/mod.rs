//! Rule-source assembly and compilation.

mod anchor;
mod compiler;
mod flags;

use regex::Regex;

use crate::errors::PatternError;

pub use compiler::build_match_source;
pub use flags::normalize_flags;

/// Compile a rule source into a regex anchored at the start of its input.
///
/// Rules are prefix matchers: every test happens at position 0 of whatever
/// remaining text they are handed, never mid-string.
///
/// # Errors
/// Returns [`PatternError::Regex`] when the anchored source fails to
/// compile.
pub fn compile_anchored(source: &str) -> Result<Regex, PatternError> {
    Regex::new(&format!("^{source}")).map_err(PatternError::from)
}
