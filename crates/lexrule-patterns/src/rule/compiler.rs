//! Assembly of rule sources into regular-expression source text.

use crate::errors::PatternError;
use crate::source::RuleSource;

use super::anchor::starts_with_anchor;
use super::flags::normalize_flags;

/// Build the match-rule source for `source`.
///
/// The alternation is rendered as `(alt1|alt2|...)`. With `word_boundary`
/// the group is followed by `\b`, so a match cannot stop mid-word; without
/// it the raw alternation is used unguarded. Normalised flags wrap the
/// whole rendering as a `(?flags:...)` group.
///
/// The result is not yet anchored: [`compile_anchored`] prepends the `^`
/// when the rule is compiled, which keeps the returned text embeddable
/// inside other rules.
///
/// [`compile_anchored`]: crate::compile_anchored
///
/// # Errors
/// Returns [`PatternError::NestedAnchor`] when a raw fragment carries its
/// own start-of-string anchor, or [`PatternError::UnsupportedFlag`] for a
/// flag outside the inline set.
pub fn build_match_source(
    source: &RuleSource,
    word_boundary: bool,
    flags: Option<&str>,
) -> Result<String, PatternError> {
    for fragment in source.raw_fragments() {
        if starts_with_anchor(fragment) {
            return Err(PatternError::NestedAnchor {
                pattern: fragment.clone(),
            });
        }
    }
    let mut rendered = format!("({})", source.alternation());
    if word_boundary {
        rendered.push_str(r"\b");
    }
    if let Some(flags) = flags {
        let normalized = normalize_flags(flags)?;
        if !normalized.is_empty() {
            rendered = format!("(?{normalized}:{rendered})");
        }
    }
    Ok(rendered)
}
