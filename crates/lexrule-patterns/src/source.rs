//! The mutually-exclusive rule source forms.

use crate::errors::PatternError;

/// The matching source of a rule: exactly one of the four supported forms.
///
/// Literal forms are escaped with [`regex::escape`] so metacharacters match
/// themselves; pattern forms are used as written and the caller is
/// responsible for any escaping. List forms become an alternation in the
/// given order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleSource {
    /// A single literal, matched verbatim.
    Literal(String),
    /// Several literals, alternated in the given order.
    Literals(Vec<String>),
    /// A single regular-expression fragment.
    Pattern(String),
    /// Several regular-expression fragments, alternated in the given order.
    Patterns(Vec<String>),
}

impl RuleSource {
    /// Select the populated source form out of the four optional parts.
    ///
    /// This is the configuration boundary: callers hand over whatever
    /// combination they were given, and exactly one form must be present.
    ///
    /// # Errors
    /// Returns [`PatternError::MissingSource`] when no form is populated,
    /// [`PatternError::AmbiguousSource`] when more than one is, and
    /// [`PatternError::EmptySource`] when the populated form is empty or
    /// contains an empty entry.
    pub fn from_parts(
        value: Option<String>,
        values: Option<Vec<String>>,
        pattern: Option<String>,
        patterns: Option<Vec<String>>,
    ) -> Result<Self, PatternError> {
        let mut candidates = Vec::with_capacity(1);
        if let Some(value) = value {
            candidates.push(Self::Literal(value));
        }
        if let Some(values) = values {
            candidates.push(Self::Literals(values));
        }
        if let Some(pattern) = pattern {
            candidates.push(Self::Pattern(pattern));
        }
        if let Some(patterns) = patterns {
            candidates.push(Self::Patterns(patterns));
        }
        if candidates.len() > 1 {
            return Err(PatternError::AmbiguousSource);
        }
        let source = candidates.pop().ok_or(PatternError::MissingSource)?;
        source.ensure_populated()?;
        Ok(source)
    }

    /// Render the alternation body, escaping literal forms.
    #[must_use]
    pub fn alternation(&self) -> String {
        match self {
            Self::Literal(value) => regex::escape(value),
            Self::Literals(entries) => entries
                .iter()
                .map(|entry| regex::escape(entry))
                .collect::<Vec<_>>()
                .join("|"),
            Self::Pattern(pattern) => pattern.clone(),
            Self::Patterns(entries) => entries.join("|"),
        }
    }

    /// Raw regex fragments of this source; empty for literal forms.
    pub(crate) fn raw_fragments(&self) -> &[String] {
        match self {
            Self::Literal(_) | Self::Literals(_) => &[],
            Self::Pattern(pattern) => std::slice::from_ref(pattern),
            Self::Patterns(entries) => entries.as_slice(),
        }
    }

    fn ensure_populated(&self) -> Result<(), PatternError> {
        let empty = match self {
            Self::Literal(value) | Self::Pattern(value) => value.is_empty(),
            Self::Literals(entries) | Self::Patterns(entries) => {
                entries.is_empty() || entries.iter().any(String::is_empty)
            }
        };
        if empty {
            return Err(PatternError::EmptySource);
        }
        Ok(())
    }
}
