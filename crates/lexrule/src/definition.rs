//! Pattern definitions: compiled matching rules plus behaviour flags.

use std::fmt;

use lexrule_patterns::{
    ExtractedMatch, RuleSource, build_match_source, compile_anchored, extract_match,
};
use regex::Regex;

use crate::errors::ConfigurationError;
use crate::process::TokenProcessor;

/// Caller-facing description of one definition, consumed by
/// [`compile_definition`].
///
/// Exactly one of `value`, `values`, `pattern`, and `patterns` must be
/// populated. The builder methods cover the common path; the fields stay
/// public for callers that assemble specs from their own configuration
/// layer.
pub struct DefinitionSpec {
    /// Kind label for emitted tokens. Need not be unique across a
    /// definition list.
    pub kind: String,
    /// Single literal source, escaped automatically.
    pub value: Option<String>,
    /// List-of-literals source, each escaped automatically.
    pub values: Option<Vec<String>>,
    /// Single raw pattern source, used as written.
    pub pattern: Option<String>,
    /// List-of-patterns source, alternated in order.
    pub patterns: Option<Vec<String>>,
    /// Flags applied to the match rule; the global-search flag is
    /// stripped.
    pub flags: Option<String>,
    /// Whether the match must end at a word boundary. Defaults to true;
    /// disable it to match fragments of a larger token.
    pub word_boundary: bool,
    /// Consume matches silently, emitting no token.
    pub skip: bool,
    /// Re-tokenize the matched value into child tokens.
    pub deep: bool,
    /// Replacement pattern for the yes/no validation test only.
    pub valid: Option<String>,
    /// Flags applied to the validation rule.
    pub valid_flags: Option<String>,
    /// Pattern that must match immediately after the match rule for the
    /// definition to be eligible.
    pub next_valid: Option<String>,
    /// Definition-local processing hook, the first pipeline stage.
    pub process: Option<TokenProcessor>,
}

impl DefinitionSpec {
    /// Start a spec for a definition emitting tokens of `kind`.
    #[must_use]
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            ..Self::default()
        }
    }

    /// Use a single literal as the matching source.
    #[must_use]
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Use a list of literals as the matching source.
    #[must_use]
    pub fn values(mut self, values: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.values = Some(values.into_iter().map(Into::into).collect());
        self
    }

    /// Use a single raw pattern as the matching source.
    #[must_use]
    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    /// Use a list of raw patterns as the matching source.
    #[must_use]
    pub fn patterns(mut self, patterns: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.patterns = Some(patterns.into_iter().map(Into::into).collect());
        self
    }

    /// Set the match-rule flags.
    #[must_use]
    pub fn flags(mut self, flags: impl Into<String>) -> Self {
        self.flags = Some(flags.into());
        self
    }

    /// Enable or disable the word-boundary guard.
    #[must_use]
    pub fn word_boundary(mut self, word_boundary: bool) -> Self {
        self.word_boundary = word_boundary;
        self
    }

    /// Mark matches as silently consumed.
    #[must_use]
    pub fn skip(mut self, skip: bool) -> Self {
        self.skip = skip;
        self
    }

    /// Mark the matched value for re-tokenization into children.
    #[must_use]
    pub fn deep(mut self, deep: bool) -> Self {
        self.deep = deep;
        self
    }

    /// Replace the validation rule with `valid`.
    #[must_use]
    pub fn valid(mut self, valid: impl Into<String>) -> Self {
        self.valid = Some(valid.into());
        self
    }

    /// Set the validation-rule flags.
    #[must_use]
    pub fn valid_flags(mut self, valid_flags: impl Into<String>) -> Self {
        self.valid_flags = Some(valid_flags.into());
        self
    }

    /// Require `next_valid` to match immediately after the match rule.
    #[must_use]
    pub fn next_valid(mut self, next_valid: impl Into<String>) -> Self {
        self.next_valid = Some(next_valid.into());
        self
    }

    /// Attach a definition-local processing hook.
    #[must_use]
    pub fn process(mut self, process: TokenProcessor) -> Self {
        self.process = Some(process);
        self
    }
}

impl Default for DefinitionSpec {
    fn default() -> Self {
        Self {
            kind: String::new(),
            value: None,
            values: None,
            pattern: None,
            patterns: None,
            flags: None,
            word_boundary: true,
            skip: false,
            deep: false,
            valid: None,
            valid_flags: None,
            next_valid: None,
            process: None,
        }
    }
}

impl fmt::Debug for DefinitionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DefinitionSpec")
            .field("kind", &self.kind)
            .field("value", &self.value)
            .field("values", &self.values)
            .field("pattern", &self.pattern)
            .field("patterns", &self.patterns)
            .field("flags", &self.flags)
            .field("word_boundary", &self.word_boundary)
            .field("skip", &self.skip)
            .field("deep", &self.deep)
            .field("valid", &self.valid)
            .field("valid_flags", &self.valid_flags)
            .field("next_valid", &self.next_valid)
            .field("process", &self.process.is_some())
            .finish()
    }
}

/// A compiled, immutable pattern definition.
///
/// Built once via [`compile_definition`], then reused read-only across
/// arbitrarily many tokenizations; the engine never mutates it.
pub struct Definition {
    kind: String,
    match_rule: Regex,
    match_source: String,
    validation: Regex,
    word_bounded: bool,
    skip: bool,
    deep: bool,
    process: Option<TokenProcessor>,
}

impl Definition {
    /// Kind label copied onto emitted tokens.
    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Whether the match rule carries the word-boundary guard.
    #[must_use]
    pub fn is_word_bounded(&self) -> bool {
        self.word_bounded
    }

    /// Whether matches are consumed silently.
    #[must_use]
    pub fn is_skip(&self) -> bool {
        self.skip
    }

    /// Whether matched values are re-tokenized into children.
    #[must_use]
    pub fn is_deep(&self) -> bool {
        self.deep
    }

    pub(crate) fn process_hook(&self) -> Option<&TokenProcessor> {
        self.process.as_ref()
    }

    /// True iff the validation rule matches at the start of `remaining`.
    #[must_use]
    pub fn matches(&self, remaining: &str) -> bool {
        self.validation.is_match(remaining)
    }

    /// Attempt the match rule at the start of `remaining`.
    ///
    /// `None` is a legitimate runtime outcome, not a bug: a divergent
    /// `valid`/`next_valid` rule can accept a prefix the match rule
    /// itself cannot extract.
    #[must_use]
    pub fn extract(&self, remaining: &str) -> Option<ExtractedMatch> {
        extract_match(&self.match_rule, remaining)
    }

    /// The match-rule source text, without the engine's own anchor.
    ///
    /// Pure and side-effect free, so one definition's rule can be
    /// embedded verbatim inside another definition's pattern while that
    /// definition is being constructed.
    #[must_use]
    pub fn as_pattern_str(&self) -> &str {
        &self.match_source
    }
}

impl fmt::Display for Definition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.match_source)
    }
}

impl fmt::Debug for Definition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Definition")
            .field("kind", &self.kind)
            .field("match_source", &self.match_source)
            .field("validation", &self.validation.as_str())
            .field("word_bounded", &self.word_bounded)
            .field("skip", &self.skip)
            .field("deep", &self.deep)
            .field("process", &self.process.is_some())
            .finish()
    }
}

/// Compile a [`DefinitionSpec`] into a reusable [`Definition`].
///
/// This is the sole construction entry point: it selects the populated
/// source form, assembles and compiles the anchored match rule, and
/// derives the validation rule (the match rule itself, a `valid`
/// replacement, or the match rule followed by `next_valid`).
///
/// # Errors
/// Returns [`ConfigurationError`] for an empty kind, conflicting
/// `valid`/`next_valid`, or any rule-source failure (missing, ambiguous,
/// or empty sources, nested anchors, unsupported flags, regex compile
/// errors).
pub fn compile_definition(spec: DefinitionSpec) -> Result<Definition, ConfigurationError> {
    let DefinitionSpec {
        kind,
        value,
        values,
        pattern,
        patterns,
        flags,
        word_boundary,
        skip,
        deep,
        valid,
        valid_flags,
        next_valid,
        process,
    } = spec;
    if kind.is_empty() {
        return Err(ConfigurationError::EmptyKind);
    }
    let source = RuleSource::from_parts(value, values, pattern, patterns)?;
    let match_source = build_match_source(&source, word_boundary, flags.as_deref())?;
    let match_rule = compile_anchored(&match_source)?;
    let validation_source = match (valid, next_valid) {
        (Some(_), Some(_)) => return Err(ConfigurationError::ConflictingValidation),
        (Some(valid), None) => build_match_source(
            &RuleSource::Pattern(valid),
            word_boundary,
            valid_flags.as_deref(),
        )?,
        (None, Some(next_valid)) => {
            let follow = build_match_source(
                &RuleSource::Pattern(next_valid),
                false,
                valid_flags.as_deref(),
            )?;
            format!("{match_source}{follow}")
        }
        (None, None) => match_source.clone(),
    };
    let validation = compile_anchored(&validation_source)?;
    Ok(Definition {
        kind,
        match_rule,
        match_source,
        validation,
        word_bounded: word_boundary,
        skip,
        deep,
        process,
    })
}
