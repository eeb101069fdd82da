//! Normalisation of caller-supplied rule flags.

use crate::errors::PatternError;

/// Inline flags the `regex` crate understands.
const SUPPORTED: &str = "imsxuU";

/// Normalise a caller-supplied flag string.
///
/// The global-search flag `g` is always stripped: a rule is only ever tried
/// once, anchored at the start of the remaining input, so repeated-search
/// semantics have no meaning here. The surviving flags must belong to the
/// inline set and are deduplicated, preserving first occurrence order.
///
/// # Errors
/// Returns [`PatternError::UnsupportedFlag`] for any flag outside the
/// supported set.
pub fn normalize_flags(flags: &str) -> Result<String, PatternError> {
    let mut normalized = String::with_capacity(flags.len());
    for flag in flags.chars() {
        if flag == 'g' {
            continue;
        }
        if !SUPPORTED.contains(flag) {
            return Err(PatternError::UnsupportedFlag { flag });
        }
        if !normalized.contains(flag) {
            normalized.push(flag);
        }
    }
    Ok(normalized)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", "")]
    #[case("g", "")]
    #[case("gi", "i")]
    #[case("ig", "i")]
    #[case("misg", "mis")]
    #[case("iig", "i")]
    fn strips_global_and_deduplicates(#[case] flags: &str, #[case] expected: &str) {
        let Ok(normalized) = normalize_flags(flags) else {
            panic!("flags {flags:?} should normalise");
        };
        assert_eq!(normalized, expected);
    }

    #[rstest]
    #[case("y")]
    #[case("iq")]
    #[case("g!")]
    fn rejects_unknown_flags(#[case] flags: &str) {
        assert!(matches!(
            normalize_flags(flags),
            Err(PatternError::UnsupportedFlag { .. })
        ));
    }
}
