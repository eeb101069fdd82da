//! Detection of caller-supplied start-of-string anchors.

/// True when `pattern` opens with `^`, looking through up to two wrapping
/// parentheses. The engine anchors every rule itself, so a nested anchor
/// would silently change meaning once the rule is embedded in an
/// alternation.
pub(crate) fn starts_with_anchor(pattern: &str) -> bool {
    let mut rest = pattern.as_bytes();
    for _ in 0..=2 {
        match rest.split_first() {
            Some((b'^', _)) => return true,
            Some((b'(', tail)) => {
                rest = tail;
                // a group-kind prefix such as `?:` may sit between the
                // parenthesis and the anchor
                if let Some(stripped) = rest.strip_prefix(b"?:") {
                    rest = stripped;
                }
            }
            _ => return false,
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("^foo")]
    #[case("(^foo)")]
    #[case("((^foo))")]
    #[case("(?:^foo)")]
    #[case("((?:^foo))")]
    fn detects_nested_anchors(#[case] pattern: &str) {
        assert!(starts_with_anchor(pattern));
    }

    #[rstest]
    #[case("foo")]
    #[case("(foo)")]
    #[case(r"\^foo")]
    #[case("[^a-z]+")]
    #[case("(((^deeper)))")]
    fn accepts_unanchored_patterns(#[case] pattern: &str) {
        assert!(!starts_with_anchor(pattern));
    }
}
