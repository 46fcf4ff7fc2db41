use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

// ASCII digits only: `\d` would also accept other scripts' digits.
static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{([0-9]+)\}\}").expect("placeholder pattern is valid"));
static LEADING_PLACEHOLDER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\{\{[0-9]+\}\}").expect("leading placeholder pattern is valid")
});
static TRAILING_PLACEHOLDER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{[0-9]+\}\}$").expect("trailing placeholder pattern is valid")
});

/// Returns the digits of every `{{n}}` token in order of appearance, with
/// leading zeros stripped (`{{01}}` and `{{1}}` are the same index).
pub fn scan_placeholder_tokens(text: &str) -> Vec<&str> {
    PLACEHOLDER_RE
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|digits| {
            let trimmed = digits.as_str().trim_start_matches('0');
            if trimmed.is_empty() { "0" } else { trimmed }
        })
        .collect()
}

/// Returns the indices of every `{{n}}` token in order of appearance.
/// Duplicates are kept. An index too large for `u32` saturates to
/// `u32::MAX`, so it still counts and can never look sequential.
pub fn scan_placeholders(text: &str) -> Vec<u32> {
    scan_placeholder_tokens(text)
        .into_iter()
        .map(|digits| digits.parse().unwrap_or(u32::MAX))
        .collect()
}

/// Presence check, independent of numbering.
pub fn has_placeholders(text: &str) -> bool {
    PLACEHOLDER_RE.is_match(text)
}

/// True when the distinct indices are exactly `1..=k` (or there are none).
pub fn is_sequential_unique(indices: &[u32]) -> bool {
    let distinct: BTreeSet<u32> = indices.iter().copied().collect();
    distinct.into_iter().zip(1u32..).all(|(found, expected)| found == expected)
}

/// True when the trimmed text opens or closes with a `{{n}}` token.
pub fn placeholder_at_edge(text: &str) -> bool {
    let trimmed = text.trim();
    LEADING_PLACEHOLDER_RE.is_match(trimmed) || TRAILING_PLACEHOLDER_RE.is_match(trimmed)
}

/// Replaces every `{{n}}` token with `with`.
pub fn substitute_placeholders(text: &str, with: &str) -> String {
    PLACEHOLDER_RE.replace_all(text, with).into_owned()
}

/// Number of distinct indices used in `text`. Compared as digit strings so
/// oversized indices stay distinct from each other.
pub fn distinct_placeholder_count(text: &str) -> usize {
    scan_placeholder_tokens(text)
        .into_iter()
        .collect::<BTreeSet<_>>()
        .len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_keeps_order_and_duplicates() {
        assert_eq!(scan_placeholders("{{2}} and {{1}} then {{2}}"), vec![2, 1, 2]);
        assert!(scan_placeholders("no variables here").is_empty());
    }

    #[test]
    fn malformed_tokens_are_not_placeholders() {
        assert!(scan_placeholders("{{ 1 }} {1} {{x}} {{}}").is_empty());
    }

    #[test]
    fn oversized_indices_are_kept() {
        assert_eq!(
            scan_placeholders("a {{1}} b {{99999999999}}"),
            vec![1, u32::MAX]
        );
        assert!(!is_sequential_unique(&scan_placeholders("{{1}} {{4294967296}}")));
        assert_eq!(
            distinct_placeholder_count("/{{99999999999}}/{{88888888888}}"),
            2
        );
    }

    #[test]
    fn only_ascii_digits_form_placeholders() {
        assert!(scan_placeholders("{{\u{0662}}} {{\u{FF11}}}").is_empty());
        assert!(!has_placeholders("{{\u{0662}}}"));
    }

    #[test]
    fn leading_zeros_name_the_same_index() {
        assert_eq!(scan_placeholder_tokens("{{01}} {{1}} {{007}}"), ["1", "1", "7"]);
        assert_eq!(distinct_placeholder_count("/{{01}}/{{1}}"), 1);
    }

    #[test]
    fn sequential_unique_accepts_contiguous_sets() {
        assert!(is_sequential_unique(&[]));
        assert!(is_sequential_unique(&[1]));
        assert!(is_sequential_unique(&[2, 1, 3]));
        assert!(is_sequential_unique(&[1, 2, 1, 2]));
    }

    #[test]
    fn sequential_unique_rejects_gaps_and_missing_one() {
        assert!(!is_sequential_unique(&[1, 3]));
        assert!(!is_sequential_unique(&[2, 3]));
        assert!(!is_sequential_unique(&[0, 1]));
    }

    #[test]
    fn edge_detection_uses_trimmed_text() {
        assert!(placeholder_at_edge("  {{1}} hello"));
        assert!(placeholder_at_edge("hello {{1}}\n"));
        assert!(!placeholder_at_edge("hello {{1}} there"));
    }

    #[test]
    fn distinct_count_ignores_repeats() {
        assert_eq!(distinct_placeholder_count("/{{1}}/{{1}}"), 1);
        assert_eq!(distinct_placeholder_count("/{{1}}/{{2}}"), 2);
    }

    #[test]
    fn substitution_replaces_every_token() {
        assert_eq!(substitute_placeholders("a{{1}}b{{2}}", "9"), "a9b9");
    }
}
