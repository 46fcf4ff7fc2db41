use crate::validation::issues::UrlIssue;
use crate::validation::placeholder::{distinct_placeholder_count, substitute_placeholders};
use regex::Regex;
use std::sync::LazyLock;
use url::Url;

/// Stand-in value used only to check that a URL with a `{{n}}` segment parses.
const PLACEHOLDER_SAMPLE: &str = "12345";

static SCHEME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*://").expect("scheme pattern is valid")
});
static E164_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+[1-9]\d{7,14}$").expect("E.164 pattern is valid"));

/// Validates the target of a URL button and returns it normalized
/// (trimmed, `https://` added when no scheme was given).
///
/// Checks run in a fixed order and the first failure is returned.
pub fn validate_cta_url(raw: &str) -> Result<String, UrlIssue> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(UrlIssue::Missing);
    }

    let normalized = if SCHEME_RE.is_match(trimmed) {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    };

    let substituted = substitute_placeholders(&normalized, PLACEHOLDER_SAMPLE);
    let parsed = Url::parse(&substituted).map_err(|_| UrlIssue::Unparsable)?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(UrlIssue::UnsupportedScheme);
    }
    if matches!(parsed.host_str(), Some("localhost" | "127.0.0.1")) {
        return Err(UrlIssue::Localhost);
    }

    let raw_host = raw_host(&normalized);
    if raw_host.contains("{{") || raw_host.contains("}}") {
        return Err(UrlIssue::PlaceholderInDomain);
    }
    if distinct_placeholder_count(&normalized) > 1 {
        return Err(UrlIssue::TooManyPlaceholders);
    }

    Ok(normalized)
}

/// Host portion of a URL string before placeholder substitution:
/// between `://` and the first path, query or fragment delimiter, without
/// userinfo or port.
fn raw_host(url: &str) -> &str {
    let after_scheme = url.split_once("://").map_or(url, |(_, rest)| rest);
    let authority = after_scheme
        .split(['/', '?', '#'])
        .next()
        .unwrap_or_default();
    let host_port = authority
        .rsplit_once('@')
        .map_or(authority, |(_, host)| host);
    host_port
        .rsplit_once(':')
        .filter(|(_, port)| port.chars().all(|c| c.is_ascii_digit()))
        .map_or(host_port, |(host, _)| host)
}

/// `+<country><number>`: a leading plus, a non-zero first digit and 8 to 15
/// digits in total. Spaces, dashes and parentheses are not accepted.
pub fn is_e164_phone(raw: &str) -> bool {
    E164_RE.is_match(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_https_url_passes_unchanged() {
        assert_eq!(
            validate_cta_url("https://example.com/survey").as_deref(),
            Ok("https://example.com/survey")
        );
    }

    #[test]
    fn missing_scheme_gets_https() {
        assert_eq!(
            validate_cta_url("  example.com/r/{{1}} ").as_deref(),
            Ok("https://example.com/r/{{1}}")
        );
    }

    #[test]
    fn empty_url_is_required() {
        assert_eq!(validate_cta_url("   "), Err(UrlIssue::Missing));
    }

    #[test]
    fn two_placeholders_are_rejected() {
        let err = validate_cta_url("https://example.com/{{1}}/{{2}}").unwrap_err();
        assert_eq!(err, UrlIssue::TooManyPlaceholders);
        assert!(err.to_string().contains("only one {{n}} placeholder is allowed"));
    }

    #[test]
    fn oversized_second_placeholder_is_still_counted() {
        assert_eq!(
            validate_cta_url("https://example.com/{{1}}/{{99999999999}}"),
            Err(UrlIssue::TooManyPlaceholders)
        );
    }

    #[test]
    fn repeated_single_placeholder_is_allowed() {
        assert!(validate_cta_url("https://example.com/{{1}}?ref={{1}}").is_ok());
    }

    #[test]
    fn placeholder_in_domain_is_rejected() {
        assert_eq!(
            validate_cta_url("https://{{1}}.example.com"),
            Err(UrlIssue::PlaceholderInDomain)
        );
        assert_eq!(
            validate_cta_url("https://user@shop-{{1}}.example.com:8443/x"),
            Err(UrlIssue::PlaceholderInDomain)
        );
    }

    #[test]
    fn localhost_is_rejected() {
        assert_eq!(validate_cta_url("http://localhost:3000/a"), Err(UrlIssue::Localhost));
        assert_eq!(validate_cta_url("127.0.0.1/a"), Err(UrlIssue::Localhost));
    }

    #[test]
    fn non_web_scheme_is_rejected() {
        assert_eq!(
            validate_cta_url("ftp://example.com/file"),
            Err(UrlIssue::UnsupportedScheme)
        );
    }

    #[test]
    fn unparsable_url_is_rejected() {
        assert_eq!(validate_cta_url("https://exa mple.com"), Err(UrlIssue::Unparsable));
    }

    #[test]
    fn raw_host_strips_userinfo_and_port() {
        assert_eq!(raw_host("https://me@example.com:8080/p?q#f"), "example.com");
        assert_eq!(raw_host("https://example.com"), "example.com");
    }

    #[test]
    fn e164_numbers() {
        assert!(is_e164_phone("+15551234567"));
        assert!(is_e164_phone("+12345678"));
        assert!(is_e164_phone("+123456789012345"));
        assert!(!is_e164_phone("5551234567"));
        assert!(!is_e164_phone("+0123456789"));
        assert!(!is_e164_phone("+1234567"));
        assert!(!is_e164_phone("+1234567890123456"));
        assert!(!is_e164_phone("+1 555 123 4567"));
    }
}
