use crate::model::report::TemplateReport;
use crate::model::template::{Body, Components, Footer, Header, Template, TemplateCategory};
use crate::validation::buttons::validate_buttons;
use crate::validation::fields::{validate_body, validate_footer, validate_header};
use crate::validation::issues::{Findings, TemplateError, TemplateWarning};
use crate::validation::name::normalize_template_name;
use crate::validation::placeholder::scan_placeholders;
use log::debug;
use regex::Regex;
use std::sync::LazyLock;

/// Bodies shorter than this that look like test copy get a warning.
const SAMPLE_CONTENT_MAX_CHARS: usize = 50;

// Anchored at the start of a word only, so inflections ("offers",
// "discounted", "testing123") match while "wholesale" does not.
static PROMOTIONAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(sale|offer|discount|buy now|shop now)")
        .expect("promotional pattern is valid")
});
static SAMPLE_CONTENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(test|testing|hello world|sample)").expect("sample pattern is valid")
});
static NEWLINES_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\r\n]+").expect("newline pattern is valid"));

/// Runs every template rule once and reports all findings together.
///
/// Never fails: problems end up in `errors` (blocking) or `warnings`
/// (advisory), and `normalized` is always filled in.
pub fn validate_template_for_meta(template: &Template) -> TemplateReport {
    let mut findings = Findings::default();

    let slug = normalize_template_name(&template.name);
    if slug.is_empty() {
        findings.error(TemplateError::NameRequired);
    } else if slug != template.name {
        findings.warn(TemplateWarning::NameNormalized { slug: slug.clone() });
    }

    match template.category {
        TemplateCategory::Unrecognized => findings.error(TemplateError::UnknownCategory),
        TemplateCategory::Marketing => findings.warn(TemplateWarning::MarketingCategory),
        TemplateCategory::Utility | TemplateCategory::Authentication => {}
    }

    let components = &template.components;
    let header_placeholders = match &components.header {
        Header::Text { text } => scan_placeholders(text),
        _ => Vec::new(),
    };
    validate_header(&components.header, &header_placeholders, &mut findings);

    let body = components.body.text.as_str();
    validate_body(body, &scan_placeholders(body), &mut findings);
    validate_footer(&components.footer.text, &mut findings);

    let buttons = validate_buttons(&components.buttons, &mut findings);

    content_heuristics(template.category, body, &mut findings);

    let normalized = Template {
        name: slug,
        language: template.language.clone(),
        category: template.category,
        components: Components {
            header: normalize_header(&components.header),
            body: Body {
                text: body.trim().to_string(),
            },
            footer: Footer {
                text: components.footer.text.trim().to_string(),
            },
            buttons,
        },
    };

    let (errors, warnings) = findings.into_parts();
    debug!(
        "validated template '{}' ({}): {} error(s), {} warning(s)",
        normalized.name,
        template.category.as_str(),
        errors.len(),
        warnings.len()
    );

    TemplateReport {
        ok: errors.is_empty(),
        errors,
        warnings,
        normalized,
    }
}

/// Guesses about how Meta reviews content. Warnings only.
fn content_heuristics(category: TemplateCategory, body: &str, findings: &mut Findings) {
    if category == TemplateCategory::Utility && PROMOTIONAL_RE.is_match(body) {
        findings.warn(TemplateWarning::PromotionalUtility);
    }
    let trimmed = body.trim();
    if trimmed.chars().count() < SAMPLE_CONTENT_MAX_CHARS && SAMPLE_CONTENT_RE.is_match(trimmed) {
        findings.warn(TemplateWarning::SampleContent);
    }
}

fn normalize_header(header: &Header) -> Header {
    match header {
        Header::Text { text } => Header::Text {
            text: NEWLINES_RE.replace_all(text.trim(), " ").into_owned(),
        },
        other => other.clone(),
    }
}
