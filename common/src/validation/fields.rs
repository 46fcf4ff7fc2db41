use crate::model::template::Header;
use crate::validation::emoji::contains_emoji;
use crate::validation::issues::{Findings, TemplateError, TemplateWarning};
use crate::validation::placeholder::{
    has_placeholders, is_sequential_unique, placeholder_at_edge, scan_placeholder_tokens,
};

pub const HEADER_MAX_CHARS: usize = 60;
pub const BODY_MAX_CHARS: usize = 1024;
pub const FOOTER_MAX_CHARS: usize = 60;

const FORMATTING_CHARS: [char; 4] = ['*', '_', '~', '`'];

/// Header rules. Only `TEXT` headers are checked in depth; media headers get
/// an advisory about the sample handle Meta asks for.
pub fn validate_header(header: &Header, placeholders: &[u32], findings: &mut Findings) {
    let text = match header {
        Header::None => return,
        Header::Image => {
            findings.warn(TemplateWarning::MediaHeaderSample { kind: "IMAGE" });
            return;
        }
        Header::Video => {
            findings.warn(TemplateWarning::MediaHeaderSample { kind: "VIDEO" });
            return;
        }
        Header::Document => {
            findings.warn(TemplateWarning::MediaHeaderSample { kind: "DOCUMENT" });
            return;
        }
        Header::Text { text } => text,
    };

    if text.trim().is_empty() {
        findings.error(TemplateError::HeaderTextRequired);
        return;
    }

    let len = text.trim().chars().count();
    if len > HEADER_MAX_CHARS {
        findings.error(TemplateError::HeaderTooLong {
            len,
            max: HEADER_MAX_CHARS,
        });
    }
    if placeholders.len() > 1 {
        findings.error(TemplateError::HeaderTooManyPlaceholders {
            count: placeholders.len(),
        });
    }
    if text.contains(['\n', '\r']) {
        findings.error(TemplateError::HeaderNewline);
    }
    if text.contains(FORMATTING_CHARS) {
        findings.error(TemplateError::HeaderFormatting);
    }
    if contains_emoji(text) {
        findings.error(TemplateError::HeaderEmoji);
    }
    if placeholder_at_edge(text) {
        findings.error(TemplateError::HeaderPlaceholderAtEdge);
    }
}

pub fn validate_body(text: &str, placeholders: &[u32], findings: &mut Findings) {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        findings.error(TemplateError::BodyRequired);
        return;
    }

    let len = trimmed.chars().count();
    if len > BODY_MAX_CHARS {
        findings.error(TemplateError::BodyTooLong {
            len,
            max: BODY_MAX_CHARS,
        });
    }
    if !is_sequential_unique(placeholders) {
        findings.error(TemplateError::BodyPlaceholdersNotSequential {
            found: describe_tokens(trimmed),
        });
    }
    if placeholder_at_edge(trimmed) {
        findings.warn(TemplateWarning::BodyPlaceholderAtEdge);
    }
}

/// Footers never carry variables, whatever their numbering.
pub fn validate_footer(text: &str, findings: &mut Findings) {
    let len = text.trim().chars().count();
    if len > FOOTER_MAX_CHARS {
        findings.error(TemplateError::FooterTooLong {
            len,
            max: FOOTER_MAX_CHARS,
        });
    }
    if has_placeholders(text) {
        findings.error(TemplateError::FooterPlaceholder);
    }
}

fn describe_tokens(text: &str) -> String {
    scan_placeholder_tokens(text)
        .into_iter()
        .map(|digits| format!("{{{{{digits}}}}}"))
        .collect::<Vec<_>>()
        .join(", ")
}
