use crate::model::template::Button;
use crate::validation::issues::{Findings, TemplateError};
use crate::validation::links::{is_e164_phone, validate_cta_url};

pub const MAX_QUICK_REPLY_BUTTONS: usize = 3;
pub const MAX_CALL_TO_ACTION_BUTTONS: usize = 2;
pub const BUTTON_TEXT_MAX_CHARS: usize = 25;

/// Applies the button policy and returns the normalized buttons
/// (trimmed text, URL targets in their normalized form when valid).
///
/// Button indices in messages are 1-based.
pub fn validate_buttons(buttons: &[Button], findings: &mut Findings) -> Vec<Button> {
    let has_quick_reply = buttons
        .iter()
        .any(|b| matches!(b, Button::QuickReply { .. }));
    let has_call_to_action = buttons.iter().any(Button::is_call_to_action);

    if has_quick_reply && has_call_to_action {
        findings.error(TemplateError::MixedButtonTypes);
    }

    let (kind, max) = if has_quick_reply && !has_call_to_action {
        ("QUICK_REPLY", MAX_QUICK_REPLY_BUTTONS)
    } else {
        ("call-to-action", MAX_CALL_TO_ACTION_BUTTONS)
    };
    if buttons.len() > max {
        findings.error(TemplateError::TooManyButtons {
            kind,
            max,
            count: buttons.len(),
        });
    }

    buttons
        .iter()
        .enumerate()
        .map(|(i, button)| validate_button(i + 1, button, findings))
        .collect()
}

fn validate_button(index: usize, button: &Button, findings: &mut Findings) -> Button {
    let text = button.text().trim();
    let len = text.chars().count();
    if len == 0 {
        findings.error(TemplateError::ButtonTextRequired { index });
    } else if len > BUTTON_TEXT_MAX_CHARS {
        findings.error(TemplateError::ButtonTextTooLong {
            index,
            len,
            max: BUTTON_TEXT_MAX_CHARS,
        });
    }
    let text = text.to_string();

    match button {
        Button::QuickReply { .. } => Button::QuickReply { text },
        Button::Url { url, .. } => {
            let raw = url.as_deref().unwrap_or_default();
            let url = match validate_cta_url(raw) {
                Ok(normalized) => Some(normalized),
                Err(reason) => {
                    findings.error(TemplateError::ButtonUrl { index, reason });
                    url.clone()
                }
            };
            Button::Url { text, url }
        }
        Button::PhoneNumber { phone_number, .. } => {
            let valid = phone_number.as_deref().is_some_and(is_e164_phone);
            if !valid {
                findings.error(TemplateError::ButtonPhone { index });
            }
            Button::PhoneNumber {
                text,
                phone_number: phone_number.clone(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quick(text: &str) -> Button {
        Button::QuickReply {
            text: text.to_string(),
        }
    }

    fn link(text: &str, url: &str) -> Button {
        Button::Url {
            text: text.to_string(),
            url: Some(url.to_string()),
        }
    }

    fn phone(text: &str, number: &str) -> Button {
        Button::PhoneNumber {
            text: text.to_string(),
            phone_number: Some(number.to_string()),
        }
    }

    fn errors_for(buttons: &[Button]) -> Vec<String> {
        let mut findings = Findings::default();
        validate_buttons(buttons, &mut findings);
        findings.into_parts().0
    }

    #[test]
    fn three_quick_replies_pass() {
        assert!(errors_for(&[quick("Yes"), quick("No"), quick("Later")]).is_empty());
    }

    #[test]
    fn four_quick_replies_exceed_limit() {
        let errors = errors_for(&[quick("1"), quick("2"), quick("3"), quick("4")]);
        assert_eq!(
            errors,
            ["At most 3 QUICK_REPLY buttons are allowed (got 4)."]
        );
    }

    #[test]
    fn mixed_types_are_rejected() {
        let errors = errors_for(&[quick("Yes"), link("Open", "https://example.com")]);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].starts_with("Buttons cannot mix QUICK_REPLY"));
    }

    #[test]
    fn three_call_to_action_buttons_exceed_limit() {
        let errors = errors_for(&[
            link("Open", "https://example.com"),
            phone("Call", "+15551234567"),
            link("Docs", "https://example.com/docs"),
        ]);
        assert_eq!(
            errors,
            ["At most 2 call-to-action buttons are allowed (got 3)."]
        );
    }

    #[test]
    fn button_text_rules() {
        let errors = errors_for(&[quick("  "), quick(&"x".repeat(26))]);
        assert_eq!(
            errors,
            [
                "Button 1: text is required.",
                "Button 2: text must be 25 characters or fewer (got 26).",
            ]
        );
    }

    #[test]
    fn url_failures_carry_index_and_reason() {
        let errors = errors_for(&[
            link("Open", "https://example.com"),
            link("Track", "https://example.com/{{1}}/{{2}}"),
        ]);
        assert_eq!(
            errors,
            ["Button 2 (URL): only one {{n}} placeholder is allowed."]
        );
    }

    #[test]
    fn url_button_without_url_is_reported() {
        let errors = errors_for(&[Button::Url {
            text: "Open".to_string(),
            url: None,
        }]);
        assert_eq!(errors, ["Button 1 (URL): URL is required."]);
    }

    #[test]
    fn phone_failures_use_fixed_message() {
        let errors = errors_for(&[phone("Call", "5551234567")]);
        assert_eq!(
            errors,
            ["Button 1 (Phone): must be E.164 format like +15551234567."]
        );
        let errors = errors_for(&[Button::PhoneNumber {
            text: "Call".to_string(),
            phone_number: None,
        }]);
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn normalized_buttons_are_trimmed_and_prefixed() {
        let mut findings = Findings::default();
        let normalized = validate_buttons(
            &[link("  Open survey ", "example.com/s/{{1}}"), phone(" Call ", "+15551234567")],
            &mut findings,
        );
        assert!(findings.errors().is_empty());
        assert_eq!(
            normalized,
            vec![
                link("Open survey", "https://example.com/s/{{1}}"),
                phone("Call", "+15551234567"),
            ]
        );
    }
}
