use thiserror::Error;

/// Hard failures. Any of these makes the template unfit for submission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("Template name is required.")]
    NameRequired,
    #[error("Category must be one of UTILITY, AUTHENTICATION or MARKETING.")]
    UnknownCategory,

    #[error("Header text is required when the header type is TEXT.")]
    HeaderTextRequired,
    #[error("Header text must be {max} characters or fewer (got {len}).")]
    HeaderTooLong { len: usize, max: usize },
    #[error("Header text may contain at most one {{{{n}}}} placeholder (found {count}).")]
    HeaderTooManyPlaceholders { count: usize },
    #[error("Header text must not contain line breaks.")]
    HeaderNewline,
    #[error("Header text must not contain formatting characters (* _ ~ `).")]
    HeaderFormatting,
    #[error("Header text must not contain emoji.")]
    HeaderEmoji,
    #[error("Header text must not start or end with a placeholder.")]
    HeaderPlaceholderAtEdge,

    #[error("Body text is required.")]
    BodyRequired,
    #[error("Body text must be {max} characters or fewer (got {len}).")]
    BodyTooLong { len: usize, max: usize },
    #[error("Body placeholders must be numbered sequentially from {{{{1}}}} without gaps or duplicates (found {found}).")]
    BodyPlaceholdersNotSequential { found: String },

    #[error("Footer text must be {max} characters or fewer (got {len}).")]
    FooterTooLong { len: usize, max: usize },
    #[error("Footer text must not contain {{{{n}}}} placeholders.")]
    FooterPlaceholder,

    #[error("Buttons cannot mix QUICK_REPLY with URL or PHONE_NUMBER; use all quick replies or all call-to-action buttons.")]
    MixedButtonTypes,
    #[error("At most {max} {kind} buttons are allowed (got {count}).")]
    TooManyButtons { kind: &'static str, max: usize, count: usize },
    #[error("Button {index}: text is required.")]
    ButtonTextRequired { index: usize },
    #[error("Button {index}: text must be {max} characters or fewer (got {len}).")]
    ButtonTextTooLong { index: usize, len: usize, max: usize },
    #[error("Button {index} (URL): {reason}")]
    ButtonUrl { index: usize, reason: UrlIssue },
    #[error("Button {index} (Phone): must be E.164 format like +15551234567.")]
    ButtonPhone { index: usize },
}

/// Advisory findings. They never flip `ok` to false.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateWarning {
    #[error("Template name was normalized to \"{slug}\".")]
    NameNormalized { slug: String },
    #[error("MARKETING category selected; consider UTILITY for survey-style content.")]
    MarketingCategory,
    #[error("{kind} headers often require a sample media handle on submission.")]
    MediaHeaderSample { kind: &'static str },
    #[error("Body starts or ends with a placeholder; Meta may reject it during review.")]
    BodyPlaceholderAtEdge,
    #[error("UTILITY template body contains promotional language; Meta may recategorize it as MARKETING.")]
    PromotionalUtility,
    #[error("Body looks like test or sample content; Meta may reject it during review.")]
    SampleContent,
}

/// Reason a call-to-action URL was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UrlIssue {
    #[error("URL is required.")]
    Missing,
    #[error("URL is not a valid absolute URL.")]
    Unparsable,
    #[error("URL must use http:// or https://.")]
    UnsupportedScheme,
    #[error("localhost URLs are not allowed.")]
    Localhost,
    #[error("placeholder is not allowed in the domain.")]
    PlaceholderInDomain,
    #[error("only one {{{{n}}}} placeholder is allowed.")]
    TooManyPlaceholders,
}

/// Accumulates errors and warnings across every rule of one pass.
#[derive(Debug, Default)]
pub struct Findings {
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl Findings {
    pub fn error(&mut self, error: TemplateError) {
        self.errors.push(error.to_string());
    }

    pub fn warn(&mut self, warning: TemplateWarning) {
        self.warnings.push(warning.to_string());
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn into_parts(self) -> (Vec<String>, Vec<String>) {
        (self.errors, self.warnings)
    }
}
