use serde::{Deserialize, Deserializer, Serialize};

/// A WhatsApp Business message template as entered by the user.
///
/// The same type carries the normalized output of the validator, so a
/// template that passed validation can be persisted or submitted as is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    /// Raw, user-entered name. Meta only accepts a lowercase slug here.
    #[serde(default)]
    pub name: String,
    /// Locale tag such as `en_US`.
    #[serde(default)]
    pub language: String,
    /// Missing or `null` decodes as `Unrecognized` and is reported by the validator.
    #[serde(default, deserialize_with = "category_or_unrecognized")]
    pub category: TemplateCategory,
    #[serde(default)]
    pub components: Components,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TemplateCategory {
    Utility,
    Authentication,
    Marketing,
    /// Any category value Meta does not know about. Kept so the validator
    /// can report it instead of the whole payload failing to decode.
    #[default]
    #[serde(other)]
    Unrecognized,
}

fn category_or_unrecognized<'de, D>(deserializer: D) -> Result<TemplateCategory, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<TemplateCategory>::deserialize(deserializer)?.unwrap_or_default())
}

impl TemplateCategory {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Utility => "UTILITY",
            Self::Authentication => "AUTHENTICATION",
            Self::Marketing => "MARKETING",
            Self::Unrecognized => "UNRECOGNIZED",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Components {
    #[serde(default)]
    pub header: Header,
    #[serde(default)]
    pub body: Body,
    #[serde(default)]
    pub footer: Footer,
    #[serde(default)]
    pub buttons: Vec<Button>,
}

/// Template header. Only `TEXT` headers carry text; media headers are
/// filled with a sample handle at submission time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Header {
    #[default]
    None,
    Text {
        #[serde(default)]
        text: String,
    },
    Image,
    Video,
    Document,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Body {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Footer {
    #[serde(default)]
    pub text: String,
}

/// A template button. Quick replies and call-to-action buttons
/// (URL / phone) cannot be mixed in one template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Button {
    QuickReply {
        #[serde(default)]
        text: String,
    },
    Url {
        #[serde(default)]
        text: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        url: Option<String>,
    },
    PhoneNumber {
        #[serde(default)]
        text: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        phone_number: Option<String>,
    },
}

impl Button {
    pub fn text(&self) -> &str {
        match self {
            Self::QuickReply { text } | Self::Url { text, .. } | Self::PhoneNumber { text, .. } => {
                text
            }
        }
    }

    pub fn is_call_to_action(&self) -> bool {
        matches!(self, Self::Url { .. } | Self::PhoneNumber { .. })
    }
}
