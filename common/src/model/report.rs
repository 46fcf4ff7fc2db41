use crate::model::template::Template;
use crate::validation::name::normalize_template_name;
use serde::{Deserialize, Serialize};

/// Outcome of one validation pass.
///
/// `ok` is true exactly when `errors` is empty; warnings never block
/// submission. `normalized` is always populated, even for failing templates,
/// so a UI can preview the corrected name and trimmed text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateReport {
    pub ok: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub normalized: Template,
}

impl TemplateReport {
    /// Key under which the normalized template is stored.
    ///
    /// Built from the slug and the language, itself reduced to slug
    /// characters, so the same template name can exist once per locale
    /// (e.g. `survey_invite_en_us`) and the id is always safe in a URL path.
    pub fn document_id(&self) -> String {
        let language = normalize_template_name(&self.normalized.language);
        if language.is_empty() {
            self.normalized.name.clone()
        } else {
            format!("{}_{}", self.normalized.name, language)
        }
    }
}
