use crate::model::report::TemplateReport;
use crate::model::template::Template;
use serde::{Deserialize, Serialize};

/// Request payload for the batch validation endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchValidateRequest {
    pub templates: Vec<Template>,
}

/// Reports in the same order as the submitted templates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchValidateResponse {
    pub reports: Vec<TemplateReport>,
}

/// Returned by the save endpoint once the normalized template is stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveTemplateResponse {
    pub id: String,
    pub report: TemplateReport,
}
