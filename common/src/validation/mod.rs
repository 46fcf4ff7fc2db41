//! WhatsApp Business template compliance rules.
//!
//! Leaves first: name slugs, `{{n}}` placeholder scanning, per-field rules,
//! CTA URL / phone checks and the button policy, composed by
//! [`validate_template_for_meta`].

pub mod buttons;
pub mod emoji;
pub mod fields;
pub mod issues;
pub mod links;
pub mod name;
pub mod placeholder;
mod template;

use crate::model::report::TemplateReport;
use crate::model::template::Template;
use rayon::prelude::*;

pub use template::validate_template_for_meta;

/// Validates many templates in parallel. Reports keep the input order.
pub fn validate_batch(templates: &[Template]) -> Vec<TemplateReport> {
    templates.par_iter().map(validate_template_for_meta).collect()
}
