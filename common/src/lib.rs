//! Shared model and validation logic for WhatsApp Business message templates.
//!
//! The `validation` module is a pure, synchronous gate run before a template
//! is submitted to Meta for approval. It never fails: every problem is
//! reported as an error or warning string inside a [`model::report::TemplateReport`].

pub mod model;
pub mod requests;
pub mod validation;
