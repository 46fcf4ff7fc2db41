//! # WhatsApp Template Service Module
//!
//! Routes every request under `/api/whatsapp/templates` to its handler.
//!
//! ## Sub-modules:
//! - `validate`: Runs the Meta compliance rules on one template.
//! - `batch`: Runs the same rules on many templates in parallel.
//! - `save`: Validates and, when the template passes, persists its normalized form.
//! - `get`: Retrieves a stored normalized template by document id.

mod batch;
mod get;
mod save;
mod validate;

use actix_web::web::{get, post, scope};
use actix_web::Scope;

/// The base path for all template-related API endpoints.
const API_PATH: &str = "/api/whatsapp/templates";

/// Configures and returns the Actix `Scope` for all template-related routes.
///
/// # Registered Routes:
///
/// *   **`POST /validate`**: body is a `Template`; always answers `200 OK` with a
///     `TemplateReport` (`ok`, `errors`, `warnings`, `normalized`).
///
/// *   **`POST /validate/batch`**: body is `{"templates": [...]}`; answers with
///     one report per template, in the submitted order.
///
/// *   **`POST /save`**: validates first. A failing template gets
///     `422 Unprocessable Entity` with its report; a passing one is stored
///     under its document id and the id is returned with the report.
///
/// *   **`GET /{template_id}`**: returns the stored normalized template, or
///     `404 Not Found`.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/validate", post().to(validate::process))
        .route("/validate/batch", post().to(batch::process))
        .route("/save", post().to(save::process))
        .route("/{template_id}", get().to(get::process))
}
