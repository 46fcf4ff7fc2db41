use actix_web::{web, HttpResponse, Responder};
use common::model::template::Template;
use common::validation::validate_template_for_meta;

/// Handler for `POST /api/whatsapp/templates/validate`.
///
/// Validation is cheap and never fails, so it runs inline and always
/// answers `200 OK`; the caller decides what to do with `ok == false`.
pub async fn process(payload: web::Json<Template>) -> impl Responder {
    HttpResponse::Ok().json(validate_template_for_meta(&payload))
}
