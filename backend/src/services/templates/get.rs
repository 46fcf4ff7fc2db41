use crate::store::{StoreError, TemplateStore};
use actix_web::{web, HttpResponse, Responder};
use log::error;

/// Handler for `GET /api/whatsapp/templates/{template_id}`.
///
/// # Returns
/// - `200 OK` with the stored normalized `Template`.
/// - `404 Not Found` when no template has that document id.
/// - `503 Service Unavailable` if the store cannot be read.
pub async fn process(
    store: web::Data<TemplateStore>,
    template_id: web::Path<String>,
) -> impl Responder {
    let store = store.get_ref().clone();
    let id = template_id.into_inner();

    let result = web::block(move || store.get(&id))
        .await
        .map_err(StoreError::from)
        .and_then(|found| found);

    match result {
        Ok(Some(template)) => HttpResponse::Ok().json(template),
        Ok(None) => HttpResponse::NotFound().body("Template not found"),
        Err(e) => {
            error!("Error retrieving template: {}", e);
            HttpResponse::ServiceUnavailable().body(format!("Error retrieving template: {}", e))
        }
    }
}
