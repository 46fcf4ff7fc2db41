use actix_web::{web, HttpResponse, Responder};
use common::requests::{BatchValidateRequest, BatchValidateResponse};
use common::validation::validate_batch;
use log::{error, info};

/// Handler for `POST /api/whatsapp/templates/validate/batch`.
pub async fn process(payload: web::Json<BatchValidateRequest>) -> impl Responder {
    let templates = payload.into_inner().templates;
    let count = templates.len();

    match web::block(move || validate_batch(&templates)).await {
        Ok(reports) => {
            let failing = reports.iter().filter(|r| !r.ok).count();
            info!("Validated {} template(s), {} failing", count, failing);
            HttpResponse::Ok().json(BatchValidateResponse { reports })
        }
        Err(e) => {
            error!("Batch validation aborted: {}", e);
            HttpResponse::InternalServerError().body(format!("Batch validation aborted: {}", e))
        }
    }
}
