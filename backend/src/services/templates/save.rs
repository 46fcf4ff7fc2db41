//! # Template Save Service
//!
//! Backs `POST /api/whatsapp/templates/save`. The template is validated with
//! the same rules as `/validate`; only a passing template reaches the store,
//! and what is stored is the normalized form (slug name, trimmed text), keyed
//! by its document id.

use crate::store::{StoreError, TemplateStore};
use actix_web::{web, HttpResponse, Responder};
use common::model::report::TemplateReport;
use common::model::template::Template;
use common::requests::SaveTemplateResponse;
use common::validation::validate_template_for_meta;
use log::{error, info, warn};

pub async fn process(
    store: web::Data<TemplateStore>,
    payload: web::Json<Template>,
) -> impl Responder {
    let report = validate_template_for_meta(&payload);
    if !report.ok {
        warn!(
            "Rejected template '{}': {}",
            report.normalized.name,
            report.errors.join(" | ")
        );
        return HttpResponse::UnprocessableEntity().json(report);
    }

    match save_template(store.get_ref().clone(), report).await {
        Ok(saved) => {
            info!("Stored template '{}'", saved.id);
            HttpResponse::Ok().json(saved)
        }
        Err(e) => {
            error!("Error saving template: {}", e);
            HttpResponse::ServiceUnavailable().body(format!("Error saving template: {}", e))
        }
    }
}

async fn save_template(
    store: TemplateStore,
    report: TemplateReport,
) -> Result<SaveTemplateResponse, SaveError> {
    tokio::task::spawn_blocking(move || -> Result<SaveTemplateResponse, SaveError> {
        let id = store.save(&report)?;
        Ok(SaveTemplateResponse { id, report })
    })
    .await?
}

#[derive(Debug, thiserror::Error)]
enum SaveError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("join error: {0}")]
    Join(#[from] tokio::task::JoinError),
}
