//! SQLite persistence for normalized templates.
//!
//! Only templates that passed validation are written. Each row is keyed by
//! the slug-derived document id and holds the normalized template as JSON.
//! Every operation opens its own connection, so callers run them on a
//! blocking thread.

use common::model::report::TemplateReport;
use common::model::template::Template;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("template encoding error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("blocking task failed: {0}")]
    Blocking(#[from] actix_web::error::BlockingError),
}

#[derive(Debug, Clone)]
pub struct TemplateStore {
    path: PathBuf,
}

impl TemplateStore {
    /// Opens (and if needed creates) the database at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let store = Self {
            path: path.as_ref().to_path_buf(),
        };
        store.connect()?.execute_batch(
            "CREATE TABLE IF NOT EXISTS whatsapp_templates (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                language TEXT NOT NULL,
                category TEXT NOT NULL,
                payload TEXT NOT NULL
            )",
        )?;
        Ok(store)
    }

    fn connect(&self) -> Result<Connection, StoreError> {
        Ok(Connection::open(&self.path)?)
    }

    /// Inserts or replaces the normalized template of `report`.
    /// Returns the document id it was stored under.
    pub fn save(&self, report: &TemplateReport) -> Result<String, StoreError> {
        let id = report.document_id();
        let template = &report.normalized;
        let payload = serde_json::to_string(template)?;

        self.connect()?.execute(
            "INSERT OR REPLACE INTO whatsapp_templates (id, name, language, category, payload)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                &id,
                &template.name,
                &template.language,
                template.category.as_str(),
                &payload
            ],
        )?;
        Ok(id)
    }

    pub fn get(&self, id: &str) -> Result<Option<Template>, StoreError> {
        let payload: Option<String> = self
            .connect()?
            .query_row(
                "SELECT payload FROM whatsapp_templates WHERE id = ?1",
                params![id],
                |row| row.get(0),
            )
            .optional()?;

        match payload {
            Some(payload) => Ok(Some(serde_json::from_str(&payload)?)),
            None => Ok(None),
        }
    }
}
