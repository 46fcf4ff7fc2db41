mod config;
mod services;
mod store;

use crate::config::{ServerConfig, JSON_LIMIT_BYTES};
use crate::store::TemplateStore;
use actix_web::{web, App, HttpServer};
use env_logger::Env;
use log::info;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config = ServerConfig::from_env();

    let store = TemplateStore::open(&config.db_path).map_err(std::io::Error::other)?;
    info!("Template store at {}", config.db_path.display());
    info!("Server running at {}", config.url());

    HttpServer::new(move || {
        App::new()
            .app_data(web::JsonConfig::default().limit(JSON_LIMIT_BYTES))
            .app_data(web::Data::new(store.clone()))
            .service(services::templates::configure_routes())
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
