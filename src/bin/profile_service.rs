//! Profile service entrypoint
//!
//! Token-guarded profile CRUD over `/api/profile`, backed by MongoDB.
//! Listens on `PORT` (default 3001).

use std::sync::Arc;

use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};

use account_microservices::config::ServerConfig;
use account_microservices::db::Database;
use account_microservices::repositories::profile_repo::ProfileRepository;
use account_microservices::routes::{configure_cors, configure_profile_routes};
use account_microservices::services::{ProfileService, TokenService};

const DEFAULT_PORT: u16 = 3001;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));

    info!("starting profile service");

    let database = match Database::connect_with_retry().await {
        Ok(database) => Arc::new(database),
        Err(err) => {
            error!("MongoDB connection failed: {}", err);
            std::process::exit(1);
        }
    };

    let profile_repo = Arc::new(ProfileRepository::new(database));
    if let Err(err) = profile_repo.create_indexes().await {
        error!("index creation failed: {}", err);
        std::process::exit(1);
    }

    let profile_service = web::Data::new(ProfileService::new(profile_repo));
    let token_service = Arc::new(TokenService::from_env());

    let bind_address = ServerConfig::bind_address(DEFAULT_PORT);
    info!("profile service listening on http://{}", bind_address);

    HttpServer::new(move || {
        let token_service = token_service.clone();
        App::new()
            .wrap(configure_cors())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .app_data(profile_service.clone())
            .configure(move |cfg| configure_profile_routes(cfg, token_service))
    })
    .bind(bind_address)?
    .run()
    .await
}
