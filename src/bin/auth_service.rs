//! Auth service entrypoint
//!
//! Registration and login over `/api/auth`, backed by MongoDB. Listens
//! on `PORT` (default 3002).

use std::sync::Arc;

use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};

use account_microservices::config::ServerConfig;
use account_microservices::db::Database;
use account_microservices::repositories::user_repo::UserRepository;
use account_microservices::routes::{configure_auth_routes, configure_cors};
use account_microservices::services::{NotifyClient, TokenService, UserService};

const DEFAULT_PORT: u16 = 3002;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));

    info!("starting auth service");

    let database = match Database::connect_with_retry().await {
        Ok(database) => Arc::new(database),
        Err(err) => {
            error!("MongoDB connection failed: {}", err);
            std::process::exit(1);
        }
    };

    let user_repo = Arc::new(UserRepository::new(database));
    if let Err(err) = user_repo.create_indexes().await {
        error!("index creation failed: {}", err);
        std::process::exit(1);
    }

    let user_service = web::Data::new(UserService::new(user_repo));
    let token_service = web::Data::new(TokenService::from_env());
    let notify_client = web::Data::new(NotifyClient::from_env());

    let bind_address = ServerConfig::bind_address(DEFAULT_PORT);
    info!("auth service listening on http://{}", bind_address);

    HttpServer::new(move || {
        App::new()
            .wrap(configure_cors())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .app_data(user_service.clone())
            .app_data(token_service.clone())
            .app_data(notify_client.clone())
            .configure(configure_auth_routes)
    })
    .bind(bind_address)?
    .run()
    .await
}
