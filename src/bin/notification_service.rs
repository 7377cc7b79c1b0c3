//! Notification service entrypoint
//!
//! Stateless SMTP relay over `/api/notify`. No datastore; the transport
//! is configured once from `SMTP_*` variables. Listens on `PORT`
//! (default 3003).

use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};

use account_microservices::config::ServerConfig;
use account_microservices::routes::{configure_cors, configure_notify_routes};
use account_microservices::services::Mailer;

const DEFAULT_PORT: u16 = 3003;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));

    info!("starting notification service");

    let mailer = match Mailer::from_env() {
        Ok(mailer) => web::Data::new(mailer),
        Err(err) => {
            error!("SMTP transport setup failed: {}", err);
            std::process::exit(1);
        }
    };

    let bind_address = ServerConfig::bind_address(DEFAULT_PORT);
    info!("notification service listening on http://{}", bind_address);

    HttpServer::new(move || {
        App::new()
            .wrap(configure_cors())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .app_data(mailer.clone())
            .configure(configure_notify_routes)
    })
    .bind(bind_address)?
    .run()
    .await
}
