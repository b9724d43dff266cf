mod config;
mod routes;

use actix_web::middleware::Logger;
use actix_web::{App, HttpServer};
use config::ServerConfig;
use routes::configure_routes;
use std::env;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    if let Ok(current_dir) = env::current_dir() {
        log::info!("Current working directory: {}", current_dir.display());
    }

    let config = match ServerConfig::load().and_then(|config| config.validate().map(|_| config)) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Failed to load server configuration: {}", e);
            return Err(std::io::Error::other(e));
        }
    };

    log::info!("Serving site from {}", config.dist_dir.display());
    let bind_address = config.bind_address();
    log::info!("Starting server on {}", bind_address);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .configure(|cfg| configure_routes(cfg, &config))
    })
    .bind(&bind_address)?
    .run()
    .await
}
