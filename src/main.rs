use std::io;

use actix_web::middleware::Logger;
use actix_web::{App, HttpServer, web};
use category_service::db::establish_connection_pool;
use category_service::models::config::ServerConfig;
use category_service::repository::DieselRepository;
use category_service::routes;
use env_logger::Env;

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let server_config = ServerConfig::load().map_err(|e| {
        log::error!("Failed to load configuration: {e}");
        io::Error::other(e)
    })?;

    let pool = establish_connection_pool(&server_config.database_url).map_err(|e| {
        log::error!("Failed to establish database connection pool: {e}");
        io::Error::other(e)
    })?;
    let repo = DieselRepository::new(pool);

    let bind_address = server_config.bind_address();
    log::info!(
        "Starting category service on {}:{}",
        bind_address.0,
        bind_address.1
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(repo.clone()))
            .configure(routes::configure)
    })
    .bind(bind_address)?
    .run()
    .await
}
