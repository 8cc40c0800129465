use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use sqlx::PgPool;
use std::sync::Arc;

use taskdesk::auth::{AuthMiddleware, TokenService};
use taskdesk::config::Config;
use taskdesk::error::AppError;
use taskdesk::repository::postgres::{PgTaskRepository, PgUserRepository};
use taskdesk::routes;
use taskdesk::state::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let config = Config::from_env();
    let pool = PgPool::connect(&config.database_url)
        .await
        .expect("Failed to connect to database");

    let state = AppState {
        users: Arc::new(PgUserRepository::new(pool.clone())),
        tasks: Arc::new(PgTaskRepository::new(pool)),
        tokens: TokenService::new(&config),
    };

    log::info!("Starting TaskDesk server at {}", config.server_url());

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header();

        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::JsonConfig::default().error_handler(|err, _req| {
                // Unparseable payloads (including out-of-enum status
                // values) are malformed requests, not domain errors.
                AppError::BadRequest(err.to_string()).into()
            }))
            .wrap(Logger::default())
            .wrap(cors)
            .service(routes::health::health)
            .service(
                web::scope("/api")
                    .wrap(AuthMiddleware)
                    .configure(routes::config),
            )
    })
    .bind((config.server_host.as_str(), config.server_port))?
    .run()
    .await
}
