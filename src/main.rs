use actix_web::{middleware::Logger, web, App, HttpServer};

use brain_booster::{app_state::AppState, config::Config, handlers};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env();
    if std::env::var("APP_ENV").is_ok_and(|env| env == "production") {
        config.validate_for_production();
    }

    let host = config.web_server_host.clone();
    let port = config.web_server_port;
    let state = AppState::new(config);

    log::info!("starting HTTP server on {}:{}", host, port);
    log::info!(
        "quiz generation via {} (timeout {}s)",
        state.config.generation_model,
        state.config.generation_timeout_seconds
    );

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(Logger::default())
            .configure(handlers::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
