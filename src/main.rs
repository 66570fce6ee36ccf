mod config;
mod domain;
mod infrastructure;
mod presentation;
mod usecase;

use axum::{Router, routing::get};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::{
    config::AppConfig,
    infrastructure::{
        argon2_password_hasher::Argon2PasswordHasher, connector::MySqlConnector,
        user_registration_repository::MySqlUserRegistrationRepository,
    },
    presentation::handlers::user_handler::create_user_router,
    usecase::register_user_usecase::RegisterUserUsecase,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env()?;

    // one connection per registration, opened and closed inside the repository
    let connector = MySqlConnector::new(&config.database);
    let registration_repository = MySqlUserRegistrationRepository::new(connector);
    let password_hasher = Argon2PasswordHasher::new();
    let register_user_usecase = RegisterUserUsecase::new(registration_repository, password_hasher);

    let app = Router::new()
        .route("/", get(|| async { "Registration API" }))
        .nest("/api", create_user_router(register_user_usecase))
        .layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind(config.server_addr).await?;
    info!(addr = %config.server_addr, "listening");
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
