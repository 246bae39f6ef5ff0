use std::sync::Arc;

use api_service::config::Config;
use api_service::domain::auth::service::AuthService;
use api_service::domain::simple::service::SimpleService;
use api_service::inbound::http::router::create_router;
use api_service::repositories::PostgresSimpleRepository;
use api_service::repositories::PostgresUserDirectory;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "api-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        token_validity_hours = config.jwt.expiration_hours,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = 5,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let user_directory = Arc::new(PostgresUserDirectory::new(pg_pool.clone()));
    let simple_repository = Arc::new(PostgresSimpleRepository::new(pg_pool));

    let auth_service = Arc::new(AuthService::new(
        user_directory,
        config.jwt.secret.as_bytes(),
        config.jwt.expiration_hours,
    ));
    let simple_service = Arc::new(SimpleService::new(simple_repository));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(auth_service, simple_service);
    axum::serve(http_listener, http_application).await?;

    Ok(())
}
