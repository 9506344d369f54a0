use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;

use portfolio_api::auth::JwtManager;
use portfolio_api::config::AppConfig;
use portfolio_api::db;
use portfolio_api::openapi::{configure_openapi, ApiDoc};
use portfolio_api::routes;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env();

    let pool = db::initialize_database(&config).await?;
    db::schema::initialize_all(&pool, &config).await;

    std::fs::create_dir_all(&config.upload_dir)?;

    let jwt_manager = web::Data::new(JwtManager::new(&config.jwt_secret));
    let app_config = web::Data::new(config.clone());
    let openapi_spec = configure_openapi(ApiDoc::openapi());

    let upload_dir = config.upload_dir.clone();
    let factory = move || {
        App::new()
            .app_data(app_config.clone())
            .app_data(jwt_manager.clone())
            .configure(|cfg| routes::configure_repositories(cfg, &pool))
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header(),
            )
            .wrap(Logger::default())
            .service(
                utoipa_swagger_ui::SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi_spec.clone()),
            )
            .service(actix_files::Files::new("/Uploads", upload_dir.clone()))
            .configure(routes::configure_routes)
    };

    // Walk forward from the configured port until a free one turns up.
    let mut port = config.port;
    let server = loop {
        match HttpServer::new(factory.clone()).bind(("0.0.0.0", port)) {
            Ok(server) => break server,
            Err(e) if e.kind() == std::io::ErrorKind::AddrInUse => {
                tracing::warn!(port, "port busy, trying port {}", port + 1);
                port += 1;
            }
            Err(e) => return Err(e.into()),
        }
    };

    tracing::info!("Server running on port {}", port);
    tracing::info!("API documentation at http://localhost:{}/swagger-ui/", port);

    server.run().await?;

    Ok(())
}
