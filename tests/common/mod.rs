use actix_web::{web, App};
use sqlx::mysql::MySqlPoolOptions;
use sqlx::MySqlPool;
use tempfile::TempDir;

use portfolio_api::auth::JwtManager;
use portfolio_api::config::AppConfig;
use portfolio_api::db::schema;
use portfolio_api::routes;

pub struct TestApp {
    pub pool: MySqlPool,
    pub jwt_manager: JwtManager,
    pub config: AppConfig,
    #[allow(dead_code)]
    pub temp_dir: TempDir,
}

impl TestApp {
    /// App wired against a lazy pool. No connection is opened until a query
    /// runs, so validation and auth paths are testable without a server.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let pool = MySqlPoolOptions::new()
            .max_connections(1)
            .connect_lazy("mysql://root@localhost/portfolio_test_unreachable")
            .expect("Failed to build lazy pool");

        Self::build(pool, temp_dir)
    }

    /// App against a real database, gated on TEST_DATABASE_URL. Returns None
    /// when the variable is unset so suites can skip instead of failing.
    pub async fn with_database() -> Option<Self> {
        let url = std::env::var("TEST_DATABASE_URL").ok()?;
        let pool = MySqlPoolOptions::new()
            .max_connections(2)
            .connect(&url)
            .await
            .expect("Failed to connect to TEST_DATABASE_URL");

        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let test_app = Self::build(pool, temp_dir);
        schema::initialize_all(&test_app.pool, &test_app.config).await;
        Some(test_app)
    }

    fn build(pool: MySqlPool, temp_dir: TempDir) -> Self {
        let config = AppConfig {
            mysql_host: "localhost".into(),
            mysql_user: "root".into(),
            mysql_password: String::new(),
            database: "portfolio_test".into(),
            port: 0,
            jwt_secret: "test_secret_key".into(),
            admin_id: "admin".into(),
            admin_password: "admin123!".into(),
            upload_dir: temp_dir.path().to_string_lossy().into_owned(),
        };
        let jwt_manager = JwtManager::new(&config.jwt_secret);

        Self {
            pool,
            jwt_manager,
            config,
            temp_dir,
        }
    }

    pub fn create_app(
        &self,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        let pool = self.pool.clone();
        App::new()
            .app_data(web::Data::new(self.config.clone()))
            .app_data(web::Data::new(self.jwt_manager.clone()))
            .configure(move |cfg| routes::configure_repositories(cfg, &pool))
            .configure(routes::configure_routes)
    }

    /// Signed admin token minted directly; login tests cover the endpoint.
    pub fn admin_token(&self) -> String {
        self.jwt_manager
            .generate_token("admin")
            .expect("Failed to generate test token")
    }
}
