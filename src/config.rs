#[derive(Debug, Clone)]
pub struct AppConfig {
    pub mysql_host: String,
    pub mysql_user: String,
    pub mysql_password: String,
    pub database: String,
    pub port: u16,
    pub jwt_secret: String,
    pub admin_id: String,
    pub admin_password: String,
    pub upload_dir: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mysql_host = std::env::var("MYSQL_HOST").unwrap_or_else(|_| "localhost".to_string());
        let mysql_user = std::env::var("MYSQL_USER").unwrap_or_else(|_| "root".to_string());
        let mysql_password = std::env::var("MYSQL_PASSWORD").unwrap_or_default();
        let database =
            std::env::var("MYSQL_DATABASE").unwrap_or_else(|_| "user_profile_db".to_string());

        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .unwrap_or(3000);

        let jwt_secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| {
            use base64::Engine;
            use rand::Rng;
            let mut rng = rand::thread_rng();
            let bytes: [u8; 32] = rng.gen();
            base64::engine::general_purpose::STANDARD.encode(bytes)
        });

        let admin_id = std::env::var("ADMIN_ID").unwrap_or_else(|_| "admin".to_string());
        let admin_password =
            std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "admin123!".to_string());

        let upload_dir =
            std::env::var("UPLOAD_DIR").unwrap_or_else(|_| "public/Uploads".to_string());

        Self {
            mysql_host,
            mysql_user,
            mysql_password,
            database,
            port,
            jwt_secret,
            admin_id,
            admin_password,
            upload_dir,
        }
    }

    /// Connection URL without a database, used to issue
    /// CREATE DATABASE IF NOT EXISTS before the main pool connects.
    pub fn server_url(&self) -> String {
        format!(
            "mysql://{}:{}@{}",
            self.mysql_user, self.mysql_password, self.mysql_host
        )
    }

    pub fn database_url(&self) -> String {
        format!(
            "mysql://{}:{}@{}/{}",
            self.mysql_user, self.mysql_password, self.mysql_host, self.database
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_url_includes_database_name() {
        let config = AppConfig {
            mysql_host: "localhost".into(),
            mysql_user: "root".into(),
            mysql_password: "pw".into(),
            database: "user_profile_db".into(),
            port: 3000,
            jwt_secret: "secret".into(),
            admin_id: "admin".into(),
            admin_password: "admin123!".into(),
            upload_dir: "public/Uploads".into(),
        };
        assert_eq!(
            config.database_url(),
            "mysql://root:pw@localhost/user_profile_db"
        );
        assert_eq!(config.server_url(), "mysql://root:pw@localhost");
    }
}
