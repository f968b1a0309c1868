use std::env;

/// 애플리케이션 설정
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server_port: u16,
    pub database_url: String,
    /// true이면 기동 시 엔티티 기준으로 테이블을 생성합니다.
    pub db_schema_update: bool,
    pub db_max_connections: u32,
    pub log_dir: String,
}

impl AppConfig {
    /// 환경 변수에서 설정 로드
    pub fn from_env() -> Result<Self, ConfigError> {
        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidPort)?;

        let database_url = env::var("DATABASE_URL").map_err(|_| ConfigError::MissingDatabaseUrl)?;

        let db_schema_update = parse_schema_update(env::var("DB_SCHEMA_UPDATE").ok())?;

        let db_max_connections = env::var("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "10".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidMaxConnections)?;

        let log_dir = env::var("LOG_DIR").unwrap_or_else(|_| "logs".to_string());

        Ok(Self {
            server_port,
            database_url,
            db_schema_update,
            db_max_connections,
            log_dir,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid port number")]
    InvalidPort,
    #[error("DATABASE_URL environment variable is required")]
    MissingDatabaseUrl,
    #[error("Invalid DB_MAX_CONNECTIONS value")]
    InvalidMaxConnections,
    #[error("Invalid DB_SCHEMA_UPDATE value: use 'true' or 'false'")]
    InvalidSchemaUpdate,
}

/// 미설정이면 false, 그 외에는 'true'/'false'만 허용
fn parse_schema_update(value: Option<String>) -> Result<bool, ConfigError> {
    match value {
        None => Ok(false),
        Some(raw) => raw
            .trim()
            .parse::<bool>()
            .map_err(|_| ConfigError::InvalidSchemaUpdate),
    }
}
