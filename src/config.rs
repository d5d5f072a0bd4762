use thiserror::Error;

/// `DATABASE_URL`が未設定の場合の接続先
pub const DEFAULT_DATABASE_URL: &str = "postgres://localhost/library";

/// `DATABASE_MAX_CONNECTIONS`が未設定の場合のプールサイズ
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// 設定読み込みのエラー
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("DATABASE_MAX_CONNECTIONS must be a positive integer, got {0:?}")]
    InvalidMaxConnections(String),
}

/// 永続化層の設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistenceConfig {
    pub database_url: String,
    pub max_connections: u32,
}

impl PersistenceConfig {
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }

    /// 環境変数から設定を読み込む
    ///
    /// - `DATABASE_URL`（既定値: `postgres://localhost/library`）
    /// - `DATABASE_MAX_CONNECTIONS`（既定値: 5）
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => match raw.trim().parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => return Err(ConfigError::InvalidMaxConnections(raw)),
            },
            None => DEFAULT_MAX_CONNECTIONS,
        };

        Ok(Self {
            database_url,
            max_connections,
        })
    }
}

impl Default for PersistenceConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DATABASE_URL)
    }
}
