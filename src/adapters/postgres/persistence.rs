use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

use super::{book_catalog::BookCatalog, loan_ledger::LoanLedger};
use crate::config::PersistenceConfig;

/// 永続化層のエラー
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// データベース接続の失敗
    #[error("Failed to connect to database")]
    Connect(#[from] sqlx::Error),

    /// マイグレーションの失敗
    #[error("Failed to run migrations")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

/// PostgreSQL永続化システム
///
/// コネクションプールのライフサイクル（開始・終了）を管理し、
/// 同じプールを共有するカタログと台帳を提供する。
pub struct Persistence {
    pool: PgPool,
}

impl Persistence {
    /// データベースに接続し、マイグレーションを適用する
    ///
    /// テストと本番で同じマイグレーションファイル（`migrations/`）を使用する。
    pub async fn open(config: &PersistenceConfig) -> Result<Self, PersistenceError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect(&config.database_url)
            .await?;

        sqlx::migrate!("./migrations").run(&pool).await?;

        tracing::info!(
            max_connections = config.max_connections,
            "persistence opened"
        );

        Ok(Self { pool })
    }

    pub fn book_catalog(&self) -> BookCatalog {
        BookCatalog::new(self.pool.clone())
    }

    pub fn loan_ledger(&self) -> LoanLedger {
        LoanLedger::new(self.pool.clone())
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// プールを閉じ、すべての接続の終了を待つ
    pub async fn close(self) {
        self.pool.close().await;
        tracing::info!("persistence closed");
    }
}
