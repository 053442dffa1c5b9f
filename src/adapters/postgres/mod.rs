pub mod loan_repository;

// パブリックに型を再エクスポート
pub use loan_repository::LoanRepository as PostgresLoanRepository;

use sqlx::postgres::{PgPool, PgPoolOptions};

/// コネクションプールを作成する
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// `migrations/`のマイグレーションを適用する
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
