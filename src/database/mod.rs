// region:    --- Imports
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use tracing::info;

// endregion: --- Imports

// region:    --- Database Manager
pub struct DatabaseManager {
    pub pool: Arc<PgPool>,
}

impl DatabaseManager {
    /// 데이터베이스 매니저 생성
    /// DATABASE_URL 은 필수, DATABASE_MAX_CONNECTIONS 는 선택 (기본 5)
    pub async fn new() -> Self {
        let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
        let max_connections = std::env::var("DATABASE_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5);
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(&database_url)
            .await
            .expect("Failed to create pool");
        info!(
            "{:<12} --> 데이터베이스 연결 성공 (max_connections: {})",
            "Database", max_connections
        );
        Self {
            pool: Arc::new(pool),
        }
    }

    /// 데이터베이스 풀 가져오기
    pub fn get_pool(&self) -> Arc<PgPool> {
        Arc::clone(&self.pool)
    }

    /// 트랜잭션 실행
    /// 클로저가 Ok 를 반환하면 커밋, Err 를 반환하면 롤백한다.
    pub async fn transaction<F, R, E>(&self, f: F) -> Result<R, E>
    where
        F: for<'c> FnOnce(
            &'c mut sqlx::Transaction<'_, sqlx::Postgres>,
        ) -> Pin<Box<dyn Future<Output = Result<R, E>> + Send + 'c>>,
        E: From<sqlx::Error>,
    {
        let mut tx = self.pool.begin().await?;
        let result = f(&mut tx).await;
        match result {
            Ok(r) => {
                tx.commit().await?;
                Ok(r)
            }
            Err(e) => {
                tx.rollback().await?;
                Err(e)
            }
        }
    }

    /// 스키마 초기화
    /// users / artworks / auctions / bids 테이블을 재생성한다.
    pub async fn initialize_database(&self) -> Result<(), sqlx::Error> {
        let recreate_db_sql = include_str!("../sql/00-recreate-db.sql");
        self.execute_multi_query(recreate_db_sql).await?;

        let create_schema_sql = include_str!("../sql/01-create-schema.sql");
        self.execute_multi_query(create_schema_sql).await?;

        Ok(())
    }

    /// 세미콜론으로 구분된 여러 쿼리 실행
    async fn execute_multi_query(&self, sql: &str) -> Result<(), sqlx::Error> {
        for query in sql.split(';') {
            let query = query.trim();
            if !query.is_empty() {
                sqlx::query(query).execute(&*self.pool).await?;
            }
        }
        Ok(())
    }
}
// endregion: --- Database Manager
