use crate::database::DatabaseManager;
use crate::error::ServiceError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

// 사용자 모델
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, Clone)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// 사용자 등록 요청
#[derive(Debug, Serialize, Deserialize)]
pub struct PostUserRequestDto {
    pub name: String,
}

/// 사용자 등록
pub async fn create_user(
    db_manager: &DatabaseManager,
    dto: PostUserRequestDto,
) -> Result<i64, ServiceError> {
    info!("{:<12} --> 사용자 등록: {}", "Command", dto.name);
    db_manager
        .transaction(|tx| {
            Box::pin(async move {
                sqlx::query_scalar::<_, i64>("INSERT INTO users (name) VALUES ($1) RETURNING id")
                    .bind(dto.name)
                    .fetch_one(&mut **tx)
                    .await
            })
        })
        .await
        .map_err(ServiceError::Database)
}
