use crate::database::DatabaseManager;
use crate::error::ServiceError;
use crate::query;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

// 경매 물품 모델
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, Clone)]
pub struct ArtWork {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub owner_id: i64,
    pub created_at: DateTime<Utc>,
}

/// 물품 등록 요청
#[derive(Debug, Serialize, Deserialize)]
pub struct PostArtWorkRequestDto {
    pub title: String,
    pub description: String,
    pub owner_id: i64,
}

/// 물품 등록
/// 소유자 사용자가 존재해야 한다.
pub async fn create_artwork(
    db_manager: &DatabaseManager,
    dto: PostArtWorkRequestDto,
) -> Result<i64, ServiceError> {
    info!("{:<12} --> 물품 등록: {}", "Command", dto.title);

    query::handlers::get_user(db_manager, dto.owner_id)
        .await?
        .ok_or(ServiceError::NotFoundUser)?;

    db_manager
        .transaction(|tx| {
            Box::pin(async move {
                sqlx::query_scalar::<_, i64>(
                    "INSERT INTO artworks (title, description, owner_id)
                     VALUES ($1, $2, $3)
                     RETURNING id",
                )
                .bind(dto.title)
                .bind(dto.description)
                .bind(dto.owner_id)
                .fetch_one(&mut **tx)
                .await
            })
        })
        .await
        .map_err(ServiceError::Database)
}
