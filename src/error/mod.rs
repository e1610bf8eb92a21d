/// 서비스 공통 에러 타입
/// 도메인 에러를 HTTP 응답으로 변환한다.
// region:    --- Imports
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

// endregion: --- Imports

// region:    --- Service Error
#[derive(Debug, Error)]
pub enum ServiceError {
    /// 아이디와 일치하는 경매가 없을 때
    #[error("아이디와 일치하는 경매를 찾을 수 없습니다")]
    NotFoundAuction,

    /// 아이디와 일치하는 물품이 없을 때
    #[error("아이디와 일치하는 물품을 찾을 수 없습니다")]
    NotFoundArtWork,

    /// 아이디와 일치하는 사용자가 없을 때
    #[error("아이디와 일치하는 사용자를 찾을 수 없습니다")]
    NotFoundUser,

    /// 경매 등록 실패
    #[error("경매 등록에 실패 하였습니다")]
    NotSaveAuction,

    /// 입찰 등록 실패
    #[error("입찰 등록에 실패 하였습니다")]
    NotSaveBid,

    /// 경매 시작 전 입찰
    #[error("경매가 아직 시작되지 않았습니다.")]
    AuctionNotStarted,

    /// 경매 종료 후 입찰
    #[error("경매가 이미 종료되었습니다.")]
    AuctionAlreadyEnded,

    /// 현재 가격 이하 입찰
    #[error("입찰 금액이 현재 가격보다 낮습니다.")]
    BidTooLow { current_price: i64 },

    /// 입찰 불가능한 경매 상태
    #[error("잘못된 경매 상태입니다.")]
    InvalidAuctionStatus,

    #[error(transparent)]
    Database(#[from] sqlx::Error),

    #[error(transparent)]
    Cache(#[from] redis::RedisError),
}

impl ServiceError {
    /// 클라이언트 식별용 에러 코드
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotFoundAuction => "NOT_FOUND_AUCTION",
            Self::NotFoundArtWork => "NOT_FOUND_ARTWORK",
            Self::NotFoundUser => "NOT_FOUND_USER",
            Self::NotSaveAuction => "NOT_SAVE_AUCTION",
            Self::NotSaveBid => "NOT_SAVE_BID",
            Self::AuctionNotStarted => "NOT_STARTED",
            Self::AuctionAlreadyEnded => "ALREADY_ENDED",
            Self::BidTooLow { .. } => "LOW_BID",
            Self::InvalidAuctionStatus => "INVALID_STATUS",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Cache(_) => "CACHE_ERROR",
        }
    }

    /// 에러별 HTTP 상태 코드
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFoundAuction | Self::NotFoundArtWork | Self::NotFoundUser => {
                StatusCode::NOT_FOUND
            }
            Self::AuctionNotStarted
            | Self::AuctionAlreadyEnded
            | Self::BidTooLow { .. }
            | Self::InvalidAuctionStatus => StatusCode::BAD_REQUEST,
            Self::NotSaveAuction | Self::NotSaveBid => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Database(sqlx::Error::RowNotFound) => StatusCode::NOT_FOUND,
            Self::Database(_) | Self::Cache(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// 에러를 `{"error", "code"}` 형태의 JSON 응답으로 변환
impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let mut body = serde_json::json!({
            "error": self.to_string(),
            "code": self.code(),
        });
        if let Self::BidTooLow { current_price } = &self {
            body["current_price"] = serde_json::json!(current_price);
        }
        (self.status_code(), Json(body)).into_response()
    }
}
// endregion: --- Service Error

// endregion: --- Tests
