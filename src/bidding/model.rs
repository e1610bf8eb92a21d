use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// 입찰 모델
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, Clone)]
pub struct Bid {
    pub id: i64,
    pub auction_id: i64,
    pub user_id: i64,
    pub price: i64,
    pub bid_time: DateTime<Utc>,
}

// region:    --- DTOs
/// 경매 화면용 입찰 응답 (입찰자 이름 포함)
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct AuctionBidResponseDto {
    pub user_name: String,
    pub price: i64,
    pub bid_time: DateTime<Utc>,
}

/// 경매 화면용 입찰 목록 응답
#[derive(Debug, Serialize, Deserialize)]
pub struct AuctionBidResponseDtoList {
    pub bids: Vec<AuctionBidResponseDto>,
}

/// 사용자 화면용 입찰 응답 (경매 상태 포함)
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct UserBidResponseDto {
    pub price: i64,
    pub bid_time: DateTime<Utc>,
    pub auction_id: i64,
    pub auction_status: String,
}
// endregion: --- DTOs

// region:    --- Commands
/// 입찰 명령
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PlaceBidCommand {
    pub auction_id: i64,
    pub user_id: i64,
    pub price: i64,
}
// endregion: --- Commands
