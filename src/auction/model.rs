use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// region:    --- Auction Status
/// 경매 상태
/// 상태 전이는 한 방향으로만 진행된다: PREPARE -> START -> {END | FAIL}
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum AuctionStatus {
    /// 시작 대기
    Prepare,
    /// 진행 중
    Start,
    /// 낙찰 종료
    End,
    /// 유찰 종료
    Fail,
}

impl AuctionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuctionStatus::Prepare => "PREPARE",
            AuctionStatus::Start => "START",
            AuctionStatus::End => "END",
            AuctionStatus::Fail => "FAIL",
        }
    }

    pub fn parse(s: &str) -> Option<AuctionStatus> {
        match s {
            "PREPARE" => Some(AuctionStatus::Prepare),
            "START" => Some(AuctionStatus::Start),
            "END" => Some(AuctionStatus::End),
            "FAIL" => Some(AuctionStatus::Fail),
            _ => None,
        }
    }
}
// endregion: --- Auction Status

// region:    --- Models
// 경매 모델
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, Clone)]
pub struct Auction {
    pub id: i64,
    pub artwork_id: i64,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub starting_price: i64,
    pub current_price: i64,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl Auction {
    /// 캐시에서 조회한 현재 가격을 반영한 응답 DTO 생성
    pub fn to_response(&self, current_price: i64) -> AuctionResponseDto {
        AuctionResponseDto {
            id: self.id,
            artwork_id: self.artwork_id,
            start_time: self.start_time,
            end_time: self.end_time,
            starting_price: self.starting_price,
            current_price,
            status: self.status.clone(),
        }
    }
}
// endregion: --- Models

// region:    --- DTOs
/// 경매 등록 요청
#[derive(Debug, Serialize, Deserialize)]
pub struct PostAuctionRequestDto {
    pub artwork_id: i64,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub starting_price: i64,
}

/// 경매 응답
#[derive(Debug, Serialize, Deserialize)]
pub struct AuctionResponseDto {
    pub id: i64,
    pub artwork_id: i64,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub starting_price: i64,
    pub current_price: i64,
    pub status: String,
}
// endregion: --- DTOs

// endregion: --- Tests
