// region:    --- Imports
use super::queries;
use crate::artwork::ArtWork;
use crate::auction::model::Auction;
use crate::bidding::model::{AuctionBidResponseDto, Bid, UserBidResponseDto};
use crate::database::DatabaseManager;
use crate::user::User;
use sqlx::Error as SqlxError;
use sqlx::Row;
use tracing::info;

// endregion: --- Imports

// region:    --- Query Handlers

/// 경매 조회
pub async fn get_auction(
    db_manager: &DatabaseManager,
    auction_id: i64,
) -> Result<Option<Auction>, SqlxError> {
    info!("{:<12} --> 경매 조회 id: {}", "Query", auction_id);
    db_manager
        .transaction(|tx| {
            Box::pin(async move {
                sqlx::query_as::<_, Auction>(queries::GET_AUCTION)
                    .bind(auction_id)
                    .fetch_optional(&mut **tx)
                    .await
            })
        })
        .await
}

/// 물품별 경매 조회
pub async fn get_auctions_by_artwork(
    db_manager: &DatabaseManager,
    artwork_id: i64,
) -> Result<Vec<Auction>, SqlxError> {
    info!("{:<12} --> 물품별 경매 조회 id: {}", "Query", artwork_id);
    db_manager
        .transaction(|tx| {
            Box::pin(async move {
                sqlx::query_as::<_, Auction>(queries::GET_AUCTIONS_BY_ARTWORK)
                    .bind(artwork_id)
                    .fetch_all(&mut **tx)
                    .await
            })
        })
        .await
}

/// 물품 조회
pub async fn get_artwork(
    db_manager: &DatabaseManager,
    artwork_id: i64,
) -> Result<Option<ArtWork>, SqlxError> {
    info!("{:<12} --> 물품 조회 id: {}", "Query", artwork_id);
    db_manager
        .transaction(|tx| {
            Box::pin(async move {
                sqlx::query_as::<_, ArtWork>(queries::GET_ARTWORK)
                    .bind(artwork_id)
                    .fetch_optional(&mut **tx)
                    .await
            })
        })
        .await
}

/// 사용자 조회
pub async fn get_user(
    db_manager: &DatabaseManager,
    user_id: i64,
) -> Result<Option<User>, SqlxError> {
    info!("{:<12} --> 사용자 조회 id: {}", "Query", user_id);
    db_manager
        .transaction(|tx| {
            Box::pin(async move {
                sqlx::query_as::<_, User>(queries::GET_USER)
                    .bind(user_id)
                    .fetch_optional(&mut **tx)
                    .await
            })
        })
        .await
}

/// 경매 현재 가격 조회 (DB 원본)
pub async fn get_auction_current_price(
    db_manager: &DatabaseManager,
    auction_id: i64,
) -> Result<Option<i64>, SqlxError> {
    info!(
        "{:<12} --> 경매 현재 가격 조회 id: {}",
        "Query", auction_id
    );
    db_manager
        .transaction(|tx| {
            Box::pin(async move {
                let row = sqlx::query(queries::GET_AUCTION_CURRENT_PRICE)
                    .bind(auction_id)
                    .fetch_optional(&mut **tx)
                    .await?;

                Ok(row.map(|r| r.get("current_price")))
            })
        })
        .await
}

/// 최고 입찰가 조회
pub async fn get_highest_bid(
    db_manager: &DatabaseManager,
    auction_id: i64,
) -> Result<Option<i64>, SqlxError> {
    info!("{:<12} --> 최고 입찰가 조회 id: {}", "Query", auction_id);
    db_manager
        .transaction(|tx| {
            Box::pin(async move {
                let row = sqlx::query(queries::GET_HIGHEST_BID)
                    .bind(auction_id)
                    .fetch_one(&mut **tx)
                    .await?;

                Ok(row.get("highest_bid"))
            })
        })
        .await
}

/// 경매별 최근 입찰 5건 조회
pub async fn get_recent_bids(
    db_manager: &DatabaseManager,
    auction_id: i64,
) -> Result<Vec<AuctionBidResponseDto>, SqlxError> {
    info!("{:<12} --> 최근 입찰 조회 id: {}", "Query", auction_id);
    db_manager
        .transaction(|tx| {
            Box::pin(async move {
                sqlx::query_as::<_, AuctionBidResponseDto>(queries::GET_RECENT_BIDS)
                    .bind(auction_id)
                    .fetch_all(&mut **tx)
                    .await
            })
        })
        .await
}

/// 사용자별 입찰 이력 조회
pub async fn get_user_bids(
    db_manager: &DatabaseManager,
    user_id: i64,
) -> Result<Vec<UserBidResponseDto>, SqlxError> {
    info!("{:<12} --> 사용자 입찰 이력 조회 id: {}", "Query", user_id);
    db_manager
        .transaction(|tx| {
            Box::pin(async move {
                sqlx::query_as::<_, UserBidResponseDto>(queries::GET_USER_BIDS)
                    .bind(user_id)
                    .fetch_all(&mut **tx)
                    .await
            })
        })
        .await
}

/// 경매 + 사용자 조합의 최근 입찰 조회
pub async fn get_bid_by_auction_and_user(
    db_manager: &DatabaseManager,
    auction_id: i64,
    user_id: i64,
) -> Result<Option<Bid>, SqlxError> {
    info!(
        "{:<12} --> 경매/사용자 입찰 조회 auction: {}, user: {}",
        "Query", auction_id, user_id
    );
    db_manager
        .transaction(|tx| {
            Box::pin(async move {
                sqlx::query_as::<_, Bid>(queries::GET_BID_BY_AUCTION_AND_USER)
                    .bind(auction_id)
                    .bind(user_id)
                    .fetch_optional(&mut **tx)
                    .await
            })
        })
        .await
}

// endregion: --- Query Handlers
