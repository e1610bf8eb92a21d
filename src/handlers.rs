// region:    --- Imports
use crate::artwork::{self, PostArtWorkRequestDto};
use crate::auction::commands as auction_commands;
use crate::auction::model::{AuctionResponseDto, PostAuctionRequestDto};
use crate::bidding::commands::handle_place_bid;
use crate::bidding::model::{AuctionBidResponseDtoList, Bid, PlaceBidCommand, UserBidResponseDto};
use crate::cache::RedisCacheService;
use crate::database::DatabaseManager;
use crate::error::ServiceError;
use crate::query;
use crate::user::{self, PostUserRequestDto};
use axum::extract::{Path, State};
use axum::Json;
use std::sync::Arc;
use tracing::info;

// endregion: --- Imports

/// 공유 상태 (DB 매니저, 캐시)
pub type AppState = (Arc<DatabaseManager>, Arc<RedisCacheService>);

// region:    --- Command Handlers

/// 사용자 등록 요청 처리
pub async fn handle_post_user(
    State((db_manager, _)): State<AppState>,
    Json(dto): Json<PostUserRequestDto>,
) -> Result<Json<serde_json::Value>, ServiceError> {
    info!("{:<12} --> 사용자 등록 요청: {:?}", "Command", dto);
    let user_id = user::create_user(&db_manager, dto).await?;
    Ok(Json(serde_json::json!({ "id": user_id })))
}

/// 물품 등록 요청 처리
pub async fn handle_post_artwork(
    State((db_manager, _)): State<AppState>,
    Json(dto): Json<PostArtWorkRequestDto>,
) -> Result<Json<serde_json::Value>, ServiceError> {
    info!("{:<12} --> 물품 등록 요청: {:?}", "Command", dto);
    let artwork_id = artwork::create_artwork(&db_manager, dto).await?;
    Ok(Json(serde_json::json!({ "id": artwork_id })))
}

/// 경매 등록 요청 처리
pub async fn handle_post_auction(
    State((db_manager, _)): State<AppState>,
    Json(dto): Json<PostAuctionRequestDto>,
) -> Result<Json<serde_json::Value>, ServiceError> {
    info!("{:<12} --> 경매 등록 요청: {:?}", "Command", dto);
    let auction_id = auction_commands::post_auction(&db_manager, dto).await?;
    Ok(Json(serde_json::json!({ "id": auction_id })))
}

/// 입찰 요청 처리
pub async fn handle_bid(
    State((db_manager, cache)): State<AppState>,
    Json(cmd): Json<PlaceBidCommand>,
) -> Result<Json<serde_json::Value>, ServiceError> {
    info!("{:<12} --> 입찰 요청 처리 시작: {:?}", "Command", cmd);
    let bid = handle_place_bid(cmd, &db_manager, &*cache).await?;
    Ok(Json(serde_json::json!({
        "message": "입찰이 성공적으로 처리되었습니다.",
        "bid_id": bid.id,
        "current_price": bid.price,
    })))
}

// endregion: --- Command Handlers

// region:    --- Query Handlers

/// 경매 단건 조회 (캐시 조회 우선 현재 가격 포함)
pub async fn handle_get_auction(
    State((db_manager, cache)): State<AppState>,
    Path(auction_id): Path<i64>,
) -> Result<Json<AuctionResponseDto>, ServiceError> {
    info!("{:<12} --> 경매 조회 id: {}", "HandlerQuery", auction_id);
    let dto = auction_commands::find_by_id(&db_manager, &*cache, auction_id).await?;
    Ok(Json(dto))
}

/// 물품별 경매 조회
pub async fn handle_get_auctions_by_artwork(
    State((db_manager, cache)): State<AppState>,
    Path(artwork_id): Path<i64>,
) -> Result<Json<Vec<AuctionResponseDto>>, ServiceError> {
    info!(
        "{:<12} --> 물품별 경매 조회 id: {}",
        "HandlerQuery", artwork_id
    );
    let dtos = auction_commands::find_by_artwork(&db_manager, &*cache, artwork_id).await?;
    Ok(Json(dtos))
}

/// 현재 가격 조회 (cache-aside)
pub async fn handle_get_current_price(
    State((db_manager, cache)): State<AppState>,
    Path(auction_id): Path<i64>,
) -> Result<Json<serde_json::Value>, ServiceError> {
    info!(
        "{:<12} --> 현재 가격 조회 id: {}",
        "HandlerQuery", auction_id
    );
    let current_price =
        auction_commands::get_current_price(&db_manager, &*cache, auction_id).await?;
    Ok(Json(serde_json::json!({
        "auction_id": auction_id,
        "current_price": current_price,
    })))
}

/// 최고 입찰가 조회
pub async fn handle_get_highest_bid(
    State((db_manager, _)): State<AppState>,
    Path(auction_id): Path<i64>,
) -> Result<Json<Option<i64>>, ServiceError> {
    info!(
        "{:<12} --> 최고 입찰가 조회 id: {}",
        "HandlerQuery", auction_id
    );
    let highest = query::handlers::get_highest_bid(&db_manager, auction_id).await?;
    Ok(Json(highest))
}

/// 경매별 최근 입찰 5건 조회
pub async fn handle_get_recent_bids(
    State((db_manager, _)): State<AppState>,
    Path(auction_id): Path<i64>,
) -> Result<Json<AuctionBidResponseDtoList>, ServiceError> {
    info!(
        "{:<12} --> 최근 입찰 조회 id: {}",
        "HandlerQuery", auction_id
    );
    let bids = query::handlers::get_recent_bids(&db_manager, auction_id).await?;
    Ok(Json(AuctionBidResponseDtoList { bids }))
}

/// 경매에 대한 특정 사용자의 최근 입찰 조회
pub async fn handle_get_user_bid_on_auction(
    State((db_manager, _)): State<AppState>,
    Path((auction_id, user_id)): Path<(i64, i64)>,
) -> Result<Json<Option<Bid>>, ServiceError> {
    info!(
        "{:<12} --> 경매/사용자 입찰 조회 auction: {}, user: {}",
        "HandlerQuery", auction_id, user_id
    );
    let bid = query::handlers::get_bid_by_auction_and_user(&db_manager, auction_id, user_id).await?;
    Ok(Json(bid))
}

/// 사용자별 입찰 이력 조회
pub async fn handle_get_user_bids(
    State((db_manager, _)): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<Vec<UserBidResponseDto>>, ServiceError> {
    info!(
        "{:<12} --> 사용자 입찰 이력 조회 id: {}",
        "HandlerQuery", user_id
    );
    query::handlers::get_user(&db_manager, user_id)
        .await?
        .ok_or(ServiceError::NotFoundUser)?;
    let bids = query::handlers::get_user_bids(&db_manager, user_id).await?;
    Ok(Json(bids))
}

// endregion: --- Query Handlers
