/// 경매 관련 커맨드 처리
/// 1. 경매 등록
/// 2. 경매 조회 (캐시 조회 우선 현재 가격 포함)
// region:    --- Imports
use crate::auction::model::{AuctionResponseDto, PostAuctionRequestDto};
use crate::cache::PriceCache;
use crate::database::DatabaseManager;
use crate::error::ServiceError;
use crate::query;
use tracing::{error, info, warn};

// endregion: --- Imports

// region:    --- Commands

/// 1. 경매 등록
/// 물품이 존재해야 하며, PREPARE 상태 / 시작가 = 현재가로 생성된다.
pub async fn post_auction(
    db_manager: &DatabaseManager,
    dto: PostAuctionRequestDto,
) -> Result<i64, ServiceError> {
    info!("{:<12} --> 경매 등록 요청: {:?}", "Command", dto);

    query::handlers::get_artwork(db_manager, dto.artwork_id)
        .await?
        .ok_or(ServiceError::NotFoundArtWork)?;

    let auction_id = db_manager
        .transaction(|tx| {
            Box::pin(async move {
                sqlx::query_scalar::<_, i64>(
                    "INSERT INTO auctions (artwork_id, start_time, end_time, starting_price, current_price, status)
                     VALUES ($1, $2, $3, $4, $4, 'PREPARE')
                     RETURNING id",
                )
                .bind(dto.artwork_id)
                .bind(dto.start_time)
                .bind(dto.end_time)
                .bind(dto.starting_price)
                .fetch_one(&mut **tx)
                .await
            })
        })
        .await
        .map_err(|e: sqlx::Error| {
            error!("{:<12} --> 경매 등록 실패: {:?}", "Command", e);
            ServiceError::NotSaveAuction
        })?;

    info!("{:<12} --> 경매 등록 완료 id: {}", "Command", auction_id);
    Ok(auction_id)
}

/// 2-1. 경매 단건 조회
pub async fn find_by_id(
    db_manager: &DatabaseManager,
    cache: &impl PriceCache,
    auction_id: i64,
) -> Result<AuctionResponseDto, ServiceError> {
    let auction = query::handlers::get_auction(db_manager, auction_id)
        .await?
        .ok_or(ServiceError::NotFoundAuction)?;

    let current_price = get_current_price(db_manager, cache, auction_id).await?;
    Ok(auction.to_response(current_price))
}

/// 2-2. 물품별 경매 조회
pub async fn find_by_artwork(
    db_manager: &DatabaseManager,
    cache: &impl PriceCache,
    artwork_id: i64,
) -> Result<Vec<AuctionResponseDto>, ServiceError> {
    query::handlers::get_artwork(db_manager, artwork_id)
        .await?
        .ok_or(ServiceError::NotFoundArtWork)?;

    let auctions = query::handlers::get_auctions_by_artwork(db_manager, artwork_id).await?;

    let mut dtos = Vec::with_capacity(auctions.len());
    for auction in auctions {
        let current_price = get_current_price(db_manager, cache, auction.id).await?;
        dtos.push(auction.to_response(current_price));
    }
    Ok(dtos)
}

/// 현재 가격 조회 (cache-aside)
/// 캐시를 먼저 확인하고, 미스면 DB 에서 읽어 캐시를 채운 뒤 반환한다.
/// 존재하지 않는 경매는 0을 반환하며 캐시하지 않는다.
pub async fn get_current_price(
    db_manager: &DatabaseManager,
    cache: &impl PriceCache,
    auction_id: i64,
) -> Result<i64, ServiceError> {
    if let Some(price) = cache.get_bid_price(auction_id).await? {
        info!(
            "{:<12} --> 현재 가격 캐시 적중 id: {}, price: {}",
            "Cache", auction_id, price
        );
        return Ok(price);
    }

    let db_price = query::handlers::get_auction_current_price(db_manager, auction_id).await?;
    match db_price {
        Some(price) => {
            if let Err(e) = cache.set_bid_price(auction_id, price).await {
                warn!("{:<12} --> 현재 가격 캐시 채우기 실패: {:?}", "Cache", e);
            }
            Ok(price)
        }
        None => Ok(0),
    }
}

// endregion: --- Commands
