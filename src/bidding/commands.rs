/// 입찰 커맨드 처리
/// 검증 후 하나의 트랜잭션 안에서 현재 가격 갱신과 입찰 기록을 수행한다.
// region:    --- Imports
use crate::auction::model::{Auction, AuctionStatus};
use crate::bidding::model::{Bid, PlaceBidCommand};
use crate::cache::PriceCache;
use crate::database::DatabaseManager;
use crate::error::ServiceError;
use crate::query;
use chrono::{DateTime, Utc};
use sqlx::Row;
use tracing::{error, info, warn};

// endregion: --- Imports

// region:    --- Validation

/// 입찰 가능 여부 검증
/// START 상태이고 진행 시간 내이며, 입찰가가 현재 가격보다 높아야 한다.
pub fn validate_bid(auction: &Auction, now: DateTime<Utc>, price: i64) -> Result<(), ServiceError> {
    let status =
        AuctionStatus::parse(&auction.status).ok_or(ServiceError::InvalidAuctionStatus)?;

    match status {
        AuctionStatus::Prepare => Err(ServiceError::AuctionNotStarted),
        AuctionStatus::End | AuctionStatus::Fail => Err(ServiceError::AuctionAlreadyEnded),
        AuctionStatus::Start if now < auction.start_time => Err(ServiceError::AuctionNotStarted),
        AuctionStatus::Start if now > auction.end_time => Err(ServiceError::AuctionAlreadyEnded),
        AuctionStatus::Start => {
            if price <= auction.current_price {
                Err(ServiceError::BidTooLow {
                    current_price: auction.current_price,
                })
            } else {
                Ok(())
            }
        }
    }
}

// endregion: --- Validation

// region:    --- Commands

/// 입찰 처리
pub async fn handle_place_bid(
    cmd: PlaceBidCommand,
    db_manager: &DatabaseManager,
    cache: &impl PriceCache,
) -> Result<Bid, ServiceError> {
    info!("{:<12} --> 입찰 요청 처리 시작: {:?}", "Command", cmd);

    let auction = query::handlers::get_auction(db_manager, cmd.auction_id)
        .await?
        .ok_or(ServiceError::NotFoundAuction)?;

    query::handlers::get_user(db_manager, cmd.user_id)
        .await?
        .ok_or(ServiceError::NotFoundUser)?;

    let now = Utc::now();
    validate_bid(&auction, now, cmd.price)?;

    let auction_id = cmd.auction_id;
    let user_id = cmd.user_id;
    let price = cmd.price;

    // 가격 갱신과 입찰 기록은 하나의 트랜잭션으로 처리
    // 동시 입찰로 현재 가격이 이미 더 높아졌으면 갱신되지 않는다
    let bid = db_manager
        .transaction::<_, Bid, ServiceError>(|tx| {
            Box::pin(async move {
                let updated = sqlx::query(
                    "UPDATE auctions SET current_price = $1
                     WHERE id = $2 AND status = 'START' AND current_price < $1",
                )
                .bind(price)
                .bind(auction_id)
                .execute(&mut **tx)
                .await?;

                // 갱신 실패는 동시 입찰로 가격이 올랐거나 스케줄러가 경매를 종료한 경우
                if updated.rows_affected() == 0 {
                    let row = sqlx::query("SELECT current_price, status FROM auctions WHERE id = $1")
                        .bind(auction_id)
                        .fetch_one(&mut **tx)
                        .await?;
                    let status: String = row.get("status");
                    if status != "START" {
                        return Err(ServiceError::AuctionAlreadyEnded);
                    }
                    return Err(ServiceError::BidTooLow {
                        current_price: row.get("current_price"),
                    });
                }

                sqlx::query_as::<_, Bid>(
                    "INSERT INTO bids (auction_id, user_id, price, bid_time)
                     VALUES ($1, $2, $3, $4)
                     RETURNING id, auction_id, user_id, price, bid_time",
                )
                .bind(auction_id)
                .bind(user_id)
                .bind(price)
                .bind(now)
                .fetch_one(&mut **tx)
                .await
                .map_err(|e| {
                    error!("{:<12} --> 입찰 기록 실패: {:?}", "Command", e);
                    ServiceError::NotSaveBid
                })
            })
        })
        .await?;

    // 캐시 갱신 실패는 치명적이지 않다 (DB 가 원본)
    if let Err(e) = cache.set_bid_price(bid.auction_id, bid.price).await {
        warn!("{:<12} --> 입찰가 캐시 갱신 실패: {:?}", "Command", e);
    }

    info!(
        "{:<12} --> 입찰 완료 auction: {}, price: {}",
        "Command", bid.auction_id, bid.price
    );
    Ok(bid)
}

// endregion: --- Commands

// region:    --- Tests
#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn auction(status: &str, current_price: i64) -> Auction {
        let now = Utc::now();
        Auction {
            id: 1,
            artwork_id: 1,
            start_time: now - Duration::hours(1),
            end_time: now + Duration::hours(1),
            starting_price: 10_000,
            current_price,
            status: status.to_string(),
            created_at: now - Duration::hours(2),
        }
    }

    #[test]
    fn test_bid_on_prepare_auction_is_rejected() {
        let result = validate_bid(&auction("PREPARE", 10_000), Utc::now(), 20_000);
        assert!(matches!(result, Err(ServiceError::AuctionNotStarted)));
    }

    #[test]
    fn test_bid_on_closed_auction_is_rejected() {
        for status in ["END", "FAIL"] {
            let result = validate_bid(&auction(status, 10_000), Utc::now(), 20_000);
            assert!(matches!(result, Err(ServiceError::AuctionAlreadyEnded)));
        }
    }

    #[test]
    fn test_bid_after_end_time_is_rejected() {
        let mut a = auction("START", 10_000);
        a.end_time = Utc::now() - Duration::seconds(1);
        let result = validate_bid(&a, Utc::now(), 20_000);
        assert!(matches!(result, Err(ServiceError::AuctionAlreadyEnded)));
    }

    #[test]
    fn test_bid_before_start_time_is_rejected() {
        // 상태는 START 이지만 시작 시간이 아직 안 된 경우
        let mut a = auction("START", 10_000);
        a.start_time = Utc::now() + Duration::hours(1);
        let result = validate_bid(&a, Utc::now(), 20_000);
        assert!(matches!(result, Err(ServiceError::AuctionNotStarted)));
    }

    #[test]
    fn test_bid_at_or_below_current_price_is_rejected() {
        let a = auction("START", 15_000);
        assert!(matches!(
            validate_bid(&a, Utc::now(), 15_000),
            Err(ServiceError::BidTooLow {
                current_price: 15_000
            })
        ));
        assert!(matches!(
            validate_bid(&a, Utc::now(), 14_000),
            Err(ServiceError::BidTooLow { .. })
        ));
    }

    #[test]
    fn test_higher_bid_on_running_auction_is_accepted() {
        let a = auction("START", 15_000);
        assert!(validate_bid(&a, Utc::now(), 15_001).is_ok());
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let result = validate_bid(&auction("ACTIVE", 10_000), Utc::now(), 20_000);
        assert!(matches!(result, Err(ServiceError::InvalidAuctionStatus)));
    }
}
// endregion: --- Tests
