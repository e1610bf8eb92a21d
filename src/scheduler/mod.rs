/// 경매 상태 업데이트 스케줄러
/// 일정 주기마다 시간 기준으로 경매 상태를 전이시킨다.
/// PREPARE -> START: 시작 시간이 지난 경매 (현재 가격 유지)
/// START -> END:     종료 시간이 지났고 입찰이 있는 경매 (현재 가격 = 최고 입찰가)
/// START -> FAIL:    종료 시간이 지났고 입찰이 없는 경매 (현재 가격 = 0)
// region:    --- Imports
use crate::auction::model::AuctionStatus;
use crate::cache::{PriceCache, RedisCacheService};
use chrono::Utc;
use sqlx::{PgPool, Row};
use std::sync::Arc;
use tokio::time::{interval, Duration};
use tracing::{debug, error, info, warn};

// endregion: --- Imports

// region:    --- Closing Outcome

/// 종료 경매의 결과 계산
/// 최고 입찰가가 있으면 낙찰(END), 없으면 유찰(FAIL)
pub fn closing_outcome(highest_bid: Option<i64>) -> (AuctionStatus, i64) {
    match highest_bid {
        Some(price) => (AuctionStatus::End, price),
        None => (AuctionStatus::Fail, 0),
    }
}

// endregion: --- Closing Outcome

// region:    --- Auction Scheduler
/// 경매 상태 업데이트 스케줄러
pub struct AuctionScheduler {
    pool: Arc<PgPool>,
    cache: Arc<RedisCacheService>,
}

impl AuctionScheduler {
    pub fn new(pool: Arc<PgPool>, cache: Arc<RedisCacheService>) -> Self {
        Self { pool, cache }
    }

    /// 스케줄러 시작
    /// 주기는 SCHEDULER_INTERVAL_SECS 환경 변수로 조정 (기본 60초)
    pub async fn start(&self) {
        let pool = Arc::clone(&self.pool);
        let cache = Arc::clone(&self.cache);
        let period_secs = std::env::var("SCHEDULER_INTERVAL_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(60);

        info!(
            "{:<12} --> 경매 상태 스케줄러 시작 (주기: {}초)",
            "Scheduler", period_secs
        );

        tokio::spawn(async move {
            let mut interval = interval(Duration::from_secs(period_secs));
            loop {
                interval.tick().await;
                // 한 주기 실패는 로그만 남기고 다음 주기에 재시도
                if let Err(e) = Self::update_auction_statuses(&pool, &*cache).await {
                    error!(
                        "{:<12} --> 경매 상태 업데이트 중 오류 발생: {:?}",
                        "Scheduler", e
                    );
                }
            }
        });
    }

    /// 경매 상태 업데이트
    pub async fn update_auction_statuses(
        pool: &PgPool,
        cache: &impl PriceCache,
    ) -> Result<(), sqlx::Error> {
        let now = Utc::now();

        // PREPARE -> START 상태 변경 (현재 가격은 그대로 유지)
        let started = sqlx::query(
            "UPDATE auctions SET status = 'START'
             WHERE status = 'PREPARE' AND start_time <= $1",
        )
        .bind(now)
        .execute(pool)
        .await?
        .rows_affected();

        // 종료 시간이 지난 진행 중 경매 조회
        let closing = sqlx::query("SELECT id FROM auctions WHERE status = 'START' AND end_time <= $1")
            .bind(now)
            .fetch_all(pool)
            .await?;

        let mut ended = 0;
        let mut failed = 0;
        for row in closing {
            let auction_id: i64 = row.get("id");

            // 최고 입찰가 기준으로 낙찰 / 유찰 결정
            let highest_bid: Option<i64> =
                sqlx::query("SELECT MAX(price) as highest_bid FROM bids WHERE auction_id = $1")
                    .bind(auction_id)
                    .fetch_one(pool)
                    .await?
                    .get("highest_bid");

            let (status, final_price) = closing_outcome(highest_bid);

            // status 조건으로 중복 종료를 막는다
            let updated = sqlx::query(
                "UPDATE auctions SET status = $1, current_price = $2
                 WHERE id = $3 AND status = 'START'",
            )
            .bind(status.as_str())
            .bind(final_price)
            .bind(auction_id)
            .execute(pool)
            .await?
            .rows_affected();

            if updated == 0 {
                continue;
            }

            match status {
                AuctionStatus::End => ended += 1,
                _ => failed += 1,
            }

            // 종료 가격으로 캐시 갱신 (실패는 무시, TTL 로 수렴)
            if let Err(e) = cache.set_bid_price(auction_id, final_price).await {
                warn!(
                    "{:<12} --> 종료 경매 캐시 갱신 실패 id: {}, {:?}",
                    "Scheduler", auction_id, e
                );
            }
        }

        if started > 0 || ended > 0 || failed > 0 {
            info!(
                "{:<12} --> 상태 전이 완료 (시작: {}, 낙찰: {}, 유찰: {})",
                "Scheduler", started, ended, failed
            );
        } else {
            debug!("{:<12} --> 전이 대상 경매 없음", "Scheduler");
        }

        Ok(())
    }
}
// endregion: --- Auction Scheduler

// region:    --- Tests
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auction_with_bids_ends_at_highest_bid() {
        let (status, price) = closing_outcome(Some(42_000));
        assert_eq!(status, AuctionStatus::End);
        assert_eq!(price, 42_000);
    }

    #[test]
    fn test_auction_without_bids_fails_at_zero() {
        let (status, price) = closing_outcome(None);
        assert_eq!(status, AuctionStatus::Fail);
        assert_eq!(price, 0);
    }
}
// endregion: --- Tests
