// region:    --- Imports
use crate::cache::{CacheConfig, RedisCacheService};
use crate::database::DatabaseManager;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info};
// endregion: --- Imports

// region:    --- Modules
mod artwork;
mod auction;
mod bidding;
mod cache;
mod database;
mod error;
mod handlers;
mod query;
mod scheduler;
mod user;

// endregion: --- Modules

// region:    --- Main
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // logging 초기화
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .without_time()
        .with_target(false)
        .init();

    // DatabaseManager 생성
    let db_manager = Arc::new(DatabaseManager::new().await);

    // 데이터베이스 초기화
    if let Err(e) = db_manager.initialize_database().await {
        error!("{:<12} --> 데이터베이스 초기화 실패: {:?}", "Main", e);
        return Err(e.into());
    }
    info!("{:<12} --> 데이터베이스 초기화 성공", "Main");

    // Redis 캐시 생성
    let cache = match RedisCacheService::new(CacheConfig::from_env()).await {
        Ok(cache) => Arc::new(cache),
        Err(e) => {
            error!("{:<12} --> Redis 캐시 초기화 실패: {:?}", "Main", e);
            return Err(e.into());
        }
    };

    // 경매 상태 스케줄러 시작
    let auction_scheduler =
        scheduler::AuctionScheduler::new(db_manager.get_pool(), Arc::clone(&cache));
    auction_scheduler.start().await;

    // 테스트 페이지를 위한 cors 설정
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // 라우터 설정
    let routes_all = Router::new()
        .route("/users", post(handlers::handle_post_user))
        .route("/users/:id/bids", get(handlers::handle_get_user_bids))
        .route("/artworks", post(handlers::handle_post_artwork))
        .route(
            "/artworks/:id/auctions",
            get(handlers::handle_get_auctions_by_artwork),
        )
        .route("/auctions", post(handlers::handle_post_auction))
        .route("/auctions/:id", get(handlers::handle_get_auction))
        .route(
            "/auctions/:id/current-price",
            get(handlers::handle_get_current_price),
        )
        .route(
            "/auctions/:id/highest-bid",
            get(handlers::handle_get_highest_bid),
        )
        .route("/auctions/:id/bids", get(handlers::handle_get_recent_bids))
        .route(
            "/auctions/:id/bids/:user_id",
            get(handlers::handle_get_user_bid_on_auction),
        )
        .route("/bid", post(handlers::handle_bid))
        .layer(cors)
        .with_state((db_manager, cache));

    // 리스너 생성(로컬 호스트의 3000번 포트를 사용)
    let listener = TcpListener::bind("0.0.0.0:3000").await?;
    info!(
        "{:<12} --> Web Server: Listening on {}",
        "Main",
        listener.local_addr()?
    );

    // 서버 실행
    if let Err(err) = axum::serve(listener, routes_all.into_make_service()).await {
        error!("{:<12} --> Server error: {}", "Main", err);
    }
    Ok(())
}
// endregion: --- Main
