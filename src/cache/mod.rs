/// 현재 입찰가 캐시
/// Redis 를 조회 우선(cache-aside) 저장소로 사용한다.
/// DB 가 원본이며 캐시는 최종적 일관성만 보장한다.
// region:    --- Imports
use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::{AsyncCommands, Client, RedisError};
use tracing::info;

// endregion: --- Imports

// region:    --- Cache Config
/// Redis 캐시 설정
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Redis 접속 URL (redis://host:port)
    pub url: String,
    /// 캐시 항목 TTL (초)
    pub ttl_secs: usize,
    /// 캐시 키 접두사
    pub key_prefix: String,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            url: "redis://localhost:6379".to_string(),
            ttl_secs: 3600,
            key_prefix: "artauction:".to_string(),
        }
    }
}

impl CacheConfig {
    /// 환경 변수에서 설정 읽기
    pub fn from_env() -> Self {
        let url = std::env::var("REDIS_URL")
            .unwrap_or_else(|_| "redis://localhost:6379".to_string());
        let ttl_secs = std::env::var("CACHE_TTL_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(3600);
        let key_prefix =
            std::env::var("CACHE_KEY_PREFIX").unwrap_or_else(|_| "artauction:".to_string());

        Self {
            url,
            ttl_secs,
            key_prefix,
        }
    }
}
// endregion: --- Cache Config

// region:    --- Price Cache Trait
/// 경매별 현재 입찰가 캐시 트레이트
#[async_trait]
pub trait PriceCache: Send + Sync {
    /// 캐시된 현재 입찰가 조회 (미스면 None)
    async fn get_bid_price(&self, auction_id: i64) -> Result<Option<i64>, RedisError>;

    /// 현재 입찰가 캐시 갱신
    async fn set_bid_price(&self, auction_id: i64, price: i64) -> Result<(), RedisError>;
}
// endregion: --- Price Cache Trait

// region:    --- Redis Cache Service
/// Redis 기반 캐시 구현체
pub struct RedisCacheService {
    connection: ConnectionManager,
    config: CacheConfig,
}

impl RedisCacheService {
    /// Redis 접속 및 캐시 서비스 생성
    pub async fn new(config: CacheConfig) -> Result<Self, RedisError> {
        let client = Client::open(config.url.clone())?;
        let connection = ConnectionManager::new(client).await?;
        info!("{:<12} --> Redis 캐시 연결 성공: {}", "Cache", config.url);
        Ok(Self { connection, config })
    }

    /// 경매별 캐시 키
    fn key(&self, auction_id: i64) -> String {
        price_key(&self.config.key_prefix, auction_id)
    }
}

/// 경매별 현재 입찰가 캐시 키
fn price_key(prefix: &str, auction_id: i64) -> String {
    format!("{}bid-price:{}", prefix, auction_id)
}

#[async_trait]
impl PriceCache for RedisCacheService {
    async fn get_bid_price(&self, auction_id: i64) -> Result<Option<i64>, RedisError> {
        let mut conn = self.connection.clone();
        conn.get(self.key(auction_id)).await
    }

    async fn set_bid_price(&self, auction_id: i64, price: i64) -> Result<(), RedisError> {
        let mut conn = self.connection.clone();
        conn.set_ex(self.key(auction_id), price, self.config.ttl_secs as u64)
            .await
    }
}
// endregion: --- Redis Cache Service

// endregion: --- Tests
