/// 경매 조회
pub const GET_AUCTION: &str =
    "SELECT id, artwork_id, start_time, end_time, starting_price, current_price, status, created_at FROM auctions WHERE id = $1";

/// 물품별 경매 조회
pub const GET_AUCTIONS_BY_ARTWORK: &str =
    "SELECT id, artwork_id, start_time, end_time, starting_price, current_price, status, created_at FROM auctions WHERE artwork_id = $1 ORDER BY created_at DESC";

/// 물품 조회
pub const GET_ARTWORK: &str =
    "SELECT id, title, description, owner_id, created_at FROM artworks WHERE id = $1";

/// 사용자 조회
pub const GET_USER: &str = "SELECT id, name, created_at FROM users WHERE id = $1";

/// 경매 현재 가격 조회 (DB 원본)
pub const GET_AUCTION_CURRENT_PRICE: &str = "SELECT current_price FROM auctions WHERE id = $1";

/// 최고 입찰가 조회
pub const GET_HIGHEST_BID: &str =
    "SELECT MAX(price) as highest_bid FROM bids WHERE auction_id = $1";

/// 경매별 최근 입찰 5건 조회 (입찰자 이름 포함)
pub const GET_RECENT_BIDS: &str = r#"
    SELECT u.name as user_name, b.price, b.bid_time
    FROM bids b
    JOIN users u ON u.id = b.user_id
    WHERE b.auction_id = $1
    ORDER BY b.bid_time DESC
    LIMIT 5
"#;

/// 사용자별 입찰 이력 조회 (경매 상태 포함)
pub const GET_USER_BIDS: &str = r#"
    SELECT b.price, b.bid_time, b.auction_id, a.status as auction_status
    FROM bids b
    JOIN auctions a ON a.id = b.auction_id
    WHERE b.user_id = $1
    ORDER BY b.bid_time DESC
"#;

/// 경매 + 사용자 조합의 최근 입찰 조회
pub const GET_BID_BY_AUCTION_AND_USER: &str = r#"
    SELECT id, auction_id, user_id, price, bid_time
    FROM bids
    WHERE auction_id = $1 AND user_id = $2
    ORDER BY bid_time DESC
    LIMIT 1
"#;
