pub mod artwork;
pub mod auction;
pub mod bidding;
pub mod cache;
pub mod database;
pub mod error;
pub mod handlers;
pub mod query;
pub mod scheduler;
pub mod user;
