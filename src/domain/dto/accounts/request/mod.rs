//! 계정 요청 DTO 모듈

pub mod account_update_request;
pub mod follow_artist_request;

pub use account_update_request::*;
pub use follow_artist_request::*;
