//! 계정 응답 DTO 모듈

pub mod account_response;
pub mod follow_artist_response;

pub use account_response::*;
pub use follow_artist_response::*;
