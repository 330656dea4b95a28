//! 아티스트 데이터 액세스 리포지토리 모듈

pub mod artist_repo;

pub use artist_repo::*;
