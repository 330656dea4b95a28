//! 리프레시 토큰 저장소 모듈
//!
//! Redis를 사용하여 리프레시 토큰의 저장, 조회, 삭제를 담당합니다.
//! 토큰 자체를 키로 쓰지 않고 SHA-256 다이제스트를 키로 사용하며,
//! TTL을 통해 만료를 자동 처리합니다.

pub mod token_repository;

pub use token_repository::*;
