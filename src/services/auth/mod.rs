//! 인증 및 보안 서비스 모듈
//!
//! JWT 기반 토큰 인증과 OAuth 프로바이더 연동 해제를 담당하는 서비스들을 제공합니다.
//!
//! # Features
//!
//! - JWT 액세스/리프레시 토큰 생성, 검증, 재발급
//! - 리프레시 토큰 저장소 연동 및 회수
//! - Google/Kakao/Naver 연동 해제 호출
//!
//! # Security
//!
//! - HMAC-SHA256 토큰 서명
//! - 리프레시 토큰 로테이션 (재발급 시 기존 토큰 폐기)
//! - 토큰 만료 시간 관리

pub mod token_service;
pub mod unlink_manager;

pub use token_service::*;
pub use unlink_manager::*;
