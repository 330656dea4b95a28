//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 도메인별로 모듈화되어 계정 관리와 인증/토큰 기능을 담당합니다.
//! 모든 서비스는 저장소 trait을 생성자 주입으로 전달받아 구성됩니다.
//!
//! # Features
//!
//! - 계정 생명주기 관리 (조회, 수정, 탈퇴)
//! - 팔로우 아티스트 관리
//! - JWT 토큰 기반 인증 시스템
//! - OAuth 프로바이더 연동 해제
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::services::{accounts::AccountService, auth::TokenService};
//!
//! let token_service = Arc::new(TokenService::new(token_store));
//! let account_service = AccountService::new(
//!     account_store,
//!     artist_store,
//!     token_service.clone(),
//!     unlink_manager,
//! );
//! ```

pub mod accounts;
pub mod auth;
