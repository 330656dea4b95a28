//! 팬링크 계정 서비스 백엔드
//!
//! Rust 기반의 아티스트 팔로우 플랫폼 계정 서비스입니다.
//! JWT 토큰 기반 인증, 쿠키 토큰 저장, OAuth 프로바이더 연동 해제,
//! 팔로우 아티스트 관리를 제공합니다.
//!
//! # Features
//!
//! - **계정 관리**: 프로필 조회/수정, 계정 탈퇴 (소프트 삭제)
//! - **연동 해제**: 탈퇴 시 Google/Kakao/Naver 연동 해제 호출
//! - **JWT 인증**: 액세스/리프레시 토큰 기반 인증과 토큰 로테이션
//! - **쿠키 저장**: HttpOnly + SameSite=Strict 토큰 쿠키
//! - **팔로우 관리**: 아티스트 팔로우 조회/추가/일괄 해제
//! - **MongoDB**: 계정/아티스트 데이터 영구 저장
//! - **Redis**: 캐싱 및 리프레시 토큰 저장
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB + Redis │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! 모든 컴포넌트는 `main.rs`에서 생성자 주입으로 조립되며,
//! 전역 레지스트리나 서비스 로케이터를 사용하지 않습니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use fanlink_backend::repositories::accounts::account_repo::AccountRepository;
//! use fanlink_backend::services::accounts::account_service::AccountService;
//! use fanlink_backend::services::auth::token_service::TokenService;
//!
//! let token_service = Arc::new(TokenService::new(token_repo));
//! let account_service = AccountService::new(
//!     account_repo,
//!     artist_repo,
//!     token_service.clone(),
//!     unlink_manager,
//! );
//!
//! // 계정 탈퇴: 연동 해제 → 토큰 회수 → 소프트 삭제
//! account_service.withdraw_account(&email, &refresh_token).await?;
//! ```

pub mod config;
pub mod db;
pub mod caching;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;
