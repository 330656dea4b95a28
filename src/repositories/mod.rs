//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! MongoDB를 주 저장소로 사용하고 Redis를 통한 캐싱과 리프레시 토큰 저장을
//! 지원합니다. 각 리포지토리는 서비스 계층이 소비하는 저장소 trait의 구현체이며,
//! 생성자 주입으로 연결됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::accounts::account_repo::AccountRepository;
//!
//! let account_repo = Arc::new(AccountRepository::new(database, redis));
//! let account = account_repo.find_by_email("fan@example.com").await?;
//! ```

pub mod accounts;
pub mod artists;
pub mod tokens;
