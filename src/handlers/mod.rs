//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! ActixWeb 프레임워크를 기반으로 구현되었습니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! HTTP Layer Architecture
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, Mobile App, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리        ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 비즈니스 로직                       ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - 데이터 접근                    ← Repository Layer
//! ├─────────────────────────────────────────────┤
//!   Entities/Models - 도메인 모델                 ← Domain Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! 핸들러는 입력 검증과 HTTP 변환만 담당하고, 비즈니스 로직은
//! `web::Data`로 주입된 서비스에 위임합니다.

pub mod accounts;
pub mod tokens;

use actix_web::{HttpMessage, HttpRequest};
use crate::domain::models::auth::authenticated_account::AuthenticatedAccount;
use crate::errors::AppError;

/// 인증 미들웨어가 저장한 계정 정보를 꺼냅니다.
///
/// 인증 미들웨어가 적용되지 않은 라우트에서 호출되면 401 에러가 됩니다.
pub(crate) fn authenticated_account(req: &HttpRequest) -> Result<AuthenticatedAccount, AppError> {
    req.extensions()
        .get::<AuthenticatedAccount>()
        .cloned()
        .ok_or_else(|| AppError::AuthenticationError("인증 정보가 없습니다".to_string()))
}
