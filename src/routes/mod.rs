//! API 라우트 설정 모듈
//!
//! RESTful API 엔드포인트들을 기능별로 그룹화하여 제공합니다.
//! 계정, 토큰 관련 라우트와 헬스체크 엔드포인트를 포함합니다.
//!
//! # Features
//!
//! - 계정 프로필/팔로우/탈퇴 API 엔드포인트
//! - 토큰 재발급/로그아웃 API 엔드포인트
//! - 인증 미들웨어 적용
//! - 헬스체크 엔드포인트
//!
//! # Auth Middleware Usage
//!
//! 라우트에 따라 다른 인증 레벨을 적용할 수 있습니다:
//!
//! ```rust,ignore
//! // 인증 필수 라우트
//! cfg.service(
//!     web::scope("/api/v1/accounts/me")
//!         .wrap(AuthMiddleware::required())
//!         .service(handlers::accounts::get_account_simple)
//! );
//!
//! // 인증 불필요 (토큰 재발급 자체는 리프레시 토큰으로 검증)
//! cfg.service(
//!     web::scope("/api/v1/auth")
//!         .service(handlers::tokens::reissue_token_handler)
//! );
//! ```

use crate::handlers;
use crate::middlewares::AuthMiddleware;
use actix_web::web;
use chrono;
use serde_json::json;

/// 모든 라우트를 설정합니다
///
/// 기능별로 분할된 라우트들을 통합하여 애플리케이션에 등록합니다.
///
/// # Examples
///
/// ```rust,ignore
/// use actix_web::{web, App};
///
/// let app = App::new().configure(configure_all_routes);
/// ```
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    // Feature-specific routes
    configure_account_routes(cfg);
    configure_token_routes(cfg);
}

/// 계정 관련 라우트를 설정합니다
///
/// 모든 계정 라우트는 인증이 필요하며, 요청 주체는 검증된 토큰에서 식별됩니다.
///
/// # Available Routes
///
/// - `GET    /api/v1/accounts/me` - 간단 프로필 조회
/// - `GET    /api/v1/accounts/me/detail` - 상세 프로필 조회
/// - `PATCH  /api/v1/accounts/me/nickname` - 닉네임 변경
/// - `PATCH  /api/v1/accounts/me/image` - 프로필 이미지 변경
/// - `DELETE /api/v1/accounts/me` - 계정 탈퇴
/// - `GET    /api/v1/accounts/me/artists` - 팔로우 아티스트 목록
/// - `POST   /api/v1/accounts/me/artists` - 아티스트 팔로우
/// - `DELETE /api/v1/accounts/me/artists` - 팔로우 일괄 해제
fn configure_account_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/accounts/me")
            .wrap(AuthMiddleware::required())
            .service(handlers::accounts::get_account_simple)
            .service(handlers::accounts::get_account_detail)
            .service(handlers::accounts::update_account_nickname)
            .service(handlers::accounts::update_account_image)
            .service(handlers::accounts::withdraw_account)
            .service(handlers::accounts::get_follow_artists)
            .service(handlers::accounts::follow_artist)
            .service(handlers::accounts::delete_follow_artists)
    );
}

/// 토큰 관련 라우트를 설정합니다
///
/// 재발급/로그아웃은 액세스 토큰이 만료된 상태에서도 호출할 수 있어야 하므로
/// 인증 미들웨어 없이 리프레시 토큰 자체로 검증합니다.
///
/// # Available Routes
///
/// - `POST /api/v1/auth/reissue` - 토큰 재발급 (로테이션)
/// - `POST /api/v1/auth/logout` - 로그아웃 (토큰 회수)
fn configure_token_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/auth")
            .service(handlers::tokens::reissue_token_handler)
            .service(handlers::tokens::logout_handler)
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 로드밸런서나 모니터링 시스템에서 서비스 상태를 확인하는 데 사용됩니다.
///
/// # Examples
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "fanlink_backend",
///   "version": "0.1.0",
///   "timestamp": "2026-01-01T00:00:00Z",
///   "features": {
///     "database": "MongoDB",
///     "cache": "Redis",
///     "dependency_injection": "Constructor Injection"
///   }
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "fanlink_backend",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": "MongoDB",
            "cache": "Redis",
            "dependency_injection": "Constructor Injection"
        }
    }))
}
