//! 토큰 재발급/로그아웃 HTTP 핸들러
//!
//! 리프레시 토큰 기반의 토큰 로테이션과 로그아웃을 처리합니다.
//! 토큰은 HttpOnly 쿠키로 전달되는 것을 기본으로 하되,
//! 쿠키가 없는 클라이언트를 위해 요청 본문도 허용합니다.

use actix_web::{web, HttpRequest, HttpResponse, post};
use crate::domain::dto::tokens::request::RefreshRequest;
use crate::domain::dto::tokens::response::ApiResponse;
use crate::errors::AppError;
use crate::services::auth::token_service::TokenService;
use crate::utils::cookie_manager::{CookieManager, CookieNames};

/// 토큰 재발급 핸들러
///
/// 리프레시 토큰을 검증하고 새 토큰 쌍을 발급합니다.
/// 기존 리프레시 토큰은 폐기되며(로테이션), 새 토큰 쌍은
/// HttpOnly 쿠키에 저장되어 응답됩니다.
#[post("/reissue")]
pub async fn reissue_token_handler(
    req: HttpRequest,
    token_service: web::Data<TokenService>,
    body: Option<web::Json<RefreshRequest>>,
) -> Result<HttpResponse, AppError> {
    let refresh_token = extract_refresh_token(&req, body.as_deref())?;

    let token_pair = token_service.reissue(&refresh_token).await?;

    log::info!("토큰 재발급 성공");

    let mut response = HttpResponse::Ok();
    CookieManager::store_token_in_cookie(&token_pair, &mut response);

    Ok(response.json(ApiResponse::success(token_pair)))
}

/// 로그아웃 핸들러
///
/// 리프레시 토큰을 저장소에서 회수하고 토큰 쿠키를 제거합니다.
/// 알 수 없는 토큰으로도 로그아웃은 성공합니다.
#[post("/logout")]
pub async fn logout_handler(
    req: HttpRequest,
    token_service: web::Data<TokenService>,
    body: Option<web::Json<RefreshRequest>>,
) -> Result<HttpResponse, AppError> {
    let refresh_token = extract_refresh_token(&req, body.as_deref())?;

    token_service.remove_refresh_token(&refresh_token).await?;

    log::info!("로그아웃 처리 완료");

    let mut response = HttpResponse::Ok();
    CookieManager::clear_token_cookies(&mut response);

    Ok(response.json(ApiResponse::<()>::message("로그아웃이 성공적으로 처리되었습니다".to_string())))
}

/// HTTP 요청에서 리프레시 토큰 추출
///
/// 쿠키를 우선 확인하고, 없으면 요청 본문을 사용합니다.
fn extract_refresh_token(
    req: &HttpRequest,
    body: Option<&RefreshRequest>,
) -> Result<String, AppError> {
    // 1. 쿠키에서 리프레시 토큰 찾기
    if let Some(token) = CookieManager::get_cookie(CookieNames::RefreshToken, req) {
        if !token.is_empty() {
            return Ok(token);
        }
    }

    // 2. 요청 본문에서 리프레시 토큰 찾기
    if let Some(body) = body {
        if !body.refresh_token.is_empty() {
            return Ok(body.refresh_token.clone());
        }
    }

    // 3. 토큰을 찾을 수 없음
    Err(AppError::AuthenticationError(
        "리프레시 토큰이 제공되지 않았습니다".to_string()
    ))
}
