//! # Account Management HTTP Handlers
//!
//! 계정 프로필, 팔로우 아티스트, 계정 탈퇴와 관련된 HTTP 엔드포인트를
//! 처리하는 핸들러 함수들입니다. 모든 엔드포인트는 인증 미들웨어 뒤에
//! 배치되며, 요청 주체는 검증된 토큰의 이메일로 식별됩니다.
//!
//! ## 엔드포인트
//!
//! | 메서드 | 경로 | 설명 |
//! |--------|------|------|
//! | `GET`    | `/accounts/me`          | 간단 프로필 조회 |
//! | `GET`    | `/accounts/me/detail`   | 상세 프로필 조회 |
//! | `PATCH`  | `/accounts/me/nickname` | 닉네임 변경 |
//! | `PATCH`  | `/accounts/me/image`    | 프로필 이미지 변경 |
//! | `DELETE` | `/accounts/me`          | 계정 탈퇴 |
//! | `GET`    | `/accounts/me/artists`  | 팔로우 아티스트 목록 |
//! | `POST`   | `/accounts/me/artists`  | 아티스트 팔로우 |
//! | `DELETE` | `/accounts/me/artists`  | 팔로우 일괄 해제 |

use actix_web::{web, HttpRequest, HttpResponse, get, post, patch, delete};
use validator::Validate;
use crate::domain::dto::accounts::request::{
    AccountDeleteFollowArtistRequest, AccountFollowArtistRequest,
    AccountUpdateImageRequest, AccountUpdateNicknameRequest,
};
use crate::domain::dto::tokens::response::ApiResponse;
use crate::errors::AppError;
use crate::handlers::authenticated_account;
use crate::services::accounts::account_service::AccountService;
use crate::utils::cookie_manager::{CookieManager, CookieNames};

/// 간단 프로필 조회 핸들러
///
/// 헤더 영역 표시용 최소 정보(닉네임, 프로필 이미지)를 반환합니다.
#[get("")]
pub async fn get_account_simple(
    req: HttpRequest,
    service: web::Data<AccountService>,
) -> Result<HttpResponse, AppError> {
    let account = authenticated_account(&req)?;
    let response = service.get_account_simple_info(&account.email).await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 상세 프로필 조회 핸들러
#[get("/detail")]
pub async fn get_account_detail(
    req: HttpRequest,
    service: web::Data<AccountService>,
) -> Result<HttpResponse, AppError> {
    let account = authenticated_account(&req)?;
    let response = service.get_account_detail_info(&account.email).await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 닉네임 변경 핸들러
#[patch("/nickname")]
pub async fn update_account_nickname(
    req: HttpRequest,
    service: web::Data<AccountService>,
    payload: web::Json<AccountUpdateNicknameRequest>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let account = authenticated_account(&req)?;
    service
        .update_account_nickname(&account.email, payload.into_inner().nickname)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::<()>::message("닉네임이 변경되었습니다".to_string())))
}

/// 프로필 이미지 변경 핸들러
#[patch("/image")]
pub async fn update_account_image(
    req: HttpRequest,
    service: web::Data<AccountService>,
    payload: web::Json<AccountUpdateImageRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let account = authenticated_account(&req)?;
    service
        .update_account_image(&account.email, payload.into_inner().profile_image)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::<()>::message("프로필 이미지가 변경되었습니다".to_string())))
}

/// 계정 탈퇴 핸들러
///
/// 인증된 계정을 탈퇴 처리합니다. 회수할 리프레시 토큰은 쿠키에서 읽으며,
/// 탈퇴가 완료되면 토큰 쿠키를 모두 제거합니다.
///
/// # 응답
///
/// ## 성공 (200 OK)
/// 토큰 쿠키가 제거된 상태로 완료 메시지를 반환합니다.
///
/// ## 실패 사례
///
/// - `404 Not Found` - 계정이 존재하지 않음
/// - `410 Gone` - 이미 탈퇴 처리된 계정
/// - `502 Bad Gateway` - 프로바이더 연동 해제 실패
#[delete("")]
pub async fn withdraw_account(
    req: HttpRequest,
    service: web::Data<AccountService>,
) -> Result<HttpResponse, AppError> {
    let account = authenticated_account(&req)?;

    let refresh_token = CookieManager::get_cookie(CookieNames::RefreshToken, &req)
        .ok_or_else(|| {
            AppError::AuthenticationError("리프레시 토큰이 제공되지 않았습니다".to_string())
        })?;

    service.withdraw_account(&account.email, &refresh_token).await?;

    let mut response = HttpResponse::Ok();
    CookieManager::clear_token_cookies(&mut response);

    Ok(response.json(ApiResponse::<()>::message("계정 탈퇴가 완료되었습니다".to_string())))
}

/// 팔로우 아티스트 목록 조회 핸들러
#[get("/artists")]
pub async fn get_follow_artists(
    req: HttpRequest,
    service: web::Data<AccountService>,
) -> Result<HttpResponse, AppError> {
    let account = authenticated_account(&req)?;
    let response = service.get_follow_artists(&account.email).await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 아티스트 팔로우 핸들러
#[post("/artists")]
pub async fn follow_artist(
    req: HttpRequest,
    service: web::Data<AccountService>,
    payload: web::Json<AccountFollowArtistRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let account = authenticated_account(&req)?;
    service.follow_artist(&account.email, &payload.token).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::<()>::message("아티스트를 팔로우했습니다".to_string())))
}

/// 팔로우 아티스트 일괄 해제 핸들러
///
/// 목록에 팔로우 중이 아닌 토큰이 섞여 있어도 요청은 성공합니다.
#[delete("/artists")]
pub async fn delete_follow_artists(
    req: HttpRequest,
    service: web::Data<AccountService>,
    payload: web::Json<AccountDeleteFollowArtistRequest>,
) -> Result<HttpResponse, AppError> {
    let account = authenticated_account(&req)?;
    service
        .delete_follow_artists(&account.email, payload.into_inner().artist_tokens)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::<()>::message("팔로우가 해제되었습니다".to_string())))
}
