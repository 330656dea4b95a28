//! 토큰 쿠키 관리 유틸리티
//!
//! 액세스/리프레시 토큰을 HttpOnly 쿠키로 저장하고 조회/삭제합니다.
//! 모든 토큰 쿠키는 SameSite=Strict, path=/ 속성과 30분 수명을 가집니다.

use actix_web::cookie::{time::Duration, Cookie, SameSite};
use actix_web::{HttpRequest, HttpResponseBuilder};
use crate::domain::models::token::token::TokenPair;

/// 토큰 쿠키 이름
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CookieNames {
    /// 액세스 토큰 쿠키
    AccessToken,
    /// 리프레시 토큰 쿠키
    RefreshToken,
}

impl CookieNames {
    /// 쿠키 이름 문자열
    pub fn name(&self) -> &'static str {
        match self {
            CookieNames::AccessToken => "access_token",
            CookieNames::RefreshToken => "refresh_token",
        }
    }
}

/// 토큰 쿠키 생성/조회/삭제 유틸리티
///
/// 인스턴스화하지 않는 정적 유틸리티입니다.
pub struct CookieManager;

impl CookieManager {
    const HTTP_ONLY: bool = true;
    const COOKIE_PATH: &'static str = "/";
    const MAX_AGE_MINUTES: i64 = 30;

    /// 토큰 쿠키를 생성합니다.
    ///
    /// HttpOnly + SameSite=Strict 속성으로 스크립트 접근과
    /// 크로스 사이트 전송을 차단합니다.
    pub fn build_cookie(key: CookieNames, value: String) -> Cookie<'static> {
        Cookie::build(key.name(), value)
            .max_age(Duration::minutes(Self::MAX_AGE_MINUTES))
            .http_only(Self::HTTP_ONLY)
            .same_site(SameSite::Strict)
            .path(Self::COOKIE_PATH)
            .finish()
    }

    /// 쿠키 삭제용(수명 0) 쿠키를 생성합니다.
    pub fn removal_cookie(key: CookieNames) -> Cookie<'static> {
        Cookie::build(key.name(), "")
            .max_age(Duration::ZERO)
            .http_only(Self::HTTP_ONLY)
            .same_site(SameSite::Strict)
            .path(Self::COOKIE_PATH)
            .finish()
    }

    /// 요청에서 쿠키 값을 조회합니다.
    pub fn get_cookie(key: CookieNames, request: &HttpRequest) -> Option<String> {
        request.cookie(key.name()).map(|cookie| cookie.value().to_string())
    }

    /// 토큰 쌍을 응답 쿠키에 저장합니다.
    pub fn store_token_in_cookie(token_pair: &TokenPair, response: &mut HttpResponseBuilder) {
        response.cookie(Self::build_cookie(
            CookieNames::AccessToken,
            token_pair.access_token.clone(),
        ));
        response.cookie(Self::build_cookie(
            CookieNames::RefreshToken,
            token_pair.refresh_token.clone(),
        ));
    }

    /// 응답에서 토큰 쿠키들을 제거합니다.
    pub fn clear_token_cookies(response: &mut HttpResponseBuilder) {
        response.cookie(Self::removal_cookie(CookieNames::AccessToken));
        response.cookie(Self::removal_cookie(CookieNames::RefreshToken));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_cookie_attributes() {
        let cookie = CookieManager::build_cookie(CookieNames::AccessToken, "token-value".to_string());

        assert_eq!(cookie.name(), "access_token");
        assert_eq!(cookie.value(), "token-value");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Strict));
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.max_age(), Some(Duration::minutes(30)));
    }

    #[test]
    fn test_removal_cookie_expires_immediately() {
        let cookie = CookieManager::removal_cookie(CookieNames::RefreshToken);

        assert_eq!(cookie.name(), "refresh_token");
        assert_eq!(cookie.max_age(), Some(Duration::ZERO));
        assert!(cookie.value().is_empty());
    }

    #[test]
    fn test_cookie_names() {
        assert_eq!(CookieNames::AccessToken.name(), "access_token");
        assert_eq!(CookieNames::RefreshToken.name(), "refresh_token");
    }
}
