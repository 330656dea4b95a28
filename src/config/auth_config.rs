//! 인증 관련 설정
//!
//! JWT 서명 키, 토큰 수명, OAuth 프로바이더 연동 해제 엔드포인트 설정을
//! 환경 변수에서 읽어옵니다. 프로바이더 비밀값은 기본값 없이 필수로 요구됩니다.

use std::env;

/// JWT 토큰 설정
///
/// 액세스 토큰은 쿠키 수명과 동일한 30분, 리프레시 토큰은 14일을 기본으로 합니다.
pub struct JwtConfig;

impl JwtConfig {
    /// JWT 서명 비밀 키
    ///
    /// 프로덕션에서는 반드시 `JWT_SECRET` 환경 변수를 설정해야 합니다.
    pub fn secret() -> String {
        env::var("JWT_SECRET")
            .unwrap_or_else(|_| {
                log::warn!("JWT_SECRET not set, using default (not secure for production!)");
                "your-secret-key".to_string()
            })
    }

    /// 액세스 토큰 만료 시간 (분, 기본값: 30)
    pub fn expiration_minutes() -> i64 {
        env::var("JWT_EXPIRATION_MINUTES")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .unwrap_or(30)
    }

    /// 리프레시 토큰 만료 시간 (일, 기본값: 14)
    pub fn refresh_expiration_days() -> i64 {
        env::var("JWT_REFRESH_EXPIRATION_DAYS")
            .unwrap_or_else(|_| "14".to_string())
            .parse()
            .unwrap_or(14)
    }
}

/// Google OAuth 연동 해제 설정
pub struct GoogleOAuthConfig;

impl GoogleOAuthConfig {
    /// 토큰 해지(revoke) 엔드포인트
    pub fn revoke_uri() -> String {
        env::var("GOOGLE_REVOKE_URI")
            .unwrap_or_else(|_| "https://oauth2.googleapis.com/revoke".to_string())
    }
}

/// Kakao OAuth 연동 해제 설정
pub struct KakaoOAuthConfig;

impl KakaoOAuthConfig {
    /// Kakao Admin Key
    ///
    /// 서버 사이드 연동 해제 호출에 사용됩니다. 클라이언트에 노출 금지.
    pub fn admin_key() -> String {
        env::var("KAKAO_ADMIN_KEY")
            .expect("KAKAO_ADMIN_KEY must be set")
    }

    /// 연동 해제(unlink) 엔드포인트
    pub fn unlink_uri() -> String {
        env::var("KAKAO_UNLINK_URI")
            .unwrap_or_else(|_| "https://kapi.kakao.com/v1/user/unlink".to_string())
    }
}

/// Naver OAuth 연동 해제 설정
pub struct NaverOAuthConfig;

impl NaverOAuthConfig {
    /// Naver Client ID
    pub fn client_id() -> String {
        env::var("NAVER_CLIENT_ID")
            .expect("NAVER_CLIENT_ID must be set")
    }

    /// Naver Client Secret
    pub fn client_secret() -> String {
        env::var("NAVER_CLIENT_SECRET")
            .expect("NAVER_CLIENT_SECRET must be set")
    }

    /// 토큰 삭제(grant_type=delete) 엔드포인트
    pub fn token_uri() -> String {
        env::var("NAVER_TOKEN_URI")
            .unwrap_or_else(|_| "https://nid.naver.com/oauth2.0/token".to_string())
    }
}

/// OAuth 인증 프로바이더 타입
///
/// 계정이 연동된 외부 프로바이더를 나타냅니다. 모든 계정은 소셜 로그인으로
/// 생성되므로 반드시 하나의 프로바이더를 가집니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ProviderType {
    /// Google 계정 연동
    Google,
    /// Kakao 계정 연동
    Kakao,
    /// Naver 계정 연동
    Naver,
}

impl ProviderType {
    /// 문자열에서 프로바이더 타입을 파싱합니다.
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "google" => Ok(ProviderType::Google),
            "kakao" => Ok(ProviderType::Kakao),
            "naver" => Ok(ProviderType::Naver),
            _ => Err(format!("Unsupported provider type: {}", s)),
        }
    }

    /// 프로바이더 타입을 문자열로 변환합니다.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderType::Google => "google",
            ProviderType::Kakao => "kakao",
            ProviderType::Naver => "naver",
        }
    }
}
