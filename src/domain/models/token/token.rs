//! JWT 토큰 클레임 및 토큰 쌍 모델

use serde::{Deserialize, Serialize};
use crate::config::ProviderType;

/// JWT 토큰의 클레임(Payload) 구조체
///
/// 개인정보 보호를 위해 최소한의 정보만 포함합니다.
/// 모든 서비스 연산이 이메일을 식별 키로 사용하므로 `sub`에 이메일을 담습니다.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenClaims {
    /// 토큰의 주체 (계정 이메일)
    pub sub: String,
    /// 연동된 OAuth 프로바이더
    pub provider_type: ProviderType,
    /// 토큰 발급 시간 (Unix timestamp)
    pub iat: i64,
    /// 토큰 만료 시간 (Unix timestamp)
    pub exp: i64,
}

/// JWT 토큰 쌍 구조체
///
/// 클라이언트에게 전달되는 토큰 집합을 나타냅니다.
/// 실제 전달은 HttpOnly 쿠키를 통해 이루어집니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPair {
    /// 액세스 토큰 (API 접근용 단기 토큰)
    pub access_token: String,
    /// 리프레시 토큰 (토큰 갱신용 장기 토큰)
    pub refresh_token: String,
    /// 액세스 토큰 만료 시간 (초)
    pub expires_in: i64,
}
