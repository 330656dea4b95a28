use serde::Deserialize;

/// 토큰 재발급 요청 DTO
///
/// 리프레시 토큰은 우선 쿠키에서 찾고, 없으면 요청 본문을 사용합니다.
#[derive(Debug, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}
