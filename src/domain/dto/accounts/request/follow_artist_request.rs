//! 팔로우 아티스트 요청 DTO

use serde::Deserialize;
use validator::Validate;

/// 아티스트 팔로우 요청
#[derive(Debug, Deserialize, Validate)]
pub struct AccountFollowArtistRequest {
    /// 팔로우할 아티스트 토큰
    #[validate(length(min = 1, message = "아티스트 토큰이 비어 있습니다"))]
    pub token: String,
}

/// 팔로우 아티스트 일괄 삭제 요청
///
/// 존재하지 않는 토큰이 섞여 있어도 요청 전체는 성공하며,
/// 해당 항목만 조용히 무시됩니다.
#[derive(Debug, Deserialize)]
pub struct AccountDeleteFollowArtistRequest {
    /// 팔로우를 해제할 아티스트 토큰 목록 (빈 목록 허용)
    pub artist_tokens: Vec<FollowArtistToken>,
}

/// 팔로우 해제 대상 아티스트 토큰
#[derive(Debug, Deserialize)]
pub struct FollowArtistToken {
    pub token: String,
}
