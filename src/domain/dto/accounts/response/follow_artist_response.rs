//! 팔로우 아티스트 목록 응답 DTO

use serde::{Deserialize, Serialize};
use crate::domain::entities::artists::artist::Artist;

/// 팔로우 아티스트 목록 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FollowArtistGetListResponse {
    pub artists: Vec<FollowArtistResponse>,
    pub total: usize,
}

impl FollowArtistGetListResponse {
    /// 아티스트 엔티티 목록을 응답으로 변환합니다.
    pub fn convert(artists: Vec<Artist>) -> Self {
        let artists: Vec<FollowArtistResponse> = artists
            .into_iter()
            .map(FollowArtistResponse::from)
            .collect();
        let total = artists.len();

        Self { artists, total }
    }
}

/// 팔로우 아티스트 단건 투영
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FollowArtistResponse {
    pub name: String,
    pub token: String,
    pub image: Option<String>,
}

impl From<Artist> for FollowArtistResponse {
    fn from(artist: Artist) -> Self {
        Self {
            name: artist.name,
            token: artist.token,
            image: artist.image,
        }
    }
}
