//! Artist Entity Implementation

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use crate::domain::entities::audit::AuditInfo;
use crate::domain::models::entity_token::EntityToken;

/// 아티스트 엔티티
///
/// 계정이 팔로우할 수 있는 아티스트를 표현합니다.
/// 외부에 노출되는 식별자는 내부 ID가 아닌 불투명 토큰입니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artist {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 활동명
    pub name: String,
    /// 외부 노출용 불투명 토큰 (unique)
    pub token: String,
    /// 대표 이미지 URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// 생성/수정/삭제 감사 정보
    pub audit: AuditInfo,
}

impl Artist {
    /// 새 아티스트 생성
    ///
    /// 외부 노출용 토큰이 자동으로 발급됩니다.
    pub fn new(name: String, image: Option<String>) -> Self {
        Self {
            id: None,
            name,
            token: EntityToken::Artist.generate_token(),
            image,
            audit: AuditInfo::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_artist_has_prefixed_token() {
        let artist = Artist::new("미드나잇블루".to_string(), None);

        assert!(artist.token.starts_with("ARTIST_"));
        assert!(!artist.audit.is_deleted());
    }

    #[test]
    fn test_each_artist_gets_distinct_token() {
        let first = Artist::new("첫번째".to_string(), None);
        let second = Artist::new("두번째".to_string(), None);

        assert_ne!(first.token, second.token);
    }
}
