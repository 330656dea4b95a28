//! Account Entity Implementation
//!
//! 계정 엔티티의 핵심 구현체입니다.
//! 모든 계정은 OAuth 프로바이더 연동으로 생성되며, 탈퇴는 소프트 삭제로 처리됩니다.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use crate::config::ProviderType;
use crate::domain::entities::audit::AuditInfo;

/// 계정 엔티티
///
/// 서비스의 모든 사용자 계정을 표현하는 핵심 도메인 엔티티입니다.
/// 팔로우한 아티스트는 아티스트 토큰 집합으로 보관합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 계정 이메일 (unique)
    pub email: String,
    /// 닉네임
    pub nickname: String,
    /// 프로필 이미지 URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    /// 연동된 OAuth 프로바이더
    pub provider_type: ProviderType,
    /// 프로바이더가 발급한 계정 식별자
    pub provider_id: String,
    /// 팔로우 중인 아티스트 토큰 집합
    #[serde(default)]
    pub follow_artists: Vec<String>,
    /// 생성/수정/삭제 감사 정보
    pub audit: AuditInfo,
}

impl Account {
    /// 새 계정 생성
    ///
    /// OAuth 프로바이더 인증을 통해 확보한 정보로 계정을 생성합니다.
    pub fn new(
        email: String,
        nickname: String,
        provider_type: ProviderType,
        provider_id: String,
    ) -> Self {
        Self {
            id: None,
            email,
            nickname,
            profile_image: None,
            provider_type,
            provider_id,
            follow_artists: Vec::new(),
            audit: AuditInfo::now(),
        }
    }

    /// 닉네임 변경
    pub fn update_nickname(&mut self, nickname: String) {
        self.nickname = nickname;
        self.audit.touch();
    }

    /// 프로필 이미지 변경
    pub fn update_profile_image(&mut self, profile_image: String) {
        self.profile_image = Some(profile_image);
        self.audit.touch();
    }

    /// 계정 탈퇴 처리 (소프트 삭제)
    ///
    /// 삭제 일시를 설정할 뿐, 문서를 물리적으로 제거하지 않습니다.
    pub fn withdraw(&mut self) {
        self.audit.mark_deleted();
    }

    /// 탈퇴(소프트 삭제) 여부 확인
    pub fn is_deleted(&self) -> bool {
        self.audit.is_deleted()
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}
