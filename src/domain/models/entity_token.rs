//! 엔티티 토큰 체계
//!
//! 내부 ID를 외부에 노출하지 않기 위해 엔티티 타입별 접두사가 붙은
//! 불투명 토큰을 사용합니다. 저장소와 API 경계 모두 정규화된(접두사 포함)
//! 형태를 canonical 식별자로 취급합니다.

use uuid::Uuid;

/// 엔티티 타입별 토큰 체계
///
/// 토큰 발급(`generate_token`)과 정규화(`identify_token`)를 담당합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityToken {
    /// 계정 토큰 (`ACCOUNT_` 접두사)
    Account,
    /// 아티스트 토큰 (`ARTIST_` 접두사)
    Artist,
}

impl EntityToken {
    /// 엔티티 타입의 토큰 접두사
    pub fn prefix(&self) -> &'static str {
        match self {
            EntityToken::Account => "ACCOUNT_",
            EntityToken::Artist => "ARTIST_",
        }
    }

    /// 새 토큰을 발급합니다.
    ///
    /// `{접두사}{UUID v4}` 형태의 불투명 토큰을 생성합니다.
    pub fn generate_token(&self) -> String {
        format!("{}{}", self.prefix(), Uuid::new_v4())
    }

    /// 입력 토큰을 canonical 식별자로 정규화합니다.
    ///
    /// 접두사가 없는 입력에는 접두사를 붙여 반환하고, 이미 정규화된 입력은
    /// 그대로 반환합니다. 검증이 아닌 정규화이므로 존재하지 않는 토큰도
    /// 거부하지 않습니다 - 존재 여부는 저장소 연산에서 조용히 무시됩니다.
    pub fn identify_token(&self, token: &str) -> String {
        if token.starts_with(self.prefix()) {
            token.to_string()
        } else {
            format!("{}{}", self.prefix(), token)
        }
    }
}
