//! 계정 프로필 응답 DTO

use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};
use crate::config::ProviderType;
use crate::domain::entities::accounts::account::Account;

/// 계정 간단 정보 응답
///
/// 헤더 표시 등 가벼운 화면을 위한 최소 투영입니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountGetSimpleResponse {
    pub nickname: String,
    pub profile_image: Option<String>,
}

impl From<Account> for AccountGetSimpleResponse {
    fn from(account: Account) -> Self {
        Self {
            nickname: account.nickname,
            profile_image: account.profile_image,
        }
    }
}

/// 계정 상세 정보 응답
///
/// 마이페이지용 투영입니다. 프로바이더 발급 ID 등 내부 식별자는 제외됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountGetDetailResponse {
    pub email: String,
    pub nickname: String,
    pub profile_image: Option<String>,
    pub provider_type: ProviderType,
    pub create_date: DateTime,
}

impl From<Account> for AccountGetDetailResponse {
    fn from(account: Account) -> Self {
        Self {
            email: account.email,
            nickname: account.nickname,
            profile_image: account.profile_image,
            provider_type: account.provider_type,
            create_date: account.audit.create_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_account() -> Account {
        let mut account = Account::new(
            "fan@example.com".to_string(),
            "열성팬".to_string(),
            ProviderType::Naver,
            "naver-77".to_string(),
        );
        account.update_profile_image("https://cdn.example.com/p.png".to_string());
        account
    }

    #[test]
    fn test_simple_response_projection() {
        let response = AccountGetSimpleResponse::from(sample_account());

        assert_eq!(response.nickname, "열성팬");
        assert_eq!(response.profile_image.as_deref(), Some("https://cdn.example.com/p.png"));
    }

    #[test]
    fn test_detail_response_projection() {
        let response = AccountGetDetailResponse::from(sample_account());

        assert_eq!(response.email, "fan@example.com");
        assert_eq!(response.provider_type, ProviderType::Naver);
    }
}
