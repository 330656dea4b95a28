//! 계정 프로필 수정 요청 DTO

use serde::Deserialize;
use validator::Validate;

/// 닉네임 변경 요청
#[derive(Debug, Deserialize, Validate)]
pub struct AccountUpdateNicknameRequest {
    /// 변경할 닉네임 (2~20자)
    #[validate(length(min = 2, max = 20, message = "닉네임은 2~20자 사이여야 합니다"))]
    pub nickname: String,
}

/// 프로필 이미지 변경 요청
#[derive(Debug, Deserialize, Validate)]
pub struct AccountUpdateImageRequest {
    /// 변경할 프로필 이미지 URL
    #[validate(url(message = "유효한 이미지 URL이 아닙니다"))]
    pub profile_image: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nickname_length_validation() {
        let too_short = AccountUpdateNicknameRequest { nickname: "a".to_string() };
        let valid = AccountUpdateNicknameRequest { nickname: "새닉네임".to_string() };

        assert!(too_short.validate().is_err());
        assert!(valid.validate().is_ok());
    }

    #[test]
    fn test_image_url_validation() {
        let invalid = AccountUpdateImageRequest { profile_image: "not-a-url".to_string() };
        let valid = AccountUpdateImageRequest {
            profile_image: "https://cdn.example.com/profile.png".to_string(),
        };

        assert!(invalid.validate().is_err());
        assert!(valid.validate().is_ok());
    }
}
