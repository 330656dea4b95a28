//! 인증된 계정 컨텍스트

use crate::config::ProviderType;

/// 인증 미들웨어가 검증한 계정 정보
///
/// JWT 클레임에서 추출되어 request extensions에 저장되며,
/// 핸들러는 이 구조체를 통해 요청 주체를 식별합니다.
#[derive(Debug, Clone)]
pub struct AuthenticatedAccount {
    /// 계정 이메일 (모든 서비스 연산의 식별 키)
    pub email: String,
    /// 연동된 OAuth 프로바이더
    pub provider_type: ProviderType,
}
