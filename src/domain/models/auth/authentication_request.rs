//! 인증 미들웨어 동작 모드

/// 인증 미들웨어 모드
#[derive(Debug, Clone, PartialEq)]
pub enum AuthMode {
    /// 인증 필수 - 토큰이 없거나 유효하지 않으면 401 응답
    Required,
    /// 인증 선택 - 토큰이 있으면 검증하고, 없어도 요청 진행
    Optional,
}
