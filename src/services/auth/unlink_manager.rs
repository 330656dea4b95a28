//! OAuth 프로바이더 연동 해제 서비스
//!
//! 계정 탈퇴 시 외부 OAuth 프로바이더에 남아 있는 연동을 해제합니다.
//! 프로바이더별 해제 API를 호출하고 성공 여부를 boolean으로 반환합니다.
//!
//! ## 프로바이더별 엔드포인트
//!
//! | 프로바이더 | 엔드포인트 | 방식 |
//! |-----------|------------|------|
//! | Kakao  | `https://kapi.kakao.com/v1/user/unlink` | Admin Key + target_id |
//! | Google | `https://oauth2.googleapis.com/revoke`  | 자격 증명 revoke |
//! | Naver  | `https://nid.naver.com/oauth2.0/token`  | grant_type=delete |
//!
//! ## 에러 모델
//!
//! 연동 해제는 `Result<bool, AppError>`를 반환합니다:
//! - `Ok(true)` - 프로바이더가 해제를 수락
//! - `Ok(false)` - 프로바이더가 해제를 거부 (4xx/5xx 응답)
//! - `Err(_)` - 전송 실패 등 호출 자체의 오류
//!
//! 호출자(계정 서비스)는 `Ok(false)`와 `Err(_)`를 동일하게
//! 연동 해제 실패로 취급합니다.

use async_trait::async_trait;
use crate::config::{GoogleOAuthConfig, KakaoOAuthConfig, NaverOAuthConfig, ProviderType};
use crate::errors::AppError;

/// OAuth 연동 해제 인터페이스
///
/// 계정 서비스가 소비하는 외부 프로바이더 경계입니다.
/// 테스트에서는 기록형 목 구현으로 대체됩니다.
#[async_trait]
pub trait UnlinkManager: Send + Sync {
    /// 프로바이더에 연동 해제를 요청합니다.
    ///
    /// # Arguments
    ///
    /// * `provider_type` - 계정이 연동된 프로바이더
    /// * `provider_id` - 프로바이더가 발급한 계정 식별자
    async fn unlink(&self, provider_type: ProviderType, provider_id: &str) -> Result<bool, AppError>;
}

/// HTTP 기반 OAuth 연동 해제 구현체
///
/// 프로바이더별 해제 API를 reqwest로 호출합니다.
pub struct OAuth2UnlinkManager {
    client: reqwest::Client,
}

impl OAuth2UnlinkManager {
    /// 새 연동 해제 매니저를 생성합니다.
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Kakao 연동 해제
    ///
    /// Admin Key 인증으로 대상 계정을 직접 지정하여 해제합니다.
    async fn unlink_kakao(&self, provider_id: &str) -> Result<bool, AppError> {
        let params = [
            ("target_id_type", "user_id"),
            ("target_id", provider_id),
        ];

        let response = self.client
            .post(KakaoOAuthConfig::unlink_uri())
            .header("Authorization", format!("KakaoAK {}", KakaoOAuthConfig::admin_key()))
            .form(&params)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Kakao 연동 해제 요청 실패: {}", e)))?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            log::warn!("Kakao 연동 해제 거부됨: {}", error_text);
            return Ok(false);
        }

        Ok(true)
    }

    /// Google 연동 해제
    ///
    /// revoke 엔드포인트에 프로바이더 자격 증명을 전달하여 해제합니다.
    async fn unlink_google(&self, provider_id: &str) -> Result<bool, AppError> {
        let revoke_url = format!(
            "{}?token={}",
            GoogleOAuthConfig::revoke_uri(),
            urlencoding::encode(provider_id)
        );

        let response = self.client
            .post(&revoke_url)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Google 연동 해제 요청 실패: {}", e)))?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            log::warn!("Google 연동 해제 거부됨: {}", error_text);
            return Ok(false);
        }

        Ok(true)
    }

    /// Naver 연동 해제
    ///
    /// 토큰 삭제(grant_type=delete) 호출로 연동을 해제합니다.
    async fn unlink_naver(&self, provider_id: &str) -> Result<bool, AppError> {
        let params = [
            ("grant_type", "delete"),
            ("client_id", &NaverOAuthConfig::client_id()),
            ("client_secret", &NaverOAuthConfig::client_secret()),
            ("access_token", provider_id),
            ("service_provider", "NAVER"),
        ];

        let response = self.client
            .post(NaverOAuthConfig::token_uri())
            .form(&params)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Naver 연동 해제 요청 실패: {}", e)))?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            log::warn!("Naver 연동 해제 거부됨: {}", error_text);
            return Ok(false);
        }

        Ok(true)
    }
}

impl Default for OAuth2UnlinkManager {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UnlinkManager for OAuth2UnlinkManager {
    async fn unlink(&self, provider_type: ProviderType, provider_id: &str) -> Result<bool, AppError> {
        log::info!("OAuth 연동 해제 요청: provider={}", provider_type.as_str());

        match provider_type {
            ProviderType::Kakao => self.unlink_kakao(provider_id).await,
            ProviderType::Google => self.unlink_google(provider_id).await,
            ProviderType::Naver => self.unlink_naver(provider_id).await,
        }
    }
}
