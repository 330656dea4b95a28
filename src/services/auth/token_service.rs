//! JWT 토큰 관리 서비스 구현
//!
//! JSON Web Token 기반의 인증 시스템을 제공합니다.
//! 액세스 토큰과 리프레시 토큰의 생성, 검증, 재발급, 회수를 담당합니다.

use std::sync::Arc;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use crate::{
    config::{JwtConfig, ProviderType},
    domain::models::token::token::{TokenClaims, TokenPair},
    repositories::tokens::token_repository::RefreshTokenStore,
};
use crate::errors::AppError;

/// JWT 토큰 관리 서비스
///
/// HMAC-SHA256 서명을 사용하여 안전한 JWT 토큰을 생성하고 검증합니다.
/// 액세스 토큰(30분)과 리프레시 토큰(14일)을 지원하며,
/// 리프레시 토큰은 저장소에 보관되어 회수(revoke)가 가능합니다.
pub struct TokenService {
    /// 리프레시 토큰 저장소
    token_store: Arc<dyn RefreshTokenStore>,
}

impl TokenService {
    /// 새 토큰 서비스를 생성합니다.
    pub fn new(token_store: Arc<dyn RefreshTokenStore>) -> Self {
        Self { token_store }
    }

    /// JWT 액세스 토큰 생성
    ///
    /// # Arguments
    ///
    /// * `email` - 토큰 주체가 되는 계정 이메일
    /// * `provider_type` - 계정의 OAuth 프로바이더
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 토큰 생성 실패
    pub fn generate_access_token(
        &self,
        email: &str,
        provider_type: ProviderType,
    ) -> Result<String, AppError> {
        let now = Utc::now();
        let expiration = now + Duration::minutes(JwtConfig::expiration_minutes());

        let claims = TokenClaims {
            sub: email.to_string(),
            provider_type,
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        self.encode_claims(&claims)
    }

    /// JWT 리프레시 토큰 생성
    ///
    /// # Security
    ///
    /// 리프레시 토큰은 Secure HttpOnly Cookie에 저장됩니다.
    pub fn generate_refresh_token(
        &self,
        email: &str,
        provider_type: ProviderType,
    ) -> Result<String, AppError> {
        let now = Utc::now();
        let expiration = now + Duration::days(JwtConfig::refresh_expiration_days());

        let claims = TokenClaims {
            sub: email.to_string(),
            provider_type,
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        self.encode_claims(&claims)
    }

    /// 토큰 쌍 생성 (액세스 + 리프레시)
    ///
    /// 생성된 리프레시 토큰은 저장소에 TTL과 함께 보관됩니다.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let token_pair = token_service
    ///     .generate_token_pair(&account.email, account.provider_type)
    ///     .await?;
    /// ```
    pub async fn generate_token_pair(
        &self,
        email: &str,
        provider_type: ProviderType,
    ) -> Result<TokenPair, AppError> {
        let access_token = self.generate_access_token(email, provider_type)?;
        let refresh_token = self.generate_refresh_token(email, provider_type)?;
        let expires_in = JwtConfig::expiration_minutes() * 60; // 초 단위로 변환

        let refresh_ttl = (JwtConfig::refresh_expiration_days() * 24 * 3600) as u64;
        self.token_store
            .store(&refresh_token, email, refresh_ttl)
            .await?;

        Ok(TokenPair {
            access_token,
            refresh_token,
            expires_in,
        })
    }

    /// JWT 토큰 검증 및 클레임 추출
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 토큰 만료, 잘못된 형식/서명
    /// * `AppError::InternalError` - 기타 시스템 오류
    pub fn verify_token(&self, token: &str) -> Result<TokenClaims, AppError> {
        let secret = JwtConfig::secret();
        let decoding_key = DecodingKey::from_secret(secret.as_ref());
        let validation = Validation::default();

        decode::<TokenClaims>(token, &decoding_key, &validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AppError::AuthenticationError("토큰이 만료되었습니다".to_string())
                },
                jsonwebtoken::errors::ErrorKind::InvalidToken
                | jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                    AppError::AuthenticationError("유효하지 않은 토큰입니다".to_string())
                },
                _ => AppError::InternalError(format!("토큰 검증 실패: {}", e))
            })
    }

    /// 리프레시 토큰 회수
    ///
    /// 저장소에서 해당 토큰 항목을 삭제합니다. 존재하지 않는 토큰도
    /// 성공으로 처리되는 fire-and-forget 연산입니다.
    pub async fn remove_refresh_token(&self, refresh_token: &str) -> Result<(), AppError> {
        self.token_store.remove(refresh_token).await
    }

    /// 리프레시 토큰으로 토큰 쌍 재발급
    ///
    /// 1. 리프레시 토큰의 서명/만료를 검증합니다.
    /// 2. 저장소에 보관된 항목과 소유 계정이 일치하는지 확인합니다.
    /// 3. 기존 리프레시 토큰을 폐기하고 새 토큰 쌍을 발급합니다 (로테이션).
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 검증 실패 또는 회수된 토큰
    pub async fn reissue(&self, refresh_token: &str) -> Result<TokenPair, AppError> {
        let claims = self.verify_token(refresh_token)?;

        let entry = self.token_store
            .find(refresh_token)
            .await?
            .ok_or_else(|| {
                AppError::AuthenticationError("회수되었거나 알 수 없는 리프레시 토큰입니다".to_string())
            })?;

        if entry.email != claims.sub {
            log::warn!("리프레시 토큰 소유 계정 불일치: {}", claims.sub);
            return Err(AppError::AuthenticationError(
                "리프레시 토큰 소유 계정이 일치하지 않습니다".to_string(),
            ));
        }

        // 로테이션: 기존 토큰 폐기 후 새 쌍 발급
        self.token_store.remove(refresh_token).await?;
        self.generate_token_pair(&claims.sub, claims.provider_type).await
    }

    /// Bearer 토큰에서 실제 토큰 부분 추출
    ///
    /// HTTP Authorization 헤더의 "Bearer {token}" 형식에서 토큰 부분만을 추출합니다.
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> Result<&'a str, AppError> {
        if auth_header.starts_with("Bearer ") {
            Ok(&auth_header[7..])
        } else {
            Err(AppError::AuthenticationError("유효하지 않은 인증 헤더 형식입니다".to_string()))
        }
    }

    fn encode_claims(&self, claims: &TokenClaims) -> Result<String, AppError> {
        let secret = JwtConfig::secret();
        let header = Header::default();
        let encoding_key = EncodingKey::from_secret(secret.as_ref());

        encode(&header, claims, &encoding_key)
            .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use async_trait::async_trait;
    use crate::repositories::tokens::token_repository::RefreshTokenEntry;
    use super::*;

    /// 호출을 기록하는 인메모리 리프레시 토큰 저장소
    #[derive(Default)]
    struct RecordingTokenStore {
        stored: Mutex<Vec<(String, String)>>,
        removed: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl RefreshTokenStore for RecordingTokenStore {
        async fn store(&self, refresh_token: &str, email: &str, _ttl_seconds: u64) -> Result<(), AppError> {
            self.stored.lock().unwrap().push((refresh_token.to_string(), email.to_string()));
            Ok(())
        }

        async fn find(&self, refresh_token: &str) -> Result<Option<RefreshTokenEntry>, AppError> {
            let found = self.stored.lock().unwrap().iter()
                .find(|(token, _)| token == refresh_token)
                .map(|(_, email)| RefreshTokenEntry {
                    email: email.clone(),
                    issued_at: Utc::now().timestamp(),
                    expires_at: Utc::now().timestamp() + 3600,
                });
            Ok(found)
        }

        async fn remove(&self, refresh_token: &str) -> Result<(), AppError> {
            self.removed.lock().unwrap().push(refresh_token.to_string());
            self.stored.lock().unwrap().retain(|(token, _)| token != refresh_token);
            Ok(())
        }
    }

    fn service_with_store() -> (TokenService, Arc<RecordingTokenStore>) {
        let store = Arc::new(RecordingTokenStore::default());
        (TokenService::new(store.clone()), store)
    }

    #[actix_web::test]
    async fn test_generated_access_token_roundtrips() {
        let (service, _) = service_with_store();

        let token = service
            .generate_access_token("fan@example.com", ProviderType::Kakao)
            .unwrap();
        let claims = service.verify_token(&token).unwrap();

        assert_eq!(claims.sub, "fan@example.com");
        assert_eq!(claims.provider_type, ProviderType::Kakao);
        assert!(claims.exp > claims.iat);
    }

    #[actix_web::test]
    async fn test_token_pair_stores_refresh_token() {
        let (service, store) = service_with_store();

        let pair = service
            .generate_token_pair("fan@example.com", ProviderType::Google)
            .await
            .unwrap();

        let stored = store.stored.lock().unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].0, pair.refresh_token);
        assert_eq!(stored[0].1, "fan@example.com");
    }

    #[actix_web::test]
    async fn test_tampered_token_is_rejected() {
        let (service, _) = service_with_store();

        let token = service
            .generate_access_token("fan@example.com", ProviderType::Naver)
            .unwrap();

        // 서명 첫 글자를 교체하여 서명 불일치 유도
        let (head, signature) = token.rsplit_once('.').unwrap();
        let mut signature: Vec<char> = signature.chars().collect();
        signature[0] = if signature[0] == 'A' { 'B' } else { 'A' };
        let tampered = format!("{}.{}", head, signature.iter().collect::<String>());

        let result = service.verify_token(&tampered);

        assert!(matches!(result, Err(AppError::AuthenticationError(_))));
    }

    #[actix_web::test]
    async fn test_expired_token_is_rejected() {
        let (service, _) = service_with_store();

        let now = Utc::now().timestamp();
        let claims = TokenClaims {
            sub: "fan@example.com".to_string(),
            provider_type: ProviderType::Kakao,
            iat: now - 7200,
            exp: now - 3600,
        };
        let token = service.encode_claims(&claims).unwrap();

        let result = service.verify_token(&token);

        assert!(matches!(result, Err(AppError::AuthenticationError(_))));
    }

    #[actix_web::test]
    async fn test_remove_refresh_token_delegates_to_store() {
        let (service, store) = service_with_store();

        service.remove_refresh_token("refresh-token-value").await.unwrap();

        assert_eq!(*store.removed.lock().unwrap(), vec!["refresh-token-value".to_string()]);
    }

    #[actix_web::test]
    async fn test_reissue_rotates_refresh_token() {
        let (service, store) = service_with_store();

        let pair = service
            .generate_token_pair("fan@example.com", ProviderType::Kakao)
            .await
            .unwrap();
        let reissued = service.reissue(&pair.refresh_token).await.unwrap();

        // 기존 토큰은 폐기되고 새 토큰이 저장된다
        assert!(store.removed.lock().unwrap().contains(&pair.refresh_token));
        assert_ne!(reissued.refresh_token, pair.refresh_token);
        assert!(service.reissue(&pair.refresh_token).await.is_err());
    }

    #[actix_web::test]
    async fn test_reissue_rejects_unknown_token() {
        let (service, _) = service_with_store();

        let orphan = service
            .generate_refresh_token("fan@example.com", ProviderType::Kakao)
            .unwrap();

        let result = service.reissue(&orphan).await;

        assert!(matches!(result, Err(AppError::AuthenticationError(_))));
    }

    #[actix_web::test]
    async fn test_extract_bearer_token() {
        let (service, _) = service_with_store();

        assert_eq!(service.extract_bearer_token("Bearer abc.def.ghi").unwrap(), "abc.def.ghi");
        assert!(service.extract_bearer_token("Basic abc").is_err());
    }
}
