use std::sync::Arc;
use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use crate::caching::redis::RedisClient;
use crate::errors::AppError;

/// 리프레시 토큰 저장 항목 (최소 필수 정보만)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshTokenEntry {
    /// 토큰 소유 계정 이메일
    pub email: String,
    /// 발급 일시 (Unix timestamp)
    pub issued_at: i64,
    /// 만료 시간 (TTL 계산용, Unix timestamp)
    pub expires_at: i64,
}

/// 리프레시 토큰 저장소 인터페이스
///
/// 토큰 문자열만으로 저장/조회/삭제가 가능해야 합니다.
/// 삭제는 fire-and-forget 성격으로, 존재하지 않는 토큰 삭제도 성공합니다.
#[async_trait]
pub trait RefreshTokenStore: Send + Sync {
    /// 리프레시 토큰을 TTL과 함께 저장합니다.
    async fn store(&self, refresh_token: &str, email: &str, ttl_seconds: u64) -> Result<(), AppError>;

    /// 저장된 리프레시 토큰 항목을 조회합니다.
    async fn find(&self, refresh_token: &str) -> Result<Option<RefreshTokenEntry>, AppError>;

    /// 리프레시 토큰을 삭제합니다.
    async fn remove(&self, refresh_token: &str) -> Result<(), AppError>;
}

/// 리프레시 토큰 관리를 위한 Repository
///
/// Redis를 사용하여 다음 기능을 제공합니다:
/// - 리프레시 토큰 저장 및 조회
/// - 토큰 만료 시간 자동 관리 (TTL)
///
/// 긴 JWT 문자열 대신 SHA-256 다이제스트를 Redis 키로 사용합니다.
pub struct TokenRepository {
    redis: Arc<RedisClient>,
}

impl TokenRepository {
    /// 새 토큰 리포지토리를 생성합니다.
    pub fn new(redis: Arc<RedisClient>) -> Self {
        Self { redis }
    }

    /// 토큰을 SHA-256 다이제스트로 변환
    ///
    /// Redis 키로 사용하기 위해 긴 JWT 토큰을 해시화합니다.
    fn digest(token: &str) -> String {
        let hash = Sha256::digest(token.as_bytes());
        hash.iter().map(|b| format!("{:02x}", b)).collect()
    }

    fn key(token: &str) -> String {
        format!("refresh_token:{}", Self::digest(token))
    }
}

#[async_trait]
impl RefreshTokenStore for TokenRepository {
    /// 리프레시 토큰 저장
    ///
    /// TTL이 토큰 수명을 결정하므로 0은 허용하지 않고, 최소 1분을 보장합니다.
    async fn store(&self, refresh_token: &str, email: &str, ttl_seconds: u64) -> Result<(), AppError> {
        if ttl_seconds == 0 {
            return Err(AppError::InternalError(
                "리프레시 토큰 TTL은 0이 될 수 없습니다".to_string(),
            ));
        }

        // 최소 TTL 값 보장 (1분)
        let safe_ttl = if ttl_seconds < 60 {
            log::warn!("TTL이 너무 작습니다 ({}초). 최소값 60초로 설정합니다.", ttl_seconds);
            60
        } else {
            ttl_seconds
        };

        let now = Utc::now().timestamp();
        let entry = RefreshTokenEntry {
            email: email.to_string(),
            issued_at: now,
            expires_at: now + safe_ttl as i64,
        };

        let entry_json = serde_json::to_string(&entry)
            .map_err(|e| AppError::InternalError(format!("토큰 항목 직렬화 실패: {}", e)))?;

        self.redis
            .setex(&Self::key(refresh_token), safe_ttl, &entry_json)
            .await
            .map_err(|e| AppError::RedisError(e.to_string()))?;

        log::debug!("리프레시 토큰 저장 완료 - email: {}, ttl: {}초", email, safe_ttl);
        Ok(())
    }

    /// 리프레시 토큰 조회
    ///
    /// Redis TTL이 만료를 처리하지만, 항목의 만료 시각도 한 번 더 확인하여
    /// 만료된 항목은 삭제 후 None을 반환합니다.
    async fn find(&self, refresh_token: &str) -> Result<Option<RefreshTokenEntry>, AppError> {
        let key = Self::key(refresh_token);

        let entry_json = self.redis
            .get_string(&key)
            .await
            .map_err(|e| AppError::RedisError(e.to_string()))?;

        match entry_json {
            Some(entry_json) => {
                let entry: RefreshTokenEntry = serde_json::from_str(&entry_json)
                    .map_err(|e| AppError::InternalError(format!("토큰 항목 파싱 실패: {}", e)))?;

                if entry.expires_at > Utc::now().timestamp() {
                    Ok(Some(entry))
                } else {
                    // 만료된 토큰 삭제
                    self.redis
                        .del(&key)
                        .await
                        .map_err(|e| AppError::RedisError(e.to_string()))?;
                    Ok(None)
                }
            }
            None => Ok(None),
        }
    }

    /// 리프레시 토큰 삭제 (로그아웃/탈퇴 시 사용)
    ///
    /// 존재하지 않는 토큰 삭제도 성공으로 처리합니다.
    async fn remove(&self, refresh_token: &str) -> Result<(), AppError> {
        self.redis
            .del(&Self::key(refresh_token))
            .await
            .map_err(|e| AppError::RedisError(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_is_hex_sha256() {
        let digest = TokenRepository::digest("sample-token");

        assert_eq!(digest.len(), 64);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_digest_is_deterministic() {
        assert_eq!(
            TokenRepository::digest("sample-token"),
            TokenRepository::digest("sample-token")
        );
        assert_ne!(
            TokenRepository::digest("sample-token"),
            TokenRepository::digest("other-token")
        );
    }

    #[test]
    fn test_key_carries_namespace() {
        let key = TokenRepository::key("sample-token");

        assert!(key.starts_with("refresh_token:"));
    }
}
