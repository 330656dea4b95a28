//! # 계정 리포지토리 구현
//!
//! 계정 엔티티의 데이터 액세스 계층을 담당하는 리포지토리입니다.
//! MongoDB를 주 저장소로 사용하고, Redis를 통한 읽기 캐싱을 지원합니다.
//!
//! ## 특징
//!
//! - **하이브리드 스토리지**: MongoDB + Redis 캐싱
//! - **생성자 주입**: 데이터베이스/캐시 핸들을 명시적으로 전달받음
//! - **소프트 삭제 보존**: 탈퇴 계정도 문서를 유지한 채 저장
//! - **데이터 무결성**: 이메일 유니크 인덱스 관리

use std::sync::Arc;
use async_trait::async_trait;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};
use crate::{
    caching::redis::RedisClient,
    db::Database,
    domain::entities::accounts::account::Account,
    errors::AppError,
};

/// 계정 컬렉션 이름
const COLLECTION_NAME: &str = "accounts";

/// 이메일 캐시 TTL (초)
const CACHE_TTL_SECONDS: u64 = 600;

/// 계정 저장소 인터페이스
///
/// 서비스 계층이 소비하는 계정 영속화 계약입니다.
/// 테스트에서는 기록형 목(mock) 구현으로 대체됩니다.
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// 이메일로 계정을 조회합니다.
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AppError>;

    /// 계정을 저장합니다. 식별자가 있으면 갱신, 없으면 신규 삽입합니다.
    async fn save(&self, account: &Account) -> Result<(), AppError>;

    /// 팔로우 목록에서 주어진 토큰들을 일괄 제거합니다.
    ///
    /// 존재하지 않는 토큰은 조용히 무시되며, 빈 목록도 정상 처리됩니다.
    async fn remove_follow_artists(&self, email: &str, tokens: &[String]) -> Result<(), AppError>;

    /// 팔로우 목록에 토큰을 추가합니다. 이미 팔로우 중이면 변화가 없습니다.
    async fn add_follow_artist(&self, email: &str, token: &str) -> Result<(), AppError>;
}

/// 계정 데이터 액세스 리포지토리
///
/// ## 캐싱 전략
///
/// - **캐시 키**: `account:email:{email}`
/// - **TTL**: 600초 (10분)
/// - **쓰기 후 무효화**: 계정 변경 시 이메일 캐시 제거
pub struct AccountRepository {
    /// MongoDB 데이터베이스 연결
    db: Arc<Database>,
    /// Redis 캐시 클라이언트
    redis: Arc<RedisClient>,
}

impl AccountRepository {
    /// 새 계정 리포지토리를 생성합니다.
    pub fn new(db: Arc<Database>, redis: Arc<RedisClient>) -> Self {
        Self { db, redis }
    }

    fn collection(&self) -> Collection<Account> {
        self.db.get_database().collection::<Account>(COLLECTION_NAME)
    }

    fn cache_key(email: &str) -> String {
        format!("account:email:{}", email)
    }

    async fn invalidate_cache(&self, email: &str) {
        let _ = self.redis.del(&Self::cache_key(email)).await;
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// 애플리케이션 초기화 시점에 한 번 실행하여 이메일 유니크 제약과
    /// 조회 성능을 보장합니다.
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        self.collection()
            .create_indexes([email_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl AccountStore for AccountRepository {
    /// 이메일 주소로 계정 조회
    ///
    /// 캐시 우선 조회를 통해 성능을 최적화합니다.
    /// 캐시 미스 시 MongoDB에서 조회 후 캐시에 저장합니다.
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AppError> {
        // 캐시에서 먼저 확인
        let cache_key = Self::cache_key(email);

        if let Ok(Some(cached)) = self.redis.get::<Account>(&cache_key).await {
            return Ok(Some(cached));
        }

        // DB 에서 조회
        let account = self.collection()
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        // 캐시에 저장 (10분)
        if let Some(ref account) = account {
            let _ = self.redis
                .set_with_expiry(&cache_key, account, CACHE_TTL_SECONDS)
                .await;
        }

        Ok(account)
    }

    /// 계정 저장
    ///
    /// 식별자가 있는 계정은 문서 전체를 교체하고, 없는 계정은 새로 삽입합니다.
    /// 저장 후 해당 이메일의 캐시를 무효화합니다.
    async fn save(&self, account: &Account) -> Result<(), AppError> {
        match account.id {
            Some(id) => {
                self.collection()
                    .replace_one(doc! { "_id": id }, account)
                    .await
                    .map_err(|e| AppError::DatabaseError(e.to_string()))?;
            }
            None => {
                self.collection()
                    .insert_one(account)
                    .await
                    .map_err(|e| AppError::DatabaseError(e.to_string()))?;
            }
        }

        self.invalidate_cache(&account.email).await;

        Ok(())
    }

    /// 팔로우 아티스트 일괄 제거
    ///
    /// `$pull` + `$in` 연산으로 한 번의 갱신으로 처리합니다.
    /// 목록에 없는 토큰이 섞여 있어도 매칭되는 항목만 제거됩니다.
    async fn remove_follow_artists(&self, email: &str, tokens: &[String]) -> Result<(), AppError> {
        self.collection()
            .update_one(
                doc! { "email": email },
                doc! { "$pull": { "follow_artists": { "$in": tokens.to_vec() } } },
            )
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        self.invalidate_cache(email).await;

        Ok(())
    }

    /// 팔로우 아티스트 추가
    ///
    /// `$addToSet` 연산으로 중복 팔로우를 방지합니다.
    async fn add_follow_artist(&self, email: &str, token: &str) -> Result<(), AppError> {
        self.collection()
            .update_one(
                doc! { "email": email },
                doc! { "$addToSet": { "follow_artists": token } },
            )
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        self.invalidate_cache(email).await;

        Ok(())
    }
}
