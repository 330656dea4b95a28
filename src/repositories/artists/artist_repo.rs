//! # 아티스트 리포지토리 구현
//!
//! 아티스트 엔티티의 데이터 액세스 계층입니다.
//! 계정의 팔로우 토큰 집합을 기준으로 아티스트 목록을 조회합니다.

use std::sync::Arc;
use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{bson::doc, Collection};
use crate::{
    db::Database,
    domain::entities::{accounts::account::Account, artists::artist::Artist},
    errors::AppError,
};

/// 아티스트 컬렉션 이름
const COLLECTION_NAME: &str = "artists";

/// 계정 컬렉션 이름 (팔로우 조인용)
const ACCOUNT_COLLECTION_NAME: &str = "accounts";

/// 아티스트 저장소 인터페이스
#[async_trait]
pub trait ArtistStore: Send + Sync {
    /// 계정 이메일로 팔로우 중인 아티스트 목록을 조회합니다.
    ///
    /// 계정이 없거나 팔로우가 없으면 빈 목록을 반환합니다.
    /// 순서는 보장되지 않습니다.
    async fn find_follow_artist_list_by_account_email(
        &self,
        email: &str,
    ) -> Result<Vec<Artist>, AppError>;
}

/// 아티스트 데이터 액세스 리포지토리
pub struct ArtistRepository {
    /// MongoDB 데이터베이스 연결
    db: Arc<Database>,
}

impl ArtistRepository {
    /// 새 아티스트 리포지토리를 생성합니다.
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<Artist> {
        self.db.get_database().collection::<Artist>(COLLECTION_NAME)
    }

    fn account_collection(&self) -> Collection<Account> {
        self.db.get_database().collection::<Account>(ACCOUNT_COLLECTION_NAME)
    }
}

#[async_trait]
impl ArtistStore for ArtistRepository {
    /// 계정의 팔로우 토큰 집합을 읽어 해당 아티스트들을 `$in` 조회합니다.
    async fn find_follow_artist_list_by_account_email(
        &self,
        email: &str,
    ) -> Result<Vec<Artist>, AppError> {
        let account = self.account_collection()
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let tokens = match account {
            Some(account) if !account.follow_artists.is_empty() => account.follow_artists,
            _ => return Ok(Vec::new()),
        };

        let cursor = self.collection()
            .find(doc! { "token": { "$in": tokens } })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }
}
