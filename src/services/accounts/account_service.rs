//! # 계정 관리 서비스 구현
//!
//! 계정의 프로필 조회/수정, 팔로우 아티스트 관리, 계정 탈퇴를 담당하는
//! 핵심 비즈니스 로직을 구현합니다.
//!
//! ## 탈퇴 처리 흐름
//!
//! ```text
//! withdraw_account(email, refresh_token)
//!   1. 이메일로 계정 조회          → 없으면 NotFound
//!   2. 탈퇴 상태 검증              → 이미 탈퇴면 AlreadyDeleted
//!   3. OAuth 프로바이더 연동 해제   → 거부/오류면 UnlinkFailed (이후 단계 중단)
//!   4. 리프레시 토큰 회수
//!   5. 소프트 삭제 마킹 후 저장
//! ```
//!
//! 순서는 고정입니다: 검증 → 연동 해제 → 토큰 회수 → 영속화.
//! 연동 해제가 실패하면 토큰 회수와 저장은 수행되지 않습니다.
//! 연동 해제 성공 후 저장 전에 중단되면 프로바이더 연동만 해제된 상태가
//! 남을 수 있습니다 - 보상 트랜잭션은 수행하지 않습니다.
//!
//! ## 연동 해제 실패 통합 정책
//!
//! 연동 해제 호출의 `Ok(false)`와 모든 `Err` 변형은 원인을 버리고
//! 단일한 `UnlinkFailed` 에러로 통합됩니다.

use std::sync::Arc;
use crate::{
    domain::{
        dto::accounts::{
            request::FollowArtistToken,
            response::{AccountGetDetailResponse, AccountGetSimpleResponse, FollowArtistGetListResponse},
        },
        entities::accounts::account::Account,
        models::entity_token::EntityToken,
    },
    repositories::{
        accounts::account_repo::AccountStore,
        artists::artist_repo::ArtistStore,
    },
    services::auth::{token_service::TokenService, unlink_manager::UnlinkManager},
};
use crate::errors::AppError;

/// 계정 관리 비즈니스 로직 서비스
///
/// 모든 연산은 인증 미들웨어가 검증한 계정 이메일을 식별 키로 사용합니다.
/// 저장소와 외부 연동은 생성자 주입된 trait 구현체를 통해서만 접근합니다.
pub struct AccountService {
    /// 계정 저장소
    account_store: Arc<dyn AccountStore>,
    /// 아티스트 저장소
    artist_store: Arc<dyn ArtistStore>,
    /// JWT 토큰 서비스
    token_service: Arc<TokenService>,
    /// OAuth 연동 해제 매니저
    unlink_manager: Arc<dyn UnlinkManager>,
}

impl AccountService {
    /// 새 계정 서비스를 생성합니다.
    pub fn new(
        account_store: Arc<dyn AccountStore>,
        artist_store: Arc<dyn ArtistStore>,
        token_service: Arc<TokenService>,
        unlink_manager: Arc<dyn UnlinkManager>,
    ) -> Self {
        Self {
            account_store,
            artist_store,
            token_service,
            unlink_manager,
        }
    }

    /// 계정 탈퇴
    ///
    /// 프로바이더 연동 해제와 리프레시 토큰 회수를 거쳐 계정을
    /// 소프트 삭제합니다. 문서는 물리적으로 제거되지 않습니다.
    ///
    /// # Arguments
    ///
    /// * `email` - 탈퇴할 계정의 이메일
    /// * `refresh_token` - 회수할 리프레시 토큰 (소유 검증은 하지 않음)
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 계정이 존재하지 않음
    /// * `AppError::AlreadyDeleted` - 이미 탈퇴 처리된 계정
    /// * `AppError::UnlinkFailed` - 연동 해제 거부 또는 호출 실패
    ///
    /// 토큰 회수/저장 단계의 에러는 각 collaborator의 에러가 그대로 전파됩니다.
    pub async fn withdraw_account(&self, email: &str, refresh_token: &str) -> Result<(), AppError> {
        let mut account = self.find_account_by_email(email).await?;
        Self::validate_account_status(&account)?;
        self.unlink_account(&account).await?;

        self.token_service.remove_refresh_token(refresh_token).await?;

        account.withdraw();
        self.account_store.save(&account).await?;

        log::info!("계정 탈퇴 처리 완료: {}", email);
        Ok(())
    }

    /// 계정 간단 정보 조회
    pub async fn get_account_simple_info(&self, email: &str) -> Result<AccountGetSimpleResponse, AppError> {
        let account = self.find_account_by_email(email).await?;
        Ok(AccountGetSimpleResponse::from(account))
    }

    /// 계정 상세 정보 조회
    pub async fn get_account_detail_info(&self, email: &str) -> Result<AccountGetDetailResponse, AppError> {
        let account = self.find_account_by_email(email).await?;
        Ok(AccountGetDetailResponse::from(account))
    }

    /// 닉네임 변경
    pub async fn update_account_nickname(&self, email: &str, nickname: String) -> Result<(), AppError> {
        let mut account = self.find_account_by_email(email).await?;
        account.update_nickname(nickname);
        self.account_store.save(&account).await
    }

    /// 프로필 이미지 변경
    pub async fn update_account_image(&self, email: &str, profile_image: String) -> Result<(), AppError> {
        let mut account = self.find_account_by_email(email).await?;
        account.update_profile_image(profile_image);
        self.account_store.save(&account).await
    }

    /// 팔로우 아티스트 목록 조회
    pub async fn get_follow_artists(&self, email: &str) -> Result<FollowArtistGetListResponse, AppError> {
        let artists = self.artist_store
            .find_follow_artist_list_by_account_email(email)
            .await?;
        Ok(FollowArtistGetListResponse::convert(artists))
    }

    /// 아티스트 팔로우
    ///
    /// 토큰을 canonical 형태로 정규화하여 팔로우 집합에 추가합니다.
    /// 이미 팔로우 중인 아티스트는 조용히 무시됩니다.
    pub async fn follow_artist(&self, email: &str, token: &str) -> Result<(), AppError> {
        let token = EntityToken::Artist.identify_token(token);
        self.account_store.add_follow_artist(email, &token).await
    }

    /// 팔로우 아티스트 일괄 삭제
    ///
    /// 각 토큰을 canonical 형태로 정규화한 뒤 한 번의 일괄 제거를 수행합니다.
    /// 팔로우 중이 아닌 토큰이 섞여 있어도 에러 없이 해당 항목만 무시되며,
    /// 빈 목록도 그대로 저장소에 전달됩니다.
    pub async fn delete_follow_artists(
        &self,
        email: &str,
        artist_tokens: Vec<FollowArtistToken>,
    ) -> Result<(), AppError> {
        let tokens: Vec<String> = artist_tokens
            .into_iter()
            .map(|t| EntityToken::Artist.identify_token(&t.token))
            .collect();

        self.account_store.remove_follow_artists(email, &tokens).await
    }

    async fn find_account_by_email(&self, email: &str) -> Result<Account, AppError> {
        self.account_store
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::NotFound("계정을 찾을 수 없습니다".to_string()))
    }

    fn validate_account_status(account: &Account) -> Result<(), AppError> {
        if account.is_deleted() {
            return Err(AppError::AlreadyDeleted("이미 탈퇴 처리된 계정입니다".to_string()));
        }
        Ok(())
    }

    /// 프로바이더 연동 해제
    ///
    /// 해제 거부(`Ok(false)`)와 호출 오류(`Err`)를 모두 `UnlinkFailed`로
    /// 통합합니다. 원래의 실패 원인은 로그로만 남기고 버립니다.
    async fn unlink_account(&self, account: &Account) -> Result<(), AppError> {
        match self.unlink_manager
            .unlink(account.provider_type, &account.provider_id)
            .await
        {
            Ok(true) => Ok(()),
            Ok(false) => {
                log::warn!("연동 해제 거부됨: {}", account.email);
                Err(AppError::UnlinkFailed("프로바이더 연동 해제에 실패했습니다".to_string()))
            }
            Err(e) => {
                log::warn!("연동 해제 호출 실패: {} - {}", account.email, e);
                Err(AppError::UnlinkFailed("프로바이더 연동 해제에 실패했습니다".to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;
    use async_trait::async_trait;
    use crate::config::ProviderType;
    use crate::domain::entities::artists::artist::Artist;
    use crate::repositories::tokens::token_repository::{RefreshTokenEntry, RefreshTokenStore};
    use super::*;

    /// 호출을 기록하는 계정 저장소 목
    #[derive(Default)]
    struct MockAccountStore {
        accounts: Mutex<HashMap<String, Account>>,
        saved: Mutex<Vec<Account>>,
        removed_follows: Mutex<Vec<(String, Vec<String>)>>,
        added_follows: Mutex<Vec<(String, String)>>,
    }

    impl MockAccountStore {
        fn with_account(account: Account) -> Self {
            let store = Self::default();
            store.accounts.lock().unwrap().insert(account.email.clone(), account);
            store
        }
    }

    #[async_trait]
    impl AccountStore for MockAccountStore {
        async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AppError> {
            Ok(self.accounts.lock().unwrap().get(email).cloned())
        }

        async fn save(&self, account: &Account) -> Result<(), AppError> {
            self.saved.lock().unwrap().push(account.clone());
            self.accounts.lock().unwrap().insert(account.email.clone(), account.clone());
            Ok(())
        }

        async fn remove_follow_artists(&self, email: &str, tokens: &[String]) -> Result<(), AppError> {
            self.removed_follows.lock().unwrap().push((email.to_string(), tokens.to_vec()));
            Ok(())
        }

        async fn add_follow_artist(&self, email: &str, token: &str) -> Result<(), AppError> {
            self.added_follows.lock().unwrap().push((email.to_string(), token.to_string()));
            Ok(())
        }
    }

    /// 고정된 목록을 반환하는 아티스트 저장소 목
    #[derive(Default)]
    struct MockArtistStore {
        artists: Vec<Artist>,
    }

    #[async_trait]
    impl ArtistStore for MockArtistStore {
        async fn find_follow_artist_list_by_account_email(
            &self,
            _email: &str,
        ) -> Result<Vec<Artist>, AppError> {
            Ok(self.artists.clone())
        }
    }

    /// 회수 호출을 기록하는 리프레시 토큰 저장소 목
    #[derive(Default)]
    struct MockRefreshTokenStore {
        removed: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl RefreshTokenStore for MockRefreshTokenStore {
        async fn store(&self, _refresh_token: &str, _email: &str, _ttl_seconds: u64) -> Result<(), AppError> {
            Ok(())
        }

        async fn find(&self, _refresh_token: &str) -> Result<Option<RefreshTokenEntry>, AppError> {
            Ok(None)
        }

        async fn remove(&self, refresh_token: &str) -> Result<(), AppError> {
            self.removed.lock().unwrap().push(refresh_token.to_string());
            Ok(())
        }
    }

    /// 연동 해제 결과를 고정할 수 있는 목
    enum UnlinkOutcome {
        Accepted,
        Refused,
        TransportError,
        InternalError,
    }

    struct MockUnlinkManager {
        outcome: UnlinkOutcome,
        calls: Mutex<Vec<(ProviderType, String)>>,
    }

    impl MockUnlinkManager {
        fn new(outcome: UnlinkOutcome) -> Self {
            Self {
                outcome,
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl UnlinkManager for MockUnlinkManager {
        async fn unlink(&self, provider_type: ProviderType, provider_id: &str) -> Result<bool, AppError> {
            self.calls.lock().unwrap().push((provider_type, provider_id.to_string()));
            match self.outcome {
                UnlinkOutcome::Accepted => Ok(true),
                UnlinkOutcome::Refused => Ok(false),
                UnlinkOutcome::TransportError => {
                    Err(AppError::ExternalServiceError("connection reset".to_string()))
                }
                UnlinkOutcome::InternalError => {
                    Err(AppError::InternalError("unexpected".to_string()))
                }
            }
        }
    }

    struct TestFixture {
        service: AccountService,
        account_store: Arc<MockAccountStore>,
        token_store: Arc<MockRefreshTokenStore>,
        unlink_manager: Arc<MockUnlinkManager>,
    }

    fn fixture(account_store: MockAccountStore, outcome: UnlinkOutcome) -> TestFixture {
        fixture_with_artists(account_store, outcome, Vec::new())
    }

    fn fixture_with_artists(
        account_store: MockAccountStore,
        outcome: UnlinkOutcome,
        artists: Vec<Artist>,
    ) -> TestFixture {
        let account_store = Arc::new(account_store);
        let token_store = Arc::new(MockRefreshTokenStore::default());
        let unlink_manager = Arc::new(MockUnlinkManager::new(outcome));

        let service = AccountService::new(
            account_store.clone(),
            Arc::new(MockArtistStore { artists }),
            Arc::new(TokenService::new(token_store.clone())),
            unlink_manager.clone(),
        );

        TestFixture {
            service,
            account_store,
            token_store,
            unlink_manager,
        }
    }

    fn sample_account() -> Account {
        Account::new(
            "fan@example.com".to_string(),
            "열성팬".to_string(),
            ProviderType::Kakao,
            "9876543210".to_string(),
        )
    }

    #[actix_web::test]
    async fn test_withdraw_unknown_account_fails_without_side_effects() {
        let f = fixture(MockAccountStore::default(), UnlinkOutcome::Accepted);

        let result = f.service.withdraw_account("ghost@example.com", "refresh-token").await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
        assert!(f.unlink_manager.calls.lock().unwrap().is_empty());
        assert!(f.token_store.removed.lock().unwrap().is_empty());
        assert!(f.account_store.saved.lock().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_withdraw_already_deleted_account_fails_without_side_effects() {
        let mut account = sample_account();
        account.withdraw();
        let f = fixture(MockAccountStore::with_account(account), UnlinkOutcome::Accepted);

        let result = f.service.withdraw_account("fan@example.com", "refresh-token").await;

        assert!(matches!(result, Err(AppError::AlreadyDeleted(_))));
        assert!(f.unlink_manager.calls.lock().unwrap().is_empty());
        assert!(f.token_store.removed.lock().unwrap().is_empty());
        assert!(f.account_store.saved.lock().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_withdraw_stops_when_unlink_is_refused() {
        let f = fixture(MockAccountStore::with_account(sample_account()), UnlinkOutcome::Refused);

        let result = f.service.withdraw_account("fan@example.com", "refresh-token").await;

        assert!(matches!(result, Err(AppError::UnlinkFailed(_))));
        // 연동 해제 이후 단계는 수행되지 않는다
        assert_eq!(f.unlink_manager.calls.lock().unwrap().len(), 1);
        assert!(f.token_store.removed.lock().unwrap().is_empty());
        assert!(f.account_store.saved.lock().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_withdraw_collapses_any_unlink_error_into_unlink_failed() {
        for outcome in [UnlinkOutcome::TransportError, UnlinkOutcome::InternalError] {
            let f = fixture(MockAccountStore::with_account(sample_account()), outcome);

            let result = f.service.withdraw_account("fan@example.com", "refresh-token").await;

            assert!(matches!(result, Err(AppError::UnlinkFailed(_))));
            assert!(f.token_store.removed.lock().unwrap().is_empty());
            assert!(f.account_store.saved.lock().unwrap().is_empty());
        }
    }

    #[actix_web::test]
    async fn test_successful_withdraw_unlinks_revokes_and_soft_deletes() {
        let f = fixture(MockAccountStore::with_account(sample_account()), UnlinkOutcome::Accepted);

        f.service.withdraw_account("fan@example.com", "refresh-token").await.unwrap();

        let unlink_calls = f.unlink_manager.calls.lock().unwrap();
        assert_eq!(unlink_calls.len(), 1);
        assert_eq!(unlink_calls[0], (ProviderType::Kakao, "9876543210".to_string()));

        assert_eq!(*f.token_store.removed.lock().unwrap(), vec!["refresh-token".to_string()]);

        let saved = f.account_store.saved.lock().unwrap();
        assert_eq!(saved.len(), 1);
        assert!(saved[0].is_deleted());
        assert!(saved[0].audit.delete_date.is_some());
    }

    #[actix_web::test]
    async fn test_delete_follow_artists_with_empty_list_is_noop() {
        let f = fixture(MockAccountStore::with_account(sample_account()), UnlinkOutcome::Accepted);

        f.service.delete_follow_artists("fan@example.com", Vec::new()).await.unwrap();

        let removed = f.account_store.removed_follows.lock().unwrap();
        assert_eq!(removed.len(), 1);
        assert_eq!(removed[0].0, "fan@example.com");
        assert!(removed[0].1.is_empty());
    }

    #[actix_web::test]
    async fn test_delete_follow_artists_normalizes_all_tokens() {
        let f = fixture(MockAccountStore::with_account(sample_account()), UnlinkOutcome::Accepted);

        // 정규화된 토큰과 접두사 없는 토큰, 팔로우 중이 아닌 토큰이 섞인 요청
        let tokens = vec![
            FollowArtistToken { token: "ARTIST_aaa".to_string() },
            FollowArtistToken { token: "bbb".to_string() },
            FollowArtistToken { token: "ARTIST_unknown".to_string() },
        ];

        f.service.delete_follow_artists("fan@example.com", tokens).await.unwrap();

        let removed = f.account_store.removed_follows.lock().unwrap();
        assert_eq!(removed.len(), 1);
        assert_eq!(
            removed[0].1,
            vec![
                "ARTIST_aaa".to_string(),
                "ARTIST_bbb".to_string(),
                "ARTIST_unknown".to_string(),
            ]
        );
    }

    #[actix_web::test]
    async fn test_follow_artist_normalizes_token() {
        let f = fixture(MockAccountStore::with_account(sample_account()), UnlinkOutcome::Accepted);

        f.service.follow_artist("fan@example.com", "ccc").await.unwrap();

        let added = f.account_store.added_follows.lock().unwrap();
        assert_eq!(added.len(), 1);
        assert_eq!(added[0], ("fan@example.com".to_string(), "ARTIST_ccc".to_string()));
    }

    #[actix_web::test]
    async fn test_get_follow_artists_projects_store_result() {
        let artists = vec![
            Artist::new("미드나잇블루".to_string(), None),
            Artist::new("소행성".to_string(), None),
        ];
        let f = fixture_with_artists(
            MockAccountStore::with_account(sample_account()),
            UnlinkOutcome::Accepted,
            artists,
        );

        let response = f.service.get_follow_artists("fan@example.com").await.unwrap();

        assert_eq!(response.total, 2);
        assert_eq!(response.artists[0].name, "미드나잇블루");
    }

    #[actix_web::test]
    async fn test_get_simple_info_unknown_account_fails() {
        let f = fixture(MockAccountStore::default(), UnlinkOutcome::Accepted);

        let result = f.service.get_account_simple_info("ghost@example.com").await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[actix_web::test]
    async fn test_get_detail_info_projects_account() {
        let f = fixture(MockAccountStore::with_account(sample_account()), UnlinkOutcome::Accepted);

        let detail = f.service.get_account_detail_info("fan@example.com").await.unwrap();

        assert_eq!(detail.email, "fan@example.com");
        assert_eq!(detail.provider_type, ProviderType::Kakao);
    }

    #[actix_web::test]
    async fn test_update_nickname_persists_change() {
        let f = fixture(MockAccountStore::with_account(sample_account()), UnlinkOutcome::Accepted);

        f.service
            .update_account_nickname("fan@example.com", "새닉네임".to_string())
            .await
            .unwrap();

        let saved = f.account_store.saved.lock().unwrap();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].nickname, "새닉네임");
        assert!(!saved[0].is_deleted());
    }

    #[actix_web::test]
    async fn test_update_image_persists_change() {
        let f = fixture(MockAccountStore::with_account(sample_account()), UnlinkOutcome::Accepted);

        f.service
            .update_account_image("fan@example.com", "https://cdn.example.com/new.png".to_string())
            .await
            .unwrap();

        let saved = f.account_store.saved.lock().unwrap();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].profile_image.as_deref(), Some("https://cdn.example.com/new.png"));
    }
}
