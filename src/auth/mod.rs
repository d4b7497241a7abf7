//! 인증 클라이언트
//! 1. 로그인 (토큰 + 쿠키 3개 저장)
//! 2. 로그아웃
//! 3. 저장된 토큰으로 사용자/세션 복원 (원격 검증 없음)
// region:    --- Imports
use crate::api::ApiClient;
use crate::error::{ApiError, AuthError};
use crate::storage::{ClientStore, StoredValue};
use chrono::{Duration, Utc};
use model::{Credentials, Session, User};
use std::sync::Arc;
use tracing::{error, info, warn};

// endregion: --- Imports

// region:    --- Modules
pub mod model;

// endregion: --- Modules

/// localStorage 토큰 키
pub const AUTH_TOKEN_KEY: &str = "custom-auth-token";
pub const COOKIE_FULL_NAME: &str = "fullName";
pub const COOKIE_USER_ID: &str = "userId";
pub const COOKIE_TOKEN: &str = "token";

/// 토큰/쿠키 유효 기간
pub const SESSION_TTL_DAYS: i64 = 7;

// region:    --- Auth Client
#[derive(Clone)]
pub struct AuthClient {
    api: ApiClient,
    store: Arc<dyn ClientStore>,
}

impl AuthClient {
    pub fn new(api: ApiClient, store: Arc<dyn ClientStore>) -> Self {
        Self { api, store }
    }

    /// 1. 로그인
    pub async fn sign_in_with_password(
        &self,
        credentials: &Credentials,
    ) -> Result<Session, AuthError> {
        info!("{:<12} --> 로그인 시작: {}", "Auth", credentials.email);

        let envelope = match self.api.login(credentials).await {
            Ok(envelope) => envelope,
            Err(ApiError::Status { status, .. }) if (400..500).contains(&status) => {
                warn!("{:<12} --> 로그인 거부: HTTP {}", "Auth", status);
                return Err(AuthError::InvalidCredentials);
            }
            Err(e) => {
                error!("{:<12} --> 로그인 중 오류: {}", "Auth", e);
                return Err(AuthError::SignInFailed(e));
            }
        };

        // 본문 status 가 200 이 아니면 거부 (누락 포함)
        if envelope.status != Some(200) {
            warn!("{:<12} --> 로그인 거부: status={:?}", "Auth", envelope.status);
            return Err(AuthError::InvalidCredentials);
        }
        let metadata = envelope.metadata.ok_or_else(|| {
            AuthError::SignInFailed(ApiError::MalformedResponse("missing metadata".to_string()))
        })?;

        let now = Utc::now();
        let ttl = Duration::days(SESSION_TTL_DAYS);
        let session = Session {
            user_id: metadata.user.id,
            full_name: credentials.email.clone(),
            token: metadata.tokens.access_token,
            expires_at: now + ttl,
        };

        let mut snapshot = self.store.load().await?;
        snapshot.set_cookie(COOKIE_FULL_NAME, StoredValue::new(&session.full_name, ttl, now));
        snapshot.set_cookie(COOKIE_USER_ID, StoredValue::new(&session.user_id, ttl, now));
        snapshot.set_cookie(COOKIE_TOKEN, StoredValue::new(&session.token, ttl, now));
        snapshot.set_item(AUTH_TOKEN_KEY, StoredValue::new(&session.token, ttl, now));
        self.store.save(&snapshot).await?;

        info!("{:<12} --> 로그인 성공 user: {}", "Auth", session.user_id);
        Ok(session)
    }

    /// 2. 로그아웃. 세션은 소비되어 소멸
    pub async fn sign_out(&self, session: Session) -> Result<(), AuthError> {
        info!("{:<12} --> 로그아웃 user: {}", "Auth", session.user_id);
        let mut snapshot = self.store.load().await?;
        snapshot.remove_item(AUTH_TOKEN_KEY);
        snapshot.remove_cookie(COOKIE_FULL_NAME);
        snapshot.remove_cookie(COOKIE_USER_ID);
        snapshot.remove_cookie(COOKIE_TOKEN);
        self.store.save(&snapshot).await?;
        Ok(())
    }

    /// 3. 저장된 토큰이 있으면 사용자 반환
    pub async fn get_user(&self) -> Result<Option<User>, AuthError> {
        let now = Utc::now();
        let snapshot = self.store.load().await?;
        if snapshot.item(AUTH_TOKEN_KEY, now).is_none() {
            return Ok(None);
        }

        Ok(Some(User {
            id: snapshot
                .cookie(COOKIE_USER_ID, now)
                .unwrap_or_default()
                .to_string(),
            full_name: snapshot
                .cookie(COOKIE_FULL_NAME, now)
                .unwrap_or_default()
                .to_string(),
        }))
    }

    /// 저장소에서 세션 복원 (토큰과 userId 쿠키 필요)
    pub async fn restore_session(&self) -> Result<Option<Session>, AuthError> {
        let now = Utc::now();
        let mut snapshot = self.store.load().await?;
        snapshot.purge_expired(now);

        let token = snapshot.local_storage.get(AUTH_TOKEN_KEY).cloned();
        let user_id = snapshot.cookie(COOKIE_USER_ID, now).map(str::to_string);
        let (Some(token), Some(user_id)) = (token, user_id) else {
            return Ok(None);
        };

        info!("{:<12} --> 저장된 세션 복원 user: {}", "Auth", user_id);
        Ok(Some(Session {
            full_name: snapshot
                .cookie(COOKIE_FULL_NAME, now)
                .unwrap_or_default()
                .to_string(),
            user_id,
            token: token.value,
            expires_at: token.expires_at,
        }))
    }
}

// endregion: --- Auth Client
