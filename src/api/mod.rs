//! 원격 경매 API 클라이언트
//! HTTP 통신만 담당한다. 응답은 `Envelope` 로 검증한 뒤 타입으로 돌려준다.
// region:    --- Imports
use crate::auth::model::{Credentials, LoginMetadata};
use crate::customer::model::{Customer, DeleteOutcome};
use crate::error::ApiError;
use crate::room::commands::AcceptRoomCommand;
use crate::room::model::{Room, RoomFeed};
use envelope::Envelope;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, info, warn};

// endregion: --- Imports

// region:    --- Modules
pub mod endpoints;
pub mod envelope;

// endregion: --- Modules

// region:    --- Api Client
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: Client,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
            token: None,
        })
    }

    /// 세션 토큰을 싣는 클라이언트 복제본
    pub fn with_token(&self, token: &str) -> Self {
        Self {
            token: Some(token.to_string()),
            ..self.clone()
        }
    }


    /// 경매방 목록 조회
    pub async fn fetch_rooms(&self, feed: RoomFeed) -> Result<Vec<Room>, ApiError> {
        info!("{:<12} --> 경매방 조회: {:?}", "ApiClient", feed);
        self.get(feed.endpoint()).await
    }

    /// 경매방 승인/거절. 서버가 돌려준 목록이 새 기준
    pub async fn accept_room(&self, cmd: &AcceptRoomCommand) -> Result<Vec<Room>, ApiError> {
        info!(
            "{:<12} --> 경매방 상태 변경 요청: room={}, status={}",
            "ApiClient", cmd.room_id, cmd.status
        );
        self.post(endpoints::ACCEPT_ROOM, Some(cmd)).await
    }

    /// 고객 목록 조회
    pub async fn fetch_customers(&self, admin_id: &str) -> Result<Vec<Customer>, ApiError> {
        info!("{:<12} --> 고객 목록 조회 admin: {}", "ApiClient", admin_id);
        self.get(&endpoints::all_users(admin_id)).await
    }

    /// 고객 삭제
    pub async fn delete_customer(&self, customer_id: &str) -> Result<DeleteOutcome, ApiError> {
        info!("{:<12} --> 고객 삭제 요청 id: {}", "ApiClient", customer_id);
        self.post::<(), _>(&endpoints::delete_customer(customer_id), None)
            .await
    }

    /// 로그인. 본문의 status 판정은 호출 측에서
    pub async fn login(&self, credentials: &Credentials) -> Result<Envelope<LoginMetadata>, ApiError> {
        info!("{:<12} --> 로그인 요청: {}", "ApiClient", credentials.email);
        let request = self
            .http
            .post(self.url(endpoints::LOGIN))
            .json(credentials);
        self.send(request).await
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = self.http.get(self.url(path));
        self.send::<T>(request).await?.into_result()
    }

    async fn post<B, T>(&self, path: &str, body: Option<&B>) -> Result<T, ApiError>
    where
        B: serde::Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let mut request = self.http.post(self.url(path));
        if let Some(body) = body {
            request = request.json(body);
        }
        self.send::<T>(request).await?.into_result()
    }

    /// 요청 전송 및 봉투 디코딩
    async fn send<T: DeserializeOwned>(
        &self,
        mut request: RequestBuilder,
    ) -> Result<Envelope<T>, ApiError> {
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;
        debug!("{:<12} --> 응답 수신: status={}", "ApiClient", status);

        if !status.is_success() {
            let message = serde_json::from_str::<Envelope<serde_json::Value>>(&body)
                .ok()
                .and_then(|envelope| envelope.message)
                .unwrap_or(body);
            warn!("{:<12} --> HTTP 오류: {} {}", "ApiClient", status, message);
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_str::<Envelope<T>>(&body)
            .map_err(|e| ApiError::MalformedResponse(e.to_string()))
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

// endregion: --- Api Client
