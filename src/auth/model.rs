use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// 로그인 요청
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

// 로그인 응답 metadata
#[derive(Debug, Clone, Deserialize)]
pub struct LoginMetadata {
    pub user: LoginUser,
    pub tokens: Tokens,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginUser {
    #[serde(rename = "_id")]
    pub id: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tokens {
    pub access_token: String,
}

// 로그인 세션. 로그인 시 생성, 로그아웃 시 소멸
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Session {
    pub user_id: String,
    pub full_name: String,
    #[serde(skip_serializing)]
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

// 저장된 토큰으로 복원한 사용자
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    pub id: String,
    pub full_name: String,
}
