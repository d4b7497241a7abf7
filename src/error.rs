// region:    --- Imports
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

// endregion: --- Imports

// region:    --- API Error
/// 원격 API 호출 오류
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("business rejection (status {status}): {message}")]
    Rejected { status: u16, message: String },
}

// endregion: --- API Error

// region:    --- Auth Error
/// 인증 오류
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("An error occurred while signing in")]
    SignInFailed(#[source] ApiError),

    #[error("storage error: {0}")]
    Storage(#[from] StoreError),
}

// endregion: --- Auth Error

// region:    --- Store Error
/// 클라이언트 저장소 오류
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

// endregion: --- Store Error

// region:    --- Dashboard Error
/// 대시보드 동작 오류
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("no active session")]
    MissingSession,

    #[error("row not found: {0}")]
    RowNotFound(String),

    #[error("room {room_id} is not pending (status: {status})")]
    RoomNotPending { room_id: String, status: String },

    #[error("delete rejected for customer {0}")]
    DeleteRejected(String),

    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

pub type Result<T> = std::result::Result<T, DashboardError>;

impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        let status = match &self {
            DashboardError::MissingSession => StatusCode::UNAUTHORIZED,
            DashboardError::Auth(AuthError::InvalidCredentials) => StatusCode::UNAUTHORIZED,
            DashboardError::RowNotFound(_) => StatusCode::NOT_FOUND,
            DashboardError::RoomNotPending { .. } => StatusCode::CONFLICT,
            DashboardError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            DashboardError::DeleteRejected(_) => StatusCode::BAD_GATEWAY,
            DashboardError::Api(_) => StatusCode::BAD_GATEWAY,
            DashboardError::Auth(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}

// endregion: --- Dashboard Error
