use crate::error::ApiError;
use serde::Deserialize;

/// API 응답 봉투 `{ status?, message?, metadata }`
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub status: Option<u16>,
    #[serde(default)]
    pub message: Option<String>,
    pub metadata: Option<T>,
}

impl<T> Envelope<T> {
    /// 성공/실패 판정. metadata 가 없으면 형식 오류
    pub fn into_result(self) -> Result<T, ApiError> {
        if let Some(status) = self.status {
            if !(200..300).contains(&status) {
                return Err(ApiError::Rejected {
                    status,
                    message: self.message.unwrap_or_default(),
                });
            }
        }
        self.metadata
            .ok_or_else(|| ApiError::MalformedResponse("missing metadata".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: serde_json::Value) -> Result<Vec<String>, ApiError> {
        serde_json::from_value::<Envelope<Vec<String>>>(body)
            .unwrap()
            .into_result()
    }

    #[test]
    fn metadata_is_unwrapped() {
        let rows = parse(serde_json::json!({ "metadata": ["a", "b"] })).unwrap();
        assert_eq!(rows, vec!["a", "b"]);
    }

    #[test]
    fn missing_metadata_is_malformed() {
        let err = parse(serde_json::json!({ "message": "ok" })).unwrap_err();
        assert!(matches!(err, ApiError::MalformedResponse(_)));
    }

    #[test]
    fn non_success_status_is_rejected() {
        let err = parse(serde_json::json!({
            "status": 403,
            "message": "forbidden",
            "metadata": []
        }))
        .unwrap_err();
        assert!(matches!(err, ApiError::Rejected { status: 403, .. }));
    }
}
