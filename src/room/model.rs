use crate::api::endpoints;
use crate::table::TableRow;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

// 경매방 모델
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Room {
    #[serde(rename = "_id")]
    pub id: String,
    pub room_code: String,
    pub title: String,
    pub start_price: f64,
    pub current_price: f64,
    pub image: String,
    pub end_date: Option<DateTime<Utc>>,
    pub status: RoomStatus,
    pub details: String,
    pub price: f64,
    pub bid_history: Vec<Bid>,
}

// 입찰 기록
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Bid {
    pub uid: String,
    pub bid_amount: f64,
    pub time: Option<DateTime<Utc>>,
}

impl Room {
    /// 낙찰 입찰: 현재 가격과 같은 금액의 입찰
    pub fn winning_bid(&self) -> Option<&Bid> {
        self.bid_history
            .iter()
            .find(|bid| bid.bid_amount == self.current_price)
    }
}

impl TableRow for Room {
    fn row_id(&self) -> &str {
        &self.id
    }
}

// region:    --- Room Feed
/// 경매방 목록 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomFeed {
    /// 진행 중
    Active,
    /// 종료
    Ended,
    /// 승인 대기
    PendingConfirmation,
}

impl RoomFeed {
    pub fn endpoint(self) -> &'static str {
        match self {
            RoomFeed::Active => endpoints::ROOMS,
            RoomFeed::Ended => endpoints::ROOMS_ENDED,
            RoomFeed::PendingConfirmation => endpoints::ROOMS_NOT_CONFIRMED,
        }
    }
}

// endregion: --- Room Feed

// region:    --- Room Status
/// 경매방 상태. 서버가 자유 문자열을 보내므로 알 수 없는 값은 보존
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RoomStatus {
    #[default]
    Pending,
    InProgress,
    Ended,
    Rejected,
    Other(String),
}

impl RoomStatus {
    pub fn as_str(&self) -> &str {
        match self {
            RoomStatus::Pending => "pending",
            RoomStatus::InProgress => "in progress",
            RoomStatus::Ended => "ended",
            RoomStatus::Rejected => "rejected",
            RoomStatus::Other(value) => value,
        }
    }
}

impl From<String> for RoomStatus {
    fn from(value: String) -> Self {
        match value.trim().to_lowercase().as_str() {
            "pending" => RoomStatus::Pending,
            "in progress" | "in_progress" | "đang diễn ra" => RoomStatus::InProgress,
            "ended" => RoomStatus::Ended,
            "rejected" => RoomStatus::Rejected,
            _ => RoomStatus::Other(value),
        }
    }
}

impl From<RoomStatus> for String {
    fn from(status: RoomStatus) -> Self {
        match status {
            RoomStatus::Other(value) => value,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// endregion: --- Room Status

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_minimal_room() {
        let room: Room =
            serde_json::from_value(serde_json::json!({ "roomCode": "R1", "status": "pending" }))
                .unwrap();
        assert_eq!(room.room_code, "R1");
        assert_eq!(room.status, RoomStatus::Pending);
        assert!(room.bid_history.is_empty());
    }

    #[test]
    fn status_labels_round_trip_through_wire() {
        let status: RoomStatus = serde_json::from_str("\"Đang diễn ra\"").unwrap();
        assert_eq!(status, RoomStatus::InProgress);
        assert_eq!(serde_json::to_string(&status).unwrap(), "\"in progress\"");

        let other: RoomStatus = serde_json::from_str("\"paused\"").unwrap();
        assert_eq!(other.to_string(), "paused");
    }

    #[test]
    fn winning_bid_matches_current_price() {
        let room: Room = serde_json::from_value(serde_json::json!({
            "_id": "r1",
            "currentPrice": 1500,
            "status": "ended",
            "bidHistory": [
                { "uid": "u1", "bidAmount": 1200, "time": "2024-05-01T10:00:00Z" },
                { "uid": "u2", "bidAmount": 1500, "time": "2024-05-01T10:05:00Z" }
            ]
        }))
        .unwrap();

        assert_eq!(room.winning_bid().map(|bid| bid.uid.as_str()), Some("u2"));
    }
}
