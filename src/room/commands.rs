//! 경매방 승인 관련 커맨드
//! 1. 승인 (pending -> in progress)
//! 2. 거절 (pending -> rejected)
// region:    --- Imports
use super::model::RoomStatus;
use serde::{Deserialize, Serialize};

// endregion: --- Imports

// region:    --- Commands
/// 승인/거절 결정
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomDecision {
    Approve,
    Reject,
}

impl RoomDecision {
    /// 결정에 따른 목표 상태.
    /// 승인은 "in progress" 로 보낸다. 일부 서버 배포본은 화면 라벨 "Đang diễn ra" 를
    /// 상태로 저장하고 표시하므로 그 서버가 받는 값과 다를 수 있다.
    /// 수신 시에는 두 값 모두 InProgress 로 읽는다.
    pub fn target_status(self) -> RoomStatus {
        match self {
            RoomDecision::Approve => RoomStatus::InProgress,
            RoomDecision::Reject => RoomStatus::Rejected,
        }
    }
}

/// 승인 요청 본문
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcceptRoomCommand {
    pub room_id: String,
    pub status: RoomStatus,
}

impl AcceptRoomCommand {
    pub fn new(room_id: &str, decision: RoomDecision) -> Self {
        Self {
            room_id: room_id.to_string(),
            status: decision.target_status(),
        }
    }
}

// endregion: --- Commands

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn approve_and_reject_send_distinct_statuses() {
        let approve = serde_json::to_value(AcceptRoomCommand::new("r1", RoomDecision::Approve)).unwrap();
        let reject = serde_json::to_value(AcceptRoomCommand::new("r1", RoomDecision::Reject)).unwrap();

        assert_eq!(approve, serde_json::json!({ "roomId": "r1", "status": "in progress" }));
        assert_eq!(reject, serde_json::json!({ "roomId": "r1", "status": "rejected" }));
    }
}
