// region:    --- Imports
use crate::api::ApiClient;
use crate::auth::model::Session;
use crate::error::{DashboardError, Result};
use crate::room::commands::{AcceptRoomCommand, RoomDecision};
use crate::room::model::{Bid, Room, RoomFeed, RoomStatus};
use crate::table::pagination::PageSize;
use crate::table::{PageView, TableState};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{error, info, warn};

// endregion: --- Imports

// region:    --- Rooms View
/// 경매방 테이블 (진행 중 / 종료 / 승인 대기)
#[derive(Debug, Clone)]
pub struct RoomsView {
    feed: RoomFeed,
    table: TableState<Room>,
}

impl RoomsView {
    pub fn new(feed: RoomFeed, page_size: PageSize) -> Self {
        Self {
            feed,
            table: TableState::new(page_size),
        }
    }

    pub fn table(&self) -> &TableState<Room> {
        &self.table
    }

    pub fn table_mut(&mut self) -> &mut TableState<Room> {
        &mut self.table
    }

    /// 화면 표시용 스냅샷. 종료된 경매방은 현재 페이지의 낙찰 입찰 포함
    pub fn view(&self) -> RoomPageView {
        let winning_bids = match self.feed {
            RoomFeed::Ended => self
                .table
                .page_rows()
                .iter()
                .filter_map(|room| Some((room.id.clone(), room.winning_bid()?.clone())))
                .collect(),
            _ => BTreeMap::new(),
        };
        RoomPageView {
            page: self.table.view(),
            winning_bids,
        }
    }

    /// 경매방 목록 다시 조회. 실패 시 기존 행 유지
    pub async fn refresh(&mut self, api: &ApiClient, session: &Session) -> Result<()> {
        match api.with_token(&session.token).fetch_rooms(self.feed).await {
            Ok(rooms) => {
                info!(
                    "{:<12} --> {:?} 경매방 {}개 조회",
                    "Rooms",
                    self.feed,
                    rooms.len()
                );
                self.table.replace_rows(rooms);
                Ok(())
            }
            Err(e) => {
                error!("{:<12} --> 경매방 조회 실패: {}", "Rooms", e);
                Err(e.into())
            }
        }
    }

    /// 상세 보기 토글
    pub fn toggle_details(&mut self, room_id: &str) -> Result<bool> {
        self.table
            .toggle_details(room_id)
            .ok_or_else(|| DashboardError::RowNotFound(room_id.to_string()))
    }

    /// 승인 대기 경매방 승인/거절.
    /// 서버가 돌려준 목록을 그대로 반영하며 다시 조회하지 않는다.
    pub async fn decide(
        &mut self,
        api: &ApiClient,
        session: &Session,
        room_id: &str,
        decision: RoomDecision,
    ) -> Result<()> {
        if self.feed != RoomFeed::PendingConfirmation {
            return Err(DashboardError::InvalidRequest(format!(
                "{:?} rooms cannot be approved or rejected",
                self.feed
            )));
        }

        let room = self
            .table
            .find(room_id)
            .ok_or_else(|| DashboardError::RowNotFound(room_id.to_string()))?;
        if room.status != RoomStatus::Pending {
            warn!(
                "{:<12} --> 대기 상태가 아닌 경매방: {} ({})",
                "Rooms", room_id, room.status
            );
            return Err(DashboardError::RoomNotPending {
                room_id: room_id.to_string(),
                status: room.status.to_string(),
            });
        }

        let cmd = AcceptRoomCommand::new(room_id, decision);
        match api.with_token(&session.token).accept_room(&cmd).await {
            Ok(rooms) => {
                info!(
                    "{:<12} --> 경매방 {:?} 처리 완료: {} -> {}",
                    "Rooms", decision, room_id, cmd.status
                );
                self.table.replace_rows(rooms);
                Ok(())
            }
            Err(e) => {
                error!("{:<12} --> 경매방 상태 변경 실패: {}", "Rooms", e);
                Err(e.into())
            }
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RoomPageView {
    #[serde(flatten)]
    pub page: PageView<Room>,
    /// 경매방 id -> 낙찰 입찰
    pub winning_bids: BTreeMap<String, Bid>,
}

// endregion: --- Rooms View
