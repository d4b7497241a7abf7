//! 대시보드 화면 상태
//! 고객 / 경매방 / 종료된 경매방 / 승인 대기 경매방 테이블과 로그인 세션을 묶는다.
// region:    --- Imports
use crate::api::ApiClient;
use crate::auth::model::{Credentials, Session, User};
use crate::auth::AuthClient;
use crate::customer::model::Customer;
use crate::error::{DashboardError, Result};
use crate::room::commands::RoomDecision;
use crate::room::model::RoomFeed;
use crate::table::pagination::PageSize;
use crate::table::{PageView, TableRow, TableState};
use customers::CustomersView;
use rooms::{RoomPageView, RoomsView};
use serde::{Deserialize, Serialize};
use tracing::info;

// endregion: --- Imports

// region:    --- Modules
pub mod customers;
pub mod rooms;

// endregion: --- Modules

// region:    --- Table Kind
/// 테이블 종류 (경로 이름)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TableKind {
    Customers,
    Rooms,
    RoomDone,
    RoomConfirmation,
}

/// 체크박스 동작
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum SelectionAction {
    SelectAll,
    DeselectAll,
    SelectOne { id: String },
    DeselectOne { id: String },
}

/// 테이블 화면 스냅샷
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum TableView {
    Customers(PageView<Customer>),
    Rooms(RoomPageView),
}

// endregion: --- Table Kind

// region:    --- Dashboard
pub struct Dashboard {
    api: ApiClient,
    auth: AuthClient,
    page_size: PageSize,
    session: Option<Session>,
    customers: CustomersView,
    rooms: RoomsView,
    rooms_done: RoomsView,
    room_confirmation: RoomsView,
}

impl Dashboard {
    pub fn new(api: ApiClient, auth: AuthClient, page_size: PageSize) -> Self {
        Self {
            api,
            auth,
            page_size,
            session: None,
            customers: CustomersView::new(page_size),
            rooms: RoomsView::new(RoomFeed::Active, page_size),
            rooms_done: RoomsView::new(RoomFeed::Ended, page_size),
            room_confirmation: RoomsView::new(RoomFeed::PendingConfirmation, page_size),
        }
    }

    /// 저장소에 남은 세션 복원
    pub async fn restore_session(&mut self) -> Result<bool> {
        self.session = self.auth.restore_session().await?;
        Ok(self.session.is_some())
    }

    pub fn session(&self) -> Result<&Session> {
        self.session.as_ref().ok_or(DashboardError::MissingSession)
    }

    pub async fn sign_in(&mut self, credentials: &Credentials) -> Result<&Session> {
        let session = self.auth.sign_in_with_password(credentials).await?;
        // 이전 세션의 행/선택/펼침 상태를 남기지 않음
        self.reset_tables();
        Ok(self.session.insert(session))
    }

    /// 로그아웃. 세션 소멸과 함께 테이블 상태 초기화
    pub async fn sign_out(&mut self) -> Result<()> {
        if let Some(session) = self.session.take() {
            self.auth.sign_out(session).await?;
        }
        self.reset_tables();
        Ok(())
    }

    pub async fn current_user(&self) -> Result<Option<User>> {
        Ok(self.auth.get_user().await?)
    }

    pub fn customers(&self) -> &CustomersView {
        &self.customers
    }

    pub fn rooms(&self, feed: RoomFeed) -> &RoomsView {
        match feed {
            RoomFeed::Active => &self.rooms,
            RoomFeed::Ended => &self.rooms_done,
            RoomFeed::PendingConfirmation => &self.room_confirmation,
        }
    }

    /// 테이블 다시 조회
    pub async fn refresh(&mut self, kind: TableKind) -> Result<()> {
        let session = self.session.as_ref().ok_or(DashboardError::MissingSession)?;
        match kind {
            TableKind::Customers => self.customers.refresh(&self.api, session).await,
            TableKind::Rooms => self.rooms.refresh(&self.api, session).await,
            TableKind::RoomDone => self.rooms_done.refresh(&self.api, session).await,
            TableKind::RoomConfirmation => {
                self.room_confirmation.refresh(&self.api, session).await
            }
        }
    }

    pub fn view(&self, kind: TableKind) -> TableView {
        match kind {
            TableKind::Customers => TableView::Customers(self.customers.table().view()),
            TableKind::Rooms => TableView::Rooms(self.rooms.view()),
            TableKind::RoomDone => TableView::Rooms(self.rooms_done.view()),
            TableKind::RoomConfirmation => TableView::Rooms(self.room_confirmation.view()),
        }
    }

    pub fn apply_selection(&mut self, kind: TableKind, action: SelectionAction) {
        match kind {
            TableKind::Customers => apply_selection(self.customers.table_mut(), action),
            _ => {
                if let Some(view) = self.rooms_view_mut(kind) {
                    apply_selection(view.table_mut(), action)
                }
            }
        }
    }

    /// 페이지 이동 (행 수 변경 시 첫 페이지로)
    pub fn set_page(
        &mut self,
        kind: TableKind,
        page: usize,
        rows_per_page: Option<usize>,
    ) -> Result<()> {
        let page_size = rows_per_page
            .map(PageSize::try_from)
            .transpose()
            .map_err(|e| DashboardError::InvalidRequest(e.to_string()))?;

        match kind {
            TableKind::Customers => set_page(self.customers.table_mut(), page, page_size),
            _ => {
                if let Some(view) = self.rooms_view_mut(kind) {
                    set_page(view.table_mut(), page, page_size)
                }
            }
        }
        Ok(())
    }

    pub fn toggle_details(&mut self, kind: TableKind, room_id: &str) -> Result<bool> {
        self.rooms_view_mut(kind)
            .ok_or_else(|| {
                DashboardError::InvalidRequest("customers have no detail rows".to_string())
            })?
            .toggle_details(room_id)
    }

    /// 고객 검색어 확정
    pub fn search_customers(&mut self, term: &str) {
        info!("{:<12} --> 고객 검색: {:?}", "Dashboard", term);
        let table = self.customers.table_mut();
        table.set_search_input(term);
        table.commit_search();
    }

    pub async fn delete_customer(&mut self, customer_id: &str) -> Result<Customer> {
        let session = self.session.as_ref().ok_or(DashboardError::MissingSession)?;
        self.customers.delete(&self.api, session, customer_id).await
    }

    pub async fn decide_room(&mut self, room_id: &str, decision: RoomDecision) -> Result<()> {
        let session = self.session.as_ref().ok_or(DashboardError::MissingSession)?;
        self.room_confirmation
            .decide(&self.api, session, room_id, decision)
            .await
    }

    fn rooms_view_mut(&mut self, kind: TableKind) -> Option<&mut RoomsView> {
        match kind {
            TableKind::Customers => None,
            TableKind::Rooms => Some(&mut self.rooms),
            TableKind::RoomDone => Some(&mut self.rooms_done),
            TableKind::RoomConfirmation => Some(&mut self.room_confirmation),
        }
    }

    fn reset_tables(&mut self) {
        self.customers = CustomersView::new(self.page_size);
        self.rooms = RoomsView::new(RoomFeed::Active, self.page_size);
        self.rooms_done = RoomsView::new(RoomFeed::Ended, self.page_size);
        self.room_confirmation = RoomsView::new(RoomFeed::PendingConfirmation, self.page_size);
    }
}

fn apply_selection<T: TableRow + Clone>(table: &mut TableState<T>, action: SelectionAction) {
    let selection = table.selection_mut();
    match action {
        SelectionAction::SelectAll => selection.select_all(),
        SelectionAction::DeselectAll => selection.deselect_all(),
        SelectionAction::SelectOne { id } => selection.select_one(id),
        SelectionAction::DeselectOne { id } => selection.deselect_one(&id),
    }
}

fn set_page<T: TableRow + Clone>(
    table: &mut TableState<T>,
    page: usize,
    page_size: Option<PageSize>,
) {
    if let Some(page_size) = page_size {
        if page_size != table.page_size() {
            table.set_page_size(page_size);
            return;
        }
    }
    table.set_page(page);
}

// endregion: --- Dashboard
