// region:    --- Imports
use crate::auth::model::Credentials;
use crate::error::Result;
use crate::nav::{nav_entries, NavEntry};
use crate::room::commands::RoomDecision;
use crate::views::{Dashboard, SelectionAction, TableKind, TableView};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use std::sync::Arc;
use tokio::sync::Mutex;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

// endregion: --- Imports

pub type SharedDashboard = Arc<Mutex<Dashboard>>;

// region:    --- Router
/// 라우터 설정
pub fn router(dashboard: SharedDashboard) -> Router {
    // 화면 쪽 개발 서버를 위한 cors 설정
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/nav", get(handle_nav))
        .route("/auth/sign-in", post(handle_sign_in))
        .route("/auth/sign-out", post(handle_sign_out))
        .route("/auth/user", get(handle_get_user))
        .route("/tables/:table", get(handle_get_table))
        .route("/tables/:table/refresh", post(handle_refresh))
        .route("/tables/:table/page", post(handle_page))
        .route("/tables/:table/selection", post(handle_selection))
        .route("/tables/:table/details/:id", post(handle_toggle_details))
        .route("/customers/search", post(handle_search_customers))
        .route("/customers/:id/delete", post(handle_delete_customer))
        .route("/room-confirmation/:id/approve", post(handle_approve_room))
        .route("/room-confirmation/:id/reject", post(handle_reject_room))
        .layer(cors)
        .with_state(dashboard)
}

// endregion: --- Router

// region:    --- Request Bodies
#[derive(Debug, Deserialize)]
pub struct NavQuery {
    pub pathname: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PageRequest {
    pub page: usize,
    pub rows_per_page: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub term: String,
}

// endregion: --- Request Bodies

// region:    --- Auth Handlers

/// 메뉴 조회
pub async fn handle_nav(Query(query): Query<NavQuery>) -> Json<Vec<NavEntry>> {
    let pathname = query.pathname.unwrap_or_else(|| "/".to_string());
    Json(nav_entries(&pathname))
}

/// 로그인
pub async fn handle_sign_in(
    State(dashboard): State<SharedDashboard>,
    Json(credentials): Json<Credentials>,
) -> Result<impl IntoResponse> {
    info!("{:<12} --> 로그인 요청: {}", "Handler", credentials.email);
    let mut dashboard = dashboard.lock().await;
    let session = dashboard.sign_in(&credentials).await?;
    Ok(Json(session.clone()))
}

/// 로그아웃
pub async fn handle_sign_out(State(dashboard): State<SharedDashboard>) -> Result<StatusCode> {
    info!("{:<12} --> 로그아웃 요청", "Handler");
    dashboard.lock().await.sign_out().await?;
    Ok(StatusCode::NO_CONTENT)
}

/// 저장된 토큰 기준 사용자 조회
pub async fn handle_get_user(
    State(dashboard): State<SharedDashboard>,
) -> Result<Json<serde_json::Value>> {
    let user = dashboard.lock().await.current_user().await?;
    Ok(Json(serde_json::json!({ "data": user })))
}

// endregion: --- Auth Handlers

// region:    --- Table Handlers

/// 테이블 화면 조회
pub async fn handle_get_table(
    State(dashboard): State<SharedDashboard>,
    Path(kind): Path<TableKind>,
) -> Result<Json<TableView>> {
    let dashboard = dashboard.lock().await;
    dashboard.session()?;
    Ok(Json(dashboard.view(kind)))
}

/// 테이블 다시 조회
pub async fn handle_refresh(
    State(dashboard): State<SharedDashboard>,
    Path(kind): Path<TableKind>,
) -> Result<Json<TableView>> {
    info!("{:<12} --> 테이블 조회: {:?}", "Handler", kind);
    let mut dashboard = dashboard.lock().await;
    dashboard.refresh(kind).await?;
    Ok(Json(dashboard.view(kind)))
}

/// 페이지 이동
pub async fn handle_page(
    State(dashboard): State<SharedDashboard>,
    Path(kind): Path<TableKind>,
    Json(req): Json<PageRequest>,
) -> Result<Json<TableView>> {
    let mut dashboard = dashboard.lock().await;
    dashboard.session()?;
    dashboard.set_page(kind, req.page, req.rows_per_page)?;
    Ok(Json(dashboard.view(kind)))
}

/// 행 선택
pub async fn handle_selection(
    State(dashboard): State<SharedDashboard>,
    Path(kind): Path<TableKind>,
    Json(action): Json<SelectionAction>,
) -> Result<Json<TableView>> {
    let mut dashboard = dashboard.lock().await;
    dashboard.session()?;
    dashboard.apply_selection(kind, action);
    Ok(Json(dashboard.view(kind)))
}

/// 상세 보기 토글
pub async fn handle_toggle_details(
    State(dashboard): State<SharedDashboard>,
    Path((kind, room_id)): Path<(TableKind, String)>,
) -> Result<Json<serde_json::Value>> {
    let mut dashboard = dashboard.lock().await;
    dashboard.session()?;
    let expanded = dashboard.toggle_details(kind, &room_id)?;
    Ok(Json(serde_json::json!({ "id": room_id, "expanded": expanded })))
}

// endregion: --- Table Handlers

// region:    --- Action Handlers

/// 고객 검색 (Enter 확정)
pub async fn handle_search_customers(
    State(dashboard): State<SharedDashboard>,
    Json(req): Json<SearchRequest>,
) -> Result<Json<TableView>> {
    let mut dashboard = dashboard.lock().await;
    dashboard.session()?;
    dashboard.search_customers(&req.term);
    Ok(Json(dashboard.view(TableKind::Customers)))
}

/// 고객 삭제
pub async fn handle_delete_customer(
    State(dashboard): State<SharedDashboard>,
    Path(customer_id): Path<String>,
) -> Result<Json<TableView>> {
    info!("{:<12} --> 고객 삭제 요청 id: {}", "Handler", customer_id);
    let mut dashboard = dashboard.lock().await;
    dashboard.delete_customer(&customer_id).await?;
    Ok(Json(dashboard.view(TableKind::Customers)))
}

/// 경매방 승인
pub async fn handle_approve_room(
    State(dashboard): State<SharedDashboard>,
    Path(room_id): Path<String>,
) -> Result<Json<TableView>> {
    decide_room(dashboard, room_id, RoomDecision::Approve).await
}

/// 경매방 거절
pub async fn handle_reject_room(
    State(dashboard): State<SharedDashboard>,
    Path(room_id): Path<String>,
) -> Result<Json<TableView>> {
    decide_room(dashboard, room_id, RoomDecision::Reject).await
}

async fn decide_room(
    dashboard: SharedDashboard,
    room_id: String,
    decision: RoomDecision,
) -> Result<Json<TableView>> {
    info!(
        "{:<12} --> 경매방 {:?} 요청 id: {}",
        "Handler", decision, room_id
    );
    let mut dashboard = dashboard.lock().await;
    dashboard.decide_room(&room_id, decision).await?;
    Ok(Json(dashboard.view(TableKind::RoomConfirmation)))
}

// endregion: --- Action Handlers
