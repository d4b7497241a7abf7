/// 진행 중인 경매방 조회
pub const ROOMS: &str = "/room";

/// 승인 대기 경매방 조회
pub const ROOMS_NOT_CONFIRMED: &str = "/room/not-confirmed";

/// 종료된 경매방 조회
pub const ROOMS_ENDED: &str = "/room/allRoomEnd";

/// 경매방 승인/거절
pub const ACCEPT_ROOM: &str = "/room/acceptRoom";

/// 로그인
pub const LOGIN: &str = "/auth/login";

/// 관리자 기준 전체 고객 조회
pub fn all_users(user_id: &str) -> String {
    format!("/auth/getAllUser/{}", user_id)
}

/// 고객 삭제
pub fn delete_customer(customer_id: &str) -> String {
    format!("/auth/delete-customer/{}", customer_id)
}
