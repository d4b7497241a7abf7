//! 대시보드 경로와 사이드 메뉴
// region:    --- Imports
use serde::Serialize;

// endregion: --- Imports

// region:    --- Paths
pub mod paths {
    pub const OVERVIEW: &str = "/dashboard";
    pub const ACCOUNT: &str = "/dashboard/account";
    pub const CUSTOMERS: &str = "/dashboard/customers";
    pub const ROOMS: &str = "/dashboard/rooms";
    pub const ROOM_DONE: &str = "/dashboard/room-done";
    pub const ROOM_CONFIRMATION: &str = "/dashboard/room-confirmation";
    pub const INTEGRATIONS: &str = "/dashboard/integrations";
    pub const SETTINGS: &str = "/dashboard/settings";
    pub const NOT_FOUND: &str = "/errors/not-found";
}

// endregion: --- Paths

// region:    --- Nav Items
/// 경로 비교 방식
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NavMatcher {
    Equals,
    StartsWith,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub key: &'static str,
    pub title: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
    pub matcher: NavMatcher,
    pub disabled: bool,
}

const fn item(key: &'static str, title: &'static str, href: &'static str, icon: &'static str) -> NavItem {
    NavItem {
        key,
        title,
        href,
        icon,
        matcher: NavMatcher::Equals,
        disabled: false,
    }
}

pub const NAV_ITEMS: [NavItem; 9] = [
    item("overview", "Overview", paths::OVERVIEW, "chart-pie"),
    item("customers", "Customers", paths::CUSTOMERS, "users"),
    item("rooms", "Rooms", paths::ROOMS, "chart-pie"),
    item("room-done", "Rooms done", paths::ROOM_DONE, "chart-pie"),
    NavItem {
        matcher: NavMatcher::StartsWith,
        ..item(
            "room-confirmation",
            "Room confirmation",
            paths::ROOM_CONFIRMATION,
            "check-square",
        )
    },
    item("integrations", "Integrations", paths::INTEGRATIONS, "plugs-connected"),
    item("settings", "Settings", paths::SETTINGS, "gear-six"),
    item("account", "Account", paths::ACCOUNT, "user"),
    item("error", "Error", paths::NOT_FOUND, "x-square"),
];

/// 현재 경로에서 메뉴 활성 여부
pub fn is_nav_item_active(item: &NavItem, pathname: &str) -> bool {
    if item.disabled {
        return false;
    }
    let pathname = normalize(pathname);
    let href = normalize(item.href);
    match item.matcher {
        NavMatcher::Equals => pathname == href,
        NavMatcher::StartsWith => {
            pathname == href
                || pathname
                    .strip_prefix(href)
                    .is_some_and(|rest| rest.starts_with('/'))
        }
    }
}

// 끝의 '/' 제거 (루트 제외)
fn normalize(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/"
    } else {
        trimmed
    }
}

/// 활성 표시가 붙은 메뉴
#[derive(Debug, Clone, Serialize)]
pub struct NavEntry {
    #[serde(flatten)]
    pub item: NavItem,
    pub active: bool,
}

pub fn nav_entries(pathname: &str) -> Vec<NavEntry> {
    NAV_ITEMS
        .iter()
        .map(|item| NavEntry {
            item: *item,
            active: is_nav_item_active(item, pathname),
        })
        .collect()
}

// endregion: --- Nav Items

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_match_ignores_trailing_slash() {
        let customers = &NAV_ITEMS[1];
        assert!(is_nav_item_active(customers, "/dashboard/customers/"));
        assert!(!is_nav_item_active(customers, "/dashboard/customers/42"));
    }

    #[test]
    fn prefix_match_covers_nested_paths_only() {
        let confirmation = &NAV_ITEMS[4];
        assert!(is_nav_item_active(confirmation, "/dashboard/room-confirmation/r1"));
        assert!(!is_nav_item_active(confirmation, "/dashboard/room-confirmation-old"));
    }

    #[test]
    fn exactly_one_entry_is_active() {
        let active: Vec<&str> = nav_entries(paths::ROOMS)
            .into_iter()
            .filter(|entry| entry.active)
            .map(|entry| entry.item.key)
            .collect();
        assert_eq!(active, vec!["rooms"]);
    }

    #[test]
    fn overview_is_not_active_on_child_pages() {
        assert!(!is_nav_item_active(&NAV_ITEMS[0], paths::CUSTOMERS));
        assert!(is_nav_item_active(&NAV_ITEMS[0], "/dashboard"));
    }
}
