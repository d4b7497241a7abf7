// region:    --- Imports
use crate::table::pagination::PageSize;
use std::env;
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use tracing::{info, warn};

// endregion: --- Imports

// region:    --- Config
/// 대시보드 설정 (환경 변수)
#[derive(Debug, Clone)]
pub struct Config {
    /// 원격 API 주소
    pub api_url: String,
    pub listen_addr: String,
    /// 토큰/쿠키 저장 파일. 없으면 메모리 저장소 사용
    pub store_path: Option<PathBuf>,
    pub page_size: PageSize,
    pub http_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:8080".to_string(),
            listen_addr: "0.0.0.0:3000".to_string(),
            store_path: None,
            page_size: PageSize::default(),
            http_timeout: Duration::from_secs(30),
        }
    }
}

impl Config {
    /// 환경 변수에서 설정 로드
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let page_size = try_load("ADMIN_PAGE_SIZE", defaults.page_size.get());
        let page_size = PageSize::try_from(page_size).unwrap_or_else(|e| {
            warn!("{:<12} --> {}, 기본값 사용", "Config", e);
            defaults.page_size
        });

        Self {
            api_url: try_load("ADMIN_API_URL", defaults.api_url),
            listen_addr: try_load("ADMIN_LISTEN_ADDR", defaults.listen_addr),
            store_path: env::var("ADMIN_STORE_PATH").ok().map(PathBuf::from),
            page_size,
            http_timeout: Duration::from_secs(try_load("ADMIN_HTTP_TIMEOUT_SECS", 30u64)),
        }
    }
}

fn try_load<T>(key: &str, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => raw.parse().unwrap_or_else(|e| {
            warn!("{:<12} --> {} 값이 잘못됨({}), 기본값 사용: {}", "Config", key, e, default);
            default
        }),
        Err(_) => {
            info!("{:<12} --> {} 미설정, 기본값 사용: {}", "Config", key, default);
            default
        }
    }
}

// endregion: --- Config
