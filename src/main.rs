// region:    --- Imports
use auction_admin::api::ApiClient;
use auction_admin::auth::AuthClient;
use auction_admin::config::Config;
use auction_admin::handlers;
use auction_admin::storage::{ClientStore, FileStore, MemoryStore};
use auction_admin::views::Dashboard;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;
use tracing::{error, info, warn};

// endregion: --- Imports

// region:    --- Main
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // logging 초기화
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .without_time()
        .with_target(false)
        .init();

    let config = Config::from_env();
    info!("{:<12} --> 원격 API: {}", "Main", config.api_url);

    // 토큰/쿠키 저장소
    let store: Arc<dyn ClientStore> = match &config.store_path {
        Some(path) => Arc::new(FileStore::new(path.clone())),
        None => {
            warn!("{:<12} --> ADMIN_STORE_PATH 미설정, 메모리 저장소 사용", "Main");
            Arc::new(MemoryStore::new())
        }
    };

    let api = ApiClient::new(&config.api_url, config.http_timeout)?;
    let auth = AuthClient::new(api.clone(), store);
    let mut dashboard = Dashboard::new(api, auth, config.page_size);

    // 이전 로그인 세션 복원
    match dashboard.restore_session().await {
        Ok(true) => info!("{:<12} --> 저장된 세션 복원 성공", "Main"),
        Ok(false) => info!("{:<12} --> 저장된 세션 없음, 로그인 필요", "Main"),
        Err(e) => error!("{:<12} --> 세션 복원 실패: {}", "Main", e),
    }

    let routes_all = handlers::router(Arc::new(Mutex::new(dashboard)));

    let listener = TcpListener::bind(&config.listen_addr).await?;
    info!(
        "{:<12} --> Web Server: Listening on {}",
        "Main",
        listener.local_addr()?
    );

    // 서버 실행
    if let Err(err) = axum::serve(listener, routes_all.into_make_service()).await {
        error!("{:<12} --> Server error: {}", "Main", err);
    }
    Ok(())
}
// endregion: --- Main
