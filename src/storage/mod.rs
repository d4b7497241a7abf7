//! 클라이언트 저장소
//! 브라우저의 localStorage 와 쿠키에 해당하는 값을 만료 시각과 함께 보관한다.
// region:    --- Imports
use crate::error::StoreError;
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

// endregion: --- Imports

// region:    --- Stored Value
/// 만료 시각이 있는 값
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredValue {
    pub value: String,
    pub expires_at: DateTime<Utc>,
}

impl StoredValue {
    pub fn new(value: &str, ttl: Duration, now: DateTime<Utc>) -> Self {
        Self {
            value: value.to_string(),
            expires_at: now + ttl,
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

/// 저장소 전체 내용
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreSnapshot {
    pub local_storage: BTreeMap<String, StoredValue>,
    pub cookies: BTreeMap<String, StoredValue>,
}

impl StoreSnapshot {
    pub fn item(&self, key: &str, now: DateTime<Utc>) -> Option<&str> {
        live(&self.local_storage, key, now)
    }

    pub fn set_item(&mut self, key: &str, value: StoredValue) {
        self.local_storage.insert(key.to_string(), value);
    }

    pub fn remove_item(&mut self, key: &str) {
        self.local_storage.remove(key);
    }

    pub fn cookie(&self, name: &str, now: DateTime<Utc>) -> Option<&str> {
        live(&self.cookies, name, now)
    }

    pub fn set_cookie(&mut self, name: &str, value: StoredValue) {
        self.cookies.insert(name.to_string(), value);
    }

    pub fn remove_cookie(&mut self, name: &str) {
        self.cookies.remove(name);
    }

    /// 만료된 값 정리
    pub fn purge_expired(&mut self, now: DateTime<Utc>) {
        self.local_storage.retain(|_, value| !value.is_expired(now));
        self.cookies.retain(|_, value| !value.is_expired(now));
    }
}

fn live<'a>(
    entries: &'a BTreeMap<String, StoredValue>,
    key: &str,
    now: DateTime<Utc>,
) -> Option<&'a str> {
    entries
        .get(key)
        .filter(|value| !value.is_expired(now))
        .map(|value| value.value.as_str())
}

// endregion: --- Stored Value

// region:    --- Client Store Trait
/// 저장소 트레이트
#[async_trait]
pub trait ClientStore: Send + Sync {
    async fn load(&self) -> Result<StoreSnapshot, StoreError>;
    async fn save(&self, snapshot: &StoreSnapshot) -> Result<(), StoreError>;
}

/// 메모리 저장소 (프로세스 수명 동안만 유지)
#[derive(Debug, Default)]
pub struct MemoryStore {
    snapshot: Mutex<StoreSnapshot>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ClientStore for MemoryStore {
    async fn load(&self) -> Result<StoreSnapshot, StoreError> {
        Ok(self.snapshot.lock().await.clone())
    }

    async fn save(&self, snapshot: &StoreSnapshot) -> Result<(), StoreError> {
        *self.snapshot.lock().await = snapshot.clone();
        Ok(())
    }
}

/// JSON 파일 저장소
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileStore {
    pub fn new(path: PathBuf) -> Self {
        info!("{:<12} --> 파일 저장소 사용: {}", "Storage", path.display());
        Self {
            path,
            lock: Mutex::new(()),
        }
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl ClientStore for FileStore {
    async fn load(&self) -> Result<StoreSnapshot, StoreError> {
        let _guard = self.lock.lock().await;
        match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(snapshot) => Ok(snapshot),
                Err(e) => {
                    // 깨진 파일은 빈 저장소로 취급, 다음 저장 때 덮어씀
                    warn!("{:<12} --> 저장 파일 손상, 빈 저장소로 시작: {}", "Storage", e);
                    Ok(StoreSnapshot::default())
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("{:<12} --> 저장 파일 없음, 빈 저장소로 시작", "Storage");
                Ok(StoreSnapshot::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn save(&self, snapshot: &StoreSnapshot) -> Result<(), StoreError> {
        let _guard = self.lock.lock().await;
        let raw = serde_json::to_string_pretty(snapshot)?;
        // 임시 파일에 쓴 뒤 교체
        let tmp = self.tmp_path();
        tokio::fs::write(&tmp, raw).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

// endregion: --- Client Store Trait

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expired_values_are_invisible() {
        let now = Utc::now();
        let mut snapshot = StoreSnapshot::default();
        snapshot.set_cookie("token", StoredValue::new("abc", Duration::days(7), now));

        assert_eq!(snapshot.cookie("token", now), Some("abc"));
        assert_eq!(snapshot.cookie("token", now + Duration::days(7)), None);

        snapshot.purge_expired(now + Duration::days(8));
        assert!(snapshot.cookies.is_empty());
    }

    #[tokio::test]
    async fn file_store_persists_between_instances() {
        let path = std::env::temp_dir().join(format!(
            "auction-admin-store-{}.json",
            std::process::id()
        ));
        let now = Utc::now();

        let store = FileStore::new(path.clone());
        assert_eq!(store.load().await.unwrap(), StoreSnapshot::default());

        let mut snapshot = StoreSnapshot::default();
        snapshot.set_item("custom-auth-token", StoredValue::new("t0k3n", Duration::days(7), now));
        store.save(&snapshot).await.unwrap();

        let reopened = FileStore::new(path.clone());
        let loaded = reopened.load().await.unwrap();
        assert_eq!(loaded.item("custom-auth-token", now), Some("t0k3n"));

        let _ = std::fs::remove_file(path);
    }

    #[tokio::test]
    async fn corrupt_file_reads_as_empty_and_is_replaced() {
        let path = std::env::temp_dir().join(format!(
            "auction-admin-corrupt-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, r#"{"local_storage": {"custom-auth"#).unwrap();
        let now = Utc::now();

        let store = FileStore::new(path.clone());
        assert_eq!(store.load().await.unwrap(), StoreSnapshot::default());

        let mut snapshot = StoreSnapshot::default();
        snapshot.set_cookie("userId", StoredValue::new("u1", Duration::days(7), now));
        store.save(&snapshot).await.unwrap();

        assert_eq!(store.load().await.unwrap().cookie("userId", now), Some("u1"));
        assert!(!store.tmp_path().exists());

        let _ = std::fs::remove_file(path);
    }
}
