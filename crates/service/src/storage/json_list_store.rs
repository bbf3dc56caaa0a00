use std::{marker::PhantomData, path::PathBuf, sync::Arc};
use tokio::{fs, sync::Mutex};

use crate::errors::ServiceError;

/// Generic JSON file-backed list store.
///
/// Persists a `Vec<T>` to a single JSON array file. The file is the sole
/// source of truth: every operation loads it fresh and every write replaces
/// the full contents. Intended for demo-scale state where a database is
/// overkill.
///
/// Unlike the original design this store serializes read-modify-write
/// cycles behind a per-store mutex, so two concurrent `update` calls in the
/// same process cannot lose each other's writes or hand out duplicate ids.
/// Writers in other processes still race last-writer-wins.
pub struct JsonListStore<T> {
    file_path: PathBuf,
    write_lock: Mutex<()>,
    _records: PhantomData<fn() -> Vec<T>>,
}

impl<T> JsonListStore<T>
where
    T: serde::Serialize + serde::de::DeserializeOwned,
{
    /// Initialize the store from a path, creating the parent directory if
    /// missing. The record file itself is created lazily on first save.
    pub async fn new<P: Into<PathBuf>>(path: P) -> Result<Arc<Self>, ServiceError> {
        let file_path = path.into();
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| ServiceError::Storage(e.to_string()))?;
        }
        Ok(Arc::new(Self { file_path, write_lock: Mutex::new(()), _records: PhantomData }))
    }

    /// Load all records. Fails soft: a missing file or unparseable contents
    /// yield an empty list, never an error.
    pub async fn load(&self) -> Vec<T> {
        match fs::read(&self.file_path).await {
            Ok(bytes) => serde_json::from_slice(&bytes).unwrap_or_default(),
            Err(_) => Vec::new(),
        }
    }

    /// Serialize the full list and overwrite the file.
    async fn save(&self, records: &[T]) -> Result<(), ServiceError> {
        let data =
            serde_json::to_vec_pretty(records).map_err(|e| ServiceError::Storage(e.to_string()))?;
        fs::write(&self.file_path, data)
            .await
            .map_err(|e| ServiceError::Storage(e.to_string()))?;
        Ok(())
    }

    /// Apply a mutation as one serialized load-mutate-save cycle and return
    /// the closure's result. The store lock is held across the whole cycle.
    pub async fn update<F, R>(&self, f: F) -> Result<R, ServiceError>
    where
        F: FnOnce(&mut Vec<T>) -> Result<R, ServiceError>,
    {
        let _guard = self.write_lock.lock().await;
        let mut records = self.load().await;
        let out = f(&mut records)?;
        self.save(&records).await?;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!("json_list_store_{tag}_{}.json", uuid::Uuid::new_v4()))
    }

    #[tokio::test]
    async fn missing_file_loads_empty() -> Result<(), ServiceError> {
        let store = JsonListStore::<String>::new(temp_path("missing")).await?;
        assert!(store.load().await.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn corrupt_file_loads_empty() -> anyhow::Result<()> {
        let path = temp_path("corrupt");
        tokio::fs::write(&path, b"{not json").await?;
        let store = JsonListStore::<String>::new(&path).await?;
        assert!(store.load().await.is_empty());
        let _ = tokio::fs::remove_file(&path).await;
        Ok(())
    }

    #[tokio::test]
    async fn update_persists_and_reloads() -> Result<(), ServiceError> {
        let path = temp_path("update");
        let store = JsonListStore::<String>::new(&path).await?;

        store
            .update(|items| {
                items.push("a".into());
                items.push("b".into());
                Ok(())
            })
            .await?;

        // a fresh store over the same path sees the saved contents
        let reloaded = JsonListStore::<String>::new(&path).await?;
        assert_eq!(reloaded.load().await, vec!["a".to_string(), "b".to_string()]);

        let _ = tokio::fs::remove_file(&path).await;
        Ok(())
    }

    #[tokio::test]
    async fn failed_update_leaves_file_untouched() -> Result<(), ServiceError> {
        let path = temp_path("rollback");
        let store = JsonListStore::<String>::new(&path).await?;
        store
            .update(|items| {
                items.push("kept".into());
                Ok(())
            })
            .await?;

        let res: Result<(), ServiceError> = store
            .update(|items| {
                items.push("dropped".into());
                Err(ServiceError::Validation("nope".into()))
            })
            .await;
        assert!(res.is_err());
        assert_eq!(store.load().await, vec!["kept".to_string()]);

        let _ = tokio::fs::remove_file(&path).await;
        Ok(())
    }

    #[tokio::test]
    async fn concurrent_updates_are_serialized() -> Result<(), ServiceError> {
        let path = temp_path("concurrent");
        let store = JsonListStore::<u64>::new(&path).await?;

        let mut handles = Vec::new();
        for _ in 0..8 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                store
                    .update(|items| {
                        let next = items.iter().max().copied().unwrap_or(0) + 1;
                        items.push(next);
                        Ok(())
                    })
                    .await
            }));
        }
        for h in handles {
            h.await.expect("join").expect("update");
        }

        let mut items = store.load().await;
        items.sort_unstable();
        assert_eq!(items, (1..=8).collect::<Vec<_>>());

        let _ = tokio::fs::remove_file(&path).await;
        Ok(())
    }
}
