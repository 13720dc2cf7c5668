use thiserror::Error;
use tokio::sync::RwLock;
use tracing::debug;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("{table}: row {key} not found")]
    NotFound { table: &'static str, key: String },

    #[error("{table}: row {key} already exists")]
    Duplicate { table: &'static str, key: String },
}

/// Keyed rows held in memory, kept in insertion order.
///
/// Every cell seeds one of these with its mock data at router construction,
/// so state lives exactly as long as the process.
pub struct MemoryTable<T> {
    name: &'static str,
    rows: RwLock<Vec<(String, T)>>,
}

impl<T: Clone> MemoryTable<T> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            rows: RwLock::new(Vec::new()),
        }
    }

    pub fn seeded<I, K>(name: &'static str, rows: I) -> Self
    where
        I: IntoIterator<Item = (K, T)>,
        K: Into<String>,
    {
        let rows: Vec<(String, T)> = rows.into_iter().map(|(k, v)| (k.into(), v)).collect();
        debug!("Seeding table {} with {} rows", name, rows.len());
        Self {
            name,
            rows: RwLock::new(rows),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub async fn get(&self, key: &str) -> Option<T> {
        self.rows
            .read()
            .await
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
    }

    pub async fn list(&self) -> Vec<T> {
        self.rows.read().await.iter().map(|(_, v)| v.clone()).collect()
    }

    pub async fn insert(&self, key: impl Into<String>, value: T) -> Result<(), StoreError> {
        let key = key.into();
        let mut rows = self.rows.write().await;

        if rows.iter().any(|(k, _)| *k == key) {
            return Err(StoreError::Duplicate { table: self.name, key });
        }

        debug!("{}: inserting row {}", self.name, key);
        rows.push((key, value));
        Ok(())
    }

    /// Runs `f` against the row under the write lock. The closure decides
    /// whether the mutation is valid; it must not leave the row half-edited
    /// when it returns an error.
    pub async fn update<R, E, F>(&self, key: &str, f: F) -> Result<R, E>
    where
        F: FnOnce(&mut T) -> Result<R, E>,
        E: From<StoreError>,
    {
        let mut rows = self.rows.write().await;
        let row = rows
            .iter_mut()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
            .ok_or_else(|| StoreError::NotFound {
                table: self.name,
                key: key.to_string(),
            })?;

        debug!("{}: updating row {}", self.name, key);
        f(row)
    }

    /// Keeps only the rows `keep` accepts and returns how many were dropped.
    pub async fn retain<F>(&self, mut keep: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|(_, v)| keep(v));

        let dropped = before - rows.len();
        if dropped > 0 {
            debug!("{}: dropped {} rows", self.name, dropped);
        }
        dropped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_seeded_rows_keep_insertion_order() {
        let table = MemoryTable::seeded("patients", vec![("2", "Carlos"), ("1", "María")]);

        assert_eq!(table.list().await, vec!["Carlos", "María"]);
        assert_eq!(table.get("1").await, Some("María"));
        assert_eq!(table.get("3").await, None);
    }

    #[tokio::test]
    async fn test_insert_rejects_duplicate_key() {
        let table = MemoryTable::new("sessions");
        table.insert("a", 1).await.unwrap();

        let err = table.insert("a", 2).await.unwrap_err();
        assert_eq!(err, StoreError::Duplicate { table: "sessions", key: "a".to_string() });
        assert_eq!(table.list().await, vec![1]);
    }

    #[tokio::test]
    async fn test_update_propagates_closure_error() {
        let table = MemoryTable::seeded("counters", vec![("a", 1)]);

        let doubled: Result<i32, StoreError> = table
            .update("a", |v| {
                *v *= 2;
                Ok(*v)
            })
            .await;
        assert_eq!(doubled, Ok(2));

        let missing: Result<(), StoreError> = table.update("b", |_| Ok(())).await;
        assert!(matches!(missing, Err(StoreError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_retain_drops_rejected_rows() {
        let table = MemoryTable::seeded("sessions", vec![("a", 1), ("b", 5), ("c", 2)]);

        assert_eq!(table.retain(|v| *v > 1).await, 1);
        assert_eq!(table.list().await, vec![5, 2]);
        assert_eq!(table.get("a").await, None);
        assert_eq!(table.retain(|_| true).await, 0);
    }
}
