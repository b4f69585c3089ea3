use chrono::{DateTime, Utc};
use contracts::domain::a001_sales_record::SalesRow;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::a001_sales_record::repository;

/// Parsed sales file plus derived calendar fields. Read-only once built.
#[derive(Debug)]
pub struct LoadedDataset {
    pub rows: Vec<SalesRow>,
    pub source_path: PathBuf,
    pub loaded_at: DateTime<Utc>,
}

impl LoadedDataset {
    pub fn new(rows: Vec<SalesRow>, source_path: PathBuf) -> Self {
        Self {
            rows,
            source_path,
            loaded_at: Utc::now(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Single-slot cache of the loaded dataset.
///
/// Owned by `main` and handed to handlers as axum state. The file is read
/// once on `open` and again only on an explicit `reload`; readers get an
/// `Arc` snapshot and never observe a half-replaced dataset.
#[derive(Clone)]
pub struct DatasetStore {
    path: PathBuf,
    slot: Arc<RwLock<Arc<LoadedDataset>>>,
}

impl DatasetStore {
    /// Load the file and build the store. Missing or malformed file is an error.
    pub async fn open(path: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let path = path.into();
        let dataset = load_blocking(path.clone()).await?;
        Ok(Self::with_dataset(path, dataset))
    }

    /// Build a store around an already loaded dataset
    pub fn with_dataset(path: impl Into<PathBuf>, dataset: LoadedDataset) -> Self {
        Self {
            path: path.into(),
            slot: Arc::new(RwLock::new(Arc::new(dataset))),
        }
    }

    pub fn source_path(&self) -> &Path {
        &self.path
    }

    /// Snapshot of the cached dataset; never touches the disk
    pub async fn current(&self) -> Arc<LoadedDataset> {
        Arc::clone(&*self.slot.read().await)
    }

    /// Re-read the file and replace the cached dataset.
    ///
    /// On failure the previous dataset stays in place.
    pub async fn reload(&self) -> anyhow::Result<Arc<LoadedDataset>> {
        tracing::info!("Reloading sales dataset from {}", self.path.display());
        let fresh = Arc::new(load_blocking(self.path.clone()).await?);
        let mut slot = self.slot.write().await;
        *slot = Arc::clone(&fresh);
        tracing::info!(
            "Sales dataset replaced: {} rows loaded at {}",
            fresh.len(),
            fresh.loaded_at
        );
        Ok(fresh)
    }
}

async fn load_blocking(path: PathBuf) -> anyhow::Result<LoadedDataset> {
    let rows_path = path.clone();
    let rows = tokio::task::spawn_blocking(move || repository::load_rows(&rows_path))
        .await
        .map_err(|e| anyhow::anyhow!("Dataset load task failed: {}", e))??;
    Ok(LoadedDataset::new(rows, path))
}
