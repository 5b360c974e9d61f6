use std::path::{Path, PathBuf};
use async_trait::async_trait;
use tracing::info;
use crate::core::library::LibraryResult;
use crate::persistence::PersistenceSink;
use crate::persistence::snapshot::LibrarySnapshot;

#[derive(Debug)]
pub struct JsonFileSink {
    path: PathBuf,
}

impl JsonFileSink {
    pub fn new(path: &str) -> Self {
        Self {
            path: PathBuf::from(path),
        }
    }

    pub fn path(&self) -> &Path {
        self.path.as_path()
    }
}

#[async_trait]
impl PersistenceSink for JsonFileSink {
    async fn save(&self, snapshot: &LibrarySnapshot) -> LibraryResult<()> {
        let json = snapshot.to_json()?;
        tokio::fs::write(&self.path, json.as_bytes()).await?;
        info!(path = %self.path.display(), books = snapshot.books.len(),
            patrons = snapshot.patrons.len(), "catalog saved");
        Ok(())
    }
}
