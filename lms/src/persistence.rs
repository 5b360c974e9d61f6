use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::library::LibraryResult;
use crate::persistence::snapshot::LibrarySnapshot;

pub mod factory;
pub mod json_sink;
pub mod memory_sink;
pub mod snapshot;

// PersistenceSink stores a full dump of the catalog, every save replaces the previous one.
#[async_trait]
pub trait PersistenceSink: Sync + Send {
    async fn save(&self, snapshot: &LibrarySnapshot) -> LibraryResult<()>;
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub enum SinkStore {
    JsonFile,
    Memory,
}
