use serde::{Deserialize, Serialize};
use crate::persistence::SinkStore;

pub const DEFAULT_SNAPSHOT_PATH: &str = "library_snapshot.json";

// Identifiable defines common traits that can be shared by catalog objects
pub trait Identifiable : Sync + Send {
    fn id(&self) -> String;
}


// Configuration abstracts config options for library system
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub branch_id: String,
    pub snapshot_path: String,
    pub sink_store: SinkStore,
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            snapshot_path: DEFAULT_SNAPSHOT_PATH.to_string(),
            sink_store: SinkStore::JsonFile,
        }
    }

    pub fn with_snapshot_path(mut self, path: &str) -> Self {
        self.snapshot_path = path.to_string();
        self
    }

    pub fn with_sink_store(mut self, store: SinkStore) -> Self {
        self.sink_store = store;
        self
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::new("main")
    }
}

#[cfg(test)]
mod tests {
    use crate::core::domain::{Configuration, DEFAULT_SNAPSHOT_PATH};
    use crate::persistence::SinkStore;

    #[tokio::test]
    async fn test_should_build_config() {
        let config = Configuration::new("test");
        assert_eq!("test", config.branch_id.as_str());
        assert_eq!(DEFAULT_SNAPSHOT_PATH, config.snapshot_path.as_str());
        assert_eq!(SinkStore::JsonFile, config.sink_store);
    }

    #[tokio::test]
    async fn test_should_override_config() {
        let config = Configuration::default()
            .with_snapshot_path("/tmp/other.json")
            .with_sink_store(SinkStore::Memory);
        assert_eq!("main", config.branch_id.as_str());
        assert_eq!("/tmp/other.json", config.snapshot_path.as_str());
        assert_eq!(SinkStore::Memory, config.sink_store);
    }
}
