use crate::core::domain::Configuration;
use crate::persistence::json_sink::JsonFileSink;
use crate::persistence::memory_sink::MemorySink;
use crate::persistence::{PersistenceSink, SinkStore};

pub fn create_sink(config: &Configuration) -> Box<dyn PersistenceSink> {
    match config.sink_store {
        SinkStore::JsonFile => {
            Box::new(JsonFileSink::new(config.snapshot_path.as_str()))
        }
        SinkStore::Memory => {
            Box::new(MemorySink::new())
        }
    }
}
