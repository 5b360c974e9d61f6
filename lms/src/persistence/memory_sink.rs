use std::sync::Mutex;
use async_trait::async_trait;
use crate::core::library::{LibraryError, LibraryResult};
use crate::persistence::PersistenceSink;
use crate::persistence::snapshot::LibrarySnapshot;

// MemorySink keeps the encoded form of every save instead of writing it out.
#[derive(Debug, Default)]
pub struct MemorySink {
    saved: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self {
            saved: Mutex::new(vec![]),
        }
    }

    pub fn saves(&self) -> usize {
        self.saved.lock().map(|s| s.len()).unwrap_or_default()
    }

    pub fn last_json(&self) -> Option<String> {
        self.saved.lock().ok().and_then(|s| s.last().cloned())
    }
}

#[async_trait]
impl PersistenceSink for MemorySink {
    async fn save(&self, snapshot: &LibrarySnapshot) -> LibraryResult<()> {
        let json = snapshot.to_json()?;
        let mut saved = self.saved.lock().map_err(|err| LibraryError::runtime(
            format!("memory sink lock poisoned {:?}", err).as_str(), None))?;
        saved.push(json);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::books::dto::BookDto;
    use crate::persistence::PersistenceSink;
    use crate::persistence::memory_sink::MemorySink;
    use crate::persistence::snapshot::LibrarySnapshot;

    #[tokio::test]
    async fn test_should_keep_every_save() {
        let sink = MemorySink::new();
        assert_eq!(0, sink.saves());
        assert!(sink.last_json().is_none());

        sink.save(&LibrarySnapshot::new(&[], &[])).await.expect("should save");
        sink.save(&LibrarySnapshot::new(&[BookDto::new("Harry Potter", "J.K. Rowling", "Fantasy")], &[]))
            .await.expect("should save");
        assert_eq!(2, sink.saves());
        assert!(sink.last_json().expect("should have save").contains("Harry Potter"));
    }
}
