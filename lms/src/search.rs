use tracing::debug;
use crate::books::dto::BookDto;
use crate::search::strategy::SearchStrategy;

pub mod strategy;

// Search holds the strategy callers query with, so the matched field can change
// without touching the calling code.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Search {
    strategy: SearchStrategy,
}

impl Search {
    pub fn new(strategy: SearchStrategy) -> Self {
        Self {
            strategy,
        }
    }

    pub fn strategy(&self) -> SearchStrategy {
        self.strategy
    }

    pub fn set_strategy(&mut self, strategy: SearchStrategy) {
        self.strategy = strategy;
    }

    pub fn execute(&self, query: &str, books: &[BookDto]) -> Vec<BookDto> {
        let found = self.strategy.search(query, books);
        debug!(strategy = %self.strategy, query, found = found.len(), "search executed");
        found
    }
}
