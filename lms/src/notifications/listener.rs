use tracing::info;
use crate::books::domain::Book;
use crate::books::dto::BookDto;
use crate::core::library::LibraryResult;

// BookListener receives every book added to the catalog, synchronously and in subscription order.
pub trait BookListener: Sync + Send {
    fn name(&self) -> String {
        std::any::type_name::<Self>().to_string()
    }

    fn on_book_added(&self, book: &BookDto) -> LibraryResult<()>;
}

impl<F> BookListener for F
    where F: Fn(&BookDto) -> LibraryResult<()> + Sync + Send {
    fn on_book_added(&self, book: &BookDto) -> LibraryResult<()> {
        self(book)
    }
}

// LoggingListener reports new arrivals to the tracing subscriber.
#[derive(Debug, Default)]
pub struct LoggingListener {
    branch_id: String,
}

impl LoggingListener {
    pub fn new(branch_id: &str) -> Self {
        Self {
            branch_id: branch_id.to_string(),
        }
    }
}

impl BookListener for LoggingListener {
    fn name(&self) -> String {
        format!("logging-listener-{}", self.branch_id)
    }

    fn on_book_added(&self, book: &BookDto) -> LibraryResult<()> {
        info!(branch = self.branch_id.as_str(), title = book.title(), author = book.author(),
            category = book.category(), "new book in catalog");
        Ok(())
    }
}
