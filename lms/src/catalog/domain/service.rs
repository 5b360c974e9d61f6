use async_trait::async_trait;
use tracing::info;
use crate::books::domain::Book;
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogRegistry;
use crate::core::domain::{Configuration, Identifiable};
use crate::core::library::{LibraryError, LibraryResult};
use crate::notifications::listener::BookListener;
use crate::notifications::notifier::BookNotifier;
use crate::patrons::Patron;
use crate::patrons::dto::PatronDto;
use crate::persistence::PersistenceSink;
use crate::persistence::snapshot::LibrarySnapshot;
use crate::search::Search;

#[derive(Debug)]
pub(crate) struct CatalogRegistryImpl {
    branch_id: String,
    books: Vec<BookDto>,
    patrons: Vec<PatronDto>,
    notifier: BookNotifier,
}

impl CatalogRegistryImpl {
    pub(crate) fn new(config: &Configuration) -> Self {
        Self {
            branch_id: config.branch_id.to_string(),
            books: vec![],
            patrons: vec![],
            notifier: BookNotifier::new(),
        }
    }
}

#[async_trait]
impl CatalogRegistry for CatalogRegistryImpl {
    // the book is kept even when a listener fails, the failure is only reported
    fn add_book(&mut self, book: BookDto) -> LibraryResult<String> {
        let id = book.id();
        info!(branch = self.branch_id.as_str(), book_id = id.as_str(), title = book.title(), "book added");
        self.books.push(book);
        if let Some(added) = self.books.last() {
            self.notifier.publish(added)?;
        }
        Ok(id)
    }

    fn add_patron(&mut self, patron: PatronDto) -> String {
        let id = patron.id();
        info!(branch = self.branch_id.as_str(), patron_id = id.as_str(), name = patron.name(),
            tier = %patron.tier(), "patron added");
        self.patrons.push(patron);
        id
    }

    fn subscribe(&mut self, listener: Box<dyn BookListener>) {
        self.notifier.subscribe(listener);
    }

    fn books(&self) -> &[BookDto] {
        self.books.as_slice()
    }

    fn patrons(&self) -> &[PatronDto] {
        self.patrons.as_slice()
    }

    fn find_book(&self, id: &str) -> LibraryResult<&BookDto> {
        self.books.iter().find(|b| b.book_id() == id)
            .ok_or_else(|| LibraryError::not_found(format!("book with id {} not found", id).as_str()))
    }

    fn find_patron(&self, id: &str) -> LibraryResult<&PatronDto> {
        self.patrons.iter().find(|p| p.id() == id)
            .ok_or_else(|| LibraryError::not_found(format!("patron with id {} not found", id).as_str()))
    }

    fn find_patron_mut(&mut self, id: &str) -> LibraryResult<&mut PatronDto> {
        self.patrons.iter_mut().find(|p| p.id() == id)
            .ok_or_else(|| LibraryError::not_found(format!("patron with id {} not found", id).as_str()))
    }

    fn search_books(&self, search: &Search, query: &str) -> Vec<BookDto> {
        search.execute(query, self.books.as_slice())
    }

    fn snapshot(&self) -> LibrarySnapshot {
        LibrarySnapshot::new(self.books.as_slice(), self.patrons.as_slice())
    }

    async fn save(&self, sink: &dyn PersistenceSink) -> LibraryResult<()> {
        let snapshot = self.snapshot();
        sink.save(&snapshot).await
    }
}
