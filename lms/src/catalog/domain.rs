pub mod service;

use async_trait::async_trait;
use crate::books::dto::BookDto;
use crate::core::library::LibraryResult;
use crate::notifications::listener::BookListener;
use crate::patrons::dto::PatronDto;
use crate::persistence::PersistenceSink;
use crate::persistence::snapshot::LibrarySnapshot;
use crate::search::Search;

// CatalogRegistry owns every book and patron of a library. Both collections only grow.
#[async_trait]
pub trait CatalogRegistry: Sync + Send {
    /// Appends the book and notifies every listener before returning its id.
    ///
    /// The book is stored before any listener runs. When listeners fail the call returns
    /// `LibraryError::Notification`, yet the book stays in the catalog and the error carries
    /// its `book_id`, so callers must not treat that error as a failed add.
    fn add_book(&mut self, book: BookDto) -> LibraryResult<String>;
    fn add_patron(&mut self, patron: PatronDto) -> String;
    fn subscribe(&mut self, listener: Box<dyn BookListener>);
    fn books(&self) -> &[BookDto];
    fn patrons(&self) -> &[PatronDto];
    fn find_book(&self, id: &str) -> LibraryResult<&BookDto>;
    fn find_patron(&self, id: &str) -> LibraryResult<&PatronDto>;
    fn find_patron_mut(&mut self, id: &str) -> LibraryResult<&mut PatronDto>;
    fn search_books(&self, search: &Search, query: &str) -> Vec<BookDto>;
    fn snapshot(&self) -> LibrarySnapshot;
    async fn save(&self, sink: &dyn PersistenceSink) -> LibraryResult<()>;
}
