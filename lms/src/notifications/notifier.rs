use tracing::warn;
use crate::books::dto::BookDto;
use crate::core::library::{LibraryError, LibraryResult};
use crate::notifications::listener::BookListener;

// BookNotifier fans a new book out to every subscribed listener on the caller's thread.
// A failing listener does not stop the fan-out, failures are reported once all listeners ran.
#[derive(Default)]
pub struct BookNotifier {
    listeners: Vec<Box<dyn BookListener>>,
}

impl BookNotifier {
    pub fn new() -> Self {
        Self {
            listeners: vec![],
        }
    }

    pub fn subscribe(&mut self, listener: Box<dyn BookListener>) {
        self.listeners.push(listener);
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    pub fn publish(&self, book: &BookDto) -> LibraryResult<()> {
        let mut failures = vec![];
        for listener in self.listeners.iter() {
            if let Err(err) = listener.on_book_added(book) {
                warn!(listener = listener.name().as_str(), book_id = book.book_id(), error = %err,
                    "listener failed");
                failures.push(format!("{}: {}", listener.name(), err));
            }
        }
        if failures.is_empty() {
            Ok(())
        } else {
            Err(LibraryError::notification(
                format!("book {} added but listeners failed [{}]", book.book_id(), failures.join("; ")).as_str(),
                book.book_id(), failures.len()))
        }
    }
}

impl std::fmt::Debug for BookNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BookNotifier")
            .field("listeners", &self.listeners.iter().map(|l| l.name()).collect::<Vec<String>>())
            .finish()
    }
}
