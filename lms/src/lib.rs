//! In-memory library catalog: books, guest and subscribed patrons, book-added
//! notifications, pluggable search strategies and a flat-file snapshot sink.

pub mod books;
pub mod catalog;
pub mod core;
pub mod notifications;
pub mod patrons;
pub mod persistence;
pub mod search;
pub mod utils;

pub use crate::books::dto::BookDto;
pub use crate::catalog::domain::CatalogRegistry;
pub use crate::catalog::factory::{create_catalog_registry, shared_registry, with_shared_registry};
pub use crate::core::domain::Configuration;
pub use crate::core::library::{LibraryError, LibraryResult};
pub use crate::patrons::dto::{PatronDto, SubscriberDto, UserDto};
pub use crate::search::Search;
pub use crate::search::strategy::SearchStrategy;
