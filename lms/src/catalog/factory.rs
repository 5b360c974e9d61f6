use std::cell::Cell;
use std::sync::Mutex;
use lazy_static::lazy_static;
use crate::catalog::domain::CatalogRegistry;
use crate::catalog::domain::service::CatalogRegistryImpl;
use crate::core::domain::Configuration;
use crate::core::library::{LibraryError, LibraryResult};

lazy_static! {
    static ref SHARED_REGISTRY: Mutex<Box<dyn CatalogRegistry>> =
        Mutex::new(create_catalog_registry(&Configuration::default()));
}

thread_local! {
    // set while this thread holds the shared registry, listeners run inside that window
    static HOLDING_SHARED: Cell<bool> = Cell::new(false);
}

struct HoldingGuard;

impl HoldingGuard {
    fn acquire() -> LibraryResult<Self> {
        if HOLDING_SHARED.with(|holding| holding.replace(true)) {
            return Err(LibraryError::runtime(
                "shared registry is already held by this thread", Some("reentrant".to_string())));
        }
        Ok(HoldingGuard)
    }
}

impl Drop for HoldingGuard {
    fn drop(&mut self) {
        HOLDING_SHARED.with(|holding| holding.set(false));
    }
}

pub fn create_catalog_registry(config: &Configuration) -> Box<dyn CatalogRegistry> {
    Box::new(CatalogRegistryImpl::new(config))
}

/// Returns the registry shared by the whole process, built empty on first access.
///
/// Prefer [`with_shared_registry`]: locking this `Mutex` directly from a book listener while
/// `add_book` runs on the same thread blocks forever.
pub fn shared_registry() -> &'static Mutex<Box<dyn CatalogRegistry>> {
    &SHARED_REGISTRY
}

/// Runs `f` against the shared registry.
///
/// A nested call on the same thread, typically from a book listener during `add_book`,
/// fails with a `Runtime` error whose reason is `reentrant` instead of blocking.
pub fn with_shared_registry<R, F>(f: F) -> LibraryResult<R>
    where F: FnOnce(&mut dyn CatalogRegistry) -> R {
    let _holding = HoldingGuard::acquire()?;
    let mut registry = shared_registry().lock().map_err(|err| LibraryError::runtime(
        format!("shared registry lock poisoned {:?}", err).as_str(), Some("poisoned".to_string())))?;
    Ok(f(&mut **registry))
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};
    use crate::books::dto::BookDto;
    use crate::catalog::factory::{create_catalog_registry, shared_registry, with_shared_registry};
    use crate::core::domain::Configuration;
    use crate::core::library::{LibraryError, LibraryResult};

    #[tokio::test]
    async fn test_should_create_isolated_registries() {
        let mut first = create_catalog_registry(&Configuration::new("first"));
        let second = create_catalog_registry(&Configuration::new("second"));
        first.add_book(BookDto::new("Harry Potter", "J.K. Rowling", "Fantasy")).expect("should add book");
        assert_eq!(1, first.books().len());
        assert!(second.books().is_empty());
    }

    #[tokio::test]
    async fn test_should_share_one_registry() {
        assert!(std::ptr::eq(shared_registry(), shared_registry()));

        let book = BookDto::new("Le Seigneur des Anneaux", "J.R.R. Tolkien", "Fantasy");
        let added = book.clone();
        with_shared_registry(move |registry| registry.add_book(added))
            .expect("should lock").expect("should add book");
        let found = with_shared_registry(|registry| {
            registry.books().iter().any(|b| b.is_same_book(&book))
        }).expect("should lock");
        assert!(found);
    }

    #[tokio::test]
    async fn test_should_refuse_nested_access_from_listener() {
        let nested = Arc::new(Mutex::new(vec![]));
        let seen = nested.clone();
        with_shared_registry(move |registry| {
            registry.subscribe(Box::new(move |_: &BookDto| -> LibraryResult<()> {
                let reentrant = matches!(with_shared_registry(|r| r.books().len()),
                    Err(LibraryError::Runtime { reason_code: Some(ref reason), .. }) if reason == "reentrant");
                seen.lock().expect("lock").push(reentrant);
                Ok(())
            }));
        }).expect("should lock");

        with_shared_registry(|registry| registry.add_book(BookDto::new("Harry Potter", "J.K. Rowling", "Fantasy")))
            .expect("should lock").expect("should add book");

        let nested = nested.lock().expect("lock");
        assert!(!nested.is_empty());
        assert!(nested.iter().all(|reentrant| *reentrant));
        // the thread can use the registry again once the outer call returned
        assert!(with_shared_registry(|registry| registry.books().len()).expect("should lock") >= 1);
    }
}
