use crate::books::dto::BookDto;
use crate::core::domain::Identifiable;
use crate::core::library::{LibraryResult, PatronTier};

pub mod dto;

// Patron is the capability every registered person shares. Callers invoke borrow_book on any
// tier and the tier itself decides whether the loan is granted.
pub trait Patron: Identifiable {
    fn name(&self) -> &str;
    fn tier(&self) -> PatronTier;
    fn is_banned(&self) -> bool;
    fn ban(&mut self);
    fn can_borrow(&self) -> bool;
    fn borrow_book(&mut self, book: &BookDto) -> LibraryResult<()>;
}
