use crate::core::domain::Identifiable;

// Book exposes the read-only catalog fields, a book never changes once it is catalogued.
pub trait Book: Identifiable {
    fn title(&self) -> &str;
    fn author(&self) -> &str;
    fn category(&self) -> &str;
}
