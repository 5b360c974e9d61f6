use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::books::dto::BookDto;
use crate::core::library::{LibraryError, LibraryResult};

// SearchStrategy picks the book field a query is matched against. Matching is a
// case-insensitive substring test, so an empty query matches every book.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum SearchStrategy {
    Title,
    Author,
    Category,
}

impl SearchStrategy {
    pub fn field<'a>(&self, book: &'a BookDto) -> &'a str {
        match self {
            SearchStrategy::Title => book.title(),
            SearchStrategy::Author => book.author(),
            SearchStrategy::Category => book.category(),
        }
    }

    pub fn matches(&self, query: &str, book: &BookDto) -> bool {
        self.matches_lowercase(query.to_lowercase().as_str(), book)
    }

    pub fn search(&self, query: &str, books: &[BookDto]) -> Vec<BookDto> {
        let needle = query.to_lowercase();
        books.iter()
            .filter(|book| self.matches_lowercase(needle.as_str(), book))
            .cloned()
            .collect()
    }

    // needle must already be lowercased
    fn matches_lowercase(&self, needle: &str, book: &BookDto) -> bool {
        self.field(book).to_lowercase().contains(needle)
    }
}

impl TryFrom<&str> for SearchStrategy {
    type Error = LibraryError;

    fn try_from(s: &str) -> LibraryResult<Self> {
        match s.to_lowercase().as_str() {
            "title" => Ok(SearchStrategy::Title),
            "author" => Ok(SearchStrategy::Author),
            "category" => Ok(SearchStrategy::Category),
            other => Err(LibraryError::validation(
                format!("unknown search strategy {}", other).as_str(), Some("400".to_string()))),
        }
    }
}

impl Display for SearchStrategy {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            SearchStrategy::Title => write!(f, "title"),
            SearchStrategy::Author => write!(f, "author"),
            SearchStrategy::Category => write!(f, "category"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::books::dto::BookDto;
    use crate::core::library::LibraryError;
    use crate::search::strategy::SearchStrategy;

    #[tokio::test]
    async fn test_should_match_ignoring_case() {
        let book = BookDto::new("Le Seigneur des Anneaux", "J.R.R. Tolkien", "Fantasy");
        assert!(SearchStrategy::Title.matches("seigneur", &book));
        assert!(SearchStrategy::Title.matches("ANNEAUX", &book));
        assert!(SearchStrategy::Author.matches("tolkien", &book));
        assert!(SearchStrategy::Category.matches("fanta", &book));
        assert!(!SearchStrategy::Author.matches("seigneur", &book));
    }

    #[tokio::test]
    async fn test_should_match_accented_text() {
        let book = BookDto::new("Les Misérables", "Victor Hugo", "Classique");
        assert!(SearchStrategy::Title.matches("MISÉRABLES", &book));
    }

    #[tokio::test]
    async fn test_should_search_what_matches() {
        let books = vec![
            BookDto::new("Le Seigneur des Anneaux", "J.R.R. Tolkien", "Fantasy"),
            BookDto::new("Harry Potter", "J.K. Rowling", "Fantasy"),
            BookDto::new("Les Misérables", "Victor Hugo", "Classique"),
        ];
        for strategy in vec![SearchStrategy::Title, SearchStrategy::Author, SearchStrategy::Category] {
            for query in ["LES", "r", "fantasy", "", "Hugo"] {
                let expected: Vec<BookDto> = books.iter()
                    .filter(|book| strategy.matches(query, book))
                    .cloned()
                    .collect();
                assert_eq!(expected, strategy.search(query, &books));
            }
        }
    }

    #[tokio::test]
    async fn test_should_format_strategies() {
        for strategy in vec![SearchStrategy::Title, SearchStrategy::Author, SearchStrategy::Category] {
            let str = strategy.to_string();
            let parsed = SearchStrategy::try_from(str.as_str()).expect("should parse");
            assert_eq!(strategy, parsed);
        }
        assert!(matches!(SearchStrategy::try_from("isbn"), Err(LibraryError::Validation { .. })));
    }
}
