use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::patrons::dto::PatronDto;

// LibrarySnapshot is the structural dump written by a sink: every field of every book and patron.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct LibrarySnapshot {
    pub books: Vec<BookDto>,
    pub patrons: Vec<PatronDto>,
}

impl LibrarySnapshot {
    pub fn new(books: &[BookDto], patrons: &[PatronDto]) -> Self {
        Self {
            books: books.to_vec(),
            patrons: patrons.to_vec(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use crate::books::dto::BookDto;
    use crate::patrons::dto::PatronDto;
    use crate::persistence::snapshot::LibrarySnapshot;

    #[tokio::test]
    async fn test_should_dump_books_and_patrons() {
        let books = vec![BookDto::new("Harry Potter", "J.K. Rowling", "Fantasy")];
        let patrons = vec![PatronDto::guest("Louis"), PatronDto::subscriber("Martin")];
        let snapshot = LibrarySnapshot::new(&books, &patrons);
        let json: serde_json::Value = serde_json::from_str(
            snapshot.to_json().expect("should serialize").as_str()).expect("should parse");
        assert_eq!("Harry Potter", json["books"][0]["title"]);
        assert_eq!("Guest", json["patrons"][0]["tier"]);
        assert_eq!("Louis", json["patrons"][0]["name"]);
        assert_eq!("Subscriber", json["patrons"][1]["tier"]);
        assert_eq!(false, json["patrons"][1]["subscription_active"]);
    }
}
