use chrono::{NaiveDateTime, Utc};
use uuid::Uuid;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use crate::books::domain::Book;
use crate::books::dto::BookDto;
use crate::core::domain::Identifiable;
use crate::core::library::{LibraryError, LibraryResult, PatronTier};
use crate::patrons::Patron;
use crate::utils::date::serializer;

// UserDto is a registered guest, it can be banned but never borrows.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct UserDto {
    patron_id: String,
    name: String,
    banned: bool,
    #[serde(with = "serializer")]
    created_at: NaiveDateTime,
}

impl UserDto {
    pub fn new(name: &str) -> Self {
        Self {
            patron_id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            banned: false,
            created_at: Utc::now().naive_utc(),
        }
    }

    pub fn created_at(&self) -> NaiveDateTime {
        self.created_at
    }
}

impl Identifiable for UserDto {
    fn id(&self) -> String {
        self.patron_id.to_string()
    }
}

impl Patron for UserDto {
    fn name(&self) -> &str {
        self.name.as_str()
    }

    fn tier(&self) -> PatronTier {
        PatronTier::Guest
    }

    fn is_banned(&self) -> bool {
        self.banned
    }

    fn ban(&mut self) {
        if !self.banned {
            self.banned = true;
            info!(patron = self.name.as_str(), "patron banned");
        }
    }

    fn can_borrow(&self) -> bool {
        false
    }

    fn borrow_book(&mut self, book: &BookDto) -> LibraryResult<()> {
        warn!(patron = self.name.as_str(), book = book.title(), "guest cannot borrow");
        Err(LibraryError::not_granted(
            format!("{} cannot borrow {}, patron is not subscribed", self.name, book.title()).as_str(),
            Some("not_subscribed".to_string())))
    }
}

// SubscriberDto extends a user with a subscription and the ordered list of borrowed books.
// Fields only change through subscribe, ban, borrow_book and return_book.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct SubscriberDto {
    #[serde(flatten)]
    user: UserDto,
    subscription_active: bool,
    borrowed_books: Vec<BookDto>,
}

impl SubscriberDto {
    pub fn new(name: &str) -> Self {
        Self {
            user: UserDto::new(name),
            subscription_active: false,
            borrowed_books: vec![],
        }
    }

    pub fn subscribe(&mut self) {
        self.subscription_active = true;
        info!(patron = self.user.name.as_str(), "subscription activated");
    }

    pub fn subscription_active(&self) -> bool {
        self.subscription_active
    }

    pub fn user(&self) -> &UserDto {
        &self.user
    }

    pub fn borrowed_books(&self) -> &[BookDto] {
        self.borrowed_books.as_slice()
    }

    pub fn is_holding(&self, book: &BookDto) -> bool {
        self.borrowed_books.iter().any(|b| b.is_same_book(book))
    }

    // removes the first borrowed entry of the book, duplicates further down stay borrowed
    pub fn return_book(&mut self, book: &BookDto) -> LibraryResult<()> {
        match self.borrowed_books.iter().position(|b| b.is_same_book(book)) {
            Some(index) => {
                self.borrowed_books.remove(index);
                info!(patron = self.user.name.as_str(), book = book.title(), "book returned");
                Ok(())
            }
            None => {
                warn!(patron = self.user.name.as_str(), book = book.title(), "book is not held");
                Err(LibraryError::not_found(
                    format!("{} cannot return {}, book is not borrowed", self.user.name, book.title()).as_str()))
            }
        }
    }
}

impl Identifiable for SubscriberDto {
    fn id(&self) -> String {
        self.user.id()
    }
}

impl Patron for SubscriberDto {
    fn name(&self) -> &str {
        self.user.name()
    }

    fn tier(&self) -> PatronTier {
        PatronTier::Subscriber
    }

    fn is_banned(&self) -> bool {
        self.user.banned
    }

    fn ban(&mut self) {
        self.user.ban()
    }

    fn can_borrow(&self) -> bool {
        !self.user.banned && self.subscription_active
    }

    fn borrow_book(&mut self, book: &BookDto) -> LibraryResult<()> {
        if !self.can_borrow() {
            let reason = if self.user.banned { "banned" } else { "subscription_inactive" };
            warn!(patron = self.user.name.as_str(), book = book.title(), reason, "borrow refused");
            return Err(LibraryError::not_granted(
                format!("{} cannot borrow {}", self.user.name, book.title()).as_str(),
                Some(reason.to_string())));
        }
        self.borrowed_books.push(book.clone());
        info!(patron = self.user.name.as_str(), book = book.title(), "book borrowed");
        Ok(())
    }
}

// PatronDto is what the catalog keeps for every registered person.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(tag = "tier")]
pub enum PatronDto {
    Guest(UserDto),
    Subscriber(SubscriberDto),
}

impl PatronDto {
    pub fn guest(name: &str) -> Self {
        PatronDto::Guest(UserDto::new(name))
    }

    pub fn subscriber(name: &str) -> Self {
        PatronDto::Subscriber(SubscriberDto::new(name))
    }

    pub fn as_subscriber(&self) -> Option<&SubscriberDto> {
        match self {
            PatronDto::Subscriber(subscriber) => Some(subscriber),
            PatronDto::Guest(_) => None,
        }
    }

    pub fn as_subscriber_mut(&mut self) -> Option<&mut SubscriberDto> {
        match self {
            PatronDto::Subscriber(subscriber) => Some(subscriber),
            PatronDto::Guest(_) => None,
        }
    }

    fn as_patron(&self) -> &dyn Patron {
        match self {
            PatronDto::Guest(user) => user,
            PatronDto::Subscriber(subscriber) => subscriber,
        }
    }

    fn as_patron_mut(&mut self) -> &mut dyn Patron {
        match self {
            PatronDto::Guest(user) => user,
            PatronDto::Subscriber(subscriber) => subscriber,
        }
    }
}

impl From<UserDto> for PatronDto {
    fn from(user: UserDto) -> Self {
        PatronDto::Guest(user)
    }
}

impl From<SubscriberDto> for PatronDto {
    fn from(subscriber: SubscriberDto) -> Self {
        PatronDto::Subscriber(subscriber)
    }
}

impl Identifiable for PatronDto {
    fn id(&self) -> String {
        self.as_patron().id()
    }
}

impl Patron for PatronDto {
    fn name(&self) -> &str {
        self.as_patron().name()
    }

    fn tier(&self) -> PatronTier {
        self.as_patron().tier()
    }

    fn is_banned(&self) -> bool {
        self.as_patron().is_banned()
    }

    fn ban(&mut self) {
        self.as_patron_mut().ban()
    }

    fn can_borrow(&self) -> bool {
        self.as_patron().can_borrow()
    }

    fn borrow_book(&mut self, book: &BookDto) -> LibraryResult<()> {
        self.as_patron_mut().borrow_book(book)
    }
}
