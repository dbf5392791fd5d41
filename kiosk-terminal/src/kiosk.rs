//! Kiosk view states and the transitions between them.
//!
//! `Greeting -> AskFavorites -> Preparing -> ShowBooks | NoRecommendations`,
//! and every result state goes back to `Greeting` on request or after
//! [`AUTO_RESET`]. Nothing here does I/O; the terminal loop performs the
//! requests and sleeps and feeds the results back in.

use crate::client::{Book, ClientError, RecommendationReply};
use std::time::Duration;

pub const AUTO_RESET: Duration = Duration::from_secs(40);
pub const FIRST_PREPARE_DELAY: Duration = Duration::from_secs(1);
pub const ALTERNATIVE_PREPARE_DELAY: Duration = Duration::from_secs(8);
pub const SEARCH_LIMIT: usize = 10;

pub const MSG_RECOMMENDATION_FAILED: &str = "Kitap önerisi alınamadı. Lütfen tekrar deneyin.";
pub const MSG_SEARCH_FAILED: &str = "Arama yapılamadı. Lütfen tekrar deneyin.";
pub const MSG_SEARCH_EMPTY: &str = "Aradığınız kriterlere uygun kitap bulunamadı.";
const MSG_NO_RECOMMENDATION: &str = "Öneri bulunamadı";
const MSG_NO_ALTERNATIVE: &str = "Başka öneri bulunamadı";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KioskState {
    #[default]
    Greeting,
    AskFavorites,
    Preparing,
    ShowBooks,
    NoRecommendations,
}

impl KioskState {
    /// States that return to the greeting on their own after [`AUTO_RESET`].
    pub fn auto_resets(self) -> bool {
        matches!(self, KioskState::ShowBooks | KioskState::NoRecommendations)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    First,
    Alternative,
}

/// A recommendation request to run once the preparation delay has passed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRequest {
    pub kind: RequestKind,
    pub user_input: String,
    pub exclude_ids: Vec<u32>,
    pub delay: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start,
    Favorites(String),
    Alternative,
    Search(String),
    Home,
    Quit,
    Unknown,
}

impl Command {
    /// Interprets a line typed at the kiosk while in `state`.
    pub fn parse(state: KioskState, line: &str) -> Command {
        let line = line.trim();
        let lowered = line.to_lowercase();

        if matches!(lowered.as_str(), "çıkış" | "cikis" | "quit") {
            return Command::Quit;
        }
        if matches!(lowered.as_str(), "ana" | "geri" | "menü" | "menu") {
            return Command::Home;
        }
        // favorites text may itself start with "ara"
        if state != KioskState::AskFavorites {
            if lowered == "ara" {
                return Command::Search(String::new());
            }
            if line.get(..4).is_some_and(|prefix| prefix.eq_ignore_ascii_case("ara ")) {
                return Command::Search(line[4..].trim().to_string());
            }
        }

        match state {
            KioskState::Greeting if lowered.is_empty() || lowered == "evet" => Command::Start,
            KioskState::AskFavorites if !lowered.is_empty() => Command::Favorites(line.to_string()),
            KioskState::ShowBooks if lowered == "başka" || lowered == "baska" => Command::Alternative,
            KioskState::NoRecommendations if lowered == "tekrar" => Command::Start,
            _ => Command::Unknown,
        }
    }
}

/// What the terminal has to do for a search command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchAction {
    /// Handled locally; nothing to fetch.
    Done,
    Fetch(String),
}

#[derive(Debug, Default)]
pub struct Kiosk {
    state: KioskState,
    favorite_books: String,
    recommended_books: Vec<Book>,
    displayed_books: Vec<Book>,
    used_book_ids: Vec<u32>,
    search_query: String,
    error_message: Option<String>,
}

impl Kiosk {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> KioskState {
        self.state
    }

    pub fn displayed_books(&self) -> &[Book] {
        &self.displayed_books
    }

    pub fn used_book_ids(&self) -> &[u32] {
        &self.used_book_ids
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn start_recommendation(&mut self) {
        self.state = KioskState::AskFavorites;
        self.error_message = None;
    }

    /// Moves to `Preparing` unless the text is blank.
    pub fn submit_favorites(&mut self, text: &str) -> Option<PendingRequest> {
        self.favorite_books = text.to_string();
        if text.trim().is_empty() {
            return None;
        }

        self.state = KioskState::Preparing;
        self.error_message = None;

        Some(PendingRequest {
            kind: RequestKind::First,
            user_input: text.to_string(),
            exclude_ids: Vec::new(),
            delay: FIRST_PREPARE_DELAY,
        })
    }

    /// Asks again with the same text, excluding every book shown so far.
    pub fn request_alternative(&mut self) -> Option<PendingRequest> {
        if self.state() != KioskState::ShowBooks {
            return None;
        }

        self.state = KioskState::Preparing;
        self.error_message = None;

        Some(PendingRequest {
            kind: RequestKind::Alternative,
            user_input: self.favorite_books.clone(),
            exclude_ids: self.used_book_ids.clone(),
            delay: ALTERNATIVE_PREPARE_DELAY,
        })
    }

    pub fn finish_preparing(
        &mut self,
        kind: RequestKind,
        result: Result<RecommendationReply, ClientError>,
    ) {
        let fallback = match kind {
            RequestKind::First => MSG_NO_RECOMMENDATION,
            RequestKind::Alternative => MSG_NO_ALTERNATIVE,
        };

        match result {
            Ok(reply) if reply.error.is_none() && !reply.books.is_empty() => {
                let ids = reply.books.iter().map(|book| book.id);
                match kind {
                    RequestKind::First => self.used_book_ids = ids.collect(),
                    RequestKind::Alternative => self.used_book_ids.extend(ids),
                }
                self.recommended_books = reply.books.clone();
                self.displayed_books = reply.books;
                self.state = KioskState::ShowBooks;
            }
            Ok(reply) => {
                self.error_message = Some(reply.error.unwrap_or_else(|| fallback.to_string()));
                self.state = KioskState::NoRecommendations;
            }
            Err(_) => {
                self.error_message = Some(MSG_RECOMMENDATION_FAILED.to_string());
                self.state = KioskState::NoRecommendations;
            }
        }
    }

    pub fn search(&mut self, query: &str) -> SearchAction {
        self.search_query = query.to_string();
        self.error_message = None;

        if query.trim().is_empty() {
            self.displayed_books.clear();
            return SearchAction::Done;
        }

        let lowered = query.to_lowercase();
        if lowered.contains("kitap") && lowered.contains("göster") {
            self.state = KioskState::ShowBooks;
            self.displayed_books = self.recommended_books.clone();
            return SearchAction::Done;
        }

        SearchAction::Fetch(query.to_string())
    }

    pub fn apply_search_results(&mut self, result: Result<Vec<Book>, ClientError>) {
        match result {
            Ok(books) if books.is_empty() => {
                self.error_message = Some(MSG_SEARCH_EMPTY.to_string());
                self.displayed_books.clear();
            }
            Ok(books) => self.displayed_books = books,
            Err(_) => {
                self.error_message = Some(MSG_SEARCH_FAILED.to_string());
                self.displayed_books.clear();
            }
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn message(&self) -> &str {
        match self.state() {
            KioskState::Greeting => "Merhaba! Size kitap önermemi ister misiniz?",
            KioskState::AskFavorites => {
                "Hoşuna giden okuyup beğendiğin kitaplardan birini veya bir kaçını yazar mısın?"
            }
            KioskState::Preparing => "Sizin için kitap önerisi hazırlıyorum...",
            KioskState::ShowBooks => {
                "İşte senin için seçtiğim kitaplar! Kütüphanemizden bu kitapları temin edebilirsin. Ekranın fotoğrafını çekmeyi unutma!"
            }
            KioskState::NoRecommendations => self
                .error_message
                .as_deref()
                .unwrap_or("Üzgünüm, şu anda size uygun kitap önerisi bulamadım."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(id: u32, title: &str) -> Book {
        Book {
            id,
            title: title.to_string(),
            author: "Yazar".to_string(),
            genre: "Roman".to_string(),
            description: None,
            color_gradient: "from-blue-600 to-blue-800".to_string(),
            available_copies: 1,
        }
    }

    fn reply(books: Vec<Book>) -> Result<RecommendationReply, ClientError> {
        Ok(RecommendationReply { books, error: None })
    }

    fn kiosk_showing(ids: &[u32]) -> Kiosk {
        let mut kiosk = Kiosk::new();
        kiosk.start_recommendation();
        let pending = kiosk.submit_favorites("Suç ve Ceza").unwrap();
        let books = ids.iter().map(|&id| book(id, "Kitap")).collect();
        kiosk.finish_preparing(pending.kind, reply(books));
        kiosk
    }

    #[test]
    fn test_starts_at_greeting() {
        let kiosk = Kiosk::new();
        assert_eq!(kiosk.state(), KioskState::Greeting);
        assert_eq!(kiosk.message(), "Merhaba! Size kitap önermemi ister misiniz?");
    }

    #[test]
    fn test_blank_favorites_do_not_start_preparing() {
        let mut kiosk = Kiosk::new();
        kiosk.start_recommendation();

        assert!(kiosk.submit_favorites("   ").is_none());
        assert_eq!(kiosk.state(), KioskState::AskFavorites);
    }

    #[test]
    fn test_first_request_uses_short_delay_and_no_exclusions() {
        let mut kiosk = Kiosk::new();
        kiosk.start_recommendation();
        let pending = kiosk.submit_favorites("Dune").unwrap();

        assert_eq!(kiosk.state(), KioskState::Preparing);
        assert_eq!(pending.kind, RequestKind::First);
        assert_eq!(pending.delay, FIRST_PREPARE_DELAY);
        assert!(pending.exclude_ids.is_empty());
    }

    #[test]
    fn test_successful_reply_shows_books() {
        let kiosk = kiosk_showing(&[1, 2, 3]);

        assert_eq!(kiosk.state(), KioskState::ShowBooks);
        assert_eq!(kiosk.displayed_books().len(), 3);
        assert_eq!(kiosk.used_book_ids(), &[1, 2, 3]);
        assert!(kiosk.state().auto_resets());
    }

    #[test]
    fn test_alternative_excludes_shown_books_and_accumulates() {
        let mut kiosk = kiosk_showing(&[1, 2]);

        let pending = kiosk.request_alternative().unwrap();
        assert_eq!(pending.kind, RequestKind::Alternative);
        assert_eq!(pending.delay, ALTERNATIVE_PREPARE_DELAY);
        assert_eq!(pending.user_input, "Suç ve Ceza");
        assert_eq!(pending.exclude_ids, vec![1, 2]);

        kiosk.finish_preparing(pending.kind, reply(vec![book(5, "Dune")]));
        assert_eq!(kiosk.used_book_ids(), &[1, 2, 5]);
        assert_eq!(kiosk.displayed_books()[0].id, 5);
    }

    #[test]
    fn test_alternative_only_from_show_books() {
        let mut kiosk = Kiosk::new();
        assert!(kiosk.request_alternative().is_none());
        assert_eq!(kiosk.state(), KioskState::Greeting);
    }

    #[test]
    fn test_server_error_message_is_shown() {
        let mut kiosk = Kiosk::new();
        kiosk.start_recommendation();
        let pending = kiosk.submit_favorites("xyz").unwrap();
        kiosk.finish_preparing(
            pending.kind,
            Ok(RecommendationReply {
                books: Vec::new(),
                error: Some("Üzgünüm".to_string()),
            }),
        );

        assert_eq!(kiosk.state(), KioskState::NoRecommendations);
        assert_eq!(kiosk.message(), "Üzgünüm");
    }

    #[test]
    fn test_empty_alternative_uses_fallback_message() {
        let mut kiosk = kiosk_showing(&[1]);
        let pending = kiosk.request_alternative().unwrap();
        kiosk.finish_preparing(pending.kind, reply(Vec::new()));

        assert_eq!(kiosk.state(), KioskState::NoRecommendations);
        assert_eq!(kiosk.message(), "Başka öneri bulunamadı");
    }

    #[test]
    fn test_network_failure_is_flat_message() {
        let mut kiosk = Kiosk::new();
        kiosk.start_recommendation();
        let pending = kiosk.submit_favorites("Dune").unwrap();
        kiosk.finish_preparing(pending.kind, Err(ClientError::Status(500)));

        assert_eq!(kiosk.state(), KioskState::NoRecommendations);
        assert_eq!(kiosk.message(), MSG_RECOMMENDATION_FAILED);
    }

    #[test]
    fn test_reset_clears_session() {
        let mut kiosk = kiosk_showing(&[1, 2]);
        kiosk.search("dune");
        kiosk.reset();

        assert_eq!(kiosk.state(), KioskState::Greeting);
        assert!(kiosk.displayed_books().is_empty());
        assert!(kiosk.used_book_ids().is_empty());
        assert!(kiosk.error_message().is_none());
        assert!(kiosk.search_query().is_empty());
    }

    #[test]
    fn test_show_books_command_reuses_recommendations() {
        let mut kiosk = kiosk_showing(&[3, 4]);
        kiosk.apply_search_results(Ok(vec![book(9, "Sefiller")]));
        assert_eq!(kiosk.displayed_books()[0].id, 9);

        assert_eq!(kiosk.search("Kitapları GÖSTER"), SearchAction::Done);
        assert_eq!(kiosk.state(), KioskState::ShowBooks);
        let ids: Vec<u32> = kiosk.displayed_books().iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![3, 4]);
    }

    #[test]
    fn test_search_results_and_failures() {
        let mut kiosk = Kiosk::new();
        assert_eq!(kiosk.search("tarih"), SearchAction::Fetch("tarih".to_string()));

        kiosk.apply_search_results(Ok(Vec::new()));
        assert_eq!(kiosk.error_message(), Some(MSG_SEARCH_EMPTY));

        kiosk.apply_search_results(Err(ClientError::Status(500)));
        assert_eq!(kiosk.error_message(), Some(MSG_SEARCH_FAILED));
        assert!(kiosk.displayed_books().is_empty());

        assert_eq!(kiosk.search("  "), SearchAction::Done);
    }

    #[test]
    fn test_command_parsing() {
        assert_eq!(Command::parse(KioskState::Greeting, ""), Command::Start);
        assert_eq!(Command::parse(KioskState::Greeting, "Evet"), Command::Start);
        assert_eq!(
            Command::parse(KioskState::AskFavorites, " Suç ve Ceza "),
            Command::Favorites("Suç ve Ceza".to_string())
        );
        assert_eq!(Command::parse(KioskState::AskFavorites, ""), Command::Unknown);
        assert_eq!(Command::parse(KioskState::ShowBooks, "başka"), Command::Alternative);
        assert_eq!(Command::parse(KioskState::ShowBooks, "ana"), Command::Home);
        assert_eq!(Command::parse(KioskState::NoRecommendations, "tekrar"), Command::Start);
        assert_eq!(
            Command::parse(KioskState::Greeting, "ara matematik"),
            Command::Search("matematik".to_string())
        );
        assert_eq!(Command::parse(KioskState::ShowBooks, "çıkış"), Command::Quit);
        assert_eq!(Command::parse(KioskState::Greeting, "ara"), Command::Search(String::new()));
        assert_eq!(Command::parse(KioskState::Greeting, "merhaba"), Command::Unknown);
    }

    #[test]
    fn test_search_prefix_ignores_case() {
        for line in ["ara fizik", "Ara fizik", "ARA fizik", "aRa  fizik "] {
            assert_eq!(
                Command::parse(KioskState::ShowBooks, line),
                Command::Search("fizik".to_string()),
                "{:?}",
                line
            );
        }
        assert_eq!(
            Command::parse(KioskState::Greeting, "ARA Çukurova"),
            Command::Search("Çukurova".to_string())
        );
    }

    #[test]
    fn test_favorites_starting_with_ara_are_not_a_search() {
        assert_eq!(
            Command::parse(KioskState::AskFavorites, "Ara Güler fotoğrafları"),
            Command::Favorites("Ara Güler fotoğrafları".to_string())
        );
        assert_eq!(
            Command::parse(KioskState::AskFavorites, "ara"),
            Command::Favorites("ara".to_string())
        );
    }
}
