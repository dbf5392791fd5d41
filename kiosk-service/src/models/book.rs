use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: u32,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub color_gradient: String,
    pub available_copies: u32,
}

impl Book {
    /// Lower-cased `title author genre description`, the text recommendations are scored against.
    pub fn scoring_text(&self) -> String {
        format!(
            "{} {} {} {}",
            self.title,
            self.author,
            self.genre,
            self.description.as_deref().unwrap_or_default()
        )
        .to_lowercase()
    }

    /// Case-insensitive substring match on title, author or genre.
    /// `needle` must already be lower-cased.
    pub fn matches_query(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.author.to_lowercase().contains(needle)
            || self.genre.to_lowercase().contains(needle)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: u32,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub color_gradient: String,
}
