use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tokio::time::sleep;
use tracing::{error, info, warn};

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Unexpected status: {0}")]
    Status(u16),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: u32,
    pub title: String,
    pub author: String,
    pub genre: String,
    #[serde(default)]
    pub description: Option<String>,
    pub color_gradient: String,
    pub available_copies: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RecommendationRequest<'a> {
    user_input: &'a str,
    exclude_ids: &'a [u32],
}

#[derive(Debug, Default, Deserialize)]
pub struct RecommendationReply {
    #[serde(default)]
    pub books: Vec<Book>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SearchReply {
    #[serde(default)]
    books: Vec<Book>,
}

pub struct KioskClient {
    client: Client,
    base_url: String,
}

impl KioskClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub async fn wait_for_service(&self) {
        info!("Waiting for kiosk service at {}...", self.base_url);

        let url = format!("{}/status", self.base_url);
        loop {
            match self.client.get(&url).send().await {
                Ok(response) if response.status().is_success() => {
                    info!("Kiosk service is ready");
                    return;
                }
                Ok(response) => {
                    warn!("Kiosk service responded with status: {}", response.status());
                }
                Err(e) => {
                    warn!("Kiosk service not ready: {}", e);
                }
            }
            sleep(Duration::from_secs(2)).await;
        }
    }

    /// A reply carrying an `error` is returned as-is, whatever the status, so
    /// the kiosk can show the server's message.
    pub async fn recommendations(
        &self,
        user_input: &str,
        exclude_ids: &[u32],
    ) -> Result<RecommendationReply, ClientError> {
        let url = format!("{}/recommendations", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(&RecommendationRequest {
                user_input,
                exclude_ids,
            })
            .send()
            .await?;

        let status = response.status();
        let reply = match response.json::<RecommendationReply>().await {
            Ok(reply) => reply,
            Err(e) if status.is_success() => return Err(e.into()),
            Err(_) => RecommendationReply::default(),
        };

        if !status.is_success() && reply.error.is_none() {
            error!("Recommendation request failed: {}", status);
            return Err(ClientError::Status(status.as_u16()));
        }

        Ok(reply)
    }

    pub async fn search(&self, query: &str, limit: usize) -> Result<Vec<Book>, ClientError> {
        let url = format!("{}/search", self.base_url);
        let limit = limit.to_string();
        let response = self
            .client
            .get(&url)
            .query(&[("q", query), ("limit", limit.as_str())])
            .send()
            .await?;

        if !response.status().is_success() {
            error!("Search request failed: {}", response.status());
            return Err(ClientError::Status(response.status().as_u16()));
        }

        let reply: SearchReply = response.json().await?;
        Ok(reply.books)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_uses_camel_case_keys() {
        let body = serde_json::to_value(RecommendationRequest {
            user_input: "Dune",
            exclude_ids: &[1, 2],
        })
        .unwrap();

        assert_eq!(body["userInput"], "Dune");
        assert_eq!(body["excludeIds"], serde_json::json!([1, 2]));
    }

    #[test]
    fn test_reply_without_error_key() {
        let reply: RecommendationReply = serde_json::from_str(
            r#"{"books":[{"id":8,"title":"Dune","author":"Frank Herbert","genre":"Bilim Kurgu",
                "category":"Edebiyat","color_gradient":"from-orange-600 to-orange-800","available_copies":2}]}"#,
        )
        .unwrap();

        assert!(reply.error.is_none());
        assert_eq!(reply.books[0].title, "Dune");
        assert!(reply.books[0].description.is_none());
    }

    #[test]
    fn test_reply_with_only_error() {
        let reply: RecommendationReply =
            serde_json::from_str(r#"{"error":"Lütfen favori kitaplarınızı yazın"}"#).unwrap();

        assert!(reply.books.is_empty());
        assert_eq!(reply.error.as_deref(), Some("Lütfen favori kitaplarınızı yazın"));
    }

    #[test]
    fn test_base_url_trailing_slash_is_dropped() {
        let client = KioskClient::new("http://localhost:7003/");
        assert_eq!(client.base_url, "http://localhost:7003");
    }
}
