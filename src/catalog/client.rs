use crate::catalog::models::{AuthorRecord, SubjectPage};
use crate::config::Config;
use async_trait::async_trait;
use reqwest::{Client, Error as ReqwestError};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, error, warn};

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] ReqwestError),
    #[error("Request to {url} failed with status {status}")]
    Status { status: u16, url: String },
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Parameters for one subject listing request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectQuery {
    pub limit: u32,
    pub offset: u64,
    /// Author-name substring filter, sent verbatim
    pub author: String,
}

/// Remote catalog operations (allows mocking for tests)
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn subject_page(&self, query: &SubjectQuery) -> Result<SubjectPage, CatalogError>;
    async fn author(&self, author_key: &str) -> Result<AuthorRecord, CatalogError>;
}

/// Open Library client for the subject and author endpoints
#[derive(Clone)]
pub struct OpenLibraryClient {
    client: Client,
    base_url: String,
    subject: String,
}

impl OpenLibraryClient {
    pub fn new(config: &Config) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            subject: config.subject.clone(),
        })
    }

    pub fn subject_url(&self) -> String {
        format!("{}/subjects/{}.json", self.base_url, self.subject)
    }

    /// Author keys arrive as `/authors/OL123A`; bare ids are accepted too
    pub fn author_url(&self, author_key: &str) -> String {
        if author_key.starts_with('/') {
            format!("{}{}.json", self.base_url, author_key)
        } else {
            format!("{}/authors/{}.json", self.base_url, author_key)
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        params: &[(&str, String)],
    ) -> Result<T, CatalogError> {
        debug!("GET {} {:?}", url, params);

        let response = self
            .client
            .get(url)
            .query(params)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            let body = response.text().await?;
            serde_json::from_str(&body).map_err(|e| {
                error!("JSON parsing error for {}: {}", url, e);
                debug!("Raw response: {}", body);
                CatalogError::Serialization(e)
            })
        } else if status == 404 {
            warn!("Not found: {}", url);
            Err(CatalogError::NotFound(url.to_string()))
        } else {
            warn!("Catalog API error for {}: Status {}", url, status);
            Err(CatalogError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            })
        }
    }
}

#[async_trait]
impl CatalogSource for OpenLibraryClient {
    async fn subject_page(&self, query: &SubjectQuery) -> Result<SubjectPage, CatalogError> {
        let params = [
            ("limit", query.limit.to_string()),
            ("offset", query.offset.to_string()),
            ("author", query.author.clone()),
        ];
        let page: SubjectPage = self.get_json(&self.subject_url(), &params).await?;
        debug!(
            "Subject page returned {} work(s) of {}",
            page.works.len(),
            page.work_count
        );
        Ok(page)
    }

    async fn author(&self, author_key: &str) -> Result<AuthorRecord, CatalogError> {
        self.get_json(&self.author_url(author_key), &[]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> OpenLibraryClient {
        let config = Config {
            base_url: "https://openlibrary.org/".to_string(),
            ..Config::default()
        };
        OpenLibraryClient::new(&config).unwrap()
    }

    #[test]
    fn test_subject_url() {
        assert_eq!(
            client().subject_url(),
            "https://openlibrary.org/subjects/science_fiction.json"
        );
    }

    #[test]
    fn test_author_url_accepts_keys_and_ids() {
        let client = client();
        assert_eq!(
            client.author_url("/authors/OL25342A"),
            "https://openlibrary.org/authors/OL25342A.json"
        );
        assert_eq!(
            client.author_url("OL25342A"),
            "https://openlibrary.org/authors/OL25342A.json"
        );
    }

    #[test]
    fn test_error_messages() {
        let err = CatalogError::Status {
            status: 503,
            url: "https://openlibrary.org/subjects/science_fiction.json".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Request to https://openlibrary.org/subjects/science_fiction.json failed with status 503"
        );
        assert_eq!(
            CatalogError::InvalidInput("page 0".to_string()).to_string(),
            "Invalid input: page 0"
        );
    }
}
