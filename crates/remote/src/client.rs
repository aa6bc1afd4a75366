//! Remote library API client

use crate::config::RemoteConfig;
use crate::error::{RemoteError, RemoteResult};
use async_trait::async_trait;
use reqwest::{Client as ReqwestClient, Response};
use serde::Deserialize;
use smartshelf_core::{Book, BookDraft, BookId, BookSource, LibraryError, Recommendation};

/// Response body of `POST /add`
#[derive(Debug, Deserialize)]
struct AddResponse {
    id: i64,
}

/// Client for the remote book API.
///
/// One instance per session; cheap to clone, shares the underlying
/// connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    inner: ReqwestClient,
    config: RemoteConfig,
}

impl ApiClient {
    /// Creates a client configured from the environment
    pub fn new() -> RemoteResult<Self> {
        Self::with_config(RemoteConfig::from_env())
    }

    /// Creates a client with the given configuration
    pub fn with_config(config: RemoteConfig) -> RemoteResult<Self> {
        let inner = ReqwestClient::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(RemoteError::Http)?;

        Ok(Self { inner, config })
    }

    /// Returns the configured base URL
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// `GET /books` — the full collection, newest first
    pub async fn fetch_books(&self) -> RemoteResult<Vec<Book>> {
        let response = self.send(self.inner.get(self.config.endpoint("/books")), "/books").await?;
        Ok(response.json().await?)
    }

    /// `POST /add` — stores the draft, returns it with the server-assigned id
    pub async fn add_book(&self, draft: BookDraft) -> RemoteResult<Book> {
        let response = self
            .send(
                self.inner.post(self.config.endpoint("/add")).json(&draft),
                "/add",
            )
            .await?;
        let assigned: AddResponse = response.json().await?;
        Ok(draft.into_book(BookId::new(assigned.id)))
    }

    /// `PUT /update/{id}` — overwrites the stored book
    pub async fn update_book(&self, book: &Book) -> RemoteResult<()> {
        let path = format!("/update/{}", book.id);
        self.send(
            self.inner.put(self.config.endpoint(&path)).json(book),
            &path,
        )
        .await?;
        Ok(())
    }

    /// `DELETE /delete/{id}`
    pub async fn delete_book(&self, id: BookId) -> RemoteResult<()> {
        let path = format!("/delete/{id}");
        self.send(self.inner.delete(self.config.endpoint(&path)), &path)
            .await?;
        Ok(())
    }

    /// `GET /recommend` — server-computed recommendation
    pub async fn fetch_recommendation(&self) -> RemoteResult<Recommendation> {
        let response = self
            .send(self.inner.get(self.config.endpoint("/recommend")), "/recommend")
            .await?;
        Ok(response.json().await?)
    }

    /// Sends a request and rejects non-success statuses.
    ///
    /// 4xx, 5xx and transport failures all end up as [`RemoteError`]; callers
    /// treat them uniformly as "remote unavailable".
    async fn send(&self, request: reqwest::RequestBuilder, path: &str) -> RemoteResult<Response> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            log::warn!("Remote API answered {} for {}", status, path);
            return Err(RemoteError::Status {
                status,
                path: path.to_string(),
            });
        }
        Ok(response)
    }
}

#[async_trait]
impl BookSource for ApiClient {
    async fn list(&self) -> smartshelf_core::Result<Vec<Book>> {
        self.fetch_books().await.map_err(into_library_error)
    }

    async fn add(&self, draft: BookDraft) -> smartshelf_core::Result<Book> {
        self.add_book(draft).await.map_err(into_library_error)
    }

    async fn update(&self, book: &Book) -> smartshelf_core::Result<()> {
        self.update_book(book).await.map_err(into_library_error)
    }

    async fn delete(&self, id: BookId) -> smartshelf_core::Result<()> {
        self.delete_book(id).await.map_err(into_library_error)
    }

    async fn recommend(&self) -> smartshelf_core::Result<Recommendation> {
        self.fetch_recommendation().await.map_err(into_library_error)
    }
}

fn into_library_error(err: RemoteError) -> LibraryError {
    LibraryError::Remote(err.to_string())
}
