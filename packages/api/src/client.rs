//! # HTTP client for the notes service
//!
//! [`NotesApi`] is the seam between the application and the REST service. The
//! identity resolver and session logic are generic over it, so they run
//! against [`ApiClient`] in the browser and against a fake in tests.
//!
//! ## Endpoints
//!
//! | Method | Path | Body | Returns |
//! |--------|------|------|---------|
//! | `GET` | `/users/random` | — | [`User`] |
//! | `GET` | `/users/detail/:userId` | — | [`User`] |
//! | `GET` | `/users/:userId/notes` | — | `Vec<`[`Note`]`>` |
//! | `POST` | `/users/:userId/notes` | [`NoteDraft`] | [`Note`] |
//! | `PUT` | `/users/:userId/notes/:noteId` | [`NoteChanges`] | [`Note`] |
//! | `DELETE` | `/users/:userId/notes/:noteId` | — | nothing |
//!
//! There is no caching, no timeout and no retry at this layer.

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use store::{Note, NoteChanges, NoteDraft, NotesConfig, User};

use crate::error::ApiError;

/// Async interface to the notes service.
pub trait NotesApi {
    fn random_user(&self) -> impl std::future::Future<Output = Result<User, ApiError>>;
    fn user_by_id(&self, id: &str) -> impl std::future::Future<Output = Result<User, ApiError>>;
    fn list_notes(
        &self,
        user_id: &str,
    ) -> impl std::future::Future<Output = Result<Vec<Note>, ApiError>>;
    fn create_note(
        &self,
        user_id: &str,
        draft: &NoteDraft,
    ) -> impl std::future::Future<Output = Result<Note, ApiError>>;
    fn update_note(
        &self,
        user_id: &str,
        note_id: &str,
        changes: &NoteChanges,
    ) -> impl std::future::Future<Output = Result<Note, ApiError>>;
    fn delete_note(
        &self,
        user_id: &str,
        note_id: &str,
    ) -> impl std::future::Future<Output = Result<(), ApiError>>;
}

/// `reqwest`-backed client bound to one base URL.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &NotesConfig) -> Self {
        Self::new(config.api.base_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let text = self.send_raw(request).await?;
        Ok(serde_json::from_str(&text)?)
    }

    async fn send_raw(&self, request: RequestBuilder) -> Result<String, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        tracing::debug!("{} {}", status.as_u16(), response.url());
        let body = response.text().await?;
        if status.is_success() {
            Ok(body)
        } else {
            Err(ApiError::from_body(status.as_u16(), &body))
        }
    }
}

impl NotesApi for ApiClient {
    async fn random_user(&self) -> Result<User, ApiError> {
        self.send(self.http.get(self.url("/users/random"))).await
    }

    async fn user_by_id(&self, id: &str) -> Result<User, ApiError> {
        self.send(self.http.get(self.url(&format!("/users/detail/{id}"))))
            .await
    }

    async fn list_notes(&self, user_id: &str) -> Result<Vec<Note>, ApiError> {
        self.send(self.http.get(self.url(&format!("/users/{user_id}/notes"))))
            .await
    }

    async fn create_note(&self, user_id: &str, draft: &NoteDraft) -> Result<Note, ApiError> {
        let request = self
            .http
            .post(self.url(&format!("/users/{user_id}/notes")))
            .json(draft);
        self.send(request).await
    }

    async fn update_note(
        &self,
        user_id: &str,
        note_id: &str,
        changes: &NoteChanges,
    ) -> Result<Note, ApiError> {
        let request = self
            .http
            .put(self.url(&format!("/users/{user_id}/notes/{note_id}")))
            .json(changes);
        self.send(request).await
    }

    async fn delete_note(&self, user_id: &str, note_id: &str) -> Result<(), ApiError> {
        let request = self
            .http
            .delete(self.url(&format!("/users/{user_id}/notes/{note_id}")));
        self.send_raw(request).await.map(|_| ())
    }
}
