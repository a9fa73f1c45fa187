//! Backend API client.
//!
//! Thin HTTP wrappers over the knowledge-base backend. All business logic
//! (persistence, auth, server-side pagination, validation) lives behind
//! these endpoints; this module only shapes requests and decodes responses.
//!
//! Envelope convention: paged resources (`GET /qna`) always come wrapped as
//! `{data, pagination}`; plain collections (`GET /notes`, `GET /accounts`)
//! are raw JSON arrays. The one exception is `/accounts`, which has shipped
//! both shapes and is decoded tolerantly.
//!
//! The client carries a cookie store so the session cookie set by
//! `POST /auth/login` rides along on authenticated requests, and an explicit
//! request timeout so a hung request always resolves to an error instead of
//! leaving the UI loading forever.

pub mod worker;

pub use worker::{ApiRequest, ApiResponse, ApiWorker};

use crate::model::note::Note;
use crate::model::pagination::PaginationMeta;
use crate::model::qna::{QnaPayload, QnaRecord};
use crate::model::user::{RegisterPayload, User};
use crate::model::ApiError;
use serde::Deserialize;
use std::time::Duration;

/// One fetched page of Q&A records with its pagination metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QnaPage {
    /// The records on this page.
    pub items: Vec<QnaRecord>,
    /// Metadata describing where this page sits in the full dataset.
    pub pagination: PaginationMeta,
}

/// Wire shape of the paged `/qna` response.
#[derive(Debug, Deserialize)]
struct PagedEnvelope {
    data: Vec<QnaRecord>,
    pagination: PaginationMeta,
}

/// Wire shape of the login request body.
#[derive(Debug, serde::Serialize)]
struct LoginBody<'a> {
    email: &'a str,
    password: &'a str,
}

/// Blocking HTTP client for the knowledge-base backend.
///
/// Runs on the API worker thread (see [`worker`]), never on the UI thread.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::blocking::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the given base URL with the given request timeout.
    ///
    /// A trailing slash on `base_url` is tolerated and stripped.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Network` if the underlying HTTP client cannot be
    /// constructed.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .cookie_store(true)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Check a response status, mapping non-success to `ApiError::Http`.
    fn check(
        resp: reqwest::blocking::Response,
        context: &str,
    ) -> Result<reqwest::blocking::Response, ApiError> {
        let status = resp.status();
        if status.is_success() {
            Ok(resp)
        } else {
            Err(ApiError::http(status.as_u16(), context))
        }
    }

    /// Decode a response body, mapping shape mismatches to `ApiError::Decode`.
    fn decode<T: serde::de::DeserializeOwned>(
        resp: reqwest::blocking::Response,
    ) -> Result<T, ApiError> {
        let body = resp.text()?;
        Ok(serde_json::from_str(&body)?)
    }

    // ===== Q&A =====

    /// Fetch one page of Q&A records.
    pub fn fetch_qna(&self, page: u32, limit: u32) -> Result<QnaPage, ApiError> {
        let resp = self
            .http
            .get(self.url("/qna"))
            .query(&[("page", page), ("limit", limit)])
            .send()?;
        let resp = Self::check(resp, "GET /qna")?;
        let envelope: PagedEnvelope = Self::decode(resp)?;
        Ok(QnaPage {
            items: envelope.data,
            pagination: envelope.pagination,
        })
    }

    /// Create a Q&A record.
    pub fn create_qna(&self, payload: &QnaPayload) -> Result<QnaRecord, ApiError> {
        let resp = self.http.post(self.url("/qna")).json(payload).send()?;
        Self::decode(Self::check(resp, "POST /qna")?)
    }

    /// Update an existing Q&A record.
    pub fn update_qna(&self, id: u64, payload: &QnaPayload) -> Result<QnaRecord, ApiError> {
        let resp = self
            .http
            .put(self.url(&format!("/qna/{id}")))
            .json(payload)
            .send()?;
        Self::decode(Self::check(resp, "PUT /qna/{id}")?)
    }

    /// Delete a Q&A record.
    pub fn delete_qna(&self, id: u64) -> Result<(), ApiError> {
        let resp = self.http.delete(self.url(&format!("/qna/{id}"))).send()?;
        Self::check(resp, "DELETE /qna/{id}")?;
        Ok(())
    }

    // ===== Auth =====

    /// Fetch the current session user.
    pub fn me(&self) -> Result<User, ApiError> {
        let resp = self.http.get(self.url("/auth/me")).send()?;
        Self::decode(Self::check(resp, "GET /auth/me")?)
    }

    /// Authenticate. On success the backend sets a session cookie which the
    /// client's cookie store carries on subsequent requests.
    pub fn login(&self, email: &str, password: &str) -> Result<(), ApiError> {
        let resp = self
            .http
            .post(self.url("/auth/login"))
            .json(&LoginBody { email, password })
            .send()?;
        Self::check(resp, "POST /auth/login")?;
        Ok(())
    }

    /// End the session.
    pub fn logout(&self) -> Result<(), ApiError> {
        let resp = self.http.post(self.url("/auth/logout")).send()?;
        Self::check(resp, "POST /auth/logout")?;
        Ok(())
    }

    /// Create an account (admin-only endpoint).
    pub fn register(&self, payload: &RegisterPayload) -> Result<User, ApiError> {
        let resp = self
            .http
            .post(self.url("/auth/register"))
            .json(payload)
            .send()?;
        Self::decode(Self::check(resp, "POST /auth/register")?)
    }

    // ===== Notes =====

    /// List all notes.
    pub fn list_notes(&self) -> Result<Vec<Note>, ApiError> {
        let resp = self.http.get(self.url("/notes")).send()?;
        Self::decode(Self::check(resp, "GET /notes")?)
    }

    /// Persist a locally drafted note. The returned record supersedes the
    /// draft.
    pub fn create_note(&self, draft: &Note) -> Result<Note, ApiError> {
        let resp = self.http.post(self.url("/notes")).json(draft).send()?;
        Self::decode(Self::check(resp, "POST /notes")?)
    }

    /// Delete a note.
    pub fn delete_note(&self, id: &str) -> Result<(), ApiError> {
        let resp = self.http.delete(self.url(&format!("/notes/{id}"))).send()?;
        Self::check(resp, "DELETE /notes/{id}")?;
        Ok(())
    }

    // ===== Accounts =====

    /// List all user accounts.
    ///
    /// The backend has shipped both a bare array and a `{data: [...]}`
    /// wrapper for this endpoint; accept either.
    pub fn list_accounts(&self) -> Result<Vec<User>, ApiError> {
        let resp = self.http.get(self.url("/accounts")).send()?;
        let resp = Self::check(resp, "GET /accounts")?;
        let body = resp.text()?;
        match serde_json::from_str::<Vec<User>>(&body) {
            Ok(users) => Ok(users),
            Err(_) => {
                #[derive(Deserialize)]
                struct Wrapped {
                    data: Vec<User>,
                }
                let wrapped: Wrapped = serde_json::from_str(&body)?;
                Ok(wrapped.data)
            }
        }
    }

    /// Delete a user account.
    pub fn delete_account(&self, id: u64) -> Result<(), ApiError> {
        let resp = self
            .http
            .delete(self.url(&format!("/accounts/{id}")))
            .send()?;
        Self::check(resp, "DELETE /accounts/{id}")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_stripped_from_base_url() {
        let client = ApiClient::new("http://localhost:4000/api/", Duration::from_secs(1)).unwrap();
        assert_eq!(client.url("/qna"), "http://localhost:4000/api/qna");
    }

    #[test]
    fn url_joins_paths() {
        let client = ApiClient::new("http://localhost:4000/api", Duration::from_secs(1)).unwrap();
        assert_eq!(client.url("/qna/7"), "http://localhost:4000/api/qna/7");
    }
}
