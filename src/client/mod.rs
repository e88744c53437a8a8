//! Typed HTTP client for the student records API.
//!
//! Thin wrapper over the REST surface. The only client-side state is a
//! short-lived cache of the full listing, dropped whenever this client
//! performs a mutation, so a fresh list follows every write.

mod errors;

pub use errors::{ClientError, ClientResult};

use std::sync::Mutex;
use std::time::{Duration, Instant};

use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::api::{ErrorBody, MessageResponse};
use crate::model::{Student, StudentDraft, StudentPatch};

/// How long a fetched listing stays fresh.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(5);

const DEFAULT_TIMEOUT_SECS: u64 = 30;

struct CachedList {
    fetched_at: Instant,
    rows: Vec<Student>,
}

/// Student records API client.
pub struct StudentClient {
    client: Client,
    base_url: String,
    cache: Mutex<Option<CachedList>>,
    cache_ttl: Duration,
}

impl StudentClient {
    /// Create a new client.
    pub fn new(base_url: impl Into<String>) -> ClientResult<Self> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT_SECS)
    }

    /// Create with a custom request timeout.
    pub fn with_timeout(base_url: impl Into<String>, timeout_secs: u64) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| ClientError::connection(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            cache: Mutex::new(None),
            cache_ttl: DEFAULT_CACHE_TTL,
        })
    }

    /// Override the listing cache TTL.
    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }

    fn students_url(&self) -> String {
        format!("{}/api/students", self.base_url)
    }

    fn student_url(&self, id: i64) -> String {
        format!("{}/api/students/{}", self.base_url, id)
    }

    /// Get all students, served from the cache while it is fresh.
    pub async fn list(&self) -> ClientResult<Vec<Student>> {
        if let Some(rows) = self.cached_list() {
            return Ok(rows);
        }

        let response = self.client.get(self.students_url()).send().await?;
        let rows: Vec<Student> = decode(response).await?;

        if let Ok(mut guard) = self.cache.lock() {
            *guard = Some(CachedList {
                fetched_at: Instant::now(),
                rows: rows.clone(),
            });
        }

        Ok(rows)
    }

    /// Get a single student by id.
    pub async fn get(&self, id: i64) -> ClientResult<Student> {
        let response = self.client.get(self.student_url(id)).send().await?;
        decode(response).await
    }

    /// Create a student.
    pub async fn create(&self, draft: &StudentDraft) -> ClientResult<Student> {
        let response = self
            .client
            .post(self.students_url())
            .json(draft)
            .send()
            .await?;
        self.invalidate();
        decode(response).await
    }

    /// Update a student. Only the fields set on the patch are sent.
    pub async fn update(&self, id: i64, patch: &StudentPatch) -> ClientResult<Student> {
        let response = self
            .client
            .put(self.student_url(id))
            .json(patch)
            .send()
            .await?;
        self.invalidate();
        decode(response).await
    }

    /// Delete a student, returning the server's confirmation message.
    pub async fn delete(&self, id: i64) -> ClientResult<String> {
        let response = self.client.delete(self.student_url(id)).send().await?;
        self.invalidate();
        let confirmation: MessageResponse = decode(response).await?;
        Ok(confirmation.message)
    }

    fn cached_list(&self) -> Option<Vec<Student>> {
        let guard = self.cache.lock().ok()?;
        let cached = guard.as_ref()?;
        (cached.fetched_at.elapsed() < self.cache_ttl).then(|| cached.rows.clone())
    }

    fn invalidate(&self) {
        if let Ok(mut guard) = self.cache.lock() {
            *guard = None;
        }
    }
}

/// Decode a success body, or turn a non-success response into an API
/// error carrying the server's message.
async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json().await?);
    }

    let message = match response.json::<ErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string(),
    };
    Err(ClientError::api(status.as_u16(), message))
}
