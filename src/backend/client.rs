// SPDX-License-Identifier: MIT

//! REST client for the hosted backend service.
//!
//! Covers the three surfaces the app consumes:
//! - Account: sign up, email sessions, password change/recovery
//! - Databases: document create/list/update/delete with query predicates
//! - Storage: file upload/delete and view URLs
//!
//! Session state rides on cookies (the service's web-SDK auth model), so
//! the client itself stays stateless and cheap to clone.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::{AppError, Result};

/// Literal id that asks the service to generate a unique id server-side.
const UNIQUE_ID: &str = "unique()";

/// Backend REST client.
#[derive(Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    endpoint: String,
    project_id: String,
}

impl BackendClient {
    /// Create a new client for the configured backend project.
    pub fn new(config: &Config) -> Result<Self> {
        let http = reqwest::Client::builder().cookie_store(true).build()?;
        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
            project_id: config.project_id.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.endpoint, path)
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        self.http
            .request(method, self.url(path))
            .header("X-Appwrite-Project", &self.project_id)
    }

    // ─── Account ─────────────────────────────────────────────────────────

    /// Create a new account with a server-generated user id.
    pub async fn create_account(&self, email: &str, password: &str) -> Result<Account> {
        let body = serde_json::json!({
            "userId": UNIQUE_ID,
            "email": email,
            "password": password,
        });
        let response = self
            .request(reqwest::Method::POST, "/account")
            .json(&body)
            .send()
            .await?;
        self.check_response_json(response).await
    }

    /// Create an email/password session for the current client.
    pub async fn create_email_session(&self, email: &str, password: &str) -> Result<Session> {
        let body = serde_json::json!({ "email": email, "password": password });
        let response = self
            .request(reqwest::Method::POST, "/account/sessions/email")
            .json(&body)
            .send()
            .await?;
        self.check_response_json(response).await
    }

    /// Fetch the currently authenticated account.
    pub async fn get_account(&self) -> Result<Account> {
        let response = self.request(reqwest::Method::GET, "/account").send().await?;
        self.check_response_json(response).await
    }

    /// Delete the current session (sign out).
    pub async fn delete_session(&self) -> Result<()> {
        let response = self
            .request(reqwest::Method::DELETE, "/account/sessions/current")
            .send()
            .await?;
        self.check_response(response).await
    }

    /// Change the account password, verifying the old one.
    pub async fn update_password(&self, new_password: &str, old_password: &str) -> Result<()> {
        let body = serde_json::json!({
            "password": new_password,
            "oldPassword": old_password,
        });
        let response = self
            .request(reqwest::Method::PATCH, "/account/password")
            .json(&body)
            .send()
            .await?;
        self.check_response(response).await
    }

    /// Start password recovery; the service emails a link to `redirect_url`.
    pub async fn create_recovery(&self, email: &str, redirect_url: &str) -> Result<()> {
        let body = serde_json::json!({ "email": email, "url": redirect_url });
        let response = self
            .request(reqwest::Method::POST, "/account/recovery")
            .json(&body)
            .send()
            .await?;
        self.check_response(response).await
    }

    /// Complete password recovery with the emailed secret.
    pub async fn update_recovery(
        &self,
        user_id: &str,
        secret: &str,
        new_password: &str,
    ) -> Result<()> {
        let body = serde_json::json!({
            "userId": user_id,
            "secret": secret,
            "password": new_password,
        });
        let response = self
            .request(reqwest::Method::PUT, "/account/recovery")
            .json(&body)
            .send()
            .await?;
        self.check_response(response).await
    }

    // ─── Databases ───────────────────────────────────────────────────────

    /// Create a document with a server-generated id.
    pub async fn create_document<T, R>(&self, database: &str, collection: &str, data: &T) -> Result<R>
    where
        T: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let path = format!(
            "/databases/{}/collections/{}/documents",
            database, collection
        );
        let body = serde_json::json!({
            "documentId": UNIQUE_ID,
            "data": data,
        });
        let response = self
            .request(reqwest::Method::POST, &path)
            .json(&body)
            .send()
            .await?;
        self.check_response_json(response).await
    }

    /// List documents matching the given query predicates.
    pub async fn list_documents<R>(
        &self,
        database: &str,
        collection: &str,
        queries: &[Query],
    ) -> Result<DocumentList<R>>
    where
        R: DeserializeOwned,
    {
        let path = format!(
            "/databases/{}/collections/{}/documents",
            database, collection
        );
        let params: Vec<(&str, String)> =
            queries.iter().map(|q| ("queries[]", q.to_json())).collect();
        let response = self
            .request(reqwest::Method::GET, &path)
            .query(&params)
            .send()
            .await?;
        self.check_response_json(response).await
    }

    /// Apply a partial update to an existing document.
    pub async fn update_document<T, R>(
        &self,
        database: &str,
        collection: &str,
        document_id: &str,
        data: &T,
    ) -> Result<R>
    where
        T: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let path = format!(
            "/databases/{}/collections/{}/documents/{}",
            database, collection, document_id
        );
        let body = serde_json::json!({ "data": data });
        let response = self
            .request(reqwest::Method::PATCH, &path)
            .json(&body)
            .send()
            .await?;
        self.check_response_json(response).await
    }

    /// Delete a document by id.
    pub async fn delete_document(
        &self,
        database: &str,
        collection: &str,
        document_id: &str,
    ) -> Result<()> {
        let path = format!(
            "/databases/{}/collections/{}/documents/{}",
            database, collection, document_id
        );
        let response = self
            .request(reqwest::Method::DELETE, &path)
            .send()
            .await?;
        self.check_response(response).await
    }

    // ─── Storage ─────────────────────────────────────────────────────────

    /// Upload a file blob with a server-generated id.
    pub async fn create_file(
        &self,
        bucket: &str,
        file_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<StorageFile> {
        let path = format!("/storage/buckets/{}/files", bucket);
        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(content_type)
            .map_err(|e| AppError::BadRequest(format!("Invalid content type: {}", e)))?;
        let form = reqwest::multipart::Form::new()
            .text("fileId", UNIQUE_ID)
            .part("file", part);
        let response = self
            .request(reqwest::Method::POST, &path)
            .multipart(form)
            .send()
            .await?;
        self.check_response_json(response).await
    }

    /// Delete a file blob by id.
    pub async fn delete_file(&self, bucket: &str, file_id: &str) -> Result<()> {
        let path = format!("/storage/buckets/{}/files/{}", bucket, file_id);
        let response = self
            .request(reqwest::Method::DELETE, &path)
            .send()
            .await?;
        self.check_response(response).await
    }

    /// Public view URL for a stored file. Pure URL construction; the
    /// project id rides as a query parameter so the URL works in an
    /// unauthenticated image view.
    pub fn file_view_url(&self, bucket: &str, file_id: &str) -> String {
        format!(
            "{}/storage/buckets/{}/files/{}/view?project={}",
            self.endpoint,
            urlencoding::encode(bucket),
            urlencoding::encode(file_id),
            urlencoding::encode(&self.project_id),
        )
    }

    // ─── Response handling ───────────────────────────────────────────────

    /// Check response status, mapping the service's error envelope.
    async fn check_response(&self, response: reqwest::Response) -> Result<()> {
        if response.status().is_success() {
            return Ok(());
        }
        Err(self.error_from_response(response).await)
    }

    /// Check response status and parse the JSON body.
    async fn check_response_json<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        if !response.status().is_success() {
            return Err(self.error_from_response(response).await);
        }

        response
            .json()
            .await
            .map_err(|e| AppError::Http(format!("JSON parse error: {}", e)))
    }

    /// Build an [`AppError::Api`] from an error response, falling back to
    /// the raw body when the envelope doesn't parse.
    async fn error_from_response(&self, response: reqwest::Response) -> AppError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();

        if status == 429 {
            tracing::warn!("Backend rate limit hit (429)");
        }

        match serde_json::from_str::<ApiErrorBody>(&body) {
            Ok(envelope) => AppError::Api {
                code: envelope.code,
                kind: envelope.kind,
                message: envelope.message,
            },
            Err(_) => AppError::Api {
                code: status,
                kind: String::new(),
                message: body,
            },
        }
    }
}

/// Error envelope returned by the backend service.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
    code: u16,
    #[serde(rename = "type", default)]
    kind: String,
}

/// Query predicate for document listing.
#[derive(Debug, Clone)]
pub enum Query {
    /// Equality match on an attribute.
    Equal { attribute: String, value: String },
    /// Descending sort on an attribute.
    OrderDesc { attribute: String },
    /// Maximum number of documents to return.
    Limit(u32),
}

impl Query {
    pub fn equal(attribute: &str, value: impl Into<String>) -> Self {
        Query::Equal {
            attribute: attribute.to_string(),
            value: value.into(),
        }
    }

    pub fn order_desc(attribute: &str) -> Self {
        Query::OrderDesc {
            attribute: attribute.to_string(),
        }
    }

    pub fn limit(limit: u32) -> Self {
        Query::Limit(limit)
    }

    /// Wire encoding: one JSON object per predicate.
    pub fn to_json(&self) -> String {
        let value = match self {
            Query::Equal { attribute, value } => serde_json::json!({
                "method": "equal",
                "attribute": attribute,
                "values": [value],
            }),
            Query::OrderDesc { attribute } => serde_json::json!({
                "method": "orderDesc",
                "attribute": attribute,
                "values": [],
            }),
            Query::Limit(limit) => serde_json::json!({
                "method": "limit",
                "values": [limit],
            }),
        };
        value.to_string()
    }
}

/// Page of documents from a list call.
#[derive(Debug, Clone, Deserialize)]
pub struct DocumentList<T> {
    pub total: u64,
    pub documents: Vec<T>,
}

/// Authenticated user account.
#[derive(Debug, Clone, Deserialize)]
pub struct Account {
    #[serde(rename = "$id")]
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "emailVerification", default)]
    pub email_verification: bool,
}

/// An authentication session.
#[derive(Debug, Clone, Deserialize)]
pub struct Session {
    #[serde(rename = "$id")]
    pub id: String,
    #[serde(rename = "userId")]
    pub user_id: String,
}

/// A stored file blob handle.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageFile {
    #[serde(rename = "$id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_equal_encoding() {
        let q = Query::equal("userId", "abc123");
        assert_eq!(
            q.to_json(),
            r#"{"attribute":"userId","method":"equal","values":["abc123"]}"#
        );
    }

    #[test]
    fn test_query_order_desc_encoding() {
        let q = Query::order_desc("completedAt");
        assert_eq!(
            q.to_json(),
            r#"{"attribute":"completedAt","method":"orderDesc","values":[]}"#
        );
    }

    #[test]
    fn test_query_limit_encoding() {
        assert_eq!(Query::limit(25).to_json(), r#"{"method":"limit","values":[25]}"#);
    }

    #[test]
    fn test_file_view_url_format() {
        let client = BackendClient::new(&Config::default()).unwrap();
        let url = client.file_view_url("progress-photos-bucket", "file42");
        assert_eq!(
            url,
            "https://cloud.appwrite.io/v1/storage/buckets/progress-photos-bucket/files/file42/view?project=test-project"
        );
    }
}
