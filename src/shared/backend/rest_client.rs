// src/shared/backend/rest_client.rs
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::config::BackendConfig;
use super::error::StoreError;

const JSON: &str = "application/json";

/// Postgres unique_violation, surfaced by the REST layer in the error body.
const UNIQUE_VIOLATION: &str = "23505";

//
// ──────────────────────────────────────────────────────────
// Query builder (PostgREST filter syntax)
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    select: Option<String>,
    params: Vec<(String, String)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(mut self, columns: &str) -> Self {
        self.select = Some(columns.to_string());
        self
    }

    pub fn eq(mut self, column: &str, value: impl std::fmt::Display) -> Self {
        self.params.push((column.to_string(), format!("eq.{}", value)));
        self
    }

    pub fn order_asc_nulls_last(mut self, column: &str) -> Self {
        self.params
            .push(("order".to_string(), format!("{}.asc.nullslast", column)));
        self
    }

    pub fn limit(mut self, n: usize) -> Self {
        self.params.push(("limit".to_string(), n.to_string()));
        self
    }

    fn apply(&self, url: &mut Url, with_select: bool) {
        let mut pairs = url.query_pairs_mut();
        if with_select {
            pairs.append_pair("select", self.select.as_deref().unwrap_or("*"));
        }
        for (k, v) in &self.params {
            pairs.append_pair(k, v);
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Client
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Serialize)]
struct RemoveObjectsBody<'a> {
    prefixes: &'a [String],
}

#[derive(Debug, Deserialize)]
struct RestErrorBody {
    code: Option<String>,
    message: Option<String>,
}

/// Thin typed client over the hosted REST data API and object storage API.
#[derive(Clone)]
pub struct RestClient {
    client: Client,
    base_url: String,
    anon_key: String,
    service_key: Option<String>,
}

impl std::fmt::Debug for RestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[derive(Clone, Copy)]
enum Access {
    Read,
    Write,
}

impl RestClient {
    pub fn new(config: &BackendConfig) -> Result<Self, StoreError> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| StoreError::Transport(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.url.trim_end_matches('/').to_string(),
            anon_key: config.anon_key.clone(),
            service_key: config.service_key.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn parse_url(&self, raw: String) -> Result<Url, StoreError> {
        Url::parse(&raw).map_err(|e| StoreError::Transport(format!("invalid url {}: {}", raw, e)))
    }

    fn table_url(&self, table: &str) -> Result<Url, StoreError> {
        self.parse_url(format!("{}/rest/v1/{}", self.base_url, table))
    }

    fn object_url(&self, bucket: &str, name: &str) -> Result<Url, StoreError> {
        self.parse_url(format!(
            "{}/storage/v1/object/{}/{}",
            self.base_url, bucket, name
        ))
    }

    fn authorize(&self, rb: RequestBuilder, access: Access) -> RequestBuilder {
        let key = match access {
            Access::Write => self.service_key.as_deref().unwrap_or(&self.anon_key),
            Access::Read => &self.anon_key,
        };
        rb.header("apikey", key)
            .header(AUTHORIZATION, format!("Bearer {}", key))
    }

    fn json_body<B: Serialize + ?Sized>(body: &B) -> Result<Vec<u8>, StoreError> {
        serde_json::to_vec(body).map_err(|e| StoreError::Decode(e.to_string()))
    }

    async fn send(&self, rb: RequestBuilder, what: &str) -> Result<Response, StoreError> {
        let response = rb.send().await.map_err(|e| {
            let err = if e.is_timeout() {
                StoreError::Transport(format!("timeout during {}: {}", what, e))
            } else if e.is_connect() {
                StoreError::Transport(format!("connection failed during {}: {}", what, e))
            } else {
                StoreError::Transport(format!("{} failed: {}", what, e))
            };
            warn!("{}", err);
            err
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.bytes().await.unwrap_or_default();
        let err = map_error_status(status, &body);
        warn!(status = status.as_u16(), "{} rejected: {}", what, err);
        Err(err)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, StoreError> {
        let bytes = response
            .bytes()
            .await
            .map_err(|e| StoreError::Transport(format!("failed to read body: {}", e)))?;
        serde_json::from_slice(&bytes).map_err(|e| StoreError::Decode(e.to_string()))
    }

    //
    // ──────────────────────────────────────────────────────────
    // Table operations
    // ──────────────────────────────────────────────────────────
    //

    pub async fn select<T: DeserializeOwned>(
        &self,
        table: &str,
        query: &Query,
    ) -> Result<Vec<T>, StoreError> {
        let mut url = self.table_url(table)?;
        query.apply(&mut url, true);
        debug!(%url, "select");

        let rb = self.authorize(self.client.get(url), Access::Read);
        let response = self.send(rb, &format!("select {}", table)).await?;
        Self::decode(response).await
    }

    /// Insert and return the stored rows.
    pub async fn insert<B, T>(&self, table: &str, body: &B) -> Result<Vec<T>, StoreError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.table_url(table)?;
        let rb = self
            .authorize(self.client.post(url), Access::Write)
            .header(CONTENT_TYPE, JSON)
            .header("Prefer", "return=representation")
            .body(Self::json_body(body)?);

        let response = self.send(rb, &format!("insert {}", table)).await?;
        Self::decode(response).await
    }

    /// Insert without reading anything back (write-only tables).
    pub async fn insert_minimal<B>(&self, table: &str, body: &B) -> Result<(), StoreError>
    where
        B: Serialize + ?Sized,
    {
        let url = self.table_url(table)?;
        let rb = self
            .authorize(self.client.post(url), Access::Write)
            .header(CONTENT_TYPE, JSON)
            .header("Prefer", "return=minimal")
            .body(Self::json_body(body)?);

        self.send(rb, &format!("insert {}", table)).await?;
        Ok(())
    }

    pub async fn update<B, T>(
        &self,
        table: &str,
        query: &Query,
        body: &B,
    ) -> Result<Vec<T>, StoreError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let mut url = self.table_url(table)?;
        query.apply(&mut url, false);

        let rb = self
            .authorize(self.client.patch(url), Access::Write)
            .header(CONTENT_TYPE, JSON)
            .header("Prefer", "return=representation")
            .body(Self::json_body(body)?);

        let response = self.send(rb, &format!("update {}", table)).await?;
        Self::decode(response).await
    }

    pub async fn delete(&self, table: &str, query: &Query) -> Result<(), StoreError> {
        let mut url = self.table_url(table)?;
        query.apply(&mut url, false);

        let rb = self.authorize(self.client.delete(url), Access::Write);
        self.send(rb, &format!("delete {}", table)).await?;
        Ok(())
    }

    /// Insert, or merge into the row with the same primary key.
    pub async fn upsert<B, T>(&self, table: &str, body: &B) -> Result<Vec<T>, StoreError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.table_url(table)?;
        let rb = self
            .authorize(self.client.post(url), Access::Write)
            .header(CONTENT_TYPE, JSON)
            .header("Prefer", "resolution=merge-duplicates,return=representation")
            .body(Self::json_body(body)?);

        let response = self.send(rb, &format!("upsert {}", table)).await?;
        Self::decode(response).await
    }

    //
    // ──────────────────────────────────────────────────────────
    // Storage operations
    // ──────────────────────────────────────────────────────────
    //

    pub async fn upload_object(
        &self,
        bucket: &str,
        name: &str,
        content_type: &str,
        bytes: Vec<u8>,
        upsert: bool,
    ) -> Result<(), StoreError> {
        let url = self.object_url(bucket, name)?;
        let rb = self
            .authorize(self.client.post(url), Access::Write)
            .header(CONTENT_TYPE, content_type)
            .header("cache-control", "3600")
            .header("x-upsert", if upsert { "true" } else { "false" })
            .body(bytes);

        self.send(rb, &format!("upload {}/{}", bucket, name))
            .await?;
        Ok(())
    }

    pub async fn remove_objects(&self, bucket: &str, names: &[String]) -> Result<(), StoreError> {
        let url = self.parse_url(format!("{}/storage/v1/object/{}", self.base_url, bucket))?;
        let rb = self
            .authorize(self.client.delete(url), Access::Write)
            .header(CONTENT_TYPE, JSON)
            .body(Self::json_body(&RemoveObjectsBody { prefixes: names })?);

        self.send(rb, &format!("remove from {}", bucket)).await?;
        Ok(())
    }

    /// Public URL of an object. Pure string formatting, no request is made.
    pub fn public_url(&self, bucket: &str, name: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{}",
            self.base_url, bucket, name
        )
    }
}

fn map_error_status(status: StatusCode, body: &[u8]) -> StoreError {
    let parsed: Option<RestErrorBody> = serde_json::from_slice(body).ok();
    let message = parsed
        .as_ref()
        .and_then(|b| b.message.clone())
        .unwrap_or_else(|| String::from_utf8_lossy(body).trim().to_string());

    let unique_violation = parsed
        .as_ref()
        .and_then(|b| b.code.as_deref())
        .is_some_and(|c| c == UNIQUE_VIOLATION);

    if status == StatusCode::CONFLICT || unique_violation {
        return StoreError::Conflict(message);
    }

    StoreError::Status {
        status: status.as_u16(),
        message,
    }
}
