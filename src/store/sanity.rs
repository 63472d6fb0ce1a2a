use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, info, warn};

use crate::config::StoreConfig;
use crate::error::{AppError, AppResult};
use crate::models::{AssetKind, FileUpload, StoredDocument};
use crate::store::{build_query, AssetUrlBuilder, MediaQuery, MediaStore};

#[derive(Deserialize)]
struct QueryResponse {
    #[serde(default)]
    result: Vec<StoredDocument>,
}

#[derive(Deserialize)]
struct UploadResponse {
    document: UploadedAsset,
}

#[derive(Deserialize)]
struct UploadedAsset {
    #[serde(rename = "_id")]
    id: String,
}

#[derive(Deserialize)]
struct MutateResponse {
    #[serde(default)]
    results: Vec<MutationResult>,
}

#[derive(Deserialize)]
struct MutationResult {
    #[serde(default)]
    document: Option<StoredDocument>,
}

/// `MediaStore` over the hosted content store's HTTP API.
pub struct SanityClient {
    http: reqwest::Client,
    config: StoreConfig,
    urls: AssetUrlBuilder,
}

impl SanityClient {
    pub fn new(config: StoreConfig) -> AppResult<Self> {
        config.validate()?;

        let http = reqwest::Client::builder()
            .user_agent(concat!("wedding-album/", env!("CARGO_PKG_VERSION")))
            .build()?;
        let urls = AssetUrlBuilder::from_config(&config);

        Ok(Self { http, config, urls })
    }

    /// `<host>/v<version>`. Cached reads go through the API CDN when enabled;
    /// anything that must see the latest write passes `cached = false`.
    fn api_base(&self, cached: bool) -> String {
        let cached = cached && self.config.use_cdn;
        let override_host = if cached {
            self.config
                .api_cdn_host
                .as_ref()
                .or(self.config.api_host.as_ref())
        } else {
            self.config.api_host.as_ref()
        };
        let host = match override_host {
            Some(host) => host.trim_end_matches('/').to_string(),
            None => {
                let api = if cached { "apicdn" } else { "api" };
                format!("https://{}.{}.sanity.io", self.config.project_id, api)
            }
        };
        let version = self.config.api_version.trim_start_matches('v');
        format!("{}/v{}", host, version)
    }

    async fn query_at(&self, query: MediaQuery, cached: bool) -> AppResult<Vec<StoredDocument>> {
        let url = format!("{}/data/query/{}", self.api_base(cached), self.config.dataset);
        let groq = build_query(&query);
        debug!("GROQ {:?}: {}", query, groq);

        let response: QueryResponse = self
            .send(self.http.get(&url).query(&[("query", groq)]), AppError::Fetch)
            .await?;

        Ok(response.result)
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.config.token {
            Some(token) => request.header(AUTHORIZATION, format!("Bearer {}", token)),
            None => request,
        }
    }

    async fn send<T, F>(&self, request: reqwest::RequestBuilder, wrap: F) -> AppResult<T>
    where
        T: DeserializeOwned,
        F: Fn(String) -> AppError,
    {
        let response = self
            .authorize(request)
            .send()
            .await
            .map_err(|e| wrap(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(wrap(format!("{} {}", status.as_u16(), body.trim())));
        }

        response.json::<T>().await.map_err(|e| wrap(e.to_string()))
    }
}

#[async_trait]
impl MediaStore for SanityClient {
    async fn query(&self, query: MediaQuery) -> AppResult<Vec<StoredDocument>> {
        self.query_at(query, true).await
    }

    async fn upload(&self, kind: AssetKind, file: FileUpload) -> AppResult<String> {
        let url = format!(
            "{}/assets/{}/{}",
            self.api_base(false),
            kind.endpoint(),
            self.config.dataset
        );
        let content_type = file.mime_type();
        info!(
            "Uploading {} asset {} ({}, {} bytes)",
            kind,
            file.filename,
            content_type,
            file.bytes.len()
        );

        let request = self
            .http
            .post(&url)
            .query(&[("filename", file.filename.as_str())])
            .header(CONTENT_TYPE, content_type)
            .body(file.bytes);

        let response: UploadResponse = self.send(request, AppError::Upload).await?;
        Ok(response.document.id)
    }

    async fn create(&self, document: StoredDocument) -> AppResult<StoredDocument> {
        let mut document = document;
        let id = document
            .id
            .get_or_insert_with(|| uuid::Uuid::new_v4().to_string())
            .clone();

        let url = format!(
            "{}/data/mutate/{}",
            self.api_base(false),
            self.config.dataset
        );
        let body = json!({ "mutations": [{ "create": document }] });

        let request = self
            .http
            .post(&url)
            .query(&[("returnIds", "true"), ("returnDocuments", "true")])
            .json(&body);
        let response: MutateResponse = self.send(request, AppError::Create).await?;

        if let Some(created) = response.results.into_iter().find_map(|r| r.document) {
            return Ok(created);
        }

        // Not echoed; read it back once from the live API, the CDN may lag.
        warn!("Create of {} returned no document, reading it back", id);
        let found = self
            .query_at(MediaQuery::ById(id.clone()), false)
            .await
            .map_err(|e| AppError::Create(e.to_string()))?;

        found
            .into_iter()
            .next()
            .ok_or_else(|| AppError::Create(format!("Created document {} not found", id)))
    }

    fn url_builder(&self) -> &AssetUrlBuilder {
        &self.urls
    }
}
