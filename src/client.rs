use crate::{
    auth::Authentication,
    config::ClientConfig,
    error::{OpencgaError, OpencgaResult},
    models::RestResponse,
    resource::ResourceClient,
    apis::{CohortApi, FileApi, PanelApi, SampleApi, StudyApi, VariantApi, VariantOperationApi},
};
use log::debug;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use url::Url;

/// Main OpenCGA client
#[derive(Clone)]
pub struct OpencgaClient {
    client: Client,
    config: ClientConfig,
    base_url: Url,
    auth: Arc<dyn Authentication>,
}

impl OpencgaClient {
    /// Create a new client for `host` using the default configuration
    pub fn new(
        host: impl AsRef<str>,
        auth: impl Authentication + 'static,
    ) -> OpencgaResult<Self> {
        Self::from_config(ClientConfig::new(host.as_ref()), auth)
    }

    /// Create a new client from a full configuration
    pub fn from_config(
        config: ClientConfig,
        auth: impl Authentication + 'static,
    ) -> OpencgaResult<Self> {
        config.validate()?;
        let mut builder = Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Self::with_client(client, config, auth)
    }

    /// Create a new client with custom reqwest client
    pub fn with_client(
        client: Client,
        config: ClientConfig,
        auth: impl Authentication + 'static,
    ) -> OpencgaResult<Self> {
        let base_url = config.rest_url()?;

        Ok(Self {
            client,
            config,
            base_url,
            auth: Arc::new(auth),
        })
    }

    /// Get the REST base URL (`{host}/webservices/rest/{version}`)
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Request builder for an arbitrary category, e.g. `"projects"`
    pub fn resource<'a>(&'a self, category: &'a str) -> ResourceClient<'a> {
        ResourceClient::new(self, category)
    }

    /// Get Studies API
    pub fn studies(&self) -> StudyApi<'_> {
        StudyApi::new(self)
    }

    /// Get Cohorts API
    pub fn cohorts(&self) -> CohortApi<'_> {
        CohortApi::new(self)
    }

    /// Get Disease Panels API
    pub fn panels(&self) -> PanelApi<'_> {
        PanelApi::new(self)
    }

    /// Get Samples API
    pub fn samples(&self) -> SampleApi<'_> {
        SampleApi::new(self)
    }

    /// Get Files API
    pub fn files(&self) -> FileApi<'_> {
        FileApi::new(self)
    }

    /// Get Variant Analysis API
    pub fn variants(&self) -> VariantApi<'_> {
        VariantApi::new(self)
    }

    /// Get Variant Storage Operations API
    pub fn variant_operations(&self) -> VariantOperationApi<'_> {
        VariantOperationApi::new(self)
    }

    /// Absolute URL for the given path segments below the REST base URL
    pub fn endpoint_url(&self, segments: &[&str]) -> OpencgaResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| OpencgaError::invalid_param(format!("Cannot append path to {}", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Build a request to the given URL with authentication
    pub async fn request(
        &self,
        method: reqwest::Method,
        url: Url,
    ) -> OpencgaResult<RequestBuilder> {
        let mut request = self.client.request(method, url);

        // Apply authentication
        let mut headers = reqwest::header::HeaderMap::new();
        self.auth.apply_auth(&mut headers).await?;

        for (name, value) in headers.iter() {
            request = request.header(name, value);
        }

        Ok(request)
    }

    /// Execute a request and decode the response envelope
    pub async fn execute<T>(&self, request: RequestBuilder) -> OpencgaResult<RestResponse<T>>
    where
        T: DeserializeOwned,
    {
        let response = request.send().await?;
        self.handle_response(response).await
    }

    /// Execute a request and return raw bytes
    pub async fn execute_bytes(&self, request: RequestBuilder) -> OpencgaResult<bytes::Bytes> {
        let response = request.send().await?;
        self.handle_response_bytes(response).await
    }

    /// Handle response and deserialize JSON
    async fn handle_response<T>(&self, response: Response) -> OpencgaResult<RestResponse<T>>
    where
        T: DeserializeOwned,
    {
        let status = response.status();

        if status.is_success() {
            let body = response.bytes().await?;
            debug!("HTTP {} ({} bytes)", status, body.len());
            serde_json::from_slice(&body).map_err(|e| {
                OpencgaError::InvalidResponse(format!("Cannot decode response envelope: {}", e))
            })
        } else {
            self.handle_error_response(status, response).await
        }
    }

    /// Handle response and return raw bytes
    async fn handle_response_bytes(&self, response: Response) -> OpencgaResult<bytes::Bytes> {
        let status = response.status();

        if status.is_success() {
            let bytes = response.bytes().await?;
            Ok(bytes)
        } else {
            self.handle_error_response(status, response).await
        }
    }

    /// Handle error responses
    async fn handle_error_response<T>(&self, status: StatusCode, response: Response) -> OpencgaResult<T> {
        let body = response.bytes().await.unwrap_or_default();
        let error_message = error_message(&body).unwrap_or_else(|| format!("HTTP {}", status));
        debug!("HTTP {} error: {}", status, error_message);

        match status {
            StatusCode::UNAUTHORIZED => Err(OpencgaError::auth_error(error_message)),
            StatusCode::FORBIDDEN => Err(OpencgaError::PermissionDenied(error_message)),
            StatusCode::NOT_FOUND => Err(OpencgaError::ObjectNotFound(error_message)),
            StatusCode::BAD_REQUEST => Err(OpencgaError::invalid_param(error_message)),
            _ => Err(OpencgaError::api_error(status.as_u16(), error_message)),
        }
    }
}

/// Pull a message out of an error body: first ERROR event of the envelope,
/// else a top level `message` / `error` field.
fn error_message(body: &[u8]) -> Option<String> {
    let value: serde_json::Value = serde_json::from_slice(body).ok()?;

    if let Ok(envelope) = serde_json::from_value::<RestResponse>(value.clone()) {
        if let Some(message) = envelope.error_events().find_map(|e| e.message.clone()) {
            return Some(message);
        }
    }

    ["message", "error"]
        .iter()
        .find_map(|key| value.get(*key).and_then(|v| v.as_str()).map(str::to_string))
}
