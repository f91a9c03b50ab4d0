use crate::{
    client::OpencgaClient,
    error::OpencgaResult,
    models::RestResponse,
};
use bytes::Bytes;
use log::debug;
use reqwest::{Method, RequestBuilder};
use serde::{de::DeserializeOwned, Serialize};
use std::collections::BTreeMap;
use std::fmt::Display;
use url::Url;

/// One REST endpoint below a category.
///
/// Segments are emitted in the fixed order
/// `category / query_id / subcategory / second_query_id / resource`;
/// absent or empty parts are skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Endpoint {
    resource: String,
    query_id: Option<String>,
    subcategory: Option<String>,
    second_query_id: Option<String>,
}

impl Endpoint {
    pub fn new(resource: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
            ..Default::default()
        }
    }

    /// Primary entity identifier, usually a comma separated id list
    ///
    /// Nested paths use `:` as separator (`data:vcfs:a.vcf`); a `/` is sent
    /// as `%2F`, which many servlet containers reject.
    pub fn query_id(mut self, query_id: impl Into<String>) -> Self {
        self.query_id = Some(query_id.into());
        self
    }

    /// Nested resource group such as `acl`, `groups` or `variableSets`
    pub fn subcategory(mut self, subcategory: impl Into<String>) -> Self {
        self.subcategory = Some(subcategory.into());
        self
    }

    /// Identifier of the nested entity
    pub fn second_query_id(mut self, second_query_id: impl Into<String>) -> Self {
        self.second_query_id = Some(second_query_id.into());
        self
    }

    pub fn resource(&self) -> &str {
        &self.resource
    }

    /// Path segments under the given category.
    ///
    /// Category, subcategory and resource may span several segments
    /// (`analysis/variant`, `annotations/update`); identifiers are always a
    /// single segment.
    pub fn segments<'s>(&'s self, category: &'s str) -> Vec<&'s str> {
        fn split(part: &str) -> impl Iterator<Item = &str> {
            part.split('/').filter(|s| !s.is_empty())
        }
        fn ident(part: &Option<String>) -> Option<&str> {
            part.as_deref().filter(|s| !s.is_empty())
        }

        let mut segments: Vec<&str> = split(category).collect();
        segments.extend(ident(&self.query_id));
        segments.extend(self.subcategory.as_deref().into_iter().flat_map(split));
        segments.extend(ident(&self.second_query_id));
        segments.extend(split(&self.resource));
        segments
    }

    /// Relative path under the given category, segments joined by `/`
    pub fn path(&self, category: &str) -> String {
        self.segments(category).join("/")
    }
}

/// Caller supplied query parameters.
///
/// Keys are passed through verbatim; the server validates them. List values
/// are joined with `,` on insertion so the transport never re-serializes them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct QueryOptions(BTreeMap<String, String>);

impl QueryOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`QueryOptions::insert`]
    pub fn set(mut self, key: impl Into<String>, value: impl Display) -> Self {
        self.insert(key, value);
        self
    }

    /// Join `values` with commas and store them under `key`
    pub fn set_list<I, T>(mut self, key: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Display,
    {
        let joined = values
            .into_iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(",");
        self.0.insert(key.into(), joined);
        self
    }

    /// Store a parameter, returning the value it replaced
    pub fn insert(&mut self, key: impl Into<String>, value: impl Display) -> Option<String> {
        self.0.insert(key.into(), value.to_string())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for QueryOptions
where
    K: Into<String>,
    V: Display,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut options = Self::new();
        for (key, value) in iter {
            options.insert(key, value);
        }
        options
    }
}

/// Request builder bound to one category of the REST API.
///
/// Holds no state besides the borrowed client and the category, so every
/// call is an independent request/response exchange.
#[derive(Clone, Copy)]
pub struct ResourceClient<'a> {
    client: &'a OpencgaClient,
    category: &'a str,
}

impl<'a> ResourceClient<'a> {
    pub fn new(client: &'a OpencgaClient, category: &'a str) -> Self {
        Self { client, category }
    }

    pub fn category(&self) -> &str {
        self.category
    }

    /// Absolute URL of an endpoint, without query string
    pub fn url(&self, endpoint: &Endpoint) -> OpencgaResult<Url> {
        self.client.endpoint_url(&endpoint.segments(self.category))
    }

    /// Build the authenticated request for an endpoint.
    ///
    /// The body is only attached for POST.
    pub async fn request(
        &self,
        method: Method,
        endpoint: &Endpoint,
        data: Option<&serde_json::Value>,
        options: &QueryOptions,
    ) -> OpencgaResult<RequestBuilder> {
        let url = self.url(endpoint)?;
        debug!("HTTP {} {} options={:?}", method, url, options);

        let mut req = self.client.request(method.clone(), url).await?;
        if !options.is_empty() {
            req = req.query(options);
        }

        if method == Method::POST {
            if let Some(body) = data {
                debug!("Request body: {}", body);
                req = req.json(body);
            }
        }

        Ok(req)
    }

    pub async fn get<T>(&self, endpoint: Endpoint, options: QueryOptions) -> OpencgaResult<RestResponse<T>>
    where
        T: DeserializeOwned,
    {
        let req = self.request(Method::GET, &endpoint, None, &options).await?;
        self.client.execute(req).await
    }

    pub async fn post<T>(
        &self,
        endpoint: Endpoint,
        data: Option<&serde_json::Value>,
        options: QueryOptions,
    ) -> OpencgaResult<RestResponse<T>>
    where
        T: DeserializeOwned,
    {
        let req = self.request(Method::POST, &endpoint, data, &options).await?;
        self.client.execute(req).await
    }

    pub async fn delete<T>(&self, endpoint: Endpoint, options: QueryOptions) -> OpencgaResult<RestResponse<T>>
    where
        T: DeserializeOwned,
    {
        let req = self.request(Method::DELETE, &endpoint, None, &options).await?;
        self.client.execute(req).await
    }

    /// GET returning the raw payload, for endpoints that stream file contents
    pub async fn get_bytes(&self, endpoint: Endpoint, options: QueryOptions) -> OpencgaResult<Bytes> {
        let req = self.request(Method::GET, &endpoint, None, &options).await?;
        self.client.execute_bytes(req).await
    }
}
