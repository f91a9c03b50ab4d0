use crate::{
    client::OpencgaClient,
    error::OpencgaResult,
    models::RestResponse,
    resource::{Endpoint, QueryOptions, ResourceClient},
};
use log::info;
use serde_json::Value;

/// Variant storage operations (`/{apiVersion}/operation`)
///
/// Every operation is submitted as a job; `jobId`, `jobDescription` and
/// `jobTags` options label it.
pub struct VariantOperationApi<'a> {
    resource: ResourceClient<'a>,
}

impl<'a> VariantOperationApi<'a> {
    pub const CATEGORY: &'static str = "operation";

    pub fn new(client: &'a OpencgaClient) -> Self {
        Self {
            resource: ResourceClient::new(client, Self::CATEGORY),
        }
    }

    /// Build the family index
    pub async fn index_family_genotype(&self, data: Option<&Value>, options: QueryOptions) -> OpencgaResult<RestResponse> {
        info!("Submitting family genotype index");
        let endpoint = Endpoint::new("index").subcategory("variant/family/genotype");
        self.resource.post(endpoint, data, options).await
    }

    /// Fill missing sample values of family variants
    pub async fn aggregate_variant_family(&self, data: Option<&Value>, options: QueryOptions) -> OpencgaResult<RestResponse> {
        info!("Submitting family aggregation");
        let endpoint = Endpoint::new("aggregate").subcategory("variant/family");
        self.resource.post(endpoint, data, options).await
    }

    /// Fill missing sample values, excluding HOM-REF (0/0)
    pub async fn aggregate_variant(&self, data: Option<&Value>, options: QueryOptions) -> OpencgaResult<RestResponse> {
        info!("Submitting variant aggregation");
        let endpoint = Endpoint::new("aggregate").subcategory("variant");
        self.resource.post(endpoint, data, options).await
    }

    /// Create a secondary index in the search engine
    pub async fn secondary_index_variant(&self, data: Option<&Value>, options: QueryOptions) -> OpencgaResult<RestResponse> {
        info!("Submitting variant secondary index");
        let endpoint = Endpoint::new("secondaryIndex").subcategory("variant");
        self.resource.post(endpoint, data, options).await
    }

    /// Remove a set of samples (`samples` option) from the secondary index
    pub async fn delete_variant_secondary_index(&self, options: QueryOptions) -> OpencgaResult<RestResponse> {
        info!("Removing samples from the variant secondary index");
        let endpoint = Endpoint::new("delete").subcategory("variant/secondaryIndex");
        self.resource.delete(endpoint, options).await
    }

    /// Delete a saved copy of the variant annotation (`annotationId` option)
    pub async fn delete_variant_annotation(&self, options: QueryOptions) -> OpencgaResult<RestResponse> {
        info!("Deleting saved variant annotation");
        let endpoint = Endpoint::new("delete").subcategory("variant/annotation");
        self.resource.delete(endpoint, options).await
    }

    /// Save a copy of the current variant annotation
    pub async fn save_variant_annotation(&self, data: Option<&Value>, options: QueryOptions) -> OpencgaResult<RestResponse> {
        info!("Saving variant annotation");
        let endpoint = Endpoint::new("save").subcategory("variant/annotation");
        self.resource.post(endpoint, data, options).await
    }

    /// Index a variant score, see [`crate::models::VariantScoreIndexParams`]
    pub async fn index_variant_score(&self, data: Option<&Value>, options: QueryOptions) -> OpencgaResult<RestResponse> {
        info!("Submitting variant score index");
        let endpoint = Endpoint::new("index").subcategory("variant/score");
        self.resource.post(endpoint, data, options).await
    }

    /// Remove a variant score (`name` option)
    pub async fn delete_variant_score(&self, options: QueryOptions) -> OpencgaResult<RestResponse> {
        info!("Removing variant score");
        let endpoint = Endpoint::new("delete").subcategory("variant/score");
        self.resource.delete(endpoint, options).await
    }

    /// Build and annotate the sample index
    pub async fn index_sample_genotype(&self, data: Option<&Value>, options: QueryOptions) -> OpencgaResult<RestResponse> {
        info!("Submitting sample genotype index");
        let endpoint = Endpoint::new("index").subcategory("variant/sample/genotype");
        self.resource.post(endpoint, data, options).await
    }

    /// Create and load variant annotations
    pub async fn index_variant_annotation(&self, data: Option<&Value>, options: QueryOptions) -> OpencgaResult<RestResponse> {
        info!("Submitting variant annotation index");
        let endpoint = Endpoint::new("index").subcategory("variant/annotation");
        self.resource.post(endpoint, data, options).await
    }
}
