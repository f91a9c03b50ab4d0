use crate::{
    client::OpencgaClient,
    error::{require, OpencgaResult},
    models::RestResponse,
    resource::{Endpoint, QueryOptions, ResourceClient},
};
use log::info;
use serde_json::Value;

/// Samples web services (`/{apiVersion}/samples`)
pub struct SampleApi<'a> {
    resource: ResourceClient<'a>,
}

impl<'a> SampleApi<'a> {
    pub const CATEGORY: &'static str = "samples";

    pub fn new(client: &'a OpencgaClient) -> Self {
        Self {
            resource: ResourceClient::new(client, Self::CATEGORY),
        }
    }

    /// Update the set of permissions granted for the members
    ///
    /// The `propagate` option extends the permissions to related individuals.
    pub async fn update_acl(
        &self,
        members: &str,
        action: &str,
        data: Option<&Value>,
        mut options: QueryOptions,
    ) -> OpencgaResult<RestResponse> {
        info!("Updating sample ACLs of {} ({})", members, action);
        options.insert("action", require("action", action)?);
        let endpoint = Endpoint::new("update")
            .subcategory("acl")
            .second_query_id(require("members", members)?);
        self.resource.post(endpoint, data, options).await
    }

    pub async fn aggregation_stats(&self, options: QueryOptions) -> OpencgaResult<RestResponse> {
        info!("Fetching sample aggregation stats");
        self.resource.get(Endpoint::new("aggregationStats"), options).await
    }

    /// Load annotation sets from a TSV file
    pub async fn load_annotation_sets(
        &self,
        variable_set_id: &str,
        path: &str,
        data: Option<&Value>,
        mut options: QueryOptions,
    ) -> OpencgaResult<RestResponse> {
        info!("Loading sample annotation sets from {}", path);
        options.insert("variableSetId", require("variable_set_id", variable_set_id)?);
        options.insert("path", require("path", path)?);
        let endpoint = Endpoint::new("load").subcategory("annotationSets");
        self.resource.post(endpoint, data, options).await
    }

    pub async fn create(&self, data: Option<&Value>, options: QueryOptions) -> OpencgaResult<RestResponse> {
        info!("Creating sample");
        self.resource.post(Endpoint::new("create"), data, options).await
    }

    pub async fn distinct(&self, field: &str, mut options: QueryOptions) -> OpencgaResult<RestResponse> {
        info!("Fetching distinct sample values of {}", field);
        options.insert("field", require("field", field)?);
        self.resource.get(Endpoint::new("distinct"), options).await
    }

    /// Load samples from a pedigree file
    pub async fn load(&self, file: &str, mut options: QueryOptions) -> OpencgaResult<RestResponse> {
        info!("Loading samples from {}", file);
        options.insert("file", require("file", file)?);
        self.resource.get(Endpoint::new("load"), options).await
    }

    pub async fn search(&self, options: QueryOptions) -> OpencgaResult<RestResponse> {
        info!("Searching samples");
        self.resource.get(Endpoint::new("search"), options).await
    }

    pub async fn acl(&self, samples: &str, options: QueryOptions) -> OpencgaResult<RestResponse> {
        info!("Fetching ACLs of samples {}", samples);
        let endpoint = Endpoint::new("acl").query_id(require("samples", samples)?);
        self.resource.get(endpoint, options).await
    }

    pub async fn delete(&self, samples: &str, options: QueryOptions) -> OpencgaResult<RestResponse> {
        info!("Deleting samples {}", samples);
        let endpoint = Endpoint::new("delete").query_id(require("samples", samples)?);
        self.resource.delete(endpoint, options).await
    }

    pub async fn info(&self, samples: &str, options: QueryOptions) -> OpencgaResult<RestResponse> {
        info!("Fetching info of samples {}", samples);
        let endpoint = Endpoint::new("info").query_id(require("samples", samples)?);
        self.resource.get(endpoint, options).await
    }

    pub async fn update(
        &self,
        samples: &str,
        data: Option<&Value>,
        options: QueryOptions,
    ) -> OpencgaResult<RestResponse> {
        info!("Updating samples {}", samples);
        let endpoint = Endpoint::new("update").query_id(require("samples", samples)?);
        self.resource.post(endpoint, data, options).await
    }

    pub async fn update_annotations(
        &self,
        sample: &str,
        annotation_set: &str,
        data: Option<&Value>,
        options: QueryOptions,
    ) -> OpencgaResult<RestResponse> {
        info!("Updating annotations of {} in sample {}", annotation_set, sample);
        let endpoint = Endpoint::new("annotations/update")
            .query_id(require("sample", sample)?)
            .subcategory("annotationSets")
            .second_query_id(require("annotation_set", annotation_set)?);
        self.resource.post(endpoint, data, options).await
    }
}
