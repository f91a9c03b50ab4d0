use crate::{
    client::OpencgaClient,
    error::{require, OpencgaResult},
    models::RestResponse,
    resource::{Endpoint, QueryOptions, ResourceClient},
};
use log::info;
use serde_json::Value;

/// Cohorts web services (`/{apiVersion}/cohorts`)
pub struct CohortApi<'a> {
    resource: ResourceClient<'a>,
}

impl<'a> CohortApi<'a> {
    pub const CATEGORY: &'static str = "cohorts";

    pub fn new(client: &'a OpencgaClient) -> Self {
        Self {
            resource: ResourceClient::new(client, Self::CATEGORY),
        }
    }

    /// Update the set of permissions granted for the members
    ///
    /// # Arguments
    /// * `members` - Comma separated list of user or group ids
    /// * `action` - ADD, SET, REMOVE or RESET
    /// * `data` - ACL parameters
    pub async fn update_acl(
        &self,
        members: &str,
        action: &str,
        data: Option<&Value>,
        mut options: QueryOptions,
    ) -> OpencgaResult<RestResponse> {
        info!("Updating cohort ACLs of {} ({})", members, action);
        options.insert("action", require("action", action)?);
        let endpoint = Endpoint::new("update")
            .subcategory("acl")
            .second_query_id(require("members", members)?);
        self.resource.post(endpoint, data, options).await
    }

    /// Fetch catalog cohort stats
    pub async fn aggregation_stats(&self, options: QueryOptions) -> OpencgaResult<RestResponse> {
        info!("Fetching cohort aggregation stats");
        self.resource.get(Endpoint::new("aggregationStats"), options).await
    }

    /// Load annotation sets from a TSV file
    ///
    /// # Arguments
    /// * `variable_set_id` - Variable set id or name
    /// * `path` - Path of the TSV file in OpenCGA
    /// * `data` - TSV `content`, when the file is not registered yet
    pub async fn load_annotation_sets(
        &self,
        variable_set_id: &str,
        path: &str,
        data: Option<&Value>,
        mut options: QueryOptions,
    ) -> OpencgaResult<RestResponse> {
        info!("Loading cohort annotation sets from {}", path);
        options.insert("variableSetId", require("variable_set_id", variable_set_id)?);
        options.insert("path", require("path", path)?);
        let endpoint = Endpoint::new("load").subcategory("annotationSets");
        self.resource.post(endpoint, data, options).await
    }

    /// Create a cohort
    pub async fn create(&self, data: Option<&Value>, options: QueryOptions) -> OpencgaResult<RestResponse> {
        info!("Creating cohort");
        self.resource.post(Endpoint::new("create"), data, options).await
    }

    /// Distinct values of a cohort field
    pub async fn distinct(&self, field: &str, mut options: QueryOptions) -> OpencgaResult<RestResponse> {
        info!("Fetching distinct cohort values of {}", field);
        options.insert("field", require("field", field)?);
        self.resource.get(Endpoint::new("distinct"), options).await
    }

    /// Create a cohort based on a sample query
    pub async fn generate(&self, data: Option<&Value>, options: QueryOptions) -> OpencgaResult<RestResponse> {
        info!("Generating cohort");
        self.resource.post(Endpoint::new("generate"), data, options).await
    }

    /// Search cohorts
    pub async fn search(&self, options: QueryOptions) -> OpencgaResult<RestResponse> {
        info!("Searching cohorts");
        self.resource.get(Endpoint::new("search"), options).await
    }

    /// ACLs of the cohorts, restricted to `member` when that option is set
    pub async fn acl(&self, cohorts: &str, options: QueryOptions) -> OpencgaResult<RestResponse> {
        info!("Fetching ACLs of cohorts {}", cohorts);
        let endpoint = Endpoint::new("acl").query_id(require("cohorts", cohorts)?);
        self.resource.get(endpoint, options).await
    }

    /// Delete cohorts
    pub async fn delete(&self, cohorts: &str, options: QueryOptions) -> OpencgaResult<RestResponse> {
        info!("Deleting cohorts {}", cohorts);
        let endpoint = Endpoint::new("delete").query_id(require("cohorts", cohorts)?);
        self.resource.delete(endpoint, options).await
    }

    /// Get cohort information
    pub async fn info(&self, cohorts: &str, options: QueryOptions) -> OpencgaResult<RestResponse> {
        info!("Fetching info of cohorts {}", cohorts);
        let endpoint = Endpoint::new("info").query_id(require("cohorts", cohorts)?);
        self.resource.get(endpoint, options).await
    }

    /// Update some cohort attributes
    pub async fn update(
        &self,
        cohorts: &str,
        data: Option<&Value>,
        options: QueryOptions,
    ) -> OpencgaResult<RestResponse> {
        info!("Updating cohorts {}", cohorts);
        let endpoint = Endpoint::new("update").query_id(require("cohorts", cohorts)?);
        self.resource.post(endpoint, data, options).await
    }

    /// Update annotations of an annotation set
    ///
    /// # Arguments
    /// * `cohort` - Cohort id
    /// * `annotation_set` - Annotation set id
    /// * `data` - Annotation map, or `remove` / `reset` keys depending on `action`
    pub async fn update_annotations(
        &self,
        cohort: &str,
        annotation_set: &str,
        data: Option<&Value>,
        options: QueryOptions,
    ) -> OpencgaResult<RestResponse> {
        info!("Updating annotations of {} in cohort {}", annotation_set, cohort);
        let endpoint = Endpoint::new("annotations/update")
            .query_id(require("cohort", cohort)?)
            .subcategory("annotationSets")
            .second_query_id(require("annotation_set", annotation_set)?);
        self.resource.post(endpoint, data, options).await
    }
}
