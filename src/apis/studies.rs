use crate::{
    client::OpencgaClient,
    error::{require, OpencgaResult},
    models::RestResponse,
    resource::{Endpoint, QueryOptions, ResourceClient},
};
use log::info;
use serde_json::Value;

/// Studies web services (`/{apiVersion}/studies`)
pub struct StudyApi<'a> {
    resource: ResourceClient<'a>,
}

impl<'a> StudyApi<'a> {
    pub const CATEGORY: &'static str = "studies";

    pub fn new(client: &'a OpencgaClient) -> Self {
        Self {
            resource: ResourceClient::new(client, Self::CATEGORY),
        }
    }

    /// Update some study attributes
    ///
    /// # Arguments
    /// * `study` - Study `[[user@]project:]study`
    /// * `data` - JSON containing the params to be updated
    pub async fn update(
        &self,
        study: &str,
        data: Option<&Value>,
        options: QueryOptions,
    ) -> OpencgaResult<RestResponse> {
        info!("Updating study {}", study);
        let endpoint = Endpoint::new("update").query_id(require("study", study)?);
        self.resource.post(endpoint, data, options).await
    }

    /// Fetch the permission rules of a study for one entity type
    ///
    /// # Arguments
    /// * `study` - Study `[[user@]project:]study`
    /// * `entity` - Entity the rules apply to (SAMPLES, FILES, COHORTS...)
    pub async fn permission_rules(
        &self,
        study: &str,
        entity: &str,
        mut options: QueryOptions,
    ) -> OpencgaResult<RestResponse> {
        info!("Fetching {} permission rules of study {}", entity, study);
        options.insert("entity", require("entity", entity)?);
        let endpoint = Endpoint::new("permissionRules").query_id(require("study", study)?);
        self.resource.get(endpoint, options).await
    }

    /// Add or remove a permission rule
    ///
    /// # Arguments
    /// * `study` - Study `[[user@]project:]study`
    /// * `entity` - Entity the rule applies to
    /// * `data` - The permission rule to be created or removed
    ///
    /// The `action` option picks ADD, REMOVE, REVERT or NONE.
    pub async fn update_permission_rules(
        &self,
        study: &str,
        entity: &str,
        data: Option<&Value>,
        mut options: QueryOptions,
    ) -> OpencgaResult<RestResponse> {
        info!("Updating {} permission rules of study {}", entity, study);
        options.insert("entity", require("entity", entity)?);
        let endpoint = Endpoint::new("update")
            .query_id(require("study", study)?)
            .subcategory("permissionRules");
        self.resource.post(endpoint, data, options).await
    }

    /// Fetch the variable sets of a study (all of them unless `id` is set)
    pub async fn variable_sets(&self, study: &str, options: QueryOptions) -> OpencgaResult<RestResponse> {
        info!("Fetching variable sets of study {}", study);
        let endpoint = Endpoint::new("variableSets").query_id(require("study", study)?);
        self.resource.get(endpoint, options).await
    }

    /// Add or remove a variable set (`action` option: ADD or REMOVE)
    pub async fn update_variable_sets(
        &self,
        study: &str,
        data: Option<&Value>,
        options: QueryOptions,
    ) -> OpencgaResult<RestResponse> {
        info!("Updating variable sets of study {}", study);
        let endpoint = Endpoint::new("update")
            .query_id(require("study", study)?)
            .subcategory("variableSets");
        self.resource.post(endpoint, data, options).await
    }

    /// Add or remove variables of a variable set
    ///
    /// # Arguments
    /// * `study` - Study `[[user@]project:]study`
    /// * `variable_set` - Id of the variable set to update
    /// * `data` - The variable to add, or just its id when removing
    pub async fn update_variables(
        &self,
        study: &str,
        variable_set: &str,
        data: Option<&Value>,
        options: QueryOptions,
    ) -> OpencgaResult<RestResponse> {
        info!("Updating variables of {} in study {}", variable_set, study);
        let endpoint = Endpoint::new("variables/update")
            .query_id(require("study", study)?)
            .subcategory("variableSets")
            .second_query_id(require("variable_set", variable_set)?);
        self.resource.post(endpoint, data, options).await
    }

    /// Groups present in the study
    pub async fn groups(&self, study: &str, options: QueryOptions) -> OpencgaResult<RestResponse> {
        info!("Fetching groups of study {}", study);
        let endpoint = Endpoint::new("groups").query_id(require("study", study)?);
        self.resource.get(endpoint, options).await
    }

    /// Add or remove a group (`action` option: ADD or REMOVE)
    pub async fn update_groups(
        &self,
        study: &str,
        data: Option<&Value>,
        options: QueryOptions,
    ) -> OpencgaResult<RestResponse> {
        info!("Updating groups of study {}", study);
        let endpoint = Endpoint::new("update")
            .query_id(require("study", study)?)
            .subcategory("groups");
        self.resource.post(endpoint, data, options).await
    }

    /// Add, set or remove users of an existing group
    pub async fn update_users(
        &self,
        study: &str,
        group: &str,
        data: Option<&Value>,
        options: QueryOptions,
    ) -> OpencgaResult<RestResponse> {
        info!("Updating users of group {} in study {}", group, study);
        let endpoint = Endpoint::new("users/update")
            .query_id(require("study", study)?)
            .subcategory("groups")
            .second_query_id(require("group", group)?);
        self.resource.post(endpoint, data, options).await
    }

    /// Create a new study (target project in the `project` option)
    pub async fn create(&self, data: Option<&Value>, options: QueryOptions) -> OpencgaResult<RestResponse> {
        info!("Creating study");
        self.resource.post(Endpoint::new("create"), data, options).await
    }

    /// Search studies of a project
    pub async fn search(&self, project: &str, mut options: QueryOptions) -> OpencgaResult<RestResponse> {
        info!("Searching studies of project {}", project);
        options.insert("project", require("project", project)?);
        self.resource.get(Endpoint::new("search"), options).await
    }

    /// ACLs of the studies, restricted to `member` when that option is set
    ///
    /// # Arguments
    /// * `studies` - Comma separated list of studies, up to 100
    pub async fn acl(&self, studies: &str, options: QueryOptions) -> OpencgaResult<RestResponse> {
        info!("Fetching ACLs of studies {}", studies);
        let endpoint = Endpoint::new("acl").query_id(require("studies", studies)?);
        self.resource.get(endpoint, options).await
    }

    /// Update the permissions granted to members
    ///
    /// # Arguments
    /// * `members` - Comma separated list of user or group ids
    /// * `data` - ACL parameters; `template` may be admin, analyst or view_only
    pub async fn update_acl(
        &self,
        members: &str,
        data: Option<&Value>,
        options: QueryOptions,
    ) -> OpencgaResult<RestResponse> {
        info!("Updating study ACLs of {}", members);
        let endpoint = Endpoint::new("update")
            .subcategory("acl")
            .second_query_id(require("members", members)?);
        self.resource.post(endpoint, data, options).await
    }

    /// Catalog aggregation stats of the studies
    pub async fn aggregation_stats(&self, studies: &str, options: QueryOptions) -> OpencgaResult<RestResponse> {
        info!("Fetching aggregation stats of studies {}", studies);
        let endpoint = Endpoint::new("aggregationStats").query_id(require("studies", studies)?);
        self.resource.get(endpoint, options).await
    }

    /// Fetch study information
    pub async fn info(&self, studies: &str, options: QueryOptions) -> OpencgaResult<RestResponse> {
        info!("Fetching info of studies {}", studies);
        let endpoint = Endpoint::new("info").query_id(require("studies", studies)?);
        self.resource.get(endpoint, options).await
    }
}
