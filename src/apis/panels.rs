use crate::{
    client::OpencgaClient,
    error::{require, OpencgaResult},
    models::RestResponse,
    resource::{Endpoint, QueryOptions, ResourceClient},
};
use log::info;
use serde_json::Value;

/// Disease panel web services (`/{apiVersion}/panels`)
pub struct PanelApi<'a> {
    resource: ResourceClient<'a>,
}

impl<'a> PanelApi<'a> {
    pub const CATEGORY: &'static str = "panels";

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
        info!("Updating panel ACLs of {} ({})", members, action);
        options.insert("action", require("action", action)?);
        let endpoint = Endpoint::new("update")
            .subcategory("acl")
            .second_query_id(require("members", members)?);
        self.resource.post(endpoint, data, options).await
    }

    /// Create a panel, or import panels with the `source` and `id` options
    pub async fn create(&self, data: Option<&Value>, options: QueryOptions) -> OpencgaResult<RestResponse> {
        info!("Creating panel");
        self.resource.post(Endpoint::new("create"), data, options).await
    }

    pub async fn search(&self, options: QueryOptions) -> OpencgaResult<RestResponse> {
        info!("Searching panels");
        self.resource.get(Endpoint::new("search"), options).await
    }

    /// ACLs of the panels, restricted to `member` when that option is set
    pub async fn acl(&self, panels: &str, options: QueryOptions) -> OpencgaResult<RestResponse> {
        info!("Fetching ACLs of panels {}", panels);
        let endpoint = Endpoint::new("acl").query_id(require("panels", panels)?);
        self.resource.get(endpoint, options).await
    }

    pub async fn delete(&self, panels: &str, options: QueryOptions) -> OpencgaResult<RestResponse> {
        info!("Deleting panels {}", panels);
        let endpoint = Endpoint::new("delete").query_id(require("panels", panels)?);
        self.resource.delete(endpoint, options).await
    }

    pub async fn info(&self, panels: &str, options: QueryOptions) -> OpencgaResult<RestResponse> {
        info!("Fetching info of panels {}", panels);
        let endpoint = Endpoint::new("info").query_id(require("panels", panels)?);
        self.resource.get(endpoint, options).await
    }

    /// Update panel attributes (`incVersion` option creates a new version)
    pub async fn update(
        &self,
        panels: &str,
        data: Option<&Value>,
        options: QueryOptions,
    ) -> OpencgaResult<RestResponse> {
        info!("Updating panels {}", panels);
        let endpoint = Endpoint::new("update").query_id(require("panels", panels)?);
        self.resource.post(endpoint, data, options).await
    }
}
