use crate::{
    client::OpencgaClient,
    error::{require, OpencgaResult},
    models::RestResponse,
    resource::{Endpoint, QueryOptions, ResourceClient},
};
use bytes::Bytes;
use log::info;
use serde_json::Value;

/// Files web services (`/{apiVersion}/files`)
///
/// File and folder ids use `:` as path separator, e.g. `data:vcfs:a.vcf.gz`.
pub struct FileApi<'a> {
    resource: ResourceClient<'a>,
}

impl<'a> FileApi<'a> {
    pub const CATEGORY: &'static str = "files";

    pub fn new(client: &'a OpencgaClient) -> Self {
        Self {
            resource: ResourceClient::new(client, Self::CATEGORY),
        }
    }

    /// Update the set of permissions granted for the members
    pub async fn update_acl(
        &self,
        members: &str,
        action: &str,
        data: Option<&Value>,
        mut options: QueryOptions,
    ) -> OpencgaResult<RestResponse> {
        info!("Updating file ACLs of {} ({})", members, action);
        options.insert("action", require("action", action)?);
        let endpoint = Endpoint::new("update")
            .subcategory("acl")
            .second_query_id(require("members", members)?);
        self.resource.post(endpoint, data, options).await
    }

    pub async fn aggregation_stats(&self, options: QueryOptions) -> OpencgaResult<RestResponse> {
        info!("Fetching file aggregation stats");
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
        info!("Loading file annotation sets from {}", path);
        options.insert("variableSetId", require("variable_set_id", variable_set_id)?);
        options.insert("path", require("path", path)?);
        let endpoint = Endpoint::new("load").subcategory("annotationSets");
        self.resource.post(endpoint, data, options).await
    }

    /// List of accepted file bioformats
    pub async fn bioformats(&self) -> OpencgaResult<RestResponse> {
        self.resource.get(Endpoint::new("bioformats"), QueryOptions::new()).await
    }

    /// Create a file or folder
    pub async fn create(&self, data: Option<&Value>, options: QueryOptions) -> OpencgaResult<RestResponse> {
        info!("Creating file");
        self.resource.post(Endpoint::new("create"), data, options).await
    }

    pub async fn distinct(&self, field: &str, mut options: QueryOptions) -> OpencgaResult<RestResponse> {
        info!("Fetching distinct file values of {}", field);
        options.insert("field", require("field", field)?);
        self.resource.get(Endpoint::new("distinct"), options).await
    }

    /// Download an external file into the catalog
    pub async fn fetch(&self, data: Option<&Value>, options: QueryOptions) -> OpencgaResult<RestResponse> {
        info!("Fetching external file");
        self.resource.post(Endpoint::new("fetch"), data, options).await
    }

    /// List of accepted file formats
    pub async fn formats(&self) -> OpencgaResult<RestResponse> {
        self.resource.get(Endpoint::new("formats"), QueryOptions::new()).await
    }

    /// Link an external file into the catalog
    pub async fn link(&self, data: Option<&Value>, options: QueryOptions) -> OpencgaResult<RestResponse> {
        info!("Linking file");
        self.resource.post(Endpoint::new("link"), data, options).await
    }

    /// Link files as a job
    pub async fn run_link(&self, data: Option<&Value>, options: QueryOptions) -> OpencgaResult<RestResponse> {
        info!("Submitting file link job");
        let endpoint = Endpoint::new("run").subcategory("link");
        self.resource.post(endpoint, data, options).await
    }

    /// Associate non-registered samples of linked files
    pub async fn run_postlink(&self, data: Option<&Value>, options: QueryOptions) -> OpencgaResult<RestResponse> {
        info!("Submitting file postlink job");
        let endpoint = Endpoint::new("run").subcategory("postlink");
        self.resource.post(endpoint, data, options).await
    }

    pub async fn search(&self, options: QueryOptions) -> OpencgaResult<RestResponse> {
        info!("Searching files");
        self.resource.get(Endpoint::new("search"), options).await
    }

    /// Register an uploaded file, described by the options
    pub async fn upload(&self, options: QueryOptions) -> OpencgaResult<RestResponse> {
        info!("Uploading file");
        self.resource.post(Endpoint::new("upload"), None, options).await
    }

    pub async fn acl(&self, files: &str, options: QueryOptions) -> OpencgaResult<RestResponse> {
        info!("Fetching ACLs of files {}", files);
        let endpoint = Endpoint::new("acl").query_id(require("files", files)?);
        self.resource.get(endpoint, options).await
    }

    pub async fn delete(&self, files: &str, options: QueryOptions) -> OpencgaResult<RestResponse> {
        info!("Deleting files {}", files);
        let endpoint = Endpoint::new("delete").query_id(require("files", files)?);
        self.resource.delete(endpoint, options).await
    }

    pub async fn info(&self, files: &str, options: QueryOptions) -> OpencgaResult<RestResponse> {
        info!("Fetching info of files {}", files);
        let endpoint = Endpoint::new("info").query_id(require("files", files)?);
        self.resource.get(endpoint, options).await
    }

    /// Unlink linked files and folders
    pub async fn unlink(&self, files: &str, options: QueryOptions) -> OpencgaResult<RestResponse> {
        info!("Unlinking files {}", files);
        let endpoint = Endpoint::new("unlink").query_id(require("files", files)?);
        self.resource.delete(endpoint, options).await
    }

    pub async fn update(
        &self,
        files: &str,
        data: Option<&Value>,
        options: QueryOptions,
    ) -> OpencgaResult<RestResponse> {
        info!("Updating files {}", files);
        let endpoint = Endpoint::new("update").query_id(require("files", files)?);
        self.resource.post(endpoint, data, options).await
    }

    pub async fn update_annotations(
        &self,
        file: &str,
        annotation_set: &str,
        data: Option<&Value>,
        options: QueryOptions,
    ) -> OpencgaResult<RestResponse> {
        info!("Updating annotations of {} in file {}", annotation_set, file);
        let endpoint = Endpoint::new("annotations/update")
            .query_id(require("file", file)?)
            .subcategory("annotationSets")
            .second_query_id(require("annotation_set", annotation_set)?);
        self.resource.post(endpoint, data, options).await
    }

    /// Download the raw contents of a file
    pub async fn download(&self, file: &str, options: QueryOptions) -> OpencgaResult<Bytes> {
        info!("Downloading file {}", file);
        let endpoint = Endpoint::new("download").query_id(require("file", file)?);
        self.resource.get_bytes(endpoint, options).await
    }

    /// Filter lines of a file (`pattern`, `ignoreCase`, `maxCount` options)
    pub async fn grep(&self, file: &str, options: QueryOptions) -> OpencgaResult<RestResponse> {
        let endpoint = Endpoint::new("grep").query_id(require("file", file)?);
        self.resource.get(endpoint, options).await
    }

    /// First lines of a file (`offset`, `lines` options)
    pub async fn head(&self, file: &str, options: QueryOptions) -> OpencgaResult<RestResponse> {
        let endpoint = Endpoint::new("head").query_id(require("file", file)?);
        self.resource.get(endpoint, options).await
    }

    /// Base64 encoded image file
    pub async fn image(&self, file: &str, options: QueryOptions) -> OpencgaResult<RestResponse> {
        let endpoint = Endpoint::new("image").query_id(require("file", file)?);
        self.resource.get(endpoint, options).await
    }

    /// Refresh the metadata of a file or folder
    pub async fn refresh(&self, file: &str, options: QueryOptions) -> OpencgaResult<RestResponse> {
        info!("Refreshing file {}", file);
        let endpoint = Endpoint::new("refresh").query_id(require("file", file)?);
        self.resource.get(endpoint, options).await
    }

    /// Last lines of a file (`lines` option)
    pub async fn tail(&self, file: &str, options: QueryOptions) -> OpencgaResult<RestResponse> {
        let endpoint = Endpoint::new("tail").query_id(require("file", file)?);
        self.resource.get(endpoint, options).await
    }

    /// Files in a folder
    pub async fn list(&self, folder: &str, options: QueryOptions) -> OpencgaResult<RestResponse> {
        let endpoint = Endpoint::new("list").query_id(require("folder", folder)?);
        self.resource.get(endpoint, options).await
    }

    /// Folder tree, `maxDepth` levels deep
    pub async fn tree(&self, folder: &str, options: QueryOptions) -> OpencgaResult<RestResponse> {
        let endpoint = Endpoint::new("tree").query_id(require("folder", folder)?);
        self.resource.get(endpoint, options).await
    }
}
