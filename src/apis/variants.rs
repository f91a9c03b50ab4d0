use crate::{
    client::OpencgaClient,
    error::{require, OpencgaResult},
    models::RestResponse,
    resource::{Endpoint, QueryOptions, ResourceClient},
};
use log::info;
use serde_json::Value;

/// Variant analysis web services (`/{apiVersion}/analysis/variant`)
///
/// Query filters (`region`, `sample`, `gene`, `ct`, ...) are plain options;
/// list filters are comma joined, see [`QueryOptions::set_list`].
pub struct VariantApi<'a> {
    resource: ResourceClient<'a>,
}

impl<'a> VariantApi<'a> {
    pub const CATEGORY: &'static str = "analysis/variant";

    pub fn new(client: &'a OpencgaClient) -> Self {
        Self {
            resource: ResourceClient::new(client, Self::CATEGORY),
        }
    }

    /// Filter and fetch variants from indexed VCF files
    pub async fn query(&self, options: QueryOptions) -> OpencgaResult<RestResponse> {
        info!("Querying variants");
        self.resource.get(Endpoint::new("query"), options).await
    }

    /// Variant annotation metadata of any saved version
    pub async fn metadata_annotation(&self, options: QueryOptions) -> OpencgaResult<RestResponse> {
        self.resource.get(Endpoint::new("annotation/metadata"), options).await
    }

    /// Compute variant stats for any cohort and any set of variants
    pub async fn run_stats(&self, data: Option<&Value>, options: QueryOptions) -> OpencgaResult<RestResponse> {
        info!("Submitting variant stats job");
        self.resource.post(Endpoint::new("stats/run"), data, options).await
    }

    /// Export calculated variant stats and frequencies
    pub async fn export_stats(&self, data: Option<&Value>, options: QueryOptions) -> OpencgaResult<RestResponse> {
        info!("Submitting variant stats export job");
        self.resource.post(Endpoint::new("stats/export"), data, options).await
    }

    /// Possible genotypes of the members of a family
    ///
    /// # Arguments
    /// * `mode_of_inheritance` - e.g. MONOALLELIC, BIALLELIC, XLINKED_MONOALLELIC
    pub async fn genotypes_family(
        &self,
        mode_of_inheritance: &str,
        mut options: QueryOptions,
    ) -> OpencgaResult<RestResponse> {
        info!("Computing family genotypes ({})", mode_of_inheritance);
        options.insert("modeOfInheritance", require("mode_of_inheritance", mode_of_inheritance)?);
        self.resource.get(Endpoint::new("family/genotypes"), options).await
    }

    /// Filter and export variants to a file
    pub async fn export(&self, data: Option<&Value>, options: QueryOptions) -> OpencgaResult<RestResponse> {
        info!("Submitting variant export job");
        self.resource.post(Endpoint::new("export"), data, options).await
    }

    pub async fn metadata(&self, options: QueryOptions) -> OpencgaResult<RestResponse> {
        self.resource.get(Endpoint::new("metadata"), options).await
    }

    /// Calculate and fetch aggregation stats (facets in the `fields` option)
    pub async fn aggregation_stats(&self, options: QueryOptions) -> OpencgaResult<RestResponse> {
        info!("Fetching variant aggregation stats");
        self.resource.get(Endpoint::new("aggregationStats"), options).await
    }

    /// Index variant files into the variant storage
    pub async fn index(&self, data: Option<&Value>, options: QueryOptions) -> OpencgaResult<RestResponse> {
        info!("Submitting variant index job");
        self.resource.post(Endpoint::new("index"), data, options).await
    }

    /// Remove variant files (`file` option) from the variant storage
    pub async fn delete_file(&self, options: QueryOptions) -> OpencgaResult<RestResponse> {
        info!("Removing variant files");
        self.resource.delete(Endpoint::new("file/delete"), options).await
    }

    /// Get samples given a set of variants
    pub async fn run_sample(&self, data: Option<&Value>, options: QueryOptions) -> OpencgaResult<RestResponse> {
        info!("Submitting sample variant filter job");
        self.resource.post(Endpoint::new("sample/run"), data, options).await
    }

    /// Sample data of one variant (`variant` option)
    pub async fn query_sample(&self, options: QueryOptions) -> OpencgaResult<RestResponse> {
        self.resource.get(Endpoint::new("sample/query"), options).await
    }

    /// Compute sample variant stats
    pub async fn run_sample_stats(&self, data: Option<&Value>, options: QueryOptions) -> OpencgaResult<RestResponse> {
        info!("Submitting sample variant stats job");
        self.resource.post(Endpoint::new("sample/stats/run"), data, options).await
    }

    /// Read sample variant stats (`sample` option, up to 100 ids)
    pub async fn info_sample_stats(&self, options: QueryOptions) -> OpencgaResult<RestResponse> {
        self.resource.get(Endpoint::new("sample/stats/info"), options).await
    }

    pub async fn delete_sample_stats(&self, options: QueryOptions) -> OpencgaResult<RestResponse> {
        info!("Deleting sample variant stats");
        self.resource.delete(Endpoint::new("sample/stats/delete"), options).await
    }

    /// Compute cohort variant stats
    pub async fn run_cohort_stats(&self, data: Option<&Value>, options: QueryOptions) -> OpencgaResult<RestResponse> {
        info!("Submitting cohort variant stats job");
        self.resource.post(Endpoint::new("cohort/stats/run"), data, options).await
    }

    /// Read cohort variant stats (`cohort` option, up to 100 ids)
    pub async fn info_cohort_stats(&self, options: QueryOptions) -> OpencgaResult<RestResponse> {
        self.resource.get(Endpoint::new("cohort/stats/info"), options).await
    }

    pub async fn delete_cohort_stats(&self, options: QueryOptions) -> OpencgaResult<RestResponse> {
        info!("Deleting cohort variant stats");
        self.resource.delete(Endpoint::new("cohort/stats/delete"), options).await
    }

    /// Genome wide association study between two cohorts
    pub async fn run_gwas(&self, data: Option<&Value>, options: QueryOptions) -> OpencgaResult<RestResponse> {
        info!("Submitting GWAS job");
        self.resource.post(Endpoint::new("gwas/run"), data, options).await
    }

    pub async fn run_plink(&self, data: Option<&Value>, options: QueryOptions) -> OpencgaResult<RestResponse> {
        info!("Submitting plink job");
        self.resource.post(Endpoint::new("plink/run"), data, options).await
    }

    pub async fn run_rvtests(&self, data: Option<&Value>, options: QueryOptions) -> OpencgaResult<RestResponse> {
        info!("Submitting rvtests job");
        self.resource.post(Endpoint::new("rvtests/run"), data, options).await
    }

    /// Query variant annotations of any saved version
    pub async fn query_annotation(&self, options: QueryOptions) -> OpencgaResult<RestResponse> {
        self.resource.get(Endpoint::new("annotation/query"), options).await
    }
}
