pub mod studies;
pub mod cohorts;
pub mod panels;
pub mod samples;
pub mod files;
pub mod variants;
pub mod variant_operations;

// Re-export all APIs
pub use studies::StudyApi;
pub use cohorts::CohortApi;
pub use panels::PanelApi;
pub use samples::SampleApi;
pub use files::FileApi;
pub use variants::VariantApi;
pub use variant_operations::VariantOperationApi;
