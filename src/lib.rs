/*
 * OpenCGA REST client - catalog and variant analysis web services
 */

// Internal modules
mod client;
pub mod models;  // Make models public
mod apis;
mod error;
mod auth;
mod config;
mod resource;

// Re-export public types and interfaces
pub use client::OpencgaClient;
pub use models::*;
pub use apis::*;
pub use error::{OpencgaError, OpencgaResult};
pub use auth::{Authentication, BearerAuth, NoAuth};
pub use config::{ClientConfig, DEFAULT_API_VERSION};
pub use resource::{Endpoint, QueryOptions, ResourceClient};

// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        OpencgaClient, ClientConfig,
        BearerAuth, NoAuth,
        OpencgaError, OpencgaResult,
        Endpoint, QueryOptions,
        // Common model types
        RestResponse, QueryResult, Event, EventType,
    };
}
