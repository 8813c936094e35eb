//! # Focus Client
//!
//! Typed data access for the Focus school dashboard.
//!
//! This crate provides:
//! - [`DataClient`], one async method per entity operation
//! - A remote source speaking to the backend over HTTP
//! - A fallback source answering from a bundled demo dataset
//! - The search policy both sources share
//!
//! # Example
//!
//! ```ignore
//! use focus_client::DataClient;
//! use focus_config::ApiConfig;
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = DataClient::new(&ApiConfig::from_env()).unwrap();
//!
//!     // No credential: answered from the bundled dataset
//!     let students = client.get_students(None, Some("10th")).await.unwrap();
//! }
//! ```

pub mod client;
pub mod dataset;
pub mod error;
pub mod fallback;
pub mod policy;
pub mod remote;
pub mod resource;
pub mod search;
pub mod source;

pub use client::{DEFAULT_ACTIVITY_LIMIT, DataClient};
pub use dataset::FallbackDataset;
pub use error::{AuthError, ClientError};
pub use fallback::FallbackSource;
pub use policy::{Origin, Sourced, with_fallback};
pub use remote::{AuthorizedRemote, RemoteSource};
pub use resource::{Classes, Resource, Students, Teachers};
pub use search::{Searchable, filter_by_query, matches_query};
pub use source::DataSource;
