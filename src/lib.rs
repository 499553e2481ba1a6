//! # Hierarchy Store - Account / Container / Object storage
//!
//! A small storage service that keeps a three-level hierarchy on the local
//! filesystem: accounts and containers are directories, objects are files.
//! Built on Clean Architecture principles.
//!
//! ## Architecture Layers
//!
//! - **Domain**: Validated path segments, hierarchy levels, operation outcomes
//! - **Application**: Use cases and the `HierarchyStore` port
//! - **Infrastructure**: Path resolution and the local filesystem adapter
//! - **API**: HTTP handlers, multipart decoding and middleware
//!
//! ## Example Usage
//!
//! ```no_run
//! use hierarchy_store::{api::create_router, application::builder::ApplicationBuilder, Config};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let state = ApplicationBuilder::new(Config::with_storage_root("./storage"))
//!     .with_storage()
//!     .await?
//!     .build()?;
//! let app = create_router(state);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

// Re-export key types explicitly to avoid ambiguity
pub use api::errors as api_errors;
pub use application::{dto, ports, use_cases};
pub use config::{Config, LogFormat};
pub use domain::errors as domain_errors;
pub use domain::value_objects;
