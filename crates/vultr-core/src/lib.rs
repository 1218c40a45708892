//! # vultr-core
//!
//! Endpoint descriptors and the generic request executor for the Vultr v2 API.
//!
//! Every remote operation is described by a static [`Endpoint`]. Calling one
//! means handing the descriptor and a parameter mapping to [`execute`] (or
//! [`VultrClient::execute`]), which shapes the HTTP request, sends it through a
//! [`Transport`], and normalizes the response.
//!
//! ```no_run
//! use serde_json::json;
//! use vultr_core::{Endpoint, Parameter, RequestType, ValueKind, VultrClient};
//!
//! static GET_BACKUP: Endpoint = Endpoint {
//!     name: "backups.get",
//!     url: "/backups/{backup-id}",
//!     request_type: RequestType::Get,
//!     api_key_required: true,
//!     parameters: &[Parameter::new("backup-id", ValueKind::String).path().required()],
//! };
//!
//! # async fn example() -> vultr_core::Result<()> {
//! let client = VultrClient::builder().with_api_key("my-key").build()?;
//! let params = json!({"backup-id": "abc123"});
//! let backup = client.execute(&GET_BACKUP, params.as_object()).await?;
//! println!("{backup:?}");
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`endpoint`] - Descriptor types
//! - [`config`] - Base URL and API key
//! - [`request`] - Request shaping (path, query, body)
//! - [`query`] - Query-string assembly
//! - [`transport`] - Transport seam and the reqwest implementation
//! - [`client`] - Executor, response normalization and client
//! - [`error`] - Error type

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod query;
pub mod request;
pub mod transport;

pub use client::{execute, normalize_response, settle, Outcome, VultrClient, VultrClientBuilder};
pub use config::{VultrConfig, DEFAULT_BASE_URL};
pub use endpoint::{Endpoint, Parameter, RequestType, ValueKind};
pub use error::{Error, Result};
pub use request::{build_request, HttpRequest, Params};
pub use transport::{HttpResponse, ReqwestTransport, Transport};
