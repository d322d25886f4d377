//! trialyx-common — Shared error taxonomy and the capped HTTP client used
//! by every Trialyx crate.

pub mod error;
pub mod http;

pub use error::{RegistryError, Result};
pub use http::RegistryHttpClient;
