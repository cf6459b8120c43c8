//! REST call core: request construction, execution, failure taxonomy

pub mod client;
pub mod error;
pub mod request;

pub use client::{CallResult, HubstaffClient, DEFAULT_BASE_URL};
pub use error::CallError;
pub use request::{Args, CallRequest};
