//! Domain types and models
//!
//! Wire models for the Graph API resources the client reads, plus the small
//! request-side vocabulary shared with the executor.

pub mod account_linking;
pub mod graph_error;
pub mod http;
pub mod profile;

pub use account_linking::AccountLinking;
pub use graph_error::GraphApiError;
pub use http::HttpMethod;
pub use profile::Profile;
