//! Graph API plumbing: executor port, URL layout and response decoding

pub mod endpoints;
pub mod ports;
pub mod response;

pub use endpoints::GraphEndpoints;
pub use ports::{BufferedBody, GraphExecutor, GraphResponse, ResponseBody};
pub use response::{decode_response, read_outcome, GraphOutcome};
