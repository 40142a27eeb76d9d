//! Reasoner implementations: a deterministic offline analyst and a thin
//! HTTP client for a hosted reasoning process.

pub mod http;
pub mod local;

pub use http::HttpReasoner;
pub use local::LocalReasoner;
