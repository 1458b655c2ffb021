//! Clients for the remote analysis service
//!
//! - [`AnalysisBackend`] is the transport seam (HTTP in production, mocks in tests)
//! - [`AnalysisClient`] submits manuscripts and parses the answers
//! - [`HistoryClient`] lists past manuscripts

mod analysis;
mod history;
mod http;
mod traits;

pub use analysis::AnalysisClient;
pub use history::{HistoryClient, HistoryFetch};
pub use http::HttpBackend;
pub use traits::AnalysisBackend;

#[cfg(test)]
pub use traits::MockAnalysisBackend;
