//! Services module
//!
//! External collaborators the bot writes to. Completed surveys leave the
//! process through a [`ResponseSink`].

pub mod google_auth;
pub mod sheets;

// Re-export commonly used services
pub use google_auth::{ServiceAccountAuth, ServiceAccountKey};
pub use sheets::GoogleSheetsService;

use async_trait::async_trait;
use crate::models::ResponseRow;
use crate::utils::errors::Result;

/// Append-only destination for completed survey responses
///
/// One call per completed survey. Implementations do not retry; errors are
/// returned to the caller unchanged.
#[async_trait]
pub trait ResponseSink: Send + Sync {
    async fn append_row(&self, row: &ResponseRow) -> Result<()>;
}
