use async_trait::async_trait;

use crate::error::AppResult;

/// Source of the raw `<added>\t<deleted>\t<path>` change summary for the
/// working tree.
#[async_trait]
pub trait VersionControlService: Send + Sync {
    async fn numstat(&self) -> AppResult<String>;
}
