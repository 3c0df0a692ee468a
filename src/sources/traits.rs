use crate::sources::types::Page;
use anyhow::Result;
use async_trait::async_trait;

/// Common trait for anything that hands out listing pages
/// (local snapshots today, other front ends later)
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Load every page this source knows about
    async fn load(&self) -> Result<Vec<Page>>;

    /// Get the name of the page source
    fn source_name(&self) -> &'static str;
}
