use crate::sources::traits::PageSource;
use crate::sources::types::Page;
use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::Utc;
use std::path::PathBuf;
use tracing::{debug, info};

/// Reads listing pages saved to disk
pub struct FileSource {
    paths: Vec<PathBuf>,
}

impl FileSource {
    pub fn new(paths: Vec<PathBuf>) -> Self {
        Self { paths }
    }
}

#[async_trait]
impl PageSource for FileSource {
    async fn load(&self) -> Result<Vec<Page>> {
        let mut pages = Vec::with_capacity(self.paths.len());

        for path in &self.paths {
            let html = tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("Failed to read {}", path.display()))?;
            debug!("Read {} bytes from {}", html.len(), path.display());

            pages.push(Page {
                origin: path.display().to_string(),
                html,
                loaded_at: Utc::now(),
            });
        }

        info!("Loaded {} page(s) from disk", pages.len());
        Ok(pages)
    }

    fn source_name(&self) -> &'static str {
        "file"
    }
}
