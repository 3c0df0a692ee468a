use anyhow::Result;
use clap::Parser;
use serde::Serialize;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use wg_injector::injector::Pipeline;
use wg_injector::models::{Ad, AdKind, Extraction};
use wg_injector::sources::{FileSource, PageSource, RunParams};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let params = RunParams::parse();

    let source = FileSource::new(params.inputs.clone());
    info!("Loading pages from {} source...", source.source_name());
    let pages = source.load().await?;

    let mut failed = 0;
    for page in &pages {
        let ok = match params.kind {
            AdKind::Offer => emit(Pipeline::offer().extract(page), !params.compact)?,
            AdKind::Request => emit(Pipeline::request().extract(page), !params.compact)?,
        };
        if !ok {
            failed += 1;
        }
    }

    info!("Processed {} page(s), {} with errors", pages.len(), failed);
    Ok(())
}

/// Print one extraction as JSON; returns whether it succeeded
fn emit<A: Ad + Serialize>(extraction: Extraction<A>, pretty: bool) -> Result<bool> {
    if let Some(error) = &extraction.error {
        warn!("{}: {}", extraction.origin, error);
    } else {
        info!(
            "{}: ad {} \"{}\"",
            extraction.origin,
            extraction.ad.ad_id(),
            extraction.ad.title()
        );
    }

    let json = if pretty {
        serde_json::to_string_pretty(&extraction)?
    } else {
        serde_json::to_string(&extraction)?
    };
    println!("{}", json);

    Ok(extraction.error.is_none())
}
