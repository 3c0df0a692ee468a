use crate::models::AdKind;
use chrono::{DateTime, Utc};
use clap::Parser;
use std::path::PathBuf;

/// Raw listing page as handed over by a page source
#[derive(Debug, Clone)]
pub struct Page {
    /// Where the page came from (file path, URL, ...)
    pub origin: String,
    pub html: String,
    pub loaded_at: DateTime<Utc>,
}

/// Parameters for one injector run
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "wg-injector")]
#[command(version)]
#[command(about = "Extract listing fields from saved WG-Gesucht pages")]
pub struct RunParams {
    /// Record shape to fill
    #[arg(short, long, value_enum, default_value = "offer")]
    pub kind: AdKind,

    /// Print one JSON object per line instead of pretty output
    #[arg(long)]
    pub compact: bool,

    /// HTML snapshots to read
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,
}
