//! Field injectors for WG-Gesucht listing pages.
//!
//! Each injector finds one field in a parsed page, cleans the text and writes
//! it into an [`Ad`](crate::models::Ad). Listings come in an active and a
//! deactivated layout; injectors that care re-detect the layout themselves.

pub mod activity;
pub mod ad_id;
pub mod address;
pub mod error;
pub mod pipeline;
pub mod text;
pub mod title;

#[cfg(test)]
mod fixtures;

pub use activity::{detect_activity, inject_activeness};
pub use ad_id::inject_ad_id;
pub use address::inject_address;
pub use error::{InjectError, Layout, Result};
pub use pipeline::{Inject, Pipeline};
pub use title::inject_title;
