use super::activity::inject_activeness;
use super::error::{InjectError, Result};
use super::text::{compact, own_text};
use crate::dom::Document;
use crate::models::Ad;
use std::num::NonZeroU64;
use tracing::debug;

/// Path from the document root to the "Ad ID" cells of an active listing
const ACTIVE_ID_PATH: [&str; 11] = [
    "div#main_content",
    "div#main_column",
    ".panel.panel-default",
    ".panel-body",
    ".row",
    ".col-xs-12",
    ".row",
    ".hidden-xs.hidden-sm",
    ".col-md-4",
    ".row",
    ".col-md-12",
];

/// Index of the cell holding the id among the matched cells
const ACTIVE_ID_CELL: usize = 1;

/// Injects the numeric listing id.
///
/// Active listings show the id as visible text next to a label; deactivated
/// ones only keep it in the canonical link, e.g.
/// `https://www.wg-gesucht.de/en/wg-zimmer-in-Berlin-Kreuzberg.6475694.html`.
pub fn inject_ad_id<A: Ad + ?Sized>(ad: &mut A, doc: &Document) -> Result<()> {
    let id = if inject_activeness(ad, doc) {
        active_ad_id(doc)?
    } else {
        canonical_ad_id(doc)?
    };
    ad.set_ad_id(id);
    Ok(())
}

fn active_ad_id(doc: &Document) -> Result<u64> {
    let mut cells = doc.find(ACTIVE_ID_PATH[0])?;
    for css in &ACTIVE_ID_PATH[1..] {
        cells = cells.find(css)?;
    }

    let cell = cells.slice(ACTIVE_ID_CELL, ACTIVE_ID_CELL + 1);
    if cell.is_empty() {
        return Err(InjectError::MissingField {
            field: "ad id",
            detail: format!("{} id cells on the page", cells.len()),
        });
    }

    parse_ad_id(&compact(&own_text(&cell)))
}

fn canonical_ad_id(doc: &Document) -> Result<u64> {
    let canonical = doc
        .find("link")?
        .filter(|link| link.value().attr("rel") == Some("canonical"));

    if canonical.len() != 1 {
        return Err(InjectError::AmbiguousSource {
            what: "canonical link",
            count: canonical.len(),
        });
    }

    let href = canonical.attr("href").ok_or_else(|| InjectError::MissingField {
        field: "ad id",
        detail: "canonical link has no href".to_string(),
    })?;
    debug!("Canonical href = {}", href);

    // ".../wg-zimmer-in-Berlin-Kreuzberg.6475694.html"
    let segments: Vec<&str> = href.split('.').collect();
    match segments.len().checked_sub(2).map(|i| segments[i]) {
        Some(id) => parse_ad_id(id),
        None => Err(InjectError::MissingField {
            field: "ad id",
            detail: format!("no id segment in canonical href {href:?}"),
        }),
    }
}

fn parse_ad_id(value: &str) -> Result<u64> {
    value
        .parse::<NonZeroU64>()
        .map(NonZeroU64::get)
        .map_err(|source| InjectError::Parse {
            field: "ad id",
            value: value.to_string(),
            source,
        })
}
