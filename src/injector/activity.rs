use crate::dom::Document;
use crate::models::Ad;
use tracing::{debug, warn};

/// Marker panel shown only on deactivated listings
const DEACTIVATED_PANEL: &str = ".panel.panel-deactivated";

/// Whether the page is in the active layout.
///
/// Only checks for the deactivated panel, so any page without it (including
/// one that is not a listing at all) counts as active.
pub fn detect_activity(doc: &Document) -> bool {
    match doc.find(DEACTIVATED_PANEL) {
        Ok(panel) => panel.text().is_empty(),
        Err(e) => {
            warn!("Activity check skipped: {}", e);
            true
        }
    }
}

/// Sets the activity flag of `ad` from the page and returns it
pub fn inject_activeness<A: Ad + ?Sized>(ad: &mut A, doc: &Document) -> bool {
    let active = detect_activity(doc);
    debug!("Listing is {}", if active { "active" } else { "deactivated" });
    ad.set_is_active(active);
    active
}
