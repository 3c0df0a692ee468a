use super::activity::inject_activeness;
use super::error::{InjectError, Layout, Result};
use super::text::{own_text, strip_newlines};
use crate::dom::Document;
use crate::models::Ad;

/// Gallery heading of an active listing; its child holds the gallery hint
const ACTIVE_TITLE_PATH: [&str; 6] = [
    "div#main_content",
    "div#main_column",
    ".panel.panel-default",
    ".panel-body",
    "div.noprint.showOnGalleryOnly",
    "h1#sliderTopTitle",
];

const DEACTIVATED_TITLE: &str = "h1#sliderTopTitle.headline.headline-detailed-view-title";

/// Injects the listing title. An empty title is an error, never a value.
pub fn inject_title<A: Ad + ?Sized>(ad: &mut A, doc: &Document) -> Result<()> {
    let active = inject_activeness(ad, doc);

    let title = if active {
        let mut heading = doc.find(ACTIVE_TITLE_PATH[0])?;
        for css in &ACTIVE_TITLE_PATH[1..] {
            heading = heading.find(css)?;
        }
        strip_newlines(&own_text(&heading)).trim().to_string()
    } else {
        doc.find(DEACTIVATED_TITLE)?.text().trim().to_string()
    };

    if title.is_empty() {
        return Err(InjectError::EmptyField {
            field: "title",
            layout: Layout::from_active(active),
        });
    }

    ad.set_title(title);
    Ok(())
}
