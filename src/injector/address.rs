use super::error::Result;
use crate::dom::Document;
use crate::models::Offer;
use tracing::debug;

const ADDRESS_PATH: [&str; 6] = [
    "div#main_content.row",
    "div#main_column.col-md-8",
    "div.panel-body",
    "div.row",
    "div.col-sm-4.mb10",
    "a",
];

/// Injects the free-text address of an offer as comma-joined lines.
///
/// Reads the active layout only. A missing address block yields an empty
/// address rather than an error.
pub fn inject_address(offer: &mut Offer, doc: &Document) -> Result<()> {
    let mut anchor = doc.find(ADDRESS_PATH[0])?;
    for css in &ADDRESS_PATH[1..] {
        anchor = anchor.find(css)?;
    }

    let raw = anchor.text();
    let lines: Vec<&str> = raw.trim_matches('\n').trim().split('\n').collect();
    debug!("Address block has {} line(s)", lines.len());

    let mut kept = Vec::with_capacity(lines.len());
    for (i, line) in lines.iter().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            debug!("Address line {} dropped", i);
        } else {
            debug!("Address line {}: {}", i, line);
            kept.push(line);
        }
    }

    offer.set_address(kept.join(", "));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::injector::fixtures::{ACTIVE_PAGE, DEACTIVATED_PAGE};
    use crate::models::Ad;
    use std::io;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::fmt::MakeWriter;

    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for LogBuffer {
        type Writer = LogBuffer;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    fn page_with_anchor(text: &str) -> String {
        format!(
            r##"<div id="main_content" class="row"><div id="main_column" class="col-md-8">
            <div class="panel-body"><div class="row"><div class="col-sm-4 mb10">
            <a href="#">{text}</a></div></div></div></div></div>"##
        )
    }

    #[test]
    fn test_address_lines_joined() {
        let doc = Document::parse(ACTIVE_PAGE);
        let mut offer = Offer::default();
        inject_address(&mut offer, &doc).unwrap();
        assert_eq!(offer.address(), "Wrangelstraße 12, 10997 Berlin Kreuzberg");
    }

    #[test]
    fn test_blank_lines_dropped_and_order_kept() {
        let doc = Document::parse(&page_with_anchor(" Main St\n\n  12345 Berlin \n"));
        let mut offer = Offer::default();
        inject_address(&mut offer, &doc).unwrap();
        assert_eq!(offer.address(), "Main St, 12345 Berlin");
    }

    #[test]
    fn test_each_line_is_logged() {
        let logs = LogBuffer::default();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(logs.clone())
            .finish();

        let doc = Document::parse(&page_with_anchor(" Main St\n\n  12345 Berlin \n"));
        let mut offer = Offer::default();
        tracing::subscriber::with_default(subscriber, || {
            inject_address(&mut offer, &doc).unwrap();
        });

        let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("Address block has 3 line(s)"));
        assert!(output.contains("Address line 0: Main St"));
        assert!(output.contains("Address line 1 dropped"));
        assert!(output.contains("Address line 2: 12345 Berlin"));
        assert_eq!(offer.address(), "Main St, 12345 Berlin");
    }

    #[test]
    fn test_whitespace_only_anchor_gives_empty_address() {
        let doc = Document::parse(&page_with_anchor("\n   \n\t\n"));
        let mut offer = Offer::default();
        inject_address(&mut offer, &doc).unwrap();
        assert_eq!(offer.address(), "");
    }

    #[test]
    fn test_rerun_keeps_address() {
        let doc = Document::parse(ACTIVE_PAGE);
        let mut offer = Offer::default();
        inject_address(&mut offer, &doc).unwrap();
        let first = offer.address().to_string();
        inject_address(&mut offer, &doc).unwrap();
        assert_eq!(offer.address(), first);
        assert_eq!(first, "Wrangelstraße 12, 10997 Berlin Kreuzberg");
    }

    #[test]
    fn test_missing_block_gives_empty_address() {
        let doc = Document::parse(DEACTIVATED_PAGE);
        let mut offer = Offer::default();
        inject_address(&mut offer, &doc).unwrap();
        assert_eq!(offer.address(), "");
    }

    #[test]
    fn test_address_ignores_activity() {
        let doc = Document::parse(ACTIVE_PAGE);
        let mut offer = Offer::default();
        inject_address(&mut offer, &doc).unwrap();
        assert!(!offer.is_active());
    }
}
