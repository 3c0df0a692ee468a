use crate::dom::Selection;

/// Text of the selection with its element children's text cut out.
///
/// The children's concatenated text is removed as a plain substring; if it is
/// not contiguous inside the parent text nothing is removed.
pub fn own_text(selection: &Selection<'_>) -> String {
    let full = selection.text();
    let children = selection.children().text();
    if children.is_empty() {
        full
    } else {
        full.replace(&children, "")
    }
}

pub fn strip_newlines(text: &str) -> String {
    text.replace('\n', "")
}

/// Drops newlines and spaces, leaving a bare token such as a number
pub fn compact(text: &str) -> String {
    text.replace(['\n', ' '], "")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::Document;

    #[test]
    fn test_own_text_removes_child_text() {
        let doc = Document::parse("<h1 id='t'>Nice Room\n<span>View photos</span></h1>");
        let heading = doc.find("h1#t").unwrap();
        assert_eq!(own_text(&heading), "Nice Room\n");
    }

    #[test]
    fn test_own_text_without_children() {
        let doc = Document::parse("<p id='t'> plain </p>");
        assert_eq!(own_text(&doc.find("p#t").unwrap()), " plain ");
    }

    #[test]
    fn test_own_text_non_contiguous_children_left_alone() {
        // "ab" is not a substring of "a-b-"
        let doc = Document::parse("<p id='t'><i>a</i>-<i>b</i>-</p>");
        assert_eq!(own_text(&doc.find("p#t").unwrap()), "a-b-");
    }

    #[test]
    fn test_compact() {
        assert_eq!(compact("\n   6475694\n  "), "6475694");
        assert_eq!(strip_newlines("a\nb\n"), "ab");
    }
}
