//! Null attributes in XML documents.
//!
//! The API marks a null attribute with a `nil` attribute on the element,
//! `<closed_at nil="nil"></closed_at>` or `<deleted_at nil="nil"/>`. Such
//! elements are dropped before deserialization so they read as absent
//! (`None`) rather than as an empty string.

use std::borrow::Cow;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

/// Returns `body` without its nil-marked elements.
pub(crate) fn strip_nil(body: &[u8]) -> Result<Cow<'_, [u8]>, quick_xml::Error> {
    if !contains(body, b"nil=") {
        return Ok(Cow::Borrowed(body));
    }

    let mut reader = Reader::from_reader(body);
    let mut kept = Vec::with_capacity(body.len());
    let mut copied = 0;
    loop {
        let start = reader.buffer_position() as usize;
        match reader.read_event()? {
            Event::Start(e) if is_nil(&e) => {
                reader.read_to_end(e.name())?;
            }
            Event::Empty(e) if is_nil(&e) => {}
            Event::Eof => break,
            _ => continue,
        }
        kept.extend_from_slice(&body[copied..start]);
        copied = reader.buffer_position() as usize;
    }
    kept.extend_from_slice(&body[copied..]);
    Ok(Cow::Owned(kept))
}

fn is_nil(element: &BytesStart<'_>) -> bool {
    element
        .attributes()
        .flatten()
        .any(|attr| attr.key.into_inner() == b"nil" && matches!(&*attr.value, b"nil" | b"true"))
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|window| window == needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stripped(xml: &str) -> String {
        String::from_utf8(strip_nil(xml.as_bytes()).unwrap().into_owned()).unwrap()
    }

    #[test]
    fn test_document_without_nil_is_borrowed() {
        let xml = b"<account><account_code>a</account_code></account>";
        assert!(matches!(strip_nil(xml).unwrap(), Cow::Borrowed(_)));
    }

    #[test]
    fn test_nil_elements_are_removed() {
        assert_eq!(
            stripped(
                r#"<account><account_code>a</account_code><closed_at nil="nil"></closed_at><email>e</email><deleted_at nil="nil"/></account>"#
            ),
            "<account><account_code>a</account_code><email>e</email></account>"
        );
    }

    #[test]
    fn test_nested_nil_elements_are_removed() {
        assert_eq!(
            stripped(r#"<plan><setup_fee_in_cents><USD nil="nil"></USD></setup_fee_in_cents></plan>"#),
            "<plan><setup_fee_in_cents></setup_fee_in_cents></plan>"
        );
    }

    #[test]
    fn test_nil_word_in_text_is_kept() {
        let xml = "<note><message>nil=\"nil\" is how nulls look</message></note>";
        assert_eq!(stripped(xml), xml);
    }
}
