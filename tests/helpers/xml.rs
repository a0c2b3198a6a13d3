//! Reading CSHARPML back with quick-xml.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

/// A start or empty element with its unescaped attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    /// Number of open ancestors, the root element included.
    pub depth: usize,
}

impl Element {
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

fn element(start: &BytesStart<'_>, depth: usize) -> Element {
    let name = String::from_utf8(start.name().as_ref().to_vec()).unwrap();
    let attributes = start
        .attributes()
        .map(|attr| {
            let attr = attr.unwrap();
            let key = String::from_utf8(attr.key.as_ref().to_vec()).unwrap();
            let value = attr.unescape_value().unwrap().into_owned();
            (key, value)
        })
        .collect();
    Element {
        name,
        attributes,
        depth,
    }
}

/// Parse `xml`, panicking unless it is well formed, and return every
/// element in document order.
pub fn elements(xml: &str) -> Vec<Element> {
    let mut reader = Reader::from_str(xml);
    let mut open: Vec<String> = Vec::new();
    let mut out = Vec::new();
    let mut roots = 0;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => {
                if open.is_empty() {
                    roots += 1;
                }
                out.push(element(e, open.len()));
                open.push(String::from_utf8(e.name().as_ref().to_vec()).unwrap());
            }
            Ok(Event::Empty(ref e)) => {
                assert!(!open.is_empty(), "empty element outside the root");
                out.push(element(e, open.len()));
            }
            Ok(Event::End(ref e)) => {
                let name = String::from_utf8(e.name().as_ref().to_vec()).unwrap();
                assert_eq!(open.pop().as_deref(), Some(name.as_str()));
            }
            Ok(Event::Text(ref t)) => {
                let text = String::from_utf8(t.to_vec()).unwrap();
                assert!(text.trim().is_empty(), "unexpected text {text:?}");
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => panic!("malformed XML at {}: {e}", reader.error_position()),
        }
    }

    assert!(open.is_empty(), "unclosed elements: {open:?}");
    assert_eq!(roots, 1, "expected a single root element");
    out
}

/// Names of the elements below the `Project` root, excluding positions and
/// the `Filtered` marker.
pub fn structure(xml: &str) -> Vec<String> {
    elements(xml)
        .into_iter()
        .filter(|e| e.depth > 0 && e.name != "SourcePosition" && e.name != "Filtered")
        .map(|e| e.name)
        .collect()
}
