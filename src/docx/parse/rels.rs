//! Relationship part parsing.
use quick_xml::events::Event;
use quick_xml::Reader;

use crate::common::error::Result;

use super::attr;

/// One entry from a `.rels` part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Relationship {
    pub id: String,
    pub reltype: String,
    pub target: String,
    pub external: bool,
}

/// Parse a relationships part. Entries missing any required attribute
/// are skipped.
pub(crate) fn parse_relationships(xml: &str) -> Result<Vec<Relationship>> {
    let mut reader = Reader::from_str(xml);
    let mut out = Vec::new();
    loop {
        match reader.read_event()? {
            Event::Empty(e) | Event::Start(e)
                if e.local_name().as_ref() == b"Relationship" =>
            {
                let (Some(id), Some(reltype), Some(target)) =
                    (attr(&e, "Id"), attr(&e, "Type"), attr(&e, "Target"))
                else {
                    continue;
                };
                let external = attr(&e, "TargetMode").as_deref() == Some("External");
                out.push(Relationship {
                    id,
                    reltype,
                    target,
                    external,
                });
            }
            Event::Eof => break,
            _ => {}
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_internal_and_external() {
        let xml = r#"<?xml version="1.0"?>
            <Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
              <Relationship Id="rId1" Type="http://x/styles" Target="styles.xml"/>
              <Relationship Id="rId5" Type="http://x/hyperlink" Target="https://example.com/?a=1&amp;b=2" TargetMode="External"/>
            </Relationships>"#;
        let rels = parse_relationships(xml).unwrap();
        assert_eq!(rels.len(), 2);
        assert!(!rels[0].external);
        assert!(rels[1].external);
        assert_eq!(rels[1].target, "https://example.com/?a=1&b=2");
    }

    #[test]
    fn entries_missing_attributes_are_skipped() {
        let xml = r#"<Relationships>
              <Relationship Id="rId1" Target="styles.xml"/>
              <Relationship Id="rId2" Type="t" Target="x.xml"/>
            </Relationships>"#;
        let rels = parse_relationships(xml).unwrap();
        assert_eq!(rels.len(), 1);
        assert_eq!(rels[0].id, "rId2");
    }
}
