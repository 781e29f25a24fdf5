//! Styles part parsing.
use quick_xml::events::Event;
use quick_xml::Reader;

use crate::common::error::Result;
use crate::docx::enums::StyleType;
use crate::docx::styles::{Style, Styles};

use super::attr;
use super::body::{parse_paragraph_properties, parse_run_properties};

/// Parse `word/styles.xml` into a style table. Styles without an ID are
/// skipped; everything else is tolerated.
pub(crate) fn parse_styles(src: &str) -> Result<Styles> {
    let mut reader = Reader::from_str(src);
    let mut styles = Styles::empty();
    loop {
        match reader.read_event()? {
            Event::Start(e) if e.local_name().as_ref() == b"style" => {
                let style_type = attr(&e, "type")
                    .and_then(|t| StyleType::from_xml(&t))
                    .unwrap_or_default();
                let id = attr(&e, "styleId");
                let mut style = Style {
                    id: id.clone().unwrap_or_default(),
                    style_type,
                    ..Style::default()
                };
                loop {
                    match reader.read_event()? {
                        Event::Start(inner) => match inner.local_name().as_ref() {
                            b"pPr" => style.paragraph = parse_paragraph_properties(&mut reader)?,
                            b"rPr" => style.run = parse_run_properties(&mut reader)?,
                            _ => {
                                let end = inner.to_end().into_owned();
                                reader.read_to_end(end.name())?;
                            }
                        },
                        Event::Empty(inner) => match inner.local_name().as_ref() {
                            b"name" => style.name = attr(&inner, "val").unwrap_or_default(),
                            b"basedOn" => style.based_on = attr(&inner, "val"),
                            b"next" => style.next = attr(&inner, "val"),
                            _ => {}
                        },
                        Event::End(end) if end.local_name().as_ref() == b"style" => break,
                        Event::Eof => break,
                        _ => {}
                    }
                }
                if id.is_some() {
                    styles.add(style);
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }
    Ok(styles)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_style_definitions() {
        let xml = r#"<w:styles xmlns:w="x">
          <w:style w:type="paragraph" w:styleId="Heading1">
            <w:name w:val="heading 1"/>
            <w:basedOn w:val="Normal"/>
            <w:next w:val="Normal"/>
            <w:rPr><w:b/><w:sz w:val="32"/></w:rPr>
          </w:style>
          <w:style w:type="character" w:styleId="Emphasis">
            <w:name w:val="Emphasis"/>
            <w:rPr><w:i/></w:rPr>
          </w:style>
        </w:styles>"#;
        let styles = parse_styles(xml).unwrap();
        let h1 = styles.get("Heading1").unwrap();
        assert_eq!(h1.name, "heading 1");
        assert_eq!(h1.based_on.as_deref(), Some("Normal"));
        assert_eq!(h1.run.bold, Some(true));
        assert_eq!(h1.run.font_size, Some(32));
        assert_eq!(
            styles.get("Emphasis").unwrap().style_type,
            StyleType::Character
        );
    }

    #[test]
    fn style_without_id_is_skipped() {
        let xml = r#"<w:styles>
          <w:style w:type="paragraph"><w:name w:val="anonymous"/></w:style>
        </w:styles>"#;
        let styles = parse_styles(xml).unwrap();
        assert!(styles.styles.is_empty());
    }
}
