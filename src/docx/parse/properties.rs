//! Property part parsing, `docProps/core.xml` and `docProps/app.xml`.
use quick_xml::events::Event;
use quick_xml::Reader;

use crate::common::error::Result;
use crate::docx::document::DocumentProperties;

/// Merge `docProps/core.xml` into the property set. Unknown elements are
/// ignored.
pub(crate) fn parse_core_props(src: &str, props: &mut DocumentProperties) -> Result<()> {
    let mut reader = Reader::from_str(src);
    let mut current: Option<Vec<u8>> = None;
    loop {
        match reader.read_event()? {
            Event::Start(e) => current = Some(e.local_name().as_ref().to_vec()),
            Event::Text(t) => {
                let Some(element) = &current else { continue };
                let text = t.unescape()?.into_owned();
                match element.as_slice() {
                    b"title" => props.title = Some(text),
                    b"subject" => props.subject = Some(text),
                    b"creator" => props.creator = text,
                    b"keywords" => props.keywords = Some(text),
                    b"description" => props.description = Some(text),
                    b"lastModifiedBy" => props.last_modified_by = Some(text),
                    b"revision" => {
                        if let Ok(n) = text.parse() {
                            props.revision = n;
                        }
                    }
                    b"created" => props.created = Some(text),
                    b"modified" => props.modified = Some(text),
                    _ => {}
                }
            }
            Event::End(_) => current = None,
            Event::Eof => break,
            _ => {}
        }
    }
    Ok(())
}

/// Merge `docProps/app.xml`. Only the application and company names are
/// kept; the statistics are recomputed at write time.
pub(crate) fn parse_app_props(src: &str, props: &mut DocumentProperties) -> Result<()> {
    let mut reader = Reader::from_str(src);
    let mut current: Option<Vec<u8>> = None;
    loop {
        match reader.read_event()? {
            Event::Start(e) => current = Some(e.local_name().as_ref().to_vec()),
            Event::Text(t) => {
                let Some(element) = &current else { continue };
                let text = t.unescape()?.into_owned();
                match element.as_slice() {
                    b"Application" => props.application = text,
                    b"Company" => props.company = Some(text),
                    _ => {}
                }
            }
            Event::End(_) => current = None,
            Event::Eof => break,
            _ => {}
        }
    }
    Ok(())
}
