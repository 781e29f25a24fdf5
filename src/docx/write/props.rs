//! Package property parts, `docProps/core.xml` and `docProps/app.xml`.
use std::fmt::Write as FmtWrite;

use chrono::{SecondsFormat, Utc};

use crate::common::error::Result;
use crate::common::xml::escape_xml;
use crate::docx::document::Document;

use super::XML_DECL;

const CORE_NS: &str = "http://schemas.openxmlformats.org/package/2006/metadata/core-properties";
const DC_NS: &str = "http://purl.org/dc/elements/1.1/";
const DCTERMS_NS: &str = "http://purl.org/dc/terms/";
const XSI_NS: &str = "http://www.w3.org/2001/XMLSchema-instance";
const APP_NS: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/extended-properties";

fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

pub(crate) fn generate_core_props_xml(doc: &Document) -> Result<String> {
    let props = &doc.properties;
    let created = props.created.clone().unwrap_or_else(now_iso);
    let modified = props.modified.clone().unwrap_or_else(|| created.clone());

    let mut xml = String::with_capacity(768);
    xml.push_str(XML_DECL);
    write!(
        xml,
        "<cp:coreProperties xmlns:cp=\"{}\" xmlns:dc=\"{}\" xmlns:dcterms=\"{}\" xmlns:xsi=\"{}\">",
        CORE_NS, DC_NS, DCTERMS_NS, XSI_NS
    )?;
    if let Some(title) = &props.title {
        write!(xml, "<dc:title>{}</dc:title>", escape_xml(title))?;
    }
    if let Some(subject) = &props.subject {
        write!(xml, "<dc:subject>{}</dc:subject>", escape_xml(subject))?;
    }
    write!(xml, "<dc:creator>{}</dc:creator>", escape_xml(&props.creator))?;
    if let Some(keywords) = &props.keywords {
        write!(
            xml,
            "<cp:keywords>{}</cp:keywords>",
            escape_xml(keywords)
        )?;
    }
    if let Some(description) = &props.description {
        write!(
            xml,
            "<dc:description>{}</dc:description>",
            escape_xml(description)
        )?;
    }
    if let Some(by) = &props.last_modified_by {
        write!(
            xml,
            "<cp:lastModifiedBy>{}</cp:lastModifiedBy>",
            escape_xml(by)
        )?;
    }
    write!(xml, "<cp:revision>{}</cp:revision>", props.revision)?;
    write!(
        xml,
        "<dcterms:created xsi:type=\"dcterms:W3CDTF\">{}</dcterms:created>",
        escape_xml(&created)
    )?;
    write!(
        xml,
        "<dcterms:modified xsi:type=\"dcterms:W3CDTF\">{}</dcterms:modified>",
        escape_xml(&modified)
    )?;
    xml.push_str("</cp:coreProperties>");
    Ok(xml)
}

pub(crate) fn generate_app_props_xml(doc: &Document) -> Result<String> {
    let props = &doc.properties;
    let mut xml = String::with_capacity(512);
    xml.push_str(XML_DECL);
    write!(xml, "<Properties xmlns=\"{}\">", APP_NS)?;
    write!(
        xml,
        "<Application>{}</Application>",
        escape_xml(&props.application)
    )?;
    write!(xml, "<Paragraphs>{}</Paragraphs>", doc.paragraph_count())?;
    let words: usize = doc
        .body
        .paragraphs()
        .map(|p| p.text().split_whitespace().count())
        .sum();
    write!(xml, "<Words>{}</Words>", words)?;
    let characters: usize = doc.body.paragraphs().map(|p| p.text().chars().count()).sum();
    write!(xml, "<Characters>{}</Characters>", characters)?;
    if let Some(company) = &props.company {
        write!(xml, "<Company>{}</Company>", escape_xml(company))?;
    }
    xml.push_str("</Properties>");
    Ok(xml)
}
