//! End-to-end tests: document mutation, package serialization, and the
//! parse path, including full pack/unpack through the ZIP container.
use std::io::Write;

use vellum::docx::parse::parse_package;
use vellum::docx::write::write_package;
use vellum::docx::{Document, RevisionKind, RunContent, SemanticType};
use vellum::opc::{Container, ZipContainer};

/// Smallest payload the format sniffer recognizes as PNG.
const PNG_SIG_B64: &str = "iVBORw0KGgo=";

fn roundtrip(doc: &Document) -> Document {
    let parts = write_package(doc).unwrap();
    parse_package(&parts).unwrap()
}

#[test]
fn text_and_formatting_survive_roundtrip() {
    let mut doc = Document::new();
    doc.insert_paragraph(0, "plain text").unwrap();
    let para = doc.insert_paragraph(1, "formatted").unwrap();
    para.runs[0].properties.bold = Some(true);
    para.runs[0].properties.italic = Some(true);
    para.runs[0].properties.font_size = Some(28);
    para.runs[0].properties.color = Some("FF0000".to_string());

    let back = roundtrip(&doc);
    assert_eq!(back.text(), "plain text\nformatted");
    let para = back.body.paragraph(1).unwrap();
    assert_eq!(para.runs[0].properties.bold, Some(true));
    assert_eq!(para.runs[0].properties.italic, Some(true));
    assert_eq!(para.runs[0].properties.font_size, Some(28));
    assert_eq!(para.runs[0].properties.color.as_deref(), Some("FF0000"));
}

#[test]
fn special_characters_survive_roundtrip() {
    let mut doc = Document::new();
    doc.insert_paragraph(0, "A & B <C> \"quoted\" 'single'").unwrap();
    doc.insert_paragraph(1, "  leading and trailing  ").unwrap();

    let back = roundtrip(&doc);
    assert_eq!(
        back.body.paragraph(0).unwrap().text(),
        "A & B <C> \"quoted\" 'single'"
    );
    assert_eq!(
        back.body.paragraph(1).unwrap().text(),
        "  leading and trailing  "
    );
}

#[test]
fn paragraph_indices_stable_across_table_deletion() {
    let mut doc = Document::new();
    doc.insert_paragraph(0, "first").unwrap();
    doc.insert_table(0, 2, 2).unwrap();
    doc.insert_paragraph(1, "second").unwrap();
    assert_eq!(doc.paragraph_count(), 2);
    assert_eq!(doc.table_count(), 1);

    doc.delete_table(0).unwrap();
    assert_eq!(doc.body.paragraph(0).unwrap().text(), "first");
    assert_eq!(doc.body.paragraph(1).unwrap().text(), "second");

    doc.delete_paragraph(0).unwrap();
    assert_eq!(doc.body.paragraph(0).unwrap().text(), "second");
}

#[test]
fn table_with_merges_survives_roundtrip() {
    let mut doc = Document::new();
    doc.insert_table(0, 3, 3).unwrap();
    doc.update_cell(0, 0, 0, "header").unwrap();
    doc.update_cell(0, 1, 0, "left").unwrap();
    doc.merge_cells_horizontal(0, 0, 1, 3).unwrap();
    doc.merge_cells_vertical(0, 0, 2, 3).unwrap();

    let back = roundtrip(&doc);
    let table = back.body.table(0).unwrap();
    // horizontal merge: one surviving cell spanning the full grid
    assert_eq!(table.rows[0].cells.len(), 1);
    assert_eq!(table.rows[0].cells[0].grid_span, 3);
    assert_eq!(table.rows[0].cells[0].text(), "header");
    // vertical merge: restart on row 1, continue on row 2
    assert!(table.rows[1].cells[0].v_merge.is_some());
    assert!(table.rows[2].cells[0].v_merge.is_some());
    assert_eq!(table.rows[1].cells[0].text(), "left");
    assert_eq!(table.column_count(), 3);
}

#[test]
fn hyperlinks_and_bookmarks_survive_roundtrip() {
    let mut doc = Document::new();
    doc.insert_paragraph(0, "see ").unwrap();
    doc.insert_hyperlink(0, "the docs", "https://example.com/a?x=1&y=2")
        .unwrap();
    doc.insert_bookmark(0, "intro").unwrap();

    let back = roundtrip(&doc);
    let para = back.body.paragraph(0).unwrap();
    assert_eq!(para.hyperlinks.len(), 1);
    assert_eq!(para.hyperlinks[0].text(), "the docs");
    assert_eq!(back.hyperlinks.len(), 1);
    assert_eq!(back.hyperlinks[0].url, "https://example.com/a?x=1&y=2");
    assert_eq!(
        para.hyperlinks[0].rel_id.as_deref(),
        Some(back.hyperlinks[0].rel_id.as_str())
    );
    assert_eq!(para.bookmarks.len(), 1);
    assert_eq!(para.bookmarks[0].name, "intro");
}

#[test]
fn comments_and_notes_survive_roundtrip() {
    let mut doc = Document::new();
    doc.insert_paragraph(0, "annotated").unwrap();
    let comment_id = doc.insert_comment(0, "Ada Lovelace", "check this").unwrap();
    let footnote_id = doc.insert_footnote(0, "a footnote").unwrap();
    doc.insert_endnote(0, "an endnote").unwrap();

    let back = roundtrip(&doc);
    assert_eq!(back.comments.len(), 1);
    assert_eq!(back.comments[0].id, comment_id);
    assert_eq!(back.comments[0].author, "Ada Lovelace");
    assert_eq!(back.comments[0].initials, "AL");
    assert_eq!(back.comments[0].text(), "check this");

    assert_eq!(back.footnotes.len(), 1);
    assert_eq!(back.footnotes[0].id, footnote_id);
    assert_eq!(back.footnotes[0].text(), "a footnote");
    assert_eq!(back.endnotes.len(), 1);
    assert_eq!(back.endnotes[0].text(), "an endnote");

    let para = back.body.paragraph(0).unwrap();
    assert!(para.comment_ids.contains(&comment_id));
    assert!(para.footnote_ids.contains(&footnote_id));
}

#[test]
fn tracked_changes_survive_roundtrip() {
    let mut doc = Document::new();
    doc.insert_paragraph(0, "base").unwrap();
    doc.insert_tracked_change(0, RevisionKind::Insertion, "editor", "added")
        .unwrap();
    doc.insert_tracked_change(0, RevisionKind::Deletion, "editor", "removed")
        .unwrap();

    let back = roundtrip(&doc);
    let para = back.body.paragraph(0).unwrap();
    assert_eq!(para.revisions.len(), 2);
    assert_eq!(para.revisions[0].kind, RevisionKind::Insertion);
    assert_eq!(para.revisions[0].text(), "added");
    assert_eq!(para.revisions[1].kind, RevisionKind::Deletion);
    assert_eq!(para.revisions[1].text(), "removed");
    assert_eq!(para.text(), "base");
}

#[test]
fn headers_and_footers_survive_roundtrip() {
    let mut doc = Document::new();
    doc.insert_paragraph(0, "body").unwrap();
    doc.add_header("Confidential");
    doc.add_footer("Page footer");

    let parts = write_package(&doc).unwrap();
    assert!(parts.contains("word/header1.xml"));
    assert!(parts.contains("word/footer1.xml"));

    let back = parse_package(&parts).unwrap();
    assert_eq!(back.headers.len(), 1);
    assert_eq!(back.headers[0].text(), "Confidential");
    assert_eq!(back.footers.len(), 1);
    assert_eq!(back.footers[0].text(), "Page footer");
    assert_eq!(back.section.header_refs.len(), 1);
    assert_eq!(back.section.footer_refs.len(), 1);
}

#[test]
fn image_insertion_emits_media_part_and_extents() {
    let mut doc = Document::new();
    doc.insert_paragraph(0, "").unwrap();
    doc.insert_image(0, "a.png", PNG_SIG_B64, 100, 50).unwrap();
    assert_eq!(doc.images.len(), 1);
    assert_eq!(doc.images[0].file_name, "a.png");

    let parts = write_package(&doc).unwrap();
    assert!(parts.contains("word/media/a.png"));
    let document_xml = std::str::from_utf8(parts.get("word/document.xml").unwrap()).unwrap();
    // 100x50 px at 9525 EMU per pixel
    assert!(document_xml.contains("cx=\"952500\""));
    assert!(document_xml.contains("cy=\"476250\""));
    let content_types =
        std::str::from_utf8(parts.get("[Content_Types].xml").unwrap()).unwrap();
    assert!(content_types.contains("Extension=\"png\""));

    let back = parse_package(&parts).unwrap();
    assert_eq!(back.images.len(), 1);
    assert_eq!(back.images[0].data, parts.get("word/media/a.png").unwrap());
    let para = back.body.paragraph(0).unwrap();
    let drawing = para
        .runs
        .iter()
        .find_map(|r| match &r.content {
            RunContent::Drawing(d) => Some(d),
            _ => None,
        })
        .unwrap();
    assert_eq!(drawing.width_px(), 100);
    assert_eq!(drawing.height_px(), 50);
    assert_eq!(drawing.rel_id, back.images[0].rel_id);
}

#[test]
fn invalid_base64_leaves_document_unchanged() {
    let mut doc = Document::new();
    doc.insert_paragraph(0, "text").unwrap();
    assert!(doc.insert_image(0, "a.png", "not base64!!!", 10, 10).is_err());
    assert!(doc.images.is_empty());
    assert_eq!(doc.body.paragraph(0).unwrap().runs.len(), 1);
}

#[test]
fn relationship_ids_never_collide() {
    let mut doc = Document::new();
    doc.insert_paragraph(0, "x").unwrap();
    doc.insert_image(0, "a.png", PNG_SIG_B64, 10, 10).unwrap();
    doc.insert_hyperlink(0, "link", "https://example.com").unwrap();
    doc.add_header("h");
    doc.add_footer("f");
    doc.insert_comment(0, "a", "c").unwrap();
    doc.insert_footnote(0, "fn").unwrap();
    doc.insert_endnote(0, "en").unwrap();

    let mut ids: Vec<&str> = vec!["rId1", "rId2", "rId3", "rId4"];
    ids.extend(doc.images.iter().map(|i| i.rel_id.as_str()));
    ids.extend(doc.hyperlinks.iter().map(|h| h.rel_id.as_str()));
    ids.extend(doc.headers.iter().map(|h| h.rel_id.as_str()));
    ids.extend(doc.footers.iter().map(|f| f.rel_id.as_str()));
    ids.extend(doc.comments_rel_id.as_deref());
    ids.extend(doc.footnotes_rel_id.as_deref());
    ids.extend(doc.endnotes_rel_id.as_deref());

    let mut deduped = ids.clone();
    deduped.sort_unstable();
    deduped.dedup();
    assert_eq!(deduped.len(), ids.len());
}

#[test]
fn parsed_document_allocates_fresh_ids() {
    let mut doc = Document::new();
    doc.insert_paragraph(0, "x").unwrap();
    doc.insert_hyperlink(0, "a", "https://a.example").unwrap();
    doc.insert_bookmark(0, "mark_one").unwrap();
    doc.insert_comment(0, "a", "first").unwrap();

    let mut back = roundtrip(&doc);
    back.insert_hyperlink(0, "b", "https://b.example").unwrap();
    let bookmark_id = back.insert_bookmark(0, "mark_two").unwrap();
    let comment_id = back.insert_comment(0, "b", "second").unwrap();

    // new allocations must not reuse parsed IDs
    assert_ne!(back.hyperlinks[0].rel_id, back.hyperlinks[1].rel_id);
    let para = back.body.paragraph(0).unwrap();
    assert_ne!(para.bookmarks[0].id, bookmark_id);
    assert_ne!(back.comments[0].id, comment_id);
    assert!(back.check_integrity().is_empty());
}

#[test]
fn list_items_annotate_after_roundtrip() {
    let mut doc = Document::new();
    doc.insert_paragraph(0, "Introduction").unwrap();
    doc.body.paragraph_mut(0).unwrap().properties.style_id = Some("Heading1".to_string());
    doc.insert_list_item(1, "bullet point", false, 0).unwrap();
    doc.insert_list_item(2, "numbered point", true, 0).unwrap();

    let mut back = roundtrip(&doc);
    back.annotate();
    let kinds: Vec<SemanticType> = back
        .body
        .paragraphs()
        .map(|p| p.annotation.unwrap().kind)
        .collect();
    assert_eq!(
        kinds,
        vec![
            SemanticType::Heading(1),
            SemanticType::BulletListItem { level: 0 },
            SemanticType::NumberedListItem { level: 0 },
        ]
    );
    assert_eq!(back.outline(), vec![(0, 1)]);
}

#[test]
fn replace_text_counts_and_scopes() {
    let mut doc = Document::new();
    doc.insert_paragraph(0, "old and old again").unwrap();
    doc.insert_table(0, 1, 1).unwrap();
    doc.update_cell(0, 0, 0, "old cell").unwrap();

    let mut first_only = doc.clone();
    assert_eq!(first_only.replace_text("old", "new", false).unwrap(), 1);
    assert_eq!(
        first_only.body.paragraph(0).unwrap().text(),
        "new and old again"
    );

    assert_eq!(doc.replace_text("old", "new", true).unwrap(), 3);
    assert_eq!(doc.body.table(0).unwrap().cell(0, 0).unwrap().text(), "new cell");
    assert!(doc.replace_text("", "x", true).is_err());
}

#[test]
fn built_in_styles_cannot_be_deleted() {
    let mut doc = Document::new();
    assert!(doc.delete_style("Heading1").is_err());
    assert!(doc.delete_style("Normal").is_err());
    assert!(doc.delete_style("NoSuchStyle").is_err());
    assert!(doc.get_styles().iter().any(|s| s.id == "Heading1"));
}

#[test]
fn document_properties_survive_roundtrip() {
    let mut doc = Document::new();
    doc.insert_paragraph(0, "content").unwrap();
    doc.properties.title = Some("Annual Report".to_string());
    doc.properties.creator = "Ada".to_string();
    doc.properties.created = Some("2024-01-01T00:00:00Z".to_string());
    doc.properties.modified = Some("2024-06-01T00:00:00Z".to_string());

    let back = roundtrip(&doc);
    assert_eq!(back.properties.title.as_deref(), Some("Annual Report"));
    assert_eq!(back.properties.creator, "Ada");
    assert_eq!(back.properties.created.as_deref(), Some("2024-01-01T00:00:00Z"));
    assert_eq!(
        back.properties.modified.as_deref(),
        Some("2024-06-01T00:00:00Z")
    );
}

#[test]
fn zip_container_end_to_end() {
    let mut doc = Document::new();
    doc.insert_paragraph(0, "packaged content").unwrap();
    doc.insert_table(0, 2, 2).unwrap();
    doc.update_cell(0, 1, 1, "bottom right").unwrap();
    doc.insert_image(0, "image1.png", PNG_SIG_B64, 32, 32).unwrap();

    let parts = write_package(&doc).unwrap();
    let container = ZipContainer;
    let bytes = container.pack(&parts).unwrap();

    // real file round-trip through the filesystem
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(&bytes).unwrap();
    let read_back = std::fs::read(file.path()).unwrap();

    let tree = container.unpack(&read_back).unwrap();
    assert!(tree.contains("[Content_Types].xml"));
    assert!(tree.contains("_rels/.rels"));
    assert!(tree.contains("word/document.xml"));
    assert!(tree.contains("word/media/image1.png"));

    let back = parse_package(&tree).unwrap();
    assert_eq!(back.body.paragraph(0).unwrap().text(), "packaged content");
    assert_eq!(
        back.body.table(0).unwrap().cell(1, 1).unwrap().text(),
        "bottom right"
    );
    assert_eq!(back.images.len(), 1);
}

#[test]
fn serialization_is_deterministic() {
    let mut doc = Document::new();
    doc.insert_paragraph(0, "stable").unwrap();
    doc.add_header("h");
    doc.properties.created = Some("2024-01-01T00:00:00Z".to_string());
    doc.properties.modified = Some("2024-01-01T00:00:00Z".to_string());

    let container = ZipContainer;
    let first = container.pack(&write_package(&doc).unwrap()).unwrap();
    let second = container.pack(&write_package(&doc).unwrap()).unwrap();
    assert_eq!(first, second);
}
