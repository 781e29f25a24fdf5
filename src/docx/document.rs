//! The document aggregate and its typed mutation API.
//!
//! All indexed operations validate their indices before touching any state;
//! a failed call returns an error and leaves the document exactly as it
//! was. Paragraph indices count top-level body paragraphs, table indices
//! count top-level tables; neither counts the other kind, so deleting a
//! table never shifts paragraph indices.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use crate::common::error::{DocxError, Result};
use crate::docx::annotate::{annotate_paragraph, SemanticType};
use crate::docx::bookmark::Bookmark;
use crate::docx::comment::Comment;
use crate::docx::drawing::Drawing;
use crate::docx::footnote::{Note, NoteKind};
use crate::docx::header_footer::{HeaderFooter, HeaderFooterKind};
use crate::docx::hyperlink::{Hyperlink, HyperlinkRef};
use crate::docx::image::{ImageFormat, ImageRef};
use crate::docx::numbering::Numbering;
use crate::docx::paragraph::{NumberingRef, Paragraph};
use crate::docx::rels::RelIdAllocator;
use crate::docx::revision::{Revision, RevisionKind};
use crate::docx::run::{Run, RunContent};
use crate::docx::section::SectionProperties;
use crate::docx::styles::{Style, Styles};
use crate::docx::table::Table;

/// One top-level block in the body, in document order.
#[derive(Debug, Clone, PartialEq)]
pub enum BodyChild {
    Paragraph(Paragraph),
    Table(Table),
}

/// The document body: an ordered sequence of paragraphs and tables.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Body {
    pub children: Vec<BodyChild>,
}

impl Body {
    pub fn paragraph_count(&self) -> usize {
        self.children
            .iter()
            .filter(|c| matches!(c, BodyChild::Paragraph(_)))
            .count()
    }

    pub fn table_count(&self) -> usize {
        self.children
            .iter()
            .filter(|c| matches!(c, BodyChild::Table(_)))
            .count()
    }

    /// Iterate top-level paragraphs in order.
    pub fn paragraphs(&self) -> impl Iterator<Item = &Paragraph> {
        self.children.iter().filter_map(|c| match c {
            BodyChild::Paragraph(p) => Some(p),
            BodyChild::Table(_) => None,
        })
    }

    /// Iterate top-level tables in order.
    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.children.iter().filter_map(|c| match c {
            BodyChild::Table(t) => Some(t),
            BodyChild::Paragraph(_) => None,
        })
    }

    pub fn paragraph(&self, index: usize) -> Option<&Paragraph> {
        self.paragraphs().nth(index)
    }

    pub fn paragraph_mut(&mut self, index: usize) -> Option<&mut Paragraph> {
        self.children
            .iter_mut()
            .filter_map(|c| match c {
                BodyChild::Paragraph(p) => Some(p),
                BodyChild::Table(_) => None,
            })
            .nth(index)
    }

    pub fn table(&self, index: usize) -> Option<&Table> {
        self.tables().nth(index)
    }

    pub fn table_mut(&mut self, index: usize) -> Option<&mut Table> {
        self.children
            .iter_mut()
            .filter_map(|c| match c {
                BodyChild::Table(t) => Some(t),
                BodyChild::Paragraph(_) => None,
            })
            .nth(index)
    }

    /// Child position where a paragraph inserted at `index` lands: before
    /// the current index-th paragraph, or at the end when `index` equals
    /// the paragraph count.
    fn paragraph_insert_pos(&self, index: usize) -> Option<usize> {
        let mut seen = 0;
        for (pos, child) in self.children.iter().enumerate() {
            if let BodyChild::Paragraph(_) = child {
                if seen == index {
                    return Some(pos);
                }
                seen += 1;
            }
        }
        (index == seen).then_some(self.children.len())
    }

    /// Child position where a table inserted at `index` lands.
    fn table_insert_pos(&self, index: usize) -> Option<usize> {
        let mut seen = 0;
        for (pos, child) in self.children.iter().enumerate() {
            if let BodyChild::Table(_) = child {
                if seen == index {
                    return Some(pos);
                }
                seen += 1;
            }
        }
        (index == seen).then_some(self.children.len())
    }

    /// Child position of the index-th paragraph.
    fn paragraph_pos(&self, index: usize) -> Option<usize> {
        let mut seen = 0;
        for (pos, child) in self.children.iter().enumerate() {
            if let BodyChild::Paragraph(_) = child {
                if seen == index {
                    return Some(pos);
                }
                seen += 1;
            }
        }
        None
    }

    /// Child position of the index-th table.
    fn table_pos(&self, index: usize) -> Option<usize> {
        let mut seen = 0;
        for (pos, child) in self.children.iter().enumerate() {
            if let BodyChild::Table(_) = child {
                if seen == index {
                    return Some(pos);
                }
                seen += 1;
            }
        }
        None
    }
}

/// Package metadata written to `docProps/core.xml` and `docProps/app.xml`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentProperties {
    pub title: Option<String>,
    pub subject: Option<String>,
    pub creator: String,
    pub keywords: Option<String>,
    pub description: Option<String>,
    pub last_modified_by: Option<String>,
    pub revision: u32,
    /// ISO-8601; filled at write time when unset
    pub created: Option<String>,
    /// ISO-8601; filled at write time when unset
    pub modified: Option<String>,
    pub application: String,
    pub company: Option<String>,
}

impl Default for DocumentProperties {
    fn default() -> Self {
        Self {
            title: None,
            subject: None,
            creator: env!("CARGO_PKG_NAME").to_string(),
            keywords: None,
            description: None,
            last_modified_by: None,
            revision: 1,
            created: None,
            modified: None,
            application: env!("CARGO_PKG_NAME").to_string(),
            company: None,
        }
    }
}

/// A complete in-memory document.
///
/// Holds the body plus every satellite collection a package round-trip
/// needs: styles, numbering, section geometry, headers/footers, images,
/// hyperlink targets, comments, and notes. Relationship IDs are owned by
/// the entries that carry them and allocated by [`RelIdAllocator`].
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub body: Body,
    pub styles: Styles,
    pub numbering: Numbering,
    pub section: SectionProperties,
    pub headers: Vec<HeaderFooter>,
    pub footers: Vec<HeaderFooter>,
    pub images: Vec<ImageRef>,
    pub hyperlinks: Vec<HyperlinkRef>,
    pub comments: Vec<Comment>,
    pub footnotes: Vec<Note>,
    pub endnotes: Vec<Note>,
    pub properties: DocumentProperties,
    pub rel_ids: RelIdAllocator,
    /// Relationship ID of `word/comments.xml`, set once comments exist
    pub comments_rel_id: Option<String>,
    /// Relationship ID of `word/footnotes.xml`, set once footnotes exist
    pub footnotes_rel_id: Option<String>,
    /// Relationship ID of `word/endnotes.xml`, set once endnotes exist
    pub endnotes_rel_id: Option<String>,
    next_bookmark_id: u32,
    next_comment_id: u32,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// An empty document with built-in styles and default page geometry.
    pub fn new() -> Self {
        Self {
            body: Body::default(),
            styles: Styles::default(),
            numbering: Numbering::default(),
            section: SectionProperties::default(),
            headers: Vec::new(),
            footers: Vec::new(),
            images: Vec::new(),
            hyperlinks: Vec::new(),
            comments: Vec::new(),
            footnotes: Vec::new(),
            endnotes: Vec::new(),
            properties: DocumentProperties::default(),
            rel_ids: RelIdAllocator::new(),
            comments_rel_id: None,
            footnotes_rel_id: None,
            endnotes_rel_id: None,
            next_bookmark_id: 1,
            next_comment_id: 1,
        }
    }

    pub fn paragraph_count(&self) -> usize {
        self.body.paragraph_count()
    }

    pub fn table_count(&self) -> usize {
        self.body.table_count()
    }

    /// Plain text of all top-level paragraphs, newline-joined.
    pub fn text(&self) -> String {
        self.body
            .paragraphs()
            .map(|p| p.text())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn paragraph_index_error(&self, index: usize) -> DocxError {
        DocxError::InvalidIndex {
            what: "paragraph",
            index,
            len: self.paragraph_count(),
        }
    }

    fn table_index_error(&self, index: usize) -> DocxError {
        DocxError::InvalidIndex {
            what: "table",
            index,
            len: self.table_count(),
        }
    }

    // --- paragraphs ---

    /// Insert a text paragraph so it becomes paragraph `index`.
    /// `index` may equal the current count to append.
    pub fn insert_paragraph(
        &mut self,
        index: usize,
        text: impl Into<String>,
    ) -> Result<&mut Paragraph> {
        let pos = self
            .body
            .paragraph_insert_pos(index)
            .ok_or_else(|| self.paragraph_index_error(index))?;
        self.body
            .children
            .insert(pos, BodyChild::Paragraph(Paragraph::with_text(text)));
        match &mut self.body.children[pos] {
            BodyChild::Paragraph(p) => Ok(p),
            BodyChild::Table(_) => unreachable!("just inserted a paragraph"),
        }
    }

    /// Replace paragraph `index`'s content with a single text run,
    /// keeping its properties and attachments.
    pub fn update_paragraph(&mut self, index: usize, text: impl Into<String>) -> Result<()> {
        let err = self.paragraph_index_error(index);
        let para = self.body.paragraph_mut(index).ok_or(err)?;
        para.set_text(text);
        Ok(())
    }

    /// Delete paragraph `index`. Attachments anchored to it (comments,
    /// notes) lose their anchors; `check_integrity` reports them.
    pub fn delete_paragraph(&mut self, index: usize) -> Result<()> {
        let pos = self
            .body
            .paragraph_pos(index)
            .ok_or_else(|| self.paragraph_index_error(index))?;
        self.body.children.remove(pos);
        Ok(())
    }

    /// Append a list-item paragraph at paragraph position `index`, lazily
    /// seeding the stock bullet or decimal numbering definition.
    pub fn insert_list_item(
        &mut self,
        index: usize,
        text: impl Into<String>,
        ordered: bool,
        level: u8,
    ) -> Result<&mut Paragraph> {
        if level > 8 {
            return Err(DocxError::InvalidParameter(format!(
                "list level must be 0-8, got {}",
                level
            )));
        }
        let num_id = if ordered {
            self.numbering.ensure_decimal()
        } else {
            self.numbering.ensure_bullet()
        };
        let para = self.insert_paragraph(index, text)?;
        para.properties.numbering = Some(NumberingRef { num_id, level });
        Ok(para)
    }

    // --- tables ---

    /// Insert an empty `rows` x `cols` table so it becomes table `index`.
    /// `index` may equal the current count to append.
    pub fn insert_table(&mut self, index: usize, rows: usize, cols: usize) -> Result<&mut Table> {
        if rows == 0 || cols == 0 {
            return Err(DocxError::InvalidParameter(format!(
                "table needs at least one row and column, got {}x{}",
                rows, cols
            )));
        }
        let pos = self
            .body
            .table_insert_pos(index)
            .ok_or_else(|| self.table_index_error(index))?;
        self.body
            .children
            .insert(pos, BodyChild::Table(Table::empty(rows, cols)));
        match &mut self.body.children[pos] {
            BodyChild::Table(t) => Ok(t),
            BodyChild::Paragraph(_) => unreachable!("just inserted a table"),
        }
    }

    /// Delete table `index`.
    pub fn delete_table(&mut self, index: usize) -> Result<()> {
        let pos = self
            .body
            .table_pos(index)
            .ok_or_else(|| self.table_index_error(index))?;
        self.body.children.remove(pos);
        Ok(())
    }

    /// Replace a cell's content with a single text paragraph.
    pub fn update_cell(
        &mut self,
        table: usize,
        row: usize,
        col: usize,
        text: impl Into<String>,
    ) -> Result<()> {
        let err = self.table_index_error(table);
        let tbl = self.body.table_mut(table).ok_or(err)?;
        let rows = tbl.rows.len();
        let row_ref = tbl.rows.get_mut(row).ok_or(DocxError::InvalidIndex {
            what: "table row",
            index: row,
            len: rows,
        })?;
        let cols = row_ref.cells.len();
        let cell = row_ref.cells.get_mut(col).ok_or(DocxError::InvalidIndex {
            what: "table cell",
            index: col,
            len: cols,
        })?;
        cell.set_text(text);
        Ok(())
    }

    /// Merge columns `start_col..=end_col` (numbered from 1) in one row
    /// of table `index`.
    pub fn merge_cells_horizontal(
        &mut self,
        table: usize,
        row: usize,
        start_col: usize,
        end_col: usize,
    ) -> Result<()> {
        let err = self.table_index_error(table);
        let tbl = self.body.table_mut(table).ok_or(err)?;
        tbl.merge_cells_horizontal(row, start_col, end_col)
    }

    /// Merge rows `start_row..=end_row` (numbered from 1) in one column
    /// of table `index`.
    pub fn merge_cells_vertical(
        &mut self,
        table: usize,
        col: usize,
        start_row: usize,
        end_row: usize,
    ) -> Result<()> {
        let err = self.table_index_error(table);
        let tbl = self.body.table_mut(table).ok_or(err)?;
        tbl.merge_cells_vertical(col, start_row, end_row)
    }

    // --- media and links ---

    /// Append an inline image run to paragraph `index`, storing the image
    /// under `word/media/` as `file_name`.
    ///
    /// The image arrives base64-encoded; a decode failure is an
    /// `InvalidFormat` error and nothing is inserted. The format is taken
    /// from the file name's extension, falling back to the byte signature
    /// of the decoded data for the content-type default.
    pub fn insert_image(
        &mut self,
        index: usize,
        file_name: &str,
        base64_data: &str,
        width_px: u32,
        height_px: u32,
    ) -> Result<()> {
        if file_name.is_empty() || file_name.contains(['/', '\\']) {
            return Err(DocxError::InvalidParameter(format!(
                "bad image file name: {:?}",
                file_name
            )));
        }
        if self.images.iter().any(|i| i.file_name == file_name) {
            return Err(DocxError::InvalidParameter(format!(
                "image file name already in use: {:?}",
                file_name
            )));
        }
        let data = BASE64
            .decode(base64_data.trim())
            .map_err(|e| DocxError::InvalidFormat(format!("image data is not base64: {}", e)))?;
        // Validate the index before committing the image entry.
        let err = self.paragraph_index_error(index);
        self.body.paragraph(index).ok_or(err)?;

        let format = file_name
            .rsplit_once('.')
            .and_then(|(_, ext)| ImageFormat::from_extension(ext))
            .or_else(|| ImageFormat::detect_from_bytes(&data));
        let rel_id = self.rel_ids.allocate();
        self.images.push(ImageRef {
            rel_id: rel_id.clone(),
            file_name: file_name.to_string(),
            data,
            format,
        });

        let err = self.paragraph_index_error(index);
        let para = self.body.paragraph_mut(index).ok_or(err)?;
        para.runs.push(Run::with_content(RunContent::Drawing(
            Drawing::from_pixels(rel_id, file_name, width_px, height_px),
        )));
        Ok(())
    }

    /// Append an external hyperlink to paragraph `index`, allocating a
    /// fresh relationship entry for its URL.
    pub fn insert_hyperlink(
        &mut self,
        index: usize,
        text: impl Into<String>,
        url: impl Into<String>,
    ) -> Result<()> {
        let err = self.paragraph_index_error(index);
        self.body.paragraph(index).ok_or(err)?;
        let rel_id = self.rel_ids.allocate();
        self.hyperlinks.push(HyperlinkRef {
            rel_id: rel_id.clone(),
            url: url.into(),
        });
        let err = self.paragraph_index_error(index);
        let para = self.body.paragraph_mut(index).ok_or(err)?;
        para.hyperlinks.push(Hyperlink::external(rel_id, text));
        Ok(())
    }

    /// Delete hyperlink `link` of paragraph `index` and its relationship
    /// entry. The freed relationship ID is not reused.
    pub fn delete_hyperlink(&mut self, index: usize, link: usize) -> Result<()> {
        let err = self.paragraph_index_error(index);
        let para = self.body.paragraph_mut(index).ok_or(err)?;
        if link >= para.hyperlinks.len() {
            return Err(DocxError::InvalidIndex {
                what: "hyperlink",
                index: link,
                len: para.hyperlinks.len(),
            });
        }
        let removed = para.hyperlinks.remove(link);
        if let Some(rel_id) = removed.rel_id {
            self.hyperlinks.retain(|h| h.rel_id != rel_id);
        }
        Ok(())
    }

    // --- anchored annotations ---

    /// Wrap paragraph `index` in a bookmark. Names are unique within the
    /// document.
    pub fn insert_bookmark(&mut self, index: usize, name: impl Into<String>) -> Result<u32> {
        let name = name.into();
        Bookmark::validate_name(&name)?;
        let taken = self
            .body
            .paragraphs()
            .flat_map(|p| &p.bookmarks)
            .any(|b| b.name == name);
        if taken {
            return Err(DocxError::InvalidParameter(format!(
                "bookmark name already in use: {:?}",
                name
            )));
        }
        let err = self.paragraph_index_error(index);
        let para = self.body.paragraph_mut(index).ok_or(err)?;
        let id = self.next_bookmark_id;
        self.next_bookmark_id += 1;
        para.bookmarks.push(Bookmark { id, name });
        Ok(id)
    }

    /// Anchor a comment to paragraph `index`; returns the comment ID.
    pub fn insert_comment(
        &mut self,
        index: usize,
        author: impl Into<String>,
        text: impl Into<String>,
    ) -> Result<u32> {
        let err = self.paragraph_index_error(index);
        self.body.paragraph(index).ok_or(err)?;
        if self.comments_rel_id.is_none() {
            self.comments_rel_id = Some(self.rel_ids.allocate());
        }
        let id = self.next_comment_id;
        self.next_comment_id += 1;
        self.comments.push(Comment::new(id, author, text));
        let err = self.paragraph_index_error(index);
        let para = self.body.paragraph_mut(index).ok_or(err)?;
        para.comment_ids.push(id);
        Ok(id)
    }

    /// Record a tracked change on paragraph `index`; returns the
    /// revision ID. Insertions add their text, deletions mark it as
    /// removed without touching the paragraph's runs.
    pub fn insert_tracked_change(
        &mut self,
        index: usize,
        kind: RevisionKind,
        author: impl Into<String>,
        text: impl Into<String>,
    ) -> Result<u32> {
        let id = self
            .body
            .paragraphs()
            .flat_map(|p| &p.revisions)
            .map(|r| r.id + 1)
            .max()
            .unwrap_or(1);
        let err = self.paragraph_index_error(index);
        let para = self.body.paragraph_mut(index).ok_or(err)?;
        para.revisions.push(Revision::new(id, kind, author, text));
        Ok(id)
    }

    /// Attach a footnote to paragraph `index`: the note body goes to the
    /// footnotes part, a reference mark run is appended to the paragraph.
    pub fn insert_footnote(&mut self, index: usize, text: impl Into<String>) -> Result<u32> {
        self.insert_note(index, NoteKind::Footnote, text)
    }

    /// Attach an endnote to paragraph `index`.
    pub fn insert_endnote(&mut self, index: usize, text: impl Into<String>) -> Result<u32> {
        self.insert_note(index, NoteKind::Endnote, text)
    }

    fn insert_note(&mut self, index: usize, kind: NoteKind, text: impl Into<String>) -> Result<u32> {
        let err = self.paragraph_index_error(index);
        self.body.paragraph(index).ok_or(err)?;
        let notes = match kind {
            NoteKind::Footnote => &self.footnotes,
            NoteKind::Endnote => &self.endnotes,
        };
        let id = notes
            .iter()
            .map(|n| n.id + 1)
            .max()
            .unwrap_or(Note::FIRST_ID);
        let rel_slot = match kind {
            NoteKind::Footnote => &mut self.footnotes_rel_id,
            NoteKind::Endnote => &mut self.endnotes_rel_id,
        };
        if rel_slot.is_none() {
            *rel_slot = Some(self.rel_ids.allocate());
        }
        match kind {
            NoteKind::Footnote => self.footnotes.push(Note::new(id, kind, text)),
            NoteKind::Endnote => self.endnotes.push(Note::new(id, kind, text)),
        }
        let err = self.paragraph_index_error(index);
        let para = self.body.paragraph_mut(index).ok_or(err)?;
        match kind {
            NoteKind::Footnote => {
                para.runs
                    .push(Run::with_content(RunContent::FootnoteReference(id)));
                para.footnote_ids.push(id);
            }
            NoteKind::Endnote => {
                para.runs
                    .push(Run::with_content(RunContent::EndnoteReference(id)));
                para.endnote_ids.push(id);
            }
        }
        Ok(id)
    }

    // --- headers, footers, styles ---

    /// Add a default header with one text paragraph; returns its part
    /// index (1-based).
    pub fn add_header(&mut self, text: impl Into<String>) -> u32 {
        let index = self.headers.len() as u32 + 1;
        let rel_id = self.rel_ids.allocate();
        self.section.header_refs.push(rel_id.clone());
        self.headers
            .push(HeaderFooter::new(HeaderFooterKind::Header, index, rel_id, text));
        index
    }

    /// Add a default footer with one text paragraph; returns its part
    /// index (1-based).
    pub fn add_footer(&mut self, text: impl Into<String>) -> u32 {
        let index = self.footers.len() as u32 + 1;
        let rel_id = self.rel_ids.allocate();
        self.section.footer_refs.push(rel_id.clone());
        self.footers
            .push(HeaderFooter::new(HeaderFooterKind::Footer, index, rel_id, text));
        index
    }

    /// Add or replace a style definition.
    pub fn add_style(&mut self, style: Style) {
        self.styles.add(style);
    }

    /// Delete a custom style. Built-in styles are protected.
    pub fn delete_style(&mut self, id: &str) -> Result<()> {
        self.styles.remove(id)
    }

    pub fn get_styles(&self) -> &[Style] {
        &self.styles.styles
    }

    // --- text operations ---

    /// Replace occurrences of `from` in run text, walking paragraphs in
    /// document order (table cells included, after the blocks before
    /// them). With `all` false only the first occurrence is rewritten.
    /// Returns the number of occurrences replaced.
    pub fn replace_text(&mut self, from: &str, to: &str, all: bool) -> Result<usize> {
        if from.is_empty() {
            return Err(DocxError::InvalidParameter(
                "replacement source must be non-empty".to_string(),
            ));
        }
        let mut replaced = 0;
        'outer: for child in &mut self.body.children {
            let paragraphs: Vec<&mut Paragraph> = match child {
                BodyChild::Paragraph(p) => vec![p],
                BodyChild::Table(t) => t
                    .rows
                    .iter_mut()
                    .flat_map(|r| r.cells.iter_mut())
                    .flat_map(|c| c.paragraphs.iter_mut())
                    .collect(),
            };
            for para in paragraphs {
                for run in &mut para.runs {
                    if let RunContent::Text(text) = &mut run.content {
                        if text.contains(from) {
                            if all {
                                replaced += text.matches(from).count();
                                *text = text.replace(from, to);
                            } else {
                                *text = text.replacen(from, to, 1);
                                replaced += 1;
                                break 'outer;
                            }
                        }
                    }
                }
            }
        }
        Ok(replaced)
    }

    // --- analysis ---

    /// Classify every paragraph (body and table cells) and store the
    /// result on each. Annotations never affect serialization.
    pub fn annotate(&mut self) {
        let styles = &self.styles;
        let numbering = &self.numbering;
        for child in &mut self.body.children {
            match child {
                BodyChild::Paragraph(p) => {
                    p.annotation = Some(annotate_paragraph(p, styles, numbering));
                }
                BodyChild::Table(t) => {
                    for cell_para in t
                        .rows
                        .iter_mut()
                        .flat_map(|r| r.cells.iter_mut())
                        .flat_map(|c| c.paragraphs.iter_mut())
                    {
                        cell_para.annotation =
                            Some(annotate_paragraph(cell_para, styles, numbering));
                    }
                }
            }
        }
    }

    /// Paragraph indices annotated as headings, with levels. Runs
    /// `annotate` first.
    pub fn outline(&mut self) -> Vec<(usize, u8)> {
        self.annotate();
        self.body
            .paragraphs()
            .enumerate()
            .filter_map(|(i, p)| match p.annotation {
                Some(ann) => match ann.kind {
                    SemanticType::Heading(level) => Some((i, level)),
                    _ => None,
                },
                None => None,
            })
            .collect()
    }

    /// Advance the bookmark and comment counters past every ID currently
    /// in use, so post-parse insertions never collide with parsed IDs.
    pub(crate) fn resume_id_counters(&mut self) {
        let max_bookmark = self
            .body
            .paragraphs()
            .flat_map(|p| &p.bookmarks)
            .map(|b| b.id)
            .max();
        if let Some(max) = max_bookmark {
            self.next_bookmark_id = self.next_bookmark_id.max(max + 1);
        }
        if let Some(max) = self.comments.iter().map(|c| c.id).max() {
            self.next_comment_id = self.next_comment_id.max(max + 1);
        }
    }

    /// Cross-reference every stored ID and return human-readable
    /// descriptions of dangling references. Empty means consistent.
    pub fn check_integrity(&self) -> Vec<String> {
        let mut issues = Vec::new();
        let image_ids: Vec<&str> = self.images.iter().map(|i| i.rel_id.as_str()).collect();
        let link_ids: Vec<&str> = self.hyperlinks.iter().map(|h| h.rel_id.as_str()).collect();

        for (idx, para) in self.body.paragraphs().enumerate() {
            for run in &para.runs {
                match &run.content {
                    RunContent::Drawing(d) if !image_ids.contains(&d.rel_id.as_str()) => {
                        issues.push(format!(
                            "paragraph {}: drawing references missing image {}",
                            idx, d.rel_id
                        ));
                    }
                    RunContent::FootnoteReference(id)
                        if !self.footnotes.iter().any(|n| n.id == *id) =>
                    {
                        issues.push(format!(
                            "paragraph {}: reference to missing footnote {}",
                            idx, id
                        ));
                    }
                    RunContent::EndnoteReference(id)
                        if !self.endnotes.iter().any(|n| n.id == *id) =>
                    {
                        issues.push(format!(
                            "paragraph {}: reference to missing endnote {}",
                            idx, id
                        ));
                    }
                    _ => {}
                }
            }
            for link in &para.hyperlinks {
                if let Some(rel_id) = &link.rel_id {
                    if !link_ids.contains(&rel_id.as_str()) {
                        issues.push(format!(
                            "paragraph {}: hyperlink references missing target {}",
                            idx, rel_id
                        ));
                    }
                }
            }
            for comment_id in &para.comment_ids {
                if !self.comments.iter().any(|c| c.id == *comment_id) {
                    issues.push(format!(
                        "paragraph {}: anchor for missing comment {}",
                        idx, comment_id
                    ));
                }
            }
            if let Some(num_ref) = para.properties.numbering {
                if self.numbering.resolve(num_ref.num_id).is_none() {
                    issues.push(format!(
                        "paragraph {}: unresolved numbering id {}",
                        idx, num_ref.num_id
                    ));
                }
            }
            if let Some(style_id) = &para.properties.style_id {
                if self.styles.get(style_id).is_none() {
                    issues.push(format!(
                        "paragraph {}: undefined style {:?}",
                        idx, style_id
                    ));
                }
            }
        }

        // Anchorless comments: a body with no surviving range marks
        for comment in &self.comments {
            let anchored = self
                .body
                .paragraphs()
                .any(|p| p.comment_ids.contains(&comment.id));
            if !anchored {
                issues.push(format!("comment {} has no anchor paragraph", comment.id));
            }
        }
        issues
    }
}
