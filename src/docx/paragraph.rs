/// Paragraphs and paragraph-level properties.
use crate::common::units::Twips;
use crate::docx::annotate::SemanticAnnotation;
use crate::docx::bookmark::Bookmark;
use crate::docx::content_control::ContentControl;
use crate::docx::enums::{Alignment, LineRule};
use crate::docx::hyperlink::Hyperlink;
use crate::docx::revision::Revision;
use crate::docx::run::{Run, RunContent};
use smallvec::SmallVec;

/// A paragraph: ordered runs plus properties and attachments.
///
/// A paragraph's identity for indexed operations is its position among the
/// body's top-level paragraphs; paragraphs nested in table cells are not
/// part of that index.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Paragraph {
    pub runs: Vec<Run>,
    pub properties: ParagraphProperties,
    /// Advisory classification, never consulted by the serializer
    pub annotation: Option<SemanticAnnotation>,
    /// Bookmarks wrapping this paragraph's content
    pub bookmarks: Vec<Bookmark>,
    /// Hyperlinks rendered after the runs, each owning its display runs
    pub hyperlinks: Vec<Hyperlink>,
    /// Inline content controls rendered after the hyperlinks
    pub content_controls: Vec<ContentControl>,
    /// Tracked changes rendered after the content controls
    pub revisions: Vec<Revision>,
    /// Comments anchored to this paragraph (range marks + reference)
    pub comment_ids: SmallVec<[u32; 2]>,
    /// Footnote references carried by this paragraph's runs (derived index)
    pub footnote_ids: SmallVec<[u32; 2]>,
    /// Endnote references carried by this paragraph's runs (derived index)
    pub endnote_ids: SmallVec<[u32; 2]>,
}

impl Paragraph {
    /// Create an empty paragraph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a paragraph holding a single text run.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            runs: vec![Run::text(text)],
            ..Self::default()
        }
    }

    /// Concatenated plain text of all runs and hyperlink display runs.
    pub fn text(&self) -> String {
        let mut out = String::new();
        for run in &self.runs {
            out.push_str(run.plain_text());
        }
        for link in &self.hyperlinks {
            for run in &link.runs {
                out.push_str(run.plain_text());
            }
        }
        out
    }

    /// Replace all content with a single text run, keeping properties.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.runs = vec![Run::text(text)];
        self.hyperlinks.clear();
    }

    /// Append a run.
    pub fn push_run(&mut self, run: Run) -> &mut Run {
        self.runs.push(run);
        self.runs.last_mut().expect("just pushed")
    }

    /// Whether any run carries a drawing.
    pub fn has_drawing(&self) -> bool {
        self.runs
            .iter()
            .any(|r| matches!(r.content, RunContent::Drawing(_)))
    }

    /// Whether any run carries OMML math markup.
    pub fn has_formula(&self) -> bool {
        self.runs.iter().any(|r| r.is_formula())
    }
}

/// Paragraph-level formatting (`w:pPr`).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParagraphProperties {
    /// Style ID (`w:pStyle`), resolved against the document's style table
    pub style_id: Option<String>,
    pub alignment: Option<Alignment>,
    /// List membership (`w:numPr`)
    pub numbering: Option<NumberingRef>,
    pub space_before: Option<Twips>,
    pub space_after: Option<Twips>,
    /// Line spacing value with its rule; 240 = single under `Auto`
    pub line_spacing: Option<(i64, LineRule)>,
    pub indent_left: Option<Twips>,
    pub indent_right: Option<Twips>,
    /// Positive = first-line indent, negative = hanging indent
    pub indent_first_line: Option<Twips>,
    pub page_break_before: bool,
    pub keep_next: bool,
}

impl ParagraphProperties {
    /// Whether any property is set (gates `<w:pPr>` emission).
    pub fn has_properties(&self) -> bool {
        self.style_id.is_some()
            || self.alignment.is_some()
            || self.numbering.is_some()
            || self.space_before.is_some()
            || self.space_after.is_some()
            || self.line_spacing.is_some()
            || self.indent_left.is_some()
            || self.indent_right.is_some()
            || self.indent_first_line.is_some()
            || self.page_break_before
            || self.keep_next
    }
}

/// Reference into the numbering table (`w:numPr`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberingRef {
    /// `w:numId`, resolved through `Num` to an `AbstractNum`
    pub num_id: u32,
    /// Nesting level 0-8 (`w:ilvl`)
    pub level: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_concatenates_runs() {
        let mut para = Paragraph::with_text("Hello, ");
        para.push_run(Run::text("world"));
        assert_eq!(para.text(), "Hello, world");
    }

    #[test]
    fn set_text_replaces_content() {
        let mut para = Paragraph::with_text("old");
        para.properties.alignment = Some(Alignment::Center);
        para.set_text("new");
        assert_eq!(para.text(), "new");
        assert_eq!(para.properties.alignment, Some(Alignment::Center));
    }

    #[test]
    fn empty_properties_not_emitted() {
        assert!(!ParagraphProperties::default().has_properties());
        let props = ParagraphProperties {
            page_break_before: true,
            ..Default::default()
        };
        assert!(props.has_properties());
    }
}
