/// Runs: minimal spans of uniformly formatted content.
use crate::docx::annotate::SemanticAnnotation;
use crate::docx::drawing::Drawing;
use crate::docx::enums::UnderlineStyle;
use crate::docx::field::FieldCode;

/// Run content.
///
/// The raw-markup variant is the escape hatch for constructs the model does
/// not decompose (OMML math, nested SDT internals): the serializer writes it
/// through verbatim and the parser captures it verbatim, so dispatch stays
/// explicit and exhaustive.
#[derive(Debug, Clone, PartialEq)]
pub enum RunContent {
    /// Plain text
    Text(String),
    /// An inline drawing referencing an image part
    Drawing(Drawing),
    /// Verbatim WordprocessingML passed through unmodified
    RawMarkup(String),
    /// A field rendered as a fldChar begin/instrText/end sequence
    Field(FieldCode),
    /// Tab character
    Tab,
    /// Line break
    Break,
    /// Page break
    PageBreak,
    /// Footnote reference mark
    FootnoteReference(u32),
    /// Endnote reference mark
    EndnoteReference(u32),
}

/// A run: the smallest span of uniformly formatted content.
#[derive(Debug, Clone, PartialEq)]
pub struct Run {
    pub content: RunContent,
    pub properties: RunProperties,
    /// Advisory classification, never consulted by the serializer
    pub annotation: Option<SemanticAnnotation>,
}

impl Run {
    /// Create a text run.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: RunContent::Text(text.into()),
            properties: RunProperties::default(),
            annotation: None,
        }
    }

    /// Create a run with the given content.
    pub fn with_content(content: RunContent) -> Self {
        Self {
            content,
            properties: RunProperties::default(),
            annotation: None,
        }
    }

    /// The plain text of this run, empty for non-text content.
    pub fn plain_text(&self) -> &str {
        match &self.content {
            RunContent::Text(s) => s,
            _ => "",
        }
    }

    /// Set bold.
    pub fn bold(mut self, bold: bool) -> Self {
        self.properties.bold = Some(bold);
        self
    }

    /// Set italic.
    pub fn italic(mut self, italic: bool) -> Self {
        self.properties.italic = Some(italic);
        self
    }

    /// Set the underline style.
    pub fn underline(mut self, style: UnderlineStyle) -> Self {
        self.properties.underline = Some(style);
        self
    }

    /// Set font size in half-points (e.g., 24 = 12pt).
    pub fn font_size(mut self, half_points: u32) -> Self {
        self.properties.font_size = Some(half_points);
        self
    }

    /// Set the font name.
    pub fn font_name(mut self, name: impl Into<String>) -> Self {
        self.properties.font_name = Some(name.into());
        self
    }

    /// Set the text color as hex RGB (e.g., "FF0000").
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.properties.color = Some(color.into());
        self
    }

    /// Whether this run carries OMML math markup.
    pub fn is_formula(&self) -> bool {
        matches!(&self.content, RunContent::RawMarkup(m) if m.contains("<m:oMath"))
    }
}

/// Character formatting for a run.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RunProperties {
    pub bold: Option<bool>,
    pub italic: Option<bool>,
    pub strike: Option<bool>,
    pub underline: Option<UnderlineStyle>,
    /// Font size in half-points
    pub font_size: Option<u32>,
    pub font_name: Option<String>,
    /// Hex RGB, e.g. "FF0000"
    pub color: Option<String>,
    /// Highlight color name, e.g. "yellow"
    pub highlight: Option<String>,
}

impl RunProperties {
    /// Whether any property is set (gates `<w:rPr>` emission).
    pub fn has_properties(&self) -> bool {
        self.bold.is_some()
            || self.italic.is_some()
            || self.strike.is_some()
            || self.underline.is_some()
            || self.font_size.is_some()
            || self.font_name.is_some()
            || self.color.is_some()
            || self.highlight.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_properties() {
        let run = Run::text("hello").bold(true).font_size(28);
        assert_eq!(run.plain_text(), "hello");
        assert_eq!(run.properties.bold, Some(true));
        assert_eq!(run.properties.font_size, Some(28));
        assert!(run.properties.has_properties());
    }

    #[test]
    fn default_properties_are_empty() {
        assert!(!RunProperties::default().has_properties());
    }

    #[test]
    fn formula_detection() {
        let math = Run::with_content(RunContent::RawMarkup(
            "<m:oMath><m:r><m:t>x</m:t></m:r></m:oMath>".to_string(),
        ));
        assert!(math.is_formula());
        assert!(!Run::text("x = y").is_formula());
    }
}
