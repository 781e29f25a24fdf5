//! Semantic classification of paragraphs.
//!
//! Annotations are advisory metadata layered over the structural model:
//! they help callers reason about document structure (outline extraction,
//! list reconstruction) but are never consulted when serializing, so a
//! stale annotation cannot corrupt output.

use crate::docx::enums::NumberFormat;
use crate::docx::numbering::Numbering;
use crate::docx::paragraph::Paragraph;
use crate::docx::run::RunContent;
use crate::docx::styles::Styles;

/// Glyphs that mark a level as a bullet list even when its number format
/// says otherwise. Covers the Unicode bullets Word uses plus the Symbol
/// and Wingdings private-use codepoints its stock definitions emit.
pub const BULLET_GLYPHS: &[char] = &[
    '\u{2022}', // •
    '\u{25CB}', // ○
    '\u{25A0}', // ■
    '\u{25A1}', // □
    '\u{25C6}', // ◆
    '\u{25C7}', // ◇
    '\u{25AA}', // ▪
    '\u{25AB}', // ▫
    '\u{25CF}', // ●
    '\u{F0B7}', // Symbol bullet
    '\u{F0A7}', // Wingdings square
];

/// What a paragraph is, structurally.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SemanticType {
    /// Outline heading, level 1-9
    Heading(u8),
    Title,
    Subtitle,
    BulletListItem { level: u8 },
    NumberedListItem { level: u8 },
    /// Paragraph whose only purpose is to force a page break
    PageBreak,
    /// Carries OMML math markup
    Formula,
    /// Carries an inline drawing
    Image,
    /// None of the above
    Paragraph,
}

/// Where an annotation came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnotationSource {
    /// Guessed from content when markup was inconclusive
    Inferred,
    /// Derived from explicit markup by the classification pass
    Classified,
    /// Recognized but awaiting a deeper classification
    Pending,
}

/// An advisory classification attached to a paragraph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SemanticAnnotation {
    pub kind: SemanticType,
    /// 0.0-1.0; explicit markup yields 1.0, inference less
    pub confidence: f32,
    pub source: AnnotationSource,
}

impl SemanticAnnotation {
    pub fn classified(kind: SemanticType, confidence: f32) -> Self {
        Self {
            kind,
            confidence,
            source: AnnotationSource::Classified,
        }
    }

    pub fn inferred(kind: SemanticType, confidence: f32) -> Self {
        Self {
            kind,
            confidence,
            source: AnnotationSource::Inferred,
        }
    }

    pub fn pending(kind: SemanticType) -> Self {
        Self {
            kind,
            confidence: 0.5,
            source: AnnotationSource::Pending,
        }
    }
}

/// Classify one paragraph against the document's styles and numbering.
///
/// Checks run in precedence order; the first match wins:
/// style-derived kinds (heading, title, subtitle), then list membership,
/// then content kinds (page break, formula, image), then plain paragraph.
pub fn annotate_paragraph(
    paragraph: &Paragraph,
    styles: &Styles,
    numbering: &Numbering,
) -> SemanticAnnotation {
    if let Some(style_id) = paragraph.properties.style_id.as_deref() {
        if let Some(level) = styles.heading_level(style_id) {
            return SemanticAnnotation::classified(SemanticType::Heading(level), 1.0);
        }
        if styles.is_title(style_id) {
            return SemanticAnnotation::classified(SemanticType::Title, 1.0);
        }
        if styles.is_subtitle(style_id) {
            return SemanticAnnotation::classified(SemanticType::Subtitle, 1.0);
        }
    }

    if let Some(num_ref) = paragraph.properties.numbering {
        return match numbering.level(num_ref.num_id, num_ref.level) {
            Some(level) if is_bullet_level(&level.text, level.format) => {
                SemanticAnnotation::classified(
                    SemanticType::BulletListItem {
                        level: num_ref.level,
                    },
                    1.0,
                )
            }
            Some(_) => SemanticAnnotation::classified(
                SemanticType::NumberedListItem {
                    level: num_ref.level,
                },
                1.0,
            ),
            // Dangling numId: a list item of unknown flavor, assume numbered
            None => SemanticAnnotation::inferred(
                SemanticType::NumberedListItem {
                    level: num_ref.level,
                },
                0.5,
            ),
        };
    }

    if is_page_break(paragraph) {
        return SemanticAnnotation::classified(SemanticType::PageBreak, 1.0);
    }
    if paragraph.has_formula() {
        return SemanticAnnotation::inferred(SemanticType::Formula, 0.8);
    }
    if paragraph.has_drawing() {
        return SemanticAnnotation::pending(SemanticType::Image);
    }

    SemanticAnnotation::classified(SemanticType::Paragraph, 1.0)
}

/// Whether a level's text or format marks it as a bullet.
fn is_bullet_level(text: &str, format: NumberFormat) -> bool {
    if format == NumberFormat::Bullet {
        return true;
    }
    text.chars().any(|c| BULLET_GLYPHS.contains(&c))
}

/// True for an explicit page-break-before paragraph, whatever else it
/// carries, and for a paragraph whose only content is a run-level page
/// break.
fn is_page_break(paragraph: &Paragraph) -> bool {
    if paragraph.properties.page_break_before {
        return true;
    }
    paragraph
        .runs
        .iter()
        .any(|r| matches!(r.content, RunContent::PageBreak))
        && paragraph.text().trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::docx::paragraph::NumberingRef;
    use crate::docx::run::Run;

    fn fixtures() -> (Styles, Numbering) {
        (Styles::default(), Numbering::default())
    }

    #[test]
    fn heading_style_wins() {
        let (styles, numbering) = fixtures();
        let mut para = Paragraph::with_text("Overview");
        para.properties.style_id = Some("Heading2".to_string());
        let ann = annotate_paragraph(&para, &styles, &numbering);
        assert_eq!(ann.kind, SemanticType::Heading(2));
        assert_eq!(ann.confidence, 1.0);
    }

    #[test]
    fn heading_beats_numbering() {
        // A numbered heading is still a heading.
        let (styles, mut numbering) = fixtures();
        let num_id = numbering.ensure_decimal();
        let mut para = Paragraph::with_text("1. Intro");
        para.properties.style_id = Some("Heading1".to_string());
        para.properties.numbering = Some(NumberingRef { num_id, level: 0 });
        let ann = annotate_paragraph(&para, &styles, &numbering);
        assert_eq!(ann.kind, SemanticType::Heading(1));
    }

    #[test]
    fn bullet_list_by_format() {
        let (styles, mut numbering) = fixtures();
        let num_id = numbering.ensure_bullet();
        let mut para = Paragraph::with_text("first item");
        para.properties.numbering = Some(NumberingRef { num_id, level: 1 });
        let ann = annotate_paragraph(&para, &styles, &numbering);
        assert_eq!(ann.kind, SemanticType::BulletListItem { level: 1 });
    }

    #[test]
    fn numbered_list_by_format() {
        let (styles, mut numbering) = fixtures();
        let num_id = numbering.ensure_decimal();
        let mut para = Paragraph::with_text("step one");
        para.properties.numbering = Some(NumberingRef { num_id, level: 0 });
        let ann = annotate_paragraph(&para, &styles, &numbering);
        assert_eq!(ann.kind, SemanticType::NumberedListItem { level: 0 });
    }

    #[test]
    fn dangling_num_id_is_low_confidence() {
        let (styles, numbering) = fixtures();
        let mut para = Paragraph::with_text("orphan");
        para.properties.numbering = Some(NumberingRef {
            num_id: 99,
            level: 0,
        });
        let ann = annotate_paragraph(&para, &styles, &numbering);
        assert_eq!(ann.kind, SemanticType::NumberedListItem { level: 0 });
        assert!(ann.confidence < 1.0);
        assert_eq!(ann.source, AnnotationSource::Inferred);
    }

    #[test]
    fn page_break_paragraph() {
        let (styles, numbering) = fixtures();
        let mut para = Paragraph::new();
        para.runs.push(Run::with_content(RunContent::PageBreak));
        let ann = annotate_paragraph(&para, &styles, &numbering);
        assert_eq!(ann.kind, SemanticType::PageBreak);
    }

    #[test]
    fn run_level_break_with_text_is_plain() {
        let (styles, numbering) = fixtures();
        let mut para = Paragraph::with_text("continued");
        para.runs.push(Run::with_content(RunContent::PageBreak));
        let ann = annotate_paragraph(&para, &styles, &numbering);
        assert_eq!(ann.kind, SemanticType::Paragraph);
    }

    #[test]
    fn page_break_before_flag_wins_over_text() {
        let (styles, numbering) = fixtures();
        let mut para = Paragraph::with_text("chapter opener");
        para.properties.page_break_before = true;
        let ann = annotate_paragraph(&para, &styles, &numbering);
        assert_eq!(ann.kind, SemanticType::PageBreak);
    }

    #[test]
    fn formula_and_image_are_tentative() {
        let (styles, numbering) = fixtures();
        let mut formula = Paragraph::new();
        formula.runs.push(Run::with_content(RunContent::RawMarkup(
            "<m:oMath><m:r><m:t>x</m:t></m:r></m:oMath>".to_string(),
        )));
        let ann = annotate_paragraph(&formula, &styles, &numbering);
        assert_eq!(ann.kind, SemanticType::Formula);
        assert_eq!(ann.source, AnnotationSource::Inferred);
        assert!(ann.confidence < 1.0);

        let mut image = Paragraph::new();
        image.runs.push(Run::with_content(RunContent::Drawing(
            crate::docx::drawing::Drawing::from_pixels("rId9", "pic.png", 10, 10),
        )));
        let ann = annotate_paragraph(&image, &styles, &numbering);
        assert_eq!(ann.kind, SemanticType::Image);
        assert_eq!(ann.source, AnnotationSource::Pending);
        assert!(ann.confidence < 1.0);
    }

    #[test]
    fn plain_paragraph_fallback() {
        let (styles, numbering) = fixtures();
        let para = Paragraph::with_text("just words");
        let ann = annotate_paragraph(&para, &styles, &numbering);
        assert_eq!(ann.kind, SemanticType::Paragraph);
    }
}
