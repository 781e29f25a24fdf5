/// The style table and its built-in seed styles.
use std::collections::HashSet;

use crate::common::error::{DocxError, Result};
use crate::common::units::Twips;
use crate::docx::enums::StyleType;
use crate::docx::paragraph::ParagraphProperties;
use crate::docx::run::RunProperties;

/// Style IDs seeded into every new document and protected from deletion.
pub const BUILT_IN: &[&str] = &[
    "Normal",
    "Title",
    "Subtitle",
    "Heading1",
    "Heading2",
    "Heading3",
];

/// A single style definition (`w:style`).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Style {
    /// Machine ID referenced by `w:pStyle`
    pub id: String,
    /// Display name (`w:name`)
    pub name: String,
    pub style_type: StyleType,
    /// Parent style ID (`w:basedOn`)
    pub based_on: Option<String>,
    /// Style applied to the following paragraph (`w:next`)
    pub next: Option<String>,
    pub paragraph: ParagraphProperties,
    pub run: RunProperties,
}

impl Style {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }
}

/// The document's style table, seeded with the styles Word puts in a
/// blank document.
#[derive(Debug, Clone, PartialEq)]
pub struct Styles {
    pub styles: Vec<Style>,
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            styles: built_in_styles(),
        }
    }
}

impl Styles {
    /// An empty table, used when reading a package that carries its own
    /// styles part.
    pub fn empty() -> Self {
        Self { styles: Vec::new() }
    }

    /// Look up a style by ID.
    pub fn get(&self, id: &str) -> Option<&Style> {
        self.styles.iter().find(|s| s.id == id)
    }

    /// Add a style, replacing any existing definition with the same ID.
    pub fn add(&mut self, style: Style) {
        if let Some(existing) = self.styles.iter_mut().find(|s| s.id == style.id) {
            *existing = style;
        } else {
            self.styles.push(style);
        }
    }

    /// Remove a style by ID.
    ///
    /// Built-in styles cannot be removed; paragraphs referencing a removed
    /// style fall back to Normal at render time, so no reference fixup is
    /// needed.
    pub fn remove(&mut self, id: &str) -> Result<()> {
        if BUILT_IN.contains(&id) {
            return Err(DocxError::InvalidParameter(format!(
                "cannot delete built-in style {:?}",
                id
            )));
        }
        let pos = self
            .styles
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| DocxError::InvalidParameter(format!("no such style: {:?}", id)))?;
        self.styles.remove(pos);
        Ok(())
    }

    /// Heading level 1-9 for a style ID, walking the `basedOn` chain.
    ///
    /// A style is a heading when its ID or display name matches
    /// `Heading<n>` / `heading <n>`, directly or through inheritance. The
    /// visited set guards against `basedOn` cycles in hostile input.
    pub fn heading_level(&self, style_id: &str) -> Option<u8> {
        let mut visited = HashSet::new();
        let mut current = style_id;
        loop {
            if !visited.insert(current.to_string()) {
                return None;
            }
            if let Some(level) = heading_level_of(current) {
                return Some(level);
            }
            let style = self.get(current)?;
            if let Some(level) = heading_level_of(&style.name) {
                return Some(level);
            }
            current = style.based_on.as_deref()?;
        }
    }

    /// Whether a style ID or display name denotes the document title.
    pub fn is_title(&self, style_id: &str) -> bool {
        self.matches_name(style_id, "Title")
    }

    /// Whether a style ID or display name denotes the subtitle.
    pub fn is_subtitle(&self, style_id: &str) -> bool {
        self.matches_name(style_id, "Subtitle")
    }

    fn matches_name(&self, style_id: &str, name: &str) -> bool {
        if style_id.eq_ignore_ascii_case(name) {
            return true;
        }
        self.get(style_id)
            .is_some_and(|s| s.name.eq_ignore_ascii_case(name))
    }
}

/// Match `Heading<n>` or `heading <n>` with n in 1-9.
fn heading_level_of(name: &str) -> Option<u8> {
    let rest = name
        .strip_prefix("Heading")
        .or_else(|| name.strip_prefix("heading"))?;
    let digits = rest.trim_start();
    if digits.len() != 1 {
        return None;
    }
    let n = digits.chars().next()?.to_digit(10)? as u8;
    (1..=9).contains(&n).then_some(n)
}

fn built_in_styles() -> Vec<Style> {
    let mut normal = Style::new("Normal", "Normal");
    normal.run.font_name = Some("Calibri".to_string());
    normal.run.font_size = Some(22); // half-points, 11pt

    let mut title = Style::new("Title", "Title");
    title.based_on = Some("Normal".to_string());
    title.next = Some("Normal".to_string());
    title.run.font_size = Some(56);
    title.paragraph.space_after = Some(Twips(80));

    let mut subtitle = Style::new("Subtitle", "Subtitle");
    subtitle.based_on = Some("Normal".to_string());
    subtitle.next = Some("Normal".to_string());
    subtitle.run.font_size = Some(30);
    subtitle.run.color = Some("595959".to_string());

    let heading = |n: u8, size: u32, before: i64| {
        let mut style = Style::new(format!("Heading{}", n), format!("heading {}", n));
        style.based_on = Some("Normal".to_string());
        style.next = Some("Normal".to_string());
        style.run.bold = Some(true);
        style.run.font_size = Some(size);
        style.run.color = Some("2E74B5".to_string());
        style.paragraph.keep_next = true;
        style.paragraph.space_before = Some(Twips(before));
        style
    };

    vec![
        normal,
        title,
        subtitle,
        heading(1, 32, 240),
        heading(2, 26, 40),
        heading(3, 24, 40),
    ]
}
