/// Enumerations for WordprocessingML attribute values.
///
/// Each enumeration carries a `to_xml`/`from_xml` pair mapping to the
/// attribute values used in the package XML. `from_xml` returns `None` for
/// unrecognized values so callers can skip the offending element rather than
/// fail the document.
use std::fmt;

/// Paragraph alignment (`w:jc`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Alignment {
    Left,
    Center,
    Right,
    /// Justified ("both" in the XML)
    Justify,
    Distribute,
}

impl Alignment {
    #[inline]
    pub const fn to_xml(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
            Self::Justify => "both",
            Self::Distribute => "distribute",
        }
    }

    #[inline]
    pub fn from_xml(s: &str) -> Option<Self> {
        match s {
            "left" | "start" => Some(Self::Left),
            "center" => Some(Self::Center),
            "right" | "end" => Some(Self::Right),
            "both" | "justify" => Some(Self::Justify),
            "distribute" => Some(Self::Distribute),
            _ => None,
        }
    }
}

/// Underline styles (`w:u`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnderlineStyle {
    Single,
    Double,
    Thick,
    Dotted,
    Dashed,
    DotDash,
    DotDotDash,
    Wave,
    None,
}

impl UnderlineStyle {
    #[inline]
    pub const fn to_xml(self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Double => "double",
            Self::Thick => "thick",
            Self::Dotted => "dotted",
            Self::Dashed => "dash",
            Self::DotDash => "dotDash",
            Self::DotDotDash => "dotDotDash",
            Self::Wave => "wave",
            Self::None => "none",
        }
    }

    #[inline]
    pub fn from_xml(s: &str) -> Option<Self> {
        match s {
            "single" => Some(Self::Single),
            "double" => Some(Self::Double),
            "thick" => Some(Self::Thick),
            "dotted" => Some(Self::Dotted),
            "dash" => Some(Self::Dashed),
            "dotDash" => Some(Self::DotDash),
            "dotDotDash" => Some(Self::DotDotDash),
            "wave" => Some(Self::Wave),
            "none" => Some(Self::None),
            _ => None,
        }
    }
}

/// Border styles for paragraph and table borders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BorderStyle {
    None,
    Single,
    Thick,
    Double,
    Dotted,
    Dashed,
    DotDash,
    DotDotDash,
}

impl BorderStyle {
    #[inline]
    pub const fn to_xml(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Single => "single",
            Self::Thick => "thick",
            Self::Double => "double",
            Self::Dotted => "dotted",
            Self::Dashed => "dashed",
            Self::DotDash => "dotDash",
            Self::DotDotDash => "dotDotDash",
        }
    }

    #[inline]
    pub fn from_xml(s: &str) -> Option<Self> {
        match s {
            "none" | "nil" => Some(Self::None),
            "single" => Some(Self::Single),
            "thick" => Some(Self::Thick),
            "double" => Some(Self::Double),
            "dotted" => Some(Self::Dotted),
            "dashed" => Some(Self::Dashed),
            "dotDash" => Some(Self::DotDash),
            "dotDotDash" => Some(Self::DotDotDash),
            _ => None,
        }
    }
}

/// Style type (`w:style/@w:type`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleType {
    Paragraph,
    Character,
    Table,
    Numbering,
}

impl StyleType {
    #[inline]
    pub const fn to_xml(self) -> &'static str {
        match self {
            Self::Paragraph => "paragraph",
            Self::Character => "character",
            Self::Table => "table",
            Self::Numbering => "numbering",
        }
    }

    #[inline]
    pub fn from_xml(s: &str) -> Option<Self> {
        match s {
            "paragraph" => Some(Self::Paragraph),
            "character" => Some(Self::Character),
            "table" => Some(Self::Table),
            "numbering" => Some(Self::Numbering),
            _ => None,
        }
    }
}

impl Default for StyleType {
    /// A `w:style` element without a `w:type` attribute is a paragraph style.
    #[inline]
    fn default() -> Self {
        Self::Paragraph
    }
}

impl fmt::Display for StyleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_xml())
    }
}

/// Numbering level format (`w:numFmt`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberFormat {
    Decimal,
    Bullet,
    LowerLetter,
    UpperLetter,
    LowerRoman,
    UpperRoman,
    None,
}

impl NumberFormat {
    #[inline]
    pub const fn to_xml(self) -> &'static str {
        match self {
            Self::Decimal => "decimal",
            Self::Bullet => "bullet",
            Self::LowerLetter => "lowerLetter",
            Self::UpperLetter => "upperLetter",
            Self::LowerRoman => "lowerRoman",
            Self::UpperRoman => "upperRoman",
            Self::None => "none",
        }
    }

    #[inline]
    pub fn from_xml(s: &str) -> Option<Self> {
        match s {
            "decimal" => Some(Self::Decimal),
            "bullet" => Some(Self::Bullet),
            "lowerLetter" => Some(Self::LowerLetter),
            "upperLetter" => Some(Self::UpperLetter),
            "lowerRoman" => Some(Self::LowerRoman),
            "upperRoman" => Some(Self::UpperRoman),
            "none" => Some(Self::None),
            _ => None,
        }
    }
}

/// Vertical merge state of a table cell (`w:vMerge`).
///
/// Horizontal merge removes absorbed cells from the row; vertical merge
/// keeps one cell per row and marks continuation with this flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerticalMerge {
    /// First cell of a vertically merged region
    Restart,
    /// Continuation cell, rendered as part of the cell above
    Continue,
}

impl VerticalMerge {
    #[inline]
    pub const fn to_xml(self) -> &'static str {
        match self {
            Self::Restart => "restart",
            Self::Continue => "continue",
        }
    }

    #[inline]
    pub fn from_xml(s: &str) -> Option<Self> {
        match s {
            "restart" => Some(Self::Restart),
            // An empty or bare w:vMerge means continue; callers map that case
            "continue" => Some(Self::Continue),
            _ => None,
        }
    }
}

/// Page orientation (`w:pgSz/@w:orient`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PageOrientation {
    #[default]
    Portrait,
    Landscape,
}

impl PageOrientation {
    #[inline]
    pub const fn to_xml(self) -> &'static str {
        match self {
            Self::Portrait => "portrait",
            Self::Landscape => "landscape",
        }
    }

    #[inline]
    pub fn from_xml(s: &str) -> Option<Self> {
        match s {
            "portrait" => Some(Self::Portrait),
            "landscape" => Some(Self::Landscape),
            _ => None,
        }
    }
}

/// Line spacing rule (`w:spacing/@w:lineRule`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LineRule {
    #[default]
    Auto,
    Exact,
    AtLeast,
}

impl LineRule {
    #[inline]
    pub const fn to_xml(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Exact => "exact",
            Self::AtLeast => "atLeast",
        }
    }

    #[inline]
    pub fn from_xml(s: &str) -> Option<Self> {
        match s {
            "auto" => Some(Self::Auto),
            "exact" => Some(Self::Exact),
            "atLeast" => Some(Self::AtLeast),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alignment_xml_mapping() {
        assert_eq!(Alignment::Justify.to_xml(), "both");
        assert_eq!(Alignment::from_xml("both"), Some(Alignment::Justify));
        assert_eq!(Alignment::from_xml("start"), Some(Alignment::Left));
        assert_eq!(Alignment::from_xml("wavy"), None);
    }

    #[test]
    fn style_type_defaults_to_paragraph() {
        assert_eq!(StyleType::default(), StyleType::Paragraph);
        assert_eq!(StyleType::from_xml("character"), Some(StyleType::Character));
    }

    #[test]
    fn number_format_roundtrip() {
        for fmt in [
            NumberFormat::Decimal,
            NumberFormat::Bullet,
            NumberFormat::LowerRoman,
        ] {
            assert_eq!(NumberFormat::from_xml(fmt.to_xml()), Some(fmt));
        }
    }
}
