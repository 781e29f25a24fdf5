/// Section properties: page geometry and header/footer references.
use crate::common::units::Twips;
use crate::docx::enums::PageOrientation;

/// Trailing section properties of the body (`w:sectPr`).
///
/// Defaults match a US Letter portrait page with one-inch margins, the
/// geometry Word seeds into a blank document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionProperties {
    pub page_width: Twips,
    pub page_height: Twips,
    pub margin_top: Twips,
    pub margin_bottom: Twips,
    pub margin_left: Twips,
    pub margin_right: Twips,
    /// Header/footer distance from the page edge
    pub header_distance: Twips,
    pub footer_distance: Twips,
    pub orientation: PageOrientation,
    /// Relationship IDs of default header parts, in creation order
    pub header_refs: Vec<String>,
    /// Relationship IDs of default footer parts, in creation order
    pub footer_refs: Vec<String>,
}

impl Default for SectionProperties {
    fn default() -> Self {
        Self {
            page_width: Twips(12_240),
            page_height: Twips(15_840),
            margin_top: Twips(1_440),
            margin_bottom: Twips(1_440),
            margin_left: Twips(1_440),
            margin_right: Twips(1_440),
            header_distance: Twips(720),
            footer_distance: Twips(720),
            orientation: PageOrientation::Portrait,
            header_refs: Vec::new(),
            footer_refs: Vec::new(),
        }
    }
}

impl SectionProperties {
    /// Swap page dimensions to match the requested orientation.
    pub fn set_orientation(&mut self, orientation: PageOrientation) {
        if orientation == self.orientation {
            return;
        }
        std::mem::swap(&mut self.page_width, &mut self.page_height);
        self.orientation = orientation;
    }
}
