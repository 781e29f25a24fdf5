/// Inline drawings referencing image parts.
use crate::common::units::Emu;

/// An inline drawing embedded in a run.
///
/// The drawing itself holds only geometry and the relationship ID; the
/// image bytes live in the document's image collection under the same ID.
#[derive(Debug, Clone, PartialEq)]
pub struct Drawing {
    /// Relationship ID of the image part (`r:embed`)
    pub rel_id: String,
    /// Display name / alt text
    pub name: String,
    /// Extent width
    pub width: Emu,
    /// Extent height
    pub height: Emu,
}

impl Drawing {
    /// Create a drawing with pixel dimensions (converted at 9,525 EMU/px).
    pub fn from_pixels(rel_id: impl Into<String>, name: impl Into<String>, width_px: u32, height_px: u32) -> Self {
        Self {
            rel_id: rel_id.into(),
            name: name.into(),
            width: Emu::from_pixels(width_px),
            height: Emu::from_pixels(height_px),
        }
    }

    /// Extent width in pixels, rounded.
    pub fn width_px(&self) -> u32 {
        self.width.to_pixels()
    }

    /// Extent height in pixels, rounded.
    pub fn height_px(&self) -> u32 {
        self.height.to_pixels()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixel_dimensions_roundtrip() {
        let d = Drawing::from_pixels("rId7", "a.png", 100, 50);
        assert_eq!(d.width, Emu(952_500));
        assert_eq!(d.height, Emu(476_250));
        assert_eq!(d.width_px(), 100);
        assert_eq!(d.height_px(), 50);
    }
}
