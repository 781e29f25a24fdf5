//! Measurement units used throughout WordprocessingML.
//!
//! Twips (1/20 point) measure spacing, indentation, and page geometry;
//! EMUs (English Metric Units, 914,400 per inch) measure drawing extents.

/// EMUs per inch.
pub const EMU_PER_INCH: i64 = 914_400;

/// EMUs per pixel at the conventional 96 DPI.
pub const EMU_PER_PIXEL: i64 = 9_525;

/// EMUs per point.
pub const EMU_PER_POINT: i64 = 12_700;

/// Twips per point.
pub const TWIPS_PER_POINT: i64 = 20;

/// Twips per inch.
pub const TWIPS_PER_INCH: i64 = 1_440;

/// A length in twips (1/20 of a point).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Twips(pub i64);

impl Twips {
    /// Convert a length in points to twips.
    #[inline]
    pub fn from_points(points: f64) -> Self {
        Self((points * TWIPS_PER_POINT as f64).round() as i64)
    }

    /// Convert a length in inches to twips.
    #[inline]
    pub fn from_inches(inches: f64) -> Self {
        Self((inches * TWIPS_PER_INCH as f64).round() as i64)
    }

    /// This length in points.
    #[inline]
    pub fn to_points(self) -> f64 {
        self.0 as f64 / TWIPS_PER_POINT as f64
    }
}

/// A length in English Metric Units (914,400 per inch).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Emu(pub i64);

impl Emu {
    /// Convert a pixel count (96 DPI) to EMUs.
    #[inline]
    pub fn from_pixels(px: u32) -> Self {
        Self(px as i64 * EMU_PER_PIXEL)
    }

    /// Convert a length in points to EMUs.
    #[inline]
    pub fn from_points(points: f64) -> Self {
        Self((points * EMU_PER_POINT as f64).round() as i64)
    }

    /// This length in pixels (96 DPI), rounded to nearest.
    #[inline]
    pub fn to_pixels(self) -> u32 {
        ((self.0 + EMU_PER_PIXEL / 2) / EMU_PER_PIXEL).max(0) as u32
    }
}
