/// Embedded image parts and format detection.
use crate::opc::constants::content_type as ct;

/// Image format, detected from the byte signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    Png,
    Jpeg,
    Gif,
    Bmp,
    Tiff,
    Webp,
}

impl ImageFormat {
    /// Detect image format from byte signature.
    pub fn detect_from_bytes(data: &[u8]) -> Option<Self> {
        if data.len() < 8 {
            return None;
        }

        // PNG signature
        if data.starts_with(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]) {
            return Some(Self::Png);
        }

        // JPEG signature
        if data.starts_with(&[0xFF, 0xD8, 0xFF]) {
            return Some(Self::Jpeg);
        }

        // GIF signature
        if data.starts_with(b"GIF87a") || data.starts_with(b"GIF89a") {
            return Some(Self::Gif);
        }

        // BMP signature
        if data.starts_with(b"BM") {
            return Some(Self::Bmp);
        }

        // TIFF signature (little-endian and big-endian)
        if data.starts_with(&[0x49, 0x49, 0x2A, 0x00])
            || data.starts_with(&[0x4D, 0x4D, 0x00, 0x2A])
        {
            return Some(Self::Tiff);
        }

        // WebP: RIFF container with WEBP fourcc
        if data.len() >= 12 && data.starts_with(b"RIFF") && &data[8..12] == b"WEBP" {
            return Some(Self::Webp);
        }

        None
    }

    /// Detect format from a file extension.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "png" => Some(Self::Png),
            "jpg" | "jpeg" => Some(Self::Jpeg),
            "gif" => Some(Self::Gif),
            "bmp" => Some(Self::Bmp),
            "tif" | "tiff" => Some(Self::Tiff),
            "webp" => Some(Self::Webp),
            _ => None,
        }
    }

    /// File extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpeg",
            Self::Gif => "gif",
            Self::Bmp => "bmp",
            Self::Tiff => "tiff",
            Self::Webp => "webp",
        }
    }

    /// MIME content type for this format.
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Png => ct::PNG,
            Self::Jpeg => ct::JPEG,
            Self::Gif => ct::GIF,
            Self::Bmp => ct::BMP,
            Self::Tiff => ct::TIFF,
            Self::Webp => ct::WEBP,
        }
    }
}

/// An image stored in the package's media directory.
///
/// Holds the raw bytes in full; large embedded media dominates memory cost.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageRef {
    /// Relationship ID (`rId...`), unique within the document
    pub rel_id: String,
    /// File name under `word/media/`
    pub file_name: String,
    /// Raw image bytes
    pub data: Vec<u8>,
    /// Detected format, `None` when the signature is unrecognized
    pub format: Option<ImageFormat>,
}

impl ImageRef {
    /// Content type of the image, falling back to octet-stream when the
    /// format is unknown.
    pub fn content_type(&self) -> &'static str {
        self.format
            .map(|f| f.mime_type())
            .unwrap_or(ct::OCTET_STREAM)
    }

    /// Path of this image inside the package.
    pub fn part_path(&self) -> String {
        format!("{}/{}", crate::opc::constants::part::MEDIA_DIR, self.file_name)
    }

    /// File extension of the stored file name, if any.
    pub fn extension(&self) -> Option<&str> {
        self.file_name.rsplit_once('.').map(|(_, ext)| ext)
    }
}
