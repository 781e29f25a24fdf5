/// Part tree and container contract for .docx packages.
///
/// A [`PartTree`] maps internal part paths (e.g. `word/document.xml`) to raw
/// byte content. The [`Container`] trait is the collaborator contract for
/// turning a part tree into a compressed package byte stream and back;
/// [`ZipContainer`] is the default implementation.
use crate::common::error::{PackError, PackResult};
use std::collections::BTreeMap;
use std::io::{Cursor, Read, Write};

/// An extracted package: part path → byte content.
///
/// Backed by a `BTreeMap` so that iteration (and therefore packing) is
/// deterministically ordered by path.
#[derive(Debug, Clone, Default)]
pub struct PartTree {
    parts: BTreeMap<String, Vec<u8>>,
}

impl PartTree {
    /// Create an empty part tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a part.
    pub fn insert(&mut self, path: impl Into<String>, content: impl Into<Vec<u8>>) {
        self.parts.insert(path.into(), content.into());
    }

    /// Get a part's content by path.
    #[inline]
    pub fn get(&self, path: &str) -> Option<&[u8]> {
        self.parts.get(path).map(|v| v.as_slice())
    }

    /// Whether a part exists at the given path.
    #[inline]
    pub fn contains(&self, path: &str) -> bool {
        self.parts.contains_key(path)
    }

    /// Iterate over parts in path order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[u8])> {
        self.parts.iter().map(|(p, c)| (p.as_str(), c.as_slice()))
    }

    /// Paths of all parts, in order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.parts.keys().map(|p| p.as_str())
    }

    /// Number of parts.
    #[inline]
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Whether the tree holds no parts.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

/// Pack/unpack contract between the transcoding core and the container layer.
pub trait Container {
    /// Extract a compressed package byte stream into a part tree.
    fn unpack(&self, bytes: &[u8]) -> PackResult<PartTree>;

    /// Produce a compressed package byte stream from a part tree,
    /// deterministically ordered by path.
    fn pack(&self, tree: &PartTree) -> PackResult<Vec<u8>>;
}

/// Default ZIP-backed container using deflate compression.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZipContainer;

impl Container for ZipContainer {
    fn unpack(&self, bytes: &[u8]) -> PackResult<PartTree> {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes))?;
        let mut tree = PartTree::new();

        for i in 0..archive.len() {
            let mut entry = archive
                .by_index(i)
                .map_err(|e| PackError::Entry(e.to_string()))?;
            if entry.is_dir() {
                continue;
            }
            let name = entry.name().to_string();
            let mut content = Vec::with_capacity(entry.size() as usize);
            entry.read_to_end(&mut content)?;
            tree.insert(name, content);
        }

        Ok(tree)
    }

    fn pack(&self, tree: &PartTree) -> PackResult<Vec<u8>> {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        let options = zip::write::SimpleFileOptions::default()
            .compression_method(zip::CompressionMethod::Deflated);

        // BTreeMap iteration keeps the entry order stable across runs
        for (path, content) in tree.iter() {
            writer
                .start_file(path, options)
                .map_err(|e| PackError::Entry(e.to_string()))?;
            writer.write_all(content)?;
        }

        let cursor = writer
            .finish()
            .map_err(|e| PackError::Entry(e.to_string()))?;
        Ok(cursor.into_inner())
    }
}
