/// Relationship ID allocation for the document part.
///
/// IDs are handed out by a monotonic per-document counter and stored with
/// the entries that own them; they are never recomputed from collection
/// sizes, so deletions can leave gaps without breaking later insertions.

/// Reserved ID for `word/styles.xml`.
pub const RID_STYLES: &str = "rId1";
/// Reserved ID for `word/settings.xml`.
pub const RID_SETTINGS: &str = "rId2";
/// Reserved ID for `word/fontTable.xml`.
pub const RID_FONT_TABLE: &str = "rId3";
/// Reserved ID for `word/numbering.xml`.
pub const RID_NUMBERING: &str = "rId4";

/// First ID available to dynamic relationships.
const FIRST_DYNAMIC: u32 = 5;

/// Monotonic allocator for dynamic relationship IDs.
///
/// `rId1`-`rId4` are reserved for the fixed part relationships; dynamic
/// entries (images, hyperlinks, headers, footers, comments, notes) start
/// at `rId5`. After parsing, the counter resumes past the highest ID seen
/// so new allocations never collide with parsed ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelIdAllocator {
    next: u32,
}

impl Default for RelIdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl RelIdAllocator {
    pub fn new() -> Self {
        Self {
            next: FIRST_DYNAMIC,
        }
    }

    /// Hand out the next ID, advancing the counter.
    pub fn allocate(&mut self) -> String {
        let id = format!("rId{}", self.next);
        self.next += 1;
        id
    }

    /// Record an ID observed during parsing so future allocations start
    /// past it. Non-numeric suffixes are ignored.
    pub fn observe(&mut self, rel_id: &str) {
        if let Some(n) = rel_id
            .strip_prefix("rId")
            .and_then(|s| s.parse::<u32>().ok())
        {
            self.next = self.next.max(n + 1);
        }
    }
}
