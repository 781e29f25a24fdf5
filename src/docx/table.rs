/// Tables: rows, cells, and merge operations.
use crate::common::error::{DocxError, Result};
use crate::common::units::Twips;
use crate::docx::enums::VerticalMerge;
use crate::docx::paragraph::Paragraph;

/// A table cell. Always holds at least one paragraph; OOXML requires a
/// closing paragraph in every cell and normalization happens at
/// construction and after mutation rather than at write time.
#[derive(Debug, Clone, PartialEq)]
pub struct TableCell {
    pub paragraphs: Vec<Paragraph>,
    /// Preferred width (`w:tcW`, dxa)
    pub width: Option<Twips>,
    /// Columns spanned (`w:gridSpan`); 1 = no span
    pub grid_span: u32,
    /// Vertical merge state (`w:vMerge`)
    pub v_merge: Option<VerticalMerge>,
    /// Fill color, RRGGBB (`w:shd`)
    pub shading: Option<String>,
}

impl Default for TableCell {
    fn default() -> Self {
        Self {
            paragraphs: vec![Paragraph::new()],
            width: None,
            grid_span: 1,
            v_merge: None,
            shading: None,
        }
    }
}

impl TableCell {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            paragraphs: vec![Paragraph::with_text(text)],
            ..Self::default()
        }
    }

    /// Concatenated plain text of the cell's paragraphs, newline-joined.
    pub fn text(&self) -> String {
        self.paragraphs
            .iter()
            .map(|p| p.text())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Replace the cell's content with a single text paragraph.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.paragraphs = vec![Paragraph::with_text(text)];
    }

    /// Restore the at-least-one-paragraph invariant after mutation.
    pub fn normalize(&mut self) {
        if self.paragraphs.is_empty() {
            self.paragraphs.push(Paragraph::new());
        }
    }
}

/// A table row.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TableRow {
    pub cells: Vec<TableCell>,
    /// Row height (`w:trHeight`, dxa)
    pub height: Option<Twips>,
    /// Repeat as header row on each page (`w:tblHeader`)
    pub is_header: bool,
}

impl TableRow {
    /// A row of `cols` empty cells.
    pub fn empty(cols: usize) -> Self {
        Self {
            cells: (0..cols).map(|_| TableCell::default()).collect(),
            height: None,
            is_header: false,
        }
    }
}

/// A table. Rows may be ragged after horizontal merges; the grid column
/// count is the widest row's span total.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    pub rows: Vec<TableRow>,
    /// Preferred table width (`w:tblW`, dxa); auto-fit when unset
    pub width: Option<Twips>,
    /// Table style ID (`w:tblStyle`)
    pub style_id: Option<String>,
}

impl Table {
    /// A `rows` x `cols` table of empty cells.
    pub fn empty(rows: usize, cols: usize) -> Self {
        Self {
            rows: (0..rows).map(|_| TableRow::empty(cols)).collect(),
            width: None,
            style_id: None,
        }
    }

    /// Number of grid columns: the widest row counting spans.
    pub fn column_count(&self) -> usize {
        self.rows
            .iter()
            .map(|r| r.cells.iter().map(|c| c.grid_span as usize).sum())
            .max()
            .unwrap_or(0)
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&TableCell> {
        self.rows.get(row)?.cells.get(col)
    }

    pub fn cell_mut(&mut self, row: usize, col: usize) -> Option<&mut TableCell> {
        self.rows.get_mut(row)?.cells.get_mut(col)
    }

    /// Merge columns `[start_col, end_col]` of one row into a single cell.
    /// Columns are numbered from 1; merging columns 1-3 of a four-column
    /// row leaves two cells, the first spanning three grid columns.
    ///
    /// The surviving cell's `grid_span` grows by the spans of the absorbed
    /// cells, whose content is appended to it before they are removed from
    /// the row. Absorbed cells are removed in reverse order so earlier
    /// removals do not shift later indices.
    pub fn merge_cells_horizontal(
        &mut self,
        row: usize,
        start_col: usize,
        end_col: usize,
    ) -> Result<()> {
        if start_col == 0 || start_col >= end_col {
            return Err(DocxError::InvalidParameter(format!(
                "horizontal merge needs 1 <= start < end, got {}..={}",
                start_col, end_col
            )));
        }
        let row_len = self
            .rows
            .get(row)
            .ok_or(DocxError::InvalidIndex {
                what: "table row",
                index: row,
                len: self.rows.len(),
            })?
            .cells
            .len();
        if end_col > row_len {
            return Err(DocxError::InvalidIndex {
                what: "table cell",
                index: end_col,
                len: row_len,
            });
        }
        let (start, end) = (start_col - 1, end_col - 1);

        let cells = &mut self.rows[row].cells;
        let mut absorbed_span = 0u32;
        let mut absorbed_paragraphs = Vec::new();
        for col in (start + 1..=end).rev() {
            let cell = cells.remove(col);
            absorbed_span += cell.grid_span;
            // reversed removal order, so prepend to keep document order
            let mut paras = cell.paragraphs;
            paras.retain(|p| !p.runs.is_empty() || p.properties.has_properties());
            absorbed_paragraphs.splice(0..0, paras);
        }
        let survivor = &mut cells[start];
        survivor.grid_span += absorbed_span;
        survivor.paragraphs.extend(absorbed_paragraphs);
        survivor.normalize();
        Ok(())
    }

    /// Merge cells of one column across rows `[start_row, end_row]`.
    /// Rows are numbered from 1, matching the column numbering of
    /// [`merge_cells_horizontal`](Self::merge_cells_horizontal).
    ///
    /// The top cell is marked `vMerge restart` and keeps its content; the
    /// cells below become `vMerge continue` with their content cleared.
    /// All cells stay in their rows.
    pub fn merge_cells_vertical(
        &mut self,
        col: usize,
        start_row: usize,
        end_row: usize,
    ) -> Result<()> {
        if start_row == 0 || start_row >= end_row {
            return Err(DocxError::InvalidParameter(format!(
                "vertical merge needs 1 <= start < end, got {}..={}",
                start_row, end_row
            )));
        }
        if end_row > self.rows.len() {
            return Err(DocxError::InvalidIndex {
                what: "table row",
                index: end_row,
                len: self.rows.len(),
            });
        }
        let (start, end) = (start_row - 1, end_row - 1);
        for row in start..=end {
            let row_len = self.rows[row].cells.len();
            if col >= row_len {
                return Err(DocxError::InvalidIndex {
                    what: "table cell",
                    index: col,
                    len: row_len,
                });
            }
        }

        self.rows[start].cells[col].v_merge = Some(VerticalMerge::Restart);
        for row in start + 1..=end {
            let cell = &mut self.rows[row].cells[col];
            cell.v_merge = Some(VerticalMerge::Continue);
            cell.paragraphs = vec![Paragraph::new()];
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_table_shape() {
        let table = Table::empty(2, 3);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.column_count(), 3);
        assert_eq!(table.cell(0, 0).unwrap().paragraphs.len(), 1);
    }

    #[test]
    fn horizontal_merge_absorbs_cells() {
        let mut table = Table::empty(1, 4);
        table.cell_mut(0, 1).unwrap().set_text("b");
        table.cell_mut(0, 2).unwrap().set_text("c");
        table.merge_cells_horizontal(0, 1, 3).unwrap();
        // 4 cells - 2 absorbed = 2, and the first cell carries the span
        assert_eq!(table.rows[0].cells.len(), 2);
        assert_eq!(table.rows[0].cells[0].grid_span, 3);
        assert_eq!(table.column_count(), 4);
        assert_eq!(table.rows[0].cells[0].text(), "\nb\nc");
    }

    #[test]
    fn horizontal_merge_from_an_inner_column() {
        let mut table = Table::empty(1, 4);
        table.cell_mut(0, 1).unwrap().set_text("mid");
        table.merge_cells_horizontal(0, 2, 4).unwrap();
        assert_eq!(table.rows[0].cells.len(), 2);
        assert_eq!(table.rows[0].cells[0].grid_span, 1);
        assert_eq!(table.rows[0].cells[1].grid_span, 3);
        assert_eq!(table.rows[0].cells[1].text(), "mid");
        assert_eq!(table.column_count(), 4);
    }

    #[test]
    fn horizontal_merge_rejects_bad_range() {
        let mut table = Table::empty(1, 2);
        assert!(table.merge_cells_horizontal(0, 1, 1).is_err());
        // column numbers start at 1
        assert!(table.merge_cells_horizontal(0, 0, 2).is_err());
        assert!(table.merge_cells_horizontal(0, 1, 5).is_err());
        assert!(table.merge_cells_horizontal(3, 1, 2).is_err());
        // failed calls leave the table unchanged
        assert_eq!(table.rows[0].cells.len(), 2);
    }

    #[test]
    fn vertical_merge_keeps_cells_in_rows() {
        let mut table = Table::empty(3, 2);
        table.cell_mut(0, 0).unwrap().set_text("top");
        table.cell_mut(1, 0).unwrap().set_text("gone");
        table.merge_cells_vertical(0, 1, 3).unwrap();
        assert_eq!(table.rows[0].cells[0].v_merge, Some(VerticalMerge::Restart));
        assert_eq!(
            table.rows[1].cells[0].v_merge,
            Some(VerticalMerge::Continue)
        );
        assert_eq!(table.rows[2].cells[0].v_merge, Some(VerticalMerge::Continue));
        assert_eq!(table.rows[0].cells[0].text(), "top");
        assert_eq!(table.rows[1].cells[0].text(), "");
        // every row still holds both cells
        assert!(table.rows.iter().all(|r| r.cells.len() == 2));
    }

    #[test]
    fn vertical_merge_rejects_bad_range() {
        let mut table = Table::empty(2, 2);
        assert!(table.merge_cells_vertical(0, 1, 1).is_err());
        // row numbers start at 1
        assert!(table.merge_cells_vertical(0, 0, 2).is_err());
        assert!(table.merge_cells_vertical(0, 1, 4).is_err());
        assert!(table.merge_cells_vertical(7, 1, 2).is_err());
    }

    #[test]
    fn normalize_restores_paragraph() {
        let mut cell = TableCell::default();
        cell.paragraphs.clear();
        cell.normalize();
        assert_eq!(cell.paragraphs.len(), 1);
    }
}
