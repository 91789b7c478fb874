//! Inline cell editor for the summary table.
//!
//! At most one cell is open at a time. A commit closes the editor before the
//! patch is applied, so a second commit for the same cell (Enter followed by
//! the input losing focus) is a no-op.

use crate::grid::{Column, SummaryGrid};
use crate::patch::{CellPatch, CellValue, PatchError};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CellEditor {
    open: Option<(usize, usize)>,
    draft: String,
}

impl CellEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the editor on a cell, seeded with its current text.
    pub fn open(&mut self, grid: &SummaryGrid, row_index: usize, column: Column) {
        self.draft = grid.edit_text(row_index, column);
        self.open = Some((row_index, column.index()));
    }

    pub fn is_open_at(&self, row_index: usize, column: Column) -> bool {
        self.open == Some((row_index, column.index()))
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: String) {
        self.draft = text;
    }

    /// Close without touching the grid.
    pub fn cancel(&mut self) {
        self.open = None;
        self.draft.clear();
    }

    /// Close the editor and apply the draft to the grid.
    ///
    /// `None` when the editor is not open on this cell.
    pub fn commit(
        &mut self,
        grid: &mut SummaryGrid,
        row_index: usize,
        column: Column,
    ) -> Option<Result<CellValue, PatchError>> {
        if !self.is_open_at(row_index, column) {
            return None;
        }
        self.open = None;
        let value = std::mem::take(&mut self.draft);
        Some(grid.apply_patch(&CellPatch {
            row_index,
            column_index: column.index(),
            value,
        }))
    }
}
