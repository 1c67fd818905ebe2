//! Table and cell presentation modifiers.

/// Visual variants of a table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableStyle {
    /// Highlight the row under the pointer.
    pub hover: bool,
    /// Reduced cell padding.
    pub condensed: bool,
}

impl TableStyle {
    pub const fn hover() -> Self {
        TableStyle {
            hover: true,
            condensed: false,
        }
    }

    pub const fn condensed() -> Self {
        TableStyle {
            hover: false,
            condensed: true,
        }
    }
}

/// Spanning of a single table cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CellStyle {
    pub colspan: Option<u32>,
    pub rowspan: Option<u32>,
}

impl CellStyle {
    pub const fn colspan(columns: u32) -> Self {
        CellStyle {
            colspan: Some(columns),
            rowspan: None,
        }
    }

    pub const fn rowspan(rows: u32) -> Self {
        CellStyle {
            colspan: None,
            rowspan: Some(rows),
        }
    }
}
