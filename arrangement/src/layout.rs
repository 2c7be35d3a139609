//! Grid layout engine.
//!
//! A pure function from slot widths, container width, cell size and gap to a
//! [`GridPlan`]. Nothing here touches the element tree; the widget applies
//! the plan in a single place.

/// Uniform item size, taken from the first item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellSize {
    pub width: i32,
    pub height: i32,
}

impl CellSize {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// Where one slot lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub row: usize,
    pub column: usize,
    /// Offset from the container's left edge.
    pub left: i32,
    /// Offset from the container's top edge.
    pub top: i32,
}

/// Result of one layout pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridPlan {
    pub columns: usize,
    pub rows: usize,
    /// One entry per slot, in slot order.
    pub placements: Vec<Placement>,
    /// Height that fits every row plus the outer gaps.
    pub container_height: i32,
}

/// Number of columns that fit: `floor((width - gap) / (cell + gap))`,
/// never less than one.
pub fn column_count(container_width: i32, cell_width: i32, gap: i32) -> usize {
    let pitch = cell_width + gap;
    if pitch <= 0 {
        return 1;
    }
    (container_width - gap).div_euclid(pitch).max(1) as usize
}

/// Tile slots left to right, top to bottom.
///
/// `widths` holds each slot's rendered width in slot order. Rows advance by
/// the uniform cell height; within a row the left offset accumulates the
/// actual widths of the preceding slots, so only equal widths tile exactly.
/// Returns None for an empty slot list.
pub fn plan(widths: &[i32], container_width: i32, cell: CellSize, gap: i32) -> Option<GridPlan> {
    if widths.is_empty() {
        return None;
    }

    let columns = column_count(container_width, cell.width, gap);
    let rows = widths.len().div_ceil(columns);

    let mut placements = Vec::with_capacity(widths.len());
    let mut row_left = 0;

    for (index, width) in widths.iter().enumerate() {
        let row = index / columns;
        let column = index % columns;
        if column == 0 {
            row_left = 0;
        }

        placements.push(Placement {
            row,
            column,
            left: row_left + gap,
            top: row as i32 * (cell.height + gap) + gap,
        });

        row_left += width + gap;
    }

    Some(GridPlan {
        columns,
        rows,
        placements,
        container_height: rows as i32 * (cell.height + gap) + gap,
    })
}
