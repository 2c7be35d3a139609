//! Drag state and the pointer-to-slot mapping.

use griddom::Rect;

use crate::layout::CellSize;

/// An item that is currently following the pointer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveDrag {
    /// Id of the dragged item.
    pub item: String,
    /// Slot index the item was picked up from.
    pub origin_index: usize,
    /// Item offset within the container at pickup.
    pub origin: (i32, i32),
    /// Pointer position minus item offset at pickup; frozen for the gesture.
    pub grab_offset: (i32, i32),
    /// Slot index the placeholder currently occupies.
    pub target_index: usize,
    /// Offset the last layout pass gave the placeholder.
    pub placeholder_at: (i32, i32),
}

impl ActiveDrag {
    /// Item offset within the container for a pointer position.
    pub fn item_offset(&self, pointer: (i32, i32)) -> (i32, i32) {
        (pointer.0 - self.grab_offset.0, pointer.1 - self.grab_offset.1)
    }
}

/// Tracks whether a drag gesture is in progress.
#[derive(Debug, Default)]
pub struct DragController {
    active: Option<ActiveDrag>,
}

impl DragController {
    pub fn new() -> Self {
        Self { active: None }
    }

    /// Enter the dragging state.
    pub fn begin(&mut self, drag: ActiveDrag) {
        self.active = Some(drag);
    }

    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    pub fn active(&self) -> Option<&ActiveDrag> {
        self.active.as_ref()
    }

    pub fn active_mut(&mut self) -> Option<&mut ActiveDrag> {
        self.active.as_mut()
    }

    /// Leave the dragging state and return the finished gesture.
    pub fn end(&mut self) -> Option<ActiveDrag> {
        self.active.take()
    }
}

/// True when `item` (in container coordinates) no longer overlaps the
/// container at all.
pub fn is_outside(item: Rect, container_width: i32, container_height: i32) -> bool {
    item.bottom() <= 0
        || item.top() >= container_height
        || item.left() >= container_width
        || item.right() <= 0
}

/// Slot index an item at `item` (container coordinates) should drop into.
///
/// The item's centre picks the cell on both axes, so an item resting in its
/// own cell maps back to that cell. An item hanging more than half off the
/// right or bottom edge is pulled back one cell. The result is clamped to the
/// grid's columns and to `len - 1`.
pub fn target_slot(
    item: Rect,
    container_width: i32,
    container_height: i32,
    cell: CellSize,
    gap: i32,
    columns: usize,
    len: usize,
) -> usize {
    let pitch_x = cell.width + gap;
    let pitch_y = cell.height + gap;
    if len == 0 || pitch_x <= 0 || pitch_y <= 0 {
        return 0;
    }

    let mut column = (item.x + item.width / 2).div_euclid(pitch_x);
    let mut row = (item.y + item.height / 2).div_euclid(pitch_y);

    if 2 * (container_width - item.x) < item.width && item.x < container_width {
        column -= 1;
    }
    if 2 * (container_height - item.y) < item.height && item.y < container_height {
        row -= 1;
    }

    let columns = columns.max(1);
    let column = column.clamp(0, columns as i32 - 1) as usize;
    let row = row.max(0) as usize;

    (column + row * columns).min(len - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CELL: CellSize = CellSize::new(100, 100);

    fn at(x: i32, y: i32) -> Rect {
        Rect::new(x, y, 100, 100)
    }

    fn target(x: i32, y: i32) -> usize {
        // 2 columns, 3 rows, 6 slots
        target_slot(at(x, y), 330, 340, CELL, 10, 2, 6)
    }

    #[test]
    fn resting_items_map_to_their_own_slot() {
        for index in 0..6 {
            let x = 10 + 110 * (index % 2) as i32;
            let y = 10 + 110 * (index / 2) as i32;
            assert_eq!(target(x, y), index, "slot {index}");
        }
    }

    #[test]
    fn centre_decides_cell() {
        // Centre at 164 is still in column 1's span (110..220).
        assert_eq!(target(114, 10), 1);
        // Centre at 109 falls in column 0.
        assert_eq!(target(59, 10), 0);
        // Centre at y=225 is row 2.
        assert_eq!(target(10, 175), 4);
    }

    #[test]
    fn negative_positions_clamp_to_zero() {
        assert_eq!(target(-80, -80), 0);
        assert_eq!(target(120, -90), 1);
    }

    #[test]
    fn right_edge_stays_in_last_column() {
        // Centre past the last column would be column 2; it clamps to 1.
        assert_eq!(target(200, 10), 1);
        // More than half the item past the right edge.
        assert_eq!(target(290, 120), 3);
    }

    #[test]
    fn below_grid_clamps_to_last_slot() {
        assert_eq!(target(10, 280), 5);
        assert_eq!(target(120, 300), 5);
    }

    #[test]
    fn degenerate_inputs() {
        assert_eq!(target_slot(at(50, 50), 330, 340, CELL, 10, 2, 0), 0);
        assert_eq!(target_slot(at(50, 50), 0, 0, CellSize::new(0, 0), 0, 1, 3), 0);
        // Zero columns is treated as one.
        assert_eq!(target_slot(at(10, 120), 330, 340, CELL, 10, 0, 6), 1);
    }

    #[test]
    fn outside_detection() {
        assert!(!is_outside(at(10, 10), 330, 340));
        assert!(!is_outside(at(-99, 10), 330, 340));
        assert!(is_outside(at(-100, 10), 330, 340));
        assert!(is_outside(at(330, 10), 330, 340));
        assert!(is_outside(at(10, -100), 330, 340));
        assert!(is_outside(at(10, 340), 330, 340));
        assert!(!is_outside(at(10, 339), 330, 340));
    }

    #[test]
    fn controller_lifecycle() {
        let mut controller = DragController::new();
        assert!(!controller.is_dragging());
        assert!(controller.end().is_none());

        controller.begin(ActiveDrag {
            item: "a".into(),
            origin_index: 2,
            origin: (10, 120),
            grab_offset: (5, 5),
            target_index: 2,
            placeholder_at: (10, 120),
        });
        assert!(controller.is_dragging());
        assert_eq!(controller.active().map(|d| d.item_offset((50, 50))), Some((45, 45)));

        if let Some(active) = controller.active_mut() {
            active.target_index = 4;
        }
        let finished = controller.end();
        assert_eq!(finished.map(|d| d.target_index), Some(4));
        assert!(!controller.is_dragging());
    }
}
