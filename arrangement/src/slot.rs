//! Ordered slot list entries.

/// One position in the grid order.
///
/// While an item is dragged its slot holds a `Placeholder` naming that item,
/// so every other slot keeps laying out as if nothing were missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slot {
    Item(String),
    Placeholder(String),
}

impl Slot {
    /// Id of the item this slot belongs to.
    pub fn id(&self) -> &str {
        match self {
            Slot::Item(id) | Slot::Placeholder(id) => id,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Slot::Placeholder(_))
    }
}

/// Index of the placeholder, if a drag is in progress.
pub fn placeholder_index(slots: &[Slot]) -> Option<usize> {
    slots.iter().position(Slot::is_placeholder)
}

/// Index of the resting slot for `id`.
pub fn item_index(slots: &[Slot], id: &str) -> Option<usize> {
    slots
        .iter()
        .position(|slot| matches!(slot, Slot::Item(item) if item == id))
}

/// Move the slot at `from` so it ends up at index `to`. The list keeps its
/// length and every other slot keeps its relative order.
pub fn move_slot(slots: &mut Vec<Slot>, from: usize, to: usize) {
    if from >= slots.len() || from == to {
        return;
    }
    let slot = slots.remove(from);
    let to = to.min(slots.len());
    slots.insert(to, slot);
}
