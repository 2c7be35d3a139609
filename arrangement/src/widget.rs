use std::collections::VecDeque;
use std::time::{Duration, Instant};

use griddom::{Color, Document, Easing, Event, MouseButton, Position, Rect, Size, Transitions};

use crate::config::Config;
use crate::drag::{ActiveDrag, DragController, is_outside, target_slot};
use crate::error::{ArrangeError, Result};
use crate::layout::{self, CellSize, GridPlan};
use crate::slot::{self, Slot};

const TRANSITION_DURATION: Duration = Duration::from_millis(400);
const DRAG_OPACITY: f32 = 0.5;
const DRAG_Z_INDEX: i32 = 9999;
const DROPPED_BACKGROUND: Color = Color::Rgb {
    r: 0xe2,
    g: 0x8b,
    b: 0x41,
};

fn settle_transitions() -> Transitions {
    Transitions::new().position(TRANSITION_DURATION, Easing::EaseInOut)
}

/// A drag-to-reorder grid bound to one container element.
///
/// Holds everything a single widget instance needs: the container id, the
/// ordered slots, the uniform cell size, the drag state and the completion
/// callbacks still waiting for their settle delay. Two instances on one
/// document share nothing.
#[derive(Debug)]
pub struct Arrangement {
    config: Config,
    slots: Vec<Slot>,
    cell: CellSize,
    columns: usize,
    drag: DragController,
    pending: VecDeque<Instant>,
}

impl Arrangement {
    /// Attach to the configured container in `doc` and lay its items out.
    ///
    /// Items are the container's direct, non-text children whose class name
    /// contains the configured marker. The first item's rendered size becomes
    /// the cell size for all of them.
    pub fn new(config: Config, doc: &mut Document) -> Result<Self> {
        let Some(container) = doc.element(&config.container) else {
            log::error!("arrangement: no element with id '{}'", config.container);
            return Err(ArrangeError::ContainerNotFound(config.container));
        };

        let slots: Vec<Slot> = container
            .child_elements()
            .iter()
            .filter(|child| !child.is_text() && child.has_class_fragment(&config.item_marker))
            .map(|child| Slot::Item(child.id.clone()))
            .collect();

        if slots.is_empty() {
            log::warn!(
                "arrangement: container '{}' has no children matching '{}'",
                config.container,
                config.item_marker
            );
        }

        for slot in &slots {
            if let Some(item) = doc.element_mut(slot.id()) {
                item.position = Position::Absolute;
                item.z_index = 0;
                item.clickable = true;
            }
        }

        let cell = slots
            .first()
            .and_then(|first| doc.rect(first.id()))
            .map(|rect| CellSize::new(rect.width, rect.height))
            .unwrap_or_default();

        if let Some(container) = doc.element_mut(&config.container) {
            container.position = Position::Relative;
            if !slots.is_empty() {
                container.min_width = Some(cell.width + config.gap * 2);
            }
        }

        log::debug!(
            "arrangement: '{}' with {} items, cell {}x{}, gap {}",
            config.container,
            slots.len(),
            cell.width,
            cell.height,
            config.gap
        );

        let mut arrangement = Self {
            config,
            slots,
            cell,
            columns: 1,
            drag: DragController::new(),
            pending: VecDeque::new(),
        };
        arrangement.relayout(doc);
        Ok(arrangement)
    }

    /// Feed one event. Returns true if the document changed.
    pub fn handle_event(&mut self, doc: &mut Document, event: &Event, now: Instant) -> bool {
        match *event {
            Event::PointerDown {
                x,
                y,
                button: MouseButton::Left,
            } => self.press(doc, x, y),
            Event::PointerDown { .. } => false,
            Event::PointerMove { x, y } => self.motion(doc, x, y),
            Event::PointerUp { .. } => self.release(doc, now),
            Event::Resize { width, height } => {
                doc.resize(width, height);
                self.relayout(doc);
                true
            }
        }
    }

    /// Recompute and apply the grid from the container's current width.
    pub fn relayout(&mut self, doc: &mut Document) {
        let Some(container) = doc.rect(&self.config.container) else {
            log::warn!("arrangement: container '{}' vanished", self.config.container);
            return;
        };

        let widths: Vec<i32> = self
            .slots
            .iter()
            .map(|slot| doc.rect(slot.id()).map_or(self.cell.width, |rect| rect.width))
            .collect();

        if let Some(plan) = layout::plan(&widths, container.width, self.cell, self.config.gap) {
            self.apply_plan(doc, &plan);
        }
    }

    fn apply_plan(&mut self, doc: &mut Document, plan: &GridPlan) {
        self.columns = plan.columns;

        for (slot, placement) in self.slots.iter().zip(&plan.placements) {
            match slot {
                Slot::Placeholder(_) => {
                    if let Some(active) = self.drag.active_mut() {
                        active.placeholder_at = (placement.left, placement.top);
                    }
                }
                Slot::Item(id) => {
                    let Some(item) = doc.element_mut(id) else {
                        log::warn!("arrangement: item '{id}' missing from document");
                        continue;
                    };
                    item.left = Some(placement.left);
                    item.top = Some(placement.top);
                    item.transitions = settle_transitions();
                }
            }
        }

        if let Some(container) = doc.element_mut(&self.config.container) {
            container.height = Size::Fixed(plan.container_height);
        }

        log::trace!(
            "arrangement: {} slots in {} columns, height {}",
            plan.placements.len(),
            plan.columns,
            plan.container_height
        );
    }

    fn press(&mut self, doc: &mut Document, x: i32, y: i32) -> bool {
        if self.drag.is_dragging() {
            return false;
        }
        let Some(target) = doc.hit_test(x, y) else {
            return false;
        };
        let Some(origin_index) = slot::item_index(&self.slots, &target) else {
            return false;
        };
        let Some(item) = doc.element_mut(&target) else {
            return false;
        };

        let origin = (item.left.unwrap_or(0), item.top.unwrap_or(0));
        item.style.opacity = DRAG_OPACITY;
        item.z_index = DRAG_Z_INDEX;
        item.transitions = Transitions::new();

        self.slots[origin_index] = Slot::Placeholder(target.clone());

        log::debug!("arrangement: picked up '{target}' from slot {origin_index}");

        self.drag.begin(ActiveDrag {
            item: target,
            origin_index,
            origin,
            grab_offset: (x - origin.0, y - origin.1),
            target_index: origin_index,
            placeholder_at: origin,
        });
        true
    }

    fn motion(&mut self, doc: &mut Document, x: i32, y: i32) -> bool {
        let Some(active) = self.drag.active() else {
            return false;
        };
        let item_id = active.item.clone();
        let (left, top) = active.item_offset((x, y));

        let Some(item) = doc.element_mut(&item_id) else {
            log::warn!("arrangement: dragged item '{item_id}' missing from document");
            return false;
        };
        item.left = Some(left);
        item.top = Some(top);

        let Some(local) = self.local_rect(doc, &item_id, left, top) else {
            return true;
        };
        let (width, height) = self.container_size(doc);
        let len = self.slots.len();

        let target = if is_outside(local, width, height) {
            len - 1
        } else {
            target_slot(
                local,
                width,
                height,
                self.cell,
                self.config.gap,
                self.columns,
                len,
            )
        };

        if let Some(from) = slot::placeholder_index(&self.slots) {
            if from != target {
                log::trace!("arrangement: placeholder {from} -> {target}");
            }
            slot::move_slot(&mut self.slots, from, target);
        }
        if let Some(active) = self.drag.active_mut() {
            active.target_index = target;
        }

        self.relayout(doc);
        true
    }

    fn release(&mut self, doc: &mut Document, now: Instant) -> bool {
        // Clear the drag before anything else so a late move is a no-op.
        let Some(active) = self.drag.end() else {
            return false;
        };

        let mut index = slot::placeholder_index(&self.slots).unwrap_or(active.target_index);
        self.slots[index] = Slot::Item(active.item.clone());

        let Some(item) = doc.element_mut(&active.item) else {
            log::warn!("arrangement: dropped item '{}' missing from document", active.item);
            return true;
        };
        item.style.opacity = 1.0;
        item.style.background = Some(DROPPED_BACKGROUND);
        item.transitions = settle_transitions();
        let (left, top) = (item.left.unwrap_or(0), item.top.unwrap_or(0));

        let (width, height) = self.container_size(doc);
        if let Some(local) = self.local_rect(doc, &active.item, left, top) {
            if is_outside(local, width, height) {
                let last = self.slots.len() - 1;
                slot::move_slot(&mut self.slots, index, last);
                index = last;
            }
        }

        if let Some(item) = doc.element_mut(&active.item) {
            item.left = Some(active.placeholder_at.0);
            item.top = Some(active.placeholder_at.1);
        }

        self.relayout(doc);

        if let Some(item) = doc.element_mut(&active.item) {
            item.z_index = 0;
        }

        log::debug!(
            "arrangement: dropped '{}' into slot {} (from {})",
            active.item,
            index,
            active.origin_index
        );

        if self.config.on_complete.is_some() {
            self.pending.push_back(now + self.config.settle_delay);
        }
        true
    }

    /// Run completion callbacks whose settle delay has elapsed by `now`.
    /// Returns how many fired.
    pub fn poll_timers(&mut self, now: Instant) -> usize {
        let mut fired = 0;
        while self.pending.front().is_some_and(|due| *due <= now) {
            self.pending.pop_front();
            if let Some(callback) = self.config.on_complete.as_mut() {
                callback();
            }
            fired += 1;
        }
        fired
    }

    /// When the next pending callback is due, if any.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.front().copied()
    }

    fn local_rect(&self, doc: &mut Document, id: &str, left: i32, top: i32) -> Option<Rect> {
        let rect = doc.rect(id)?;
        Some(Rect::new(left, top, rect.width, rect.height))
    }

    fn container_size(&self, doc: &mut Document) -> (i32, i32) {
        doc.rect(&self.config.container)
            .map_or((0, 0), |rect| (rect.width, rect.height))
    }

    /// Item ids in grid order. A dragged item is reported at its
    /// placeholder's position.
    pub fn order(&self) -> Vec<&str> {
        self.slots.iter().map(Slot::id).collect()
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    pub fn active_drag(&self) -> Option<&ActiveDrag> {
        self.drag.active()
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn cell_size(&self) -> CellSize {
        self.cell
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
