use std::collections::{HashMap, HashSet};
use std::time::{Duration, Instant};

use crate::element::{Content, Element};
use crate::transitions::{Easing, TransitionConfig};

/// Which property is being transitioned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransitionProperty {
    Left,
    Top,
}

/// Snapshot of an element's transitionable properties.
#[derive(Debug, Clone, Copy, Default)]
struct ElementSnapshot {
    left: Option<i32>,
    top: Option<i32>,
}

/// A single active transition.
#[derive(Debug, Clone, Copy)]
struct ActiveTransition {
    from: i32,
    to: i32,
    start: Instant,
    duration: Duration,
    easing: Easing,
}

impl ActiveTransition {
    fn value_at(&self, now: Instant) -> i32 {
        let elapsed = now.saturating_duration_since(self.start);
        let progress = if self.duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
        };
        lerp(self.from, self.to, self.easing.apply(progress))
    }

    fn finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.start) >= self.duration
    }
}

/// Plays back `left`/`top` transitions between successive versions of a tree.
///
/// Call [`AnimationState::update`] after every mutation pass; it compares the
/// tree against the previous snapshot and starts a transition for each
/// offset that changed on an element carrying a hint for it.
#[derive(Debug, Default)]
pub struct AnimationState {
    /// Previous pass's property values per element.
    snapshots: HashMap<String, ElementSnapshot>,
    /// Currently active transitions: (element_id, property) -> transition.
    active: HashMap<(String, TransitionProperty), ActiveTransition>,
}

impl AnimationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if any transition is currently active.
    pub fn has_active_transitions(&self) -> bool {
        !self.active.is_empty()
    }

    /// Detect property changes, start new transitions, and prune completed ones.
    pub fn update(&mut self, root: &Element, now: Instant) {
        self.active.retain(|_, transition| !transition.finished(now));
        self.update_element(root, now);
    }

    fn update_element(&mut self, element: &Element, now: Instant) {
        let current = ElementSnapshot {
            left: element.left,
            top: element.top,
        };

        if let Some(prev) = self.snapshots.get(&element.id).copied() {
            self.check_and_start(
                &element.id,
                TransitionProperty::Left,
                prev.left,
                current.left,
                element.transitions.left,
                now,
            );
            self.check_and_start(
                &element.id,
                TransitionProperty::Top,
                prev.top,
                current.top,
                element.transitions.top,
                now,
            );
        }

        self.snapshots.insert(element.id.clone(), current);

        if let Content::Children(children) = &element.content {
            for child in children {
                self.update_element(child, now);
            }
        }
    }

    fn check_and_start(
        &mut self,
        id: &str,
        property: TransitionProperty,
        prev: Option<i32>,
        current: Option<i32>,
        config: Option<TransitionConfig>,
        now: Instant,
    ) {
        let key = (id.to_string(), property);

        let Some(config) = config else {
            // Hint removed: the element tracks its value directly from now on.
            self.active.remove(&key);
            return;
        };
        let (Some(prev_val), Some(curr_val)) = (prev, current) else {
            return;
        };
        if prev_val == curr_val {
            return;
        }

        // Retarget from wherever an in-flight transition currently is.
        let from = self
            .active
            .get(&key)
            .map_or(prev_val, |existing| existing.value_at(now));

        self.active.insert(
            key,
            ActiveTransition {
                from,
                to: curr_val,
                start: now,
                duration: config.duration,
                easing: config.easing,
            },
        );
    }

    /// Interpolated value for a property, or None if it is not transitioning.
    pub fn value(&self, element_id: &str, property: TransitionProperty, now: Instant) -> Option<i32> {
        let key = (element_id.to_string(), property);
        self.active.get(&key).map(|t| t.value_at(now))
    }

    /// Displacement between where an element is drawn at `now` and where its
    /// layout puts it.
    pub fn offset(&self, element: &Element, now: Instant) -> (i32, i32) {
        let delta = |property, target: Option<i32>| {
            match (self.value(&element.id, property, now), target) {
                (Some(value), Some(target)) => value - target,
                _ => 0,
            }
        };
        (
            delta(TransitionProperty::Left, element.left),
            delta(TransitionProperty::Top, element.top),
        )
    }

    /// Remove transitions and snapshots for elements no longer in tree.
    pub fn cleanup(&mut self, current_ids: &HashSet<String>) {
        self.snapshots.retain(|id, _| current_ids.contains(id));
        self.active.retain(|(id, _), _| current_ids.contains(id));
    }
}

fn lerp(from: i32, to: i32, t: f32) -> i32 {
    let from = from as f32;
    let to = to as f32;
    (from + (to - from) * t).round() as i32
}

/// Collect all element IDs from the tree.
pub fn collect_element_ids(element: &Element) -> HashSet<String> {
    let mut ids = HashSet::new();
    collect_ids_recursive(element, &mut ids);
    ids
}

fn collect_ids_recursive(element: &Element, ids: &mut HashSet<String>) {
    ids.insert(element.id.clone());
    if let Content::Children(children) = &element.content {
        for child in children {
            collect_ids_recursive(child, ids);
        }
    }
}
