//! Widget configuration.

use std::fmt;
use std::time::Duration;

/// Default container element id.
pub const DEFAULT_CONTAINER: &str = "shell";
/// Default class-name fragment marking the items.
pub const DEFAULT_ITEM_MARKER: &str = "region";
/// Default spacing between items and around the grid.
pub const DEFAULT_GAP: i32 = 10;
/// Default delay between a drop and the completion callback.
pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_millis(400);

/// Per-instance configuration.
///
/// Every field has a default, so only the options that differ need setting:
///
/// ```ignore
/// let config = Config::new().gap(2).on_complete(|| log::info!("saved"));
/// ```
pub struct Config {
    /// Id of the container element.
    pub container: String,

    /// Direct children of the container whose class name contains this
    /// fragment become items.
    pub item_marker: String,

    /// Spacing applied between items horizontally and vertically, and
    /// between the outer items and the container edge.
    pub gap: i32,

    /// How long after a drop the completion callback fires.
    pub settle_delay: Duration,

    /// Invoked once per completed drag, `settle_delay` after the drop.
    pub on_complete: Option<Box<dyn FnMut()>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            container: DEFAULT_CONTAINER.to_string(),
            item_marker: DEFAULT_ITEM_MARKER.to_string(),
            gap: DEFAULT_GAP,
            settle_delay: DEFAULT_SETTLE_DELAY,
            on_complete: None,
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("container", &self.container)
            .field("item_marker", &self.item_marker)
            .field("gap", &self.gap)
            .field("settle_delay", &self.settle_delay)
            .field("on_complete", &self.on_complete.as_ref().map(|_| "FnMut()"))
            .finish()
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the container element id.
    pub fn container(mut self, id: impl Into<String>) -> Self {
        self.container = id.into();
        self
    }

    /// Set the class-name fragment identifying items.
    pub fn item_marker(mut self, marker: impl Into<String>) -> Self {
        self.item_marker = marker.into();
        self
    }

    /// Set the gap. Negative values are treated as zero.
    pub fn gap(mut self, gap: i32) -> Self {
        self.gap = gap.max(0);
        self
    }

    pub fn settle_delay(mut self, delay: Duration) -> Self {
        self.settle_delay = delay;
        self
    }

    /// Set the completion callback.
    pub fn on_complete(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_complete = Some(Box::new(callback));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.container, "shell");
        assert_eq!(config.item_marker, "region");
        assert_eq!(config.gap, 10);
        assert_eq!(config.settle_delay, Duration::from_millis(400));
        assert!(config.on_complete.is_none());
    }

    #[test]
    fn unset_options_keep_defaults() {
        let config = Config::new().gap(4);
        assert_eq!(config.gap, 4);
        assert_eq!(config.container, DEFAULT_CONTAINER);
        assert_eq!(config.item_marker, DEFAULT_ITEM_MARKER);
    }

    #[test]
    fn negative_gap_clamps() {
        assert_eq!(Config::new().gap(-3).gap, 0);
    }

    #[test]
    fn debug_hides_callback_body() {
        let config = Config::new().on_complete(|| {});
        let dbg = format!("{config:?}");
        assert!(dbg.contains("FnMut()"));
        assert!(dbg.contains("shell"));
    }
}
