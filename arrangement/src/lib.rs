//! Drag-to-reorder grid layout for a container of uniform boxes.
//!
//! An [`Arrangement`] takes over one container element in a [`griddom`]
//! document. It tiles the container's items into rows and columns and lets
//! the user pick an item up with the pointer and drop it into another slot,
//! reflowing the other items live while the drag is in progress.
//!
//! ```ignore
//! let mut doc = Document::new(root, 80, 24);
//! let mut grid = Arrangement::new(
//!     Config::new().container("shell").item_marker("region").gap(2),
//!     &mut doc,
//! )?;
//! grid.handle_event(&mut doc, &event, Instant::now());
//! grid.poll_timers(Instant::now());
//! ```

pub mod config;
pub mod drag;
pub mod error;
pub mod layout;
pub mod slot;
mod widget;

pub use config::Config;
pub use drag::{ActiveDrag, DragController};
pub use error::{ArrangeError, Result};
pub use layout::{column_count, plan, CellSize, GridPlan, Placement};
pub use slot::Slot;
pub use widget::Arrangement;
