mod flow;
mod rect;

pub use flow::{layout, LayoutResult};
pub use rect::Rect;
