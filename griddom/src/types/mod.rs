mod color;
mod enums;
mod style;

pub use color::{Color, Rgb};
pub use enums::{Direction, Position, Size};
pub use style::Style;
