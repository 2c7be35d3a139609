#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Size {
    Fixed(i32),
    Fill,
    #[default]
    Auto,
    Percent(f32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Row,
    #[default]
    Column,
}

/// How an element is placed relative to its parent.
///
/// `Relative` elements take part in flow and are then nudged by `left`/`top`.
/// `Absolute` elements leave the flow and sit at `left`/`top` from the
/// parent's origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Position {
    #[default]
    Static,
    Relative,
    Absolute,
}
