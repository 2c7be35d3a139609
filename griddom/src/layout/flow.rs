use std::collections::HashMap;

use unicode_width::UnicodeWidthStr;

use super::Rect;
use crate::element::{Content, Element};
use crate::types::{Direction, Position, Size};

pub type LayoutResult = HashMap<String, Rect>;

/// Resolve a rectangle for every element in the tree.
///
/// Flow children stack along their parent's direction separated by `gap`.
/// `Relative` children are offset by `left`/`top` after flow placement.
/// `Absolute` children are placed at `left`/`top` from the parent's origin
/// and do not consume flow space.
pub fn layout(element: &Element, available: Rect) -> LayoutResult {
    let mut result = LayoutResult::new();
    layout_element(element, available, available, &mut result);
    result
}

fn layout_element(element: &Element, available: Rect, parent: Rect, result: &mut LayoutResult) {
    let width = resolve_size(element.width, available.width, element, true);
    let height = resolve_size(element.height, available.height, element, false);

    let rect = match element.position {
        Position::Absolute => Rect::new(
            parent.x + element.left.unwrap_or(0),
            parent.y + element.top.unwrap_or(0),
            width,
            height,
        ),
        Position::Relative => Rect::new(available.x, available.y, width, height)
            .translate(element.left.unwrap_or(0), element.top.unwrap_or(0)),
        Position::Static => Rect::new(available.x, available.y, width, height),
    };

    result.insert(element.id.clone(), rect);
    layout_children(element, rect, result);
}

fn layout_children(element: &Element, rect: Rect, result: &mut LayoutResult) {
    let Content::Children(children) = &element.content else {
        return;
    };

    let is_row = element.direction == Direction::Row;
    let mut offset = 0;

    for child in children {
        if child.position == Position::Absolute {
            layout_element(child, rect, rect, result);
            continue;
        }

        let slot = if is_row {
            Rect::new(rect.x + offset, rect.y, (rect.width - offset).max(0), rect.height)
        } else {
            Rect::new(rect.x, rect.y + offset, rect.width, (rect.height - offset).max(0))
        };
        layout_element(child, slot, rect, result);

        let placed = result.get(&child.id).copied().unwrap_or_default();
        offset += if is_row { placed.width } else { placed.height } + element.gap;
    }
}

fn resolve_size(size: Size, available: i32, element: &Element, is_width: bool) -> i32 {
    let base = match size {
        Size::Fixed(n) => n,
        Size::Fill => available,
        Size::Auto => estimate_size(element, is_width).min(available),
        Size::Percent(p) => (available as f32 * p) as i32,
    };

    let min = if is_width {
        element.min_width
    } else {
        element.min_height
    };

    min.map_or(base, |m| base.max(m)).max(0)
}

fn estimate_size(element: &Element, is_width: bool) -> i32 {
    match &element.content {
        Content::Text(text) => {
            if is_width {
                text.lines().map(UnicodeWidthStr::width).max().unwrap_or(0) as i32
            } else {
                text.lines().count().max(1) as i32
            }
        }
        Content::Children(children) => {
            let flow = children.iter().filter(|c| c.position != Position::Absolute);
            let along_main = (element.direction == Direction::Row) == is_width;
            if along_main {
                let (total, count) = flow.fold((0, 0), |(total, count), c| {
                    (total + fixed_or_estimate(c, is_width), count + 1)
                });
                total + element.gap * (count - 1).max(0)
            } else {
                flow.map(|c| fixed_or_estimate(c, is_width)).max().unwrap_or(0)
            }
        }
        Content::None => 0,
    }
}

fn fixed_or_estimate(element: &Element, is_width: bool) -> i32 {
    match if is_width { element.width } else { element.height } {
        Size::Fixed(n) => n,
        _ => estimate_size(element, is_width),
    }
}
