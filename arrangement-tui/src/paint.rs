use std::time::Instant;

use griddom::{AnimationState, Content, Document, Element, LayoutResult, Rect, Rgb};
use unicode_width::UnicodeWidthChar;

use crate::canvas::{Canvas, DEFAULT_FG};

/// One element queued for drawing, with what it inherits from its ancestors.
struct Layer<'a> {
    element: &'a Element,
    z_index: i32,
    tree_order: usize,
    /// Cumulative transition displacement; children move with their parent.
    offset: (i32, i32),
    opacity: f32,
}

/// Paint the document into `canvas` as it looks at `now`.
///
/// Elements are drawn lowest z-index first, ties in tree order. A child's
/// z-index is at least its parent's, so a lifted item carries its label.
pub fn paint(doc: &mut Document, animation: &AnimationState, now: Instant, canvas: &mut Canvas) {
    let layout = doc.layout().clone();
    let root = doc.root();

    let mut layers = Vec::new();
    collect(root, animation, now, &mut layers, root.z_index, (0, 0), 1.0);
    layers.sort_by_key(|layer| (layer.z_index, layer.tree_order));

    for layer in &layers {
        draw(layer, &layout, canvas);
    }
    log::trace!("painted {} layers", layers.len());
}

fn collect<'a>(
    element: &'a Element,
    animation: &AnimationState,
    now: Instant,
    layers: &mut Vec<Layer<'a>>,
    parent_z: i32,
    parent_offset: (i32, i32),
    parent_opacity: f32,
) {
    let (dx, dy) = animation.offset(element, now);
    let offset = (parent_offset.0 + dx, parent_offset.1 + dy);
    let z_index = element.z_index.max(parent_z);
    let opacity = parent_opacity * element.style.opacity;

    layers.push(Layer {
        element,
        z_index,
        tree_order: layers.len(),
        offset,
        opacity,
    });

    for child in element.child_elements() {
        collect(child, animation, now, layers, z_index, offset, opacity);
    }
}

fn draw(layer: &Layer, layout: &LayoutResult, canvas: &mut Canvas) {
    let Some(rect) = layout.get(&layer.element.id) else {
        return;
    };
    let rect = rect.translate(layer.offset.0, layer.offset.1);
    let style = &layer.element.style;

    if let Some(background) = &style.background {
        fill(canvas, rect, background.to_rgb(), layer.opacity);
    }

    if let Content::Text(text) = &layer.element.content {
        let fg = style.foreground.as_ref().map_or(DEFAULT_FG, |c| c.to_rgb());
        write_text(canvas, rect, text, fg, layer.opacity);
    }
}

fn fill(canvas: &mut Canvas, rect: Rect, color: Rgb, opacity: f32) {
    let Some(visible) = rect.intersection(&canvas.bounds()) else {
        return;
    };
    for y in visible.top()..visible.bottom() {
        for x in visible.left()..visible.right() {
            if let Some(cell) = canvas.get_mut(x, y) {
                cell.bg = color.blend(cell.bg, opacity);
                cell.ch = ' ';
                cell.wide_continuation = false;
            }
        }
    }
}

fn write_text(canvas: &mut Canvas, rect: Rect, text: &str, fg: Rgb, opacity: f32) {
    let mut x = rect.left();
    let y = rect.top();

    for ch in text.chars() {
        let width = ch.width().unwrap_or(0) as i32;
        if width == 0 {
            continue;
        }
        if x + width > rect.right() {
            break;
        }
        if let Some(cell) = canvas.get_mut(x, y) {
            cell.fg = fg.blend(cell.bg, opacity);
            cell.ch = ch;
            cell.wide_continuation = false;
        }
        if width == 2 {
            if let Some(cell) = canvas.get_mut(x + 1, y) {
                cell.wide_continuation = true;
            }
        }
        x += width;
    }
}
