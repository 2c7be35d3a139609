use crate::element::Element;
use crate::layout::LayoutResult;

/// Find the deepest clickable element at the given coordinates.
///
/// Siblings are tested topmost first: higher `z_index` wins, and among equal
/// `z_index` the later child wins. Returns None if no clickable element
/// contains the point.
pub fn hit_test(layout: &LayoutResult, root: &Element, x: i32, y: i32) -> Option<String> {
    hit_test_element(layout, root, x, y)
}

fn hit_test_element(layout: &LayoutResult, element: &Element, x: i32, y: i32) -> Option<String> {
    let rect = layout.get(&element.id)?;

    // Children of a positioned parent may overflow it, so test them even when
    // the parent itself misses.
    let mut stacked: Vec<(usize, &Element)> = element.child_elements().iter().enumerate().collect();
    stacked.sort_by_key(|(order, child)| (child.z_index, *order));

    for (_, child) in stacked.into_iter().rev() {
        if let Some(id) = hit_test_element(layout, child, x, y) {
            return Some(id);
        }
    }

    if element.clickable && rect.contains(x, y) {
        Some(element.id.clone())
    } else {
        None
    }
}
