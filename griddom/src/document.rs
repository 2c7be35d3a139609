use crate::element::{find_element, find_element_mut, Element};
use crate::hit::hit_test;
use crate::layout::{layout, LayoutResult, Rect};

/// An element tree bound to a viewport, with a lazily recomputed layout.
///
/// Any mutable access to the tree invalidates the cached layout, so reads
/// through [`Document::rect`] always reflect the latest inline values.
#[derive(Debug)]
pub struct Document {
    root: Element,
    viewport: Rect,
    layout: Option<LayoutResult>,
}

impl Document {
    pub fn new(root: Element, width: i32, height: i32) -> Self {
        Self {
            root,
            viewport: Rect::from_size(width, height),
            layout: None,
        }
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Element {
        self.layout = None;
        &mut self.root
    }

    pub fn element(&self, id: &str) -> Option<&Element> {
        find_element(&self.root, id)
    }

    pub fn element_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.layout = None;
        find_element_mut(&mut self.root, id)
    }

    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    pub fn resize(&mut self, width: i32, height: i32) {
        if self.viewport.width != width || self.viewport.height != height {
            self.viewport = Rect::from_size(width, height);
            self.layout = None;
        }
    }

    /// Layout of the whole tree, recomputed if anything changed since the
    /// last call.
    pub fn layout(&mut self) -> &LayoutResult {
        let (root, viewport) = (&self.root, self.viewport);
        self.layout.get_or_insert_with(|| {
            log::trace!("document layout pass ({}x{})", viewport.width, viewport.height);
            layout(root, viewport)
        })
    }

    pub fn rect(&mut self, id: &str) -> Option<Rect> {
        self.layout().get(id).copied()
    }

    pub fn hit_test(&mut self, x: i32, y: i32) -> Option<String> {
        self.layout();
        let layout = self.layout.as_ref()?;
        hit_test(layout, &self.root, x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Size;

    fn doc() -> Document {
        let root = Element::col()
            .id("root")
            .width(Size::Fill)
            .height(Size::Fill)
            .child(Element::box_().id("a").height(Size::Fixed(3)));
        Document::new(root, 40, 10)
    }

    #[test]
    fn layout_is_invalidated_by_mutation() {
        let mut doc = doc();
        assert_eq!(doc.rect("a").map(|r| r.height), Some(3));

        if let Some(a) = doc.element_mut("a") {
            a.height = Size::Fixed(5);
        }
        assert_eq!(doc.rect("a").map(|r| r.height), Some(5));
    }

    #[test]
    fn resize_changes_fill_width() {
        let mut doc = doc();
        assert_eq!(doc.rect("root").map(|r| r.width), Some(40));
        doc.resize(25, 10);
        assert_eq!(doc.rect("root").map(|r| r.width), Some(25));
        assert_eq!(doc.viewport(), Rect::from_size(25, 10));
    }

    #[test]
    fn missing_element_has_no_rect() {
        let mut doc = doc();
        assert!(doc.rect("nope").is_none());
        assert!(doc.element("nope").is_none());
    }
}
