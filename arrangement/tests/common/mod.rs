#![allow(dead_code)]

use std::cell::Cell;
use std::rc::Rc;

use arrangement::{Arrangement, Config};
use griddom::{Document, Element, Rect, Size};

/// Container "shell" filling the viewport with `count` 100x100 items
/// "item-0".."item-{count-1}" marked with class "region".
pub fn document(count: usize, width: i32) -> Document {
    let items = (0..count).map(|i| {
        Element::box_()
            .id(format!("item-{i}"))
            .class("region")
            .width(Size::Fixed(100))
            .height(Size::Fixed(100))
            .child(Element::text(format!("{i}")))
    });
    let shell = Element::box_()
        .id("shell")
        .width(Size::Fill)
        .children(items);
    let root = Element::col()
        .id("root")
        .width(Size::Fill)
        .height(Size::Fill)
        .child(shell);
    Document::new(root, width, 600)
}

pub fn grid(doc: &mut Document) -> Arrangement {
    Arrangement::new(Config::new().gap(10), doc).expect("container exists")
}

pub fn counted_grid(doc: &mut Document) -> (Arrangement, Rc<Cell<usize>>) {
    let count = Rc::new(Cell::new(0));
    let hits = Rc::clone(&count);
    let config = Config::new()
        .gap(10)
        .on_complete(move || hits.set(hits.get() + 1));
    let grid = Arrangement::new(config, doc).expect("container exists");
    (grid, count)
}

pub fn ids(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("item-{i}")).collect()
}

pub fn offset(doc: &Document, id: &str) -> (i32, i32) {
    let el = doc.element(id).expect("element exists");
    (el.left.unwrap_or(0), el.top.unwrap_or(0))
}

pub fn rect(doc: &mut Document, id: &str) -> Rect {
    doc.rect(id).expect("element laid out")
}
