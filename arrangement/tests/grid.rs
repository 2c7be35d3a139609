mod common;

use arrangement::{column_count, plan, ArrangeError, Arrangement, CellSize, Config};
use griddom::{Document, Element, Event, Position, Size};
use std::time::Instant;

use common::{document, grid, ids, offset, rect};

// ============================================================================
// Layout Engine Properties
// ============================================================================

#[test]
fn test_column_of_every_slot_is_index_mod_columns() {
    for width in [0, 50, 119, 120, 229, 230, 330, 339, 340, 1000] {
        for count in 1..=13 {
            let plan = plan(&vec![100; count], width, CellSize::new(100, 100), 10).unwrap();
            let expected = column_count(width, 100, 10);
            assert_eq!(plan.columns, expected, "width {width}");
            assert!(plan.columns >= 1);
            for (index, placement) in plan.placements.iter().enumerate() {
                assert_eq!(placement.column, index % expected);
                assert_eq!(placement.row, index / expected);
            }
        }
    }
}

#[test]
fn test_plan_is_idempotent() {
    let widths = [100, 100, 100, 100, 100];
    let first = plan(&widths, 450, CellSize::new(100, 80), 10);
    let second = plan(&widths, 450, CellSize::new(100, 80), 10);
    assert_eq!(first, second);
}

// ============================================================================
// Attaching To A Document
// ============================================================================

#[test]
fn test_six_items_two_columns() {
    let mut doc = document(6, 330);
    let grid = grid(&mut doc);

    assert_eq!(grid.columns(), 2);
    assert_eq!(grid.cell_size(), CellSize::new(100, 100));
    assert_eq!(rect(&mut doc, "shell").height, 340);

    let expected = [(10, 10), (120, 10), (10, 120), (120, 120), (10, 230), (120, 230)];
    for (i, pos) in expected.iter().enumerate() {
        assert_eq!(offset(&doc, &format!("item-{i}")), *pos, "item-{i}");
    }
}

#[test]
fn test_attach_styles_container_and_items() {
    let mut doc = document(3, 500);
    let _grid = grid(&mut doc);

    let shell = doc.element("shell").unwrap();
    assert_eq!(shell.position, Position::Relative);
    assert_eq!(shell.min_width, Some(120));

    let item = doc.element("item-0").unwrap();
    assert_eq!(item.position, Position::Absolute);
    assert_eq!(item.z_index, 0);
    assert!(item.clickable);
    assert!(item.transitions.has_any());
}

#[test]
fn test_relayout_twice_is_stable() {
    let mut doc = document(5, 400);
    let mut grid = grid(&mut doc);

    let before: Vec<_> = ids(5).iter().map(|id| offset(&doc, id)).collect();
    grid.relayout(&mut doc);
    grid.relayout(&mut doc);
    let after: Vec<_> = ids(5).iter().map(|id| offset(&doc, id)).collect();

    assert_eq!(before, after);
    assert_eq!(grid.order(), ids(5));
}

#[test]
fn test_only_marked_non_text_children_are_items() {
    let shell = Element::box_()
        .id("shell")
        .width(Size::Fill)
        .child(Element::box_().id("a").class("region").width(Size::Fixed(10)).height(Size::Fixed(4)))
        .child(Element::box_().id("other").class("sidebar"))
        .child(Element::text("region").id("label").class("region"))
        .child(Element::box_().id("b").class("my-region-wide").width(Size::Fixed(10)).height(Size::Fixed(4)));
    let mut doc = Document::new(Element::col().id("root").width(Size::Fill).child(shell), 80, 24);

    let grid = Arrangement::new(Config::new().gap(1), &mut doc).unwrap();

    assert_eq!(grid.order(), vec!["a", "b"]);
    assert_eq!(grid.cell_size(), CellSize::new(10, 4));
}

#[test]
fn test_missing_container_is_an_error() {
    let mut doc = document(2, 300);
    let err = Arrangement::new(Config::new().container("nope"), &mut doc).unwrap_err();
    assert_eq!(err, ArrangeError::ContainerNotFound("nope".into()));
}

#[test]
fn test_empty_container_is_a_no_op() {
    let root = Element::col()
        .id("root")
        .width(Size::Fill)
        .child(Element::box_().id("shell").width(Size::Fill).height(Size::Fixed(7)));
    let mut doc = Document::new(root, 80, 24);

    let mut grid = Arrangement::new(Config::new(), &mut doc).unwrap();

    assert!(grid.order().is_empty());
    assert_eq!(doc.element("shell").unwrap().height, Size::Fixed(7));
    assert_eq!(doc.element("shell").unwrap().min_width, None);

    let now = Instant::now();
    assert!(!grid.handle_event(
        &mut doc,
        &Event::PointerDown {
            x: 5,
            y: 5,
            button: griddom::MouseButton::Left
        },
        now
    ));
    assert!(!grid.is_dragging());
}

// ============================================================================
// Resize
// ============================================================================

#[test]
fn test_resize_reflows_without_reordering() {
    let mut doc = document(6, 330);
    let mut grid = grid(&mut doc);
    assert_eq!(grid.columns(), 2);

    let changed = grid.handle_event(
        &mut doc,
        &Event::Resize {
            width: 450,
            height: 600,
        },
        Instant::now(),
    );

    assert!(changed);
    assert_eq!(grid.columns(), 4);
    assert_eq!(grid.order(), ids(6));
    assert_eq!(offset(&doc, "item-2"), (230, 10));
    assert_eq!(offset(&doc, "item-4"), (10, 120));
    assert_eq!(rect(&mut doc, "shell").height, 230);
}

#[test]
fn test_narrow_container_keeps_one_column() {
    let mut doc = document(3, 40);
    let grid = grid(&mut doc);

    // The container's min width (item + 2 gaps) holds one column.
    assert_eq!(rect(&mut doc, "shell").width, 120);
    assert_eq!(grid.columns(), 1);
    assert_eq!(offset(&doc, "item-2"), (10, 230));
}
