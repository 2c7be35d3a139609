use griddom::{Direction, Element, Position, Rect, Size};

fn layout_root(root: &Element, width: i32, height: i32) -> std::collections::HashMap<String, Rect> {
    griddom::layout::layout(root, Rect::new(0, 0, width, height))
}

// ============================================================================
// Flow Tests
// ============================================================================

#[test]
fn test_column_stacks_with_gap() {
    let root = Element::col()
        .id("root")
        .width(Size::Fill)
        .height(Size::Fill)
        .gap(2)
        .child(Element::box_().id("a").height(Size::Fixed(3)))
        .child(Element::box_().id("b").height(Size::Fixed(4)));

    let layout = layout_root(&root, 50, 50);

    assert_eq!(layout["a"].y, 0);
    assert_eq!(layout["b"].y, 5, "b starts after a (3) + gap (2)");
    assert_eq!(layout["b"].height, 4);
}

#[test]
fn test_row_stacks_horizontally() {
    let root = Element::row()
        .id("root")
        .width(Size::Fill)
        .height(Size::Fill)
        .gap(1)
        .child(Element::box_().id("a").width(Size::Fixed(10)))
        .child(Element::box_().id("b").width(Size::Fixed(10)));

    let layout = layout_root(&root, 50, 20);

    assert_eq!(layout["a"].x, 0);
    assert_eq!(layout["b"].x, 11);
}

#[test]
fn test_fill_and_percent() {
    let root = Element::col()
        .id("root")
        .width(Size::Fill)
        .height(Size::Fill)
        .child(Element::box_().id("half").width(Size::Percent(0.5)).height(Size::Fixed(1)))
        .child(Element::box_().id("full").width(Size::Fill).height(Size::Fixed(1)));

    let layout = layout_root(&root, 80, 24);

    assert_eq!(layout["half"].width, 40);
    assert_eq!(layout["full"].width, 80);
}

#[test]
fn test_min_width_wins_over_fill() {
    let root = Element::box_()
        .id("root")
        .width(Size::Fill)
        .min_width(120);

    let layout = layout_root(&root, 100, 10);

    assert_eq!(layout["root"].width, 120);
}

#[test]
fn test_fixed_size_may_overflow_parent() {
    let root = Element::col()
        .id("root")
        .width(Size::Fixed(5))
        .height(Size::Fixed(5))
        .child(Element::box_().id("big").width(Size::Fixed(20)).height(Size::Fixed(20)));

    let layout = layout_root(&root, 100, 100);

    assert_eq!(layout["big"].width, 20);
}

#[test]
fn test_text_auto_size() {
    let root = Element::col()
        .id("root")
        .width(Size::Fill)
        .height(Size::Fill)
        .child(Element::text("hello").id("t"));

    let layout = layout_root(&root, 40, 10);

    assert_eq!(layout["t"].width, 5);
    assert_eq!(layout["t"].height, 1);
}

// ============================================================================
// Positioning Tests
// ============================================================================

#[test]
fn test_absolute_child_offsets_from_parent() {
    let root = Element::col()
        .id("root")
        .width(Size::Fill)
        .height(Size::Fill)
        .child(Element::box_().id("header").height(Size::Fixed(2)))
        .child(
            Element::box_()
                .id("shell")
                .position(Position::Relative)
                .width(Size::Fill)
                .height(Size::Fixed(20))
                .child(
                    Element::box_()
                        .id("item")
                        .position(Position::Absolute)
                        .left(3)
                        .top(4)
                        .width(Size::Fixed(6))
                        .height(Size::Fixed(2)),
                ),
        );

    let layout = layout_root(&root, 60, 30);

    assert_eq!(layout["shell"], Rect::new(0, 2, 60, 20));
    assert_eq!(layout["item"], Rect::new(3, 6, 6, 2));
}

#[test]
fn test_absolute_children_do_not_consume_flow() {
    let root = Element::col()
        .id("root")
        .width(Size::Fill)
        .height(Size::Fill)
        .child(
            Element::box_()
                .id("floating")
                .position(Position::Absolute)
                .width(Size::Fixed(5))
                .height(Size::Fixed(5)),
        )
        .child(Element::box_().id("flow").height(Size::Fixed(1)));

    let layout = layout_root(&root, 30, 30);

    assert_eq!(layout["flow"].y, 0);
}

#[test]
fn test_absolute_negative_offsets() {
    let root = Element::box_()
        .id("root")
        .width(Size::Fill)
        .height(Size::Fill)
        .child(
            Element::box_()
                .id("item")
                .position(Position::Absolute)
                .left(-7)
                .top(-2)
                .width(Size::Fixed(4))
                .height(Size::Fixed(4)),
        );

    let layout = layout_root(&root, 30, 30);

    assert_eq!(layout["item"], Rect::new(-7, -2, 4, 4));
}

#[test]
fn test_relative_offset_moves_subtree() {
    let root = Element::col()
        .id("root")
        .width(Size::Fill)
        .height(Size::Fill)
        .child(
            Element::col()
                .id("nudged")
                .position(Position::Relative)
                .left(2)
                .top(1)
                .width(Size::Fixed(10))
                .height(Size::Fixed(10))
                .direction(Direction::Column)
                .child(Element::box_().id("inner").height(Size::Fixed(1))),
        );

    let layout = layout_root(&root, 40, 40);

    assert_eq!(layout["nudged"].x, 2);
    assert_eq!(layout["nudged"].y, 1);
    assert_eq!(layout["inner"].y, 1);
}
