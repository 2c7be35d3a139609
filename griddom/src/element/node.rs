use std::sync::atomic::{AtomicU64, Ordering};

use super::Content;
use crate::transitions::Transitions;
use crate::types::{Direction, Position, Size, Style};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

#[derive(Debug, Clone)]
pub struct Element {
    // Identity
    pub id: String,
    pub classes: Vec<String>,

    // Content
    pub content: Content,

    // Box
    pub width: Size,
    pub height: Size,
    pub min_width: Option<i32>,
    pub min_height: Option<i32>,

    // Positioning
    pub position: Position,
    pub top: Option<i32>,
    pub left: Option<i32>,
    pub z_index: i32,

    // Flow container
    pub direction: Direction,
    pub gap: i32,

    // Visual
    pub style: Style,
    pub transitions: Transitions,

    // Interaction
    pub clickable: bool,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            classes: Vec::new(),
            content: Content::None,
            width: Size::Auto,
            height: Size::Auto,
            min_width: None,
            min_height: None,
            position: Position::Static,
            top: None,
            left: None,
            z_index: 0,
            direction: Direction::Column,
            gap: 0,
            style: Style::default(),
            transitions: Transitions::default(),
            clickable: false,
        }
    }
}

impl Element {
    pub fn box_() -> Self {
        Self {
            id: generate_id("box"),
            ..Default::default()
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self {
            id: generate_id("text"),
            content: Content::Text(content.into()),
            ..Default::default()
        }
    }

    pub fn col() -> Self {
        Self {
            id: generate_id("col"),
            direction: Direction::Column,
            ..Default::default()
        }
    }

    pub fn row() -> Self {
        Self {
            id: generate_id("row"),
            direction: Direction::Row,
            ..Default::default()
        }
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Add a class name. Whitespace-separated input adds several.
    pub fn class(mut self, class: impl AsRef<str>) -> Self {
        self.classes
            .extend(class.as_ref().split_whitespace().map(str::to_string));
        self
    }

    /// All class names joined by a single space.
    pub fn class_name(&self) -> String {
        self.classes.join(" ")
    }

    /// True if the joined class name contains `fragment` anywhere.
    ///
    /// This is substring matching, so `"region"` matches `"region-wide"` too.
    pub fn has_class_fragment(&self, fragment: &str) -> bool {
        self.class_name().contains(fragment)
    }

    pub fn is_text(&self) -> bool {
        matches!(self.content, Content::Text(_))
    }

    pub fn child_elements(&self) -> &[Element] {
        match &self.content {
            Content::Children(children) => children,
            _ => &[],
        }
    }

    // Box
    pub fn width(mut self, width: Size) -> Self {
        self.width = width;
        self
    }

    pub fn height(mut self, height: Size) -> Self {
        self.height = height;
        self
    }

    pub fn min_width(mut self, min_width: i32) -> Self {
        self.min_width = Some(min_width);
        self
    }

    pub fn min_height(mut self, min_height: i32) -> Self {
        self.min_height = Some(min_height);
        self
    }

    // Positioning
    pub fn position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    pub fn top(mut self, top: i32) -> Self {
        self.top = Some(top);
        self
    }

    pub fn left(mut self, left: i32) -> Self {
        self.left = Some(left);
        self
    }

    pub fn z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    // Flow container
    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn gap(mut self, gap: i32) -> Self {
        self.gap = gap;
        self
    }

    // Visual
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn transitions(mut self, transitions: Transitions) -> Self {
        self.transitions = transitions;
        self
    }

    // Interaction
    pub fn clickable(mut self, clickable: bool) -> Self {
        self.clickable = clickable;
        self
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            _ => self.content = Content::Children(new_children.into_iter().collect()),
        }
        self
    }
}
