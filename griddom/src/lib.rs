pub mod animation;
pub mod document;
pub mod element;
pub mod event;
pub mod hit;
pub mod layout;
pub mod transitions;
pub mod types;

pub use animation::{AnimationState, TransitionProperty};
pub use document::Document;
pub use element::{find_element, find_element_mut, Content, Element};
pub use event::{Event, MouseButton};
pub use hit::hit_test;
pub use layout::{layout, LayoutResult, Rect};
pub use transitions::{Easing, TransitionConfig, Transitions};
pub use types::*;
