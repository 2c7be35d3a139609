/// Pointer and viewport events in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A mouse button went down.
    PointerDown { x: i32, y: i32, button: MouseButton },
    /// The pointer moved, with or without a button held.
    PointerMove { x: i32, y: i32 },
    /// A mouse button was released.
    PointerUp { x: i32, y: i32, button: MouseButton },
    /// The viewport changed size.
    Resize { width: i32, height: i32 },
}

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

impl Event {
    /// Translate a crossterm event. Keyboard, focus, paste and scroll events
    /// have no pointer meaning and map to None.
    pub fn from_crossterm(event: &crossterm::event::Event) -> Option<Self> {
        use crossterm::event::{Event as CtEvent, MouseEventKind};

        match event {
            CtEvent::Mouse(mouse) => {
                let x = i32::from(mouse.column);
                let y = i32::from(mouse.row);
                match mouse.kind {
                    MouseEventKind::Down(button) => Some(Self::PointerDown {
                        x,
                        y,
                        button: button.into(),
                    }),
                    MouseEventKind::Up(button) => Some(Self::PointerUp {
                        x,
                        y,
                        button: button.into(),
                    }),
                    MouseEventKind::Drag(_) | MouseEventKind::Moved => {
                        Some(Self::PointerMove { x, y })
                    }
                    _ => None,
                }
            }
            CtEvent::Resize(width, height) => Some(Self::Resize {
                width: i32::from(*width),
                height: i32::from(*height),
            }),
            _ => None,
        }
    }
}

impl From<crossterm::event::MouseButton> for MouseButton {
    fn from(btn: crossterm::event::MouseButton) -> Self {
        use crossterm::event::MouseButton as CtBtn;
        match btn {
            CtBtn::Left => MouseButton::Left,
            CtBtn::Right => MouseButton::Right,
            CtBtn::Middle => MouseButton::Middle,
        }
    }
}
