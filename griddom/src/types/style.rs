use super::Color;

#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    pub background: Option<Color>,
    pub foreground: Option<Color>,
    /// 0.0 is fully transparent, 1.0 fully opaque.
    pub opacity: f32,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            background: None,
            foreground: None,
            opacity: 1.0,
        }
    }
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn foreground(mut self, color: Color) -> Self {
        self.foreground = Some(color);
        self
    }

    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }
}
