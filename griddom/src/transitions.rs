use std::time::Duration;

/// Configuration for a single property transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionConfig {
    pub duration: Duration,
    pub easing: Easing,
}

impl TransitionConfig {
    pub fn new(duration: Duration, easing: Easing) -> Self {
        Self { duration, easing }
    }
}

/// Easing function for transitions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Easing {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl Easing {
    /// Apply easing to progress (0.0 to 1.0).
    pub fn apply(self, t: f32) -> f32 {
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
        }
    }
}

/// Transition hints carried by an element. A property without a config
/// jumps to its new value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Transitions {
    pub left: Option<TransitionConfig>,
    pub top: Option<TransitionConfig>,
}

impl Transitions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn left(mut self, duration: Duration, easing: Easing) -> Self {
        self.left = Some(TransitionConfig::new(duration, easing));
        self
    }

    pub fn top(mut self, duration: Duration, easing: Easing) -> Self {
        self.top = Some(TransitionConfig::new(duration, easing));
        self
    }

    /// Set transition for both position offsets.
    pub fn position(self, duration: Duration, easing: Easing) -> Self {
        self.left(duration, easing).top(duration, easing)
    }

    /// Returns true if any transition is configured.
    pub fn has_any(&self) -> bool {
        self.left.is_some() || self.top.is_some()
    }
}
