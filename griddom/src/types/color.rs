use palette::{IntoColor, LinSrgb, Mix, Oklch, Srgb};

#[derive(Debug, Clone, PartialEq)]
pub enum Color {
    Oklch { l: f32, c: f32, h: f32 },
    Rgb { r: u8, g: u8, b: u8 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Composite `self` over `under` with the given alpha, in linear light.
    pub fn blend(self, under: Rgb, alpha: f32) -> Rgb {
        let alpha = alpha.clamp(0.0, 1.0);
        if alpha >= 1.0 {
            return self;
        }
        if alpha <= 0.0 {
            return under;
        }

        let top: LinSrgb = self.to_srgb().into_linear();
        let bottom: LinSrgb = under.to_srgb().into_linear();
        let mixed: Srgb = Srgb::from_linear(bottom.mix(top, alpha));
        let (r, g, b) = mixed.into_format::<u8>().into_components();

        Rgb::new(r, g, b)
    }

    fn to_srgb(self) -> Srgb {
        Srgb::<u8>::new(self.r, self.g, self.b).into_format::<f32>()
    }
}

impl Color {
    pub fn oklch(l: f32, c: f32, h: f32) -> Self {
        Self::Oklch { l, c, h }
    }

    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb { r, g, b }
    }

    /// Parse a `#rrggbb` hex string.
    pub fn hex(value: &str) -> Option<Self> {
        let digits = value.strip_prefix('#')?;
        if digits.len() != 6 {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(digits.get(i..i + 2)?, 16).ok();
        Some(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    pub fn to_rgb(&self) -> Rgb {
        match self {
            Self::Rgb { r, g, b } => Rgb::new(*r, *g, *b),
            Self::Oklch { l, c, h } => oklch_to_rgb(*l, *c, *h),
        }
    }
}

fn oklch_to_rgb(l: f32, c: f32, h: f32) -> Rgb {
    let oklch = Oklch::new(l, c, h);
    let srgb: Srgb = oklch.into_color();
    let (r, g, b) = srgb.into_format::<u8>().into_components();

    Rgb::new(r, g, b)
}
