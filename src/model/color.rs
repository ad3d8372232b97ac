//! Packed RGBA colors

/// A color packed as `0xRRGGBBAA` (alpha in the low byte)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color(pub u32);

impl Color {
    pub const BLACK: Color = Color(0x0000_00FF);
    pub const WHITE: Color = Color(0xFFFF_FFFF);
    pub const TRANSPARENT: Color = Color(0x0000_0000);

    pub fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(u32::from_be_bytes([r, g, b, a]))
    }

    pub fn rgba(self) -> u32 {
        self.0
    }

    pub fn red(self) -> u8 {
        self.0.to_be_bytes()[0]
    }

    pub fn green(self) -> u8 {
        self.0.to_be_bytes()[1]
    }

    pub fn blue(self) -> u8 {
        self.0.to_be_bytes()[2]
    }

    pub fn alpha(self) -> u8 {
        self.0.to_be_bytes()[3]
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:08x}", self.0)
    }
}
