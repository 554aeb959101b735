// Simple color struct, created from an unsigned 32 representing RRGGBBAA.
// Alpha is kept as a float so it can be written straight into a CSS rgba() string.

use std::fmt;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Color {
    // red, salmon, blue, cyan, green
    pub const PALETTE: [u32; 5] = [0xff0844ff, 0xffb199ff, 0x4facfeff, 0x00f2feff, 0x43e97bff];

    pub fn from_u32(num: u32) -> Color {
        let r = (num >> 24) as u8;
        let g = (num >> 16) as u8;
        let b = (num >> 8) as u8;
        let a = (num & 0xff) as f64 / 255.0;

        Color { r, g, b, a }
    }

    pub fn with_alpha(self, a: f64) -> Color {
        Color { a, ..self }
    }

    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}
