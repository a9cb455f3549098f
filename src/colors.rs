//! ARGB8888 colors used by the viewer.

pub type Color = u32;

pub const BACKGROUND: Color = 0xFFFFFFFF;
pub const GRID: Color = 0xFFD3D3D3; // lightgray
pub const CURVE: Color = 0xFF000000;
pub const WIREFRAME: Color = 0xFF333333;
pub const AXIS_X: Color = 0xFFCC2222;
pub const AXIS_Y: Color = 0xFF22AA22;
pub const AXIS_Z: Color = 0xFF2244CC;

/// Splits an ARGB color into `(r, g, b, a)` bytes.
pub fn unpack_color(color: Color) -> (u8, u8, u8, u8) {
    let [a, r, g, b] = color.to_be_bytes();
    (r, g, b, a)
}

/// `#rrggbb` form for SVG attributes. Alpha is dropped.
pub fn to_hex(color: Color) -> String {
    let (r, g, b, _) = unpack_color(color);
    format!("#{r:02x}{g:02x}{b:02x}")
}
