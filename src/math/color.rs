use serde::{Deserialize, Serialize};

/// Linear RGBA color with components in `[0, 1]`.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color(pub [f32; 4]);

impl Color {
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self([r, g, b, a])
    }

    /// `#rrggbb` form for UI swatches. Alpha is dropped.
    pub fn to_hex(&self) -> String {
        let [r, g, b, _] = self.0.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_primaries() {
        assert_eq!(Color::rgba(1.0, 0.0, 0.0, 1.0).to_hex(), "#ff0000");
        assert_eq!(Color::rgba(0.0, 0.0, 0.0, 1.0).to_hex(), "#000000");
        assert_eq!(Color::rgba(1.0, 1.0, 1.0, 0.5).to_hex(), "#ffffff");
    }

    #[test]
    fn test_hex_clamps() {
        assert_eq!(Color::rgba(2.0, -1.0, 0.5, 1.0).to_hex(), "#ff0080");
    }
}
