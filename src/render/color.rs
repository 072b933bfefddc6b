//! RGBA colours, hex parsing and source-over compositing.
//!
//! Palettes are written as CSS hex strings (`#98c9ff`), parsed once when a
//! palette is built. Nibble decoding is branchless:
//!   is_digit = (b - '0') < 10, is_lower = (b - 'a') < 6, is_upper = (b - 'A') < 6
//!   value    = is_digit*(b-'0') + is_lower*(b-'a'+10) + is_upper*(b-'A'+10)

/// RGBA colour, straight (non-premultiplied) alpha, 0-255 per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0, a: 255 };
    pub const WHITE: Self = Self { r: 255, g: 255, b: 255, a: 255 };
    pub const TRANSPARENT: Self = Self { r: 0, g: 0, b: 0, a: 0 };

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Same colour at `alpha` (0.0..=1.0) opacity.
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self {
            a: (alpha.clamp(0.0, 1.0) * 255.0).round() as u8,
            ..self
        }
    }

    /// Convert to normalized f32 (for rendering)
    #[inline(always)]
    pub fn to_f32(self) -> [f32; 4] {
        const INV_255: f32 = 1.0 / 255.0;
        [
            self.r as f32 * INV_255,
            self.g as f32 * INV_255,
            self.b as f32 * INV_255,
            self.a as f32 * INV_255,
        ]
    }

    pub fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub fn from_bytes(px: [u8; 4]) -> Self {
        Self { r: px[0], g: px[1], b: px[2], a: px[3] }
    }

    /// Composite `self` over `dst` (Porter-Duff source-over).
    pub fn over(self, dst: Rgba) -> Rgba {
        let [sr, sg, sb, sa] = self.to_f32();
        let [dr, dg, db, da] = dst.to_f32();
        let out_a = sa + da * (1.0 - sa);
        if out_a <= 0.0 {
            return Rgba::TRANSPARENT;
        }
        let inv_out = 1.0 / out_a;
        let mix = |s: f32, d: f32| {
            let c = (s * sa + d * da * (1.0 - sa)) * inv_out;
            (c * 255.0).round().clamp(0.0, 255.0) as u8
        };
        Rgba {
            r: mix(sr, dr),
            g: mix(sg, dg),
            b: mix(sb, db),
            a: (out_a * 255.0).round().clamp(0.0, 255.0) as u8,
        }
    }
}

impl From<Rgba> for egui::Color32 {
    fn from(c: Rgba) -> Self {
        egui::Color32::from_rgba_unmultiplied(c.r, c.g, c.b, c.a)
    }
}

#[inline(always)]
fn hex_digit_branchless(b: u8) -> u8 {
    let is_digit = (b.wrapping_sub(b'0') < 10) as u8;
    let is_lower = (b.wrapping_sub(b'a') < 6) as u8;
    let is_upper = (b.wrapping_sub(b'A') < 6) as u8;

    is_digit.wrapping_mul(b.wrapping_sub(b'0'))
        .wrapping_add(is_lower.wrapping_mul(b.wrapping_sub(b'a').wrapping_add(10)))
        .wrapping_add(is_upper.wrapping_mul(b.wrapping_sub(b'A').wrapping_add(10)))
}

#[inline(always)]
fn hex_byte(hi: u8, lo: u8) -> u8 {
    (hex_digit_branchless(hi) << 4) | hex_digit_branchless(lo)
}

/// Parse `#RGB` or `#RRGGBB`. Anything else yields `None`.
pub fn parse_hex_color(s: &str) -> Option<Rgba> {
    let bytes = s.as_bytes();
    if bytes.first() != Some(&b'#') || !bytes[1..].iter().all(u8::is_ascii_hexdigit) {
        return None;
    }
    match bytes.len() {
        4 => {
            let r = hex_digit_branchless(bytes[1]);
            let g = hex_digit_branchless(bytes[2]);
            let b = hex_digit_branchless(bytes[3]);
            Some(Rgba::rgb(r << 4 | r, g << 4 | g, b << 4 | b))
        }
        7 => Some(Rgba::rgb(
            hex_byte(bytes[1], bytes[2]),
            hex_byte(bytes[3], bytes[4]),
            hex_byte(bytes[5], bytes[6]),
        )),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_digit_branchless() {
        assert_eq!(hex_digit_branchless(b'0'), 0);
        assert_eq!(hex_digit_branchless(b'9'), 9);
        assert_eq!(hex_digit_branchless(b'a'), 10);
        assert_eq!(hex_digit_branchless(b'F'), 15);
    }

    #[test]
    fn test_parse_palette_hex() {
        assert_eq!(parse_hex_color("#98c9ff"), Some(Rgba::rgb(0x98, 0xc9, 0xff)));
        assert_eq!(parse_hex_color("#fff"), Some(Rgba::WHITE));
        assert_eq!(parse_hex_color("98c9ff"), None);
        assert_eq!(parse_hex_color("#98c9f"), None);
        assert_eq!(parse_hex_color("#zzzzzz"), None);
    }

    #[test]
    fn test_over_opaque_destination() {
        let dst = Rgba::rgb(0, 0, 0);
        let src = Rgba::WHITE.with_alpha(0.5);
        let out = src.over(dst);
        assert_eq!(out.a, 255);
        assert!((out.r as i32 - 128).abs() <= 1);
    }

    #[test]
    fn test_over_transparent_destination_keeps_source() {
        let src = Rgba::rgb(0x4a, 0x4e, 0x66).with_alpha(0.12);
        let out = src.over(Rgba::TRANSPARENT);
        assert_eq!(out, src);
    }

    #[test]
    fn test_opaque_source_replaces() {
        assert_eq!(Rgba::WHITE.over(Rgba::rgb(10, 20, 30)), Rgba::WHITE);
    }
}
