use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub(crate) fn lerp(self, other: Rgb, t: f32) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Rgb(mix(self.0, other.0), mix(self.1, other.1), mix(self.2, other.2))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

const NAMED_COLORS: &[(&str, Rgb)] = &[
    ("black", Rgb(0x00, 0x00, 0x00)),
    ("white", Rgb(0xff, 0xff, 0xff)),
    ("red", Rgb(0xff, 0x00, 0x00)),
    ("green", Rgb(0x00, 0x80, 0x00)),
    ("lime", Rgb(0x00, 0xff, 0x00)),
    ("blue", Rgb(0x00, 0x00, 0xff)),
    ("yellow", Rgb(0xff, 0xff, 0x00)),
    ("cyan", Rgb(0x00, 0xff, 0xff)),
    ("magenta", Rgb(0xff, 0x00, 0xff)),
    ("gray", Rgb(0x80, 0x80, 0x80)),
    ("grey", Rgb(0x80, 0x80, 0x80)),
    ("silver", Rgb(0xc0, 0xc0, 0xc0)),
    ("maroon", Rgb(0x80, 0x00, 0x00)),
    ("olive", Rgb(0x80, 0x80, 0x00)),
    ("navy", Rgb(0x00, 0x00, 0x80)),
    ("purple", Rgb(0x80, 0x00, 0x80)),
    ("teal", Rgb(0x00, 0x80, 0x80)),
    ("orange", Rgb(0xff, 0xa5, 0x00)),
    ("pink", Rgb(0xff, 0xc0, 0xcb)),
    ("brown", Rgb(0xa5, 0x2a, 0x2a)),
    ("gold", Rgb(0xff, 0xd7, 0x00)),
    ("ivory", Rgb(0xff, 0xff, 0xf0)),
    ("beige", Rgb(0xf5, 0xf5, 0xdc)),
    ("lavender", Rgb(0xe6, 0xe6, 0xfa)),
];

/// Parses `#rgb`, `#rrggbb` or a common CSS color name.
pub fn parse_color(input: &str) -> Option<Rgb> {
    let value = input.trim();
    if let Some(hex) = value.strip_prefix('#') {
        return parse_hex(hex);
    }
    let lower = value.to_ascii_lowercase();
    NAMED_COLORS
        .iter()
        .find(|(name, _)| *name == lower)
        .map(|(_, rgb)| *rgb)
}

fn parse_hex(hex: &str) -> Option<Rgb> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    match hex.len() {
        3 => {
            let digit = |idx: usize| u8::from_str_radix(&hex[idx..idx + 1], 16).ok();
            let (r, g, b) = (digit(0)?, digit(1)?, digit(2)?);
            Some(Rgb(r * 17, g * 17, b * 17))
        }
        6 => {
            let byte = |idx: usize| u8::from_str_radix(&hex[idx..idx + 2], 16).ok();
            Some(Rgb(byte(0)?, byte(2)?, byte(4)?))
        }
        _ => None,
    }
}
