// File: crates/chart-core/src/color.rs
// Summary: RGBA color with CSS-style parsing (hex, rgb()/rgba(), hsl()/hsla(), named colors).

use std::fmt;
use std::str::FromStr;

use crate::error::ChartError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Color = Color::from_argb(0, 0, 0, 0);
    pub const BLACK: Color = Color::from_rgb(0, 0, 0);
    pub const WHITE: Color = Color::from_rgb(255, 255, 255);

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self { Self { r, g, b, a: 255 } }
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self { Self { r, g, b, a } }

    /// Parse a CSS color string. Case and surrounding whitespace are ignored.
    pub fn parse(input: &str) -> Result<Self, ChartError> {
        let invalid = || ChartError::InvalidColor(input.to_string());
        let s = input.trim().to_ascii_lowercase();
        if let Some(hex) = s.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(invalid);
        }
        if let Some(body) = s.strip_prefix("rgba(").or_else(|| s.strip_prefix("rgb(")) {
            return body.strip_suffix(')').and_then(parse_rgb_fn).ok_or_else(invalid);
        }
        if let Some(body) = s.strip_prefix("hsla(").or_else(|| s.strip_prefix("hsl(")) {
            return body.strip_suffix(')').and_then(parse_hsl_fn).ok_or_else(invalid);
        }
        named(&s).ok_or_else(invalid)
    }

    /// `#rrggbb`, or `rgba(...)` when not opaque.
    pub fn to_css(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("rgba({},{},{},{:.3})", self.r, self.g, self.b, self.a as f64 / 255.0)
        }
    }
}

impl FromStr for Color {
    type Err = ChartError;
    fn from_str(s: &str) -> Result<Self, Self::Err> { Color::parse(s) }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.to_css()) }
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17);
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    match hex.len() {
        3 => Some(Color::from_rgb(nibble(0)?, nibble(1)?, nibble(2)?)),
        4 => Some(Color::from_argb(nibble(3)?, nibble(0)?, nibble(1)?, nibble(2)?)),
        6 => Some(Color::from_rgb(byte(0)?, byte(2)?, byte(4)?)),
        8 => Some(Color::from_argb(byte(6)?, byte(0)?, byte(2)?, byte(4)?)),
        _ => None,
    }
}

/// Split a functional-notation body. Accepts both `1, 2, 3, 0.5` and `1 2 3 / 0.5`.
fn fn_args(body: &str) -> Vec<&str> {
    body.split(|c: char| c == ',' || c == '/' || c.is_whitespace()).filter(|p| !p.is_empty()).collect()
}

/// Alpha as a fraction or percentage, clamped to `[0, 1]`.
fn parse_alpha(s: &str) -> Option<u8> {
    let v = match s.strip_suffix('%') {
        Some(p) => p.parse::<f64>().ok()? / 100.0,
        None => s.parse::<f64>().ok()?,
    };
    v.is_finite().then(|| (v.clamp(0.0, 1.0) * 255.0).round() as u8)
}

fn parse_rgb_fn(body: &str) -> Option<Color> {
    let parts = fn_args(body);
    let channel = |s: &str| -> Option<u8> {
        let v = match s.strip_suffix('%') {
            Some(p) => p.parse::<f64>().ok()? * 2.55,
            None => s.parse::<f64>().ok()?,
        };
        v.is_finite().then(|| v.round().clamp(0.0, 255.0) as u8)
    };
    match parts.as_slice() {
        [r, g, b] => Some(Color::from_rgb(channel(r)?, channel(g)?, channel(b)?)),
        [r, g, b, a] => Some(Color::from_argb(parse_alpha(a)?, channel(r)?, channel(g)?, channel(b)?)),
        _ => None,
    }
}

fn parse_hsl_fn(body: &str) -> Option<Color> {
    let parts = fn_args(body);
    let (h, s, l, a) = match parts.as_slice() {
        [h, s, l] => (*h, *s, *l, 255),
        [h, s, l, a] => (*h, *s, *l, parse_alpha(a)?),
        _ => return None,
    };
    let hue = h.strip_suffix("deg").unwrap_or(h).parse::<f64>().ok()?;
    let pct = |v: &str| v.strip_suffix('%')?.parse::<f64>().ok().map(|p| (p / 100.0).clamp(0.0, 1.0));
    let (s, l) = (pct(s)?, pct(l)?);
    if !hue.is_finite() {
        return None;
    }
    let hue = hue.rem_euclid(360.0) / 360.0;
    let m2 = if l <= 0.5 { l * (s + 1.0) } else { l + s - l * s };
    let m1 = l * 2.0 - m2;
    let to_byte = |v: f64| (v * 255.0).round().clamp(0.0, 255.0) as u8;
    Some(Color::from_argb(
        a,
        to_byte(hue_to_rgb(m1, m2, hue + 1.0 / 3.0)),
        to_byte(hue_to_rgb(m1, m2, hue)),
        to_byte(hue_to_rgb(m1, m2, hue - 1.0 / 3.0)),
    ))
}

fn hue_to_rgb(m1: f64, m2: f64, h: f64) -> f64 {
    let h = h.rem_euclid(1.0);
    if h * 6.0 < 1.0 {
        m1 + (m2 - m1) * h * 6.0
    } else if h * 2.0 < 1.0 {
        m2
    } else if h * 3.0 < 2.0 {
        m1 + (m2 - m1) * (2.0 / 3.0 - h) * 6.0
    } else {
        m1
    }
}

/// CSS Color Module Level 4 named colors, sorted for binary search.
const NAMED: &[(&str, u32)] = &[
    ("aliceblue", 0xf0f8ff),
    ("antiquewhite", 0xfaebd7),
    ("aqua", 0x00ffff),
    ("aquamarine", 0x7fffd4),
    ("azure", 0xf0ffff),
    ("beige", 0xf5f5dc),
    ("bisque", 0xffe4c4),
    ("black", 0x000000),
    ("blanchedalmond", 0xffebcd),
    ("blue", 0x0000ff),
    ("blueviolet", 0x8a2be2),
    ("brown", 0xa52a2a),
    ("burlywood", 0xdeb887),
    ("cadetblue", 0x5f9ea0),
    ("chartreuse", 0x7fff00),
    ("chocolate", 0xd2691e),
    ("coral", 0xff7f50),
    ("cornflowerblue", 0x6495ed),
    ("cornsilk", 0xfff8dc),
    ("crimson", 0xdc143c),
    ("cyan", 0x00ffff),
    ("darkblue", 0x00008b),
    ("darkcyan", 0x008b8b),
    ("darkgoldenrod", 0xb8860b),
    ("darkgray", 0xa9a9a9),
    ("darkgreen", 0x006400),
    ("darkgrey", 0xa9a9a9),
    ("darkkhaki", 0xbdb76b),
    ("darkmagenta", 0x8b008b),
    ("darkolivegreen", 0x556b2f),
    ("darkorange", 0xff8c00),
    ("darkorchid", 0x9932cc),
    ("darkred", 0x8b0000),
    ("darksalmon", 0xe9967a),
    ("darkseagreen", 0x8fbc8f),
    ("darkslateblue", 0x483d8b),
    ("darkslategray", 0x2f4f4f),
    ("darkslategrey", 0x2f4f4f),
    ("darkturquoise", 0x00ced1),
    ("darkviolet", 0x9400d3),
    ("deeppink", 0xff1493),
    ("deepskyblue", 0x00bfff),
    ("dimgray", 0x696969),
    ("dimgrey", 0x696969),
    ("dodgerblue", 0x1e90ff),
    ("firebrick", 0xb22222),
    ("floralwhite", 0xfffaf0),
    ("forestgreen", 0x228b22),
    ("fuchsia", 0xff00ff),
    ("gainsboro", 0xdcdcdc),
    ("ghostwhite", 0xf8f8ff),
    ("gold", 0xffd700),
    ("goldenrod", 0xdaa520),
    ("gray", 0x808080),
    ("green", 0x008000),
    ("greenyellow", 0xadff2f),
    ("grey", 0x808080),
    ("honeydew", 0xf0fff0),
    ("hotpink", 0xff69b4),
    ("indianred", 0xcd5c5c),
    ("indigo", 0x4b0082),
    ("ivory", 0xfffff0),
    ("khaki", 0xf0e68c),
    ("lavender", 0xe6e6fa),
    ("lavenderblush", 0xfff0f5),
    ("lawngreen", 0x7cfc00),
    ("lemonchiffon", 0xfffacd),
    ("lightblue", 0xadd8e6),
    ("lightcoral", 0xf08080),
    ("lightcyan", 0xe0ffff),
    ("lightgoldenrodyellow", 0xfafad2),
    ("lightgray", 0xd3d3d3),
    ("lightgreen", 0x90ee90),
    ("lightgrey", 0xd3d3d3),
    ("lightpink", 0xffb6c1),
    ("lightsalmon", 0xffa07a),
    ("lightseagreen", 0x20b2aa),
    ("lightskyblue", 0x87cefa),
    ("lightslategray", 0x778899),
    ("lightslategrey", 0x778899),
    ("lightsteelblue", 0xb0c4de),
    ("lightyellow", 0xffffe0),
    ("lime", 0x00ff00),
    ("limegreen", 0x32cd32),
    ("linen", 0xfaf0e6),
    ("magenta", 0xff00ff),
    ("maroon", 0x800000),
    ("mediumaquamarine", 0x66cdaa),
    ("mediumblue", 0x0000cd),
    ("mediumorchid", 0xba55d3),
    ("mediumpurple", 0x9370db),
    ("mediumseagreen", 0x3cb371),
    ("mediumslateblue", 0x7b68ee),
    ("mediumspringgreen", 0x00fa9a),
    ("mediumturquoise", 0x48d1cc),
    ("mediumvioletred", 0xc71585),
    ("midnightblue", 0x191970),
    ("mintcream", 0xf5fffa),
    ("mistyrose", 0xffe4e1),
    ("moccasin", 0xffe4b5),
    ("navajowhite", 0xffdead),
    ("navy", 0x000080),
    ("oldlace", 0xfdf5e6),
    ("olive", 0x808000),
    ("olivedrab", 0x6b8e23),
    ("orange", 0xffa500),
    ("orangered", 0xff4500),
    ("orchid", 0xda70d6),
    ("palegoldenrod", 0xeee8aa),
    ("palegreen", 0x98fb98),
    ("paleturquoise", 0xafeeee),
    ("palevioletred", 0xdb7093),
    ("papayawhip", 0xffefd5),
    ("peachpuff", 0xffdab9),
    ("peru", 0xcd853f),
    ("pink", 0xffc0cb),
    ("plum", 0xdda0dd),
    ("powderblue", 0xb0e0e6),
    ("purple", 0x800080),
    ("rebeccapurple", 0x663399),
    ("red", 0xff0000),
    ("rosybrown", 0xbc8f8f),
    ("royalblue", 0x4169e1),
    ("saddlebrown", 0x8b4513),
    ("salmon", 0xfa8072),
    ("sandybrown", 0xf4a460),
    ("seagreen", 0x2e8b57),
    ("seashell", 0xfff5ee),
    ("sienna", 0xa0522d),
    ("silver", 0xc0c0c0),
    ("skyblue", 0x87ceeb),
    ("slateblue", 0x6a5acd),
    ("slategray", 0x708090),
    ("slategrey", 0x708090),
    ("snow", 0xfffafa),
    ("springgreen", 0x00ff7f),
    ("steelblue", 0x4682b4),
    ("tan", 0xd2b48c),
    ("teal", 0x008080),
    ("thistle", 0xd8bfd8),
    ("tomato", 0xff6347),
    ("turquoise", 0x40e0d0),
    ("violet", 0xee82ee),
    ("wheat", 0xf5deb3),
    ("white", 0xffffff),
    ("whitesmoke", 0xf5f5f5),
    ("yellow", 0xffff00),
    ("yellowgreen", 0x9acd32),
];

fn named(name: &str) -> Option<Color> {
    if name == "transparent" {
        return Some(Color::TRANSPARENT);
    }
    let i = NAMED.binary_search_by(|(n, _)| n.cmp(&name)).ok()?;
    let rgb = NAMED[i].1;
    Some(Color::from_rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_named_and_hex() {
        assert_eq!(Color::parse("steelblue"), Ok(Color::from_rgb(70, 130, 180)));
        assert_eq!(Color::parse(" Red "), Ok(Color::from_rgb(255, 0, 0)));
        assert_eq!(Color::parse("#f9f9f9"), Ok(Color::from_rgb(0xf9, 0xf9, 0xf9)));
        assert_eq!(Color::parse("#abc"), Ok(Color::from_rgb(0xaa, 0xbb, 0xcc)));
    }

    #[test]
    fn parses_rgb_functions() {
        assert_eq!(Color::parse("rgb(10, 20, 30)"), Ok(Color::from_rgb(10, 20, 30)));
        assert_eq!(Color::parse("rgba(0,0,0,0.5)"), Ok(Color::from_argb(128, 0, 0, 0)));
    }

    #[test]
    fn parses_the_full_named_table() {
        assert_eq!(Color::parse("darkred"), Ok(Color::from_rgb(139, 0, 0)));
        assert_eq!(Color::parse("lavender"), Ok(Color::from_rgb(230, 230, 250)));
        assert_eq!(Color::parse("navajowhite"), Ok(Color::from_rgb(255, 222, 173)));
        assert_eq!(Color::parse("RebeccaPurple"), Ok(Color::from_rgb(0x66, 0x33, 0x99)));
        assert_eq!(Color::parse("transparent"), Ok(Color::TRANSPARENT));
        assert!(NAMED.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn parses_hsl_functions() {
        assert_eq!(Color::parse("hsl(120,100%,50%)"), Ok(Color::from_rgb(0, 255, 0)));
        assert_eq!(Color::parse("hsl(0, 100%, 50%)"), Ok(Color::from_rgb(255, 0, 0)));
        assert_eq!(Color::parse("hsl(240deg 100% 25%)"), Ok(Color::from_rgb(0, 0, 128)));
        assert_eq!(Color::parse("hsla(0, 0%, 0%, 0.5)"), Ok(Color::from_argb(128, 0, 0, 0)));
        assert_eq!(Color::parse("hsl(-120, 100%, 50%)"), Ok(Color::from_rgb(0, 0, 255)));
        assert!(Color::parse("hsl(120, 100, 50%)").is_err());
    }

    #[test]
    fn parses_space_separated_rgb() {
        assert_eq!(Color::parse("rgb(10 20 30 / 50%)"), Ok(Color::from_argb(128, 10, 20, 30)));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(Color::parse("not-a-color"), Err(ChartError::InvalidColor("not-a-color".into())));
        assert!(Color::parse("#12345").is_err());
        assert!(Color::parse("rgb(1,2)").is_err());
    }

    #[test]
    fn css_roundtrip_for_opaque() {
        assert_eq!(Color::from_rgb(70, 130, 180).to_css(), "#4682b4");
    }
}
