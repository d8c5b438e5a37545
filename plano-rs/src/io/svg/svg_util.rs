use crate::geometry::primitives::Rect;
use anyhow::{Result, ensure};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use svg::node::element::Path;
use svg::node::element::path::Data;

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgDrawOptions {
    ///The theme to use for the svg
    #[serde(default)]
    pub theme: SvgLayoutTheme,
    ///Draw the net pattern inside every tile, offset by the print margins
    #[serde(default = "default_true")]
    pub net_pattern: bool,
    ///Print piece count, sheet size and efficiency above the sheet
    #[serde(default = "default_true")]
    pub label: bool,
}

fn default_true() -> bool {
    true
}

impl Default for SvgDrawOptions {
    fn default() -> Self {
        Self {
            theme: SvgLayoutTheme::default(),
            net_pattern: true,
            label: true,
        }
    }
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgLayoutTheme {
    pub stroke_width_multiplier: f64,
    pub sheet_fill: Color,
    pub tile_fill: Color,
    pub pattern_fill: Color,
    pub rotated_pattern_fill: Color,
    pub pattern_stroke: Color,
}

impl Default for SvgLayoutTheme {
    fn default() -> Self {
        SvgLayoutTheme::PRINT_SHOP
    }
}

impl SvgLayoutTheme {
    pub const PRINT_SHOP: SvgLayoutTheme = SvgLayoutTheme {
        stroke_width_multiplier: 2.0,
        sheet_fill: Color(0xFF, 0xFF, 0xFF),
        tile_fill: Color(0xF0, 0xF0, 0xF0),
        pattern_fill: Color(0x87, 0xCE, 0xEB),         // SKY BLUE
        rotated_pattern_fill: Color(0xFF, 0xA5, 0x00), // ORANGE
        pattern_stroke: Color(0x00, 0x00, 0xFF),
    };

    pub const GRAY: SvgLayoutTheme = SvgLayoutTheme {
        stroke_width_multiplier: 2.5,
        sheet_fill: Color(0xD3, 0xD3, 0xD3),
        tile_fill: Color(0xE8, 0xE8, 0xE8),
        pattern_fill: Color(0x7A, 0x7A, 0x7A),
        rotated_pattern_fill: Color(0x63, 0x63, 0x63),
        pattern_stroke: Color(0x2D, 0x2D, 0x2D),
    };
}

pub fn change_brightness(color: Color, fraction: f64) -> Color {
    let Color(r, g, b) = color;

    let r = (r as f64 * fraction) as u8;
    let g = (g as f64 * fraction) as u8;
    let b = (b as f64 * fraction) as u8;
    Color(r, g, b)
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Color(pub u8, pub u8, pub u8);

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl FromStr for Color {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        ensure!(
            hex.len() == 6 && hex.is_ascii(),
            "invalid color: {s}, expected #RRGGBB"
        );
        let r = u8::from_str_radix(&hex[0..2], 16)?;
        let g = u8::from_str_radix(&hex[2..4], 16)?;
        let b = u8::from_str_radix(&hex[4..6], 16)?;
        Ok(Color(r, g, b))
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<<S as Serializer>::Ok, <S as Serializer>::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("{self}"))
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, <D as Deserializer<'de>>::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Color::from_str(&s).map_err(serde::de::Error::custom)
    }
}

pub fn data_to_path(data: Data, params: &[(&str, &str)]) -> Path {
    let mut path = Path::new();
    for param in params {
        path = path.set(param.0, param.1)
    }
    path.set("d", data)
}

pub fn rect_data(rect: Rect) -> Data {
    Data::new()
        .move_to((rect.x_min, rect.y_min))
        .line_to((rect.x_max, rect.y_min))
        .line_to((rect.x_max, rect.y_max))
        .line_to((rect.x_min, rect.y_max))
        .close()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_parses_with_and_without_hash() {
        assert_eq!(Color::from_str("#87CEEB").unwrap(), Color(0x87, 0xCE, 0xEB));
        assert_eq!(Color::from_str("ffa500").unwrap(), Color(0xFF, 0xA5, 0x00));
        assert_eq!(format!("{}", Color(0x00, 0x00, 0xFF)), "#0000FF");
    }

    #[test]
    fn malformed_colors_are_rejected() {
        assert!(Color::from_str("#12345").is_err());
        assert!(Color::from_str("#GGGGGG").is_err());
        assert!(serde_json::from_str::<Color>("\"blue\"").is_err());
    }

    #[test]
    fn options_fill_in_defaults() {
        let options: SvgDrawOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, SvgDrawOptions::default());
        let gray: SvgDrawOptions = serde_json::from_str(
            r##"{"theme": {"stroke_width_multiplier": 2.5, "sheet_fill": "#D3D3D3", "tile_fill": "#E8E8E8",
            "pattern_fill": "#7A7A7A", "rotated_pattern_fill": "#636363", "pattern_stroke": "#2D2D2D"},
            "net_pattern": false}"##,
        )
        .unwrap();
        assert_eq!(gray.theme, SvgLayoutTheme::GRAY);
        assert!(!gray.net_pattern);
        assert!(gray.label);
    }
}
