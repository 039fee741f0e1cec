//! Cell-level styling for rows and columns.

use serde::{Deserialize, Serialize};
use serde_json::json;

use super::Color;
use crate::structure::Details;

/// Which sides of a cell get a border.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BorderType {
    #[default]
    None,
    Full,
    Left,
    Right,
    Top,
    Bottom,
}

impl BorderType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BorderType::None => "none",
            BorderType::Full => "full",
            BorderType::Left => "left",
            BorderType::Right => "right",
            BorderType::Top => "top",
            BorderType::Bottom => "bottom",
        }
    }
}

/// Stroke pattern for borders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineStyle {
    #[default]
    Solid,
    Dashed,
}

impl LineStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineStyle::Solid => "solid",
            LineStyle::Dashed => "dashed",
        }
    }
}

/// Visual properties applied when a row or column region is created.
///
/// ## Example
///
/// ```
/// use tabula::props::{BorderType, CellStyle, Color};
///
/// let style = CellStyle {
///     background_color: Some(Color::rgb(230, 230, 230)),
///     border_type: BorderType::Full,
///     border_thickness: 0.3,
///     ..Default::default()
/// };
/// assert_eq!(style.to_map().len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CellStyle {
    #[serde(default)]
    pub background_color: Option<Color>,
    #[serde(default)]
    pub border_color: Option<Color>,
    #[serde(default)]
    pub border_type: BorderType,
    #[serde(default)]
    pub border_thickness: f64,
    #[serde(default)]
    pub line_style: LineStyle,
}

impl CellStyle {
    /// Export the set fields as structure details.
    pub fn to_map(&self) -> Details {
        let mut map = Details::new();

        if let Some(color) = self.background_color {
            map.insert("prop_background_color".into(), json!(color.to_string()));
        }
        if let Some(color) = self.border_color {
            map.insert("prop_border_color".into(), json!(color.to_string()));
        }
        if self.border_type != BorderType::None {
            map.insert("prop_border_type".into(), json!(self.border_type.as_str()));
        }
        if self.border_thickness != 0.0 {
            map.insert("prop_border_thickness".into(), json!(self.border_thickness));
        }
        if self.line_style != LineStyle::Solid {
            map.insert("prop_line_style".into(), json!(self.line_style.as_str()));
        }

        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_style_map() {
        assert!(CellStyle::default().to_map().is_empty());
    }

    #[test]
    fn test_full_style_map() {
        let style = CellStyle {
            background_color: Some(Color::RED),
            border_color: Some(Color::BLUE),
            border_type: BorderType::Bottom,
            border_thickness: 0.5,
            line_style: LineStyle::Dashed,
        };
        let map = style.to_map();

        assert_eq!(map["prop_background_color"], json!("RGB(255, 0, 0)"));
        assert_eq!(map["prop_border_color"], json!("RGB(0, 0, 255)"));
        assert_eq!(map["prop_border_type"], json!("bottom"));
        assert_eq!(map["prop_border_thickness"], json!(0.5));
        assert_eq!(map["prop_line_style"], json!("dashed"));
    }
}
