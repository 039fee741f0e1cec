//! Text props.

use serde::{Deserialize, Serialize};
use serde_json::json;

use super::{offset, Align, Color, Font, FontStyle};
use crate::structure::Details;

/// Text props.
///
/// Font fields left as `None` are filled from a default [`Font`] by
/// [`make_valid`](Self::make_valid); the text component resolves them against
/// the document's default font once a config is attached.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TextProps {
    #[serde(default)]
    pub top: f64,
    #[serde(default)]
    pub left: f64,
    #[serde(default)]
    pub right: f64,
    #[serde(default)]
    pub family: Option<String>,
    #[serde(default)]
    pub style: Option<FontStyle>,
    #[serde(default)]
    pub size: Option<f64>,
    #[serde(default)]
    pub align: Align,
    /// Extra space between wrapped lines.
    #[serde(default)]
    pub vertical_padding: f64,
    #[serde(default)]
    pub color: Option<Color>,
}

impl TextProps {
    /// Normalize in place against a fallback font.
    pub fn make_valid(&mut self, font: &Font) {
        self.top = offset(self.top);
        self.left = offset(self.left);
        self.right = offset(self.right);
        self.vertical_padding = offset(self.vertical_padding);

        if self.family.as_deref().is_none_or(str::is_empty) {
            self.family = Some(font.family.clone());
        }
        if self.style.is_none() {
            self.style = Some(font.style);
        }
        if self.size.is_none_or(|size| !(size > 0.0 && size.is_finite())) {
            self.size = Some(font.size);
        }
        if self.color.is_none() {
            self.color = Some(font.color);
        }
    }

    /// Consume and return props normalized against `font`.
    pub fn into_valid(mut self, font: &Font) -> Self {
        self.make_valid(font);
        self
    }

    pub fn to_map(&self) -> Details {
        let mut map = Details::new();

        if self.top != 0.0 {
            map.insert("prop_top".into(), json!(self.top));
        }
        if self.left != 0.0 {
            map.insert("prop_left".into(), json!(self.left));
        }
        if self.right != 0.0 {
            map.insert("prop_right".into(), json!(self.right));
        }
        if let Some(family) = &self.family {
            map.insert("prop_font_family".into(), json!(family));
        }
        if let Some(style) = self.style.filter(|s| *s != FontStyle::Normal) {
            map.insert("prop_font_style".into(), json!(style.as_str()));
        }
        if let Some(size) = self.size {
            map.insert("prop_font_size".into(), json!(size));
        }
        map.insert("prop_align".into(), json!(self.align.as_str()));
        if self.vertical_padding != 0.0 {
            map.insert("prop_vertical_padding".into(), json!(self.vertical_padding));
        }
        if let Some(color) = self.color {
            map.insert("prop_color".into(), json!(color.to_string()));
        }

        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fills_font_fields() {
        let props = TextProps::default().into_valid(&Font::default());

        assert_eq!(props.family.as_deref(), Some("arial"));
        assert_eq!(props.size, Some(10.0));
        assert_eq!(props.style, Some(FontStyle::Normal));
        assert_eq!(props.color, Some(Color::BLACK));
    }

    #[test]
    fn test_keeps_explicit_fields() {
        let font = Font::default();
        let props = TextProps {
            family: Some("courier".into()),
            size: Some(14.0),
            style: Some(FontStyle::Bold),
            top: -4.0,
            ..Default::default()
        }
        .into_valid(&font);

        assert_eq!(props.family.as_deref(), Some("courier"));
        assert_eq!(props.size, Some(14.0));
        assert_eq!(props.style, Some(FontStyle::Bold));
        assert_eq!(props.top, 0.0);
    }

    #[test]
    fn test_empty_family_and_zero_size_fall_back() {
        let props = TextProps {
            family: Some(String::new()),
            size: Some(0.0),
            ..Default::default()
        }
        .into_valid(&Font::default());

        assert_eq!(props.family.as_deref(), Some("arial"));
        assert_eq!(props.size, Some(10.0));
    }

    #[test]
    fn test_non_finite_values_fall_back() {
        let props = TextProps {
            top: f64::NAN,
            left: f64::NAN,
            right: f64::INFINITY,
            vertical_padding: f64::NAN,
            size: Some(f64::NAN),
            ..Default::default()
        }
        .into_valid(&Font::default());

        assert_eq!(props.top, 0.0);
        assert_eq!(props.left, 0.0);
        assert_eq!(props.right, 0.0);
        assert_eq!(props.vertical_padding, 0.0);
        assert_eq!(props.size, Some(10.0));
    }

    #[test]
    fn test_to_map() {
        let props = TextProps {
            align: Align::Center,
            ..Default::default()
        }
        .into_valid(&Font::default());
        let map = props.to_map();

        assert_eq!(map["prop_align"], json!("C"));
        assert_eq!(map["prop_font_family"], json!("arial"));
        assert_eq!(map["prop_color"], json!("RGB(0, 0, 0)"));
        assert!(!map.contains_key("prop_font_style"));
    }
}
