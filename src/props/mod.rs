//! # Props
//!
//! Style and shape descriptors attached to components.
//!
//! Leaf props are always passed through `make_valid` before a component
//! stores them, so a provider never sees a negative offset or a zero percent.
//! Every props type can also export itself as structure details via `to_map`,
//! which only includes fields that differ from their zero value.

mod barcode;
mod cell;
mod rect;
mod text;

pub use barcode::*;
pub use cell::*;
pub use rect::*;
pub use text::*;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Negative and non-finite offsets collapse to zero.
fn offset(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 { value } else { 0.0 }
}

/// An RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const RED: Self = Self::rgb(255, 0, 0);
    pub const GREEN: Self = Self::rgb(0, 255, 0);
    pub const BLUE: Self = Self::rgb(0, 0, 255);

    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RGB({}, {}, {})", self.red, self.green, self.blue)
    }
}

/// Font style options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontStyle {
    #[default]
    Normal,
    Bold,
    Italic,
    BoldItalic,
}

impl FontStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            FontStyle::Normal => "",
            FontStyle::Bold => "B",
            FontStyle::Italic => "I",
            FontStyle::BoldItalic => "BI",
        }
    }
}

/// Horizontal alignment inside a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
    Justify,
}

impl Align {
    pub fn as_str(&self) -> &'static str {
        match self {
            Align::Left => "L",
            Align::Center => "C",
            Align::Right => "R",
            Align::Justify => "J",
        }
    }
}

/// A fully specified font.
///
/// Used as the document-wide default in [`Config`](crate::config::Config)
/// and as the fallback for text props that leave font fields unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Font {
    pub family: String,
    pub style: FontStyle,
    /// Size in points.
    pub size: f64,
    pub color: Color,
}

impl Font {
    pub const DEFAULT_FAMILY: &'static str = "arial";
    pub const DEFAULT_SIZE: f64 = 10.0;
}

impl Default for Font {
    fn default() -> Self {
        Self {
            family: Self::DEFAULT_FAMILY.to_string(),
            style: FontStyle::Normal,
            size: Self::DEFAULT_SIZE,
            color: Color::BLACK,
        }
    }
}
