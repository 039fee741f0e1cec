//! # Document Configuration
//!
//! Document-wide layout parameters shared, read-only, by every component of
//! a tree.
//!
//! ## Usage
//!
//! ```
//! use tabula::config::{Config, PageSize};
//!
//! let config = Config::builder()
//!     .page_size(PageSize::Letter)
//!     .max_grid_size(16)
//!     .margins(15.0, 15.0, 15.0)
//!     .build();
//!
//! assert_eq!(config.max_grid_size, 16);
//! assert!((config.content_width() - 185.9).abs() < 1e-9);
//! ```
//!
//! A config is immutable once built. Components hold it as `Arc<Config>`;
//! propagation hands out clones of the same `Arc`, never copies of the config.

mod builder;
mod pagesize;

pub use builder::*;
pub use pagesize::*;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::props::{Align, Font};
use crate::structure::Details;

/// Page dimensions in millimeters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}

/// Page margins in millimeters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Margins {
    pub const DEFAULT_LEFT: f64 = 10.0;
    pub const DEFAULT_TOP: f64 = 10.0;
    pub const DEFAULT_RIGHT: f64 = 10.0;
    pub const DEFAULT_BOTTOM: f64 = 20.0025;
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            left: Self::DEFAULT_LEFT,
            top: Self::DEFAULT_TOP,
            right: Self::DEFAULT_RIGHT,
            bottom: Self::DEFAULT_BOTTOM,
        }
    }
}

/// Page orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    #[default]
    Vertical,
    Horizontal,
}

/// Where the page number is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Place {
    LeftTop,
    Top,
    RightTop,
    LeftBottom,
    Bottom,
    #[default]
    RightBottom,
}

impl Place {
    /// Whether the place is in the top margin.
    pub fn is_top(&self) -> bool {
        matches!(self, Place::LeftTop | Place::Top | Place::RightTop)
    }

    pub fn align(&self) -> Align {
        match self {
            Place::LeftTop | Place::LeftBottom => Align::Left,
            Place::Top | Place::Bottom => Align::Center,
            Place::RightTop | Place::RightBottom => Align::Right,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Place::LeftTop => "left_top",
            Place::Top => "top",
            Place::RightTop => "right_top",
            Place::LeftBottom => "left_bottom",
            Place::Bottom => "bottom",
            Place::RightBottom => "right_bottom",
        }
    }
}

/// Page number pattern, e.g. `"Page {current} of {total}"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageNumber {
    pub pattern: String,
    pub place: Place,
}

impl PageNumber {
    pub const CURRENT: &'static str = "{current}";
    pub const TOTAL: &'static str = "{total}";

    /// Substitute page placeholders.
    pub fn format(&self, current: usize, total: usize) -> String {
        self.pattern
            .replace(Self::CURRENT, &current.to_string())
            .replace(Self::TOTAL, &total.to_string())
    }
}

/// A metadata string with its encoding flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Utf8Text {
    pub text: String,
    pub utf8: bool,
}

/// Document metadata.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Metadata {
    pub author: Option<Utf8Text>,
    pub creator: Option<Utf8Text>,
    pub subject: Option<Utf8Text>,
    pub title: Option<Utf8Text>,
    pub creation_date: Option<DateTime<Utc>>,
}

/// Document configuration.
///
/// Build with [`Config::builder`]; `Config::default()` is the builder's
/// output with no overrides (A4 portrait, 12-unit grid).
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub dimensions: Dimensions,
    pub margins: Margins,
    /// Ask the provider to outline every region.
    pub debug: bool,
    /// Grid units in a full-width row.
    pub max_grid_size: usize,
    pub default_font: Font,
    pub page_number: Option<PageNumber>,
    pub metadata: Metadata,
}

impl Default for Config {
    fn default() -> Self {
        ConfigBuilder::new().build()
    }
}

impl Config {
    pub const DEFAULT_MAX_GRID_SIZE: usize = 12;

    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Page width between the left and right margins.
    pub fn content_width(&self) -> f64 {
        (self.dimensions.width - self.margins.left - self.margins.right).max(0.0)
    }

    /// Page height between the top and bottom margins.
    pub fn content_height(&self) -> f64 {
        (self.dimensions.height - self.margins.top - self.margins.bottom).max(0.0)
    }

    /// Export as structure details.
    pub fn to_map(&self) -> Details {
        let mut map = Details::new();

        map.insert("config_dimension_width".into(), json!(self.dimensions.width));
        map.insert("config_dimension_height".into(), json!(self.dimensions.height));
        map.insert("config_margin_left".into(), json!(self.margins.left));
        map.insert("config_margin_top".into(), json!(self.margins.top));
        map.insert("config_margin_right".into(), json!(self.margins.right));
        map.insert("config_margin_bottom".into(), json!(self.margins.bottom));
        map.insert("config_max_grid_size".into(), json!(self.max_grid_size));
        if self.debug {
            map.insert("config_debug".into(), json!(true));
        }

        map.insert("config_default_font_family".into(), json!(self.default_font.family));
        map.insert("config_default_font_size".into(), json!(self.default_font.size));
        if !self.default_font.style.as_str().is_empty() {
            map.insert("config_default_font_style".into(), json!(self.default_font.style.as_str()));
        }
        map.insert("config_default_font_color".into(), json!(self.default_font.color.to_string()));

        if let Some(page_number) = &self.page_number {
            map.insert("config_page_number_pattern".into(), json!(page_number.pattern));
            map.insert("config_page_number_place".into(), json!(page_number.place.as_str()));
        }

        let texts = [
            ("config_metadata_author", &self.metadata.author),
            ("config_metadata_creator", &self.metadata.creator),
            ("config_metadata_subject", &self.metadata.subject),
            ("config_metadata_title", &self.metadata.title),
        ];
        for (key, text) in texts {
            if let Some(text) = text {
                map.insert(key.into(), json!(text.text));
            }
        }
        if let Some(date) = self.metadata.creation_date {
            map.insert(
                "config_metadata_creation_date".into(),
                json!(date.to_rfc3339_opts(SecondsFormat::Secs, true)),
            );
        }

        map
    }
}
