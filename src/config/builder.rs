//! Builder for [`Config`].
//!
//! Invalid values are ignored (the previous or default value stays) and
//! logged at debug level; building never fails.

use chrono::{DateTime, Utc};

use super::{Config, Dimensions, Margins, Metadata, Orientation, PageNumber, PageSize, Place, Utf8Text};
use crate::props::Font;

/// Builder for [`Config`].
///
/// ## Example
///
/// ```
/// use tabula::config::{ConfigBuilder, Orientation, PageSize, Place};
///
/// let config = ConfigBuilder::new()
///     .page_size(PageSize::A5)
///     .orientation(Orientation::Horizontal)
///     .page_number("{current}/{total}", Place::Bottom)
///     .build();
///
/// assert_eq!(config.dimensions.width, 210.0);
/// assert!(config.page_number.is_some());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    page_size: Option<PageSize>,
    dimensions: Option<Dimensions>,
    orientation: Orientation,
    margins: Margins,
    debug: bool,
    max_grid_size: usize,
    default_font: Font,
    page_number: Option<PageNumber>,
    metadata: Metadata,
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            page_size: None,
            dimensions: None,
            orientation: Orientation::Vertical,
            margins: Margins::default(),
            debug: false,
            max_grid_size: Config::DEFAULT_MAX_GRID_SIZE,
            default_font: Font::default(),
            page_number: None,
            metadata: Metadata::default(),
        }
    }

    /// Use a standard page size (default A4).
    pub fn page_size(mut self, size: PageSize) -> Self {
        self.page_size = Some(size);
        self
    }

    /// Use custom page dimensions in millimeters. Overrides the page size.
    pub fn dimensions(mut self, width: f64, height: f64) -> Self {
        if width <= 0.0 || height <= 0.0 {
            log::debug!("ignoring page dimensions {}x{}: both must be positive", width, height);
            return self;
        }
        self.dimensions = Some(Dimensions { width, height });
        self
    }

    /// Swap to landscape. Only applies to page sizes, not custom dimensions.
    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Set left, top and right margins. The bottom margin is fixed.
    pub fn margins(mut self, left: f64, top: f64, right: f64) -> Self {
        if left < 0.0 || top < 0.0 || right < 0.0 {
            log::debug!("ignoring margins ({}, {}, {}): negative value", left, top, right);
            return self;
        }
        self.margins.left = left;
        self.margins.top = top;
        self.margins.right = right;
        self
    }

    /// Ask the provider to outline every region.
    pub fn debug(mut self, on: bool) -> Self {
        self.debug = on;
        self
    }

    /// Set the number of grid units in a full row.
    pub fn max_grid_size(mut self, size: usize) -> Self {
        if size == 0 {
            log::debug!("ignoring max grid size 0");
            return self;
        }
        self.max_grid_size = size;
        self
    }

    /// Override default font fields. An empty family or a non-positive size
    /// keeps the current value.
    pub fn default_font(mut self, font: Font) -> Self {
        if !font.family.is_empty() {
            self.default_font.family = font.family;
        }
        if font.size > 0.0 {
            self.default_font.size = font.size;
        }
        self.default_font.style = font.style;
        self.default_font.color = font.color;
        self
    }

    /// Write page numbers. The pattern must contain `{current}` or `{total}`.
    pub fn page_number(mut self, pattern: impl Into<String>, place: Place) -> Self {
        let pattern = pattern.into();
        if !pattern.contains(PageNumber::CURRENT) && !pattern.contains(PageNumber::TOTAL) {
            log::debug!("ignoring page number pattern {:?}: no placeholder", pattern);
            return self;
        }
        self.page_number = Some(PageNumber { pattern, place });
        self
    }

    pub fn author(mut self, author: impl Into<String>, utf8: bool) -> Self {
        self.metadata.author = Self::text(author.into(), utf8);
        self
    }

    pub fn creator(mut self, creator: impl Into<String>, utf8: bool) -> Self {
        self.metadata.creator = Self::text(creator.into(), utf8);
        self
    }

    pub fn subject(mut self, subject: impl Into<String>, utf8: bool) -> Self {
        self.metadata.subject = Self::text(subject.into(), utf8);
        self
    }

    pub fn title(mut self, title: impl Into<String>, utf8: bool) -> Self {
        self.metadata.title = Self::text(title.into(), utf8);
        self
    }

    pub fn creation_date(mut self, date: DateTime<Utc>) -> Self {
        self.metadata.creation_date = Some(date);
        self
    }

    fn text(text: String, utf8: bool) -> Option<Utf8Text> {
        (!text.is_empty()).then_some(Utf8Text { text, utf8 })
    }

    pub fn build(self) -> Config {
        let dimensions = self.resolve_dimensions();
        Config {
            dimensions,
            margins: self.margins,
            debug: self.debug,
            max_grid_size: self.max_grid_size,
            default_font: self.default_font,
            page_number: self.page_number,
            metadata: self.metadata,
        }
    }

    fn resolve_dimensions(&self) -> Dimensions {
        if let Some(dimensions) = self.dimensions {
            return dimensions;
        }

        let (width, height) = self.page_size.unwrap_or_default().dimensions();
        if self.orientation == Orientation::Horizontal && height > width {
            Dimensions {
                width: height,
                height: width,
            }
        } else {
            Dimensions { width, height }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::props::{Color, FontStyle};

    #[test]
    fn test_custom_dimensions_override_page_size() {
        let config = ConfigBuilder::new()
            .page_size(PageSize::A3)
            .dimensions(100.0, 50.0)
            .build();
        assert_eq!(config.dimensions, Dimensions { width: 100.0, height: 50.0 });
    }

    #[test]
    fn test_invalid_dimensions_ignored() {
        let config = ConfigBuilder::new().dimensions(0.0, 50.0).build();
        assert_eq!(config.dimensions, Dimensions { width: 210.0, height: 297.0 });
    }

    #[test]
    fn test_horizontal_swaps_page_size() {
        let config = ConfigBuilder::new()
            .orientation(Orientation::Horizontal)
            .build();
        assert_eq!(config.dimensions, Dimensions { width: 297.0, height: 210.0 });
    }

    #[test]
    fn test_negative_margins_ignored() {
        let config = ConfigBuilder::new().margins(-1.0, 5.0, 5.0).build();
        assert_eq!(config.margins, Margins::default());

        let config = ConfigBuilder::new().margins(5.0, 6.0, 7.0).build();
        assert_eq!(config.margins.left, 5.0);
        assert_eq!(config.margins.top, 6.0);
        assert_eq!(config.margins.right, 7.0);
        assert_eq!(config.margins.bottom, Margins::DEFAULT_BOTTOM);
    }

    #[test]
    fn test_zero_grid_size_ignored() {
        assert_eq!(ConfigBuilder::new().max_grid_size(0).build().max_grid_size, 12);
        assert_eq!(ConfigBuilder::new().max_grid_size(24).build().max_grid_size, 24);
    }

    #[test]
    fn test_default_font_partial_override() {
        let config = ConfigBuilder::new()
            .default_font(Font {
                family: String::new(),
                size: 0.0,
                style: FontStyle::Bold,
                color: Color::RED,
            })
            .build();

        assert_eq!(config.default_font.family, "arial");
        assert_eq!(config.default_font.size, 10.0);
        assert_eq!(config.default_font.style, FontStyle::Bold);
        assert_eq!(config.default_font.color, Color::RED);
    }

    #[test]
    fn test_page_number_requires_placeholder() {
        let config = ConfigBuilder::new().page_number("Page", Place::Bottom).build();
        assert!(config.page_number.is_none());

        let config = ConfigBuilder::new().page_number("{total}", Place::Top).build();
        assert_eq!(config.page_number.map(|p| p.place), Some(Place::Top));
    }

    #[test]
    fn test_empty_metadata_ignored() {
        let config = ConfigBuilder::new().author("", true).subject("Invoices", false).build();
        assert!(config.metadata.author.is_none());
        assert_eq!(
            config.metadata.subject,
            Some(Utf8Text {
                text: "Invoices".into(),
                utf8: false
            })
        );
    }
}
