//! # Text Component
//!
//! Text drawn inside its cell, with font fields resolved against the
//! document's default font.

use std::sync::Arc;

use super::{Col, Component, Row};
use crate::cell::Cell;
use crate::config::Config;
use crate::error::Result;
use crate::props::{Align, Color, Font, FontStyle, TextProps};
use crate::provider::Provider;
use crate::structure::Node;

/// A text component with optional styling.
///
/// ## Example
///
/// ```
/// use tabula::components::Text;
///
/// // Simple text
/// let text = Text::new("Hello, World!");
///
/// // Styled text
/// let styled = Text::new("IMPORTANT").bold().center().size(14.0);
/// assert_eq!(styled.props().size, Some(14.0));
/// ```
///
/// Props given by the caller are kept apart from the resolved props: font
/// fields left unset follow `Config::default_font` once a config arrives,
/// and the library default font before that.
pub struct Text {
    text: String,
    requested: TextProps,
    props: TextProps,
    config: Option<Arc<Config>>,
}

impl Text {
    /// Create a new text component.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            requested: TextProps::default(),
            props: TextProps::default().into_valid(&Font::default()),
            config: None,
        }
    }

    /// Replace the props. They are normalized before being stored.
    pub fn with_props(mut self, props: TextProps) -> Self {
        self.requested = props;
        self.resolve();
        self
    }

    /// Make the text bold.
    pub fn bold(mut self) -> Self {
        self.requested.style = Some(FontStyle::Bold);
        self.resolve();
        self
    }

    /// Center the text.
    pub fn center(mut self) -> Self {
        self.requested.align = Align::Center;
        self.resolve();
        self
    }

    /// Right-align the text.
    pub fn right(mut self) -> Self {
        self.requested.align = Align::Right;
        self.resolve();
        self
    }

    /// Set the font size in points.
    pub fn size(mut self, size: f64) -> Self {
        self.requested.size = Some(size);
        self.resolve();
        self
    }

    /// Set the text color.
    pub fn color(mut self, color: Color) -> Self {
        self.requested.color = Some(color);
        self.resolve();
        self
    }

    /// Wrap new text in a column of `size` grid units.
    pub fn new_col(size: usize, text: impl Into<String>, props: Option<TextProps>) -> Col {
        Col::new(size).add(Self::new(text).with_props(props.unwrap_or_default()))
    }

    /// Wrap new text in an auto-max column inside a row of `height`.
    pub fn new_row(height: f64, text: impl Into<String>, props: Option<TextProps>) -> Row {
        let col = Col::max().add(Self::new(text).with_props(props.unwrap_or_default()));
        Row::new(height).add(col)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Resolved props, as passed to the provider.
    pub fn props(&self) -> &TextProps {
        &self.props
    }

    fn resolve(&mut self) {
        let fallback = Font::default();
        let font = self
            .config
            .as_deref()
            .map_or(&fallback, |config| &config.default_font);
        self.props = self.requested.clone().into_valid(font);
    }
}

impl Component for Text {
    fn render(&self, provider: &mut dyn Provider, cell: &Cell) -> Result<()> {
        provider.add_text(&self.text, cell, &self.props);
        Ok(())
    }

    fn structure(&self) -> Node {
        Node::new("text", self.text.as_str()).with_details(self.props.to_map())
    }

    fn set_config(&mut self, config: Arc<Config>) {
        self.config = Some(config);
        self.resolve();
    }

    fn config(&self) -> Option<&Arc<Config>> {
        self.config.as_ref()
    }
}
