//! # Column
//!
//! A horizontal slot of a row, holding an ordered list of components.

use std::sync::Arc;

use serde_json::json;

use super::Component;
use crate::cell::Cell;
use crate::config::Config;
use crate::error::{Result, TabulaError};
use crate::props::CellStyle;
use crate::provider::Provider;
use crate::structure::Node;

/// A column of `size` grid units, or an auto-max column spanning the whole
/// grid.
///
/// Children share the column's cell: the column draws its own region and
/// then renders each child, in order, into the same geometry.
///
/// ## Example
///
/// ```
/// use tabula::components::{Barcode, Col, Text};
///
/// let fixed = Col::new(6).add(Barcode::new("12345"));
/// assert_eq!(fixed.size()?, 6);
///
/// // Auto-max: width comes from the config
/// let full = Col::max().add(Text::new("Total"));
/// assert!(full.size().is_err());
/// # Ok::<(), tabula::TabulaError>(())
/// ```
pub struct Col {
    size: usize,
    is_max: bool,
    components: Vec<Box<dyn Component>>,
    config: Option<Arc<Config>>,
    style: Option<CellStyle>,
}

impl Col {
    /// Create a column of a fixed size in grid units.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            is_max: false,
            components: Vec::new(),
            config: None,
            style: None,
        }
    }

    /// Create an auto-max column, sized to the config's `max_grid_size`.
    pub fn max() -> Self {
        Self {
            is_max: true,
            ..Self::new(0)
        }
    }

    /// Add a child component.
    ///
    /// If the column is already configured the child receives the same config.
    pub fn add<C: Component + 'static>(mut self, component: C) -> Self {
        self.push(Box::new(component));
        self
    }

    /// Add multiple child components.
    pub fn add_all<I, C>(mut self, components: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Component + 'static,
    {
        for c in components {
            self.push(Box::new(c));
        }
        self
    }

    fn push(&mut self, mut component: Box<dyn Component>) {
        if let Some(config) = &self.config {
            component.set_config(Arc::clone(config));
        }
        self.components.push(component);
    }

    /// Set the style used when the column's cell is created.
    pub fn with_style(mut self, style: CellStyle) -> Self {
        self.style = Some(style);
        self
    }

    pub fn style(&self) -> Option<&CellStyle> {
        self.style.as_ref()
    }

    pub fn is_max(&self) -> bool {
        self.is_max
    }

    pub fn components(&self) -> &[Box<dyn Component>] {
        &self.components
    }

    /// Effective size in grid units.
    ///
    /// Auto-max columns read `max_grid_size` from the config on every call,
    /// and fail with [`TabulaError::ConfigNotSet`] before one is attached.
    pub fn size(&self) -> Result<usize> {
        if !self.is_max {
            return Ok(self.size);
        }

        self.config
            .as_ref()
            .map(|config| config.max_grid_size)
            .ok_or_else(|| TabulaError::config_not_set("col"))
    }

    /// Render into `cell`, first materializing the column region when
    /// `create_cell` is set.
    pub fn render_cell(&self, provider: &mut dyn Provider, cell: &Cell, create_cell: bool) -> Result<()> {
        if create_cell {
            let config = self
                .config
                .as_deref()
                .ok_or_else(|| TabulaError::config_not_set("col"))?;
            provider.create_col(cell.width, cell.height, config, self.style.as_ref());
        }

        for component in &self.components {
            component.render(provider, cell)?;
        }

        Ok(())
    }
}

impl Component for Col {
    fn render(&self, provider: &mut dyn Provider, cell: &Cell) -> Result<()> {
        self.render_cell(provider, cell, true)
    }

    fn structure(&self) -> Node {
        let mut details = self.style.as_ref().map(CellStyle::to_map).unwrap_or_default();
        if self.is_max {
            details.insert("is_max".into(), json!(true));
        }

        let mut node = Node::new("col", self.size).with_details(details);
        for component in &self.components {
            node.add_child(component.structure());
        }
        node
    }

    fn set_config(&mut self, config: Arc<Config>) {
        self.config = Some(Arc::clone(&config));
        for component in &mut self.components {
            component.set_config(Arc::clone(&config));
        }
    }

    fn config(&self) -> Option<&Arc<Config>> {
        self.config.as_ref()
    }
}
