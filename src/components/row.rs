//! # Row
//!
//! A horizontal band of fixed height, divided among its columns.

use std::sync::Arc;

use super::{Col, Component};
use crate::cell::Cell;
use crate::config::Config;
use crate::error::{Result, TabulaError};
use crate::props::CellStyle;
use crate::provider::Provider;
use crate::structure::Node;

/// A row of columns.
///
/// ## Column widths
///
/// Each column gets `row_width * size / divisor`, where the divisor is
/// `max_grid_size`, or the sum of the column sizes when that sum is larger:
///
/// ```text
/// max_grid_size = 12, row width = 120
///
/// [6][6]        → 60 | 60
/// [4][4]        → 40 | 40 | (40 empty)
/// [8][8]        → 60 | 60          (overflow scales down)
/// ```
///
/// Overflowing rows are not an error: the columns shrink proportionally and
/// still fill the row exactly.
///
/// ## Example
///
/// ```
/// use tabula::components::{Barcode, Col, Row};
///
/// let row = Row::new(10.0)
///     .add(Col::new(6).add(Barcode::new("12345")))
///     .add(Col::new(6).add(Barcode::new("67890")));
/// assert_eq!(row.columns().len(), 2);
/// ```
pub struct Row {
    height: f64,
    columns: Vec<Col>,
    config: Option<Arc<Config>>,
    style: Option<CellStyle>,
}

impl Row {
    /// Create a row with a fixed height.
    pub fn new(height: f64) -> Self {
        Self {
            height,
            columns: Vec::new(),
            config: None,
            style: None,
        }
    }

    /// Add a column.
    ///
    /// If the row is already configured the column receives the same config.
    pub fn add(mut self, col: Col) -> Self {
        self.push(col);
        self
    }

    /// Add multiple columns.
    pub fn add_all<I>(mut self, cols: I) -> Self
    where
        I: IntoIterator<Item = Col>,
    {
        for col in cols {
            self.push(col);
        }
        self
    }

    fn push(&mut self, mut col: Col) {
        if let Some(config) = &self.config {
            col.set_config(Arc::clone(config));
        }
        self.columns.push(col);
    }

    /// Set a style drawn over the whole row region.
    pub fn with_style(mut self, style: CellStyle) -> Self {
        self.style = Some(style);
        self
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn style(&self) -> Option<&CellStyle> {
        self.style.as_ref()
    }

    pub fn columns(&self) -> &[Col] {
        &self.columns
    }

    /// Cells for each column when the row is laid out in `cell`.
    ///
    /// Only the row's own height is used, never `cell.height`.
    pub fn column_cells(&self, cell: &Cell) -> Result<Vec<Cell>> {
        let config = self
            .config
            .as_deref()
            .ok_or_else(|| TabulaError::config_not_set("row"))?;

        let sizes = self
            .columns
            .iter()
            .map(Col::size)
            .collect::<Result<Vec<_>>>()?;
        let divisor = sizes
            .iter()
            .fold(0usize, |sum, size| sum.saturating_add(*size))
            .max(config.max_grid_size);

        let mut x = cell.x;
        let cells = sizes
            .into_iter()
            .map(|size| {
                let width = if divisor == 0 {
                    0.0
                } else {
                    cell.width * size as f64 / divisor as f64
                };
                let col_cell = Cell::new(x, cell.y, width, self.height);
                x += width;
                col_cell
            })
            .collect();

        Ok(cells)
    }
}

impl Component for Row {
    fn render(&self, provider: &mut dyn Provider, cell: &Cell) -> Result<()> {
        let config = self
            .config
            .as_deref()
            .ok_or_else(|| TabulaError::config_not_set("row"))?;
        let cells = self.column_cells(cell)?;

        if let Some(style) = &self.style {
            provider.create_col(cell.width, self.height, config, Some(style));
        }

        for (col, col_cell) in self.columns.iter().zip(&cells) {
            col.render_cell(provider, col_cell, true)?;
        }

        Ok(())
    }

    fn structure(&self) -> Node {
        let details = self.style.as_ref().map(CellStyle::to_map).unwrap_or_default();

        let mut node = Node::new("row", self.height).with_details(details);
        for col in &self.columns {
            node.add_child(col.structure());
        }
        node
    }

    fn set_config(&mut self, config: Arc<Config>) {
        self.config = Some(Arc::clone(&config));
        for col in &mut self.columns {
            col.set_config(Arc::clone(&config));
        }
    }

    fn config(&self) -> Option<&Arc<Config>> {
        self.config.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{Barcode, ComponentExt};
    use crate::props::BorderType;
    use crate::provider::{DrawCall, RecordingProvider};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn config(max_grid_size: usize) -> Arc<Config> {
        Arc::new(Config::builder().max_grid_size(max_grid_size).build())
    }

    fn widths(row: &Row, width: f64) -> Vec<f64> {
        row.column_cells(&Cell::sized(width, 0.0))
            .unwrap()
            .iter()
            .map(|c| c.width)
            .collect()
    }

    #[test]
    fn test_even_split() {
        let row = Row::new(10.0)
            .add(Col::new(6))
            .add(Col::new(6))
            .configured(config(12));
        assert_eq!(widths(&row, 120.0), [60.0, 60.0]);
    }

    #[test]
    fn test_underfull_leaves_gap() {
        let row = Row::new(10.0)
            .add(Col::new(4))
            .add(Col::new(4))
            .configured(config(12));
        assert_eq!(widths(&row, 120.0), [40.0, 40.0]);
    }

    #[test]
    fn test_overflow_scales_proportionally() {
        let row = Row::new(10.0)
            .add(Col::new(8))
            .add(Col::new(8))
            .configured(config(12));
        assert_eq!(widths(&row, 120.0), [60.0, 60.0]);

        let row = Row::new(10.0)
            .add(Col::new(12))
            .add(Col::new(6))
            .configured(config(12));
        let w = widths(&row, 90.0);
        assert_eq!(w, [60.0, 30.0]);
    }

    #[test]
    fn test_huge_sizes_saturate() {
        let row = Row::new(10.0)
            .add(Col::new(usize::MAX))
            .add(Col::new(1))
            .configured(config(12));

        let w = widths(&row, 100.0);
        assert_eq!(w.len(), 2);
        assert!((w[0] - 100.0).abs() < 1e-9);
        assert!(w[1] >= 0.0 && w[1] < 1e-9);

        let calls = row.record(&Cell::sized(100.0, 10.0)).unwrap();
        assert_eq!(calls.len(), 2);
    }

    #[test]
    fn test_max_col_spans_row() {
        let row = Row::new(10.0).add(Col::max()).configured(config(16));
        assert_eq!(widths(&row, 150.0), [150.0]);
    }

    #[test]
    fn test_cells_positioned_left_to_right() {
        let row = Row::new(15.0)
            .add(Col::new(3))
            .add(Col::new(9))
            .configured(config(12));

        let cells = row.column_cells(&Cell::new(10.0, 40.0, 100.0, 500.0)).unwrap();

        assert_eq!(cells[0], Cell::new(10.0, 40.0, 25.0, 15.0));
        assert_eq!(cells[1], Cell::new(35.0, 40.0, 75.0, 15.0));
    }

    #[test]
    fn test_render_without_config_fails() {
        let row = Row::new(10.0).add(Col::new(6));
        let mut provider = RecordingProvider::new();

        let result = row.render(&mut provider, &Cell::sized(100.0, 100.0));

        assert!(matches!(
            result,
            Err(TabulaError::ConfigNotSet { component: "row" })
        ));
        assert!(provider.is_empty());
    }

    #[test]
    fn test_styled_row_creates_region_first() {
        let row = Row::new(10.0)
            .with_style(CellStyle {
                border_type: BorderType::Full,
                ..Default::default()
            })
            .add(Col::new(12).add(Barcode::new("x")))
            .configured(config(12));

        let calls = row.record(&Cell::sized(100.0, 50.0)).unwrap();

        assert_eq!(calls.len(), 3);
        assert!(matches!(
            &calls[0],
            DrawCall::CreateCol { width, height, style: Some(_), .. } if *width == 100.0 && *height == 10.0
        ));
        assert!(matches!(&calls[1], DrawCall::CreateCol { style: None, .. }));
    }

    #[test]
    fn test_set_config_reaches_every_leaf() {
        let cfg = config(12);
        let row = Row::new(10.0)
            .add_all((0..3).map(|i| {
                Col::new(4).add_all((0..2).map(move |j| Barcode::new(format!("{i}-{j}"))))
            }))
            .configured(Arc::clone(&cfg));

        assert!(Arc::ptr_eq(row.config().unwrap(), &cfg));
        for col in row.columns() {
            assert!(Arc::ptr_eq(col.config().unwrap(), &cfg));
            for leaf in col.components() {
                assert!(Arc::ptr_eq(leaf.config().unwrap(), &cfg));
            }
        }
    }

    #[test]
    fn test_structure() {
        let row = Row::new(12.5)
            .add(Col::new(6).add(Barcode::new("a")))
            .add(Col::max());
        let node = row.structure();

        assert_eq!(node.kind, "row");
        assert_eq!(node.value, json!(12.5));
        assert_eq!(node.children.len(), 2);
        assert_eq!(node.children[0].children.len(), 1);
        assert_eq!(node.children[1].details["is_max"], json!(true));
    }
}
