//! A provider that records calls instead of drawing.

use super::Provider;
use crate::cell::Cell;
use crate::config::Config;
use crate::props::{BarcodeProps, CellStyle, RectProps, TextProps};

/// A single recorded provider call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    AddPage,
    CreateCol {
        width: f64,
        height: f64,
        /// Config debug flag at the time of the call.
        debug: bool,
        style: Option<CellStyle>,
    },
    BarCode {
        code: String,
        cell: Cell,
        props: BarcodeProps,
    },
    MatrixCode {
        code: String,
        cell: Cell,
        props: RectProps,
    },
    QrCode {
        code: String,
        cell: Cell,
        props: RectProps,
    },
    Text {
        text: String,
        cell: Cell,
        props: TextProps,
    },
}

impl DrawCall {
    /// Content string of a leaf call, `None` for pages and columns.
    pub fn content(&self) -> Option<&str> {
        match self {
            DrawCall::AddPage | DrawCall::CreateCol { .. } => None,
            DrawCall::BarCode { code, .. }
            | DrawCall::MatrixCode { code, .. }
            | DrawCall::QrCode { code, .. } => Some(code.as_str()),
            DrawCall::Text { text, .. } => Some(text.as_str()),
        }
    }

    /// Cell of a leaf call, `None` for pages and columns.
    pub fn cell(&self) -> Option<&Cell> {
        match self {
            DrawCall::AddPage | DrawCall::CreateCol { .. } => None,
            DrawCall::BarCode { cell, .. }
            | DrawCall::MatrixCode { cell, .. }
            | DrawCall::QrCode { cell, .. }
            | DrawCall::Text { cell, .. } => Some(cell),
        }
    }
}

/// Records every provider call in order.
///
/// ## Example
///
/// ```
/// use tabula::cell::Cell;
/// use tabula::components::{Barcode, Component};
/// use tabula::provider::{DrawCall, RecordingProvider};
///
/// let mut provider = RecordingProvider::new();
/// Barcode::new("123").render(&mut provider, &Cell::sized(50.0, 10.0))?;
///
/// assert!(matches!(&provider.calls()[0], DrawCall::BarCode { code, .. } if code == "123"));
/// # Ok::<(), tabula::TabulaError>(())
/// ```
#[derive(Debug, Default)]
pub struct RecordingProvider {
    calls: Vec<DrawCall>,
}

impl RecordingProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    pub fn into_calls(self) -> Vec<DrawCall> {
        self.calls
    }

    pub fn len(&self) -> usize {
        self.calls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }

    /// Number of `create_col` calls.
    pub fn col_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::CreateCol { .. }))
            .count()
    }

    /// Number of `add_page` calls.
    pub fn page_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::AddPage))
            .count()
    }

    /// Contents of all leaf calls, in call order.
    pub fn contents(&self) -> Vec<&str> {
        self.calls.iter().filter_map(DrawCall::content).collect()
    }
}

impl Provider for RecordingProvider {
    fn add_page(&mut self) {
        self.calls.push(DrawCall::AddPage);
    }

    fn create_col(&mut self, width: f64, height: f64, config: &Config, style: Option<&CellStyle>) {
        self.calls.push(DrawCall::CreateCol {
            width,
            height,
            debug: config.debug,
            style: style.cloned(),
        });
    }

    fn add_bar_code(&mut self, code: &str, cell: &Cell, props: &BarcodeProps) {
        self.calls.push(DrawCall::BarCode {
            code: code.to_string(),
            cell: *cell,
            props: props.clone(),
        });
    }

    fn add_matrix_code(&mut self, code: &str, cell: &Cell, props: &RectProps) {
        self.calls.push(DrawCall::MatrixCode {
            code: code.to_string(),
            cell: *cell,
            props: props.clone(),
        });
    }

    fn add_qr_code(&mut self, code: &str, cell: &Cell, props: &RectProps) {
        self.calls.push(DrawCall::QrCode {
            code: code.to_string(),
            cell: *cell,
            props: props.clone(),
        });
    }

    fn add_text(&mut self, text: &str, cell: &Cell, props: &TextProps) {
        self.calls.push(DrawCall::Text {
            text: text.to_string(),
            cell: *cell,
            props: props.clone(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let config = Config::default();
        let mut provider = RecordingProvider::new();

        provider.add_page();
        provider.create_col(10.0, 5.0, &config, None);
        provider.add_qr_code("q", &Cell::sized(10.0, 5.0), &RectProps::default());
        provider.add_text("t", &Cell::sized(10.0, 5.0), &TextProps::default());

        assert_eq!(provider.len(), 4);
        assert_eq!(provider.page_count(), 1);
        assert_eq!(provider.col_count(), 1);
        assert_eq!(provider.contents(), ["q", "t"]);
        assert_eq!(provider.calls()[0], DrawCall::AddPage);
    }

    #[test]
    fn test_create_col_captures_debug_and_style() {
        let config = Config::builder().debug(true).build();
        let style = CellStyle::default();
        let mut provider = RecordingProvider::new();

        provider.create_col(1.0, 2.0, &config, Some(&style));

        assert_eq!(
            provider.into_calls(),
            vec![DrawCall::CreateCol {
                width: 1.0,
                height: 2.0,
                debug: true,
                style: Some(style),
            }]
        );
    }
}
