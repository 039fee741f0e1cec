//! # Code Components
//!
//! Leaf components for 1D barcodes, matrix codes (Data Matrix) and QR codes.
//!
//! Each renders with a single provider call and exports its content as the
//! structure value. Props are normalized on the way in, so what the provider
//! receives is always drawable.

use std::sync::Arc;

use super::{Col, Component, Row};
use crate::cell::Cell;
use crate::config::Config;
use crate::error::Result;
use crate::props::{BarcodeKind, BarcodeProps, RectProps};
use crate::provider::Provider;
use crate::structure::Node;

/// A 1D barcode component.
///
/// ## Example
///
/// ```
/// use tabula::components::Barcode;
/// use tabula::props::{BarcodeKind, BarcodeProps};
///
/// // Code128 with default props
/// let barcode = Barcode::new("Hello World");
///
/// // EAN-13, centered at half the cell
/// let barcode = Barcode::ean13("5901234123457").with_props(BarcodeProps {
///     percent: 50.0,
///     center: true,
///     kind: BarcodeKind::Ean13,
///     ..Default::default()
/// });
/// assert_eq!(barcode.props().percent, 50.0);
/// ```
pub struct Barcode {
    code: String,
    props: BarcodeProps,
    config: Option<Arc<Config>>,
}

impl Barcode {
    /// Create a Code128 barcode with default props.
    pub fn new(code: impl Into<String>) -> Self {
        Self::of_kind(code, BarcodeKind::Code128)
    }

    /// Create a Code39 barcode.
    ///
    /// Code39 supports: A-Z, 0-9, space, - . $ / % +
    pub fn code39(code: impl Into<String>) -> Self {
        Self::of_kind(code, BarcodeKind::Code39)
    }

    /// Create a Code128 barcode.
    pub fn code128(code: impl Into<String>) -> Self {
        Self::of_kind(code, BarcodeKind::Code128)
    }

    /// Create an EAN-13 barcode.
    ///
    /// EAN-13 requires 12-13 digits.
    pub fn ean13(code: impl Into<String>) -> Self {
        Self::of_kind(code, BarcodeKind::Ean13)
    }

    /// Create a UPC-A barcode.
    ///
    /// UPC-A requires 11-12 digits.
    pub fn upca(code: impl Into<String>) -> Self {
        Self::of_kind(code, BarcodeKind::UpcA)
    }

    /// Create an ITF (Interleaved 2 of 5) barcode.
    ///
    /// ITF requires an even number of digits.
    pub fn itf(code: impl Into<String>) -> Self {
        Self::of_kind(code, BarcodeKind::Itf)
    }

    fn of_kind(code: impl Into<String>, kind: BarcodeKind) -> Self {
        Self {
            code: code.into(),
            props: BarcodeProps {
                kind,
                ..Default::default()
            }
            .into_valid(),
            config: None,
        }
    }

    /// Replace the props. They are normalized before being stored.
    ///
    /// `props.kind` replaces the symbology picked by the constructor, so
    /// `Barcode::ean13(code).with_props(BarcodeProps::default())` is Code128.
    pub fn with_props(mut self, props: BarcodeProps) -> Self {
        self.props = props.into_valid();
        self
    }

    /// Wrap a new barcode in a column of `size` grid units.
    pub fn new_col(size: usize, code: impl Into<String>, props: Option<BarcodeProps>) -> Col {
        Col::new(size).add(Self::new(code).with_props(props.unwrap_or_default()))
    }

    /// Wrap a new barcode in an auto-max column inside a row of `height`.
    pub fn new_row(height: f64, code: impl Into<String>, props: Option<BarcodeProps>) -> Row {
        let col = Col::max().add(Self::new(code).with_props(props.unwrap_or_default()));
        Row::new(height).add(col)
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn props(&self) -> &BarcodeProps {
        &self.props
    }
}

impl Component for Barcode {
    fn render(&self, provider: &mut dyn Provider, cell: &Cell) -> Result<()> {
        provider.add_bar_code(&self.code, cell, &self.props);
        Ok(())
    }

    fn structure(&self) -> Node {
        Node::new("barcode", self.code.as_str()).with_details(self.props.to_map())
    }

    fn set_config(&mut self, config: Arc<Config>) {
        self.config = Some(config);
    }

    fn config(&self) -> Option<&Arc<Config>> {
        self.config.as_ref()
    }
}

/// A matrix code (Data Matrix) component.
///
/// ## Example
///
/// ```
/// use tabula::components::MatrixCode;
/// use tabula::props::RectProps;
///
/// let code = MatrixCode::new("https://example.com").with_props(RectProps {
///     percent: 80.0,
///     center: true,
///     ..Default::default()
/// });
/// assert_eq!(code.props().percent, 80.0);
/// ```
pub struct MatrixCode {
    code: String,
    props: RectProps,
    config: Option<Arc<Config>>,
}

impl MatrixCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            props: RectProps::default().into_valid(),
            config: None,
        }
    }

    /// Replace the props. They are normalized before being stored.
    pub fn with_props(mut self, props: RectProps) -> Self {
        self.props = props.into_valid();
        self
    }

    /// Wrap a new matrix code in a column of `size` grid units.
    pub fn new_col(size: usize, code: impl Into<String>, props: Option<RectProps>) -> Col {
        Col::new(size).add(Self::new(code).with_props(props.unwrap_or_default()))
    }

    /// Wrap a new matrix code in an auto-max column inside a row of `height`.
    pub fn new_row(height: f64, code: impl Into<String>, props: Option<RectProps>) -> Row {
        let col = Col::max().add(Self::new(code).with_props(props.unwrap_or_default()));
        Row::new(height).add(col)
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn props(&self) -> &RectProps {
        &self.props
    }
}

impl Component for MatrixCode {
    fn render(&self, provider: &mut dyn Provider, cell: &Cell) -> Result<()> {
        provider.add_matrix_code(&self.code, cell, &self.props);
        Ok(())
    }

    fn structure(&self) -> Node {
        Node::new("matrixcode", self.code.as_str()).with_details(self.props.to_map())
    }

    fn set_config(&mut self, config: Arc<Config>) {
        self.config = Some(config);
    }

    fn config(&self) -> Option<&Arc<Config>> {
        self.config.as_ref()
    }
}

/// A QR code component.
///
/// ## Example
///
/// ```
/// use tabula::components::QrCode;
///
/// let row = QrCode::new_row(30.0, "https://example.com", None);
/// assert_eq!(row.height(), 30.0);
/// ```
pub struct QrCode {
    code: String,
    props: RectProps,
    config: Option<Arc<Config>>,
}

impl QrCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            props: RectProps::default().into_valid(),
            config: None,
        }
    }

    /// Replace the props. They are normalized before being stored.
    pub fn with_props(mut self, props: RectProps) -> Self {
        self.props = props.into_valid();
        self
    }

    /// Wrap a new QR code in a column of `size` grid units.
    pub fn new_col(size: usize, code: impl Into<String>, props: Option<RectProps>) -> Col {
        Col::new(size).add(Self::new(code).with_props(props.unwrap_or_default()))
    }

    /// Wrap a new QR code in an auto-max column inside a row of `height`.
    pub fn new_row(height: f64, code: impl Into<String>, props: Option<RectProps>) -> Row {
        let col = Col::max().add(Self::new(code).with_props(props.unwrap_or_default()));
        Row::new(height).add(col)
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn props(&self) -> &RectProps {
        &self.props
    }
}

impl Component for QrCode {
    fn render(&self, provider: &mut dyn Provider, cell: &Cell) -> Result<()> {
        provider.add_qr_code(&self.code, cell, &self.props);
        Ok(())
    }

    fn structure(&self) -> Node {
        Node::new("qrcode", self.code.as_str()).with_details(self.props.to_map())
    }

    fn set_config(&mut self, config: Arc<Config>) {
        self.config = Some(config);
    }

    fn config(&self) -> Option<&Arc<Config>> {
        self.config.as_ref()
    }
}
