//! # Provider
//!
//! The drawing backend boundary. The layout engine depends only on this
//! trait; concrete backends (PDF writers, rasterizers) live outside the crate.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌───────────────┐
//! │ Row / Col   │ ──► │  Provider   │ ──► │ PDF / raster  │
//! │ leaves      │     │  (trait)    │     │ (external)    │
//! └─────────────┘     └─────────────┘     └───────────────┘
//! ```
//!
//! Operations return nothing: drawing failures are the backend's concern and
//! never flow back into the component tree. [`RecordingProvider`] implements
//! the trait by logging every call, which is what the tests render against.

mod recorder;

pub use recorder::*;

use crate::cell::Cell;
use crate::config::Config;
use crate::props::{BarcodeProps, CellStyle, RectProps, TextProps};

/// One method per drawable primitive.
pub trait Provider {
    /// Start a new page.
    fn add_page(&mut self);

    /// Materialize a rectangular region, drawing its style (borders,
    /// background). Called once per rendered column and per styled row.
    fn create_col(&mut self, width: f64, height: f64, config: &Config, style: Option<&CellStyle>);

    fn add_bar_code(&mut self, code: &str, cell: &Cell, props: &BarcodeProps);

    fn add_matrix_code(&mut self, code: &str, cell: &Cell, props: &RectProps);

    fn add_qr_code(&mut self, code: &str, cell: &Cell, props: &RectProps);

    fn add_text(&mut self, text: &str, cell: &Cell, props: &TextProps);
}
