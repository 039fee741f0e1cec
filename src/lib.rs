//! # Tabula - Declarative Grid Layout Engine
//!
//! Tabula composes printable documents from nested rows, columns and leaf
//! components. It provides:
//!
//! - **Components**: rows, columns, barcodes, matrix codes, QR codes and text
//! - **Layout**: grid-unit column widths, vertical stacking and pagination
//! - **Provider boundary**: a drawing trait any backend can implement
//! - **Structure export**: a serializable mirror of the tree for tests
//!
//! ## Quick Start
//!
//! ```
//! use tabula::{
//!     components::{Barcode, Col, Row, Text},
//!     config::Config,
//!     document::Document,
//!     provider::RecordingProvider,
//! };
//!
//! let config = Config::builder().max_grid_size(12).build();
//! let mut doc = Document::new(config);
//!
//! doc.add_row(
//!     Row::new(10.0)
//!         .add(Col::new(6).add(Barcode::new("12345")))
//!         .add(Col::new(6).add(Text::new("Order #12345"))),
//! );
//!
//! // Any backend implementing Provider works here
//! let mut provider = RecordingProvider::new();
//! doc.render(&mut provider)?;
//!
//! // Inspect the layout without drawing
//! println!("{}", doc.structure().to_json()?);
//! # Ok::<(), tabula::TabulaError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`components`] | Rows, columns and leaf components |
//! | [`document`] | Paginated root container |
//! | [`config`] | Document configuration and builder |
//! | [`props`] | Style and shape descriptors |
//! | [`provider`] | Drawing backend trait and recorder |
//! | [`structure`] | Structure export tree |
//! | [`cell`] | Cell geometry |
//! | [`error`] | Error types |

pub mod cell;
pub mod components;
pub mod config;
pub mod document;
pub mod error;
pub mod props;
pub mod provider;
pub mod structure;

// Re-exports for convenience
pub use config::Config;
pub use error::{Result, TabulaError};
