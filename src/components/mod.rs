//! # Declarative Components
//!
//! Grid components for building documents declaratively.
//!
//! ## Design Philosophy
//!
//! Instead of positioning drawing calls by hand, you nest rows, columns and
//! leaves and let the tree resolve the geometry:
//!
//! ```
//! use std::sync::Arc;
//! use tabula::cell::Cell;
//! use tabula::components::*;
//! use tabula::config::Config;
//!
//! let mut row = Row::new(20.0)
//!     .add(Col::new(4).add(QrCode::new("https://example.com")))
//!     .add(Col::new(8).add(Barcode::new("5901234123457")));
//!
//! row.set_config(Arc::new(Config::default()));
//!
//! // Render against the recording provider (inspectable)
//! let calls = row.record(&Cell::sized(190.0, 20.0))?;
//! assert_eq!(calls.len(), 4);
//!
//! // Export the structure (no provider involved)
//! let node = row.structure();
//! assert_eq!(node.children.len(), 2);
//! # Ok::<(), tabula::TabulaError>(())
//! ```
//!
//! ## Component Trait
//!
//! All components implement [`Component`]: they render into a [`Provider`],
//! export a [`Node`], and accept a shared config. Containers (`Row`, `Col`)
//! forward all three to their children in declaration order.
//!
//! ## Lifecycle
//!
//! ```text
//! constructed ──set_config──► configured ──► render / structure (repeatable)
//! ```
//!
//! Rendering a row, or a column that creates its cell, before `set_config`
//! fails with [`TabulaError::ConfigNotSet`](crate::TabulaError::ConfigNotSet).
//! `structure()` is legal at any point.

mod code;
mod col;
mod row;
mod text;

pub use code::*;
pub use col::*;
pub use row::*;
pub use text::*;

use std::sync::Arc;

use crate::cell::Cell;
use crate::config::Config;
use crate::error::Result;
use crate::provider::{DrawCall, Provider, RecordingProvider};
use crate::structure::Node;

/// Trait for grid components.
///
/// This is the core abstraction behind the declarative document tree.
/// Components are `Send + Sync` so a finished tree can move to, or be
/// inspected from, another thread.
pub trait Component: Send + Sync {
    /// Draw this component into `cell`.
    fn render(&self, provider: &mut dyn Provider, cell: &Cell) -> Result<()>;

    /// Export a fresh structure node mirroring this component.
    fn structure(&self) -> Node;

    /// Store the config and hand it to every child.
    fn set_config(&mut self, config: Arc<Config>);

    /// The config received through `set_config`, if any.
    fn config(&self) -> Option<&Arc<Config>>;
}

/// Extension trait for rendering and configuring components.
pub trait ComponentExt: Component {
    /// Render into a fresh [`RecordingProvider`] and return the calls.
    fn record(&self, cell: &Cell) -> Result<Vec<DrawCall>> {
        let mut provider = RecordingProvider::new();
        self.render(&mut provider, cell)?;
        Ok(provider.into_calls())
    }

    /// Builder-style `set_config`.
    fn configured(mut self, config: Arc<Config>) -> Self
    where
        Self: Sized,
    {
        self.set_config(config);
        self
    }
}

// Blanket implementation for all components
impl<T: Component + ?Sized> ComponentExt for T {}

// Allow boxed components
impl Component for Box<dyn Component> {
    fn render(&self, provider: &mut dyn Provider, cell: &Cell) -> Result<()> {
        self.as_ref().render(provider, cell)
    }

    fn structure(&self) -> Node {
        self.as_ref().structure()
    }

    fn set_config(&mut self, config: Arc<Config>) {
        self.as_mut().set_config(config);
    }

    fn config(&self) -> Option<&Arc<Config>> {
        self.as_ref().config()
    }
}
