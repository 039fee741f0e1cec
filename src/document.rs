//! # Document
//!
//! The root container: stacks rows top to bottom, breaks them into pages and
//! repeats the header and footer on every page.
//!
//! ```
//! use tabula::components::{Barcode, Row, Text};
//! use tabula::config::Config;
//! use tabula::document::Document;
//! use tabula::provider::RecordingProvider;
//!
//! let mut doc = Document::new(Config::default());
//! doc.register_header([Text::new_row(10.0, "INVOICE", None)])?;
//! doc.add_row(Row::new(20.0).add(Barcode::new_col(12, "5901234123457", None)));
//!
//! let mut provider = RecordingProvider::new();
//! let pages = doc.render(&mut provider)?;
//!
//! assert_eq!(pages, 1);
//! assert_eq!(provider.contents(), ["INVOICE", "5901234123457"]);
//! # Ok::<(), tabula::TabulaError>(())
//! ```
//!
//! ## Page geometry
//!
//! ```text
//! ┌──────────────────────────────┐
//! │ top margin (page number)     │
//! ├──────────────────────────────┤
//! │ header rows                  │
//! │ body rows (paginated)        │
//! │ ...                          │
//! │ footer rows                  │
//! ├──────────────────────────────┤
//! │ bottom margin (page number)  │
//! └──────────────────────────────┘
//! ```

use std::sync::Arc;

use crate::cell::Cell;
use crate::components::{Component, ComponentExt, Row, Text};
use crate::config::{Config, PageNumber};
use crate::error::{Result, TabulaError};
use crate::props::TextProps;
use crate::provider::Provider;
use crate::structure::Node;

/// Tolerance for rows that fill a page exactly.
const FIT_EPSILON: f64 = 1e-9;

/// A paginated document.
pub struct Document {
    config: Arc<Config>,
    header: Vec<Row>,
    footer: Vec<Row>,
    rows: Vec<Row>,
}

impl Document {
    pub fn new(config: impl Into<Arc<Config>>) -> Self {
        Self {
            config: config.into(),
            header: Vec::new(),
            footer: Vec::new(),
            rows: Vec::new(),
        }
    }

    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Append a body row. The row receives the document config.
    pub fn add_row(&mut self, mut row: Row) -> &mut Self {
        row.set_config(Arc::clone(&self.config));
        self.rows.push(row);
        self
    }

    /// Append several body rows.
    pub fn add_rows(&mut self, rows: impl IntoIterator<Item = Row>) -> &mut Self {
        for row in rows {
            self.add_row(row);
        }
        self
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Set the rows repeated at the top of every page.
    ///
    /// Fails when header and footer together do not fit in the content area.
    pub fn register_header(&mut self, rows: impl IntoIterator<Item = Row>) -> Result<()> {
        let rows = self.configure(rows);
        let height = section_height(&rows);
        let available = self.config.content_height() - section_height(&self.footer);
        if height > available + FIT_EPSILON {
            return Err(TabulaError::SectionTooTall {
                section: "header",
                height,
                available,
            });
        }

        self.header = rows;
        Ok(())
    }

    /// Set the rows repeated at the bottom of every page.
    ///
    /// Fails when header and footer together do not fit in the content area.
    pub fn register_footer(&mut self, rows: impl IntoIterator<Item = Row>) -> Result<()> {
        let rows = self.configure(rows);
        let height = section_height(&rows);
        let available = self.config.content_height() - section_height(&self.header);
        if height > available + FIT_EPSILON {
            return Err(TabulaError::SectionTooTall {
                section: "footer",
                height,
                available,
            });
        }

        self.footer = rows;
        Ok(())
    }

    fn configure(&self, rows: impl IntoIterator<Item = Row>) -> Vec<Row> {
        rows.into_iter()
            .map(|row| row.configured(Arc::clone(&self.config)))
            .collect()
    }

    /// Height left for body rows on each page.
    pub fn body_height(&self) -> f64 {
        self.config.content_height() - section_height(&self.header) - section_height(&self.footer)
    }

    /// Split the body rows into pages. Never returns zero pages.
    fn paginate(&self) -> Vec<Vec<&Row>> {
        let available = self.body_height();
        let mut pages: Vec<Vec<&Row>> = vec![Vec::new()];
        let mut used = 0.0;

        for row in &self.rows {
            let height = row.height();
            let current_is_empty = pages.last().is_none_or(Vec::is_empty);
            if used + height > available + FIT_EPSILON && !current_is_empty {
                pages.push(Vec::new());
                used = 0.0;
            }
            if height > available + FIT_EPSILON {
                log::warn!(
                    "row of height {} exceeds the page body height {}, it will overflow",
                    height,
                    available
                );
            }

            if let Some(page) = pages.last_mut() {
                page.push(row);
            }
            used += height;
        }

        log::debug!("paginated {} rows into {} pages", self.rows.len(), pages.len());
        pages
    }

    /// Number of pages the document renders to.
    pub fn page_count(&self) -> usize {
        self.paginate().len()
    }

    /// Render every page and return the page count.
    pub fn render(&self, provider: &mut dyn Provider) -> Result<usize> {
        let pages = self.paginate();
        let total = pages.len();
        let config = &self.config;
        let left = config.margins.left;
        let width = config.content_width();

        for (index, rows) in pages.iter().enumerate() {
            log::debug!("rendering page {}/{}", index + 1, total);
            provider.add_page();

            let mut y = config.margins.top;
            for row in self.header.iter().chain(rows.iter().copied()) {
                row.render(provider, &Cell::new(left, y, width, row.height()))?;
                y += row.height();
            }

            let mut y = config.dimensions.height - config.margins.bottom - section_height(&self.footer);
            for row in &self.footer {
                row.render(provider, &Cell::new(left, y, width, row.height()))?;
                y += row.height();
            }

            if let Some(page_number) = &config.page_number {
                self.render_page_number(provider, page_number, index + 1, total)?;
            }
        }

        Ok(total)
    }

    fn render_page_number(
        &self,
        provider: &mut dyn Provider,
        page_number: &PageNumber,
        current: usize,
        total: usize,
    ) -> Result<()> {
        let config = &self.config;
        let cell = if page_number.place.is_top() {
            Cell::new(config.margins.left, 0.0, config.content_width(), config.margins.top)
        } else {
            Cell::new(
                config.margins.left,
                config.dimensions.height - config.margins.bottom,
                config.content_width(),
                config.margins.bottom,
            )
        };

        let props = TextProps {
            align: page_number.place.align(),
            ..Default::default()
        };
        Text::new(page_number.format(current, total))
            .with_props(props)
            .configured(Arc::clone(config))
            .render(provider, &cell)
    }

    /// Export the paginated document as a structure tree.
    pub fn structure(&self) -> Node {
        let pages = self.paginate();
        let mut root = Node::new("document", pages.len()).with_details(self.config.to_map());

        for (index, rows) in pages.iter().enumerate() {
            let mut page = Node::new("page", index + 1);
            for row in self.header.iter().chain(rows.iter().copied()).chain(&self.footer) {
                page.add_child(row.structure());
            }
            root.add_child(page);
        }

        root
    }
}

fn section_height(rows: &[Row]) -> f64 {
    rows.iter().map(Row::height).sum()
}
