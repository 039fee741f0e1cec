//! # Page Sizes
//!
//! Standard paper formats, in millimeters (portrait).
//!
//! | Format | Width | Height |
//! |--------|-------|--------|
//! | A1 | 594.0 | 841.0 |
//! | A2 | 419.9 | 594.0 |
//! | A3 | 297.0 | 419.9 |
//! | A4 | 210.0 | 297.0 |
//! | A5 | 148.4 | 210.0 |
//! | A6 | 105.0 | 148.5 |
//! | Letter | 215.9 | 279.4 |
//! | Legal | 215.9 | 355.6 |
//! | Tabloid | 279.4 | 431.8 |
//!
//! ## Usage
//!
//! ```
//! use tabula::config::PageSize;
//!
//! let (width, height) = PageSize::A4.dimensions();
//! assert_eq!((width, height), (210.0, 297.0));
//! assert_eq!(PageSize::parse("letter"), Ok(PageSize::Letter));
//! ```

use serde::{Deserialize, Serialize};

/// A standard paper format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageSize {
    A1,
    A2,
    A3,
    #[default]
    A4,
    A5,
    A6,
    Letter,
    Legal,
    Tabloid,
}

impl PageSize {
    /// Portrait `(width, height)` in millimeters.
    pub fn dimensions(&self) -> (f64, f64) {
        match self {
            PageSize::A1 => (594.0, 841.0),
            PageSize::A2 => (419.9, 594.0),
            PageSize::A3 => (297.0, 419.9),
            PageSize::A4 => (210.0, 297.0),
            PageSize::A5 => (148.4, 210.0),
            PageSize::A6 => (105.0, 148.5),
            PageSize::Letter => (215.9, 279.4),
            PageSize::Legal => (215.9, 355.6),
            PageSize::Tabloid => (279.4, 431.8),
        }
    }

    /// Short lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            PageSize::A1 => "a1",
            PageSize::A2 => "a2",
            PageSize::A3 => "a3",
            PageSize::A4 => "a4",
            PageSize::A5 => "a5",
            PageSize::A6 => "a6",
            PageSize::Letter => "letter",
            PageSize::Legal => "legal",
            PageSize::Tabloid => "tabloid",
        }
    }

    /// Parse a page size name, case-insensitively.
    pub fn parse(s: &str) -> Result<Self, String> {
        let wanted = s.trim().to_lowercase();
        Self::all()
            .into_iter()
            .find(|size| size.name() == wanted)
            .ok_or_else(|| {
                format!(
                    "Unknown page size '{}'. Expected one of: {}",
                    s,
                    Self::all()
                        .iter()
                        .map(PageSize::name)
                        .collect::<Vec<_>>()
                        .join(", ")
                )
            })
    }

    /// All built-in sizes.
    pub fn all() -> Vec<Self> {
        vec![
            Self::A1,
            Self::A2,
            Self::A3,
            Self::A4,
            Self::A5,
            Self::A6,
            Self::Letter,
            Self::Legal,
            Self::Tabloid,
        ]
    }
}
